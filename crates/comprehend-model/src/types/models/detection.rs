/*
[INPUT]:  API schema definitions for real-time analysis results
[OUTPUT]: Detection items (entities, phrases, tokens, sentiment, layout blocks)
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use crate::contract::shape;
use crate::types::Double;
use crate::types::enums::{
    BlockType, DocumentType, EntityType, PageBasedErrorCode, PageBasedWarningCode,
    PartOfSpeechTagType, PiiEntityType, RelationshipType, SentimentType,
    TargetedSentimentEntityType,
};

// ---------------------------------------------------------------------------
// Language, entities, key phrases
// ---------------------------------------------------------------------------

shape! {
    /// A detected language and the confidence of the detection.
    pub struct DominantLanguage {
        /// RFC 5646 language code.
        language_code: String,
        score: Double,
    }
}

shape! {
    /// A named entity found in the text.
    ///
    /// Offsets count characters, not bytes. For semi-structured input the
    /// offsets are relative to the blocks listed in `block_references`.
    pub struct Entity {
        score: Double,
        r#type: EntityType,
        text: String,
        begin_offset: i32,
        end_offset: i32,
        block_references: Vec<BlockReference>,
    }
}

shape! {
    pub struct BlockReference {
        block_id: String,
        begin_offset: i32,
        end_offset: i32,
        child_blocks: Vec<ChildBlock>,
    }
}

shape! {
    pub struct ChildBlock {
        child_block_id: String,
        begin_offset: i32,
        end_offset: i32,
    }
}

shape! {
    pub struct KeyPhrase {
        score: Double,
        text: String,
        begin_offset: i32,
        end_offset: i32,
    }
}

// ---------------------------------------------------------------------------
// Sentiment and syntax
// ---------------------------------------------------------------------------

shape! {
    /// Confidence for each sentiment class.
    pub struct SentimentScore {
        positive: Double,
        negative: Double,
        neutral: Double,
        mixed: Double,
    }
}

shape! {
    pub struct PartOfSpeechTag {
        tag: PartOfSpeechTagType,
        score: Double,
    }
}

shape! {
    /// A word with its part of speech.
    pub struct SyntaxToken {
        /// Identifier unique within the document.
        token_id: i32,
        text: String,
        begin_offset: i32,
        end_offset: i32,
        part_of_speech: PartOfSpeechTag,
    }
}

shape! {
    pub struct MentionSentiment {
        sentiment: SentimentType,
        sentiment_score: SentimentScore,
    }
}

shape! {
    /// One mention of an entity in targeted sentiment analysis.
    pub struct TargetedSentimentMention {
        score: Double,
        /// Confidence that all mentions in the group refer to the same entity.
        group_score: Double,
        text: String,
        r#type: TargetedSentimentEntityType,
        mention_sentiment: MentionSentiment,
        begin_offset: i32,
        end_offset: i32,
    }
}

shape! {
    /// All mentions of one entity, grouped by co-reference.
    pub struct TargetedSentimentEntity {
        /// Indexes into `mentions` of the most descriptive mentions.
        descriptive_mention_index: Vec<i32>,
        mentions: Vec<TargetedSentimentMention>,
    }
}

// ---------------------------------------------------------------------------
// PII
// ---------------------------------------------------------------------------

shape! {
    pub struct PiiEntity {
        score: Double,
        r#type: PiiEntityType,
        begin_offset: i32,
        end_offset: i32,
    }
}

shape! {
    /// A PII category present in the text, without its location.
    pub struct EntityLabel {
        name: PiiEntityType,
        score: Double,
    }
}

// ---------------------------------------------------------------------------
// Document layout (semi-structured input)
// ---------------------------------------------------------------------------

shape! {
    /// A vertex of a polygon, as a ratio of page width and height.
    pub struct Point {
        x: Double,
        y: Double,
    }
}

shape! {
    pub struct BoundingBox {
        height: Double,
        left: Double,
        top: Double,
        width: Double,
    }
}

shape! {
    pub struct Geometry {
        bounding_box: BoundingBox,
        polygon: Vec<Point>,
    }
}

shape! {
    pub struct RelationshipsListItem {
        ids: Vec<String>,
        r#type: RelationshipType,
    }
}

shape! {
    /// A line or word extracted from a semi-structured document.
    pub struct Block {
        id: String,
        block_type: BlockType,
        text: String,
        page: i32,
        geometry: Geometry,
        relationships: Vec<RelationshipsListItem>,
    }
}

shape! {
    pub struct ExtractedCharactersListItem {
        page: i32,
        count: i32,
    }
}

shape! {
    pub struct DocumentMetadata {
        pages: i32,
        extracted_characters: Vec<ExtractedCharactersListItem>,
    }
}

shape! {
    pub struct DocumentTypeListItem {
        page: i32,
        r#type: DocumentType,
    }
}

shape! {
    /// Page-level error reported when reading a document.
    pub struct ErrorsListItem {
        page: i32,
        error_code: PageBasedErrorCode,
        error_message: String,
    }
}

shape! {
    pub struct WarningsListItem {
        page: i32,
        warn_code: PageBasedWarningCode,
        warn_message: String,
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

shape! {
    /// A class assigned by a multi-class classifier.
    pub struct DocumentClass {
        name: String,
        score: Double,
        page: i32,
    }
}

shape! {
    /// A label assigned by a multi-label classifier.
    pub struct DocumentLabel {
        name: String,
        score: Double,
        page: i32,
    }
}

// ---------------------------------------------------------------------------
// Batch item results
// ---------------------------------------------------------------------------

shape! {
    pub struct BatchDetectDominantLanguageItemResult {
        index: i32,
        languages: Vec<DominantLanguage>,
    }
}

shape! {
    pub struct BatchDetectEntitiesItemResult {
        index: i32,
        entities: Vec<Entity>,
    }
}

shape! {
    pub struct BatchDetectKeyPhrasesItemResult {
        index: i32,
        key_phrases: Vec<KeyPhrase>,
    }
}

shape! {
    pub struct BatchDetectSentimentItemResult {
        index: i32,
        sentiment: SentimentType,
        sentiment_score: SentimentScore,
    }
}

shape! {
    pub struct BatchDetectSyntaxItemResult {
        index: i32,
        syntax_tokens: Vec<SyntaxToken>,
    }
}

shape! {
    pub struct BatchDetectTargetedSentimentItemResult {
        index: i32,
        entities: Vec<TargetedSentimentEntity>,
    }
}
