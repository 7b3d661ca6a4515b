/*
[INPUT]:  API schema definitions for custom entity recognizers
[OUTPUT]: Training configuration, metadata, and filter shapes
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::{DateTime, Utc};

use super::classifier::AugmentedManifestsListItem;
use super::common::VpcConfig;
use crate::contract::shape;
use crate::types::Double;
use crate::types::enums::{EntityRecognizerDataFormat, InputFormat, LanguageCode, ModelStatus};

shape! {
    /// A custom entity type. Upper case, no commas, up to 64 characters.
    pub struct EntityTypesListItem {
        r#type: String,
    }
}

shape! {
    pub struct EntityRecognizerDocuments {
        s3_uri: String,
        test_s3_uri: String,
        input_format: InputFormat,
    }
}

shape! {
    pub struct EntityRecognizerAnnotations {
        s3_uri: String,
        test_s3_uri: String,
    }
}

shape! {
    pub struct EntityRecognizerEntityList {
        s3_uri: String,
    }
}

shape! {
    /// Training data of an entity recognizer.
    ///
    /// `documents` is combined with either `annotations` or `entity_list` for
    /// `COMPREHEND_CSV`; `augmented_manifests` is used for `AUGMENTED_MANIFEST`.
    pub struct EntityRecognizerInputDataConfig {
        data_format: EntityRecognizerDataFormat,
        entity_types: Vec<EntityTypesListItem>,
        documents: EntityRecognizerDocuments,
        annotations: EntityRecognizerAnnotations,
        entity_list: EntityRecognizerEntityList,
        augmented_manifests: Vec<AugmentedManifestsListItem>,
    }
}

shape! {
    pub struct EntityRecognizerOutputDataConfig {
        flywheel_stats_s3_prefix: String,
    }
}

shape! {
    pub struct EntityRecognizerEvaluationMetrics {
        precision: Double,
        recall: Double,
        f1_score: Double,
    }
}

shape! {
    pub struct EntityTypesEvaluationMetrics {
        precision: Double,
        recall: Double,
        f1_score: Double,
    }
}

shape! {
    pub struct EntityRecognizerMetadataEntityTypesListItem {
        r#type: String,
        evaluation_metrics: EntityTypesEvaluationMetrics,
        number_of_train_mentions: i32,
    }
}

shape! {
    pub struct EntityRecognizerMetadata {
        number_of_trained_documents: i32,
        number_of_test_documents: i32,
        evaluation_metrics: EntityRecognizerEvaluationMetrics,
        entity_types: Vec<EntityRecognizerMetadataEntityTypesListItem>,
    }
}

shape! {
    pub struct EntityRecognizerProperties {
        entity_recognizer_arn: String,
        language_code: LanguageCode,
        status: ModelStatus,
        message: String,
        #[serde(with = "crate::types::epoch_seconds")]
        submit_time: DateTime<Utc>,
        #[serde(with = "crate::types::epoch_seconds")]
        end_time: DateTime<Utc>,
        #[serde(with = "crate::types::epoch_seconds")]
        training_start_time: DateTime<Utc>,
        #[serde(with = "crate::types::epoch_seconds")]
        training_end_time: DateTime<Utc>,
        input_data_config: EntityRecognizerInputDataConfig,
        recognizer_metadata: EntityRecognizerMetadata,
        data_access_role_arn: String,
        volume_kms_key_id: String,
        vpc_config: VpcConfig,
        model_kms_key_id: String,
        version_name: String,
        source_model_arn: String,
        flywheel_arn: String,
        output_data_config: EntityRecognizerOutputDataConfig,
    }
}

shape! {
    pub struct EntityRecognizerFilter {
        status: ModelStatus,
        recognizer_name: String,
        #[serde(with = "crate::types::epoch_seconds")]
        submit_time_before: DateTime<Utc>,
        #[serde(with = "crate::types::epoch_seconds")]
        submit_time_after: DateTime<Utc>,
    }
}
