/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed response shapes, one per operation
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new operations added
*/

use super::enums::{JobStatus, SentimentType};
use super::models::{
    BatchDetectDominantLanguageItemResult, BatchDetectEntitiesItemResult,
    BatchDetectKeyPhrasesItemResult, BatchDetectSentimentItemResult, BatchDetectSyntaxItemResult,
    BatchDetectTargetedSentimentItemResult, BatchItemError, Block, DatasetProperties,
    DocumentClass, DocumentClassificationJobProperties, DocumentClassifierProperties,
    DocumentLabel, DocumentMetadata, DocumentTypeListItem, DominantLanguage,
    DominantLanguageDetectionJobProperties, EndpointProperties, EntitiesDetectionJobProperties,
    Entity, EntityLabel, EntityRecognizerProperties, ErrorsListItem, FlywheelProperties,
    FlywheelSummary, KeyPhrase, KeyPhrasesDetectionJobProperties,
    PiiEntitiesDetectionJobProperties, PiiEntity, SentimentDetectionJobProperties,
    SentimentScore, SyntaxToken, Tag, TargetedSentimentEntity, TopicsDetectionJobProperties,
    WarningsListItem,
};
use crate::contract::shape;

// ---------------------------------------------------------------------------
// Real-time detection
// ---------------------------------------------------------------------------

shape! {
    /// Per-document results; failed documents are reported in `error_list`.
    pub struct BatchDetectDominantLanguageResponse {
        result_list: Vec<BatchDetectDominantLanguageItemResult>,
        error_list: Vec<BatchItemError>,
    }
}

shape! {
    pub struct BatchDetectEntitiesResponse {
        result_list: Vec<BatchDetectEntitiesItemResult>,
        error_list: Vec<BatchItemError>,
    }
}

shape! {
    pub struct BatchDetectKeyPhrasesResponse {
        result_list: Vec<BatchDetectKeyPhrasesItemResult>,
        error_list: Vec<BatchItemError>,
    }
}

shape! {
    pub struct BatchDetectSentimentResponse {
        result_list: Vec<BatchDetectSentimentItemResult>,
        error_list: Vec<BatchItemError>,
    }
}

shape! {
    pub struct BatchDetectSyntaxResponse {
        result_list: Vec<BatchDetectSyntaxItemResult>,
        error_list: Vec<BatchItemError>,
    }
}

shape! {
    pub struct BatchDetectTargetedSentimentResponse {
        result_list: Vec<BatchDetectTargetedSentimentItemResult>,
        error_list: Vec<BatchItemError>,
    }
}

shape! {
    /// `classes` is filled for multi-class models, `labels` for multi-label.
    pub struct ClassifyDocumentResponse {
        classes: Vec<DocumentClass>,
        labels: Vec<DocumentLabel>,
        document_metadata: DocumentMetadata,
        document_type: Vec<DocumentTypeListItem>,
        errors: Vec<ErrorsListItem>,
        warnings: Vec<WarningsListItem>,
    }
}

shape! {
    pub struct ContainsPiiEntitiesResponse {
        labels: Vec<EntityLabel>,
    }
}

shape! {
    pub struct DetectDominantLanguageResponse {
        languages: Vec<DominantLanguage>,
    }
}

shape! {
    pub struct DetectEntitiesResponse {
        entities: Vec<Entity>,
        document_metadata: DocumentMetadata,
        document_type: Vec<DocumentTypeListItem>,
        /// Layout blocks, only for semi-structured input.
        blocks: Vec<Block>,
        errors: Vec<ErrorsListItem>,
    }
}

shape! {
    pub struct DetectKeyPhrasesResponse {
        key_phrases: Vec<KeyPhrase>,
    }
}

shape! {
    pub struct DetectPiiEntitiesResponse {
        entities: Vec<PiiEntity>,
    }
}

shape! {
    pub struct DetectSentimentResponse {
        sentiment: SentimentType,
        sentiment_score: SentimentScore,
    }
}

shape! {
    pub struct DetectSyntaxResponse {
        syntax_tokens: Vec<SyntaxToken>,
    }
}

shape! {
    pub struct DetectTargetedSentimentResponse {
        entities: Vec<TargetedSentimentEntity>,
    }
}

// ---------------------------------------------------------------------------
// Document classifiers
// ---------------------------------------------------------------------------

shape! {
    pub struct CreateDocumentClassifierResponse {
        document_classifier_arn: String,
    }
}

shape! {
    pub struct DeleteDocumentClassifierResponse {}
}

shape! {
    pub struct DescribeDocumentClassifierResponse {
        document_classifier_properties: DocumentClassifierProperties,
    }
}

shape! {
    pub struct ListDocumentClassifiersResponse {
        document_classifier_properties_list: Vec<DocumentClassifierProperties>,
        next_token: String,
    }
}

shape! {
    pub struct StopTrainingDocumentClassifierResponse {}
}

// ---------------------------------------------------------------------------
// Entity recognizers
// ---------------------------------------------------------------------------

shape! {
    pub struct CreateEntityRecognizerResponse {
        entity_recognizer_arn: String,
    }
}

shape! {
    pub struct DeleteEntityRecognizerResponse {}
}

shape! {
    pub struct DescribeEntityRecognizerResponse {
        entity_recognizer_properties: EntityRecognizerProperties,
    }
}

shape! {
    pub struct ListEntityRecognizersResponse {
        entity_recognizer_properties_list: Vec<EntityRecognizerProperties>,
        next_token: String,
    }
}

shape! {
    pub struct StopTrainingEntityRecognizerResponse {}
}

// ---------------------------------------------------------------------------
// Asynchronous jobs
// ---------------------------------------------------------------------------

shape! {
    pub struct StartDocumentClassificationJobResponse {
        job_id: String,
        job_arn: String,
        job_status: JobStatus,
        document_classifier_arn: String,
    }
}

shape! {
    pub struct DescribeDocumentClassificationJobResponse {
        document_classification_job_properties: DocumentClassificationJobProperties,
    }
}

shape! {
    pub struct ListDocumentClassificationJobsResponse {
        document_classification_job_properties_list: Vec<DocumentClassificationJobProperties>,
        next_token: String,
    }
}

shape! {
    pub struct StartDominantLanguageDetectionJobResponse {
        job_id: String,
        job_arn: String,
        job_status: JobStatus,
    }
}

shape! {
    pub struct DescribeDominantLanguageDetectionJobResponse {
        dominant_language_detection_job_properties: DominantLanguageDetectionJobProperties,
    }
}

shape! {
    pub struct ListDominantLanguageDetectionJobsResponse {
        dominant_language_detection_job_properties_list: Vec<DominantLanguageDetectionJobProperties>,
        next_token: String,
    }
}

shape! {
    /// `STOP_REQUESTED` while the job winds down, `STOPPED` if it never ran.
    pub struct StopDominantLanguageDetectionJobResponse {
        job_id: String,
        job_status: JobStatus,
    }
}

shape! {
    pub struct StartEntitiesDetectionJobResponse {
        job_id: String,
        job_arn: String,
        job_status: JobStatus,
        entity_recognizer_arn: String,
    }
}

shape! {
    pub struct DescribeEntitiesDetectionJobResponse {
        entities_detection_job_properties: EntitiesDetectionJobProperties,
    }
}

shape! {
    pub struct ListEntitiesDetectionJobsResponse {
        entities_detection_job_properties_list: Vec<EntitiesDetectionJobProperties>,
        next_token: String,
    }
}

shape! {
    pub struct StopEntitiesDetectionJobResponse {
        job_id: String,
        job_status: JobStatus,
    }
}

shape! {
    pub struct StartKeyPhrasesDetectionJobResponse {
        job_id: String,
        job_arn: String,
        job_status: JobStatus,
    }
}

shape! {
    pub struct DescribeKeyPhrasesDetectionJobResponse {
        key_phrases_detection_job_properties: KeyPhrasesDetectionJobProperties,
    }
}

shape! {
    pub struct ListKeyPhrasesDetectionJobsResponse {
        key_phrases_detection_job_properties_list: Vec<KeyPhrasesDetectionJobProperties>,
        next_token: String,
    }
}

shape! {
    pub struct StopKeyPhrasesDetectionJobResponse {
        job_id: String,
        job_status: JobStatus,
    }
}

shape! {
    pub struct StartSentimentDetectionJobResponse {
        job_id: String,
        job_arn: String,
        job_status: JobStatus,
    }
}

shape! {
    pub struct DescribeSentimentDetectionJobResponse {
        sentiment_detection_job_properties: SentimentDetectionJobProperties,
    }
}

shape! {
    pub struct ListSentimentDetectionJobsResponse {
        sentiment_detection_job_properties_list: Vec<SentimentDetectionJobProperties>,
        next_token: String,
    }
}

shape! {
    pub struct StopSentimentDetectionJobResponse {
        job_id: String,
        job_status: JobStatus,
    }
}

shape! {
    pub struct StartTopicsDetectionJobResponse {
        job_id: String,
        job_arn: String,
        job_status: JobStatus,
    }
}

shape! {
    pub struct DescribeTopicsDetectionJobResponse {
        topics_detection_job_properties: TopicsDetectionJobProperties,
    }
}

shape! {
    pub struct ListTopicsDetectionJobsResponse {
        topics_detection_job_properties_list: Vec<TopicsDetectionJobProperties>,
        next_token: String,
    }
}

shape! {
    pub struct StartPiiEntitiesDetectionJobResponse {
        job_id: String,
        job_arn: String,
        job_status: JobStatus,
    }
}

shape! {
    pub struct DescribePiiEntitiesDetectionJobResponse {
        pii_entities_detection_job_properties: PiiEntitiesDetectionJobProperties,
    }
}

shape! {
    pub struct ListPiiEntitiesDetectionJobsResponse {
        pii_entities_detection_job_properties_list: Vec<PiiEntitiesDetectionJobProperties>,
        next_token: String,
    }
}

shape! {
    pub struct StopPiiEntitiesDetectionJobResponse {
        job_id: String,
        job_status: JobStatus,
    }
}

// ---------------------------------------------------------------------------
// Endpoints
// ---------------------------------------------------------------------------

shape! {
    pub struct CreateEndpointResponse {
        endpoint_arn: String,
        model_arn: String,
    }
}

shape! {
    pub struct DeleteEndpointResponse {}
}

shape! {
    pub struct DescribeEndpointResponse {
        endpoint_properties: EndpointProperties,
    }
}

shape! {
    pub struct ListEndpointsResponse {
        endpoint_properties_list: Vec<EndpointProperties>,
        next_token: String,
    }
}

shape! {
    pub struct UpdateEndpointResponse {
        desired_model_arn: String,
    }
}

// ---------------------------------------------------------------------------
// Datasets
// ---------------------------------------------------------------------------

shape! {
    pub struct CreateDatasetResponse {
        dataset_arn: String,
    }
}

shape! {
    pub struct DescribeDatasetResponse {
        dataset_properties: DatasetProperties,
    }
}

shape! {
    pub struct ListDatasetsResponse {
        dataset_properties_list: Vec<DatasetProperties>,
        next_token: String,
    }
}

// ---------------------------------------------------------------------------
// Flywheels
// ---------------------------------------------------------------------------

shape! {
    pub struct CreateFlywheelResponse {
        flywheel_arn: String,
        active_model_arn: String,
    }
}

shape! {
    pub struct DeleteFlywheelResponse {}
}

shape! {
    pub struct DescribeFlywheelResponse {
        flywheel_properties: FlywheelProperties,
    }
}

shape! {
    pub struct ListFlywheelsResponse {
        flywheel_summary_list: Vec<FlywheelSummary>,
        next_token: String,
    }
}

shape! {
    pub struct UpdateFlywheelResponse {
        flywheel_properties: FlywheelProperties,
    }
}

// ---------------------------------------------------------------------------
// Tagging
// ---------------------------------------------------------------------------

shape! {
    pub struct TagResourceResponse {}
}

shape! {
    pub struct UntagResourceResponse {}
}

shape! {
    pub struct ListTagsForResourceResponse {
        resource_arn: String,
        tags: Vec<Tag>,
    }
}
