/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed request shapes, one per operation
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new operations added
*/

use super::blob::Blob;
use super::enums::{
    DatasetType, DocumentClassifierMode, LanguageCode, ModelType, PiiEntitiesDetectionMode,
    SyntaxLanguageCode,
};
use super::models::{
    DataSecurityConfig, DatasetFilter, DatasetInputDataConfig, DocumentClassificationJobFilter,
    DocumentClassifierFilter, DocumentClassifierInputDataConfig,
    DocumentClassifierOutputDataConfig, DocumentReaderConfig, DominantLanguageDetectionJobFilter,
    EndpointFilter, EntitiesDetectionJobFilter, EntityRecognizerFilter,
    EntityRecognizerInputDataConfig, FlywheelFilter, InputDataConfig,
    KeyPhrasesDetectionJobFilter, OutputDataConfig, PiiEntitiesDetectionJobFilter,
    RedactionConfig, SentimentDetectionJobFilter, Tag, TaskConfig, TopicsDetectionJobFilter,
    UpdateDataSecurityConfig, VpcConfig,
};
use crate::contract::shape;

// ---------------------------------------------------------------------------
// Real-time detection
// ---------------------------------------------------------------------------

shape! {
    /// Up to 25 documents, each under 5,000 bytes of UTF-8.
    pub struct BatchDetectDominantLanguageRequest {
        text_list: Vec<String>,
    }
}

shape! {
    pub struct BatchDetectEntitiesRequest {
        text_list: Vec<String>,
        language_code: LanguageCode,
    }
}

shape! {
    pub struct BatchDetectKeyPhrasesRequest {
        text_list: Vec<String>,
        language_code: LanguageCode,
    }
}

shape! {
    pub struct BatchDetectSentimentRequest {
        text_list: Vec<String>,
        language_code: LanguageCode,
    }
}

shape! {
    pub struct BatchDetectSyntaxRequest {
        text_list: Vec<String>,
        language_code: SyntaxLanguageCode,
    }
}

shape! {
    pub struct BatchDetectTargetedSentimentRequest {
        text_list: Vec<String>,
        language_code: LanguageCode,
    }
}

shape! {
    /// Classifies one document with a custom classifier endpoint.
    ///
    /// Set either `text` (plain text) or `bytes` (PDF, Word, image, or
    /// Textract JSON), not both.
    pub struct ClassifyDocumentRequest {
        text: String,
        endpoint_arn: String,
        bytes: Blob,
        document_reader_config: DocumentReaderConfig,
    }
}

shape! {
    pub struct ContainsPiiEntitiesRequest {
        text: String,
        language_code: LanguageCode,
    }
}

shape! {
    pub struct DetectDominantLanguageRequest {
        text: String,
    }
}

shape! {
    /// Detects built-in entities, or custom entities when `endpoint_arn` names
    /// a recognizer endpoint.
    pub struct DetectEntitiesRequest {
        text: String,
        language_code: LanguageCode,
        endpoint_arn: String,
        bytes: Blob,
        document_reader_config: DocumentReaderConfig,
    }
}

shape! {
    pub struct DetectKeyPhrasesRequest {
        text: String,
        language_code: LanguageCode,
    }
}

shape! {
    pub struct DetectPiiEntitiesRequest {
        text: String,
        language_code: LanguageCode,
    }
}

shape! {
    pub struct DetectSentimentRequest {
        text: String,
        language_code: LanguageCode,
    }
}

shape! {
    pub struct DetectSyntaxRequest {
        text: String,
        language_code: SyntaxLanguageCode,
    }
}

shape! {
    pub struct DetectTargetedSentimentRequest {
        text: String,
        language_code: LanguageCode,
    }
}

// ---------------------------------------------------------------------------
// Document classifiers
// ---------------------------------------------------------------------------

shape! {
    pub struct CreateDocumentClassifierRequest {
        document_classifier_name: String,
        version_name: String,
        data_access_role_arn: String,
        tags: Vec<Tag>,
        input_data_config: DocumentClassifierInputDataConfig,
        output_data_config: DocumentClassifierOutputDataConfig,
        /// Idempotency token, generated when left empty.
        client_request_token: String,
        language_code: LanguageCode,
        volume_kms_key_id: String,
        vpc_config: VpcConfig,
        mode: DocumentClassifierMode,
        model_kms_key_id: String,
        /// Resource-based policy JSON granting other accounts import rights.
        model_policy: String,
    }
}

shape! {
    pub struct DeleteDocumentClassifierRequest {
        document_classifier_arn: String,
    }
}

shape! {
    pub struct DescribeDocumentClassifierRequest {
        document_classifier_arn: String,
    }
}

shape! {
    pub struct ListDocumentClassifiersRequest {
        filter: DocumentClassifierFilter,
        next_token: String,
        max_results: i32,
    }
}

shape! {
    pub struct StopTrainingDocumentClassifierRequest {
        document_classifier_arn: String,
    }
}

// ---------------------------------------------------------------------------
// Entity recognizers
// ---------------------------------------------------------------------------

shape! {
    pub struct CreateEntityRecognizerRequest {
        recognizer_name: String,
        version_name: String,
        data_access_role_arn: String,
        tags: Vec<Tag>,
        input_data_config: EntityRecognizerInputDataConfig,
        client_request_token: String,
        language_code: LanguageCode,
        volume_kms_key_id: String,
        vpc_config: VpcConfig,
        model_kms_key_id: String,
        model_policy: String,
    }
}

shape! {
    pub struct DeleteEntityRecognizerRequest {
        entity_recognizer_arn: String,
    }
}

shape! {
    pub struct DescribeEntityRecognizerRequest {
        entity_recognizer_arn: String,
    }
}

shape! {
    pub struct ListEntityRecognizersRequest {
        filter: EntityRecognizerFilter,
        next_token: String,
        max_results: i32,
    }
}

shape! {
    pub struct StopTrainingEntityRecognizerRequest {
        entity_recognizer_arn: String,
    }
}

// ---------------------------------------------------------------------------
// Asynchronous jobs
// ---------------------------------------------------------------------------

shape! {
    pub struct StartDocumentClassificationJobRequest {
        job_name: String,
        /// Required unless `flywheel_arn` is set.
        document_classifier_arn: String,
        input_data_config: InputDataConfig,
        output_data_config: OutputDataConfig,
        data_access_role_arn: String,
        client_request_token: String,
        volume_kms_key_id: String,
        vpc_config: VpcConfig,
        tags: Vec<Tag>,
        flywheel_arn: String,
    }
}

shape! {
    pub struct DescribeDocumentClassificationJobRequest {
        job_id: String,
    }
}

shape! {
    pub struct ListDocumentClassificationJobsRequest {
        filter: DocumentClassificationJobFilter,
        next_token: String,
        max_results: i32,
    }
}

shape! {
    pub struct StartDominantLanguageDetectionJobRequest {
        input_data_config: InputDataConfig,
        output_data_config: OutputDataConfig,
        data_access_role_arn: String,
        job_name: String,
        client_request_token: String,
        volume_kms_key_id: String,
        vpc_config: VpcConfig,
        tags: Vec<Tag>,
    }
}

shape! {
    pub struct DescribeDominantLanguageDetectionJobRequest {
        job_id: String,
    }
}

shape! {
    pub struct ListDominantLanguageDetectionJobsRequest {
        filter: DominantLanguageDetectionJobFilter,
        next_token: String,
        max_results: i32,
    }
}

shape! {
    pub struct StopDominantLanguageDetectionJobRequest {
        job_id: String,
    }
}

shape! {
    pub struct StartEntitiesDetectionJobRequest {
        input_data_config: InputDataConfig,
        output_data_config: OutputDataConfig,
        data_access_role_arn: String,
        job_name: String,
        /// Custom recognizer; omit to detect the built-in entity types.
        entity_recognizer_arn: String,
        language_code: LanguageCode,
        client_request_token: String,
        volume_kms_key_id: String,
        vpc_config: VpcConfig,
        tags: Vec<Tag>,
        flywheel_arn: String,
    }
}

shape! {
    pub struct DescribeEntitiesDetectionJobRequest {
        job_id: String,
    }
}

shape! {
    pub struct ListEntitiesDetectionJobsRequest {
        filter: EntitiesDetectionJobFilter,
        next_token: String,
        max_results: i32,
    }
}

shape! {
    pub struct StopEntitiesDetectionJobRequest {
        job_id: String,
    }
}

shape! {
    pub struct StartKeyPhrasesDetectionJobRequest {
        input_data_config: InputDataConfig,
        output_data_config: OutputDataConfig,
        data_access_role_arn: String,
        job_name: String,
        language_code: LanguageCode,
        client_request_token: String,
        volume_kms_key_id: String,
        vpc_config: VpcConfig,
        tags: Vec<Tag>,
    }
}

shape! {
    pub struct DescribeKeyPhrasesDetectionJobRequest {
        job_id: String,
    }
}

shape! {
    pub struct ListKeyPhrasesDetectionJobsRequest {
        filter: KeyPhrasesDetectionJobFilter,
        next_token: String,
        max_results: i32,
    }
}

shape! {
    pub struct StopKeyPhrasesDetectionJobRequest {
        job_id: String,
    }
}

shape! {
    pub struct StartSentimentDetectionJobRequest {
        input_data_config: InputDataConfig,
        output_data_config: OutputDataConfig,
        data_access_role_arn: String,
        job_name: String,
        language_code: LanguageCode,
        client_request_token: String,
        volume_kms_key_id: String,
        vpc_config: VpcConfig,
        tags: Vec<Tag>,
    }
}

shape! {
    pub struct DescribeSentimentDetectionJobRequest {
        job_id: String,
    }
}

shape! {
    pub struct ListSentimentDetectionJobsRequest {
        filter: SentimentDetectionJobFilter,
        next_token: String,
        max_results: i32,
    }
}

shape! {
    pub struct StopSentimentDetectionJobRequest {
        job_id: String,
    }
}

shape! {
    /// Starts topic modeling over a document collection.
    pub struct StartTopicsDetectionJobRequest {
        input_data_config: InputDataConfig,
        output_data_config: OutputDataConfig,
        data_access_role_arn: String,
        job_name: String,
        /// Between 1 and 100. The service defaults to 10.
        number_of_topics: i32,
        client_request_token: String,
        volume_kms_key_id: String,
        vpc_config: VpcConfig,
        tags: Vec<Tag>,
    }
}

shape! {
    pub struct DescribeTopicsDetectionJobRequest {
        job_id: String,
    }
}

shape! {
    pub struct ListTopicsDetectionJobsRequest {
        filter: TopicsDetectionJobFilter,
        next_token: String,
        max_results: i32,
    }
}

shape! {
    pub struct StartPiiEntitiesDetectionJobRequest {
        input_data_config: InputDataConfig,
        output_data_config: OutputDataConfig,
        mode: PiiEntitiesDetectionMode,
        /// Required when `mode` is `ONLY_REDACTION`.
        redaction_config: RedactionConfig,
        data_access_role_arn: String,
        job_name: String,
        language_code: LanguageCode,
        client_request_token: String,
        tags: Vec<Tag>,
    }
}

shape! {
    pub struct DescribePiiEntitiesDetectionJobRequest {
        job_id: String,
    }
}

shape! {
    pub struct ListPiiEntitiesDetectionJobsRequest {
        filter: PiiEntitiesDetectionJobFilter,
        next_token: String,
        max_results: i32,
    }
}

shape! {
    pub struct StopPiiEntitiesDetectionJobRequest {
        job_id: String,
    }
}

// ---------------------------------------------------------------------------
// Endpoints
// ---------------------------------------------------------------------------

shape! {
    pub struct CreateEndpointRequest {
        endpoint_name: String,
        model_arn: String,
        desired_inference_units: i32,
        client_request_token: String,
        tags: Vec<Tag>,
        data_access_role_arn: String,
        flywheel_arn: String,
    }
}

shape! {
    pub struct DeleteEndpointRequest {
        endpoint_arn: String,
    }
}

shape! {
    pub struct DescribeEndpointRequest {
        endpoint_arn: String,
    }
}

shape! {
    pub struct ListEndpointsRequest {
        filter: EndpointFilter,
        next_token: String,
        max_results: i32,
    }
}

shape! {
    /// Changes the model, capacity, or role behind an endpoint.
    pub struct UpdateEndpointRequest {
        endpoint_arn: String,
        desired_model_arn: String,
        desired_inference_units: i32,
        desired_data_access_role_arn: String,
        flywheel_arn: String,
    }
}

// ---------------------------------------------------------------------------
// Datasets
// ---------------------------------------------------------------------------

shape! {
    pub struct CreateDatasetRequest {
        flywheel_arn: String,
        dataset_name: String,
        /// `TRAIN` or `TEST`. The service defaults to `TRAIN`.
        dataset_type: DatasetType,
        description: String,
        input_data_config: DatasetInputDataConfig,
        client_request_token: String,
        tags: Vec<Tag>,
    }
}

shape! {
    pub struct DescribeDatasetRequest {
        dataset_arn: String,
    }
}

shape! {
    pub struct ListDatasetsRequest {
        flywheel_arn: String,
        filter: DatasetFilter,
        next_token: String,
        max_results: i32,
    }
}

// ---------------------------------------------------------------------------
// Flywheels
// ---------------------------------------------------------------------------

shape! {
    pub struct CreateFlywheelRequest {
        flywheel_name: String,
        /// Start from an existing model instead of training a new one.
        active_model_arn: String,
        data_access_role_arn: String,
        task_config: TaskConfig,
        model_type: ModelType,
        data_lake_s3_uri: String,
        data_security_config: DataSecurityConfig,
        client_request_token: String,
        tags: Vec<Tag>,
    }
}

shape! {
    pub struct DeleteFlywheelRequest {
        flywheel_arn: String,
    }
}

shape! {
    pub struct DescribeFlywheelRequest {
        flywheel_arn: String,
    }
}

shape! {
    pub struct ListFlywheelsRequest {
        filter: FlywheelFilter,
        next_token: String,
        max_results: i32,
    }
}

shape! {
    pub struct UpdateFlywheelRequest {
        flywheel_arn: String,
        active_model_arn: String,
        data_access_role_arn: String,
        data_security_config: UpdateDataSecurityConfig,
    }
}

// ---------------------------------------------------------------------------
// Tagging
// ---------------------------------------------------------------------------

shape! {
    pub struct TagResourceRequest {
        resource_arn: String,
        tags: Vec<Tag>,
    }
}

shape! {
    pub struct UntagResourceRequest {
        resource_arn: String,
        tag_keys: Vec<String>,
    }
}

shape! {
    pub struct ListTagsForResourceRequest {
        resource_arn: String,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn classify_document_encodes_bytes_as_base64() {
        let request = ClassifyDocumentRequest::default()
            .endpoint_arn("arn:aws:comprehend:us-east-1:123456789012:document-classifier-endpoint/ep")
            .bytes(Blob::new(b"hello".to_vec()));

        let value = serde_json::to_value(&request).expect("serialize request");
        assert_eq!(
            value,
            json!({
                "EndpointArn": "arn:aws:comprehend:us-east-1:123456789012:document-classifier-endpoint/ep",
                "Bytes": "aGVsbG8="
            })
        );
    }

    #[test]
    fn start_topics_job_uses_pascal_case_members() {
        let request = StartTopicsDetectionJobRequest::default()
            .job_name("weekly-topics")
            .number_of_topics(20)
            .input_data_config(
                InputDataConfig::default()
                    .s3_uri("s3://bucket/in/")
                    .input_format("ONE_DOC_PER_LINE"),
            )
            .output_data_config(OutputDataConfig::default().s3_uri("s3://bucket/out/"))
            .data_access_role_arn("arn:aws:iam::123456789012:role/comprehend");

        let value = serde_json::to_value(&request).expect("serialize request");
        assert_eq!(
            value,
            json!({
                "InputDataConfig": {
                    "S3Uri": "s3://bucket/in/",
                    "InputFormat": "ONE_DOC_PER_LINE"
                },
                "OutputDataConfig": { "S3Uri": "s3://bucket/out/" },
                "DataAccessRoleArn": "arn:aws:iam::123456789012:role/comprehend",
                "JobName": "weekly-topics",
                "NumberOfTopics": 20
            })
        );
    }

    #[test]
    fn batch_text_list_appends() {
        let request = BatchDetectSentimentRequest::default()
            .text_list(["first".to_string()])
            .text_list(["second".to_string()])
            .language_code(LanguageCode::En);

        assert_eq!(
            request.text_list,
            Some(vec!["first".to_string(), "second".to_string()])
        );
        assert_eq!(request.to_string(), "{TextList: [first, second], LanguageCode: en}");
    }

    #[test]
    fn update_flywheel_accepts_partial_security_config() {
        let request = UpdateFlywheelRequest::default()
            .flywheel_arn("arn:aws:comprehend:us-east-1:123456789012:flywheel/fw")
            .data_security_config(UpdateDataSecurityConfig::default().model_kms_key_id("key-1"));

        let value = serde_json::to_value(&request).expect("serialize request");
        assert_eq!(
            value,
            json!({
                "FlywheelArn": "arn:aws:comprehend:us-east-1:123456789012:flywheel/fw",
                "DataSecurityConfig": { "ModelKmsKeyId": "key-1" }
            })
        );
    }
}
