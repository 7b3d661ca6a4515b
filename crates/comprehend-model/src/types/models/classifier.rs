/*
[INPUT]:  API schema definitions for custom document classifiers
[OUTPUT]: Training configuration, metadata, and filter shapes
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::{DateTime, Utc};

use super::common::{DocumentReaderConfig, VpcConfig};
use crate::contract::shape;
use crate::types::Double;
use crate::types::enums::{
    AugmentedManifestsDocumentTypeFormat, DocumentClassifierDataFormat,
    DocumentClassifierDocumentTypeFormat, DocumentClassifierMode, LanguageCode, ModelStatus,
    Split,
};

shape! {
    /// An augmented manifest file produced by a SageMaker Ground Truth job.
    pub struct AugmentedManifestsListItem {
        s3_uri: String,
        split: Split,
        /// Label attributes to read from each JSON line.
        attribute_names: Vec<String>,
        annotation_data_s3_uri: String,
        source_documents_s3_uri: String,
        document_type: AugmentedManifestsDocumentTypeFormat,
    }
}

shape! {
    /// Training and test documents for a semi-structured classifier.
    pub struct DocumentClassifierDocuments {
        s3_uri: String,
        test_s3_uri: String,
    }
}

shape! {
    /// Training data of a document classifier.
    ///
    /// With `COMPREHEND_CSV` the `s3_uri` points at the CSV file; with
    /// `AUGMENTED_MANIFEST` the manifests are listed in `augmented_manifests`.
    pub struct DocumentClassifierInputDataConfig {
        data_format: DocumentClassifierDataFormat,
        s3_uri: String,
        test_s3_uri: String,
        /// Separator between labels in multi-label mode. Defaults to `|`.
        label_delimiter: String,
        augmented_manifests: Vec<AugmentedManifestsListItem>,
        document_type: DocumentClassifierDocumentTypeFormat,
        documents: DocumentClassifierDocuments,
        document_reader_config: DocumentReaderConfig,
    }
}

shape! {
    pub struct DocumentClassifierOutputDataConfig {
        s3_uri: String,
        kms_key_id: String,
        flywheel_stats_s3_prefix: String,
    }
}

shape! {
    /// Metrics computed against the held-out test documents.
    pub struct ClassifierEvaluationMetrics {
        accuracy: Double,
        precision: Double,
        recall: Double,
        f1_score: Double,
        micro_precision: Double,
        micro_recall: Double,
        micro_f1_score: Double,
        hamming_loss: Double,
    }
}

shape! {
    pub struct ClassifierMetadata {
        number_of_labels: i32,
        number_of_trained_documents: i32,
        number_of_test_documents: i32,
        evaluation_metrics: ClassifierEvaluationMetrics,
    }
}

shape! {
    pub struct DocumentClassifierProperties {
        document_classifier_arn: String,
        language_code: LanguageCode,
        status: ModelStatus,
        /// Reason for a failed or stopped training run.
        message: String,
        #[serde(with = "crate::types::epoch_seconds")]
        submit_time: DateTime<Utc>,
        #[serde(with = "crate::types::epoch_seconds")]
        end_time: DateTime<Utc>,
        #[serde(with = "crate::types::epoch_seconds")]
        training_start_time: DateTime<Utc>,
        #[serde(with = "crate::types::epoch_seconds")]
        training_end_time: DateTime<Utc>,
        input_data_config: DocumentClassifierInputDataConfig,
        output_data_config: DocumentClassifierOutputDataConfig,
        classifier_metadata: ClassifierMetadata,
        data_access_role_arn: String,
        volume_kms_key_id: String,
        vpc_config: VpcConfig,
        mode: DocumentClassifierMode,
        model_kms_key_id: String,
        version_name: String,
        source_model_arn: String,
        flywheel_arn: String,
    }
}

shape! {
    /// Narrows `ListDocumentClassifiers`. Only one of the filters may be set.
    pub struct DocumentClassifierFilter {
        status: ModelStatus,
        document_classifier_name: String,
        #[serde(with = "crate::types::epoch_seconds")]
        submit_time_before: DateTime<Utc>,
        #[serde(with = "crate::types::epoch_seconds")]
        submit_time_after: DateTime<Utc>,
    }
}
