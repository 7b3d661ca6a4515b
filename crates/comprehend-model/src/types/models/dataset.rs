/*
[INPUT]:  API schema definitions for flywheel datasets
[OUTPUT]: Dataset input configuration, properties, and filter shapes
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::{DateTime, Utc};

use crate::contract::shape;
use crate::types::enums::{
    AugmentedManifestsDocumentTypeFormat, DatasetDataFormat, DatasetStatus, DatasetType,
    InputFormat,
};

shape! {
    pub struct DatasetAugmentedManifestsListItem {
        attribute_names: Vec<String>,
        s3_uri: String,
        annotation_data_s3_uri: String,
        source_documents_s3_uri: String,
        document_type: AugmentedManifestsDocumentTypeFormat,
    }
}

shape! {
    pub struct DatasetDocumentClassifierInputDataConfig {
        s3_uri: String,
        label_delimiter: String,
    }
}

shape! {
    pub struct DatasetEntityRecognizerAnnotations {
        s3_uri: String,
    }
}

shape! {
    pub struct DatasetEntityRecognizerDocuments {
        s3_uri: String,
        input_format: InputFormat,
    }
}

shape! {
    pub struct DatasetEntityRecognizerEntityList {
        s3_uri: String,
    }
}

shape! {
    pub struct DatasetEntityRecognizerInputDataConfig {
        annotations: DatasetEntityRecognizerAnnotations,
        documents: DatasetEntityRecognizerDocuments,
        entity_list: DatasetEntityRecognizerEntityList,
    }
}

shape! {
    /// Where the documents of a dataset come from.
    ///
    /// Exactly one of the classifier or recognizer configs applies, matching
    /// the model type of the owning flywheel.
    pub struct DatasetInputDataConfig {
        augmented_manifests: Vec<DatasetAugmentedManifestsListItem>,
        data_format: DatasetDataFormat,
        document_classifier_input_data_config: DatasetDocumentClassifierInputDataConfig,
        entity_recognizer_input_data_config: DatasetEntityRecognizerInputDataConfig,
    }
}

shape! {
    pub struct DatasetProperties {
        dataset_arn: String,
        dataset_name: String,
        dataset_type: DatasetType,
        /// Location of the dataset inside the flywheel data lake.
        dataset_s3_uri: String,
        description: String,
        status: DatasetStatus,
        message: String,
        number_of_documents: i64,
        #[serde(with = "crate::types::epoch_seconds")]
        creation_time: DateTime<Utc>,
        #[serde(with = "crate::types::epoch_seconds")]
        end_time: DateTime<Utc>,
    }
}

shape! {
    pub struct DatasetFilter {
        status: DatasetStatus,
        dataset_type: DatasetType,
        #[serde(with = "crate::types::epoch_seconds")]
        creation_time_after: DateTime<Utc>,
        #[serde(with = "crate::types::epoch_seconds")]
        creation_time_before: DateTime<Utc>,
    }
}
