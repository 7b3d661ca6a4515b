/*
[INPUT]:  API schema definitions for flywheels
[OUTPUT]: Task, security, properties, summary, and filter shapes
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::{DateTime, Utc};

use super::common::VpcConfig;
use super::recognizer::EntityTypesListItem;
use crate::contract::shape;
use crate::types::enums::{DocumentClassifierMode, FlywheelStatus, LanguageCode, ModelType};

shape! {
    pub struct DocumentClassificationConfig {
        mode: DocumentClassifierMode,
        labels: Vec<String>,
    }
}

shape! {
    pub struct EntityRecognitionConfig {
        entity_types: Vec<EntityTypesListItem>,
    }
}

shape! {
    /// What the models trained by a flywheel do.
    pub struct TaskConfig {
        language_code: LanguageCode,
        document_classification_config: DocumentClassificationConfig,
        entity_recognition_config: EntityRecognitionConfig,
    }
}

shape! {
    pub struct DataSecurityConfig {
        model_kms_key_id: String,
        volume_kms_key_id: String,
        data_lake_kms_key_id: String,
        vpc_config: VpcConfig,
    }
}

shape! {
    /// Security settings that may change after a flywheel is created.
    pub struct UpdateDataSecurityConfig {
        model_kms_key_id: String,
        volume_kms_key_id: String,
        vpc_config: VpcConfig,
    }
}

shape! {
    pub struct FlywheelProperties {
        flywheel_arn: String,
        /// Model version used for inference on new data.
        active_model_arn: String,
        data_access_role_arn: String,
        task_config: TaskConfig,
        data_lake_s3_uri: String,
        data_security_config: DataSecurityConfig,
        status: FlywheelStatus,
        model_type: ModelType,
        message: String,
        #[serde(with = "crate::types::epoch_seconds")]
        creation_time: DateTime<Utc>,
        #[serde(with = "crate::types::epoch_seconds")]
        last_modified_time: DateTime<Utc>,
        latest_flywheel_iteration: String,
    }
}

shape! {
    pub struct FlywheelSummary {
        flywheel_arn: String,
        active_model_arn: String,
        data_lake_s3_uri: String,
        status: FlywheelStatus,
        model_type: ModelType,
        message: String,
        #[serde(with = "crate::types::epoch_seconds")]
        creation_time: DateTime<Utc>,
        #[serde(with = "crate::types::epoch_seconds")]
        last_modified_time: DateTime<Utc>,
        latest_flywheel_iteration: String,
    }
}

shape! {
    pub struct FlywheelFilter {
        status: FlywheelStatus,
        #[serde(with = "crate::types::epoch_seconds")]
        creation_time_after: DateTime<Utc>,
        #[serde(with = "crate::types::epoch_seconds")]
        creation_time_before: DateTime<Utc>,
    }
}
