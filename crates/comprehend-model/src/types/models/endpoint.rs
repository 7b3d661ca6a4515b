/*
[INPUT]:  API schema definitions for real-time endpoints
[OUTPUT]: Endpoint properties and filter shapes
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::{DateTime, Utc};

use crate::contract::shape;
use crate::types::enums::EndpointStatus;

shape! {
    /// A provisioned endpoint serving a custom model.
    pub struct EndpointProperties {
        endpoint_arn: String,
        status: EndpointStatus,
        message: String,
        model_arn: String,
        /// Model the endpoint is being updated to, while `UPDATING`.
        desired_model_arn: String,
        /// Each inference unit is 100 characters per second.
        desired_inference_units: i32,
        current_inference_units: i32,
        #[serde(with = "crate::types::epoch_seconds")]
        creation_time: DateTime<Utc>,
        #[serde(with = "crate::types::epoch_seconds")]
        last_modified_time: DateTime<Utc>,
        data_access_role_arn: String,
        desired_data_access_role_arn: String,
        flywheel_arn: String,
    }
}

shape! {
    pub struct EndpointFilter {
        model_arn: String,
        status: EndpointStatus,
        #[serde(with = "crate::types::epoch_seconds")]
        creation_time_before: DateTime<Utc>,
        #[serde(with = "crate::types::epoch_seconds")]
        creation_time_after: DateTime<Utc>,
    }
}
