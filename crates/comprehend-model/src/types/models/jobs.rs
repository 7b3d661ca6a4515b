/*
[INPUT]:  API schema definitions for asynchronous analysis jobs
[OUTPUT]: Job filters, job properties, and PII redaction shapes
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::{DateTime, Utc};

use super::common::{InputDataConfig, OutputDataConfig, VpcConfig};
use crate::contract::shape;
use crate::types::enums::{
    JobStatus, LanguageCode, PiiEntitiesDetectionMaskMode, PiiEntitiesDetectionMode,
    PiiEntityType,
};

// ---------------------------------------------------------------------------
// Filters
//
// Every job family has its own filter shape with the same members. The
// service accepts one member at a time.
// ---------------------------------------------------------------------------

shape! {
    pub struct DocumentClassificationJobFilter {
        job_name: String,
        job_status: JobStatus,
        #[serde(with = "crate::types::epoch_seconds")]
        submit_time_before: DateTime<Utc>,
        #[serde(with = "crate::types::epoch_seconds")]
        submit_time_after: DateTime<Utc>,
    }
}

shape! {
    pub struct DominantLanguageDetectionJobFilter {
        job_name: String,
        job_status: JobStatus,
        #[serde(with = "crate::types::epoch_seconds")]
        submit_time_before: DateTime<Utc>,
        #[serde(with = "crate::types::epoch_seconds")]
        submit_time_after: DateTime<Utc>,
    }
}

shape! {
    pub struct EntitiesDetectionJobFilter {
        job_name: String,
        job_status: JobStatus,
        #[serde(with = "crate::types::epoch_seconds")]
        submit_time_before: DateTime<Utc>,
        #[serde(with = "crate::types::epoch_seconds")]
        submit_time_after: DateTime<Utc>,
    }
}

shape! {
    pub struct KeyPhrasesDetectionJobFilter {
        job_name: String,
        job_status: JobStatus,
        #[serde(with = "crate::types::epoch_seconds")]
        submit_time_before: DateTime<Utc>,
        #[serde(with = "crate::types::epoch_seconds")]
        submit_time_after: DateTime<Utc>,
    }
}

shape! {
    pub struct SentimentDetectionJobFilter {
        job_name: String,
        job_status: JobStatus,
        #[serde(with = "crate::types::epoch_seconds")]
        submit_time_before: DateTime<Utc>,
        #[serde(with = "crate::types::epoch_seconds")]
        submit_time_after: DateTime<Utc>,
    }
}

shape! {
    pub struct TopicsDetectionJobFilter {
        job_name: String,
        job_status: JobStatus,
        #[serde(with = "crate::types::epoch_seconds")]
        submit_time_before: DateTime<Utc>,
        #[serde(with = "crate::types::epoch_seconds")]
        submit_time_after: DateTime<Utc>,
    }
}

shape! {
    pub struct PiiEntitiesDetectionJobFilter {
        job_name: String,
        job_status: JobStatus,
        #[serde(with = "crate::types::epoch_seconds")]
        submit_time_before: DateTime<Utc>,
        #[serde(with = "crate::types::epoch_seconds")]
        submit_time_after: DateTime<Utc>,
    }
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

shape! {
    pub struct DocumentClassificationJobProperties {
        job_id: String,
        job_arn: String,
        job_name: String,
        job_status: JobStatus,
        message: String,
        #[serde(with = "crate::types::epoch_seconds")]
        submit_time: DateTime<Utc>,
        #[serde(with = "crate::types::epoch_seconds")]
        end_time: DateTime<Utc>,
        document_classifier_arn: String,
        input_data_config: InputDataConfig,
        output_data_config: OutputDataConfig,
        data_access_role_arn: String,
        volume_kms_key_id: String,
        vpc_config: VpcConfig,
        flywheel_arn: String,
    }
}

shape! {
    pub struct DominantLanguageDetectionJobProperties {
        job_id: String,
        job_arn: String,
        job_name: String,
        job_status: JobStatus,
        message: String,
        #[serde(with = "crate::types::epoch_seconds")]
        submit_time: DateTime<Utc>,
        #[serde(with = "crate::types::epoch_seconds")]
        end_time: DateTime<Utc>,
        input_data_config: InputDataConfig,
        output_data_config: OutputDataConfig,
        data_access_role_arn: String,
        volume_kms_key_id: String,
        vpc_config: VpcConfig,
    }
}

shape! {
    pub struct EntitiesDetectionJobProperties {
        job_id: String,
        job_arn: String,
        job_name: String,
        job_status: JobStatus,
        message: String,
        #[serde(with = "crate::types::epoch_seconds")]
        submit_time: DateTime<Utc>,
        #[serde(with = "crate::types::epoch_seconds")]
        end_time: DateTime<Utc>,
        /// Custom recognizer used by the job, absent for built-in entities.
        entity_recognizer_arn: String,
        input_data_config: InputDataConfig,
        output_data_config: OutputDataConfig,
        language_code: LanguageCode,
        data_access_role_arn: String,
        volume_kms_key_id: String,
        vpc_config: VpcConfig,
        flywheel_arn: String,
    }
}

shape! {
    pub struct KeyPhrasesDetectionJobProperties {
        job_id: String,
        job_arn: String,
        job_name: String,
        job_status: JobStatus,
        message: String,
        #[serde(with = "crate::types::epoch_seconds")]
        submit_time: DateTime<Utc>,
        #[serde(with = "crate::types::epoch_seconds")]
        end_time: DateTime<Utc>,
        input_data_config: InputDataConfig,
        output_data_config: OutputDataConfig,
        language_code: LanguageCode,
        data_access_role_arn: String,
        volume_kms_key_id: String,
        vpc_config: VpcConfig,
    }
}

shape! {
    pub struct SentimentDetectionJobProperties {
        job_id: String,
        job_arn: String,
        job_name: String,
        job_status: JobStatus,
        message: String,
        #[serde(with = "crate::types::epoch_seconds")]
        submit_time: DateTime<Utc>,
        #[serde(with = "crate::types::epoch_seconds")]
        end_time: DateTime<Utc>,
        input_data_config: InputDataConfig,
        output_data_config: OutputDataConfig,
        language_code: LanguageCode,
        data_access_role_arn: String,
        volume_kms_key_id: String,
        vpc_config: VpcConfig,
    }
}

shape! {
    pub struct TopicsDetectionJobProperties {
        job_id: String,
        job_arn: String,
        job_name: String,
        job_status: JobStatus,
        message: String,
        #[serde(with = "crate::types::epoch_seconds")]
        submit_time: DateTime<Utc>,
        #[serde(with = "crate::types::epoch_seconds")]
        end_time: DateTime<Utc>,
        input_data_config: InputDataConfig,
        output_data_config: OutputDataConfig,
        number_of_topics: i32,
        data_access_role_arn: String,
        volume_kms_key_id: String,
        vpc_config: VpcConfig,
    }
}

// ---------------------------------------------------------------------------
// PII jobs
// ---------------------------------------------------------------------------

shape! {
    /// Which PII types are redacted and how.
    pub struct RedactionConfig {
        pii_entity_types: Vec<PiiEntityType>,
        mask_mode: PiiEntitiesDetectionMaskMode,
        /// Single character used with `MASK`. Defaults to `*`.
        mask_character: String,
    }
}

shape! {
    pub struct PiiOutputDataConfig {
        s3_uri: String,
        kms_key_id: String,
    }
}

shape! {
    pub struct PiiEntitiesDetectionJobProperties {
        job_id: String,
        job_arn: String,
        job_name: String,
        job_status: JobStatus,
        message: String,
        #[serde(with = "crate::types::epoch_seconds")]
        submit_time: DateTime<Utc>,
        #[serde(with = "crate::types::epoch_seconds")]
        end_time: DateTime<Utc>,
        input_data_config: InputDataConfig,
        output_data_config: PiiOutputDataConfig,
        redaction_config: RedactionConfig,
        language_code: LanguageCode,
        data_access_role_arn: String,
        mode: PiiEntitiesDetectionMode,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn new_year() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    #[test]
    fn job_filter_contract() {
        let filter = DocumentClassificationJobFilter::default()
            .job_status("COMPLETED")
            .submit_time_after(new_year());

        assert_eq!(filter.job_status, Some(JobStatus::Completed));
        assert_eq!(filter.submit_time_after, Some(new_year()));

        let mut twin = DocumentClassificationJobFilter::default()
            .job_status(JobStatus::Completed)
            .submit_time_after(new_year());
        assert_eq!(filter, twin);
        assert_eq!(hash_of(&filter), hash_of(&twin));

        twin.job_status = Some(JobStatus::Failed);
        assert_ne!(filter, twin);
    }

    #[test]
    fn job_filter_renders_present_members_only() {
        let filter = TopicsDetectionJobFilter::default()
            .job_status(JobStatus::Completed)
            .submit_time_after(new_year());

        assert_eq!(
            filter.to_string(),
            "{JobStatus: COMPLETED, SubmitTimeAfter: 2023-01-01T00:00:00Z}"
        );
    }

    #[test]
    fn pii_job_properties_decode_redaction_config() {
        let value = serde_json::json!({
            "JobId": "job-1",
            "JobStatus": "IN_PROGRESS",
            "SubmitTime": 1_672_531_200,
            "Mode": "ONLY_REDACTION",
            "RedactionConfig": {
                "PiiEntityTypes": ["NAME", "SSN"],
                "MaskMode": "MASK",
                "MaskCharacter": "#"
            }
        });

        let properties: PiiEntitiesDetectionJobProperties =
            serde_json::from_value(value).expect("properties should deserialize");

        assert_eq!(properties.submit_time, Some(new_year()));
        assert_eq!(properties.mode, Some(PiiEntitiesDetectionMode::OnlyRedaction));
        let redaction = properties.redaction_config.expect("redaction config");
        assert_eq!(
            redaction.pii_entity_types,
            Some(vec![PiiEntityType::Name, PiiEntityType::Ssn])
        );
        assert_eq!(redaction.mask_character.as_deref(), Some("#"));
    }

    #[test]
    fn submit_time_kept_at_millisecond_precision() {
        let precise = Utc
            .with_ymd_and_hms(2023, 1, 1, 0, 0, 0)
            .single()
            .expect("valid timestamp")
            + chrono::Duration::nanoseconds(123_456_789);
        let filter = EntitiesDetectionJobFilter::default().submit_time_after(precise);

        assert_eq!(
            filter.to_string(),
            "{SubmitTimeAfter: 2023-01-01T00:00:00.123Z}"
        );

        let encoded = serde_json::to_string(&filter).expect("serialize filter");
        assert_eq!(encoded, r#"{"SubmitTimeAfter":1672531200.123}"#);
        let decoded: EntitiesDetectionJobFilter =
            serde_json::from_str(&encoded).expect("deserialize filter");
        assert_eq!(decoded, filter);
    }

    #[test]
    fn assigned_submit_time_renders_like_the_wire() {
        let mut filter = EntitiesDetectionJobFilter::default();
        filter.submit_time_before = DateTime::from_timestamp(1_672_531_200, 999_999_999);

        assert_eq!(
            filter.to_string(),
            "{SubmitTimeBefore: 2023-01-01T00:00:00.999Z}"
        );
    }
}
