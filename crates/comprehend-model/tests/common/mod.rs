/*
[INPUT]:  Canned service payloads
[OUTPUT]: Shared fixtures for integration tests
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for comprehend-model tests

use chrono::{DateTime, TimeZone, Utc};
use comprehend_model::{EntitiesDetectionJobFilter, JobStatus};

/// 2023-01-01T00:00:00Z
pub fn new_year_2023() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0)
        .single()
        .expect("valid timestamp")
}

/// Filter used by the equality scenarios
pub fn completed_filter() -> EntitiesDetectionJobFilter {
    EntitiesDetectionJobFilter::default()
        .job_status(JobStatus::Completed)
        .submit_time_after(new_year_2023())
}

/// DetectEntities reply with one entity and no layout data
pub const DETECT_ENTITIES_BODY: &str = r#"{
    "Entities": [
        {"Score": 0.5, "Type": "ORGANIZATION", "Text": "Amazon", "BeginOffset": 0, "EndOffset": 6}
    ]
}"#;

/// ListEntitiesDetectionJobs reply with epoch-second timestamps
pub const LIST_ENTITIES_JOBS_BODY: &str = r#"{
    "EntitiesDetectionJobPropertiesList": [
        {
            "JobId": "job-1",
            "JobName": "nightly",
            "JobStatus": "COMPLETED",
            "SubmitTime": 1672531200,
            "EndTime": 1672531260.5,
            "LanguageCode": "en"
        }
    ],
    "NextToken": "page-2"
}"#;

/// BatchDetectSentiment reply with one success and one failure
pub const BATCH_SENTIMENT_BODY: &str = r#"{
    "ResultList": [
        {"Index": 0, "Sentiment": "POSITIVE", "SentimentScore": {"Positive": 0.75, "Negative": 0.25}}
    ],
    "ErrorList": [
        {"Index": 1, "ErrorCode": "TEXT_SIZE_LIMIT_EXCEEDED", "ErrorMessage": "too long"}
    ]
}"#;
