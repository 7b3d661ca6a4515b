/*
[INPUT]:  Request documents and canned response bodies
[OUTPUT]: Test results for encoding, decoding, and the operation registry
[POS]:    Integration tests - wire codec
[UPDATE]: When the wire format or operation catalog changes
*/

mod common;

use common::{BATCH_SENTIMENT_BODY, DETECT_ENTITIES_BODY, LIST_ENTITIES_JOBS_BODY, new_year_2023};
use comprehend_model::{
    BatchDetectSentimentRequest, ComprehendError, DetectDominantLanguageRequest,
    DetectEntitiesRequest, DetectSentimentRequest, EntityType, JobStatus,
    ListEntitiesDetectionJobsRequest, OPERATIONS, SentimentScore, ServiceConfig,
    ServiceErrorKind, StartTopicsDetectionJobRequest, decode, decode_result, encode, find_operation,
};
use ordered_float::OrderedFloat;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

#[test]
fn test_every_operation_is_reachable_by_name() {
    for entry in OPERATIONS {
        let found = find_operation(entry.name).expect("registered operation");
        assert_eq!(found.target, format!("Comprehend_20171127.{}", entry.name));
    }
}

#[test]
fn test_encode_through_registry() {
    let entry = find_operation("ListEntitiesDetectionJobs").unwrap();
    let document = json!({
        "Filter": { "JobStatus": "COMPLETED", "SubmitTimeAfter": 1672531200 },
        "MaxResults": 10
    });

    let wire = entry
        .encode(document, &ServiceConfig::new("eu-west-1"))
        .unwrap();

    assert_eq!(wire.url.as_str(), "https://comprehend.eu-west-1.amazonaws.com/");
    assert_eq!(wire.target, "Comprehend_20171127.ListEntitiesDetectionJobs");
    let body: Value = serde_json::from_str(&wire.body).unwrap();
    assert_eq!(
        body,
        json!({
            "Filter": { "JobStatus": "COMPLETED", "SubmitTimeAfter": 1672531200 },
            "MaxResults": 10
        })
    );
}

#[test]
fn test_encode_typed_filter_uses_epoch_seconds() {
    let mut request = ListEntitiesDetectionJobsRequest::default().filter(common::completed_filter());
    let wire = encode(&mut request, &ServiceConfig::default()).unwrap();
    assert_eq!(
        wire.body,
        r#"{"Filter":{"JobStatus":"COMPLETED","SubmitTimeAfter":1672531200}}"#
    );
}

#[test]
fn test_registry_rejects_wrong_member_types() {
    let entry = find_operation("DetectSentiment").unwrap();
    let err = entry
        .encode(json!({ "Text": 42 }), &ServiceConfig::default())
        .unwrap_err();
    assert!(matches!(err, ComprehendError::Serialization(_)));
}

#[test]
fn test_start_job_gets_token_once() {
    let mut request = StartTopicsDetectionJobRequest::default().job_name("topics");
    let first = encode(&mut request, &ServiceConfig::default()).unwrap();
    let token = request.client_request_token.clone().expect("token generated");

    let second = encode(&mut request, &ServiceConfig::default()).unwrap();
    assert_eq!(request.client_request_token.as_deref(), Some(token.as_str()));
    assert_eq!(first.body, second.body);

    let body: Value = serde_json::from_str(&first.body).unwrap();
    assert_eq!(body["ClientRequestToken"], Value::String(token));
}

#[test]
fn test_decode_entities() {
    let output = decode::<DetectEntitiesRequest>(DETECT_ENTITIES_BODY.as_bytes()).unwrap();
    let entities = output.entities.unwrap();
    assert_eq!(entities.len(), 1);
    assert_eq!(entities[0].r#type, Some(EntityType::Organization));
    assert_eq!(entities[0].score, Some(OrderedFloat(0.5)));
    assert_eq!(output.blocks, None);
}

#[test]
fn test_decode_job_list_timestamps() {
    let output = decode::<ListEntitiesDetectionJobsRequest>(LIST_ENTITIES_JOBS_BODY.as_bytes()).unwrap();
    let jobs = output.entities_detection_job_properties_list.unwrap();

    assert_eq!(jobs[0].job_status, Some(JobStatus::Completed));
    assert_eq!(jobs[0].submit_time, Some(new_year_2023()));
    assert_eq!(
        jobs[0].end_time.map(|time| time.timestamp_millis()),
        Some(1_672_531_260_500)
    );
    assert_eq!(output.next_token.as_deref(), Some("page-2"));
}

#[test]
fn test_render_batch_through_registry() {
    let entry = find_operation("BatchDetectSentiment").unwrap();
    let rendered = entry.render(BATCH_SENTIMENT_BODY.as_bytes()).unwrap();
    assert_eq!(
        rendered,
        "{ResultList: [{Index: 0, Sentiment: POSITIVE, SentimentScore: {Positive: 0.75, Negative: 0.25}}], \
         ErrorList: [{Index: 1, ErrorCode: TEXT_SIZE_LIMIT_EXCEEDED, ErrorMessage: too long}]}"
    );
}

#[test]
fn test_decode_result_service_error() {
    let body = br#"{"__type":"com.amazonaws.comprehend#TextSizeLimitExceededException","message":"Input text size exceeds limit"}"#;
    let err = decode_result::<BatchDetectSentimentRequest>(400, body).unwrap_err();

    let service = err.service_error().expect("service error");
    assert_eq!(service.kind, ServiceErrorKind::TextSizeLimitExceeded);
    assert_eq!(service.status, 400);
    assert!(!err.is_retryable());
}

#[test]
fn test_service_scores_survive_decode_and_encode() {
    let body = br#"{
        "Sentiment": "POSITIVE",
        "SentimentScore": {
            "Positive": 0.9999852180480957,
            "Negative": 0.12345678901234567,
            "Neutral": 1e-30,
            "Mixed": 2.5E-7
        }
    }"#;
    let output = decode::<DetectSentimentRequest>(body).unwrap();
    let score = output.sentiment_score.clone().unwrap();

    assert_eq!(score.positive, Some(OrderedFloat(0.9999852180480957)));
    assert_eq!(score.negative, Some(OrderedFloat(0.12345678901234567)));
    assert_eq!(score.neutral, Some(OrderedFloat(1e-30)));
    assert_eq!(score.mixed, Some(OrderedFloat(2.5e-7)));

    let encoded = serde_json::to_string(&score).unwrap();
    let again: SentimentScore = serde_json::from_str(&encoded).unwrap();
    assert_eq!(again, score);
}

#[test]
fn test_small_scores_are_not_flattened() {
    let body = br#"{"Languages":[{"LanguageCode":"en","Score":1e-30}]}"#;
    let output = decode::<DetectDominantLanguageRequest>(body).unwrap();
    let score = output.languages.unwrap()[0].score.unwrap();

    assert!(score.0 > 0.0);
    assert_eq!(score, OrderedFloat(1e-30));
}
