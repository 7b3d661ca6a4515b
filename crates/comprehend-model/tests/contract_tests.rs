/*
[INPUT]:  Shapes built through fields and chaining methods
[OUTPUT]: Test results for the shared value contract
[POS]:    Integration tests - shape contract
[UPDATE]: When the accessor, equality, or rendering rules change
*/

mod common;

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use common::{completed_filter, new_year_2023};
use comprehend_model::{
    BatchDetectEntitiesRequest, EntitiesDetectionJobFilter, InputDataConfig, InputFormat,
    JobStatus, LanguageCode, ListEntitiesDetectionJobsRequest, StartEntitiesDetectionJobRequest,
    Tag, VpcConfig,
};
use pretty_assertions::assert_eq;

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_filter_scenario() {
    let mut first = completed_filter();
    let second = completed_filter();

    assert_eq!(first.job_status.as_ref().map(JobStatus::as_str), Some("COMPLETED"));
    assert_eq!(first.submit_time_after, Some(new_year_2023()));
    assert_eq!(first, second);
    assert_eq!(hash_of(&first), hash_of(&second));

    first.job_status = Some("FAILED".into());
    assert_ne!(first, second);
}

#[test]
fn test_chaining_matches_assignment() {
    let chained = InputDataConfig::default()
        .s3_uri("s3://bucket/in/")
        .input_format(InputFormat::OneDocPerLine);

    let mut assigned = InputDataConfig::default();
    assigned.s3_uri = Some("s3://bucket/in/".to_string());
    assigned.input_format = Some(InputFormat::OneDocPerLine);

    assert_eq!(chained, assigned);
}

#[test]
fn test_assigning_none_clears() {
    let mut filter = completed_filter();
    filter.submit_time_after = None;
    assert_eq!(filter, EntitiesDetectionJobFilter::default().job_status(JobStatus::Completed));
}

#[test]
fn test_list_member_initialized_and_appended_in_order() {
    let request = BatchDetectEntitiesRequest::default()
        .text_list(vec!["one".to_string(), "two".to_string()])
        .text_list(vec!["three".to_string()]);

    assert_eq!(
        request.text_list,
        Some(vec!["one".to_string(), "two".to_string(), "three".to_string()])
    );
}

#[test]
fn test_nested_list_of_shapes() {
    let vpc = VpcConfig::default()
        .security_group_ids(vec!["sg-1".to_string()])
        .subnets(vec!["subnet-a".to_string(), "subnet-b".to_string()]);
    let request = StartEntitiesDetectionJobRequest::default()
        .vpc_config(vpc)
        .tags(vec![Tag::default().key("team").value("nlp")]);

    assert_eq!(
        request.to_string(),
        "{VpcConfig: {SecurityGroupIds: [sg-1], Subnets: [subnet-a, subnet-b]}, Tags: [{Key: team, Value: nlp}]}"
    );
}

#[test]
fn test_display_lists_each_present_member_once() {
    let request = ListEntitiesDetectionJobsRequest::default()
        .filter(completed_filter())
        .max_results(25);

    assert_eq!(
        request.to_string(),
        "{Filter: {JobStatus: COMPLETED, SubmitTimeAfter: 2023-01-01T00:00:00Z}, MaxResults: 25}"
    );
    assert_eq!(ListEntitiesDetectionJobsRequest::default().to_string(), "{}");
}

#[test]
fn test_enum_accepts_raw_strings() {
    let request = BatchDetectEntitiesRequest::default().language_code("pt");
    assert_eq!(request.language_code, Some(LanguageCode::Pt));

    let request = BatchDetectEntitiesRequest::default().language_code("tlh");
    let code = request.language_code.unwrap();
    assert!(code.is_unknown());
    assert_eq!(code.as_str(), "tlh");
}
