/*
[INPUT]:  Request/response shape pairs
[OUTPUT]: Operation trait impls and a by-name registry of the catalog
[POS]:    Catalog layer - binds each request to its wire target and output
[UPDATE]: When operations are added to the API model
*/

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use uuid::Uuid;

use crate::codec::{self, WireRequest};
use crate::config::ServiceConfig;
use crate::error::{ComprehendError, Result};
use crate::types::*;

/// Prefix of the `X-Amz-Target` header for every operation
pub const TARGET_PREFIX: &str = "Comprehend_20171127";

/// A request shape bound to a service operation.
pub trait Operation: Serialize {
    /// Operation name, e.g. `DetectSentiment`
    const NAME: &'static str;

    type Output: DeserializeOwned + fmt::Display;

    /// Value of the `X-Amz-Target` header
    fn target() -> String {
        format!("{TARGET_PREFIX}.{}", Self::NAME)
    }

    /// The `ClientRequestToken` slot, for operations that accept one
    fn idempotency_token(&mut self) -> Option<&mut Option<String>> {
        None
    }
}

/// Fills the idempotency token with a fresh UUID when the operation takes one
/// and the caller left it empty. Returns the token in effect.
pub fn ensure_idempotency_token<O: Operation>(request: &mut O) -> Option<&str> {
    let slot = request.idempotency_token()?;
    let token = slot.get_or_insert_with(|| Uuid::new_v4().to_string());
    Some(token.as_str())
}

/// Registry entry for one operation, usable when the operation is only known
/// by name at runtime.
#[derive(Debug, Clone, Copy)]
pub struct OperationEntry {
    pub name: &'static str,
    pub target: &'static str,
    /// Whether a `ClientRequestToken` is generated when absent
    pub idempotent: bool,
    encode: fn(serde_json::Value, &ServiceConfig) -> Result<WireRequest>,
    render: fn(&[u8]) -> Result<String>,
}

impl OperationEntry {
    /// Encode a request document (JSON/YAML value using wire member names)
    pub fn encode(&self, document: serde_json::Value, config: &ServiceConfig) -> Result<WireRequest> {
        (self.encode)(document, config)
    }

    /// Decode a successful response body and render it with `Display`
    pub fn render(&self, body: &[u8]) -> Result<String> {
        (self.render)(body)
    }
}

fn encode_document<O>(document: serde_json::Value, config: &ServiceConfig) -> Result<WireRequest>
where
    O: Operation + DeserializeOwned,
{
    let mut request: O = serde_json::from_value(document)?;
    codec::encode(&mut request, config)
}

fn render_body<O: Operation>(body: &[u8]) -> Result<String> {
    Ok(codec::decode::<O>(body)?.to_string())
}

/// Look up an operation by its exact name
pub fn find_operation(name: &str) -> Result<&'static OperationEntry> {
    OPERATIONS
        .iter()
        .find(|entry| entry.name == name)
        .ok_or_else(|| ComprehendError::UnknownOperation(name.to_string()))
}

macro_rules! operations {
    (@idempotent $token:ident) => { true };
    (@idempotent) => { false };
    (
        $(
            $name:ident: $request:ident => $response:ident $([token = $token:ident])?;
        )*
    ) => {
        $(
            impl Operation for $request {
                const NAME: &'static str = stringify!($name);
                type Output = $response;

                $(
                    fn idempotency_token(&mut self) -> Option<&mut Option<String>> {
                        Some(&mut self.$token)
                    }
                )?
            }
        )*

        /// Every operation in the catalog, in declaration order.
        pub static OPERATIONS: &[OperationEntry] = &[
            $(
                OperationEntry {
                    name: stringify!($name),
                    target: concat!("Comprehend_20171127.", stringify!($name)),
                    idempotent: operations!(@idempotent $($token)?),
                    encode: encode_document::<$request>,
                    render: render_body::<$request>,
                },
            )*
        ];
    };
}

operations! {
    // Real-time analysis
    BatchDetectDominantLanguage: BatchDetectDominantLanguageRequest => BatchDetectDominantLanguageResponse;
    BatchDetectEntities: BatchDetectEntitiesRequest => BatchDetectEntitiesResponse;
    BatchDetectKeyPhrases: BatchDetectKeyPhrasesRequest => BatchDetectKeyPhrasesResponse;
    BatchDetectSentiment: BatchDetectSentimentRequest => BatchDetectSentimentResponse;
    BatchDetectSyntax: BatchDetectSyntaxRequest => BatchDetectSyntaxResponse;
    BatchDetectTargetedSentiment: BatchDetectTargetedSentimentRequest => BatchDetectTargetedSentimentResponse;
    ClassifyDocument: ClassifyDocumentRequest => ClassifyDocumentResponse;
    ContainsPiiEntities: ContainsPiiEntitiesRequest => ContainsPiiEntitiesResponse;
    DetectDominantLanguage: DetectDominantLanguageRequest => DetectDominantLanguageResponse;
    DetectEntities: DetectEntitiesRequest => DetectEntitiesResponse;
    DetectKeyPhrases: DetectKeyPhrasesRequest => DetectKeyPhrasesResponse;
    DetectPiiEntities: DetectPiiEntitiesRequest => DetectPiiEntitiesResponse;
    DetectSentiment: DetectSentimentRequest => DetectSentimentResponse;
    DetectSyntax: DetectSyntaxRequest => DetectSyntaxResponse;
    DetectTargetedSentiment: DetectTargetedSentimentRequest => DetectTargetedSentimentResponse;

    // Custom models
    CreateDocumentClassifier: CreateDocumentClassifierRequest => CreateDocumentClassifierResponse [token = client_request_token];
    DeleteDocumentClassifier: DeleteDocumentClassifierRequest => DeleteDocumentClassifierResponse;
    DescribeDocumentClassifier: DescribeDocumentClassifierRequest => DescribeDocumentClassifierResponse;
    ListDocumentClassifiers: ListDocumentClassifiersRequest => ListDocumentClassifiersResponse;
    StopTrainingDocumentClassifier: StopTrainingDocumentClassifierRequest => StopTrainingDocumentClassifierResponse;
    CreateEntityRecognizer: CreateEntityRecognizerRequest => CreateEntityRecognizerResponse [token = client_request_token];
    DeleteEntityRecognizer: DeleteEntityRecognizerRequest => DeleteEntityRecognizerResponse;
    DescribeEntityRecognizer: DescribeEntityRecognizerRequest => DescribeEntityRecognizerResponse;
    ListEntityRecognizers: ListEntityRecognizersRequest => ListEntityRecognizersResponse;
    StopTrainingEntityRecognizer: StopTrainingEntityRecognizerRequest => StopTrainingEntityRecognizerResponse;

    // Asynchronous jobs
    StartDocumentClassificationJob: StartDocumentClassificationJobRequest => StartDocumentClassificationJobResponse [token = client_request_token];
    DescribeDocumentClassificationJob: DescribeDocumentClassificationJobRequest => DescribeDocumentClassificationJobResponse;
    ListDocumentClassificationJobs: ListDocumentClassificationJobsRequest => ListDocumentClassificationJobsResponse;
    StartDominantLanguageDetectionJob: StartDominantLanguageDetectionJobRequest => StartDominantLanguageDetectionJobResponse [token = client_request_token];
    DescribeDominantLanguageDetectionJob: DescribeDominantLanguageDetectionJobRequest => DescribeDominantLanguageDetectionJobResponse;
    ListDominantLanguageDetectionJobs: ListDominantLanguageDetectionJobsRequest => ListDominantLanguageDetectionJobsResponse;
    StopDominantLanguageDetectionJob: StopDominantLanguageDetectionJobRequest => StopDominantLanguageDetectionJobResponse;
    StartEntitiesDetectionJob: StartEntitiesDetectionJobRequest => StartEntitiesDetectionJobResponse [token = client_request_token];
    DescribeEntitiesDetectionJob: DescribeEntitiesDetectionJobRequest => DescribeEntitiesDetectionJobResponse;
    ListEntitiesDetectionJobs: ListEntitiesDetectionJobsRequest => ListEntitiesDetectionJobsResponse;
    StopEntitiesDetectionJob: StopEntitiesDetectionJobRequest => StopEntitiesDetectionJobResponse;
    StartKeyPhrasesDetectionJob: StartKeyPhrasesDetectionJobRequest => StartKeyPhrasesDetectionJobResponse [token = client_request_token];
    DescribeKeyPhrasesDetectionJob: DescribeKeyPhrasesDetectionJobRequest => DescribeKeyPhrasesDetectionJobResponse;
    ListKeyPhrasesDetectionJobs: ListKeyPhrasesDetectionJobsRequest => ListKeyPhrasesDetectionJobsResponse;
    StopKeyPhrasesDetectionJob: StopKeyPhrasesDetectionJobRequest => StopKeyPhrasesDetectionJobResponse;
    StartSentimentDetectionJob: StartSentimentDetectionJobRequest => StartSentimentDetectionJobResponse [token = client_request_token];
    DescribeSentimentDetectionJob: DescribeSentimentDetectionJobRequest => DescribeSentimentDetectionJobResponse;
    ListSentimentDetectionJobs: ListSentimentDetectionJobsRequest => ListSentimentDetectionJobsResponse;
    StopSentimentDetectionJob: StopSentimentDetectionJobRequest => StopSentimentDetectionJobResponse;
    StartTopicsDetectionJob: StartTopicsDetectionJobRequest => StartTopicsDetectionJobResponse [token = client_request_token];
    DescribeTopicsDetectionJob: DescribeTopicsDetectionJobRequest => DescribeTopicsDetectionJobResponse;
    ListTopicsDetectionJobs: ListTopicsDetectionJobsRequest => ListTopicsDetectionJobsResponse;
    StartPiiEntitiesDetectionJob: StartPiiEntitiesDetectionJobRequest => StartPiiEntitiesDetectionJobResponse [token = client_request_token];
    DescribePiiEntitiesDetectionJob: DescribePiiEntitiesDetectionJobRequest => DescribePiiEntitiesDetectionJobResponse;
    ListPiiEntitiesDetectionJobs: ListPiiEntitiesDetectionJobsRequest => ListPiiEntitiesDetectionJobsResponse;
    StopPiiEntitiesDetectionJob: StopPiiEntitiesDetectionJobRequest => StopPiiEntitiesDetectionJobResponse;

    // Endpoints, datasets, flywheels
    CreateEndpoint: CreateEndpointRequest => CreateEndpointResponse [token = client_request_token];
    DeleteEndpoint: DeleteEndpointRequest => DeleteEndpointResponse;
    DescribeEndpoint: DescribeEndpointRequest => DescribeEndpointResponse;
    ListEndpoints: ListEndpointsRequest => ListEndpointsResponse;
    UpdateEndpoint: UpdateEndpointRequest => UpdateEndpointResponse;
    CreateDataset: CreateDatasetRequest => CreateDatasetResponse [token = client_request_token];
    DescribeDataset: DescribeDatasetRequest => DescribeDatasetResponse;
    ListDatasets: ListDatasetsRequest => ListDatasetsResponse;
    CreateFlywheel: CreateFlywheelRequest => CreateFlywheelResponse [token = client_request_token];
    DeleteFlywheel: DeleteFlywheelRequest => DeleteFlywheelResponse;
    DescribeFlywheel: DescribeFlywheelRequest => DescribeFlywheelResponse;
    ListFlywheels: ListFlywheelsRequest => ListFlywheelsResponse;
    UpdateFlywheel: UpdateFlywheelRequest => UpdateFlywheelResponse;

    // Tagging
    TagResource: TagResourceRequest => TagResourceResponse;
    UntagResource: UntagResourceRequest => UntagResourceResponse;
    ListTagsForResource: ListTagsForResourceRequest => ListTagsForResourceResponse;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_target_header() {
        assert_eq!(
            DetectSentimentRequest::target(),
            "Comprehend_20171127.DetectSentiment"
        );
        assert_eq!(
            find_operation("DetectSentiment").unwrap().target,
            DetectSentimentRequest::target()
        );
    }

    #[test]
    fn test_registry_names_unique() {
        let names: HashSet<_> = OPERATIONS.iter().map(|entry| entry.name).collect();
        assert_eq!(names.len(), OPERATIONS.len());
        assert_eq!(OPERATIONS.len(), 67);
    }

    #[test]
    fn test_unknown_operation() {
        let err = find_operation("DetectSarcasm").unwrap_err();
        assert!(matches!(err, ComprehendError::UnknownOperation(name) if name == "DetectSarcasm"));
    }

    #[test]
    fn test_token_generated_when_absent() {
        let mut request = StartEntitiesDetectionJobRequest::default();
        let token = ensure_idempotency_token(&mut request).unwrap().to_string();
        assert!(Uuid::parse_str(&token).is_ok());
        assert_eq!(request.client_request_token.as_deref(), Some(token.as_str()));
    }

    #[test]
    fn test_token_never_overwritten() {
        let mut request = CreateEndpointRequest::default().client_request_token("mine");
        assert_eq!(ensure_idempotency_token(&mut request), Some("mine"));
    }

    #[test]
    fn test_no_token_for_reads() {
        let mut request = DescribeEndpointRequest::default();
        assert_eq!(ensure_idempotency_token(&mut request), None);
        assert!(!find_operation("DescribeEndpoint").unwrap().idempotent);
        assert!(find_operation("CreateFlywheel").unwrap().idempotent);
    }
}
