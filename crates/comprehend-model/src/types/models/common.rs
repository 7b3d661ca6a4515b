/*
[INPUT]:  API schema definitions shared across operations
[OUTPUT]: Configuration and bookkeeping shapes embedded in many requests
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use crate::contract::shape;
use crate::types::enums::{DocumentReadAction, DocumentReadFeatureTypes, DocumentReadMode, InputFormat};

shape! {
    /// A key-value pair attached to a Comprehend resource.
    pub struct Tag {
        /// Required. Up to 128 characters.
        key: String,
        value: String,
    }
}

shape! {
    /// Private VPC used by training and inference jobs.
    pub struct VpcConfig {
        /// Security group IDs, `sg-` prefixed.
        security_group_ids: Vec<String>,
        subnets: Vec<String>,
    }
}

shape! {
    /// Controls how Textract reads image files and scanned PDFs.
    pub struct DocumentReaderConfig {
        document_read_action: DocumentReadAction,
        document_read_mode: DocumentReadMode,
        /// Only valid with `TEXTRACT_ANALYZE_DOCUMENT`.
        feature_types: Vec<DocumentReadFeatureTypes>,
    }
}

shape! {
    /// Input location and format of an asynchronous job.
    pub struct InputDataConfig {
        s3_uri: String,
        input_format: InputFormat,
        document_reader_config: DocumentReaderConfig,
    }
}

shape! {
    /// Where an asynchronous job writes its output archive.
    pub struct OutputDataConfig {
        s3_uri: String,
        kms_key_id: String,
    }
}

shape! {
    /// Per-document failure inside a batch call.
    pub struct BatchItemError {
        /// Zero-based position of the document in the request.
        index: i32,
        error_code: String,
        error_message: String,
    }
}
