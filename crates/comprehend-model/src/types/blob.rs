/*
[INPUT]:  Raw document bytes (PDF, Word, images) supplied by callers
[OUTPUT]: Binary member type serialized as base64 on the wire
[POS]:    Data layer - scalar member types
[UPDATE]: When the blob encoding on the wire changes
*/

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Binary member, base64 encoded in JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Blob(Vec<u8>);

impl Blob {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for Blob {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for Blob {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl Serialize for Blob {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&BASE64.encode(&self.0))
    }
}

impl<'de> Deserialize<'de> for Blob {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        BASE64
            .decode(encoded.as_bytes())
            .map(Self)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blob_serializes_as_base64() {
        let blob = Blob::new(b"%PDF-1.7".to_vec());
        let json = serde_json::to_string(&blob).expect("serialize blob");
        assert_eq!(json, "\"JVBERi0xLjc=\"");

        let decoded: Blob = serde_json::from_str(&json).expect("deserialize blob");
        assert_eq!(decoded, blob);
    }

    #[test]
    fn blob_rejects_invalid_base64() {
        let result = serde_json::from_str::<Blob>("\"not base64!\"");
        assert!(result.is_err());
    }

    #[test]
    fn blob_exposes_raw_bytes() {
        assert!(Blob::default().is_empty());

        let blob = Blob::from(&b"page"[..]);
        assert_eq!(blob.len(), 4);
        assert!(!blob.is_empty());
        assert_eq!(blob.as_bytes(), b"page");
        assert_eq!(blob.into_inner(), b"page".to_vec());
    }
}
