//! The output artifact: final bytes plus their declared MIME type.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// The final compressed output. Bytes pass through packaging unmodified.
///
/// The MIME type is whatever policy resolution produced, not what the
/// encoder actually emitted: a caller declaring `image/png` against the
/// JPEG encoder receives JPEG bytes labeled `image/png`. That mislabeling
/// is reproducible, documented behavior, not something packaging corrects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedArtifact {
    bytes: Vec<u8>,
    mime_type: String,
}

impl CompressedArtifact {
    /// Package encoded bytes under a declared MIME type.
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
        }
    }

    /// The encoded payload bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the artifact, returning the payload bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// The declared MIME type.
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Length of the encoded payload in bytes.
    pub fn byte_length(&self) -> usize {
        self.bytes.len()
    }

    /// Render the artifact as a `data:{mime};base64,{payload}` URL.
    ///
    /// This is the text-safe framing the size-estimate constants are
    /// calibrated against.
    pub fn to_data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.mime_type,
            STANDARD.encode(&self.bytes)
        )
    }
}
