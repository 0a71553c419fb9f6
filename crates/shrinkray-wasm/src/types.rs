//! WASM-compatible wrapper types for compression output.
//!
//! This module provides the JavaScript-friendly artifact type that wraps the
//! core `CompressedArtifact`, handling the conversion between Rust and
//! JavaScript data representations.

use shrinkray_core::CompressedArtifact;
use wasm_bindgen::prelude::*;

/// A compressed artifact wrapper for JavaScript.
///
/// Wraps the core `CompressedArtifact` and exposes its declared MIME type,
/// payload length, payload bytes, and data-URL rendering.
///
/// # Memory Management
///
/// The payload is stored in WASM memory. When you call `bytes()`, a copy is
/// made to JavaScript memory as a `Uint8Array`. The `free()` method can be
/// called to explicitly release WASM memory, but this is optional as
/// wasm-bindgen's finalizer will handle cleanup automatically.
#[wasm_bindgen]
pub struct JsCompressedArtifact {
    inner: CompressedArtifact,
}

#[wasm_bindgen]
impl JsCompressedArtifact {
    /// Get the artifact's declared MIME type.
    ///
    /// This is the type the caller declared (or overrode), not necessarily
    /// the actual format of the bytes.
    #[wasm_bindgen(getter)]
    pub fn mime_type(&self) -> String {
        self.inner.mime_type().to_string()
    }

    /// Get the length of the encoded payload in bytes.
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.byte_length()
    }

    /// Returns the encoded payload as a Uint8Array.
    ///
    /// Note: This creates a copy of the payload in JavaScript memory.
    pub fn bytes(&self) -> Vec<u8> {
        self.inner.bytes().to_vec()
    }

    /// Render the artifact as a `data:{mime};base64,{payload}` URL.
    pub fn to_data_url(&self) -> String {
        self.inner.to_data_url()
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup
    /// automatically. Call this to immediately release a large payload.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsCompressedArtifact {
    /// Create a JsCompressedArtifact from a core artifact.
    ///
    /// This is an internal constructor used by the compress binding.
    pub(crate) fn from_artifact(inner: CompressedArtifact) -> Self {
        Self { inner }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapper_exposes_artifact_fields() {
        let artifact = CompressedArtifact::new(vec![0xFF, 0xD8, 0xFF, 0xD9], "image/jpeg");
        let js = JsCompressedArtifact::from_artifact(artifact);

        assert_eq!(js.mime_type(), "image/jpeg");
        assert_eq!(js.byte_length(), 4);
        assert_eq!(js.bytes(), vec![0xFF, 0xD8, 0xFF, 0xD9]);
    }

    #[test]
    fn test_wrapper_data_url() {
        let artifact = CompressedArtifact::new(vec![1, 2, 3], "image/png");
        let js = JsCompressedArtifact::from_artifact(artifact);

        assert!(js.to_data_url().starts_with("data:image/png;base64,"));
    }
}
