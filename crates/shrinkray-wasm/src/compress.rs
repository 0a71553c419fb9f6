//! Compression WASM bindings.
//!
//! This module exposes the shrinkray-core pipeline to JavaScript: the
//! one-shot `compress` entry point and the `fit_dimensions` geometry helper.
//!
//! # Example
//!
//! ```typescript
//! import { compress } from '@shrinkray/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const artifact = compress(bytes, file.type, { target_size: 500 * 1024 });
//! const blob = new Blob([artifact.bytes()], { type: artifact.mime_type });
//! artifact.free();
//! ```

use crate::types::JsCompressedArtifact;
use shrinkray_core::CompressionOptions;
use wasm_bindgen::prelude::*;

/// Helper struct for serializing fitted dimensions back to JS.
#[derive(serde::Serialize)]
struct FittedDimensions {
    width: u32,
    height: u32,
}

/// Compress a source image payload to fit a byte budget.
///
/// # Arguments
///
/// * `bytes` - Source image payload as a `Uint8Array`
/// * `content_type` - The payload's declared MIME type (e.g. `file.type`)
/// * `options` - Plain object with optional overrides: `quality`,
///   `min_quality`, `target_size`, `max_width`, `max_height`, `resize`,
///   `file_type`, `start_size`. Pass `undefined` or `{}` for defaults.
///
/// # Returns
///
/// A `JsCompressedArtifact` holding the re-encoded payload, or an error if
/// the options are malformed, the policy is invalid, the payload cannot be
/// decoded, or the search fails.
///
/// # Example
///
/// ```typescript
/// const artifact = compress(bytes, 'image/jpeg', {
///   target_size: 1024 * 1024,
///   max_width: 1280,
///   max_height: 1280,
/// });
/// console.log(`${artifact.byte_length} bytes as ${artifact.mime_type}`);
/// ```
#[wasm_bindgen]
pub fn compress(
    bytes: &[u8],
    content_type: &str,
    options: JsValue,
) -> Result<JsCompressedArtifact, JsValue> {
    let options: CompressionOptions = if options.is_undefined() || options.is_null() {
        CompressionOptions::new()
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsValue::from_str(&format!("Invalid options: {}", e)))?
    };

    let artifact = shrinkray_core::compress(bytes, content_type, &options)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    #[cfg(target_arch = "wasm32")]
    web_sys::console::debug_1(
        &format!(
            "shrinkray: compressed {} bytes to {} bytes ({})",
            bytes.len(),
            artifact.byte_length(),
            artifact.mime_type()
        )
        .into(),
    );

    Ok(JsCompressedArtifact::from_artifact(artifact))
}

/// Compute output dimensions that fit within bounds, preserving aspect ratio.
///
/// A bound of 0 means that axis is unbounded. Never upscales beyond the
/// source dimensions.
///
/// # Returns
///
/// A `{width, height}` object.
#[wasm_bindgen]
pub fn fit_dimensions(
    max_width: u32,
    max_height: u32,
    source_width: u32,
    source_height: u32,
) -> Result<JsValue, JsValue> {
    let (width, height) =
        shrinkray_core::fit_dimensions(max_width, max_height, source_width, source_height);

    serde_wasm_bindgen::to_value(&FittedDimensions { width, height })
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
