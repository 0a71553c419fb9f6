//! Shrinkray WASM - WebAssembly bindings for shrinkray
//!
//! This crate exposes the shrinkray-core compression pipeline to
//! JavaScript/TypeScript applications, typically from a Web Worker so the
//! synchronous encode loop stays off the main thread.
//!
//! # Module Structure
//!
//! - `compress` - The `compress` entry point and `fit_dimensions` helper
//! - `types` - WASM-compatible wrapper type for the compressed artifact
//!
//! # Usage
//!
//! ```typescript
//! import init, { compress } from '@shrinkray/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const artifact = compress(bytes, file.type, { max_width: 1280 });
//! const blob = new Blob([artifact.bytes()], { type: artifact.mime_type });
//! artifact.free();
//! ```

use wasm_bindgen::prelude::*;

mod compress;
mod types;

// Re-export public items
pub use compress::{compress, fit_dimensions};
pub use types::JsCompressedArtifact;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
