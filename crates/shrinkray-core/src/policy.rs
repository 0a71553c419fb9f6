//! Compression options, resolved policy, and the layered merge between them.
//!
//! Configuration comes in three layers with documented precedence:
//! explicit caller options > per-file detected values (declared content type,
//! payload length) > built-in defaults. `CompressionOptions` is the
//! caller-facing layer with every field optional; `CompressionPolicy` is the
//! resolved, immutable configuration the pipeline runs with.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default starting quality for the recompression search.
pub const DEFAULT_QUALITY: f32 = 1.0;

/// Default quality floor below which the search will not encode again.
pub const DEFAULT_MIN_QUALITY: f32 = 0.8;

/// Default target byte size (3000 KiB).
pub const DEFAULT_TARGET_SIZE: u64 = 3000 * 1024;

/// Default maximum output width in pixels.
pub const DEFAULT_MAX_WIDTH: u32 = 1920;

/// Default maximum output height in pixels.
pub const DEFAULT_MAX_HEIGHT: u32 = 1920;

/// Errors raised while resolving a policy, before any decode or encode work.
#[derive(Debug, Error)]
pub enum PolicyError {
    /// The quality floor is above the starting quality, so the search could
    /// never satisfy its floor by stepping downward.
    #[error("Quality floor ({min_quality}) is above starting quality ({start_quality})")]
    QualityFloorAboveStart { min_quality: f32, start_quality: f32 },

    /// A zero target size can never be met by any encoded payload.
    #[error("Target byte size must be greater than zero")]
    ZeroTargetSize,
}

/// Caller-supplied overrides for a single compression invocation.
///
/// Every field is optional; missing fields fall back to per-file detected
/// values and then to the built-in defaults. Deserializes from a plain
/// JavaScript object at the WASM boundary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompressionOptions {
    /// Starting quality in (0, 1].
    pub quality: Option<f32>,
    /// Quality floor in [0, 1].
    pub min_quality: Option<f32>,
    /// Target byte size the search drives toward.
    pub target_size: Option<u64>,
    /// Maximum output width in pixels (0 = unbounded).
    pub max_width: Option<u32>,
    /// Maximum output height in pixels (0 = unbounded).
    pub max_height: Option<u32>,
    /// Whether to run the geometry stage at all.
    pub resize: Option<bool>,
    /// MIME type declared on the output artifact.
    pub file_type: Option<String>,
    /// Source byte size used to seed the search's size estimate.
    pub start_size: Option<u64>,
}

impl CompressionOptions {
    /// Create options with no overrides (all defaults apply).
    pub fn new() -> Self {
        Self::default()
    }
}

/// The resolved, immutable configuration for one compression invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressionPolicy {
    /// Quality the search starts at.
    pub start_quality: f32,
    /// Quality floor; the search stops encoding once quality is at or below it.
    pub min_quality: f32,
    /// Target byte size the search drives toward.
    pub target_size: u64,
    /// Maximum output width in pixels (0 = unbounded).
    pub max_width: u32,
    /// Maximum output height in pixels (0 = unbounded).
    pub max_height: u32,
    /// Whether the geometry stage runs before the search.
    pub resize: bool,
    /// MIME type declared on the output artifact. Flows through untouched,
    /// so a non-JPEG declared type yields mislabeled (but valid) output.
    pub mime_type: String,
    /// Original payload size in bytes; seeds the search's size estimate.
    pub source_size: u64,
}

impl CompressionPolicy {
    /// Resolve a policy from caller options and per-file detected values.
    ///
    /// Precedence per field: caller option > file-derived value > default.
    /// The declared `content_type` and `payload_len` are the file-derived
    /// values for `mime_type` and `source_size`.
    ///
    /// # Errors
    ///
    /// Returns `PolicyError` if the quality floor exceeds the starting
    /// quality or the target size is zero. Validation happens here, before
    /// any decode or encode work.
    pub fn resolve(
        options: &CompressionOptions,
        content_type: &str,
        payload_len: u64,
    ) -> Result<Self, PolicyError> {
        let policy = Self {
            start_quality: options.quality.unwrap_or(DEFAULT_QUALITY),
            min_quality: options.min_quality.unwrap_or(DEFAULT_MIN_QUALITY),
            target_size: options.target_size.unwrap_or(DEFAULT_TARGET_SIZE),
            max_width: options.max_width.unwrap_or(DEFAULT_MAX_WIDTH),
            max_height: options.max_height.unwrap_or(DEFAULT_MAX_HEIGHT),
            resize: options.resize.unwrap_or(true),
            mime_type: options
                .file_type
                .clone()
                .unwrap_or_else(|| content_type.to_string()),
            source_size: options.start_size.unwrap_or(payload_len),
        };
        policy.validate()?;
        Ok(policy)
    }

    fn validate(&self) -> Result<(), PolicyError> {
        if self.min_quality > self.start_quality {
            return Err(PolicyError::QualityFloorAboveStart {
                min_quality: self.min_quality,
                start_quality: self.start_quality,
            });
        }
        if self.target_size == 0 {
            return Err(PolicyError::ZeroTargetSize);
        }
        Ok(())
    }
}
