//! Shrinkray Core - client-side image recompression to a byte budget
//!
//! This crate takes a source image payload and produces a re-encoded version
//! that fits within a target byte size while respecting maximum dimensions
//! and a minimum acceptable quality. The pipeline is a one-shot sequence:
//! resolve policy, decode, fit-and-resample geometry, run the recompression
//! search, package the result. The search in [`search`] is the interesting
//! part; the other stages are straight-line glue around it.
//!
//! All operations are synchronous and single-threaded within WASM; the
//! asynchronous composition (file reads, worker messaging) belongs to the
//! JavaScript host.

pub mod artifact;
pub mod decode;
pub mod encoder;
pub mod estimate;
pub mod geometry;
pub mod policy;
pub mod search;
pub mod surface;

use thiserror::Error;

pub use artifact::CompressedArtifact;
pub use decode::{decode_image, DecodeError, Orientation};
pub use encoder::{Encoder, EncodeError, JpegEncoder};
pub use estimate::estimate_encoded_size;
pub use geometry::{fit_dimensions, resample};
pub use policy::{CompressionOptions, CompressionPolicy, PolicyError};
pub use search::{run_search, SearchError, SearchOutcome, MAX_ENCODE_ATTEMPTS};
pub use surface::PixelSurface;

/// Errors surfaced by the one-shot compression pipeline.
///
/// Every failure is terminal for the invocation; nothing is retried.
#[derive(Debug, Error)]
pub enum CompressError {
    /// The resolved policy is invalid; raised before any decode or encode.
    #[error("Invalid compression policy: {0}")]
    InvalidPolicy(#[from] PolicyError),

    /// The source payload could not be decoded as an image.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// An encode attempt failed, aborting the search.
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// The search hit its attempt cap without converging.
    #[error(
        "Could not reach target size {target} within {attempts} encode attempts \
         (last size estimate: {estimate:.0})"
    )]
    UnreachableTarget {
        attempts: u32,
        estimate: f64,
        target: u64,
    },
}

impl From<SearchError> for CompressError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::Encode(e) => CompressError::Encode(e),
            SearchError::UnreachableTarget {
                attempts,
                estimate,
                target,
            } => CompressError::UnreachableTarget {
                attempts,
                estimate,
                target,
            },
        }
    }
}

/// Compress a source image payload to fit the configured byte budget.
///
/// `content_type` is the declared type of the payload; with no `file_type`
/// override it becomes the artifact's MIME type, whether or not it matches
/// the encoder's actual output format. Options merge over per-file values
/// and built-in defaults as documented on [`CompressionOptions`].
///
/// The pipeline runs policy resolution, decode, geometry (skipped entirely
/// when `resize` is false), the recompression search against the JPEG
/// encoder, and packaging. It has no side effects on any shared state;
/// displaying or storing the artifact is the caller's business.
///
/// # Errors
///
/// Returns a [`CompressError`] naming the failed stage. Policy validation
/// happens first, so invalid options never cost a decode or an encode.
pub fn compress(
    bytes: &[u8],
    content_type: &str,
    options: &CompressionOptions,
) -> Result<CompressedArtifact, CompressError> {
    let policy = CompressionPolicy::resolve(options, content_type, bytes.len() as u64)?;

    let decoded = decode_image(bytes)?;

    let surface = if policy.resize {
        let (width, height) = fit_dimensions(
            policy.max_width,
            policy.max_height,
            decoded.width,
            decoded.height,
        );
        resample(&decoded, width, height)?
    } else {
        decoded
    };

    let outcome = run_search(&surface, &policy, &JpegEncoder::new())?;

    Ok(CompressedArtifact::new(outcome.payload, policy.mime_type))
}
