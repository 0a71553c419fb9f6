//! The adaptive recompression search.
//!
//! Re-encodes one fixed pixel surface at stepwise-decreasing quality until
//! the derived size estimate drops to the target and quality has reached the
//! floor. Byte size is the only "size" in play here; pixel dimensions are
//! settled before the search starts and never change inside the loop.

use thiserror::Error;

use crate::encoder::{EncodeError, Encoder};
use crate::estimate::estimate_encoded_size;
use crate::policy::CompressionPolicy;
use crate::surface::PixelSurface;

/// Fixed amount quality drops by after each non-terminal attempt.
pub const QUALITY_STEP: f32 = 0.1;

/// Hard cap on encode attempts. The longest possible quality ramp
/// (1.0 down to 0.0 at the fixed step) is 11 attempts; past the floor the
/// clamped encode quality stops changing, so output size stops improving
/// and further attempts cannot converge.
pub const MAX_ENCODE_ATTEMPTS: u32 = 16;

/// Errors the search can produce.
#[derive(Debug, Error)]
pub enum SearchError {
    /// An encode attempt failed; the whole search aborts (no skip-and-retry).
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// The attempt cap tripped before the termination condition held.
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

/// The terminal state of a successful search.
#[derive(Debug)]
pub struct SearchOutcome {
    /// Raw encoded payload from the terminal attempt, unmodified.
    pub payload: Vec<u8>,
    /// Quality used for the terminal encode. Unclamped: it may sit below the
    /// policy floor (or below zero) as a comparison value.
    pub quality: f32,
    /// Derived size estimate for the terminal payload.
    pub estimate: f64,
    /// Number of encode attempts performed.
    pub attempts: u32,
}

/// Drive the encoder toward the policy's target byte size.
///
/// Starting at `start_quality`, each attempt encodes the same unmodified
/// surface, derives a size estimate from the encoded length, and continues
/// while the estimate exceeds the target OR quality is still above the
/// floor. The OR is deliberate: quality keeps stepping down to the floor
/// even once the size target is met. A caller that wants "stop as soon as
/// the size fits" sets `min_quality` equal to `start_quality`, making the
/// quality clause vacuous from the first attempt.
///
/// The loop's own quality value is never clamped; the encoder clamps at the
/// encode call. The carried size estimate starts at the policy's source
/// size and is replaced by the derived estimate after every attempt.
///
/// # Errors
///
/// Returns `SearchError::Encode` if any attempt fails, or
/// `SearchError::UnreachableTarget` if `MAX_ENCODE_ATTEMPTS` attempts pass
/// without the termination condition holding.
pub fn run_search(
    surface: &PixelSurface,
    policy: &CompressionPolicy,
    encoder: &impl Encoder,
) -> Result<SearchOutcome, SearchError> {
    let target = policy.target_size as f64;
    let mut quality = policy.start_quality;
    let mut size_estimate = policy.source_size as f64;

    for attempt in 1..=MAX_ENCODE_ATTEMPTS {
        let payload = encoder.encode(surface, quality)?;
        let estimate = estimate_encoded_size(payload.len());

        if estimate > target || quality > policy.min_quality {
            quality -= QUALITY_STEP;
            size_estimate = estimate;
            continue;
        }

        return Ok(SearchOutcome {
            payload,
            quality,
            estimate,
            attempts: attempt,
        });
    }

    Err(SearchError::UnreachableTarget {
        attempts: MAX_ENCODE_ATTEMPTS,
        estimate: size_estimate,
        target: policy.target_size,
    })
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Quality-scaled test encoder (size monotonic in quality).
    struct ScaledEncoder {
        base_len: usize,
    }

    impl Encoder for ScaledEncoder {
        fn encode(&self, _surface: &PixelSurface, quality: f32) -> Result<Vec<u8>, EncodeError> {
            let q = quality.clamp(0.0, 1.0) as f64;
            Ok(vec![0u8; ((self.base_len as f64) * q) as usize])
        }
    }

    fn test_policy(start: f32, min: f32, target: u64) -> CompressionPolicy {
        CompressionPolicy {
            start_quality: start,
            min_quality: min,
            target_size: target,
            max_width: 0,
            max_height: 0,
            resize: false,
            mime_type: "image/jpeg".to_string(),
            source_size: 1_000_000,
        }
    }

    proptest! {
        /// Property: with a monotonic encoder and a valid policy, the search
        /// terminates within the attempt cap and both termination clauses
        /// hold on the terminal attempt.
        #[test]
        fn prop_search_terminates_and_satisfies_policy(
            start in 0.5f32..=1.0,
            floor_gap in 0.0f32..=0.5,
            base_len in 0usize..=100_000,
            target in 1u64..=200_000,
        ) {
            let min = start - floor_gap;
            let surface = PixelSurface::new(1, 1, vec![0u8; 3]);
            let encoder = ScaledEncoder { base_len };

            // The payload shrinks to zero length as quality approaches 0,
            // where the estimate goes negative, so every target is reachable
            // within the quality ramp.
            let outcome = run_search(&surface, &test_policy(start, min, target), &encoder);
            prop_assert!(outcome.is_ok(), "search failed: {:?}", outcome.err());

            let outcome = outcome.unwrap();
            prop_assert!(outcome.attempts <= MAX_ENCODE_ATTEMPTS);
            prop_assert!(outcome.quality <= min);
            prop_assert!(
                crate::estimate::estimate_encoded_size(outcome.payload.len()) <= target as f64
            );
        }
    }
}
