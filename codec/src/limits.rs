//! Limits for bounded decoding.

/// Codec-level limits enforced while decoding.
///
/// The length-prefixed wire format carries attacker-controlled counts; these
/// limits bound what a decoder will materialize beyond the structural
/// plausibility check against the remaining stream bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecLimits {
    /// Maximum number of elements in one collection.
    pub max_collection_elems: usize,
    /// Maximum byte length of one text value.
    pub max_text_bytes: usize,
    /// Maximum compressed byte length of one image payload.
    pub max_image_bytes: usize,
}

impl Default for CodecLimits {
    fn default() -> Self {
        Self {
            max_collection_elems: 64 * 1024,

            // 1 MiB of UTF-8 is generous for field text
            max_text_bytes: 1024 * 1024,
            max_image_bytes: 16 * 1024 * 1024,
        }
    }
}

impl CodecLimits {
    /// Creates limits suitable for testing with smaller values.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            max_collection_elems: 64,
            max_text_bytes: 1024,
            max_image_bytes: 64 * 1024,
        }
    }

    /// Creates limits with no restrictions (use with caution).
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_collection_elems: usize::MAX,
            max_text_bytes: usize::MAX,
            max_image_bytes: usize::MAX,
        }
    }
}
