use serde::{Deserialize, Serialize};

/// Tuning knobs for a single encode call.
///
/// `EncodeOptions::default()` is what [`crate::encode`] uses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EncodeOptions {
    /// Number of static row ranges to scan concurrently.
    ///
    /// `None` uses one range per thread of the encoder pool. `Some(1)` scans on the calling
    /// thread, which assigns codes in first-seen row order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threads: Option<usize>,

    /// Smallest number of rows worth handing to a worker of its own.
    pub min_rows_per_worker: usize,

    /// Treat zero-length strings as NA. On by default; set to `false` to give the empty string a
    /// label of its own.
    pub empty_string_is_na: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            threads: None,
            min_rows_per_worker: 16_384,
            empty_string_is_na: true,
        }
    }
}

impl EncodeOptions {
    /// Options that force a single-threaded, first-seen-order scan.
    pub fn serial() -> Self {
        Self {
            threads: Some(1),
            ..Self::default()
        }
    }
}
