//! Concurrent dictionary encoding of columns.
//!
//! [`encode`] turns a column into
//! - a dense `int32` code per row (NA rows stay NA, row order is preserved), and
//! - a labels table mapping each code back to the value it stands for.
//!
//! Rows are scanned in static ranges on a small worker pool. All workers share one label
//! registry behind an upgradable reader/writer lock: known values are resolved under the shared
//! lock, and only the first sighting of a value takes the lock exclusively.

#![forbid(unsafe_code)]

mod boolean;
mod dispatch;
mod encoder;
mod error;
mod materialize;
mod na;
mod options;
mod parallel;
mod registry;
mod result;

pub use crate::dispatch::{encode, encode_table, encode_with_options};
pub use crate::error::{EncodeError, EncodeResult};
pub use crate::options::EncodeOptions;
pub use crate::parallel::available_workers;
pub use crate::result::{EncodedLabels, ID, LABEL, LABEL_ID};

pub use labelenc_columnar as columnar;
