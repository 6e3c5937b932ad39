#![forbid(unsafe_code)]

//! In-band NA sentinels for fixed-width storage.
//!
//! Missing values are stored inside the value buffer rather than in a separate validity bitmap:
//! - signed integers reserve their minimum value
//! - floats treat every NaN as NA
//! - booleans are stored as `i8` (`0`/`1`) and reserve `i8::MIN`
//!
//! String columns mark NA through a reserved bit of the end offset instead, see
//! [`crate::StrOffset`].

/// NA marker of a boolean column's `i8` storage.
pub const NA_BOOL: i8 = i8::MIN;

/// A fixed-width element type with an in-band NA sentinel.
pub trait NaMarker: Copy + Send + Sync + 'static {
    /// The value written to represent NA.
    const NA: Self;

    fn is_na(self) -> bool;
}

macro_rules! int_na {
    ($($t:ty),*) => {
        $(
            impl NaMarker for $t {
                const NA: Self = <$t>::MIN;

                #[inline]
                fn is_na(self) -> bool {
                    self == <$t>::MIN
                }
            }
        )*
    };
}

int_na!(i8, i16, i32, i64);

impl NaMarker for f32 {
    const NA: Self = f32::NAN;

    #[inline]
    fn is_na(self) -> bool {
        self.is_nan()
    }
}

impl NaMarker for f64 {
    const NA: Self = f64::NAN;

    #[inline]
    fn is_na(self) -> bool {
        self.is_nan()
    }
}
