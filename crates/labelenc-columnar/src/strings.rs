#![forbid(unsafe_code)]

use crate::column::ColumnData;
use crate::error::ColumnError;
use crate::types::ElementType;
use std::fmt;
use std::sync::Arc;

/// Offset width of a string column.
///
/// Offsets are positions into the shared character buffer. The top bit of an *end* offset is
/// reserved as the NA marker of that row, which keeps NA distinct from the empty string (an
/// empty string is a zero-length span whose end offset does not carry the bit).
pub trait StrOffset: Copy + Send + Sync + fmt::Debug + 'static {
    const ZERO: Self;
    const NA_BIT: Self;
    const ELEMENT_TYPE: ElementType;

    fn is_na(self) -> bool;

    /// The buffer position with the NA bit masked off.
    fn position(self) -> usize;

    /// Convert a buffer position into an offset, failing if it collides with the NA bit.
    fn try_from_position(pos: usize) -> Option<Self>;

    fn with_na(self) -> Self;

    fn wrap(data: StringData<Self>) -> ColumnData;

    fn unwrap(data: &ColumnData) -> Option<&StringData<Self>>;
}

macro_rules! str_offset {
    ($t:ty, $variant:ident) => {
        impl StrOffset for $t {
            const ZERO: Self = 0;
            const NA_BIT: Self = 1 << (<$t>::BITS - 1);
            const ELEMENT_TYPE: ElementType = ElementType::$variant;

            #[inline]
            fn is_na(self) -> bool {
                self & Self::NA_BIT != 0
            }

            #[inline]
            fn position(self) -> usize {
                (self & !Self::NA_BIT) as usize
            }

            fn try_from_position(pos: usize) -> Option<Self> {
                <$t>::try_from(pos).ok().filter(|v| v & Self::NA_BIT == 0)
            }

            fn with_na(self) -> Self {
                self | Self::NA_BIT
            }

            fn wrap(data: StringData<Self>) -> ColumnData {
                ColumnData::$variant(data)
            }

            fn unwrap(data: &ColumnData) -> Option<&StringData<Self>> {
                match data {
                    ColumnData::$variant(s) => Some(s),
                    _ => None,
                }
            }
        }
    };
}

str_offset!(u32, Str32);
str_offset!(u64, Str64);

/// Physical storage of a string column: `len + 1` offsets into one shared character buffer.
///
/// Row `j` spans `chars[offsets[j].position()..offsets[j + 1].position()]` unless
/// `offsets[j + 1]` carries the NA bit.
#[derive(Clone, Debug)]
pub struct StringData<O> {
    offsets: Arc<[O]>,
    chars: Arc<[u8]>,
}

impl<O: StrOffset> StringData<O> {
    /// Wrap raw buffers, validating that every span lies inside `chars` and that offsets never
    /// move backwards.
    pub fn from_parts(offsets: Vec<O>, chars: Vec<u8>) -> Result<Self, ColumnError> {
        let Some(first) = offsets.first() else {
            return Err(ColumnError::InvalidOffsets {
                row: 0,
                reason: "missing leading offset",
            });
        };
        if first.position() != 0 {
            return Err(ColumnError::InvalidOffsets {
                row: 0,
                reason: "leading offset must be zero",
            });
        }

        for (row, pair) in offsets.windows(2).enumerate() {
            let (start, end) = (pair[0].position(), pair[1].position());
            if end < start {
                return Err(ColumnError::InvalidOffsets {
                    row,
                    reason: "offsets decrease",
                });
            }
            if end > chars.len() {
                return Err(ColumnError::InvalidOffsets {
                    row,
                    reason: "span ends past the character buffer",
                });
            }
        }

        Ok(Self {
            offsets: offsets.into(),
            chars: chars.into(),
        })
    }

    /// Build string storage from optional byte strings (`None` = NA).
    pub fn from_options<'a, I>(values: I) -> Result<Self, ColumnError>
    where
        I: IntoIterator<Item = Option<&'a [u8]>>,
    {
        let values = values.into_iter();
        let mut offsets = Vec::with_capacity(values.size_hint().0 + 1);
        let mut chars = Vec::new();
        offsets.push(O::ZERO);

        for value in values {
            if let Some(bytes) = value {
                chars.extend_from_slice(bytes);
            }
            let end = O::try_from_position(chars.len()).ok_or(ColumnError::OffsetOverflow {
                element_type: O::ELEMENT_TYPE,
                len: chars.len(),
            })?;
            offsets.push(if value.is_some() { end } else { end.with_na() });
        }

        Ok(Self {
            offsets: offsets.into(),
            chars: chars.into(),
        })
    }

    /// Number of physical rows.
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn offsets(&self) -> &[O] {
        &self.offsets
    }

    pub fn chars(&self) -> &[u8] {
        &self.chars
    }

    /// The bytes of physical row `row`, or `None` if the row is NA.
    #[inline]
    pub fn get(&self, row: usize) -> Option<&[u8]> {
        let end = self.offsets[row + 1];
        if end.is_na() {
            return None;
        }
        let start = self.offsets[row].position();
        Some(&self.chars[start..end.position()])
    }
}
