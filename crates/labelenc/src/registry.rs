//! Concurrent value → code registry.
//!
//! Lookups of known labels only take the lock in shared mode, so any number of workers probe the
//! map in parallel. A miss escalates:
//!
//! 1. release the shared guard and take the *upgradable* guard (shared with plain readers, but
//!    exclusive against other upgradable and write guards),
//! 2. probe again, because another worker may have inserted the label in between,
//! 3. upgrade to exclusive and insert with `code = len()`.
//!
//! Step 2 runs while no other inserter can hold the lock, and step 3 cannot be entered by two
//! workers at once, so each label is inserted exactly once and codes stay dense in
//! `[0, len)`. The cost of exclusivity is paid once per distinct label, not once per row.

use crate::error::{EncodeError, EncodeResult};
use ahash::RandomState;
use parking_lot::{RwLock, RwLockUpgradableReadGuard};
use std::collections::HashMap;
use std::hash::Hash;

/// Codes are non-negative `i32`s; `i32::MIN` is reserved for NA.
pub(crate) const MAX_LABELS: usize = i32::MAX as usize + 1;

pub(crate) type LabelMap<K> = HashMap<K, i32, RandomState>;

pub(crate) struct LabelRegistry<K> {
    labels: RwLock<LabelMap<K>>,
    max_labels: usize,
}

impl<K: Eq + Hash> LabelRegistry<K> {
    pub(crate) fn new() -> Self {
        Self::with_max_labels(MAX_LABELS)
    }

    pub(crate) fn with_max_labels(max_labels: usize) -> Self {
        Self {
            labels: RwLock::new(LabelMap::default()),
            max_labels: max_labels.min(MAX_LABELS),
        }
    }

    /// The code of `label`, assigning the next free code on first sight.
    pub(crate) fn code_for(&self, label: K) -> EncodeResult<i32> {
        if let Some(&code) = self.labels.read().get(&label) {
            return Ok(code);
        }

        let labels = self.labels.upgradable_read();
        if let Some(&code) = labels.get(&label) {
            return Ok(code);
        }

        let mut labels = RwLockUpgradableReadGuard::upgrade(labels);
        let next = labels.len();
        let code = i32::try_from(next)
            .ok()
            .filter(|_| next < self.max_labels)
            .ok_or(EncodeError::TooManyLabels {
                limit: self.max_labels,
            })?;
        labels.insert(label, code);
        Ok(code)
    }

    pub(crate) fn len(&self) -> usize {
        self.labels.read().len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn into_map(self) -> LabelMap<K> {
        self.labels.into_inner()
    }
}
