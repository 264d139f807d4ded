//! Sub-value index resolution
//!
//! Most leaves of the reconstructed-event tree store one value per mirror
//! incidence, and `iminc` names the incidence to export. Per-mirror leaves
//! listed in [`SPECIAL_FIELDS`](crate::fields::SPECIAL_FIELDS) are read at
//! sub-value 0 instead.
//!
//! The running index is shared across the fields of one event: a special
//! field sets it to 0, and the next non-special field seeing 0 resets it to
//! the event's `iminc`. When `iminc` is itself 0 the reset changes nothing,
//! so "true incidence 0" and "after a special field" are not distinguished.

use crate::fields::is_special_field;

/// Running sub-value index for the fields of one event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexResolver {
    iminc: usize,
    current: usize,
}

impl IndexResolver {
    /// Start an event whose index leaf reads `iminc`
    pub fn new(iminc: usize) -> Self {
        Self {
            iminc,
            current: iminc,
        }
    }

    /// Effective sub-value index for `field`, advancing the running state
    pub fn resolve(&mut self, field: &str) -> usize {
        if is_special_field(field) {
            self.current = 0;
        } else if self.current == 0 {
            self.current = self.iminc;
        }
        self.current
    }
}
