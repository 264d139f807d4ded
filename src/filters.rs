//! Per-event acceptance
//!
//! An event becomes a CSV row only when every requested field holds a
//! number. The first NaN drops the whole event; values are never
//! substituted.

use crate::conversion::{format_value, index_from_value};
use crate::error::Result;
use crate::fields::INDEX_FIELD;
use crate::index::IndexResolver;
use crate::types::Event;
use log::trace;

/// Outcome of evaluating one event against the field list
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    /// Formatted values, one per field, in field order
    Accepted(Vec<String>),
    /// First field that held NaN
    Rejected { field: String, index: usize },
}

/// Whether a leaf value may be written to the CSV
pub fn is_valid_value(value: f64) -> bool {
    !value.is_nan()
}

/// Read every field of `event` at its resolved index
///
/// Stops at the first NaN. A missing leaf or an index outside a leaf's
/// values is an error, not a rejection.
pub fn evaluate_event<S: AsRef<str>>(event: &Event, fields: &[S]) -> Result<EventOutcome> {
    let iminc = index_from_value(event.value(INDEX_FIELD, 0)?, event.entry)?;
    let mut resolver = IndexResolver::new(iminc);
    let mut values = Vec::with_capacity(fields.len());

    for field in fields {
        let field = field.as_ref();
        let index = resolver.resolve(field);
        trace!("Evt: {} branch: {} iminc: {}", event.entry, field, index);

        let value = event.value(field, index)?;
        if !is_valid_value(value) {
            return Ok(EventOutcome::Rejected {
                field: field.to_string(),
                index,
            });
        }
        trace!("value: {}", value);
        values.push(format_value(value));
    }

    Ok(EventOutcome::Accepted(values))
}
