//! Aggregated result of validating a whole contact form.

use std::collections::BTreeMap;

use crate::rules::{ContactField, FieldViolation};

/// Mapping from every validated field to its violation, if any.
///
/// The form is valid iff no field carries a violation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormReport {
    entries: BTreeMap<ContactField, Option<FieldViolation>>,
}

impl FormReport {
    pub(crate) fn from_entries(
        entries: impl IntoIterator<Item = (ContactField, Option<FieldViolation>)>,
    ) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Return `true` when every field passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.entries.values().all(Option::is_none)
    }

    /// Violation recorded for `field`, if any.
    #[must_use]
    pub fn get(&self, field: ContactField) -> Option<&FieldViolation> {
        self.entries.get(&field).and_then(Option::as_ref)
    }

    /// Iterate over all violations in field order.
    pub fn violations(&self) -> impl Iterator<Item = &FieldViolation> {
        self.entries.values().filter_map(Option::as_ref)
    }

    /// Iterate over every entry, including fields that passed.
    pub fn entries(&self) -> impl Iterator<Item = (ContactField, Option<&FieldViolation>)> {
        self.entries
            .iter()
            .map(|(field, violation)| (*field, violation.as_ref()))
    }

    /// Consume the report, returning the violations in field order.
    #[must_use]
    pub fn into_violations(self) -> Vec<FieldViolation> {
        self.entries.into_values().flatten().collect()
    }
}
