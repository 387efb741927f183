//! Declarative validation rules for contact records.
//!
//! The contact service and every client consume the same rule table, so the
//! acceptance criteria of both tiers cannot drift apart. Each field is
//! described by a [`FieldRule`] (required, maximum length, format pattern)
//! and evaluated by [`FieldRule::check`]. Full-form validation always
//! collects every field violation instead of stopping at the first one.
//!
//! # Example
//!
//! ```
//! use contact_rules::{ContactDraft, ContactField, ViolationKind};
//!
//! let draft = ContactDraft::new("", "bad", "123");
//! let report = contact_rules::validate_contact(&draft);
//!
//! assert!(!report.is_valid());
//! assert_eq!(report.violations().count(), 3);
//! let name = report.get(ContactField::Name).expect("name violation");
//! assert_eq!(name.kind(), ViolationKind::Required);
//! assert_eq!(name.message(), "Name is required");
//! ```

mod draft;
mod lenient;
mod pattern;
mod report;
mod rules;

pub use draft::{ContactDraft, InvalidContact, ValidContact};
pub use pattern::Pattern;
pub use report::FormReport;
pub use rules::{
    CONTACT_RULES, ContactField, EMAIL_RULE, FieldRule, FieldViolation, FormatRule, LengthLimit,
    MESSAGE_MAX, MESSAGE_RULE, NAME_MAX, NAME_RULE, PHONE_RULE, ViolationKind, rule_for,
    validate_email, validate_message, validate_name, validate_phone,
};

/// Validate every field of a draft and collect all violations.
///
/// Fields are checked in [`ContactField::ALL`] order and the check never
/// short-circuits, so callers can highlight every invalid field at once.
///
/// # Examples
///
/// ```
/// use contact_rules::{ContactDraft, validate_contact};
///
/// let draft = ContactDraft::new("Jane Doe", "jane@x.com", "1234567890");
/// assert!(validate_contact(&draft).is_valid());
/// ```
#[must_use]
pub fn validate_contact(draft: &ContactDraft) -> FormReport {
    FormReport::from_entries(
        CONTACT_RULES
            .iter()
            .map(|rule| (rule.field, rule.check(draft.value(rule.field)))),
    )
}
