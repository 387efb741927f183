//! Field descriptors and the contact rule table.

use std::fmt;

use serde::Serialize;

use crate::pattern::Pattern;

/// Maximum length of a contact name, in characters.
pub const NAME_MAX: usize = 100;

/// Maximum length of a contact message, in characters.
pub const MESSAGE_MAX: usize = 500;

/// Contact fields subject to validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    /// Person's display name.
    Name,
    /// Email address.
    Email,
    /// Phone number.
    Phone,
    /// Free-form note attached to the contact.
    Message,
}

impl ContactField {
    /// Every validated field, in reporting order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Phone, Self::Message];

    /// Wire name of the field as used in request and error payloads.
    ///
    /// # Examples
    ///
    /// ```
    /// use contact_rules::ContactField;
    ///
    /// assert_eq!(ContactField::Phone.as_str(), "phone");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of a rule failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationKind {
    /// The field is required but empty after trimming.
    Required,
    /// The field exceeds its maximum length.
    TooLong,
    /// The field does not match its format pattern.
    InvalidFormat,
}

impl ViolationKind {
    /// Stable machine-readable code.
    ///
    /// # Examples
    ///
    /// ```
    /// use contact_rules::ViolationKind;
    ///
    /// assert_eq!(ViolationKind::TooLong.code(), "TOO_LONG");
    /// ```
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Required => "REQUIRED",
            Self::TooLong => "TOO_LONG",
            Self::InvalidFormat => "INVALID_FORMAT",
        }
    }
}

/// A single field that failed validation, with its human-readable message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    field: ContactField,
    #[serde(skip)]
    kind: ViolationKind,
    message: &'static str,
}

impl FieldViolation {
    const fn new(field: ContactField, kind: ViolationKind, message: &'static str) -> Self {
        Self {
            field,
            kind,
            message,
        }
    }

    /// Field that failed.
    #[must_use]
    pub const fn field(&self) -> ContactField {
        self.field
    }

    /// Failure category.
    #[must_use]
    pub const fn kind(&self) -> ViolationKind {
        self.kind
    }

    /// Message suitable for display next to the field.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.message
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Upper bound on the character count of a trimmed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthLimit {
    /// Largest accepted length, inclusive.
    pub max: usize,
    /// Message reported when the limit is exceeded.
    pub message: &'static str,
}

/// Format constraint for a trimmed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatRule {
    /// Pattern the whole value must match.
    pub pattern: Pattern,
    /// Message reported when the value does not match.
    pub message: &'static str,
}

/// Declarative constraints for one contact field.
///
/// Checks run in order: required, maximum length, format. An empty optional
/// field passes without further checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    /// Field this rule applies to.
    pub field: ContactField,
    /// Message reported when a required field is empty; `None` marks the
    /// field as optional.
    pub required: Option<&'static str>,
    /// Optional maximum length.
    pub max_len: Option<LengthLimit>,
    /// Optional format pattern.
    pub format: Option<FormatRule>,
}

impl FieldRule {
    /// Evaluate the rule against a raw value. The value is trimmed first.
    ///
    /// # Examples
    ///
    /// ```
    /// use contact_rules::{NAME_RULE, ViolationKind};
    ///
    /// let violation = NAME_RULE.check("   ").expect("blank name is rejected");
    /// assert_eq!(violation.kind(), ViolationKind::Required);
    /// assert!(NAME_RULE.check("Ada Lovelace").is_none());
    /// ```
    #[must_use]
    pub fn check(&self, value: &str) -> Option<FieldViolation> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return self
                .required
                .map(|message| FieldViolation::new(self.field, ViolationKind::Required, message));
        }

        if let Some(limit) = self
            .max_len
            .filter(|limit| trimmed.chars().count() > limit.max)
        {
            return Some(FieldViolation::new(
                self.field,
                ViolationKind::TooLong,
                limit.message,
            ));
        }

        if let Some(format) = self
            .format
            .filter(|format| !format.pattern.is_match(trimmed))
        {
            return Some(FieldViolation::new(
                self.field,
                ViolationKind::InvalidFormat,
                format.message,
            ));
        }

        None
    }
}

/// Rule for [`ContactField::Name`].
pub const NAME_RULE: FieldRule = FieldRule {
    field: ContactField::Name,
    required: Some("Name is required"),
    max_len: Some(LengthLimit {
        max: NAME_MAX,
        message: "Name cannot exceed 100 characters",
    }),
    format: None,
};

/// Rule for [`ContactField::Email`].
pub const EMAIL_RULE: FieldRule = FieldRule {
    field: ContactField::Email,
    required: Some("Email is required"),
    max_len: None,
    format: Some(FormatRule {
        pattern: Pattern::Email,
        message: "Please enter a valid email",
    }),
};

/// Rule for [`ContactField::Phone`].
pub const PHONE_RULE: FieldRule = FieldRule {
    field: ContactField::Phone,
    required: Some("Phone number is required"),
    max_len: None,
    format: Some(FormatRule {
        pattern: Pattern::Phone,
        message: "Enter valid phone (10-15 digits)",
    }),
};

/// Rule for [`ContactField::Message`].
pub const MESSAGE_RULE: FieldRule = FieldRule {
    field: ContactField::Message,
    required: None,
    max_len: Some(LengthLimit {
        max: MESSAGE_MAX,
        message: "Message cannot exceed 500 characters",
    }),
    format: None,
};

/// The complete rule table, one entry per [`ContactField::ALL`] element.
pub const CONTACT_RULES: [FieldRule; 4] = [NAME_RULE, EMAIL_RULE, PHONE_RULE, MESSAGE_RULE];

/// Look up the rule for a field.
#[must_use]
pub const fn rule_for(field: ContactField) -> &'static FieldRule {
    match field {
        ContactField::Name => &NAME_RULE,
        ContactField::Email => &EMAIL_RULE,
        ContactField::Phone => &PHONE_RULE,
        ContactField::Message => &MESSAGE_RULE,
    }
}

/// Validate a contact name.
#[must_use]
pub fn validate_name(value: &str) -> Option<FieldViolation> {
    NAME_RULE.check(value)
}

/// Validate a contact email address.
#[must_use]
pub fn validate_email(value: &str) -> Option<FieldViolation> {
    EMAIL_RULE.check(value)
}

/// Validate a contact phone number.
#[must_use]
pub fn validate_phone(value: &str) -> Option<FieldViolation> {
    PHONE_RULE.check(value)
}

/// Validate the optional contact message.
#[must_use]
pub fn validate_message(value: &str) -> Option<FieldViolation> {
    MESSAGE_RULE.check(value)
}
