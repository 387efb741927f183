//! Candidate contact input and its validated form.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::lenient;
use crate::report::FormReport;
use crate::rules::ContactField;
use crate::validate_contact;

/// Candidate contact fields as submitted by a client.
///
/// Missing and `null` fields deserialise as empty so validation can report
/// them with the usual "required" messages. Numbers and booleans are read as
/// their text form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct ContactDraft {
    /// Person's name.
    #[serde(deserialize_with = "lenient::text")]
    #[cfg_attr(feature = "openapi", schema(example = "Jane Doe"))]
    pub name: String,
    /// Email address.
    #[serde(deserialize_with = "lenient::text")]
    #[cfg_attr(feature = "openapi", schema(example = "jane@x.com"))]
    pub email: String,
    /// Phone number.
    #[serde(deserialize_with = "lenient::text")]
    #[cfg_attr(feature = "openapi", schema(example = "1234567890"))]
    pub phone: String,
    /// Optional note.
    #[serde(
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub message: Option<String>,
}

impl ContactDraft {
    /// Build a draft without a message.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            message: None,
        }
    }

    /// Attach a message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Raw value of `field`; an absent message reads as empty.
    #[must_use]
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Message => self.message.as_deref().unwrap_or_default(),
        }
    }

    /// Apply storage normalisation: trim every field, lower-case the email,
    /// and default the message to an empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use contact_rules::ContactDraft;
    ///
    /// let draft = ContactDraft::new(" Jane ", " Jane@X.com ", " 1234567890 ").normalised();
    /// assert_eq!(draft.name, "Jane");
    /// assert_eq!(draft.email, "jane@x.com");
    /// assert_eq!(draft.message.as_deref(), Some(""));
    /// ```
    #[must_use]
    pub fn normalised(self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_lowercase(),
            phone: self.phone.trim().to_owned(),
            message: Some(
                self.message
                    .as_deref()
                    .map(str::trim)
                    .unwrap_or_default()
                    .to_owned(),
            ),
        }
    }

    /// Normalise and validate the draft.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidContact`] carrying the full [`FormReport`] when any
    /// field fails its rule.
    ///
    /// # Examples
    ///
    /// ```
    /// use contact_rules::ContactDraft;
    ///
    /// let valid = ContactDraft::new("Jane Doe", "jane@x.com", "1234567890")
    ///     .validate()
    ///     .expect("valid contact");
    /// assert_eq!(valid.name(), "Jane Doe");
    ///
    /// let invalid = ContactDraft::new("", "bad", "123").validate().expect_err("invalid");
    /// assert_eq!(invalid.report().violations().count(), 3);
    /// ```
    pub fn validate(self) -> Result<ValidContact, InvalidContact> {
        let draft = self.normalised();
        let report = validate_contact(&draft);
        if !report.is_valid() {
            return Err(InvalidContact { report });
        }
        let Self {
            name,
            email,
            phone,
            message,
        } = draft;
        Ok(ValidContact {
            name,
            email,
            phone,
            message: message.unwrap_or_default(),
        })
    }
}

/// Contact fields that are normalised and known to satisfy every rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidContact {
    name: String,
    email: String,
    phone: String,
    message: String,
}

impl ValidContact {
    /// Validated name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Validated, lower-cased email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Validated phone number.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Message, empty when none was supplied.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Error returned when a draft fails one or more rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("contact failed validation on {} field(s)", .report.violations().count())]
pub struct InvalidContact {
    report: FormReport,
}

impl InvalidContact {
    /// Per-field outcome of the failed validation.
    #[must_use]
    pub const fn report(&self) -> &FormReport {
        &self.report
    }

    /// Consume the error, returning the report.
    #[must_use]
    pub fn into_report(self) -> FormReport {
        self.report
    }
}
