//! Compiled format patterns referenced by the rule table.

use std::sync::OnceLock;

use regex::Regex;

const EMAIL_SOURCE: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
// ASCII digits only; `\d` would also admit other Unicode decimal digits.
const PHONE_SOURCE: &str = r"^[0-9\s\-+()]{10,15}$";

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static PHONE_RE: OnceLock<Regex> = OnceLock::new();

/// Named format constraint applied to a trimmed field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// `local@domain.tld`: one `@`, a `.` after it, and no whitespace.
    Email,
    /// 10 to 15 characters drawn from digits, whitespace, `-`, `+`, `(`, `)`.
    Phone,
}

impl Pattern {
    /// Regular expression source for the pattern.
    ///
    /// # Examples
    ///
    /// ```
    /// use contact_rules::Pattern;
    ///
    /// assert!(Pattern::Phone.source().contains("{10,15}"));
    /// ```
    #[must_use]
    pub const fn source(self) -> &'static str {
        match self {
            Self::Email => EMAIL_SOURCE,
            Self::Phone => PHONE_SOURCE,
        }
    }

    /// Return `true` when the whole value matches the pattern.
    ///
    /// # Examples
    ///
    /// ```
    /// use contact_rules::Pattern;
    ///
    /// assert!(Pattern::Email.is_match("jane@x.com"));
    /// assert!(!Pattern::Email.is_match("jane@x"));
    /// ```
    #[must_use]
    pub fn is_match(self, value: &str) -> bool {
        self.regex().is_match(value)
    }

    fn regex(self) -> &'static Regex {
        let cell = match self {
            Self::Email => &EMAIL_RE,
            Self::Phone => &PHONE_RE,
        };
        cell.get_or_init(|| {
            Regex::new(self.source())
                .unwrap_or_else(|error| panic!("{self:?} pattern failed to compile: {error}"))
        })
    }
}
