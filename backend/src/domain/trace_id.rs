//! Correlation identifier for a single API request.
//!
//! The active id is held task-locally so [`crate::domain::Error`] can stamp it
//! at construction. Spawned tasks do not inherit it; wrap their futures in
//! [`TraceId::scope`].

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use tokio::task_local;
use uuid::Uuid;

task_local! {
    static TRACE_ID: TraceId;
}

/// Identifier tying together a request's log lines, its error payload, and
/// the `trace-id` response header.
///
/// # Examples
/// ```
/// use contact_backend::TraceId;
///
/// let adopted = TraceId::adopt_or_generate(Some("6f1c2a8e-3b7d-4c1e-9a2f-0d4b5e6f7a8b"));
/// assert_eq!(adopted.to_string(), "6f1c2a8e-3b7d-4c1e-9a2f-0d4b5e6f7a8b");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceId(Uuid);

impl TraceId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Reuse a caller-supplied identifier when it is a well-formed UUID,
    /// otherwise mint a fresh one.
    #[must_use]
    pub fn adopt_or_generate(candidate: Option<&str>) -> Self {
        candidate
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or_else(Self::generate)
    }

    /// Identifier of the request currently being handled, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        TRACE_ID.try_with(|id| *id).ok()
    }

    /// Run `fut` with `trace_id` as the current identifier.
    ///
    /// # Examples
    /// ```
    /// use contact_backend::TraceId;
    ///
    /// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
    /// let trace_id = TraceId::adopt_or_generate(None);
    /// let observed = TraceId::scope(trace_id, async { TraceId::current() }).await;
    /// assert_eq!(observed, Some(trace_id));
    /// # });
    /// ```
    pub async fn scope<Fut: Future>(trace_id: Self, fut: Fut) -> Fut::Output {
        TRACE_ID.scope(trace_id, fut).await
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const KNOWN: &str = "6f1c2a8e-3b7d-4c1e-9a2f-0d4b5e6f7a8b";

    #[rstest]
    #[case(Some(KNOWN))]
    #[case(Some(" 6f1c2a8e-3b7d-4c1e-9a2f-0d4b5e6f7a8b "))]
    fn well_formed_inbound_ids_are_adopted(#[case] candidate: Option<&str>) {
        assert_eq!(TraceId::adopt_or_generate(candidate).to_string(), KNOWN);
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("not-a-uuid"))]
    fn missing_or_malformed_ids_are_replaced(#[case] candidate: Option<&str>) {
        let first = TraceId::adopt_or_generate(candidate);
        let second = TraceId::adopt_or_generate(candidate);
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn current_reflects_scope() {
        let expected = TraceId::generate();
        let observed = TraceId::scope(expected, async move { TraceId::current() }).await;
        assert_eq!(observed, Some(expected));
    }

    #[tokio::test]
    async fn current_is_none_out_of_scope() {
        assert!(TraceId::current().is_none());
    }

    #[tokio::test]
    async fn spawned_tasks_do_not_inherit_the_scope() {
        let outer = TraceId::generate();
        let observed = TraceId::scope(outer, async {
            tokio::spawn(async { TraceId::current() })
                .await
                .expect("join spawned task")
        })
        .await;
        assert!(observed.is_none());
    }
}
