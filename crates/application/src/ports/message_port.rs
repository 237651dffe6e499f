//! Message formatting port
//!
//! Turns message keys plus positional arguments into user-facing text.
//! Keys are given without the `error.` prefix used by message bundles.

#[cfg(test)]
use mockall::automock;

/// Port for localized message lookup
#[cfg_attr(test, automock)]
pub trait MessagePort: Send + Sync {
    /// Format the message for `key`, substituting `{0}`, `{1}`, ... with `args`
    ///
    /// Unknown keys produce [`fallback_message`].
    fn format(&self, key: &str, args: &[String]) -> String;
}

/// Text used when no message is registered for `key`
#[must_use]
pub fn fallback_message(key: &str) -> String {
    format!("An error occurred [{key}]")
}
