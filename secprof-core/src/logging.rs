//! # Logging Utilities
//!
//! Structured logging with `tracing`. Cipher lists are long and mostly
//! uninteresting in logs, so they are summarised rather than dumped.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use secprof_core::logging::{init_tracing, summarize_ciphers};
//!
//! // Sets the global tracing subscriber; call once per process
//! init_tracing().expect("Failed to init tracing");
//!
//! let ciphers = vec!["ECDHE-RSA-AES128-GCM-SHA256".to_string(), "!aNULL".to_string()];
//! tracing::info!(ciphers = %summarize_ciphers(&ciphers), "profile applied");
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use std::fmt;

use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::types::CIPHER_DISABLE_PREFIX;

/// Filter directive used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "secprof=info,secprof_tls=info,secprof_core=info";

/// Initialize tracing.
///
/// Sets up structured logging with:
/// - Environment-based filtering (`RUST_LOG`), defaulting to [`DEFAULT_LOG_FILTER`]
/// - Compact single-line formatting
///
/// # Errors
///
/// Returns an error if the tracing subscriber cannot be initialized,
/// typically due to a subscriber already being set.
pub fn init_tracing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_thread_names(false)
                .compact(),
        )
        .try_init()?;

    info!("secprof logging initialized");
    Ok(())
}

/// Summarise a cipher list for logging.
#[must_use]
pub fn summarize_ciphers(ciphers: &[String]) -> CipherSummary<'_> {
    CipherSummary(ciphers)
}

/// Display wrapper produced by [`summarize_ciphers`].
pub struct CipherSummary<'a>(&'a [String]);

impl fmt::Display for CipherSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let excluded = self.0.iter().filter(|c| c.starts_with(CIPHER_DISABLE_PREFIX)).count();
        let preferred = self.0.len().saturating_sub(excluded);
        match self.0.first() {
            Some(first) => write!(
                f,
                "[{} entries, {} preferred, {} excluded, first {}]",
                self.0.len(),
                preferred,
                excluded,
                first
            ),
            None => write!(f, "[empty]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_ciphers() {
        let ciphers: Vec<String> = ["ECDHE-RSA-AES128-GCM-SHA256", "AES128-SHA", "!DSS"]
            .iter()
            .map(|c| c.to_string())
            .collect();
        assert_eq!(
            summarize_ciphers(&ciphers).to_string(),
            "[3 entries, 2 preferred, 1 excluded, first ECDHE-RSA-AES128-GCM-SHA256]"
        );
        assert_eq!(summarize_ciphers(&[]).to_string(), "[empty]");
    }

    #[test]
    fn test_second_init_fails() {
        // Whichever call installs the subscriber, the next one must be refused.
        let _ = init_tracing();
        assert!(init_tracing().is_err());
    }
}
