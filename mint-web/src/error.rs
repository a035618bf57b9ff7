//! Wallet connection error taxonomy.
//!
//! Every failure of the connect flow is folded into a [`WalletError`] and
//! rendered inline; a rejected connect never escapes as an unhandled
//! promise rejection. The `#[error]` attribute from `thiserror` provides
//! the `Display` implementation shown to the user.

use thiserror::Error;

/// Convenience type alias for `Result<T, WalletError>`.
pub type Result<T> = std::result::Result<T, WalletError>;

/// Errors the wallet connect flow can surface.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WalletError {
    /// The user dismissed or denied the wallet's access prompt.
    #[error("Connection request was rejected")]
    Rejected,

    /// The wallet did not answer within the connect timeout.
    #[error("Connection timed out")]
    TimedOut,

    /// No supported wallet extension was found in this browser.
    #[error("No wallet extension found. Install Freighter to continue")]
    ConnectorUnavailable,

    /// Anything else the wallet extension reported.
    #[error("Wallet error: {0}")]
    Connector(String),
}

impl WalletError {
    /// Classify the raw rejection text coming back over the JS boundary.
    ///
    /// Freighter reports user denial with messages containing "declined"
    /// or "rejected"; a missing extension is reported by our own interop
    /// shim with a "not found" message.
    pub fn from_js_message(message: &str) -> Self {
        let lower = message.to_ascii_lowercase();
        if lower.contains("declined") || lower.contains("rejected") || lower.contains("denied") {
            WalletError::Rejected
        } else if lower.contains("not found") || lower.contains("not installed") {
            WalletError::ConnectorUnavailable
        } else {
            WalletError::Connector(message.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_rejection() {
        assert_eq!(
            WalletError::from_js_message("The user rejected this request"),
            WalletError::Rejected
        );
        assert_eq!(
            WalletError::from_js_message("User declined access"),
            WalletError::Rejected
        );
    }

    #[test]
    fn test_classify_missing_extension() {
        assert_eq!(
            WalletError::from_js_message("Freighter wallet not found"),
            WalletError::ConnectorUnavailable
        );
    }

    #[test]
    fn test_classify_other() {
        let err = WalletError::from_js_message("internal extension failure");
        assert_eq!(
            err,
            WalletError::Connector("internal extension failure".to_string())
        );
        assert_eq!(err.to_string(), "Wallet error: internal extension failure");
    }
}
