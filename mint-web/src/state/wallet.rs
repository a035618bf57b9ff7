//! Wallet session state
//!
//! [`WalletSession`] owns the single piece of connection state in the app
//! and is handed to components as an explicit prop, never looked up from
//! ambient context. Transitions are single-flight: a connect can only
//! start from `Disconnected` or `Failed`, so overlapping button clicks
//! collapse into one attempt.

use leptos::prelude::*;

use crate::error::WalletError;
use crate::services::wallet::{Connector, ConnectorKind};

/// Wallet connection state.
#[derive(Clone, Debug, PartialEq)]
pub enum WalletState {
    Disconnected,
    Connecting,
    Connected { address: String },
    Failed(WalletError),
}

impl WalletState {
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletState::Connected { .. })
    }

    pub fn is_connecting(&self) -> bool {
        matches!(self, WalletState::Connecting)
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            WalletState::Connected { address } => Some(address),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&WalletError> {
        match self {
            WalletState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// State after a connect attempt starts, or `None` if one may not
    /// start now. `Connecting` and `Connected` both refuse.
    fn begin_connect(&self) -> Option<WalletState> {
        match self {
            WalletState::Disconnected | WalletState::Failed(_) => Some(WalletState::Connecting),
            WalletState::Connecting | WalletState::Connected { .. } => None,
        }
    }
}

/// Handle to the app's wallet connection state.
///
/// Cheap to copy; every component that needs account state takes one as a
/// prop.
#[derive(Clone, Copy)]
pub struct WalletSession {
    state: RwSignal<WalletState>,
    connectors: StoredValue<Vec<Connector>>,
}

impl WalletSession {
    /// Build a session offering the given connector set, as constructed
    /// once at startup from the app configuration.
    pub fn new(connectors: Vec<Connector>) -> Self {
        Self {
            state: RwSignal::new(WalletState::Disconnected),
            connectors: StoredValue::new(connectors),
        }
    }

    /// The connected account address, or `None` while disconnected.
    /// Absence is an expected state, not a failure.
    pub fn address(&self) -> Option<String> {
        self.state.with(|s| s.address().map(|a| a.to_string()))
    }

    pub fn is_connected(&self) -> bool {
        self.state.with(|s| s.is_connected())
    }

    pub fn is_connecting(&self) -> bool {
        self.state.with(|s| s.is_connecting())
    }

    pub fn error(&self) -> Option<WalletError> {
        self.state.with(|s| s.error().cloned())
    }

    /// Try to claim the connect slot. Returns `false` if an attempt is
    /// already in flight or the wallet is connected; the caller must not
    /// call the connector in that case.
    pub fn begin_connect(&self) -> bool {
        let mut started = false;
        self.state.update(|s| {
            if let Some(next) = s.begin_connect() {
                *s = next;
                started = true;
            }
        });
        started
    }

    pub fn complete(&self, address: String) {
        log::info!("wallet connected: {}", shared::utils::truncate_address(&address));
        self.state.set(WalletState::Connected { address });
    }

    pub fn fail(&self, error: WalletError) {
        log::warn!("wallet connect failed: {}", error);
        self.state.set(WalletState::Failed(error));
    }

    pub fn disconnect(&self) {
        self.state.set(WalletState::Disconnected);
    }

    /// Connect using the first connector in the configured set.
    pub fn connect_default(&self) {
        let connector = self.connectors.with_value(|c| c.first().cloned());
        match connector {
            Some(connector) if connector.installed => self.connect(connector.kind),
            // Detection already told us the extension is missing, so skip
            // the JS round trip and surface the taxonomy error directly
            _ => {
                if self.begin_connect() {
                    self.fail(WalletError::ConnectorUnavailable);
                }
            }
        }
    }

    /// Run the full connect flow for one connector kind. No-op when the
    /// single-flight guard refuses.
    pub fn connect(&self, kind: ConnectorKind) {
        if !self.begin_connect() {
            return;
        }
        let session = *self;
        leptos::task::spawn_local(async move {
            match crate::services::wallet::connect(&kind).await {
                Ok(address) => session.complete(address),
                Err(err) => session.fail(err),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_connect_from_disconnected() {
        assert_eq!(
            WalletState::Disconnected.begin_connect(),
            Some(WalletState::Connecting)
        );
    }

    #[test]
    fn test_begin_connect_refused_while_in_flight() {
        assert_eq!(WalletState::Connecting.begin_connect(), None);
    }

    #[test]
    fn test_begin_connect_refused_when_connected() {
        let state = WalletState::Connected {
            address: "GABCDEFGH1234567890".to_string(),
        };
        assert_eq!(state.begin_connect(), None);
    }

    #[test]
    fn test_begin_connect_allows_retry_after_failure() {
        let state = WalletState::Failed(WalletError::Rejected);
        assert_eq!(state.begin_connect(), Some(WalletState::Connecting));
    }

    #[test]
    fn test_disconnect_reopens_connect_slot() {
        let state = WalletState::Connected {
            address: "GABCDEFGH1234567890".to_string(),
        };
        assert_eq!(state.begin_connect(), None);

        // Disconnecting resets to the one state a new attempt may start from
        let state = WalletState::Disconnected;
        assert_eq!(state.begin_connect(), Some(WalletState::Connecting));
        assert_eq!(state.address(), None);
    }

    #[test]
    fn test_address_accessor() {
        assert_eq!(WalletState::Disconnected.address(), None);
        let state = WalletState::Connected {
            address: "GABCDEFGH1234567890".to_string(),
        };
        assert_eq!(state.address(), Some("GABCDEFGH1234567890"));
    }
}
