//! Freighter wallet integration via wasm-bindgen
//!
//! JavaScript interop for the Freighter browser extension, the default
//! signing method for Soroban networks. The extension is a black box
//! behind this seam: we detect it, ask it for access, and read back the
//! account's public key. Everything else (signing, network selection)
//! lives in the extension itself.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use futures::future::{select, Either};
use gloo_timers::future::TimeoutFuture;

use shared::chain::ChainDescriptor;

use crate::error::{Result, WalletError};

/// How long a connect attempt may sit at the wallet's prompt before we
/// give up. Generous because the user has to click through the extension.
const CONNECT_TIMEOUT_MS: u32 = 60_000;

/// Supported wallet connector kinds.
///
/// Only Freighter today; the enum leaves room for hardware wallets or
/// WalletConnect-style bridges later.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectorKind {
    Freighter,
}

impl ConnectorKind {
    pub fn name(&self) -> &'static str {
        match self {
            ConnectorKind::Freighter => "Freighter",
        }
    }
}

/// One connector offered to the user, as detected in this browser.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Connector {
    pub kind: ConnectorKind,
    /// Application name shown to the user in the wallet's access prompt.
    pub app_name: String,
    pub installed: bool,
}

// ============================================================================
// FREIGHTER DETECTION AND CONNECTION (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
export function detectConnectors() {
    const connectors = [];

    // Freighter injects window.freighterApi; older builds used window.freighter
    const api = window.freighterApi || window.freighter;
    connectors.push({ name: 'Freighter', kind: 'freighter', installed: !!api });

    return connectors;
}

export async function connectFreighter() {
    const api = window.freighterApi || window.freighter;
    if (!api) {
        throw new Error('Freighter wallet not found. Install the extension from https://freighter.app');
    }

    try {
        // Newer Freighter builds: requestAccess() prompts the user and
        // resolves with the public key (or an object carrying it)
        if (typeof api.requestAccess === 'function') {
            const result = await api.requestAccess();
            if (typeof result === 'string' && result.length > 0) {
                return result;
            }
            if (result && result.address) {
                return result.address;
            }
            if (result && result.publicKey) {
                return result.publicKey;
            }
            if (result && result.error) {
                throw new Error(typeof result.error === 'string' ? result.error : result.error.message);
            }
        }

        // Older builds: getPublicKey() both prompts and returns the key
        if (typeof api.getPublicKey === 'function') {
            const key = await api.getPublicKey();
            if (key) {
                return key;
            }
        }

        throw new Error('Connected but could not retrieve public key');
    } catch (error) {
        throw new Error(error.message || String(error));
    }
}
")]
extern "C" {
    /// Detect which wallet extensions are present in this browser
    fn detectConnectors() -> JsValue;

    /// Prompt Freighter for access and resolve with the account public key
    #[wasm_bindgen(catch)]
    async fn connectFreighter() -> std::result::Result<JsValue, JsValue>;
}

// ============================================================================
// WALLET SERVICE
// ============================================================================

/// Build the default connector set for the given chains.
///
/// Infallible: a missing extension yields a connector with
/// `installed: false`, never an error. The chain list does not narrow the
/// set today (Freighter serves every Soroban network), but the signature
/// keeps connector construction parameterized the same way the provider
/// context consumes it.
pub fn default_connectors(app_name: &str, chains: &[ChainDescriptor]) -> Vec<Connector> {
    debug_assert!(!chains.is_empty());

    let detected = detectConnectors();
    let detected: Vec<DetectedConnector> =
        serde_wasm_bindgen::from_value(detected).unwrap_or_default();

    detected
        .into_iter()
        .filter_map(|d| {
            let kind = match d.kind.as_str() {
                "freighter" => ConnectorKind::Freighter,
                _ => return None,
            };
            Some(Connector {
                kind,
                app_name: app_name.to_string(),
                installed: d.installed,
            })
        })
        .collect()
}

/// Raw detection record coming back over the JS boundary.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct DetectedConnector {
    name: String,
    kind: String,
    installed: bool,
}

/// Connect to a wallet and return the account's public key.
///
/// Races the extension's prompt against [`CONNECT_TIMEOUT_MS`]; a user
/// denial, a missing extension, and a timeout each map to their own
/// [`WalletError`] variant.
pub async fn connect(kind: &ConnectorKind) -> Result<String> {
    let ConnectorKind::Freighter = kind;
    log::info!("requesting {} access", kind.name());

    let attempt = Box::pin(connectFreighter());
    let timeout = Box::pin(TimeoutFuture::new(CONNECT_TIMEOUT_MS));

    match select(attempt, timeout).await {
        Either::Left((Ok(value), _)) => value
            .as_string()
            .ok_or_else(|| WalletError::Connector("public key is not a string".to_string())),
        Either::Left((Err(e), _)) => Err(WalletError::from_js_message(&js_error_message(&e))),
        Either::Right(((), _)) => Err(WalletError::TimedOut),
    }
}

/// Pull a human-readable message out of a JS rejection value.
fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| format!("Connection error: {:?}", value))
}
