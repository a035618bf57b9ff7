//! Connect Wallet button
//!
//! Disconnected: shows the call to action and starts the connect flow on
//! click. Connected: shows the truncated account address (further clicks
//! are no-ops; the session's single-flight guard refuses them) next to a
//! small disconnect control. A failed attempt renders its message inline
//! under the button.

use leptos::prelude::*;

use shared::utils::truncate_address;

use crate::state::wallet::WalletSession;

#[component]
pub fn ConnectWallet(session: WalletSession) -> impl IntoView {
    let on_click = move |_| {
        if session.address().is_none() {
            session.connect_default();
        }
    };

    let label = move || {
        if let Some(address) = session.address() {
            truncate_address(&address)
        } else if session.is_connecting() {
            "Connecting...".to_string()
        } else {
            "Connect Wallet".to_string()
        }
    };

    view! {
        <div class="connect-wallet" style="display: flex; align-items: center; gap: 8px; flex-wrap: wrap;">
            <button
                class="btn"
                on:click=on_click
                disabled=move || session.is_connecting()
            >
                {label}
            </button>
            {move || {
                session.is_connected().then(|| {
                    view! {
                        <button class="btn btn-ghost" on:click=move |_| session.disconnect()>
                            "Disconnect"
                        </button>
                    }
                })
            }}
            {move || {
                session.error().map(|err| {
                    view! {
                        <p class="connect-error" style="color: var(--text-error); font-size: 0.85em; margin-top: 8px;">
                            {err.to_string()}
                        </p>
                    }
                })
            }}
        </div>
    }
}
