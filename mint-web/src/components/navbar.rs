//! Navigation bar
//!
//! Fixed-height header: app title and target network on the left, scheme
//! toggle and wallet button on the right.

use leptos::prelude::*;

use crate::components::{ConnectWallet, ThemeToggle};
use crate::state::theme::ThemeController;
use crate::state::wallet::WalletSession;

#[component]
pub fn Navbar(
    session: WalletSession,
    theme: ThemeController,
    app_name: &'static str,
    network: String,
) -> impl IntoView {
    view! {
        <nav>
            <div style="height: 60px; max-width: 1200px; margin: 0 auto; padding: 0 24px; display: flex; justify-content: space-between; align-items: center;">
                <div style="display: flex; align-items: baseline; gap: 10px;">
                    <h3 class="nav-title">{app_name}</h3>
                    <span class="network-badge" style="font-size: 0.75em; opacity: 0.7;">{network}</span>
                </div>
                <div style="display: flex; align-items: center; gap: 12px;">
                    <ThemeToggle theme/>
                    <ConnectWallet session/>
                </div>
            </div>
        </nav>
    }
}
