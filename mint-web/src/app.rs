//! App shell
//!
//! Wires the startup configuration, the color scheme, and the wallet
//! session together, then renders navbar and home page. State handles are
//! passed down as props; nothing reaches into ambient context.

use leptos::prelude::*;

use crate::components::Navbar;
use crate::config::AppConfig;
use crate::pages::HomePage;
use crate::state::theme::ThemeController;
use crate::state::wallet::WalletSession;

#[component]
pub fn App() -> impl IntoView {
    let AppConfig {
        app_name,
        chains,
        connectors,
    } = AppConfig::load();

    let theme = ThemeController::init();
    let session = WalletSession::new(connectors);
    // First chain is the default target; shown as a badge in the navbar
    let network = chains.first().map(|c| c.name.clone()).unwrap_or_default();

    view! {
        <div class="app" data-theme=move || theme.scheme().as_str()>
            <Navbar session theme app_name network/>
            <HomePage session app_name/>
        </div>
    }
}
