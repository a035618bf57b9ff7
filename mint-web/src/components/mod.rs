//! UI Components

pub mod connect_wallet;
pub mod navbar;
pub mod theme_toggle;

pub use connect_wallet::ConnectWallet;
pub use navbar::Navbar;
pub use theme_toggle::ThemeToggle;
