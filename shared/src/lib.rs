//! # Shared Types and Utilities
//!
//! Common types used by the mint-web frontend (and any future backend):
//! chain metadata describing the Soroban networks the app can target, and
//! small formatting helpers for Stellar account addresses.
//!
//! ## Structure
//!
//! - **[`chain`]**: Static network metadata
//!   - **[`chain::ChainDescriptor`]**: One network the app can connect to
//!   - **[`chain::default_chains`]**: The ordered list of supported networks
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!   - **[`utils::truncate_address`]**: Truncate addresses with ellipsis
//!
//! ## Wire Format
//!
//! All types serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case** in Rust, which maps to **snake_case** in JSON
//! - All structs implement both `Serialize` and `Deserialize`
//!
//! ## Usage
//!
//! ```rust
//! use shared::chain::default_chains;
//! use shared::utils::truncate_address;
//!
//! let chains = default_chains();
//! assert_eq!(chains[0].id, "futurenet");
//!
//! let addr = "GDQNY3PBOJOKYZSRMK2S7LHHGWZIUISD4QORETLMXEWXBI7KFZZMKTL3";
//! assert_eq!(truncate_address(addr), "GDQN...KTL3");
//! ```

pub mod chain;
pub mod utils;

// Re-export commonly used items for convenience
pub use chain::*;
pub use utils::*;
