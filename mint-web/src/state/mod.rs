//! Application state

pub mod theme;
pub mod wallet;
