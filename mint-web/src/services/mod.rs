//! Browser-facing services

pub mod wallet;
