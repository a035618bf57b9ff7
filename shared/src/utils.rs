//! # Shared Utility Functions
//!
//! Address formatting helpers used by the frontend:
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - Alias for `format_address` with default parameters
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "GDQNY3PBOJOKYZSRMK2S7LHHGWZIUISD4QORETLMXEWXBI7KFZZMKTL3";
//! assert_eq!(format_address(address, 4, 4), "GDQN...KTL3");
//! ```

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "GDQNY3PBOJOKYZSRMK2S7LHHGWZIUISD4QORETLMXEWXBI7KFZZMKTL3";
/// assert_eq!(format_address(addr, 4, 4), "GDQN...KTL3");
/// assert_eq!(format_address(addr, 6, 6), "GDQNY3...ZMKTL3");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    // Counted in chars, not bytes: the address comes over the JS boundary
    // and nothing upstream guarantees it is ASCII
    let char_count = address.chars().count();

    if char_count <= prefix_len + suffix_len {
        return address.to_string();
    }

    let prefix: String = address.chars().take(prefix_len).collect();
    let suffix: String = address.chars().skip(char_count - suffix_len).collect();

    format!("{}...{}", prefix, suffix)
}

/// Format a wallet address with default 4-character prefix and suffix.
///
/// This is a convenience function that calls [`format_address`] with `prefix_len=4`
/// and `suffix_len=4`.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// let addr = "GDQNY3PBOJOKYZSRMK2S7LHHGWZIUISD4QORETLMXEWXBI7KFZZMKTL3";
/// assert_eq!(truncate_address(addr), "GDQN...KTL3");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 4, 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_address() {
        let addr = "GDQNY3PBOJOKYZSRMK2S7LHHGWZIUISD4QORETLMXEWXBI7KFZZMKTL3";
        assert_eq!(format_address(addr, 4, 4), "GDQN...KTL3");
        assert_eq!(format_address(addr, 6, 6), "GDQNY3...ZMKTL3");
        assert_eq!(format_address(addr, 2, 2), "GD...L3");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("short", 4, 4), "short");
        assert_eq!(format_address("abc", 4, 4), "abc");
    }

    #[test]
    fn test_format_address_multibyte() {
        // Must not panic on non-ASCII input from a misbehaving extension
        assert_eq!(format_address("aééééééé", 4, 4), "aééééééé");
        assert_eq!(format_address("ééééééééééééé", 4, 4), "éééé...éééé");
        assert_eq!(truncate_address("G\u{00e9}BCDEFGH1234567890"), "GéBC...7890");
    }

    #[test]
    fn test_truncate_address() {
        assert_eq!(truncate_address("GABCDEFGH1234567890"), "GABC...7890");
    }
}
