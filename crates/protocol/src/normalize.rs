//! Value normalization applied when a draft becomes an entry.
//!
//! Which rule applies is decided per field by the record models; the two
//! rules are never combined implicitly.

/// Trims surrounding whitespace from every value, keeping case.
pub fn trimmed(values: &[String]) -> Vec<String> {
    values.iter().map(|v| v.trim().to_string()).collect()
}

/// Lower-cases every value, keeping surrounding whitespace.
pub fn lowercased(values: &[String]) -> Vec<String> {
    values.iter().map(|v| v.to_lowercase()).collect()
}

/// Lower-cases and trims every value.
pub fn lowercased_trimmed(values: &[String]) -> Vec<String> {
    values.iter().map(|v| v.trim().to_lowercase()).collect()
}
