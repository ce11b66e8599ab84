//! Version extraction and floor comparison.

/// Extract a version number from command output.
pub fn extract_version(output: &str) -> Option<String> {
    let patterns = [r"(\d+\.\d+\.\d+)", r"version\s+(\d+\.\d+)", r"v(\d+\.\d+)"];

    for pattern in &patterns {
        if let Ok(re) = regex::Regex::new(pattern) {
            if let Some(caps) = re.captures(output) {
                if let Some(m) = caps.get(1) {
                    return Some(m.as_str().to_string());
                }
            }
        }
    }

    None
}

/// Check that `found` is at least `minimum`.
///
/// Components compare numerically, never lexically: `3.10` is greater
/// than `3.9`. Missing components count as zero, so `3` and `3.0` are
/// equal. Non-numeric components also count as zero.
pub fn version_at_least(found: &str, minimum: &str) -> bool {
    let parse = |v: &str| -> Vec<u32> {
        v.split('.')
            .take(4)
            .map(|s| s.trim().parse().unwrap_or(0))
            .collect()
    };

    let found_parts = parse(found);
    let minimum_parts = parse(minimum);
    let len = found_parts.len().max(minimum_parts.len());

    for i in 0..len {
        let f = found_parts.get(i).copied().unwrap_or(0);
        let m = minimum_parts.get(i).copied().unwrap_or(0);
        if f > m {
            return true;
        }
        if f < m {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_version_semver() {
        let output = "Pacman v6.1.0 - libalpm v14.0.0";
        assert_eq!(extract_version(output), Some("6.1.0".to_string()));
    }

    #[test]
    fn extract_version_with_v() {
        assert_eq!(extract_version("v18.17"), Some("18.17".to_string()));
    }

    #[test]
    fn extract_version_no_match() {
        assert!(extract_version("no version here").is_none());
    }

    #[test]
    fn version_ordering_is_numeric_not_lexical() {
        // "3.10" sorts before "3.9" as a string; it must not here
        assert!(version_at_least("3.10", "3.9"));
        assert!(!version_at_least("3.9", "3.10"));
    }

    #[test]
    fn version_at_floor_passes() {
        assert!(version_at_least("5.0", "5.0"));
        assert!(version_at_least("5.0.0", "5.0"));
        assert!(version_at_least("3", "3.0"));
    }

    #[test]
    fn version_above_floor_passes() {
        assert!(version_at_least("6.1.0", "5.0"));
        assert!(version_at_least("10.0", "9.99"));
        assert!(version_at_least("5.0.1", "5.0"));
    }

    #[test]
    fn version_below_floor_fails() {
        assert!(!version_at_least("4.2.1", "5.0"));
        assert!(!version_at_least("9.99", "10.0"));
        assert!(!version_at_least("5.0", "5.0.1"));
    }

    #[test]
    fn non_numeric_components_count_as_zero() {
        assert!(!version_at_least("abc", "0.1"));
        assert!(version_at_least("0.1", "abc"));
    }
}
