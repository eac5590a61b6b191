//! Process environment snapshot and dotenv rendering.

use crate::core::store::ConfigMap;

/// Snapshot the process environment into a fresh map.
///
/// This is the base mapping that fetched secrets are overlaid onto.
/// Variables with non-UTF-8 names or values are skipped.
pub fn snapshot() -> ConfigMap {
    std::env::vars().collect()
}

/// Render a map as dotenv-style `KEY=value` lines.
///
/// Quotes values that contain spaces or special characters.
pub fn to_dotenv(map: &ConfigMap) -> String {
    render(map, "")
}

/// Render a map as shell-evalable `export KEY=value` lines.
pub fn to_exports(map: &ConfigMap) -> String {
    render(map, "export ")
}

fn render(map: &ConfigMap, line_prefix: &str) -> String {
    let mut output = String::new();

    for (key, value) in map {
        if value.contains(' ') || value.contains('#') || value.contains('=') {
            output.push_str(&format!("{}{}=\"{}\"\n", line_prefix, key, value));
        } else {
            output.push_str(&format!("{}{}={}\n", line_prefix, key, value));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_contains_path() {
        let map = snapshot();
        assert!(map.contains_key("PATH"));
    }

    #[test]
    fn snapshot_is_fresh_per_call() {
        let mut first = snapshot();
        first.insert("WARREN_TEST_ONLY".to_string(), "x".to_string());
        assert!(!snapshot().contains_key("WARREN_TEST_ONLY"));
    }

    #[test]
    fn plain_values_are_unquoted() {
        let map = ConfigMap::from([("PORT".to_string(), "5432".to_string())]);
        assert_eq!(to_dotenv(&map), "PORT=5432\n");
    }

    #[test]
    fn special_values_are_quoted() {
        let map = ConfigMap::from([("MOTD".to_string(), "hello world".to_string())]);
        assert_eq!(to_dotenv(&map), "MOTD=\"hello world\"\n");
    }

    #[test]
    fn exports_carry_the_keyword() {
        let map = ConfigMap::from([("PORT".to_string(), "5432".to_string())]);
        assert_eq!(to_exports(&map), "export PORT=5432\n");
    }
}
