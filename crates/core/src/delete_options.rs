//! Cleanup flags accepted when deleting a database or a service.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Optional cleanup behaviour for a delete.
///
/// Each flag is tri-state: unset flags are left out of the request entirely so
/// the platform applies its own default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DeleteOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_configurations: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_volumes: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docker_cleanup: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_connected_networks: Option<bool>,
}

impl DeleteOptions {
    /// Flags as `(query key, value)` pairs, set flags only
    pub fn query_pairs(&self) -> Vec<(&'static str, bool)> {
        [
            ("delete_configurations", self.delete_configurations),
            ("delete_volumes", self.delete_volumes),
            ("docker_cleanup", self.docker_cleanup),
            ("delete_connected_networks", self.delete_connected_networks),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect()
    }

    /// Encode the set flags as a query string (without the leading `?`).
    ///
    /// Returns `None` when no flag is set.
    pub fn to_query_string(&self) -> Option<String> {
        let pairs = self.query_pairs();
        if pairs.is_empty() {
            return None;
        }

        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in pairs {
            serializer.append_pair(key, if value { "true" } else { "false" });
        }
        Some(serializer.finish())
    }

    /// Append the encoded flags to `path`, if any are set
    pub fn apply_to_path(&self, path: &str) -> String {
        match self.to_query_string() {
            Some(query) => format!("{}?{}", path, query),
            None => path.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const KEYS: [&str; 4] = [
        "delete_configurations",
        "delete_volumes",
        "docker_cleanup",
        "delete_connected_networks",
    ];

    fn options_from(states: [Option<bool>; 4]) -> DeleteOptions {
        DeleteOptions {
            delete_configurations: states[0],
            delete_volumes: states[1],
            docker_cleanup: states[2],
            delete_connected_networks: states[3],
        }
    }

    #[test]
    fn test_no_flags_means_no_query() {
        let options = DeleteOptions::default();
        assert_eq!(options.to_query_string(), None);
        assert_eq!(options.apply_to_path("/databases/abc"), "/databases/abc");
    }

    #[test]
    fn test_unknown_flag_rejected() {
        let result = serde_json::from_value::<DeleteOptions>(serde_json::json!({
            "deleteVolume": false
        }));
        assert!(result.unwrap_err().to_string().contains("deleteVolume"));
    }

    #[test]
    fn test_single_flag() {
        let options = DeleteOptions {
            delete_volumes: Some(false),
            ..Default::default()
        };
        assert_eq!(
            options.apply_to_path("/services/abc"),
            "/services/abc?delete_volumes=false"
        );
    }

    #[test]
    fn test_every_flag_combination() {
        let states = [None, Some(true), Some(false)];
        let mut seen = 0;

        for a in states {
            for b in states {
                for c in states {
                    for d in states {
                        let flags = [a, b, c, d];
                        let query = options_from(flags).to_query_string();

                        let expected: HashSet<String> = KEYS
                            .iter()
                            .zip(flags)
                            .filter_map(|(key, flag)| flag.map(|v| format!("{}={}", key, v)))
                            .collect();

                        match query {
                            None => assert!(expected.is_empty()),
                            Some(query) => {
                                let actual: HashSet<String> =
                                    query.split('&').map(str::to_string).collect();
                                assert_eq!(actual, expected, "flags {:?}", flags);
                            }
                        }
                        seen += 1;
                    }
                }
            }
        }

        assert_eq!(seen, 81);
    }

    #[test]
    fn test_deserializes_camel_case_arguments() {
        let options: DeleteOptions = serde_json::from_value(serde_json::json!({
            "deleteConfigurations": true,
            "dockerCleanup": false
        }))
        .unwrap();

        assert_eq!(options.delete_configurations, Some(true));
        assert_eq!(options.delete_volumes, None);
        assert_eq!(options.docker_cleanup, Some(false));
        assert_eq!(options.delete_connected_networks, None);
    }
}
