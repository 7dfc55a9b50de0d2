use serde::{Deserialize, Serialize};

use crate::catalogue::{Category, Topic};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    /// Seed catalogue, in tab order.
    #[serde(default = "default_catalogue")]
    pub catalogue: Vec<Category>,
}

/// Default settings for the application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Category that receives newly added topics.
    #[serde(default = "default_target_category")]
    pub target_category: String,
    /// Event loop tick interval in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_target_category() -> String {
    "Custom".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn topic(id: i64, name: &str, keywords: &[&str]) -> Topic {
    Topic {
        id,
        name: name.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

/// Built-in seed used when no config file exists.
///
/// Ids 3 and 4 are deliberately reused across categories; ids are only
/// scoped to their owning category.
fn default_catalogue() -> Vec<Category> {
    vec![
        Category {
            name: "Technology".to_string(),
            topics: vec![
                topic(1, "Artificial Intelligence", &["AI", "Machine Learning"]),
                topic(2, "Blockchain", &["Cryptocurrency", "Decentralization"]),
            ],
        },
        Category {
            name: "Science".to_string(),
            topics: vec![
                topic(3, "Quantum Physics", &["Entanglement", "Superposition"]),
                topic(4, "Genetics", &["DNA", "Genome"]),
            ],
        },
        Category {
            name: "ICP".to_string(),
            topics: vec![
                topic(3, "ICP Physics", &["Entanglement", "Superposition"]),
                topic(4, "ICP", &["DNA", "Genome"]),
            ],
        },
        Category {
            name: "Mission".to_string(),
            topics: vec![
                topic(3, "Mission Physics", &["Mission", "Superposition"]),
                topic(4, "Mission", &["DNA", "Genome"]),
            ],
        },
        Category {
            name: "Custom".to_string(),
            topics: vec![],
        },
    ]
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            target_category: default_target_category(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            defaults: Defaults::default(),
            catalogue: default_catalogue(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_seed_has_five_categories_custom_last_and_empty() {
        let config = Config::default();
        let names: Vec<&str> = config.catalogue.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Technology", "Science", "ICP", "Mission", "Custom"]);
        assert!(config.catalogue[4].topics.is_empty());
    }

    #[test]
    fn default_seed_reuses_ids_across_categories() {
        let config = Config::default();
        let science_ids: Vec<i64> = config.catalogue[1].topics.iter().map(|t| t.id).collect();
        let icp_ids: Vec<i64> = config.catalogue[2].topics.iter().map(|t| t.id).collect();
        assert_eq!(science_ids, icp_ids);
    }
}
