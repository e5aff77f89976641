use serde::Deserialize;

/// Root application configuration. Loaded from environment variables
/// with the prefix `DINEOPS__`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_restaurant_name")]
    pub restaurant_name: String,
    #[serde(default = "default_screen")]
    pub default_screen: String,
    #[serde(default)]
    pub tables: TableConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TableConfig {
    #[serde(default = "default_table_total")]
    pub total: u32,
}

fn default_restaurant_name() -> String {
    "Bella Vista".to_string()
}
fn default_screen() -> String {
    "dashboard".to_string()
}
fn default_table_total() -> u32 {
    24
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            total: default_table_total(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            restaurant_name: default_restaurant_name(),
            default_screen: default_screen(),
            tables: TableConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("DINEOPS")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.default_screen, "dashboard");
        assert_eq!(config.tables.total, 24);
    }
}
