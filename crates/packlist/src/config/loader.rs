use std::path::Path;

use crate::classify::Category;
use crate::config::schema::Config;
use crate::error::ConfigError;

const SCHEMA_JSON: &str = include_str!("../../../../schema/config-v1.json");

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    load_config_from_str(&content)
}

pub fn load_config_from_str(content: &str) -> Result<Config, ConfigError> {
    let json_value: serde_json::Value = serde_json::from_str(content)?;

    validate_schema(&json_value)?;

    let config: Config = serde_json::from_value(json_value)?;

    validate_config(&config)?;

    Ok(config)
}

fn validate_schema(json_value: &serde_json::Value) -> Result<(), ConfigError> {
    let schema: serde_json::Value =
        serde_json::from_str(SCHEMA_JSON).map_err(|e| ConfigError::Validation {
            message: format!("Invalid embedded schema JSON: {}", e),
        })?;

    let validator = jsonschema::validator_for(&schema).map_err(|e| ConfigError::Validation {
        message: format!("Failed to compile JSON schema: {}", e),
    })?;

    let errors: Vec<String> = validator
        .iter_errors(json_value)
        .map(|e| format!("{} at {}", e, e.instance_path()))
        .collect();
    if !errors.is_empty() {
        return Err(ConfigError::SchemaValidation {
            errors: errors.join("; "),
        });
    }

    Ok(())
}

fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.version != "1.0" {
        return Err(ConfigError::Validation {
            message: format!("Unsupported config version: {}", config.version),
        });
    }

    if let Some(collections) = &config.collections {
        for code in collections.keys() {
            if Category::from_code(code).is_none() {
                return Err(ConfigError::Validation {
                    message: format!("Unknown category code '{}' in collections", code),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_loads_with_defaults() {
        let config = load_config_from_str(
            r#"{
                "version": "1.0",
                "tables": {
                    "prices": "tables/prices.csv",
                    "products": "https://example.com/products.csv",
                    "materials": "tables/materials.csv"
                }
            }"#,
        )
        .unwrap();

        assert_eq!(config.tables.cache_ttl_secs, 600);
        assert!(config.collections.is_none());
    }

    #[test]
    fn test_missing_tables_fails_schema() {
        let result = load_config_from_str(r#"{ "version": "1.0" }"#);
        assert!(matches!(result, Err(ConfigError::SchemaValidation { .. })));
    }

    #[test]
    fn test_unsupported_version_rejected() {
        let result = load_config_from_str(
            r#"{
                "version": "2.0",
                "tables": {
                    "prices": "a", "products": "b", "materials": "c"
                }
            }"#,
        );
        assert!(matches!(result, Err(ConfigError::Validation { .. })));
    }

    #[test]
    fn test_unknown_category_code_rejected() {
        let result = load_config_from_str(
            r#"{
                "version": "1.0",
                "tables": { "prices": "a", "products": "b", "materials": "c" },
                "collections": { "zz": [["OLD", "NEW"]] }
            }"#,
        );
        assert!(matches!(result, Err(ConfigError::Validation { .. })));
    }

    #[test]
    fn test_collection_override_parses_ordered_pairs() {
        let config = load_config_from_str(
            r#"{
                "version": "1.0",
                "tables": { "prices": "a", "products": "b", "materials": "c" },
                "collections": { "b": [["CROCO CLUB", "REMAPPED"], ["SUMMER FUN", "OTHER"]] }
            }"#,
        )
        .unwrap();

        let pairs = &config.collections.as_ref().unwrap()["b"];
        assert_eq!(pairs[0], ("CROCO CLUB".to_string(), "REMAPPED".to_string()));
        assert_eq!(pairs[1], ("SUMMER FUN".to_string(), "OTHER".to_string()));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let result = load_config_from_str("{ not json");
        assert!(matches!(result, Err(ConfigError::ParseJson(_))));
    }
}
