//! Configuration management commands

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;

use crate::cli::output::{OutputFormat, print_formatted};
use crate::config::Config;

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Get a specific config value
    Get {
        /// Config key (e.g., "api.base_url", "search.debounce_ms")
        key: String,
    },

    /// Set a config value
    Set {
        /// Config key (e.g., "api.base_url", "search.debounce_ms")
        key: String,

        /// Value to set
        value: String,
    },

    /// Show config file path
    Path,
}

#[derive(Serialize)]
struct ConfigPathResult {
    path: String,
    exists: bool,
}

pub async fn run(command: ConfigCommands, format: OutputFormat, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Show => show(format).await,
        ConfigCommands::Get { key } => get(&key, format).await,
        ConfigCommands::Set { key, value } => set(&key, &value, quiet).await,
        ConfigCommands::Path => path(format).await,
    }
}

async fn show(format: OutputFormat) -> Result<()> {
    let config = Config::load()?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config)?),
        OutputFormat::Text => println!("{}", toml::to_string_pretty(&config)?),
    }

    Ok(())
}

async fn get(key: &str, format: OutputFormat) -> Result<()> {
    let config = Config::load()?;
    let value = get_config_value(&config, key)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&value)?),
        OutputFormat::Text => println!("{}", value),
    }

    Ok(())
}

fn get_config_value(config: &Config, key: &str) -> Result<String> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["api", "base_url"] => Ok(config.api.base_url.clone()),
        ["search", "debounce_ms"] => Ok(config.search.debounce_ms.to_string()),
        ["window", "width"] => Ok(config.window.width.to_string()),
        ["window", "height"] => Ok(config.window.height.to_string()),
        _ => anyhow::bail!("Unknown config key: {}", key),
    }
}

async fn set(key: &str, value: &str, quiet: bool) -> Result<()> {
    let mut config = Config::load()?;

    set_config_value(&mut config, key, value)?;
    config.save()?;

    if !quiet {
        println!("Set {} = {}", key, value);
    }
    Ok(())
}

fn set_config_value(config: &mut Config, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["api", "base_url"] => {
            if !value.starts_with("http://") && !value.starts_with("https://") {
                anyhow::bail!("api.base_url must be an http(s) URL");
            }
            config.api.base_url = value.trim_end_matches('/').to_string();
        }
        ["search", "debounce_ms"] => {
            config.search.debounce_ms = value.parse()?;
        }
        ["window", "width"] => {
            config.window.width = parse_dimension(key, value)?;
        }
        ["window", "height"] => {
            config.window.height = parse_dimension(key, value)?;
        }
        _ => anyhow::bail!("Unknown config key: {}", key),
    }

    Ok(())
}

/// Window sizes must be finite and positive
fn parse_dimension(key: &str, value: &str) -> Result<f32> {
    let size: f32 = value.parse()?;
    if !size.is_finite() || size <= 0.0 {
        anyhow::bail!("{} must be a positive number of pixels", key);
    }
    Ok(size)
}

async fn path(format: OutputFormat) -> Result<()> {
    let path = Config::config_path()?;
    let exists = path.exists();

    let result = ConfigPathResult {
        path: path.to_string_lossy().to_string(),
        exists,
    };

    print_formatted(&result, format, |r| {
        format!("{}{}", r.path, if r.exists { "" } else { " (not found)" })
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get() {
        let mut config = Config::default();

        set_config_value(&mut config, "search.debounce_ms", "500").unwrap();
        set_config_value(&mut config, "api.base_url", "http://localhost:4000/v4/").unwrap();

        assert_eq!(get_config_value(&config, "search.debounce_ms").unwrap(), "500");
        assert_eq!(get_config_value(&config, "api.base_url").unwrap(), "http://localhost:4000/v4");
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = Config::default();

        assert!(set_config_value(&mut config, "search.debounce_ms", "soon").is_err());
        assert!(set_config_value(&mut config, "api.base_url", "ftp://example.org").is_err());
        assert!(set_config_value(&mut config, "launcher.theme", "dark").is_err());
        assert!(get_config_value(&config, "nope").is_err());
    }

    #[test]
    fn test_window_size_must_be_positive_and_finite() {
        let mut config = Config::default();

        for bad in ["NaN", "inf", "-inf", "-200", "0"] {
            assert!(set_config_value(&mut config, "window.width", bad).is_err(), "{}", bad);
            assert!(set_config_value(&mut config, "window.height", bad).is_err(), "{}", bad);
        }
        assert_eq!(config.window.width, 960.0);
        assert_eq!(config.window.height, 760.0);

        set_config_value(&mut config, "window.width", "1280").unwrap();
        assert_eq!(get_config_value(&config, "window.width").unwrap(), "1280");
    }
}
