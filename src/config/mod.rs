//! Configuration management for the shell server.

use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    /// Port the shell server listens on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Base URL of the external MCM REST backend, e.g. "http://localhost:5000"
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

fn default_port() -> u16 {
    8080
}

fn default_api_base() -> String {
    "http://localhost:5000".into()
}

/// Get config directory (XDG_CONFIG_HOME or platform default)
pub fn get_config_dir() -> std::path::PathBuf {
    if let Ok(dir) = std::env::var("MCM_CONFIG_DIR") {
        return std::path::PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home).join("Library/Application Support/mcm-console");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return std::path::PathBuf::from(xdg).join("mcm-console");
        }
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home).join(".config/mcm-console");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return std::path::PathBuf::from(appdata).join("mcm-console");
        }
    }

    // Fallback to current directory
    std::path::PathBuf::from(".")
}

pub fn load_config() -> Result<Config> {
    let config_dir = get_config_dir();

    let mut builder = ::config::Config::builder()
        // Start with defaults
        .set_default("port", default_port() as i64)?
        .set_default("api_base", default_api_base())?
        // Load from config file if it exists
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy()).required(false),
        )
        // Override with environment variables (MCM_PORT, MCM_API_BASE, ...)
        .add_source(
            ::config::Environment::with_prefix("MCM")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

    // Explicit precedence: MCM_PORT > PORT > config file > default
    if let Ok(port) = std::env::var("MCM_PORT") {
        if let Ok(port_num) = port.parse::<u16>() {
            builder = builder.set_override("port", port_num as i64)?;
        }
    } else if let Ok(port) = std::env::var("PORT") {
        // Legacy PORT fallback (Docker, PaaS runners)
        if let Ok(port_num) = port.parse::<u16>() {
            builder = builder.set_override("port", port_num as i64)?;
        }
    }

    let config = builder.build()?;
    let config: Config = config.try_deserialize()?;

    // Catch a malformed backend URL at startup instead of on the first proxied request
    url::Url::parse(&config.api_base)
        .map_err(|e| anyhow::anyhow!("invalid api_base {:?}: {e}", config.api_base))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    #[test]
    #[serial]
    fn test_defaults_without_config_file() {
        env::set_var("MCM_CONFIG_DIR", "/tmp/mcm-test-nonexistent");
        env::remove_var("MCM_PORT");
        env::remove_var("PORT");
        env::remove_var("MCM_API_BASE");

        let config = load_config().expect("config should load");

        env::remove_var("MCM_CONFIG_DIR");

        assert_eq!(config.port, 8080);
        assert_eq!(config.api_base, "http://localhost:5000");
    }

    #[test]
    #[serial]
    fn test_api_base_from_env() {
        env::set_var("MCM_CONFIG_DIR", "/tmp/mcm-test-nonexistent");
        env::set_var("MCM_API_BASE", "https://api.mcm.example");

        let config = load_config().expect("config should load");

        env::remove_var("MCM_API_BASE");
        env::remove_var("MCM_CONFIG_DIR");

        assert_eq!(config.api_base, "https://api.mcm.example");
    }

    #[test]
    #[serial]
    fn test_port_env_fallback() {
        // PORT env var should work as fallback when MCM_PORT is not set
        env::remove_var("MCM_PORT");
        env::remove_var("PORT");
        env::set_var("MCM_CONFIG_DIR", "/tmp/mcm-test-nonexistent");

        env::set_var("PORT", "3000");

        let config = load_config().expect("config should load");

        env::remove_var("PORT");
        env::remove_var("MCM_CONFIG_DIR");

        assert_eq!(config.port, 3000, "PORT env var should set config.port");
    }

    #[test]
    #[serial]
    fn test_mcm_port_takes_precedence_over_port() {
        env::remove_var("MCM_PORT");
        env::remove_var("PORT");
        env::set_var("MCM_CONFIG_DIR", "/tmp/mcm-test-nonexistent");

        env::set_var("MCM_PORT", "5000");
        env::set_var("PORT", "3000");

        let config = load_config().expect("config should load");

        env::remove_var("MCM_PORT");
        env::remove_var("PORT");
        env::remove_var("MCM_CONFIG_DIR");

        assert_eq!(config.port, 5000, "MCM_PORT should take precedence over PORT");
    }

    #[test]
    #[serial]
    fn test_invalid_port_uses_default() {
        env::remove_var("MCM_PORT");
        env::remove_var("PORT");
        env::set_var("MCM_CONFIG_DIR", "/tmp/mcm-test-nonexistent");

        env::set_var("PORT", "not-a-number");

        let config = load_config().expect("config should load");

        env::remove_var("PORT");
        env::remove_var("MCM_CONFIG_DIR");

        assert_eq!(config.port, 8080, "Invalid PORT should fall back to default");
    }

    #[test]
    #[serial]
    fn test_invalid_api_base_is_rejected() {
        env::set_var("MCM_CONFIG_DIR", "/tmp/mcm-test-nonexistent");
        env::set_var("MCM_API_BASE", "not a url");

        let result = load_config();

        env::remove_var("MCM_API_BASE");
        env::remove_var("MCM_CONFIG_DIR");

        assert!(result.is_err(), "malformed api_base should fail config load");
    }

    #[test]
    #[serial]
    fn test_config_file_is_read() {
        let temp_dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(
            temp_dir.path().join("config.toml"),
            "port = 9191\napi_base = \"http://backend:4000\"\n",
        )
        .expect("write config file");

        env::remove_var("MCM_PORT");
        env::remove_var("PORT");
        env::remove_var("MCM_API_BASE");
        env::set_var("MCM_CONFIG_DIR", temp_dir.path());

        let config = load_config().expect("config should load");

        env::remove_var("MCM_CONFIG_DIR");

        assert_eq!(config.port, 9191);
        assert_eq!(config.api_base, "http://backend:4000");
    }
}
