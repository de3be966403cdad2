use libpretty::Config;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;


/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "PRETTY_CONFIG";

/// Get the config file path: `--config` first, then `PRETTY_CONFIG`, then
/// `~/.config/pretty/config.yaml`.
pub fn get_config_path(cli_path: Option<&Path>) -> PathBuf {
    resolve_config_path(cli_path, env::var(CONFIG_ENV_VAR).ok(), dirs::config_dir())
}

fn resolve_config_path(
    cli_path: Option<&Path>,
    env_path: Option<String>,
    config_dir: Option<PathBuf>,
) -> PathBuf {
    if let Some(path) = cli_path {
        return path.to_path_buf();
    }
    if let Some(path) = env_path.filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }

    match config_dir {
        Some(dir) => dir.join("pretty").join("config.yaml"),
        // Fallback to current directory
        None => PathBuf::from("config.yaml"),
    }
}

/// Load the configuration at `path`.
///
/// A missing file yields the defaults unless `required` is set.
pub fn load_config(path: &Path, required: bool) -> Result<Config, String> {
    if !required && !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    Config::load(Some(path)).map_err(|e| match std::error::Error::source(&e) {
        Some(source) => format!("{} ({}): {}", e, path.display(), source),
        None => format!("{} ({})", e, path.display()),
    })
}

/// Write the default configuration to `path` unless a file is already there.
pub fn init_config(path: &Path) -> Result<(), String> {
    if path.exists() {
        return Err(format!(
            "Config file already exists at {}. Edit it or remove it to recreate.",
            path.display()
        ));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }
    }

    let yaml = serde_yaml::to_string(&Config::default())
        .map_err(|e| format!("Failed to serialize config: {}", e))?;
    fs::write(path, yaml).map_err(|e| format!("Failed to write config file: {}", e))
}
