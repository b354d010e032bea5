use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Where the original deployment runs its agent API.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000/ask";

const BACKEND_URL_ENV: &str = "LAW_AID_BACKEND_URL";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub backend_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}

fn config_path() -> Result<std::path::PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?;
    let dir = home.join(".law-aid");
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("config.json"))
}

/// The environment variable wins over the config file; the file is
/// written with defaults on first run so it can be edited afterwards.
pub fn load_config() -> Result<Config> {
    if let Ok(url) = std::env::var(BACKEND_URL_ENV) {
        if !url.is_empty() {
            return Ok(Config { backend_url: url });
        }
    }

    let path = config_path()?;
    if path.exists() {
        let bytes = std::fs::read(&path)?;
        let cfg: Config = serde_json::from_slice(&bytes)?;
        return Ok(cfg);
    }

    let default = Config::default();
    let json = serde_json::to_vec_pretty(&default)?;
    std::fs::write(path, json)?;
    Ok(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_the_local_agent() {
        assert_eq!(Config::default().backend_url, "http://localhost:8000/ask");
    }

    #[test]
    fn environment_overrides_the_file() {
        std::env::set_var(BACKEND_URL_ENV, "http://example.test:9000/ask");
        let cfg = load_config().unwrap();
        std::env::remove_var(BACKEND_URL_ENV);
        assert_eq!(cfg.backend_url, "http://example.test:9000/ask");
    }
}
