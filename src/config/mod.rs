use std::{
    env, fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    domain::{MoneyFormat, MonthlyBudget},
    errors::{PayoffError, Result},
    simulation::Strategy,
};

const HOME_ENV: &str = "PAYOFF_HOME";
const DEFAULT_DIR_NAME: &str = ".payoff_core";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// Keys accepted by [`Config::set`].
pub const CONFIG_KEYS: [&str; 5] = [
    "currency_symbol",
    "default_strategy",
    "base_budget",
    "extra_budget",
    "color_enabled",
];

/// User preferences for the planner. Debt data is never stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default)]
    pub default_strategy: Strategy,
    #[serde(default = "Config::default_base_budget")]
    pub base_budget: Decimal,
    #[serde(default)]
    pub extra_budget: Decimal,
    #[serde(default = "Config::default_color_enabled")]
    pub color_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: Self::default_currency_symbol(),
            default_strategy: Strategy::default(),
            base_budget: Self::default_base_budget(),
            extra_budget: Decimal::ZERO,
            color_enabled: Self::default_color_enabled(),
        }
    }
}

impl Config {
    fn default_currency_symbol() -> String {
        "$".into()
    }

    fn default_base_budget() -> Decimal {
        MonthlyBudget::default().base
    }

    fn default_color_enabled() -> bool {
        true
    }

    pub fn budget(&self) -> Result<MonthlyBudget> {
        MonthlyBudget::new(self.base_budget, self.extra_budget)
    }

    pub fn money_format(&self) -> MoneyFormat {
        MoneyFormat::with_symbol(self.currency_symbol.clone())
    }

    /// Updates a single preference from its textual form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "currency_symbol" => {
                let symbol = value.trim();
                if symbol.is_empty() {
                    return Err(PayoffError::Config("currency symbol cannot be empty".into()));
                }
                self.currency_symbol = symbol.to_string();
            }
            "default_strategy" => self.default_strategy = value.parse()?,
            "base_budget" => self.base_budget = parse_non_negative(key, value)?,
            "extra_budget" => self.extra_budget = parse_non_negative(key, value)?,
            "color_enabled" => {
                self.color_enabled = match value.trim().to_ascii_lowercase().as_str() {
                    "true" | "on" | "yes" | "1" => true,
                    "false" | "off" | "no" | "0" => false,
                    other => {
                        return Err(PayoffError::Config(format!(
                            "expected true/false for color_enabled, got `{other}`"
                        )))
                    }
                }
            }
            other => {
                return Err(PayoffError::Config(format!(
                    "unknown key `{other}` (expected one of: {})",
                    CONFIG_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }
}

fn parse_non_negative(key: &str, value: &str) -> Result<Decimal> {
    let amount = Decimal::from_str(value.trim())
        .map_err(|_| PayoffError::Config(format!("`{value}` is not a valid amount for {key}")))?;
    if amount < Decimal::ZERO {
        return Err(PayoffError::Config(format!("{key} must not be negative")));
    }
    Ok(amount)
}

/// Returns the application directory, defaulting to `~/.payoff_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Loads and saves [`Config`] as pretty JSON.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Self {
        Self {
            path: base.join(CONFIG_FILE),
        }
    }

    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        serde_json::from_str(&data)
            .map_err(|err| PayoffError::Config(format!("{}: {err}", self.path.display())))
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), "config saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{existing}.{TMP_SUFFIX}"),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf());
        let config = manager.load().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.budget().unwrap().total(), dec!(2000));
    }

    #[test]
    fn save_then_load_preserves_changes() {
        let dir = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().join("nested"));
        let mut config = Config::default();
        config.set("default_strategy", "avalanche").unwrap();
        config.set("base_budget", "1250.50").unwrap();
        config.set("color_enabled", "off").unwrap();
        manager.save(&config).unwrap();

        let loaded = manager.load().unwrap();
        assert_eq!(loaded.default_strategy, Strategy::Avalanche);
        assert_eq!(loaded.base_budget, dec!(1250.50));
        assert!(!loaded.color_enabled);
        assert!(!tmp_path(manager.path()).exists());
    }

    #[test]
    fn partial_files_fill_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), r#"{"currency_symbol": "€"}"#).unwrap();
        let config = ConfigManager::with_base_dir(dir.path().to_path_buf())
            .load()
            .unwrap();
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.default_strategy, Strategy::Snowball);
        assert_eq!(config.money_format().symbol, "€");
    }

    #[test]
    fn rejects_bad_values() {
        let mut config = Config::default();
        assert!(config.set("base_budget", "-10").is_err());
        assert!(config.set("extra_budget", "lots").is_err());
        assert!(config.set("default_strategy", "random").is_err());
        assert!(config.set("theme", "dark").is_err());
        assert_eq!(config, Config::default());
    }
}
