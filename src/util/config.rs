use std::sync::OnceLock;

use log::LevelFilter;

/// Read from the player's working directory, once.
const CONFIG_PATH: &str = "unity_bridge.cfg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BridgeConfig {
    pub log_level: LevelFilter,
    /// Send messages with a null target as "" instead of dropping them.
    pub forward_null_target: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        let log_level = if cfg!(feature = "verbose_logs") {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };
        Self { log_level, forward_null_target: false }
    }
}

static CONFIG: OnceLock<BridgeConfig> = OnceLock::new();

pub fn bridge_config() -> &'static BridgeConfig {
    CONFIG.get_or_init(read_config)
}

fn read_config() -> BridgeConfig {
    match std::fs::read_to_string(CONFIG_PATH) {
        Ok(text) => parse_config(&text),
        Err(_) => BridgeConfig::default(),
    }
}

fn parse_bool(value: &str) -> bool {
    ["1", "true", "on", "yes"]
        .iter()
        .any(|v| value.eq_ignore_ascii_case(v))
}

/// Parse `key = value` lines. Unknown keys and unparseable values keep the default.
pub fn parse_config(text: &str) -> BridgeConfig {
    let mut cfg = BridgeConfig::default();

    let entries = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_ascii_lowercase(), value.trim()));

    for (key, value) in entries {
        match key.as_str() {
            "log_level" => {
                if let Ok(level) = value.parse::<LevelFilter>() {
                    cfg.log_level = level;
                }
            }
            "forward_null_target" => cfg.forward_null_target = parse_bool(value),
            _ => log::trace!("unity_bridge.cfg: ignoring key {key}"),
        }
    }

    cfg
}
