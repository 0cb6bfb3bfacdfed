use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::domain::a001_order::error::OrderError;
use crate::domain::a001_order::price_table::PriceTable;

/// Panel configuration embedded at compile time
const EMBEDDED_CONFIG: &str = include_str!("../../config/panel.toml");

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PanelConfig {
    #[serde(default)]
    pub prices: PriceTable,
    #[serde(default)]
    pub working: WorkingViewConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct WorkingViewConfig {
    pub page_size: usize,
}

impl Default for WorkingViewConfig {
    fn default() -> Self {
        Self { page_size: 10 }
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            prices: PriceTable::default(),
            working: WorkingViewConfig::default(),
        }
    }
}

impl PanelConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, OrderError> {
        let config: PanelConfig =
            toml::from_str(contents).map_err(|e| OrderError::Config(e.to_string()))?;
        if config.working.page_size == 0 {
            return Err(OrderError::Config("working.page_size must be > 0".into()));
        }
        Ok(config)
    }
}

static PANEL_CONFIG: Lazy<PanelConfig> =
    Lazy::new(|| PanelConfig::from_toml_str(EMBEDDED_CONFIG).unwrap_or_default());

/// Shared configuration, parsed once
pub fn panel_config() -> &'static PanelConfig {
    &PANEL_CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_loads() {
        let config = PanelConfig::from_toml_str(EMBEDDED_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.working.page_size, 10);
        assert_eq!(config.prices.price_of("Aluguel Médio"), 50.0);
        assert_eq!(config.prices.price_of("Reposição"), 25.0);
    }

    #[test]
    fn test_embedded_matches_defaults() {
        assert_eq!(panel_config(), &PanelConfig::default());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = PanelConfig::from_toml_str("").unwrap();
        assert_eq!(config, PanelConfig::default());
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = PanelConfig::from_toml_str("[working]\npage_size = 0\n").unwrap_err();
        assert!(matches!(err, OrderError::Config(_)));
    }
}
