//! Runtime-tunable subset of the layout constants.

use crate::{APP_HEIGHT, APP_WIDTH, COLOR_APP_BG, GAME_OVER, GAME_TITLE, MODAL_HEIGHT, MODAL_WIDTH};

/// Screen controller configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenConfig {
    /// Surface width in cells
    pub width: u16,
    /// Surface height in cells
    pub height: u16,
    /// Modal width used when the caller does not pass one
    pub modal_width: u16,
    /// Modal height used when the caller does not pass one
    pub modal_height: u16,
    /// Background fill (0xRRGGBB)
    pub background: u32,
    pub title: String,
    pub game_over: String,
    /// Journal output path (JSONL), disabled when `None`
    pub log_path: Option<String>,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: APP_WIDTH,
            height: APP_HEIGHT,
            modal_width: MODAL_WIDTH,
            modal_height: MODAL_HEIGHT,
            background: COLOR_APP_BG,
            title: GAME_TITLE.to_string(),
            game_over: GAME_OVER.to_string(),
            log_path: None,
        }
    }
}

impl ScreenConfig {
    /// Load configuration from `TUI_DELVE_*` environment variables.
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let dim = |key: &str, fallback: u16| {
            lookup(key)
                .and_then(|s| s.trim().parse::<u16>().ok())
                .filter(|v| *v > 0)
                .unwrap_or(fallback)
        };

        let width = dim("TUI_DELVE_WIDTH", defaults.width);
        let height = dim("TUI_DELVE_HEIGHT", defaults.height);

        // A modal never outgrows the surface.
        let modal_width = dim("TUI_DELVE_MODAL_WIDTH", defaults.modal_width).min(width);
        let modal_height = dim("TUI_DELVE_MODAL_HEIGHT", defaults.modal_height).min(height);

        let title = lookup("TUI_DELVE_TITLE")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.title);

        let log_path = lookup("TUI_DELVE_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            width,
            height,
            modal_width,
            modal_height,
            background: defaults.background,
            title,
            game_over: defaults.game_over,
            log_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_lookup_gives_defaults() {
        assert_eq!(ScreenConfig::from_lookup(|_| None), ScreenConfig::default());
    }

    #[test]
    fn overrides_are_applied() {
        let config = ScreenConfig::from_lookup(lookup_from(&[
            ("TUI_DELVE_WIDTH", "100"),
            ("TUI_DELVE_HEIGHT", "40"),
            ("TUI_DELVE_MODAL_WIDTH", "20"),
            ("TUI_DELVE_TITLE", "  CAVES  "),
            ("TUI_DELVE_LOG_PATH", "/tmp/delve.jsonl"),
        ]));

        assert_eq!(config.width, 100);
        assert_eq!(config.height, 40);
        assert_eq!(config.modal_width, 20);
        assert_eq!(config.modal_height, MODAL_HEIGHT);
        assert_eq!(config.title, "CAVES");
        assert_eq!(config.log_path.as_deref(), Some("/tmp/delve.jsonl"));
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = ScreenConfig::from_lookup(lookup_from(&[
            ("TUI_DELVE_WIDTH", "wide"),
            ("TUI_DELVE_HEIGHT", "0"),
            ("TUI_DELVE_TITLE", "   "),
            ("TUI_DELVE_LOG_PATH", ""),
        ]));

        assert_eq!(config.width, APP_WIDTH);
        assert_eq!(config.height, APP_HEIGHT);
        assert_eq!(config.title, GAME_TITLE);
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn modal_is_clamped_to_surface() {
        let config = ScreenConfig::from_lookup(lookup_from(&[
            ("TUI_DELVE_WIDTH", "30"),
            ("TUI_DELVE_MODAL_WIDTH", "60"),
        ]));
        assert_eq!(config.modal_width, 30);
    }
}
