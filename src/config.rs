//! Page-level settings.
//!
//! Defaults suit every page; a page can override any of them with an inline
//! `<script type="application/json" id="site-config">` block.

use serde::Deserialize;
use web_sys::{Document, ScrollBehavior};

use crate::model::CONFIG_SCRIPT_ID;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScrollMode {
    #[default]
    Smooth,
    Instant,
    Auto,
}

impl ScrollMode {
    pub fn behavior(self) -> ScrollBehavior {
        match self {
            ScrollMode::Smooth => ScrollBehavior::Smooth,
            ScrollMode::Instant => ScrollBehavior::Instant,
            ScrollMode::Auto => ScrollBehavior::Auto,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub log_level: LogLevel,
    /// How long a reservation confirmation stays visible.
    pub confirmation_hide_ms: u64,
    /// Map image size relative to its viewport.
    pub map_content_scale: f64,
    /// Map offset used when the image has no inline position yet.
    pub map_default_offset_percent: f64,
    pub scroll_behavior: ScrollMode,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            confirmation_hide_ms: 5000,
            map_content_scale: 1.5,
            map_default_offset_percent: -25.0,
            scroll_behavior: ScrollMode::Smooth,
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Reads the page's config block, falling back to defaults when it is absent or invalid.
    pub fn load(document: &Document) -> Self {
        let Some(raw) = document
            .get_element_by_id(CONFIG_SCRIPT_ID)
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("ignoring invalid #{}: {}", CONFIG_SCRIPT_ID, e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_layout() {
        let cfg = SiteConfig::default();
        assert_eq!(cfg.confirmation_hide_ms, 5000);
        assert_eq!(cfg.map_content_scale, 1.5);
        assert_eq!(cfg.map_default_offset_percent, -25.0);
        assert_eq!(cfg.log_level, LogLevel::Info);
        assert_eq!(cfg.scroll_behavior, ScrollMode::Smooth);
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let cfg = SiteConfig::from_json(r#"{"confirmation_hide_ms": 2500, "log_level": "debug"}"#)
            .unwrap();
        assert_eq!(cfg.confirmation_hide_ms, 2500);
        assert_eq!(cfg.log_level, LogLevel::Debug);
        assert_eq!(cfg.map_content_scale, 1.5);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let cfg = SiteConfig::from_json(r#"{"theme": "dark", "scroll_behavior": "instant"}"#).unwrap();
        assert_eq!(cfg.scroll_behavior, ScrollMode::Instant);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(SiteConfig::from_json("{ not json").is_err());
        assert!(SiteConfig::from_json(r#"{"log_level": "loud"}"#).is_err());
    }

    #[test]
    fn log_level_maps_to_filter() {
        assert_eq!(LogLevel::Off.to_level_filter(), log::LevelFilter::Off);
        assert_eq!(LogLevel::Warn.to_level_filter(), log::LevelFilter::Warn);
    }
}
