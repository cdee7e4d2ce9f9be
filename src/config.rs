//! Page-supplied tuning for the mobile enhancements.
//!
//! The server may embed `<script type="application/json" id="mobile-config">`
//! with any subset of the fields below; the rest keep their defaults.

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use web_sys::{Document, Window};

use crate::error::Result;
use crate::gesture::DEFAULT_COMMIT_THRESHOLD_PX;

pub const CONFIG_ELEMENT_ID: &str = "mobile-config";
pub const LOG_LEVEL_STORAGE_KEY: &str = "nt_mobile_log_level";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MobileConfig {
    /// Shared by swipe rows and pull-to-refresh.
    pub commit_threshold_px: f64,
    pub mobile_breakpoint_px: f64,
    pub delete_exit_ms: u32,
    pub refresh_delay_ms: u32,
    pub row_selector: String,
    pub delete_prompt: String,
    pub log_level: String,
}

impl Default for MobileConfig {
    fn default() -> Self {
        Self {
            commit_threshold_px: DEFAULT_COMMIT_THRESHOLD_PX,
            mobile_breakpoint_px: 768.0,
            delete_exit_ms: 300,
            refresh_delay_ms: 1000,
            row_selector: ".meal-entry".to_string(),
            delete_prompt: "Delete this food item?".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl MobileConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        let mut cfg: MobileConfig = serde_json::from_str(raw)?;
        if !(cfg.commit_threshold_px.is_finite() && cfg.commit_threshold_px > 0.0) {
            log::warn!(
                "ignoring commit_threshold_px={}, using {}",
                cfg.commit_threshold_px,
                DEFAULT_COMMIT_THRESHOLD_PX
            );
            cfg.commit_threshold_px = DEFAULT_COMMIT_THRESHOLD_PX;
        }
        Ok(cfg)
    }

    /// Embedded page config, falling back to defaults when absent or invalid.
    pub fn load(window: &Window, document: &Document) -> Self {
        let mut cfg = match document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw).unwrap_or_else(|err| {
                log::warn!("{err}; using defaults");
                Self::default()
            }),
            _ => Self::default(),
        };
        if let Ok(Some(store)) = window.local_storage() {
            if let Ok(Some(level)) = store.get_item(LOG_LEVEL_STORAGE_KEY) {
                cfg.log_level = level;
            }
        }
        cfg
    }

    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(self.log_level.trim()).unwrap_or(LevelFilter::Info)
    }
}
