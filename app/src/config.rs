use directories::ProjectDirs;
use egui::Color32;
use egui_action_menu::{ActionDescriptor, RowOverrides};
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// One `[[actions]]` entry of `actions.toml`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ActionEntry {
    pub name: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// `#rrggbb` or `#rrggbbaa`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
}

impl ActionEntry {
    fn new(name: &str, display_name: &str, icon: &str) -> Self {
        Self {
            name: name.to_string(),
            display_name: display_name.to_string(),
            icon: Some(icon.to_string()),
            text_color: None,
            fill: None,
        }
    }

    fn to_descriptor(&self) -> Result<ActionDescriptor, ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::EmptyName);
        }
        let overrides = RowOverrides {
            text_color: self.parse_color(self.text_color.as_deref())?,
            fill: self.parse_color(self.fill.as_deref())?,
            ..Default::default()
        };
        let mut descriptor =
            ActionDescriptor::new(&self.name, &self.display_name).overrides(overrides);
        descriptor.icon = self.icon.clone();
        Ok(descriptor)
    }

    fn parse_color(&self, value: Option<&str>) -> Result<Option<Color32>, ConfigError> {
        value
            .map(|v| {
                Color32::from_hex(v).map_err(|_| ConfigError::InvalidColor {
                    action: self.name.clone(),
                    value: v.to_string(),
                })
            })
            .transpose()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DemoConfig {
    #[serde(default = "default_actions")]
    pub actions: Vec<ActionEntry>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            actions: default_actions(),
        }
    }
}

fn default_actions() -> Vec<ActionEntry> {
    vec![
        ActionEntry::new("edit", "Edit", "edit"),
        ActionEntry::new("duplicate", "Duplicate", "duplicate"),
        ActionEntry::new("delete", "Delete", "delete"),
    ]
}

impl DemoConfig {
    /// Validate the entries and turn them into menu descriptors, keeping their order.
    pub fn descriptors(&self) -> Result<Vec<ActionDescriptor>, ConfigError> {
        let mut seen = HashSet::new();
        self.actions
            .iter()
            .map(|entry| {
                if !seen.insert(entry.name.as_str()) {
                    return Err(ConfigError::DuplicateAction(entry.name.clone()));
                }
                entry.to_descriptor()
            })
            .collect()
    }
}

fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("io", "egui-action-menu", "demo").ok_or(ConfigError::NoConfigDir)?;
    let config_dir = proj_dirs.config_dir();
    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }
    Ok(config_dir.join("actions.toml"))
}

pub fn load_from(path: &Path) -> Result<DemoConfig, ConfigError> {
    let toml_str = fs::read_to_string(path)?;
    let config: DemoConfig = toml::from_str(&toml_str)?;
    config.descriptors()?;
    Ok(config)
}

pub fn save_to(path: &Path, config: &DemoConfig) -> Result<(), ConfigError> {
    let toml_str = toml::to_string_pretty(config)?;
    fs::write(path, toml_str)?;
    Ok(())
}

pub fn save_config(config: &DemoConfig) {
    match get_config_path().and_then(|path| save_to(&path, config).map(|_| path)) {
        Ok(path) => info!("Action config saved to {}", path.display()),
        Err(e) => error!("Failed to save action config: {}", e),
    }
}

pub fn load_config() -> DemoConfig {
    let path = match get_config_path() {
        Ok(path) => path,
        Err(e) => {
            warn!("No config location, using defaults: {}", e);
            return DemoConfig::default();
        }
    };
    if !path.exists() {
        // First run: write the defaults so they can be edited.
        let config = DemoConfig::default();
        save_config(&config);
        return config;
    }
    match load_from(&path) {
        Ok(config) => {
            info!(
                "Loaded {} actions from {}",
                config.actions.len(),
                path.display()
            );
            config
        }
        Err(e) => {
            warn!("Failed to load config file, using defaults: {}", e);
            DemoConfig::default()
        }
    }
}
