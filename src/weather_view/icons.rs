use std::collections::HashMap;
use std::fs;
use serde::Deserialize;
use crate::errors::ConfigError;
use crate::weather_view::converters::condition_from_icon_url;
use crate::weather_view::errors::AssembleError;

const EMBEDDED_TABLE: &str = include_str!("../../assets/icons.toml");

/// Url path icon assets are served from
pub const ICON_PATH_PREFIX: &str = "/static/png/";

#[derive(Deserialize, Debug, Clone)]
pub struct IconEntry {
    pub day: String,
    pub night: Option<String>,
}

/// Lookup from NWS condition codes to icon asset names
///
#[derive(Debug, Clone)]
pub struct IconTable {
    entries: HashMap<String, IconEntry>,
}

impl IconTable {
    /// Parses a table from toml where every condition code is a table with a `day` and an
    /// optional `night` asset name
    ///
    /// # Arguments
    ///
    /// * 'toml' - the table document
    pub fn from_toml(toml: &str) -> Result<IconTable, ConfigError> {
        let entries: HashMap<String, IconEntry> = toml::from_str(toml)?;
        if entries.is_empty() {
            return Err(ConfigError::from("icon table is empty"));
        }

        Ok(IconTable { entries })
    }

    /// Loads the icon table, either from the given file or the table compiled into the binary
    ///
    /// # Arguments
    ///
    /// * 'path' - optional path to a toml file replacing the built-in table
    pub fn load(path: Option<&str>) -> Result<IconTable, ConfigError> {
        match path {
            Some(p) => IconTable::from_toml(&fs::read_to_string(p)?),
            None => IconTable::from_toml(EMBEDDED_TABLE),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the url path of the icon for the given condition.
    /// Night periods use the night asset when the condition has one.
    ///
    /// # Arguments
    ///
    /// * 'condition' - NWS condition code, e.g. "skc"
    /// * 'is_daytime' - whether the period is a day period
    pub fn asset_path(&self, condition: &str, is_daytime: bool) -> Result<String, AssembleError> {
        let entry = self.entries
            .get(condition)
            .ok_or_else(|| AssembleError::UnknownCondition(condition.to_string()))?;

        let asset = match (&entry.night, is_daytime) {
            (Some(night), false) => night,
            _ => &entry.day,
        };

        Ok(format!("{}{}.png", ICON_PATH_PREFIX, asset))
    }

    /// Same as `asset_path` but takes the icon url of a forecast period
    ///
    /// # Arguments
    ///
    /// * 'icon_url' - icon url as given by the NWS API
    /// * 'is_daytime' - whether the period is a day period
    pub fn icon_src(&self, icon_url: &str, is_daytime: bool) -> Result<String, AssembleError> {
        self.asset_path(condition_from_icon_url(icon_url), is_daytime)
    }
}
