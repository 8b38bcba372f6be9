//! Database connection settings read from `.properties` resources.

use std::path::Path;

use crate::{Error, Properties, Result};

/// SQL connection settings (`sql.jdbc.*` keys).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlSettings {
    /// Connection URL, `sql.jdbc.url`.
    pub url: String,
    /// User name, `sql.jdbc.userName`.
    pub user_name: String,
    /// Password, `sql.jdbc.password`; empty when absent.
    pub password: String,
}

/// MongoDB connection settings (`mongo.*` keys).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MongoSettings {
    /// Server host, `mongo.host`.
    pub host: String,
    /// Server port, `mongo.port`.
    pub port: u16,
}

/// Connection settings found in one properties resource.
///
/// Each section is present only when its leading key (`sql.jdbc.url` or
/// `mongo.host`) is defined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatabaseSettings {
    /// SQL settings.
    pub sql: Option<SqlSettings>,
    /// MongoDB settings.
    pub mongo: Option<MongoSettings>,
}

impl DatabaseSettings {
    /// Load the settings from a properties file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or a section is incomplete.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_properties(&Properties::load(path)?)
    }

    /// Extract the settings from loaded properties.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a section is incomplete or the Mongo
    /// port is not a number.
    pub fn from_properties(properties: &Properties) -> Result<Self> {
        let sql = match properties.get("sql.jdbc.url").filter(|url| !url.is_empty()) {
            Some(url) => Some(SqlSettings {
                url: url.to_string(),
                user_name: properties.require("sql.jdbc.userName")?.to_string(),
                password: properties
                    .get("sql.jdbc.password")
                    .unwrap_or_default()
                    .to_string(),
            }),
            None => None,
        };

        let mongo = match properties.get("mongo.host").filter(|host| !host.is_empty()) {
            Some(host) => {
                let Some(port) = properties.get_parsed::<u16>("mongo.port")? else {
                    return Err(Error::configuration("'mongo.port' is required with 'mongo.host'"));
                };
                Some(MongoSettings {
                    host: host.to_string(),
                    port,
                })
            }
            None => None,
        };

        Ok(Self { sql, mongo })
    }
}
