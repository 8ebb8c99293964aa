//! Configuration loading for vcm
//!
//! All configuration comes from the process environment, read once at
//! startup. A missing credential is fatal before any command runs.

use crate::{Error, Result};
use std::path::PathBuf;

/// Production Discogs API endpoint
pub const DISCOGS_API_BASE_URL: &str = "https://api.discogs.com";

const TOKEN_VAR: &str = "DISCOGS_PERSONAL_ACCESS_TOKEN";
const USER_VAR: &str = "DISCOGS_USER";
const FOLDER_VAR: &str = "DISCOGS_FOLDER_ID";
const DB_PATH_VAR: &str = "VCM_DB_PATH";
const DEFAULT_DB_PATH: &str = "vcm.db";

/// Process-wide configuration resolved from the environment
#[derive(Debug, Clone)]
pub struct Config {
    /// Discogs personal access token
    pub access_token: String,
    /// Discogs username owning the collection
    pub user: String,
    /// Collection folder to sync
    pub folder_id: String,
    /// SQLite database location
    pub database_path: PathBuf,
    /// API endpoint, overridable for tests
    pub api_base_url: String,
}

impl Config {
    /// Load configuration from the environment
    ///
    /// Fails with [`Error::Config`] if any required credential is
    /// absent or blank, before any command dispatch happens.
    pub fn from_env() -> Result<Self> {
        let access_token = require(
            TOKEN_VAR,
            "Missing Discogs access token. See https://www.discogs.com/settings/developers",
        )?;
        let user = require(USER_VAR, "Missing Discogs user")?;
        let folder_id = require(FOLDER_VAR, "Missing folder ID")?;

        let database_path = std::env::var(DB_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DB_PATH));

        Ok(Self {
            access_token,
            user,
            folder_id,
            database_path,
            api_base_url: DISCOGS_API_BASE_URL.to_string(),
        })
    }

    /// Deterministic user agent sent on every Discogs request
    pub fn user_agent(&self) -> String {
        format!("{}_{}_vcm", self.user, self.folder_id)
    }

    /// Authorization header value for the Discogs API
    pub fn authorization(&self) -> String {
        format!("Discogs token={}", self.access_token)
    }
}

fn require(var: &str, message: &str) -> Result<String> {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::Config(message.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn set_credentials() {
        std::env::set_var(TOKEN_VAR, "token-123");
        std::env::set_var(USER_VAR, "dai");
        std::env::set_var(FOLDER_VAR, "0");
    }

    fn clear_all() {
        std::env::remove_var(TOKEN_VAR);
        std::env::remove_var(USER_VAR);
        std::env::remove_var(FOLDER_VAR);
        std::env::remove_var(DB_PATH_VAR);
    }

    #[test]
    #[serial]
    fn test_from_env_with_all_credentials() {
        set_credentials();

        let config = Config::from_env().expect("config should load");
        assert_eq!(config.access_token, "token-123");
        assert_eq!(config.user, "dai");
        assert_eq!(config.folder_id, "0");
        assert_eq!(config.database_path, PathBuf::from(DEFAULT_DB_PATH));
        assert_eq!(config.api_base_url, DISCOGS_API_BASE_URL);

        clear_all();
    }

    #[test]
    #[serial]
    fn test_from_env_missing_token_is_fatal() {
        set_credentials();
        std::env::remove_var(TOKEN_VAR);

        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        clear_all();
    }

    #[test]
    #[serial]
    fn test_from_env_blank_user_is_fatal() {
        set_credentials();
        std::env::set_var(USER_VAR, "   ");

        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        clear_all();
    }

    #[test]
    #[serial]
    fn test_database_path_override() {
        set_credentials();
        std::env::set_var(DB_PATH_VAR, "/tmp/collection.db");

        let config = Config::from_env().expect("config should load");
        assert_eq!(config.database_path, PathBuf::from("/tmp/collection.db"));

        clear_all();
    }

    #[test]
    #[serial]
    fn test_derived_headers() {
        set_credentials();

        let config = Config::from_env().expect("config should load");
        assert_eq!(config.user_agent(), "dai_0_vcm");
        assert_eq!(config.authorization(), "Discogs token=token-123");

        clear_all();
    }
}
