use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;

pub const DB_FILENAME: &str = "snippets.json";

/// Get the snipnote configuration directory
pub fn get_config_dir() -> PathBuf {
    env::var("HOME")
        .map(|home| PathBuf::from(home).join(".snipnote"))
        .unwrap_or_else(|_| PathBuf::from(".snipnote"))
}

/// Ensure the configuration directory and database file exist
pub fn ensure_config_dir() -> Result<PathBuf> {
    let config_dir = get_config_dir();
    if !config_dir.exists() {
        fs::create_dir_all(&config_dir)?;
    }

    let db_path = get_db_file_path();
    if !db_path.exists() {
        create_empty_file(&db_path, "database file")?;
    }

    Ok(config_dir)
}

/// Create an empty config file at the specified path
fn create_empty_file(path: &Path, description: &str) -> Result<()> {
    debug!("Creating {} at: {}", description, path.display());
    fs::write(path, "")?;
    Ok(())
}

/// Get the path to the database file
pub fn get_db_file_path() -> PathBuf {
    get_config_dir().join(DB_FILENAME)
}

/// Check if the database file exists
pub fn db_file_exists() -> bool {
    get_db_file_path().exists()
}
