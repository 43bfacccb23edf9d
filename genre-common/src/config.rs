//! Configuration loading and data folder resolution

use std::path::{Path, PathBuf};

/// Database file name inside the data folder
pub const DATABASE_FILE: &str = "genres.db";

/// Resolve the data folder following priority order:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable
/// 3. OS-dependent compiled default (fallback)
pub fn resolve_data_folder(cli_arg: Option<&Path>, env_var_name: &str) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(env_var_name) {
        return PathBuf::from(path);
    }

    // Priority 3: OS-dependent compiled default
    default_data_folder()
}

/// Get OS-dependent default data folder path
fn default_data_folder() -> PathBuf {
    if cfg!(target_os = "linux") {
        // ~/.local/share/genre-catalog
        dirs::data_local_dir()
            .map(|d| d.join("genre-catalog"))
            .unwrap_or_else(|| PathBuf::from("/var/lib/genre-catalog"))
    } else if cfg!(target_os = "macos") {
        // ~/Library/Application Support/genre-catalog
        dirs::data_dir()
            .map(|d| d.join("genre-catalog"))
            .unwrap_or_else(|| PathBuf::from("/Library/Application Support/genre-catalog"))
    } else if cfg!(target_os = "windows") {
        // %LOCALAPPDATA%\genre-catalog
        dirs::data_local_dir()
            .map(|d| d.join("genre-catalog"))
            .unwrap_or_else(|| PathBuf::from("C:\\ProgramData\\genre-catalog"))
    } else {
        PathBuf::from("./genre_catalog_data")
    }
}

/// Path of the SQLite database file inside a data folder
pub fn database_path(data_folder: &Path) -> PathBuf {
    data_folder.join(DATABASE_FILE)
}
