use crate::core::error::PlaygroundError;
use std::path::PathBuf;

const APP_DIR: &str = "git-playground";

fn home_dir() -> Result<PathBuf, PlaygroundError> {
    dirs::home_dir().ok_or(PlaygroundError::ConfigDirectoryNotFound)
}

pub fn get_config_directory() -> Result<PathBuf, PlaygroundError> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => match std::env::var("XDG_CONFIG_HOME") {
            Ok(path) => PathBuf::from(path),
            Err(_) => home_dir()?.join(".config"),
        },
        "macos" => home_dir()?.join("Library/Application Support"),
        _ => dirs::config_dir().ok_or(PlaygroundError::ConfigDirectoryNotFound)?,
    };

    Ok(base.join(APP_DIR))
}

pub fn get_data_directory() -> Result<PathBuf, PlaygroundError> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => match std::env::var("XDG_DATA_HOME") {
            Ok(path) => PathBuf::from(path),
            Err(_) => home_dir()?.join(".local/share"),
        },
        "macos" => home_dir()?.join("Library/Application Support"),
        _ => dirs::data_dir().ok_or(PlaygroundError::ConfigDirectoryNotFound)?,
    };

    Ok(base.join(APP_DIR))
}
