use crate::core::error::IgittError;
use std::path::PathBuf;

const APP_DIR: &str = "igitt";

pub fn get_config_directory() -> Result<PathBuf, IgittError> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|_| {
                dirs::home_dir()
                    .map(|home| home.join(".config"))
                    .ok_or(IgittError::ConfigDirectoryNotFound)
            })?,
        "macos" => dirs::home_dir()
            .ok_or(IgittError::ConfigDirectoryNotFound)?
            .join("Library/Application Support"),
        _ => dirs::config_dir().ok_or(IgittError::ConfigDirectoryNotFound)?,
    };

    Ok(base.join(APP_DIR))
}
