use crate::core::{error::Result, print_success};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[cfg(windows)]
const ALIAS_FILE_NAME: &str = "igt.cmd";
#[cfg(not(windows))]
const ALIAS_FILE_NAME: &str = "igt";

/// Write an `igt` launcher next to the running executable
pub fn execute_mkalias() -> Result<()> {
    let executable = env::current_exe()?;
    let target_dir = executable.parent().unwrap_or_else(|| Path::new("."));
    let alias_path = write_alias_script(&executable, target_dir)?;

    print_success(&format!(
        "Alias script created successfully at {}",
        alias_path.display()
    ));
    Ok(())
}

pub fn write_alias_script(executable: &Path, target_dir: &Path) -> Result<PathBuf> {
    let alias_path = target_dir.join(ALIAS_FILE_NAME);
    log::info!("Creating alias script at {}", alias_path.display());

    fs::write(&alias_path, alias_script(executable))?;
    make_executable(&alias_path)?;

    Ok(alias_path)
}

#[cfg(not(windows))]
fn alias_script(executable: &Path) -> String {
    format!("#!/bin/sh\nexec \"{}\" \"$@\"\n", executable.display())
}

#[cfg(windows)]
fn alias_script(executable: &Path) -> String {
    format!(
        "@ECHO OFF\r\nif exist \"{exe}\" (\r\n\t\"{exe}\" %*\r\n) else (\r\n\techo igitt was not found at \"{exe}\".\r\n\techo Run 'igitt mkalias' again, or remove this script with: del %~dpnx0\r\n)\r\n",
        exe = executable.display()
    )
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))?;
    Ok(())
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}
