use crate::core::{config::IgittConfig, error::Result};
use colored::*;

/// Print where the config file lives, creating it with defaults if needed
pub fn execute_config() -> Result<()> {
    let config_path = IgittConfig::config_path()?;
    let config = IgittConfig::load_or_create_at(&config_path)?;
    log::debug!("Loaded config: {config:?}");

    println!(
        "\nTo edit the configuration, {} in your text editor:\n",
        "open the following file".yellow()
    );
    println!("{}\n", config_path.display());
    println!(
        "{} {}",
        "iconType:".bright_black(),
        config.icon_type.to_string().white()
    );
    println!(
        "{} {}",
        "showAllCommands:".bright_black(),
        config.show_all_commands.to_string().white()
    );
    Ok(())
}
