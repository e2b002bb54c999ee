//! Config command handler.
//!
//! Shows the effective configuration, or writes a commented default file.

use crate::config::{config_path, generate_config_with_comments, init_config_at, Config};
use crate::error::Result;
use crate::output::{print_info, BOLD, CYAN, GRAY, RESET};

/// Display the effective configuration, or create the file with `init`.
pub fn config_command(config: &Config, init: bool) -> Result<()> {
    let path = config_path()?;

    if init {
        if init_config_at(&path)? {
            print_info(&format!("Created {}", path.display()));
        } else {
            print_info(&format!("{} already exists, left unchanged", path.display()));
        }
        return Ok(());
    }

    println!("{BOLD}Config file:{RESET} {CYAN}{}{RESET}", path.display());
    if !path.exists() {
        println!("{GRAY}(file not found, showing defaults){RESET}");
    }
    println!();
    print!("{}", generate_config_with_comments(config)?);
    Ok(())
}
