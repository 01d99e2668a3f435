use crate::config::Config;
use crate::errors::{AppError, AppResult};

use crate::cli::parser::Commands;
use crate::ui::messages;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            let yaml = serde_yaml::to_string(cfg).map_err(|_| AppError::ConfigSave)?;
            println!("{}", yaml);
        }

        // ---- CHECK CONFIG ----
        if *check {
            let issues = cfg.check();

            if issues.is_empty() {
                messages::success("Configuration OK");
            } else {
                for issue in &issues {
                    messages::error(issue);
                }
                return Err(AppError::Config(format!(
                    "{} problem(s) found",
                    issues.len()
                )));
            }
        }
    }

    Ok(())
}
