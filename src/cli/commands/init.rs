use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::path::expand_tilde;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file with default values
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing roomgantt…");

    let custom = cli.config.as_ref().map(|p| expand_tilde(p));
    let path = Config::init_all(custom, cli.test)?;

    println!("📄 Config file : {}", path.display());

    if cli.test {
        messages::warning("Test mode: nothing was written");
    } else {
        messages::success("roomgantt initialization completed!");
    }

    Ok(())
}
