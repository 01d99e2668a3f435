use crate::cli::parser::Commands;
use crate::errors::{AppError, AppResult};
use crate::source::FileSource;
use crate::ui::{messages, status_colour};
use crate::utils::colors::colorize_placeholder;
use crate::utils::path::expand_tilde;
use crate::utils::time::format_clock;

/// Handle the `check` command: parse a saved response and report every
/// booking, valid or not. Any invalid booking fails the command.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Check { file } = cmd {
        let source = FileSource::new(expand_tilde(file));
        let results = source.load_bookings()?;

        if results.is_empty() {
            messages::warning("No bookings in file");
            return Ok(());
        }

        let mut invalid = 0usize;

        for result in &results {
            match result {
                Ok(b) => {
                    let (in_h, in_m) = b.stay.resolved_check_in();
                    let (out_h, out_m) = b.stay.resolved_check_out();
                    let rooms = if b.rooms.is_empty() {
                        "-".to_string()
                    } else {
                        b.rooms
                            .iter()
                            .map(|r| r.label())
                            .collect::<Vec<_>>()
                            .join(", ")
                    };

                    println!(
                        "✅ {} | {} | {} {} → {} {} | rooms: {}",
                        b.sequence,
                        status_colour(b.status).paint(b.status.as_str()),
                        b.stay.start.date(),
                        format_clock(in_h, in_m),
                        b.stay.end.date(),
                        format_clock(out_h, out_m),
                        colorize_placeholder(&rooms),
                    );
                }
                Err(e) => {
                    invalid += 1;
                    messages::error(e);
                }
            }
        }

        if invalid > 0 {
            return Err(AppError::Source(format!(
                "{} invalid booking(s) out of {}",
                invalid,
                results.len()
            )));
        }

        messages::success(format!("{} booking(s) OK", results.len()));
    }
    Ok(())
}
