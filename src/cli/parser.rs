use crate::ui::OutputFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for roomgantt
/// CLI application to lay out hotel bookings on a month-wide grid
#[derive(Parser)]
#[command(
    name = "roomgantt",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple booking timeline CLI: position hotel reservations on a month-wide Gantt grid",
    long_about = None
)]
pub struct Cli {
    /// Override config file path (useful for tests or custom setups)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Run in test mode (no config file writes)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init,

    /// Manage the configuration file (view or check)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        /// Validate the configuration values
        #[arg(long = "check", help = "Check configuration values for problems")]
        check: bool,
    },

    /// Render the booking timeline for one month
    Layout {
        /// Saved booking-API response to read (JSON)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Month to display.
        ///
        /// Format: YYYY-MM (e.g. "2024-01").
        ///
        /// Examples:
        ///   roomgantt layout --file response.json --month 2024-01
        ///   roomgantt layout --file response.json --month 2024-01 --bars
        ///
        /// If omitted, the default is the *current month*.
        #[arg(long, short, help = "Month to display (YYYY-MM), default: current month")]
        month: Option<String>,

        /// Filter by hotel id (default: default_hotel from the config)
        #[arg(long, help = "Only bookings of this hotel id")]
        hotel: Option<i64>,

        /// Filter by room (name or code, e.g. "101" or "ROOM-101")
        #[arg(long, help = "Only bookings occupying this room")]
        room: Option<String>,

        /// Filter by booking status (e.g. confirmed, checkin, cancelled)
        #[arg(long, help = "Only bookings in this status")]
        status: Option<String>,

        /// Draw a per-day timeline column next to the numeric layout
        #[arg(long, help = "Draw a textual bar per booking")]
        bars: bool,

        /// Output format: table, json
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Validate every booking in a saved response
    Check {
        /// Saved booking-API response to validate (JSON)
        #[arg(long, value_name = "FILE")]
        file: String,
    },
}
