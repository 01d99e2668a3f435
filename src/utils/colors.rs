/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Returns the value dimmed when it is a placeholder
/// (empty, "-" or "(unassigned)"), unchanged otherwise.
pub fn colorize_placeholder(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "-" || v == "(unassigned)" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Half-day stays get a marker color: check-in from noon on is yellow,
/// check-out before noon is cyan, full-day edges stay uncolored.
pub fn color_for_half_day(half_checkin: bool, half_checkout: bool) -> &'static str {
    if half_checkin {
        YELLOW
    } else if half_checkout {
        CYAN
    } else {
        RESET
    }
}
