use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::models::month::MonthFrame;
use crate::models::sheet::{MonthSheet, SheetBar};
use crate::models::status::BookingStatus;
use crate::source::{BookingQuery, BookingSource, FileSource};
use crate::ui::{OutputFormat, messages, status_colour};
use crate::utils::colors;
use crate::utils::date;
use crate::utils::path::expand_tilde;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Layout {
        file,
        month,
        hotel,
        room,
        status,
        bars,
        format,
    } = cmd
    {
        let frame = resolve_frame(month)?;

        let mut query = BookingQuery::new(frame);
        query.hotel_id = hotel.or(cfg.default_hotel);
        query.room = room.clone();
        query.status = parse_status_filter(status)?;

        let source = FileSource::new(expand_tilde(file));
        let bookings = source.fetch_bookings(&query)?;
        let sheet = Core::build_month_sheet(&bookings, &frame)?;

        match format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&sheet)?);
            }
            OutputFormat::Table => print_sheet(&sheet, *bars),
        }
    }
    Ok(())
}

fn resolve_frame(month: &Option<String>) -> AppResult<MonthFrame> {
    if let Some(m) = month {
        let (year, mon) = date::parse_month(m)?;
        MonthFrame::new(year, mon)
    } else {
        MonthFrame::for_date(date::today())
    }
}

fn parse_status_filter(status: &Option<String>) -> AppResult<Option<BookingStatus>> {
    match status {
        Some(s) => BookingStatus::from_api_str(s)
            .map(Some)
            .ok_or_else(|| AppError::InvalidStatus(s.clone())),
        None => Ok(None),
    }
}

fn print_sheet(sheet: &MonthSheet, bars: bool) {
    messages::header(format!(
        "Bookings {} ({} days)",
        sheet.frame.label(),
        sheet.frame.total_days
    ));

    if sheet.rows.is_empty() {
        messages::info("No bookings for this month");
        return;
    }

    let mut columns = vec![
        Column::new("ROOM", 12),
        Column::new("SEQUENCE", 14),
        Column::new("GUEST", 20),
        Column::new("STATUS", 16),
        Column::new("DAYS", 6),
        Column::new("LEFT%", 7),
        Column::new("WIDTH%", 7),
        Column::new("STAY", 6),
    ];
    if bars {
        columns.push(Column::new("TIMELINE", sheet.frame.total_days as usize));
    }

    let mut table = Table::new(columns);

    for row in &sheet.rows {
        for bar in &row.bars {
            let mut cells = vec![
                row.room.clone(),
                bar.sequence.clone(),
                bar.partner_name.clone(),
                bar.status.as_str().to_string(),
                format!("{}-{}", bar.layout.start_day, bar.layout.end_day),
                format!("{:.2}", bar.layout.left),
                format!("{:.2}", bar.layout.width),
                bar.duration_label.clone(),
            ];
            if bars {
                cells.push(render_bar_cell(bar, sheet.frame.total_days));
            }
            table.add_row(cells);
        }
    }

    print!("{}", table.render());

    println!(
        "\n{} booking bar(s) in {} room(s)",
        sheet.bar_count(),
        sheet.room_count()
    );

    let clipped = sheet
        .rows
        .iter()
        .flat_map(|r| &r.bars)
        .filter(|b| b.clipped)
        .count();
    if clipped > 0 {
        messages::info(format!(
            "{} bar(s) continue outside {}",
            clipped,
            sheet.frame.label()
        ));
    }
}

/// One glyph per day: empty days dotted, occupied days solid in the
/// status color, half-day edges hatched (yellow late check-in, cyan
/// early check-out).
fn render_bar_cell(bar: &SheetBar, total_days: u32) -> String {
    let colour = status_colour(bar.status);
    let mut out = String::new();

    for day in 1..=total_days {
        if day < bar.layout.start_day || day > bar.layout.end_day {
            out.push('░');
            continue;
        }

        let edge = colors::color_for_half_day(
            day == bar.layout.start_day && bar.half_day_checkin,
            day == bar.layout.end_day && bar.half_day_checkout,
        );
        if edge != colors::RESET {
            out.push_str(edge);
            out.push('▓');
            out.push_str(colors::RESET);
        } else {
            out.push_str(&colour.paint("█").to_string());
        }
    }

    out
}
