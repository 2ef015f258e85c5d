use crate::model::{CalendarGrid, WEEKS_IN_WINDOW, WINDOW_DAYS};
use crate::util::{alignment_offset, start_of_day};
use chrono::{DateTime, Datelike, Duration, Utc};
use console::Style;

/// Visual weight of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intensity {
    Empty,
    Low,
    Medium,
    High,
    Today,
}

pub fn intensity_for(count: u32) -> Intensity {
    match count {
        0 => Intensity::Empty,
        1..=4 => Intensity::Low,
        5..=9 => Intensity::Medium,
        _ => Intensity::High,
    }
}

/// How cells are painted. The plain theme leaves text untouched so piped
/// output and tests carry no escape sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Ansi,
    Plain,
}

impl Theme {
    pub fn paint(&self, intensity: Intensity, text: &str) -> String {
        match self {
            Theme::Plain => text.to_string(),
            Theme::Ansi => {
                let style = match intensity {
                    Intensity::Empty => Style::new().dim(),
                    Intensity::Low => Style::new().black().on_white(),
                    Intensity::Medium => Style::new().black().on_yellow(),
                    Intensity::High => Style::new().black().on_green(),
                    Intensity::Today => Style::new().white().on_magenta().bold(),
                };
                style.apply_to(text).to_string()
            }
        }
    }
}

/// The today cell keeps its highlight whatever its count is; every other
/// cell is banded by count alone.
pub fn cell_intensity(week: usize, row: usize, count: u32, offset: usize) -> Intensity {
    if week == 0 && row + 1 == offset {
        Intensity::Today
    } else {
        intensity_for(count)
    }
}

/// Render the whole graph: one month-header line followed by the seven
/// weekday rows, oldest week on the left.
pub fn render_lines(grid: &CalendarGrid, now: DateTime<Utc>, theme: Theme) -> Vec<String> {
    let offset = alignment_offset(now);
    let mut lines = Vec::with_capacity(8);
    lines.push(month_header(now));

    for row in 0..7 {
        let width = row_width(grid, row);
        let mut line = String::from(day_label(row));
        for week in (0..WEEKS_IN_WINDOW).rev() {
            let count = cell_count(grid, week, row);
            let text = cell_text(count, width);
            line.push_str(&theme.paint(cell_intensity(week, row, count, offset), &text));
        }
        lines.push(line);
    }

    lines
}

fn cell_count(grid: &CalendarGrid, week: usize, row: usize) -> u32 {
    grid.column(week)
        .and_then(|col| col.get(row))
        .copied()
        .unwrap_or(0)
}

fn cell_text(count: u32, width: usize) -> String {
    if count == 0 {
        format!(" {:>width$} ", "-")
    } else {
        format!(" {count:>width$} ")
    }
}

/// The widest count in a row decides that row's cell width, keeping the
/// row aligned once counts reach two or three digits.
fn row_width(grid: &CalendarGrid, row: usize) -> usize {
    (0..WEEKS_IN_WINDOW)
        .map(|week| digits(cell_count(grid, week, row)))
        .max()
        .unwrap_or(1)
}

fn digits(n: u32) -> usize {
    if n == 0 {
        1
    } else {
        n.ilog10() as usize + 1
    }
}

fn day_label(row: usize) -> &'static str {
    match row {
        1 => " Mon ",
        3 => " Wed ",
        5 => " Fri ",
        _ => "     ",
    }
}

/// Walk the window in 7-day steps and label the first step that enters a
/// new month; the other steps get blanks of the same width.
fn month_header(now: DateTime<Utc>) -> String {
    let mut line = String::from("     ");
    let mut week = start_of_day(now) - Duration::days(WINDOW_DAYS);
    let mut month = week.month();
    while week <= now {
        if week.month() != month {
            let name = week.format("%b").to_string();
            line.push_str(&format!("{name:<4}"));
            month = week.month();
        } else {
            line.push_str("    ");
        }
        week = week + Duration::days(7);
    }
    line
}
