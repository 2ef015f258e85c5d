use crate::model::{CalendarGrid, DayHistogram, WINDOW_DAYS};

/// Group day indices into week columns. The column in progress is reset at
/// every Sunday boundary (`index % 7 == 0`) and committed to the grid on
/// Saturdays (`index % 7 == 6`) and at the end of the window, so the columns
/// at both edges may hold fewer than 7 values.
pub fn fold_weeks(histogram: &DayHistogram) -> CalendarGrid {
    let mut grid = CalendarGrid::default();
    let mut column = Vec::new();

    let last = WINDOW_DAYS as usize + 7;
    for index in 1..=last {
        if index % 7 == 0 {
            column = Vec::new();
        }
        column.push(histogram.get(index));
        if index % 7 == 6 {
            grid.insert(index / 7, std::mem::take(&mut column));
        }
    }
    if !column.is_empty() {
        grid.insert(last / 7, column);
    }

    grid
}
