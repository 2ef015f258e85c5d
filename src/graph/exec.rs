use super::{aggregate, fold_weeks, render_lines, Theme};
use crate::cli::CommonArgs;
use crate::store::PathStore;
use anyhow::Context;
use chrono::Utc;
use console::style;

pub fn exec(common: CommonArgs, email: String, no_color: bool) -> anyhow::Result<()> {
    let store =
        PathStore::resolve(common.store.as_deref()).context("Failed to locate repository list")?;
    let paths = store.list().context("Failed to read repository list")?;

    if paths.is_empty() {
        println!("No repositories registered. Run `gitgraph scan <folder>` first.");
        return Ok(());
    }

    let now = Utc::now();
    let (histogram, warnings) = aggregate(&paths, &email, now);
    let grid = fold_weeks(&histogram);

    let theme = if no_color { Theme::Plain } else { Theme::Ansi };
    for line in render_lines(&grid, now, theme) {
        println!("{line}");
    }

    for warning in &warnings {
        eprintln!(
            "{} skipped {}: {}",
            style("warning:").yellow().bold(),
            warning.path.display(),
            warning.reason
        );
    }

    Ok(())
}
