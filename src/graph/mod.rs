pub mod aggregate;
pub mod exec;
pub mod fold;
pub mod render;

pub use aggregate::{aggregate, tally, RepoWarning};
pub use exec::exec;
pub use fold::fold_weeks;
pub use render::{intensity_for, render_lines, Intensity, Theme};
