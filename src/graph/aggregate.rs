use crate::error::GitgraphError;
use crate::git::GitRepo;
use crate::model::{CommitEvent, DayHistogram};
use crate::util::day_index;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

/// A repository that was skipped, and why.
#[derive(Debug)]
pub struct RepoWarning {
    pub path: PathBuf,
    pub reason: GitgraphError,
}

/// Fold the commit history of every repository into one histogram. A
/// repository that cannot be opened or has no readable history is skipped
/// and reported; the remaining repositories still contribute.
pub fn aggregate(
    paths: &[PathBuf],
    email: &str,
    now: DateTime<Utc>,
) -> (DayHistogram, Vec<RepoWarning>) {
    let mut histogram = DayHistogram::new();
    let mut warnings = Vec::new();

    for path in paths {
        match read_commits(path) {
            Ok(events) => tally(&mut histogram, &events, email, now),
            Err(reason) => warnings.push(RepoWarning {
                path: path.clone(),
                reason,
            }),
        }
    }

    (histogram, warnings)
}

fn read_commits(path: &Path) -> crate::error::Result<Vec<CommitEvent>> {
    GitRepo::open(path)?.commits()
}

/// Count the events authored by `email` that fall inside the window.
pub fn tally(
    histogram: &mut DayHistogram,
    events: &[CommitEvent],
    email: &str,
    now: DateTime<Utc>,
) {
    for event in events {
        if event.author_email != email {
            continue;
        }
        if let Some(index) = day_index(event.timestamp, now) {
            histogram.record(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WINDOW_DAYS;
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    const EMAIL: &str = "you@example.com";

    fn event(timestamp: DateTime<Utc>, author_email: &str) -> CommitEvent {
        CommitEvent {
            timestamp,
            author_email: author_email.to_string(),
        }
    }

    // a Wednesday, so the alignment offset is 4
    fn wednesday() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 3, 12, 0, 0).unwrap()
    }

    #[test]
    fn other_authors_never_count() {
        let now = wednesday();
        let mut histogram = DayHistogram::new();
        tally(
            &mut histogram,
            &[event(now, "someone@else.dev"), event(now, EMAIL)],
            EMAIL,
            now,
        );
        assert_eq!(histogram.total(), 1);
        assert_eq!(histogram.get(4), 1);
    }

    #[test]
    fn same_day_commits_from_separate_repos_share_a_bucket() {
        let now = wednesday();
        let mut histogram = DayHistogram::new();
        let day = now - Duration::days(3);
        tally(&mut histogram, &[event(day, EMAIL)], EMAIL, now);
        tally(&mut histogram, &[event(day, EMAIL)], EMAIL, now);
        assert_eq!(histogram.get(7), 2);
        assert_eq!(histogram.total(), 2);
    }

    #[test]
    fn commits_outside_the_window_are_dropped() {
        let now = wednesday();
        let mut histogram = DayHistogram::new();
        tally(
            &mut histogram,
            &[
                event(now - Duration::days(WINDOW_DAYS), EMAIL),
                event(now - Duration::days(WINDOW_DAYS + 1), EMAIL),
            ],
            EMAIL,
            now,
        );
        assert_eq!(histogram.total(), 1);
        assert_eq!(histogram.get(WINDOW_DAYS as usize + 4), 1);
    }

    #[test]
    fn aggregation_is_deterministic_for_fixed_inputs() {
        let now = wednesday();
        let events = [
            event(now, EMAIL),
            event(now - Duration::days(1), EMAIL),
            event(now - Duration::days(10), EMAIL),
        ];

        let mut first = DayHistogram::new();
        let mut second = DayHistogram::new();
        tally(&mut first, &events, EMAIL, now);
        tally(&mut second, &events, EMAIL, now);
        assert_eq!(first, second);
    }

    #[test]
    fn unreadable_repositories_are_skipped_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("not-a-repo");
        let (histogram, warnings) = aggregate(&[missing.clone()], EMAIL, wednesday());
        assert_eq!(histogram.total(), 0);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].path, missing);
    }
}
