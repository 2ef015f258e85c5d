use crate::error::Result;
use crate::model::CommitEvent;
use chrono::DateTime;
use gix::{discover, ObjectId, Repository};
use std::collections::{HashSet, VecDeque};
use std::path::Path;

pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Open the repository at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = discover(path.as_ref())?;
        Ok(Self { repo })
    }

    /// Walk every commit reachable from HEAD and return its timestamp and
    /// author email. A commit with an undecodable signature or timestamp is
    /// skipped on its own; its ancestry is still traversed.
    pub fn commits(&self) -> Result<Vec<CommitEvent>> {
        let mut head = self.repo.head()?;
        let head_commit = head.peel_to_commit_in_place()?;

        let mut events = Vec::new();
        let mut seen: HashSet<ObjectId> = HashSet::new();
        let mut stack: VecDeque<ObjectId> = VecDeque::from([head_commit.id]);

        while let Some(commit_id) = stack.pop_back() {
            if !seen.insert(commit_id) {
                continue;
            }

            let commit = self.repo.find_commit(commit_id)?;
            for pid in commit.parent_ids() {
                stack.push_back(pid.into());
            }

            let secs = match commit.time() {
                Ok(time) => time.seconds,
                Err(_) => continue,
            };
            let Some(timestamp) = DateTime::from_timestamp(secs, 0) else {
                continue;
            };
            let author_email = match commit.author() {
                Ok(author) => author.email.to_string(),
                Err(_) => continue,
            };

            events.push(CommitEvent {
                timestamp,
                author_email,
            });
        }

        Ok(events)
    }
}
