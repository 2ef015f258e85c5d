use thiserror::Error;

pub type Result<T> = std::result::Result<T, GitgraphError>;

#[derive(Error, Debug)]
pub enum GitgraphError {
    #[error("Git discover error: {0}")]
    GitDiscover(#[from] Box<gix::discover::Error>),
    #[error("Reference find error: {0}")]
    RefFind(#[from] Box<gix::reference::find::existing::Error>),
    #[error("No commit history: {0}")]
    HeadPeel(#[from] Box<gix::head::peel::to_commit::Error>),
    #[error("Object find error: {0}")]
    ObjectFind(#[from] Box<gix::object::find::existing::with_conversion::Error>),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Other: {0}")]
    Other(String),
}

// Manual From implementations for unboxed to boxed conversions
impl From<gix::discover::Error> for GitgraphError {
    fn from(err: gix::discover::Error) -> Self {
        GitgraphError::GitDiscover(Box::new(err))
    }
}

impl From<gix::reference::find::existing::Error> for GitgraphError {
    fn from(err: gix::reference::find::existing::Error) -> Self {
        GitgraphError::RefFind(Box::new(err))
    }
}

impl From<gix::head::peel::to_commit::Error> for GitgraphError {
    fn from(err: gix::head::peel::to_commit::Error) -> Self {
        GitgraphError::HeadPeel(Box::new(err))
    }
}

impl From<gix::object::find::existing::with_conversion::Error> for GitgraphError {
    fn from(err: gix::object::find::existing::with_conversion::Error) -> Self {
        GitgraphError::ObjectFind(Box::new(err))
    }
}
