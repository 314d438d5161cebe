use std::fmt;

use stepstar::SearchError;

use crate::geom::Position;

/// Errors from [`GridPathfinder`](crate::GridPathfinder) and
/// [`GridConfig`](crate::GridConfig).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A start or goal outside the terrain.
    OutOfBounds(Position),
    /// A [`GridConfig`](crate::GridConfig) value was rejected.
    InvalidConfig { detail: String },
    /// The engine failed.
    Search(SearchError),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(p) => write!(f, "position {p} is outside the terrain"),
            Self::InvalidConfig { detail } => write!(f, "invalid grid config: {detail}"),
            Self::Search(err) => write!(f, "search failed: {err}"),
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Search(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SearchError> for GridError {
    fn from(err: SearchError) -> Self {
        Self::Search(err)
    }
}
