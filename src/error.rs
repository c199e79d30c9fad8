use grid_util::point::Point;
use thiserror::Error;

/// Invalid input detected before any search work begins. An unreachable goal is not an error,
/// see [SearchResult::is_reachable](crate::search::SearchResult::is_reachable).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    #[error("cell {cell} is out of range for a grid of {node_count} cells")]
    CellOutOfRange { cell: usize, node_count: usize },

    #[error("table holds {actual} entries but {expected} were expected")]
    TableSizeMismatch { expected: usize, actual: usize },

    #[error("grid dimensions {width}x{height} contain no cells")]
    EmptyGrid { width: usize, height: usize },

    #[error("point {0:?} lies outside the grid")]
    PointOutOfBounds(Point),
}

pub type Result<T> = std::result::Result<T, PathError>;
