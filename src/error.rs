use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("table capacity must be greater than 1, got {capacity}")]
    InvalidCapacity { capacity: usize },
    #[error("table is full: {count} keys stored in {capacity} slots")]
    Full { capacity: usize, count: usize },
}
