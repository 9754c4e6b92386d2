use thiserror::Error;

pub type Result<T> = std::result::Result<T, ContainerError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
    /// A positional operation was given an index outside `[0, size)`.
    #[error("Index: {index}, Size: {size}")]
    IndexOutOfRange { index: usize, size: usize },
}
