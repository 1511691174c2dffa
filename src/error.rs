pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    // front/last/pop_*/remove_at on a list with no elements
    #[error("operation requires a non-empty list")]
    EmptyContainer,

    // reads and removals accept 0..size, insertion accepts 0..=size
    #[error("index {index} out of range for list of length {size}")]
    IndexOutOfRange { index: usize, size: usize },
}
