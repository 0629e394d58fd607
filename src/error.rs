pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    // Parsing errors
    #[error("{0}")]
    ParsingError(String),
    // Calendar navigation outside of the allowed months
    #[error("Cannot navigate to {0}")]
    NavigationOutOfRange(String),
    // Database errors
    #[error(transparent)]
    DatabaseError(#[from] sqlx::Error),
}
