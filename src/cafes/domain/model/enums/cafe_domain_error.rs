use thiserror::Error;

#[derive(Debug, Error)]
pub enum CafeDomainError {
    #[error("A cafe with this name already exists.")]
    DuplicateName,

    #[error("A required cafe field is missing.")]
    MissingRequiredField,

    #[error("{0}")]
    InvalidField(String),

    #[error("Sorry a cafe with that id was not found in the database.")]
    NotFound,

    #[error("Sorry, we don't have a cafe at that location.")]
    NoLocationMatch,

    #[error("Sorry, there are no cafes in the database.")]
    EmptyTable,

    #[error("Sorry, that's not allowed. Make sure you have the correct api_key.")]
    Forbidden,

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
