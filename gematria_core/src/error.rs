use thiserror::Error;

pub type Result<T> = std::result::Result<T, GematriaError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GematriaError {
    #[error("Unknown gematria method: {0}")]
    UnknownMethod(String),

    #[error("At least one name is required")]
    NoNames,

    #[error("Too many names: {given} given, at most {max} allowed")]
    TooManyNames { given: usize, max: usize },
}
