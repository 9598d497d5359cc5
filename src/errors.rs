use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CapabilityError {
    #[error(
        "cannot accept both 'options' and 'capabilities'; \
         'capabilities' is deprecated, pass 'options' only"
    )]
    Conflict,
    #[error("options must be a {expected}, got {found}")]
    OptionsType {
        expected: &'static str,
        found: &'static str,
    },
}

pub type CapabilityResult<T> = Result<T, CapabilityError>;
