use thiserror::Error;

/// Errors that can occur when building or driving a midpoint integrator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: &'static str },
}
