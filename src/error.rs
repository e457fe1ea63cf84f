use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AppError {
    #[error("{0}")]
    Conversion(String),
    #[error("{0}")]
    InsufficientRam(String),
}

impl AppError {
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Conversion(_) => 1,
            AppError::InsufficientRam(_) => 2,
        }
    }
}
