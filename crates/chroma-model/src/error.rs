use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input is not exactly six hexadecimal digits after an optional `#`.
    #[error("invalid hex color {input:?}: expected 6 hexadecimal digits with optional leading '#'")]
    InvalidFormat { input: String },
    #[error("unknown harmony kind: {input}")]
    UnknownHarmonyKind { input: String },
    #[error("unknown color vision variant: {input}")]
    UnknownCvdVariant { input: String },
}

impl ColorError {
    pub fn invalid_format(input: impl Into<String>) -> Self {
        Self::InvalidFormat {
            input: input.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ColorError>;
