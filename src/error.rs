use miette::Diagnostic;
use thiserror::Error;

/// Main error type for bestiary operations
#[derive(Error, Diagnostic, Debug)]
pub enum BestiaryError {
    #[error("Format error: {message}")]
    #[diagnostic(code(bestiary::format))]
    Format {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Unsupported die type: d{sides}")]
    #[diagnostic(
        code(bestiary::dice),
        help("Supported dice are d4, d6, d8, d10, d12, d20 and d100")
    )]
    UnsupportedDie { sides: u32 },

    #[error("Declaration error: {message}")]
    #[diagnostic(code(bestiary::declare))]
    Declaration {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, BestiaryError>;
