use std::{
    error::Error,
    fmt::{self, Display},
};

/// The result type used in the entire crate.
pub type Result<T> = std::result::Result<T, MlErr>;

/// The crate's error type.
///
/// Training and inference never return it: malformed inputs surface as whatever fault the
/// underlying array operations raise. Only configuration is fallible.
#[derive(Debug)]
pub enum MlErr {
    InvalidHyperparameter { name: &'static str, value: String },
    Config(serde_json::Error),
}

impl Display for MlErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MlErr::InvalidHyperparameter { name, value } => {
                format!("Invalid value for hyperparameter {name}, got {value}")
            }
            MlErr::Config(e) => format!("Failed to parse hyperparameters: {e}"),
        };

        write!(f, "{s}")
    }
}

impl Error for MlErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MlErr::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for MlErr {
    fn from(e: serde_json::Error) -> Self {
        MlErr::Config(e)
    }
}
