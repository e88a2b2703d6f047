use thiserror::Error;

/// Convenient result alias for the ecotrip library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a location name could not be found in the route catalog.
    #[error("unknown location: {name}{}", format_suggestions(.suggestions))]
    UnknownLocation {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when no catalog entry connects the two locations in either direction.
    #[error("no known route between {from} and {to}")]
    RouteNotFound { from: String, to: String },

    /// Raised when the carbon-credit configuration is structurally invalid.
    #[error("invalid carbon-credit configuration: {message}")]
    InvalidCreditConfig { message: String },

    /// Raised when the emission-factor table fails validation.
    #[error("invalid emission-factor table: {message}")]
    InvalidFactorTable { message: String },

    /// Raised when the route catalog fails validation.
    #[error("invalid route catalog: {message}")]
    InvalidCatalog { message: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON (de)serialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
