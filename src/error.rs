/// Result type alias for path generation
pub type Result<T> = std::result::Result<T, Error>;

/// Error types raised while walking a route tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A method terminator whose token is missing or not an OpenAPI method
    InvalidMethod { path: String, method: String },
    /// An ancestor chain longer than the walker is willing to climb
    TreeTooDeep { limit: usize },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::InvalidMethod { path, method } if method.is_empty() => {
                write!(f, "Method route at '{}' has no HTTP method", path)
            }
            Error::InvalidMethod { path, method } => {
                write!(f, "Method route at '{}' has unsupported HTTP method '{}'", path, method)
            }
            Error::TreeTooDeep { limit } => write!(
                f,
                "Route tree exceeds {} levels, it is too deep or possibly cyclic",
                limit
            ),
        }
    }
}

impl std::error::Error for Error {}
