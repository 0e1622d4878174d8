use std::error::Error;
use std::fmt::{Display, Formatter};

pub type DecodeResult<T> = Result<T, DecodeError>;

/// Coarse classification of a fatal JSON failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonFailureCategory {
    /// Input is not syntactically valid JSON.
    Syntax,
    /// Valid JSON whose outer shape does not fit the expected structure.
    Data,
    /// Input ended before the value was complete.
    Eof,
    Io,
}

impl JsonFailureCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Syntax => "syntax",
            Self::Data => "data",
            Self::Eof => "eof",
            Self::Io => "io",
        }
    }
}

/// Fatal decode failures.
///
/// Per-element mismatches, unknown kinds and unattachable replies are not
/// represented here; they are recovered locally and never escalated.
#[derive(Debug)]
pub enum DecodeError {
    /// Outer payload is not valid JSON or has the wrong outer shape.
    Json(serde_json::Error),
    /// A composite payload did not hold the expected number of listings.
    WrongArity { expected: usize, found: usize },
    /// The first listing of a composite payload holds no post.
    MissingRootEntity,
}

impl DecodeError {
    /// One-based `(line, column)` of a JSON failure.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            Self::Json(err) => Some((err.line(), err.column())),
            _ => None,
        }
    }

    pub fn category(&self) -> Option<JsonFailureCategory> {
        match self {
            Self::Json(err) => Some(match err.classify() {
                serde_json::error::Category::Syntax => JsonFailureCategory::Syntax,
                serde_json::error::Category::Data => JsonFailureCategory::Data,
                serde_json::error::Category::Eof => JsonFailureCategory::Eof,
                serde_json::error::Category::Io => JsonFailureCategory::Io,
            }),
            _ => None,
        }
    }
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => {
                let category = self.category().map(|c| c.as_str()).unwrap_or("unknown");
                write!(f, "invalid {category} in response payload: {err}")
            }
            Self::WrongArity { expected, found } => write!(
                f,
                "expected an array of {expected} listings, found {found}"
            ),
            Self::MissingRootEntity => write!(f, "first listing holds no post"),
        }
    }
}

impl Error for DecodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::WrongArity { .. } => None,
            Self::MissingRootEntity => None,
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
