use std::fmt;

#[derive(Debug)]
pub enum PagerError {
    /// The pagination container lacks the named navigation control (`.prev` or `.next`)
    MissingNavControl(&'static str),
    InvalidSelector(String),
    Json(serde_json::Error),
    Toml(toml::de::Error),
    /// A podmaker config that parsed but holds unusable values
    InvalidConfig(String),
    Io(std::io::Error),
    NoDataDir,
}

impl fmt::Display for PagerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PagerError::MissingNavControl(selector) => {
                write!(f, "Missing navigation control: {}", selector)
            }
            PagerError::InvalidSelector(s) => write!(f, "Invalid selector: {}", s),
            PagerError::Json(e) => write!(f, "JSON parsing error: {}", e),
            PagerError::Toml(e) => write!(f, "Config parsing error: {}", e),
            PagerError::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
            PagerError::Io(e) => write!(f, "IO error: {}", e),
            PagerError::NoDataDir => write!(f, "Could not determine data directory"),
        }
    }
}

impl std::error::Error for PagerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PagerError::Json(e) => Some(e),
            PagerError::Toml(e) => Some(e),
            PagerError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for PagerError {
    fn from(err: serde_json::Error) -> Self {
        PagerError::Json(err)
    }
}

impl From<toml::de::Error> for PagerError {
    fn from(err: toml::de::Error) -> Self {
        PagerError::Toml(err)
    }
}

impl From<std::io::Error> for PagerError {
    fn from(err: std::io::Error) -> Self {
        PagerError::Io(err)
    }
}
