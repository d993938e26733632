use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    /// The bytes handed to the JSON Feed decoder are not a JSON object of the
    /// expected shape.
    #[error("Malformed JSON Feed document: {0}")]
    MalformedDocument(#[source] serde_json::Error),

    #[error("XML parsing error: {0}")]
    XmlParse(String),

    #[error("XML nesting depth exceeds maximum of {0} levels")]
    MaxDepthExceeded(usize),

    #[error("Unsupported feed format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FeedError>;
