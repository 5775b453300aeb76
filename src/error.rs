use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A DOM lookup or cast failed (missing window, element, wrong type).
    #[error("dom: {0}")]
    Dom(String),

    /// A JavaScript exception, stringified at the wasm boundary.
    #[error("js: {0}")]
    Js(String),

    #[error("config: {0}")]
    Config(#[from] serde_json::Error),

    /// The application module's initializer failed.
    #[error("init: {0}")]
    Init(String),
}

impl Error {
    pub fn dom(msg: impl Into<String>) -> Self {
        Error::Dom(msg.into())
    }

    pub fn init(msg: impl Into<String>) -> Self {
        Error::Init(msg.into())
    }
}
