use thiserror::Error;
use wasm_bindgen::JsValue;

pub use crate::Result;

pub type Reason = String;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// embedded page configuration is missing or malformed
    #[error("config error: {0}")]
    Config(Reason),
    /// the `id` attribute of a message item can not be used as a path segment
    #[error("invalid message id: {0:?}")]
    InvalidMessageId(Reason),
    /// request could not be built or sent
    #[error("network error: {0}")]
    Network(Reason),
    /// server answered with a non-2xx status
    #[error("server responded {status} {status_text}")]
    Status { status: u16, status_text: String },
    /// js related error
    #[error("javascript error: {0}")]
    JavaScript(Reason),
}

impl From<gloo_net::Error> for Error {
    fn from(value: gloo_net::Error) -> Self {
        Self::Network(value.to_string())
    }
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        Self::JavaScript(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}
