use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while mounting a screen. Returned to the page bootstrap.
#[derive(Debug, Error)]
pub enum MotdError {
    #[error("unknown screen `{0}`")]
    UnknownScreen(String),
    #[error("required element #{0} is missing")]
    MissingNode(String),
    #[error("element #{id} is not a {expected}")]
    WrongElement { id: String, expected: &'static str },
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("browser call failed: {0}")]
    Dom(String),
}

impl From<MotdError> for JsValue {
    fn from(err: MotdError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// The two runtime failure kinds. `Display` yields the text of the blocking alert.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ChannelError {
    #[error("Retargeting error\n{0}")]
    Retarget(String),
    #[error("Initialization error\n{0}")]
    Init(String),
    /// Buy or use rejected by the transport.
    #[error("Purchase error\n{0}")]
    Purchase(String),
    /// Admin request rejected by the transport.
    #[error("Request error\n{0}")]
    Request(String),
}

impl ChannelError {
    pub fn message(&self) -> &str {
        match self {
            ChannelError::Retarget(m)
            | ChannelError::Init(m)
            | ChannelError::Purchase(m)
            | ChannelError::Request(m) => m,
        }
    }
}
