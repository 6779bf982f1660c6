use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::view::sections::SectionId;

/// Failures of the browser APIs the page leans on.
///
/// None of these reach the user: callers log them and carry on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PageError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("section #{0} is not in the document")]
    MissingSection(SectionId),
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        PageError::Js(format!("{:?}", value))
    }
}
