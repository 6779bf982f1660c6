use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::PageError;
use crate::view::sections::SectionId;

pub fn window() -> Result<Window, PageError> {
    web_sys::window().ok_or(PageError::NoWindow)
}

pub fn document() -> Result<Document, PageError> {
    window()?.document().ok_or(PageError::NoDocument)
}

pub fn body() -> Result<HtmlElement, PageError> {
    document()?.body().ok_or(PageError::NoBody)
}

/// Looks up the element rendered for a section, if the page has one.
pub fn section_element(section: SectionId) -> Result<Element, PageError> {
    document()?
        .get_element_by_id(section.element_id())
        .ok_or(PageError::MissingSection(section))
}

pub fn viewport_height() -> Result<f64, PageError> {
    window()?
        .inner_height()?
        .as_f64()
        .ok_or_else(|| PageError::Js("innerHeight is not a number".to_string()))
}

/// Current document scroll as `(scroll_y, scroll_height, viewport_height)`.
pub fn scroll_metrics() -> Result<(f64, f64, f64), PageError> {
    let window = window()?;
    let scroll_y = window.scroll_y()?;
    let scroll_height = document()?
        .document_element()
        .map(|root| root.scroll_height() as f64)
        .unwrap_or_default();
    Ok((scroll_y, scroll_height, viewport_height()?))
}
