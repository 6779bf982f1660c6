use wasm_bindgen::JsValue;
use web_sys::{MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::Callback;

use crate::error::PageError;
use crate::utils::dom;
use crate::view::sections::SectionId;

/// Smoothly scrolls a section into view without touching the history.
pub fn scroll_to_section(section: SectionId) -> Result<(), PageError> {
    let element = dom::section_element(section)?;
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

/// Scrolls to `section` and records `#<id>` in the address bar via a
/// history push, so the document is never reloaded.
///
/// A section that is not in the document leaves both the scroll position
/// and the address bar alone.
pub fn jump_to_section(section: SectionId) -> Result<(), PageError> {
    scroll_to_section(section)?;
    dom::window()?
        .history()?
        .push_state_with_url(&JsValue::NULL, "", Some(section.fragment().as_str()))?;
    log::info!("Jumped to #{}", section);
    Ok(())
}

/// Click handler for links and buttons that lead to a section.
pub fn jump_callback(section: SectionId) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        match jump_to_section(section) {
            Ok(()) => {}
            Err(PageError::MissingSection(missing)) => {
                log::debug!("Ignoring jump to #{}: not rendered", missing);
            }
            Err(err) => log::warn!("Failed to jump to #{}: {}", section, err),
        }
    })
}
