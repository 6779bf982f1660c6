use yew::prelude::*;

use crate::view::hooks::use_scroll_progress;
use crate::view::progress::background_color;

/// Fixed layer behind the page whose colour follows the scroll position.
/// Scrolling re-renders only this layer.
#[function_component(ScrollBackdrop)]
pub fn scroll_backdrop() -> Html {
    let progress = use_scroll_progress();
    html! {
        <div
            class="scroll-backdrop"
            style={format!("background-color: {};", background_color(progress))}
        ></div>
    }
}
