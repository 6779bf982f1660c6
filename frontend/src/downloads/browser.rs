use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;
use yew::prelude::*;

use crate::error::PageError;
use crate::utils::dom;

use super::slot::{DownloadTarget, SaveRequest};
use super::trigger::{FileSaver, Scheduler, SlotStates, StagedDownloads};

/// Schedules on the browser event loop through `setTimeout`.
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

/// Saves through a throwaway `<a download>` element.
pub struct AnchorSaver;

impl FileSaver for AnchorSaver {
    fn save(&self, request: &SaveRequest) -> Result<(), PageError> {
        trigger_file_download(request)
    }
}

/// Asks the browser to save `request.source` as `request.filename`.
///
/// Fire-and-forget: whether the file arrives is up to the browser.
pub fn trigger_file_download(request: &SaveRequest) -> Result<(), PageError> {
    let document = dom::document()?;
    let body = document.body().ok_or(PageError::NoBody)?;
    let link: HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into()
        .map_err(|_| PageError::Js("created element is not an anchor".to_string()))?;
    link.set_href(request.source);
    link.set_download(request.filename);
    body.append_child(&link)?;
    link.click();
    body.remove_child(&link)?;
    Ok(())
}

pub type BrowserDownloads = StagedDownloads<TimeoutScheduler, AnchorSaver>;

/// Both slots' phases plus a callback that starts a slot's staged download.
#[hook]
pub fn use_staged_downloads(delay_ms: u32) -> (SlotStates, Callback<DownloadTarget>) {
    let states = use_state_eq(SlotStates::default);
    let downloads = {
        let states = states.clone();
        use_mut_ref(move || {
            BrowserDownloads::new(TimeoutScheduler, AnchorSaver, delay_ms, move |next| {
                states.set(next)
            })
        })
    };
    let trigger = Callback::from(move |target: DownloadTarget| {
        downloads.borrow().trigger(target);
    });
    (*states, trigger)
}
