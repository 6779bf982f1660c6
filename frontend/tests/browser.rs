#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use bharatscan::downloads::browser::{trigger_file_download, AnchorSaver, TimeoutScheduler};
use bharatscan::downloads::slot::{DownloadTarget, SaveRequest, SlotPhase};
use bharatscan::downloads::trigger::{FileSaver, StagedDownloads};
use bharatscan::error::PageError;
use bharatscan::utils::dom;
use bharatscan::view::navigation::jump_to_section;
use bharatscan::view::sections::SectionId;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[derive(Clone, Default)]
struct Recorder {
    saved: Rc<RefCell<Vec<SaveRequest>>>,
}

impl FileSaver for Recorder {
    fn save(&self, request: &SaveRequest) -> Result<(), PageError> {
        self.saved.borrow_mut().push(*request);
        Ok(())
    }
}

fn mount_section(id: &str) -> web_sys::Element {
    let document = dom::document().unwrap();
    let element = document.create_element("section").unwrap();
    element.set_id(id);
    dom::body().unwrap().append_child(&element).unwrap();
    element
}

fn current_hash() -> String {
    dom::window().unwrap().location().hash().unwrap()
}

#[wasm_bindgen_test]
fn jump_records_fragment_for_rendered_section() {
    let element = mount_section("benefits");
    jump_to_section(SectionId::Benefits).unwrap();
    assert_eq!(current_hash(), "#benefits");
    element.remove();
}

#[wasm_bindgen_test]
fn jump_to_missing_section_changes_nothing() {
    let before = current_hash();
    let scroll_before = dom::window().unwrap().scroll_y().unwrap();
    assert_eq!(
        jump_to_section(SectionId::Retailers),
        Err(PageError::MissingSection(SectionId::Retailers))
    );
    assert_eq!(current_hash(), before);
    assert_eq!(dom::window().unwrap().scroll_y().unwrap(), scroll_before);
}

#[wasm_bindgen_test]
fn anchor_save_leaves_no_element_behind() {
    let anchors = || dom::document().unwrap().query_selector_all("a[download]").unwrap().length();
    let before = anchors();
    // Point at a fragment so the click does not navigate away.
    trigger_file_download(&SaveRequest {
        source: "#",
        filename: "nothing.txt",
    })
    .unwrap();
    assert_eq!(anchors(), before);
    assert!(AnchorSaver
        .save(&SaveRequest {
            source: "#",
            filename: "nothing.txt",
        })
        .is_ok());
}

#[wasm_bindgen_test]
async fn timeout_scheduler_completes_slot() {
    let saver = Recorder::default();
    let phases = Rc::new(RefCell::new(Vec::new()));
    let downloads = StagedDownloads::new(TimeoutScheduler, saver.clone(), 20, {
        let phases = phases.clone();
        move |states: bharatscan::downloads::trigger::SlotStates| {
            phases.borrow_mut().push(states.phase(DownloadTarget::Desktop))
        }
    });

    assert!(downloads.trigger(DownloadTarget::Desktop));
    assert_eq!(downloads.states().desktop, SlotPhase::Preparing);

    TimeoutFuture::new(60).await;

    assert_eq!(downloads.states().desktop, SlotPhase::Idle);
    assert_eq!(
        *saver.saved.borrow(),
        vec![DownloadTarget::Desktop.save_request()]
    );
    assert_eq!(*phases.borrow(), vec![SlotPhase::Preparing, SlotPhase::Idle]);
}
