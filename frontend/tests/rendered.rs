#![cfg(target_arch = "wasm32")]

//! Mounted components driven through real DOM events.

use std::cell::RefCell;
use std::rc::Rc;

use bharatscan::components::navbar::{NavBar, NavBarProps};
use bharatscan::config::PageConfig;
use bharatscan::pages::landing::Landing;
use bharatscan::utils::dom;
use bharatscan::view::hooks::{observe_sections, use_initial_fragment};
use bharatscan::view::sections::SectionId;
use bharatscan::view::tracker::{Observation, SectionTracker};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, HtmlAnchorElement, HtmlElement, MouseEvent, MouseEventInit};
use wasm_bindgen_test::*;
use yew::prelude::*;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_root() -> Element {
    let root = dom::document().unwrap().create_element("div").unwrap();
    dom::body().unwrap().append_child(&root).unwrap();
    root
}

fn block(parent: &Element, id: Option<&str>, height_px: u32) -> Element {
    let element = dom::document().unwrap().create_element("section").unwrap();
    if let Some(id) = id {
        element.set_id(id);
    }
    element
        .set_attribute("style", &format!("display: block; height: {}px;", height_px))
        .unwrap();
    parent.append_child(&element).unwrap();
    element
}

fn query(selector: &str) -> Element {
    dom::document()
        .unwrap()
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("nothing matches {}", selector))
}

fn current_hash() -> String {
    dom::window().unwrap().location().hash().unwrap()
}

fn clear_hash() {
    let location = dom::window().unwrap().location();
    let url = format!("{}{}", location.pathname().unwrap(), location.search().unwrap());
    dom::window()
        .unwrap()
        .history()
        .unwrap()
        .replace_state_with_url(&JsValue::NULL, "", Some(&url))
        .unwrap();
}

fn reset_scroll() {
    dom::window().unwrap().scroll_to_with_x_and_y(0.0, 0.0);
}

/// Dispatches a bubbling, cancelable click. Returns whether a handler
/// prevented the default action.
fn click_prevented(target: &Element) -> bool {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = MouseEvent::new_with_mouse_event_init_dict("click", &init).unwrap();
    !target.dispatch_event(&event).unwrap()
}

/// Records every `<a download>` click on the document and cancels it, so
/// nothing is actually saved.
struct SaveInterceptor {
    saved: Rc<RefCell<Vec<(String, String)>>>,
    listener: Closure<dyn FnMut(Event)>,
}

impl SaveInterceptor {
    fn install() -> Self {
        let saved = Rc::new(RefCell::new(Vec::new()));
        let listener = Closure::<dyn FnMut(Event)>::new({
            let saved = saved.clone();
            move |event: Event| {
                let anchor = event
                    .target()
                    .and_then(|target| target.dyn_into::<HtmlAnchorElement>().ok());
                if let Some(anchor) = anchor {
                    if anchor.has_attribute("download") {
                        event.prevent_default();
                        saved.borrow_mut().push((
                            anchor.get_attribute("href").unwrap_or_default(),
                            anchor.download(),
                        ));
                    }
                }
            }
        });
        dom::document()
            .unwrap()
            .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
            .unwrap();
        Self { saved, listener }
    }

    fn remove(self) {
        dom::document()
            .unwrap()
            .remove_event_listener_with_callback("click", self.listener.as_ref().unchecked_ref())
            .unwrap();
    }
}

#[function_component(QuickDownloadsLanding)]
fn quick_downloads_landing() -> Html {
    let config = PageConfig {
        download_delay_ms: 80,
        ..PageConfig::default()
    };
    html! {
        <ContextProvider<PageConfig> context={config}>
            <Landing />
        </ContextProvider<PageConfig>>
    }
}

#[wasm_bindgen_test]
async fn mobile_download_runs_end_to_end_on_the_page() {
    let interceptor = SaveInterceptor::install();
    let root = mount_root();
    let app = yew::Renderer::<QuickDownloadsLanding>::with_root(root.clone()).render();
    TimeoutFuture::new(20).await;

    let mobile = query("button[data-slot=mobile]");
    let desktop = query("button[data-slot=desktop]");
    assert!(!mobile.has_attribute("disabled"));
    assert!(mobile.text_content().unwrap_or_default().contains("Download APK"));

    mobile.dyn_ref::<HtmlElement>().unwrap().click();
    TimeoutFuture::new(10).await;

    let mobile = query("button[data-slot=mobile]");
    assert!(mobile.has_attribute("disabled"));
    assert!(mobile.text_content().unwrap_or_default().contains("Preparing..."));
    assert!(!desktop.has_attribute("disabled"));

    // A second activation while preparing is swallowed.
    mobile.dyn_ref::<HtmlElement>().unwrap().click();
    TimeoutFuture::new(10).await;
    assert!(interceptor.saved.borrow().is_empty());

    TimeoutFuture::new(150).await;

    let mobile = query("button[data-slot=mobile]");
    assert!(!mobile.has_attribute("disabled"));
    assert!(mobile.text_content().unwrap_or_default().contains("Download APK"));
    assert_eq!(
        *interceptor.saved.borrow(),
        vec![(
            "/downloads/app-release.apk".to_string(),
            "BharatScan_Mobile.apk".to_string()
        )]
    );
    assert!(!query("button[data-slot=desktop]").has_attribute("disabled"));

    app.destroy();
    root.remove();
    interceptor.remove();
    clear_hash();
}

#[wasm_bindgen_test]
async fn nav_link_jumps_without_default_navigation() {
    clear_hash();
    let page = mount_root();
    block(&page, Some("retailers"), 400);
    let root = mount_root();
    let app = yew::Renderer::<NavBar>::with_root_and_props(
        root.clone(),
        NavBarProps {
            active: SectionId::Hero,
        },
    )
    .render();
    TimeoutFuture::new(20).await;

    let link = query("a.nav-link[href='#retailers']");
    assert!(click_prevented(&link));
    assert_eq!(current_hash(), "#retailers");

    app.destroy();
    root.remove();
    page.remove();
    clear_hash();
    reset_scroll();
}

#[wasm_bindgen_test]
async fn nav_link_to_missing_section_is_ignored() {
    clear_hash();
    let root = mount_root();
    let app = yew::Renderer::<NavBar>::with_root_and_props(
        root.clone(),
        NavBarProps {
            active: SectionId::Hero,
        },
    )
    .render();
    TimeoutFuture::new(20).await;

    let scroll_before = dom::window().unwrap().scroll_y().unwrap();
    let link = query("a.nav-link[href='#benefits']");
    assert!(click_prevented(&link));
    assert_eq!(current_hash(), "");
    assert_eq!(dom::window().unwrap().scroll_y().unwrap(), scroll_before);

    app.destroy();
    root.remove();
}

#[function_component(FragmentFollower)]
fn fragment_follower() -> Html {
    use_initial_fragment(10);
    html! {}
}

#[wasm_bindgen_test]
async fn initial_fragment_scrolls_to_known_section() {
    reset_scroll();
    let page = mount_root();
    block(&page, None, 3000);
    let target = block(&page, Some("download"), 600);
    dom::window()
        .unwrap()
        .history()
        .unwrap()
        .replace_state_with_url(&JsValue::NULL, "", Some("#download"))
        .unwrap();

    let top_before = target.get_bounding_client_rect().top();
    let root = mount_root();
    let app = yew::Renderer::<FragmentFollower>::with_root(root.clone()).render();
    TimeoutFuture::new(1_500).await;

    assert!(dom::window().unwrap().scroll_y().unwrap() > 0.0);
    assert!(target.get_bounding_client_rect().top() < top_before);

    app.destroy();
    root.remove();
    page.remove();
    clear_hash();
    reset_scroll();
}

#[wasm_bindgen_test]
async fn observer_reports_section_entering_the_band() {
    reset_scroll();
    let page = mount_root();
    // Retailers is left out on purpose.
    for id in ["hero", "how-it-works", "benefits", "download"] {
        block(&page, Some(id), 1000);
    }
    block(&page, None, 1000);

    let batches: Rc<RefCell<Vec<Vec<Observation>>>> = Rc::new(RefCell::new(Vec::new()));
    let tracker = Rc::new(RefCell::new(SectionTracker::new()));
    let config = PageConfig::default();
    let (observer, _callback) = observe_sections(config.focal_band, config.visibility_threshold, {
        let batches = batches.clone();
        let tracker = tracker.clone();
        move |batch: Vec<Observation>| {
            tracker.borrow_mut().apply_batch(batch.clone());
            batches.borrow_mut().push(batch);
        }
    })
    .unwrap();
    TimeoutFuture::new(100).await;

    query("#benefits").scroll_into_view();
    TimeoutFuture::new(200).await;

    assert_eq!(tracker.borrow().active(), SectionId::Benefits);
    let last_benefits = batches
        .borrow()
        .iter()
        .flatten()
        .filter(|o| o.section == SectionId::Benefits)
        .last()
        .copied();
    assert_eq!(
        last_benefits,
        Some(Observation {
            section: SectionId::Benefits,
            is_intersecting: true,
        })
    );
    assert!(batches
        .borrow()
        .iter()
        .flatten()
        .all(|o| o.section != SectionId::Retailers));

    observer.disconnect();
    let seen = batches.borrow().len();
    query("#download").scroll_into_view();
    TimeoutFuture::new(200).await;
    assert_eq!(batches.borrow().len(), seen);
    assert_eq!(tracker.borrow().active(), SectionId::Benefits);

    page.remove();
    reset_scroll();
}

#[wasm_bindgen_test]
async fn backdrop_alone_follows_scroll() {
    reset_scroll();
    let root = mount_root();
    let app = yew::Renderer::<QuickDownloadsLanding>::with_root(root.clone()).render();
    TimeoutFuture::new(50).await;

    let style = |selector: &str| query(selector).get_attribute("style").unwrap_or_default();
    assert_eq!(style(".scroll-backdrop"), "background-color: rgb(255, 255, 255);");
    assert_eq!(style(".landing-page"), "");

    let window = dom::window().unwrap();
    let scrollable = dom::document()
        .unwrap()
        .document_element()
        .unwrap()
        .scroll_height() as f64
        - dom::viewport_height().unwrap();
    window.scroll_to_with_x_and_y(0.0, scrollable * 0.6);
    TimeoutFuture::new(100).await;

    assert_ne!(style(".scroll-backdrop"), "background-color: rgb(255, 255, 255);");
    assert_eq!(style(".landing-page"), "");

    app.destroy();
    root.remove();
    reset_scroll();
}
