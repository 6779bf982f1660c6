use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::error::PageError;
use crate::utils::dom;
use crate::view::navigation;
use crate::view::progress::scroll_progress;
use crate::view::sections::SectionId;
use crate::view::tracker::{self, FocalBand, Observation, RegionRect, SectionTracker};

pub type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn current_scroll_progress() -> Result<f64, PageError> {
    let (scroll_y, scroll_height, viewport_height) = dom::scroll_metrics()?;
    Ok(scroll_progress(scroll_y, scroll_height, viewport_height))
}

/// Document scroll progress in `[0, 1]`, kept current by a scroll listener.
#[hook]
pub fn use_scroll_progress() -> f64 {
    let progress = use_state_eq(|| 0.0_f64);
    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = match dom::window() {
                    Ok(window) => {
                        let callback = Closure::<dyn Fn()>::new({
                            let progress = progress.clone();
                            move || {
                                if let Ok(p) = current_scroll_progress() {
                                    progress.set(p);
                                }
                            }
                        });
                        if let Err(e) = window.add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        ) {
                            log::warn!("Failed to listen for scroll: {:?}", e);
                        }
                        // Initial call
                        match current_scroll_progress() {
                            Ok(p) => progress.set(p),
                            Err(e) => log::warn!("Failed to read scroll position: {}", e),
                        }
                        Box::new(move || {
                            if let Ok(win) = dom::window() {
                                let _ = win.remove_event_listener_with_callback(
                                    "scroll",
                                    callback.as_ref().unchecked_ref(),
                                );
                            }
                        })
                    }
                    Err(e) => {
                        log::warn!("Scroll progress unavailable: {}", e);
                        Box::new(|| ())
                    }
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }
    *progress
}

/// Measures every rendered section against the band. Sections missing from
/// the document are skipped.
fn measure_sections(band: FocalBand, threshold: f64) -> Result<Vec<Observation>, PageError> {
    let viewport_height = dom::viewport_height()?;
    let mut regions = Vec::with_capacity(SectionId::ALL.len());
    for section in SectionId::ALL {
        match dom::section_element(section) {
            Ok(element) => {
                let rect = element.get_bounding_client_rect();
                regions.push((
                    section,
                    RegionRect {
                        top: rect.top(),
                        bottom: rect.bottom(),
                    },
                ));
            }
            Err(PageError::MissingSection(_)) => {
                log::debug!("Section #{} not rendered, skipping", section);
            }
            Err(e) => return Err(e),
        }
    }
    Ok(tracker::measure(band, threshold, viewport_height, &regions))
}

/// Registers an intersection observer on every rendered section, configured
/// with the band's root margin and `threshold`. Each callback batch is mapped
/// to observations and handed to `on_batch`. The closure must live as long as
/// the observer.
pub fn observe_sections<F>(
    band: FocalBand,
    threshold: f64,
    mut on_batch: F,
) -> Result<(IntersectionObserver, ObserverCallback), PageError>
where
    F: FnMut(Vec<Observation>) + 'static,
{
    let callback = ObserverCallback::new(move |entries: Array, _observer: IntersectionObserver| {
        let batch = entries
            .iter()
            .filter_map(|entry| {
                let entry: IntersectionObserverEntry = entry.dyn_into().ok()?;
                let section = SectionId::from_element_id(&entry.target().id())?;
                Some(Observation {
                    section,
                    is_intersecting: entry.is_intersecting(),
                })
            })
            .collect();
        on_batch(batch);
    });

    let options = IntersectionObserverInit::new();
    options.set_root_margin(&band.root_margin());
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

    for section in SectionId::ALL {
        match dom::section_element(section) {
            Ok(element) => observer.observe(&element),
            Err(PageError::MissingSection(_)) => {
                log::debug!("Section #{} not rendered, not observing", section);
            }
            Err(e) => {
                observer.disconnect();
                return Err(e);
            }
        }
    }
    Ok((observer, callback))
}

/// The section currently in the focal band. Starts at the hero, is seeded
/// by measuring the layout on mount, then follows the intersection observer
/// until unmount.
#[hook]
pub fn use_active_section(band: FocalBand, threshold: f64) -> SectionId {
    let active = use_state_eq(SectionId::default);
    {
        let active = active.clone();
        use_effect_with_deps(
            move |(band, threshold): &(FocalBand, f64)| {
                let tracker = Rc::new(RefCell::new(SectionTracker::new()));

                match measure_sections(*band, *threshold) {
                    Ok(batch) => {
                        let mut tracker = tracker.borrow_mut();
                        if tracker.apply_batch(batch) {
                            active.set(tracker.active());
                        }
                    }
                    Err(e) => log::warn!("Failed to measure sections: {}", e),
                }

                let observed = observe_sections(*band, *threshold, {
                    let tracker = tracker.clone();
                    move |batch| {
                        let mut tracker = tracker.borrow_mut();
                        if tracker.apply_batch(batch) {
                            log::debug!("Active section is now #{}", tracker.active());
                            active.set(tracker.active());
                        }
                    }
                });
                let observed = match observed {
                    Ok(observed) => Some(observed),
                    Err(e) => {
                        log::warn!("Failed to observe sections: {}", e);
                        None
                    }
                };

                move || {
                    if let Some((observer, _callback)) = observed {
                        observer.disconnect();
                    }
                }
            },
            (band, threshold),
        );
    }
    *active
}

/// Scrolls to the section named by the location hash the page was opened
/// with. Unknown fragments are ignored.
#[hook]
pub fn use_initial_fragment(delay_ms: u32) {
    use_effect_with_deps(
        move |_| {
            let hash = dom::window().and_then(|window| Ok(window.location().hash()?));
            let pending = match hash {
                Ok(hash) => SectionId::from_fragment(&hash).map(|section| {
                    Timeout::new(delay_ms, move || {
                        if let Err(e) = navigation::scroll_to_section(section) {
                            log::debug!("Initial jump to #{} skipped: {}", section, e);
                        }
                    })
                }),
                Err(e) => {
                    log::warn!("Failed to read location hash: {}", e);
                    None
                }
            };
            move || drop(pending)
        },
        (),
    );
}
