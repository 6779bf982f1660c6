//! Staged downloads: a button goes Idle → Preparing, a one-shot timer fires
//! after a fixed delay, and the slot returns to Idle as the save is issued.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::error::PageError;

use super::slot::{DownloadSlot, DownloadTarget, SaveRequest, SlotPhase};

/// Arms one-shot delayed tasks.
pub trait Scheduler {
    type Handle: 'static;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Hands a save request to whatever performs it.
pub trait FileSaver {
    fn save(&self, request: &SaveRequest) -> Result<(), PageError>;
}

/// Phase of both slots, as rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlotStates {
    pub mobile: SlotPhase,
    pub desktop: SlotPhase,
}

impl SlotStates {
    pub fn phase(&self, target: DownloadTarget) -> SlotPhase {
        match target {
            DownloadTarget::Mobile => self.mobile,
            DownloadTarget::Desktop => self.desktop,
        }
    }
}

struct Shared<S: Scheduler, F> {
    scheduler: S,
    saver: F,
    delay_ms: u32,
    slots: RefCell<[DownloadSlot<S::Handle>; 2]>,
    on_change: Box<dyn Fn(SlotStates)>,
}

impl<S: Scheduler, F: FileSaver> Shared<S, F> {
    fn states(&self) -> SlotStates {
        let slots = self.slots.borrow();
        SlotStates {
            mobile: slots[DownloadTarget::Mobile.index()].phase(),
            desktop: slots[DownloadTarget::Desktop.index()].phase(),
        }
    }

    fn finish(&self, target: DownloadTarget) {
        let request = self.slots.borrow_mut()[target.index()].complete();
        let Some(request) = request else {
            return;
        };
        match self.saver.save(&request) {
            Ok(()) => log::info!("Started download for {}", target),
            Err(e) => log::warn!("Failed to start download for {}: {}", target, e),
        }
        (self.on_change)(self.states());
    }
}

/// Both download slots together with the scheduler and saver driving them.
///
/// Cloning yields another handle to the same slots. Timers that fire after
/// every handle is gone do nothing.
pub struct StagedDownloads<S: Scheduler, F> {
    shared: Rc<Shared<S, F>>,
}

impl<S: Scheduler, F> Clone for StagedDownloads<S, F> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<S, F> StagedDownloads<S, F>
where
    S: Scheduler + 'static,
    F: FileSaver + 'static,
{
    pub fn new(
        scheduler: S,
        saver: F,
        delay_ms: u32,
        on_change: impl Fn(SlotStates) + 'static,
    ) -> Self {
        Self {
            shared: Rc::new(Shared {
                scheduler,
                saver,
                delay_ms,
                slots: RefCell::new([
                    DownloadSlot::new(DownloadTarget::Mobile),
                    DownloadSlot::new(DownloadTarget::Desktop),
                ]),
                on_change: Box::new(on_change),
            }),
        }
    }

    pub fn states(&self) -> SlotStates {
        self.shared.states()
    }

    /// Starts the staged download for `target`. Returns `false`, arming no
    /// timer, when that slot is already preparing.
    pub fn trigger(&self, target: DownloadTarget) -> bool {
        let weak: Weak<Shared<S, F>> = Rc::downgrade(&self.shared);
        let shared = &self.shared;
        let started = shared.slots.borrow_mut()[target.index()].begin(|| {
            shared.scheduler.schedule(
                shared.delay_ms,
                Box::new(move || {
                    if let Some(shared) = weak.upgrade() {
                        shared.finish(target);
                    }
                }),
            )
        });
        if started {
            log::debug!("Preparing {} download", target);
            (shared.on_change)(shared.states());
        }
        started
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    struct Pending {
        due: u64,
        task: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct ClockState {
        now: u64,
        armed: usize,
        queue: Vec<Pending>,
    }

    /// A scheduler whose time only moves when told to.
    #[derive(Clone, Default)]
    pub struct ManualClock {
        state: Rc<RefCell<ClockState>>,
    }

    impl ManualClock {
        pub fn armed(&self) -> usize {
            self.state.borrow().armed
        }

        pub fn advance(&self, ms: u64) {
            let now = {
                let mut state = self.state.borrow_mut();
                state.now += ms;
                state.now
            };
            loop {
                let next = {
                    let mut state = self.state.borrow_mut();
                    let due = state.queue.iter().position(|p| p.due <= now);
                    due.map(|i| state.queue.remove(i))
                };
                match next {
                    Some(pending) => (pending.task)(),
                    None => break,
                }
            }
        }
    }

    impl Scheduler for ManualClock {
        type Handle = usize;

        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> usize {
            let mut state = self.state.borrow_mut();
            let due = state.now + delay_ms as u64;
            state.queue.push(Pending { due, task });
            state.armed += 1;
            state.armed
        }
    }

    /// Records every save instead of performing it.
    #[derive(Clone, Default)]
    pub struct RecordingSaver {
        pub saved: Rc<RefCell<Vec<SaveRequest>>>,
        pub fail: bool,
    }

    impl FileSaver for RecordingSaver {
        fn save(&self, request: &SaveRequest) -> Result<(), PageError> {
            self.saved.borrow_mut().push(*request);
            if self.fail {
                Err(PageError::NoBody)
            } else {
                Ok(())
            }
        }
    }
}
