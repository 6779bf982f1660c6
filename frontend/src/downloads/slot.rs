use std::fmt;

/// The two packages the page hands out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DownloadTarget {
    Mobile,
    Desktop,
}

/// What the browser is asked to save: a static path and the file name to
/// suggest for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveRequest {
    pub source: &'static str,
    pub filename: &'static str,
}

impl DownloadTarget {
    pub const ALL: [DownloadTarget; 2] = [DownloadTarget::Mobile, DownloadTarget::Desktop];

    pub fn name(self) -> &'static str {
        match self {
            DownloadTarget::Mobile => "mobile",
            DownloadTarget::Desktop => "desktop",
        }
    }

    pub fn save_request(self) -> SaveRequest {
        match self {
            DownloadTarget::Mobile => SaveRequest {
                source: "/downloads/app-release.apk",
                filename: "BharatScan_Mobile.apk",
            },
            DownloadTarget::Desktop => SaveRequest {
                source: "/downloads/BharatScan_Admin.exe",
                filename: "BharatScan_Windows_Setup.exe",
            },
        }
    }

    pub fn idle_label(self) -> &'static str {
        match self {
            DownloadTarget::Mobile => "Download APK",
            DownloadTarget::Desktop => "Download (.exe)",
        }
    }

    pub fn pending_label(self) -> &'static str {
        match self {
            DownloadTarget::Mobile => "Preparing...",
            DownloadTarget::Desktop => "Initialising...",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            DownloadTarget::Mobile => 0,
            DownloadTarget::Desktop => 1,
        }
    }
}

impl fmt::Display for DownloadTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlotPhase {
    #[default]
    Idle,
    Preparing,
}

/// One download button's state: the pending flag plus the handle of the
/// timer armed for it.
///
/// The spent handle stays with the slot after completion and is replaced
/// on the next invocation.
#[derive(Debug)]
pub struct DownloadSlot<H> {
    target: DownloadTarget,
    pending: bool,
    timer: Option<H>,
}

impl<H> DownloadSlot<H> {
    pub fn new(target: DownloadTarget) -> Self {
        Self {
            target,
            pending: false,
            timer: None,
        }
    }

    pub fn target(&self) -> DownloadTarget {
        self.target
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn phase(&self) -> SlotPhase {
        if self.pending {
            SlotPhase::Preparing
        } else {
            SlotPhase::Idle
        }
    }

    /// Moves to Preparing and keeps the handle `arm` returns. Does nothing,
    /// and never calls `arm`, while already pending.
    pub fn begin(&mut self, arm: impl FnOnce() -> H) -> bool {
        if self.pending {
            return false;
        }
        self.timer = Some(arm());
        self.pending = true;
        true
    }

    /// Moves back to Idle and yields the save to perform. `None` when the
    /// slot was not pending.
    pub fn complete(&mut self) -> Option<SaveRequest> {
        if !self.pending {
            return None;
        }
        self.pending = false;
        Some(self.target.save_request())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_sources_and_names() {
        assert_eq!(
            DownloadTarget::Mobile.save_request(),
            SaveRequest {
                source: "/downloads/app-release.apk",
                filename: "BharatScan_Mobile.apk",
            }
        );
        assert_eq!(
            DownloadTarget::Desktop.save_request(),
            SaveRequest {
                source: "/downloads/BharatScan_Admin.exe",
                filename: "BharatScan_Windows_Setup.exe",
            }
        );
    }

    #[test]
    fn starts_idle() {
        let slot: DownloadSlot<()> = DownloadSlot::new(DownloadTarget::Desktop);
        assert_eq!(slot.phase(), SlotPhase::Idle);
        assert!(!slot.is_pending());
        assert_eq!(slot.target(), DownloadTarget::Desktop);
    }

    #[test]
    fn begin_is_refused_while_pending() {
        let mut slot = DownloadSlot::new(DownloadTarget::Mobile);
        let mut armed = 0;
        assert!(slot.begin(|| armed += 1));
        assert!(!slot.begin(|| armed += 1));
        assert_eq!(armed, 1);
        assert_eq!(slot.phase(), SlotPhase::Preparing);
    }

    #[test]
    fn complete_only_once_per_begin() {
        let mut slot = DownloadSlot::new(DownloadTarget::Mobile);
        assert_eq!(slot.complete(), None);
        slot.begin(|| ());
        assert_eq!(slot.complete(), Some(DownloadTarget::Mobile.save_request()));
        assert_eq!(slot.complete(), None);
        assert_eq!(slot.phase(), SlotPhase::Idle);
        assert!(slot.begin(|| ()));
    }
}
