//! Which overlay is open, and the page scroll lock that goes with it.

use std::fmt;

use crate::content::{FactPopup, Project};

/// Process-wide page scrolling switch.
///
/// Only [`ScrollLockGuard`] should call these; holding a guard is what it means for the
/// page to be locked.
pub trait ScrollLock {
    fn engage(&self);
    fn release(&self);
}

/// Engages a scroll lock for as long as it lives.
pub struct ScrollLockGuard<L: ScrollLock> {
    lock: L,
}

impl<L: ScrollLock> ScrollLockGuard<L> {
    pub fn acquire(lock: L) -> Self {
        lock.engage();
        ScrollLockGuard { lock }
    }
}

impl<L: ScrollLock> Drop for ScrollLockGuard<L> {
    fn drop(&mut self) {
        self.lock.release();
    }
}

impl<L: ScrollLock> fmt::Debug for ScrollLockGuard<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ScrollLockGuard")
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Overlay {
    #[default]
    None,
    Fact(FactPopup),
    Project(Project),
}

/// Keeps at most one overlay open and holds the scroll lock while a project panel is.
///
/// Dropping the coordinator releases the lock, so tearing down the page can never
/// leave it unscrollable.
#[derive(Debug)]
pub struct OverlayCoordinator<L: ScrollLock + Clone> {
    lock: L,
    overlay: Overlay,
    guard: Option<ScrollLockGuard<L>>,
}

impl<L: ScrollLock + Clone> OverlayCoordinator<L> {
    pub fn new(lock: L) -> Self {
        OverlayCoordinator {
            lock,
            overlay: Overlay::None,
            guard: None,
        }
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn fact(&self) -> Option<&FactPopup> {
        match &self.overlay {
            Overlay::Fact(popup) => Some(popup),
            _ => None,
        }
    }

    pub fn project(&self) -> Option<&Project> {
        match &self.overlay {
            Overlay::Project(project) => Some(project),
            _ => None,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.guard.is_some()
    }

    pub fn open_fact(&mut self, popup: FactPopup) {
        log::debug!("opening fact popup: {}", popup.caption);
        self.guard = None;
        self.overlay = Overlay::Fact(popup);
    }

    pub fn open_project(&mut self, project: Project) {
        log::debug!("opening project panel: {}", project.title);
        if self.guard.is_none() {
            self.guard = Some(ScrollLockGuard::acquire(self.lock.clone()));
        }
        self.overlay = Overlay::Project(project);
    }

    pub fn close(&mut self) {
        if self.overlay != Overlay::None {
            log::debug!("closing overlay");
        }
        self.guard = None;
        self.overlay = Overlay::None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Arc,
    };

    use crate::content::SITE_CONTENT;

    #[derive(Debug, Clone, Default)]
    struct FlagLock {
        locked: Arc<AtomicBool>,
        engaged: Arc<AtomicUsize>,
    }

    impl FlagLock {
        fn is_locked(&self) -> bool {
            self.locked.load(Ordering::SeqCst)
        }

        fn times_engaged(&self) -> usize {
            self.engaged.load(Ordering::SeqCst)
        }
    }

    impl ScrollLock for FlagLock {
        fn engage(&self) {
            self.engaged.fetch_add(1, Ordering::SeqCst);
            self.locked.store(true, Ordering::SeqCst);
        }

        fn release(&self) {
            self.locked.store(false, Ordering::SeqCst);
        }
    }

    fn project(i: usize) -> Project {
        SITE_CONTENT.projects[i].clone()
    }

    fn popup(i: usize) -> FactPopup {
        SITE_CONTENT.facts[i].popup.clone()
    }

    #[test]
    fn test_project_panel_locks_and_backdrop_close_releases() {
        let lock = FlagLock::default();
        let mut overlays = OverlayCoordinator::new(lock.clone());
        assert!(!lock.is_locked());

        overlays.open_project(project(0));
        assert!(lock.is_locked());
        assert_eq!(overlays.project(), Some(&project(0)));

        overlays.close();
        assert!(!lock.is_locked());
        assert_eq!(overlays.overlay(), &Overlay::None);
    }

    #[test]
    fn test_immediate_close_releases() {
        let lock = FlagLock::default();
        let mut overlays = OverlayCoordinator::new(lock.clone());
        for _ in 0..3 {
            overlays.open_project(project(1));
            overlays.close();
        }
        assert!(!lock.is_locked());
        assert!(!overlays.is_locked());
    }

    #[test]
    fn test_opening_one_overlay_clears_the_other() {
        let lock = FlagLock::default();
        let mut overlays = OverlayCoordinator::new(lock.clone());

        overlays.open_project(project(0));
        overlays.open_fact(popup(0));
        assert!(overlays.project().is_none());
        assert_eq!(overlays.fact(), Some(&popup(0)));
        assert!(!lock.is_locked());

        overlays.open_project(project(2));
        assert!(overlays.fact().is_none());
        assert!(lock.is_locked());
    }

    #[test]
    fn test_fact_popup_does_not_lock() {
        let lock = FlagLock::default();
        let mut overlays = OverlayCoordinator::new(lock.clone());
        overlays.open_fact(popup(1));
        assert!(!lock.is_locked());
        overlays.close();
        assert!(overlays.fact().is_none());
    }

    #[test]
    fn test_switching_projects_keeps_single_lock() {
        let lock = FlagLock::default();
        let mut overlays = OverlayCoordinator::new(lock.clone());
        overlays.open_project(project(0));
        overlays.open_project(project(1));
        assert_eq!(lock.times_engaged(), 1);
        assert_eq!(overlays.project(), Some(&project(1)));
        assert!(lock.is_locked());
    }

    #[test]
    fn test_drop_releases_lock() {
        let lock = FlagLock::default();
        {
            let mut overlays = OverlayCoordinator::new(lock.clone());
            overlays.open_project(project(3));
            assert!(lock.is_locked());
        }
        assert!(!lock.is_locked());
    }
}
