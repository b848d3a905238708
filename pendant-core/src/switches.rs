//! Debounced scanning of mutually-exclusive selector switch groups.
//!
//! A [`SwitchGroup`] owns a small fixed bank of selector lines and is scanned
//! once per scheduler tick. Each line doubles as its own indicator, so every
//! scan runs in two phases: drive all configured lines low, sense them, then
//! re-drive only the selected line high.
//!
//! Debounce is edge-based: a reading is acted on only when it differs from
//! the stored toggle value. Selection is exclusive with toggle-off semantics:
//! activating a member replaces the previous selection, activating the
//! current member clears the group.
//!
//! The scanner publishes into a [`SelectionCell`] so a main loop running
//! concurrently with the scan tick reads the selection through the same
//! single-writer/single-reader discipline as the encoder handoff.

use portable_atomic::{AtomicBool, AtomicU8, Ordering};

use crate::input::SelectorLine;
use crate::types::GroupMember;

/// Wire value for "no member selected".
const NO_SELECTION: u8 = u8::MAX;

/// Shared selection state between a scan tick and the main loop.
///
/// Written only by the owning [`SwitchGroup`], read only by the main-loop
/// pass. The selection index is published with `Release` ordering before the
/// changed flag.
pub struct SelectionCell {
    selected: AtomicU8,
    changed: AtomicBool,
}

impl SelectionCell {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            selected: AtomicU8::new(NO_SELECTION),
            changed: AtomicBool::new(false),
        }
    }

    fn publish(&self, selected: Option<u8>) {
        self.selected
            .store(selected.unwrap_or(NO_SELECTION), Ordering::Release);
        self.changed.store(true, Ordering::Release);
    }

    /// The currently selected member index, `None` when the group is clear.
    #[must_use]
    pub fn selected_index(&self) -> Option<u8> {
        match self.selected.load(Ordering::Acquire) {
            NO_SELECTION => None,
            index => Some(index),
        }
    }

    /// The currently selected member, typed.
    #[must_use]
    pub fn selected<M: GroupMember>(&self) -> Option<M> {
        self.selected_index().and_then(M::from_index)
    }

    /// Consume the changed marker, returning whether a change was pending.
    pub fn take_changed(&self) -> bool {
        self.changed.swap(false, Ordering::Acquire)
    }
}

impl Default for SelectionCell {
    fn default() -> Self {
        Self::new()
    }
}

/// A bank of up to `N` debounced, mutually-exclusive selector lines.
///
/// Lines that are unconfigured or reported disconnected at startup are
/// simply absent (`None`): they are skipped on every scan and the member can
/// never become the selection. That is reduced capability, not an error.
pub struct SwitchGroup<L, const N: usize> {
    lines: [Option<L>; N],
    toggles: [bool; N],
    selected: Option<u8>,
}

impl<L: SelectorLine, const N: usize> SwitchGroup<L, N> {
    #[must_use]
    pub fn new(lines: [Option<L>; N]) -> Self {
        Self {
            lines,
            // First scan of an idle line syncs the toggle without selecting.
            toggles: [true; N],
            selected: None,
        }
    }

    /// Scan all configured lines once and publish any selection change.
    ///
    /// Returns whether the selection changed during this scan.
    pub fn scan(&mut self, cell: &SelectionCell) -> bool {
        let mut changed = false;

        for (index, slot) in self.lines.iter_mut().enumerate() {
            let Some(line) = slot else { continue };

            // Indicator off so the shared line can be sensed
            line.drive(false);

            let sensed = line.sense();
            if sensed != self.toggles[index] {
                self.toggles[index] = sensed;

                if sensed {
                    let index = index as u8;
                    self.selected = if self.selected == Some(index) {
                        None
                    } else {
                        Some(index)
                    };
                    changed = true;
                }
            }
        }

        // Indicator on for the selected member only
        if let Some(selected) = self.selected {
            if let Some(line) = &mut self.lines[selected as usize] {
                line.drive(true);
            }
        }

        if changed {
            cell.publish(self.selected);
        }

        changed
    }

    /// The scanner-local view of the selection.
    #[must_use]
    pub fn selected(&self) -> Option<u8> {
        self.selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Selector line mock recording the last driven level.
    struct MockLine {
        sensed: bool,
        driven: bool,
    }

    impl MockLine {
        fn new() -> Self {
            Self {
                sensed: false,
                driven: false,
            }
        }
    }

    impl SelectorLine for &mut MockLine {
        fn drive(&mut self, level: bool) {
            self.driven = level;
        }

        fn sense(&mut self) -> bool {
            self.sensed
        }
    }

    fn settle<L: SelectorLine, const N: usize>(group: &mut SwitchGroup<L, N>, cell: &SelectionCell) {
        // Initial scan flips the idle toggles into sync
        group.scan(cell);
        cell.take_changed();
    }

    #[test]
    fn test_press_selects_and_repress_clears() {
        let mut a = MockLine::new();
        let mut b = MockLine::new();
        let mut c = MockLine::new();
        let cell = SelectionCell::new();
        let mut group = SwitchGroup::new([Some(&mut a), Some(&mut b), Some(&mut c)]);
        settle(&mut group, &cell);

        group.lines[1].as_mut().unwrap().sensed = true;
        assert!(group.scan(&cell));
        assert_eq!(cell.selected_index(), Some(1));
        assert!(cell.take_changed());

        // Release then press again: toggle-off clears the group
        group.lines[1].as_mut().unwrap().sensed = false;
        assert!(!group.scan(&cell));
        group.lines[1].as_mut().unwrap().sensed = true;
        assert!(group.scan(&cell));
        assert_eq!(cell.selected_index(), None);
        assert!(cell.take_changed());
    }

    #[test]
    fn test_selection_is_exclusive() {
        let mut a = MockLine::new();
        let mut b = MockLine::new();
        let cell = SelectionCell::new();
        let mut group: SwitchGroup<_, 2> = SwitchGroup::new([Some(&mut a), Some(&mut b)]);
        settle(&mut group, &cell);

        group.lines[0].as_mut().unwrap().sensed = true;
        group.scan(&cell);
        assert_eq!(cell.selected_index(), Some(0));

        // Activating another member replaces the selection
        group.lines[1].as_mut().unwrap().sensed = true;
        group.scan(&cell);
        assert_eq!(cell.selected_index(), Some(1));
    }

    #[test]
    fn test_scan_is_idempotent_without_input_change() {
        let mut a = MockLine::new();
        let cell = SelectionCell::new();
        let mut group: SwitchGroup<_, 1> = SwitchGroup::new([Some(&mut a)]);
        settle(&mut group, &cell);

        group.lines[0].as_mut().unwrap().sensed = true;
        assert!(group.scan(&cell));
        assert!(cell.take_changed());

        // Held switch, no physical change: no flag, no change
        assert!(!group.scan(&cell));
        assert!(!cell.take_changed());
    }

    #[test]
    fn test_absent_line_is_never_selectable() {
        let mut b = MockLine::new();
        let cell = SelectionCell::new();
        let mut group: SwitchGroup<&mut MockLine, 2> = SwitchGroup::new([None, Some(&mut b)]);
        settle(&mut group, &cell);

        group.lines[1].as_mut().unwrap().sensed = true;
        group.scan(&cell);
        assert_eq!(cell.selected_index(), Some(1));
        assert_eq!(group.selected(), Some(1));
    }

    #[test]
    fn test_indicator_follows_selection() {
        let mut a = MockLine::new();
        let mut b = MockLine::new();
        let cell = SelectionCell::new();

        {
            let mut group: SwitchGroup<_, 2> = SwitchGroup::new([Some(&mut a), Some(&mut b)]);
            settle(&mut group, &cell);

            group.lines[0].as_mut().unwrap().sensed = true;
            group.scan(&cell);
        }

        // Selected line driven high after the scan, the other left low
        assert!(a.driven);
        assert!(!b.driven);
    }
}
