//! Vehicle selection state
//!
//! Two states: nothing selected, or exactly one vehicle selected. Clicking a
//! marker always moves to `Selected(that id)`; re-clicking the selected
//! vehicle is not distinguished from selecting it. No deselect transition is
//! defined in this prototype (clicking empty map space changes nothing).

use logix_types::VehicleId;

/// Which vehicle, if any, is currently selected on the map
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<VehicleId>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a vehicle. The only transition this state machine has.
    pub fn select(&mut self, id: VehicleId) {
        self.selected = Some(id);
    }

    pub fn selected(&self) -> Option<VehicleId> {
        self.selected
    }

    /// Whether the given vehicle should render selection emphasis
    pub fn is_selected(&self, id: VehicleId) -> bool {
        self.selected == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unselected() {
        let state = SelectionState::new();
        assert_eq!(state.selected(), None);
        assert!(!state.is_selected(VehicleId(101)));
    }

    #[test]
    fn test_select_replaces_previous() {
        let mut state = SelectionState::new();
        state.select(VehicleId(101));
        state.select(VehicleId(102));
        assert_eq!(state.selected(), Some(VehicleId(102)));
        assert!(!state.is_selected(VehicleId(101)));
        assert!(state.is_selected(VehicleId(102)));
    }

    #[test]
    fn test_reselect_same_vehicle_is_noop() {
        let mut state = SelectionState::new();
        state.select(VehicleId(103));
        let before = state;
        state.select(VehicleId(103));
        assert_eq!(state, before);
    }
}
