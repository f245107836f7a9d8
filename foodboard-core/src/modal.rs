//! Modal coordinator: create/edit visibility and the editing target

use serde::Serialize;

use crate::model::FoodPlate;

/// Two independent visibility flags plus the record being edited.
///
/// Nothing ties the flags together; both modals can be open at once if both
/// affordances fire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModalCoordinator {
    create_open: bool,
    edit_open: bool,
    editing: Option<FoodPlate>,
}

impl ModalCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_create_open(&self) -> bool {
        self.create_open
    }

    pub fn is_edit_open(&self) -> bool {
        self.edit_open
    }

    pub fn editing(&self) -> Option<&FoodPlate> {
        self.editing.as_ref()
    }

    pub fn open_create(&mut self) {
        self.create_open = true;
    }

    pub fn close_create(&mut self) {
        self.create_open = false;
    }

    pub fn toggle_create(&mut self) {
        self.create_open = !self.create_open;
    }

    pub fn open_edit(&mut self) {
        self.edit_open = true;
    }

    /// Hides the edit modal. The editing target stays until replaced or cleared.
    pub fn close_edit(&mut self) {
        self.edit_open = false;
    }

    pub fn toggle_edit(&mut self) {
        self.edit_open = !self.edit_open;
    }

    /// Set the editing target and open the edit modal in one step
    pub fn select_for_edit(&mut self, food: FoodPlate) {
        self.editing = Some(food);
        self.edit_open = true;
    }

    /// Replace the editing target without touching visibility
    pub(crate) fn refresh_editing(&mut self, food: FoodPlate) {
        self.editing = Some(food);
    }

    pub fn clear_editing(&mut self) {
        self.editing = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewFoodPlate;

    #[test]
    fn test_initial_state() {
        let modals = ModalCoordinator::new();
        assert!(!modals.is_create_open());
        assert!(!modals.is_edit_open());
        assert!(modals.editing().is_none());
    }

    #[test]
    fn test_select_for_edit_leaves_create_alone() {
        let mut modals = ModalCoordinator::new();
        let food = NewFoodPlate::new("Ramen", "r.png", "25.00", "Broth").into_plate(2);

        modals.select_for_edit(food.clone());

        assert!(modals.is_edit_open());
        assert!(!modals.is_create_open());
        assert_eq!(modals.editing(), Some(&food));
    }

    #[test]
    fn test_flags_are_independent() {
        let mut modals = ModalCoordinator::new();
        modals.toggle_create();
        modals.open_edit();
        assert!(modals.is_create_open() && modals.is_edit_open());

        modals.close_create();
        assert!(!modals.is_create_open());
        assert!(modals.is_edit_open());

        modals.toggle_edit();
        assert!(!modals.is_edit_open());
    }

    #[test]
    fn test_close_edit_keeps_target() {
        let mut modals = ModalCoordinator::new();
        modals.select_for_edit(NewFoodPlate::new("a", "a", "1", "a").into_plate(1));

        modals.close_edit();
        assert!(modals.editing().is_some());

        modals.clear_editing();
        assert!(modals.editing().is_none());
    }
}
