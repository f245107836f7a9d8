//! Dashboard: the owning state struct for the food-plate view
//!
//! A [`Dashboard`] owns the local store, the modal coordinator and the
//! synchronizer. Presentational collaborators (header, modal forms, list
//! items) read [`DashboardView`] snapshots and call the action methods;
//! nothing else holds mutable access to the state.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use foodboard_core::prelude::*;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let gateway = Arc::new(HttpGateway::new(&ApiConfig::default())?);
//! let mut dashboard = Dashboard::new(gateway);
//! dashboard.mount().await?;
//! dashboard.add_food(NewFoodPlate::new("Pizza", "x.png", "30.00", "Cheesy")).await?;
//! println!("{} plates", dashboard.view().foods.len());
//! # Ok(())
//! # }
//! ```

use serde::Serialize;
use std::sync::Arc;

use crate::error::{SyncError, SyncResult};
use crate::gateway::RemoteGateway;
use crate::modal::ModalCoordinator;
use crate::model::{FoodId, FoodPlate, FoodPlateEdit, NewFoodPlate};
use crate::store::LocalStore;
use crate::sync::{LivenessHandle, Synchronizer};

/// Load state shown to the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SyncStatus {
    /// Not mounted yet
    #[default]
    Idle,
    Loading,
    Ready { count: usize },
    LoadFailed { message: String },
}

/// Read-only snapshot handed to presentational collaborators
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub foods: Vec<FoodPlate>,
    pub create_modal_open: bool,
    pub edit_modal_open: bool,
    pub editing: Option<FoodPlate>,
    pub status: SyncStatus,
    /// Last failed action, cleared by the next successful one
    pub last_error: Option<String>,
}

/// Top-level food-plate view state
pub struct Dashboard<G: ?Sized> {
    store: LocalStore,
    modals: ModalCoordinator,
    sync: Synchronizer<G>,
    status: SyncStatus,
    last_error: Option<String>,
}

impl<G: RemoteGateway + ?Sized> Dashboard<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            store: LocalStore::new(),
            modals: ModalCoordinator::new(),
            sync: Synchronizer::new(gateway),
            status: SyncStatus::Idle,
            last_error: None,
        }
    }

    pub fn view(&self) -> DashboardView {
        DashboardView {
            foods: self.store.snapshot(),
            create_modal_open: self.modals.is_create_open(),
            edit_modal_open: self.modals.is_edit_open(),
            editing: self.modals.editing().cloned(),
            status: self.status.clone(),
            last_error: self.last_error.clone(),
        }
    }

    pub fn store(&self) -> &LocalStore {
        &self.store
    }

    pub fn modals(&self) -> &ModalCoordinator {
        &self.modals
    }

    pub fn status(&self) -> &SyncStatus {
        &self.status
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Handle that can tear the dashboard down from elsewhere
    pub fn handle(&self) -> LivenessHandle {
        self.sync.liveness().clone()
    }

    pub fn is_mounted(&self) -> bool {
        self.sync.liveness().is_mounted()
    }

    pub fn unmount(&self) {
        self.sync.liveness().unmount();
    }

    /// Record the outcome of an action for the view
    fn settle<T>(&mut self, result: SyncResult<T>) -> SyncResult<T> {
        match &result {
            Ok(_) => self.last_error = None,
            // Nobody is left to show it
            Err(SyncError::Unmounted) => {}
            Err(err) => self.last_error = Some(err.to_string()),
        }
        result
    }

    /// Initial load. A failure is kept in the status as well as returned.
    pub async fn mount(&mut self) -> SyncResult<usize> {
        self.status = SyncStatus::Loading;
        let result = self.sync.load(&mut self.store).await;
        match &result {
            Ok(count) => self.status = SyncStatus::Ready { count: *count },
            Err(SyncError::Unmounted) => self.status = SyncStatus::Idle,
            Err(err) => {
                log::error!("Initial load failed: {}", err);
                self.status = SyncStatus::LoadFailed { message: err.to_string() };
            }
        }
        self.settle(result)
    }

    /// Create a plate; closes the create modal on success
    pub async fn add_food(&mut self, food: NewFoodPlate) -> SyncResult<FoodPlate> {
        let result = self.sync.add(&mut self.store, food).await;
        if result.is_ok() {
            self.modals.close_create();
        }
        self.settle(result)
    }

    /// Submit the edit modal: `edit` is merged onto the editing target.
    ///
    /// The target is re-read from the store so changes made since selection
    /// (e.g. a toggle) are kept; the selected snapshot is only used when the
    /// record is no longer listed.
    pub async fn update_food(&mut self, edit: FoodPlateEdit) -> SyncResult<FoodPlate> {
        let target = self
            .modals
            .editing()
            .map(|selected| self.store.get(selected.id).unwrap_or(selected).clone());
        let result = match target {
            Some(target) => self.sync.update(&mut self.store, &target, &edit).await,
            None => Err(SyncError::NoEditingTarget),
        };
        if let Ok(updated) = &result {
            self.modals.refresh_editing(updated.clone());
            self.modals.close_edit();
        }
        self.settle(result)
    }

    pub async fn toggle_available(&mut self, id: FoodId) -> SyncResult<FoodPlate> {
        let result = self.sync.toggle_available(&mut self.store, id).await;
        if let Ok(updated) = &result {
            if self.modals.editing().is_some_and(|f| f.id == updated.id) {
                self.modals.refresh_editing(updated.clone());
            }
        }
        self.settle(result)
    }

    pub async fn delete_food(&mut self, id: FoodId) -> SyncResult<()> {
        let result = self.sync.delete(&mut self.store, id).await;
        self.settle(result)
    }

    /// Load `id` into the edit modal and open it
    pub fn select_for_edit(&mut self, id: FoodId) -> SyncResult<()> {
        let food = self.store.get(id).cloned().ok_or(SyncError::UnknownFood(id));
        let result = food.map(|food| self.modals.select_for_edit(food));
        self.settle(result)
    }

    pub fn open_create(&mut self) {
        self.modals.open_create();
    }

    pub fn close_create(&mut self) {
        self.modals.close_create();
    }

    pub fn toggle_create(&mut self) {
        self.modals.toggle_create();
    }

    pub fn close_edit(&mut self) {
        self.modals.close_edit();
    }

    pub fn toggle_edit(&mut self) {
        self.modals.toggle_edit();
    }
}
