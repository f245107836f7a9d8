//! Synchronizer: gateway calls first, store mutation on success
//!
//! Every mutating action awaits the remote call before touching the
//! [`LocalStore`]. A failed call is logged and returned; the store keeps its
//! previous content, so local and remote state never diverge on error.
//!
//! A response that arrives after the owning view was unmounted is dropped
//! (see [`LivenessHandle`]).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{GatewayError, SyncError, SyncResult};
use crate::gateway::RemoteGateway;
use crate::model::{merge, FoodId, FoodPlate, FoodPlateEdit, NewFoodPlate};
use crate::store::LocalStore;

/// Mounted flag shared between a view and whoever may tear it down
#[derive(Debug, Clone)]
pub struct LivenessHandle {
    mounted: Arc<AtomicBool>,
}

impl Default for LivenessHandle {
    fn default() -> Self {
        Self { mounted: Arc::new(AtomicBool::new(true)) }
    }
}

impl LivenessHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Acquire)
    }

    /// Responses still in flight will be discarded
    pub fn unmount(&self) {
        self.mounted.store(false, Ordering::Release);
    }
}

/// Ties gateway calls to store mutations
pub struct Synchronizer<G: ?Sized> {
    gateway: Arc<G>,
    liveness: LivenessHandle,
}

impl<G: RemoteGateway + ?Sized> Synchronizer<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway, liveness: LivenessHandle::new() }
    }

    pub fn liveness(&self) -> &LivenessHandle {
        &self.liveness
    }

    /// Checked after every await, before the store is touched
    fn ensure_mounted(&self, action: &str) -> SyncResult<()> {
        if self.liveness.is_mounted() {
            Ok(())
        } else {
            log::debug!("Dropping {} response: dashboard unmounted", action);
            Err(SyncError::Unmounted)
        }
    }

    fn failed(action: &str, err: GatewayError) -> SyncError {
        log::warn!("{} failed: {}", action, err);
        SyncError::Gateway(err)
    }

    /// Initial load: fetch everything and replace the store
    pub async fn load(&self, store: &mut LocalStore) -> SyncResult<usize> {
        let foods = self.gateway.list().await.map_err(|e| Self::failed("Load", e))?;
        self.ensure_mounted("load")?;

        let count = foods.len();
        store.replace_all(foods);
        log::info!("Loaded {} food plates", count);
        Ok(count)
    }

    /// Create remotely, then append the server's record
    pub async fn add(&self, store: &mut LocalStore, food: NewFoodPlate) -> SyncResult<FoodPlate> {
        let created = self.gateway.create(&food).await.map_err(|e| Self::failed("Add", e))?;
        self.ensure_mounted("add")?;

        store.append(created.clone());
        log::info!("Added food plate {} ({})", created.id, created.name);
        Ok(created)
    }

    /// Merge `edit` onto `target`, push the full record, then store it
    pub async fn update(
        &self,
        store: &mut LocalStore,
        target: &FoodPlate,
        edit: &FoodPlateEdit,
    ) -> SyncResult<FoodPlate> {
        let updated = merge(target, edit);
        self.gateway.update(updated.id, &updated).await.map_err(|e| Self::failed("Update", e))?;
        self.ensure_mounted("update")?;

        if !store.update_by_id(updated.id, updated.clone()) {
            log::debug!("Food plate {} updated remotely but not in the local list", updated.id);
        }
        log::info!("Updated food plate {}", updated.id);
        Ok(updated)
    }

    /// Flip `available` for `id` through the update path
    pub async fn toggle_available(
        &self,
        store: &mut LocalStore,
        id: FoodId,
    ) -> SyncResult<FoodPlate> {
        let target = store.get(id).cloned().ok_or(SyncError::UnknownFood(id))?;
        let edit = FoodPlateEdit::availability(!target.available);
        self.update(store, &target, &edit).await
    }

    /// Delete remotely, then drop `id` from the store.
    ///
    /// A 404 means the record is already gone server-side; the local copy is
    /// removed as for a success.
    pub async fn delete(&self, store: &mut LocalStore, id: FoodId) -> SyncResult<()> {
        match self.gateway.delete_by_id(id).await {
            Ok(()) => {}
            Err(err) if err.status() == Some(404) => {
                log::info!("Food plate {} already deleted remotely", id);
            }
            Err(err) => return Err(Self::failed("Delete", err)),
        }
        self.ensure_mounted("delete")?;

        store.remove_by_id(id);
        log::info!("Deleted food plate {}", id);
        Ok(())
    }
}
