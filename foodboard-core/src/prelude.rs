//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use foodboard_core::prelude::*;
//! ```

// === Dashboard state ===
pub use crate::dashboard::{Dashboard, DashboardView, SyncStatus};
pub use crate::modal::ModalCoordinator;
pub use crate::store::LocalStore;
pub use crate::sync::{LivenessHandle, Synchronizer};

// === Records ===
pub use crate::model::{merge, FoodId, FoodPlate, FoodPlateEdit, NewFoodPlate};

// === Gateways ===
pub use crate::gateway::{HttpGateway, InMemoryGateway, Operation, RemoteGateway};

// === Configuration ===
pub use crate::config::{ApiConfig, FoodboardConfig, LoggingConfig};

// === Errors ===
pub use crate::error::{GatewayError, GatewayResult, SyncError, SyncResult};
