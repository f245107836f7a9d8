//! Foodboard - Core
//!
//! State and synchronization logic behind a food-plate dashboard: a local,
//! ordered list of plates kept in step with a remote REST collection
//! (`/foods`).
//!
//! # Architecture
//!
//! - [`model`] - `FoodPlate`, create/edit payloads and the edit merge rule
//! - [`store`] - the local list the view renders
//! - [`gateway`] - `RemoteGateway` trait, HTTP (reqwest) and in-memory backends
//! - [`sync`] - remote call first, local mutation on success
//! - [`modal`] - create/edit modal visibility and the editing target
//! - [`dashboard`] - owning state struct and read-only view snapshots
//! - [`config`] - layered TOML/env configuration
//! - [`logging`] - `log` + `env_logger` bootstrap
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use foodboard_core::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = FoodboardConfig::load()?;
//!     foodboard_core::logging::init_logging(&config.logging);
//!
//!     let mut dashboard = Dashboard::new(Arc::new(HttpGateway::new(&config.api)?));
//!     dashboard.mount().await?;
//!     for food in dashboard.view().foods {
//!         println!("{} {}", food.id, food.name);
//!     }
//!     Ok(())
//! }
//! ```

pub mod config; // Configuration system with TOML support
pub mod dashboard;
pub mod error;
pub mod gateway; // Collection resource access (HTTP + in-memory)
pub mod logging; // env_logger bootstrap over the standard log crate
pub mod modal;
pub mod model;
pub mod store;
pub mod sync;

// Prelude module for convenient imports
pub mod prelude;

pub use dashboard::{Dashboard, DashboardView, SyncStatus};
pub use error::{GatewayError, GatewayResult, SyncError, SyncResult};
pub use gateway::{HttpGateway, InMemoryGateway, RemoteGateway};
pub use model::{FoodId, FoodPlate, FoodPlateEdit, NewFoodPlate};
