//! Remote gateway: the four collection-resource operations
//!
//! The synchronizer only sees [`RemoteGateway`]. [`HttpGateway`] talks to the
//! real API; [`InMemoryGateway`] is a reference collection used for tests and
//! dry runs.

pub mod http;
pub mod memory;

pub use http::HttpGateway;
pub use memory::{InMemoryGateway, Operation};

use async_trait::async_trait;

use crate::error::GatewayResult;
use crate::model::{FoodId, FoodPlate, NewFoodPlate};

/// Collection resource holding food plates
#[async_trait]
pub trait RemoteGateway: Send + Sync {
    /// Fetch the whole collection
    async fn list(&self) -> GatewayResult<Vec<FoodPlate>>;

    /// Create a plate; the server assigns `id` and sets `available`
    async fn create(&self, food: &NewFoodPlate) -> GatewayResult<FoodPlate>;

    /// Replace the stored plate `id` with `food`
    async fn update(&self, id: FoodId, food: &FoodPlate) -> GatewayResult<()>;

    async fn delete_by_id(&self, id: FoodId) -> GatewayResult<()>;
}
