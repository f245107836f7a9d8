//! In-memory collection resource
//!
//! Behaves like the REST backend: ids are assigned from 1 upward, new plates
//! are created available, unknown ids answer 404. Failures can be scripted
//! per operation and every call is journaled, so it doubles as the
//! reference model in tests.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

use super::RemoteGateway;
use crate::error::{GatewayError, GatewayResult};
use crate::model::{FoodId, FoodPlate, NewFoodPlate};

/// Gateway operation, used to script failures and read the journal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

/// One journaled call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub operation: Operation,
    pub id: Option<FoodId>,
}

#[derive(Debug, Default)]
struct Collection {
    foods: Vec<FoodPlate>,
    next_id: FoodId,
    failures: HashMap<Operation, VecDeque<GatewayError>>,
    journal: Vec<Call>,
}

impl Collection {
    fn record(&mut self, operation: Operation, id: Option<FoodId>) -> GatewayResult<()> {
        self.journal.push(Call { operation, id });
        match self.failures.get_mut(&operation).and_then(VecDeque::pop_front) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

fn not_found(id: FoodId) -> GatewayError {
    GatewayError::Http { status: 404, body: format!("food {} not found", id) }
}

/// Reference [`RemoteGateway`] backed by a `Vec`
#[derive(Debug)]
pub struct InMemoryGateway {
    inner: Mutex<Collection>,
    latency: Option<Duration>,
}

impl Default for InMemoryGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self { inner: Mutex::new(Collection { next_id: 1, ..Default::default() }), latency: None }
    }

    /// Start with `foods`; new ids continue after the highest seeded id
    pub fn seeded(foods: Vec<FoodPlate>) -> Self {
        let next_id = foods.iter().map(|f| f.id).max().unwrap_or(0) + 1;
        Self {
            inner: Mutex::new(Collection { foods, next_id, ..Default::default() }),
            latency: None,
        }
    }

    /// Delay every call, to keep a request in flight
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Make the next call of `operation` fail with `error`
    pub fn fail_next(&self, operation: Operation, error: GatewayError) {
        self.lock().failures.entry(operation).or_default().push_back(error);
    }

    /// Current server-side content
    pub fn foods(&self) -> Vec<FoodPlate> {
        self.lock().foods.clone()
    }

    pub fn journal(&self) -> Vec<Call> {
        self.lock().journal.clone()
    }

    pub fn calls(&self, operation: Operation) -> usize {
        self.lock().journal.iter().filter(|c| c.operation == operation).count()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Collection> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    async fn wait(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }
}

#[async_trait]
impl RemoteGateway for InMemoryGateway {
    async fn list(&self) -> GatewayResult<Vec<FoodPlate>> {
        self.wait().await;
        let mut collection = self.lock();
        collection.record(Operation::List, None)?;
        Ok(collection.foods.clone())
    }

    async fn create(&self, food: &NewFoodPlate) -> GatewayResult<FoodPlate> {
        self.wait().await;
        let mut collection = self.lock();
        collection.record(Operation::Create, None)?;

        let created = food.clone().into_plate(collection.next_id);
        collection.next_id += 1;
        collection.foods.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: FoodId, food: &FoodPlate) -> GatewayResult<()> {
        self.wait().await;
        let mut collection = self.lock();
        collection.record(Operation::Update, Some(id))?;

        let slot = collection.foods.iter_mut().find(|f| f.id == id).ok_or_else(|| not_found(id))?;
        *slot = FoodPlate { id, ..food.clone() };
        Ok(())
    }

    async fn delete_by_id(&self, id: FoodId) -> GatewayResult<()> {
        self.wait().await;
        let mut collection = self.lock();
        collection.record(Operation::Delete, Some(id))?;

        let before = collection.foods.len();
        collection.foods.retain(|f| f.id != id);
        if collection.foods.len() == before {
            return Err(not_found(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pizza() -> NewFoodPlate {
        NewFoodPlate::new("Pizza", "x.png", "30.00", "Cheesy")
    }

    #[tokio::test]
    async fn test_create_assigns_ids_and_defaults_available() {
        let gateway = InMemoryGateway::new();

        let first = gateway.create(&pizza()).await.unwrap();
        let second = gateway.create(&pizza()).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(first.available);
        assert_eq!(gateway.list().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn test_seeded_continues_ids() {
        let gateway = InMemoryGateway::seeded(vec![pizza().into_plate(7)]);
        let created = gateway.create(&pizza()).await.unwrap();
        assert_eq!(created.id, 8);
    }

    #[tokio::test]
    async fn test_unknown_ids_are_404() {
        let gateway = InMemoryGateway::new();

        let err = gateway.delete_by_id(3).await.unwrap_err();
        assert_eq!(err.status(), Some(404));

        let err = gateway.update(3, &pizza().into_plate(3)).await.unwrap_err();
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn test_journal_records_calls_in_order() {
        let gateway = InMemoryGateway::seeded(vec![pizza().into_plate(1)]);

        gateway.list().await.unwrap();
        gateway.update(1, &pizza().into_plate(1)).await.unwrap();
        let _ = gateway.delete_by_id(5).await;

        assert_eq!(
            gateway.journal(),
            vec![
                Call { operation: Operation::List, id: None },
                Call { operation: Operation::Update, id: Some(1) },
                Call { operation: Operation::Delete, id: Some(5) },
            ]
        );
    }

    #[tokio::test]
    async fn test_scripted_failure_is_consumed_once() {
        let gateway = InMemoryGateway::new();
        gateway.fail_next(Operation::List, GatewayError::Transport("offline".into()));

        assert!(gateway.list().await.unwrap_err().is_transport());
        assert!(gateway.list().await.is_ok());
        assert_eq!(gateway.calls(Operation::List), 2);
    }
}
