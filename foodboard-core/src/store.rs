//! Local store: the ordered list the dashboard renders

use crate::model::{FoodId, FoodPlate};

/// In-memory, ordered sequence of food plates.
///
/// Order is fetch/insertion order. Ids are not checked for uniqueness; the
/// store keeps whatever the server hands back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalStore {
    foods: Vec<FoodPlate>,
}

impl LocalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole content (initial load)
    pub fn replace_all(&mut self, records: Vec<FoodPlate>) {
        self.foods = records;
    }

    pub fn append(&mut self, record: FoodPlate) {
        self.foods.push(record);
    }

    /// Replace the first record with `id`. Returns `false` when absent.
    pub fn update_by_id(&mut self, id: FoodId, record: FoodPlate) -> bool {
        match self.foods.iter_mut().find(|f| f.id == id) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    /// Remove every record with `id`. Returns `false` when none matched.
    pub fn remove_by_id(&mut self, id: FoodId) -> bool {
        let before = self.foods.len();
        self.foods.retain(|f| f.id != id);
        self.foods.len() != before
    }

    pub fn get(&self, id: FoodId) -> Option<&FoodPlate> {
        self.foods.iter().find(|f| f.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FoodPlate> {
        self.foods.iter()
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    /// Cloned copy for read-only consumers
    pub fn snapshot(&self) -> Vec<FoodPlate> {
        self.foods.clone()
    }
}
