//! Food-plate records and the edit/merge rules applied to them
//!
//! `FoodPlate` is the wire shape served by the collection resource.
//! `NewFoodPlate` is what the create form hands over (the server assigns the
//! id and defaults availability). `FoodPlateEdit` is a partial edit; it is
//! folded onto the editing target with [`merge`].

use serde::{Deserialize, Serialize};

/// Server-assigned record identifier
pub type FoodId = u64;

fn default_available() -> bool {
    true
}

/// A food plate as exposed by `GET /foods`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodPlate {
    pub id: FoodId,
    pub name: String,
    pub image: String,
    /// Decimal price kept as text, e.g. `"19.90"`
    pub price: String,
    pub description: String,
    #[serde(default = "default_available")]
    pub available: bool,
}

/// Create-form payload: everything but `id` and `available`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFoodPlate {
    pub name: String,
    pub image: String,
    pub price: String,
    pub description: String,
}

impl NewFoodPlate {
    pub fn new(
        name: impl Into<String>,
        image: impl Into<String>,
        price: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
            price: price.into(),
            description: description.into(),
        }
    }

    /// Materialize the record the collection resource should hold for this
    /// payload once it has assigned `id`.
    pub fn into_plate(self, id: FoodId) -> FoodPlate {
        FoodPlate {
            id,
            name: self.name,
            image: self.image,
            price: self.price,
            description: self.description,
            available: true,
        }
    }
}

/// Body sent on `POST /foods`. New plates are always created available.
#[derive(Debug, Serialize)]
pub(crate) struct CreateBody<'a> {
    #[serde(flatten)]
    pub food: &'a NewFoodPlate,
    pub available: bool,
}

impl<'a> From<&'a NewFoodPlate> for CreateBody<'a> {
    fn from(food: &'a NewFoodPlate) -> Self {
        Self { food, available: true }
    }
}

/// Partial edit of a food plate. `None` fields keep the target's value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodPlateEdit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

impl FoodPlateEdit {
    /// Edit that only flips availability
    pub fn availability(available: bool) -> Self {
        Self { available: Some(available), ..Default::default() }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.image.is_none()
            && self.price.is_none()
            && self.description.is_none()
            && self.available.is_none()
    }
}

impl From<NewFoodPlate> for FoodPlateEdit {
    fn from(food: NewFoodPlate) -> Self {
        Self {
            name: Some(food.name),
            image: Some(food.image),
            price: Some(food.price),
            description: Some(food.description),
            available: None,
        }
    }
}

/// Fold `edit` onto `target`.
///
/// Every field set in the edit wins over the target. The id always comes
/// from the target.
pub fn merge(target: &FoodPlate, edit: &FoodPlateEdit) -> FoodPlate {
    FoodPlate {
        id: target.id,
        name: edit.name.clone().unwrap_or_else(|| target.name.clone()),
        image: edit.image.clone().unwrap_or_else(|| target.image.clone()),
        price: edit.price.clone().unwrap_or_else(|| target.price.clone()),
        description: edit.description.clone().unwrap_or_else(|| target.description.clone()),
        available: edit.available.unwrap_or(target.available),
    }
}
