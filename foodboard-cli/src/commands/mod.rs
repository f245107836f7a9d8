//! One dashboard action per CLI invocation

pub mod render;

use foodboard_core::prelude::*;

/// What the user asked for
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    List,
    Add(NewFoodPlate),
    Edit(FoodId, FoodPlateEdit),
    Toggle(FoodId),
    Delete(FoodId),
}

/// Mount `dashboard`, then drive the same affordances the UI would
pub async fn run<G>(dashboard: &mut Dashboard<G>, action: Action) -> SyncResult<()>
where
    G: RemoteGateway + ?Sized,
{
    dashboard.mount().await?;

    match action {
        Action::List => {}
        Action::Add(food) => {
            dashboard.open_create();
            let created = dashboard.add_food(food).await?;
            println!("Created food plate {}", created.id);
        }
        Action::Edit(id, edit) => {
            dashboard.select_for_edit(id)?;
            if edit.is_empty() {
                log::warn!("Nothing to change for food plate {}", id);
                dashboard.close_edit();
            } else {
                dashboard.update_food(edit).await?;
                println!("Updated food plate {}", id);
            }
        }
        Action::Toggle(id) => {
            let food = dashboard.toggle_available(id).await?;
            let state = if food.available { "available" } else { "unavailable" };
            println!("Food plate {} is now {}", id, state);
        }
        Action::Delete(id) => {
            dashboard.delete_food(id).await?;
            println!("Deleted food plate {}", id);
        }
    }

    Ok(())
}

/// Content of the `--memory` collection
pub fn sample_plates() -> Vec<FoodPlate> {
    vec![
        NewFoodPlate::new(
            "Ao molho",
            "https://storage.googleapis.com/golden-wind/bootcamp-gostack/desafio-food/food1.png",
            "19.90",
            "Macarrão ao molho branco, fughi e cheiro verde das montanhas.",
        )
        .into_plate(1),
        NewFoodPlate::new(
            "Veggie",
            "https://storage.googleapis.com/golden-wind/bootcamp-gostack/desafio-food/food2.png",
            "21.90",
            "Macarrão com pimentão, ervilha e ervas finas colhidas no himalaia.",
        )
        .into_plate(2),
    ]
}
