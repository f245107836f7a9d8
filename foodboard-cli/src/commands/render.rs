//! Plain-text rendering of a dashboard view

use std::fmt::Write;

use foodboard_core::prelude::*;

/// List rendered as a fixed-width table, with status and error lines
pub fn table(view: &DashboardView) -> String {
    let mut out = String::new();

    match &view.status {
        SyncStatus::LoadFailed { message } => {
            let _ = writeln!(out, "! Could not load food plates: {}", message);
        }
        _ if view.foods.is_empty() => {
            let _ = writeln!(out, "No food plates.");
        }
        _ => {
            let _ = writeln!(out, "{:>4}  {:<24} {:>8}  {}", "ID", "NAME", "PRICE", "AVAILABLE");
            for food in &view.foods {
                let available = if food.available { "yes" } else { "no" };
                let _ = writeln!(
                    out,
                    "{:>4}  {:<24} {:>8}  {}",
                    food.id,
                    truncate(&food.name, 24),
                    food.price,
                    available
                );
            }
        }
    }

    if let Some(err) = &view.last_error {
        let _ = writeln!(out, "! Last action failed: {}", err);
    }

    out
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(foods: Vec<FoodPlate>, status: SyncStatus) -> DashboardView {
        DashboardView {
            foods,
            create_modal_open: false,
            edit_modal_open: false,
            editing: None,
            status,
            last_error: None,
        }
    }

    #[test]
    fn renders_rows() {
        let mut ramen = NewFoodPlate::new("Ramen", "r.png", "25.00", "Broth").into_plate(2);
        ramen.available = false;

        let out = table(&view(vec![ramen], SyncStatus::Ready { count: 1 }));

        let row = out.lines().nth(1).unwrap();
        assert!(row.contains("Ramen"));
        assert!(row.contains("25.00"));
        assert!(row.ends_with("no"));
    }

    #[test]
    fn renders_empty_and_failed_states() {
        assert_eq!(table(&view(vec![], SyncStatus::Ready { count: 0 })), "No food plates.\n");

        let failed = table(&view(vec![], SyncStatus::LoadFailed { message: "HTTP 502: ".into() }));
        assert!(failed.starts_with("! Could not load food plates: HTTP 502"));
    }

    #[test]
    fn long_names_are_cut() {
        let name = "Macarrão com pimentão, ervilha e ervas finas";
        let cut = truncate(name, 10);
        assert_eq!(cut.chars().count(), 10);
        assert!(cut.ends_with('…'));
    }
}
