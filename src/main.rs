use anyhow::{Context, Result};
use std::{env, path::PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use grocery_manager::{GroceryItem, Pantry, Settings};

/// One line per item; manual items have no barcode to show.
fn format_item_line(item: &GroceryItem) -> String {
    let upc = if item.is_manual() {
        "manual".to_string()
    } else {
        item.upc().to_string()
    };
    format!(
        "  #{:<5} {:<24} x{:<4} expires {:<12} upc {}",
        item.item_id(),
        item.name(),
        item.quantity(),
        item.expiry(),
        upc
    )
}

fn print_pantry(uid: u32, items: &[GroceryItem]) {
    println!("\n=== User {uid} ({} items) ===", items.len());
    for item in items {
        println!("{}", format_item_line(item));
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut settings = Settings::from_env().context("read settings from environment")?;
    if let Some(arg) = env::args().nth(1) {
        settings.snapshot_path = PathBuf::from(arg);
    }

    let pantry = Pantry::load(&settings.snapshot_path)
        .with_context(|| format!("load snapshot {}", settings.snapshot_path.display()))?;
    info!(
        path = %settings.snapshot_path.display(),
        users = pantry.users().count(),
        items = pantry.len(),
        "pantry ready"
    );

    match settings.default_user {
        Some(uid) => {
            let items = pantry
                .items(uid)
                .with_context(|| format!("list items for user {uid}"))?;
            print_pantry(uid, items);
        }
        None => {
            if pantry.is_empty() {
                warn!("snapshot holds no items");
            }
            for uid in pantry.users() {
                print_pantry(uid, pantry.items(uid)?);
            }
        }
    }

    Ok(())
}
