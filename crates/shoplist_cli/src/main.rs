//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `shoplist_core` linkage without the Flutter/FFI runtime.
//! - Drive one scripted shopping session and print the resulting list.
//!
//! Logging is enabled only when `SHOPLIST_LOG_DIR` holds an absolute path;
//! `SHOPLIST_LOG_LEVEL` overrides the build-mode default level.

use log::info;
use shoplist_core::{DraftField, ItemListStore, ListSnapshot};

const SCRIPT: &[(&str, u32, &str)] = &[
    ("Milk", 2, "2.50"),
    ("Bread", 1, "6.90"),
    ("Eggs", 12, "0.75"),
];

fn main() {
    println!("shoplist_core ping={}", shoplist_core::ping());
    println!("shoplist_core version={}", shoplist_core::core_version());

    if let Err(err) = configure_logging() {
        eprintln!("logging disabled: {err}");
    }

    let mut store = ItemListStore::new();
    for (name, quantity, unit_price) in SCRIPT {
        let Some(id) = store.add_item(name) else {
            continue;
        };
        store.update_quantity(id, i64::from(*quantity) - 1);
        store.start_edit(id);
        store.update_draft_field(DraftField::UnitPrice, *unit_price);
        if let Err(err) = store.save_edit() {
            eprintln!("skipping price for {name}: {err}");
            store.cancel_edit();
        }
    }

    let snapshot = store.snapshot();
    info!(
        "event=cli_session module=cli status=ok item_count={}",
        snapshot.items.len()
    );
    print_snapshot(&snapshot);
}

fn configure_logging() -> Result<(), String> {
    let Ok(log_dir) = std::env::var("SHOPLIST_LOG_DIR") else {
        return Ok(());
    };
    let level = std::env::var("SHOPLIST_LOG_LEVEL")
        .unwrap_or_else(|_| shoplist_core::default_log_level().to_string());
    shoplist_core::init_logging(&level, &log_dir)
}

fn print_snapshot(snapshot: &ListSnapshot) {
    for row in &snapshot.items {
        println!(
            "{:<12} x{:<4} @ {:>8} = {:>8}",
            row.name, row.quantity, row.unit_price, row.line_total
        );
    }
    println!("items={} total={}", snapshot.total_item_count, snapshot.total_price);
}
