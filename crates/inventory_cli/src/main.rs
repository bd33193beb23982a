//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `inventory_core` linkage.
//! - Run one in-memory CRUD pass for quick local sanity checks.

use inventory_core::db::open_db_in_memory;
use inventory_core::{InventoryService, ProductValues, SqliteProductStore};

fn main() {
    println!("inventory_core ping={}", inventory_core::ping());
    println!("inventory_core version={}", inventory_core::core_version());

    if let Err(err) = smoke_pass() {
        eprintln!("smoke pass failed: {err}");
        std::process::exit(1);
    }
}

fn smoke_pass() -> Result<(), Box<dyn std::error::Error>> {
    let conn = open_db_in_memory()?;
    let service = InventoryService::from_store(SqliteProductStore::new(&conn));

    service.create_product(
        &ProductValues::new()
            .with_name("Sample widget")
            .with_quantity(5)
            .with_price(9.99),
    )?;

    for product in service.list_products(None)? {
        println!(
            "product id={} name={:?} quantity={} price={}",
            product.id, product.name, product.quantity, product.price
        );
    }

    Ok(())
}
