// core/examples/product_lifecycle.rs

use inventory::{InventoryResult, ProductRecord};
use tracing::info;

fn main() -> InventoryResult<()> {
  // Initialize tracing (optional, for demonstration)
  tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

  info!("--- Product Lifecycle Example ---");

  // 1. Construct with defaults for everything not named
  let mut product = ProductRecord::builder().name("Widget").quantity(10).price(2.5).build();
  info!(%product, "Created");

  // 2. Mutate; each call refreshes updated_at
  product.update_quantity(5);
  product.update_price(3.0);
  info!(%product, "After updates");

  // 3. Hand the mapping to an external layer, then rebuild from it
  let json = product.to_json()?;
  info!(%json, "Encoded");

  let rebuilt = ProductRecord::from_json(&json)?;
  assert_eq!(rebuilt, product);
  info!("Round trip produced an identical record");

  // 4. A bad timestamp is reported, not defaulted
  match ProductRecord::from_json(r#"{"name": "Broken", "created_at": "not-a-date"}"#) {
    Ok(_) => info!("Unexpectedly accepted a bad timestamp"),
    Err(e) => info!(error = %e, "Rejected bad timestamp"),
  }

  Ok(())
}
