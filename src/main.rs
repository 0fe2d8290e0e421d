//! Inventory Tracker CLI
//!
//! An interactive menu over an in-memory inventory. Reads commands from
//! stdin and writes the session transcript to stdout.
//!
//! # Usage
//!
//! ```bash
//! cargo run                      # start with the demo products
//! cargo run -- catalog.csv       # start with products from a CSV catalog
//! ```
//!
//! The catalog CSV has the header `category,name,price,quantity`.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `info`, `debug` or `warn` to control logging verbosity

use inventory_tracker::{Console, InventoryManager, Result};
use log::info;
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let inventory = match args.get(1) {
        Some(catalog_path) => {
            let file = File::open(catalog_path)?;
            let mut inventory = InventoryManager::new();
            let loaded = inventory.load_catalog(BufReader::new(file))?;
            info!("Loaded {} products from {}", loaded, catalog_path);
            inventory
        }
        None => InventoryManager::with_sample_products(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(inventory, stdin.lock(), stdout.lock());
    console.run()?;

    Ok(())
}
