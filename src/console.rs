//! Interactive menu front-end.
//!
//! The console reads from any `BufRead` and writes to any `Write`, so the
//! binary wires it to stdin/stdout while tests drive it with in-memory
//! buffers. Numeric prompts re-prompt until they receive a number; running
//! out of input ends the session the same way as choosing Exit.

use crate::discount::DiscountKind;
use crate::error::{InventoryError, Result};
use crate::factory::ProductFactory;
use crate::inventory::InventoryManager;
use crate::money::Money;
use log::debug;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Menu-driven session over an inventory.
pub struct Console<R, W> {
    inventory: InventoryManager,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(inventory: InventoryManager, input: R, output: W) -> Self {
        Console {
            inventory,
            input,
            output,
        }
    }

    pub fn inventory(&self) -> &InventoryManager {
        &self.inventory
    }

    /// Consumes the console, returning the inventory and the output handle.
    pub fn into_parts(self) -> (InventoryManager, W) {
        (self.inventory, self.output)
    }

    /// Runs the menu loop until Exit is chosen or input ends.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "=== WELCOME TO SIMPLE INVENTORY SYSTEM ===")?;
        writeln!(self.output)?;

        match self.menu_loop() {
            Err(InventoryError::EndOfInput) => {
                debug!("Input closed, leaving menu");
                writeln!(self.output)?;
                self.output.flush()?;
                Ok(())
            }
            other => other,
        }
    }

    fn menu_loop(&mut self) -> Result<()> {
        loop {
            self.show_menu()?;
            let choice: i64 = self.read_number("Enter your choice: ")?;

            match choice {
                1 => self.add_product()?,
                2 => self.show_inventory()?,
                3 => self.sell_product()?,
                4 => self.add_stock()?,
                5 => self.show_statistics()?,
                6 => {
                    writeln!(self.output, "Thank you for using the Inventory System!")?;
                    self.output.flush()?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }
    }

    fn show_menu(&mut self) -> Result<()> {
        writeln!(self.output, "=== MAIN MENU ===")?;
        writeln!(self.output, "1. Add Product")?;
        writeln!(self.output, "2. View Inventory")?;
        writeln!(self.output, "3. Sell Product")?;
        writeln!(self.output, "4. Add Stock")?;
        writeln!(self.output, "5. View Statistics")?;
        writeln!(self.output, "6. Exit")?;
        writeln!(self.output, "==================")?;
        Ok(())
    }

    fn add_product(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== ADD NEW PRODUCT ===")?;

        let types = ProductFactory::valid_types();
        writeln!(self.output, "Available product types:")?;
        for (i, category) in types.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, category)?;
        }

        let prompt = format!("Choose product type (1-{}): ", types.len());
        let category = match Self::pick(types, self.read_number(&prompt)?) {
            Some(category) => category,
            None => {
                writeln!(self.output, "Invalid choice.")?;
                return Ok(());
            }
        };

        let name = self.read_line("Enter product name: ")?;
        let price: Money = self.read_number("Enter price: $")?;
        let quantity: u32 = self.read_number("Enter initial quantity: ")?;

        match self
            .inventory
            .add_product(category.name(), &name, price, quantity)
        {
            Ok(_) => writeln!(self.output, "Product added successfully!")?,
            Err(e) => {
                writeln!(self.output, "Error adding product: {}", e)?;
                writeln!(self.output, "Failed to add product.")?;
            }
        }

        writeln!(self.output)?;
        Ok(())
    }

    fn show_inventory(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== INVENTORY LIST ===")?;

        if self.inventory.products().is_empty() {
            writeln!(self.output, "No products in inventory.")?;
        } else {
            for (i, product) in self.inventory.products().iter().enumerate() {
                writeln!(self.output, "{}. {}", i + 1, product)?;
            }
        }

        writeln!(self.output, "======================\n")?;
        Ok(())
    }

    fn sell_product(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== SELL PRODUCT ===")?;
        self.show_inventory()?;

        let name = self.read_line("Enter product name to sell: ")?;
        let quantity: u32 = self.read_number("Enter quantity to sell: ")?;

        let kinds = DiscountKind::available();
        writeln!(self.output, "Available discount types:")?;
        for (i, kind) in kinds.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, kind)?;
        }

        let prompt = format!("Choose discount type (1-{}): ", kinds.len());
        let kind = match Self::pick(kinds, self.read_number(&prompt)?) {
            Some(kind) => kind,
            None => {
                writeln!(self.output, "Invalid choice. Using no discount.")?;
                DiscountKind::NoDiscount
            }
        };

        match self.inventory.sell_product(&name, quantity, kind) {
            Ok(summary) => writeln!(self.output, "\n{}\n", summary)?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(())
    }

    fn add_stock(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== ADD STOCK ===")?;
        self.show_inventory()?;

        let name = self.read_line("Enter product name: ")?;
        let quantity: u32 = self.read_number("Enter quantity to add: ")?;

        match self.inventory.add_stock(&name, quantity) {
            Ok(stock) => writeln!(
                self.output,
                "Added {} items to {}. New stock: {}",
                quantity, name, stock
            )?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }

        writeln!(self.output)?;
        Ok(())
    }

    fn show_statistics(&mut self) -> Result<()> {
        match self.inventory.statistics() {
            Ok(stats) => writeln!(self.output, "\n{}\n", stats)?,
            Err(e) => writeln!(self.output, "\nCannot compute statistics: {}\n", e)?,
        }
        Ok(())
    }

    /// Maps a 1-based menu choice onto `options`.
    fn pick<T: Copy>(options: &[T], choice: i64) -> Option<T> {
        let index = usize::try_from(choice).ok()?.checked_sub(1)?;
        options.get(index).copied()
    }

    /// Prints `prompt` and reads one trimmed line.
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InventoryError::EndOfInput);
        }
        Ok(line.trim().to_string())
    }

    /// Prompts until the reply parses as a `T`.
    fn read_number<T: FromStr>(&mut self, prompt: &str) -> Result<T> {
        loop {
            let reply = self.read_line(prompt)?;
            match reply.parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    debug!("Rejected numeric input {:?}", reply);
                    writeln!(self.output, "Please enter a valid number.")?;
                }
            }
        }
    }
}
