use crate::application::engine::PurchaseEngine;
use crate::domain::purchase::{PurchaseOutcome, PurchaseRequest};
use crate::error::Result;
use std::io::{BufRead, Write};
use tracing::debug;

/// A single interactive storefront session over line-oriented streams.
///
/// Generic over its input and output so tests can drive it with in-memory
/// buffers; `main` wires it to stdin/stdout. Input that fails the local
/// pre-checks (non-integer or zero id/quantity, unknown product id) is
/// reported and never reaches the purchase workflow.
pub struct TerminalSession<R, W> {
    input: R,
    output: W,
    engine: PurchaseEngine,
}

impl<R: BufRead, W: Write> TerminalSession<R, W> {
    pub fn new(engine: PurchaseEngine, input: R, output: W) -> Self {
        Self {
            input,
            output,
            engine,
        }
    }

    /// Runs the menu loop until the user exits or input reaches EOF.
    pub async fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Welcome to the bakery storefront!")?;

        loop {
            self.show_menu()?;
            let Some(selection) = self.read_line()? else {
                break; // EOF behaves like exit
            };
            match selection.trim() {
                "1" => self.show_products().await?,
                "2" => self.purchase_flow().await?,
                "3" => {
                    writeln!(self.output, "Thanks for visiting!")?;
                    break;
                }
                other => {
                    debug!(input = other, "unrecognized menu option");
                    writeln!(self.output, "Invalid option")?;
                }
            }
        }
        Ok(())
    }

    fn show_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "=== BAKERY STOREFRONT ===")?;
        writeln!(self.output, "1. List products")?;
        writeln!(self.output, "2. Purchase")?;
        writeln!(self.output, "3. Exit")?;
        write!(self.output, "Select an option: ")?;
        self.output.flush()?;
        Ok(())
    }

    async fn show_products(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "--- PRODUCTS ---")?;
        for product in self.engine.products().await? {
            writeln!(self.output, "{product}")?;
        }
        Ok(())
    }

    async fn purchase_flow(&mut self) -> Result<()> {
        self.show_products().await?;

        let id_line = self.prompt("Product id: ")?;
        let quantity_line = self.prompt("Quantity: ")?;

        let (Some(id), Some(quantity)) = (
            id_line.as_deref().and_then(parse_nonzero),
            quantity_line.as_deref().and_then(parse_nonzero),
        ) else {
            writeln!(self.output, "Invalid input")?;
            return Ok(());
        };

        if !self.engine.product_exists(id).await? {
            writeln!(self.output, "Product does not exist")?;
            return Ok(());
        }

        writeln!(self.output, "Processing purchase...")?;
        let request = PurchaseRequest {
            product_id: id,
            quantity,
        };
        match self.engine.attempt_purchase(request).await {
            PurchaseOutcome::Approved { total } => {
                writeln!(self.output, "Total: {total}")?;
                writeln!(self.output, "Purchase completed!")?;
            }
            PurchaseOutcome::Declined(reason) => {
                writeln!(self.output, "Purchase declined: {reason}")?;
            }
        }
        Ok(())
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Parses a line as a nonzero integer; both non-numeric text and zero are
/// rejected at this boundary.
fn parse_nonzero(line: &str) -> Option<i64> {
    match line.trim().parse::<i64>() {
        Ok(0) | Err(_) => None,
        Ok(value) => Some(value),
    }
}
