//! The narrow rendering interface between the pure domain and its host.

use katalog_core::format_price;
use katalog_products::{CatalogSummary, Product};

/// Capability set a host must provide: a scrolling log panel, a product
/// list with full-replace semantics, and three statistic display slots.
///
/// Handlers only ever talk to this trait, so the transform functions stay
/// host-agnostic and unit-testable without a UI.
pub trait Surface {
    /// Append `line` plus a newline to the persistent log panel.
    ///
    /// The panel only ever grows; there is no clear operation.
    fn append_log(&mut self, line: &str);

    /// Replace the rendered product list with one card per item, in order.
    fn render_list(&mut self, items: &[Product]);

    /// Write count, total value, and average price into the stat slots.
    fn render_stats(&mut self, summary: &CatalogSummary);
}

/// Console implementation: stdout is the display, and the full log
/// transcript is retained so callers can observe its monotonic growth.
#[derive(Debug, Default)]
pub struct ConsoleSurface {
    transcript: String,
}

impl ConsoleSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything ever appended to the log panel.
    pub fn transcript(&self) -> &str {
        &self.transcript
    }
}

impl Surface for ConsoleSurface {
    fn append_log(&mut self, line: &str) {
        self.transcript.push_str(line);
        self.transcript.push('\n');
        // Printing the newest line last is the console's "scroll to bottom".
        println!("{line}");
    }

    fn render_list(&mut self, items: &[Product]) {
        println!("--- products ({}) ---", items.len());
        for item in items {
            println!(
                "  {:<12} {:>14}  [{}]",
                item.name,
                format_price(item.price),
                item.category
            );
        }
    }

    fn render_stats(&mut self, summary: &CatalogSummary) {
        println!("products:      {}", summary.count);
        println!("total value:   {}", format_price(summary.total));
        println!("average price: {}", format_price(summary.average));
    }
}

/// Test double that records every surface call.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub log: Vec<String>,
    pub lists: Vec<Vec<Product>>,
    pub stats: Vec<CatalogSummary>,
}

#[cfg(test)]
impl Surface for RecordingSurface {
    fn append_log(&mut self, line: &str) {
        self.log.push(line.to_owned());
    }

    fn render_list(&mut self, items: &[Product]) {
        self.lists.push(items.to_vec());
    }

    fn render_stats(&mut self, summary: &CatalogSummary) {
        self.stats.push(summary.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_grows_monotonically() {
        let mut surface = ConsoleSurface::new();
        surface.append_log("first");
        let after_first = surface.transcript().to_owned();
        surface.append_log("second");

        assert!(surface.transcript().starts_with(&after_first));
        assert_eq!(surface.transcript(), "first\nsecond\n");
    }
}
