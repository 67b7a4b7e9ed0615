//! Control handlers and the one-shot startup sequence.

use katalog_core::format_price;
use katalog_products::{
    calculate_total, calculate_total_recursive, categories, category_stats, cheap_products,
    count_by_category_recursive, demo_catalog, expensive_products, price_band, prices_with_tax,
    product_names, shipping_cost, sort_products, with_logging, Product, SortKey,
};

use crate::config::AppConfig;
use crate::controls::Control;
use crate::surface::Surface;

/// Regions exercised by the shipping demonstration. `Niš` (accented) is
/// deliberately included: it misses the ASCII table key and shows the
/// default fee.
const SHIPPING_DEMO_REGIONS: [&str; 5] = ["Beograd", "Novi Sad", "Niš", "Kragujevac", "Subotica"];

/// The demo application: an immutable catalog, configuration, and the
/// rendering surface it writes to.
///
/// Handlers only read the catalog; no handler mutates it in place.
pub struct App<S: Surface> {
    catalog: Vec<Product>,
    config: AppConfig,
    surface: S,
    initialized: bool,
}

impl<S: Surface> App<S> {
    pub fn new(catalog: Vec<Product>, config: AppConfig, surface: S) -> Self {
        Self {
            catalog,
            config,
            surface,
            initialized: false,
        }
    }

    /// Convenience constructor over the fixed demo catalog.
    pub fn with_demo_catalog(config: AppConfig, surface: S) -> Self {
        Self::new(demo_catalog(), config, surface)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Run the startup sequence exactly once: greeting, statistics, full
    /// listing, the higher-order demonstration, and the loaded message.
    ///
    /// Not re-entrant; a second call is a traced no-op.
    pub fn initialize(&mut self) {
        if self.initialized {
            tracing::debug!("initialize called again; ignoring");
            return;
        }
        self.initialized = true;

        self.surface.append_log("Application started");
        let summary = katalog_products::summarize(&self.catalog);
        self.surface.render_stats(&summary);
        self.surface.render_list(&self.catalog);
        self.demonstrate_higher_order();
        self.surface.append_log("Application loaded!");
    }

    /// One-shot demonstration of the logging decorator and the map transforms.
    fn demonstrate_higher_order(&mut self) {
        self.surface
            .append_log("Higher-order function demonstration:");

        // The decorator writes into a local buffer first: the sink and the
        // catalog cannot both borrow `self` during the wrapped call.
        let mut lines: Vec<String> = Vec::new();
        {
            let mut logged_total = with_logging(
                calculate_total,
                "calculate total value",
                |line: &str| lines.push(line.to_owned()),
            );
            let _ = logged_total(self.catalog.as_slice());
        }
        for line in &lines {
            self.surface.append_log(line);
        }

        let names = product_names(&self.catalog);
        self.surface
            .append_log(&format!("Product names: {}", names.join(", ")));

        self.surface.append_log("Prices with tax:");
        for item in prices_with_tax(&self.catalog, self.config.tax_rate) {
            self.surface.append_log(&format!(
                "  {}: {} -> {}",
                item.product.name,
                format_price(item.product.price),
                format_price(item.price_with_tax)
            ));
        }
    }

    /// Invoke the single handler bound to `control`.
    ///
    /// Handlers run to completion, never panic on the fixed dataset, and
    /// leave the surface responsive for the next dispatch.
    pub fn dispatch(&mut self, control: Control) {
        tracing::debug!(control = control.id(), "dispatching");
        match control {
            Control::ShowAll => {
                self.surface.append_log("Showing all products");
                self.surface.render_list(&self.catalog);
            }
            Control::ShowExpensive => {
                let expensive =
                    expensive_products(&self.catalog, self.config.expensive_threshold);
                self.surface.append_log(&format!(
                    "Products above {}: {}",
                    format_price(self.config.expensive_threshold),
                    expensive.len()
                ));
                self.surface.render_list(&expensive);
            }
            Control::ShowCheap => {
                let cheap = cheap_products(&self.catalog, self.config.cheap_threshold);
                self.surface.append_log(&format!(
                    "Products below {}: {}",
                    format_price(self.config.cheap_threshold),
                    cheap.len()
                ));
                self.surface.render_list(&cheap);
            }
            Control::SortByName => {
                let sorted = sort_products(&self.catalog, SortKey::Name);
                self.surface.append_log("Sorted by name");
                self.surface.render_list(&sorted);
            }
            Control::SortByPrice => {
                let sorted = sort_products(&self.catalog, SortKey::Price);
                self.surface.append_log("Sorted by price");
                self.surface.render_list(&sorted);
            }
            Control::ShowTotal => {
                let total = calculate_total(&self.catalog);
                self.surface
                    .append_log(&format!("Total value: {}", format_price(total)));
            }
            Control::ShowCategories => {
                let stats = category_stats(&self.catalog);
                self.surface.append_log("Product categories:");
                for category in categories(&self.catalog) {
                    if let Some(s) = stats.get(&category) {
                        self.surface.append_log(&format!(
                            "  {category}: {} products, {}",
                            s.count,
                            format_price(s.total)
                        ));
                    }
                }
            }
            Control::RecursiveDemo => {
                let total = calculate_total_recursive(&self.catalog);
                self.surface.append_log(&format!(
                    "Recursive total of all products: {}",
                    format_price(total)
                ));
                self.surface.append_log("Recursive count per category:");
                for category in categories(&self.catalog) {
                    let count = count_by_category_recursive(&self.catalog, &category);
                    self.surface
                        .append_log(&format!("  {category}: {count} products"));
                }
            }
            Control::PriceBandDemo => {
                self.surface.append_log("Price bands");
                for product in &self.catalog {
                    let band = price_band(product.price);
                    self.surface.append_log(&format!(
                        "{}: {} -> {band}",
                        product.name,
                        format_price(product.price)
                    ));
                }
            }
            Control::ShippingDemo => {
                self.surface.append_log("Shipping costs");
                for region in SHIPPING_DEMO_REGIONS {
                    let fee = shipping_cost(region);
                    self.surface.append_log(&format!(
                        "Shipping to {region}: {}",
                        format_price(f64::from(fee))
                    ));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;

    fn demo_app() -> App<RecordingSurface> {
        App::with_demo_catalog(AppConfig::default(), RecordingSurface::default())
    }

    #[test]
    fn initialize_runs_the_startup_sequence_in_order() {
        let mut app = demo_app();
        app.initialize();

        let surface = app.surface();
        assert_eq!(surface.log.first().unwrap(), "Application started");
        assert_eq!(surface.log.last().unwrap(), "Application loaded!");

        // Stats before the listing, one full render of the ten products.
        assert_eq!(surface.stats.len(), 1);
        assert_eq!(surface.stats[0].count, 10);
        assert_eq!(surface.stats[0].total, 83_080.0);
        assert_eq!(surface.stats[0].average, 8_308.0);
        assert_eq!(surface.lists.len(), 1);
        assert_eq!(surface.lists[0].len(), 10);

        // The decorated call logged its label and result.
        assert!(surface
            .log
            .iter()
            .any(|l| l == "Running: calculate total value"));
        assert!(surface.log.iter().any(|l| l.starts_with("Result: 83080")));

        // Names joined in catalog order.
        assert!(surface
            .log
            .iter()
            .any(|l| l.starts_with("Product names: Laptop, Miš,")));

        // One tax line per product, net and gross.
        assert!(surface
            .log
            .iter()
            .any(|l| l == "  Miš: 1.200 din -> 1.416 din"));
    }

    #[test]
    fn initialize_is_not_reentrant() {
        let mut app = demo_app();
        app.initialize();
        let len_after_first = app.surface().log.len();

        app.initialize();
        assert_eq!(app.surface().log.len(), len_after_first);
        assert_eq!(app.surface().stats.len(), 1);
    }

    #[test]
    fn show_all_renders_the_full_catalog() {
        let mut app = demo_app();
        app.dispatch(Control::ShowAll);

        let surface = app.surface();
        assert_eq!(surface.log, ["Showing all products"]);
        assert_eq!(surface.lists[0].len(), 10);
        assert_eq!(surface.lists[0][0].name, "Laptop");
    }

    #[test]
    fn show_expensive_and_cheap_use_configured_thresholds() {
        let mut app = demo_app();
        app.dispatch(Control::ShowExpensive);
        app.dispatch(Control::ShowCheap);

        let surface = app.surface();
        assert_eq!(surface.log[0], "Products above 10.000 din: 3");
        assert_eq!(surface.log[1], "Products below 500 din: 3");
        assert_eq!(surface.lists[0].len(), 3);
        assert_eq!(surface.lists[1].len(), 3);
    }

    #[test]
    fn sorting_renders_a_copy_without_reordering_the_catalog() {
        let mut app = demo_app();
        app.dispatch(Control::SortByPrice);
        app.dispatch(Control::ShowAll);

        let surface = app.surface();
        assert_eq!(surface.lists[0][0].name, "Voda");
        // The catalog itself kept its original order.
        assert_eq!(surface.lists[1][0].name, "Laptop");
    }

    #[test]
    fn show_total_logs_the_formatted_grand_total() {
        let mut app = demo_app();
        app.dispatch(Control::ShowTotal);
        assert_eq!(app.surface().log, ["Total value: 83.080 din"]);
    }

    #[test]
    fn category_breakdown_is_in_first_seen_order() {
        let mut app = demo_app();
        app.dispatch(Control::ShowCategories);

        assert_eq!(
            app.surface().log,
            [
                "Product categories:",
                "  Elektronika: 5 products, 78.700 din",
                "  Obrazovanje: 2 products, 3.800 din",
                "  Hrana: 3 products, 580 din",
            ]
        );
    }

    #[test]
    fn recursive_demo_agrees_with_the_iterative_results() {
        let mut app = demo_app();
        app.dispatch(Control::RecursiveDemo);

        assert_eq!(
            app.surface().log,
            [
                "Recursive total of all products: 83.080 din",
                "Recursive count per category:",
                "  Elektronika: 5 products",
                "  Obrazovanje: 2 products",
                "  Hrana: 3 products",
            ]
        );
    }

    #[test]
    fn price_band_demo_labels_every_product() {
        let mut app = demo_app();
        app.dispatch(Control::PriceBandDemo);

        let surface = app.surface();
        assert_eq!(surface.log.len(), 11);
        assert_eq!(surface.log[1], "Laptop: 45.000 din -> Expensive");
        assert_eq!(surface.log[10], "Voda: 80 din -> Cheap");
    }

    #[test]
    fn shipping_demo_covers_known_unknown_and_accented_regions() {
        let mut app = demo_app();
        app.dispatch(Control::ShippingDemo);

        assert_eq!(
            app.surface().log,
            [
                "Shipping costs",
                "Shipping to Beograd: 300 din",
                "Shipping to Novi Sad: 400 din",
                "Shipping to Niš: 600 din",
                "Shipping to Kragujevac: 450 din",
                "Shipping to Subotica: 600 din",
            ]
        );
    }
}
