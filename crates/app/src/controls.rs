//! Fixed mapping from control identifiers to handlers.
//!
//! Each identifier is bound to exactly one handler at startup; there is no
//! dynamic rebinding and no handler removal.

/// One variant per clickable control.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Control {
    ShowAll,
    ShowExpensive,
    ShowCheap,
    SortByName,
    SortByPrice,
    ShowTotal,
    ShowCategories,
    RecursiveDemo,
    PriceBandDemo,
    ShippingDemo,
}

impl Control {
    /// Every control with its textual identifier and on-screen label.
    pub const ALL: [(Control, &'static str, &'static str); 10] = [
        (Control::ShowAll, "show-all", "Show all products"),
        (Control::ShowExpensive, "show-expensive", "Show expensive products"),
        (Control::ShowCheap, "show-cheap", "Show cheap products"),
        (Control::SortByName, "sort-by-name", "Sort by name"),
        (Control::SortByPrice, "sort-by-price", "Sort by price"),
        (Control::ShowTotal, "show-total", "Show total value"),
        (Control::ShowCategories, "show-categories", "Show category breakdown"),
        (Control::RecursiveDemo, "recursive-demo", "Recursive demonstrations"),
        (Control::PriceBandDemo, "price-band-demo", "Price-band demonstration"),
        (Control::ShippingDemo, "shipping-demo", "Shipping-cost demonstration"),
    ];

    /// Map a textual identifier to its control, if any.
    pub fn parse(id: &str) -> Option<Control> {
        Self::ALL
            .iter()
            .find(|(_, control_id, _)| *control_id == id)
            .map(|(control, _, _)| *control)
    }

    pub fn id(&self) -> &'static str {
        Self::ALL
            .iter()
            .find(|(control, _, _)| control == self)
            .map(|(_, id, _)| *id)
            .unwrap_or("")
    }

    pub fn label(&self) -> &'static str {
        Self::ALL
            .iter()
            .find(|(control, _, _)| control == self)
            .map(|(_, _, label)| *label)
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_control_round_trips_through_its_id() {
        for (control, id, label) in Control::ALL {
            assert_eq!(Control::parse(id), Some(control));
            assert_eq!(control.id(), id);
            assert_eq!(control.label(), label);
            assert!(!label.is_empty());
        }
    }

    #[test]
    fn unknown_ids_do_not_parse() {
        assert_eq!(Control::parse("show-everything"), None);
        assert_eq!(Control::parse(""), None);
    }

    #[test]
    fn identifiers_are_unique() {
        let mut ids: Vec<&str> = Control::ALL.iter().map(|(_, id, _)| *id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Control::ALL.len());
    }
}
