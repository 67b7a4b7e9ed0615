//! Flat-fee shipping lookup over a fixed region table.

/// Fee in dinars for regions not present in the table.
pub const DEFAULT_SHIPPING_FEE: u32 = 600;

// Keys are stored lowercase; lookup lowercases the input.
const SHIPPING_TABLE: &[(&str, u32)] = &[
    ("beograd", 300),
    ("novi sad", 400),
    ("nis", 500),
    ("kragujevac", 450),
];

/// Case-insensitive exact-match lookup of the flat shipping fee.
///
/// Unknown regions get [`DEFAULT_SHIPPING_FEE`]. Note that `"Niš"` lowercases
/// to `"niš"`, which does not match the ASCII `"nis"` table key and therefore
/// also gets the default fee.
pub fn shipping_cost(region: &str) -> u32 {
    let needle = region.to_lowercase();
    SHIPPING_TABLE
        .iter()
        .find(|(name, _)| *name == needle)
        .map(|(_, fee)| *fee)
        .unwrap_or(DEFAULT_SHIPPING_FEE)
}
