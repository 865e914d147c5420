//! Bounded best-sellers extraction.

use std::collections::BTreeMap;

use sr_core::determinism::cmp_top_products;
use sr_core::entities::{Sku, TopProduct};

/// Fixed size bound of a seller's top-products list.
pub const TOP_PRODUCTS_LIMIT: usize = 10;

/// Convert a seller's SKU → quantity mapping into its report form:
/// quantity descending, ties by SKU ascending, truncated to
/// [`TOP_PRODUCTS_LIMIT`] rows.
pub fn top_products(products_sold: &BTreeMap<Sku, u64>) -> Vec<TopProduct> {
    let mut rows: Vec<TopProduct> = products_sold
        .iter()
        .map(|(sku, &quantity)| TopProduct {
            sku: sku.clone(),
            quantity,
        })
        .collect();
    rows.sort_by(cmp_top_products);
    rows.truncate(TOP_PRODUCTS_LIMIT);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sold(pairs: &[(&str, u64)]) -> BTreeMap<Sku, u64> {
        pairs.iter().map(|&(sku, q)| (Sku::from(sku), q)).collect()
    }

    #[test]
    fn orders_by_quantity_then_sku() {
        let rows = top_products(&sold(&[("B", 3), ("A", 3), ("C", 7)]));
        let got: Vec<(&str, u64)> = rows.iter().map(|r| (r.sku.as_str(), r.quantity)).collect();
        assert_eq!(got, vec![("C", 7), ("A", 3), ("B", 3)]);
    }

    #[test]
    fn truncates_to_ten_rows() {
        let pairs: Vec<(String, u64)> = (0..15).map(|i| (format!("P{i:02}"), i as u64)).collect();
        let map: BTreeMap<Sku, u64> = pairs
            .iter()
            .map(|(sku, q)| (Sku::from(sku.clone()), *q))
            .collect();
        let rows = top_products(&map);
        assert_eq!(rows.len(), TOP_PRODUCTS_LIMIT);
        // Highest quantities survive the cut.
        assert_eq!(rows[0].quantity, 14);
        assert_eq!(rows[9].quantity, 5);
    }

    #[test]
    fn empty_mapping_yields_empty_list() {
        assert!(top_products(&BTreeMap::new()).is_empty());
    }
}
