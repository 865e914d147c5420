//! Stable ordering helpers.
//!
//! Every sort in the engine goes through a total order defined here, so two
//! runs over identical inputs produce byte-identical reports.

use core::cmp::Ordering;

use crate::entities::TopProduct;
use crate::stats::SellerStats;

/// Rank order: profit descending, ties by seller id ascending.
///
/// `f64::total_cmp` keeps the order total even for pathological values a
/// custom revenue policy might produce.
pub fn cmp_rank(a: &SellerStats, b: &SellerStats) -> Ordering {
    b.profit()
        .total_cmp(&a.profit())
        .then_with(|| a.id.cmp(&b.id))
}

/// Top-products order: quantity descending, ties by SKU ascending.
pub fn cmp_top_products(a: &TopProduct, b: &TopProduct) -> Ordering {
    b.quantity.cmp(&a.quantity).then_with(|| a.sku.cmp(&b.sku))
}
