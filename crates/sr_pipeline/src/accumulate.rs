//! ACCUMULATE stage: fold the flat purchase-record list into one statistics
//! record per seller.
//!
//! Permissive-skip policy: an unknown seller id drops the whole record, an
//! unknown SKU drops the line item (the record still counts). Both outcomes
//! are recorded as named events so tests can assert on them; neither is an
//! error. All sums stay in full `f64` precision.

use std::collections::{BTreeMap, HashMap};

use sr_algo::RevenuePolicy;
use sr_core::entities::{Dataset, Product, SellerId, Sku};
use sr_core::stats::SellerStats;

/// One tolerated anomaly observed during the pass, in input order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipEvent {
    /// Record ignored: unknown seller. Nothing was counted.
    RecordIgnoredUnknownSeller { seller_id: SellerId },
    /// Item ignored: unknown product. The record's sale still counted.
    ItemIgnoredUnknownProduct { seller_id: SellerId, sku: Sku },
}

/// Ordered trace of skips for one accumulation pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkipLog {
    pub events: Vec<SkipEvent>,
}

impl SkipLog {
    pub fn records_ignored(&self) -> u64 {
        self.events
            .iter()
            .filter(|e| matches!(e, SkipEvent::RecordIgnoredUnknownSeller { .. }))
            .count() as u64
    }

    pub fn items_ignored(&self) -> u64 {
        self.events
            .iter()
            .filter(|e| matches!(e, SkipEvent::ItemIgnoredUnknownProduct { .. }))
            .count() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Stage output: the accumulator arena plus the skip trace.
#[derive(Clone, Debug)]
pub struct Accumulation {
    /// One accumulator per input seller, keyed by id. Owned here; never
    /// aliased outside this stage.
    pub stats: BTreeMap<SellerId, SellerStats>,
    pub skips: SkipLog,
}

/// Walk the purchase records once, updating per-seller running totals.
pub fn accumulate(data: &Dataset, revenue: &dyn RevenuePolicy) -> Accumulation {
    let mut stats: BTreeMap<SellerId, SellerStats> = data
        .sellers
        .iter()
        .map(|s| (s.id.clone(), SellerStats::new(s)))
        .collect();
    let product_by_sku: HashMap<&Sku, &Product> =
        data.products.iter().map(|p| (&p.sku, p)).collect();

    let mut skips = SkipLog::default();

    for record in &data.purchase_records {
        let Some(seller) = stats.get_mut(&record.seller_id) else {
            tracing::debug!(seller_id = %record.seller_id, "record ignored: unknown seller");
            skips.events.push(SkipEvent::RecordIgnoredUnknownSeller {
                seller_id: record.seller_id.clone(),
            });
            continue;
        };

        // One sale per record, regardless of how many items resolve.
        seller.sales_count += 1;

        for item in &record.items {
            let Some(&product) = product_by_sku.get(&item.sku) else {
                tracing::debug!(
                    seller_id = %record.seller_id,
                    sku = %item.sku,
                    "item ignored: unknown product"
                );
                skips.events.push(SkipEvent::ItemIgnoredUnknownProduct {
                    seller_id: record.seller_id.clone(),
                    sku: item.sku.clone(),
                });
                continue;
            };

            let unit_cost_total = product.purchase_price * item.quantity as f64;
            let item_revenue = revenue.line_revenue(item, product);

            seller.revenue += item_revenue;
            seller.cost += unit_cost_total;
            *seller.products_sold.entry(item.sku.clone()).or_insert(0) += item.quantity;
        }
    }

    Accumulation { stats, skips }
}
