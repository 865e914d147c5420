//! BUILD_REPORT stage: project ranked accumulators into report entries.
//!
//! The single rounding point of the engine: `revenue`, `profit`, and `bonus`
//! are each rounded to two decimals exactly once, here.

use sr_algo::{top_products, BonusPolicy};
use sr_core::entities::ReportEntry;
use sr_core::rounding::round2;
use sr_core::stats::SellerStats;

/// Derive bonus and top products for each ranked seller and emit the final
/// entries, in rank order.
pub fn build_report(ranked: &[SellerStats], bonus: &dyn BonusPolicy) -> Vec<ReportEntry> {
    let seller_count = ranked.len();
    ranked
        .iter()
        .enumerate()
        .map(|(rank, stats)| ReportEntry {
            seller_id: stats.id.clone(),
            name: stats.name.clone(),
            revenue: round2(stats.revenue),
            profit: round2(stats.profit()),
            sales_count: stats.sales_count,
            top_products: top_products(&stats.products_sold),
            bonus: round2(bonus.bonus(rank, seller_count, stats)),
        })
        .collect()
}
