//! RANK stage: order the accumulators by profit.

use std::collections::BTreeMap;

use sr_core::determinism::cmp_rank;
use sr_core::entities::SellerId;
use sr_core::stats::SellerStats;

/// Consume the accumulator arena and return it in rank order: profit
/// descending, ties by seller id ascending. Rank is the resulting index.
pub fn rank(stats: BTreeMap<SellerId, SellerStats>) -> Vec<SellerStats> {
    let mut ranked: Vec<SellerStats> = stats.into_values().collect();
    ranked.sort_by(cmp_rank);
    ranked
}
