//! Rank-tier bonus policy.

use sr_core::stats::SellerStats;

/// Computes one seller's bonus from its post-sort rank. Replaceable for
/// alternate incentive schemes; implementations return an **unrounded**
/// amount, the report builder applies the single output rounding.
pub trait BonusPolicy {
    fn bonus(&self, rank: usize, seller_count: usize, stats: &SellerStats) -> f64;
}

/// Default tiering: 15% for the top seller, 10% for second and third place,
/// nothing for the last seller, 5% otherwise.
///
/// Rule precedence is first > last > top-three > default, which settles the
/// tier boundaries: a lone seller is both first and last and gets 0.15; in a
/// field of two or three, the bottom seller gets 0.00 even though its rank
/// would otherwise fall in the top-three tier.
#[derive(Clone, Copy, Debug, Default)]
pub struct RankTierBonus;

impl RankTierBonus {
    /// Tier rate for a 0-based rank.
    pub fn rate(rank: usize, seller_count: usize) -> f64 {
        if rank == 0 {
            0.15
        } else if seller_count > 1 && rank == seller_count - 1 {
            0.0
        } else if rank <= 2 {
            0.10
        } else {
            0.05
        }
    }
}

impl BonusPolicy for RankTierBonus {
    fn bonus(&self, rank: usize, seller_count: usize, stats: &SellerStats) -> f64 {
        stats.profit() * Self::rate(rank, seller_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sr_core::entities::Seller;

    fn stats(profit: f64) -> SellerStats {
        let mut s = SellerStats::new(&Seller {
            id: "S".into(),
            first_name: "A".into(),
            last_name: "B".into(),
        });
        s.revenue = profit;
        s
    }

    #[test]
    fn lone_seller_is_first_not_last() {
        assert_eq!(RankTierBonus::rate(0, 1), 0.15);
    }

    #[test]
    fn two_sellers_bottom_rank_gets_nothing() {
        assert_eq!(RankTierBonus::rate(0, 2), 0.15);
        assert_eq!(RankTierBonus::rate(1, 2), 0.0);
    }

    #[test]
    fn three_sellers_last_beats_top_three_tier() {
        assert_eq!(RankTierBonus::rate(0, 3), 0.15);
        assert_eq!(RankTierBonus::rate(1, 3), 0.10);
        assert_eq!(RankTierBonus::rate(2, 3), 0.0);
    }

    #[test]
    fn five_sellers_cover_every_tier() {
        assert_eq!(RankTierBonus::rate(0, 5), 0.15);
        assert_eq!(RankTierBonus::rate(1, 5), 0.10);
        assert_eq!(RankTierBonus::rate(2, 5), 0.10);
        assert_eq!(RankTierBonus::rate(3, 5), 0.05);
        assert_eq!(RankTierBonus::rate(4, 5), 0.0);
    }

    #[test]
    fn bonus_is_profit_times_rate() {
        assert_eq!(RankTierBonus.bonus(0, 3, &stats(20.0)), 20.0 * 0.15);
        assert_eq!(RankTierBonus.bonus(3, 5, &stats(100.0)), 100.0 * 0.05);
        assert_eq!(RankTierBonus.bonus(2, 3, &stats(41.5)), 0.0);
    }
}
