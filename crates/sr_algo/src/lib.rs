//! sr_algo — pure algorithm entry points for the seller report engine.
//!
//! No I/O, no clock, no RNG. Everything here is a deterministic function of
//! its arguments:
//!
//! - `revenue`: the swappable line-revenue policy and its default
//!   (discounted list price)
//! - `bonus`: the swappable bonus policy and its default (rank tiering)
//! - `top_products`: bounded best-sellers extraction

#![forbid(unsafe_code)]

pub mod bonus;
pub mod revenue;
pub mod top_products;

pub use bonus::{BonusPolicy, RankTierBonus};
pub use revenue::{DiscountedListPrice, RevenuePolicy};
pub use top_products::{top_products, TOP_PRODUCTS_LIMIT};
