//! sr_core — Core types, accumulator, rounding policy, and ordering helpers.
//!
//! This crate is **I/O-free**. It defines the stable types shared across the
//! engine (`sr_io`, `sr_algo`, `sr_pipeline`, `sr_report`, `sr_cli`):
//!
//! - Reference tokens: `SellerId`, `Sku`
//! - Input entities: `Seller`, `Product`, `PurchaseRecord`, `LineItem`,
//!   and the `Dataset` container holding the three collections
//! - The per-seller accumulator `SellerStats`
//! - Output projection: `ReportEntry`, `TopProduct`
//! - Two-decimal output rounding (`rounding::round2`)
//! - Deterministic comparison helpers (`determinism`)
//! - The two fatal error kinds (`errors`)

#![forbid(unsafe_code)]

pub mod determinism;
pub mod entities;
pub mod errors;
pub mod rounding;
pub mod stats;

pub mod prelude {
    //! Lightweight re-exports so downstream crates can do `use sr_core::prelude::*`.

    pub use crate::entities::{
        Dataset, LineItem, Product, PurchaseRecord, ReportEntry, Seller, SellerId, Sku, TopProduct,
    };
    pub use crate::errors::{
        Collection, InputDefect, InvalidInputError, MissingCalculatorsError, PolicySlot,
    };
    pub use crate::rounding::round2;
    pub use crate::stats::SellerStats;
}
