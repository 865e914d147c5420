//! sr_pipeline — deterministic pipeline surface (validate → accumulate →
//! rank → build report).
//!
//! This crate stays I/O-free: JSON loading and artifact writing live in
//! `sr_io`, formulas in `sr_algo`. Each stage is a pure function in its own
//! module; this file only wires them together and defines the public error
//! surface.

#![forbid(unsafe_code)]

pub mod accumulate;
pub mod build_report;
pub mod rank;
pub mod validate;

use sr_algo::{BonusPolicy, DiscountedListPrice, RankTierBonus, RevenuePolicy};
use sr_core::entities::{Dataset, ReportEntry};
use sr_core::errors::{InvalidInputError, MissingCalculatorsError};
use thiserror::Error;

pub use accumulate::{SkipEvent, SkipLog};

/// The two injected collaborators, passed in rather than owned by the engine.
/// An unoccupied slot fails validation with `MissingCalculatorsError`.
#[derive(Clone, Copy)]
pub struct Policies<'a> {
    pub revenue: Option<&'a dyn RevenuePolicy>,
    pub bonus: Option<&'a dyn BonusPolicy>,
}

impl Policies<'static> {
    /// The canonical policy pair: discounted list price and rank tiering.
    pub fn standard() -> Self {
        Self {
            revenue: Some(&DiscountedListPrice),
            bonus: Some(&RankTierBonus),
        }
    }

    /// Both slots empty; only useful for exercising the validation path.
    pub fn none() -> Self {
        Self {
            revenue: None,
            bonus: None,
        }
    }
}

/// Single error surface for the pipeline. Exactly two kinds: everything else
/// is tolerated by the permissive-skip policy and lands in the [`SkipLog`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum AnalyzeError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
    #[error(transparent)]
    MissingCalculators(#[from] MissingCalculatorsError),
}

/// Full pipeline outputs: the ranked report plus the skip trace.
#[derive(Clone, Debug)]
pub struct AnalysisOutputs {
    /// Report entries in rank order (best profit first).
    pub report: Vec<ReportEntry>,
    /// Named record/item skips observed during accumulation.
    pub skips: SkipLog,
}

/// Run the four stages over one dataset with fresh accumulators.
///
/// Deterministic: identical inputs yield identical outputs, including the
/// order of skip events.
pub fn run(data: &Dataset, policies: &Policies<'_>) -> Result<AnalysisOutputs, AnalyzeError> {
    let resolved = validate::validate(data, policies)?;
    tracing::debug!(
        sellers = data.sellers.len(),
        products = data.products.len(),
        purchase_records = data.purchase_records.len(),
        "inputs validated"
    );

    let accumulation = accumulate::accumulate(data, resolved.revenue);
    let ranked = rank::rank(accumulation.stats);
    let report = build_report::build_report(&ranked, resolved.bonus);

    Ok(AnalysisOutputs {
        report,
        skips: accumulation.skips,
    })
}

/// Report-only convenience over [`run`].
pub fn analyze(data: &Dataset, policies: &Policies<'_>) -> Result<Vec<ReportEntry>, AnalyzeError> {
    run(data, policies).map(|outputs| outputs.report)
}
