//! Structural validation before any computation.
//!
//! A pure predicate with no side effects: non-emptiness of the three typed
//! collections and presence of both policy slots. Shape-level defects
//! (missing container, non-array collection) are caught earlier, at the JSON
//! boundary in `sr_io`, with the same error type. Malformed *individual*
//! records are deliberately not checked here; accumulation skips them.

use sr_algo::{BonusPolicy, RevenuePolicy};
use sr_core::entities::Dataset;
use sr_core::errors::{
    Collection, InputDefect, InvalidInputError, MissingCalculatorsError, PolicySlot,
};

use crate::{AnalyzeError, Policies};

/// Both policy slots, proven occupied.
#[derive(Clone, Copy)]
pub struct ResolvedPolicies<'a> {
    pub revenue: &'a dyn RevenuePolicy,
    pub bonus: &'a dyn BonusPolicy,
}

impl std::fmt::Debug for ResolvedPolicies<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedPolicies").finish_non_exhaustive()
    }
}

/// Reject empty collections and unoccupied policy slots.
pub fn validate<'a>(
    data: &Dataset,
    policies: &Policies<'a>,
) -> Result<ResolvedPolicies<'a>, AnalyzeError> {
    check_non_empty(data)?;

    let revenue = policies
        .revenue
        .ok_or(MissingCalculatorsError::new(PolicySlot::Revenue))?;
    let bonus = policies
        .bonus
        .ok_or(MissingCalculatorsError::new(PolicySlot::Bonus))?;

    Ok(ResolvedPolicies { revenue, bonus })
}

fn check_non_empty(data: &Dataset) -> Result<(), InvalidInputError> {
    if data.sellers.is_empty() {
        return Err(InvalidInputError::new(InputDefect::EmptyCollection(
            Collection::Sellers,
        )));
    }
    if data.products.is_empty() {
        return Err(InvalidInputError::new(InputDefect::EmptyCollection(
            Collection::Products,
        )));
    }
    if data.purchase_records.is_empty() {
        return Err(InvalidInputError::new(InputDefect::EmptyCollection(
            Collection::PurchaseRecords,
        )));
    }
    Ok(())
}
