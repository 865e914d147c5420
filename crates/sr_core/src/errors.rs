//! The two fatal error kinds.
//!
//! Everything else is tolerated: an unknown seller id drops its record, an
//! unknown SKU drops its line item (the record still counts), and absent
//! quantities or discounts default to zero. Those outcomes are recorded as
//! named skip events by the pipeline, not raised as errors.

use core::fmt;

use thiserror::Error;

/// Which input collection a structural defect refers to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Collection {
    Sellers,
    Products,
    PurchaseRecords,
}

impl Collection {
    /// The JSON key of the collection in the dataset container.
    pub fn key(self) -> &'static str {
        match self {
            Collection::Sellers => "sellers",
            Collection::Products => "products",
            Collection::PurchaseRecords => "purchase_records",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Named structural defect of the top-level input shape.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputDefect {
    /// The dataset container is absent or not an object.
    MissingContainer,
    /// The collection key is absent or not an array.
    NotASequence(Collection),
    /// The collection is present but empty.
    EmptyCollection(Collection),
}

impl fmt::Display for InputDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputDefect::MissingContainer => write!(f, "dataset container is missing"),
            InputDefect::NotASequence(c) => write!(f, "`{c}` is missing or not a sequence"),
            InputDefect::EmptyCollection(c) => write!(f, "`{c}` is empty"),
        }
    }
}

/// The top-level input shape is wrong. Fatal; no partial result.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("invalid input data: {defect}")]
pub struct InvalidInputError {
    pub defect: InputDefect,
}

impl InvalidInputError {
    pub fn new(defect: InputDefect) -> Self {
        Self { defect }
    }
}

/// Which injected policy slot is unoccupied.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PolicySlot {
    Revenue,
    Bonus,
}

impl fmt::Display for PolicySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PolicySlot::Revenue => "revenue",
            PolicySlot::Bonus => "bonus",
        })
    }
}

/// A required policy function was not supplied. Fatal; no partial result.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("missing calculator: {slot} policy not supplied")]
pub struct MissingCalculatorsError {
    pub slot: PolicySlot,
}

impl MissingCalculatorsError {
    pub fn new(slot: PolicySlot) -> Self {
        Self { slot }
    }
}
