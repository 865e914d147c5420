//! Input entities and the output report projection.
//!
//! Reference data is permissive by design: ids and SKUs are opaque strings
//! (no charset constraint), unknown JSON fields are tolerated, and absent
//! per-item `quantity`/`discount` default to zero instead of erroring.

use core::fmt;

use serde::{Deserialize, Serialize};

macro_rules! def_token {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

def_token!(
    /// Opaque seller identifier. Assumed unique within a dataset.
    SellerId
);
def_token!(
    /// Opaque product stock-keeping unit.
    Sku
);

/// One seller record from the input batch.
#[derive(Clone, Debug, Deserialize)]
pub struct Seller {
    pub id: SellerId,
    pub first_name: String,
    pub last_name: String,
}

impl Seller {
    /// Display name: first and last name joined by one space.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Immutable catalog entry, looked up by SKU during accumulation.
/// Extra catalog fields (name, category) are reference-only and ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct Product {
    pub sku: Sku,
    /// Unit cost.
    pub purchase_price: f64,
    /// Unit list price.
    pub sale_price: f64,
}

/// One line inside a purchase record. Ephemeral; not retained after accumulation.
#[derive(Clone, Debug, Deserialize)]
pub struct LineItem {
    pub sku: Sku,
    #[serde(default)]
    pub quantity: u64,
    /// Percentage in 0–100.
    #[serde(default)]
    pub discount: f64,
    /// Effective unit price for this line; falls back to the product's
    /// list price when absent.
    #[serde(default)]
    pub sale_price: Option<f64>,
}

/// One purchase record: a seller id plus its line items, consumed once.
#[derive(Clone, Debug, Deserialize)]
pub struct PurchaseRecord {
    pub seller_id: SellerId,
    #[serde(default)]
    pub items: Vec<LineItem>,
}

/// The three input collections. All must be non-empty for analysis to run.
#[derive(Clone, Debug, Deserialize)]
pub struct Dataset {
    pub sellers: Vec<Seller>,
    pub products: Vec<Product>,
    pub purchase_records: Vec<PurchaseRecord>,
}

/// One row of a seller's bounded best-sellers list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopProduct {
    pub sku: Sku,
    pub quantity: u64,
}

/// The externally visible projection of one seller after ranking.
/// `revenue`, `profit`, and `bonus` carry exactly two decimals; nothing
/// upstream of this struct is rounded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub seller_id: SellerId,
    pub name: String,
    pub revenue: f64,
    pub profit: f64,
    pub sales_count: u64,
    pub top_products: Vec<TopProduct>,
    pub bonus: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_joins_with_one_space() {
        let s = Seller {
            id: "S1".into(),
            first_name: "Ann".into(),
            last_name: "Lee".into(),
        };
        assert_eq!(s.display_name(), "Ann Lee");
    }

    #[test]
    fn line_item_defaults_quantity_and_discount_to_zero() {
        let item: LineItem = serde_json::from_str(r#"{"sku":"X"}"#).unwrap();
        assert_eq!(item.quantity, 0);
        assert_eq!(item.discount, 0.0);
        assert!(item.sale_price.is_none());
    }

    #[test]
    fn purchase_record_tolerates_missing_items() {
        let rec: PurchaseRecord = serde_json::from_str(r#"{"seller_id":"S1"}"#).unwrap();
        assert!(rec.items.is_empty());
    }

    #[test]
    fn tokens_are_transparent_strings() {
        let sku: Sku = serde_json::from_str(r#""X-1""#).unwrap();
        assert_eq!(sku.as_str(), "X-1");
        assert_eq!(serde_json::to_string(&sku).unwrap(), r#""X-1""#);
    }
}
