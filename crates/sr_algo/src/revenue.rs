//! Line-revenue policy.

use sr_core::entities::{LineItem, Product};

/// Computes the revenue contributed by a single line item. The engine is
/// agnostic to the formula beyond expecting a numeric, line-level result;
/// alternate discount schemes are swappable implementations of this trait.
pub trait RevenuePolicy {
    fn line_revenue(&self, item: &LineItem, product: &Product) -> f64;
}

/// Default policy: `sale_price * quantity * (1 − discount/100)`, unrounded.
///
/// The line's own `sale_price` wins when present; otherwise the product's
/// list price applies.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiscountedListPrice;

impl RevenuePolicy for DiscountedListPrice {
    fn line_revenue(&self, item: &LineItem, product: &Product) -> f64 {
        let sale_price = item.sale_price.unwrap_or(product.sale_price);
        sale_price * item.quantity as f64 * (1.0 - item.discount / 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(sale_price: f64) -> Product {
        Product {
            sku: "X".into(),
            purchase_price: 10.0,
            sale_price,
        }
    }

    fn item(quantity: u64, discount: f64, sale_price: Option<f64>) -> LineItem {
        LineItem {
            sku: "X".into(),
            quantity,
            discount,
            sale_price,
        }
    }

    #[test]
    fn undiscounted_line_is_price_times_quantity() {
        let r = DiscountedListPrice.line_revenue(&item(2, 0.0, None), &product(20.0));
        assert_eq!(r, 40.0);
    }

    #[test]
    fn discount_is_a_percentage() {
        let r = DiscountedListPrice.line_revenue(&item(4, 25.0, None), &product(10.0));
        assert_eq!(r, 30.0);
    }

    #[test]
    fn item_price_overrides_list_price() {
        let r = DiscountedListPrice.line_revenue(&item(1, 0.0, Some(15.0)), &product(20.0));
        assert_eq!(r, 15.0);
    }

    #[test]
    fn zero_quantity_contributes_nothing() {
        let r = DiscountedListPrice.line_revenue(&item(0, 50.0, None), &product(20.0));
        assert_eq!(r, 0.0);
    }

    #[test]
    fn full_discount_zeroes_the_line() {
        let r = DiscountedListPrice.line_revenue(&item(3, 100.0, None), &product(20.0));
        assert_eq!(r, 0.0);
    }
}
