use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::product_type::UnitOfMeasure;
use crate::entities::quotation::AdjustmentMode;

/// A discount or tax as entered on a quotation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct Adjustment {
    pub amount: Decimal,
    pub mode: AdjustmentMode,
}

impl Adjustment {
    pub fn none() -> Self {
        Self {
            amount: Decimal::ZERO,
            mode: AdjustmentMode::Fixed,
        }
    }

    fn applied_to(&self, base: Decimal) -> Decimal {
        match self.mode {
            AdjustmentMode::Fixed => self.amount,
            AdjustmentMode::Percentage => base * self.amount / dec!(100),
        }
    }
}

/// Quantity and unit price of one quotation line, as needed by pricing.
#[derive(Debug, Clone, Copy)]
pub struct LineInput {
    pub quantity: Decimal,
    pub unit_price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PricingBreakdown {
    pub subtotal: Decimal,
    pub discount_amount: Decimal,
    pub tax_amount: Decimal,
    pub grand_total: Decimal,
}

/// Prices a quotation from its lines. Discount is applied to the subtotal,
/// tax to the discounted amount, and the grand total never goes below zero.
pub fn price_quotation(
    lines: &[LineInput],
    discount: Adjustment,
    tax: Adjustment,
) -> PricingBreakdown {
    let subtotal: Decimal = lines
        .iter()
        .map(|line| line.quantity * line.unit_price)
        .sum();

    let discount_amount = discount.applied_to(subtotal);
    let after_discount = subtotal - discount_amount;
    let tax_amount = tax.applied_to(after_discount);
    let grand_total = (after_discount + tax_amount).max(Decimal::ZERO);

    PricingBreakdown {
        subtotal,
        discount_amount,
        tax_amount,
        grand_total,
    }
}

/// Stock quantity a line consumes. Area-unit products deduct width by height
/// by count; missing dimensions default to one.
pub fn required_quantity(
    unit: UnitOfMeasure,
    quantity: Decimal,
    width: Option<Decimal>,
    height: Option<Decimal>,
) -> Decimal {
    match unit {
        UnitOfMeasure::Sqm => {
            width.unwrap_or(Decimal::ONE) * height.unwrap_or(Decimal::ONE) * quantity
        }
        UnitOfMeasure::Pcs => quantity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(quantity: Decimal, unit_price: Decimal) -> LineInput {
        LineInput {
            quantity,
            unit_price,
        }
    }

    #[test]
    fn percentage_discount_then_percentage_tax() {
        // 2 x 100 + 1 x 50 = 250; 10% off = 225; 15% tax on 225 = 33.75
        let breakdown = price_quotation(
            &[line(dec!(2), dec!(100)), line(dec!(1), dec!(50))],
            Adjustment {
                amount: dec!(10),
                mode: AdjustmentMode::Percentage,
            },
            Adjustment {
                amount: dec!(15),
                mode: AdjustmentMode::Percentage,
            },
        );

        assert_eq!(breakdown.subtotal, dec!(250));
        assert_eq!(breakdown.discount_amount, dec!(25));
        assert_eq!(breakdown.tax_amount, dec!(33.75));
        assert_eq!(breakdown.grand_total, dec!(258.75));
    }

    #[test]
    fn fixed_discount_applies_before_tax() {
        let breakdown = price_quotation(
            &[line(dec!(4), dec!(25))],
            Adjustment {
                amount: dec!(20),
                mode: AdjustmentMode::Fixed,
            },
            Adjustment {
                amount: dec!(10),
                mode: AdjustmentMode::Percentage,
            },
        );

        assert_eq!(breakdown.subtotal, dec!(100));
        assert_eq!(breakdown.discount_amount, dec!(20));
        // tax is computed from the discounted 80, not the subtotal
        assert_eq!(breakdown.tax_amount, dec!(8));
        assert_eq!(breakdown.grand_total, dec!(88));
    }

    #[test]
    fn grand_total_clamps_at_zero() {
        let breakdown = price_quotation(
            &[line(dec!(1), dec!(30))],
            Adjustment {
                amount: dec!(100),
                mode: AdjustmentMode::Fixed,
            },
            Adjustment::none(),
        );

        assert_eq!(breakdown.grand_total, Decimal::ZERO);
        // the raw discount is still reported as entered
        assert_eq!(breakdown.discount_amount, dec!(100));
    }

    #[test]
    fn line_order_does_not_change_totals() {
        let a = [line(dec!(3), dec!(19.5)), line(dec!(2), dec!(7.25))];
        let b = [line(dec!(2), dec!(7.25)), line(dec!(3), dec!(19.5))];
        let discount = Adjustment {
            amount: dec!(5),
            mode: AdjustmentMode::Percentage,
        };
        let tax = Adjustment {
            amount: dec!(14),
            mode: AdjustmentMode::Percentage,
        };

        assert_eq!(
            price_quotation(&a, discount, tax),
            price_quotation(&b, discount, tax)
        );
    }

    #[test]
    fn empty_quotation_prices_to_zero() {
        let breakdown = price_quotation(&[], Adjustment::none(), Adjustment::none());
        assert_eq!(breakdown.subtotal, Decimal::ZERO);
        assert_eq!(breakdown.grand_total, Decimal::ZERO);
    }

    #[test]
    fn area_unit_consumes_width_times_height_times_count() {
        let required = required_quantity(
            UnitOfMeasure::Sqm,
            dec!(2),
            Some(dec!(1.5)),
            Some(dec!(2)),
        );
        assert_eq!(required, dec!(6));
    }

    #[test]
    fn area_unit_defaults_missing_dimensions_to_one() {
        let required = required_quantity(UnitOfMeasure::Sqm, dec!(3), None, Some(dec!(2)));
        assert_eq!(required, dec!(6));
    }

    #[test]
    fn piece_unit_ignores_dimensions() {
        let required = required_quantity(
            UnitOfMeasure::Pcs,
            dec!(5),
            Some(dec!(10)),
            Some(dec!(10)),
        );
        assert_eq!(required, dec!(5));
    }
}
