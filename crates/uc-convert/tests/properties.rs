//! Algebraic properties of the conversion service.

use bigdecimal::{BigDecimal, One};
use proptest::prelude::*;
use uc_convert::{ConversionService, parse_rules};
use uc_core::decimal;
use uc_expr::{ParsedExpression, evaluate};

const UNITS: &[&str] = &["km", "m", "cm", "mm", "hour", "min", "s", "kg", "g"];

fn service() -> ConversionService {
    let rules = parse_rules(concat!(
        "km,m,1000\n",
        "m,cm,100\n",
        "m,mm,1000\n",
        "hour,min,60\n",
        "min,s,60\n",
        "kg,g,1000\n",
    ))
    .unwrap();
    ConversionService::new(&rules).unwrap()
}

/// Random well-formed expression over the known units, up to 4 factors per
/// side; either side may be empty (dimensionless identity).
fn expression() -> impl Strategy<Value = String> {
    let factor = prop::sample::select(UNITS);
    let side = prop::collection::vec(factor, 0..4);
    (side.clone(), side).prop_map(|(numerator, denominator)| {
        let numerator = numerator.join("*");
        if denominator.is_empty() {
            numerator
        } else {
            format!("{numerator}/{}", denominator.join("*"))
        }
    })
}

proptest! {
    #[test]
    fn conversion_to_self_is_identity(expr in expression()) {
        let service = service();
        let ratio = service.convert_ratio(&expr, &expr).unwrap();
        prop_assert_eq!(ratio, BigDecimal::one());
    }

    #[test]
    fn forward_and_backward_ratios_cancel(a in expression(), b in expression()) {
        let service = service();
        // only dimensionally compatible pairs have ratios at all
        let (Ok(forward), Ok(back)) = (service.convert_ratio(&a, &b), service.convert_ratio(&b, &a)) else {
            return Ok(());
        };
        // each side accumulates 15-digit roundings, so compare at 12 digits
        let product = decimal::mul_half_up(&forward, &back, 12);
        prop_assert_eq!(product.normalized(), BigDecimal::one());
    }

    #[test]
    fn power_profile_equality_is_commutative(a in expression(), b in expression()) {
        let service = service();
        let graph = service.graph();
        let lhs = evaluate(&ParsedExpression::parse(&a), graph).unwrap();
        let rhs = evaluate(&ParsedExpression::parse(&b), graph).unwrap();

        prop_assert!(lhs.has_equal_powers(&lhs));
        prop_assert!(rhs.has_equal_powers(&rhs));
        prop_assert_eq!(lhs.has_equal_powers(&rhs), rhs.has_equal_powers(&lhs));
    }
}
