//! Unit tests for the Money module
//!
//! Tests cover minor-unit arithmetic, the half-to-even rounding rule used
//! by every pricing component, rate application, and serde behavior.

use core_kernel::{Money, MoneyError, Rate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod rounding {
    use super::*;

    #[test]
    fn test_exact_integers_are_unchanged() {
        assert_eq!(Money::round(dec!(3000)).unwrap(), Money::from_minor(3000));
        assert_eq!(Money::round(dec!(0)).unwrap(), Money::zero());
        assert_eq!(Money::round(dec!(-450)).unwrap(), Money::from_minor(-450));
    }

    #[test]
    fn test_below_half_rounds_down_above_half_rounds_up() {
        assert_eq!(Money::round(dec!(449.4)).unwrap().minor(), 449);
        assert_eq!(Money::round(dec!(449.6)).unwrap().minor(), 450);
        assert_eq!(Money::round(dec!(-449.4)).unwrap().minor(), -449);
        assert_eq!(Money::round(dec!(-449.6)).unwrap().minor(), -450);
    }

    #[test]
    fn test_ties_resolve_to_even() {
        assert_eq!(Money::round(dec!(0.5)).unwrap().minor(), 0);
        assert_eq!(Money::round(dec!(1.5)).unwrap().minor(), 2);
        assert_eq!(Money::round(dec!(2.5)).unwrap().minor(), 2);
        assert_eq!(Money::round(dec!(3.5)).unwrap().minor(), 4);
        assert_eq!(Money::round(dec!(-0.5)).unwrap().minor(), 0);
        assert_eq!(Money::round(dec!(-98.5)).unwrap().minor(), -98);
        assert_eq!(Money::round(dec!(-99.5)).unwrap().minor(), -100);
    }

    #[test]
    fn test_overflow_is_an_error() {
        let too_big = Decimal::from(i64::MAX) * dec!(10);
        assert_eq!(Money::round(too_big), Err(MoneyError::Overflow));
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_add_sub_neg() {
        let a = Money::from_minor(3000);
        let b = Money::from_minor(450);

        assert_eq!((a + b).minor(), 3450);
        assert_eq!((a - b).minor(), 2550);
        assert_eq!((-b).minor(), -450);
    }

    #[test]
    fn test_sum_over_iterator() {
        let shares = [
            Money::from_minor(2100),
            Money::from_minor(450),
            Money::from_minor(100),
            Money::from_minor(350),
        ];
        let total: Money = shares.iter().copied().sum();
        assert_eq!(total, Money::from_minor(3000));
    }

    #[test]
    fn test_checked_operations_report_overflow() {
        let max = Money::from_minor(i64::MAX);
        let one = Money::from_minor(1);

        assert_eq!(max.checked_add(&one), Err(MoneyError::Overflow));
        assert_eq!(Money::from_minor(i64::MIN).checked_sub(&one), Err(MoneyError::Overflow));
        assert_eq!(max.checked_mul(2), Err(MoneyError::Overflow));
    }

    #[test]
    fn test_checked_mul_scales_per_day_fees() {
        let per_day = Money::from_minor(500);
        assert_eq!(per_day.checked_mul(3).unwrap(), Money::from_minor(1500));
    }
}

mod rates {
    use super::*;

    #[test]
    fn test_commission_rate_application_is_unrounded() {
        let commission = Rate::new(dec!(0.3));
        let half = Rate::new(dec!(0.5));

        let base = Money::from_minor(3000);
        let insurance_part = commission.apply(base) * half.as_decimal();
        assert_eq!(insurance_part, dec!(450));
    }

    #[test]
    fn test_complement() {
        let commission = Rate::new(dec!(0.3));
        assert_eq!(commission.complement().as_decimal(), dec!(0.7));
    }

    #[test]
    fn test_from_percentage() {
        assert_eq!(Rate::from_percentage(dec!(30)).as_decimal(), dec!(0.3));
    }
}

mod serde_behavior {
    use super::*;

    #[test]
    fn test_money_serializes_as_bare_integer() {
        let m = Money::from_minor(3000);
        assert_eq!(serde_json::to_string(&m).unwrap(), "3000");
    }

    #[test]
    fn test_money_deserializes_from_bare_integer() {
        let m: Money = serde_json::from_str("-98").unwrap();
        assert_eq!(m, Money::from_minor(-98));
    }
}
