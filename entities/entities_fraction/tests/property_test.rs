//! Property tests for entities_fraction
//!
//! Fields span the whole `i64` range, so sums and products routinely leave
//! it.

use entities_fraction::*;
use proptest::prelude::*;

fn fraction() -> impl Strategy<Value = Fraction> {
    (any::<i64>(), any::<i64>().prop_filter("non-zero denominator", |d| *d != 0))
        .prop_map(|(numerator, denominator)| Fraction::new(numerator, denominator).unwrap())
}

fn small_fraction() -> impl Strategy<Value = Fraction> {
    (-10_000i64..10_000, 1i64..1_000, any::<bool>()).prop_map(|(numerator, denominator, flip)| {
        let denominator = if flip { -denominator } else { denominator };
        Fraction::new(numerator, denominator).unwrap()
    })
}

fn non_zero_fraction() -> impl Strategy<Value = Fraction> {
    fraction().prop_filter("non-zero", |f| !f.is_zero())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn value_is_closest_float(numerator in -1_000_000i64..1_000_000, denominator in 1i64..1_000_000) {
        let f = Fraction::new(numerator, denominator).unwrap();
        // Both sides are correctly rounded quotients of exactly representable integers.
        prop_assert_eq!(f.value(), numerator as f64 / denominator as f64);
    }

    #[test]
    fn denominator_is_always_positive(numerator in any::<i64>(), denominator in any::<i64>()) {
        prop_assume!(denominator != 0);
        let f = Fraction::new(numerator, denominator).unwrap();
        prop_assert!(*f.denominator() > 0);
        prop_assert_eq!(f.is_negative(), (numerator < 0) != (denominator < 0) && numerator != 0);
    }

    #[test]
    fn reduce_is_idempotent(f in fraction()) {
        let once = f.reduced();
        let twice = once.reduced();
        prop_assert!(once.strictly_equals(&twice));
        prop_assert!(once.is_reduced());
        prop_assert_eq!(once, f);
    }

    #[test]
    fn add_commutes(a in fraction(), b in fraction()) {
        prop_assert!(add(&a, &b).unwrap().strictly_equals(&add(&b, &a).unwrap()));
    }

    #[test]
    fn multiply_commutes(a in fraction(), b in fraction()) {
        prop_assert!(multiply(&a, &b).unwrap().strictly_equals(&multiply(&b, &a).unwrap()));
    }

    #[test]
    fn add_associates(a in fraction(), b in fraction(), c in fraction()) {
        let left = add(add(&a, &b).unwrap(), &c).unwrap();
        let right = add(&a, add(&b, &c).unwrap()).unwrap();
        prop_assert!(left.strictly_equals(&right));
    }

    #[test]
    fn multiply_associates(a in fraction(), b in fraction(), c in fraction()) {
        let left = multiply(multiply(&a, &b).unwrap(), &c).unwrap();
        let right = multiply(&a, multiply(&b, &c).unwrap()).unwrap();
        prop_assert!(left.strictly_equals(&right));
    }

    #[test]
    fn add_then_subtract_restores(a in fraction(), b in fraction()) {
        let sum = add(&a, &b).unwrap();
        prop_assert_eq!(subtract(&sum, &b).unwrap(), a);
    }

    #[test]
    fn divide_then_multiply_restores(a in fraction(), b in non_zero_fraction()) {
        let quotient = divide(&a, &b).unwrap();
        prop_assert_eq!(multiply(&quotient, &b).unwrap(), a);
    }

    #[test]
    fn exactly_one_ordering_holds(a in fraction(), b in fraction()) {
        let relations = [a < b, a == b, a > b];
        prop_assert_eq!(relations.iter().filter(|&&holds| holds).count(), 1);
    }

    #[test]
    fn ordering_matches_values(a in small_fraction(), b in small_fraction()) {
        prop_assume!(a != b);
        prop_assert_eq!(a < b, a.value() < b.value());
    }

    #[test]
    fn display_round_trips(f in fraction()) {
        let reduced = f.reduced();
        let parsed = Fraction::from_string(&reduced.to_string()).unwrap();
        prop_assert!(parsed.strictly_equals(&reduced));
    }

    #[test]
    fn mixed_display_round_trips(f in fraction()) {
        let parsed = Fraction::from_string(&f.to_mixed_string()).unwrap();
        prop_assert_eq!(parsed, f);
    }

    #[test]
    fn whole_and_fractional_parts_rebuild(f in fraction()) {
        let fractional = f.fractional_part();
        prop_assert!(fractional >= 0 && fractional < 1);
        prop_assert!(Fraction::from_mixed_number(f.whole_part(), &fractional).strictly_equals(&f));
    }

    #[test]
    fn modulo_matches_floor_division(a in fraction(), b in non_zero_fraction()) {
        let (quotient, remainder) = div_mod(&a, &b).unwrap();
        let rebuilt = add(multiply(&b, quotient).unwrap(), remainder).unwrap();
        prop_assert_eq!(rebuilt, a);
    }

    #[test]
    fn float_conversion_is_exact(value in any::<f64>()) {
        prop_assume!(value.is_finite());
        let f = Fraction::from_f64(value).unwrap();
        prop_assert!(f.is_reduced());
        prop_assert_eq!(f.value(), value);
    }
}
