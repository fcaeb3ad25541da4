use super::*;

#[test]
fn every_table_entry_resolves_and_names_round_trip() {
    for (name, builtin) in FUNCTIONS {
        assert_eq!(Builtin::lookup(name), Some(builtin));
        assert_eq!(builtin.name(), name);
        assert!(is_function(name));
    }
    assert_eq!(Builtin::lookup("max"), None);
    assert_eq!(Builtin::lookup("SIN"), None);
}

#[test]
fn log_is_base_ten_and_ln_is_natural() {
    assert!((Builtin::Log.apply(1000.0) - 3.0).abs() < 1e-12);
    assert!((Builtin::Ln.apply(std::f64::consts::E) - 1.0).abs() < 1e-12);
}

#[test]
fn constants_are_case_insensitive() {
    assert_eq!(constant("pi"), Some(PI));
    assert_eq!(constant("PI"), Some(PI));
    assert_eq!(constant("Pi"), Some(PI));
    assert_eq!(constant("π"), Some(PI));
    assert_eq!(constant("E"), Some(E));
    assert_eq!(constant("x"), None);
}

#[test]
fn round_sends_half_way_cases_up() {
    assert_eq!(Builtin::Round.apply(2.5), 3.0);
    assert_eq!(Builtin::Round.apply(-2.5), -2.0);
    assert_eq!(Builtin::Round.apply(-2.6), -3.0);
    assert_eq!(Builtin::Round.apply(0.49999999999999994), 0.0);
}

#[test]
fn sign_keeps_zero_and_nan() {
    assert_eq!(Builtin::Sign.apply(0.0), 0.0);
    assert_eq!(Builtin::Sign.apply(-3.0), -1.0);
    assert_eq!(Builtin::Sign.apply(7.0), 1.0);
    assert!(Builtin::Sign.apply(f64::NAN).is_nan());
}

#[test]
fn domain_errors_are_ieee_values() {
    assert!(Builtin::Sqrt.apply(-1.0).is_nan());
    assert!(Builtin::Asin.apply(2.0).is_nan());
    assert_eq!(Builtin::Ln.apply(0.0), f64::NEG_INFINITY);
    assert!(Builtin::Log.apply(-1.0).is_nan());
}

#[test]
fn pow_matches_ieee_with_unit_base_exception() {
    assert_eq!(pow(2.0, 10.0), 1024.0);
    assert_eq!(pow(0.0, -1.0), f64::INFINITY);
    assert!(pow(-8.0, 1.0 / 3.0).is_nan());
    assert!(pow(1.0, f64::NAN).is_nan());
    assert!(pow(-1.0, f64::INFINITY).is_nan());
    assert_eq!(pow(f64::NAN, 0.0), 1.0);
}
