use ndarray::Array1;

use optbench_core::{BenchError, BenchmarkFunction, SUCCESS_TOL};
use optbench_named::{NAMES, create};

#[test]
fn test_every_entry_attains_its_optimum() {
    for &name in NAMES {
        let f = create(name, None, None).unwrap();
        let v = f.evaluate(f.x_global()).unwrap();
        assert!(
            (v - f.f_global()).abs() < 1e-8,
            "{}: {} vs {}",
            f.name(),
            v,
            f.f_global()
        );
        assert!(f.is_succeed(f.x_global(), SUCCESS_TOL).unwrap(), "{}", f.name());
    }
}

#[test]
fn test_upper_corner_is_not_a_success() {
    for &name in NAMES {
        let f = create(name, None, None).unwrap();
        let corner = Array1::from_vec(f.bounds().iter().map(|&(_, hi)| hi).collect());
        assert!(
            !f.is_succeed(&corner, SUCCESS_TOL).unwrap(),
            "{} succeeded at the domain corner",
            f.name()
        );
    }
}

#[test]
fn test_lookup_is_case_and_separator_tolerant() {
    for query in ["Bukin N.6", "bukin_n6", "BukinN6", "BUKIN-N6"] {
        let f = create(query, None, None).unwrap();
        assert_eq!(f.name(), "Bukin N.6");
    }
    for query in ["goldstein_price", "Goldstein-Price", "goldsteinprice"] {
        assert!(create(query, None, None).is_ok());
    }
}

#[test]
fn test_unknown_name_is_a_catalog_error() {
    match create("no_such_function", None, None) {
        Err(BenchError::Catalog { query }) => assert_eq!(query, "no_such_function"),
        _ => panic!("expected a catalog error"),
    }
}

#[test]
fn test_fixed_dimension_entries_reject_other_dimensions() {
    assert!(matches!(
        create("beale", Some(5), None),
        Err(BenchError::Dimension { requested: 5, .. })
    ));
    assert!(create("beale", Some(2), None).is_ok());
}

#[test]
fn test_scalable_entries_accept_larger_dimensions() {
    for &name in &["ackley", "griewank", "rastrigin", "rosenbrock", "sphere", "zakharov"] {
        let f = create(name, Some(30), None).unwrap();
        assert_eq!(f.ndim(), 30);
        let v = f.evaluate(f.x_global()).unwrap();
        assert!((v - f.f_global()).abs() < 1e-8, "{} at D=30", name);
    }
}

#[test]
fn test_schwefel_and_styblinski_tang_scale_their_optimum_value() {
    let s10 = create("schwefel", Some(10), None).unwrap();
    let s30 = create("schwefel", Some(30), None).unwrap();
    assert!((s30.f_global() - 3.0 * s10.f_global()).abs() < 1e-3);

    let t = create("styblinski_tang", Some(10), None).unwrap();
    assert!((t.f_global() - 10.0 * -39.16617).abs() < 1e-2);
}

#[test]
fn test_asymmetric_default_domains() {
    let bukin = create("bukin_n6", None, None).unwrap();
    assert_eq!(bukin.bounds(), &[(-15.0, -5.0), (-3.0, 3.0)]);

    let branin = create("branin", None, None).unwrap();
    assert_eq!(branin.bounds(), &[(-5.0, 10.0), (0.0, 15.0)]);
}

#[test]
fn test_counter_and_input_validation() {
    let f = create("himmelblau", None, None).unwrap();

    let wrong = Array1::zeros(3);
    assert!(matches!(
        f.evaluate(&wrong),
        Err(BenchError::Input { expected: 2, got: 3 })
    ));
    assert_eq!(f.n_eval(), 0);

    let ok = Array1::zeros(2);
    f.evaluate(&ok).unwrap();
    f.evaluate(&ok).unwrap();
    assert_eq!(f.n_eval(), 2);
}

#[test]
fn test_bounds_override() {
    let f = create("sphere", Some(4), Some(vec![(-1.0, 1.0); 4])).unwrap();
    assert_eq!(f.bounds(), &[(-1.0, 1.0); 4]);

    assert!(matches!(
        create("sphere", Some(4), Some(vec![(-1.0, 1.0); 3])),
        Err(BenchError::Bounds { expected: 4, got: 3 })
    ));
}
