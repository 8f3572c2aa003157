use ndarray::Array1;

use optbench::{BenchError, BenchmarkFunction, SUCCESS_TOL, registry};

#[test]
fn test_whole_catalog_honors_the_optimum_invariant() {
    for &year in registry::CEC_YEARS {
        let len = registry::cec_len(year).unwrap();
        for index in 1..=len {
            let f = registry::cec(year, index, None).unwrap();
            let v = f.evaluate(f.x_global()).unwrap();
            assert!(
                (v - f.f_global()).abs() < 1e-8,
                "cec{}/f{}: {} vs {}",
                year,
                index,
                v,
                f.f_global()
            );
        }
    }
    for &name in registry::named_names() {
        let f = registry::named(name, None).unwrap();
        assert!(f.is_succeed(f.x_global(), SUCCESS_TOL).unwrap(), "{}", name);
    }
}

#[test]
fn test_cec_lookup() {
    let f = registry::cec(2015, 1, Some(10)).unwrap();
    assert_eq!(f.evaluate(f.x_global()).unwrap(), 100.0);
    assert_eq!(f.ndim(), 10);

    let f = registry::cec(2022, 12, None).unwrap();
    assert_eq!(f.f_global(), 2700.0);
}

#[test]
fn test_unknown_year_and_index_are_catalog_errors() {
    assert!(matches!(
        registry::cec(2016, 1, None),
        Err(BenchError::Catalog { .. })
    ));
    assert!(matches!(
        registry::cec(2015, 99, None),
        Err(BenchError::Catalog { .. })
    ));
    assert!(matches!(
        registry::named("schwefel_prime", None),
        Err(BenchError::Catalog { .. })
    ));
}

#[test]
fn test_suites_use_distinct_data() {
    // the same identifier scheme must not alias across years
    let a = registry::cec(2015, 10, Some(10)).unwrap();
    let b = registry::cec(2022, 10, Some(10)).unwrap();
    assert_ne!(a.x_global(), b.x_global());
}

#[test]
fn test_named_lookup_through_the_registry() {
    let f = registry::named("Six-Hump Camel", None).unwrap();
    assert_eq!(f.ndim(), 2);
    let near = f.x_global().clone();
    assert!(f.is_succeed(&near, SUCCESS_TOL).unwrap());
}

#[test]
fn test_trait_objects_expose_metadata() {
    let f = registry::cec(2015, 13, None).unwrap();
    assert!(f.name().starts_with("F13"));
    assert!(!f.formula().is_empty());
    assert!(f.properties().modality);
    assert_eq!(f.bounds().len(), f.ndim());
    assert_eq!(f.x_global().len(), f.ndim());
    assert_eq!(f.n_eval(), 0);
}

#[test]
fn test_catalog_sizes() {
    assert_eq!(registry::cec_len(2015), Some(15));
    assert_eq!(registry::cec_len(2022), Some(12));
    assert_eq!(registry::cec_len(2020), None);
    assert_eq!(registry::named_names().len(), 27);
}

#[test]
fn test_evaluation_is_pure_given_fixed_state() {
    let f = registry::cec(2022, 7, Some(10)).unwrap();
    let x = Array1::from_vec((0..10).map(|i| (i % 3) as f64 * 2.5 - 1.0).collect());
    let first = f.evaluate(&x).unwrap();
    for _ in 0..5 {
        assert_eq!(f.evaluate(&x).unwrap(), first);
    }
    assert_eq!(f.n_eval(), 6);
}
