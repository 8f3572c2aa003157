use ndarray::Array1;

use optbench_cec::y2022;
use optbench_core::{BenchError, BenchmarkFunction, SUCCESS_TOL};
use optbench_data::SyntheticStore;

fn store() -> SyntheticStore {
    SyntheticStore::labeled("data_2022")
}

const BIASES: &[f64] = &[
    300.0, 400.0, 600.0, 800.0, 900.0, 1800.0, 2000.0, 2200.0, 2300.0, 2400.0, 2600.0, 2700.0,
];

#[test]
fn test_every_function_attains_its_bias_at_the_optimum() {
    let store = store();
    for ndim in [10, 20] {
        for index in 1..=y2022::LEN {
            let f = y2022::make(index, Some(ndim), None, &store).unwrap();
            let v = f.evaluate(f.x_global()).unwrap();
            assert!(
                (v - f.f_global()).abs() < 1e-8,
                "{} (D={}): {} vs {}",
                f.name(),
                ndim,
                v,
                f.f_global()
            );
        }
    }
}

#[test]
fn test_published_biases() {
    let store = store();
    for (index, &bias) in (1..=y2022::LEN).zip(BIASES.iter()) {
        let f = y2022::make(index, None, None, &store).unwrap();
        assert_eq!(f.f_global(), bias, "{}", f.name());
    }
}

#[test]
fn test_success_semantics() {
    let store = store();
    for index in 1..=y2022::LEN {
        let f = y2022::make(index, Some(10), None, &store).unwrap();
        assert!(f.is_succeed(f.x_global(), SUCCESS_TOL).unwrap(), "{}", f.name());

        let far = Array1::from_elem(10, 95.0);
        assert!(!f.is_succeed(&far, SUCCESS_TOL).unwrap(), "{} succeeded far away", f.name());
    }
}

#[test]
fn test_dimension_thirty_is_not_in_this_suite() {
    let store = store();
    assert!(matches!(
        y2022::f1(Some(30), None, &store),
        Err(BenchError::Dimension { requested: 30, max: 20, .. })
    ));
}

#[test]
fn test_hybrids_partition_every_coordinate() {
    // a hybrid must see all coordinates exactly once: moving any single
    // coordinate away from the optimum must change the fitness
    let store = store();
    for index in [6, 7, 8] {
        let f = y2022::make(index, Some(10), None, &store).unwrap();
        let base = f.evaluate(f.x_global()).unwrap();
        for coord in 0..10 {
            let mut x = f.x_global().clone();
            x[coord] += 7.5;
            let moved = f.evaluate(&x).unwrap();
            assert!(
                (moved - base).abs() > 1e-10,
                "{}: coordinate {} is dead",
                f.name(),
                coord
            );
        }
    }
}

#[test]
fn test_two_instances_evaluate_identically() {
    let store = store();
    let x = Array1::from_vec((0..10).map(|i| 3.0 * (i as f64) - 12.0).collect());

    for index in 1..=y2022::LEN {
        let a = y2022::make(index, Some(10), None, &store).unwrap();
        let b = y2022::make(index, Some(10), None, &store).unwrap();
        assert_eq!(a.evaluate(&x).unwrap(), b.evaluate(&x).unwrap(), "{}", a.name());
    }
}

#[test]
fn test_counter_increments_per_call() {
    let store = store();
    let f = y2022::f9(Some(10), None, &store).unwrap();
    let x = Array1::zeros(10);
    for expected in 1..=3u64 {
        f.evaluate(&x).unwrap();
        assert_eq!(f.n_eval(), expected);
    }
}
