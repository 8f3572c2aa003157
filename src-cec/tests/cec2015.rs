use ndarray::Array1;

use optbench_cec::y2015;
use optbench_core::{BenchError, BenchmarkFunction, SUCCESS_TOL};
use optbench_data::SyntheticStore;

fn store() -> SyntheticStore {
    SyntheticStore::labeled("data_2015")
}

#[test]
fn test_f1_reproduces_published_bias() {
    let store = store();
    let f1 = y2015::f1(Some(10), None, &store).unwrap();

    let at_optimum = f1.evaluate(f1.x_global()).unwrap();
    assert!((at_optimum - 100.0).abs() < 1e-8, "F1 at optimum: {}", at_optimum);

    let ones = Array1::ones(10);
    let away = f1.evaluate(&ones).unwrap();
    assert!(away.is_finite());
    assert!(away > 100.0);
}

#[test]
fn test_every_function_attains_its_bias_at_the_optimum() {
    let store = store();
    for ndim in [10, 30] {
        for index in 1..=y2015::LEN {
            let f = y2015::make(index, Some(ndim), None, &store).unwrap();
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
fn test_success_semantics() {
    let store = store();
    for index in 1..=y2015::LEN {
        let f = y2015::make(index, Some(10), None, &store).unwrap();
        assert!(f.is_succeed(f.x_global(), SUCCESS_TOL).unwrap(), "{}", f.name());

        let far = Array1::from_elem(10, 95.0);
        assert!(!f.is_succeed(&far, SUCCESS_TOL).unwrap(), "{} succeeded far away", f.name());
    }
}

#[test]
fn test_biases_follow_the_published_ladder() {
    let store = store();
    for (index, bias) in (1..=y2015::LEN).zip((1..).map(|k| 100.0 * k as f64)) {
        let f = y2015::make(index, None, None, &store).unwrap();
        assert_eq!(f.f_global(), bias, "{}", f.name());
    }
}

#[test]
fn test_unsupported_dimension_is_rejected() {
    let store = store();
    for ndim in [7, 20, 31] {
        match y2015::f1(Some(ndim), None, &store) {
            Err(BenchError::Dimension { requested, max, supported }) => {
                assert_eq!(requested, ndim);
                assert_eq!(max, 30);
                assert_eq!(supported, vec![10, 30]);
            }
            _ => panic!("D={} should be rejected", ndim),
        }
    }
}

#[test]
fn test_mismatched_bounds_are_rejected() {
    let store = store();
    let bounds = vec![(-100.0, 100.0); 7];
    assert!(matches!(
        y2015::f2(Some(10), Some(bounds), &store),
        Err(BenchError::Bounds { expected: 10, got: 7 })
    ));
}

#[test]
fn test_wrong_input_length_leaves_counter_unchanged() {
    let store = store();
    let f = y2015::f5(Some(10), None, &store).unwrap();

    let short = Array1::zeros(9);
    assert!(matches!(
        f.evaluate(&short),
        Err(BenchError::Input { expected: 10, got: 9 })
    ));
    assert_eq!(f.n_eval(), 0);

    let ok = Array1::zeros(10);
    for expected in 1..=4u64 {
        f.evaluate(&ok).unwrap();
        assert_eq!(f.n_eval(), expected);
    }
}

#[test]
fn test_is_succeed_counts_one_evaluation() {
    let store = store();
    let f = y2015::f6(Some(10), None, &store).unwrap();
    f.is_succeed(f.x_global(), SUCCESS_TOL).unwrap();
    assert_eq!(f.n_eval(), 1);
}

#[test]
fn test_two_instances_evaluate_identically() {
    let store = store();
    let x = Array1::from_vec((0..10).map(|i| (i as f64) - 4.5).collect());

    for index in 1..=y2015::LEN {
        let a = y2015::make(index, Some(10), None, &store).unwrap();
        let b = y2015::make(index, Some(10), None, &store).unwrap();

        assert_eq!(a.x_global(), b.x_global(), "{}", a.name());
        assert_eq!(a.f_global(), b.f_global(), "{}", a.name());
        assert_eq!(a.evaluate(&x).unwrap(), b.evaluate(&x).unwrap(), "{}", a.name());
    }
}

#[test]
fn test_default_dimension_and_bounds() {
    let store = store();
    let f = y2015::f3(None, None, &store).unwrap();
    assert_eq!(f.ndim(), 10);
    assert_eq!(f.bounds().len(), 10);
    assert_eq!(f.bounds()[0], (-100.0, 100.0));
    assert_eq!(f.x_global().len(), 10);
}

#[test]
fn test_parameters_are_exposed() {
    let store = store();
    let f = y2015::f1(Some(10), None, &store).unwrap();
    assert_eq!(f.shift().len(), 10);
    assert_eq!(f.rotation().shape(), &[10, 10]);
    assert_eq!(f.bias(), 100.0);
    assert_eq!(f.rescale(), 1.0);

    let h = y2015::f10(Some(10), None, &store).unwrap();
    assert_eq!(h.block_sizes().iter().sum::<usize>(), 10);
    assert_eq!(h.shuffle().len(), 10);

    let c = y2015::f13(Some(10), None, &store).unwrap();
    assert_eq!(c.shifts().shape(), &[5, 10]);
    assert_eq!(c.components().len(), 5);
}

#[test]
fn test_metadata_flags() {
    let store = store();
    let f1 = y2015::f1(None, None, &store).unwrap();
    assert!(f1.properties().unimodal);
    assert!(f1.properties().rotated);

    let f4 = y2015::f4(None, None, &store).unwrap();
    assert!(!f4.properties().unimodal);
    assert!(f4.properties().modality);

    let f5 = y2015::f5(None, None, &store).unwrap();
    assert!(!f5.properties().differentiable);
}

#[test]
fn test_file_store_backs_the_same_engine() {
    use optbench_data::FileStore;

    let tmp = tempfile::tempdir().unwrap();
    let shift: Vec<String> = (1..=10).map(|i| format!("{}.0", i)).collect();
    std::fs::write(tmp.path().join("shift_data_1_D10.txt"), shift.join(" ")).unwrap();

    let mut matrix = String::new();
    for i in 0..10 {
        let row: Vec<&str> = (0..10).map(|j| if i == j { "1.0" } else { "0.0" }).collect();
        matrix.push_str(&row.join(" "));
        matrix.push('\n');
    }
    std::fs::write(tmp.path().join("M_1_D10.txt"), matrix).unwrap();

    let file_store = FileStore::new(tmp.path());
    let f = y2015::f1(Some(10), None, &file_store).unwrap();
    assert_eq!(f.x_global().to_vec(), (1..=10).map(|i| i as f64).collect::<Vec<_>>());
    assert_eq!(f.evaluate(f.x_global()).unwrap(), 100.0);

    // identity rotation: pushing the first coordinate by 2 adds 2^2
    let mut x = f.x_global().clone();
    x[0] += 2.0;
    assert!((f.evaluate(&x).unwrap() - 104.0).abs() < 1e-12);
}

#[test]
fn test_unknown_index_is_a_catalog_error() {
    let store = store();
    assert!(matches!(
        y2015::make(16, None, None, &store),
        Err(BenchError::Catalog { .. })
    ));
    assert!(matches!(
        y2015::make(0, None, None, &store),
        Err(BenchError::Catalog { .. })
    ));
}
