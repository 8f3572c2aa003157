//! CEC 2022 benchmark suite
//!
//! Twelve functions: five single-kernel shifted/rotated functions, three
//! hybrids and four compositions. Bounds are [-100, 100] per coordinate;
//! supported dimensions are 10 and 20.

use optbench_core::{BenchError, BenchmarkFunction, DimensionDefaults, FunctionProperties};
use optbench_data::DataSource;
use optbench_operators as operator;
use optbench_operators::Kernel;

use crate::composition::{Composition, CompositionComponent, CompositionSpec};
use crate::hybrid::{Hybrid, HybridSpec};
use crate::shift_rotate::{ShiftRotate, ShiftRotateSpec};

/// Number of functions in the suite.
pub const LEN: usize = 12;

fn defaults() -> DimensionDefaults {
    DimensionDefaults {
        default: 10,
        max: 20,
        supported: vec![10, 20],
        bounds: (-100.0, 100.0),
        bounds_per_dim: None,
    }
}

type Bounds = Option<Vec<(f64, f64)>>;

/// F1: Shifted and Rotated Zakharov Function
pub fn f1(
    ndim: Option<usize>,
    bounds: Bounds,
    store: &dyn DataSource,
) -> Result<ShiftRotate, BenchError> {
    ShiftRotate::new(
        ShiftRotateSpec {
            name: "F1: Shifted and Rotated Zakharov Function",
            formula: "zakharov(M (x - o)) + 300",
            kernel: operator::zakharov,
            shift_id: "shift_data_1",
            matrix_id: "M_1_D",
            bias: 300.0,
            rescale: 1.0,
            properties: FunctionProperties {
                convex: true,
                unimodal: true,
                ..Default::default()
            },
        },
        &defaults(),
        ndim,
        bounds,
        store,
    )
}

/// F2: Shifted and Rotated Rosenbrock's Function
pub fn f2(
    ndim: Option<usize>,
    bounds: Bounds,
    store: &dyn DataSource,
) -> Result<ShiftRotate, BenchError> {
    ShiftRotate::new(
        ShiftRotateSpec {
            name: "F2: Shifted and Rotated Rosenbrock's Function",
            formula: "rosenbrock(M (2.048 (x - o) / 100)) + 400",
            kernel: operator::rosenbrock,
            shift_id: "shift_data_2",
            matrix_id: "M_2_D",
            bias: 400.0,
            rescale: 2.048 / 100.0,
            properties: FunctionProperties {
                characteristics: vec![
                    "Local optima's number is huge".to_string(),
                ],
                ..Default::default()
            },
        },
        &defaults(),
        ndim,
        bounds,
        store,
    )
}

/// F3: Shifted and Rotated Expanded Schaffer F6 Function
pub fn f3(
    ndim: Option<usize>,
    bounds: Bounds,
    store: &dyn DataSource,
) -> Result<ShiftRotate, BenchError> {
    ShiftRotate::new(
        ShiftRotateSpec {
            name: "F3: Shifted and Rotated Expanded Schaffer F6 Function",
            formula: "expanded_schaffer_f6(M (x - o)) + 600",
            kernel: operator::expanded_schaffer_f6,
            shift_id: "shift_data_3",
            matrix_id: "M_3_D",
            bias: 600.0,
            rescale: 1.0,
            properties: FunctionProperties {
                modality: true,
                ..Default::default()
            },
        },
        &defaults(),
        ndim,
        bounds,
        store,
    )
}

/// F4: Shifted and Rotated Non-Continuous Rastrigin's Function
pub fn f4(
    ndim: Option<usize>,
    bounds: Bounds,
    store: &dyn DataSource,
) -> Result<ShiftRotate, BenchError> {
    ShiftRotate::new(
        ShiftRotateSpec {
            name: "F4: Shifted and Rotated Non-Continuous Rastrigin's Function",
            formula: "nc_rastrigin(M (5.12 (x - o) / 100)) + 800",
            kernel: operator::non_continuous_rastrigin,
            shift_id: "shift_data_4",
            matrix_id: "M_4_D",
            bias: 800.0,
            rescale: 5.12 / 100.0,
            properties: FunctionProperties {
                continuous: false,
                differentiable: false,
                modality: true,
                characteristics: vec!["Asymmetrical".to_string()],
                ..Default::default()
            },
        },
        &defaults(),
        ndim,
        bounds,
        store,
    )
}

/// F5: Shifted and Rotated Levy Function
pub fn f5(
    ndim: Option<usize>,
    bounds: Bounds,
    store: &dyn DataSource,
) -> Result<ShiftRotate, BenchError> {
    ShiftRotate::new(
        ShiftRotateSpec {
            name: "F5: Shifted and Rotated Levy Function",
            formula: "levy(M (x - o)) + 900",
            kernel: operator::levy,
            shift_id: "shift_data_5",
            matrix_id: "M_5_D",
            bias: 900.0,
            rescale: 1.0,
            properties: FunctionProperties {
                modality: true,
                ..Default::default()
            },
        },
        &defaults(),
        ndim,
        bounds,
        store,
    )
}

const F6_COMPONENTS: &[(f64, Kernel)] = &[
    (0.4, operator::bent_cigar),
    (0.4, operator::hgbat),
    (0.2, operator::rastrigin),
];

/// F6: Hybrid Function 1 (N=3)
pub fn f6(
    ndim: Option<usize>,
    bounds: Bounds,
    store: &dyn DataSource,
) -> Result<Hybrid, BenchError> {
    Hybrid::new(
        HybridSpec {
            name: "F6: Hybrid Function 1 (N=3)",
            formula: "bent_cigar/hgbat/rastrigin over shuffled blocks + 1800",
            shift_id: "shift_data_6",
            matrix_id: "M_6_D",
            shuffle_id: "shuffle_data_6_D",
            bias: 1800.0,
            components: F6_COMPONENTS,
            properties: FunctionProperties {
                modality: true,
                characteristics: vec![
                    "Different properties for different variables subcomponents".to_string(),
                ],
                ..Default::default()
            },
        },
        &defaults(),
        ndim,
        bounds,
        store,
    )
}

const F7_COMPONENTS: &[(f64, Kernel)] = &[
    (0.1, operator::hgbat),
    (0.2, operator::katsuura),
    (0.2, operator::ackley),
    (0.2, operator::rastrigin),
    (0.1, operator::modified_schwefel),
    (0.2, operator::schaffer_f7),
];

/// F7: Hybrid Function 2 (N=6)
pub fn f7(
    ndim: Option<usize>,
    bounds: Bounds,
    store: &dyn DataSource,
) -> Result<Hybrid, BenchError> {
    Hybrid::new(
        HybridSpec {
            name: "F7: Hybrid Function 2 (N=6)",
            formula: "hgbat/katsuura/ackley/rastrigin/schwefel/schaffer over shuffled blocks + 2000",
            shift_id: "shift_data_7",
            matrix_id: "M_7_D",
            shuffle_id: "shuffle_data_7_D",
            bias: 2000.0,
            components: F7_COMPONENTS,
            properties: FunctionProperties {
                modality: true,
                characteristics: vec![
                    "Different properties for different variables subcomponents".to_string(),
                ],
                ..Default::default()
            },
        },
        &defaults(),
        ndim,
        bounds,
        store,
    )
}

const F8_COMPONENTS: &[(f64, Kernel)] = &[
    (0.3, operator::katsuura),
    (0.2, operator::happy_cat),
    (0.2, operator::expanded_griewank_rosenbrock),
    (0.1, operator::modified_schwefel),
    (0.2, operator::ackley),
];

/// F8: Hybrid Function 3 (N=5)
pub fn f8(
    ndim: Option<usize>,
    bounds: Bounds,
    store: &dyn DataSource,
) -> Result<Hybrid, BenchError> {
    Hybrid::new(
        HybridSpec {
            name: "F8: Hybrid Function 3 (N=5)",
            formula: "katsuura/happycat/grie_rosen/schwefel/ackley over shuffled blocks + 2200",
            shift_id: "shift_data_8",
            matrix_id: "M_8_D",
            shuffle_id: "shuffle_data_8_D",
            bias: 2200.0,
            components: F8_COMPONENTS,
            properties: FunctionProperties {
                modality: true,
                characteristics: vec![
                    "Different properties for different variables subcomponents".to_string(),
                ],
                ..Default::default()
            },
        },
        &defaults(),
        ndim,
        bounds,
        store,
    )
}

const F9_COMPONENTS: &[CompositionComponent] = &[
    CompositionComponent {
        sigma: 10.0,
        lambda: 1.0,
        bias: 0.0,
        kernel: operator::rosenbrock,
        rescale: 2.048 / 100.0,
        rotated: true,
    },
    CompositionComponent {
        sigma: 20.0,
        lambda: 1e-6,
        bias: 200.0,
        kernel: operator::high_conditioned_elliptic,
        rescale: 1.0,
        rotated: true,
    },
    CompositionComponent {
        sigma: 30.0,
        lambda: 1e-26,
        bias: 300.0,
        kernel: operator::bent_cigar,
        rescale: 1.0,
        rotated: true,
    },
    CompositionComponent {
        sigma: 40.0,
        lambda: 1e-6,
        bias: 100.0,
        kernel: operator::discus,
        rescale: 1.0,
        rotated: true,
    },
    CompositionComponent {
        sigma: 50.0,
        lambda: 1e-6,
        bias: 400.0,
        kernel: operator::high_conditioned_elliptic,
        rescale: 1.0,
        rotated: false,
    },
];

/// F9: Composition Function 1 (N=5)
pub fn f9(
    ndim: Option<usize>,
    bounds: Bounds,
    store: &dyn DataSource,
) -> Result<Composition, BenchError> {
    Composition::new(
        CompositionSpec {
            name: "F9: Composition Function 1 (N=5)",
            formula: "weighted blend of rosenbrock/elliptic/bent_cigar/discus + 2300",
            shift_id: "shift_data_9",
            matrix_id: "M_9_D",
            bias: 2300.0,
            components: F9_COMPONENTS,
            properties: FunctionProperties {
                modality: true,
                characteristics: vec![
                    "Asymmetrical".to_string(),
                    "Different properties around different local optima".to_string(),
                ],
                ..Default::default()
            },
        },
        &defaults(),
        ndim,
        bounds,
        store,
    )
}

const F10_COMPONENTS: &[CompositionComponent] = &[
    CompositionComponent {
        sigma: 20.0,
        lambda: 1.0,
        bias: 0.0,
        kernel: operator::modified_schwefel,
        rescale: 1000.0 / 100.0,
        rotated: true,
    },
    CompositionComponent {
        sigma: 10.0,
        lambda: 1.0,
        bias: 200.0,
        kernel: operator::rastrigin,
        rescale: 5.12 / 100.0,
        rotated: true,
    },
    CompositionComponent {
        sigma: 10.0,
        lambda: 1.0,
        bias: 100.0,
        kernel: operator::hgbat,
        rescale: 5.0 / 100.0,
        rotated: true,
    },
];

/// F10: Composition Function 2 (N=3)
pub fn f10(
    ndim: Option<usize>,
    bounds: Bounds,
    store: &dyn DataSource,
) -> Result<Composition, BenchError> {
    Composition::new(
        CompositionSpec {
            name: "F10: Composition Function 2 (N=3)",
            formula: "weighted blend of schwefel/rastrigin/hgbat + 2400",
            shift_id: "shift_data_10",
            matrix_id: "M_10_D",
            bias: 2400.0,
            components: F10_COMPONENTS,
            properties: FunctionProperties {
                modality: true,
                characteristics: vec![
                    "Asymmetrical".to_string(),
                    "Different properties around different local optima".to_string(),
                ],
                ..Default::default()
            },
        },
        &defaults(),
        ndim,
        bounds,
        store,
    )
}

const F11_COMPONENTS: &[CompositionComponent] = &[
    CompositionComponent {
        sigma: 20.0,
        lambda: 5e-4,
        bias: 0.0,
        kernel: operator::expanded_schaffer_f6,
        rescale: 1.0,
        rotated: true,
    },
    CompositionComponent {
        sigma: 20.0,
        lambda: 1.0,
        bias: 200.0,
        kernel: operator::modified_schwefel,
        rescale: 1000.0 / 100.0,
        rotated: true,
    },
    CompositionComponent {
        sigma: 30.0,
        lambda: 10.0,
        bias: 300.0,
        kernel: operator::griewank,
        rescale: 6.0 / 100.0,
        rotated: true,
    },
    CompositionComponent {
        sigma: 30.0,
        lambda: 1.0,
        bias: 400.0,
        kernel: operator::rosenbrock,
        rescale: 2.048 / 100.0,
        rotated: true,
    },
    CompositionComponent {
        sigma: 20.0,
        lambda: 10.0,
        bias: 200.0,
        kernel: operator::rastrigin,
        rescale: 5.12 / 100.0,
        rotated: true,
    },
];

/// F11: Composition Function 3 (N=5)
pub fn f11(
    ndim: Option<usize>,
    bounds: Bounds,
    store: &dyn DataSource,
) -> Result<Composition, BenchError> {
    Composition::new(
        CompositionSpec {
            name: "F11: Composition Function 3 (N=5)",
            formula: "weighted blend of schaffer/schwefel/griewank/rosenbrock/rastrigin + 2600",
            shift_id: "shift_data_11",
            matrix_id: "M_11_D",
            bias: 2600.0,
            components: F11_COMPONENTS,
            properties: FunctionProperties {
                modality: true,
                characteristics: vec![
                    "Asymmetrical".to_string(),
                    "Different properties around different local optima".to_string(),
                ],
                ..Default::default()
            },
        },
        &defaults(),
        ndim,
        bounds,
        store,
    )
}

const F12_COMPONENTS: &[CompositionComponent] = &[
    CompositionComponent {
        sigma: 10.0,
        lambda: 10.0,
        bias: 0.0,
        kernel: operator::hgbat,
        rescale: 5.0 / 100.0,
        rotated: true,
    },
    CompositionComponent {
        sigma: 20.0,
        lambda: 10.0,
        bias: 300.0,
        kernel: operator::rastrigin,
        rescale: 5.12 / 100.0,
        rotated: true,
    },
    CompositionComponent {
        sigma: 30.0,
        lambda: 2.5,
        bias: 500.0,
        kernel: operator::modified_schwefel,
        rescale: 1000.0 / 100.0,
        rotated: true,
    },
    CompositionComponent {
        sigma: 40.0,
        lambda: 1e-26,
        bias: 100.0,
        kernel: operator::bent_cigar,
        rescale: 1.0,
        rotated: true,
    },
    CompositionComponent {
        sigma: 50.0,
        lambda: 1e-6,
        bias: 400.0,
        kernel: operator::high_conditioned_elliptic,
        rescale: 1.0,
        rotated: true,
    },
    CompositionComponent {
        sigma: 60.0,
        lambda: 5e-4,
        bias: 200.0,
        kernel: operator::expanded_schaffer_f6,
        rescale: 1.0,
        rotated: true,
    },
];

/// F12: Composition Function 4 (N=6)
pub fn f12(
    ndim: Option<usize>,
    bounds: Bounds,
    store: &dyn DataSource,
) -> Result<Composition, BenchError> {
    Composition::new(
        CompositionSpec {
            name: "F12: Composition Function 4 (N=6)",
            formula: "weighted blend of hgbat/rastrigin/schwefel/bent_cigar/elliptic/schaffer + 2700",
            shift_id: "shift_data_12",
            matrix_id: "M_12_D",
            bias: 2700.0,
            components: F12_COMPONENTS,
            properties: FunctionProperties {
                modality: true,
                characteristics: vec![
                    "Asymmetrical".to_string(),
                    "Different properties around different local optima".to_string(),
                ],
                ..Default::default()
            },
        },
        &defaults(),
        ndim,
        bounds,
        store,
    )
}

/// Construct function `index` (1-based) of the suite.
///
/// # Errors
///
/// `BenchError::Catalog` when the index is outside `1..=12`, otherwise the
/// constructor's own errors.
pub fn make(
    index: usize,
    ndim: Option<usize>,
    bounds: Bounds,
    store: &dyn DataSource,
) -> Result<Box<dyn BenchmarkFunction>, BenchError> {
    Ok(match index {
        1 => Box::new(f1(ndim, bounds, store)?),
        2 => Box::new(f2(ndim, bounds, store)?),
        3 => Box::new(f3(ndim, bounds, store)?),
        4 => Box::new(f4(ndim, bounds, store)?),
        5 => Box::new(f5(ndim, bounds, store)?),
        6 => Box::new(f6(ndim, bounds, store)?),
        7 => Box::new(f7(ndim, bounds, store)?),
        8 => Box::new(f8(ndim, bounds, store)?),
        9 => Box::new(f9(ndim, bounds, store)?),
        10 => Box::new(f10(ndim, bounds, store)?),
        11 => Box::new(f11(ndim, bounds, store)?),
        12 => Box::new(f12(ndim, bounds, store)?),
        _ => return Err(BenchError::Catalog { query: format!("cec2022/f{}", index) }),
    })
}
