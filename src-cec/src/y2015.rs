//! CEC 2015 benchmark suite
//!
//! Fifteen functions: nine single-kernel shifted/rotated functions, three
//! hybrids and three compositions, biases 100..1500. Bounds are
//! [-100, 100] per coordinate; supported dimensions are 10 and 30.

use optbench_core::{BenchError, BenchmarkFunction, DimensionDefaults, FunctionProperties};
use optbench_data::DataSource;
use optbench_operators as operator;
use optbench_operators::Kernel;

use crate::composition::{Composition, CompositionComponent, CompositionSpec};
use crate::hybrid::{Hybrid, HybridSpec};
use crate::shift_rotate::{ShiftRotate, ShiftRotateSpec};

/// Number of functions in the suite.
pub const LEN: usize = 15;

fn defaults() -> DimensionDefaults {
    DimensionDefaults {
        default: 10,
        max: 30,
        supported: vec![10, 30],
        bounds: (-100.0, 100.0),
        bounds_per_dim: None,
    }
}

type Bounds = Option<Vec<(f64, f64)>>;

/// F1: Rotated Bent Cigar Function
pub fn f1(
    ndim: Option<usize>,
    bounds: Bounds,
    store: &dyn DataSource,
) -> Result<ShiftRotate, BenchError> {
    ShiftRotate::new(
        ShiftRotateSpec {
            name: "F1: Rotated Bent Cigar Function",
            formula: "bent_cigar(M (x - o)) + 100",
            kernel: operator::bent_cigar,
            shift_id: "shift_data_1_D",
            matrix_id: "M_1_D",
            bias: 100.0,
            rescale: 1.0,
            properties: FunctionProperties {
                convex: true,
                unimodal: true,
                characteristics: vec!["Smooth but narrow ridge".to_string()],
                ..Default::default()
            },
        },
        &defaults(),
        ndim,
        bounds,
        store,
    )
}

/// F2: Rotated Discus Function
pub fn f2(
    ndim: Option<usize>,
    bounds: Bounds,
    store: &dyn DataSource,
) -> Result<ShiftRotate, BenchError> {
    ShiftRotate::new(
        ShiftRotateSpec {
            name: "F2: Rotated Discus Function",
            formula: "discus(M (x - o)) + 200",
            kernel: operator::discus,
            shift_id: "shift_data_2_D",
            matrix_id: "M_2_D",
            bias: 200.0,
            rescale: 1.0,
            properties: FunctionProperties {
                convex: true,
                unimodal: true,
                characteristics: vec!["With one sensitive direction".to_string()],
                ..Default::default()
            },
        },
        &defaults(),
        ndim,
        bounds,
        store,
    )
}

/// F3: Shifted and Rotated Weierstrass Function
pub fn f3(
    ndim: Option<usize>,
    bounds: Bounds,
    store: &dyn DataSource,
) -> Result<ShiftRotate, BenchError> {
    ShiftRotate::new(
        ShiftRotateSpec {
            name: "F3: Shifted and Rotated Weierstrass Function",
            formula: "weierstrass(M (0.5 (x - o) / 100)) + 300",
            kernel: operator::weierstrass,
            shift_id: "shift_data_3_D",
            matrix_id: "M_3_D",
            bias: 300.0,
            rescale: 0.5 / 100.0,
            properties: FunctionProperties {
                characteristics: vec![
                    "Continuous but differentiable only on a set of points".to_string(),
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

/// F4: Shifted and Rotated Schwefel's Function
pub fn f4(
    ndim: Option<usize>,
    bounds: Bounds,
    store: &dyn DataSource,
) -> Result<ShiftRotate, BenchError> {
    ShiftRotate::new(
        ShiftRotateSpec {
            name: "F4: Shifted and Rotated Schwefel's Function",
            formula: "modified_schwefel(M (1000 (x - o) / 100)) + 400",
            kernel: operator::modified_schwefel,
            shift_id: "shift_data_4_D",
            matrix_id: "M_4_D",
            bias: 400.0,
            rescale: 1000.0 / 100.0,
            properties: FunctionProperties {
                modality: true,
                characteristics: vec![
                    "Local optima's number is huge".to_string(),
                    "The second better local optimum is far from the global optimum".to_string(),
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

/// F5: Shifted and Rotated Katsuura Function
pub fn f5(
    ndim: Option<usize>,
    bounds: Bounds,
    store: &dyn DataSource,
) -> Result<ShiftRotate, BenchError> {
    ShiftRotate::new(
        ShiftRotateSpec {
            name: "F5: Shifted and Rotated Katsuura Function",
            formula: "katsuura(M (5 (x - o) / 100)) + 500",
            kernel: operator::katsuura,
            shift_id: "shift_data_5_D",
            matrix_id: "M_5_D",
            bias: 500.0,
            rescale: 5.0 / 100.0,
            properties: FunctionProperties {
                differentiable: false,
                modality: true,
                characteristics: vec![
                    "Continuous everywhere yet differentiable nowhere".to_string(),
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

/// F6: Shifted and Rotated HappyCat Function
pub fn f6(
    ndim: Option<usize>,
    bounds: Bounds,
    store: &dyn DataSource,
) -> Result<ShiftRotate, BenchError> {
    ShiftRotate::new(
        ShiftRotateSpec {
            name: "F6: Shifted and Rotated HappyCat Function",
            formula: "happy_cat(M (5 (x - o) / 100)) + 600",
            kernel: operator::happy_cat,
            shift_id: "shift_data_6_D",
            matrix_id: "M_6_D",
            bias: 600.0,
            rescale: 5.0 / 100.0,
            properties: FunctionProperties {
                differentiable: false,
                characteristics: vec![
                    "Continuous everywhere yet differentiable nowhere".to_string(),
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

/// F7: Shifted and Rotated HGBat Function
pub fn f7(
    ndim: Option<usize>,
    bounds: Bounds,
    store: &dyn DataSource,
) -> Result<ShiftRotate, BenchError> {
    ShiftRotate::new(
        ShiftRotateSpec {
            name: "F7: Shifted and Rotated HGBat Function",
            formula: "hgbat(M (5 (x - o) / 100)) + 700",
            kernel: operator::hgbat,
            shift_id: "shift_data_7_D",
            matrix_id: "M_7_D",
            bias: 700.0,
            rescale: 5.0 / 100.0,
            properties: FunctionProperties {
                differentiable: false,
                characteristics: vec![
                    "Continuous everywhere yet differentiable nowhere".to_string(),
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

/// F8: Shifted and Rotated Expanded Griewank plus Rosenbrock Function
pub fn f8(
    ndim: Option<usize>,
    bounds: Bounds,
    store: &dyn DataSource,
) -> Result<ShiftRotate, BenchError> {
    ShiftRotate::new(
        ShiftRotateSpec {
            name: "F8: Shifted and Rotated Expanded Griewank plus Rosenbrock Function",
            formula: "grie_rosen(M (5 (x - o) / 100)) + 800",
            kernel: operator::expanded_griewank_rosenbrock,
            shift_id: "shift_data_8_D",
            matrix_id: "M_8_D",
            bias: 800.0,
            rescale: 5.0 / 100.0,
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

/// F9: Shifted and Rotated Expanded Schaffer F6 Function
pub fn f9(
    ndim: Option<usize>,
    bounds: Bounds,
    store: &dyn DataSource,
) -> Result<ShiftRotate, BenchError> {
    ShiftRotate::new(
        ShiftRotateSpec {
            name: "F9: Shifted and Rotated Expanded Schaffer F6 Function",
            formula: "expanded_schaffer_f6(M (x - o)) + 900",
            kernel: operator::expanded_schaffer_f6,
            shift_id: "shift_data_9_D",
            matrix_id: "M_9_D",
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

const F10_COMPONENTS: &[(f64, Kernel)] = &[
    (0.3, operator::modified_schwefel),
    (0.3, operator::rastrigin),
    (0.4, operator::high_conditioned_elliptic),
];

/// F10: Hybrid Function 1 (N=3)
pub fn f10(
    ndim: Option<usize>,
    bounds: Bounds,
    store: &dyn DataSource,
) -> Result<Hybrid, BenchError> {
    Hybrid::new(
        HybridSpec {
            name: "F10: Hybrid Function 1 (N=3)",
            formula: "schwefel/rastrigin/elliptic over shuffled blocks + 1000",
            shift_id: "shift_data_10",
            matrix_id: "M_10_D",
            shuffle_id: "shuffle_data_10_D",
            bias: 1000.0,
            components: F10_COMPONENTS,
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

const F11_COMPONENTS: &[(f64, Kernel)] = &[
    (0.2, operator::griewank),
    (0.2, operator::weierstrass),
    (0.3, operator::rosenbrock),
    (0.3, operator::expanded_schaffer_f6),
];

/// F11: Hybrid Function 2 (N=4)
pub fn f11(
    ndim: Option<usize>,
    bounds: Bounds,
    store: &dyn DataSource,
) -> Result<Hybrid, BenchError> {
    Hybrid::new(
        HybridSpec {
            name: "F11: Hybrid Function 2 (N=4)",
            formula: "griewank/weierstrass/rosenbrock/schaffer over shuffled blocks + 1100",
            shift_id: "shift_data_11",
            matrix_id: "M_11_D",
            shuffle_id: "shuffle_data_11_D",
            bias: 1100.0,
            components: F11_COMPONENTS,
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

const F12_COMPONENTS: &[(f64, Kernel)] = &[
    (0.1, operator::katsuura),
    (0.2, operator::happy_cat),
    (0.2, operator::expanded_griewank_rosenbrock),
    (0.2, operator::modified_schwefel),
    (0.3, operator::ackley),
];

/// F12: Hybrid Function 3 (N=5)
pub fn f12(
    ndim: Option<usize>,
    bounds: Bounds,
    store: &dyn DataSource,
) -> Result<Hybrid, BenchError> {
    Hybrid::new(
        HybridSpec {
            name: "F12: Hybrid Function 3 (N=5)",
            formula: "katsuura/happycat/grie_rosen/schwefel/ackley over shuffled blocks + 1200",
            shift_id: "shift_data_12",
            matrix_id: "M_12_D",
            shuffle_id: "shuffle_data_12_D",
            bias: 1200.0,
            components: F12_COMPONENTS,
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

const F13_COMPONENTS: &[CompositionComponent] = &[
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
        bias: 100.0,
        kernel: operator::high_conditioned_elliptic,
        rescale: 1.0,
        rotated: true,
    },
    CompositionComponent {
        sigma: 30.0,
        lambda: 1e-26,
        bias: 200.0,
        kernel: operator::bent_cigar,
        rescale: 1.0,
        rotated: true,
    },
    CompositionComponent {
        sigma: 40.0,
        lambda: 1e-6,
        bias: 300.0,
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

/// F13: Composition Function 1 (N=5)
pub fn f13(
    ndim: Option<usize>,
    bounds: Bounds,
    store: &dyn DataSource,
) -> Result<Composition, BenchError> {
    Composition::new(
        CompositionSpec {
            name: "F13: Composition Function 1 (N=5)",
            formula: "weighted blend of rosenbrock/elliptic/bent_cigar/discus + 1300",
            shift_id: "shift_data_13",
            matrix_id: "M_13_D",
            bias: 1300.0,
            components: F13_COMPONENTS,
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

const F14_COMPONENTS: &[CompositionComponent] = &[
    CompositionComponent {
        sigma: 10.0,
        lambda: 0.25,
        bias: 0.0,
        kernel: operator::modified_schwefel,
        rescale: 1000.0 / 100.0,
        rotated: true,
    },
    CompositionComponent {
        sigma: 30.0,
        lambda: 1.0,
        bias: 100.0,
        kernel: operator::rastrigin,
        rescale: 5.12 / 100.0,
        rotated: true,
    },
    CompositionComponent {
        sigma: 50.0,
        lambda: 1e-7,
        bias: 200.0,
        kernel: operator::high_conditioned_elliptic,
        rescale: 1.0,
        rotated: true,
    },
];

/// F14: Composition Function 2 (N=3)
pub fn f14(
    ndim: Option<usize>,
    bounds: Bounds,
    store: &dyn DataSource,
) -> Result<Composition, BenchError> {
    Composition::new(
        CompositionSpec {
            name: "F14: Composition Function 2 (N=3)",
            formula: "weighted blend of schwefel/rastrigin/elliptic + 1400",
            shift_id: "shift_data_14",
            matrix_id: "M_14_D",
            bias: 1400.0,
            components: F14_COMPONENTS,
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

const F15_COMPONENTS: &[CompositionComponent] = &[
    CompositionComponent {
        sigma: 10.0,
        lambda: 10.0,
        bias: 0.0,
        kernel: operator::hgbat,
        rescale: 5.0 / 100.0,
        rotated: true,
    },
    CompositionComponent {
        sigma: 10.0,
        lambda: 10.0,
        bias: 100.0,
        kernel: operator::rastrigin,
        rescale: 5.12 / 100.0,
        rotated: true,
    },
    CompositionComponent {
        sigma: 10.0,
        lambda: 2.5,
        bias: 200.0,
        kernel: operator::modified_schwefel,
        rescale: 1000.0 / 100.0,
        rotated: true,
    },
    CompositionComponent {
        sigma: 20.0,
        lambda: 25.0,
        bias: 300.0,
        kernel: operator::weierstrass,
        rescale: 0.5 / 100.0,
        rotated: true,
    },
    CompositionComponent {
        sigma: 20.0,
        lambda: 1e-6,
        bias: 400.0,
        kernel: operator::high_conditioned_elliptic,
        rescale: 1.0,
        rotated: true,
    },
];

/// F15: Composition Function 3 (N=5)
pub fn f15(
    ndim: Option<usize>,
    bounds: Bounds,
    store: &dyn DataSource,
) -> Result<Composition, BenchError> {
    Composition::new(
        CompositionSpec {
            name: "F15: Composition Function 3 (N=5)",
            formula: "weighted blend of hgbat/rastrigin/schwefel/weierstrass/elliptic + 1500",
            shift_id: "shift_data_15",
            matrix_id: "M_15_D",
            bias: 1500.0,
            components: F15_COMPONENTS,
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
/// `BenchError::Catalog` when the index is outside `1..=15`, otherwise the
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
        13 => Box::new(f13(ndim, bounds, store)?),
        14 => Box::new(f14(ndim, bounds, store)?),
        15 => Box::new(f15(ndim, bounds, store)?),
        _ => return Err(BenchError::Catalog { query: format!("cec2015/f{}", index) }),
    })
}
