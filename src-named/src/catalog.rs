//! The name-based catalog
//!
//! Specs for the classic functions, keyed by common name. Lookup is
//! case- and separator-tolerant: `"Bukin N.6"`, `"bukin_n6"` and
//! `"BukinN6"` resolve to the same entry.

use ndarray::{Array1, array};

use optbench_core::{BenchError, DimensionDefaults, FunctionProperties};
use optbench_operators as operator;

use crate::formulas;
use crate::named::{Named, NamedSpec};

/// Common names of every catalog entry.
pub const NAMES: &[&str] = &[
    "ackley",
    "beale",
    "bird",
    "bohachevsky1",
    "bohachevsky2",
    "booth",
    "branin",
    "bukin_n6",
    "cross_in_tray",
    "easom",
    "eggholder",
    "goldstein_price",
    "griewank",
    "himmelblau",
    "holder_table",
    "levy_n13",
    "matyas",
    "mccormick",
    "rastrigin",
    "rosenbrock",
    "schaffer_n2",
    "schwefel",
    "six_hump_camel",
    "sphere",
    "styblinski_tang",
    "three_hump_camel",
    "zakharov",
];

fn canonical(name: &str) -> String {
    name.chars().filter(char::is_ascii_alphanumeric).collect::<String>().to_lowercase()
}

fn fixed2(bounds: (f64, f64)) -> DimensionDefaults {
    DimensionDefaults::fixed(2, bounds)
}

fn scalable(bounds: (f64, f64)) -> DimensionDefaults {
    DimensionDefaults::scalable(2, 100, bounds)
}

fn unimodal() -> FunctionProperties {
    FunctionProperties { convex: true, unimodal: true, ..FunctionProperties::named() }
}

fn multimodal() -> FunctionProperties {
    FunctionProperties { modality: true, ..FunctionProperties::named() }
}

fn origin_optimum(ndim: usize) -> (Array1<f64>, Option<f64>) {
    (Array1::zeros(ndim), Some(0.0))
}

fn spec_for(name: &str) -> Option<NamedSpec> {
    let spec = match canonical(name).as_str() {
        "ackley" => NamedSpec {
            name: "Ackley",
            formula: "-20 exp(-0.2 sqrt(mean(x^2))) - exp(mean(cos(2 pi x))) + 20 + e",
            defaults: scalable((-32.768, 32.768)),
            kernel: operator::ackley,
            optimum: origin_optimum,
            properties: FunctionProperties {
                scalable: true,
                ..multimodal()
            },
        },
        "beale" => NamedSpec {
            name: "Beale",
            formula: "(1.5 - x + xy)^2 + (2.25 - x + xy^2)^2 + (2.625 - x + xy^3)^2",
            defaults: fixed2((-4.5, 4.5)),
            kernel: formulas::beale,
            optimum: |_| (array![3.0, 0.5], Some(0.0)),
            properties: multimodal(),
        },
        "bird" => NamedSpec {
            name: "Bird",
            formula: "sin(x) e^((1-cos y)^2) + cos(y) e^((1-sin x)^2) + (x-y)^2",
            defaults: fixed2((-2.0 * std::f64::consts::PI, 2.0 * std::f64::consts::PI)),
            kernel: formulas::bird,
            optimum: |_| (array![4.70104, 3.15294], None),
            properties: multimodal(),
        },
        "bohachevsky1" => NamedSpec {
            name: "Bohachevsky N.1",
            formula: "x^2 + 2y^2 - 0.3 cos(3 pi x) - 0.4 cos(4 pi y) + 0.7",
            defaults: fixed2((-100.0, 100.0)),
            kernel: formulas::bohachevsky1,
            optimum: |_| (array![0.0, 0.0], Some(0.0)),
            properties: FunctionProperties { separable: true, ..multimodal() },
        },
        "bohachevsky2" => NamedSpec {
            name: "Bohachevsky N.2",
            formula: "x^2 + 2y^2 - 0.3 cos(3 pi x) cos(4 pi y) + 0.3",
            defaults: fixed2((-100.0, 100.0)),
            kernel: formulas::bohachevsky2,
            optimum: |_| (array![0.0, 0.0], Some(0.0)),
            properties: multimodal(),
        },
        "booth" => NamedSpec {
            name: "Booth",
            formula: "(x + 2y - 7)^2 + (2x + y - 5)^2",
            defaults: fixed2((-10.0, 10.0)),
            kernel: formulas::booth,
            optimum: |_| (array![1.0, 3.0], Some(0.0)),
            properties: unimodal(),
        },
        "branin" => NamedSpec {
            name: "Branin",
            formula: "a (y - b x^2 + c x - 6)^2 + 10 (1 - 1/(8 pi)) cos(x) + 10",
            defaults: DimensionDefaults::fixed_asymmetric(vec![(-5.0, 10.0), (0.0, 15.0)]),
            kernel: formulas::branin,
            optimum: |_| (array![std::f64::consts::PI, 2.275], None),
            properties: multimodal(),
        },
        "bukinn6" => NamedSpec {
            name: "Bukin N.6",
            formula: "100 sqrt(|y - x^2/100|) + 0.01 |x + 10|",
            defaults: DimensionDefaults::fixed_asymmetric(vec![(-15.0, -5.0), (-3.0, 3.0)]),
            kernel: formulas::bukin_n6,
            optimum: |_| (array![-10.0, 1.0], Some(0.0)),
            properties: FunctionProperties { differentiable: false, ..multimodal() },
        },
        "crossintray" => NamedSpec {
            name: "Cross-in-Tray",
            formula: "-0.0001 (|sin x sin y e^(|100 - r/pi|)| + 1)^0.1",
            defaults: fixed2((-10.0, 10.0)),
            kernel: formulas::cross_in_tray,
            optimum: |_| (array![1.34941, 1.34941], None),
            properties: FunctionProperties { differentiable: false, ..multimodal() },
        },
        "easom" => NamedSpec {
            name: "Easom",
            formula: "-cos(x) cos(y) e^(-(x-pi)^2 - (y-pi)^2)",
            defaults: fixed2((-100.0, 100.0)),
            kernel: formulas::easom,
            optimum: |_| (array![std::f64::consts::PI, std::f64::consts::PI], Some(-1.0)),
            properties: FunctionProperties { separable: true, ..multimodal() },
        },
        "eggholder" => NamedSpec {
            name: "Eggholder",
            formula: "-(y+47) sin(sqrt(|y + x/2 + 47|)) - x sin(sqrt(|x - y - 47|))",
            defaults: fixed2((-512.0, 512.0)),
            kernel: formulas::eggholder,
            optimum: |_| (array![512.0, 404.2319], None),
            properties: multimodal(),
        },
        "goldsteinprice" => NamedSpec {
            name: "Goldstein-Price",
            formula: "(1 + (x+y+1)^2 q1(x,y)) (30 + (2x-3y)^2 q2(x,y))",
            defaults: fixed2((-2.0, 2.0)),
            kernel: formulas::goldstein_price,
            optimum: |_| (array![0.0, -1.0], Some(3.0)),
            properties: multimodal(),
        },
        "griewank" => NamedSpec {
            name: "Griewank",
            formula: "sum(x^2)/4000 - prod(cos(x_i/sqrt(i))) + 1",
            defaults: scalable((-600.0, 600.0)),
            kernel: operator::griewank,
            optimum: origin_optimum,
            properties: FunctionProperties { scalable: true, ..multimodal() },
        },
        "himmelblau" => NamedSpec {
            name: "Himmelblau",
            formula: "(x^2 + y - 11)^2 + (x + y^2 - 7)^2",
            defaults: fixed2((-5.0, 5.0)),
            kernel: formulas::himmelblau,
            optimum: |_| (array![3.0, 2.0], Some(0.0)),
            properties: multimodal(),
        },
        "holdertable" => NamedSpec {
            name: "Holder Table",
            formula: "-|sin(x) cos(y) e^(|1 - r/pi|)|",
            defaults: fixed2((-10.0, 10.0)),
            kernel: formulas::holder_table,
            optimum: |_| (array![8.05502, 9.66459], None),
            properties: FunctionProperties { differentiable: false, ..multimodal() },
        },
        "levyn13" => NamedSpec {
            name: "Levy N.13",
            formula: "sin^2(3 pi x) + (x-1)^2 (1 + sin^2(3 pi y)) + (y-1)^2 (1 + sin^2(2 pi y))",
            defaults: fixed2((-10.0, 10.0)),
            kernel: formulas::levy_n13,
            optimum: |_| (array![1.0, 1.0], Some(0.0)),
            properties: multimodal(),
        },
        "matyas" => NamedSpec {
            name: "Matyas",
            formula: "0.26 (x^2 + y^2) - 0.48 x y",
            defaults: fixed2((-10.0, 10.0)),
            kernel: formulas::matyas,
            optimum: |_| (array![0.0, 0.0], Some(0.0)),
            properties: unimodal(),
        },
        "mccormick" => NamedSpec {
            name: "McCormick",
            formula: "sin(x+y) + (x-y)^2 - 1.5x + 2.5y + 1",
            defaults: DimensionDefaults::fixed_asymmetric(vec![(-1.5, 4.0), (-3.0, 4.0)]),
            kernel: formulas::mccormick,
            optimum: |_| (array![-0.54719, -1.54719], None),
            properties: multimodal(),
        },
        "rastrigin" => NamedSpec {
            name: "Rastrigin",
            formula: "sum(x^2 - 10 cos(2 pi x) + 10)",
            defaults: scalable((-5.12, 5.12)),
            kernel: operator::rastrigin,
            optimum: origin_optimum,
            properties: FunctionProperties {
                scalable: true,
                separable: true,
                ..multimodal()
            },
        },
        "rosenbrock" => NamedSpec {
            name: "Rosenbrock",
            formula: "sum(100 (x_{i+1} - x_i^2)^2 + (1 - x_i)^2)",
            defaults: scalable((-2.048, 2.048)),
            kernel: formulas::rosenbrock,
            optimum: |n| (Array1::ones(n), Some(0.0)),
            properties: FunctionProperties {
                unimodal: true,
                scalable: true,
                characteristics: vec!["Narrow curved valley".to_string()],
                ..FunctionProperties::named()
            },
        },
        "schaffern2" => NamedSpec {
            name: "Schaffer N.2",
            formula: "0.5 + (sin^2(x^2 - y^2) - 0.5) / (1 + 0.001 (x^2 + y^2))^2",
            defaults: fixed2((-100.0, 100.0)),
            kernel: formulas::schaffer_n2,
            optimum: |_| (array![0.0, 0.0], Some(0.0)),
            properties: multimodal(),
        },
        "schwefel" => NamedSpec {
            name: "Schwefel",
            formula: "418.9829 n - sum(x sin(sqrt(|x|)))",
            defaults: scalable((-500.0, 500.0)),
            kernel: formulas::schwefel,
            optimum: |n| (Array1::from_elem(n, 420.9687), None),
            properties: FunctionProperties {
                scalable: true,
                separable: true,
                ..multimodal()
            },
        },
        "sixhumpcamel" => NamedSpec {
            name: "Six-Hump Camel",
            formula: "(4 - 2.1 x^2 + x^4/3) x^2 + x y + (-4 + 4 y^2) y^2",
            defaults: DimensionDefaults::fixed_asymmetric(vec![(-3.0, 3.0), (-2.0, 2.0)]),
            kernel: formulas::six_hump_camel,
            optimum: |_| (array![0.0898, -0.7126], None),
            properties: multimodal(),
        },
        "sphere" => NamedSpec {
            name: "Sphere",
            formula: "sum(x^2)",
            defaults: scalable((-5.0, 5.0)),
            kernel: operator::sphere,
            optimum: origin_optimum,
            properties: FunctionProperties {
                scalable: true,
                separable: true,
                ..unimodal()
            },
        },
        "styblinskitang" => NamedSpec {
            name: "Styblinski-Tang",
            formula: "0.5 sum(x^4 - 16 x^2 + 5 x)",
            defaults: scalable((-5.0, 5.0)),
            kernel: formulas::styblinski_tang,
            optimum: |n| (Array1::from_elem(n, -2.903534), None),
            properties: FunctionProperties {
                scalable: true,
                separable: true,
                ..multimodal()
            },
        },
        "threehumpcamel" => NamedSpec {
            name: "Three-Hump Camel",
            formula: "2 x^2 - 1.05 x^4 + x^6/6 + x y + y^2",
            defaults: fixed2((-5.0, 5.0)),
            kernel: formulas::three_hump_camel,
            optimum: |_| (array![0.0, 0.0], Some(0.0)),
            properties: multimodal(),
        },
        "zakharov" => NamedSpec {
            name: "Zakharov",
            formula: "sum(x^2) + (sum(0.5 i x_i))^2 + (sum(0.5 i x_i))^4",
            defaults: scalable((-5.0, 10.0)),
            kernel: operator::zakharov,
            optimum: origin_optimum,
            properties: FunctionProperties { scalable: true, ..unimodal() },
        },
        _ => return None,
    };
    Some(spec)
}

/// Construct a catalog entry by common name.
///
/// # Errors
///
/// `BenchError::Catalog` on an unknown name; otherwise the constructor's
/// dimension/bounds validation errors.
pub fn create(
    name: &str,
    ndim: Option<usize>,
    bounds: Option<Vec<(f64, f64)>>,
) -> Result<Named, BenchError> {
    let spec = spec_for(name).ok_or_else(|| BenchError::Catalog { query: name.to_string() })?;
    Named::new(spec, ndim, bounds)
}
