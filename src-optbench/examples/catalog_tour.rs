//! Quick tour of the catalog: build a few functions, evaluate them at
//! their optimum and at an arbitrary point, and print their metadata.

use ndarray::Array1;
use optbench::{BenchmarkFunction, SUCCESS_TOL, registry};

fn show(f: &dyn BenchmarkFunction) {
    let x = Array1::ones(f.ndim());
    println!("{}", f.name());
    println!("  formula    : {}", f.formula());
    println!("  dimension  : {}", f.ndim());
    println!("  f(ones)    : {}", f.evaluate(&x).unwrap());
    println!("  f(x*)      : {}", f.evaluate(f.x_global()).unwrap());
    println!("  is_succeed : {}", f.is_succeed(f.x_global(), SUCCESS_TOL).unwrap());
    println!();
}

fn main() {
    let f1 = registry::cec(2015, 1, Some(10)).unwrap();
    show(f1.as_ref());

    let f13 = registry::cec(2015, 13, Some(30)).unwrap();
    show(f13.as_ref());

    let zakharov = registry::cec(2022, 1, Some(20)).unwrap();
    show(zakharov.as_ref());

    let eggholder = registry::named("eggholder", None).unwrap();
    show(eggholder.as_ref());
}
