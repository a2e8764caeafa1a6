use abmatrix::{
    domains::function::ArithmeticFunction,
    printer::{AugmentedMatrixPrinter, PrintOptions, VectorPrinter},
    tensors::{
        augmented::AugmentedMatrix,
        matrix::{Matrix, Vector},
    },
};

fn main() {
    let system = [[2f64, 1., -1.], [-3., -1., 2.], [-2., 1., 2.]];
    let rhs = [8f64, -11., -3.];

    println!("Solve linear system in x\u{20D7}:");
    for (r, v) in system.iter().zip(&rhs) {
        println!(
            "\t ({}).x\u{20D7} = {}",
            r.iter().map(|e| e.to_string()).collect::<Vec<_>>().join(","),
            v
        );
    }

    let mut m = AugmentedMatrix::from_system(&Matrix::from(system), &Vector::from(rhs)).unwrap();

    match m.to_rref() {
        Ok(()) => {
            let opts = PrintOptions::new().with_precision(3);
            print!("{}", AugmentedMatrixPrinter::new_with_options(&m, opts));
            println!(
                "x\u{20D7} = {{{}}}",
                VectorPrinter::new_with_options(&m.values(), opts.with_column_separator(','))
            );
        }
        Err(e) => panic!("Could not solve {:?}", e),
    }

    // a rotation by an angle given as the first input
    let cos = ArithmeticFunction::new(|v: &Vector<f64>| v[0].cos());
    let sin = ArithmeticFunction::new(|v: &Vector<f64>| v[0].sin());
    let rotation = Matrix::from([
        [cos.clone(), ArithmeticFunction::constant(0.) - sin.clone()],
        [sin, cos],
    ]);

    let twice = &rotation * &rotation;
    let angle = Vector::from([std::f64::consts::FRAC_PI_4]);
    println!("R(\u{3C0}/4)^2 =\n{}", twice.evaluate(&angle));
}
