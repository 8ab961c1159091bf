//! Linear-regression training demo.
//!
//! Demonstrates: build training vectors → load into the model → train →
//! predict. The model touches the containers only through their public
//! surface, making this a smoke test for the vector API as much as a demo.

use stow_bench::LinReg;
use stow_vec::Vector;

fn main() {
    println!("=== Stow LinReg Example ===\n");

    // Samples of y = 1.5x + 4 with a handful of points.
    let mut xs: Vector<f64> = Vector::new();
    let mut ys: Vector<f64> = Vector::new();
    for i in 0..20 {
        let x = i as f64 * 0.5;
        xs.push_back(x).expect("demo allocation");
        ys.push_back(1.5 * x + 4.0).expect("demo allocation");
    }

    let mut model = LinReg::new(42);
    model
        .load_training_data(&xs, &ys)
        .expect("demo allocation");

    println!("Training on {} samples of y = 1.5x + 4", xs.len());
    for round in 1..=4 {
        model.train(250, 0.01);
        println!(
            "  after {:>4} epochs: predict(0) = {:>7.4}, predict(10) = {:>7.4}",
            round * 250,
            model.predict(0.0),
            model.predict(10.0),
        );
    }

    println!("\nExpected: predict(0) = 4.0000, predict(10) = 19.0000");
}
