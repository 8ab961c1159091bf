//! Benchmark fixtures and the linear-regression demo model.
//!
//! Provides pre-built containers for the criterion benches and the
//! [`LinReg`] model used by the `lin_reg` example — a deliberately thin
//! consumer that touches the containers only through their public surface
//! (construct, index, iterate, push, resize, len).

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use stow_core::AllocError;
use stow_list::List;
use stow_vec::Vector;

/// Build a vector holding `0..n`.
pub fn sequential_vector(n: usize) -> Vector<u64> {
    let mut v = Vector::with_len(n).expect("bench fixture allocation");
    for (i, slot) in v.iter_mut().enumerate() {
        *slot = i as u64;
    }
    v
}

/// Build a list holding `0..n`, front to back.
pub fn sequential_list(n: usize) -> List<u64> {
    let mut list = List::new();
    for i in 0..n {
        list.push_back(i as u64).expect("bench fixture allocation");
    }
    list
}

/// A straight-line regression model `y = kx + m`, trained by stochastic
/// gradient descent over `Vector`-held samples.
#[derive(Debug, Default)]
pub struct LinReg {
    train_in: Vector<f64>,
    train_out: Vector<f64>,
    train_order: Vector<usize>,
    weight: f64,
    bias: f64,
    rng_seed: u64,
}

impl LinReg {
    /// Create a model with no training data.
    ///
    /// `seed` drives the per-epoch shuffle of the training order, making a
    /// training run reproducible.
    pub fn new(seed: u64) -> Self {
        Self {
            rng_seed: seed,
            ..Self::default()
        }
    }

    /// Predicted output for `input`: `weight * input + bias`.
    pub fn predict(&self, input: f64) -> f64 {
        self.weight * input + self.bias
    }

    /// Store copies of the training samples.
    ///
    /// If the input and reference sequences differ in length, the longer
    /// one is truncated to match. The training order is reset to the
    /// sample indices in sequence.
    pub fn load_training_data(
        &mut self,
        train_in: &Vector<f64>,
        train_out: &Vector<f64>,
    ) -> Result<(), AllocError> {
        self.train_in = train_in.try_clone()?;
        self.train_out = train_out.try_clone()?;

        let n = self.train_in.len().min(self.train_out.len());
        self.train_in.resize(n)?;
        self.train_out.resize(n)?;

        self.train_order = Vector::with_len(n)?;
        for (i, slot) in self.train_order.iter_mut().enumerate() {
            *slot = i;
        }
        Ok(())
    }

    /// Run `num_epochs` training epochs at the given learning rate.
    ///
    /// Each epoch shuffles the training order before visiting every
    /// sample, so the model does not learn from sample ordering.
    pub fn train(&mut self, num_epochs: usize, learning_rate: f64) {
        let mut rng = ChaCha8Rng::seed_from_u64(self.rng_seed);
        for _ in 0..num_epochs {
            self.shuffle_training_order(&mut rng);
            for i in 0..self.train_order.len() {
                let sample = self.train_order[i];
                self.optimize(self.train_in[sample], self.train_out[sample], learning_rate);
            }
        }
    }

    fn shuffle_training_order(&mut self, rng: &mut ChaCha8Rng) {
        let n = self.train_order.len();
        for i in 0..n {
            let j = rng.random_range(0..n);
            let tmp = self.train_order[i];
            self.train_order[i] = self.train_order[j];
            self.train_order[j] = tmp;
        }
    }

    fn optimize(&mut self, input: f64, reference: f64, learning_rate: f64) {
        if input != 0.0 {
            let error = reference - self.predict(input);
            self.bias += error * learning_rate;
            self.weight += error * learning_rate * input;
        } else {
            // y = kx + m collapses to y = m at x = 0.
            self.bias = reference;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_vector_counts_up() {
        let v = sequential_vector(4);
        assert_eq!(v.as_slice(), &[0, 1, 2, 3]);
    }

    #[test]
    fn sequential_list_counts_up() {
        let list = sequential_list(3);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn mismatched_training_sets_are_truncated() {
        let mut model = LinReg::new(1);
        let xs = Vector::try_from([0.0, 1.0, 2.0, 3.0]).unwrap();
        let ys = Vector::try_from([2.0, 4.0]).unwrap();
        model.load_training_data(&xs, &ys).unwrap();
        assert_eq!(model.train_in.len(), 2);
        assert_eq!(model.train_out.len(), 2);
    }

    #[test]
    fn converges_on_a_line() {
        // Samples of y = 2x + 1.
        let xs = Vector::try_from([0.0, 1.0, 2.0, 3.0, 4.0]).unwrap();
        let ys = Vector::try_from([1.0, 3.0, 5.0, 7.0, 9.0]).unwrap();

        let mut model = LinReg::new(42);
        model.load_training_data(&xs, &ys).unwrap();
        model.train(1000, 0.01);

        assert!((model.predict(10.0) - 21.0).abs() < 1e-3);
        assert!((model.predict(-5.0) + 9.0).abs() < 1e-3);
    }

    #[test]
    fn training_is_deterministic_per_seed() {
        let xs = Vector::try_from([1.0, 2.0, 3.0]).unwrap();
        let ys = Vector::try_from([2.0, 4.0, 6.0]).unwrap();

        let mut a = LinReg::new(7);
        a.load_training_data(&xs, &ys).unwrap();
        a.train(50, 0.01);

        let mut b = LinReg::new(7);
        b.load_training_data(&xs, &ys).unwrap();
        b.train(50, 0.01);

        assert_eq!(a.predict(5.0), b.predict(5.0));
    }
}
