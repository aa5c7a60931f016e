use std::borrow::Cow;

use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::activations::ActivationFunction;
use super::common::{Shape, A1};
use super::parm_initializers::ParmInitializer;

/// Logistic activation with a per-element affine pre-activation:
///
/// ```text
/// sigmoid(x)(i) = 1 / (1 + exp(-(beta(i) * x(i) + beta0(i))))
/// ```
///
/// `beta0` is the bias and `beta` the scale. Both must have the size of the
/// input when evaluating; if they do not, `evaluate` throws them away and
/// starts over from zero bias and unit scale of the input's size. That reset
/// is silent, [`Sigmoid::reset_count`] is the only trace it leaves.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sigmoid<S = A1> {
    beta0: S,
    beta: S,
    #[cfg_attr(feature = "serde", serde(skip))]
    resets: usize,
}

impl<S: Shape> Sigmoid<S> {
    /// Zero bias and unit scale of length `size`. The size is ignored for
    /// scalars.
    pub fn new(size: usize) -> Self {
        Sigmoid {
            beta0: S::zeros(size),
            beta: S::ones(size),
            resets: 0,
        }
    }

    /// Overwrites both parameters. Sizes are not checked here, a mismatch
    /// with the input is only noticed by the next `evaluate`.
    pub fn set_parms(&mut self, beta0: S, beta: S) {
        self.beta0 = beta0;
        self.beta = beta;
    }

    pub fn get_beta0(&self) -> &S {
        &self.beta0
    }

    pub fn get_beta(&self) -> &S {
        &self.beta
    }

    /// How many times `evaluate` had to reset mismatched parameters.
    pub fn reset_count(&self) -> usize {
        self.resets
    }

    fn parms_fit(&self, len: usize) -> bool {
        self.beta0.len() == len && self.beta.len() == len
    }

    fn fit_parms(&mut self, len: usize) {
        if !self.parms_fit(len) {
            self.beta0 = S::zeros(len);
            self.beta = S::ones(len);
            self.resets += 1;
        }
    }
}

impl Sigmoid<A1> {
    /// Builds the parameters with `I` instead of the zero/one defaults.
    /// Later resets still go back to the defaults.
    pub fn with_initializer<I: ParmInitializer, R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        Sigmoid {
            beta0: I::make_bias(size, rng),
            beta: I::make_scale(size, rng),
            resets: 0,
        }
    }
}

impl<S: Shape> Default for Sigmoid<S> {
    fn default() -> Self {
        Self::new(1)
    }
}

fn logistic(x: f64, beta0: f64, beta: f64) -> f64 {
    let v = (-(beta * x + beta0)).exp();
    1.0 / (1.0 + v)
}

// Chain rule through the affine pre-activation.
fn logistic_prime(x: f64, beta0: f64, beta: f64) -> f64 {
    let y = logistic(x, beta0, beta);
    y * (1.0 - y) * beta
}

impl<S: Shape> ActivationFunction for Sigmoid<S> {
    type Input = S;
    type Derivative = S;

    fn name(&self) -> &'static str {
        "Sigmoid"
    }

    fn is_derivative_jacobian_matrix(&self) -> bool {
        false
    }

    fn evaluate<'a>(&mut self, input: &'a S) -> Cow<'a, S> {
        self.fit_parms(input.len());
        Cow::Owned(input.zip_map(&self.beta0, &self.beta, logistic))
    }

    // Stale parameters are not touched here: the derivative is taken with
    // the defaults the next `evaluate` would reset them to.
    fn derivative(&self, input: &S) -> S {
        let len = input.len();
        if self.parms_fit(len) {
            input.zip_map(&self.beta0, &self.beta, logistic_prime)
        } else {
            input.zip_map(&S::zeros(len), &S::ones(len), logistic_prime)
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::array;

    use super::*;

    #[test]
    fn new_uses_default_parameters() {
        let s = Sigmoid::<A1>::new(4);
        assert_eq!(s.get_beta0(), &A1::zeros(4));
        assert_eq!(s.get_beta(), &A1::ones(4));
        assert_eq!(s.reset_count(), 0);

        let d = Sigmoid::<A1>::default();
        assert_eq!(d.get_beta0().len(), 1);
    }

    #[test]
    fn zero_input_gives_one_half() {
        let mut s = Sigmoid::<A1>::new(6);
        let y = s.evaluate(&A1::zeros(6)).into_owned();
        assert_eq!(y, A1::from_elem(6, 0.5));
    }

    #[test]
    fn set_parms_shift_and_scale() {
        let mut s = Sigmoid::<A1>::new(2);
        s.set_parms(array![1.0, -2.0], array![3.0, 0.5]);
        let y = s.evaluate(&array![0.5, 4.0]).into_owned();
        assert_relative_eq!(y[0], 1.0 / (1.0 + (-2.5_f64).exp()), max_relative = 1e-12);
        assert_relative_eq!(y[1], 0.5, max_relative = 1e-12);
        assert_eq!(s.reset_count(), 0);
    }

    #[test]
    fn mismatched_parameters_reset_on_evaluate() {
        let mut s = Sigmoid::<A1>::new(1);
        s.set_parms(array![5.0], array![-3.0]);
        let y = s.evaluate(&A1::zeros(5)).into_owned();

        assert_eq!(y, A1::from_elem(5, 0.5));
        assert_eq!(s.get_beta0(), &A1::zeros(5));
        assert_eq!(s.get_beta(), &A1::ones(5));
        assert_eq!(s.reset_count(), 1);
    }

    #[test]
    fn only_one_mismatched_parameter_still_resets_both() {
        let mut s = Sigmoid::<A1>::new(3);
        s.set_parms(array![1.0, 1.0, 1.0], array![2.0, 2.0]);
        s.evaluate(&A1::zeros(3));
        assert_eq!(s.get_beta0(), &A1::zeros(3));
        assert_eq!(s.get_beta(), &A1::ones(3));
    }

    #[test]
    fn derivative_does_not_reset() {
        let mut s = Sigmoid::<A1>::new(1);
        s.set_parms(array![2.0], array![2.0]);
        let d = s.derivative(&A1::zeros(3));

        assert_eq!(d, A1::from_elem(3, 0.25));
        assert_eq!(s.get_beta0(), &array![2.0]);
        assert_eq!(s.reset_count(), 0);
    }

    #[test]
    fn derivative_follows_scale() {
        let mut s = Sigmoid::<A1>::new(2);
        s.set_parms(array![0.0, 0.0], array![1.0, 4.0]);
        assert_eq!(s.derivative(&array![0.0, 0.0]), array![0.25, 1.0]);
    }

    #[test]
    fn scalar_sigmoid_never_resets() {
        let mut s = Sigmoid::<f64>::new(10);
        assert_eq!(*s.evaluate(&0.0), 0.5);
        s.set_parms(-1.0, 2.0);
        assert_relative_eq!(*s.evaluate(&0.5), 0.5);
        assert_relative_eq!(s.derivative(&0.5), 0.5);
        assert_eq!(s.reset_count(), 0);
    }
}
