use std::borrow::Cow;

use super::activations::ActivationFunction;
use super::common::{A1, A2};

/// Normalized exponential over a whole vector. Every output depends on every
/// input, so the derivative is the full Jacobian.
#[derive(Debug, Clone, Default)]
pub struct Softmax;

impl Softmax {
    pub fn new(_size_hint: usize) -> Self {
        Softmax
    }

    fn softmax(z: &A1) -> A1 {
        // Shifting by the max keeps exp() from overflowing, the result is unchanged.
        let max = z.fold(f64::NEG_INFINITY, |m, &e| m.max(e));
        let e = z.mapv(|v| (v - max).exp());
        let sum = e.sum();
        e / sum
    }
}

impl ActivationFunction for Softmax {
    type Input = A1;
    type Derivative = A2;

    fn name(&self) -> &'static str {
        "Softmax"
    }

    fn is_derivative_jacobian_matrix(&self) -> bool {
        true
    }

    fn evaluate<'a>(&mut self, input: &'a A1) -> Cow<'a, A1> {
        Cow::Owned(Self::softmax(input))
    }

    // J(i, j) = s(i) * (δij - s(j))
    fn derivative(&self, input: &A1) -> A2 {
        let s = Self::softmax(input);
        let n = s.len();
        A2::from_shape_fn((n, n), |(i, j)| {
            let delta = if i == j { 1.0 } else { 0.0 };
            s[i] * (delta - s[j])
        })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::{array, Axis};

    use super::*;

    #[test]
    fn outputs_sum_to_one() {
        let y = Softmax::default().evaluate(&array![1.0, 2.0, 3.0, 4.0]).into_owned();
        assert_relative_eq!(y.sum(), 1.0, epsilon = 1e-12);
        assert!(y.windows(2).into_iter().all(|w| w[0] < w[1]));
    }

    #[test]
    fn large_inputs_do_not_overflow() {
        let y = Softmax::new(2).evaluate(&array![1000.0, 1000.0]).into_owned();
        assert_eq!(y, array![0.5, 0.5]);
    }

    #[test]
    fn jacobian_is_square_and_rows_sum_to_zero() {
        let sm = Softmax::new(3);
        assert!(sm.is_derivative_jacobian_matrix());
        let j = sm.derivative(&array![0.3, -1.2, 2.0]);
        assert_eq!(j.dim(), (3, 3));
        for row in j.axis_iter(Axis(0)) {
            assert_relative_eq!(row.sum(), 0.0, epsilon = 1e-12);
        }
        assert_relative_eq!(j[[0, 1]], j[[1, 0]], epsilon = 1e-15);
    }

    #[test]
    fn uniform_input_jacobian() {
        let j = Softmax::new(2).derivative(&array![0.0, 0.0]);
        assert_eq!(j, array![[0.25, -0.25], [-0.25, 0.25]]);
    }
}
