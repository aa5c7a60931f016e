use std::borrow::Cow;
use std::marker::PhantomData;

use super::common::A1;

/// Uniform surface every activation provides, so a caller (a neural layer,
/// say) can hold different activations behind one type.
///
/// `Input` is the element shape the activation works on, `f64` or [`A1`].
/// `Derivative` is the same shape for element-wise activations and a square
/// matrix for activations whose outputs depend on more than one input.
pub trait ActivationFunction {
    type Input: Clone;
    type Derivative;

    /// Human-readable identifier, e.g. "Identity" or "Sigmoid".
    fn name(&self) -> &'static str;

    /// `true` when `derivative` returns a full Jacobian instead of one
    /// partial derivative per element.
    fn is_derivative_jacobian_matrix(&self) -> bool;

    /// Forward pass. The output has the same shape as `input`.
    ///
    /// Takes `&mut self` because parameterized activations may re-fit their
    /// parameters to the input's size. Activations that do not transform the
    /// input hand it back borrowed.
    fn evaluate<'a>(&mut self, input: &'a Self::Input) -> Cow<'a, Self::Input>;

    /// Local derivative at `input` using the current parameters.
    fn derivative(&self, input: &Self::Input) -> Self::Derivative;
}

/// Pass-through activation. Owns nothing.
#[derive(Debug, Clone)]
pub struct Identity<S = A1> {
    _shape: PhantomData<S>,
}

impl<S> Identity<S> {
    // The size hint only keeps construction uniform with `Sigmoid::new`.
    pub fn new(_size_hint: usize) -> Self {
        Identity {
            _shape: PhantomData,
        }
    }
}

impl<S> Default for Identity<S> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ActivationFunction for Identity<A1> {
    type Input = A1;
    type Derivative = A1;

    fn name(&self) -> &'static str {
        "Identity"
    }

    fn is_derivative_jacobian_matrix(&self) -> bool {
        false
    }

    fn evaluate<'a>(&mut self, input: &'a A1) -> Cow<'a, A1> {
        Cow::Borrowed(input)
    }

    fn derivative(&self, input: &A1) -> A1 {
        A1::ones(input.len())
    }
}

impl ActivationFunction for Identity<f64> {
    type Input = f64;
    type Derivative = f64;

    fn name(&self) -> &'static str {
        "Identity"
    }

    fn is_derivative_jacobian_matrix(&self) -> bool {
        false
    }

    fn evaluate<'a>(&mut self, input: &'a f64) -> Cow<'a, f64> {
        Cow::Borrowed(input)
    }

    fn derivative(&self, _: &f64) -> f64 {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn identity_returns_input_without_copying() {
        let mut id = Identity::<A1>::new(3);
        let x = array![1.0, -2.0, 3.5];
        let y = id.evaluate(&x);
        assert!(matches!(y, Cow::Borrowed(_)));
        assert_eq!(*y, x);
    }

    #[test]
    fn identity_derivative_only_uses_size() {
        let id = Identity::<A1>::default();
        assert_eq!(id.derivative(&array![9.0, -4.0]), array![1.0, 1.0]);
        assert_eq!(id.derivative(&A1::zeros(0)), A1::zeros(0));
    }

    #[test]
    fn scalar_identity() {
        let mut id = Identity::<f64>::new(1);
        assert_eq!(*id.evaluate(&-0.25), -0.25);
        assert_eq!(id.derivative(&123.0), 1.0);
        assert_eq!(id.name(), "Identity");
        assert!(!id.is_derivative_jacobian_matrix());
    }
}
