//! Fixed-formula activations where output `i` only depends on input `i`.
//!
//! Each type here is generic over the [`Shape`] it works on, so the same
//! activation serves a single `f64` or an [`A1`] column.

use std::borrow::Cow;
use std::marker::PhantomData;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::activations::ActivationFunction;
use super::common::{Shape, A1};

/// Scalar kernel of an element-wise activation.
pub trait ElementWise {
    const NAME: &'static str;

    fn call(&self, z: f64) -> f64;

    fn prime(&self, z: f64) -> f64;
}

macro_rules! stateless {
    ($(#[$meta:meta])* $ty:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $ty<S = A1> {
            _shape: PhantomData<S>,
        }

        impl<S> $ty<S> {
            pub fn new() -> Self {
                $ty {
                    _shape: PhantomData,
                }
            }
        }

        impl<S> Default for $ty<S> {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

macro_rules! impl_activation_function {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl<S: Shape> ActivationFunction for $ty<S> {
                type Input = S;
                type Derivative = S;

                fn name(&self) -> &'static str {
                    <Self as ElementWise>::NAME
                }

                fn is_derivative_jacobian_matrix(&self) -> bool {
                    false
                }

                fn evaluate<'a>(&mut self, input: &'a S) -> Cow<'a, S> {
                    Cow::Owned(input.map(|z| self.call(z)))
                }

                fn derivative(&self, input: &S) -> S {
                    input.map(|z| self.prime(z))
                }
            }
        )+
    };
}

stateless!(
    /// 1 for non-negative input, 0 otherwise. Flat everywhere it is
    /// differentiable, so the derivative is reported as 0.
    BinaryStep
);
stateless!(Tanh);
stateless!(SoftSign);
stateless!(Relu);
stateless!(SoftPlus);
stateless!(
    /// Self-normalizing ELU with the fixed constants from Klambauer et al.
    Selu
);
stateless!(Silu);
stateless!(Sinusoid);

impl<S> ElementWise for BinaryStep<S> {
    const NAME: &'static str = "BinaryStep";

    fn call(&self, z: f64) -> f64 {
        if z >= 0.0 {
            1.0
        } else {
            0.0
        }
    }

    fn prime(&self, _: f64) -> f64 {
        0.0
    }
}

impl<S> ElementWise for Tanh<S> {
    const NAME: &'static str = "Tanh";

    fn call(&self, z: f64) -> f64 {
        z.tanh()
    }

    fn prime(&self, z: f64) -> f64 {
        let t = z.tanh();
        1.0 - t * t
    }
}

impl<S> ElementWise for SoftSign<S> {
    const NAME: &'static str = "SoftSign";

    fn call(&self, z: f64) -> f64 {
        z / (1.0 + z.abs())
    }

    fn prime(&self, z: f64) -> f64 {
        1.0 / (1.0 + z.abs()).powi(2)
    }
}

impl<S> ElementWise for Relu<S> {
    const NAME: &'static str = "ReLU";

    fn call(&self, z: f64) -> f64 {
        z.max(0.0)
    }

    fn prime(&self, z: f64) -> f64 {
        if z < 0.0 {
            0.0
        } else {
            1.0
        }
    }
}

impl<S> ElementWise for SoftPlus<S> {
    const NAME: &'static str = "SoftPlus";

    fn call(&self, z: f64) -> f64 {
        z.exp().ln_1p()
    }

    fn prime(&self, z: f64) -> f64 {
        1.0 / (1.0 + (-z).exp())
    }
}

const SELU_LAMBDA: f64 = 1.050_700_987_355_480_5;
const SELU_ALPHA: f64 = 1.673_263_242_354_377_3;

fn elu(alpha: f64, z: f64) -> f64 {
    if z <= 0.0 {
        alpha * (z.exp() - 1.0)
    } else {
        z
    }
}

fn elu_prime(alpha: f64, z: f64) -> f64 {
    if z <= 0.0 {
        alpha * z.exp()
    } else {
        1.0
    }
}

impl<S> ElementWise for Selu<S> {
    const NAME: &'static str = "SELU";

    fn call(&self, z: f64) -> f64 {
        SELU_LAMBDA * elu(SELU_ALPHA, z)
    }

    fn prime(&self, z: f64) -> f64 {
        SELU_LAMBDA * elu_prime(SELU_ALPHA, z)
    }
}

impl<S> ElementWise for Silu<S> {
    const NAME: &'static str = "SiLU";

    fn call(&self, z: f64) -> f64 {
        z / (1.0 + (-z).exp())
    }

    fn prime(&self, z: f64) -> f64 {
        let e = (-z).exp();
        (1.0 + e + z * e) / (1.0 + e).powi(2)
    }
}

impl<S> ElementWise for Sinusoid<S> {
    const NAME: &'static str = "Sinusoid";

    fn call(&self, z: f64) -> f64 {
        z.sin()
    }

    fn prime(&self, z: f64) -> f64 {
        z.cos()
    }
}

fn check_alpha(component: &str, alpha: f64) -> Result<(), String> {
    if !alpha.is_finite() {
        return Err(format!("[{}] Alpha must be a finite number!", component));
    }
    Ok(())
}

/// Exponential linear unit.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Elu<S = A1> {
    alpha: f64,
    #[cfg_attr(feature = "serde", serde(skip))]
    _shape: PhantomData<S>,
}

impl<S> Elu<S> {
    pub const DEFAULT_ALPHA: f64 = 0.2;

    pub fn new(alpha: f64) -> Result<Self, String> {
        check_alpha("Elu", alpha)?;
        if alpha < 0.0 {
            println!("[Elu] Warning: Alpha is negative, the activation is not monotonic.");
        }
        Ok(Self {
            alpha,
            _shape: PhantomData,
        })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl<S> Default for Elu<S> {
    fn default() -> Self {
        Self {
            alpha: Self::DEFAULT_ALPHA,
            _shape: PhantomData,
        }
    }
}

impl<S> ElementWise for Elu<S> {
    const NAME: &'static str = "ELU";

    fn call(&self, z: f64) -> f64 {
        elu(self.alpha, z)
    }

    fn prime(&self, z: f64) -> f64 {
        elu_prime(self.alpha, z)
    }
}

/// ReLU with a small fixed slope for non-positive input.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LeakyRelu<S = A1> {
    alpha: f64,
    #[cfg_attr(feature = "serde", serde(skip))]
    _shape: PhantomData<S>,
}

impl<S> LeakyRelu<S> {
    pub const DEFAULT_ALPHA: f64 = 0.01;

    pub fn new(alpha: f64) -> Result<Self, String> {
        check_alpha("LeakyRelu", alpha)?;
        if alpha <= 0.0 || alpha >= 1.0 {
            println!("[LeakyRelu] Warning: Alpha is out of range (0.0, 1.0).");
        }
        Ok(Self {
            alpha,
            _shape: PhantomData,
        })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl<S> Default for LeakyRelu<S> {
    fn default() -> Self {
        Self {
            alpha: Self::DEFAULT_ALPHA,
            _shape: PhantomData,
        }
    }
}

impl<S> ElementWise for LeakyRelu<S> {
    const NAME: &'static str = "Leaky ReLU";

    fn call(&self, z: f64) -> f64 {
        if z <= 0.0 {
            self.alpha * z
        } else {
            z
        }
    }

    fn prime(&self, z: f64) -> f64 {
        if z < 0.0 {
            self.alpha
        } else {
            1.0
        }
    }
}

/// Parametric ReLU. Unlike [`LeakyRelu`] there is no default slope, the
/// caller always picks it (usually after learning it elsewhere).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PRelu<S = A1> {
    alpha: f64,
    #[cfg_attr(feature = "serde", serde(skip))]
    _shape: PhantomData<S>,
}

impl<S> PRelu<S> {
    pub fn new(alpha: f64) -> Result<Self, String> {
        check_alpha("PRelu", alpha)?;
        Ok(Self {
            alpha,
            _shape: PhantomData,
        })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn set_alpha(&mut self, alpha: f64) {
        self.alpha = alpha;
    }
}

impl<S> ElementWise for PRelu<S> {
    const NAME: &'static str = "PReLU";

    fn call(&self, z: f64) -> f64 {
        if z < 0.0 {
            self.alpha * z
        } else {
            z
        }
    }

    fn prime(&self, z: f64) -> f64 {
        if z < 0.0 {
            self.alpha
        } else {
            1.0
        }
    }
}

impl_activation_function!(
    BinaryStep, Tanh, SoftSign, Relu, SoftPlus, Selu, Silu, Sinusoid, Elu, LeakyRelu, PRelu,
);
