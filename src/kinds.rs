use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::activations::{ActivationFunction, Identity};
use super::common::A1;
use super::element_wise::*;
use super::sigmoid::Sigmoid;

/// Any element-wise activation over [`A1`], ready to be stored next to
/// activations of other kinds.
pub type BoxedActivation = Box<dyn ActivationFunction<Input = A1, Derivative = A1>>;

/// Names an element-wise activation and its hyper-parameter, if it has one.
///
/// Parses from the activation's name, case-insensitively and ignoring
/// spaces, `_` and `-`. A hyper-parameter goes in parentheses, e.g.
/// `"ELU(0.5)"`; without one the default slope is used. `"Linear"` is an
/// alias for `Identity`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ActivationKind {
    Identity,
    Sigmoid,
    BinaryStep,
    Tanh,
    SoftSign,
    Relu,
    SoftPlus,
    Elu(f64),
    Selu,
    LeakyRelu(f64),
    PRelu(f64),
    Silu,
    Sinusoid,
}

impl ActivationKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Identity => "Identity",
            Self::Sigmoid => "Sigmoid",
            Self::BinaryStep => "BinaryStep",
            Self::Tanh => "Tanh",
            Self::SoftSign => "SoftSign",
            Self::Relu => "ReLU",
            Self::SoftPlus => "SoftPlus",
            Self::Elu(_) => "ELU",
            Self::Selu => "SELU",
            Self::LeakyRelu(_) => "Leaky ReLU",
            Self::PRelu(_) => "PReLU",
            Self::Silu => "SiLU",
            Self::Sinusoid => "Sinusoid",
        }
    }

    /// `size_hint` sizes the parameters of activations that own some.
    pub fn build(&self, size_hint: usize) -> Result<BoxedActivation, String> {
        let act: BoxedActivation = match *self {
            Self::Identity => Box::new(Identity::<A1>::new(size_hint)),
            Self::Sigmoid => Box::new(Sigmoid::<A1>::new(size_hint)),
            Self::BinaryStep => Box::new(BinaryStep::<A1>::new()),
            Self::Tanh => Box::new(Tanh::<A1>::new()),
            Self::SoftSign => Box::new(SoftSign::<A1>::new()),
            Self::Relu => Box::new(Relu::<A1>::new()),
            Self::SoftPlus => Box::new(SoftPlus::<A1>::new()),
            Self::Elu(alpha) => Box::new(Elu::<A1>::new(alpha)?),
            Self::Selu => Box::new(Selu::<A1>::new()),
            Self::LeakyRelu(alpha) => Box::new(LeakyRelu::<A1>::new(alpha)?),
            Self::PRelu(alpha) => Box::new(PRelu::<A1>::new(alpha)?),
            Self::Silu => Box::new(Silu::<A1>::new()),
            Self::Sinusoid => Box::new(Sinusoid::<A1>::new()),
        };
        Ok(act)
    }
}

impl fmt::Display for ActivationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Elu(alpha) | Self::LeakyRelu(alpha) | Self::PRelu(alpha) => {
                write!(f, "{}({})", self.name(), alpha)
            }
            _ => f.write_str(self.name()),
        }
    }
}

impl FromStr for ActivationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, alpha) = match s.trim().split_once('(') {
            Some((name, rest)) => {
                let arg = rest.strip_suffix(')').ok_or_else(|| {
                    format!("[ActivationKind] Missing closing parenthesis in \"{}\"!", s)
                })?;
                let alpha = arg.trim().parse::<f64>().map_err(|e| {
                    format!("[ActivationKind] Invalid parameter \"{}\": {}", arg.trim(), e)
                })?;
                (name, Some(alpha))
            }
            None => (s, None),
        };

        let key: String = name
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();

        let kind = match (key.as_str(), alpha) {
            ("identity" | "linear", None) => Self::Identity,
            ("sigmoid", None) => Self::Sigmoid,
            ("binarystep", None) => Self::BinaryStep,
            ("tanh", None) => Self::Tanh,
            ("softsign", None) => Self::SoftSign,
            ("relu", None) => Self::Relu,
            ("softplus", None) => Self::SoftPlus,
            ("elu", a) => Self::Elu(a.unwrap_or(Elu::<A1>::DEFAULT_ALPHA)),
            ("selu", None) => Self::Selu,
            ("leakyrelu", a) => Self::LeakyRelu(a.unwrap_or(LeakyRelu::<A1>::DEFAULT_ALPHA)),
            ("prelu", Some(a)) => Self::PRelu(a),
            ("prelu", None) => {
                return Err("[ActivationKind] PReLU needs a slope, e.g. \"PReLU(0.25)\"!".into())
            }
            ("silu", None) => Self::Silu,
            ("sinusoid", None) => Self::Sinusoid,
            (_, Some(_)) => {
                return Err(format!("[ActivationKind] \"{}\" takes no parameter!", name.trim()))
            }
            _ => return Err(format!("[ActivationKind] Unknown activation \"{}\"!", name.trim())),
        };
        Ok(kind)
    }
}
