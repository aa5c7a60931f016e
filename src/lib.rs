pub mod activations;
pub mod common;
pub mod element_wise;
pub mod kinds;
pub mod parm_initializers;
pub mod sigmoid;
pub mod softmax;

pub use activations::{ActivationFunction, Identity};
pub use common::{Shape, A1, A2};
pub use kinds::{ActivationKind, BoxedActivation};
pub use sigmoid::Sigmoid;
pub use softmax::Softmax;
