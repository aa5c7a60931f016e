use ndarray::Array;
use ndarray_rand::{rand::Rng, rand_distr::StandardNormal, RandomExt};

use crate::common::A1;

/// Produces the starting bias and scale of a parameterized activation.
pub trait ParmInitializer {
    fn make_bias<R: Rng + ?Sized>(size: usize, rng: &mut R) -> A1;

    fn make_scale<R: Rng + ?Sized>(size: usize, rng: &mut R) -> A1;
}

// Zero bias and unit scale: the activation starts out as the plain logistic.
pub struct ParmInitializerDefault;

impl ParmInitializer for ParmInitializerDefault {
    fn make_bias<R: Rng + ?Sized>(size: usize, _: &mut R) -> A1 {
        A1::zeros(size)
    }

    fn make_scale<R: Rng + ?Sized>(size: usize, _: &mut R) -> A1 {
        A1::ones(size)
    }
}

pub struct ParmInitializerRandom;

// Biases follow N(0, 1). Scales are centered on 1 with a standard deviation
// of 1/sqrt(size), so wider inputs start closer to the plain logistic.
impl ParmInitializer for ParmInitializerRandom {
    fn make_bias<R: Rng + ?Sized>(size: usize, rng: &mut R) -> A1 {
        Array::random_using(size, StandardNormal, rng)
    }

    fn make_scale<R: Rng + ?Sized>(size: usize, rng: &mut R) -> A1 {
        let std_dev = 1.0 / (size.max(1) as f64).sqrt();
        Array::random_using(size, StandardNormal, rng).mapv(|e: f64| 1.0 + std_dev * e)
    }
}
