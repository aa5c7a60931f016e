use std::fmt::Debug;

use ndarray::{Array1, Array2, Zip};

pub type A1 = Array1<f64>;
pub type A2 = Array2<f64>;

/// The element shapes an activation can work on: a single `f64` or an `A1`
/// column of them.
pub trait Shape: Clone + PartialEq + Debug {
    /// Number of elements. Always 1 for a scalar.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn zeros(len: usize) -> Self;

    fn ones(len: usize) -> Self;

    fn map<F: Fn(f64) -> f64>(&self, f: F) -> Self;

    // `f` receives (x, bias, scale) for each element. Callers make sure the
    // three operands have the same length.
    fn zip_map<F: Fn(f64, f64, f64) -> f64>(&self, bias: &Self, scale: &Self, f: F) -> Self;
}

impl Shape for f64 {
    fn len(&self) -> usize {
        1
    }

    fn zeros(_: usize) -> Self {
        0.0
    }

    fn ones(_: usize) -> Self {
        1.0
    }

    fn map<F: Fn(f64) -> f64>(&self, f: F) -> Self {
        f(*self)
    }

    fn zip_map<F: Fn(f64, f64, f64) -> f64>(&self, bias: &Self, scale: &Self, f: F) -> Self {
        f(*self, *bias, *scale)
    }
}

impl Shape for A1 {
    fn len(&self) -> usize {
        Array1::len(self)
    }

    fn zeros(len: usize) -> Self {
        A1::zeros(len)
    }

    fn ones(len: usize) -> Self {
        A1::ones(len)
    }

    fn map<F: Fn(f64) -> f64>(&self, f: F) -> Self {
        self.mapv(f)
    }

    fn zip_map<F: Fn(f64, f64, f64) -> f64>(&self, bias: &Self, scale: &Self, f: F) -> Self {
        Zip::from(self)
            .and(bias)
            .and(scale)
            .map_collect(|&x, &b, &s| f(x, b, s))
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn scalar_shape_is_one_element() {
        assert_eq!(Shape::len(&3.5_f64), 1);
        assert_eq!(<f64 as Shape>::zeros(7), 0.0);
        assert_eq!(<f64 as Shape>::ones(7), 1.0);
    }

    #[test]
    fn vector_zip_map_visits_matching_elements() {
        let x = array![1.0, 2.0, 3.0];
        let b = array![0.5, 0.0, -1.0];
        let s = array![2.0, 2.0, 2.0];
        assert_eq!(x.zip_map(&b, &s, |x, b, s| s * x + b), array![2.5, 4.0, 5.0]);
    }
}
