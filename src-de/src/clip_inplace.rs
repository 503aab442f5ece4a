use ndarray::Array1;

/// Clamp every gene of `x` into `[low, high]`.
pub(crate) fn clip_inplace(x: &mut Array1<f64>, low: f64, high: f64) {
    for xi in x.iter_mut() {
        if *xi < low {
            *xi = low;
        }
        if *xi > high {
            *xi = high;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_inplace() {
        let mut x = Array1::from(vec![-7.0, 0.5, 9.0]);
        clip_inplace(&mut x, -5.0, 5.0);
        assert_eq!(x, Array1::from(vec![-5.0, 0.5, 5.0]));
    }
}
