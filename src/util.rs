// MIT/Apache2 License

use num_traits::Float;

#[inline]
pub(crate) fn approx_eq<Num: Float>(a: Num, b: Num) -> bool {
    (a - b).abs() < Num::epsilon()
}

/// Clamp a value into `[0, 1]`. NaN collapses to zero.
#[inline]
pub(crate) fn clamp_unit<Num: Float>(val: Num) -> Num {
    if val.is_nan() {
        Num::zero()
    } else {
        val.max(Num::zero()).min(Num::one())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_unit() {
        assert_eq!(clamp_unit(-0.5f64), 0.0);
        assert_eq!(clamp_unit(0.25f64), 0.25);
        assert_eq!(clamp_unit(3.0f32), 1.0);
        assert_eq!(clamp_unit(f64::NAN), 0.0);
    }
}
