//! Common numeric types, constants and functions.

/// Use 32-bit precision for floating point numbers.
pub type Float = f32;

/// Use 32-bit signed integers.
pub type Int = i32;

/// Infinity.
pub const INFINITY: Float = Float::INFINITY;

/// PI
pub const PI: Float = std::f32::consts::PI;

/// 2 * PI
pub const TWO_PI: Float = 2.0 * PI;

/// PI / 2
pub const PI_OVER_TWO: Float = PI / 2.0;

/// PI / 4
pub const PI_OVER_FOUR: Float = PI / 4.0;

/// 1 / PI
pub const INV_PI: Float = 1.0 / PI;

/// 1 / (2 * PI)
pub const INV_TWO_PI: Float = 1.0 / TWO_PI;

/// 1 / sqrt(PI)
pub const INV_SQRT_PI: Float = 0.564_189_58;

/// Returns the absolute value of a number.
#[inline(always)]
pub fn abs(n: Float) -> Float {
    n.abs()
}

/// Returns the minimum of 2 numbers.
#[inline(always)]
pub fn min(a: Float, b: Float) -> Float {
    a.min(b)
}

/// Returns the maximum of 2 numbers.
#[inline(always)]
pub fn max(a: Float, b: Float) -> Float {
    a.max(b)
}

/// Clamps a value between a lower and upper bound.
///
/// * `x`    - The value to clamp.
/// * `low`  - Lower bound.
/// * `high` - Upper bound.
#[inline(always)]
pub fn clamp(x: Float, low: Float, high: Float) -> Float {
    x.max(low).min(high)
}

/// Returns the error function of a value using a rational approximation.
///
/// * `x` - The value.
pub fn erf(x: Float) -> Float {
    let a1 = 0.254829592;
    let a2 = -0.284496736;
    let a3 = 1.421413741;
    let a4 = -1.453152027;
    let a5 = 1.061405429;
    let p = 0.3275911;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = abs(x);

    let t = 1.0 / (1.0 + p * x);
    let y = 1.0 - (((((a5 * t + a4) * t) + a3) * t + a2) * t + a1) * t * (-x * x).exp();

    sign * y
}

/// Returns the inverse of the error function of a value.
///
/// * `x` - The value.
pub fn erf_inv(x: Float) -> Float {
    let x = clamp(x, -0.99999, 0.99999);
    let mut w = -((1.0 - x) * (1.0 + x)).ln();
    let mut p: Float;
    if w < 5.0 {
        w -= 2.5;
        p = 2.81022636e-08;
        p = 3.43273939e-07 + p * w;
        p = -3.5233877e-06 + p * w;
        p = -4.39150654e-06 + p * w;
        p = 0.00021858087 + p * w;
        p = -0.00125372503 + p * w;
        p = -0.00417768164 + p * w;
        p = 0.246640727 + p * w;
        p = 1.50140941 + p * w;
    } else {
        w = w.sqrt() - 3.0;
        p = -0.000200214257;
        p = 0.000100950558 + p * w;
        p = 0.00134934322 + p * w;
        p = -0.00367342844 + p * w;
        p = 0.00573950773 + p * w;
        p = -0.0076224613 + p * w;
        p = 0.00943887047 + p * w;
        p = 1.00167406 + p * w;
        p = 2.83297682 + p * w;
    }
    p * x
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn clamp_bounds() {
        assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
        assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
    }

    #[test]
    fn erf_known_values() {
        assert!(approx_eq!(Float, erf(0.0), 0.0, epsilon = 1e-6));
        assert!(approx_eq!(Float, erf(1.0), 0.8427008, epsilon = 1e-4));
        assert!(approx_eq!(Float, erf(-1.0), -0.8427008, epsilon = 1e-4));
    }

    #[test]
    fn erf_inv_roundtrip() {
        for i in 1..10 {
            let x = i as Float / 10.0;
            assert!(approx_eq!(Float, erf(erf_inv(x)), x, epsilon = 1e-3));
        }
    }
}
