//! RGB spectrum.

use crate::base::*;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, Mul, MulAssign, Sub};

/// Number of spectral samples.
pub const SPECTRUM_SAMPLES: usize = 3;

/// A radiometric quantity sampled at red, green and blue.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RGBSpectrum {
    /// The sampled values.
    c: [Float; SPECTRUM_SAMPLES],
}

/// Default to using `RGBSpectrum` everywhere.
pub type Spectrum = RGBSpectrum;

impl RGBSpectrum {
    /// The zero spectrum.
    pub const ZERO: Self = Self {
        c: [0.0; SPECTRUM_SAMPLES],
    };

    /// The unit spectrum.
    pub const ONE: Self = Self {
        c: [1.0; SPECTRUM_SAMPLES],
    };

    /// Creates a spectrum with a constant value in all samples.
    ///
    /// * `v` - The value.
    pub fn new(v: Float) -> Self {
        Self {
            c: [v; SPECTRUM_SAMPLES],
        }
    }

    /// Creates a spectrum from RGB values.
    ///
    /// * `r` - Red.
    /// * `g` - Green.
    /// * `b` - Blue.
    pub fn from_rgb(r: Float, g: Float, b: Float) -> Self {
        Self { c: [r, g, b] }
    }

    /// Returns true if all samples are zero.
    pub fn is_black(&self) -> bool {
        self.c.iter().all(|v| *v == 0.0)
    }

    /// Returns true if any sample is NaN.
    pub fn has_nans(&self) -> bool {
        self.c.iter().any(|v| v.is_nan())
    }

    /// Returns the maximum sample value.
    pub fn max_component_value(&self) -> Float {
        self.c.iter().fold(-INFINITY, |m, v| max(m, *v))
    }

    /// Returns the luminance.
    pub fn y(&self) -> Float {
        const W: [Float; 3] = [0.212671, 0.715160, 0.072169];
        self.c[0] * W[0] + self.c[1] * W[1] + self.c[2] * W[2]
    }

    /// Returns the spectrum with each sample clamped to an interval.
    ///
    /// * `low`  - Lower bound.
    /// * `high` - Upper bound.
    pub fn clamp(&self, low: Float, high: Float) -> Self {
        let mut c = self.c;
        for v in c.iter_mut() {
            *v = clamp(*v, low, high);
        }
        Self { c }
    }

    /// Returns the component-wise square root. Negative samples map to zero.
    pub fn sqrt(&self) -> Self {
        let mut c = self.c;
        for v in c.iter_mut() {
            *v = max(*v, 0.0).sqrt();
        }
        Self { c }
    }
}

impl Add for RGBSpectrum {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            c: [
                self.c[0] + other.c[0],
                self.c[1] + other.c[1],
                self.c[2] + other.c[2],
            ],
        }
    }
}

impl AddAssign for RGBSpectrum {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for RGBSpectrum {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            c: [
                self.c[0] - other.c[0],
                self.c[1] - other.c[1],
                self.c[2] - other.c[2],
            ],
        }
    }
}

impl Mul for RGBSpectrum {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            c: [
                self.c[0] * other.c[0],
                self.c[1] * other.c[1],
                self.c[2] * other.c[2],
            ],
        }
    }
}

impl MulAssign for RGBSpectrum {
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl Mul<Float> for RGBSpectrum {
    type Output = Self;

    fn mul(self, s: Float) -> Self {
        Self {
            c: [self.c[0] * s, self.c[1] * s, self.c[2] * s],
        }
    }
}

impl Mul<RGBSpectrum> for Float {
    type Output = RGBSpectrum;

    fn mul(self, s: RGBSpectrum) -> RGBSpectrum {
        s * self
    }
}

impl Div for RGBSpectrum {
    type Output = Self;

    fn div(self, other: Self) -> Self {
        debug_assert!(!other.c.iter().any(|v| *v == 0.0));
        Self {
            c: [
                self.c[0] / other.c[0],
                self.c[1] / other.c[1],
                self.c[2] / other.c[2],
            ],
        }
    }
}

impl Div<Float> for RGBSpectrum {
    type Output = Self;

    fn div(self, s: Float) -> Self {
        debug_assert!(s != 0.0);
        let inv = 1.0 / s;
        self * inv
    }
}

impl DivAssign<Float> for RGBSpectrum {
    fn div_assign(&mut self, s: Float) {
        *self = *self / s;
    }
}

impl Index<usize> for RGBSpectrum {
    type Output = Float;

    fn index(&self, i: usize) -> &Float {
        &self.c[i]
    }
}
