//! CIE L*a*b* color space
//!
//! Lab is the comparison space for catalog matching: Euclidean distance in
//! Lab (CIE76 Delta E) approximates perceived color difference far better
//! than distance between raw RGB bytes.

use std::str::FromStr;

use super::rgb::Rgb;
use super::xyz::Xyz;
use crate::api::MatchError;
use crate::catalog::ParseColorError;

/// D65 reference white, 2° observer, in the same scale as [`Xyz`].
pub const D65_WHITE: Xyz = Xyz {
    x: 95.047,
    y: 100.000,
    z: 108.883,
};

/// Lower bound of the cube-root segment of the Lab nonlinearity.
const EPSILON: f64 = 0.008856;

/// Slope of the linear segment below [`EPSILON`].
const KAPPA_OVER_116: f64 = 7.787;

/// A color in CIE L*a*b* space (D65).
///
/// # Components
///
/// - `l`: Lightness, 0.0 (black) to 100.0 (white)
/// - `a`: Green-red axis (negative = green, positive = red)
/// - `b`: Blue-yellow axis (negative = blue, positive = yellow)
///
/// `a` and `b` are unbounded but stay within about ±128 for sRGB colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Convert a hex string straight to Lab.
    ///
    /// # Example
    ///
    /// ```
    /// use color_match::Lab;
    ///
    /// let black = Lab::from_hex("#000000").unwrap();
    /// assert!(black.l.abs() < 1e-9);
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self, ParseColorError> {
        Ok(Self::from(Rgb::from_str(hex)?))
    }

    /// CIE76 Delta E: the Euclidean distance between two Lab colors.
    ///
    /// A Delta E around 2.3 is commonly taken as a just-noticeable
    /// difference.
    ///
    /// # Example
    ///
    /// ```
    /// use color_match::Lab;
    ///
    /// let a = Lab::new(50.0, 0.0, 0.0);
    /// let b = Lab::new(53.0, 4.0, 0.0);
    /// assert_eq!(a.delta_e(b), 5.0);
    /// ```
    #[inline]
    pub fn delta_e(self, other: Lab) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }
}

/// CIE76 Delta E between two hex colors.
///
/// # Errors
///
/// Returns [`MatchError::MalformedColor`] naming whichever input does not
/// parse, checking `hex_a` first.
///
/// # Example
///
/// ```
/// use color_match::color::delta_e;
///
/// assert_eq!(delta_e("#336699", "336699").unwrap(), 0.0);
/// assert!((delta_e("#000000", "#FFFFFF").unwrap() - 100.0).abs() < 1e-2);
/// ```
pub fn delta_e(hex_a: &str, hex_b: &str) -> Result<f64, MatchError> {
    let a = Lab::from_hex(hex_a).map_err(|source| MatchError::malformed(hex_a, source))?;
    let b = Lab::from_hex(hex_b).map_err(|source| MatchError::malformed(hex_b, source))?;
    Ok(a.delta_e(b))
}

/// The Lab companding function applied to each white-normalized axis.
#[inline]
fn lab_f(t: f64) -> f64 {
    // powf(1/3) as in the reference formula; results can differ from it in
    // the last bits, never enough to change which catalog entry is nearest
    if t > EPSILON {
        t.powf(1.0 / 3.0)
    } else {
        KAPPA_OVER_116 * t + 16.0 / 116.0
    }
}

impl From<Xyz> for Lab {
    fn from(xyz: Xyz) -> Self {
        let fx = lab_f(xyz.x / D65_WHITE.x);
        let fy = lab_f(xyz.y / D65_WHITE.y);
        let fz = lab_f(xyz.z / D65_WHITE.z);

        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

impl From<Rgb> for Lab {
    fn from(rgb: Rgb) -> Self {
        Lab::from(Xyz::from(rgb))
    }
}
