// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Spherical directions and the grids built from them.

use std::hash::{Hash, Hasher};

use thiserror::Error;

use crate::constants::{PHI_MAX_DEG, THETA_MAX_DEG};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("Grid spacing must be a positive number of degrees, but got {0}")]
    NonPositiveSpacing(i32),
}

/// A direction on the sphere. `theta` is the polar angle from the reference
/// axis and `phi` is the azimuth, both stored in radians.
///
/// Two [`ThetaPhi`]s are equal only if both of their angles have identical
/// bits. There is no tolerance; a direction that went through a different
/// chain of arithmetic is a different direction. This also means that `0.0`
/// and `-0.0` differ.
#[derive(Debug, Clone, Copy)]
pub struct ThetaPhi {
    theta: f64,
    phi: f64,
}

impl ThetaPhi {
    /// Create a new [`ThetaPhi`] from angles in radians.
    pub fn from_radians(theta: f64, phi: f64) -> ThetaPhi {
        ThetaPhi { theta, phi }
    }

    /// Create a new [`ThetaPhi`] from angles in degrees. These are converted
    /// to radians.
    pub fn from_degrees(theta: f64, phi: f64) -> ThetaPhi {
        ThetaPhi {
            theta: theta.to_radians(),
            phi: phi.to_radians(),
        }
    }

    /// The polar angle \[radians\].
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// The azimuth \[radians\].
    pub fn phi(&self) -> f64 {
        self.phi
    }

    /// The polar angle \[degrees\].
    pub fn theta_deg(&self) -> f64 {
        self.theta.to_degrees()
    }

    /// The azimuth \[degrees\].
    pub fn phi_deg(&self) -> f64 {
        self.phi.to_degrees()
    }
}

impl PartialEq for ThetaPhi {
    fn eq(&self, other: &Self) -> bool {
        self.theta.to_bits() == other.theta.to_bits() && self.phi.to_bits() == other.phi.to_bits()
    }
}

impl Eq for ThetaPhi {}

impl Hash for ThetaPhi {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // We can't hash f64 values, but we can hash their bits. This agrees
        // with `PartialEq` above.
        self.theta.to_bits().hash(state);
        self.phi.to_bits().hash(state);
    }
}

impl std::fmt::Display for ThetaPhi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.theta_deg(), self.phi_deg())
    }
}

/// A trait that describes a (theta, phi) coordinate pair. Anything
/// implementing it can be used wherever a field wants angles.
pub trait SphericalCoord: Copy {
    /// Get the polar angle of this coordinate \[radians\].
    fn get_theta(&self) -> f64;
    /// Get the azimuth of this coordinate \[radians\].
    fn get_phi(&self) -> f64;

    /// Convert this coordinate into a [`ThetaPhi`].
    fn to_theta_phi(&self) -> ThetaPhi {
        ThetaPhi::from_radians(self.get_theta(), self.get_phi())
    }
}

impl<C: SphericalCoord> SphericalCoord for &C {
    fn get_theta(&self) -> f64 {
        (*self).get_theta()
    }

    fn get_phi(&self) -> f64 {
        (*self).get_phi()
    }
}

impl SphericalCoord for ThetaPhi {
    fn get_theta(&self) -> f64 {
        self.theta
    }

    fn get_phi(&self) -> f64 {
        self.phi
    }
}

/// We assume that a tuple of floats is (theta, phi), both in radians.
impl SphericalCoord for (f64, f64) {
    fn get_theta(&self) -> f64 {
        self.0
    }

    fn get_phi(&self) -> f64 {
        self.1
    }
}

impl SphericalCoord for (&f64, &f64) {
    fn get_theta(&self) -> f64 {
        *self.0
    }

    fn get_phi(&self) -> f64 {
        *self.1
    }
}

/// Create directions covering the whole sphere, equally spaced by `spacing`
/// degrees.
///
/// Theta runs from 0 to 180 and phi from -180 to 180, both inclusive, with
/// phi varying fastest. The order matters; field values are matched to these
/// directions by index. Both phi = -180 and phi = 180 are emitted even though
/// they describe the same meridian.
///
/// # Examples
///
/// ```
/// use antenna_field::{equally_spaced_sphere, ThetaPhi};
///
/// let angles = equally_spaced_sphere(90).unwrap();
/// // Theta: 0, 90, 180. Phi: -180, -90, 0, 90, 180.
/// assert_eq!(angles.len(), 3 * 5);
/// assert_eq!(angles[1], ThetaPhi::from_degrees(0.0, -90.0));
/// ```
pub fn equally_spaced_sphere(spacing: i32) -> Result<Vec<ThetaPhi>, GridError> {
    if spacing <= 0 {
        return Err(GridError::NonPositiveSpacing(spacing));
    }
    let step = spacing as usize;
    let num_theta = THETA_MAX_DEG as usize / step + 1;
    let num_phi = 2 * PHI_MAX_DEG as usize / step + 1;

    let mut angles = Vec::with_capacity(num_theta * num_phi);
    for theta in (0..=THETA_MAX_DEG).step_by(step) {
        for phi in (-PHI_MAX_DEG..=PHI_MAX_DEG).step_by(step) {
            angles.push(ThetaPhi::from_degrees(f64::from(theta), f64::from(phi)));
        }
    }
    Ok(angles)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::f64::consts::FRAC_PI_2;

    use super::*;

    fn distinct_thetas(angles: &[ThetaPhi]) -> usize {
        angles
            .iter()
            .map(|a| a.theta().to_bits())
            .collect::<HashSet<_>>()
            .len()
    }

    fn distinct_phis(angles: &[ThetaPhi]) -> usize {
        angles
            .iter()
            .map(|a| a.phi().to_bits())
            .collect::<HashSet<_>>()
            .len()
    }

    #[test]
    fn from_degrees() {
        let angle = ThetaPhi::from_degrees(90.0, 0.0);
        assert_eq!(angle.theta().to_degrees(), 90.0);
        assert_eq!(angle.phi().to_degrees(), 0.0);
        assert_eq!(angle.theta_deg(), 90.0);
        assert_eq!(angle.phi_deg(), 0.0);
    }

    #[test]
    fn from_radians() {
        let angle = ThetaPhi::from_radians(FRAC_PI_2, 0.0);
        assert_eq!(angle.theta(), FRAC_PI_2);
        assert_eq!(angle.phi(), 0.0);
    }

    #[test]
    fn display() {
        let angle = ThetaPhi::from_degrees(90.0, 0.0);
        assert_eq!(
            angle.to_string(),
            format!("({}, {})", angle.theta_deg(), angle.phi_deg())
        );
        assert_eq!(angle.to_string(), "(90, 0)");
    }

    #[test]
    fn equality_is_exact() {
        let a = ThetaPhi::from_degrees(0.0, 0.0);
        assert_eq!(a, a);
        assert_eq!(a, ThetaPhi::from_degrees(0.0, 0.0));
        assert_ne!(a, ThetaPhi::from_degrees(10.0, 0.0));
        assert_ne!(a, ThetaPhi::from_degrees(0.0, 10.0));
        // No tolerance at all.
        assert_ne!(a, ThetaPhi::from_radians(0.0, f64::EPSILON));
        assert_ne!(a, ThetaPhi::from_radians(0.0, -0.0));
    }

    #[test]
    fn hash_agrees_with_eq() {
        let mut set = HashSet::new();
        set.insert(ThetaPhi::from_degrees(45.0, 45.0));
        set.insert(ThetaPhi::from_degrees(45.0, 45.0));
        set.insert(ThetaPhi::from_degrees(45.0, 46.0));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn tuples_are_theta_phi_in_radians() {
        let a = (0.3_f64, 1.2_f64).to_theta_phi();
        assert_eq!(a, ThetaPhi::from_radians(0.3, 1.2));
        let (t, p) = (0.3_f64, 1.2_f64);
        assert_eq!((&t, &p).to_theta_phi(), a);
        assert_eq!((&a).to_theta_phi(), a);
    }

    #[test]
    fn sphere_1_degree() {
        let angles = equally_spaced_sphere(1).unwrap();
        assert_eq!(angles.len(), 181 * 361);
        assert_eq!(angles.len(), 65341);
        assert_eq!(distinct_thetas(&angles), 181);
        assert_eq!(distinct_phis(&angles), 361);
    }

    #[test]
    fn sphere_sizes_for_divisors() {
        for spacing in [1, 2, 3, 4, 5, 6, 9, 10, 12, 15, 18, 20, 30, 36, 45, 60, 90, 180] {
            let angles = equally_spaced_sphere(spacing).unwrap();
            let n_theta = (180 / spacing + 1) as usize;
            let n_phi = (360 / spacing + 1) as usize;
            assert_eq!(angles.len(), n_theta * n_phi, "spacing {spacing}");
            assert_eq!(distinct_thetas(&angles), n_theta, "spacing {spacing}");
            assert_eq!(distinct_phis(&angles), n_phi, "spacing {spacing}");
        }
    }

    #[test]
    fn sphere_order_is_theta_outer_phi_inner() {
        let angles = equally_spaced_sphere(45).unwrap();
        let n_phi = 9;
        assert_eq!(angles[0], ThetaPhi::from_degrees(0.0, -180.0));
        assert_eq!(angles[1], ThetaPhi::from_degrees(0.0, -135.0));
        assert_eq!(angles[n_phi - 1], ThetaPhi::from_degrees(0.0, 180.0));
        assert_eq!(angles[n_phi], ThetaPhi::from_degrees(45.0, -180.0));
        assert_eq!(
            *angles.last().unwrap(),
            ThetaPhi::from_degrees(180.0, 180.0)
        );
    }

    #[test]
    fn sphere_keeps_both_phi_boundaries() {
        let angles = equally_spaced_sphere(90).unwrap();
        let at_pole: Vec<_> = angles.iter().filter(|a| a.theta() == 0.0).collect();
        assert_eq!(at_pole.len(), 5);
        assert_eq!(*at_pole[0], ThetaPhi::from_degrees(0.0, -180.0));
        assert_eq!(*at_pole[4], ThetaPhi::from_degrees(0.0, 180.0));
    }

    #[test]
    fn sphere_spacing_not_dividing_evenly() {
        // The last sample is the largest multiple not exceeding the bound.
        let angles = equally_spaced_sphere(100).unwrap();
        // Theta: 0, 100. Phi: -180, -80, 20, 120.
        assert_eq!(angles.len(), 2 * 4);
        assert_eq!(angles[3], ThetaPhi::from_degrees(0.0, 120.0));
    }

    #[test]
    fn sphere_equality() {
        let a = equally_spaced_sphere(1).unwrap();
        let b = equally_spaced_sphere(1).unwrap();
        let c = equally_spaced_sphere(2).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn sphere_rejects_bad_spacing() {
        assert_eq!(
            equally_spaced_sphere(0).unwrap_err(),
            GridError::NonPositiveSpacing(0)
        );
        assert_eq!(
            equally_spaced_sphere(-5).unwrap_err(),
            GridError::NonPositiveSpacing(-5)
        );
    }
}
