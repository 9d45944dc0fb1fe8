//! Angular separation on the celestial sphere
//!
//! Pure math with no shared-state access, safe to call from any worker thread
//! without synchronization.

/// Compute the great-circle angular separation between two sky positions.
///
/// Both positions are given as (right ascension, declination) in degrees and
/// the separation is returned in degrees. Uses the spherical law of cosines
/// with the cosine clamped to `[-1, 1]` before the `acos` step: coordinate
/// pairs that are identical or antipodal up to floating-point rounding must
/// map to 0° and 180° rather than NaN.
///
/// Symmetric in its two positions.
pub fn angular_separation_deg(ra1_deg: f64, dec1_deg: f64, ra2_deg: f64, dec2_deg: f64) -> f64 {
    let dec1 = dec1_deg.to_radians();
    let dec2 = dec2_deg.to_radians();
    let delta_ra = (ra1_deg - ra2_deg).to_radians();

    let cos_sep = dec1.sin() * dec2.sin() + dec1.cos() * dec2.cos() * delta_ra.cos();

    cos_sep.clamp(-1.0, 1.0).acos().to_degrees()
}
