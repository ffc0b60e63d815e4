//! Conversions between ecliptic and equatorial coordinates.

use crate::domain::CoordinatePair;
use crate::range::check_value;
use crate::trig;

/// Ecliptic longitude/latitude to right ascension/declination.
///
/// Rotates the unit vector about the vernal-equinox axis by the negated
/// obliquity, which is the rotation convention of the ephemeris engine.
pub fn ecliptic_to_equatorial(ecliptic: CoordinatePair, obliquity: f64) -> CoordinatePair {
    rotate(ecliptic, -obliquity)
}

fn rotate(polar: CoordinatePair, angle: f64) -> CoordinatePair {
    let (lon, lat) = (polar.position, polar.deviation);
    let x = trig::cos(lat) * trig::cos(lon);
    let y = trig::cos(lat) * trig::sin(lon);
    let z = trig::sin(lat);

    let (sin_e, cos_e) = (trig::sin(angle), trig::cos(angle));
    let y_rot = y * cos_e + z * sin_e;
    let z_rot = -y * sin_e + z * cos_e;

    let position = check_value(trig::atan2(y_rot, x));
    let deviation = trig::atan(z_rot / (x * x + y_rot * y_rot).sqrt());
    CoordinatePair::new(position, deviation)
}

/// Ecliptic longitude of a point on the ecliptic with right ascension `ra`.
pub fn right_ascension_to_longitude(ra: f64, obliquity: f64) -> f64 {
    let ra = check_value(ra);
    let longitude = check_value(trig::atan(trig::tan(ra) / trig::cos(obliquity)));
    if ra < 180.0 && longitude >= 180.0 {
        longitude - 180.0
    } else if ra >= 180.0 && longitude < 180.0 {
        longitude + 180.0
    } else {
        longitude
    }
}

/// Declination of a point on the ecliptic (zero latitude).
pub fn longitude_to_declination(longitude: f64, obliquity: f64) -> f64 {
    trig::asin(trig::sin(longitude) * trig::sin(obliquity))
}
