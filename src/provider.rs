use crate::domain::GeoLocation;
use crate::flags::FlagSet;

/// Six values of a position query: two angles, a distance and their speeds.
/// The frame of the values follows the equatorial capability of the flags.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPosition {
    pub values: [f64; 6],
    /// Free text reported by the provider; empty when the query succeeded.
    pub diagnostic: String,
}

impl RawPosition {
    pub fn nan(diagnostic: impl Into<String>) -> Self {
        RawPosition {
            values: [f64::NAN; 6],
            diagnostic: diagnostic.into(),
        }
    }
}

/// Result of a house query.
#[derive(Debug, Clone, PartialEq)]
pub struct RawHouses {
    /// Ascendant, MC, ARMC, Vertex, East Point, two co-ascendants and the
    /// polar ascendant. The last two slots are unused.
    pub ascmc: [f64; 10],
    /// One-based cusps, index 0 is unused.
    pub cusps: Vec<f64>,
    /// Native return status, negative on failure.
    pub status: i32,
}

pub const ASCMC_ASCENDANT: usize = 0;
pub const ASCMC_MC: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarDate {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    /// Decimal hours.
    pub hour: f64,
}

/// The ephemeris engine the calculators delegate to.
///
/// Implementations need not be reentrant. Callers serialise access to a
/// provider shared between threads.
pub trait EphemerisProvider {
    /// Position and speed of `body_code` at `jd_ut`. Negative body codes are
    /// pseudo bodies, `-1` being nutation and obliquity.
    fn calc_ut(&self, jd_ut: f64, body_code: i32, flags: FlagSet) -> RawPosition;

    /// Sets the observer location for subsequent topocentric queries.
    fn set_topo(&self, location: GeoLocation);

    /// Cusps and angles for `system_code`; `cusp_count` cusps plus the unused
    /// slot 0 are returned.
    fn houses(
        &self,
        jd_ut: f64,
        flags: FlagSet,
        location: GeoLocation,
        system_code: char,
        cusp_count: usize,
    ) -> RawHouses;

    /// Azimuth, altitude and distance without refraction. `coordinates` are
    /// ecliptic unless `flags.equatorial` is set.
    fn azalt(
        &self,
        jd_ut: f64,
        flags: FlagSet,
        location: GeoLocation,
        coordinates: [f64; 3],
    ) -> [f64; 3];

    fn julday(&self, year: i32, month: i32, day: i32, hour: f64, gregorian: bool) -> f64;

    fn revjul(&self, jd: f64, gregorian: bool) -> CalendarDate;
}

/// Pseudo body for obliquity and nutation.
pub const ECL_NUT: i32 = -1;
