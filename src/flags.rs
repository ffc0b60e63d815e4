use crate::domain::{CoordinateFrame, ObserverFrame};
use serde::{Deserialize, Serialize};

// Native flag bits of the Swiss Ephemeris
const SEFLG_SWIEPH: i32 = 2;
const SEFLG_HELCTR: i32 = 8;
const SEFLG_SPEED: i32 = 256;
const SEFLG_EQUATORIAL: i32 = 2048;
const SEFLG_TOPOCTR: i32 = 32768;
const SEFLG_SIDEREAL: i32 = 65536;

/// Named capabilities of an ephemeris query.
///
/// The set is combined from booleans and only turned into the provider's
/// integer representation at the adapter boundary, via [`FlagSet::bits`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FlagSet {
    pub engine: bool,
    pub speed: bool,
    pub heliocentric: bool,
    pub topocentric: bool,
    pub equatorial: bool,
    pub sidereal: bool,
}

impl FlagSet {
    /// Only the primary ephemeris engine, used for the obliquity query.
    pub fn engine_only() -> Self {
        FlagSet {
            engine: true,
            ..FlagSet::default()
        }
    }

    pub fn with_sidereal(mut self) -> Self {
        self.sidereal = true;
        self
    }

    pub fn bits(&self) -> i32 {
        let mut bits = 0;
        if self.engine {
            bits |= SEFLG_SWIEPH;
        }
        if self.speed {
            bits |= SEFLG_SPEED;
        }
        if self.heliocentric {
            bits |= SEFLG_HELCTR;
        }
        if self.topocentric {
            bits |= SEFLG_TOPOCTR;
        }
        if self.equatorial {
            bits |= SEFLG_EQUATORIAL;
        }
        if self.sidereal {
            bits |= SEFLG_SIDEREAL;
        }
        bits
    }
}

/// Flags for a position query: always the primary engine with speed, plus the
/// observer and coordinate frame.
pub fn build_flags(observer: ObserverFrame, coordinates: CoordinateFrame) -> FlagSet {
    FlagSet {
        engine: true,
        speed: true,
        heliocentric: observer == ObserverFrame::Heliocentric,
        topocentric: observer == ObserverFrame::Topocentric,
        equatorial: coordinates == CoordinateFrame::Equatorial,
        sidereal: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geocentric_ecliptical() {
        let flags = build_flags(ObserverFrame::Geocentric, CoordinateFrame::Ecliptical);
        assert_eq!(flags.bits(), 258);
    }

    #[test]
    fn test_geocentric_equatorial() {
        let flags = build_flags(ObserverFrame::Geocentric, CoordinateFrame::Equatorial);
        assert_eq!(flags.bits(), 2306);
    }

    #[test]
    fn test_topocentric_ecliptical() {
        let flags = build_flags(ObserverFrame::Topocentric, CoordinateFrame::Ecliptical);
        assert!(flags.topocentric);
        assert_eq!(flags.bits(), 33026);
    }

    #[test]
    fn test_heliocentric_ecliptical() {
        let flags = build_flags(ObserverFrame::Heliocentric, CoordinateFrame::Ecliptical);
        assert!(!flags.topocentric);
        assert_eq!(flags.bits(), 266);
    }

    #[test]
    fn test_engine_only_and_sidereal() {
        assert_eq!(FlagSet::engine_only().bits(), 2);
        assert_eq!(FlagSet::engine_only().with_sidereal().bits(), 65538);
        assert_eq!(FlagSet::default().bits(), 0);
    }
}
