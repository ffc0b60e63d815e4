use crate::domain::GeoLocation;
use crate::flags::FlagSet;
use crate::provider::{EphemerisProvider, RawHouses, RawPosition, ECL_NUT};
use log::{debug, warn};

/// True obliquity of the ecliptic (epsilon), corrected for nutation.
pub struct ObliquityCalculator<'a, P: EphemerisProvider + ?Sized> {
    provider: &'a P,
}

impl<'a, P: EphemerisProvider + ?Sized> ObliquityCalculator<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        ObliquityCalculator { provider }
    }

    /// Obliquity in degrees and the provider's diagnostic. The angle is NaN
    /// when the provider does not cover `jd_ut`.
    pub fn true_obliquity(&self, jd_ut: f64) -> (f64, String) {
        debug!("obliquity query for jd {}", jd_ut);
        let raw = self
            .provider
            .calc_ut(jd_ut, ECL_NUT, FlagSet::engine_only());
        (raw.values[0], raw.diagnostic)
    }
}

pub struct CelestialPointCalculator<'a, P: EphemerisProvider + ?Sized> {
    provider: &'a P,
}

impl<'a, P: EphemerisProvider + ?Sized> CelestialPointCalculator<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        CelestialPointCalculator { provider }
    }

    /// Position, distance and speeds of a body.
    ///
    /// Values are longitude, latitude, distance and their speeds, or right
    /// ascension, declination, distance and their speeds when the equatorial
    /// flag is set. The observer location is only passed on for topocentric
    /// queries.
    pub fn main_position(
        &self,
        jd_ut: f64,
        body_code: i32,
        flags: FlagSet,
        location: GeoLocation,
    ) -> RawPosition {
        if flags.topocentric {
            self.provider.set_topo(location);
        }
        debug!(
            "position query for body {} at jd {} (flags {})",
            body_code,
            jd_ut,
            flags.bits()
        );
        let raw = self.provider.calc_ut(jd_ut, body_code, flags);
        if !raw.diagnostic.is_empty() {
            warn!("body {}: {}", body_code, raw.diagnostic);
        }
        raw
    }

    /// Azimuth, altitude and distance for ecliptic `coordinates`
    /// (longitude, latitude, distance). No refraction is applied.
    pub fn horizontal_position(
        &self,
        jd_ut: f64,
        coordinates: [f64; 3],
        location: GeoLocation,
        flags: FlagSet,
    ) -> [f64; 3] {
        self.provider.azalt(jd_ut, flags, location, coordinates)
    }
}

pub struct HouseCalculator<'a, P: EphemerisProvider + ?Sized> {
    provider: &'a P,
}

impl<'a, P: EphemerisProvider + ?Sized> HouseCalculator<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        HouseCalculator { provider }
    }

    /// Angles and cusps for a house system. The cusp vector always holds
    /// `cusp_count + 1` values with index 0 unused.
    pub fn positions_for_houses(
        &self,
        jd_ut: f64,
        flags: FlagSet,
        location: GeoLocation,
        system_code: char,
        cusp_count: usize,
    ) -> RawHouses {
        debug!(
            "house query '{}' at jd {} for {:?}",
            system_code, jd_ut, location
        );
        let mut houses = self
            .provider
            .houses(jd_ut, flags, location, system_code, cusp_count);
        if houses.status < 0 {
            warn!(
                "house calculation '{}' returned status {}",
                system_code, houses.status
            );
        }
        houses.cusps.resize(cusp_count + 1, 0.0);
        if let Some(first) = houses.cusps.first_mut() {
            *first = 0.0;
        }
        houses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CoordinateFrame, ObserverFrame};
    use crate::flags::build_flags;
    use crate::provider::CalendarDate;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        topo: RefCell<Vec<GeoLocation>>,
        queries: RefCell<Vec<(i32, i32)>>,
    }

    impl EphemerisProvider for Recorder {
        fn calc_ut(&self, _jd_ut: f64, body_code: i32, flags: FlagSet) -> RawPosition {
            self.queries.borrow_mut().push((body_code, flags.bits()));
            if body_code == 99 {
                return RawPosition::nan("not found");
            }
            RawPosition {
                values: [23.44, 1.0, 2.0, 3.0, 4.0, 5.0],
                diagnostic: String::new(),
            }
        }

        fn set_topo(&self, location: GeoLocation) {
            self.topo.borrow_mut().push(location);
        }

        fn houses(
            &self,
            _jd_ut: f64,
            _flags: FlagSet,
            _location: GeoLocation,
            _system_code: char,
            cusp_count: usize,
        ) -> RawHouses {
            RawHouses {
                ascmc: [1.0; 10],
                cusps: (0..=cusp_count).map(|i| i as f64 * 10.0 + 5.0).collect(),
                status: 0,
            }
        }

        fn azalt(&self, _jd: f64, _f: FlagSet, _l: GeoLocation, c: [f64; 3]) -> [f64; 3] {
            [c[0] + 1.0, c[1] + 1.0, c[2]]
        }

        fn julday(&self, _y: i32, _m: i32, _d: i32, _h: f64, _g: bool) -> f64 {
            0.0
        }

        fn revjul(&self, _jd: f64, _g: bool) -> CalendarDate {
            CalendarDate {
                year: 0,
                month: 0,
                day: 0,
                hour: 0.0,
            }
        }
    }

    #[test]
    fn test_obliquity_uses_pseudo_body_and_engine_flag() {
        let provider = Recorder::default();
        let (eps, diagnostic) = ObliquityCalculator::new(&provider).true_obliquity(2434406.8);
        assert_eq!(eps, 23.44);
        assert!(diagnostic.is_empty());
        assert_eq!(provider.queries.borrow()[0], (-1, 2));
    }

    #[test]
    fn test_topocentric_sets_location_first() {
        let provider = Recorder::default();
        let calculator = CelestialPointCalculator::new(&provider);
        let location = GeoLocation::new(52.0, 6.9);

        calculator.main_position(
            2434406.8,
            0,
            build_flags(ObserverFrame::Geocentric, CoordinateFrame::Ecliptical),
            location,
        );
        assert!(provider.topo.borrow().is_empty());

        calculator.main_position(
            2434406.8,
            0,
            build_flags(ObserverFrame::Topocentric, CoordinateFrame::Ecliptical),
            location,
        );
        assert_eq!(provider.topo.borrow().as_slice(), &[location]);
    }

    #[test]
    fn test_failed_position_keeps_diagnostic() {
        let provider = Recorder::default();
        let raw = CelestialPointCalculator::new(&provider).main_position(
            0.0,
            99,
            FlagSet::engine_only(),
            GeoLocation::default(),
        );
        assert!(raw.values[0].is_nan());
        assert_eq!(raw.diagnostic, "not found");
    }

    #[test]
    fn test_cusps_have_unused_first_slot() {
        let provider = Recorder::default();
        let calculator = HouseCalculator::new(&provider);
        for (code, count) in [('P', 12), ('G', 36), ('W', 0)] {
            let houses = calculator.positions_for_houses(
                0.0,
                FlagSet::engine_only(),
                GeoLocation::default(),
                code,
                count,
            );
            assert_eq!(houses.cusps.len(), count + 1);
            assert_eq!(houses.cusps[0], 0.0);
        }
    }
}
