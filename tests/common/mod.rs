#![allow(dead_code)]

use aztro_chart::provider::{CalendarDate, RawHouses, RawPosition};
use aztro_chart::{EphemerisProvider, FlagSet, GeoLocation};
use std::cell::RefCell;
use std::collections::HashSet;

pub const JD_1953: f64 = 2434406.8173611113;
pub const EPSILON_1953: f64 = 23.4470723027;
pub const MARGIN: f64 = 1e-8;

// Coverage of the scripted ephemeris
const FIRST_JD: f64 = 625000.5;
const LAST_JD: f64 = 2818000.5;
pub const NOT_FOUND: &str = "SwissEph file 'sepl_18.se1' not found in PATH './se'.";

#[derive(Debug, Clone, PartialEq)]
pub struct AzaltCall {
    pub jd_ut: f64,
    pub flags: FlagSet,
    pub location: GeoLocation,
    pub coordinates: [f64; 3],
}

/// Deterministic provider: longitudes move one degree per day, equatorial
/// values are offset from the ecliptic ones, calendar math follows Meeus.
#[derive(Default)]
pub struct ScriptedProvider {
    pub failing_bodies: HashSet<i32>,
    pub failing_houses: bool,
    pub topo: RefCell<Vec<GeoLocation>>,
    pub queries: RefCell<Vec<(f64, i32, FlagSet)>>,
    pub azalt_calls: RefCell<Vec<AzaltCall>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        ScriptedProvider::default()
    }

    pub fn failing(body_code: i32) -> Self {
        let mut provider = ScriptedProvider::default();
        provider.failing_bodies.insert(body_code);
        provider
    }

    pub fn failing_houses() -> Self {
        ScriptedProvider {
            failing_houses: true,
            ..ScriptedProvider::default()
        }
    }

    pub fn ecliptic_longitude(body_code: i32, jd_ut: f64) -> f64 {
        (body_code as f64 * 10.0 + (jd_ut - JD_1953)).rem_euclid(360.0)
    }

    pub fn covers(jd_ut: f64) -> bool {
        (FIRST_JD..=LAST_JD).contains(&jd_ut)
    }
}

impl EphemerisProvider for ScriptedProvider {
    fn calc_ut(&self, jd_ut: f64, body_code: i32, flags: FlagSet) -> RawPosition {
        self.queries.borrow_mut().push((jd_ut, body_code, flags));
        if !Self::covers(jd_ut) {
            return RawPosition::nan(NOT_FOUND);
        }
        if self.failing_bodies.contains(&body_code) {
            return RawPosition::nan(format!("error in body {}.", body_code));
        }
        if body_code == -1 {
            return RawPosition {
                values: [EPSILON_1953, EPSILON_1953, 0.0, 0.0, 0.0, 0.0],
                diagnostic: String::new(),
            };
        }
        let longitude = Self::ecliptic_longitude(body_code, jd_ut);
        let values = if flags.equatorial {
            [longitude + 0.5, -2.0, 1.5, 1.1, 0.2, 0.01]
        } else {
            [longitude, 1.0, 1.5, 1.0, 0.1, 0.01]
        };
        RawPosition {
            values,
            diagnostic: String::new(),
        }
    }

    fn set_topo(&self, location: GeoLocation) {
        self.topo.borrow_mut().push(location);
    }

    fn houses(
        &self,
        jd_ut: f64,
        _flags: FlagSet,
        _location: GeoLocation,
        _system_code: char,
        cusp_count: usize,
    ) -> RawHouses {
        if self.failing_houses || !Self::covers(jd_ut) {
            return RawHouses {
                ascmc: [f64::NAN; 10],
                cusps: vec![f64::NAN; cusp_count + 1],
                status: -1,
            };
        }
        let mut ascmc = [0.0; 10];
        ascmc[0] = 100.0;
        ascmc[1] = 10.0;
        ascmc[2] = 12.5;
        RawHouses {
            ascmc,
            cusps: (0..=cusp_count)
                .map(|i| (100.0 + (i as f64 - 1.0) * 30.0).rem_euclid(360.0))
                .collect(),
            status: 0,
        }
    }

    fn azalt(
        &self,
        jd_ut: f64,
        flags: FlagSet,
        location: GeoLocation,
        coordinates: [f64; 3],
    ) -> [f64; 3] {
        self.azalt_calls.borrow_mut().push(AzaltCall {
            jd_ut,
            flags,
            location,
            coordinates,
        });
        [
            (coordinates[0] + 180.0).rem_euclid(360.0),
            coordinates[1] - 30.0,
            coordinates[2],
        ]
    }

    fn julday(&self, year: i32, month: i32, day: i32, hour: f64, gregorian: bool) -> f64 {
        let (y, m) = if month <= 2 {
            (year as f64 - 1.0, month as f64 + 12.0)
        } else {
            (year as f64, month as f64)
        };
        let a = (y / 100.0).floor();
        let b = if gregorian { 2.0 - a + (a / 4.0).floor() } else { 0.0 };
        (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day as f64 + b - 1524.5
            + hour / 24.0
    }

    fn revjul(&self, jd: f64, gregorian: bool) -> CalendarDate {
        let z = (jd + 0.5).floor();
        let f = jd + 0.5 - z;
        let a = if gregorian {
            let alpha = ((z - 1867216.25) / 36524.25).floor();
            z + 1.0 + alpha - (alpha / 4.0).floor()
        } else {
            z
        };
        let b = a + 1524.0;
        let c = ((b - 122.1) / 365.25).floor();
        let d = (365.25 * c).floor();
        let e = ((b - d) / 30.6001).floor();
        let day = b - d - (30.6001 * e).floor();
        let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
        let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
        CalendarDate {
            year: year as i32,
            month: month as i32,
            day: day as i32,
            hour: f * 24.0,
        }
    }
}
