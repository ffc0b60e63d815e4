use crate::domain::{CelestialBody, CoordinateFrame, GeoLocation, ObserverFrame};
use crate::ephemeris::CelestialPointCalculator;
use crate::flags::build_flags;
use crate::provider::EphemerisProvider;
use crate::response::{Diagnostics, Response};
use serde::{Deserialize, Serialize};

pub const DEFAULT_INTERVAL: f64 = 1.0;
pub const DEFAULT_REPEATS: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesRequest {
    pub bodies: Vec<CelestialBody>,
    pub observer: ObserverFrame,
    pub coordinates: CoordinateFrame,
    pub start_jd: f64,
    #[serde(default)]
    pub location: GeoLocation,
    /// Days between samples.
    #[serde(default = "default_interval")]
    pub interval: f64,
    #[serde(default = "default_repeats")]
    pub repeats: usize,
}

fn default_interval() -> f64 {
    DEFAULT_INTERVAL
}

fn default_repeats() -> usize {
    DEFAULT_REPEATS
}

impl TimeSeriesRequest {
    pub fn new(
        bodies: Vec<CelestialBody>,
        observer: ObserverFrame,
        coordinates: CoordinateFrame,
        start_jd: f64,
    ) -> Self {
        TimeSeriesRequest {
            bodies,
            observer,
            coordinates,
            start_jd,
            location: GeoLocation::default(),
            interval: DEFAULT_INTERVAL,
            repeats: DEFAULT_REPEATS,
        }
    }
}

/// A sample: Julian day and the main position angle at that moment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub jd_ut: f64,
    pub position: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesValues {
    pub body: CelestialBody,
    pub positions: Vec<TimeSeriesPoint>,
}

/// Julian days `start + i * interval` for `i` in `0..repeats`.
#[derive(Debug, Clone)]
pub struct TimeSteps {
    start: f64,
    interval: f64,
    index: usize,
    repeats: usize,
}

impl TimeSteps {
    pub fn new(start: f64, interval: f64, repeats: usize) -> Self {
        TimeSteps {
            start,
            interval,
            index: 0,
            repeats,
        }
    }
}

impl Iterator for TimeSteps {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.index >= self.repeats {
            return None;
        }
        let jd = self.start + self.index as f64 * self.interval;
        self.index += 1;
        Some(jd)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.repeats - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TimeSteps {}

pub struct TimeSeriesGenerator<'a, P: EphemerisProvider + ?Sized> {
    provider: &'a P,
}

impl<'a, P: EphemerisProvider + ?Sized> TimeSeriesGenerator<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        TimeSeriesGenerator { provider }
    }

    /// Positions of every requested body, each series starting at the
    /// request's start day.
    pub fn generate(&self, request: &TimeSeriesRequest) -> Response<Vec<TimeSeriesValues>> {
        let mut diagnostics = Diagnostics::default();
        let series = request
            .bodies
            .iter()
            .map(|body| TimeSeriesValues {
                body: *body,
                positions: self.series_for(request, *body, &mut diagnostics).collect(),
            })
            .collect();
        Response::new(series, diagnostics)
    }

    /// Lazily computed series for one body.
    pub fn series_for<'r>(
        &'r self,
        request: &'r TimeSeriesRequest,
        body: CelestialBody,
        diagnostics: &'r mut Diagnostics,
    ) -> impl Iterator<Item = TimeSeriesPoint> + 'r {
        let provider: &'r P = self.provider;
        let calculator = CelestialPointCalculator::new(provider);
        let flags = build_flags(request.observer, request.coordinates);
        TimeSteps::new(request.start_jd, request.interval, request.repeats).map(move |jd_ut| {
            let raw = calculator.main_position(jd_ut, body.code(), flags, request.location);
            diagnostics.record(&raw.diagnostic);
            TimeSeriesPoint {
                jd_ut,
                position: raw.values[0],
            }
        })
    }
}
