use crate::chart::{ChartAssembler, ChartPositions, ChartRequest};
use crate::datetime::JulianDayCalculator;
use crate::domain::DateTimeParts;
use crate::ephemeris::ObliquityCalculator;
use crate::provider::EphemerisProvider;
use crate::response::{Diagnostics, Response};
use crate::timeseries::{TimeSeriesGenerator, TimeSeriesRequest, TimeSeriesValues};
use log::warn;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpsilonRequest {
    pub jd_ut: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JdUtRequest {
    pub date_time: DateTimeParts,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidDateRequest {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub gregorian: bool,
}

/// Entry point for all astronomical calculations.
///
/// Every operation returns a value; failures are reported through the
/// `errors` flag and the comments of the [`Response`].
pub struct AstronApi<P: EphemerisProvider> {
    provider: P,
}

impl<P: EphemerisProvider> AstronApi<P> {
    pub fn new(provider: P) -> Self {
        AstronApi { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn into_provider(self) -> P {
        self.provider
    }

    pub fn calc_chart(&self, request: &ChartRequest) -> Response<ChartPositions> {
        let response = ChartAssembler::new(&self.provider).calculate(request);
        if response.errors {
            warn!("chart for jd {} has errors: {}", request.jd_ut, response.comments);
        }
        response
    }

    /// True obliquity for the requested Julian day.
    pub fn calc_epsilon(&self, request: &EpsilonRequest) -> Response<f64> {
        let (epsilon, text) = ObliquityCalculator::new(&self.provider).true_obliquity(request.jd_ut);
        if epsilon.is_nan() {
            return Response::failed(
                epsilon,
                "Error calculating epsilon: Julian day out of range.",
            );
        }
        let mut diagnostics = Diagnostics::default();
        diagnostics.note(&text);
        Response::new(epsilon, diagnostics)
    }

    /// Julian day for UT. Invalid dates give NaN.
    pub fn calc_jd_ut(&self, request: &JdUtRequest) -> Response<f64> {
        let parts = &request.date_time;
        let calculator = JulianDayCalculator::new(&self.provider);
        if !calculator.is_valid_date(parts.year, parts.month, parts.day, parts.gregorian) {
            return Response::failed(f64::NAN, "Error for jd: Invalid date");
        }
        Response::ok(calculator.jd_ut(parts))
    }

    pub fn is_valid_date(&self, request: &ValidDateRequest) -> bool {
        JulianDayCalculator::new(&self.provider).is_valid_date(
            request.year,
            request.month,
            request.day,
            request.gregorian,
        )
    }

    /// Calendar date and time of a Julian day as `YYYY/MM/DD HH:MM:SS`.
    pub fn date_time_text(&self, jd_ut: f64, gregorian: bool) -> String {
        JulianDayCalculator::new(&self.provider).date_time_text(jd_ut, gregorian)
    }

    pub fn calc_time_series(&self, request: &TimeSeriesRequest) -> Response<Vec<TimeSeriesValues>> {
        TimeSeriesGenerator::new(&self.provider).generate(request)
    }
}
