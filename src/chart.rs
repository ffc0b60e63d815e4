use crate::conversions::ecliptic_to_equatorial;
use crate::domain::{
    CelestialBody, ChartKind, CoordinateFrame, CoordinatePair, GeoLocation, HouseSystem,
    ObserverFrame,
};
use crate::ephemeris::{CelestialPointCalculator, HouseCalculator, ObliquityCalculator};
use crate::flags::{build_flags, FlagSet};
use crate::provider::{EphemerisProvider, ASCMC_ASCENDANT, ASCMC_MC};
use crate::response::{Diagnostics, Response};
use serde::{Deserialize, Serialize};

// Distance passed to the horizontal transform. Azimuth and altitude do not
// depend on it.
const PLACEHOLDER_DISTANCE: f64 = 1.0;

// ---------------------------
// ## Chart kinds
// ---------------------------

/// Coordinate frames computed on top of the ecliptic one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSet {
    pub equatorial: bool,
    pub horizontal: bool,
}

impl ChartKind {
    pub fn frames(self) -> FrameSet {
        match self {
            ChartKind::Simple => FrameSet {
                equatorial: false,
                horizontal: false,
            },
            ChartKind::Base => FrameSet {
                equatorial: true,
                horizontal: false,
            },
            ChartKind::Full => FrameSet {
                equatorial: true,
                horizontal: true,
            },
        }
    }
}

// ---------------------------
// ## Results
// ---------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointPosition {
    pub body: CelestialBody,
    pub ecliptic: CoordinatePair,
    pub ecliptic_speed: CoordinatePair,
    /// Distance in AU.
    pub distance: f64,
    pub equatorial: Option<CoordinatePair>,
    pub equatorial_speed: Option<CoordinatePair>,
    pub horizontal: Option<CoordinatePair>,
}

/// An angle or cusp. Ecliptic latitude is always 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HousePoint {
    pub ecliptic: CoordinatePair,
    pub equatorial: Option<CoordinatePair>,
    pub horizontal: Option<CoordinatePair>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HousePositions {
    pub ascendant: HousePoint,
    pub mc: HousePoint,
    /// Cusps of house 1..=N in order.
    pub cusps: Vec<HousePoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPositions {
    pub kind: ChartKind,
    pub points: Vec<PointPosition>,
    pub houses: HousePositions,
}

impl ChartPositions {
    pub fn point(&self, body: CelestialBody) -> Option<&PointPosition> {
        self.points.iter().find(|point| point.body == body)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    pub jd_ut: f64,
    pub bodies: Vec<CelestialBody>,
    pub house_system: HouseSystem,
    pub location: GeoLocation,
    pub kind: ChartKind,
}

// ---------------------------
// ## Assembly
// ---------------------------

/// Calculates all positions of a chart.
///
/// One algorithm serves every [`ChartKind`]; the kind only decides which
/// frames are attached to points and cusps. Failing sub-calls never abort the
/// calculation: their diagnostics are collected and the affected values are
/// NaN.
pub struct ChartAssembler<'a, P: EphemerisProvider + ?Sized> {
    provider: &'a P,
}

struct Context {
    jd_ut: f64,
    location: GeoLocation,
    obliquity: f64,
    frames: FrameSet,
}

impl<'a, P: EphemerisProvider + ?Sized> ChartAssembler<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        ChartAssembler { provider }
    }

    pub fn calculate(&self, request: &ChartRequest) -> Response<ChartPositions> {
        let mut diagnostics = Diagnostics::default();

        let (obliquity, obliquity_text) =
            ObliquityCalculator::new(self.provider).true_obliquity(request.jd_ut);
        diagnostics.record(&obliquity_text);

        let context = Context {
            jd_ut: request.jd_ut,
            location: request.location,
            obliquity,
            frames: request.kind.frames(),
        };

        let points = request
            .bodies
            .iter()
            .map(|body| self.point_position(&context, *body, &mut diagnostics))
            .collect();
        let houses = self.house_positions(&context, request.house_system, &mut diagnostics);

        let chart = ChartPositions {
            kind: request.kind,
            points,
            houses,
        };
        Response::new(chart, diagnostics)
    }

    fn point_position(
        &self,
        context: &Context,
        body: CelestialBody,
        diagnostics: &mut Diagnostics,
    ) -> PointPosition {
        let calculator = CelestialPointCalculator::new(self.provider);

        let ecl = calculator.main_position(
            context.jd_ut,
            body.code(),
            ecliptic_flags(),
            context.location,
        );
        diagnostics.record(&ecl.diagnostic);
        let ecliptic = CoordinatePair::new(ecl.values[0], ecl.values[1]);

        let (equatorial, equatorial_speed) = if context.frames.equatorial {
            let equ = calculator.main_position(
                context.jd_ut,
                body.code(),
                equatorial_flags(),
                context.location,
            );
            diagnostics.record(&equ.diagnostic);
            (
                Some(CoordinatePair::new(equ.values[0], equ.values[1])),
                Some(CoordinatePair::new(equ.values[3], equ.values[4])),
            )
        } else {
            (None, None)
        };

        PointPosition {
            body,
            ecliptic,
            ecliptic_speed: CoordinatePair::new(ecl.values[3], ecl.values[4]),
            distance: ecl.values[2],
            equatorial,
            equatorial_speed,
            horizontal: self.horizontal(context, ecliptic),
        }
    }

    fn house_positions(
        &self,
        context: &Context,
        system: HouseSystem,
        diagnostics: &mut Diagnostics,
    ) -> HousePositions {
        let houses = HouseCalculator::new(self.provider).positions_for_houses(
            context.jd_ut,
            ecliptic_flags(),
            context.location,
            system.code(),
            system.cusp_count(),
        );
        if houses.status < 0 {
            diagnostics.fail(format!(
                "Error calculating houses '{}' for jd {}.",
                system.code(),
                context.jd_ut
            ));
        }

        HousePositions {
            ascendant: self.house_point(context, houses.ascmc[ASCMC_ASCENDANT]),
            mc: self.house_point(context, houses.ascmc[ASCMC_MC]),
            cusps: houses
                .cusps
                .iter()
                .skip(1)
                .map(|cusp| self.house_point(context, *cusp))
                .collect(),
        }
    }

    fn house_point(&self, context: &Context, longitude: f64) -> HousePoint {
        let ecliptic = CoordinatePair::new(longitude, 0.0);
        let equatorial = context
            .frames
            .equatorial
            .then(|| ecliptic_to_equatorial(ecliptic, context.obliquity));
        HousePoint {
            ecliptic,
            equatorial,
            horizontal: self.horizontal(context, ecliptic),
        }
    }

    fn horizontal(&self, context: &Context, ecliptic: CoordinatePair) -> Option<CoordinatePair> {
        if !context.frames.horizontal {
            return None;
        }
        let horizontal = CelestialPointCalculator::new(self.provider).horizontal_position(
            context.jd_ut,
            [ecliptic.position, ecliptic.deviation, PLACEHOLDER_DISTANCE],
            context.location,
            ecliptic_flags(),
        );
        Some(CoordinatePair::new(horizontal[0], horizontal[1]))
    }
}

fn ecliptic_flags() -> FlagSet {
    build_flags(ObserverFrame::Geocentric, CoordinateFrame::Ecliptical)
}

fn equatorial_flags() -> FlagSet {
    build_flags(ObserverFrame::Geocentric, CoordinateFrame::Equatorial)
}
