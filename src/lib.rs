//! Chart positions for astrology and astronomy on top of an ephemeris engine.
//!
//! For a moment, a location and a house system, [`AstronApi::calc_chart`]
//! computes ecliptic, equatorial and horizontal coordinates of celestial
//! bodies, cusps and angles. The engine is reached through the
//! [`EphemerisProvider`] trait; with the `native` feature the Swiss Ephemeris
//! C library implements it as [`SwissEph`].

// ---------------------------
// ## Math
// ---------------------------

pub mod conversions;
pub mod range;
pub mod trig;

// ---------------------------
// ## Ephemeris access
// ---------------------------

pub mod ephemeris;
pub mod flags;
pub mod provider;
#[cfg(feature = "native")]
pub mod swisseph;

// ---------------------------
// ## Calculations
// ---------------------------

pub mod api;
pub mod chart;
pub mod datetime;
pub mod domain;
pub mod response;
pub mod timeseries;

// ---------------------------
// ## Persistence and setup
// ---------------------------

pub mod config;
pub mod error;
pub mod store;

pub use api::{AstronApi, EpsilonRequest, JdUtRequest, ValidDateRequest};
pub use chart::{ChartPositions, ChartRequest, HousePoint, HousePositions, PointPosition};
pub use config::EngineConfig;
pub use domain::{
    BodyCategory, CelestialBody, ChartKind, CoordinateFrame, CoordinatePair, DateTimeParts,
    GeoLocation, HouseSystem, ObserverFrame,
};
pub use error::AztroError;
pub use flags::{build_flags, FlagSet};
pub use provider::EphemerisProvider;
pub use range::AngleRange;
pub use response::{Diagnostics, Response};
pub use timeseries::{TimeSeriesPoint, TimeSeriesRequest, TimeSeriesValues};

#[cfg(feature = "native")]
pub use swisseph::SwissEph;
