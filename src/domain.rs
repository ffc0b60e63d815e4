use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------
// ## Enumerations
// ---------------------------

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyCategory {
    Classics,
    Modern,
    ExtraPlutonian,
    Asteroids,
    Centaurs,
    Intersections,
    Hypothetical,
}

/// Celestial points: bodies and mathematical points that are treated like a
/// planet (lunar nodes, apogees).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CelestialBody {
    Sun,
    Moon,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    Chiron,
    MeanNode,
    TrueNode,
    Pholus,
    Ceres,
    Pallas,
    Juno,
    Vesta,
    Nessus,
    Huya,
    Makemake,
    Haumea,
    Eris,
    Ixion,
    Orcus,
    Quaoar,
    Sedna,
    Varuna,
    MeanApogee,
    OsculatingApogee,
}

impl CelestialBody {
    pub const ALL: [CelestialBody; 31] = [
        CelestialBody::Sun,
        CelestialBody::Moon,
        CelestialBody::Mercury,
        CelestialBody::Venus,
        CelestialBody::Earth,
        CelestialBody::Mars,
        CelestialBody::Jupiter,
        CelestialBody::Saturn,
        CelestialBody::Uranus,
        CelestialBody::Neptune,
        CelestialBody::Pluto,
        CelestialBody::Chiron,
        CelestialBody::MeanNode,
        CelestialBody::TrueNode,
        CelestialBody::Pholus,
        CelestialBody::Ceres,
        CelestialBody::Pallas,
        CelestialBody::Juno,
        CelestialBody::Vesta,
        CelestialBody::Nessus,
        CelestialBody::Huya,
        CelestialBody::Makemake,
        CelestialBody::Haumea,
        CelestialBody::Eris,
        CelestialBody::Ixion,
        CelestialBody::Orcus,
        CelestialBody::Quaoar,
        CelestialBody::Sedna,
        CelestialBody::Varuna,
        CelestialBody::MeanApogee,
        CelestialBody::OsculatingApogee,
    ];

    pub fn iter() -> impl Iterator<Item = CelestialBody> {
        Self::ALL.iter().copied()
    }

    /// Stable identifier used in persisted records, starting at 1.
    pub fn id(self) -> u32 {
        Self::ALL
            .iter()
            .position(|body| *body == self)
            .map(|index| index as u32 + 1)
            .unwrap_or_default()
    }

    pub fn from_id(id: u32) -> Option<CelestialBody> {
        Self::ALL.get((id as usize).checked_sub(1)?).copied()
    }

    /// Body number as understood by the ephemeris provider. Minor planets use
    /// the provider's asteroid offset (10000 + catalogue number).
    pub fn code(self) -> i32 {
        match self {
            CelestialBody::Sun => 0,
            CelestialBody::Moon => 1,
            CelestialBody::Mercury => 2,
            CelestialBody::Venus => 3,
            CelestialBody::Earth => 14,
            CelestialBody::Mars => 4,
            CelestialBody::Jupiter => 5,
            CelestialBody::Saturn => 6,
            CelestialBody::Uranus => 7,
            CelestialBody::Neptune => 8,
            CelestialBody::Pluto => 9,
            CelestialBody::Chiron => 15,
            CelestialBody::MeanNode => 10,
            CelestialBody::TrueNode => 11,
            CelestialBody::Pholus => 16,
            CelestialBody::Ceres => 17,
            CelestialBody::Pallas => 18,
            CelestialBody::Juno => 19,
            CelestialBody::Vesta => 20,
            CelestialBody::Nessus => 17066,
            CelestialBody::Huya => 48628,
            CelestialBody::Makemake => 146472,
            CelestialBody::Haumea => 146108,
            CelestialBody::Eris => 146199,
            CelestialBody::Ixion => 38978,
            CelestialBody::Orcus => 100482,
            CelestialBody::Quaoar => 60000,
            CelestialBody::Sedna => 100377,
            CelestialBody::Varuna => 30000,
            CelestialBody::MeanApogee => 12,
            CelestialBody::OsculatingApogee => 13,
        }
    }

    pub fn category(self) -> BodyCategory {
        match self {
            CelestialBody::Sun
            | CelestialBody::Moon
            | CelestialBody::Mercury
            | CelestialBody::Venus
            | CelestialBody::Earth
            | CelestialBody::Mars
            | CelestialBody::Jupiter
            | CelestialBody::Saturn => BodyCategory::Classics,
            CelestialBody::Uranus | CelestialBody::Neptune | CelestialBody::Pluto => {
                BodyCategory::Modern
            }
            CelestialBody::Chiron | CelestialBody::Pholus | CelestialBody::Nessus => {
                BodyCategory::Centaurs
            }
            CelestialBody::MeanNode
            | CelestialBody::TrueNode
            | CelestialBody::MeanApogee
            | CelestialBody::OsculatingApogee => BodyCategory::Intersections,
            CelestialBody::Ceres
            | CelestialBody::Pallas
            | CelestialBody::Juno
            | CelestialBody::Vesta => BodyCategory::Asteroids,
            CelestialBody::Huya
            | CelestialBody::Makemake
            | CelestialBody::Haumea
            | CelestialBody::Eris
            | CelestialBody::Ixion
            | CelestialBody::Orcus
            | CelestialBody::Quaoar
            | CelestialBody::Sedna
            | CelestialBody::Varuna => BodyCategory::ExtraPlutonian,
        }
    }
}

/// House systems with the provider's system letter, the number of cusps and
/// the structural properties of the system.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseSystem {
    NoHouses,
    WholeSign,
    Equal,
    EqualMc,
    Vehlow,
    Placidus,
    Koch,
    Porphyri,
    Regiomontanus,
    Campanus,
    Alcabitius,
    Topocentric,
    Krusinski,
    Apc,
    Morin,
    Axial,
    Horizon,
    Carter,
    EqualAries,
    Gauquelin,
    Sunshine,
    SunshineTreindl,
}

impl HouseSystem {
    pub const ALL: [HouseSystem; 22] = [
        HouseSystem::NoHouses,
        HouseSystem::WholeSign,
        HouseSystem::Equal,
        HouseSystem::EqualMc,
        HouseSystem::Vehlow,
        HouseSystem::Placidus,
        HouseSystem::Koch,
        HouseSystem::Porphyri,
        HouseSystem::Regiomontanus,
        HouseSystem::Campanus,
        HouseSystem::Alcabitius,
        HouseSystem::Topocentric,
        HouseSystem::Krusinski,
        HouseSystem::Apc,
        HouseSystem::Morin,
        HouseSystem::Axial,
        HouseSystem::Horizon,
        HouseSystem::Carter,
        HouseSystem::EqualAries,
        HouseSystem::Gauquelin,
        HouseSystem::Sunshine,
        HouseSystem::SunshineTreindl,
    ];

    pub fn id(self) -> u32 {
        Self::ALL
            .iter()
            .position(|system| *system == self)
            .map(|index| index as u32 + 1)
            .unwrap_or_default()
    }

    /// System letter passed to the provider's house routine.
    pub fn code(self) -> char {
        match self {
            HouseSystem::NoHouses => 'W',
            HouseSystem::WholeSign => 'W',
            HouseSystem::Equal => 'A',
            HouseSystem::EqualMc => 'D',
            HouseSystem::Vehlow => 'V',
            HouseSystem::Placidus => 'P',
            HouseSystem::Koch => 'K',
            HouseSystem::Porphyri => 'O',
            HouseSystem::Regiomontanus => 'R',
            HouseSystem::Campanus => 'C',
            HouseSystem::Alcabitius => 'B',
            HouseSystem::Topocentric => 'T',
            HouseSystem::Krusinski => 'U',
            HouseSystem::Apc => 'Y',
            HouseSystem::Morin => 'M',
            HouseSystem::Axial => 'X',
            HouseSystem::Horizon => 'H',
            HouseSystem::Carter => 'F',
            HouseSystem::EqualAries => 'N',
            HouseSystem::Gauquelin => 'G',
            HouseSystem::Sunshine => 'i',
            HouseSystem::SunshineTreindl => 'I',
        }
    }

    pub fn cusp_count(self) -> usize {
        match self {
            HouseSystem::NoHouses => 0,
            HouseSystem::Gauquelin => 36,
            _ => 12,
        }
    }

    pub fn is_counter_clockwise(self) -> bool {
        !matches!(self, HouseSystem::NoHouses)
    }

    pub fn is_quadrant_system(self) -> bool {
        matches!(
            self,
            HouseSystem::Placidus
                | HouseSystem::Koch
                | HouseSystem::Porphyri
                | HouseSystem::Regiomontanus
                | HouseSystem::Campanus
                | HouseSystem::Alcabitius
                | HouseSystem::Topocentric
                | HouseSystem::Krusinski
                | HouseSystem::Apc
        )
    }

    /// Whether a cusp marks the start of its house rather than its middle.
    pub fn cusp_is_start(self) -> bool {
        !matches!(
            self,
            HouseSystem::NoHouses | HouseSystem::Vehlow | HouseSystem::Sunshine
        )
    }
}

/// Position of the observer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObserverFrame {
    #[default]
    Geocentric,
    Topocentric,
    Heliocentric,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateFrame {
    #[default]
    Ecliptical,
    Equatorial,
}

/// Level of completeness of a calculated chart.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Ecliptic positions and speeds only.
    Simple,
    /// Adds equatorial positions and speeds.
    Base,
    /// Adds horizontal positions.
    Full,
}

// ---------------------------
// ## Structures
// ---------------------------

/// Geographic location in decimal degrees, north and east positive.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoLocation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        GeoLocation {
            latitude,
            longitude,
        }
    }
}

/// Two angles in decimal degrees: a position along the reference circle
/// (longitude, right ascension, azimuth) and the deviation from it
/// (latitude, declination, altitude).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CoordinatePair {
    pub position: f64,
    pub deviation: f64,
}

impl CoordinatePair {
    pub fn new(position: f64, deviation: f64) -> Self {
        CoordinatePair {
            position,
            deviation,
        }
    }

    pub fn nan() -> Self {
        CoordinatePair::new(f64::NAN, f64::NAN)
    }
}

/// Calendar date and clock time, with the offset of the clock to UT in hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DateTimeParts {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
    pub offset_ut: f64,
    pub gregorian: bool,
}

impl DateTimeParts {
    /// Time of day in decimal hours, corrected to UT.
    pub fn ut_hours(&self) -> f64 {
        (self.hour as f64 - self.offset_ut)
            + self.minute as f64 / MINUTES_PER_HOUR
            + self.second as f64 / SECONDS_PER_HOUR
    }
}

impl From<DateTime<Utc>> for DateTimeParts {
    fn from(date_time: DateTime<Utc>) -> Self {
        DateTimeParts {
            year: date_time.year(),
            month: date_time.month() as i32,
            day: date_time.day() as i32,
            hour: date_time.hour() as i32,
            minute: date_time.minute() as i32,
            second: date_time.second() as i32,
            offset_ut: 0.0,
            gregorian: true,
        }
    }
}

const MINUTES_PER_HOUR: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3600.0;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_body_ids_are_stable() {
        assert_eq!(CelestialBody::Sun.id(), 1);
        assert_eq!(CelestialBody::Earth.id(), 5);
        assert_eq!(CelestialBody::OsculatingApogee.id(), 31);
        for body in CelestialBody::iter() {
            assert_eq!(CelestialBody::from_id(body.id()), Some(body));
        }
        assert_eq!(CelestialBody::from_id(0), None);
        assert_eq!(CelestialBody::from_id(32), None);
    }

    #[test]
    fn test_body_codes_and_categories() {
        assert_eq!(CelestialBody::Earth.code(), 14);
        assert_eq!(CelestialBody::Nessus.code(), 17066);
        assert_eq!(CelestialBody::Chiron.category(), BodyCategory::Centaurs);
        assert_eq!(CelestialBody::Eris.category(), BodyCategory::ExtraPlutonian);
        assert_eq!(CelestialBody::TrueNode.category(), BodyCategory::Intersections);
    }

    #[test]
    fn test_house_system_properties() {
        assert_eq!(HouseSystem::Placidus.code(), 'P');
        assert_eq!(HouseSystem::Placidus.cusp_count(), 12);
        assert!(HouseSystem::Placidus.is_quadrant_system());
        assert_eq!(HouseSystem::Gauquelin.cusp_count(), 36);
        assert_eq!(HouseSystem::NoHouses.cusp_count(), 0);
        assert!(!HouseSystem::NoHouses.is_counter_clockwise());
        assert!(!HouseSystem::Vehlow.cusp_is_start());
        assert!(!HouseSystem::Morin.is_quadrant_system());
        assert_eq!(HouseSystem::SunshineTreindl.id(), 22);
    }

    #[test]
    fn test_date_time_parts_from_chrono() {
        let date_time = Utc.with_ymd_and_hms(1953, 1, 29, 7, 37, 0).unwrap();
        let parts = DateTimeParts::from(date_time);
        assert_eq!(parts.year, 1953);
        assert_eq!(parts.month, 1);
        assert_eq!(parts.day, 29);
        assert!(parts.gregorian);
        assert!((parts.ut_hours() - (7.0 + 37.0 / 60.0)).abs() < 1e-12);
    }

    #[test]
    fn test_ut_hours_applies_offset() {
        let parts = DateTimeParts {
            year: 2000,
            month: 6,
            day: 1,
            hour: 14,
            minute: 30,
            second: 0,
            offset_ut: 2.0,
            gregorian: true,
        };
        assert!((parts.ut_hours() - 12.5).abs() < 1e-12);
    }
}
