use aztro_chart::{
    AstronApi, CelestialBody, ChartKind, ChartRequest, DateTimeParts, EngineConfig,
    EpsilonRequest, GeoLocation, HouseSystem, JdUtRequest, SwissEph,
};
use chrono::{TimeZone, Utc};

fn main() {
    env_logger::init();

    let config = EngineConfig::from_env();
    let eph = match SwissEph::open(&config.ephe_path) {
        Ok(eph) => eph,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let api = AstronApi::new(eph);

    // 1953-01-29 07:37 UT, Enschede
    let Some(date_time) = Utc.with_ymd_and_hms(1953, 1, 29, 7, 37, 0).single() else {
        eprintln!("Error: invalid date");
        std::process::exit(1);
    };
    let jd = api.calc_jd_ut(&JdUtRequest {
        date_time: DateTimeParts::from(date_time),
    });
    if jd.errors {
        eprintln!("Error: {}", jd.comments);
        std::process::exit(1);
    }

    let epsilon = api.calc_epsilon(&EpsilonRequest { jd_ut: jd.result });
    println!("{} obliquity {:.10}", api.date_time_text(jd.result, true), epsilon.result);

    let request = ChartRequest {
        jd_ut: jd.result,
        bodies: vec![
            CelestialBody::Sun,
            CelestialBody::Moon,
            CelestialBody::Mercury,
        ],
        house_system: HouseSystem::Placidus,
        location: GeoLocation::new(52.21666667, 6.9),
        kind: ChartKind::Full,
    };
    let chart = api.calc_chart(&request);
    match serde_json::to_string_pretty(&chart) {
        Ok(text) => println!("{}", text),
        Err(e) => eprintln!("Error: {}", e),
    }
}
