use crate::domain::GeoLocation;
use crate::error::{AztroError, Result};
use crate::flags::FlagSet;
use crate::provider::{CalendarDate, EphemerisProvider, RawHouses, RawPosition};
use log::info;
use std::cell::Cell;
use std::ffi::{CStr, CString};
use std::marker::PhantomData;
use std::os::raw::{c_char, c_double, c_int};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

// FFI Bindings for Swiss Ephemeris
mod bindings {
    use std::os::raw::{c_char, c_double, c_int};

    extern "C" {
        pub fn swe_set_ephe_path(path: *const c_char);
        pub fn swe_close();

        pub fn swe_calc_ut(
            tjd_ut: c_double,
            ipl: c_int,
            iflag: c_int,
            xx: *mut c_double,
            serr: *mut c_char,
        ) -> c_int;

        pub fn swe_set_topo(geolon: c_double, geolat: c_double, geoalt: c_double);

        pub fn swe_houses_ex(
            tjd_ut: c_double,
            iflag: c_int,
            geolat: c_double,
            geolon: c_double,
            hsys: c_int,
            cusps: *mut c_double,
            ascmc: *mut c_double,
        ) -> c_int;

        pub fn swe_azalt(
            tjd_ut: c_double,
            calc_flag: c_int,
            geopos: *mut c_double,
            atpress: c_double,
            attemp: c_double,
            xin: *mut c_double,
            xaz: *mut c_double,
        );

        pub fn swe_julday(
            year: c_int,
            month: c_int,
            day: c_int,
            hour: c_double,
            gregflag: c_int,
        ) -> c_double;

        pub fn swe_revjul(
            tjd: c_double,
            gregflag: c_int,
            year: *mut c_int,
            month: *mut c_int,
            day: *mut c_int,
            hour: *mut c_double,
        );
    }
}

use bindings::*;

const SE_GREG_CAL: c_int = 1;
const SE_JUL_CAL: c_int = 0;
const SE_ECL2HOR: c_int = 0;
const SE_EQU2HOR: c_int = 1;
const AS_MAXCH: usize = 256;
// Gauquelin sectors need 36 cusps plus slot 0
const MAX_CUSPS: usize = 37;

static SESSION_OPEN: AtomicBool = AtomicBool::new(false);

/// An open session of the Swiss Ephemeris C library.
///
/// The library keeps global state, so only one session can be open at a time.
/// The session can be moved to another thread but not shared; wrap it in a
/// `Mutex` to use it from several threads.
pub struct SwissEph {
    _not_sync: PhantomData<Cell<()>>,
}

impl SwissEph {
    /// Opens the library with the ephemeris files in `ephe_path`.
    pub fn open(ephe_path: &Path) -> Result<Self> {
        let c_path = ephe_path
            .to_str()
            .and_then(|path| CString::new(path).ok())
            .ok_or_else(|| AztroError::EphemerisPath(ephe_path.to_path_buf()))?;

        if SESSION_OPEN
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(AztroError::ProviderBusy);
        }

        unsafe {
            swe_set_ephe_path(c_path.as_ptr());
        }
        info!("Ephemeris file path set to: {}", ephe_path.display());

        Ok(SwissEph {
            _not_sync: PhantomData,
        })
    }
}

impl Drop for SwissEph {
    fn drop(&mut self) {
        unsafe {
            swe_close();
        }
        SESSION_OPEN.store(false, Ordering::Release);
        info!("Ephemeris session closed");
    }
}

fn calendar_flag(gregorian: bool) -> c_int {
    if gregorian {
        SE_GREG_CAL
    } else {
        SE_JUL_CAL
    }
}

impl EphemerisProvider for SwissEph {
    fn calc_ut(&self, jd_ut: f64, body_code: i32, flags: FlagSet) -> RawPosition {
        let mut results: [c_double; 6] = [0.0; 6];
        let mut error: [c_char; AS_MAXCH] = [0; AS_MAXCH];
        let calc_result = unsafe {
            swe_calc_ut(
                jd_ut,
                body_code,
                flags.bits(),
                results.as_mut_ptr(),
                error.as_mut_ptr(),
            )
        };
        let diagnostic = unsafe { CStr::from_ptr(error.as_ptr()) }
            .to_string_lossy()
            .into_owned();

        if calc_result < 0 {
            return RawPosition::nan(diagnostic);
        }
        RawPosition {
            values: results,
            diagnostic,
        }
    }

    fn set_topo(&self, location: GeoLocation) {
        unsafe {
            swe_set_topo(location.longitude, location.latitude, 0.0);
        }
    }

    fn houses(
        &self,
        jd_ut: f64,
        flags: FlagSet,
        location: GeoLocation,
        system_code: char,
        cusp_count: usize,
    ) -> RawHouses {
        let mut cusps: [c_double; MAX_CUSPS] = [0.0; MAX_CUSPS];
        let mut ascmc: [c_double; 10] = [0.0; 10];

        let status = unsafe {
            swe_houses_ex(
                jd_ut,
                flags.bits(),
                location.latitude,
                location.longitude,
                system_code as c_int,
                cusps.as_mut_ptr(),
                ascmc.as_mut_ptr(),
            )
        };

        let count = cusp_count.min(MAX_CUSPS - 1);
        RawHouses {
            ascmc,
            cusps: cusps[..=count].to_vec(),
            status,
        }
    }

    fn azalt(
        &self,
        jd_ut: f64,
        flags: FlagSet,
        location: GeoLocation,
        coordinates: [f64; 3],
    ) -> [f64; 3] {
        let calc_flag = if flags.equatorial {
            SE_EQU2HOR
        } else {
            SE_ECL2HOR
        };
        let mut geopos: [c_double; 3] = [location.longitude, location.latitude, 0.0];
        let mut xin: [c_double; 3] = coordinates;
        let mut xaz: [c_double; 3] = [0.0; 3];
        unsafe {
            swe_azalt(
                jd_ut,
                calc_flag,
                geopos.as_mut_ptr(),
                0.0,
                0.0,
                xin.as_mut_ptr(),
                xaz.as_mut_ptr(),
            );
        }
        xaz
    }

    fn julday(&self, year: i32, month: i32, day: i32, hour: f64, gregorian: bool) -> f64 {
        unsafe { swe_julday(year, month, day, hour, calendar_flag(gregorian)) }
    }

    fn revjul(&self, jd: f64, gregorian: bool) -> CalendarDate {
        let (mut year, mut month, mut day, mut hour): (c_int, c_int, c_int, c_double) =
            (0, 0, 0, 0.0);
        unsafe {
            swe_revjul(
                jd,
                calendar_flag(gregorian),
                &mut year,
                &mut month,
                &mut day,
                &mut hour,
            );
        }
        CalendarDate {
            year,
            month,
            day,
            hour,
        }
    }
}
