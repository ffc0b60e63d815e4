#[cfg(feature = "native")]
use std::env;
#[cfg(feature = "native")]
use std::path::PathBuf;

// Without the `native` feature the crate only carries the provider interface and
// nothing has to be linked.
#[cfg(not(feature = "native"))]
fn main() {
    println!("cargo:rerun-if-changed=build/build.rs");
}

#[cfg(feature = "native")]
fn main() {
    println!("cargo:rerun-if-changed=build/build.rs");
    println!("cargo:rerun-if-env-changed=SWISSEPH_SRC_DIR");
    println!("cargo:rerun-if-env-changed=SWISSEPH_LIB_DIR");

    if let Ok(src_dir) = env::var("SWISSEPH_SRC_DIR") {
        compile_sources(PathBuf::from(src_dir));
        return;
    }

    if let Ok(lib_dir) = env::var("SWISSEPH_LIB_DIR") {
        println!("cargo:rustc-link-search=native={}", lib_dir);
    }
    println!("cargo:rustc-link-lib=swe");
}

#[cfg(feature = "native")]
fn compile_sources(src_dir: PathBuf) {
    const SOURCES: [&str; 9] = [
        "swecl.c",
        "swedate.c",
        "swehel.c",
        "swehouse.c",
        "swejpl.c",
        "swemmoon.c",
        "swemplan.c",
        "sweph.c",
        "swephlib.c",
    ];

    let mut build = cc::Build::new();

    if cfg!(target_os = "windows") {
        build.flag("/W4");
    } else {
        build.flag("-g").flag("-Wall").flag("-fPIC");
    }

    build.include(&src_dir);
    for source in SOURCES {
        let path = src_dir.join(source);
        println!("cargo:rerun-if-changed={}", path.display());
        build.file(path);
    }
    build.compile("swe");
}
