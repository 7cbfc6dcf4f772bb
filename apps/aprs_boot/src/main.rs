//! aprs_boot entry point
//!
//! For Linux: standard main() function
//! For NuttX: entry point is aprs_boot_main() in lib.rs (built as staticlib)

fn main() {
    aprs_boot::init_logging();
    std::process::exit(aprs_boot::run());
}
