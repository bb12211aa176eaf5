#[cfg(feature = "cli")]
pub fn main() {
    if let Err(err) = ctab::run_main() {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

// Placeholder for binary
#[cfg(not(feature = "cli"))]
pub fn main() {}
