use crate::utils;

const BINARY_HELP: &str = include_str!("../help/bin.txt");

pub fn print_binary_help_text() {
    utils::write_to_stdout(BINARY_HELP).expect("Failed to print to terminal");
}

pub fn print_version() {
    print!(include_str!("../help/version.txt"));
}
