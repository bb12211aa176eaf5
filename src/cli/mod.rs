pub mod help;
pub mod parse;
pub mod run;

pub use parse::{FlagType, Parser};
pub use run::run_main;
