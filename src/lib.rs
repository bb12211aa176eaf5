/// Ctab, a csv to ascii table renderer
///
/// ### Install
///
/// ```bash
/// cargo install ctab --features cli --locked
/// ```
///
/// ### Binary usage
///
/// ```bash
/// # Print version
/// ctab --version
/// # Print help
/// ctab --help
///
/// # Render a csv file as an ascii table to stdout
/// ctab file.csv
///
/// # Cap every column to 10 characters
/// ctab file.csv --width 10
///
/// # Render only the first 20 data rows
/// ctab file.csv --rows 20
///
/// # Right align data rows. Header is always centered
/// ctab file.csv --align right
///
/// # Write the table to a file instead of stdout
/// ctab file.csv --output table.txt
/// ```
///
/// ### Library usage
///
/// ```no_run
/// use ctab::Processor;
///
/// let processor = Processor::new();
/// let lines = processor.render_from_string("name,age\nAlice,30").unwrap();
/// ```

#[cfg(test)]
mod test;

#[cfg(feature = "cli")]
pub(crate) mod cli;

pub(crate) mod error;
pub(crate) mod processor;
pub(crate) mod records;
pub(crate) mod table;
pub(crate) mod utils;

// ----------
// RE-EXPORTS

#[cfg(feature = "cli")]
pub use cli::run_main;
pub use error::{CtabError, CtabResult};
pub use processor::Processor;
pub use records::{RecordSource, Records, Row};
pub use table::{Alignment, RenderConfig};
