use crate::cli::help;
use crate::cli::parse::{FlagType, Parser};
use crate::error::{CtabError, CtabResult};
use crate::processor::Processor;
use crate::table::Alignment;
use crate::utils;
use std::path::PathBuf;

/// Entry point for the binary
///
/// Parses command line flags, renders the given csv file and writes the
/// table to stdout or to the file given with the output flag.
pub fn run_main() -> CtabResult<()> {
    let args: Vec<String> = std::env::args().collect();
    let flags = Parser::new().parse_from_vec(&args[1..]);

    let mut processor = Processor::new();
    let mut input = None;
    let mut output = None;

    for item in flags.iter() {
        match item.ftype {
            FlagType::Version => help::print_version(),
            FlagType::Help => help::print_binary_help_text(),
            FlagType::Argument => {
                input.replace(PathBuf::from(&item.option));
            }
            FlagType::Width => {
                if item.option.is_empty() {
                    utils::write_to_stderr("WRN : Width is empty thus not applied\n")?;
                } else {
                    processor
                        .config
                        .max_width
                        .replace(positive_number(&item.option, "width")?);
                }
            }
            FlagType::Rows => {
                if item.option.is_empty() {
                    utils::write_to_stderr("WRN : Rows is empty thus not applied\n")?;
                } else {
                    processor
                        .config
                        .max_rows
                        .replace(positive_number(&item.option, "rows")?);
                }
            }
            FlagType::Align => {
                if item.option.is_empty() {
                    utils::write_to_stderr("WRN : Align is empty thus not applied\n")?;
                } else {
                    processor.config.align =
                        Alignment::from_str(&item.option).ok_or_else(|| {
                            CtabError::CliError(format!(
                                "\"{}\" is not a valid alignment. Use left, right or center",
                                item.option
                            ))
                        })?;
                }
            }
            FlagType::Output => {
                if item.option.is_empty() {
                    utils::write_to_stderr("WRN : Output is empty thus not applied\n")?;
                } else {
                    output.replace(PathBuf::from(&item.option));
                }
            }
            FlagType::None => (),
        }

        if item.early_exit {
            return Ok(());
        }
    }

    let input = input.ok_or_else(|| {
        CtabError::CliError("ctab needs a csv file to render. Try \"ctab --help\"".to_string())
    })?;

    let lines = processor.render_from_file(&input)?;
    match output {
        Some(path) => processor.write_to_file(&path, &lines)?,
        None => processor.write_to_stdout(&lines)?,
    }

    Ok(())
}

fn positive_number(src: &str, what: &str) -> CtabResult<usize> {
    match src.parse::<usize>() {
        Ok(num) if num > 0 => Ok(num),
        _ => Err(CtabError::CliError(format!(
            "You need to feed a positive number for {}, got \"{}\"",
            what, src
        ))),
    }
}
