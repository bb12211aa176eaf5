use std::path::Path;

use crate::error::{CtabError, CtabResult};
use crate::records::RecordSource;
use crate::table::{self, RenderConfig};
use crate::utils;

/// Render pipeline driver
///
/// Wires a record source into the table renderer and writes the result to a
/// sink. Any failure aborts the whole render, there is no retry and no
/// partial success mode.
pub struct Processor {
    pub config: RenderConfig,
}

impl Processor {
    pub fn new() -> Self {
        Self {
            config: RenderConfig::default(),
        }
    }

    pub fn render_from_file(&self, path: &Path) -> CtabResult<Vec<String>> {
        let source = RecordSource::from_file(path)?;
        table::render(&source, &self.config).map_err(|err| match err {
            CtabError::MalformedInput(meta) => CtabError::MalformedInput(format!(
                "{} :: {}",
                meta,
                path.display()
            )),
            other => other,
        })
    }

    pub fn render_from_string(&self, content: &str) -> CtabResult<Vec<String>> {
        let source = RecordSource::from_string(content);
        table::render(&source, &self.config)
    }

    pub fn write_to_file(&self, path: &Path, lines: &[String]) -> CtabResult<()> {
        let mut table = lines.join("\n");
        if !lines.is_empty() {
            table.push('\n');
        }
        std::fs::write(path, table.as_bytes()).map_err(|err| {
            CtabError::io_write_failure(
                err,
                &format!("Failed to write table to \"{}\"", path.display()),
            )
        })?;
        Ok(())
    }

    pub fn write_to_stdout(&self, lines: &[String]) -> CtabResult<()> {
        for line in lines {
            utils::write_to_stdout(&format!("{}\n", line))?;
        }
        Ok(())
    }
}

impl Default for Processor {
    fn default() -> Self {
        Self::new()
    }
}
