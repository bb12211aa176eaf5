use crate::error::{CtabError, CtabResult};
use std::io::Write;

#[allow(unused_variables)]
pub fn write_to_stdout(src: &str) -> CtabResult<()> {
    #[cfg(not(test))]
    write!(std::io::stdout(), "{}", src)
        .map_err(|err| CtabError::io_write_failure(err, "Failed to write to stdout"))?;
    std::io::stdout()
        .flush()
        .map_err(|err| CtabError::io_write_failure(err, "Failed to flush stdout"))?;

    Ok(())
}

#[cfg(feature = "cli")]
#[allow(unused_variables)]
pub(crate) fn write_to_stderr(src: &str) -> CtabResult<()> {
    #[cfg(not(test))]
    write!(std::io::stderr(), "{}", src)
        .map_err(|err| CtabError::io_write_failure(err, "Failed to write to stderr"))?;
    std::io::stderr()
        .flush()
        .map_err(|err| CtabError::io_write_failure(err, "Failed to flush stderr"))?;

    Ok(())
}
