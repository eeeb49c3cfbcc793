use std::io::Write;

use anyhow::Result;
use once_cell::sync::Lazy;

use crate::data::constant::{GIT_COMMIT_ID, VERSION};
use crate::TOOL_NAME;

static USAGE: Lazy<String> = Lazy::new(|| {
    format!(
        "\
{name} - Terminal clipboard utility

{name} prints the contents of the user's clipboard.
Any input piped into {name} will be copied to the user's clipboard, then printed.

Usage:
  {name}

Examples:
  {name} > clipboard.txt
  echo pipedinput | {name}

{name} {version} revision {revision}",
        name = TOOL_NAME,
        version = VERSION,
        revision = GIT_COMMIT_ID,
    )
});

/// Renders the usage text for an argument-carrying invocation.
pub trait Help {
    fn print(&self, out: &mut dyn Write) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct Usage;

impl Help for Usage {
    fn print(&self, out: &mut dyn Write) -> Result<()> {
        write!(out, "{}", usage())?;
        Ok(())
    }
}

/// The exact text printed for `clipio <anything>`. No trailing newline.
pub fn usage() -> &'static str {
    &USAGE
}
