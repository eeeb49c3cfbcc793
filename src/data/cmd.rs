use std::ffi::OsString;

use clap::Parser;

/// Command line surface of a tool whose only mode switch is the presence
/// of arguments. Parsing never rejects an invocation: every token lands
/// in `tokens` untouched, flags included.
#[derive(Parser, Debug)]
#[command(author, disable_help_flag = true)]
pub struct Args {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub tokens: Vec<OsString>,

    /// True when the raw command line held at least one argument. The
    /// parser consumes a lone `--` escape, so `tokens` alone would miss
    /// that invocation.
    #[arg(skip)]
    pub has_args: bool,
}

impl Args {
    /// Parses the process argument list.
    pub fn from_env() -> Self {
        Self::from_argv(std::env::args_os())
    }

    /// Parses an explicit argument list, `argv[0]` included.
    pub fn from_argv<I, T>(argv: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
        let mut args = Self::parse_from(&argv);
        args.has_args = argv.len() > 1;
        args
    }

    /// Any argument at all, flag-shaped or not, switches the run to
    /// usage output.
    pub fn help_requested(&self) -> bool {
        self.has_args
    }
}
