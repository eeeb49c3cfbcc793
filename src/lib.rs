#[cfg(target_os = "macos")]
#[macro_use]
extern crate objc;

use std::io::Write;

use anyhow::Result;

mod data;
mod help;
mod os;
mod util;

pub use data::*;
pub use help::*;
use os::*;
use sys_locale::get_locale;
use sysinfo::{RefreshKind, System, SystemExt};
pub use util::*;

pub const TOOL_NAME: &'static str = "clipio";

/// What a finished invocation amounted to. The binary maps every
/// variant to exit code 0; the variant records which path ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Usage text was printed. Stdin and the clipboard were never
    /// touched.
    Help,
    /// The normal pipe ran: conditional clipboard write, then print.
    Completed,
}

pub fn run(args: Args) -> Result<Outcome> {
    let _guard = init_log()?;
    for line in format_version().lines() {
        log::debug!("======== {}", line);
    }
    log::debug!("args: {:?}", args);

    let mut clipboard = SystemClipboard::new();
    let mut out = std::io::stdout().lock();
    Ok(orchestrate(
        &args,
        &mut clipboard,
        &Usage,
        &mut out,
        stdin::read_piped_input,
    ))
}

/// The whole tool, one decision procedure. Arguments win over
/// everything; otherwise piped input (if any) is written to the
/// clipboard and the clipboard is printed. Every failure past argument
/// parsing degrades to printing less, never to a nonzero exit.
fn orchestrate(
    args: &Args,
    clipboard: &mut dyn Clipboard,
    help: &dyn Help,
    out: &mut dyn Write,
    piped_input: impl FnOnce() -> String,
) -> Outcome {
    if args.help_requested() {
        if let Err(e) = help.print(out) {
            log::debug!("usage print failed: {:?}", e);
        }
        return Outcome::Help;
    }

    let input = piped_input();
    if !input.is_empty() {
        clipboard.write(input);
    }

    match clipboard.read() {
        Ok(contents) => {
            if let Err(e) = write!(out, "{}", contents).and_then(|_| out.flush()) {
                log::debug!("stdout write failed: {:?}", e);
            }
        }
        Err(e) => log::debug!("clipboard read failed: {:?}", e),
    }
    Outcome::Completed
}

fn init_log() -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let level = if cfg!(debug_assertions) {
        log::Level::Trace
    } else {
        log::Level::Warn
    };
    let log_file_name = {
        let exe = std::env::current_exe()?;
        let name = exe
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(TOOL_NAME)
            .replace(std::env::consts::EXE_SUFFIX, "");
        format!("{}.log", name)
    };
    Ok(logger::start_tracing(level, &log_file_name))
}

fn format_version() -> String {
    use data::constant::*;
    use std::env::consts::*;
    let refresh_kind = RefreshKind::new();
    let sys = System::new_with_specifics(refresh_kind);
    let mut str = format!("{} revision {} • {}", VERSION, GIT_COMMIT_ID, BUILD_TIME);

    str.push('\n');

    str.push_str(&format!(
        "{} ({} {}) {}",
        sys.long_os_version().unwrap_or_default(),
        ARCH,
        get_locale().unwrap_or_default(),
        sys.kernel_version().unwrap_or_default(),
    ));
    str
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[derive(Default)]
    struct MockClipboard {
        stored: Option<String>,
        writes: Vec<String>,
        fail_reads: bool,
    }

    impl Clipboard for MockClipboard {
        fn write(&mut self, text: String) {
            self.writes.push(text.clone());
            self.stored = Some(text);
        }

        fn read(&mut self) -> Result<String> {
            if self.fail_reads {
                anyhow::bail!("clipboard unavailable")
            }
            Ok(self.stored.clone().unwrap_or_default())
        }
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "downstream closed",
            ))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "downstream closed",
            ))
        }
    }

    fn parse(argv: &[&str]) -> Args {
        Args::from_argv(argv)
    }

    #[test]
    fn any_argument_prints_usage_and_nothing_else_runs() {
        let args = parse(&["clipio", "busywork"]);
        let mut clipboard = MockClipboard::default();
        let mut out = Vec::new();
        let touched = Cell::new(false);

        let outcome = orchestrate(
            &args,
            &mut clipboard,
            &Usage,
            &mut out,
            || {
                touched.set(true);
                String::from("should never be read")
            },
        );

        assert_eq!(outcome, Outcome::Help);
        assert_eq!(out, usage().as_bytes());
        assert!(!touched.get());
        assert!(clipboard.writes.is_empty());
    }

    #[test]
    fn flag_shaped_arguments_also_print_usage() {
        for argv in [
            vec!["clipio", "--help"],
            vec!["clipio", "-h"],
            vec!["clipio", "copy", "--fast"],
        ] {
            let args = parse(&argv);
            let mut clipboard = MockClipboard::default();
            let mut out = Vec::new();

            let outcome = orchestrate(&args, &mut clipboard, &Usage, &mut out, String::new);

            assert_eq!(outcome, Outcome::Help);
            assert_eq!(out, usage().as_bytes());
        }
    }

    #[test]
    fn empty_input_passes_through_without_writing() {
        let args = parse(&["clipio"]);
        let mut clipboard = MockClipboard {
            stored: Some(String::from("kept")),
            ..Default::default()
        };
        let mut out = Vec::new();

        let outcome = orchestrate(&args, &mut clipboard, &Usage, &mut out, String::new);

        assert_eq!(outcome, Outcome::Completed);
        assert!(clipboard.writes.is_empty());
        assert_eq!(out, b"kept");
    }

    #[test]
    fn piped_input_is_stored_then_printed() {
        let args = parse(&["clipio"]);
        let mut clipboard = MockClipboard::default();
        let mut out = Vec::new();

        let outcome = orchestrate(&args, &mut clipboard, &Usage, &mut out, || {
            String::from("fresh text\n")
        });

        assert_eq!(outcome, Outcome::Completed);
        assert_eq!(clipboard.writes, vec![String::from("fresh text\n")]);
        assert_eq!(out, b"fresh text\n");
    }

    #[test]
    fn contents_are_printed_byte_for_byte() {
        let args = parse(&["clipio"]);
        for text in ["Line 1\nLine 2\n", "päste\n\ttabs and кириллица\n\n"] {
            let mut clipboard = MockClipboard::default();
            let mut out = Vec::new();

            orchestrate(&args, &mut clipboard, &Usage, &mut out, || {
                String::from(text)
            });

            assert_eq!(out, text.as_bytes());
        }
    }

    #[test]
    fn unreadable_clipboard_degrades_to_silence() {
        let args = parse(&["clipio"]);
        let mut clipboard = MockClipboard {
            fail_reads: true,
            ..Default::default()
        };
        let mut out = Vec::new();

        let outcome = orchestrate(&args, &mut clipboard, &Usage, &mut out, || {
            String::from("still written")
        });

        assert_eq!(outcome, Outcome::Completed);
        assert_eq!(clipboard.writes, vec![String::from("still written")]);
        assert!(out.is_empty());
    }

    #[test]
    fn repeated_empty_runs_leave_the_clipboard_alone() {
        let args = parse(&["clipio"]);
        let mut clipboard = MockClipboard {
            stored: Some(String::from("stable")),
            ..Default::default()
        };

        for _ in 0..3 {
            let mut out = Vec::new();
            orchestrate(&args, &mut clipboard, &Usage, &mut out, String::new);
            assert_eq!(out, b"stable");
        }
        assert!(clipboard.writes.is_empty());
        assert_eq!(clipboard.stored.as_deref(), Some("stable"));
    }

    #[test]
    fn closed_stdout_is_swallowed() {
        let args = parse(&["clipio"]);
        let mut clipboard = MockClipboard {
            stored: Some(String::from("text")),
            ..Default::default()
        };

        let outcome = orchestrate(&args, &mut clipboard, &Usage, &mut BrokenPipe, String::new);

        assert_eq!(outcome, Outcome::Completed);
    }

    #[test]
    fn help_on_closed_stdout_still_reports_help() {
        let args = parse(&["clipio", "-h"]);
        let mut clipboard = MockClipboard::default();

        let outcome = orchestrate(&args, &mut clipboard, &Usage, &mut BrokenPipe, String::new);

        assert_eq!(outcome, Outcome::Help);
        assert!(clipboard.writes.is_empty());
    }
}
