use std::ffi::OsString;

use clap::Parser;

pub const DEFAULT_SECONDS: u64 = 10;

/// Spawn two chains of detached processes, then sleep.
///
/// Takes no flags. The first argument is the sleep window in seconds, read
/// the way `atoi` would; anything after it is ignored.
#[derive(Parser, Debug, Default)]
#[command(name = "worm", disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    #[arg(num_args = 0.., allow_hyphen_values = true, trailing_var_arg = true)]
    args: Vec<OsString>,
}

impl Args {
    /// Parse the process arguments. Never fails: unusable input falls back to
    /// the default window.
    pub fn from_env() -> Self {
        Self::from_argv(std::env::args_os())
    }

    /// Every argument after the program name is a value, a leading `--`
    /// included, so clap is handed its own end-of-options marker up front.
    pub fn from_argv<I, T>(argv: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut argv = argv.into_iter().map(Into::into);
        let program = argv.next().unwrap_or_else(|| OsString::from("worm"));
        let argv = [program, OsString::from("--")].into_iter().chain(argv);
        Self::try_parse_from(argv).unwrap_or_default()
    }

    pub fn seconds(&self) -> u64 {
        self.args
            .first()
            .map(|arg| parse_seconds(&arg.to_string_lossy()))
            .unwrap_or(DEFAULT_SECONDS)
    }
}

/// Leading whitespace, an optional sign, then as many decimal digits as there
/// are. No digits means 0, negatives clamp to 0 and overflow saturates.
pub fn parse_seconds(text: &str) -> u64 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u64, |acc, d| {
            acc.saturating_mul(10).saturating_add(u64::from(d - b'0'))
        });

    if negative {
        0
    } else {
        value
    }
}
