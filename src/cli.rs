//! Command-line interface implementation

use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{error, info};

use crate::builder::build;
use crate::error::{Error, Result};

/// Exit codes. Malformed command lines exit with clap's usage code (2).
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;

/// Binary name shown in the usage banner
pub const BIN_NAME: &str = "gen-dockercfg";

/// Option names, in declaration order
const FLAG_NAMES: [&str; 4] = ["username", "password", "email", "server"];

/// gen-dockercfg - Generate a docker config.json with registry credentials
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "gen-dockercfg")]
#[command(about = "Generate a docker config.json with registry credentials")]
#[command(version)]
pub struct Cli {
    /// Registry Username
    #[arg(long, default_value = "", hide_default_value = true, allow_hyphen_values = true)]
    pub username: String,

    /// Registry Password
    #[arg(long, default_value = "", hide_default_value = true, allow_hyphen_values = true)]
    pub password: String,

    /// Registry email
    #[arg(long, default_value = "", hide_default_value = true, allow_hyphen_values = true)]
    pub email: String,

    /// Registry Url
    #[arg(long, default_value = "", hide_default_value = true, allow_hyphen_values = true)]
    pub server: String,
}

/// Validated inputs for the config builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub email: String,
    pub server: String,
}

impl Cli {
    /// Check that every option is non-empty.
    ///
    /// All empty options are reported, in declaration order.
    pub fn credentials(&self) -> Result<Credentials> {
        let missing: Vec<&'static str> = [
            ("username", &self.username),
            ("password", &self.password),
            ("email", &self.email),
            ("server", &self.server),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect();

        if !missing.is_empty() {
            return Err(Error::MissingInput(missing));
        }

        Ok(Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
            email: self.email.clone(),
            server: self.server.clone(),
        })
    }
}

/// Run the CLI application
pub fn run() -> ExitCode {
    run_with(std::env::args_os(), &mut io::stdout().lock())
}

/// Parse `args` and write the result to `out`.
///
/// Argument syntax errors and `--help` are handled by clap, which exits the
/// process directly.
pub fn run_with<I, T, W>(args: I, out: &mut W) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let cli = Cli::parse_from(normalize_flags(args));
    ExitCode::from(generate(&cli, out))
}

/// Rewrite single-dash options (`-username x`, `-server=s`) to their
/// double-dash form.
///
/// Only tokens in option position are touched; the token following a bare
/// `--name` is a value and passes through as-is, even if it looks like a flag.
pub fn normalize_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut normalized = Vec::new();
    let mut expect_value = false;

    for (index, arg) in args.into_iter().enumerate() {
        let arg: OsString = arg.into();
        if index == 0 || expect_value {
            expect_value = false;
            normalized.push(arg);
            continue;
        }

        let Some(text) = arg.to_str() else {
            normalized.push(arg);
            continue;
        };

        let long = match text.strip_prefix('-') {
            Some(rest) if !rest.starts_with('-') && is_known_flag(rest) => format!("-{}", text),
            _ => text.to_string(),
        };
        expect_value = long
            .strip_prefix("--")
            .is_some_and(|name| FLAG_NAMES.contains(&name));
        normalized.push(OsString::from(long));
    }

    normalized
}

/// `name` or `name=value` for one of the four options
fn is_known_flag(token: &str) -> bool {
    let name = token.split_once('=').map_or(token, |(name, _)| name);
    FLAG_NAMES.contains(&name)
}

/// Validate, build, and emit. Returns the process exit status.
///
/// Usage text and serialization errors are written to `out`, not stderr.
pub fn generate<W: Write>(cli: &Cli, out: &mut W) -> u8 {
    let creds = match cli.credentials() {
        Ok(creds) => creds,
        Err(e) => {
            info!("{}", e);
            return match print_usage(out, &e) {
                Ok(()) => EXIT_ERROR,
                Err(io_err) => report_write_error(&io_err),
            };
        }
    };

    let content = match build(&creds.username, &creds.password, &creds.email, &creds.server) {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("{}", e);
            return match write!(out, "{}", e).and_then(|()| out.flush()) {
                Ok(()) => EXIT_ERROR,
                Err(io_err) => report_write_error(&io_err),
            };
        }
    };

    match out.write_all(&content).and_then(|()| out.flush()) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => report_write_error(&e),
    }
}

/// Print the missing-input banner, the empty options, and option help.
fn print_usage<W: Write>(out: &mut W, err: &Error) -> io::Result<()> {
    writeln!(out, "Inputs Missing ! Usage: {}", BIN_NAME)?;
    if let Error::MissingInput(missing) = err {
        let flags: Vec<String> = missing.iter().map(|name| format!("--{}", name)).collect();
        writeln!(out, "Missing: {}", flags.join(", "))?;
    }
    write!(out, "{}", Cli::command().render_help())?;
    out.flush()
}

fn report_write_error(e: &io::Error) -> u8 {
    eprintln!("Error: Failed to write output: {}", e);
    EXIT_ERROR
}
