//! Command-line surface.
//!
//! Flags follow Go `flag` package conventions: long options take a single
//! dash (`-verbose`), booleans take an optional `=value`, and `--verbose`
//! works as well. Flag parsing stops at the first non-flag argument or at
//! `--`; whatever follows is collected and ignored.

use std::ffi::OsString;

use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(name = "ciphernexus")]
#[command(version, about = "Run the ciphernexus application", long_about = None)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        value_name = "BOOL",
        value_parser = parse_flag_bool
    )]
    pub verbose: bool,

    /// Arguments after the flags.
    #[arg(hide = true, num_args = 1.., trailing_var_arg = true)]
    pub rest: Vec<OsString>,
}

/// Parse an argument list whose first element is the program name.
pub fn parse<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    Cli::try_parse_from(normalize(args))
}

/// Rewrite single-dash long flags (`-verbose=true`) to clap's `--verbose=true`.
///
/// Single-letter flags such as `-h` and `-V` pass through untouched, as does
/// everything from the first non-flag argument or a `--` terminator on.
pub fn normalize<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut normalized = Vec::new();
    let mut flags_done = false;

    for (index, arg) in args.into_iter().enumerate() {
        let arg: OsString = arg.into();
        if index == 0 || flags_done {
            normalized.push(arg);
            continue;
        }

        match arg.to_str() {
            Some("--") => {
                flags_done = true;
                normalized.push(arg);
            }
            Some(flag) if is_single_dash_long(flag) => normalized.push(format!("-{flag}").into()),
            _ => {
                flags_done = !is_flag(&arg);
                normalized.push(arg);
            }
        }
    }

    normalized
}

fn is_flag(arg: &OsString) -> bool {
    let bytes = arg.as_encoded_bytes();
    bytes.len() > 1 && bytes[0] == b'-'
}

fn is_single_dash_long(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    if rest.starts_with('-') {
        return false;
    }
    let name = rest.split('=').next().unwrap_or(rest);
    name.chars().count() > 1
}

/// Boolean spellings accepted by Go's `strconv.ParseBool`.
fn parse_flag_bool(value: &str) -> Result<bool, String> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        other => Err(format!("invalid boolean value {other:?}")),
    }
}
