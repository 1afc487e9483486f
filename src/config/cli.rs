use std::ffi::OsString;

use clap::Parser;

/// Long flags that may be spelled with a single dash, Go `flag` style.
const SINGLE_DASH_LONG_FLAGS: &[&str] = &[
    "example",
    "usehttp",
    "delay",
    "responseHeaders",
    "help",
    "version",
];

/// Flags whose value may follow as a separate argument.
const VALUE_FLAGS: &[&str] = &["delay", "responseHeaders"];

pub const EXAMPLE_USAGE: &[&str] = &[
    "url-pinger https://www.google.com",
    "url-pinger -delay 2 https://www.google.com",
];

/// Repeatedly GET a URL and print status, latency and selected response headers
#[derive(Parser, Debug)]
#[command(
    name = "url-pinger",
    version,
    about,
    long_about = None,
    after_help = "***If you do not specify the protocol in the URL, we default to HTTPS"
)]
pub struct Cli {
    /// Print example usage
    #[arg(long)]
    pub example: bool,

    /// Default to HTTP instead of HTTPS
    #[arg(long = "usehttp")]
    pub use_http: bool,

    /// The time between in requests, in seconds
    #[arg(long, default_value_t = 0, value_name = "SECONDS")]
    pub delay: u64,

    /// Comma delimited list of response headers to return
    #[arg(long = "responseHeaders", default_value = "", value_name = "HEADERS")]
    pub response_headers: String,

    /// Target URL; HTTPS is assumed when no scheme is given
    pub url: String,
}

impl Cli {
    /// Parse process arguments, accepting `-delay 2` as well as `--delay 2`.
    pub fn parse_go_style() -> Self {
        Self::parse_from(normalize_flag_args(std::env::args_os()))
    }
}

/// Rewrite args into the shape clap expects while keeping Go `flag` rules.
///
/// Single-dash long flags (`-delay`, `-delay=2`) gain a second dash and `-v`
/// becomes `--version`. Flag parsing stops at the first positional argument
/// or at a bare `--`; everything from there on is passed after `--`, so a
/// flag written after the URL is an extra positional and a usage error.
pub fn normalize_flag_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter();
    let mut normalized: Vec<OsString> = args.next().into_iter().collect();
    let mut takes_value = false;

    for arg in args.by_ref() {
        if takes_value {
            takes_value = false;
            normalized.push(arg);
            continue;
        }

        let Some(text) = arg.to_str().map(str::to_owned) else {
            normalized.push(OsString::from("--"));
            normalized.push(arg);
            break;
        };
        if text == "--" {
            normalized.push(arg);
            break;
        }
        if text == "-" || !text.starts_with('-') {
            normalized.push(OsString::from("--"));
            normalized.push(arg);
            break;
        }
        if text == "-v" {
            normalized.push(OsString::from("--version"));
            continue;
        }

        let flag = text.trim_start_matches('-');
        let name = flag.split_once('=').map_or(flag, |(name, _)| name);
        takes_value = VALUE_FLAGS.contains(&name) && !flag.contains('=');

        if !text.starts_with("--") && SINGLE_DASH_LONG_FLAGS.contains(&name) {
            normalized.push(OsString::from(format!("-{text}")));
        } else {
            normalized.push(arg);
        }
    }

    normalized.extend(args);
    normalized
}
