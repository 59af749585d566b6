//! Command-line parsing and validation.

use crate::data::{DataSource, OutputFormat, Parameters};
use crate::error::CliError;
use fieldcheck::file_input::InputPath;

type CliResult<T> = Result<T, CliError>;

type ApplyFn = fn(Option<&str>, &mut Parameters) -> CliResult<()>;

enum OptKind {
    Value(ApplyFn),
    Flag(ApplyFn),
}

struct OptionSpec {
    name: &'static str,
    kind: OptKind,
}

const OPTION_SPECS: &[OptionSpec] = &[
    OptionSpec {
        name: "format",
        kind: OptKind::Value(|value, params| {
            let v = required_value("format", value)?;
            params.output.format = v.parse::<OutputFormat>().map_err(CliError::from)?;
            Ok(())
        }),
    },
    OptionSpec {
        name: "span",
        kind: OptKind::Value(|value, params| {
            let v = required_value("span", value)?;
            let span = parse_f64("span", v)?;
            if !span.is_finite() || span <= 0.0 {
                return Err(format!("Span must be a positive number of degrees, got {}", v).into());
            }
            params.span = span;
            Ok(())
        }),
    },
    OptionSpec {
        name: "headers",
        kind: OptKind::Flag(|_, params| {
            params.output.headers = true;
            Ok(())
        }),
    },
    OptionSpec {
        name: "no-headers",
        kind: OptKind::Flag(|_, params| {
            params.output.headers = false;
            Ok(())
        }),
    },
    OptionSpec {
        name: "perf",
        kind: OptKind::Flag(|_, params| {
            params.perf = true;
            Ok(())
        }),
    },
    OptionSpec {
        name: "help",
        kind: OptKind::Flag(|_, _| Err(CliError::Exit(get_help_text()))),
    },
    OptionSpec {
        name: "version",
        kind: OptKind::Flag(|_, _| Err(CliError::Exit(get_version_text()))),
    },
];

pub fn parse_cli(args: Vec<String>) -> CliResult<(DataSource, Parameters)> {
    if args.len() < 2 {
        return Err(CliError::Exit(
            "Usage: fieldcheck [OPTIONS] <latitude> <longitude>".to_string(),
        ));
    }

    let mut params = Parameters::default();
    let mut positional = Vec::new();

    for arg in args.into_iter().skip(1) {
        if let Some(stripped) = arg.strip_prefix("--") {
            let (name, value) = stripped
                .split_once('=')
                .map(|(n, v)| (n, Some(v)))
                .unwrap_or((stripped, None));
            apply_option(name, value, &mut params)?;
        } else {
            positional.push(arg);
        }
    }

    if positional.first().is_some_and(|first| first == "help") {
        return Err(CliError::Exit(get_help_text()));
    }

    let source = parse_data_source(positional)?;
    Ok((source, params))
}

fn parse_f64(label: &str, value: &str) -> CliResult<f64> {
    value
        .parse::<f64>()
        .map_err(|_| CliError::from(format!("Invalid {} value: {}", label, value)))
}

fn apply_option(name: &str, value: Option<&str>, params: &mut Parameters) -> CliResult<()> {
    let Some(spec) = OPTION_SPECS.iter().find(|s| s.name == name) else {
        return Err(format!("Unknown option: --{}", name).into());
    };

    match spec.kind {
        OptKind::Value(handler) => {
            let val = required_value(spec.name, value)?;
            handler(Some(val), params)
        }
        OptKind::Flag(handler) => {
            if value.is_some() {
                return Err(format!("Option --{} does not take a value", spec.name).into());
            }
            handler(None, params)
        }
    }
}

fn required_value<'a>(flag: &'static str, value: Option<&'a str>) -> CliResult<&'a str> {
    value.ok_or_else(|| CliError::from(format!("Option --{} requires a value", flag)))
}

fn parse_data_source(mut args: Vec<String>) -> CliResult<DataSource> {
    match args.len() {
        0 => Err("Need a latitude and longitude, or a pair file (@file or @-)".into()),
        1 => InputPath::from_arg(&args[0])
            .map(DataSource::File)
            .ok_or_else(|| "Single argument must be a file (@file or @-)".into()),
        2 => {
            if args.iter().any(|a| a.starts_with('@')) {
                return Err("File input takes a single @file argument".into());
            }
            let longitude = args.remove(1);
            let latitude = args.remove(0);
            Ok(DataSource::Single {
                latitude,
                longitude,
            })
        }
        _ => Err("Too many arguments".into()),
    }
}

fn get_version_text() -> String {
    format!(
        "fieldcheck {}\n Build: {} ({})\n Built: {}\n Features: {}",
        env!("CARGO_PKG_VERSION"),
        env!("BUILD_PROFILE"),
        env!("BUILD_TARGET"),
        env!("BUILD_DATE"),
        env!("BUILD_FEATURES")
    )
}

fn get_help_text() -> String {
    let defaults = Parameters::default();
    let formats = OutputFormat::all().join(", ");
    format!(
        r#"fieldcheck {}
Checks latitude/longitude text and reports whether a map move would be allowed.

Usage:
  fieldcheck [OPTIONS] <latitude> <longitude>
  fieldcheck [OPTIONS] @pairs.txt

Examples:
  fieldcheck 45 120
  fieldcheck --format=json 45 200
  fieldcheck @pairs.txt --format=csv
  echo "52.0 13.4" | fieldcheck @-

Arguments:
  <latitude>         Decimal degrees, -90 to +90 inclusive.
  <longitude>        Decimal degrees, -180 to +180 inclusive.
  @pairs.txt         File with one "lat lon" pair per line (or @- for stdin).
                       Fields are comma- or whitespace-separated.
                       A missing longitude counts as an empty field.
                       Blank lines and lines starting with # are ignored.

Options:
  --format=<format>  Output format: {}. Default: {}
  --span=<degrees>   Zoom span of the reported map region. Default: {}
  --[no-]headers     Include headers in CSV output. Default: {}
  --perf             Print performance statistics to stderr.
  --help             Show this help message and exit.
  --version          Print version information and exit.
"#,
        env!("CARGO_PKG_VERSION"),
        formats,
        defaults.output.format,
        defaults.span,
        defaults.output.headers
    )
}
