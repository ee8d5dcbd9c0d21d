use clap::{Parser, ValueEnum};
use parser::error_report::report_error;
use parser::{ParseError, ParserOptions, SignatureParser};
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "signet", version, about = "Parse signet type signatures")]
struct Cli {
    /// Signature (or type token with --type) to parse
    input: String,

    /// Parse INPUT as a single type token
    #[arg(long = "type")]
    type_only: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Debug)]
    format: Format,

    /// Replace a whole type token FROM with TO before parsing
    #[arg(long = "alias", value_name = "FROM=TO", value_parser = parse_alias)]
    aliases: Vec<(String, String)>,

    /// Accept signatures without an output stage
    #[arg(long)]
    lenient: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Debug,
    Json,
}

fn parse_alias(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((from, to)) if !from.trim().is_empty() => {
            Ok((from.trim().to_string(), to.trim().to_string()))
        }
        _ => Err(format!("expected FROM=TO, got '{}'", raw)),
    }
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let options = ParserOptions::default().require_output(!cli.lenient);
    let mut signet = SignatureParser::with_options(options);

    for (from, to) in cli.aliases.iter().cloned() {
        debug!(%from, %to, "registering alias");
        signet.register_type_macro(move |token: &str| {
            if token.trim() == from {
                to.clone()
            } else {
                token.to_string()
            }
        });
    }

    let rendered = if cli.type_only {
        signet
            .parse_type(&cli.input)
            .map(|parsed| render(cli.format, &parsed))
    } else {
        signet.parse_signature(&cli.input).map(|parsed| {
            debug!(
                inputs = parsed.inputs().len(),
                outputs = parsed.output().map_or(0, |stage| stage.len()),
                "parsed signature"
            );
            render(cli.format, &parsed)
        })
    };
    debug!(stats = ?signet.cache_stats(), "cache");

    match rendered {
        Ok(Ok(output)) => println!("{}", output),
        Ok(Err(e)) => {
            eprintln!("Error serializing output: {}", e);
            process::exit(1);
        }
        Err(error) => fail(&cli.input, &error),
    }
}

fn render<T>(format: Format, value: &T) -> serde_json::Result<String>
where
    T: serde::Serialize + std::fmt::Debug,
{
    match format {
        Format::Debug => Ok(format!("{:#?}", value)),
        Format::Json => serde_json::to_string_pretty(value),
    }
}

fn fail(source: &str, error: &ParseError) -> ! {
    if report_error("<input>", source, error).is_err() {
        eprintln!("{}", error);
    }
    process::exit(error.exit_code());
}
