use anyhow::{bail, Result};
use chrono::Utc;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use stdx::cli::{OutputFormat, Printer};
use stdx::config::Overrides;
use stdx::stringx::{self, Pattern};
use stdx::{httpx, timex, Config};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "stdx")]
#[command(version, about = "String, HTTP and time helpers from the command line", long_about = None)]
struct Cli {
    /// Output format (text, json)
    #[arg(short = 'o', long, global = true)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Split a string into fields
    Split {
        input: String,

        /// Separator; omitted or a single space splits on runs of whitespace
        #[arg(short, long)]
        pattern: Option<String>,

        /// Treat the pattern as a regular expression
        #[arg(short, long, requires = "pattern")]
        regex: bool,

        /// Maximum number of fields; negative keeps trailing empty fields
        #[arg(short, long, allow_negative_numbers = true)]
        limit: Option<i32>,
    },
    /// List every match of a pattern
    Scan {
        input: String,

        /// Regular expression to look for
        pattern: String,

        /// Treat the pattern as plain text
        #[arg(long)]
        literal: bool,
    },
    /// Translate characters
    Tr {
        input: String,
        /// Characters to replace (`a-z`, `^aeiou`)
        from: String,
        /// Replacement characters; empty deletes
        to: String,
    },
    /// Count characters that are in every given set
    Count {
        input: String,
        #[arg(required = true)]
        sets: Vec<String>,
    },
    /// Delete characters that are in every given set
    Delete {
        input: String,
        #[arg(required = true)]
        sets: Vec<String>,
    },
    /// Collapse runs of the same character
    Squeeze {
        input: String,
        /// Only squeeze characters in every given set
        sets: Vec<String>,
    },
    /// Center a string within a given width
    Center {
        input: String,
        width: usize,
        #[arg(long)]
        pad: Option<String>,
    },
    /// Percent-encode a string
    Escape {
        input: String,
        /// Encode as a path segment instead of a query component
        #[arg(long)]
        path: bool,
    },
    /// Decode a percent-encoded string
    Unescape {
        input: String,
        /// Decode as a path segment (`+` stays a plus)
        #[arg(long)]
        path: bool,
    },
    /// Parse a quality-value header such as Accept
    Qvalues {
        header: String,
        /// Order from least to most preferred
        #[arg(long)]
        sort: bool,
    },
    /// Parse a Range header against a resource size
    Ranges {
        header: String,
        #[arg(short, long)]
        size: u64,
    },
    /// Format a timestamp as an HTTP date (defaults to now)
    HttpDate { time: Option<String> },
    /// Describe the distance between two timestamps in words
    Distance {
        from: String,
        /// Defaults to now
        to: Option<String>,
        /// Report distances under two minutes in seconds
        #[arg(short, long)]
        include_seconds: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "stdx", &mut io::stdout());
        return Ok(());
    }

    let Some(command) = cli.command else {
        bail!("No command specified. Use --help for usage information.");
    };

    let config = Config::load(Overrides {
        format: cli.format,
        no_color: cli.no_color,
    })?;
    let printer = Printer::new(config.format, config.color);

    println!("{}", run(command, &config, &printer)?);
    Ok(())
}

fn run(command: Commands, config: &Config, printer: &Printer) -> Result<String> {
    match command {
        Commands::Split {
            input,
            pattern,
            regex,
            limit,
        } => {
            let compiled;
            let pattern = match pattern.as_deref() {
                Some(source) if regex => {
                    compiled = stringx::compile_pattern(source)?;
                    Pattern::Regex(&compiled)
                }
                other => Pattern::from(other),
            };
            let fields = stringx::split(&input, pattern, limit.or(config.limit));
            printer.fields(pattern.mode(), &fields)
        }
        Commands::Scan {
            input,
            pattern,
            literal,
        } => {
            let matches = if literal {
                stringx::scan(&input, pattern.as_str())
            } else {
                let re = stringx::compile_pattern(&pattern)?;
                stringx::scan(&input, &re)
            };
            printer.matches(&matches)
        }
        Commands::Tr { input, from, to } => printer.text(&stringx::tr(&input, &from, &to)),
        Commands::Count { input, sets } => printer.count(stringx::count(&input, &as_strs(&sets))),
        Commands::Delete { input, sets } => printer.text(&stringx::delete(&input, &as_strs(&sets))),
        Commands::Squeeze { input, sets } => {
            printer.text(&stringx::squeeze(&input, &as_strs(&sets)))
        }
        Commands::Center { input, width, pad } => {
            printer.text(&stringx::center(&input, width, pad.as_deref()))
        }
        Commands::Escape { input, path } => {
            let escaped = if path {
                httpx::escape_path(&input)
            } else {
                httpx::escape(&input)
            };
            printer.text(&escaped)
        }
        Commands::Unescape { input, path } => {
            let unescaped = if path {
                httpx::unescape_path(&input)
            } else {
                httpx::unescape(&input)
            };
            printer.text(&unescaped)
        }
        Commands::Qvalues { header, sort } => {
            let mut values = httpx::qvalues(&header);
            if sort {
                httpx::sort_by_quality(&mut values);
            }
            printer.qvalues(&values)
        }
        Commands::Ranges { header, size } => {
            let ranges = httpx::byte_ranges(&header, size);
            printer.ranges(ranges.as_deref())
        }
        Commands::HttpDate { time } => {
            let time = match time {
                Some(time) => timex::parse_timestamp(&time)?,
                None => Utc::now(),
            };
            printer.text(&httpx::http_date(&time))
        }
        Commands::Distance {
            from,
            to,
            include_seconds,
        } => {
            let from = timex::parse_timestamp(&from)?;
            let include_seconds = include_seconds || config.include_seconds;
            let words = match to {
                Some(to) => {
                    let to = timex::parse_timestamp(&to)?;
                    timex::distance_of_time_in_words(from, to, include_seconds)
                }
                None => timex::time_ago_in_words(from, include_seconds),
            };
            printer.text(&words)
        }
    }
}

fn as_strs(items: &[String]) -> Vec<&str> {
    items.iter().map(String::as_str).collect()
}
