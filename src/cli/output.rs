use crate::httpx::{ByteRange, QValue};
use crate::stringx::{format_strings, ScanMatch, SplitMode};
use anyhow::Result;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonFields<'a> {
    mode: SplitMode,
    count: usize,
    fields: &'a [&'a str],
}

#[derive(Debug, Serialize)]
struct JsonValue<T> {
    result: T,
}

#[derive(Debug, Serialize)]
struct JsonRanges<'a> {
    valid: bool,
    ranges: Option<&'a [ByteRange]>,
}

/// Renders command results in the configured format.
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    format: OutputFormat,
    colored: bool,
}

impl Printer {
    pub fn new(format: OutputFormat, colored: bool) -> Self {
        Self { format, colored }
    }

    pub fn fields(&self, mode: SplitMode, fields: &[&str]) -> Result<String> {
        match self.format {
            OutputFormat::Json => to_json(&JsonFields {
                mode,
                count: fields.len(),
                fields,
            }),
            OutputFormat::Text if self.colored => {
                let quoted: Vec<String> = fields
                    .iter()
                    .map(|field| format!("\"{}\"", field).green().to_string())
                    .collect();
                Ok(format!("[{}]", quoted.join(", ")))
            }
            OutputFormat::Text => Ok(format_strings(fields)),
        }
    }

    /// One line per match; matches with capture groups render as lists.
    pub fn matches(&self, matches: &[ScanMatch<'_>]) -> Result<String> {
        if self.format == OutputFormat::Json {
            return to_json(&matches);
        }

        let lines: Vec<String> = matches
            .iter()
            .map(|m| match m {
                ScanMatch::Whole(s) if self.colored => s.green().to_string(),
                ScanMatch::Whole(s) => s.to_string(),
                ScanMatch::Groups(groups) => format_strings(groups.as_slice()),
            })
            .collect();
        Ok(lines.join("\n"))
    }

    pub fn text(&self, value: &str) -> Result<String> {
        match self.format {
            OutputFormat::Json => to_json(&JsonValue { result: value }),
            OutputFormat::Text => Ok(value.to_string()),
        }
    }

    pub fn count(&self, count: usize) -> Result<String> {
        match self.format {
            OutputFormat::Json => to_json(&JsonValue { result: count }),
            OutputFormat::Text if self.colored => Ok(count.to_string().bold().to_string()),
            OutputFormat::Text => Ok(count.to_string()),
        }
    }

    pub fn qvalues(&self, values: &[QValue]) -> Result<String> {
        if self.format == OutputFormat::Json {
            return to_json(&values);
        }

        let lines: Vec<String> = values
            .iter()
            .map(|v| {
                if self.colored {
                    format!(
                        "Value: '{}'; Quality: {}",
                        v.value.cyan(),
                        format!("{:.6}", v.quality).bold()
                    )
                } else {
                    v.to_string()
                }
            })
            .collect();
        Ok(lines.join("\n"))
    }

    /// `None` means the header was invalid, an empty slice that nothing in it
    /// can be satisfied.
    pub fn ranges(&self, ranges: Option<&[ByteRange]>) -> Result<String> {
        if self.format == OutputFormat::Json {
            return to_json(&JsonRanges {
                valid: ranges.is_some(),
                ranges,
            });
        }

        let text = match ranges {
            None if self.colored => "invalid range header".red().bold().to_string(),
            None => "invalid range header".to_string(),
            Some([]) if self.colored => "unsatisfiable".yellow().to_string(),
            Some([]) => "unsatisfiable".to_string(),
            Some(ranges) => ranges
                .iter()
                .map(|r| {
                    let span = format!("{}-{}", r.from, r.to);
                    let span = if self.colored {
                        span.blue().bold().to_string()
                    } else {
                        span
                    };
                    let unit = if r.len() == 1 { "byte" } else { "bytes" };
                    format!("{} ({} {})", span, r.len(), unit)
                })
                .collect::<Vec<_>>()
                .join("\n"),
        };
        Ok(text)
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
