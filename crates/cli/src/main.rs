//! # indicator-cli
//!
//! Command-line interface for the streaming indicator library.

use clap::{Parser, Subcommand};
use indicator_facade::{
    create_indicator, Bar, FilterConfig, IndicatorKind, Metadata, Scalar, StreamingIndicator,
};
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "indicator")]
#[command(about = "Streaming technical indicator CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Stream a series through an indicator
    Run {
        /// Input file (CSV or JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Indicator configuration file (JSON, tagged by "type")
        #[arg(long, conflicts_with = "indicator")]
        config: Option<PathBuf>,

        /// Indicator kind, e.g. exponentialMovingAverage
        #[arg(long)]
        indicator: Option<String>,

        /// Length parameter, overriding the configured one
        #[arg(short, long)]
        period: Option<usize>,

        /// Column name or index for the values (default: bars if present, else first column)
        #[arg(short, long)]
        column: Option<String>,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print indicator metadata
    Describe {
        /// Indicator configuration file (JSON, tagged by "type")
        #[arg(long, conflicts_with = "indicator")]
        config: Option<PathBuf>,

        /// Indicator kind; all kinds are listed when omitted
        #[arg(long)]
        indicator: Option<String>,

        /// Length parameter, overriding the configured one
        #[arg(short, long)]
        period: Option<usize>,
    },
}

/// Samples read from an input file.
enum Series {
    Scalars(Vec<Scalar>),
    Bars(Vec<Bar>),
}

impl Series {
    fn len(&self) -> usize {
        match self {
            Series::Scalars(s) => s.len(),
            Series::Bars(b) => b.len(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RunReport {
    metadata: Metadata,
    count: usize,
    /// Index of the first real output, if the indicator primed.
    primed_at: Option<usize>,
    values: Vec<Scalar>,
}

/// Load a series from a CSV file
fn load_csv_data(path: &Path, column: Option<&str>) -> CliResult<Series> {
    let file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    let headers = reader
        .headers()
        .map_err(|e| format!("Failed to read headers: {}", e))?
        .clone();
    let find = |name: &str| headers.iter().position(|h| h.trim().eq_ignore_ascii_case(name));
    let time_idx = find("time").or_else(|| find("timestamp"));

    let ohlc = match (column, find("open"), find("high"), find("low"), find("close")) {
        (None, Some(o), Some(h), Some(l), Some(c)) => Some((o, h, l, c, find("volume"))),
        _ => None,
    };

    let records: Vec<csv::StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .map_err(|e| format!("Failed to read record: {}", e))?;
    let number = |record: &csv::StringRecord, idx: usize| -> Option<f64> {
        record.get(idx).and_then(|v| v.trim().parse::<f64>().ok())
    };
    let time = |record: &csv::StringRecord, row: usize| -> i64 {
        time_idx
            .and_then(|idx| record.get(idx))
            .and_then(|v| v.trim().parse::<i64>().ok())
            .unwrap_or(row as i64)
    };

    if let Some((o, h, l, c, v)) = ohlc {
        let bars: Vec<Bar> = records
            .iter()
            .enumerate()
            .filter_map(|(row, r)| {
                Some(Bar::new(
                    time(r, row),
                    number(r, o)?,
                    number(r, h)?,
                    number(r, l)?,
                    number(r, c)?,
                    v.and_then(|v| number(r, v)).unwrap_or(0.0),
                ))
            })
            .collect();
        if bars.is_empty() {
            return Err("No complete bars found".to_string());
        }
        return Ok(Series::Bars(bars));
    }

    // Find the column index
    let col_idx = match column {
        // Try to parse as index first, then by name
        Some(col) => match col.parse::<usize>() {
            Ok(idx) => idx,
            Err(_) => find(col).ok_or_else(|| format!("Column '{}' not found", col))?,
        },
        None => 0,
    };

    let mut data = Vec::new();
    for (row, record) in records.iter().enumerate() {
        match record.get(col_idx).map(str::trim) {
            Some(value) if value.is_empty() || value.eq_ignore_ascii_case("nan") => {
                data.push(Scalar::new(time(record, row), f64::NAN));
            }
            Some(value) => match value.parse::<f64>() {
                Ok(num) => data.push(Scalar::new(time(record, row), num)),
                Err(_) => warn!(row, value, "skipping non-numeric value"),
            },
            None => {}
        }
    }

    if data.is_empty() {
        return Err("No numeric data found in the specified column".to_string());
    }

    Ok(Series::Scalars(data))
}

/// Load a series from a JSON file
fn load_json_data(path: &Path, column: Option<&str>) -> CliResult<Series> {
    let file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;
    let reader = BufReader::new(file);
    let json: serde_json::Value =
        serde_json::from_reader(reader).map_err(|e| format!("Failed to parse JSON: {}", e))?;

    let indexed = |values: Vec<f64>| -> Series {
        Series::Scalars(
            values
                .into_iter()
                .enumerate()
                .map(|(i, v)| Scalar::new(i as i64, v))
                .collect(),
        )
    };

    if let Some(arr) = json.as_array() {
        // Handle array of numbers; null marks a missing sample
        if arr.iter().all(|v| v.is_number() || v.is_null()) {
            return Ok(indexed(arr.iter().map(|v| v.as_f64().unwrap_or(f64::NAN)).collect()));
        }

        if column.is_none() {
            if let Ok(bars) = serde_json::from_value::<Vec<Bar>>(json.clone()) {
                return Ok(Series::Bars(bars));
            }
            if let Ok(scalars) = serde_json::from_value::<Vec<Scalar>>(json.clone()) {
                return Ok(Series::Scalars(scalars));
            }
        }

        // Handle array of objects
        let keys: Vec<&str> = match column {
            Some(col) => vec![col],
            None => vec!["value", "close", "price", "y"],
        };
        for key in keys {
            let data: Vec<Scalar> = arr
                .iter()
                .enumerate()
                .filter_map(|(i, obj)| {
                    let value = obj.get(key)?.as_f64()?;
                    let time = obj.get("time").and_then(|t| t.as_i64()).unwrap_or(i as i64);
                    Some(Scalar::new(time, value))
                })
                .collect();
            if !data.is_empty() {
                return Ok(Series::Scalars(data));
            }
        }
    }

    // Handle object with data array
    if let Some(obj) = json.as_object() {
        for key in &["data", "values", "series", "y"] {
            if let Some(arr) = obj.get(*key).and_then(|v| v.as_array()) {
                if !arr.is_empty() && arr.iter().all(|v| v.is_number() || v.is_null()) {
                    return Ok(indexed(arr.iter().map(|v| v.as_f64().unwrap_or(f64::NAN)).collect()));
                }
            }
        }
    }

    Err("Could not extract numeric data from JSON".to_string())
}

/// Load data from file (auto-detect format)
fn load_data(path: &Path, column: Option<&str>) -> CliResult<Series> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "csv" => load_csv_data(path, column),
        "json" => load_json_data(path, column),
        _ => {
            // Try CSV first, then JSON
            load_csv_data(path, column).or_else(|_| load_json_data(path, column))
        }
    }
}

/// Resolve the indicator configuration from a file or from flags.
fn resolve_config(
    config: Option<&Path>,
    indicator: Option<&str>,
    period: Option<usize>,
) -> CliResult<FilterConfig> {
    let resolved = match (config, indicator) {
        (Some(path), _) => {
            let file = File::open(path).map_err(|e| format!("Failed to open config: {}", e))?;
            serde_json::from_reader(BufReader::new(file))
                .map_err(|e| format!("Invalid indicator config: {}", e))?
        }
        (None, Some(kind)) => {
            let kind: IndicatorKind = kind.parse().map_err(|e| format!("{}", e))?;
            FilterConfig::default_for(kind)
        }
        (None, None) => return Err("Either --config or --indicator is required".to_string()),
    };

    Ok(match period {
        Some(period) => resolved.with_period(period),
        None => resolved,
    })
}

/// Write results to file or stdout
fn write_json<T: Serialize>(value: &T, output: Option<&Path>) -> CliResult<()> {
    if let Some(path) = output {
        let mut file = File::create(path).map_err(|e| format!("Failed to create output: {}", e))?;
        serde_json::to_writer_pretty(&mut file, value)
            .map_err(|e| format!("Failed to write JSON: {}", e))?;
        info!(path = %path.display(), "results written");
    } else {
        let json = serde_json::to_string_pretty(value)
            .map_err(|e| format!("Failed to encode JSON: {}", e))?;
        println!("{}", json);
    }

    Ok(())
}

/// Run command
fn run_indicator(
    input: PathBuf,
    config: Option<PathBuf>,
    indicator: Option<String>,
    period: Option<usize>,
    column: Option<String>,
    output: Option<PathBuf>,
) -> CliResult<()> {
    let config = resolve_config(config.as_deref(), indicator.as_deref(), period)?;
    let mut indicator = create_indicator(&config).map_err(|e| e.to_string())?;
    let metadata = indicator.metadata();

    let series = load_data(&input, column.as_deref())?;
    info!(
        samples = series.len(),
        file = ?input.file_name().unwrap_or_default(),
        indicator = %metadata.name(),
        "loaded series"
    );

    let values = match &series {
        Series::Scalars(samples) => indicator.update_scalars(samples),
        Series::Bars(bars) => {
            debug!(component = %indicator.components().bar, "reading bars");
            indicator.update_bars(bars)
        }
    };

    let primed_at = values.iter().position(|s| !s.value.is_nan());
    match primed_at {
        Some(index) => info!(index, "indicator primed"),
        None => warn!(samples = values.len(), "indicator never primed"),
    }

    let report = RunReport {
        metadata,
        count: values.len(),
        primed_at,
        values,
    };
    write_json(&report, output.as_deref())
}

/// Describe command
fn run_describe(
    config: Option<PathBuf>,
    indicator: Option<String>,
    period: Option<usize>,
) -> CliResult<()> {
    let configs: Vec<FilterConfig> = if config.is_none() && indicator.is_none() {
        IndicatorKind::ALL
            .iter()
            .map(|&kind| {
                let config = FilterConfig::default_for(kind);
                match period {
                    Some(period) => config.with_period(period),
                    None => config,
                }
            })
            .collect()
    } else {
        vec![resolve_config(config.as_deref(), indicator.as_deref(), period)?]
    };

    let described = configs
        .iter()
        .map(|config| {
            create_indicator(config)
                .map(|indicator| indicator.metadata())
                .map_err(|e| format!("{}: {}", config.kind(), e))
        })
        .collect::<CliResult<Vec<Metadata>>>()?;

    write_json(&described, None)
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            input,
            config,
            indicator,
            period,
            column,
            output,
        } => run_indicator(input, config, indicator, period, column, output),

        Commands::Describe {
            config,
            indicator,
            period,
        } => run_describe(config, indicator, period),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
