//! CLI definition and dispatch.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::domain::aggregator::{analyze, Analysis};
use crate::domain::engine_config::EngineConfig;
use crate::domain::error::SignalError;
use crate::domain::indicator::{IndicatorType, DEFAULT_RSI_PERIOD};
use crate::domain::ohlcv::OhlcvBar;
use crate::domain::price_series::PriceSeries;
use crate::domain::universe::parse_codes;
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::DataPort;

#[derive(Parser, Debug)]
#[command(name = "sigtrader", about = "Multi-indicator trading signal engine")]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute strategy signals and the combined decision
    Signal {
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(short, long)]
        data_dir: Option<PathBuf>,
        #[arg(long)]
        codes: Option<String>,
        #[arg(long)]
        exchange: Option<String>,
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
    },
    /// Print SMA, EMA and RSI for one symbol
    Indicators {
        #[arg(short, long)]
        data_dir: PathBuf,
        #[arg(long)]
        code: String,
        #[arg(long)]
        exchange: String,
        #[arg(
            short,
            long,
            default_value_t = DEFAULT_RSI_PERIOD as u64,
            value_parser = clap::value_parser!(u64).range(1..)
        )]
        period: u64,
    },
    /// List available symbols on an exchange
    ListSymbols {
        #[arg(short, long)]
        data_dir: PathBuf,
        #[arg(long)]
        exchange: String,
    },
    /// Validate an engine configuration
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    let result = match cli.command {
        Command::Signal {
            config,
            data_dir,
            codes,
            exchange,
            start,
            end,
        } => run_signal(SignalArgs {
            config,
            data_dir,
            codes,
            exchange,
            start,
            end,
        }),
        Command::Indicators {
            data_dir,
            code,
            exchange,
            period,
        } => run_indicators(&data_dir, &code, &exchange, period as usize),
        Command::ListSymbols { data_dir, exchange } => run_list_symbols(&data_dir, &exchange),
        Command::Validate { config } => run_validate(&config),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e}");
            (&e).into()
        }
    }
}

/// Arguments of the `signal` command.
#[derive(Debug, Default)]
pub struct SignalArgs {
    pub config: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
    pub codes: Option<String>,
    pub exchange: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

pub fn load_config(path: &Path) -> Result<FileConfigAdapter, SignalError> {
    tracing::info!("Loading config from {}", path.display());
    FileConfigAdapter::from_file(path)
}

fn run_signal(args: SignalArgs) -> Result<ExitCode, SignalError> {
    let adapter = args.config.as_deref().map(load_config).transpose()?;
    let config: Option<&dyn ConfigPort> = adapter.as_ref().map(|a| a as &dyn ConfigPort);

    let engine = match config {
        Some(c) => EngineConfig::from_config(c)?,
        None => EngineConfig::default(),
    };

    let data_dir = args
        .data_dir
        .or_else(|| config.and_then(|c| c.get_string("data", "dir")).map(PathBuf::from))
        .ok_or_else(|| SignalError::ConfigMissing {
            section: "data".into(),
            key: "dir".into(),
        })?;
    let exchange = args
        .exchange
        .or_else(|| config.and_then(|c| c.get_string("data", "exchange")))
        .ok_or_else(|| SignalError::ConfigMissing {
            section: "data".into(),
            key: "exchange".into(),
        })?;
    let codes = resolve_codes(args.codes.as_deref(), config)?;
    let start = parse_date_arg(args.start.as_deref(), "start")?.unwrap_or(NaiveDate::MIN);
    let end = parse_date_arg(args.end.as_deref(), "end")?.unwrap_or(NaiveDate::MAX);

    let data_port = CsvAdapter::new(data_dir);
    let stdout = io::stdout();
    run_signal_pipeline(
        &data_port,
        &engine,
        &codes,
        &exchange,
        start,
        end,
        &mut stdout.lock(),
    )
}

/// `--codes` wins over `[data] codes`, which wins over `[data] code`.
pub fn resolve_codes(
    code_override: Option<&str>,
    config: Option<&dyn ConfigPort>,
) -> Result<Vec<String>, SignalError> {
    let raw = code_override.map(str::to_string).or_else(|| {
        config.and_then(|c| {
            c.get_string("data", "codes")
                .or_else(|| c.get_string("data", "code"))
        })
    });
    match raw {
        Some(list) => Ok(parse_codes(&list)?),
        None => Err(SignalError::ConfigMissing {
            section: "data".into(),
            key: "codes".into(),
        }),
    }
}

pub fn parse_date_arg(value: Option<&str>, name: &str) -> Result<Option<NaiveDate>, SignalError> {
    value
        .map(|s| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
                SignalError::invalid("data", name, "invalid date format (expected YYYY-MM-DD)")
            })
        })
        .transpose()
}

/// Fetch, analyze and print every code. Codes that fail to load or have no
/// bars are skipped. When none remain, the last load error is returned, or
/// [`SignalError::NoData`] if every code was simply empty.
pub fn run_signal_pipeline(
    data_port: &dyn DataPort,
    engine: &EngineConfig,
    codes: &[String],
    exchange: &str,
    start: NaiveDate,
    end: NaiveDate,
    out: &mut dyn Write,
) -> Result<ExitCode, SignalError> {
    let required = engine.required_history();
    let mut analyzed = 0usize;
    let mut last_missing = None;
    let mut last_error = None;

    for code in codes {
        let bars = match data_port.fetch_ohlcv(code, exchange, start, end) {
            Ok(bars) if !bars.is_empty() => bars,
            Ok(_) => {
                tracing::warn!("skipping {code}: no data on {exchange}");
                last_missing = Some(code.clone());
                continue;
            }
            Err(e) => {
                tracing::warn!("skipping {code} ({e})");
                last_error = Some(e);
                continue;
            }
        };

        if bars.len() < required {
            tracing::warn!(
                "{code}: {} bars, strategies need {required}; signals will degrade to HOLD",
                bars.len()
            );
        }

        let series = PriceSeries::from_bars(&bars);
        let analysis = analyze(&series, engine);
        tracing::info!(
            code = %code,
            action = %analysis.decision.action,
            "analysis complete"
        );
        out.write_all(format_analysis(code, &bars, &analysis).as_bytes())?;
        analyzed += 1;
    }

    if analyzed == 0 {
        if let Some(err) = last_error {
            return Err(err);
        }
        return Err(SignalError::NoData {
            code: last_missing.unwrap_or_default(),
            exchange: exchange.to_string(),
        });
    }
    Ok(ExitCode::SUCCESS)
}

/// Human-readable report of one code's analysis.
pub fn format_analysis(code: &str, bars: &[OhlcvBar], analysis: &Analysis) -> String {
    let mut s = String::new();
    let _ = write!(s, "=== {} ===", code);
    if let Some(last) = bars.last() {
        let _ = write!(
            s,
            " {} close {:.2} ({:+.2}%)",
            last.date,
            last.close,
            last.change_pct()
        );
    }
    s.push('\n');

    for (kind, signal) in &analysis.signals {
        let _ = writeln!(
            s,
            "  {:<16} {:<4}  strength {:>6.2}  confidence {:.2}  {}",
            kind.to_string(),
            signal.action.to_string(),
            signal.strength,
            signal.confidence,
            signal.reason
        );
    }

    let d = &analysis.decision;
    let _ = writeln!(
        s,
        "  {:<16} {:<4}  strength {:>6.2}  confidence {:.2}  {}",
        "Decision",
        d.action.to_string(),
        d.strength,
        d.confidence,
        d.reason
    );
    s
}

fn run_indicators(
    data_dir: &Path,
    code: &str,
    exchange: &str,
    period: usize,
) -> Result<ExitCode, SignalError> {
    let data_port = CsvAdapter::new(data_dir.to_path_buf());
    let bars = data_port.fetch_ohlcv(code, exchange, NaiveDate::MIN, NaiveDate::MAX)?;
    if bars.is_empty() {
        return Err(SignalError::NoData {
            code: code.to_string(),
            exchange: exchange.to_string(),
        });
    }

    let series = PriceSeries::from_bars(&bars);
    println!("{}", format_indicators(&series, period));
    Ok(ExitCode::SUCCESS)
}

/// One line per indicator; undefined values print as `n/a`.
pub fn format_indicators(series: &PriceSeries, period: usize) -> String {
    [
        IndicatorType::Sma(period),
        IndicatorType::Ema(period),
        IndicatorType::Rsi(period),
    ]
    .iter()
    .map(|indicator| {
        if series.len() < indicator.min_len() {
            format!("{}: n/a", indicator)
        } else {
            format!("{}: {:.4}", indicator, indicator.compute(series))
        }
    })
    .collect::<Vec<_>>()
    .join("\n")
}

fn run_list_symbols(data_dir: &Path, exchange: &str) -> Result<ExitCode, SignalError> {
    let data_port = CsvAdapter::new(data_dir.to_path_buf());
    for symbol in data_port.list_symbols(exchange)? {
        println!("{}", symbol);
    }
    Ok(ExitCode::SUCCESS)
}

fn run_validate(config_path: &Path) -> Result<ExitCode, SignalError> {
    let adapter = load_config(config_path)?;
    let engine = EngineConfig::from_config(&adapter)?;
    let names: Vec<String> = engine.enabled.iter().map(|k| k.to_string()).collect();
    println!("Configuration OK");
    println!("  Strategies: {}", names.join(", "));
    println!("  Min score:  {}", engine.min_score);
    println!("  History:    {} bars", engine.required_history());
    Ok(ExitCode::SUCCESS)
}
