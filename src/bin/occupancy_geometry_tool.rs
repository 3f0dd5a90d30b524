use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset, Local, TimeZone};
use site_analytics::api::DashboardConfig;
use site_analytics::core::{TimeAxisMode, project_occupancy};
use site_analytics::payload::OccupancyPayload;
use site_analytics::telemetry::init_default_tracing;

const USAGE: &str = "usage: occupancy_geometry_tool --input <payload.json> [--output <chart.json>] \
[--config <config.json>] [--now <epoch-millis>] [--utc-offset-minutes <n>] [--mode fixed-day|ordinal]";

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
    now_ms: Option<i64>,
    utc_offset_minutes: Option<i32>,
    mode: Option<TimeAxisMode>,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let mut config = match &args.config {
        Some(path) => DashboardConfig::from_json_str(&read(path)?).map_err(|e| e.to_string())?,
        None => DashboardConfig::default(),
    };
    if let Some(mode) = args.mode {
        config = config.with_occupancy_mode(mode);
    }

    let payload = OccupancyPayload::from_json_str(&read(&args.input)?).map_err(|e| e.to_string())?;
    let now = resolve_now(args.now_ms, args.utc_offset_minutes)?;
    let live = payload.live_occupancy(now.timestamp_millis());

    let chart = project_occupancy(payload.buckets(), live as f64, &now, &config.occupancy_chart)
        .ok_or_else(|| "payload has no bucket with a usable timestamp".to_owned())?;
    let json = serde_json::to_string_pretty(&chart)
        .map_err(|err| format!("failed to serialize chart: {err}"))?;

    match &args.output {
        Some(path) => fs::write(path, json)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}

fn read(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|err| format!("failed to read `{}`: {err}", path.display()))
}

fn resolve_now(
    now_ms: Option<i64>,
    utc_offset_minutes: Option<i32>,
) -> Result<DateTime<FixedOffset>, String> {
    let offset = match utc_offset_minutes {
        Some(minutes) => FixedOffset::east_opt(minutes.saturating_mul(60))
            .ok_or_else(|| format!("utc offset of {minutes} minutes is out of range"))?,
        None => *Local::now().offset(),
    };
    match now_ms {
        Some(millis) => offset
            .timestamp_millis_opt(millis)
            .single()
            .ok_or_else(|| format!("timestamp {millis} is out of range")),
        None => Ok(Local::now().with_timezone(&offset)),
    }
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;
    let mut config = None::<PathBuf>;
    let mut now_ms = None::<i64>;
    let mut utc_offset_minutes = None::<i32>;
    let mut mode = None::<TimeAxisMode>;

    while let Some(flag) = args.next() {
        let mut value = |name: &str| {
            args.next()
                .ok_or_else(|| format!("missing value for {name}"))
        };
        match flag.as_str() {
            "--input" => input = Some(PathBuf::from(value("--input")?)),
            "--output" => output = Some(PathBuf::from(value("--output")?)),
            "--config" => config = Some(PathBuf::from(value("--config")?)),
            "--now" => {
                let raw = value("--now")?;
                now_ms = Some(
                    raw.parse()
                        .map_err(|_| format!("invalid --now value `{raw}`"))?,
                );
            }
            "--utc-offset-minutes" => {
                let raw = value("--utc-offset-minutes")?;
                utc_offset_minutes = Some(
                    raw.parse()
                        .map_err(|_| format!("invalid --utc-offset-minutes value `{raw}`"))?,
                );
            }
            "--mode" => {
                mode = Some(match value("--mode")?.as_str() {
                    "fixed-day" => TimeAxisMode::FixedDay,
                    "ordinal" => TimeAxisMode::Ordinal,
                    other => return Err(format!("unsupported mode `{other}`")),
                });
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`")),
        }
    }

    let input = input.ok_or_else(|| USAGE.to_owned())?;
    Ok(CliArgs {
        input,
        output,
        config,
        now_ms,
        utc_offset_minutes,
        mode,
    })
}
