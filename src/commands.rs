use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use shiftcal::config::{CalendarConfig, Config};
use shiftcal::render::{events as event_csv, sheet, text};
use shiftcal::request::{ScheduleRequest, default_year};
use shiftcal::{CalendarSession, build_schedule, roster};
use tracing::info;

use crate::cli::{BatchArgs, DisplayArgs, RenderArgs, ScheduleArgs};

const CODE_HINT: &str = "근무코드는 정확한 날짜 수에 맞게 D/N/E/X/P 로 입력해주세요.";

fn calendar_config(config: &Config, display: &DisplayArgs) -> CalendarConfig {
    CalendarConfig {
        week_start: display.week_start.unwrap_or(config.calendar.week_start),
        language: display.language.unwrap_or(config.calendar.language),
    }
}

fn to_request(args: ScheduleArgs) -> Result<ScheduleRequest> {
    let year = args.year.unwrap_or_else(default_year);
    Ok(ScheduleRequest::new(args.name, year, args.month, args.code)?)
}

/// `--output`, else `[output] path` from the config, else nothing.
fn render_output(flag: Option<PathBuf>, config: &Config) -> Option<PathBuf> {
    flag.or_else(|| config.output.path.clone())
}

/// Like [`render_output`], falling back to the roster path with `.xlsx`.
fn batch_output(input: &Path, flag: Option<PathBuf>, config: &Config) -> PathBuf {
    render_output(flag, config).unwrap_or_else(|| {
        let mut out: PathBuf = input.into();
        out.set_extension("xlsx");
        out
    })
}

pub fn render(args: RenderArgs, config: &Config) -> Result<()> {
    let cfg = calendar_config(config, &args.display);
    let output = render_output(args.output, config);
    let request = to_request(args.schedule)?;

    let mut session = CalendarSession::new();
    session.submit(request);
    if let Some(message) = session.error_message() {
        bail!("{message}\n{CODE_HINT}");
    }
    let (Some(heading), Some(request)) = (session.heading(cfg.language), session.request())
    else {
        eprintln!("{CODE_HINT}");
        return Ok(());
    };

    println!("{heading}");
    println!();
    print!("{}", text::render_month(request.first_day(), session.events(), &cfg));
    if let Some(path) = output {
        let schedule = [(request.clone(), session.events().to_vec())];
        sheet::write_workbook(&path, &schedule, &cfg)?;
        println!("달력 파일 생성: {}", path.display());
    }
    Ok(())
}

pub fn events(args: ScheduleArgs) -> Result<()> {
    let request = to_request(args)?;
    let schedule = build_schedule(&request)?;
    event_csv::write_events(io::stdout().lock(), &schedule)
}

pub fn batch(args: BatchArgs, config: &Config) -> Result<()> {
    let cfg = calendar_config(config, &args.display);
    let output = batch_output(&args.input, args.output, config);
    let records = roster::load_roster(&args.input)?;
    info!(rows = records.len(), "roster loaded");

    let outcome = roster::build_all(&records);
    for skipped in &outcome.skipped {
        eprintln!("{}행 건너뜀: {}", skipped.row, skipped.reason);
    }
    if outcome.calendars.is_empty() {
        bail!("no valid rows in {}", args.input.display());
    }

    sheet::write_workbook(&output, &outcome.calendars, &cfg)
        .with_context(|| format!("failed to write {}", output.display()))?;
    println!(
        "근무표 {}건 생성: {}",
        outcome.calendars.len(),
        output.display()
    );
    Ok(())
}

pub fn init(filename: &str) -> Result<()> {
    let path = roster::init_roster(filename)?;
    println!("CSV 파일 생성: {}", path.display());
    Ok(())
}
