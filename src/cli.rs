use std::path::PathBuf;

use clap::{Parser, Subcommand};
use shiftcal::config::{Language, WeekStart};
use shiftcal::request::{DEFAULT_MONTH, parse_month, parse_year};

const CODE_HELP: &str = "\
근무코드 예시 (2024년 7월, 31일):
  DDNEXXPPDDNEXXPPDDNEXXPPDDNEXXP

  D = Day 근무
  N = Night 근무
  E = Evening 근무
  X = 비번 (Off)
  P = 교육";

#[derive(Parser, Debug)]
#[command(
    name = "shiftcal",
    author,
    version,
    about = "근무표 달력 생성기",
    after_help = CODE_HELP
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// TOML config file [default: shiftcal.toml if present].
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a code string and draw the month calendar.
    Render(RenderArgs),
    /// Print the day events as CSV (date,title,color).
    Events(ScheduleArgs),
    /// Draw one calendar per row of a roster CSV into a workbook.
    Batch(BatchArgs),
    /// Create an empty roster CSV.
    Init {
        /// File name; `.csv` is appended when missing.
        filename: String,
    },
}

#[derive(clap::Args, Debug)]
pub struct ScheduleArgs {
    /// 이름 (display only).
    #[arg(short, long, default_value = "")]
    pub name: String,

    /// 년도 (2020-2100, or 2024년) [default: current year].
    #[arg(short, long, value_parser = parse_year)]
    pub year: Option<i32>,

    /// 월: 1-12 or 1월-12월.
    #[arg(short, long, value_parser = parse_month, default_value_t = DEFAULT_MONTH)]
    pub month: u32,

    /// 근무코드, one character per day (D/N/E/X/P).
    #[arg(long)]
    pub code: String,
}

#[derive(clap::Args, Debug)]
pub struct DisplayArgs {
    /// First column of each week [default: from config, else sunday].
    #[arg(long, value_enum)]
    pub week_start: Option<WeekStart>,

    /// Language of headings and legend [default: from config, else ko].
    #[arg(long, value_enum)]
    pub language: Option<Language>,
}

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub schedule: ScheduleArgs,

    #[command(flatten)]
    pub display: DisplayArgs,

    /// Also write the calendar to this .xlsx file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct BatchArgs {
    /// Roster CSV with columns 이름,년도,월,근무코드.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Workbook path [default: input with .xlsx extension].
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub display: DisplayArgs,
}
