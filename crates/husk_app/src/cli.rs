use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "husk-farm", version, about = "Run husk USD renders for a render farm task")]
pub struct Cli {
    /// Log level (off, error, warn, info, debug, trace).
    #[arg(long, global = true, default_value = "info", value_parser = parse_level)]
    pub log_level: LevelFilter,

    /// Also write the log to this file.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the husk command line for a task.
    Args(ArgsArgs),
    /// Classify renderer output lines from a file or stdin.
    Classify(ClassifyArgs),
    /// Print how the job's frames split into tasks.
    Plan(PlanArgs),
    /// Render the job's tasks with husk.
    Render(RenderArgs),
}

#[derive(Args, Debug)]
pub struct JobArgs {
    /// Plugin info file (`Key=Value` lines).
    #[arg(long)]
    pub plugin_info: PathBuf,

    /// First frame of the task.
    #[arg(long, allow_hyphen_values = true)]
    pub start: i64,

    /// Last frame of the task (inclusive).
    #[arg(long, allow_hyphen_values = true)]
    pub end: i64,
}

#[derive(Args, Debug)]
pub struct ArgsArgs {
    #[command(flatten)]
    pub job: JobArgs,

    /// Worker settings (RON); enables path mapping and executable lookup.
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Print JSON instead of text.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Log file to read; stdin when omitted.
    pub input: Option<PathBuf>,

    /// Print JSON lines instead of text.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct PlanArgs {
    #[command(flatten)]
    pub job: JobArgs,

    /// Frames per task.
    #[arg(long, default_value_t = 1)]
    pub chunk_size: u32,

    /// Print JSON instead of text.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub job: JobArgs,

    /// Worker settings (RON).
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Run this executable instead of looking one up in the settings.
    #[arg(long)]
    pub executable: Option<PathBuf>,

    /// Frames per task.
    #[arg(long, default_value_t = 1)]
    pub chunk_size: u32,

    /// Print engine events as JSON lines.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

fn parse_level(s: &str) -> Result<LevelFilter, String> {
    s.parse().map_err(|_| format!("unknown log level '{s}'"))
}
