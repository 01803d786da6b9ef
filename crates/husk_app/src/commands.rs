use std::fs;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use anyhow::{bail, Context};
use engine_logging::{engine_info, engine_warn};
use husk_core::{
    classify_line, plan_tasks, HuskAdapter, JobConfig, LogEvent, PluginInfo, RenderAdapter,
};
use husk_engine::{Engine, RunnerSettings};
use serde::Serialize;

use crate::cli::{ArgsArgs, ClassifyArgs, Command, JobArgs, PlanArgs, RenderArgs};
use crate::console::ConsoleSink;

pub fn run(cmd: Command) -> anyhow::Result<()> {
    match cmd {
        Command::Args(args) => print_args(args),
        Command::Classify(args) => classify_log(args),
        Command::Plan(args) => print_plan(args),
        Command::Render(args) => render(args),
    }
}

fn load_plugin_info(path: &Path) -> anyhow::Result<PluginInfo> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read plugin info '{}'", path.display()))?;
    PluginInfo::parse(&text).with_context(|| format!("parse plugin info '{}'", path.display()))
}

fn load_settings(path: Option<&Path>) -> anyhow::Result<RunnerSettings> {
    match path {
        Some(path) => Ok(RunnerSettings::load(path)?),
        None => Ok(RunnerSettings::default()),
    }
}

fn load_job(job: &JobArgs) -> anyhow::Result<(PluginInfo, JobConfig)> {
    let info = load_plugin_info(&job.plugin_info)?;
    let config = JobConfig::from_plugin_info(&info, job.start, job.end)
        .with_context(|| format!("plugin info '{}'", job.plugin_info.display()))?;
    Ok((info, config))
}

#[derive(Serialize)]
struct ArgsReport<'a> {
    executable_key: String,
    executable: Option<String>,
    single_frame_only: bool,
    command_line: String,
    argv: Vec<String>,
    arguments: &'a [husk_core::Argument],
}

fn print_args(args: ArgsArgs) -> anyhow::Result<()> {
    let (_, config) = load_job(&args.job)?;

    let (adapter, executable) = match args.settings.as_deref() {
        Some(path) => {
            let engine = Engine::new(load_settings(Some(path))?);
            let adapter = engine.prepare(config)?;
            let executable = match engine.executable_for(&adapter) {
                Ok(found) => Some(found.display().to_string()),
                Err(err) => {
                    engine_warn!("{err}");
                    None
                }
            };
            (adapter, executable)
        }
        None => (HuskAdapter::new(config), None),
    };

    let command = adapter.build_command();
    let report = ArgsReport {
        executable_key: adapter.executable_key(),
        executable,
        single_frame_only: adapter.is_single_frame_only(),
        command_line: command.to_string(),
        argv: command.to_argv(),
        arguments: command.arguments(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("executable key: {}", report.executable_key);
        if let Some(executable) = &report.executable {
            println!("executable: {executable}");
        }
        println!("single frame only: {}", report.single_frame_only);
        println!("{}", report.command_line);
    }
    Ok(())
}

#[derive(Serialize)]
struct ClassifiedLine<'a> {
    line: usize,
    text: &'a str,
    matched: &'a str,
    #[serde(flatten)]
    event: &'a LogEvent,
}

fn classify_log(args: ClassifyArgs) -> anyhow::Result<()> {
    let reader: Box<dyn Read> = match &args.input {
        Some(path) => Box::new(
            fs::File::open(path).with_context(|| format!("open log '{}'", path.display()))?,
        ),
        None => Box::new(io::stdin()),
    };

    let mut matches = 0usize;
    for (index, line) in BufReader::new(reader).lines().enumerate() {
        let line = line.context("read log line")?;
        let text = line.trim_end_matches('\r');
        let classified = classify_line(text);
        if classified.event == LogEvent::NoMatch {
            continue;
        }
        matches += 1;
        let line_number = index + 1;

        if args.json {
            let record = ClassifiedLine {
                line: line_number,
                text,
                matched: classified.matched,
                event: &classified.event,
            };
            println!("{}", serde_json::to_string(&record)?);
            continue;
        }
        match &classified.event {
            LogEvent::Progress { percent } => {
                println!("{line_number}: progress {percent:.0}% ({})", classified.matched)
            }
            LogEvent::Error { message } => println!("{line_number}: error {message}"),
            LogEvent::NoMatch => {}
        }
    }
    engine_info!("{matches} classified line(s)");
    Ok(())
}

fn print_plan(args: PlanArgs) -> anyhow::Result<()> {
    let (_, config) = load_job(&args.job)?;
    let single_frame = HuskAdapter::new(config).is_single_frame_only();
    let tasks = plan_tasks(args.job.start, args.job.end, args.chunk_size, single_frame)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }
    if single_frame {
        println!("scene path contains $F; one frame per task");
    }
    for task in &tasks {
        println!("{}-{} ({} frame(s))", task.start, task.end, task.len());
    }
    Ok(())
}

fn render(args: RenderArgs) -> anyhow::Result<()> {
    let (info, _) = load_job(&args.job)?;
    let mut engine = Engine::new(load_settings(args.settings.as_deref())?);
    if let Some(executable) = &args.executable {
        engine = engine.with_executable(executable);
    }

    let sink = ConsoleSink::new(args.json);
    let report = engine.render_job(&info, args.job.start, args.job.end, args.chunk_size, &sink)?;

    if let Some(failed) = report.first_failure() {
        bail!(
            "task {}-{} failed: {}",
            failed.frames.start,
            failed.frames.end,
            failed.outcome.failure().unwrap_or("unknown error")
        );
    }
    engine_info!(
        "Rendered {} task(s) for frames {}-{}",
        report.tasks.len(),
        args.job.start,
        args.job.end
    );
    Ok(())
}
