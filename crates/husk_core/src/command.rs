use std::fmt;

use serde::Serialize;

use crate::{expand_frame_token, JobConfig};

/// One command line entry: the scene path, a bare flag, or a flag with its value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Argument {
    Positional { value: String },
    Flag { name: String },
    Valued { name: String, value: String },
}

impl Argument {
    fn flag(name: &str) -> Self {
        Argument::Flag {
            name: name.to_string(),
        }
    }

    fn option(name: &str, value: impl Into<String>) -> Self {
        Argument::Valued {
            name: name.to_string(),
            value: value.into(),
        }
    }

    /// Flag name without dashes, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            Argument::Positional { .. } => None,
            Argument::Flag { name } | Argument::Valued { name, .. } => Some(name.as_str()),
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Positional { value } => f.write_str(value),
            Argument::Flag { name } => write!(f, "--{name}"),
            Argument::Valued { name, value } => write!(f, "--{name} {value}"),
        }
    }
}

/// Ordered husk arguments, scene path first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandLine {
    arguments: Vec<Argument>,
}

impl CommandLine {
    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    pub fn scene_path(&self) -> &str {
        match self.arguments.first() {
            Some(Argument::Positional { value }) => value,
            _ => "",
        }
    }

    pub fn get(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|arg| arg.name() == Some(name))
    }

    pub fn has_flag(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Value of `--name <value>`, if present.
    pub fn value_of(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(Argument::Valued { value, .. }) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Separate process arguments; values are never split on spaces.
    pub fn to_argv(&self) -> Vec<String> {
        let mut argv = Vec::with_capacity(self.arguments.len() * 2);
        for arg in &self.arguments {
            match arg {
                Argument::Positional { value } => argv.push(value.clone()),
                Argument::Flag { name } => argv.push(format!("--{name}")),
                Argument::Valued { name, value } => {
                    argv.push(format!("--{name}"));
                    argv.push(value.clone());
                }
            }
        }
        argv
    }
}

/// Single-space joined, as the farm's command tokenizer expects it.
impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, arg) in self.arguments.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{arg}")?;
        }
        Ok(())
    }
}

/// Build the husk arguments for one task.
///
/// The order is fixed: scene, frame range, verbosity, overrides, license
/// listing, delegate restart, output path creation and the version-gated
/// raster product flag.
pub fn build_command(config: &JobConfig) -> CommandLine {
    // husk does not expand $F in its input filename itself
    let scene = expand_frame_token(&config.scene_file().replace('\\', "/"), config.start_frame());

    let mut arguments = vec![
        Argument::Positional { value: scene },
        Argument::option("frame", config.start_frame().to_string()),
        Argument::option("frame-count", config.frame_count().to_string()),
        Argument::option("verbose", format!("a{}", config.log_level().unwrap_or_default())),
    ];

    for (item, value) in config.overrides() {
        arguments.push(Argument::option(item.flag(), value));
    }

    if config.list_license_checks() {
        arguments.push(Argument::flag("list-license-checks"));
    }

    // Some delegates (e.g. Arnold) do not refresh per frame otherwise.
    arguments.push(Argument::option("restart-delegate", "1"));
    arguments.push(Argument::flag("make-output-path"));

    // Works around wrong output color spaces on Houdini 20+.
    if config.supports_dummy_raster_product_flag() {
        arguments.push(Argument::flag("disable-dummy-raster-product"));
    }

    CommandLine { arguments }
}
