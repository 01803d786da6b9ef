use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::frame_token::check_frame_padding;
use crate::plugin_info::keys;
use crate::{ConfigError, PluginInfo};

/// First Houdini major release whose husk accepts `--disable-dummy-raster-product`.
pub const DUMMY_RASTER_PRODUCT_MIN_MAJOR: u32 = 20;

/// Houdini version as submitted ("major.minor"); only the major is compared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HoudiniVersion {
    raw: String,
    major: u32,
}

impl HoudiniVersion {
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn major(&self) -> u32 {
        self.major
    }
}

impl FromStr for HoudiniVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let major_part = raw.split('.').next().unwrap_or_default().trim();
        let major = major_part
            .parse::<u32>()
            .map_err(|_| ConfigError::InvalidVersion(s.to_string()))?;
        Ok(Self {
            raw: raw.to_string(),
            major,
        })
    }
}

impl fmt::Display for HoudiniVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Optional husk overrides, declared in the order their flags are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum RenderOverride {
    Renderer,
    RenderSettings,
    Purpose,
    Complexity,
    Snapshot,
    PreRender,
    PreFrame,
    PostFrame,
    PostRender,
}

impl RenderOverride {
    pub const ALL: [RenderOverride; 9] = [
        RenderOverride::Renderer,
        RenderOverride::RenderSettings,
        RenderOverride::Purpose,
        RenderOverride::Complexity,
        RenderOverride::Snapshot,
        RenderOverride::PreRender,
        RenderOverride::PreFrame,
        RenderOverride::PostFrame,
        RenderOverride::PostRender,
    ];

    pub fn plugin_key(self) -> &'static str {
        match self {
            RenderOverride::Renderer => keys::RENDERER,
            RenderOverride::RenderSettings => keys::RENDER_SETTINGS,
            RenderOverride::Purpose => keys::PURPOSE,
            RenderOverride::Complexity => keys::COMPLEXITY,
            RenderOverride::Snapshot => keys::SNAPSHOT,
            RenderOverride::PreRender => keys::PRE_RENDER,
            RenderOverride::PreFrame => keys::PRE_FRAME,
            RenderOverride::PostFrame => keys::POST_FRAME,
            RenderOverride::PostRender => keys::POST_RENDER,
        }
    }

    /// husk flag name, without the leading dashes.
    pub fn flag(self) -> &'static str {
        match self {
            RenderOverride::Renderer => "renderer",
            RenderOverride::RenderSettings => "settings",
            RenderOverride::Purpose => "purpose",
            RenderOverride::Complexity => "complexity",
            RenderOverride::Snapshot => "snapshot",
            RenderOverride::PreRender => "prerender-script",
            RenderOverride::PreFrame => "preframe-script",
            RenderOverride::PostFrame => "postframe-script",
            RenderOverride::PostRender => "postrender-script",
        }
    }
}

/// One render task's configuration. Validated on construction, read-only after.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobConfig {
    scene_file: String,
    start_frame: i64,
    end_frame: i64,
    log_level: Option<String>,
    overrides: BTreeMap<RenderOverride, String>,
    list_license_checks: bool,
    version: Option<HoudiniVersion>,
}

impl JobConfig {
    pub fn new(
        scene_file: impl Into<String>,
        start_frame: i64,
        end_frame: i64,
    ) -> Result<Self, ConfigError> {
        let scene_file = scene_file.into();
        if scene_file.is_empty() {
            return Err(ConfigError::EmptySceneFile);
        }
        check_frame_padding(&scene_file)?;
        check_range(start_frame, end_frame)?;
        Ok(Self {
            scene_file,
            start_frame,
            end_frame,
            log_level: None,
            overrides: BTreeMap::new(),
            list_license_checks: true,
            version: None,
        })
    }

    /// Build from plugin info entries plus the task's frame range.
    pub fn from_plugin_info(
        info: &PluginInfo,
        start_frame: i64,
        end_frame: i64,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::new(info.require(keys::SCENE_FILE)?, start_frame, end_frame)?;
        if let Some(version) = info.non_empty(keys::VERSION) {
            config.version = Some(version.parse()?);
        }
        config.log_level = info.non_empty(keys::LOG_LEVEL).map(str::to_string);
        for item in RenderOverride::ALL {
            if let Some(value) = info.non_empty(item.plugin_key()) {
                config.overrides.insert(item, value.to_string());
            }
        }
        config.list_license_checks = info.bool_or(keys::LIST_LICENSE_CHECKS, true)?;
        Ok(config)
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        let level = level.into();
        self.log_level = (!level.is_empty()).then_some(level);
        self
    }

    /// Set an override; an empty value clears it.
    pub fn with_override(mut self, item: RenderOverride, value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            self.overrides.remove(&item);
        } else {
            self.overrides.insert(item, value);
        }
        self
    }

    pub fn with_list_license_checks(mut self, enabled: bool) -> Self {
        self.list_license_checks = enabled;
        self
    }

    pub fn with_version(mut self, version: &str) -> Result<Self, ConfigError> {
        self.version = Some(version.parse()?);
        Ok(self)
    }

    /// Same job, different scene path (e.g. after path mapping).
    pub fn with_scene_file(mut self, scene_file: impl Into<String>) -> Result<Self, ConfigError> {
        let scene_file = scene_file.into();
        if scene_file.is_empty() {
            return Err(ConfigError::EmptySceneFile);
        }
        check_frame_padding(&scene_file)?;
        self.scene_file = scene_file;
        Ok(self)
    }

    /// Same job, narrowed to one task's frames.
    pub fn with_frame_range(
        mut self,
        start_frame: i64,
        end_frame: i64,
    ) -> Result<Self, ConfigError> {
        check_range(start_frame, end_frame)?;
        self.start_frame = start_frame;
        self.end_frame = end_frame;
        Ok(self)
    }

    pub fn scene_file(&self) -> &str {
        &self.scene_file
    }

    pub fn start_frame(&self) -> i64 {
        self.start_frame
    }

    pub fn end_frame(&self) -> i64 {
        self.end_frame
    }

    /// Always at least 1.
    pub fn frame_count(&self) -> i64 {
        self.end_frame - self.start_frame + 1
    }

    pub fn log_level(&self) -> Option<&str> {
        self.log_level.as_deref()
    }

    pub fn override_value(&self, item: RenderOverride) -> Option<&str> {
        self.overrides.get(&item).map(String::as_str)
    }

    /// Set overrides in flag order.
    pub fn overrides(&self) -> impl Iterator<Item = (RenderOverride, &str)> {
        self.overrides.iter().map(|(item, value)| (*item, value.as_str()))
    }

    pub fn list_license_checks(&self) -> bool {
        self.list_license_checks
    }

    pub fn version(&self) -> Option<&HoudiniVersion> {
        self.version.as_ref()
    }

    /// No version means the latest Houdini.
    pub fn supports_dummy_raster_product_flag(&self) -> bool {
        self.version
            .as_ref()
            .map_or(true, |v| v.major() >= DUMMY_RASTER_PRODUCT_MIN_MAJOR)
    }
}

fn check_range(start: i64, end: i64) -> Result<(), ConfigError> {
    if start > end {
        return Err(ConfigError::InvertedFrameRange { start, end });
    }
    Ok(())
}
