use husk_core::{keys, ConfigError, JobConfig, PluginInfo, RenderOverride};

#[test]
fn parses_key_value_lines_and_skips_comments() {
    let text = "\
# submitted by the farm
SceneFile=P:/show/shot/render.usd

; overrides
Renderer = BRAY_HdKarma
Version=20.5
ListLicenseChecks=false
SceneFile=P:/show/shot/render_v2.usd
";
    let info = PluginInfo::parse(text).unwrap();
    assert_eq!(info.get(keys::SCENE_FILE), Some("P:/show/shot/render_v2.usd"));
    assert_eq!(info.get(keys::RENDERER), Some("BRAY_HdKarma"));
    assert_eq!(info.get(keys::VERSION), Some("20.5"));

    let config = JobConfig::from_plugin_info(&info, 1, 24).unwrap();
    assert_eq!(config.scene_file(), "P:/show/shot/render_v2.usd");
    assert_eq!(config.override_value(RenderOverride::Renderer), Some("BRAY_HdKarma"));
    assert_eq!(config.version().map(|v| v.major()), Some(20));
    assert!(!config.list_license_checks());
    assert_eq!(config.frame_count(), 24);
}

#[test]
fn values_may_contain_equals_signs() {
    let info = PluginInfo::parse("PreRender=/scripts/pre.py --mode=fast\n").unwrap();
    assert_eq!(info.get(keys::PRE_RENDER), Some("/scripts/pre.py --mode=fast"));
}

#[test]
fn lines_without_separator_are_rejected() {
    let err = PluginInfo::parse("SceneFile=/a.usd\nnot an entry\n").unwrap_err();
    assert_eq!(
        err,
        ConfigError::MalformedEntry {
            line_number: 2,
            line: "not an entry".to_string()
        }
    );
    assert!(PluginInfo::parse("=value").is_err());
}

#[test]
fn scene_file_is_required() {
    let info = PluginInfo::parse("Renderer=BRAY_HdKarma").unwrap();
    assert_eq!(
        JobConfig::from_plugin_info(&info, 1, 1),
        Err(ConfigError::MissingEntry("SceneFile".to_string()))
    );

    let info = PluginInfo::parse("SceneFile=").unwrap();
    assert!(JobConfig::from_plugin_info(&info, 1, 1).is_err());
}

#[test]
fn booleans_accept_common_spellings() {
    for (raw, expected) in [
        ("True", true),
        ("1", true),
        ("yes", true),
        ("FALSE", false),
        ("0", false),
        ("no", false),
    ] {
        let info = PluginInfo::new().with("ListLicenseChecks", raw);
        assert_eq!(info.bool_or("ListLicenseChecks", !expected), Ok(expected));
    }
    let info = PluginInfo::new().with("ListLicenseChecks", "maybe");
    assert_eq!(
        info.bool_or("ListLicenseChecks", true),
        Err(ConfigError::InvalidBoolean {
            key: "ListLicenseChecks".to_string(),
            value: "maybe".to_string()
        })
    );
    assert_eq!(PluginInfo::new().bool_or("ListLicenseChecks", true), Ok(true));
}
