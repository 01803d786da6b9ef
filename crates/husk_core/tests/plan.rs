use husk_core::{
    executable_key, plan_tasks, single_frame_only, ConfigError, FrameRange, HuskAdapter,
    JobConfig, LogEvent, RenderAdapter,
};

fn ranges(pairs: &[(i64, i64)]) -> Vec<FrameRange> {
    pairs
        .iter()
        .map(|&(start, end)| FrameRange { start, end })
        .collect()
}

#[test]
fn frame_token_in_scene_forces_single_frames() {
    let per_frame = JobConfig::new("render.$F4.usd", 1, 10).unwrap();
    let whole = JobConfig::new("render.usd", 1, 10).unwrap();
    assert!(single_frame_only(&per_frame));
    assert!(!single_frame_only(&whole));
}

#[test]
fn chunks_cover_range() {
    assert_eq!(
        plan_tasks(1, 10, 4, false).unwrap(),
        ranges(&[(1, 4), (5, 8), (9, 10)])
    );
    assert_eq!(plan_tasks(1, 10, 100, false).unwrap(), ranges(&[(1, 10)]));
    assert_eq!(plan_tasks(-2, 0, 2, false).unwrap(), ranges(&[(-2, -1), (0, 0)]));
    assert_eq!(plan_tasks(5, 5, 1, false).unwrap(), ranges(&[(5, 5)]));
}

#[test]
fn single_frame_plan_ignores_chunk_size() {
    let tasks = plan_tasks(1, 10, 4, true).unwrap();
    assert_eq!(tasks.len(), 10);
    assert!(tasks.iter().all(|t| t.len() == 1));
    assert_eq!(tasks[9], FrameRange { start: 10, end: 10 });
}

#[test]
fn invalid_plans_are_rejected() {
    assert_eq!(plan_tasks(1, 10, 0, false), Err(ConfigError::ZeroChunkSize));
    assert_eq!(
        plan_tasks(10, 1, 1, false),
        Err(ConfigError::InvertedFrameRange { start: 10, end: 1 })
    );
}

#[test]
fn executable_key_carries_version_suffix() {
    assert_eq!(executable_key(None), "USD_RenderExecutable");
    assert_eq!(executable_key(Some("")), "USD_RenderExecutable");
    assert_eq!(executable_key(Some("20.5")), "USD_RenderExecutable_20_5");
    assert_eq!(executable_key(Some("19.5.640")), "USD_RenderExecutable_19_5_640");
}

#[test]
fn husk_adapter_exposes_job_capabilities() {
    let config = JobConfig::new("/shots/render.$F4.usd", 3, 3)
        .unwrap()
        .with_version("20.0")
        .unwrap();
    let adapter = HuskAdapter::new(config);
    let adapter: &dyn RenderAdapter = &adapter;

    assert_eq!(adapter.executable_key(), "USD_RenderExecutable_20_0");
    assert!(adapter.is_single_frame_only());
    assert_eq!(adapter.build_command().scene_path(), "/shots/render.0003.usd");
    assert_eq!(
        adapter.classify_line("ALF_PROGRESS 5%"),
        LogEvent::Progress { percent: 5.0 }
    );
}
