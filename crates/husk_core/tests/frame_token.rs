use husk_core::{
    contains_frame_token, expand_frame_token, ConfigError, JobConfig, MAX_FRAME_PADDING,
};

#[test]
fn padded_tokens_are_zero_filled() {
    for frame in [0_i64, 1, 9, 42, 1001] {
        for width in 1..=6_usize {
            let expanded = expand_frame_token(&format!("$F{width}"), frame);
            let plain = frame.to_string();
            assert!(expanded.len() >= width);
            assert_eq!(expanded.len(), plain.len().max(width));
            assert_eq!(expanded.trim_start_matches('0'), plain.trim_start_matches('0'));
        }
    }
}

#[test]
fn longer_frames_are_not_truncated() {
    assert_eq!(expand_frame_token("$F2", 12345), "12345");
}

#[test]
fn text_without_token_is_unchanged() {
    let text = r"C:\shots\render.usd";
    assert_eq!(expand_frame_token(text, 7), text);
}

#[test]
fn every_occurrence_is_expanded() {
    assert_eq!(
        expand_frame_token("/cache/$F3/scene.$F4.usd", 8),
        "/cache/008/scene.0008.usd"
    );
}

#[test]
fn only_dollar_f_and_digits_are_consumed() {
    assert_eq!(expand_frame_token("a.$FF.usd", 3), "a.3F.usd");
    assert_eq!(expand_frame_token("a.$FEND.usd", 3), "a.3END.usd");
    assert_eq!(expand_frame_token("a.$F2x.usd", 3), "a.03x.usd");
}

#[test]
fn negative_frames_pad_after_sign() {
    assert_eq!(expand_frame_token("$F4", -5), "-005");
}

#[test]
fn detects_raw_token() {
    assert!(contains_frame_token("render.$F4.usd"));
    assert!(contains_frame_token("render.$F.usd"));
    assert!(!contains_frame_token("render.usd"));
    assert!(!contains_frame_token("render.$f.usd"));
}

#[test]
fn widths_past_two_digits_still_pad() {
    for width in [64_usize, 65, 128] {
        let expanded = expand_frame_token(&format!("a.$F{width}.usd"), 5);
        assert_eq!(expanded.len(), width + "a..usd".len());
        assert!(expanded.starts_with("a.0"));
        assert!(expanded.ends_with("5.usd"));
    }
}

#[test]
fn job_rejects_absurd_pad_width() {
    let config = JobConfig::new("/shots/a.$F65.usd", 1, 1).unwrap();
    assert_eq!(config.scene_file(), "/shots/a.$F65.usd");

    let scene = format!("/shots/a.$F{}.usd", MAX_FRAME_PADDING + 1);
    assert!(matches!(
        JobConfig::new(scene, 1, 1),
        Err(ConfigError::FramePaddingTooWide { max: MAX_FRAME_PADDING, .. })
    ));
}
