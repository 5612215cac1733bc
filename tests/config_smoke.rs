use scatter_intro_engine::{IconSlot, IntroConfig, IntroCore};

#[test]
fn config_smoke_override_changes_timeline() {
    let json = r#"{
        "scatterFrames": 20,
        "collideFrames": 30,
        "settleFrames": 10,
        "wallPadding": 0,
        "defaultIconSize": 32
    }"#;

    let config = IntroConfig::from_json(json).expect("override should parse");
    assert_eq!(config.windows().complete_after(), 60);
    assert_eq!(config.friction, IntroConfig::default().friction);

    let mut core = IntroCore::with_config(config, 640.0, 480.0, 5).expect("config is valid");
    core.add_icon(IconSlot::new(320.0, 240.0, 0.0, 0.0));
    assert_eq!(core.run_to_completion(), 61);

    let p = &core.particles()[0];
    assert_eq!(p.size.x, 32.0);
    assert_eq!(p.pos.x, 304.0);
    assert_eq!(p.pos.y, 224.0);
}

#[test]
fn config_smoke_rejects_bad_values() {
    for json in [
        r#"{"scatterFrames": 0}"#,
        r#"{"friction": 1.2}"#,
        r#"{"collisionRestitution": -0.1}"#,
        r#"{"defaultIconSize": 0}"#,
        r#"{"fadeOutMs": -1}"#,
        r#"{"scatterFrames": "soon"}"#,
        r#"{"maxSpeed": 1e39}"#,
        r#"{"rotationFactor": 1e39}"#,
    ] {
        assert!(IntroConfig::from_json(json).is_err(), "{} should be rejected", json);
    }
}

#[test]
fn config_smoke_large_speed_keeps_visuals_finite() {
    let config = IntroConfig::from_json(r#"{"minSpeed": 40, "maxSpeed": 1e6}"#).expect("finite speeds are valid");
    let mut core = IntroCore::with_config(config, 800.0, 600.0, 11).expect("config is valid");
    for i in 0..6 {
        core.add_icon(IconSlot::new(100.0 + 110.0 * i as f32, 300.0, 48.0, 48.0));
    }
    while !core.is_complete() {
        core.advance_frame();
        for v in core.visual_states() {
            assert!(v.left.is_finite() && v.top.is_finite() && v.rotation_deg.is_finite());
        }
    }
}
