use okapi_content::{SceneLoader, SimulationConfig};
use okapi_core::{
    Action, ChangeValueAction, ConfigurationError, InstanceHandle, TargetBinding, ValueTarget,
    VariableConfig, VariableHandle, VariableInstance,
};
use okapi_runtime::{Behavior, Scene, SceneError, VariableScope};

const ARENA: &str = r#"
(
    variables: [
        (name: "score", config: (kind: Integer, initial: 0.0, default: 0.0)),
        (name: "health", config: (kind: Float, initial: 10.0, default: 10.0, limits: Some((min: 0.0, max: 10.0)))),
    ],
    behaviors: [
        (
            name: "player",
            instances: [
                (name: "ammo", config: (kind: Integer, initial: 5.0, default: 5.0)),
                (name: "shield", config: (kind: Float, initial: 1.0, default: 3.0)),
            ],
            actions: [
                (asset: Some("health"), operation: Change(delta: -4.0, scale_by_elapsed: true)),
                (instance: Some("ammo"), operation: Change(delta: -1.0)),
                (asset: Some("score"), operation: Change(delta: 2.5)),
            ],
        ),
        (
            name: "referee",
            actions: [
                (asset: Some("score"), instance: None, operation: Set(value: 42.0), enabled: false),
            ],
        ),
    ],
)
"#;

fn arena() -> Scene {
    let definition = SceneLoader::parse(ARENA).expect("arena scene should parse");
    Scene::from_definition(&definition).expect("arena scene should build")
}

#[test]
fn float_asset_clamps_then_resets() {
    let health = VariableHandle::create("health", &VariableConfig::float(10.0).with_limits(0.0, 10.0));

    ChangeValueAction::change(health.clone(), -15.0).execute(0.0);
    assert_eq!(health.current_value(), 0.0);

    ChangeValueAction::reset(health.clone()).execute(0.0);
    assert_eq!(health.current_value(), 10.0);
}

#[test]
fn integer_instance_formats_default_then_truncated_sum() {
    let mut instance = VariableInstance::new("counter", VariableConfig::integer(5.0));
    assert_eq!(instance.to_display_string(), "5");

    instance.change_value(3.7);
    assert_eq!(instance.to_display_string(), "8");
}

#[test]
fn set_action_writes_operand() {
    let target = VariableHandle::create("target", &VariableConfig::float(0.0));
    let action = ChangeValueAction::set(target.clone(), 42.0);

    for elapsed in [0.0, 0.016, 3.0] {
        action.execute(elapsed);
        assert_eq!(target.current_value(), 42.0);
    }
}

#[test]
fn per_change_clamping_depends_on_order() {
    let stepwise = VariableHandle::create("a", &VariableConfig::float(5.0).with_limits(0.0, 10.0));
    ChangeValueAction::change(stepwise.clone(), 10.0).execute(0.0);
    ChangeValueAction::change(stepwise.clone(), -10.0).execute(0.0);

    let combined = VariableHandle::create("b", &VariableConfig::float(5.0).with_limits(0.0, 10.0));
    combined.change(10.0 + -10.0);

    assert_eq!(stepwise.current_value(), 0.0);
    assert_eq!(combined.current_value(), 5.0);
}

#[test]
fn validation_reports_but_does_not_block() {
    let asset = VariableHandle::create("global", &VariableConfig::float(0.0));
    let instance = InstanceHandle::create("local", VariableConfig::float(0.0));
    let ambiguous = ChangeValueAction::change(
        TargetBinding {
            asset: Some(asset.clone()),
            instance: Some(instance.clone()),
        },
        1.0,
    );

    let errors = ambiguous.validate();
    assert!(matches!(errors.as_slice(), [ConfigurationError::AmbiguousTarget { .. }]));

    ambiguous.execute(0.0);
    assert_eq!(instance.current_value(), 1.0);
    assert_eq!(asset.current_value(), 0.0);
}

#[test]
fn arena_runs_for_configured_frames() {
    let mut scene = arena();

    let summary = scene.run(&SimulationConfig {
        frames: 3,
        frame_seconds: 1.0,
        validate_on_load: true,
    });

    assert_eq!(summary.frames, 3);
    // player: 3 actions per frame; referee is disabled.
    assert_eq!(summary.mutations, 9);

    assert_eq!(scene.variable("health").unwrap().current_value(), 0.0);
    // 2.5 truncated per change: 2, 4, 6.
    assert_eq!(scene.variable("score").unwrap().current_value(), 6.0);

    let player = scene.behavior("player").unwrap();
    assert_eq!(player.instance_value("ammo"), Some(2.0));
    assert_eq!(player.instance_value("shield"), Some(1.0));
}

#[test]
fn snapshot_reports_every_variable() {
    let scene = arena();
    let snapshot = scene.snapshot();

    let rendered: Vec<String> = snapshot.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec![
            "score = 0",
            "health = 10",
            "player.ammo = 5",
            "player.shield = 3",
        ]
    );
    assert_eq!(snapshot[2].scope, VariableScope::Local("player".into()));
    assert!(!snapshot[3].materialized);
}

#[test]
fn arena_has_no_diagnostics() {
    assert!(arena().validate().is_empty());
}

#[test]
fn diagnostics_carry_behavior_and_action() {
    let mut scene = Scene::new();
    let score = scene.add_variable("score", &VariableConfig::integer(0.0)).unwrap();
    let mut hud = Behavior::new("hud");
    hud.add_action(ChangeValueAction::change(score, 0.0));
    hud.add_action(ChangeValueAction::reset(TargetBinding::unset()));
    scene.add_behavior(hud).unwrap();

    let diagnostics = scene.validate();
    let codes: Vec<_> = diagnostics
        .iter()
        .map(|d| (d.behavior.as_str(), d.action, d.error.error_code()))
        .collect();
    assert_eq!(codes, vec![("hud", 0, "zero_delta"), ("hud", 1, "no_target")]);
    assert_eq!(scene.report_diagnostics(), 2);
}

#[test]
fn load_reads_scene_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("arena.ron");
    std::fs::write(&path, ARENA).unwrap();

    let scene = Scene::load(&path).unwrap();
    assert_eq!(scene.behaviors().len(), 2);
}

#[test]
fn load_wraps_parse_failures() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.ron");
    std::fs::write(&path, "(behaviors: [(name: )])").unwrap();

    assert!(matches!(Scene::load(&path), Err(SceneError::Load(_))));
}
