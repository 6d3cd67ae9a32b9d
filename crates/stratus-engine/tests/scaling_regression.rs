//! Scaling pipeline regression tests.
//!
//! Validates the composed flow end to end: a raw request is validated,
//! applied onto the current configuration, and the result is priced.
//! Also walks the preset catalog and loads engine settings from disk.

use stratus_core::{
    DEFAULT_MAX_INSTANCES, FlavorScalingConfig, InstanceConfiguration, InstanceScalingConfig,
    ScalabilityConfig, ScalabilityParameters, ScalingStrategy,
};
use stratus_engine::{EngineSettings, ScalingEngine};

fn test_engine() -> ScalingEngine {
    ScalingEngine::new()
}

fn current_production() -> InstanceConfiguration {
    InstanceConfiguration::new("S", "M", 2, 4)
}

#[test]
fn pipeline_validate_apply_estimate() {
    let engine = test_engine();
    let request = ScalabilityParameters::default().with_min_flavor("L");

    let verdict = engine.validate(&request);
    assert!(verdict.is_valid());
    assert!(verdict.warnings.is_empty());

    // Raising the min past the current max drags the max up with it.
    let merged = engine.apply(&request, &current_production());
    assert_eq!(merged.min_flavor, "L");
    assert_eq!(merged.max_flavor, "L");
    assert_eq!(merged.min_instances, 2);
    assert_eq!(merged.max_instances, 4);

    let config = ScalabilityConfig::new(
        FlavorScalingConfig::range(&merged.min_flavor, &merged.max_flavor),
        InstanceScalingConfig::range(merged.min_instances, merged.max_instances),
    );
    let estimate = engine.estimate(&config);
    assert!(estimate.monthly_max >= estimate.monthly_min);
    assert!(estimate.monthly_min > 0.0);
    assert_eq!(estimate.currency, "EUR");
}

#[test]
fn pipeline_rejects_inverted_bounds_with_exact_messages() {
    let engine = test_engine();
    let request = ScalabilityParameters::default()
        .with_min_flavor("XL")
        .with_max_flavor("S")
        .with_min_instances(5)
        .with_max_instances(2);

    let verdict = engine.validate(&request);
    assert!(!verdict.is_valid());
    assert_eq!(
        verdict.errors,
        vec![
            "min-flavor can't be a greater flavor than max-flavor",
            "min-instances can't be greater than max-instances",
        ]
    );
}

#[test]
fn pipeline_rejects_empty_request() {
    let engine = test_engine();
    let verdict = engine.validate(&ScalabilityParameters::default());
    assert!(!verdict.is_valid());
    assert_eq!(verdict.errors, vec!["You should provide at least 1 option"]);
}

#[test]
fn pipeline_auto_contract_mirrors_auto_expand() {
    let engine = test_engine();

    // Lowering the max below the current min drags the min down.
    let lowered = engine.apply(
        &ScalabilityParameters::default().with_max_flavor("XS"),
        &current_production(),
    );
    assert_eq!(lowered.min_flavor, "XS");
    assert_eq!(lowered.max_flavor, "XS");

    let shrunk = engine.apply(
        &ScalabilityParameters::default().with_max_instances(1),
        &current_production(),
    );
    assert_eq!(shrunk.min_instances, 1);
    assert_eq!(shrunk.max_instances, 1);
}

#[test]
fn pipeline_leaves_current_configuration_untouched() {
    let engine = test_engine();
    let current = current_production();

    let _ = engine.apply(
        &ScalabilityParameters::default().with_min_flavor("3XL"),
        &current,
    );
    assert_eq!(current, current_production());
}

#[test]
fn preset_walk_is_priceable_and_consistent() {
    let engine = test_engine();
    assert!(!engine.presets().is_empty());

    for preset in engine.presets() {
        let config = &preset.configuration;
        assert_eq!(
            engine.strategy(config),
            preset.strategy(),
            "preset {} strategy disagrees with its flags",
            preset.id
        );

        let estimate = engine.estimate(config);
        assert!(
            estimate.monthly_max >= estimate.monthly_min,
            "preset {} prices out of order",
            preset.id
        );
        assert!(estimate.monthly_min > 0.0, "preset {} is free", preset.id);
    }
}

#[test]
fn preset_configurations_survive_a_scaling_round() {
    let engine = test_engine();
    let preset = engine.preset("production-standard").unwrap();
    let flavors = &preset.configuration.flavor_scaling;

    let current = InstanceConfiguration::new(
        flavors.min_flavor.clone().unwrap(),
        flavors.max_flavor.clone().unwrap(),
        2,
        6,
    );

    // A request that restates the preset bounds is a no-op.
    let request = ScalabilityParameters::default()
        .with_min_flavor(current.min_flavor.clone())
        .with_max_flavor(current.max_flavor.clone())
        .with_min_instances(current.min_instances)
        .with_max_instances(current.max_instances);
    assert!(engine.validate(&request).is_valid());
    assert_eq!(engine.apply(&request, &current), current);
}

#[test]
fn strategy_detection_covers_all_presets() {
    let engine = test_engine();
    let mut seen: Vec<ScalingStrategy> = engine
        .presets()
        .iter()
        .map(|p| engine.strategy(&p.configuration))
        .collect();
    seen.sort_by_key(|s| s.label());
    seen.dedup();
    assert_eq!(seen.len(), 4, "expected every strategy to be represented");
}

#[test]
fn settings_file_drives_the_engine() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stratus.toml");
    std::fs::write(
        &path,
        r#"
currency = "USD"
max_allowed_instances = 8
"#,
    )
    .unwrap();

    let settings = EngineSettings::from_file(&path).unwrap();
    let engine = ScalingEngine::from_settings(&settings).unwrap();

    let estimate = engine.estimate(&ScalabilityConfig::fixed("S", 2));
    assert_eq!(estimate.currency, "USD");

    let verdict = engine.validate(&ScalabilityParameters::default().with_max_instances(10));
    assert!(verdict.is_valid());
    assert_eq!(
        verdict.warnings,
        vec!["max-instances exceeds the maximum of 8 instances allowed by the current plan"]
    );
}

#[test]
fn default_plan_ceiling_applies_without_settings() {
    let engine = test_engine();
    let over = ScalabilityParameters::default().with_max_instances(DEFAULT_MAX_INSTANCES + 1);
    let verdict = engine.validate(&over);
    assert!(verdict.is_valid());
    assert_eq!(verdict.warnings.len(), 1);

    let at_limit = ScalabilityParameters::default().with_max_instances(DEFAULT_MAX_INSTANCES);
    assert!(engine.validate(&at_limit).warnings.is_empty());
}

#[test]
fn request_json_round_trips_through_the_pipeline() {
    let engine = test_engine();

    // A host application posts deltas as JSON; absent fields must stay
    // absent after the round trip or reconciliation would misfire.
    let request: ScalabilityParameters =
        serde_json::from_str(r#"{"min_instances": 3}"#).unwrap();
    assert!(engine.validate(&request).is_valid());

    let merged = engine.apply(&request, &current_production());
    assert_eq!(merged.min_instances, 3);
    assert_eq!(merged.max_instances, 4);
    assert_eq!(merged.min_flavor, "S");
}
