//! Physical-property tests for the profile evaluator
//!
//! These tests verify the analytic guarantees of the closed-form solution:
//! monotone saturation in time, uniform convergence to the surface
//! concentration, depth-grid guarantees, domain validation, truncation
//! convergence, and the D·t/L² scaling group.

use approx::assert_relative_eq;

use fick_rs::error::FickError;
use fick_rs::physics::{evaluate_profile, EvaluatorConfig, ProfileEvaluator, SlabParameters};

mod common;
use common::{assert_profiles_close, relative_error};

/// Default slab: small drug molecule in a 200 µm skin sample
fn default_params() -> SlabParameters {
    SlabParameters::new(1e-10, 200e-6, 1.0)
}

#[test]
fn test_concentration_non_decreasing_in_time() {
    // At any fixed depth, the slab only ever loads up: concentration is
    // non-decreasing as time advances
    let params = default_params();
    let config = EvaluatorConfig::default();

    // Mid-slab sample: with 81 samples over 200 µm, index 40 sits at 100 µm
    let mid = 40;
    let times = [0.0, 100.0, 1000.0, 100_000.0];

    let series: Vec<f64> = times
        .iter()
        .map(|&t| {
            let profile = evaluate_profile(&params, t, &config).unwrap();
            assert_relative_eq!(profile.samples()[mid].depth, 100e-6, max_relative = 1e-12);
            profile.samples()[mid].concentration
        })
        .collect();

    for window in series.windows(2) {
        assert!(
            window[1] >= window[0],
            "concentration decreased over time: {:?}",
            series
        );
    }
}

#[test]
fn test_steady_state_converges_to_surface_concentration() {
    // As t → ∞ every depth saturates to C0
    let params = default_params();
    let config = EvaluatorConfig::default();

    let profile = evaluate_profile(&params, 1e7, &config).unwrap();

    for sample in profile.samples() {
        assert!(
            (sample.concentration - params.surface_concentration).abs() < 1e-6,
            "depth {} m not saturated: {}",
            sample.depth,
            sample.concentration
        );
    }
}

#[test]
fn test_depth_grid_guarantees() {
    // Exactly sample_count entries, strictly increasing, spanning [0, L]
    let params = default_params();

    for &count in &[2usize, 5, 81, 200] {
        let config = EvaluatorConfig::default().with_sample_count(count);
        let profile = evaluate_profile(&params, 50.0, &config).unwrap();

        assert_eq!(profile.len(), count);

        let depths = profile.depths();
        assert_eq!(depths[0], 0.0);
        assert!(relative_error(*depths.last().unwrap(), params.thickness) < 1e-12);

        for pair in depths.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }
}

#[test]
fn test_domain_validation_names_offending_field() {
    let config = EvaluatorConfig::default();
    let cases = [
        (SlabParameters::new(-1.0, 200e-6, 1.0), 10.0, "diffusivity"),
        (SlabParameters::new(1e-10, 0.0, 1.0), 10.0, "thickness"),
        (
            SlabParameters::new(1e-10, 200e-6, -0.5),
            10.0,
            "surface_concentration",
        ),
        (SlabParameters::new(1e-10, 200e-6, 1.0), -1.0, "time"),
    ];

    for (params, time, expected_field) in cases {
        match evaluate_profile(&params, time, &config) {
            Err(FickError::InvalidParameter { field, .. }) => {
                assert_eq!(field, expected_field);
            }
            other => panic!(
                "expected InvalidParameter for {}, got {:?}",
                expected_field, other
            ),
        }
    }
}

#[test]
fn test_configuration_validation() {
    let params = default_params();

    let too_few_samples = EvaluatorConfig::new(1, 20);
    assert!(matches!(
        evaluate_profile(&params, 10.0, &too_few_samples),
        Err(FickError::InvalidConfiguration { field: "sample_count", .. })
    ));

    let no_terms = EvaluatorConfig::new(81, 0);
    assert!(matches!(
        evaluate_profile(&params, 10.0, &no_terms),
        Err(FickError::InvalidConfiguration { field: "series_terms", .. })
    ));
}

#[test]
fn test_series_truncation_converges() {
    // Near the surface at early time the series converges slowest; more
    // terms must change the result by ever-smaller amounts
    let params = default_params();
    let time = 10.0;

    let near_surface = |terms: usize| {
        let config = EvaluatorConfig::new(81, terms);
        let profile = evaluate_profile(&params, time, &config).unwrap();
        // Sample index 1: 2.5 µm below the surface
        profile.samples()[1].concentration
    };

    let coarse = near_surface(1);
    let medium = near_surface(20);
    let fine = near_surface(40);

    let first_refinement = (medium - coarse).abs();
    let second_refinement = (fine - medium).abs();

    assert!(
        second_refinement < first_refinement,
        "refinement 20→40 ({}) should be smaller than 1→20 ({})",
        second_refinement,
        first_refinement
    );
}

#[test]
fn test_scaling_group_invariance() {
    // The profile depends on D and t only through the group D·t/L²:
    // quadrupling D and quartering t leaves the profile unchanged
    let config = EvaluatorConfig::default();
    let base = default_params();
    let faster = SlabParameters::new(4.0 * base.diffusivity, base.thickness, 1.0);

    let reference = evaluate_profile(&base, 1000.0, &config).unwrap();
    let scaled = evaluate_profile(&faster, 250.0, &config).unwrap();

    assert_profiles_close(&reference, &scaled, 1e-12, "D·t/L² scaling");
}

#[test]
fn test_precomputed_evaluator_agrees_with_one_shot() {
    let params = default_params();
    let config = EvaluatorConfig::default();
    let evaluator = ProfileEvaluator::new(params, config).unwrap();

    for &t in &[0.0, 25.0, 400.0, 3600.0] {
        let cached = evaluator.profile_at(t).unwrap();
        let reference = evaluate_profile(&params, t, &config).unwrap();
        assert_profiles_close(&cached, &reference, 1e-12, "precomputed vs one-shot");
    }
}

#[test]
fn test_profiles_stay_finite_and_bounded() {
    // Across a broad time sweep, every value is finite and (up to Gibbs
    // ripple at early times) stays inside [0, C0]
    let params = default_params();
    let config = EvaluatorConfig::default();

    for &t in &[0.0, 1e-3, 1.0, 60.0, 3600.0, 1e9] {
        let profile = evaluate_profile(&params, t, &config).unwrap();

        for sample in profile.samples() {
            assert!(sample.concentration.is_finite());
            assert!(
                sample.concentration > -0.25 && sample.concentration < 1.25,
                "value {} at depth {} t {} far outside physical range",
                sample.concentration,
                sample.depth,
                t
            );
        }
    }
}

#[test]
fn test_surface_held_at_c0_for_all_times() {
    // The fixed-concentration boundary: depth 0 reads exactly C0
    let params = default_params();
    let config = EvaluatorConfig::default();

    for &t in &[0.0, 5.0, 500.0, 1e6] {
        let profile = evaluate_profile(&params, t, &config).unwrap();
        assert_relative_eq!(
            profile.surface().unwrap().concentration,
            params.surface_concentration,
            max_relative = 1e-12
        );
    }
}

#[test]
fn test_c0_scales_output_linearly() {
    // Doubling C0 doubles every sample: the envelope is linear in C0
    let config = EvaluatorConfig::default();
    let unit = evaluate_profile(&default_params(), 600.0, &config).unwrap();

    let doubled_params = SlabParameters::new(1e-10, 200e-6, 2.0);
    let doubled = evaluate_profile(&doubled_params, 600.0, &config).unwrap();

    for (a, b) in unit.samples().iter().zip(doubled.samples().iter()) {
        assert_relative_eq!(2.0 * a.concentration, b.concentration, max_relative = 1e-12);
    }
}
