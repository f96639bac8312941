//! Helper functions for integration tests

use fick_rs::physics::ConcentrationProfile;

/// Assert that two profiles are close (within tolerance), sample by sample
pub fn assert_profiles_close(
    profile1: &ConcentrationProfile,
    profile2: &ConcentrationProfile,
    tolerance: f64,
    message: &str,
) {
    assert_eq!(
        profile1.len(),
        profile2.len(),
        "{}: Sample count mismatch",
        message
    );

    for (i, (s1, s2)) in profile1
        .samples()
        .iter()
        .zip(profile2.samples().iter())
        .enumerate()
    {
        let diff = (s1.concentration - s2.concentration).abs();
        assert!(
            diff < tolerance,
            "{}: Sample {} differs by {} (tolerance {})",
            message,
            i,
            diff,
            tolerance
        );
    }
}

/// Compute the L2 norm error between two profiles
pub fn compute_l2_error(profile1: &ConcentrationProfile, profile2: &ConcentrationProfile) -> f64 {
    let mut sum_squared_diff = 0.0;
    let mut count = 0;

    for (s1, s2) in profile1.samples().iter().zip(profile2.samples().iter()) {
        sum_squared_diff += (s1.concentration - s2.concentration).powi(2);
        count += 1;
    }

    if count > 0 {
        (sum_squared_diff / count as f64).sqrt()
    } else {
        0.0
    }
}

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_error() {
        assert!((relative_error(1.0, 1.0) - 0.0).abs() < 1e-10);
        assert!((relative_error(1.1, 1.0) - 0.1).abs() < 1e-10);
        assert!((relative_error(0.9, 1.0) - 0.1).abs() < 1e-10);
    }
}
