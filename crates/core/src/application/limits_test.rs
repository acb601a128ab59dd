//! Unit tests for request limits

use super::*;

#[test]
fn test_default_limits_are_valid() {
    assert!(RequestLimits::default().validate().is_ok());
}

#[test]
fn test_validate_zero_item_bytes() {
    let limits = RequestLimits {
        max_item_bytes: 0,
        ..Default::default()
    };

    let result = limits.validate();
    assert!(matches!(result, Err(AppError::Config(_))));
}

#[test]
fn test_validate_non_positive_timeout() {
    let limits = RequestLimits {
        max_pop_timeout_ms: 0,
        ..Default::default()
    };

    let result = limits.validate();
    assert!(result.unwrap_err().to_string().contains("must be positive"));
}

#[test]
fn test_check_item_too_large() {
    let limits = RequestLimits {
        max_item_bytes: 4,
        ..Default::default()
    };

    assert!(limits.check_item("abcd").is_ok());
    assert!(limits.check_item("").is_ok());

    let result = limits.check_item("abcde");
    assert!(result.unwrap_err().to_string().contains("too large"));
}

#[test]
fn test_clamp_timeout() {
    let limits = RequestLimits {
        max_pop_timeout_ms: 1_000,
        ..Default::default()
    };

    assert_eq!(limits.clamp_timeout(50), 50);
    assert_eq!(limits.clamp_timeout(5_000), 1_000);
    assert_eq!(limits.clamp_timeout(0), 0);
    assert_eq!(limits.clamp_timeout(-7), -7);
}
