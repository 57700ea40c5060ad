use super::*;

fn rotation() -> Interpolation {
    Interpolation::new(&[-600.0, 0.0, 600.0], &[-120.0, 0.0, 120.0], Extrapolate::Clamp)
        .expect("valid control points")
}

#[test]
fn control_points_map_exactly() {
    let lookup = rotation();
    assert_eq!(lookup.map(-600.0), -120.0);
    assert_eq!(lookup.map(0.0), 0.0);
    assert_eq!(lookup.map(600.0), 120.0);
}

#[test]
fn values_between_points_are_linear() {
    let lookup = rotation();
    assert!((lookup.map(300.0) - 60.0).abs() < 1e-4);
    assert!((lookup.map(-150.0) + 30.0).abs() < 1e-4);
}

#[test]
fn clamp_pins_to_endpoints() {
    let lookup = rotation();
    assert_eq!(lookup.map(10_000.0), 120.0);
    assert_eq!(lookup.map(-10_000.0), -120.0);
    assert_eq!(lookup.map(f32::INFINITY), 120.0);
}

#[test]
fn extend_continues_outer_slope() {
    let lookup = Interpolation::new(&[0.0, 10.0], &[0.0, 1.0], Extrapolate::Extend)
        .expect("valid control points");
    assert!((lookup.map(20.0) - 2.0).abs() < 1e-6);
    assert!((lookup.map(-10.0) + 1.0).abs() < 1e-6);
}

#[test]
fn nan_propagates() {
    assert!(rotation().map(f32::NAN).is_nan());
}

#[test]
fn mismatched_ranges_are_rejected() {
    assert_eq!(
        Interpolation::new(&[0.0, 1.0, 2.0], &[0.0, 1.0], Extrapolate::Clamp),
        Err(InterpolateError::LengthMismatch {
            inputs: 3,
            outputs: 2
        })
    );
    assert_eq!(
        Interpolation::new(&[0.0], &[0.0], Extrapolate::Clamp),
        Err(InterpolateError::TooFewPoints(1))
    );
    assert_eq!(
        Interpolation::new(&[0.0, 2.0, 1.0], &[0.0, 1.0, 2.0], Extrapolate::Clamp),
        Err(InterpolateError::NotAscending { index: 2 })
    );
    assert_eq!(
        Interpolation::new(&[0.0, f32::NAN], &[0.0, 1.0], Extrapolate::Clamp),
        Err(InterpolateError::NotAscending { index: 1 })
    );
}

#[test]
fn one_shot_interpolate_clamps() {
    assert_eq!(interpolate(5.0, &[0.0, 1.0], &[0.0, 100.0]), Ok(100.0));
    assert_eq!(interpolate(0.5, &[0.0, 1.0], &[0.0, 100.0]), Ok(50.0));
    assert!(interpolate(0.5, &[1.0, 0.0], &[0.0, 100.0]).is_err());
}

#[test]
fn error_messages_name_the_problem() {
    let message = InterpolateError::NotAscending { index: 3 }.to_string();
    assert!(message.contains("ascending"), "{message}");
}
