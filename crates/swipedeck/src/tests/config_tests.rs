use super::*;

fn stiff_spring() -> SpringSpec {
    SpringSpec {
        stiffness: 3000.0,
        ..SpringSpec::default()
    }
}

#[test]
fn defaults_follow_gesture_constants() {
    let config = DeckConfig::new(400.0).expect("valid width");
    assert_eq!(config.viewport_width(), 400.0);
    assert_eq!(config.swipe_threshold_fraction(), 0.25);
    assert_eq!(config.swipe_threshold(), 100.0);
    assert_eq!(config.swipe_out_duration_millis(), 250);
    assert_eq!(config.stack_offset(), 10.0);
    assert_eq!(config.max_rotation_deg(), 120.0);
    assert_eq!(config.max_stacked_cards(), None);
    assert_eq!(
        config.swipe_out_animation(),
        AnimationType::Tween(AnimationSpec::tween(250, Easing::FastOutSlowIn))
    );
    assert_eq!(
        config.reset_animation(),
        AnimationType::Spring(SpringSpec::default())
    );
}

#[test]
fn viewport_size_uses_width() {
    let config = DeckConfig::from_viewport(Size::new(360.0, 640.0)).expect("valid size");
    assert_eq!(config.swipe_threshold(), 90.0);
}

#[test]
fn builder_overrides() {
    let config = DeckConfig::builder(200.0)
        .with_swipe_threshold_fraction(0.5)
        .with_swipe_out_duration_millis(100)
        .with_swipe_out_easing(Easing::Linear)
        .with_reset_spring(stiff_spring())
        .with_stack_offset(4.0)
        .with_max_rotation_deg(30.0)
        .with_max_stacked_cards(2)
        .build()
        .expect("valid config");
    assert_eq!(config.swipe_threshold(), 100.0);
    assert_eq!(
        config.swipe_out_animation(),
        AnimationType::Tween(AnimationSpec::linear(100))
    );
    assert_eq!(
        config.reset_animation(),
        AnimationType::Spring(stiff_spring())
    );
    assert_eq!(config.stack_offset(), 4.0);
    assert_eq!(config.max_stacked_cards(), Some(2));
}

#[test]
fn invalid_viewport_is_rejected() {
    for width in [0.0, -10.0, f32::NAN, f32::INFINITY] {
        match DeckConfig::new(width) {
            Err(DeckConfigError::InvalidViewportWidth(_)) => {}
            other => panic!("width {width} gave {other:?}"),
        }
    }
}

#[test]
fn invalid_settings_are_rejected() {
    assert_eq!(
        DeckConfig::builder(100.0)
            .with_swipe_threshold_fraction(0.0)
            .build()
            .err(),
        Some(DeckConfigError::InvalidThresholdFraction(0.0))
    );
    assert_eq!(
        DeckConfig::builder(100.0)
            .with_swipe_threshold_fraction(1.5)
            .build()
            .err(),
        Some(DeckConfigError::InvalidThresholdFraction(1.5))
    );
    assert_eq!(
        DeckConfig::builder(100.0)
            .with_stack_offset(-1.0)
            .build()
            .err(),
        Some(DeckConfigError::InvalidStackOffset(-1.0))
    );
    assert!(matches!(
        DeckConfig::builder(100.0)
            .with_max_rotation_deg(f32::NAN)
            .build(),
        Err(DeckConfigError::InvalidRotation(_))
    ));
}

#[test]
fn reset_spring_that_never_settles_is_rejected() {
    let springs = [
        SpringSpec {
            stiffness: 0.0,
            ..SpringSpec::default()
        },
        SpringSpec {
            stiffness: -5.0,
            ..SpringSpec::default()
        },
        SpringSpec {
            damping_ratio: -0.5,
            ..SpringSpec::default()
        },
        SpringSpec {
            damping_ratio: f32::INFINITY,
            ..SpringSpec::default()
        },
        SpringSpec {
            position_threshold: 0.0,
            ..SpringSpec::default()
        },
    ];
    for spring in springs {
        match DeckConfig::builder(400.0).with_reset_spring(spring).build() {
            Err(DeckConfigError::InvalidResetSpring(rejected)) => {
                assert_eq!(rejected.stiffness.to_bits(), spring.stiffness.to_bits())
            }
            other => panic!("spring {spring:?} gave {other:?}"),
        }
    }
}

#[test]
fn extreme_duration_and_cap_are_accepted() {
    let config = DeckConfig::builder(400.0)
        .with_swipe_out_duration_millis(u64::MAX / 1000)
        .with_max_stacked_cards(usize::MAX)
        .build()
        .expect("large values are valid");
    assert_eq!(config.swipe_out_duration_millis(), u64::MAX / 1000);
    assert_eq!(config.max_stacked_cards(), Some(usize::MAX));
}

#[test]
fn errors_render_readably() {
    let err = DeckConfig::new(-1.0).unwrap_err();
    assert!(err.to_string().contains("viewport width"), "{err}");

    let wrapped = DeckConfigError::from(InterpolateError::TooFewPoints(1));
    assert!(std::error::Error::source(&wrapped).is_some());
}
