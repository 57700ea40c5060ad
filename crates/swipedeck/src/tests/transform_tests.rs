use super::*;

const WIDTH: f32 = 400.0;

fn mapper() -> TransformMapper {
    TransformMapper::new(WIDTH, 120.0).expect("valid mapper")
}

#[test]
fn rest_position_has_no_rotation() {
    assert_eq!(
        mapper().map_offset_to_style(Point::ZERO),
        CardTransform::IDENTITY
    );
}

#[test]
fn translation_passes_through() {
    let style = mapper().map_offset_to_style(Point::new(37.0, -12.5));
    assert_eq!(style.translate_x, 37.0);
    assert_eq!(style.translate_y, -12.5);
}

#[test]
fn rotation_hits_control_points() {
    let mapper = mapper();
    assert_eq!(
        mapper
            .map_offset_to_style(Point::new(1.5 * WIDTH, 0.0))
            .rotate_deg,
        120.0
    );
    assert_eq!(
        mapper
            .map_offset_to_style(Point::new(-1.5 * WIDTH, 0.0))
            .rotate_deg,
        -120.0
    );
    let quarter = mapper.map_offset_to_style(Point::new(0.75 * WIDTH, 0.0));
    assert!((quarter.rotate_deg - 60.0).abs() < 1e-3);
}

#[test]
fn rotation_clamps_beyond_range() {
    let mapper = mapper();
    assert_eq!(
        mapper
            .map_offset_to_style(Point::new(10.0 * WIDTH, 0.0))
            .rotate_deg,
        120.0
    );
    assert_eq!(
        mapper
            .map_offset_to_style(Point::new(-10.0 * WIDTH, 0.0))
            .rotate_deg,
        -120.0
    );
}

#[test]
fn vertical_offset_does_not_rotate() {
    assert_eq!(
        mapper()
            .map_offset_to_style(Point::new(0.0, 300.0))
            .rotate_deg,
        0.0
    );
}

#[test]
fn mapping_is_reproducible() {
    let mapper = mapper();
    let offset = Point::new(123.4, 56.7);
    assert_eq!(
        mapper.map_offset_to_style(offset),
        mapper.map_offset_to_style(offset)
    );
}

#[test]
fn zero_width_is_rejected() {
    assert!(TransformMapper::new(0.0, 120.0).is_err());
}
