// Host-side tests for the wave table and its derived layout values.

use waves_core::{Rgba, WaveConfig, WaveField, DEFAULT_WAVES};

#[test]
fn default_field_has_five_parsed_waves() {
    let field = WaveField::default();
    assert_eq!(field.len(), DEFAULT_WAVES.len());
    assert_eq!(field.waves()[0].color, Rgba::new(255, 255, 255, 0.9));
    assert_eq!(field.waves()[2].color, Rgba::new(57, 197, 187, 0.9));
}

#[test]
fn derived_values_follow_position() {
    let field = WaveField::default();
    for (i, wave) in field.waves().iter().enumerate() {
        let expected = (i as f64 * 1.5).sin() * 8.0;
        assert!((wave.bottom_offset - expected).abs() < 1e-12, "wave {i}");
        assert!((wave.sphere_radius - wave.width * 3.0).abs() < 1e-12);
    }
    assert_eq!(field.waves()[0].bottom_offset, 0.0);
}

#[test]
fn extra_glow_waves_get_brighter_spheres() {
    let field = WaveField::default();
    for wave in field.waves() {
        let expected = if wave.extra_glow { 30.0 } else { 20.0 };
        assert_eq!(wave.sphere_glow, expected);
    }
    assert!(field.waves()[2].extra_glow);
    assert_eq!(field.waves()[2].shadow_blur, Some(25.0));
}

#[test]
fn back_to_front_reverses_the_table() {
    let field = WaveField::default();
    let order: Vec<usize> = field.back_to_front().map(|(i, _)| i).collect();
    assert_eq!(order, vec![4, 3, 2, 1, 0]);
}

#[test]
fn bad_config_color_falls_back() {
    let configs = [WaveConfig {
        color: "not a colour",
        amplitude: 10.0,
        frequency: 0.01,
        speed: 0.1,
        offset: 0.0,
        width: 1.0,
        shadow_blur: None,
        extra_glow: false,
    }];
    let field = WaveField::new(&configs);
    assert_eq!(field.get(0).unwrap().color, Rgba::new(255, 255, 255, 1.0));
    assert!(field.get(1).is_none());
}
