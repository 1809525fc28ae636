use super::helpers::*;

use ombre::prelude::*;

#[test]
fn default_palette_has_ten_colors() {
    let palette = Palette::default();
    assert_eq!(palette.colors().len(), 10);
    assert!(palette.contains("#ff6a00"));
    assert!(palette.contains("#96c93d"));
    assert!(!palette.contains("#000000"));
}

#[test]
fn empty_palette_is_rejected() {
    assert!(matches!(Palette::new(Vec::new()), Err(ConfigError::EmptyPalette)));
}

#[test]
fn picks_always_come_from_palette() {
    let palette = Palette::new(vec!["#111111".into(), "#222222".into()]).unwrap();
    let mut rng = seeded_rng();
    for _ in 0..100 {
        assert!(palette.contains(palette.pick(&mut rng)));
    }
}

#[test]
fn single_color_palette_always_picks_it() {
    let palette = Palette::new(vec!["#abcdef".into()]).unwrap();
    let mut rng = seeded_rng();
    assert_eq!(palette.pick(&mut rng), "#abcdef");
}

#[test]
fn picks_cover_the_palette() {
    let palette = Palette::default();
    let mut rng = seeded_rng();
    let mut seen = std::collections::HashSet::new();
    for _ in 0..1000 {
        seen.insert(palette.pick(&mut rng).to_string());
    }
    assert_eq!(seen.len(), palette.colors().len());
}
