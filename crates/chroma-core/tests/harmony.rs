use chroma_core::convert::{hex_to_rgb, rgb_to_hsl};
use chroma_core::harmony::{self, HarmonyOptions, RandomPaletteConfig};
use chroma_model::{HarmonyKind, Hsl, Rgb};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

#[test]
fn complementary_of_red_contains_cyan() {
    let set = harmony::generate(Rgb::new(255, 0, 0), HarmonyKind::Complementary);
    assert_eq!(set.len(), 5);
    assert_eq!(set.swatches[0].rgb, Rgb::new(255, 0, 0));
    let cyan = set
        .iter()
        .find(|swatch| swatch.hsl.h() == 180.0 && swatch.hsl.l() == 50.0)
        .expect("complement anchor");
    assert_eq!(cyan.rgb, Rgb::new(0, 255, 255));
}

#[test]
fn complementary_follows_offset_table() {
    let set = harmony::derive(Hsl::new(40.0, 80.0, 50.0), HarmonyKind::Complementary);
    let coords: Vec<_> = set.iter().map(|s| (s.hsl.h(), s.hsl.s(), s.hsl.l())).collect();
    assert_eq!(
        coords,
        vec![
            (40.0, 80.0, 50.0),
            (70.0, 80.0, 60.0),
            (220.0, 80.0, 50.0),
            (250.0, 80.0, 60.0),
            (220.0, 80.0, 40.0),
        ]
    );
}

#[test]
fn analogous_violet_end_to_end() {
    let base = hex_to_rgb("#A05AFF").unwrap();
    let base_hsl = rgb_to_hsl(base);
    assert!((base_hsl.s() - 100.0).abs() < 1e-9);
    assert!((base_hsl.l() - 67.6).abs() < 0.1);

    let set = harmony::generate(base, HarmonyKind::Analogous);
    assert_eq!(set.len(), 5);
    for (swatch, offset) in set.iter().zip([-30.0, -15.0, 0.0, 15.0, 30.0]) {
        assert!(hue_distance(swatch.hsl.h(), base_hsl.h() + offset) < 1e-9);
        assert_eq!(swatch.hsl.s(), base_hsl.s());
        let hex = swatch.rgb.to_hex();
        assert_eq!(hex.len(), 6);
        let reparsed = rgb_to_hsl(hex_to_rgb(&hex).unwrap());
        // 8-bit rounding moves the hue by well under a degree at this saturation
        assert!(hue_distance(reparsed.h(), swatch.hsl.h()) < 1.0, "{hex}");
    }
    assert_eq!(set.swatches[2].rgb, base);
}

#[test]
fn analogous_lightness_peaks_at_base() {
    let set = harmony::derive(Hsl::new(100.0, 50.0, 50.0), HarmonyKind::Analogous);
    let lightness: Vec<_> = set.iter().map(|s| s.hsl.l()).collect();
    assert_eq!(lightness, vec![40.0, 45.0, 50.0, 45.0, 40.0]);
}

#[test]
fn triadic_split_and_tetradic_hues() {
    let base = Hsl::new(30.0, 70.0, 50.0);
    assert_eq!(
        harmony::derive(base, HarmonyKind::Triadic).hues(),
        vec![30.0, 150.0, 270.0]
    );
    assert_eq!(
        harmony::derive(base, HarmonyKind::SplitComplementary).hues(),
        vec![30.0, 180.0, 240.0]
    );
    assert_eq!(
        harmony::derive(base, HarmonyKind::Tetradic).hues(),
        vec![30.0, 120.0, 210.0, 300.0]
    );
}

#[test]
fn triadic_dims_non_base_members() {
    let set = harmony::derive(Hsl::new(0.0, 60.0, 50.0), HarmonyKind::Triadic);
    let saturation: Vec<_> = set.iter().map(|s| s.hsl.s()).collect();
    assert_eq!(saturation, vec![60.0, 50.0, 50.0]);
}

#[test]
fn triadic_dimming_keeps_low_saturation_members_chromatic() {
    let set = harmony::derive(Hsl::new(0.0, 5.0, 50.0), HarmonyKind::Triadic);
    let saturation: Vec<_> = set.iter().map(|s| s.hsl.s()).collect();
    assert_eq!(saturation, vec![5.0, 2.5, 2.5]);

    let gray = harmony::derive(Hsl::new(90.0, 0.0, 40.0), HarmonyKind::Triadic);
    assert!(gray.iter().all(|s| s.hsl.s() == 0.0));
}

#[test]
fn monochromatic_keeps_hue() {
    let set = harmony::derive(Hsl::new(210.0, 60.0, 20.0), HarmonyKind::Monochromatic);
    assert!(set.iter().all(|s| s.hsl.h() == 210.0));
    let lightness: Vec<_> = set.iter().map(|s| s.hsl.l()).collect();
    assert_eq!(lightness, vec![0.0, 5.0, 20.0, 35.0, 50.0]);
}

#[test]
fn seeded_random_palette_is_exact_and_in_range() {
    let options = HarmonyOptions::default();
    let base = Rgb::new(1, 2, 3);
    let first = harmony::generate_with_rng(
        base,
        HarmonyKind::Random,
        &options,
        &mut StdRng::seed_from_u64(42),
    );
    let second = harmony::generate_with_rng(
        Rgb::new(200, 100, 0),
        HarmonyKind::Random,
        &options,
        &mut StdRng::seed_from_u64(42),
    );
    // the base color does not influence random palettes
    assert_eq!(first, second);
    assert_eq!(first.kind, HarmonyKind::Random);
    assert_eq!(first.len(), 5);
    for swatch in first.iter() {
        assert!((0.0..360.0).contains(&swatch.hsl.h()));
        assert!((60.0..=90.0).contains(&swatch.hsl.s()));
        assert!((45.0..=70.0).contains(&swatch.hsl.l()));
    }
    insta::assert_debug_snapshot!(first.to_hex(), @r#"
    [
        "4FCFE7",
        "48D384",
        "6B12E4",
        "F23834",
        "4FD97F",
    ]
    "#);
}

#[test]
fn different_seeds_give_different_palettes() {
    let config = RandomPaletteConfig::default();
    let a = harmony::random_palette(&config, &mut StdRng::seed_from_u64(1));
    let b = harmony::random_palette(&config, &mut StdRng::seed_from_u64(2));
    assert_ne!(a, b);
}

#[test]
fn random_count_is_configurable() {
    let options = HarmonyOptions {
        random: RandomPaletteConfig::default().with_count(8),
    };
    let set = harmony::generate_with_rng(
        Rgb::BLACK,
        HarmonyKind::Random,
        &options,
        &mut StdRng::seed_from_u64(3),
    );
    assert_eq!(set.len(), 8);
}
