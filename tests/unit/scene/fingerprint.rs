use super::*;
use crate::scene::{compose::generate, config::SceneConfig};

#[test]
fn fingerprint_is_stable_for_same_config() {
    let cfg = SceneConfig::with_seed(101);
    let a = fingerprint_scene(&generate(&cfg).unwrap());
    let b = fingerprint_scene(&generate(&cfg).unwrap());
    assert_eq!(a, b);
}

#[test]
fn fingerprint_tracks_seed_and_size() {
    let base = fingerprint_scene(&generate(&SceneConfig::with_seed(101)).unwrap());
    let other_seed = fingerprint_scene(&generate(&SceneConfig::with_seed(102)).unwrap());
    assert_ne!(base, other_seed);

    let cfg = SceneConfig::builder().seed(101).size(1200, 900).build().unwrap();
    let other_size = fingerprint_scene(&generate(&cfg).unwrap());
    assert_ne!(base, other_size);
}

#[test]
fn hex_is_32_lowercase_digits() {
    let fp = SceneFingerprint {
        hi: 0xAB,
        lo: u64::MAX,
    };
    let hex = fp.to_hex();
    assert_eq!(hex.len(), 32);
    assert_eq!(hex, "00000000000000abffffffffffffffff");
}
