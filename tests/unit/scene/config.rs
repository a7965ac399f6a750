use super::*;

#[test]
fn defaults_match_documented_values() {
    let cfg = SceneConfig::default();
    assert_eq!(cfg.width, 1600);
    assert_eq!(cfg.height, 900);
    assert_eq!(cfg.seed, 1);
    assert_eq!(cfg.padding, 32.0);
    assert_eq!(cfg.palette, Palette::default());
    cfg.validate().unwrap();
}

#[test]
fn empty_json_object_is_all_defaults() {
    let cfg = SceneConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, SceneConfig::default());
}

#[test]
fn json_overrides_individual_options() {
    let cfg = SceneConfig::from_json_str(r#"{ "seed": 441, "width": 800, "padding": 16 }"#)
        .unwrap();
    assert_eq!(cfg.seed, 441);
    assert_eq!(cfg.width, 800);
    assert_eq!(cfg.height, 900);
    assert_eq!(cfg.padding, 16.0);
}

#[test]
fn json_rejects_partial_palette() {
    let err = SceneConfig::from_json_str(r##"{ "palette": { "sky_base": "#000000" } }"##)
        .unwrap_err();
    assert!(matches!(err, GlassCityError::Serde(_)));
    assert!(err.to_string().contains("missing field"));
}

#[test]
fn json_rejects_unknown_keys() {
    assert!(SceneConfig::from_json_str(r#"{ "sede": 3 }"#).is_err());
}

#[test]
fn validate_rejects_bad_geometry() {
    let mut cfg = SceneConfig::default();
    cfg.width = 0;
    assert!(cfg.validate().is_err());

    let mut cfg = SceneConfig::default();
    cfg.padding = -1.0;
    assert!(cfg.validate().is_err());

    let mut cfg = SceneConfig::default();
    cfg.padding = f64::NAN;
    assert!(cfg.validate().is_err());

    let mut cfg = SceneConfig::default();
    cfg.padding = 800.0;
    assert!(cfg.validate().is_err());
}

#[test]
fn builder_sets_fields_and_validates() {
    let cfg = SceneConfig::builder()
        .seed(333)
        .size(1200, 500)
        .padding(0.0)
        .build()
        .unwrap();
    assert_eq!(cfg.seed, 333);
    assert_eq!((cfg.width, cfg.height), (1200, 500));
    assert_eq!(cfg.padding, 0.0);

    assert!(SceneConfig::builder().size(0, 10).build().is_err());
}

#[test]
fn from_path_reports_missing_file() {
    let err = SceneConfig::from_path(Path::new("target/does-not-exist/scene.json")).unwrap_err();
    assert!(err.to_string().contains("read scene config"));
}

#[test]
fn read_path_defers_geometry_checks() {
    let dir = std::env::temp_dir().join("glasscity_config_unit");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("wide_padding.json");
    std::fs::write(&path, r#"{ "padding": 900 }"#).unwrap();

    assert!(matches!(
        SceneConfig::from_path(&path),
        Err(GlassCityError::Validation(_))
    ));

    let mut cfg = SceneConfig::read_path(&path).unwrap();
    assert_eq!(cfg.padding, 900.0);
    cfg.width = 4000;
    cfg.validate().unwrap();

    std::fs::write(&path, r#"{ "padding": "wide" }"#).unwrap();
    assert!(matches!(
        SceneConfig::read_path(&path),
        Err(GlassCityError::Serde(_))
    ));
}
