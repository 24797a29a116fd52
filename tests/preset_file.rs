use std::io::Write;

use lexilearn_a11y as lexi;
use lexi::{A11yError, FontFamily, Mode, ProfileEngine, SessionPreset};

#[test]
fn test_load_preset_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"mode":"dyslexia","font":{{"fontFamily":"Comic Sans MS","lineHeight":3.0}}}}"#
    )
    .unwrap();

    let preset = SessionPreset::load(file.path()).unwrap();
    let mut engine = ProfileEngine::new();
    preset.apply_to(&mut engine);

    assert_eq!(engine.mode(), Mode::Dyslexia);
    assert_eq!(engine.font_settings().font_family, FontFamily::ComicSansMs);
    assert_eq!(engine.font_settings().line_height, 2.5);
}

#[test]
fn test_missing_preset_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = SessionPreset::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, A11yError::Io(_)));
}
