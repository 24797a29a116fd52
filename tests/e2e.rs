use lexilearn_a11y as lexi;
use lexi::{FontFamily, FontSettingsPatch, Mode, ProfileEngine};
use pretty_assertions::assert_eq;

#[test]
fn test_oversized_font_from_default_profile() {
    let mut engine = ProfileEngine::new();
    let out = engine.apply_font_settings(&FontSettingsPatch {
        font_size: Some(300.0),
        ..Default::default()
    });
    assert_eq!(out.font_size, 150);
    assert_eq!(out.font_family, FontFamily::Arial);
    assert_eq!(out.font_family.css_name(), "Arial");
}

#[test]
fn test_font_bounds() {
    let mut engine = ProfileEngine::new();
    let out = engine.apply_font_settings(&FontSettingsPatch {
        font_size: Some(10.0),
        letter_spacing: Some(0.5),
        line_height: Some(0.0),
        ..Default::default()
    });
    assert_eq!(out.font_size, 80);
    assert_eq!(out.letter_spacing, 0.2);
    assert_eq!(out.line_height, 1.0);
}

#[test]
fn test_adaptive_preferences_survive_mode_switch() {
    let mut engine = ProfileEngine::new();
    engine.set_mode(Mode::Adaptive);
    engine.update_sensitivity_profile("textPatterns", true);
    engine.update_sensitivity_profile("wordReplacement", true);

    engine.set_mode(Mode::Dyslexia);
    let dyslexia = engine.style_descriptor();
    assert!(!dyslexia.simplify_words);

    engine.set_mode(Mode::Adaptive);
    assert!(engine.profile().text_patterns);
    let adaptive = engine.style_descriptor();
    assert!(adaptive.highlight_patterns);
    assert!(adaptive.simplify_words);
}

#[test]
fn test_reading_session_renders_text() {
    let mut engine = ProfileEngine::new();
    engine.set_mode(Mode::Adaptive);
    engine.update_sensitivity_profile("wordReplacement", true);
    engine.update_sensitivity_profile("textPatterns", true);
    engine.update_sensitivity_profile("fontWeight", true);
    engine.apply_font_settings(&FontSettingsPatch {
        font_family: Some(FontFamily::OpenDyslexic),
        ..Default::default()
    });

    let style = engine.style_descriptor();
    assert!(style.css().contains("font-family: \"OpenDyslexic\""));
    assert!(style.css().contains("font-weight: 600"));

    let rendered = lexi::render_text("Demonstrate the photo", &style, &lexi::Lexicon::builtin());
    assert_eq!(rendered.marked("<", ">"), "Show the <ph>oto");
}

#[test]
fn test_default_descriptor_matches_fresh_engine() {
    for mode in Mode::all() {
        let mut engine = ProfileEngine::new();
        engine.set_mode(*mode);
        assert_eq!(engine.style_descriptor(), lexi::default_descriptor(*mode));
    }
}

#[test]
fn test_parse_assignment() {
    assert_eq!(
        lexi::parse_assignment(" fontSize = 120 ").unwrap(),
        ("fontSize".to_string(), "120".to_string())
    );
    assert!(lexi::parse_assignment("fontSize").is_err());
    assert!(lexi::parse_assignment("=1").is_err());
}
