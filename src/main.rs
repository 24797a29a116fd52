use std::path::PathBuf;

use clap::Parser;
use serde_json::json;
use tracing::Level;

use lexilearn_a11y::{
    mode_style, parse_assignment, render_text, FontSettingsPatch, Lexicon, Mode, ProfileEngine,
    SessionPreset, Toast, ToastNotifier,
};

/// Compute reading-support styles for a session and print them as JSON.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// JSON preset with the starting mode, profile and font settings
    #[arg(long)]
    preset: Option<PathBuf>,
    /// Reading-support mode: default, dyslexia, adhd or adaptive
    #[arg(long)]
    mode: Option<Mode>,
    /// Sensitivity toggle, e.g. `textPatterns=true` (repeatable)
    #[arg(long = "set", value_name = "FLAG=BOOL", value_parser = parse_assignment)]
    flags: Vec<(String, String)>,
    /// Font setting, e.g. `fontSize=120` (repeatable)
    #[arg(long = "font", value_name = "KEY=VALUE", value_parser = parse_assignment)]
    font: Vec<(String, String)>,
    /// Text to render with the resulting style
    #[arg(long)]
    text: Option<String>,
    /// Fire a sensory break after applying the settings
    #[arg(long)]
    sensory_break: bool,
    /// Include the inline CSS in the output
    #[arg(long)]
    css: bool,
    /// More logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

struct StderrNotifier;

impl ToastNotifier for StderrNotifier {
    fn notify(&self, toast: &Toast) {
        eprintln!("[{}] {}", toast.title, toast.description);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    // Parse CLI arguments and set up logging on stderr.
    let args = Args::parse();
    init_logging(args.verbose);

    // Breaks are reported as toasts on stderr.
    let mut engine = ProfileEngine::new();
    engine.subscribe_sensory_break(StderrNotifier);

    // Seed the session from a preset file.
    if let Some(path) = args.preset.as_ref() {
        match SessionPreset::load(path) {
            Ok(preset) => preset.apply_to(&mut engine),
            Err(e) => {
                eprintln!("Invalid preset {}: {e}", path.display());
                std::process::exit(1);
            }
        }
    }

    // Explicit flags override the preset.
    if let Some(mode) = args.mode {
        engine.set_mode(mode);
    }

    for (field, raw) in &args.flags {
        match raw.parse::<bool>() {
            Ok(value) => engine.update_sensitivity_profile(field, value),
            Err(_) => {
                eprintln!("Invalid value for {field}: expected true or false, got `{raw}`");
                std::process::exit(1);
            }
        }
    }

    // Collect font changes into one patch, as the panel's Apply button does.
    let mut patch = FontSettingsPatch::default();
    for (key, raw) in &args.font {
        patch.set_field(key, raw);
    }
    if !patch.is_empty() {
        engine.apply_font_settings(&patch);
    }

    if args.sensory_break {
        engine.trigger_sensory_break();
    }

    // Build the output document.
    let style = engine.style_descriptor();
    let mut out = json!({
        "session": engine.snapshot(),
        "tabStyle": mode_style(engine.mode()),
        "showsAdaptiveControls": engine.mode().shows_adaptive_controls(),
        "style": style,
    });
    if args.css {
        out["css"] = json!(style.css());
    }
    if let Some(text) = args.text.as_deref() {
        let rendered = render_text(text, &style, &Lexicon::builtin());
        out["text"] = json!({
            "plain": rendered.text(),
            "marked": rendered.marked("[", "]"),
            "highlights": rendered.highlights(),
        });
    }

    // Output result.
    match serde_json::to_string_pretty(&out) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Failed to encode output: {e}");
            std::process::exit(1);
        }
    }
}
