//! Groups Example - Horizontal packing and scrolling
//!
//! Each row packs a label next to its button. The list is long enough to
//! scroll: move focus down and the view follows it.
//!
//! Set `SPARK_LOG=debug` to log to stderr.
//!
//! Run with: cargo run --example groups

use spark_immediate::run;

const SETTINGS: [&str; 12] = [
    "Sound", "Music", "Subtitles", "Vibration", "Autosave", "Hints", "Tutorial", "Telemetry",
    "Fullscreen", "V-Sync", "Dark mode", "Large text",
];

fn init_logging() {
    if std::env::var_os("SPARK_LOG").is_none() {
        return;
    }
    let filter = tracing_subscriber::EnvFilter::try_from_env("SPARK_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();

    let mut enabled = [false; SETTINGS.len()];

    let result = run(|ui| {
        ui.begin("Settings");

        ui.text("Toggle a setting with Enter. Rows wrap when the terminal is narrow.");
        ui.separation(Some(40));

        for (name, on) in SETTINGS.iter().zip(enabled.iter_mut()) {
            ui.begin_group();
            ui.text(format!("{name:<12}"));
            if ui.button(if *on { "on " } else { "off" }) {
                *on = !*on;
            }
            ui.end_group();
        }

        ui.spacing();
        let count = enabled.iter().filter(|&&on| on).count();
        ui.text(format!("{count} of {} enabled", SETTINGS.len()));
        ui.break_line();

        if ui.button("Quit") {
            ui.quit();
        }

        ui.end();
    });

    if let Err(e) = result {
        eprintln!("groups: {e}");
        std::process::exit(1);
    }
}
