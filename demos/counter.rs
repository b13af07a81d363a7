//! Counter Example - The smallest useful program
//!
//! Text, a counter and three buttons. Arrows or Tab move focus, Enter or
//! Space activates, Ctrl+C quits.
//!
//! Set `SPARK_LOG=debug` to log to stderr.
//!
//! Run with: cargo run --example counter

use spark_immediate::run;

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

    let mut counter: i64 = 0;

    let result = run(|ui| {
        ui.begin("Counter");

        ui.text("Hello from spark-immediate");
        ui.text(format!("Counter: {counter}"));
        ui.spacing();

        if ui.button("Increment") {
            counter += 1;
        }
        if ui.button("Decrement") {
            counter -= 1;
        }

        ui.spacing();
        ui.separation(None);
        ui.break_line();

        if ui.button("Quit") {
            ui.quit();
        }

        ui.end();
    });

    if let Err(e) = result {
        eprintln!("counter: {e}");
        std::process::exit(1);
    }
}
