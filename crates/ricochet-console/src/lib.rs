//! Colorful console output for solver progress.
//!
//! Provides a custom `tracing` layer that formats the solver's structured
//! events with colors and thousand separators.
//!
//! ## Log levels
//!
//! - **INFO**: solve start/end and per-level progress
//! - **DEBUG**: shard and frontier detail

use std::io::{self, Write};
use std::sync::OnceLock;

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes the solver console output.
///
/// Safe to call multiple times - only the first call has effect. Prints
/// the banner and installs the tracing subscriber; `RUST_LOG` overrides
/// the default filter.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter = EnvFilter::builder()
            .with_default_directive("ricochet_solver=info".parse().unwrap())
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(ConsoleLayer)
            .try_init();
    });
}

fn print_banner() {
    let banner = r#"
 ____  _                _          _
|  _ \(_) ___ ___   ___| |__   ___| |_
| |_) | |/ __/ _ \ / __| '_ \ / _ \ __|
|  _ <| | (_| (_) | (__| | | |  __/ |_
|_| \_\_|\___\___/ \___|_| |_|\___|\__|
"#;

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(
        stdout,
        "{}",
        format!("        v{VERSION} - Ricochet Robots solver\n")
            .bright_white()
            .bold()
    );
    let _ = stdout.flush();
}

/// A tracing layer that renders solver events.
pub struct ConsoleLayer;

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("ricochet") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{output}");
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    goal: Option<String>,
    level: Option<u64>,
    frontier: Option<u64>,
    robots: Option<u64>,
    workers: Option<u64>,
    max_depth: Option<u64>,
    moves: Option<u64>,
    num_calc_move: Option<u64>,
    duration_ms: Option<u64>,
    solved: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{value:?}");
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "goal" => self.goal = Some(s.trim_matches('"').to_string()),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "level" => self.level = Some(value),
            "frontier" => self.frontier = Some(value),
            "robots" => self.robots = Some(value),
            "workers" => self.workers = Some(value),
            "max_depth" => self.max_depth = Some(value),
            "moves" => self.moves = Some(value),
            "num_calc_move" => self.num_calc_move = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "solved" {
            self.solved = Some(value);
        }
    }
}

fn format_event(visitor: &EventVisitor) -> String {
    let Some(event) = visitor.event.as_deref() else {
        return String::new();
    };

    match event {
        "solve_start" => format!(
            "{} target {} | {} robots | {} workers | depth limit {}",
            "SOLVING".bright_green(),
            visitor.goal.as_deref().unwrap_or("?").bright_yellow(),
            visitor.robots.unwrap_or(0),
            visitor.workers.unwrap_or(0),
            visitor.max_depth.unwrap_or(0),
        ),
        "level" => format!(
            "  level {:>2} | frontier {}",
            visitor.level.unwrap_or(0).bright_cyan(),
            count(visitor.frontier).bright_white(),
        ),
        "solve_end" => {
            let verdict = if visitor.solved.unwrap_or(false) {
                format!("solved in {} moves", visitor.moves.unwrap_or(0))
                    .bright_green()
                    .to_string()
            } else {
                "no solution within depth bound".bright_red().to_string()
            };
            format!(
                "{verdict} | {} states | {} ms",
                count(visitor.num_calc_move).bright_white(),
                visitor.duration_ms.unwrap_or(0),
            )
        }
        _ => String::new(),
    }
}

fn count(value: Option<u64>) -> String {
    value.unwrap_or(0).to_formatted_string(&Locale::en)
}
