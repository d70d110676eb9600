//! Colorful console output for solver events.
//!
//! Provides a `tracing` layer that formats the solver's lifecycle events.
//! Available with the `console` feature.

use std::io::{self, Write};
use std::sync::OnceLock;

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

const DEFAULT_FILTER: &str = "wardrobe_solver=info";

/// Initializes the solver console output.
///
/// Safe to call multiple times; only the first call has effect. `RUST_LOG`
/// overrides the default `wardrobe_solver=info` filter.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // Another global subscriber may already be installed.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SolverConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats solver events with colors.
pub struct SolverConsoleLayer;

impl<S: Subscriber> Layer<S> for SolverConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with("wardrobe_solver") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_solver_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    phase: Option<String>,
    reason: Option<String>,
    score: Option<String>,
    error: Option<String>,
    phase_index: Option<u64>,
    items: Option<u64>,
    seed: Option<u64>,
    time_limit_ms: Option<u64>,
    duration_ms: Option<u64>,
    steps: Option<u64>,
    step: Option<u64>,
    speed: Option<u64>,
    moves_evaluated: Option<u64>,
    runs: Option<u64>,
    best_seed: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value).trim_matches('"').to_string();
        self.record_text(field, s);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.record_text(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "phase_index" => self.phase_index = Some(value),
            "items" => self.items = Some(value),
            "seed" => self.seed = Some(value),
            "time_limit_ms" => self.time_limit_ms = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "steps" => self.steps = Some(value),
            "step" => self.step = Some(value),
            "speed" => self.speed = Some(value),
            "moves_evaluated" => self.moves_evaluated = Some(value),
            "runs" => self.runs = Some(value),
            "best_seed" => self.best_seed = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }
}

impl EventVisitor {
    fn record_text(&mut self, field: &Field, value: String) {
        match field.name() {
            "event" => self.event = Some(value),
            "phase" => self.phase = Some(value),
            "reason" => self.reason = Some(value),
            "score" => self.score = Some(value),
            "error" => self.error = Some(value),
            _ => {}
        }
    }
}

fn format_solver_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "solve_start" => format_solve_start(v),
        "phase_start" => format_phase_start(v),
        "phase_end" => format_phase_end(v),
        "new_best" => format_new_best(v),
        "solve_end" => format_solve_end(v),
        "solve_failed" => format_solve_failed(v),
        "batch_end" => format_batch_end(v),
        _ => String::new(),
    }
}

fn format_solve_start(v: &EventVisitor) -> String {
    format!(
        "{} {} item count ({}), time limit ({}), seed ({})",
        "INFO".bright_green(),
        "[Solver]".bright_cyan(),
        v.items.unwrap_or(0).to_formatted_string(&Locale::en).bright_yellow(),
        format_duration_ms(v.time_limit_ms.unwrap_or(0)).yellow(),
        v.seed.unwrap_or(0).bright_black(),
    )
}

fn format_phase_start(v: &EventVisitor) -> String {
    let phase = v.phase.as_deref().unwrap_or("Unknown");
    format!(
        "{} {} {} phase ({}) started",
        "INFO".bright_green(),
        format!("[{}]", phase).bright_cyan(),
        phase.white().bold(),
        v.phase_index.unwrap_or(0).yellow(),
    )
}

fn format_phase_end(v: &EventVisitor) -> String {
    let phase = v.phase.as_deref().unwrap_or("Unknown");
    format!(
        "{} {} {} phase ({}) ended: time spent ({}), score ({}), speed ({}/sec), step total ({})",
        "INFO".bright_green(),
        format!("[{}]", phase).bright_cyan(),
        phase.white().bold(),
        v.phase_index.unwrap_or(0).yellow(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        format_score(v.score.as_deref().unwrap_or("N/A")),
        v.speed
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_magenta(),
        v.steps.unwrap_or(0).to_formatted_string(&Locale::en).white(),
    )
}

fn format_new_best(v: &EventVisitor) -> String {
    format!(
        "    {} Step {:>9} | {}",
        "->".bright_blue(),
        v.step.unwrap_or(0).to_formatted_string(&Locale::en),
        format_score(v.score.as_deref().unwrap_or("N/A")),
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    let score = v.score.as_deref().unwrap_or("N/A");
    let status = if score.starts_with("0hard") {
        "FEASIBLE".bright_green().bold().to_string()
    } else {
        "INFEASIBLE".bright_red().bold().to_string()
    };
    format!(
        "{} {} Solving ended ({}): best score ({}) {}, time spent ({}), moves evaluated ({})",
        "INFO".bright_green(),
        "[Solver]".bright_cyan(),
        v.reason.as_deref().unwrap_or("unknown"),
        format_score(score),
        status,
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        v.moves_evaluated
            .unwrap_or(0)
            .to_formatted_string(&Locale::en),
    )
}

fn format_solve_failed(v: &EventVisitor) -> String {
    format!(
        "{} {} {}",
        "WARN".bright_red(),
        "[Solver]".bright_cyan(),
        v.error.as_deref().unwrap_or("unknown error"),
    )
}

fn format_batch_end(v: &EventVisitor) -> String {
    format!(
        "{} {} Batch of {} runs ended: best score ({}) from seed ({})",
        "INFO".bright_green(),
        "[Batch]".bright_cyan(),
        v.runs.unwrap_or(0),
        format_score(v.score.as_deref().unwrap_or("N/A")),
        v.best_seed.unwrap_or(0).bright_black(),
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        format!("{}m {}s", ms / 60_000, (ms % 60_000) / 1000)
    }
}

/// Colors a "-Nhard/Msoft" score: red while hard constraints are violated.
fn format_score(score: &str) -> String {
    let Some((hard, soft)) = score.split_once('/') else {
        return score.white().to_string();
    };
    let hard_str = if hard.starts_with('-') {
        hard.bright_red().to_string()
    } else {
        hard.bright_green().to_string()
    };
    format!("{}/{}", hard_str, soft.white())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration_ms(250), "250ms");
        assert_eq!(format_duration_ms(1500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_format_score_keeps_text() {
        let formatted = format_score("-3000hard/18soft");
        assert!(formatted.contains("-3000hard"));
        assert!(formatted.contains("18soft"));
        assert!(format_score("N/A").contains("N/A"));
        assert!(format_score("plain").contains("plain"));
    }

    #[test]
    fn test_unknown_events_are_silent() {
        let visitor = EventVisitor {
            event: Some("step".into()),
            ..EventVisitor::default()
        };
        assert!(format_solver_event(&visitor).is_empty());
        assert!(format_solver_event(&EventVisitor::default()).is_empty());
    }

    #[test]
    fn test_phase_end_line() {
        let visitor = EventVisitor {
            event: Some("phase_end".into()),
            phase: Some("Local Search".into()),
            phase_index: Some(1),
            duration_ms: Some(2_000),
            steps: Some(123_456),
            speed: Some(61_728),
            score: Some("0hard/40soft".into()),
            ..EventVisitor::default()
        };
        let line = format_solver_event(&visitor);
        assert!(line.contains("Local Search"));
        assert!(line.contains("2.00s"));
        assert!(line.contains("123,456"));
        assert!(line.contains("0hard"));
    }

    #[test]
    fn test_solve_end_feasibility() {
        let mut visitor = EventVisitor {
            event: Some("solve_end".into()),
            reason: Some("converged".into()),
            score: Some("0hard/40soft".into()),
            ..EventVisitor::default()
        };
        assert!(format_solver_event(&visitor).contains("FEASIBLE"));
        visitor.score = Some("-3000hard/18soft".into());
        assert!(format_solver_event(&visitor).contains("INFEASIBLE"));
    }

    #[test]
    fn test_batch_end_line() {
        let visitor = EventVisitor {
            event: Some("batch_end".into()),
            runs: Some(4),
            best_seed: Some(42),
            score: Some("0hard/52soft".into()),
            ..EventVisitor::default()
        };
        let line = format_solver_event(&visitor);
        assert!(line.contains("4 runs"));
        assert!(line.contains("42"));
        assert!(line.contains("52soft"));
    }

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
        tracing::info!(target: "wardrobe_solver::test", event = "phase_start", phase = "Local Search");
    }
}
