//! Terminal status line display task

use std::{io::Write, sync::Arc};
use tracing::{info, warn};

use crate::{
    state::AppState,
    timer::{TimerSnapshot, TimerState},
};

/// Width of the rendered progress bar in cells
pub const BAR_WIDTH: usize = 20;

/// Background task that redraws a status line on stdout after every snapshot
pub async fn display_task(state: Arc<AppState>) {
    info!("Starting display task");

    let mut timer_rx = state.subscribe();

    loop {
        let line = render_status_line(&timer_rx.borrow_and_update(), BAR_WIDTH);
        if let Err(e) = draw(&line) {
            warn!("Failed to draw status line: {}", e);
        }

        if timer_rx.changed().await.is_err() {
            info!("Timer update channel closed, stopping display task");
            return;
        }
    }
}

/// Overwrite the current terminal line
fn draw(line: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    write!(stdout, "\r\x1b[2K{}", line)?;
    stdout.flush()
}

/// Render a snapshot as `{label} {MM:SS} [####----] {pct}% sessions: N`
pub fn render_status_line(snapshot: &TimerSnapshot, width: usize) -> String {
    let label = match snapshot.phase {
        TimerState::Stopped => "Ready to start",
        TimerState::Working => "Working",
        TimerState::OnBreak => "Break time! Look 20 feet away",
        TimerState::Paused => "Paused",
    };

    let filled = ((snapshot.progress * width as f64).round() as usize).min(width);
    let bar = format!("{}{}", "#".repeat(filled), "-".repeat(width - filled));

    format!(
        "{} {} [{}] {:>3}% sessions: {} saved: {}",
        label,
        snapshot.display_time,
        bar,
        (snapshot.progress * 100.0).round() as u64,
        snapshot.sessions_completed,
        snapshot.time_saved(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(phase: TimerState, remaining_secs: u64, progress: f64) -> TimerSnapshot {
        TimerSnapshot {
            phase,
            remaining_secs,
            display_time: crate::timer::format_mm_ss(remaining_secs),
            progress,
            sessions_completed: 3,
            work_secs: 1200,
            break_secs: 20,
        }
    }

    #[test]
    fn renders_working_line() {
        let line = render_status_line(&snapshot(TimerState::Working, 600, 0.5), 10);
        assert_eq!(line, "Working 10:00 [#####-----]  50% sessions: 3 saved: 1h 0m");
    }

    #[test]
    fn renders_empty_and_full_bars() {
        let stopped = render_status_line(&snapshot(TimerState::Stopped, 1200, 0.0), 4);
        assert!(stopped.starts_with("Ready to start 20:00 [----]"));

        let full = render_status_line(&snapshot(TimerState::OnBreak, 0, 1.0), 4);
        assert!(full.contains("[####] 100%"));
    }
}
