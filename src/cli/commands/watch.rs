use super::status::{load_board, print_board};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::schedule::Ticker;
use crate::errors::AppResult;
use crate::ui::messages::{error, info};
use crate::utils::{date, time};
use std::ops::ControlFlow;
use std::time::Duration;

/// Show the board and re-read it every interval. The refresh task is owned
/// here and cancelled when the command ends.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Watch { interval, ticks } = cmd {
        let secs = interval.unwrap_or(cfg.refresh_interval_secs).max(1);
        let pool = super::open_pool(cfg)?;
        let limit = *ticks;
        let task_cfg = cfg.clone();

        info(format!("Refreshing every {}s (Ctrl+C to stop).", secs));

        let mut done = 0usize;
        let ticker = Ticker::start(Duration::from_secs(secs), move || {
            let day = date::today();
            match load_board(&pool, day, time::now()) {
                Ok(views) => print_board(&views, day, &task_cfg),
                // polling is best effort: report and try again next tick
                Err(e) => error(format!("Refresh failed: {}", e)),
            }

            done += 1;
            match limit {
                Some(n) if done >= n => ControlFlow::Break(()),
                _ => ControlFlow::Continue(()),
            }
        });

        ticker.join();
    }
    Ok(())
}
