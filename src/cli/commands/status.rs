use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::board::build_board;
use crate::db::people::list_people;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::view::SessionView;
use crate::store::SessionStore;
use crate::ui::board::render_board;
use crate::ui::messages::{header, info};
use crate::utils::{date, time};
use chrono::{NaiveDate, NaiveTime};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { date, at, json } = cmd {
        let day = date::resolve_date(date.as_ref())?;
        let now = time::resolve_at(at.as_ref())?;

        let pool = super::open_pool(cfg)?;
        let views = load_board(&pool, day, now)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&views)?);
        } else {
            print_board(&views, day, cfg);
        }
    }
    Ok(())
}

/// Read people and the day's sessions and project them for display.
pub(crate) fn load_board(pool: &DbPool, day: NaiveDate, now: NaiveTime) -> AppResult<Vec<SessionView>> {
    let people = list_people(&pool.conn)?;
    let sessions = pool.sessions_for_date(day)?;
    Ok(build_board(&people, &sessions, day, now))
}

pub(crate) fn print_board(views: &[SessionView], day: NaiveDate, cfg: &Config) {
    header(format!("Status board {}", day));
    if views.is_empty() {
        info("No mobilographers registered. Add one with `mobilog person add NAME`.");
        return;
    }
    print!("{}", render_board(views, &cfg.separator_char));
}
