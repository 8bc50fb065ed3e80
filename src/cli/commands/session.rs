use crate::cli::parser::{Commands, LunchAction, SessionTarget};
use crate::config::Config;
use crate::core::session::SessionLogic;
use crate::db::log::audit;
use crate::db::people::resolve_person;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::{date, time};

#[derive(Clone, Copy)]
enum Action {
    CheckIn,
    CheckOut,
    LunchStart,
    LunchEnd,
}

impl Action {
    fn operation(&self) -> &'static str {
        match self {
            Action::CheckIn => "check_in",
            Action::CheckOut => "check_out",
            Action::LunchStart => "lunch_start",
            Action::LunchEnd => "lunch_end",
        }
    }
}

/// Handle `in`, `out` and `lunch start|end`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::In(target) => run(Action::CheckIn, target, cfg),
        Commands::Out(target) => run(Action::CheckOut, target, cfg),
        Commands::Lunch {
            action: LunchAction::Start(target),
        } => run(Action::LunchStart, target, cfg),
        Commands::Lunch {
            action: LunchAction::End(target),
        } => run(Action::LunchEnd, target, cfg),
        _ => Ok(()),
    }
}

fn run(action: Action, target: &SessionTarget, cfg: &Config) -> AppResult<()> {
    let day = date::resolve_date(target.date.as_ref())?;
    let at = time::resolve_at(target.at.as_ref())?;

    let mut pool = super::open_pool(cfg)?;
    let person = resolve_person(&pool.conn, &target.person)?;

    let session = match action {
        Action::CheckIn => SessionLogic::check_in(&mut pool, person.id, day, at)?,
        Action::CheckOut => SessionLogic::check_out(&mut pool, person.id, day, at)?,
        Action::LunchStart => SessionLogic::lunch_start(&mut pool, person.id, day, at)?,
        Action::LunchEnd => SessionLogic::lunch_end(&mut pool, person.id, day, at)?,
    };

    let clock = at.format(&cfg.time_format).to_string();
    let msg = match action {
        Action::CheckIn => format!("{} checked in at {} on {}.", person.name, clock, day),
        Action::CheckOut => format!(
            "{} checked out at {} on {} ({} h worked).",
            person.name,
            clock,
            day,
            session.actual_hours.unwrap_or_default()
        ),
        Action::LunchStart => format!("{} started lunch at {}.", person.name, clock),
        Action::LunchEnd => format!(
            "{} ended lunch at {} ({} min).",
            person.name,
            clock,
            session.lunch_duration_minutes.unwrap_or_default()
        ),
    };

    audit(&pool.conn, action.operation(), &person.name, &msg);
    success(msg);
    Ok(())
}
