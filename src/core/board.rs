//! Status board: one display row per person for a given day.

use crate::core::status::{derive_status, elapsed_label, lunch_info};
use crate::models::person::Person;
use crate::models::session::WorkSession;
use crate::models::view::SessionView;
use crate::utils::time::hhmm;
use chrono::{NaiveDate, NaiveTime};
use std::collections::HashMap;

pub fn build_board(
    people: &[Person],
    sessions: &[WorkSession],
    date: NaiveDate,
    now: NaiveTime,
) -> Vec<SessionView> {
    let by_person: HashMap<i64, &WorkSession> = sessions
        .iter()
        .filter(|s| s.date == date)
        .map(|s| (s.person_id, s))
        .collect();

    let mut sorted: Vec<&Person> = people.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));

    sorted
        .into_iter()
        .map(|p| {
            let session = by_person
                .get(&p.id)
                .map(|s| (*s).clone())
                .unwrap_or_else(|| WorkSession::blank(p.id, date));
            to_view(p, &session, now)
        })
        .collect()
}

fn to_view(person: &Person, session: &WorkSession, now: NaiveTime) -> SessionView {
    let status = derive_status(session);

    SessionView {
        person_id: person.id,
        person_name: person.name.clone(),
        date: session.date,
        status,
        status_label: status.label().to_string(),
        elapsed: elapsed_label(session, now),
        lunch_info: lunch_info(session),
        start: session.actual_start.map(hhmm),
        end: session.actual_end.map(hhmm),
    }
}
