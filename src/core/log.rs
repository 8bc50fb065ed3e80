use crate::db::log::{LogEntry, load_log};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use ansi_term::Colour;
use regex::Regex;

/// Colour of an audit operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "check_in" => Colour::Green,
        "check_out" => Colour::Red,
        "lunch_start" | "lunch_end" => Colour::Yellow,
        "person_add" => Colour::Cyan,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

const MAX_OP_WIDTH: usize = 60;

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let ansi = Regex::new(r"\x1B\[[0-9;]*[mK]").map_err(|e| AppError::Config(e.to_string()))?;

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);
        let op_w = entries
            .iter()
            .map(|e| op_target(e).len())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);

        println!("📜 Internal log:\n");

        for entry in &entries {
            let colored = render_op(entry, &ansi);
            let visible = ansi.replace_all(&colored, "").chars().count();
            let padding = " ".repeat(op_w.saturating_sub(visible));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                entry.id,
                entry.date,
                colored,
                padding,
                entry.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}

fn op_target(entry: &LogEntry) -> String {
    if entry.target.is_empty() {
        entry.operation.clone()
    } else {
        format!("{} ({})", entry.operation, entry.target)
    }
}

/// Operation painted in its colour, target plain, truncated to the column width.
fn render_op(entry: &LogEntry, ansi: &Regex) -> String {
    let plain = ansi.replace_all(&op_target(entry), "").into_owned();

    let visible = if plain.chars().count() > MAX_OP_WIDTH {
        let mut s: String = plain.chars().take(MAX_OP_WIDTH - 3).collect();
        s.push_str("...");
        s
    } else {
        plain
    };

    let color = color_for_operation(&entry.operation);
    match visible.split_once(' ') {
        Some((op, rest)) => format!("{} {}", color.paint(op), rest),
        None => color.paint(visible.as_str()).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(op: &str, target: &str) -> LogEntry {
        LogEntry {
            id: 1,
            date: "2025-03-10T09:00:00+00:00".into(),
            operation: op.into(),
            target: target.into(),
            message: "msg".into(),
        }
    }

    #[test]
    fn long_targets_are_truncated() {
        let ansi = Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
        let e = entry("check_in", &"x".repeat(100));
        let rendered = render_op(&e, &ansi);
        let visible = ansi.replace_all(&rendered, "").into_owned();
        assert_eq!(visible.chars().count(), MAX_OP_WIDTH);
        assert!(visible.ends_with("..."));
    }

    #[test]
    fn op_without_target_is_bare() {
        assert_eq!(op_target(&entry("init", "")), "init");
        assert_eq!(op_target(&entry("check_out", "Aziz")), "check_out (Aziz)");
    }
}
