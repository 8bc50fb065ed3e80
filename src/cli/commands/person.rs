use crate::cli::parser::{Commands, PersonAction};
use crate::config::Config;
use crate::db::log::audit;
use crate::db::people::{add_person, list_people};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Person { action } = cmd {
        let pool = super::open_pool(cfg)?;

        match action {
            PersonAction::Add { name } => {
                let person = add_person(&pool.conn, name)?;
                audit(
                    &pool.conn,
                    "person_add",
                    &person.name,
                    &format!("Registered person #{}", person.id),
                );
                success(format!("Added {} (id {}).", person.name, person.id));
            }
            PersonAction::List => {
                let people = list_people(&pool.conn)?;
                if people.is_empty() {
                    info("No mobilographers registered yet.");
                    return Ok(());
                }

                let mut table = Table::new(
                    vec![Column::new("Id"), Column::new("Name"), Column::new("Since")],
                    &cfg.separator_char,
                );
                for p in people {
                    let since = p.created_at.get(..10).unwrap_or(&p.created_at).to_string();
                    table.add_row(vec![p.id.to_string(), p.name, since]);
                }
                print!("{}", table.render());
            }
        }
    }

    Ok(())
}
