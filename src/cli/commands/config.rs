use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{error, success, warning};
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    else {
        return Ok(());
    };

    let path = Config::config_file();

    if *print_config {
        println!("📄 Current configuration ({}):\n", path.display());
        println!("{}", serde_yaml::to_string(cfg)?);
    }

    if *edit_config {
        if !path.exists() {
            cfg.save_to(&path)?;
        }

        let fallback = fallback_editor(
            std::env::var("EDITOR").ok(),
            std::env::var("VISUAL").ok(),
        );
        let chosen = editor.clone().unwrap_or_else(|| fallback.clone());

        if run_editor(&chosen, &path) {
            success(format!("Configuration edited using '{}'", chosen));
        } else if chosen != fallback {
            warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                chosen, fallback
            ));
            if run_editor(&fallback, &path) {
                success(format!("Configuration edited using '{}'", fallback));
            } else {
                error(format!("Failed to edit configuration using '{}'", fallback));
            }
        } else {
            error(format!("Failed to edit configuration using '{}'", chosen));
        }
    }

    Ok(())
}

/// `$EDITOR`, then `$VISUAL`, then the platform default. Blank values are skipped.
fn fallback_editor(editor: Option<String>, visual: Option<String>) -> String {
    editor
        .into_iter()
        .chain(visual)
        .find(|e| !e.trim().is_empty())
        .unwrap_or_else(|| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

fn run_editor(editor: &str, path: &Path) -> bool {
    Command::new(editor)
        .arg(path)
        .status()
        .is_ok_and(|s| s.success())
}
