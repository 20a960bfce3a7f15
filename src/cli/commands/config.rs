use crate::cli::parser::{Cli, Commands};
use crate::config::{self, Config};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
        frequency,
    } = &cli.command
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!(
                "{}",
                serde_yaml::to_string(cfg).unwrap_or_else(|_| "<unreadable>".to_string())
            );
        }

        // ---- CHECK ----
        if *check {
            let missing = config::migrate::missing_fields();
            if missing.is_empty() {
                success("Configuration file is up to date.");
            } else {
                warning(format!(
                    "Configuration file is missing fields: {}",
                    missing.join(", ")
                ));
                println!("Run `rchorelog config --migrate` to add them.");
            }
        }

        // ---- MIGRATE ----
        if *migrate {
            let pool = DbPool::new(&cfg.database)?;
            config::migrate::migrate_add_rotation_params(&pool.conn)?;
            success("Configuration migrations completed.");
        }

        // ---- SET ROTATION FREQUENCY ----
        if let Some(freq) = frequency {
            let mut updated = Config::load();
            updated.set_cleaning_frequency(*freq, !cli.test)?;
            success(format!(
                "Cleaning rotation frequency set to every {} day(s).",
                freq
            ));
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            let requested_editor = editor.clone();

            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let editor_to_use = requested_editor.unwrap_or_else(|| default_editor.clone());

            let status = Command::new(&editor_to_use).arg(&path).status();

            match status {
                Ok(s) if s.success() => {
                    println!(
                        "✅ Configuration file edited successfully using '{}'",
                        editor_to_use
                    );
                }
                Ok(_) | Err(_) => {
                    eprintln!(
                        "⚠️  Editor '{}' not available, falling back to '{}'",
                        editor_to_use, default_editor
                    );

                    let fallback_status = Command::new(&default_editor).arg(&path).status();
                    match fallback_status {
                        Ok(s) if s.success() => {
                            println!(
                                "✅ Configuration file edited successfully using fallback '{}'",
                                default_editor
                            );
                        }
                        Ok(_) | Err(_) => {
                            eprintln!(
                                "❌ Failed to edit configuration file using fallback '{}'",
                                default_editor
                            );
                        }
                    }
                }
            }
        }
    }

    Ok(())
}
