use crate::ui::messages::success;
use rusqlite::{Connection, Error, OptionalExtension};
use serde_yaml::Value;
use std::fs;

/// Fields every up-to-date config file must carry.
const REQUIRED_FIELDS: [&str; 5] = [
    "database",
    "cleaning_frequency",
    "duty_points",
    "fine_amount",
    "separator_char",
];

/// Report config fields that are missing from the YAML file on disk.
/// An absent file reports every field.
pub fn missing_fields() -> Vec<&'static str> {
    let path = super::Config::config_file();

    let Ok(content) = fs::read_to_string(&path) else {
        return REQUIRED_FIELDS.to_vec();
    };

    let Ok(yaml) = serde_yaml::from_str::<Value>(&content) else {
        return REQUIRED_FIELDS.to_vec();
    };

    let Some(map) = yaml.as_mapping() else {
        return REQUIRED_FIELDS.to_vec();
    };

    REQUIRED_FIELDS
        .iter()
        .filter(|f| !map.contains_key(Value::String(f.to_string())))
        .copied()
        .collect()
}

/// Migration that adds the rotation parameters (`cleaning_frequency`,
/// `duty_points`, `fine_amount`) to the YAML config, if missing, and
/// marks the migration as applied in the `log` table.
pub fn migrate_add_rotation_params(conn: &Connection) -> Result<(), Error> {
    let version = "20260120_0003_add_rotation_params";

    // Check if already applied
    let mut chk = conn.prepare(
        "SELECT 1 FROM log WHERE operation = 'migration_applied' AND target = ?1 LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(()); // already applied
    }

    let conf_file = super::Config::config_file();

    if conf_file.exists() {
        let content = fs::read_to_string(&conf_file).map_err(|e| {
            Error::SqliteFailure(
                rusqlite::ffi::Error::new(1),
                Some(format!("Failed to read config {:?}: {}", conf_file, e)),
            )
        })?;

        if let Ok(mut yaml) = serde_yaml::from_str::<Value>(&content)
            && let Some(map) = yaml.as_mapping_mut()
        {
            let defaults: [(&str, Value); 3] = [
                ("cleaning_frequency", Value::Number(2.into())),
                ("duty_points", Value::Number(20.into())),
                ("fine_amount", Value::Number(50.into())),
            ];

            let mut changed = false;
            for (field, default) in defaults {
                let key = Value::String(field.to_string());
                if !map.contains_key(&key) {
                    map.insert(key, default);
                    changed = true;
                }
            }

            if changed {
                let serialized = serde_yaml::to_string(&yaml).map_err(|e| {
                    Error::SqliteFailure(
                        rusqlite::ffi::Error::new(1),
                        Some(format!(
                            "Failed to serialize updated config {:?}: {}",
                            conf_file, e
                        )),
                    )
                })?;

                // Inject documentation comment right after cleaning_frequency
                let mut new_content = String::new();

                for line in serialized.lines() {
                    new_content.push_str(line);
                    new_content.push('\n');

                    if line.starts_with("cleaning_frequency:") {
                        new_content.push_str(
                            "# cleaning_frequency options:\n\
                             #   1 → cleaning duty every day\n\
                             #   2 → every other day\n\
                             #   3 → every third day\n",
                        );
                    }
                }

                fs::write(&conf_file, new_content).map_err(|e| {
                    Error::SqliteFailure(
                        rusqlite::ffi::Error::new(1),
                        Some(format!(
                            "Failed to write updated config {:?}: {}",
                            conf_file, e
                        )),
                    )
                })?;
            }
        }
    }

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added rotation parameters to config')",
        [version],
    )?;

    success(format!(
        "Migration applied: {} — added rotation parameters to config.",
        version
    ));

    Ok(())
}
