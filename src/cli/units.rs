use clap::Subcommand;
use serde_json::json;
use tabled::Tabled;

use crate::auth::credentials;
use crate::cli::output::{print_json, print_table};
use crate::config::{OutputMode, RuntimeConfig};
use crate::error::AppError;
use crate::models::unit::Unit;

#[derive(Subcommand)]
pub enum UnitsCommand {
    /// List all units
    List,

    /// Get unit details
    Get {
        /// Unit serial number
        serial: i64,
    },
}

#[derive(Tabled)]
struct UnitRow {
    #[tabled(rename = "SERIAL")]
    serial: i64,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "TYPE")]
    unit_type: String,
    #[tabled(rename = "TIMEZONE")]
    timezone: String,
    #[tabled(rename = "STATUS")]
    status: String,
    #[tabled(rename = "LAST DATA")]
    last_data: String,
    #[tabled(rename = "ERROR")]
    error: String,
}

impl UnitRow {
    fn from_unit(unit: &Unit) -> Self {
        Self {
            serial: unit.serial_number,
            name: unit.display_name(),
            unit_type: unit.unit_type.clone(),
            timezone: unit.timezone.clone(),
            status: if unit.is_online { "online" } else { "offline" }.to_string(),
            last_data: unit.date_last_data.clone(),
            error: if unit.has_error { "yes" } else { "no" }.to_string(),
        }
    }
}

fn unit_json(unit: &Unit) -> serde_json::Value {
    json!({
        "serial_number": unit.serial_number,
        "name": unit.name,
        "notes": unit.notes,
        "type": unit.unit_type,
        "timezone": unit.timezone,
        "status": if unit.is_online { "online" } else { "offline" },
        "date_last_data": unit.date_last_data,
        "has_error": unit.has_error,
    })
}

pub async fn handle(cmd: &UnitsCommand, config: &RuntimeConfig) -> Result<(), AppError> {
    match cmd {
        UnitsCommand::List => handle_list(config).await,
        UnitsCommand::Get { serial } => handle_get(*serial, config).await,
    }
}

async fn fetch_units(config: &RuntimeConfig) -> Result<Vec<Unit>, AppError> {
    let (mut account, tokens) = credentials::stored_account(config.verbose)?;
    let units = account.get_units().await?;
    // get_units may have rotated the token pair
    credentials::persist_tokens(&account, &tokens.username)?;
    Ok(units)
}

async fn handle_list(config: &RuntimeConfig) -> Result<(), AppError> {
    let units = fetch_units(config).await?;

    if config.output_mode == OutputMode::Table {
        let rows: Vec<UnitRow> = units.iter().map(UnitRow::from_unit).collect();
        print_table(&rows);
    } else {
        let json_units: Vec<serde_json::Value> = units.iter().map(unit_json).collect();
        print_json(&json!(json_units));
    }

    Ok(())
}

async fn handle_get(serial: i64, config: &RuntimeConfig) -> Result<(), AppError> {
    let units = fetch_units(config).await?;

    let unit = units
        .iter()
        .find(|u| u.serial_number == serial)
        .ok_or_else(|| AppError::UnitNotFound(serial.to_string()))?;

    print_json(&unit_json(unit));

    Ok(())
}
