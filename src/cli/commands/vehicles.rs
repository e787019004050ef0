use crate::config::Config;
use crate::errors::AppResult;
use crate::models::vehicle::{EngineType, MpgTable, VehicleType};
use crate::ui::messages::header;
use crate::utils::table::{Column, Table};

/// Print the default MPG for every vehicle / engine pair.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let table = MpgTable::standard();

    let mut columns = vec![Column::left("vehicle")];
    columns.extend(EngineType::ALL.iter().map(|e| Column::right(e.to_db_str())));
    let mut out = Table::new(columns);

    for vehicle in VehicleType::ALL {
        let mut row = vec![vehicle.to_string()];
        for engine in EngineType::ALL {
            row.push(format!("{:.0}", table.lookup(vehicle, engine)?));
        }
        out.add_row(row);
    }

    header("Default MPG");
    println!("{}", out.render(&cfg.separator_char));
    Ok(())
}
