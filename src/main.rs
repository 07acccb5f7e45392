//Vendor Imports
#[macro_use]
extern crate log;
extern crate simplelog;
use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode};
use std::env;
use std::process;

//Application Imports
use alterantlib::constants::DatabaseType;
use alterantlib::engine::Engine;
use alterantlib::metadata::{ColumnFlags, ColumnMetaData, TableMetaData};

const USAGE: &str = "usage: alterant [-v] [-d mysql] \"ALTER TABLE ...\" name:type[:pk],...";

fn main() {
    let mut verbose = false;
    let mut dialect = "mysql".to_string();
    let mut positional = vec![];
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-v" => verbose = true,
            "-d" => dialect = args.next().unwrap_or_default(),
            _ => positional.push(arg),
        }
    }

    let level = if verbose {
        LevelFilter::Trace
    } else {
        LevelFilter::Info
    };
    if let Err(e) = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]) {
        eprintln!("Unable to start logging {}", e);
    }

    if positional.len() != 2 {
        eprintln!("{}", USAGE);
        process::exit(2);
    }
    let database_type: DatabaseType = match dialect.parse() {
        Ok(d) => d,
        Err(e) => {
            error!("{}", e);
            process::exit(2);
        }
    };

    let table = parse_columns(&positional[1]);
    let engine = Engine::new(database_type);
    let statement = match engine.parse_alter_table(&positional[0], Some(&table)) {
        Ok(s) => s,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    info!("{} table {}", engine.database_type(), statement.table_name);
    debug!("Added columns {:?}", statement.added_column_definitions);
    debug!("Changed columns {:?}", statement.changed_column_definitions);
    debug!("Dropped columns {:?}", statement.dropped_columns);
    debug!("Added indexes {:?}", statement.added_indexes);
    debug!("Dropped indexes {:?}", statement.dropped_indexes);
    debug!("Renamed indexes {:?}", statement.renamed_indexes);
    debug!("Position changes {:?}", statement.position_changed_columns);

    for column in statement.updated_columns.unwrap_or_default() {
        println!("{}", column);
    }
}

/// name:type[:pk],... into a table layout, type defaults to TEXT
fn parse_columns(raw: &str) -> TableMetaData {
    let columns = raw
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(|c| {
            let mut parts = c.split(':');
            let name = parts.next().unwrap_or_default().to_string();
            let column_type = parts.next().unwrap_or("TEXT").to_string();
            let flags = match parts.next() {
                Some(p) if p.eq_ignore_ascii_case("pk") => ColumnFlags::PRIMARY_KEY,
                _ => ColumnFlags::empty(),
            };
            ColumnMetaData::new(name, column_type, flags)
        })
        .collect();
    TableMetaData::new(columns)
}
