use alterantlib::metadata::{ColumnFlags, ColumnMetaData, TableMetaData};
use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};
use std::sync::Once;

static LOGGING: Once = Once::new();

pub fn _init_logging() {
    LOGGING.call_once(|| {
        //Only fails if another logger got there first, which is fine for tests
        let _ = CombinedLogger::init(vec![TermLogger::new(
            LevelFilter::Trace,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        )]);
    });
}

/// A table whose first column is the primary key, every column an INT
pub fn _get_table(names: &[&str]) -> TableMetaData {
    TableMetaData::new(
        names
            .iter()
            .enumerate()
            .map(|(i, n)| {
                let flags = if i == 0 {
                    ColumnFlags::PRIMARY_KEY
                } else {
                    ColumnFlags::empty()
                };
                ColumnMetaData::new(n.to_string(), "INT".to_string(), flags)
            })
            .collect(),
    )
}
