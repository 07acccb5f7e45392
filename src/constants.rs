mod database_type;
pub use database_type::DatabaseType;
pub use database_type::DatabaseTypeError;

mod rule_name;
pub use rule_name::RuleName;
