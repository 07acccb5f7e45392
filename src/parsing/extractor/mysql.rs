//! MySQL flavour of the ALTER TABLE extractor
mod add_column;
pub use add_column::MySQLAddColumnExtractor;

mod add_index;
pub use add_index::MySQLAddIndexExtractor;

mod change_column;
pub use change_column::MySQLChangeColumnExtractor;

mod column_position;
pub use column_position::MySQLColumnPositionExtractor;

mod column_reorder;
pub use column_reorder::insertion_index;
pub use column_reorder::reorder_columns;
pub use column_reorder::MySQLColumnPositionAdjuster;

mod drop_index;
pub use drop_index::MySQLDropIndexExtractor;

mod modify_column;
pub use modify_column::MySQLModifyColumnExtractor;

use super::{
    AlterTableExtractor, DropPrimaryKeyExtractor, PrimaryKeyForAlterTableExtractor,
    RenameIndexExtractor,
};
use crate::constants::RuleName;

impl AlterTableExtractor {
    pub fn mysql() -> AlterTableExtractor {
        let mut extractor = AlterTableExtractor::new();
        extractor.add_extractor(Box::new(MySQLAddColumnExtractor {}));
        extractor.add_extractor(Box::new(MySQLAddIndexExtractor {}));
        extractor.add_extractor(Box::new(MySQLDropIndexExtractor {}));
        extractor.add_extractor(Box::new(RenameIndexExtractor {}));
        extractor.add_extractor(Box::new(PrimaryKeyForAlterTableExtractor::new(
            RuleName::AddConstraint,
        )));
        extractor.add_extractor(Box::new(DropPrimaryKeyExtractor {}));
        extractor.add_extractor(Box::new(MySQLChangeColumnExtractor {}));
        extractor.add_extractor(Box::new(MySQLModifyColumnExtractor {}));
        extractor.set_position_adjuster(Box::new(MySQLColumnPositionAdjuster {}));
        extractor
    }
}
