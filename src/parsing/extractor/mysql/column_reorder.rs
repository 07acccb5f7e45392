//! Applies FIRST / AFTER clauses to a column list.
//!
//! Positions are applied one at a time in the order they were written, each one seeing the
//! result of those before it, so "ADD a INT FIRST, ADD b INT AFTER a" behaves as MySQL does.
//! A position naming a column that is not in the list is skipped rather than rejected.
use crate::metadata::ColumnMetaData;
use crate::parsing::extractor::ColumnPositionAdjuster;
use crate::parsing::segments::{ColumnPosition, ColumnPositionSegment};

pub struct MySQLColumnPositionAdjuster {}

impl ColumnPositionAdjuster for MySQLColumnPositionAdjuster {
    fn adjust(&self, positions: &mut [ColumnPositionSegment], columns: &mut Vec<ColumnMetaData>) {
        reorder_columns(columns, positions);
    }
}

/// Sorts `positions` into statement order and applies them to `columns` in place.
pub fn reorder_columns(columns: &mut Vec<ColumnMetaData>, positions: &mut [ColumnPositionSegment]) {
    if positions.is_empty() {
        return;
    }
    if positions.len() > 1 {
        positions.sort_by_key(|p| p.start_index);
    }

    for segment in positions.iter() {
        match &segment.position {
            ColumnPosition::First(column) => adjust_first(columns, column),
            ColumnPosition::After {
                column,
                after_column,
            } => adjust_after(columns, column, after_column),
        }
    }
}

fn adjust_first(columns: &mut Vec<ColumnMetaData>, column_name: &str) {
    match columns.iter().position(|c| c.column_name == column_name) {
        Some(index) => {
            let column = columns.remove(index);
            columns.insert(0, column);
            trace!("Moved {} from {} to the front", column_name, index);
        }
        None => debug!("Column {} is unknown, ignoring FIRST", column_name),
    }
}

fn adjust_after(columns: &mut Vec<ColumnMetaData>, column_name: &str, after_column: &str) {
    let mut adjust_index = None;
    let mut anchor_index = None;
    for (i, column) in columns.iter().enumerate() {
        if column.column_name == column_name {
            adjust_index = Some(i);
        }
        if column.column_name == after_column {
            anchor_index = Some(i);
        }
        if adjust_index.is_some() && anchor_index.is_some() {
            break;
        }
    }

    let (adjust_index, anchor_index) = match (adjust_index, anchor_index) {
        (Some(adjust), Some(anchor)) => (adjust, anchor),
        _ => {
            debug!(
                "Column {} or {} is unknown, ignoring AFTER",
                column_name, after_column
            );
            return;
        }
    };
    if adjust_index == anchor_index + 1 {
        return;
    }

    let column = columns.remove(adjust_index);
    let target = insertion_index(adjust_index, anchor_index);
    columns.insert(target, column);
    trace!(
        "Moved {} from {} to {}, after {}",
        column_name,
        adjust_index,
        target,
        after_column
    );
}

/// Where to re-insert the element taken out of `adjust_index` so it lands directly behind the
/// element that was at `anchor_index` before the removal.
///
/// An anchor in front of the removed slot does not move, so the slot after it is wanted.
/// An anchor behind the removed slot has shifted left by one, so its old index is already
/// the slot after it.
pub fn insertion_index(adjust_index: usize, anchor_index: usize) -> usize {
    if anchor_index < adjust_index {
        anchor_index + 1
    } else {
        anchor_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::ColumnFlags;

    fn get_columns(names: &[&str]) -> Vec<ColumnMetaData> {
        names
            .iter()
            .map(|n| ColumnMetaData::new(n.to_string(), "INT".to_string(), ColumnFlags::empty()))
            .collect()
    }

    fn names(columns: &[ColumnMetaData]) -> Vec<&str> {
        columns.iter().map(|c| c.column_name.as_str()).collect()
    }

    fn after(start_index: usize, column: &str, after_column: &str) -> ColumnPositionSegment {
        ColumnPositionSegment::after(start_index, column.to_string(), after_column.to_string())
    }

    #[test]
    fn test_insertion_index() {
        //Anchor before the moved column
        assert_eq!(1, insertion_index(3, 0));
        assert_eq!(3, insertion_index(3, 2));
        //Anchor after the moved column
        assert_eq!(2, insertion_index(0, 2));
        assert_eq!(3, insertion_index(1, 3));
        //Moved after itself stays put
        assert_eq!(2, insertion_index(2, 2));
    }

    #[test]
    fn test_empty_is_noop() {
        let mut columns = get_columns(&["a", "b", "c"]);
        reorder_columns(&mut columns, &mut []);
        assert_eq!(vec!["a", "b", "c"], names(&columns));
    }

    #[test]
    fn test_first() {
        let mut columns = get_columns(&["a", "b", "c"]);
        let mut positions = vec![ColumnPositionSegment::first(0, "c".to_string())];
        reorder_columns(&mut columns, &mut positions);
        assert_eq!(vec!["c", "a", "b"], names(&columns));
    }

    #[test]
    fn test_first_already_first() {
        let mut columns = get_columns(&["a", "b"]);
        let mut positions = vec![ColumnPositionSegment::first(0, "a".to_string())];
        reorder_columns(&mut columns, &mut positions);
        assert_eq!(vec!["a", "b"], names(&columns));
    }

    #[test]
    fn test_after_forward() {
        let mut columns = get_columns(&["a", "b", "c", "d"]);
        reorder_columns(&mut columns, &mut [after(0, "a", "c")]);
        assert_eq!(vec!["b", "c", "a", "d"], names(&columns));
    }

    #[test]
    fn test_after_backward() {
        let mut columns = get_columns(&["a", "b", "c", "d"]);
        reorder_columns(&mut columns, &mut [after(0, "d", "a")]);
        assert_eq!(vec!["a", "d", "b", "c"], names(&columns));
    }

    #[test]
    fn test_after_last() {
        let mut columns = get_columns(&["a", "b", "c", "d"]);
        reorder_columns(&mut columns, &mut [after(0, "b", "d")]);
        assert_eq!(vec!["a", "c", "d", "b"], names(&columns));
    }

    #[test]
    fn test_already_in_place_is_stable() {
        let mut columns = get_columns(&["a", "b", "c"]);
        let mut positions = vec![after(0, "c", "b")];
        reorder_columns(&mut columns, &mut positions);
        assert_eq!(vec!["a", "b", "c"], names(&columns));

        reorder_columns(&mut columns, &mut positions);
        assert_eq!(vec!["a", "b", "c"], names(&columns));
    }

    #[test]
    fn test_after_itself() {
        let mut columns = get_columns(&["a", "b", "c"]);
        reorder_columns(&mut columns, &mut [after(0, "b", "b")]);
        assert_eq!(vec!["a", "b", "c"], names(&columns));
    }

    #[test]
    fn test_applied_in_statement_order() {
        //a after c, then c first, listed out of order
        let mut positions = vec![
            ColumnPositionSegment::first(50, "c".to_string()),
            after(10, "a", "c"),
        ];
        let mut columns = get_columns(&["a", "b", "c", "d"]);
        reorder_columns(&mut columns, &mut positions);

        //[b, c, a, d] then [c, b, a, d]
        assert_eq!(vec!["c", "b", "a", "d"], names(&columns));
        assert_eq!(10, positions[0].start_index);
    }

    #[test]
    fn test_later_clause_sees_earlier_one() {
        //ADD x ... FIRST, ADD y ... AFTER x
        let mut columns = get_columns(&["a", "b", "x", "y"]);
        let mut positions = vec![
            after(40, "y", "x"),
            ColumnPositionSegment::first(20, "x".to_string()),
        ];
        reorder_columns(&mut columns, &mut positions);
        assert_eq!(vec!["x", "y", "a", "b"], names(&columns));
    }

    #[test]
    fn test_unknown_columns_ignored() {
        let mut columns = get_columns(&["a", "b", "c"]);
        let mut positions = vec![
            ColumnPositionSegment::first(0, "missing".to_string()),
            after(5, "missing", "a"),
            after(9, "a", "missing"),
        ];
        reorder_columns(&mut columns, &mut positions);
        assert_eq!(vec!["a", "b", "c"], names(&columns));
    }
}
