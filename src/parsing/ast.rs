//! Rule tagged parse tree plus the lookup helpers every extractor is built on.
use crate::constants::RuleName;
use std::collections::VecDeque;

#[derive(Clone, Debug, PartialEq)]
pub struct AstNode {
    pub rule: RuleName,
    pub text: String,
    /// Byte offset of the first character of `text` in the parsed statement
    pub start_index: usize,
    /// Byte offset of the last character of `text`, inclusive
    pub stop_index: usize,
    pub children: Vec<AstNode>,
}

impl AstNode {
    pub fn new(
        rule: RuleName,
        text: String,
        start_index: usize,
        children: Vec<AstNode>,
    ) -> AstNode {
        let stop_index = (start_index + text.len()).saturating_sub(1);
        AstNode {
            rule,
            text,
            start_index,
            stop_index,
            children,
        }
    }

    /// Breadth first search for the first node tagged with `rule`, starting with this node.
    pub fn find_first_child_node(&self, rule: RuleName) -> Option<&AstNode> {
        let mut queue = VecDeque::new();
        queue.push_back(self);
        while let Some(node) = queue.pop_front() {
            if node.rule == rule {
                return Some(node);
            }
            queue.extend(node.children.iter());
        }
        None
    }

    /// Every node tagged with `rule`, in breadth first order.
    pub fn find_all_child_nodes(&self, rule: RuleName) -> Vec<&AstNode> {
        let mut result = vec![];
        let mut queue = VecDeque::new();
        queue.push_back(self);
        while let Some(node) = queue.pop_front() {
            if node.rule == rule {
                result.push(node);
            }
            queue.extend(node.children.iter());
        }
        result
    }

    /// Node text with identifier quoting removed
    pub fn exact_text(&self) -> String {
        exact_value(&self.text).to_string()
    }
}

/// Strips MySQL back-quotes from an identifier, `` `foo` `` becomes `foo`.
pub fn exact_value(text: &str) -> &str {
    let text = text.trim();
    if text.len() >= 2 && text.starts_with('`') && text.ends_with('`') {
        &text[1..text.len() - 1]
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(rule: RuleName, text: &str, start: usize) -> AstNode {
        AstNode::new(rule, text.to_string(), start, vec![])
    }

    // (AddColumn (ColumnDefinition (ColumnName a) ...) (FirstOrAfterColumn (ColumnName b)))
    fn get_tree() -> AstNode {
        let definition = AstNode::new(
            RuleName::ColumnDefinition,
            "a INT".to_string(),
            11,
            vec![
                leaf(RuleName::ColumnName, "a", 11),
                leaf(RuleName::DataType, "INT", 13),
            ],
        );
        let position = AstNode::new(
            RuleName::FirstOrAfterColumn,
            "AFTER b".to_string(),
            17,
            vec![leaf(RuleName::ColumnName, "b", 23)],
        );
        AstNode::new(
            RuleName::AddColumn,
            "ADD COLUMN a INT AFTER b".to_string(),
            0,
            vec![definition, position],
        )
    }

    #[test]
    fn test_find_first_is_breadth_first() {
        let tree = get_tree();

        let found = tree.find_first_child_node(RuleName::ColumnName).unwrap();
        assert_eq!("a", found.text);

        let position = tree
            .find_first_child_node(RuleName::FirstOrAfterColumn)
            .unwrap();
        let after = position.find_first_child_node(RuleName::ColumnName).unwrap();
        assert_eq!("b", after.text);
        assert_eq!(23, after.start_index);
    }

    #[test]
    fn test_find_first_includes_self() {
        let tree = get_tree();
        let found = tree.find_first_child_node(RuleName::AddColumn).unwrap();
        assert_eq!(0, found.start_index);
        assert!(tree.find_first_child_node(RuleName::DropIndex).is_none());
    }

    #[test]
    fn test_find_all() {
        let tree = get_tree();
        let names: Vec<&str> = tree
            .find_all_child_nodes(RuleName::ColumnName)
            .iter()
            .map(|n| n.text.as_str())
            .collect();
        assert_eq!(vec!["a", "b"], names);
    }

    #[test]
    fn test_stop_index() {
        let node = leaf(RuleName::ColumnName, "abc", 4);
        assert_eq!(6, node.stop_index);
    }

    #[test]
    fn test_exact_value() {
        assert_eq!("foo", exact_value("`foo`"));
        assert_eq!("foo", exact_value("foo"));
        assert_eq!("`", exact_value("`"));
    }
}
