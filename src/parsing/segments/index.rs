#[derive(Clone, Debug, PartialEq)]
pub struct IndexSegment {
    pub name: String,
    pub columns: Vec<String>,
    pub unique: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenameIndexSegment {
    pub old_name: String,
    pub new_name: String,
}
