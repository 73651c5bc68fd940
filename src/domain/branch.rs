/// Represents the checked-out branch relative to the trunk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchContext {
    pub name: String,
    pub is_trunk: bool,
}

impl BranchContext {
    /// Create a new branch context
    pub fn new(name: impl Into<String>, trunk: &str) -> Self {
        let name_str = name.into();
        let is_trunk = name_str == trunk;

        BranchContext {
            name: name_str,
            is_trunk,
        }
    }

    /// Feature branches are compared against their branch point with the trunk
    pub fn uses_branch_point(&self) -> bool {
        !self.is_trunk
    }
}
