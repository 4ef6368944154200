use std::fmt::{Debug, Display};

/// An action labels an edge of the state graph. Since a search may start at a
/// goal, every action type must be able to express "do nothing".
pub trait Action: Clone + Debug {
    /// The action returned as the whole solution when the initial state is
    /// already a goal.
    fn no_op() -> Self;

    fn is_no_op(&self) -> bool;
}

const NO_OP_NAME: &str = "NoOp";

/// Action identified only by its name. Useful for problems where actions do
/// not carry any structure beyond a label, e.g. `Go(A,B)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DynamicAction {
    name: String,
}

impl DynamicAction {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Action for DynamicAction {
    fn no_op() -> Self {
        Self::new(NO_OP_NAME)
    }

    fn is_no_op(&self) -> bool {
        self.name == NO_OP_NAME
    }
}

impl Display for DynamicAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Action[name={}]", self.name)
    }
}
