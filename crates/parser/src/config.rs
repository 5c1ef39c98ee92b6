// Compilation settings
//
// Options that change how source text is turned into a postfix program.

/// What `set_variable` does with a name the expression never mentioned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AssignPolicy {
    /// Silently do nothing.
    #[default]
    IgnoreUnknown,
    /// Create the cell, then assign it.
    DeclareUnknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileOptions {
    pub fold_constants: bool,
    pub assign_policy: AssignPolicy,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            fold_constants: true,
            assign_policy: AssignPolicy::default(),
        }
    }
}

impl CompileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fold_constants(mut self, fold: bool) -> Self {
        self.fold_constants = fold;
        self
    }

    pub fn assign_policy(mut self, policy: AssignPolicy) -> Self {
        self.assign_policy = policy;
        self
    }
}
