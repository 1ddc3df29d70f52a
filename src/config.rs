//! Translation configuration.

/// Policy for running caller-supplied functions during constant folding.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CallFolding {
    /// Apply `Call`/`Invoke` functions while folding. Safe only when every
    /// callee in the tree is pure; that obligation sits with the caller.
    Evaluate,
    /// Never run caller-supplied functions. Comparisons whose constant side
    /// needs one degrade to the unbounded range.
    Skip,
}

/// Configuration for predicate translation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TranslateConfig {
    /// How `Call`/`Invoke` nodes are treated by the folder.
    pub call_folding: CallFolding,
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            call_folding: CallFolding::Evaluate,
        }
    }
}
