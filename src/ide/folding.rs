//! Fold operations — the outbound editor surface.
//!
//! The resolver produces line numbers; this module carries them to the
//! editor. Hosts implement [`FoldHandler`] on top of whatever fold
//! mechanism they have (an editor command, an LSP client capability).

/// Which fold operation to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldRequest {
    /// Collapse the targeted regions.
    Fold,
    /// Expand the targeted regions.
    Unfold,
}

/// Which side of a selection line the fold applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldDirection {
    Up,
    Down,
}

/// Arguments for one fold/unfold operation.
///
/// Applied independently per selection line, so the operation is idempotent
/// and insensitive to the order of `selection_lines`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldingArguments {
    /// How many nesting levels below each selection line to fold.
    pub levels: u32,
    /// Fold the region before or after each selection line.
    pub direction: FoldDirection,
    /// 0-indexed lines at which to apply the operation.
    pub selection_lines: Vec<u32>,
}

impl FoldingArguments {
    /// Arguments for folding docstring bodies: one level, downward from
    /// each docstring's first body line.
    pub fn docstrings(selection_lines: Vec<u32>) -> Self {
        Self {
            levels: 1,
            direction: FoldDirection::Down,
            selection_lines,
        }
    }
}

/// Applies fold operations in the host editor.
pub trait FoldHandler {
    /// Apply `request` at every line named in `args`.
    fn apply_fold(&mut self, request: FoldRequest, args: &FoldingArguments);
}
