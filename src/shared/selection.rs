use crate::core::Handle;

/// Selektierter Punkt der Kurve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    /// Anker mit Index
    Anchor { index: usize },
    /// Steuerpunkt `handle` des Segments `index`
    Control { index: usize, handle: Handle },
}

impl Selection {
    pub fn is_none(&self) -> bool {
        matches!(self, Selection::None)
    }
}
