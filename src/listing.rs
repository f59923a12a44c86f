//! The reference listing shown next to the bars.
//!
//! The listing is never executed. Each [`Step`](crate::trace::Step) points at
//! one of its lines through a [`CodeLine`] so the source pane can highlight
//! where the algorithm currently is.

use serde::{Serialize, Serializer};

/// The fixed selection sort listing, one entry per line.
pub const LISTING: [&str; 8] = [
    "def selection_sort(arr):",
    "    n = len(arr)",
    "    for i in range(n):",
    "        min_idx = i",
    "        for j in range(i + 1, n):",
    "            if arr[j] < arr[min_idx]:",
    "                min_idx = j",
    "        arr[i], arr[min_idx] = arr[min_idx], arr[i]",
];

/// A line of [`LISTING`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeLine {
    Signature,
    Length,
    OuterLoop,
    SeedMin,
    InnerLoop,
    Compare,
    UpdateMin,
    Swap,
}

impl CodeLine {
    pub const ALL: [CodeLine; 8] = [
        CodeLine::Signature,
        CodeLine::Length,
        CodeLine::OuterLoop,
        CodeLine::SeedMin,
        CodeLine::InnerLoop,
        CodeLine::Compare,
        CodeLine::UpdateMin,
        CodeLine::Swap,
    ];

    /// Zero-based index into [`LISTING`]
    pub fn index(self) -> usize {
        match self {
            CodeLine::Signature => 0,
            CodeLine::Length => 1,
            CodeLine::OuterLoop => 2,
            CodeLine::SeedMin => 3,
            CodeLine::InnerLoop => 4,
            CodeLine::Compare => 5,
            CodeLine::UpdateMin => 6,
            CodeLine::Swap => 7,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn text(self) -> &'static str {
        LISTING[self.index()]
    }
}

// Exported traces carry the line number, which is what a consumer of the
// listing needs.
impl Serialize for CodeLine {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.index() as u64)
    }
}
