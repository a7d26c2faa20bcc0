//! Stage graphics lookup.
//!
//! The core only ever asks for `(variant, stage index)` and treats the result
//! as an opaque display string.

use crate::domain::Variant;

pub trait StageTable: Send + Sync {
    /// Graphic for `stage_index` (`max_mistakes - mistakes`). Indices past the
    /// end of the table clamp to the most intact graphic.
    fn graphic(&self, variant: Variant, stage_index: u8) -> &str;

    /// Graphic shown with an invite: the finished figure.
    fn preview(&self, variant: Variant) -> &str {
        self.graphic(variant, 0)
    }
}

/// Built-in ASCII art, ordered from the finished figure (frame 0) to the
/// untouched scene.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiStages;

const GALLOWS: [&str; 8] = [
    "┌─────┐\n│     │\n│     O\n│    /|\\\n│    / \\\n│\n└─────┘",
    "┌─────┐\n│     │\n│     O\n│    /|\\\n│    /\n│\n└─────┘",
    "┌─────┐\n│     │\n│     O\n│    /|\\\n│\n│\n└─────┘",
    "┌─────┐\n│     │\n│     O\n│    /|\n│\n│\n└─────┘",
    "┌─────┐\n│     │\n│     O\n│     |\n│\n│\n└─────┘",
    "┌─────┐\n│     │\n│     O\n│\n│\n│\n└─────┘",
    "┌─────┐\n│     │\n│\n│\n│\n│\n└─────┘",
    "┌─────┐\n│\n│\n│\n│\n│\n└─────┘",
];

const EXERCISE: [&str; 6] = [
    "[]--,---,--[]\n    \\ O /\n     - -\n      -\n     / \\\n    =   =",
    "[]--=-O-=--[]\n     '-'\n      v\n     / )\n    ~  z",
    "    ._O_.\n[]--<-+->--[]\n      X\n     / \\\n    -   -",
    "    ,_O_,\n[]--(---)--[]\n     >'>\n     - -",
    "    ,-O-,\n[]--=---=--[]\n     2\"2",
    "     _._\n    / O \\\n    \\| |/\n[]--+=-=+--[]",
];

impl AsciiStages {
    fn frames(variant: Variant) -> &'static [&'static str] {
        match variant {
            Variant::Gallows => &GALLOWS,
            Variant::Exercise => &EXERCISE,
        }
    }
}

impl StageTable for AsciiStages {
    fn graphic(&self, variant: Variant, stage_index: u8) -> &str {
        let frames = Self::frames(variant);
        // Tables shorter than `max_mistakes + 1` share frame 0 between the
        // last live stage and the lost stage.
        let offset = (usize::from(variant.max_mistakes()) + 1).saturating_sub(frames.len());
        let frame = usize::from(stage_index)
            .saturating_sub(offset)
            .min(frames.len() - 1);
        frames[frame]
    }
}
