//! What each mode lets the player see of the target, per phase.

use serde::{Deserialize, Serialize};

use super::state::PhaseKind;
use crate::color::Rgb;
use crate::generator::Puzzle;

/// Target as presented to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetView {
    Revealed(Rgb),
    Hidden,
    /// Gradient endpoints; the missing colour only once scored
    Gap {
        start: Rgb,
        end: Rgb,
        missing_index: usize,
        target: Option<Rgb>,
    },
}

pub fn reveal(puzzle: &Puzzle, phase: PhaseKind) -> TargetView {
    let scored = matches!(phase, PhaseKind::Result | PhaseKind::Finished);
    match puzzle {
        Puzzle::Chain { target, .. } => TargetView::Revealed(*target),
        Puzzle::Gap(gap) => TargetView::Gap {
            start: gap.start,
            end: gap.end,
            missing_index: gap.missing_index,
            target: scored.then_some(gap.target),
        },
        Puzzle::Memory { target } => {
            if scored || phase == PhaseKind::Memorize {
                TargetView::Revealed(*target)
            } else {
                TargetView::Hidden
            }
        }
    }
}
