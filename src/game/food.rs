use super::cell::Cell;
use crate::consts;
use crate::geometry::Geometry;
use crate::options::AuraSpec;
use crate::surface::{Rgb, Surface};
use rand::{seq::IteratorRandom, Rng};
use std::collections::HashSet;

/// The food, along with the two glowing auras drawn around it
#[derive(Clone, Debug, PartialEq)]
pub(super) struct Food {
    /// Where the food currently is.  `None` if there was nowhere free to put
    /// it.
    pub(super) position: Option<Cell>,
    auras: [Aura; 2],
}

impl Food {
    pub(super) fn new(auras: [AuraSpec; 2]) -> Food {
        Food {
            position: None,
            auras: auras.map(Aura::new),
        }
    }

    pub(super) fn position(&self) -> Option<Cell> {
        self.position
    }

    /// Move the food to a random cell that is not in `occupied`.  Only cells
    /// with both coordinates in `0..=board_length - 2` are considered.
    ///
    /// Returns the new position, or `None` if every candidate cell is
    /// occupied.
    pub(super) fn reset<R: Rng>(
        &mut self,
        rng: &mut R,
        occupied: &HashSet<Cell>,
        board_length: u16,
    ) -> Option<Cell> {
        let limit = i32::from(board_length) - 1;
        self.position = (0..limit)
            .flat_map(|y| (0..limit).map(move |x| Cell::new(x, y)))
            .filter(|c| !occupied.contains(c))
            .choose(rng);
        self.position
    }

    /// Draw the food and its auras, then step the auras' animation
    pub(super) fn draw<S: Surface>(&mut self, geometry: &Geometry, surface: &mut S, color: Rgb) {
        let Some(cell) = self.position else {
            return;
        };
        surface.fill_rect(
            geometry.inset_square(cell, consts::FOOD_CORE_SCALE),
            color,
            1.0,
        );
        for aura in &mut self.auras {
            surface.fill_rect(geometry.inset_square(cell, aura.scale()), color, aura.opacity);
            aura.pulse();
        }
    }
}

/// A translucent square around the food that swells and shrinks between half
/// a cell and its configured maximum size
#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) struct Aura {
    /// Current size, in hundredths of a cell
    pct: u16,
    max_pct: u16,
    opacity: f64,
    growing: bool,
}

impl Aura {
    fn new(spec: AuraSpec) -> Aura {
        Aura {
            pct: consts::AURA_MIN_PCT,
            max_pct: spec.max_pct(),
            opacity: spec.opacity,
            growing: true,
        }
    }

    /// Return the current size of the aura as a fraction of a cell
    fn scale(&self) -> f64 {
        f64::from(self.pct) / 100.0
    }

    fn pulse(&mut self) {
        if self.pct + consts::AURA_STEP_PCT > self.max_pct {
            self.growing = false;
        }
        if self.pct < consts::AURA_MIN_PCT + consts::AURA_STEP_PCT {
            self.growing = true;
        }
        if self.growing {
            self.pct += consts::AURA_STEP_PCT;
        } else {
            self.pct -= consts::AURA_STEP_PCT;
        }
    }
}
