use crate::consts;
use crate::game::Cell;
use std::num::NonZeroU32;
use thiserror::Error;

/// Gameplay options
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Options {
    /// Game ticks per second
    pub(crate) speed: NonZeroU32,

    /// Number of cells on each side of the board
    pub(crate) board_length: u16,

    /// Where the snake starts after every reset
    pub(crate) origin: Cell,

    /// Animation bounds & opacities of the food's auras
    pub(crate) auras: [AuraSpec; 2],
}

impl Options {
    /// Check that the options describe a playable board
    pub(crate) fn validate(self) -> Result<Options, OptionsError> {
        if self.board_length < 2 {
            return Err(OptionsError::BoardLength(self.board_length));
        }
        if !self.origin.within(self.board_length) {
            return Err(OptionsError::Origin {
                origin: self.origin,
                board_length: self.board_length,
            });
        }
        Ok(self)
    }
}

impl Default for Options {
    fn default() -> Options {
        Options {
            speed: NonZeroU32::new(consts::SPEED).unwrap_or(NonZeroU32::MIN),
            board_length: consts::BOARD_LENGTH,
            origin: Cell::from(consts::ORIGIN),
            auras: AuraSpec::DEFAULTS,
        }
    }
}

/// The bounds and opacity of one of the food's auras
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct AuraSpec {
    /// Largest size the aura reaches, as a fraction of a cell
    pub(crate) max: f64,

    /// Opacity with which the aura is drawn
    pub(crate) opacity: f64,
}

impl AuraSpec {
    pub(crate) const DEFAULTS: [AuraSpec; 2] = [
        AuraSpec {
            max: consts::AURAS[0].0,
            opacity: consts::AURAS[0].1,
        },
        AuraSpec {
            max: consts::AURAS[1].0,
            opacity: consts::AURAS[1].1,
        },
    ];

    pub(crate) fn new(max: f64, opacity: f64) -> Result<AuraSpec, OptionsError> {
        if !(0.5..=1.0).contains(&max) {
            return Err(OptionsError::AuraMax(max));
        }
        if !(0.0..=1.0).contains(&opacity) {
            return Err(OptionsError::AuraOpacity(opacity));
        }
        Ok(AuraSpec { max, opacity })
    }

    /// Return `max` in hundredths of a cell
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub(crate) fn max_pct(self) -> u16 {
        (self.max * 100.0).round().clamp(0.0, 100.0) as u16
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub(crate) enum OptionsError {
    #[error("speed must be at least 1 tick per second")]
    Speed,
    #[error("board length must be at least 2, got {0}")]
    BoardLength(u16),
    #[error("origin ({}, {}) is outside of a board {board_length} cells wide", .origin.x, .origin.y)]
    Origin { origin: Cell, board_length: u16 },
    #[error("aura maximum must be between 0.5 and 1.0, got {0}")]
    AuraMax(f64),
    #[error("aura opacity must be between 0.0 and 1.0, got {0}")]
    AuraOpacity(f64),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn defaults() {
        let opts = Options::default();
        assert_eq!(opts.speed.get(), 12);
        assert_eq!(opts.board_length, 17);
        assert_eq!(opts.origin, Cell::new(2, 13));
        assert_eq!(opts.auras.map(AuraSpec::max_pct), [65, 100]);
        assert_eq!(opts.validate(), Ok(opts));
    }

    #[rstest]
    #[case(1, Cell::new(0, 0), Some(OptionsError::BoardLength(1)))]
    #[case(2, Cell::new(1, 1), None)]
    #[case(
        13,
        Cell::new(2, 13),
        Some(OptionsError::Origin { origin: Cell::new(2, 13), board_length: 13 })
    )]
    #[case(14, Cell::new(2, 13), None)]
    #[case(
        17,
        Cell::new(-1, 0),
        Some(OptionsError::Origin { origin: Cell::new(-1, 0), board_length: 17 })
    )]
    fn test_validate(#[case] board_length: u16, #[case] origin: Cell, #[case] err: Option<OptionsError>) {
        let opts = Options {
            board_length,
            origin,
            ..Options::default()
        };
        assert_eq!(opts.validate().err(), err);
    }

    #[rstest]
    #[case(0.4, 0.3, Err(OptionsError::AuraMax(0.4)))]
    #[case(1.5, 0.3, Err(OptionsError::AuraMax(1.5)))]
    #[case(0.8, 1.2, Err(OptionsError::AuraOpacity(1.2)))]
    #[case(0.8, -0.1, Err(OptionsError::AuraOpacity(-0.1)))]
    #[case(0.5, 0.0, Ok(AuraSpec { max: 0.5, opacity: 0.0 }))]
    #[case(1.0, 1.0, Ok(AuraSpec { max: 1.0, opacity: 1.0 }))]
    fn test_aura_spec(#[case] max: f64, #[case] opacity: f64, #[case] r: Result<AuraSpec, OptionsError>) {
        assert_eq!(AuraSpec::new(max, opacity), r);
    }

    #[test]
    fn origin_error_message() {
        let e = OptionsError::Origin {
            origin: Cell::new(2, 13),
            board_length: 10,
        };
        assert_eq!(
            e.to_string(),
            "origin (2, 13) is outside of a board 10 cells wide"
        );
    }
}
