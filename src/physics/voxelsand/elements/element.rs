use rand::Rng;

use crate::physics::voxelsand::config::RuleConfig;

use super::material::MaterialTable;

/// What a rule did with the cell it was handed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleOutcome {
    /// The cell's contents were relocated by a swap
    Relocated,
    /// Liquid was moved to or from neighbors, nothing was swapped
    Transferred,
    /// Nothing happened this tick
    Stationary,
}

impl RuleOutcome {
    pub fn is_stationary(&self) -> bool {
        *self == RuleOutcome::Stationary
    }
}

/// Everything a rule needs besides the grid
/// You have to send the grid separately by mutable reference, packaging it in here
/// would need a lifetime tied to the whole step.
pub struct RuleContext<'a, R: Rng + ?Sized> {
    pub config: &'a RuleConfig,
    pub materials: &'a MaterialTable,
    pub rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> RuleContext<'a, R> {
    pub fn new(config: &'a RuleConfig, materials: &'a MaterialTable, rng: &'a mut R) -> Self {
        Self {
            config,
            materials,
            rng,
        }
    }
}
