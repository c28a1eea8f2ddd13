//! Tunable parameters of the automaton rules.
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use strum_macros::{Display, EnumIter, EnumString};
use thiserror::Error;

use super::data::voxel::LiquidAmount;

/// Which water flow model the water rule runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum WaterModel {
    /// Partial transfers: fall, level with the cell below, spread sideways, overflow up
    #[default]
    Equalization,
    /// Whole cell swaps: blocked water pushes the water in its way sideways
    Displacement,
}

/// Rejected configuration values
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RuleConfigError {
    /// The threshold has to sit strictly inside a nominal cell
    #[error("liquid threshold must be in (0, 1], got {0}")]
    ThresholdOutOfRange(f32),
    /// A damping of zero never moves anything, above one overshoots
    #[error("lateral damping must be in (0, 1], got {0}")]
    DampingOutOfRange(f32),
    /// A full cell would immediately turn into air
    #[error("capacity {capacity} must not be below the liquid threshold {threshold}")]
    CapacityBelowThreshold {
        /// The offending capacity
        capacity: f32,
        /// The threshold it was compared against
        threshold: f32,
    },
    /// Sand could never slide
    #[error("sand needs at least one diagonal attempt")]
    NoDiagonalAttempts,
}

/// The parameters every rule reads
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleConfig {
    /// Below this a liquid holding cell is air, at or above it is water
    pub liquid_threshold: LiquidAmount,
    /// Fraction of the spreadable liquid actually moved sideways per application
    pub lateral_damping: f32,
    /// Nominal full amount, anything above is pressurized and overflows upward
    pub capacity: LiquidAmount,
    /// How many of the eight down diagonals sand tries per tick
    pub diagonal_attempts: usize,
    /// Which water model to run
    pub water_model: WaterModel,
    /// Recursion bound for the displacement model
    pub push_depth: usize,
    /// Let sand settle through fluids lighter than itself
    pub sand_sinks_in_fluids: bool,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            liquid_threshold: LiquidAmount(0.5),
            lateral_damping: 0.5,
            capacity: LiquidAmount::FULL,
            diagonal_attempts: 4,
            water_model: WaterModel::Equalization,
            push_depth: 3,
            sand_sinks_in_fluids: false,
        }
    }
}

/// A builder for RuleConfig
/// Validates everything in `build`
#[derive(Debug, Clone, Default)]
pub struct RuleConfigBuilder {
    /// The config being built
    config: RuleConfig,
}

impl RuleConfigBuilder {
    /// Start here
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the air/water reclassification threshold
    pub fn liquid_threshold(mut self, liquid_threshold: f32) -> Self {
        self.config.liquid_threshold = LiquidAmount(liquid_threshold);
        self
    }

    /// Set the lateral damping factor
    pub fn lateral_damping(mut self, lateral_damping: f32) -> Self {
        self.config.lateral_damping = lateral_damping;
        self
    }

    /// Set the nominal capacity of a cell
    pub fn capacity(mut self, capacity: f32) -> Self {
        self.config.capacity = LiquidAmount(capacity);
        self
    }

    /// Set how many diagonals sand tries
    pub fn diagonal_attempts(mut self, diagonal_attempts: usize) -> Self {
        self.config.diagonal_attempts = diagonal_attempts;
        self
    }

    /// Pick the water model
    pub fn water_model(mut self, water_model: WaterModel) -> Self {
        self.config.water_model = water_model;
        self
    }

    /// Set the displacement recursion bound
    pub fn push_depth(mut self, push_depth: usize) -> Self {
        self.config.push_depth = push_depth;
        self
    }

    /// Let sand sink through lighter fluids
    pub fn sand_sinks_in_fluids(mut self, sand_sinks_in_fluids: bool) -> Self {
        self.config.sand_sinks_in_fluids = sand_sinks_in_fluids;
        self
    }

    /// Validate and build
    pub fn build(self) -> Result<RuleConfig, RuleConfigError> {
        let config = self.config;
        let threshold = config.liquid_threshold.0;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(RuleConfigError::ThresholdOutOfRange(threshold));
        }
        if !(config.lateral_damping > 0.0 && config.lateral_damping <= 1.0) {
            return Err(RuleConfigError::DampingOutOfRange(config.lateral_damping));
        }
        if !(config.capacity.0 >= threshold) {
            return Err(RuleConfigError::CapacityBelowThreshold {
                capacity: config.capacity.0,
                threshold,
            });
        }
        if config.diagonal_attempts == 0 {
            return Err(RuleConfigError::NoDiagonalAttempts);
        }
        Ok(config)
    }
}
