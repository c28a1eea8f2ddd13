//! Material kinds and their static properties.
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use bevy::render::color::Color;
use derive_more::{Add, AddAssign, From, Into, Sub, SubAssign};
use hashbrown::HashMap;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount, EnumIter};

/// Every kind of thing a voxel can be made of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumCount)]
pub enum Material {
    /// Empty space, the only thing granular and liquid cells fall into
    #[default]
    Air,
    /// Granular, piles up at its angle of repose
    Sand,
    /// Liquid, carries a fill amount
    Water,
    /// Immovable, never a source or destination of movement
    Stone,
    /// Currently inert
    Lava,
}

impl Material {
    /// Whether this cell can hold a liquid amount and so take part in equalization
    pub fn holds_liquid(&self) -> bool {
        matches!(self, Material::Air | Material::Water)
    }

    /// Whether the stepper dispatches a rule for this material
    pub fn is_dynamic(&self) -> bool {
        matches!(self, Material::Sand | Material::Water)
    }

    /// The default properties of this material
    pub fn properties(&self) -> MaterialProperties {
        MaterialProperties::get_defaults(*self)
    }
}

/// The density of a material relative to water
#[derive(Default, Clone, Copy, Debug, PartialEq, PartialOrd, Add, Sub, AddAssign, SubAssign, From, Into)]
pub struct Density(pub f32);

/// Static, per kind properties
/// The rules only consult density and fluidity, the color is for visualizers
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialProperties {
    /// The kind these properties describe
    pub material: Material,
    /// Display color, fully transparent for air
    pub color: Color,
    /// Relative density
    pub density: Density,
    /// Whether it flows
    pub is_fluid: bool,
    /// How many cells it would like to spread per tick
    pub spread_rate: u32,
}

impl MaterialProperties {
    /// The built in properties of each material
    pub fn get_defaults(material: Material) -> Self {
        match material {
            Material::Air => Self {
                material,
                color: Color::NONE,
                density: Density(0.0),
                is_fluid: true,
                spread_rate: 10,
            },
            Material::Sand => Self {
                material,
                color: Color::rgb(0.76, 0.7, 0.5),
                density: Density(1.6),
                is_fluid: false,
                spread_rate: 1,
            },
            Material::Water => Self {
                material,
                color: Color::rgba(0.3, 0.5, 1.0, 0.7),
                density: Density(1.0),
                is_fluid: true,
                spread_rate: 3,
            },
            Material::Stone => Self {
                material,
                color: Color::rgb(0.5, 0.5, 0.5),
                density: Density(2.5),
                is_fluid: false,
                spread_rate: 0,
            },
            Material::Lava => Self {
                material,
                color: Color::rgb(1.0, 0.3, 0.1),
                density: Density(2.1),
                is_fluid: true,
                spread_rate: 2,
            },
        }
    }
}

/// Lookup from material to its properties
/// Starts out with the defaults, entries may be overridden at setup time
#[derive(Clone, Debug)]
pub struct MaterialTable {
    /// One entry per material
    properties: HashMap<Material, MaterialProperties>,
}

impl Default for MaterialTable {
    fn default() -> Self {
        Self {
            properties: Material::iter()
                .map(|m| (m, MaterialProperties::get_defaults(m)))
                .collect(),
        }
    }
}

impl MaterialTable {
    /// Get the properties for a material, falling back to the defaults
    pub fn get(&self, material: Material) -> MaterialProperties {
        self.properties
            .get(&material)
            .copied()
            .unwrap_or_else(|| MaterialProperties::get_defaults(material))
    }

    /// Override a material's properties, returning the old ones
    pub fn insert(&mut self, properties: MaterialProperties) -> Option<MaterialProperties> {
        self.properties.insert(properties.material, properties)
    }

    /// Density shortcut used by the rules
    pub fn density(&self, material: Material) -> Density {
        self.get(material).density
    }

    /// Fluidity shortcut used by the rules
    pub fn is_fluid(&self, material: Material) -> bool {
        self.get(material).is_fluid
    }

    /// RGBA color bytes for a material
    pub fn rgba(&self, material: Material) -> [u8; 4] {
        self.get(material).color.as_rgba_u8()
    }
}
