#[cfg(feature = "serde-serialize")]
use std::path::Path;

#[cfg(feature = "serde-serialize")]
use serde::Deserialize;

use crate::{error::MaterialError, vector::Vec3};

/// Number of floats in [`MaterialConstants::to_uniform_block`].
pub const UNIFORM_BLOCK_LEN: usize = 15;

/// Surface constants of one material, laid out for a uniform upload.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Deserialize))]
#[cfg_attr(feature = "serde-serialize", serde(default))]
pub struct MaterialConstants {
    /// Kd
    pub base_color: Vec3,
    /// Ks
    pub specular_color: Vec3,
    /// Ka (emission)
    pub ambient_color: Vec3,
    pub ambient_occlusion: Vec3,
    pub roughness: f32,
    pub metallic: f32,
    /// Ns
    pub shininess: f32,
}

impl Default for MaterialConstants {
    fn default() -> Self {
        Self {
            base_color: Vec3::new(1.0, 1.0, 1.0),
            specular_color: Vec3::new(1.0, 1.0, 1.0),
            ambient_color: Vec3::new(0.0, 0.0, 0.0),
            ambient_occlusion: Vec3::new(1.0, 1.0, 1.0),
            roughness: 1.0,
            metallic: 0.0,
            shininess: 1.0,
        }
    }
}

impl MaterialConstants {
    /// Colors in declaration order, then roughness, metallic and shininess.
    pub fn to_uniform_block(&self) -> [f32; UNIFORM_BLOCK_LEN] {
        let mut block = [0.0; UNIFORM_BLOCK_LEN];

        let colors = [
            self.base_color,
            self.specular_color,
            self.ambient_color,
            self.ambient_occlusion,
        ];
        for (slot, color) in block.chunks_exact_mut(3).zip(colors.iter()) {
            slot.copy_from_slice(&color.to_array());
        }

        block[12] = self.roughness;
        block[13] = self.metallic;
        block[14] = self.shininess;
        block
    }

    pub fn validate(&self) -> Result<(), MaterialError> {
        let scalars = [
            ("roughness", self.roughness),
            ("metallic", self.metallic),
            ("shininess", self.shininess),
        ];

        for (name, value) in scalars {
            if value.is_nan() {
                return Err(MaterialError::NanScalar { name });
            }
            if value < 0.0 {
                return Err(MaterialError::NegativeScalar { name, value });
            }
        }

        Ok(())
    }

    #[cfg(feature = "serde-serialize")]
    pub fn from_toml_str(data: &str) -> Result<Self, MaterialError> {
        let material: Self = toml::from_str(data)?;
        material.validate()?;
        Ok(material)
    }

    #[cfg(feature = "serde-serialize")]
    pub fn parse(path: &Path) -> Result<Self, MaterialError> {
        log::info!("Loading material: {}", path.display());
        let data = std::fs::read_to_string(path)?;
        Self::from_toml_str(&data)
    }
}
