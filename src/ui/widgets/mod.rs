// SPDX-License-Identifier: MPL-2.0
pub mod particle_field;
pub mod sparkles;
pub mod spinner;

pub use particle_field::ParticleField;
pub use sparkles::SparklePool;
pub use spinner::Spinner;
