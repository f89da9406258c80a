pub mod buffer;
pub mod error;
pub mod material;
#[cfg(feature = "serde-serialize")]
mod serde;
pub mod vector;

#[cfg(test)]
mod test_util;

pub mod prelude {
    pub use crate::buffer::{flatten, unflatten};
    pub use crate::error::{BufferError, MaterialError};
    pub use crate::material::MaterialConstants;
    pub use crate::vector::{to_array, Vec3};
}
