#[derive(thiserror::Error, Debug)]
pub enum BufferError {
    #[error("Component count {len} is not a multiple of three")]
    LengthNotMultipleOfThree { len: usize },
}

#[derive(thiserror::Error, Debug)]
pub enum MaterialError {
    #[error("Error reading the material file: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "serde-serialize")]
    #[error("Invalid material description: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Material scalar `{name}` is negative: {value}")]
    NegativeScalar { name: &'static str, value: f32 },
    #[error("Material scalar `{name}` is NaN")]
    NanScalar { name: &'static str },
}
