/// Three-component vector, used for positions, normals and colors.
///
/// Components are stored as given. NaN, infinities and signed zeros are
/// never validated or normalized.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec3<T = f32> {
    x: T,
    y: T,
    z: T,
}

impl<T> Vec3<T> {
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl<T: Copy> Vec3<T> {
    pub fn x(&self) -> T {
        self.x
    }

    pub fn y(&self) -> T {
        self.y
    }

    pub fn z(&self) -> T {
        self.z
    }

    /// Returns a fresh `[x, y, z]` copy of the components.
    pub fn to_array(&self) -> [T; 3] {
        [self.x, self.y, self.z]
    }
}

/// Free function form of [`Vec3::to_array`].
pub fn to_array<T: Copy>(vector: Vec3<T>) -> [T; 3] {
    vector.to_array()
}

impl<T: Copy> From<Vec3<T>> for [T; 3] {
    fn from(vector: Vec3<T>) -> Self {
        vector.to_array()
    }
}

impl<T> From<[T; 3]> for Vec3<T> {
    fn from([x, y, z]: [T; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl<T> From<(T, T, T)> for Vec3<T> {
    fn from((x, y, z): (T, T, T)) -> Self {
        Self::new(x, y, z)
    }
}
