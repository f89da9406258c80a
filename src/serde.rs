use std::marker::PhantomData;

use serde::{
    de::{Error, SeqAccess, Visitor},
    ser::SerializeSeq,
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::vector::Vec3;

impl<T> Serialize for Vec3<T>
where
    T: Copy + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(3))?;
        for component in self.to_array().iter() {
            seq.serialize_element(component)?;
        }
        seq.end()
    }
}

impl<'de, T> Deserialize<'de> for Vec3<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(Vec3Visitor::new())
    }
}

struct Vec3Visitor<T> {
    _marker: PhantomData<T>,
}

impl<T> Vec3Visitor<T> {
    fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

fn invalid_size<E: Error>(got: usize) -> E {
    E::custom(format!("invalid size for vector (expected: 3, got: {})", got))
}

impl<'de, T> Visitor<'de> for Vec3Visitor<T>
where
    T: Deserialize<'de>,
{
    type Value = Vec3<T>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence of 3 components")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        if let Some(size_hint) = seq.size_hint() {
            if size_hint != 3 {
                return Err(invalid_size(size_hint));
            }
        }

        let x = seq.next_element()?.ok_or_else(|| invalid_size(0))?;
        let y = seq.next_element()?.ok_or_else(|| invalid_size(1))?;
        let z = seq.next_element()?.ok_or_else(|| invalid_size(2))?;

        // trailing elements without a size hint
        let mut extra = 0;
        while seq.next_element::<serde::de::IgnoredAny>()?.is_some() {
            extra += 1;
        }
        if extra > 0 {
            return Err(invalid_size(3 + extra));
        }

        Ok(Vec3::new(x, y, z))
    }
}
