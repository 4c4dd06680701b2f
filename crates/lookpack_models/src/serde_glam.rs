use serde::{
    de::{Error, SeqAccess, Visitor},
    Deserialize, Serialize,
};

/// A position/rotation/scaling vector stored on disk as `[x, y, z]`.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec3(pub glam::Vec3);

/// An rgb color stored on disk as `[r, g, b]`, components usually 0-1.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rgb(pub glam::Vec3);

impl From<Vec3> for glam::Vec3 {
    fn from(src: Vec3) -> glam::Vec3 {
        src.0
    }
}
impl From<glam::Vec3> for Vec3 {
    fn from(src: glam::Vec3) -> Vec3 {
        Vec3(src)
    }
}
impl From<Rgb> for glam::Vec3 {
    fn from(src: Rgb) -> glam::Vec3 {
        src.0
    }
}
impl From<glam::Vec3> for Rgb {
    fn from(src: glam::Vec3) -> Rgb {
        Rgb(src)
    }
}

struct Vec3Deserializer;
impl<'de> Visitor<'de> for Vec3Deserializer {
    type Value = glam::Vec3;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence of three numbers")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let x: f32 = seq
            .next_element()?
            .ok_or_else(|| A::Error::invalid_length(0, &self))?;
        let y: f32 = seq
            .next_element()?
            .ok_or_else(|| A::Error::invalid_length(1, &self))?;
        let z: f32 = seq
            .next_element()?
            .ok_or_else(|| A::Error::invalid_length(2, &self))?;
        Ok(glam::Vec3 { x, y, z })
    }
}

fn serialize_components<S>(v: &glam::Vec3, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    use serde::ser::SerializeSeq;
    let mut seq = serializer.serialize_seq(Some(3))?;
    seq.serialize_element(&v.x)?;
    seq.serialize_element(&v.y)?;
    seq.serialize_element(&v.z)?;
    seq.end()
}

impl Serialize for Vec3 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serialize_components(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Vec3 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(Vec3Deserializer).map(Vec3)
    }
}

impl Serialize for Rgb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serialize_components(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(Vec3Deserializer).map(Rgb)
    }
}
