use serde::{de::Visitor, Deserialize, Serialize};

/// Display shapes a marker can be drawn as.
///
/// A shape is stored on disk as its index in [`MarkerShape::TABLE`], so the
/// order below is part of the file format. Appending is fine, reordering or
/// inserting in the middle breaks every existing look file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerShape {
    AimRollGoal,
    Bone,
    Box,
    Capsule,
    Circle,
    Cube,
    HardCross,
    LightCross,
    None,
    RigidGoal,
    RotationGoal,
    Sphere,
    Square,
    Stick,
}

impl MarkerShape {
    pub const TABLE: [MarkerShape; 14] = [
        MarkerShape::AimRollGoal,
        MarkerShape::Bone,
        MarkerShape::Box,
        MarkerShape::Capsule,
        MarkerShape::Circle,
        MarkerShape::Cube,
        MarkerShape::HardCross,
        MarkerShape::LightCross,
        MarkerShape::None,
        MarkerShape::RigidGoal,
        MarkerShape::RotationGoal,
        MarkerShape::Sphere,
        MarkerShape::Square,
        MarkerShape::Stick,
    ];

    /// Position of this shape in the fixed table.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Reverse lookup, `None` when `index` is outside the table.
    pub fn from_index(index: usize) -> Option<MarkerShape> {
        Self::TABLE.get(index).copied()
    }
}

impl Serialize for MarkerShape {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u64(self.index() as u64)
    }
}

struct ShapeDeserializer;
impl<'de> Visitor<'de> for ShapeDeserializer {
    type Value = MarkerShape;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a marker shape index between 0 and 13")
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        usize::try_from(v)
            .ok()
            .and_then(MarkerShape::from_index)
            .ok_or_else(|| E::custom(format!("unknown marker shape index: {v}")))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        usize::try_from(v)
            .ok()
            .and_then(MarkerShape::from_index)
            .ok_or_else(|| E::custom(format!("unknown marker shape index: {v}")))
    }
}

impl<'de> Deserialize<'de> for MarkerShape {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_u64(ShapeDeserializer)
    }
}
