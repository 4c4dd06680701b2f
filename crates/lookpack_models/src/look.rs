use miette::{miette, Result};
use serde::{Deserialize, Serialize};

use crate::{
    model::MarkerModel,
    serde_glam::{Rgb, Vec3},
    shape::MarkerShape,
};

/// Name of the boolean sub-property controlling the link line to the parent.
pub const PARENT_LINK_PROPERTY: &str = "Show Parent Link";

/// The subset of a marker's display properties worth persisting.
///
/// One record per marker, keyed by the marker's name in the look file.
/// Holds no reference back to any scene object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerLook {
    pub offset_translation: Vec3,
    /// Degrees, XYZ order.
    pub offset_rotation: Vec3,
    pub offset_scaling: Vec3,
    pub look: MarkerShape,
    pub size: f32,
    pub color: Rgb,
    pub parent_link: bool,
    pub length: f32,
}

impl MarkerLook {
    /// Read the look off a live marker.
    pub fn from_marker(marker: &dyn MarkerModel) -> Result<Self> {
        let parent_link = marker
            .bool_property(PARENT_LINK_PROPERTY)
            .ok_or_else(|| miette!("marker has no {PARENT_LINK_PROPERTY:?} property"))?;
        Ok(Self {
            offset_translation: marker.offset_translation().into(),
            offset_rotation: marker.offset_rotation().into(),
            offset_scaling: marker.offset_scaling().into(),
            look: marker.shape(),
            size: marker.size(),
            color: marker.color().into(),
            parent_link,
            length: marker.length(),
        })
    }

    /// Write every field of this record onto `marker`.
    pub fn apply(&self, marker: &mut dyn MarkerModel) -> Result<()> {
        marker.set_shape(self.look);
        marker.set_size(self.size);
        marker.set_offset_translation(self.offset_translation.into());
        marker.set_offset_rotation(self.offset_rotation.into());
        marker.set_offset_scaling(self.offset_scaling.into());
        marker.set_color(self.color.into());
        if !marker.set_bool_property(PARENT_LINK_PROPERTY, self.parent_link) {
            return Err(miette!("marker has no {PARENT_LINK_PROPERTY:?} property"));
        }
        marker.set_length(self.length);
        Ok(())
    }
}
