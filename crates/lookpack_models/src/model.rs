use glam::Vec3;

use crate::shape::MarkerShape;

/// Property surface of a marker-like scene object.
///
/// Host integrations implement this over live scene objects; tests use an
/// in-memory double. The getters and setters map one to one to the host
/// properties a [`crate::look::MarkerLook`] covers.
pub trait MarkerModel {
    fn offset_translation(&self) -> Vec3;
    fn set_offset_translation(&mut self, value: Vec3);

    fn offset_rotation(&self) -> Vec3;
    fn set_offset_rotation(&mut self, value: Vec3);

    fn offset_scaling(&self) -> Vec3;
    fn set_offset_scaling(&mut self, value: Vec3);

    fn shape(&self) -> MarkerShape;
    fn set_shape(&mut self, value: MarkerShape);

    fn size(&self) -> f32;
    fn set_size(&mut self, value: f32);

    fn color(&self) -> Vec3;
    fn set_color(&mut self, value: Vec3);

    fn length(&self) -> f32;
    fn set_length(&mut self, value: f32);

    /// Look up a named boolean sub-property, `None` when the object does not
    /// carry it.
    fn bool_property(&self, name: &str) -> Option<bool>;

    /// Set a named boolean sub-property. Returns false when the object does
    /// not carry it.
    fn set_bool_property(&mut self, name: &str, value: bool) -> bool;
}
