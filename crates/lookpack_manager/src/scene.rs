use lookpack_models::model::MarkerModel;

/// A named scene object handed to [`crate::save`], marker or not.
pub trait SceneModel {
    fn name(&self) -> &str;

    /// Kind check: `Some` when the object is a marker eligible for saving.
    fn as_marker(&self) -> Option<&dyn MarkerModel>;
}

/// Name-based marker resolution against the live scene.
///
/// The host application owns the scene; this crate only ever asks it for
/// one marker at a time by fully qualified name.
pub trait Scene {
    fn find_marker_by_name(&mut self, name: &str) -> Option<&mut dyn MarkerModel>;
}
