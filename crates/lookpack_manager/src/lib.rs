//! Save and load marker look properties to json look files.

pub mod scene;

use std::path::Path;

use indexmap::IndexMap;
use lookpack_models::look::MarkerLook;
use miette::{miette, Context, IntoDiagnostic, Result};
use tracing::{debug, info, warn};

use crate::scene::{Scene, SceneModel};

/// Save the looks of `objects` into one json file at `path`.
///
/// Objects that are not markers are skipped with a warning, the rest of the
/// batch still goes through. When two objects share a name the later one
/// overwrites the earlier entry.
pub fn save(path: &Path, objects: &[&dyn SceneModel]) -> Result<()> {
    info!("saving looks of {} objects to {path:?}", objects.len());
    let mut data: IndexMap<String, MarkerLook> = IndexMap::new();
    for object in objects {
        let Some(marker) = object.as_marker() else {
            warn!("not a marker, ignored: {}", object.name());
            continue;
        };
        data.insert(object.name().to_string(), MarkerLook::from_marker(marker)?);
    }

    let json = serde_json::to_string_pretty(&data)
        .into_diagnostic()
        .wrap_err("failed to serialize look data")?;
    std::fs::write(path, json)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to write look file {path:?}"))
}

/// Load the look file at `path` and apply each entry to the marker of the
/// same name in `scene`.
///
/// With a `namespace`, an entry named `name` resolves as `"namespace:name"`.
/// A malformed file or an entry with no matching marker in the scene aborts
/// the whole load.
pub fn load(path: &Path, namespace: Option<&str>, scene: &mut dyn Scene) -> Result<()> {
    let contents = std::fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read look file {path:?}"))?;
    let data: IndexMap<String, MarkerLook> = serde_json::from_str(&contents)
        .into_diagnostic()
        .wrap_err_with(|| format!("invalid look file {path:?}"))?;

    info!("loading {} looks from {path:?}", data.len());
    for (name, look) in &data {
        let full_name = match namespace {
            Some(namespace) => format!("{namespace}:{name}"),
            None => name.clone(),
        };
        let marker = scene
            .find_marker_by_name(&full_name)
            .ok_or_else(|| miette!("no marker named {full_name:?} in scene"))?;
        look.apply(marker)?;
        debug!("applied look to {full_name}");
    }
    Ok(())
}
