pub mod look;
pub mod model;
pub mod serde_glam;
pub mod shape;
