pub use kurbo::Affine;

/// Transform matrix handed down from a parent container.
///
/// The compositor never inspects it; it is forwarded unchanged to every draw call.
pub type TransformMatrix = Affine;

/// Camera the list is rendered through.
///
/// Opaque to the compositor: it is borrowed for the duration of a run and passed to each
/// drawable as-is.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Camera {
    /// Camera identifier, stable within a scene.
    #[serde(default)]
    pub id: u32,
    /// World-to-view transform.
    #[serde(default = "identity")]
    pub view: Affine,
}

impl Camera {
    /// Create a camera with the given id and view transform.
    pub fn new(id: u32, view: Affine) -> Self {
        Self { id, view }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            id: 0,
            view: Affine::IDENTITY,
        }
    }
}

fn identity() -> Affine {
    Affine::IDENTITY
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
