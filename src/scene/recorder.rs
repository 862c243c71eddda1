use std::cell::RefCell;

use crate::{
    foundation::core::{Camera, TransformMatrix},
    foundation::error::{ListcompError, ListcompResult},
    render::{
        blend::BlendMode,
        context::RenderingContext,
        drawable::Drawable,
        recording::{ContextId, RecordingContext},
    },
    scene::model::SceneItem,
};

/// A draw submitted by a [`SceneItem`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DrawRecord {
    /// Item that was drawn.
    pub item: String,
    /// Context the item was drawn under.
    pub context: ContextId,
    /// Blend mode of that context at draw time.
    pub blend: BlendMode,
    /// Camera id the draw went through.
    pub camera: u32,
    /// Whether a parent transform was supplied.
    pub nested: bool,
}

/// Renderer handle that collects draw submissions instead of talking to a GPU.
#[derive(Debug, Default)]
pub struct DrawRecorder {
    draws: RefCell<Vec<DrawRecord>>,
}

impl DrawRecorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws recorded so far, in submission order.
    pub fn draws(&self) -> Vec<DrawRecord> {
        self.draws.borrow().clone()
    }

    /// Take the recorded draws, leaving the recorder empty.
    pub fn take(&self) -> Vec<DrawRecord> {
        std::mem::take(&mut *self.draws.borrow_mut())
    }
}

impl Drawable<DrawRecorder, RecordingContext> for SceneItem {
    fn blend_mode(&self) -> BlendMode {
        self.blend
    }

    fn render(
        &self,
        renderer: &DrawRecorder,
        ctx: &RecordingContext,
        camera: &Camera,
        parent: Option<&TransformMatrix>,
    ) -> ListcompResult<()> {
        if ctx.blend_mode() != self.blend {
            return Err(ListcompError::draw(format!(
                "item '{}' wants {} but context {} is {}",
                self.id,
                self.blend,
                ctx.id(),
                ctx.blend_mode()
            )));
        }
        renderer.draws.borrow_mut().push(DrawRecord {
            item: self.id.clone(),
            context: ctx.id(),
            blend: ctx.blend_mode(),
            camera: camera.id,
            nested: parent.is_some(),
        });
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/recorder.rs"]
mod tests;
