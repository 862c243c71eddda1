use crate::{
    foundation::core::{Camera, TransformMatrix},
    foundation::error::ListcompResult,
    render::{blend::BlendMode, context::RenderingContext},
};

/// A scene element that emits draw commands against an active rendering context.
///
/// `R` is the renderer handle shared by every draw in a pass, `C` the rendering context type.
/// Implementations must not assume anything about which concrete context they receive beyond
/// its blend mode matching [`Drawable::blend_mode`].
pub trait Drawable<R: ?Sized, C: RenderingContext> {
    /// Blend mode this drawable must be composited with.
    fn blend_mode(&self) -> BlendMode;

    /// Emit draw commands for `self` under `ctx`.
    fn render(
        &self,
        renderer: &R,
        ctx: &C,
        camera: &Camera,
        parent: Option<&TransformMatrix>,
    ) -> ListcompResult<()>;
}

impl<R: ?Sized, C: RenderingContext, T: Drawable<R, C> + ?Sized> Drawable<R, C> for &T {
    fn blend_mode(&self) -> BlendMode {
        (**self).blend_mode()
    }

    fn render(
        &self,
        renderer: &R,
        ctx: &C,
        camera: &Camera,
        parent: Option<&TransformMatrix>,
    ) -> ListcompResult<()> {
        (**self).render(renderer, ctx, camera, parent)
    }
}

impl<R: ?Sized, C: RenderingContext, T: Drawable<R, C> + ?Sized> Drawable<R, C> for Box<T> {
    fn blend_mode(&self) -> BlendMode {
        (**self).blend_mode()
    }

    fn render(
        &self,
        renderer: &R,
        ctx: &C,
        camera: &Camera,
        parent: Option<&TransformMatrix>,
    ) -> ListcompResult<()> {
        (**self).render(renderer, ctx, camera, parent)
    }
}
