use crate::render::blend::BlendMode;

/// GPU state configuration that draw operations are issued under.
///
/// The compositor only ever borrows the caller's base context, so the base can neither be
/// mutated (`set_blend_mode` and `use_context` take `&mut self`) nor released (`release` takes
/// `self`). Contexts produced by [`RenderingContext::get_clone`] are owned values; consuming
/// them in `release` makes reuse after release a compile error.
pub trait RenderingContext: Sized {
    /// Blend mode this context draws with.
    fn blend_mode(&self) -> BlendMode;

    /// Allocate a new, independent context copying the current state of `self`.
    fn get_clone(&self) -> Self;

    /// Change the blend mode of this context.
    fn set_blend_mode(&mut self, mode: BlendMode);

    /// Make this context the current GPU state target.
    fn use_context(&mut self);

    /// Relinquish this context.
    fn release(self);
}

/// Owned handle to a cloned context that is released exactly once.
///
/// Release happens either explicitly via [`ContextGuard::release`] or, on any other exit path
/// (error propagation, unwinding), when the guard is dropped.
#[derive(Debug)]
pub struct ContextGuard<C: RenderingContext> {
    // `Some` until released.
    ctx: Option<C>,
}

impl<C: RenderingContext> ContextGuard<C> {
    /// Clone `base`, switch the clone to `mode`, and activate it.
    pub fn acquire(base: &C, mode: BlendMode) -> Self {
        let mut guard = Self {
            ctx: Some(base.get_clone()),
        };
        if let Some(ctx) = guard.ctx.as_mut() {
            ctx.set_blend_mode(mode);
            ctx.use_context();
        }
        guard
    }

    /// Borrow the guarded context.
    pub fn get(&self) -> &C {
        match &self.ctx {
            Some(ctx) => ctx,
            None => unreachable!("context guard accessed after release"),
        }
    }

    /// Release the guarded context now.
    pub fn release(mut self) {
        if let Some(ctx) = self.ctx.take() {
            ctx.release();
        }
    }
}

impl<C: RenderingContext> Drop for ContextGuard<C> {
    fn drop(&mut self) {
        if let Some(ctx) = self.ctx.take() {
            tracing::debug!(
                blend = %ctx.blend_mode(),
                "releasing cloned context on early exit"
            );
            ctx.release();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/context.rs"]
mod tests;
