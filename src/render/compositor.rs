use std::fmt;

use crate::{
    foundation::core::{Camera, TransformMatrix},
    foundation::error::ListcompResult,
    render::{
        blend::BlendMode,
        context::{ContextGuard, RenderingContext},
        drawable::Drawable,
        node::{NodeOpts, RenderNode},
    },
};

/// Name every [`ListCompositor`] reports through [`RenderNode::name`].
pub const LIST_COMPOSITOR_NAME: &str = "ListCompositor";

/// Counters for a single [`ListCompositor::run`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RunStats {
    /// Drawables whose draw operation completed.
    pub drawables: u64,
    /// Contexts allocated via `get_clone`.
    pub clones: u64,
    /// Cloned contexts released.
    pub releases: u64,
    /// Switches back to the base context.
    pub reverts: u64,
    /// Maximal runs of drawables sharing a blend mode.
    pub blend_runs: u64,
}

/// One step of a traced run, in the order it happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraceEvent {
    /// A clone was allocated for the run starting at `index`.
    Clone {
        /// Index of the drawable that triggered the clone.
        index: usize,
        /// Blend mode the clone was switched to.
        blend: BlendMode,
    },
    /// The active clone was released.
    Release {
        /// Blend mode of the released clone.
        blend: BlendMode,
    },
    /// The base context became active again at `index`.
    Revert {
        /// Index of the drawable that triggered the revert.
        index: usize,
    },
    /// Drawable `index` was drawn.
    Draw {
        /// Position of the drawable in the input list.
        index: usize,
        /// Blend mode of the active context.
        blend: BlendMode,
        /// Whether the active context was a clone.
        on_clone: bool,
    },
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEvent::Clone { index, blend } => write!(f, "clone   #{index} {blend}"),
            TraceEvent::Release { blend } => write!(f, "release {blend}"),
            TraceEvent::Revert { index } => write!(f, "revert  #{index}"),
            TraceEvent::Draw {
                index,
                blend,
                on_clone,
            } => {
                let target = if *on_clone { "clone" } else { "base" };
                write!(f, "draw    #{index} {blend} ({target})")
            }
        }
    }
}

// Which context draws go to. The base is passed alongside rather than stored so that it stays a
// plain borrow.
enum Active<C: RenderingContext> {
    OnBase,
    OnClone(ContextGuard<C>),
}

impl<C: RenderingContext> Active<C> {
    fn context<'a>(&'a self, base: &'a C) -> &'a C {
        match self {
            Active::OnBase => base,
            Active::OnClone(guard) => guard.get(),
        }
    }

    fn is_clone(&self) -> bool {
        matches!(self, Active::OnClone(_))
    }
}

/// Renders an ordered list of drawables, switching rendering contexts only when the blend
/// mode changes.
///
/// Each maximal run of drawables whose blend mode differs from the base context's is drawn
/// against a fresh clone of the base, switched to that mode. Runs matching the base mode are
/// drawn against the base itself. Clones are never reused across runs and are always released
/// before [`ListCompositor::run`] returns, including when a draw fails.
pub struct ListCompositor<R> {
    renderer: R,
    opts: NodeOpts,
    trace: Vec<TraceEvent>,
}

impl<R> ListCompositor<R> {
    /// Create a compositor drawing through `renderer`.
    pub fn new(renderer: R, opts: NodeOpts) -> Self {
        Self {
            renderer,
            opts,
            trace: Vec::new(),
        }
    }

    /// Renderer handle passed to every draw.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Consume the compositor and return its renderer handle.
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Events recorded by the most recent run. Empty unless [`NodeOpts::trace`] is set.
    pub fn last_trace(&self) -> &[TraceEvent] {
        &self.trace
    }

    /// Render `drawables` in order against `base`.
    ///
    /// `base` stays owned by the caller: its blend mode is never changed and it is never
    /// released. The camera and parent transform are forwarded untouched to every draw.
    ///
    /// A draw error is returned as-is after the active clone (if any) has been released.
    #[tracing::instrument(
        skip_all,
        fields(node = LIST_COMPOSITOR_NAME, drawables = tracing::field::Empty)
    )]
    pub fn run<C, D, I>(
        &mut self,
        base: &C,
        drawables: I,
        camera: &Camera,
        parent: Option<&TransformMatrix>,
    ) -> ListcompResult<RunStats>
    where
        C: RenderingContext,
        D: Drawable<R, C>,
        I: IntoIterator<Item = D>,
    {
        self.trace.clear();

        let base_mode = base.blend_mode();
        let mut active_mode = base_mode;
        let mut active = Active::<C>::OnBase;
        let mut stats = RunStats::default();

        for (index, drawable) in drawables.into_iter().enumerate() {
            let mode = drawable.blend_mode();

            if index == 0 || mode != active_mode {
                stats.blend_runs += 1;
            }

            if mode != active_mode {
                if let Active::OnClone(guard) = std::mem::replace(&mut active, Active::OnBase) {
                    guard.release();
                    stats.releases += 1;
                    self.record(TraceEvent::Release { blend: active_mode });
                }

                active_mode = mode;

                if active_mode == base_mode {
                    tracing::trace!(index, blend = %active_mode, "revert to base context");
                    stats.reverts += 1;
                    self.record(TraceEvent::Revert { index });
                } else {
                    tracing::trace!(index, blend = %active_mode, "clone context");
                    active = Active::OnClone(ContextGuard::acquire(base, active_mode));
                    stats.clones += 1;
                    self.record(TraceEvent::Clone {
                        index,
                        blend: active_mode,
                    });
                }
            }

            let drawn = drawable.render(&self.renderer, active.context(base), camera, parent);
            if let Err(err) = drawn {
                tracing::debug!(index, error = %err, "draw failed");
                if let Active::OnClone(guard) = active {
                    guard.release();
                    self.record(TraceEvent::Release { blend: active_mode });
                }
                return Err(err);
            }

            stats.drawables += 1;
            self.record(TraceEvent::Draw {
                index,
                blend: active_mode,
                on_clone: active.is_clone(),
            });
        }

        if let Active::OnClone(guard) = active {
            guard.release();
            stats.releases += 1;
            self.record(TraceEvent::Release { blend: active_mode });
        }

        tracing::Span::current().record("drawables", stats.drawables);
        tracing::debug!(
            drawables = stats.drawables,
            clones = stats.clones,
            blend_runs = stats.blend_runs,
            "list composited"
        );
        Ok(stats)
    }

    fn record(&mut self, event: TraceEvent) {
        if self.opts.trace {
            self.trace.push(event);
        }
    }
}

impl<R> RenderNode for ListCompositor<R> {
    fn name(&self) -> &str {
        LIST_COMPOSITOR_NAME
    }

    fn opts(&self) -> &NodeOpts {
        &self.opts
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
