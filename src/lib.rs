//! listcomp is a blend-run batching compositor for retained-mode renderers.
//!
//! Given an ordered list of drawables that share a parent rendering context, a
//! [`ListCompositor`] issues every draw in order while switching GPU state only when the blend
//! mode changes:
//!
//! 1. Drawables whose blend mode matches the base context are drawn against the base itself.
//! 2. Each maximal run of a different blend mode gets one fresh clone of the base, switched to
//!    that mode and activated.
//! 3. The clone is released when the run ends, when the list ends, or when a draw fails.
//!
//! The rendering context ([`RenderingContext`]) and the draw operation ([`Drawable`]) are
//! capabilities supplied by the caller. [`RecordingContext`], [`DrawRecorder`] and [`SceneList`]
//! are in-memory implementations used by the `listcomp` CLI and by tests.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Base is borrowed**: the caller's base context is never mutated or released.
//! - **Single-threaded**: a run completes synchronously inside the caller's render pass.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod render;
mod scene;

pub use foundation::core::{Affine, Camera, TransformMatrix};
pub use foundation::error::{ListcompError, ListcompResult};
pub use render::blend::BlendMode;
pub use render::compositor::{LIST_COMPOSITOR_NAME, ListCompositor, RunStats, TraceEvent};
pub use render::context::{ContextGuard, RenderingContext};
pub use render::drawable::Drawable;
pub use render::node::{NodeOpts, RenderNode};
pub use render::recording::{ContextCall, ContextId, ContextLog, RecordingContext};
pub use scene::model::{SceneItem, SceneList};
pub use scene::pipeline::{SceneReport, composite_scene};
pub use scene::recorder::{DrawRecord, DrawRecorder};
