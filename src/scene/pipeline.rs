use crate::{
    foundation::error::ListcompResult,
    render::{
        compositor::{ListCompositor, RunStats, TraceEvent},
        node::NodeOpts,
        recording::{ContextCall, ContextLog},
    },
    scene::{
        model::SceneList,
        recorder::{DrawRecord, DrawRecorder},
    },
};

/// Everything observed while compositing a [`SceneList`].
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SceneReport {
    /// Compositor counters.
    pub stats: RunStats,
    /// Compositor trace (empty unless tracing was enabled).
    pub trace: Vec<TraceEvent>,
    /// Context calls, in order.
    pub calls: Vec<ContextCall>,
    /// Draw submissions, in order.
    pub draws: Vec<DrawRecord>,
}

/// Validate `scene` and composite it against recording collaborators.
///
/// Fails if the scene is invalid, if a draw fails, or if the context log shows an unbalanced
/// lifecycle afterwards.
#[tracing::instrument(skip_all, fields(items = scene.items.len()))]
pub fn composite_scene(scene: &SceneList, opts: NodeOpts) -> ListcompResult<SceneReport> {
    scene.validate()?;

    let log = ContextLog::new();
    let base = log.base_context(scene.base_blend);
    let mut compositor = ListCompositor::new(DrawRecorder::new(), opts);

    let stats = compositor.run(
        &base,
        scene.items.iter(),
        &scene.camera,
        scene.parent_transform.as_ref(),
    )?;
    log.check_balanced()?;

    Ok(SceneReport {
        stats,
        trace: compositor.last_trace().to_vec(),
        calls: log.calls(),
        draws: compositor.renderer().take(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/scene/pipeline.rs"]
mod tests;
