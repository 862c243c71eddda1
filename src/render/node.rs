/// Common surface of every render node.
pub trait RenderNode {
    /// Node name, used in logs and traces.
    fn name(&self) -> &str;

    /// Options the node was built with.
    fn opts(&self) -> &NodeOpts;
}

/// Per-node configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NodeOpts {
    /// Record a [`crate::TraceEvent`] for every context transition and draw.
    #[serde(default)]
    pub trace: bool,
}
