pub(crate) mod blend;
pub(crate) mod compositor;
pub(crate) mod context;
pub(crate) mod drawable;
pub(crate) mod node;
pub(crate) mod recording;
