pub(crate) mod model;
pub(crate) mod pipeline;
pub(crate) mod recorder;
