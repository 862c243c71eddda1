use std::{cell::RefCell, collections::BTreeSet, fmt, rc::Rc};

use crate::{
    foundation::error::{ListcompError, ListcompResult},
    render::{blend::BlendMode, context::RenderingContext},
};

/// Identifier of a context created through a [`ContextLog`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ContextId(pub u32);

impl fmt::Display for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ctx{}", self.0)
    }
}

/// A call made on a [`RecordingContext`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum ContextCall {
    /// `source` was cloned into `id`.
    Clone {
        /// Context `get_clone` was called on.
        source: ContextId,
        /// Newly allocated context.
        id: ContextId,
    },
    /// Blend mode of `id` was changed.
    SetBlendMode {
        /// Mutated context.
        id: ContextId,
        /// New blend mode.
        blend: BlendMode,
    },
    /// `id` became the current context.
    Use {
        /// Activated context.
        id: ContextId,
    },
    /// `id` was released.
    Release {
        /// Released context.
        id: ContextId,
    },
}

#[derive(Debug, Default)]
struct LogState {
    next_id: u32,
    roots: BTreeSet<ContextId>,
    live: BTreeSet<ContextId>,
    calls: Vec<ContextCall>,
    current: Option<ContextId>,
    violations: Vec<String>,
}

impl LogState {
    fn alloc_id(&mut self) -> ContextId {
        let id = ContextId(self.next_id);
        self.next_id += 1;
        id
    }
}

/// Shared record of every call made on the contexts it created.
///
/// Cloning the log is cheap and yields another handle to the same record.
#[derive(Clone, Debug, Default)]
pub struct ContextLog {
    state: Rc<RefCell<LogState>>,
}

impl ContextLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a caller-owned base context with the given blend mode.
    ///
    /// Base contexts are not counted as clones; releasing one is recorded as a violation.
    pub fn base_context(&self, blend: BlendMode) -> RecordingContext {
        let id = {
            let mut st = self.state.borrow_mut();
            let id = st.alloc_id();
            st.roots.insert(id);
            id
        };
        RecordingContext {
            id,
            blend,
            log: self.clone(),
        }
    }

    /// All calls in the order they were made.
    pub fn calls(&self) -> Vec<ContextCall> {
        self.state.borrow().calls.clone()
    }

    /// Number of `get_clone` calls.
    pub fn clone_count(&self) -> usize {
        self.count(|c| matches!(c, ContextCall::Clone { .. }))
    }

    /// Number of `release` calls, including invalid ones.
    pub fn release_count(&self) -> usize {
        self.count(|c| matches!(c, ContextCall::Release { .. }))
    }

    /// Number of `use_context` calls.
    pub fn use_count(&self) -> usize {
        self.count(|c| matches!(c, ContextCall::Use { .. }))
    }

    /// Clones that have been allocated and not yet released.
    pub fn live_clones(&self) -> usize {
        self.state.borrow().live.len()
    }

    /// Most recently activated context.
    pub fn current(&self) -> Option<ContextId> {
        self.state.borrow().current
    }

    /// Contract violations observed so far (releases of base or already released contexts,
    /// mutation of a base context).
    pub fn violations(&self) -> Vec<String> {
        self.state.borrow().violations.clone()
    }

    /// Fail if any violation was recorded or any clone is still live.
    pub fn check_balanced(&self) -> ListcompResult<()> {
        let st = self.state.borrow();
        if let Some(first) = st.violations.first() {
            return Err(ListcompError::context(first.clone()));
        }
        if !st.live.is_empty() {
            let ids = st
                .live
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            return Err(ListcompError::context(format!(
                "cloned contexts never released: {ids}"
            )));
        }
        Ok(())
    }

    fn count(&self, pred: impl Fn(&ContextCall) -> bool) -> usize {
        self.state.borrow().calls.iter().filter(|c| pred(c)).count()
    }
}

/// In-memory rendering context that logs every call to a shared [`ContextLog`].
///
/// It performs no GPU work. It is the reference implementation used by the CLI and for
/// verifying context lifetimes.
#[derive(Debug)]
pub struct RecordingContext {
    id: ContextId,
    blend: BlendMode,
    log: ContextLog,
}

impl RecordingContext {
    /// Identifier of this context within its log.
    pub fn id(&self) -> ContextId {
        self.id
    }

    /// Log this context records into.
    pub fn log(&self) -> &ContextLog {
        &self.log
    }
}

impl RenderingContext for RecordingContext {
    fn blend_mode(&self) -> BlendMode {
        self.blend
    }

    fn get_clone(&self) -> Self {
        let id = {
            let mut st = self.log.state.borrow_mut();
            let id = st.alloc_id();
            st.live.insert(id);
            st.calls.push(ContextCall::Clone {
                source: self.id,
                id,
            });
            id
        };
        Self {
            id,
            blend: self.blend,
            log: self.log.clone(),
        }
    }

    fn set_blend_mode(&mut self, mode: BlendMode) {
        let mut st = self.log.state.borrow_mut();
        if st.roots.contains(&self.id) {
            st.violations
                .push(format!("blend mode of base context {} changed", self.id));
        }
        st.calls.push(ContextCall::SetBlendMode {
            id: self.id,
            blend: mode,
        });
        self.blend = mode;
    }

    fn use_context(&mut self) {
        let mut st = self.log.state.borrow_mut();
        st.calls.push(ContextCall::Use { id: self.id });
        st.current = Some(self.id);
    }

    fn release(self) {
        let mut st = self.log.state.borrow_mut();
        st.calls.push(ContextCall::Release { id: self.id });
        if st.roots.contains(&self.id) {
            st.violations.push(format!("base context {} released", self.id));
        } else if !st.live.remove(&self.id) {
            st.violations
                .push(format!("context {} released more than once", self.id));
        }
        if st.current == Some(self.id) {
            st.current = None;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/recording.rs"]
mod tests;
