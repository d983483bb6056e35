use alloc::sync::Arc;

use crate::{Diagnostic, DiagnosticsSink, Edge, Orientation, ThrottleGate, VisibilityEntry};

/// A callback fired when an edge needs more content.
///
/// It receives the visibility report that triggered it; the return value is ignored. The
/// callback must not expect the new items to be measured yet: call
/// [`crate::ListController::settle`] once they are.
pub type EdgeCallback = Arc<dyn Fn(&VisibilityEntry) + Send + Sync>;

/// The data-only part of [`ListOptions`].
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`, so hosts can keep
/// it in their own configuration files.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ListConfig {
    pub orientation: Orientation,
    pub cooldown_ms: u64,
    pub suppress_diagnostics: bool,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::default(),
            cooldown_ms: ThrottleGate::DEFAULT_COOLDOWN_MS,
            suppress_diagnostics: false,
        }
    }
}

/// Configuration for [`crate::ListController`].
///
/// Callbacks are stored in `Arc`s, so cloning is cheap and adapters can rebuild options on
/// every render.
pub struct ListOptions {
    /// Fixed at construction. Later changes are reported and ignored.
    pub orientation: Orientation,
    /// Minimum time between two requests for the same edge.
    pub cooldown_ms: u64,
    pub has_more_at_head: bool,
    pub has_more_at_tail: bool,
    pub on_head_needed: Option<EdgeCallback>,
    pub on_tail_needed: Option<EdgeCallback>,
    pub on_diagnostic: Option<DiagnosticsSink>,
    /// Silences diagnostics, both the sink and `tracing` output.
    pub suppress_diagnostics: bool,
}

impl Clone for ListOptions {
    fn clone(&self) -> Self {
        Self {
            orientation: self.orientation,
            cooldown_ms: self.cooldown_ms,
            has_more_at_head: self.has_more_at_head,
            has_more_at_tail: self.has_more_at_tail,
            on_head_needed: self.on_head_needed.clone(),
            on_tail_needed: self.on_tail_needed.clone(),
            on_diagnostic: self.on_diagnostic.clone(),
            suppress_diagnostics: self.suppress_diagnostics,
        }
    }
}

impl ListOptions {
    pub fn new(orientation: Orientation) -> Self {
        Self::from_config(ListConfig {
            orientation,
            ..ListConfig::default()
        })
    }

    pub fn from_config(config: ListConfig) -> Self {
        Self {
            orientation: config.orientation,
            cooldown_ms: config.cooldown_ms,
            has_more_at_head: false,
            has_more_at_tail: false,
            on_head_needed: None,
            on_tail_needed: None,
            on_diagnostic: None,
            suppress_diagnostics: config.suppress_diagnostics,
        }
    }

    pub fn config(&self) -> ListConfig {
        ListConfig {
            orientation: self.orientation,
            cooldown_ms: self.cooldown_ms,
            suppress_diagnostics: self.suppress_diagnostics,
        }
    }

    pub fn has_more_at(&self, edge: Edge) -> bool {
        match edge {
            Edge::Head => self.has_more_at_head,
            Edge::Tail => self.has_more_at_tail,
        }
    }

    pub(crate) fn callback_for(&self, edge: Edge) -> Option<&EdgeCallback> {
        match edge {
            Edge::Head => self.on_head_needed.as_ref(),
            Edge::Tail => self.on_tail_needed.as_ref(),
        }
    }

    pub fn with_cooldown_ms(mut self, cooldown_ms: u64) -> Self {
        self.cooldown_ms = cooldown_ms;
        self
    }

    pub fn with_has_more(mut self, has_more_at_head: bool, has_more_at_tail: bool) -> Self {
        self.has_more_at_head = has_more_at_head;
        self.has_more_at_tail = has_more_at_tail;
        self
    }

    pub fn with_on_head_needed(
        mut self,
        on_head_needed: Option<impl Fn(&VisibilityEntry) + Send + Sync + 'static>,
    ) -> Self {
        self.on_head_needed = on_head_needed.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_tail_needed(
        mut self,
        on_tail_needed: Option<impl Fn(&VisibilityEntry) + Send + Sync + 'static>,
    ) -> Self {
        self.on_tail_needed = on_tail_needed.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_diagnostic(
        mut self,
        on_diagnostic: Option<impl Fn(&Diagnostic) + Send + Sync + 'static>,
    ) -> Self {
        self.on_diagnostic = on_diagnostic.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_suppress_diagnostics(mut self, suppress_diagnostics: bool) -> Self {
        self.suppress_diagnostics = suppress_diagnostics;
        self
    }
}

impl Default for ListOptions {
    fn default() -> Self {
        Self::from_config(ListConfig::default())
    }
}

impl core::fmt::Debug for ListOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListOptions")
            .field("orientation", &self.orientation)
            .field("cooldown_ms", &self.cooldown_ms)
            .field("has_more_at_head", &self.has_more_at_head)
            .field("has_more_at_tail", &self.has_more_at_tail)
            .field("suppress_diagnostics", &self.suppress_diagnostics)
            .finish_non_exhaustive()
    }
}
