//! Contracts for the collaborators around the engine.
//!
//! The engine never touches browser or platform state itself; the view
//! layer injects implementations of these traits.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::mode::Mode;

/// Reads text aloud. Holds at most one utterance: `speak` replaces any
/// utterance still in flight.
pub trait SpeechAdapter {
    fn speak(&mut self, text: &str, rate: f32);
    fn stop(&mut self);
    fn is_speaking(&self) -> bool;
}

/// Stand-in for a platform with no speech synthesis. Every call is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableSpeech;

impl SpeechAdapter for UnavailableSpeech {
    fn speak(&mut self, text: &str, _rate: f32) {
        tracing::debug!(chars = text.len(), "speech unavailable, dropping utterance");
    }

    fn stop(&mut self) {}

    fn is_speaking(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastSeverity {
    #[default]
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub severity: ToastSeverity,
}

impl Toast {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: ToastSeverity::Default,
        }
    }

    pub fn destructive(mut self) -> Self {
        self.severity = ToastSeverity::Destructive;
        self
    }
}

/// Shows transient messages. Failures stay inside the implementation.
pub trait ToastNotifier: Send + Sync {
    fn notify(&self, toast: &Toast);
}

/// One point handed to the chart renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDatum {
    pub name: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Receives the sensory-break signal. Gets the mode only, never the profile.
pub trait SensoryBreakListener: Send + Sync {
    fn on_sensory_break(&self, mode: Mode);
}

/// Any toast notifier can surface a sensory break.
impl<T: ToastNotifier> SensoryBreakListener for T {
    fn on_sensory_break(&self, mode: Mode) {
        self.notify(&Toast::new(
            "Sensory break",
            format!("Take a moment. Content is paused ({mode} mode)."),
        ));
    }
}

/// Ordered, shareable set of break listeners.
#[derive(Clone, Default)]
pub struct ListenerRegistry {
    inner: Arc<Vec<Arc<dyn SensoryBreakListener>>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<L: SensoryBreakListener + 'static>(&mut self, listener: L) {
        self.register_shared(Arc::new(listener));
    }

    pub fn register_shared(&mut self, listener: Arc<dyn SensoryBreakListener>) {
        Arc::make_mut(&mut self.inner).push(listener);
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn dispatch(&self, mode: Mode) {
        for listener in self.inner.iter() {
            listener.on_sensory_break(mode);
        }
    }
}

impl std::fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.inner.len())
            .finish()
    }
}
