use tracing::debug;

use crate::models::{
    context::TemplateContext,
    template::{RenderedMessage, TemplateCategory, TriggerType},
};

/// Callback fired with the operator's chosen message. Consumed on `select`,
/// dropped unfired on `cancel` or replacement.
pub type SendCallback = Box<dyn FnOnce(&str)>;

struct PickerSession {
    category: TemplateCategory,
    context: TemplateContext,
    on_send: SendCallback,
}

/// Read model handed to the presentation surface. The callback is deliberately
/// absent: the surface reports the choice back through [`PickerCoordinator::select`].
#[derive(Debug)]
pub struct PickerView<'a> {
    pub category: TemplateCategory,
    pub context: &'a TemplateContext,
}

/// Single-flight picker session tracker. One instance lives for the whole
/// app and is borrowed mutably by every trigger site; at most one session is
/// open, and re-entrant `open` replaces it (last write wins).
#[derive(Default)]
pub struct PickerCoordinator {
    session: Option<PickerSession>,
}

impl PickerCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn view(&self) -> Option<PickerView<'_>> {
        self.session.as_ref().map(|session| PickerView {
            category: session.category,
            context: &session.context,
        })
    }

    /// Opens a session for `trigger`. An already-open session is replaced
    /// wholesale and its callback is never invoked.
    pub fn open(&mut self, trigger: TriggerType, context: TemplateContext, on_send: SendCallback) {
        let category = trigger.category();

        if let Some(previous) = &self.session {
            debug!(
                previous = %previous.category,
                next = %category,
                "Replacing active picker session"
            );
        }

        self.session = Some(PickerSession {
            category,
            context,
            on_send,
        });
    }

    /// Fires the stored callback with `message`, then returns to idle.
    /// A stale select with no open session is a no-op.
    pub fn select(&mut self, message: &str) {
        if let Some(session) = self.session.take() {
            debug!(category = %session.category, "Picker selection made");
            (session.on_send)(message);
        }
    }

    /// Returns to idle without firing anything.
    pub fn cancel(&mut self) {
        if self.session.take().is_some() {
            debug!("Picker session cancelled");
        }
    }
}

/// Capability the modal/sheet implements: shown the rendered candidates,
/// returns the operator's final choice, or `None` for a dismissal.
pub trait PresentPicker {
    fn choose(&self, options: &[RenderedMessage]) -> Option<String>;
}
