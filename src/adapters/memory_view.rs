use crate::domain::model::{FeedbackMessage, FieldId, FormSnapshot};
use crate::domain::ports::FormView;
use std::collections::{BTreeSet, HashMap};
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
struct ViewState {
    fields: FormSnapshot,
    errors: BTreeSet<FieldId>,
    placeholders: HashMap<FieldId, String>,
    submit_label: String,
    busy: bool,
    message: Option<FeedbackMessage>,
    shown: Vec<FeedbackMessage>,
}

/// Headless form used by the CLI and the test-suite.
#[derive(Debug)]
pub struct InMemoryFormView {
    state: Mutex<ViewState>,
}

impl InMemoryFormView {
    pub fn new() -> Self {
        Self::with_label("Reserve Your Table")
    }

    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            state: Mutex::new(ViewState {
                submit_label: label.into(),
                ..ViewState::default()
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ViewState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Overwrite every non-empty value of `snapshot` into the form.
    pub fn fill(&self, snapshot: &FormSnapshot) {
        let mut state = self.lock();
        for field in FieldId::ALL {
            let value = snapshot.get(field);
            if !value.is_empty() {
                state.fields.set(field, value);
            }
        }
    }

    pub fn values(&self) -> FormSnapshot {
        self.lock().fields.clone()
    }

    pub fn errors(&self) -> BTreeSet<FieldId> {
        self.lock().errors.clone()
    }

    pub fn has_error(&self, field: FieldId) -> bool {
        self.lock().errors.contains(&field)
    }

    pub fn is_busy(&self) -> bool {
        self.lock().busy
    }

    pub fn placeholder(&self, field: FieldId) -> Option<String> {
        self.lock().placeholders.get(&field).cloned()
    }

    pub fn message(&self) -> Option<FeedbackMessage> {
        self.lock().message.clone()
    }

    /// Every message ever shown, oldest first.
    pub fn message_history(&self) -> Vec<FeedbackMessage> {
        self.lock().shown.clone()
    }
}

impl Default for InMemoryFormView {
    fn default() -> Self {
        Self::new()
    }
}

impl FormView for InMemoryFormView {
    fn field(&self, field: FieldId) -> String {
        self.lock().fields.get(field).to_string()
    }

    fn set_field(&self, field: FieldId, value: &str) {
        self.lock().fields.set(field, value);
    }

    fn set_error(&self, field: FieldId, flagged: bool) {
        let mut state = self.lock();
        if flagged {
            state.errors.insert(field);
        } else {
            state.errors.remove(&field);
        }
    }

    fn clear_errors(&self) {
        self.lock().errors.clear();
    }

    fn set_placeholder(&self, field: FieldId, text: &str) {
        self.lock().placeholders.insert(field, text.to_string());
    }

    fn submit_label(&self) -> String {
        self.lock().submit_label.clone()
    }

    fn set_busy(&self, busy: bool, label: &str) {
        let mut state = self.lock();
        state.busy = busy;
        state.submit_label = label.to_string();
    }

    fn show_message(&self, message: &FeedbackMessage) {
        let mut state = self.lock();
        state.message = Some(message.clone());
        state.shown.push(message.clone());
    }

    fn clear_message(&self) {
        self.lock().message = None;
    }

    fn reset(&self) {
        let mut state = self.lock();
        state.fields = FormSnapshot::default();
        state.errors.clear();
    }
}
