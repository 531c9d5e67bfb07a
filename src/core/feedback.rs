use crate::domain::model::FeedbackMessage;
use crate::domain::ports::FormView;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Keeps at most one feedback message on the form and dismisses it after a
/// fixed delay.
///
/// Every `show` bumps a generation counter; a pending dismissal only clears
/// the view if no newer message has been shown since it was scheduled.
pub struct FeedbackPresenter<V: FormView + 'static> {
    view: Arc<V>,
    dismiss_after: Duration,
    generation: Arc<AtomicU64>,
}

impl<V: FormView + 'static> FeedbackPresenter<V> {
    pub fn new(view: Arc<V>, dismiss_after: Duration) -> Self {
        Self {
            view,
            dismiss_after,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Must be called from within a tokio runtime.
    pub fn show(&self, message: FeedbackMessage) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.view.clear_message();
        self.view.show_message(&message);
        tracing::debug!("Showing {:?} message: {}", message.kind, message.text);

        let view = Arc::clone(&self.view);
        let current = Arc::clone(&self.generation);
        let delay = self.dismiss_after;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if current.load(Ordering::SeqCst) == generation {
                view.clear_message();
                tracing::debug!("Feedback message dismissed after {:?}", delay);
            }
        });
    }

    pub fn clear(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.view.clear_message();
    }
}
