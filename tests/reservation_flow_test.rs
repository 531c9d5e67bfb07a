use async_trait::async_trait;
use chrono::NaiveDate;
use reservation_form::domain::model::{FieldIssue, FormSnapshot, ReservationInput, SubmissionOutcome};
use reservation_form::domain::ports::{FormView, SubmissionPort};
use reservation_form::{
    FeedbackMessage, FieldId, FixedClock, FormConfig, InMemoryFormView, MessageKind,
    ReservationController, SubmitAttempt, SubmitState,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio_test::assert_ok;

const TODAY: &str = "2026-10-16";

#[derive(Clone)]
struct MockPort {
    calls: Arc<AtomicUsize>,
    delay: Duration,
    outcome: SubmissionOutcome,
}

impl MockPort {
    fn succeeding() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            delay: Duration::from_millis(1500),
            outcome: SubmissionOutcome::Success("Table booked!".to_string()),
        }
    }

    fn failing() -> Self {
        Self {
            outcome: SubmissionOutcome::Failure("Backend unavailable".to_string()),
            ..Self::succeeding()
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SubmissionPort for MockPort {
    async fn submit(&self, _reservation: &ReservationInput) -> SubmissionOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        self.outcome.clone()
    }
}

type Controller = ReservationController<InMemoryFormView, MockPort, FixedClock>;

fn today() -> NaiveDate {
    NaiveDate::parse_from_str(TODAY, "%Y-%m-%d").unwrap()
}

fn setup(port: MockPort) -> (Arc<InMemoryFormView>, Controller) {
    let view = Arc::new(InMemoryFormView::with_label("Reserve Your Table"));
    let controller = ReservationController::new(
        Arc::clone(&view),
        port,
        FixedClock(today()),
        FormConfig::default(),
    );
    controller.initialize();
    (view, controller)
}

fn valid_input() -> FormSnapshot {
    FormSnapshot {
        name: "Ann".to_string(),
        email: "a@b.co".to_string(),
        phone: "555-1234".to_string(),
        guests: "2".to_string(),
        date: TODAY.to_string(),
        time: "18:00".to_string(),
        message: String::new(),
    }
}

#[test]
fn test_initialize_prefills_today() {
    let (view, _controller) = setup(MockPort::succeeding());
    assert_eq!(view.field(FieldId::Date), TODAY);
}

#[tokio::test(start_paused = true)]
async fn test_valid_reservation_end_to_end() {
    let port = MockPort::succeeding();
    let (view, controller) = setup(port.clone());
    view.fill(&valid_input());
    view.set_field(FieldId::Message, "window seat");

    let controller = Arc::new(controller);
    let handle = tokio::spawn({
        let controller = Arc::clone(&controller);
        async move { controller.submit().await }
    });

    // 送出中：按鈕停用並顯示處理中文字
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(controller.state(), SubmitState::Submitting);
    assert!(view.is_busy());
    assert_eq!(view.submit_label(), "Booking Your Table... 🌊");
    assert_eq!(view.message(), None);

    let attempt = assert_ok!(handle.await);

    assert_eq!(
        attempt,
        SubmitAttempt::Settled(SubmissionOutcome::Success("Table booked!".to_string()))
    );
    assert_eq!(port.calls(), 1);
    assert_eq!(controller.state(), SubmitState::Idle);
    assert!(!view.is_busy());
    assert_eq!(view.submit_label(), "Reserve Your Table");
    assert_eq!(view.message(), Some(FeedbackMessage::success("Table booked!")));

    let values = view.values();
    assert!(values.name.is_empty());
    assert!(values.email.is_empty());
    assert!(values.message.is_empty());
    assert_eq!(values.date, TODAY);
}

#[tokio::test(start_paused = true)]
async fn test_invalid_name_and_email_are_rejected() {
    let port = MockPort::succeeding();
    let (view, controller) = setup(port.clone());
    view.fill(&FormSnapshot {
        name: String::new(),
        email: "not-an-email".to_string(),
        ..valid_input()
    });

    let attempt = controller.submit().await;

    let SubmitAttempt::Rejected(result) = attempt else {
        panic!("expected the form to be rejected");
    };
    assert_eq!(result.issue(FieldId::Name), Some(FieldIssue::Missing));
    assert_eq!(result.issue(FieldId::Email), Some(FieldIssue::Malformed));
    assert_eq!(view.errors().into_iter().collect::<Vec<_>>(), vec![FieldId::Name, FieldId::Email]);
    assert_eq!(
        view.message(),
        Some(FeedbackMessage::error("Please fill in all required fields correctly."))
    );
    assert_eq!(port.calls(), 0);
    assert_eq!(controller.state(), SubmitState::Idle);
    assert!(!view.is_busy());
}

#[tokio::test(start_paused = true)]
async fn test_second_submit_while_in_flight_is_ignored() {
    let port = MockPort::succeeding();
    let (view, controller) = setup(port.clone());
    view.fill(&valid_input());

    let (first, second) = tokio::join!(controller.submit(), controller.submit());

    assert!(matches!(first, SubmitAttempt::Settled(SubmissionOutcome::Success(_))));
    assert_eq!(second, SubmitAttempt::Ignored);
    assert_eq!(port.calls(), 1);
    assert_eq!(view.message_history().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_past_date_gets_specific_message() {
    let (view, controller) = setup(MockPort::succeeding());
    view.fill(&FormSnapshot {
        date: "2026-10-15".to_string(),
        ..valid_input()
    });

    let attempt = controller.submit().await;

    assert!(matches!(attempt, SubmitAttempt::Rejected(ref r) if r.only_past_date()));
    assert!(view.has_error(FieldId::Date));
    assert_eq!(
        view.message(),
        Some(FeedbackMessage::error("Please select a date in the future."))
    );
}

#[tokio::test(start_paused = true)]
async fn test_failed_submission_keeps_form_for_retry() {
    let port = MockPort::failing();
    let (view, controller) = setup(port.clone());
    view.fill(&valid_input());

    let attempt = controller.submit().await;

    assert_eq!(
        attempt,
        SubmitAttempt::Settled(SubmissionOutcome::Failure("Backend unavailable".to_string()))
    );
    let message = view.message().unwrap();
    assert_eq!(message.kind, MessageKind::Error);
    assert_eq!(view.values(), valid_input());
    assert!(!view.is_busy());
    assert_eq!(view.submit_label(), "Reserve Your Table");

    // 使用者可以直接重送
    controller.submit().await;
    assert_eq!(port.calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_messages_replace_and_expire() {
    let (view, controller) = setup(MockPort::succeeding());

    controller.submit().await;
    assert_eq!(view.message_history().len(), 1);

    tokio::time::sleep(Duration::from_secs(2)).await;
    view.fill(&valid_input());
    controller.submit().await;

    // 新的送出會先清除舊訊息，畫面上只剩一則
    assert_eq!(view.message(), Some(FeedbackMessage::success("Table booked!")));
    assert_eq!(view.message_history().len(), 2);

    tokio::time::sleep(Duration::from_millis(4900)).await;
    assert!(view.message().is_some());
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(view.message(), None);
}

#[tokio::test(start_paused = true)]
async fn test_fixing_a_field_clears_its_flag() {
    let (view, controller) = setup(MockPort::succeeding());
    view.fill(&FormSnapshot {
        name: String::new(),
        email: String::new(),
        ..valid_input()
    });

    controller.submit().await;
    assert!(view.has_error(FieldId::Name));
    assert!(view.has_error(FieldId::Email));

    view.set_field(FieldId::Name, "Ann");
    controller.on_field_input(FieldId::Name);
    view.set_field(FieldId::Email, "   ");
    controller.on_field_blur(FieldId::Email);

    assert!(!view.has_error(FieldId::Name));
    assert!(view.has_error(FieldId::Email));
}

#[test]
fn test_validate_refreshes_flags() {
    let (view, controller) = setup(MockPort::succeeding());
    view.set_error(FieldId::Phone, true);
    view.fill(&valid_input());

    let result = controller.validate();

    assert!(result.is_valid());
    assert!(view.errors().is_empty());
    assert_eq!(result, controller.validate());
}

#[test]
fn test_date_change_suggests_time() {
    let (view, controller) = setup(MockPort::succeeding());

    // 2026-10-18 是星期日
    view.set_field(FieldId::Date, "2026-10-18");
    controller.on_date_changed();
    assert_eq!(view.field(FieldId::Time), "12:00");

    // 已有時間時不覆蓋
    view.set_field(FieldId::Date, "2026-10-19");
    controller.on_date_changed();
    assert_eq!(view.field(FieldId::Time), "12:00");

    view.set_field(FieldId::Time, "");
    view.set_field(FieldId::Date, "2026-10-17");
    controller.on_date_changed();
    assert_eq!(view.field(FieldId::Time), "19:00");
}

#[test]
fn test_large_party_sets_notes_hint() {
    let (view, controller) = setup(MockPort::succeeding());

    view.set_field(FieldId::Guests, "4");
    controller.on_guests_changed();
    assert_eq!(view.placeholder(FieldId::Message), None);

    view.set_field(FieldId::Guests, "8");
    controller.on_guests_changed();
    let hint = view.placeholder(FieldId::Message).unwrap();
    assert!(hint.starts_with("For parties of 7+"));
}

#[tokio::test(start_paused = true)]
async fn test_abandoned_submit_unlocks_the_form() {
    let port = MockPort::succeeding();
    let (view, controller) = setup(port.clone());
    view.fill(&valid_input());

    // 呼叫端逾時放棄等待，送出流程被中途丟棄
    let abandoned = tokio::time::timeout(Duration::from_millis(100), controller.submit()).await;
    assert!(abandoned.is_err());

    assert_eq!(controller.state(), SubmitState::Idle);
    assert!(!view.is_busy());
    assert_eq!(view.submit_label(), "Reserve Your Table");

    let attempt = controller.submit().await;

    assert!(matches!(attempt, SubmitAttempt::Settled(SubmissionOutcome::Success(_))));
    assert_eq!(port.calls(), 2);
}
