use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::executor::{LocalPool, block_on};
use futures::task::LocalSpawnExt;

use super::*;
use crate::net::api::DeliveryError;
use crate::state::transcript::{Role, TranscriptState};

// =========================================================================
// RecordingView
// =========================================================================

#[derive(Clone, Default)]
struct RecordingView {
    transcript: Rc<RefCell<TranscriptState>>,
    input: Rc<RefCell<String>>,
    focused: Rc<Cell<bool>>,
    scrolls: Rc<Cell<usize>>,
    events: Rc<RefCell<Vec<&'static str>>>,
}

impl RecordingView {
    fn with_input(text: &str) -> Self {
        let view = Self::default();
        *view.input.borrow_mut() = text.to_owned();
        view
    }

    fn messages(&self) -> Vec<(Role, String)> {
        self.transcript
            .borrow()
            .messages()
            .map(|m| (m.role, m.text.clone()))
            .collect()
    }
}

impl TranscriptView for RecordingView {
    fn open_exchange(&self, request: Message) -> ExchangeId {
        self.events.borrow_mut().push("open");
        self.transcript.borrow_mut().open_exchange(request)
    }

    fn resolve_exchange(&self, id: ExchangeId, response: Message) {
        self.events.borrow_mut().push("resolve");
        self.transcript.borrow_mut().resolve_exchange(id, response);
    }

    fn remove_placeholder(&self) {
        self.events.borrow_mut().push("remove_placeholder");
        self.transcript.borrow_mut().remove_placeholder();
    }

    fn reset_input(&self) {
        self.events.borrow_mut().push("reset_input");
        self.input.borrow_mut().clear();
        self.focused.set(true);
    }

    fn scroll_to_bottom(&self) {
        self.events.borrow_mut().push("scroll");
        self.scrolls.set(self.scrolls.get() + 1);
    }
}

// =========================================================================
// Transports
// =========================================================================

/// Answers from a queue, recording what was sent.
#[derive(Clone, Default)]
struct ScriptedTransport {
    replies: Rc<RefCell<VecDeque<Result<String, DeliveryError>>>>,
    sent: Rc<RefCell<Vec<String>>>,
}

impl ScriptedTransport {
    fn replying(reply: Result<String, DeliveryError>) -> Self {
        let transport = Self::default();
        transport.replies.borrow_mut().push_back(reply);
        transport
    }
}

impl ChatTransport for ScriptedTransport {
    async fn send(&self, message: String) -> Result<String, DeliveryError> {
        self.sent.borrow_mut().push(message);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(DeliveryError::Request("no scripted reply".to_owned())))
    }
}

/// Each send waits on the next gate, so tests control completion order.
#[derive(Clone, Default)]
struct GatedTransport {
    gates: Rc<RefCell<VecDeque<oneshot::Receiver<Result<String, DeliveryError>>>>>,
}

impl GatedTransport {
    fn gate(&self) -> oneshot::Sender<Result<String, DeliveryError>> {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().push_back(rx);
        tx
    }
}

impl ChatTransport for GatedTransport {
    async fn send(&self, _message: String) -> Result<String, DeliveryError> {
        let gate = self.gates.borrow_mut().pop_front();
        match gate {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(DeliveryError::Request("gate dropped".to_owned()))),
            None => Err(DeliveryError::Request("no gate".to_owned())),
        }
    }
}

fn widget<T>(view: &RecordingView, transport: &T) -> ChatWidget<RecordingView, T>
where
    T: ChatTransport + Clone + 'static,
{
    ChatWidget::new(view.clone(), transport.clone(), WidgetStrings::english())
}

// =========================================================================
// Blank input
// =========================================================================

#[test]
fn whitespace_only_submit_is_noop() {
    let view = RecordingView::with_input("   ");
    let transport = ScriptedTransport::default();
    let w = widget(&view, &transport);

    for raw in ["", "   ", "\n\t  ", "\u{3000}"] {
        assert!(w.submit(raw).is_none(), "{raw:?} should be ignored");
    }

    assert!(view.events.borrow().is_empty());
    assert!(view.transcript.borrow().is_empty());
    assert!(view.transcript.borrow().placeholder_visible());
    assert!(transport.sent.borrow().is_empty());
    assert_eq!(*view.input.borrow(), "   ");
}

// =========================================================================
// Local render
// =========================================================================

#[test]
fn submit_renders_user_bubble_before_delivery() {
    let view = RecordingView::with_input("  Hello <b>  ");
    let transport = ScriptedTransport::replying(Ok("ignored".to_owned()));
    let w = widget(&view, &transport);

    let pending = w.submit("  Hello <b>  ").expect("non-blank input submits");

    {
        let transcript = view.transcript.borrow();
        assert_eq!(transcript.exchanges().len(), 1);
        let exchange = &transcript.exchanges()[0];
        assert_eq!(exchange.request.role, Role::User);
        assert_eq!(exchange.request.author, "You");
        assert_eq!(exchange.request.text, "Hello <b>");
        assert_eq!(exchange.request.body_html(), "Hello &lt;b&gt;");
        assert!(exchange.response.is_none());
        assert!(!transcript.placeholder_visible());
    }
    assert!(view.input.borrow().is_empty());
    assert!(view.focused.get());
    assert_eq!(
        *view.events.borrow(),
        vec!["open", "remove_placeholder", "reset_input", "scroll"]
    );
    assert!(transport.sent.borrow().is_empty(), "nothing is sent until the delivery runs");

    drop(pending);
}

#[test]
fn transport_receives_trimmed_text() {
    let view = RecordingView::default();
    let transport = ScriptedTransport::replying(Ok("ok".to_owned()));
    let w = widget(&view, &transport);

    block_on(w.submit("\n  what is in stock?  \n").unwrap());

    assert_eq!(*transport.sent.borrow(), vec!["what is in stock?".to_owned()]);
}

// =========================================================================
// Delivery outcomes
// =========================================================================

#[test]
fn successful_reply_appends_one_assistant_bubble() {
    let view = RecordingView::with_input("Hello");
    let transport = ScriptedTransport::replying(Ok("Hi there".to_owned()));
    let w = widget(&view, &transport);

    block_on(w.submit("Hello").unwrap());

    assert_eq!(
        view.messages(),
        vec![(Role::User, "Hello".to_owned()), (Role::Assistant, "Hi there".to_owned())]
    );
    assert!(!view.transcript.borrow().placeholder_visible());
    assert_eq!(view.scrolls.get(), 2);
}

#[test]
fn reply_markup_is_escaped_on_render() {
    let view = RecordingView::default();
    let transport = ScriptedTransport::replying(Ok("<img src=x onerror=alert(1)>".to_owned()));
    let w = widget(&view, &transport);

    block_on(w.submit("hi").unwrap());

    let transcript = view.transcript.borrow();
    let reply = transcript.exchanges()[0].response.as_ref().unwrap();
    assert_eq!(reply.text, "<img src=x onerror=alert(1)>");
    assert_eq!(reply.body_html(), "&lt;img src=x onerror=alert(1)&gt;");
}

#[test]
fn server_error_appends_apology_bubble() {
    let view = RecordingView::default();
    let transport = ScriptedTransport::replying(Err(DeliveryError::Status(500)));
    let w = widget(&view, &transport);

    block_on(w.submit("Hello").unwrap());

    let strings = WidgetStrings::english();
    assert_eq!(
        view.messages(),
        vec![(Role::User, "Hello".to_owned()), (Role::SystemError, strings.error_text.clone())]
    );
    let transcript = view.transcript.borrow();
    assert_eq!(transcript.exchanges()[0].response.as_ref().unwrap().author, "System");
}

#[test]
fn rejected_request_and_malformed_body_render_the_same_apology() {
    for failure in [
        DeliveryError::Request("offline".to_owned()),
        DeliveryError::Decode("missing field `reply`".to_owned()),
    ] {
        let view = RecordingView::default();
        let transport = ScriptedTransport::replying(Err(failure));
        let w = widget(&view, &transport);

        block_on(w.submit("Hello").unwrap());

        let messages = view.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1], (Role::SystemError, WidgetStrings::english().error_text));
    }
}

#[test]
fn widget_keeps_working_after_failure() {
    let view = RecordingView::default();
    let transport = ScriptedTransport::default();
    transport
        .replies
        .borrow_mut()
        .extend([Err(DeliveryError::Status(502)), Ok("second try".to_owned())]);
    let w = widget(&view, &transport);

    block_on(w.submit("first").unwrap());
    block_on(w.submit("again").unwrap());

    let roles: Vec<Role> = view.messages().into_iter().map(|(role, _)| role).collect();
    assert_eq!(roles, vec![Role::User, Role::SystemError, Role::User, Role::Assistant]);
}

// =========================================================================
// Concurrent submissions
// =========================================================================

#[test]
fn concurrent_replies_resolve_their_own_exchange() {
    let view = RecordingView::default();
    let transport = GatedTransport::default();
    let first_gate = transport.gate();
    let second_gate = transport.gate();
    let w = widget(&view, &transport);

    let mut pool = LocalPool::new();
    let spawner = pool.spawner();
    spawner.spawn_local(w.submit("first").unwrap()).unwrap();
    spawner.spawn_local(w.submit("second").unwrap()).unwrap();
    pool.run_until_stalled();

    assert_eq!(view.messages().len(), 2, "both user bubbles shown while awaiting");

    second_gate.send(Ok("reply to second".to_owned())).unwrap();
    pool.run_until_stalled();
    assert!(view.transcript.borrow().exchanges()[0].response.is_none());
    assert_eq!(
        view.transcript.borrow().exchanges()[1]
            .response
            .as_ref()
            .map(|m| m.text.clone()),
        Some("reply to second".to_owned())
    );

    first_gate.send(Err(DeliveryError::Status(500))).unwrap();
    pool.run_until_stalled();

    let roles: Vec<Role> = view.messages().into_iter().map(|(role, _)| role).collect();
    assert_eq!(roles, vec![Role::User, Role::SystemError, Role::User, Role::Assistant]);
}

// =========================================================================
// Keyboard and mount
// =========================================================================

#[test]
fn enter_submits_like_the_form() {
    let view = RecordingView::with_input("Hello");
    let transport = ScriptedTransport::replying(Ok("Hi there".to_owned()));
    let w = widget(&view, &transport);

    let pending = w
        .submit_on_key("Enter", false, false, "Hello")
        .expect("Enter submits non-blank input");
    assert_eq!(
        *view.events.borrow(),
        vec!["open", "remove_placeholder", "reset_input", "scroll"]
    );

    block_on(pending);

    assert_eq!(*transport.sent.borrow(), vec!["Hello".to_owned()]);
    assert_eq!(
        view.messages(),
        vec![(Role::User, "Hello".to_owned()), (Role::Assistant, "Hi there".to_owned())]
    );
}

#[test]
fn shift_enter_and_composing_enter_do_not_submit() {
    let view = RecordingView::with_input("line one");
    let transport = ScriptedTransport::replying(Ok("unused".to_owned()));
    let w = widget(&view, &transport);

    assert!(w.submit_on_key("Enter", true, false, "line one").is_none());
    assert!(w.submit_on_key("Enter", false, true, "line one").is_none());
    assert!(w.submit_on_key("a", false, false, "line one").is_none());

    assert!(view.events.borrow().is_empty());
    assert!(view.transcript.borrow().is_empty());
    assert!(transport.sent.borrow().is_empty());
    assert_eq!(*view.input.borrow(), "line one");
}

#[test]
fn enter_on_blank_input_is_noop() {
    let view = RecordingView::with_input("  ");
    let transport = ScriptedTransport::default();
    let w = widget(&view, &transport);

    assert!(w.submit_on_key("Enter", false, false, "  ").is_none());
    assert!(view.events.borrow().is_empty());
    assert!(transport.sent.borrow().is_empty());
}

#[test]
fn mount_scrolls_once_without_touching_transcript() {
    let view = RecordingView::default();
    let transport = ScriptedTransport::default();
    let w = widget(&view, &transport);

    w.mount();

    assert_eq!(*view.events.borrow(), vec!["scroll"]);
    assert!(view.transcript.borrow().placeholder_visible());
    assert!(transport.sent.borrow().is_empty());
}
