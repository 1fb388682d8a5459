// File: contact-form/core/src/testing.rs
// Purpose: In-memory adapters for the document, scheduler, clock and event ports

//! In-memory implementations of every port, for driving [`ContactForm`]
//! synchronously in tests and without a browser.
//!
//! [`ContactForm`]: crate::form::ContactForm

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::time::Duration;

use crate::dom::{Document, Element, Locator, FORM_ID, SUBMIT_KEY, SUCCESS_KEY};
use crate::field::FieldId;
use crate::form::{EventSource, FormEvent};
use crate::schedule::{Clock, Scheduler};
use crate::time_display::TIME_SLOT_ID;

#[derive(Debug, Clone, Default)]
struct Node {
    value: String,
    text: String,
    visible: bool,
    disabled: bool,
    attributes: BTreeMap<String, String>,
}

#[derive(Debug, Default)]
struct Page {
    nodes: HashMap<Locator, Node>,
    focused: Option<Locator>,
}

/// A page held in memory. Clones share the same nodes.
#[derive(Debug, Clone, Default)]
pub struct FakeDocument {
    page: Rc<RefCell<Page>>,
}

impl FakeDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// A page with the full contact form markup. Error slots start visible,
    /// the way unstyled markup would render them before initialization.
    pub fn contact_page() -> Self {
        let doc = Self::new();
        doc.insert(Locator::Id(FORM_ID), true);
        for field in FieldId::ALL {
            doc.insert(Locator::TestId(field.input_key()), true);
            doc.insert(Locator::Id(field.error_slot_id()), true);
        }
        doc.insert(Locator::TestId(SUBMIT_KEY), true);
        doc.insert(Locator::TestId(SUCCESS_KEY), false);
        doc.insert(Locator::Id(TIME_SLOT_ID), true);
        doc
    }

    pub fn insert(&self, locator: Locator, visible: bool) {
        let node = Node {
            visible,
            ..Node::default()
        };
        self.page.borrow_mut().nodes.insert(locator, node);
    }

    pub fn remove(&self, locator: &Locator) {
        self.page.borrow_mut().nodes.remove(locator);
    }

    /// Simulate the user typing into a control
    pub fn type_into(&self, field: FieldId, value: &str) {
        self.with_node(&Locator::TestId(field.input_key()), |node| {
            node.value = value.to_string()
        });
    }

    pub fn value(&self, locator: &Locator) -> String {
        self.read(locator, |node| node.value.clone()).unwrap_or_default()
    }

    pub fn text(&self, locator: &Locator) -> String {
        self.read(locator, |node| node.text.clone()).unwrap_or_default()
    }

    pub fn is_visible(&self, locator: &Locator) -> bool {
        self.read(locator, |node| node.visible).unwrap_or(false)
    }

    pub fn is_disabled(&self, locator: &Locator) -> bool {
        self.read(locator, |node| node.disabled).unwrap_or(false)
    }

    pub fn attribute(&self, locator: &Locator, name: &str) -> Option<String> {
        self.read(locator, |node| node.attributes.get(name).cloned())
            .flatten()
    }

    pub fn focused(&self) -> Option<Locator> {
        self.page.borrow().focused
    }

    /// Move focus without going through an element handle
    pub fn set_focus(&self, locator: Option<Locator>) {
        self.page.borrow_mut().focused = locator;
    }

    fn read<T>(&self, locator: &Locator, f: impl FnOnce(&Node) -> T) -> Option<T> {
        self.page.borrow().nodes.get(locator).map(f)
    }

    fn with_node(&self, locator: &Locator, f: impl FnOnce(&mut Node)) {
        if let Some(node) = self.page.borrow_mut().nodes.get_mut(locator) {
            f(node);
        }
    }
}

impl Document for FakeDocument {
    type Element = FakeElement;

    fn find(&self, locator: &Locator) -> Option<FakeElement> {
        self.page
            .borrow()
            .nodes
            .contains_key(locator)
            .then(|| FakeElement {
                locator: *locator,
                doc: self.clone(),
            })
    }
}

/// Handle to a node of a [`FakeDocument`]
#[derive(Debug, Clone)]
pub struct FakeElement {
    locator: Locator,
    doc: FakeDocument,
}

impl FakeElement {
    pub fn locator(&self) -> Locator {
        self.locator
    }
}

impl Element for FakeElement {
    fn value(&self) -> String {
        self.doc.value(&self.locator)
    }

    fn set_value(&self, value: &str) {
        self.doc
            .with_node(&self.locator, |node| node.value = value.to_string());
    }

    fn set_text(&self, text: &str) {
        self.doc
            .with_node(&self.locator, |node| node.text = text.to_string());
    }

    fn set_visible(&self, visible: bool) {
        self.doc.with_node(&self.locator, |node| node.visible = visible);
    }

    fn is_visible(&self) -> bool {
        self.doc.is_visible(&self.locator)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.doc.attribute(&self.locator, name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.doc.with_node(&self.locator, |node| {
            node.attributes.insert(name.to_string(), value.to_string());
        });
    }

    fn remove_attribute(&self, name: &str) {
        self.doc.with_node(&self.locator, |node| {
            node.attributes.remove(name);
        });
    }

    fn set_disabled(&self, disabled: bool) {
        self.doc.with_node(&self.locator, |node| node.disabled = disabled);
    }

    fn focus(&self) {
        self.doc.set_focus(Some(self.locator));
    }
}

enum Task {
    Once(Box<dyn FnOnce()>),
    Repeating { every: Duration, task: Box<dyn FnMut()> },
}

struct Pending {
    due: Duration,
    seq: u64,
    task: Task,
}

#[derive(Default)]
struct Timeline {
    now: Duration,
    seq: u64,
    queue: Vec<Pending>,
}

impl Timeline {
    fn push(&mut self, due: Duration, task: Task) {
        self.seq += 1;
        let seq = self.seq;
        self.queue.push(Pending { due, seq, task });
    }

    fn pop_due(&mut self, until: Duration) -> Option<Pending> {
        let idx = self
            .queue
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= until)
            .min_by_key(|(_, p)| (p.due, p.seq))
            .map(|(idx, _)| idx)?;
        Some(self.queue.swap_remove(idx))
    }
}

/// Scheduler on virtual time. Nothing runs until [`ManualScheduler::advance`].
#[derive(Clone, Default)]
pub struct ManualScheduler {
    timeline: Rc<RefCell<Timeline>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed so far
    pub fn now(&self) -> Duration {
        self.timeline.borrow().now
    }

    /// Number of callbacks waiting to run
    pub fn pending(&self) -> usize {
        self.timeline.borrow().queue.len()
    }

    /// Move virtual time forward, running every callback that falls due, in
    /// due order. Callbacks may schedule more work.
    pub fn advance(&self, by: Duration) {
        let until = self.now() + by;

        loop {
            // the borrow must end before the callback runs
            let next = self.timeline.borrow_mut().pop_due(until);
            let Some(Pending { due, task, .. }) = next else {
                break;
            };
            self.timeline.borrow_mut().now = due;

            match task {
                Task::Once(task) => task(),
                Task::Repeating { every, mut task } => {
                    task();
                    self.timeline
                        .borrow_mut()
                        .push(due + every, Task::Repeating { every, task });
                }
            }
        }

        self.timeline.borrow_mut().now = until;
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_once(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let mut timeline = self.timeline.borrow_mut();
        let due = timeline.now + delay;
        timeline.push(due, Task::Once(task));
    }

    fn schedule_repeating(&self, every: Duration, task: Box<dyn FnMut()>) {
        let mut timeline = self.timeline.borrow_mut();
        let due = timeline.now + every;
        timeline.push(due, Task::Repeating { every, task });
    }
}

/// Clock that only moves when told to
#[derive(Debug, Clone, Default)]
pub struct FixedClock {
    millis: Rc<Cell<i64>>,
}

impl FixedClock {
    pub fn at(millis: i64) -> Self {
        Self {
            millis: Rc::new(Cell::new(millis)),
        }
    }

    pub fn advance(&self, by: Duration) {
        let by = i64::try_from(by.as_millis()).unwrap_or(i64::MAX);
        self.millis.set(self.millis.get().saturating_add(by));
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.millis.get()
    }
}

type Listener = Rc<dyn Fn(FormEvent)>;

/// Event source fed by hand
#[derive(Clone, Default)]
pub struct FakeEventSource {
    listeners: Rc<RefCell<Vec<Listener>>>,
}

impl FakeEventSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(&self, event: FormEvent) {
        let listeners = self.listeners.borrow().clone();
        for listener in listeners {
            listener(event.clone());
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl EventSource for FakeEventSource {
    fn listen(&self, listener: Rc<dyn Fn(FormEvent)>) {
        self.listeners.borrow_mut().push(listener);
    }
}
