use crate::scheduler::TimeoutScheduler;
use crate::view::DomView;
use deck_core::{Deck, Deferred, EffectId};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use web_sys as web;

/// Page-wide state shared by every event handler.
///
/// Handlers run one at a time on the browser event loop, so the `RefCell`
/// borrows taken in [`App::with_deck`] never overlap.
pub struct App {
    deck: RefCell<Deck>,
    view: RefCell<DomView>,
}

impl App {
    pub fn new(deck: Deck, view: DomView) -> Rc<Self> {
        Rc::new(Self {
            deck: RefCell::new(deck),
            view: RefCell::new(view),
        })
    }

    pub fn mount(&self) {
        self.deck.borrow().mount(&mut *self.view.borrow_mut());
    }

    pub fn document(&self) -> web::Document {
        self.view.borrow().document().clone()
    }

    pub fn with_deck<R>(
        self: &Rc<Self>,
        f: impl FnOnce(&mut Deck, &mut DomView, &mut TimeoutScheduler) -> R,
    ) -> R {
        let mut sched = TimeoutScheduler::new(Rc::downgrade(self));
        let mut deck = self.deck.borrow_mut();
        let mut view = self.view.borrow_mut();
        f(&mut deck, &mut view, &mut sched)
    }

    pub fn run_deferred(self: &Rc<Self>, task: Deferred) {
        self.with_deck(|deck, view, sched| deck.run(task, view, sched));
    }

    /// Register a freshly appended node and remove it after `lifetime`.
    pub fn track_node(self: &Rc<Self>, node: web::Element, lifetime: Duration) -> EffectId {
        self.with_deck(|deck, view, sched| {
            let id = deck.track_effect(lifetime, sched);
            view.attach_effect(id, node);
            id
        })
    }
}
