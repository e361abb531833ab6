// Host-side tests for the decisions behind inline handlers and hover listeners.

mod support;

use deck_core::*;
use support::RecordingView;

#[test]
fn only_loading_state_waits_for_dom_content_loaded() {
    assert!(is_document_loading("loading"));
    for state in ["interactive", "complete", "", "Loading"] {
        assert!(!is_document_loading(state), "{state:?} treated as loading");
    }
}

#[test]
fn whole_slide_numbers_pass_through() {
    assert_eq!(slide_number_from_js(1.0), Some(1));
    assert_eq!(slide_number_from_js(15.0), Some(15));
    // Out of range for the deck, but still a valid number for `jump_to` to reject
    assert_eq!(slide_number_from_js(0.0), Some(0));
    assert_eq!(slide_number_from_js(99.0), Some(99));
}

#[test]
fn non_integral_or_negative_slide_numbers_are_rejected() {
    for value in [
        2.5,
        0.1,
        -1.0,
        -0.5,
        f64::NAN,
        f64::INFINITY,
        f64::NEG_INFINITY,
        u32::MAX as f64 + 1.0,
    ] {
        assert_eq!(slide_number_from_js(value), None, "{value} accepted");
    }
}

#[test]
fn rejected_slide_number_leaves_deck_untouched() {
    let mut deck = Deck::with_seed(DeckConfig::default(), 3);
    let mut view = RecordingView::default();
    let mut sched = ManualScheduler::new();
    deck.mount(&mut view);
    deck.jump_to(4, &mut view, &mut sched);

    for value in [4.5, -3.0, f64::NAN] {
        if let Some(n) = slide_number_from_js(value) {
            deck.jump_to(n, &mut view, &mut sched);
        }
    }
    assert_eq!(deck.navigator().current().get(), 4);
    assert_eq!(view.counter, "4 / 15");
}

// Mirrors the DOM handler: close every item, then apply the toggle to the clicked one
fn click_faq(open: &mut [bool], clicked: usize) {
    let was_open = open[clicked];
    open.iter_mut().for_each(|o| *o = false);
    if AccordionToggle::for_click(was_open) == AccordionToggle::Expand {
        open[clicked] = true;
    }
}

#[test]
fn faq_click_opens_closed_item_and_closes_the_rest() {
    let mut open = [false, true, false];
    click_faq(&mut open, 2);
    assert_eq!(open, [false, false, true]);
}

#[test]
fn faq_click_on_open_item_closes_everything() {
    assert_eq!(AccordionToggle::for_click(true), AccordionToggle::Collapse);
    let mut open = [false, true, false];
    click_faq(&mut open, 1);
    assert_eq!(open, [false, false, false]);
}

#[test]
fn faq_second_click_reopens() {
    assert_eq!(AccordionToggle::for_click(false), AccordionToggle::Expand);
    let mut open = [false; 4];
    click_faq(&mut open, 0);
    click_faq(&mut open, 0);
    click_faq(&mut open, 0);
    assert_eq!(open, [true, false, false, false]);
}

#[test]
fn tooltip_needs_text_and_no_existing_tip() {
    assert_eq!(tooltip_text(Some("Ownership"), false), Some("Ownership"));
    assert_eq!(tooltip_text(Some(""), false), None);
    assert_eq!(tooltip_text(None, false), None);
    assert_eq!(tooltip_text(Some("Ownership"), true), None);
}

#[test]
fn tooltip_keeps_whitespace_text() {
    assert_eq!(tooltip_text(Some(" "), false), Some(" "));
}
