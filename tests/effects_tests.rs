// Host-side tests for effect geometry and CSS generation.

use deck_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn ripple_is_centred_on_the_click() {
    let rect = Rect::new(10.0, 20.0, 100.0, 40.0);
    let ripple = Ripple::at(rect, 60.0, 40.0);
    assert_eq!(ripple.size, 100.0);
    assert_eq!(ripple.x, 0.0);
    assert_eq!(ripple.y, -30.0);

    let css = ripple.css_text();
    assert!(css.contains("width: 100px"));
    assert!(css.contains("height: 100px"));
    assert!(css.contains("left: 0px"));
    assert!(css.contains("top: -30px"));
    assert!(css.contains("ripple-animation 0.6s"));
}

#[test]
fn ripple_size_follows_the_longer_side() {
    let tall = Ripple::at(Rect::new(0.0, 0.0, 30.0, 80.0), 15.0, 40.0);
    assert_eq!(tall.size, 80.0);
    assert_eq!(tall.x, -25.0);
    assert_eq!(tall.y, 0.0);
}

#[test]
fn tilt_is_flat_at_the_centre() {
    let rect = Rect::new(0.0, 0.0, 200.0, 100.0);
    assert_eq!(
        tilt_transform(rect, 100.0, 50.0),
        "perspective(1000px) rotateX(0deg) rotateY(0deg) translateZ(10px)"
    );
}

#[test]
fn tilt_leans_towards_the_pointer() {
    let rect = Rect::new(0.0, 0.0, 200.0, 100.0);
    assert_eq!(
        tilt_transform(rect, 0.0, 0.0),
        "perspective(1000px) rotateX(-5deg) rotateY(10deg) translateZ(10px)"
    );
    let offset = Rect::new(50.0, 50.0, 200.0, 100.0);
    assert_eq!(
        tilt_transform(offset, 250.0, 150.0),
        "perspective(1000px) rotateX(5deg) rotateY(-10deg) translateZ(10px)"
    );
}

#[test]
fn tilt_reset_is_flat() {
    assert!(TILT_RESET.contains("rotateX(0)"));
    assert!(TILT_RESET.contains("translateZ(0)"));
}

#[test]
fn nth_rules_parse_and_select() {
    let cases = [
        ("odd", NthRule::Odd, ".nth-item:nth-child(odd)"),
        ("even", NthRule::Even, ".nth-item:nth-child(even)"),
        ("3n", NthRule::EveryThird, ".nth-item:nth-child(3n)"),
        ("2n+1", NthRule::TwoNPlusOne, ".nth-item:nth-child(2n+1)"),
    ];
    for (raw, rule, selector) in cases {
        assert_eq!(NthRule::parse(raw), Some(rule));
        assert_eq!(rule.selector(), selector);
    }
    assert_eq!(NthRule::parse("ODD"), None);
    assert_eq!(NthRule::parse(""), None);
}

#[test]
fn nth_selectors_target_demo_items_only() {
    for rule in [NthRule::Odd, NthRule::Even, NthRule::EveryThird, NthRule::TwoNPlusOne] {
        let selector = rule.selector();
        assert!(selector.starts_with(".nth-item:nth-child("), "{selector}");
        assert!(selector.ends_with(')'), "{selector}");
    }
}

#[test]
fn confetti_css_carries_piece_settings() {
    let piece = ConfettiPiece {
        color: "#ffd700",
        left_vw: 42.5,
        fall_secs: 3.25,
        round: true,
    };
    let css = piece.css_text();
    assert!(css.contains("background: #ffd700"));
    assert!(css.contains("left: 42.5vw"));
    assert!(css.contains("confetti-fall 3.25s"));
    assert!(css.contains("border-radius: 50%"));

    let square = ConfettiPiece {
        round: false,
        ..piece
    };
    assert!(square.css_text().contains("border-radius: 0;"));
}

#[test]
fn random_confetti_stays_in_range() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut saw_round = false;
    let mut saw_square = false;
    for _ in 0..200 {
        let piece = ConfettiPiece::random(&mut rng);
        assert!(CONFETTI_COLORS.contains(&piece.color));
        assert!((0.0..100.0).contains(&piece.left_vw));
        assert!((CONFETTI_FALL_SECS_MIN..CONFETTI_FALL_SECS_MIN + CONFETTI_FALL_SECS_SPAN)
            .contains(&piece.fall_secs));
        saw_round |= piece.round;
        saw_square |= !piece.round;
    }
    assert!(saw_round && saw_square);
}

#[test]
fn sparkle_css_positions_the_glyph() {
    let css = sparkle_css_text(12.5, 80.0);
    assert!(css.contains("left: 12.5px"));
    assert!(css.contains("top: 80px"));
    assert!(css.contains("sparkle-float 1s"));
}

#[test]
fn animated_group_delays() {
    assert_eq!(FLOATING_ELEMENTS.delay_for(0).as_deref(), Some("0s"));
    assert_eq!(FLOATING_ELEMENTS.delay_for(3).as_deref(), Some("-3s"));
    assert_eq!(LOADER_SPIN.delay_for(0), None);
    assert_eq!(PROGRESS_FILL.animation, "progress 3s ease-in-out infinite");
}

#[test]
fn standard_registry_covers_title_and_showcase() {
    let registry = AnimationRegistry::standard();
    let slide = |n| SlideId::new(n).unwrap();
    assert_eq!(registry.groups(slide(1)), &[FLOATING_ELEMENTS]);
    assert_eq!(registry.groups(slide(8)), &[LOADER_SPIN, PROGRESS_FILL]);
    assert!(registry.groups(slide(2)).is_empty());
    assert_eq!(registry.group(slide(8), 1), Some(&PROGRESS_FILL));
    assert_eq!(registry.group(slide(8), 2), None);
}
