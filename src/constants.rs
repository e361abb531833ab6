// DOM contract and injected stylesheet text for the web frontend.

// Navigation chrome
pub const SLIDE_COUNTER_SELECTOR: &str = ".slide-counter";
pub const PREV_BUTTON_SELECTOR: &str = ".nav-btn:first-of-type";
pub const NEXT_BUTTON_SELECTOR: &str = ".nav-btn:last-of-type";
pub const ACTIVE_CLASS: &str = "active";
pub const TOTAL_SLIDES_ATTR: &str = "data-total-slides";

// Decorative effects
pub const RIPPLE_SELECTOR: &str = ".ripple-btn";
pub const TOOLTIP_SELECTOR: &str = "[data-tooltip]";
pub const TOOLTIP_ATTR: &str = "data-tooltip";
pub const TOOLTIP_CLASS: &str = "dynamic-tooltip";
pub const TILT_CARD_SELECTOR: &str = ".comparison-card, .animation-card, .exercise-card";
pub const SPARKLE_GLYPH: &str = "✨";

// Scroll reveal
pub const REVEAL_SELECTOR: &str = ".comparison-card, .animation-card, .takeaway-item";
pub const REVEAL_CLASS: &str = "animate-in";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// Demos
pub const NTH_ITEM_SELECTOR: &str = ".nth-item";
pub const HIGHLIGHT_CLASS: &str = "highlight";
pub const FAQ_ITEM_SELECTOR: &str = ".faq-item";

pub const BANNER_CSS: &str = "position: fixed; top: 50%; left: 50%; \
    transform: translate(-50%, -50%); background: linear-gradient(45deg, #ff6b6b, #4ecdc4); \
    color: white; padding: 2rem 3rem; border-radius: 20px; font-size: 2rem; font-weight: bold; \
    z-index: 10000; animation: bounce 1s ease-in-out infinite; \
    box-shadow: 0 20px 40px rgba(0,0,0,0.3);";

pub const STARTUP_MESSAGES: [&str; 3] = [
    "🎨 Presentación de CSS Pseudo-selectores cargada",
    "💡 Tip: Usa las flechas del teclado para navegar",
    "🎮 Easter egg: ¿Conoces el código Konami?",
];

// Keyframes for the effects created at runtime
pub const EFFECT_STYLES: &str = r#"
    @keyframes ripple-animation {
        to {
            transform: scale(2);
            opacity: 0;
        }
    }

    @keyframes highlight-pulse {
        0% { transform: scale(1); }
        50% { transform: scale(1.05); box-shadow: 0 0 20px rgba(78, 205, 196, 0.5); }
        100% { transform: scale(1); }
    }

    @keyframes sparkle-float {
        0% {
            transform: translateY(0) scale(1);
            opacity: 1;
        }
        100% {
            transform: translateY(-50px) scale(0);
            opacity: 0;
        }
    }

    .animate-in {
        animation: slideInUp 0.6s ease-out;
    }

    @keyframes slideInUp {
        from {
            opacity: 0;
            transform: translateY(30px);
        }
        to {
            opacity: 1;
            transform: translateY(0);
        }
    }

    .dynamic-tooltip {
        position: absolute;
        bottom: 125%;
        left: 50%;
        transform: translateX(-50%);
        background: #333;
        color: white;
        padding: 8px 12px;
        border-radius: 4px;
        font-size: 0.9rem;
        white-space: nowrap;
        z-index: 1000;
        animation: tooltipFadeIn 0.3s ease-out;
    }

    @keyframes tooltipFadeIn {
        from { opacity: 0; transform: translateX(-50%) translateY(10px); }
        to { opacity: 1; transform: translateX(-50%) translateY(0); }
    }
"#;

// Keyframes for the easter-egg celebration
pub const CELEBRATION_STYLES: &str = r#"
    @keyframes rainbow {
        0% { filter: hue-rotate(0deg); }
        100% { filter: hue-rotate(360deg); }
    }

    @keyframes confetti-fall {
        to {
            transform: translateY(100vh) rotate(720deg);
        }
    }
"#;
