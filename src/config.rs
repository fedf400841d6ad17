use log::Level;

pub const SITE_NAME: &str = "Alpha Systems";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Element the behavior root mounts into. Created under `<body>` when missing.
pub const MOUNT_ID: &str = "site-behaviors";

// Mobile menu
pub const MOBILE_TOGGLE: &str = ".mobile-toggle";
pub const MOBILE_MENU: &str = ".mobile-menu";
pub const MENU_OPEN_CLASS: &str = "open";
pub const MENU_INIT_FLAG: &str = "data-mobile-init";
pub const MENU_DELEGATE_FLAG: &str = "data-mobile-delegate";
pub const DESKTOP_BREAKPOINT: f64 = 1024.0;

// Navigation
pub const IN_PAGE_ANCHORS: &str = "a[href^=\"#\"]";
pub const SECTIONS: &str = "section[id]";
pub const NAV_LINKS: &str = ".nav-link";
pub const ACTIVE_CLASS: &str = "active";
pub const SCROLL_SPY_LOOKAHEAD: f64 = 200.0;

// Header
pub const HEADER: &str = ".header";
pub const HEADER_SHADE_THRESHOLD: f64 = 50.0;

// Hero
pub const HERO_BACKGROUND: &str = ".hero-background";
pub const PARALLAX_FACTOR: f64 = 0.5;
pub const HERO_DISPLAY: &str = ".hero-3d-display";
pub const DISPLAY_PLATFORM: &str = ".display-platform";
pub const TILT_DIVISOR: f64 = 20.0;

// Reveal
pub const REVEAL_TARGETS: &str =
    ".service-card, .portfolio-item, .value-card, .process-step, .service-detail";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";
pub const REVEAL_OFFSET_PX: u32 = 30;
pub const REVEAL_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

// Hover effects
pub const BUTTONS: &str = "button";
pub const PORTFOLIO_ITEMS: &str = ".portfolio-item";
pub const PLACEHOLDER_IMAGE: &str = ".placeholder-image";
pub const SERVICE_NUMBERS: &str = ".service-number";

// Cursor trail
pub const TRAIL_CLASS: &str = "cursor-trail";
pub const TRAIL_INTERVAL_MS: i64 = 50;
pub const TRAIL_LIFETIME_MS: u32 = 500;

// Page load
pub const LOAD_FADE_DELAY_MS: u32 = 100;
pub const LOAD_FADE_TRANSITION: &str = "opacity 0.5s ease";

// Contact form
pub const CONTACT_FORM: &str = ".contact-form";
pub const CONTACT_ACK_MESSAGE: &str = "Thank you for your message! We will get back to you soon.";

/// Keyframes used by the cursor trail and the service number pulse.
pub const KEYFRAMES: &str = r#"
    @keyframes fadeTrail {
        to {
            opacity: 0;
            transform: scale(2);
        }
    }
    @keyframes pulse {
        0%, 100% { transform: scale(1); }
        50% { transform: scale(1.05); }
    }
"#;
