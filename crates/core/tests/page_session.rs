//! Integration test: drive a whole page session (theme resolution, nav,
//! typewriter, reveals with counters, scroll tracking) through the headless
//! `PageModel` and verify the resulting page state.

use lume_core::components::counter::{CounterAnimation, COUNT_DURATION_MS};
use lume_core::components::nav::NavMenu;
use lume_core::components::reveal::{RevealTracker, REVEAL_CLASS};
use lume_core::components::scroll::{ScrollMetrics, ScrollTracker, Section, ACTIVE_CLASS};
use lume_core::components::theme::ThemeManager;
use lume_core::components::typewriter::Typewriter;
use lume_core::components::{glow, tilt};
use lume_core::config;
use lume_core::page::PageModel;
use lume_protocol::{DomCommand, Point, Rect, Target, Theme};

#[test]
fn full_page_session() {
    let mut page = PageModel::new();

    // Startup: nothing stored, system prefers dark.
    let (mut theme, cmds) = ThemeManager::init(None, true);
    page.apply_all(&cmds);
    assert_eq!(page.attr(Target::Root, "data-theme"), Some("dark"));
    assert_eq!(page.text(Target::ThemeToggle), "Light mode");
    assert_eq!(page.attr(Target::ThemeToggle, "aria-pressed"), Some("true"));
    assert_eq!(page.stored_theme(), None, "startup must not persist");

    // Explicit toggle: light is applied and persisted.
    page.apply_all(&theme.toggle());
    assert_eq!(page.attr(Target::Root, "data-theme"), Some("light"));
    assert_eq!(page.stored_theme(), Some(Theme::Light));

    // A later system flip back to dark must not override the stored choice.
    page.apply_all(&theme.system_changed(true));
    assert_eq!(page.attr(Target::Root, "data-theme"), Some("light"));
    assert_eq!(page.stored_theme(), Some(Theme::Light));

    // Nav menu: open via toggle, close via a link click.
    let mut nav = NavMenu::new();
    page.apply_all(&nav.toggle());
    assert!(page.has_class(Target::NavLinks, "open"));
    assert_eq!(page.attr(Target::NavToggle, "aria-expanded"), Some("true"));
    page.apply_all(&nav.link_clicked());
    assert!(!page.has_class(Target::NavLinks, "open"));
    assert_eq!(page.attr(Target::NavToggle, "aria-expanded"), Some("false"));

    // Typewriter: run one full cycle of the first role.
    let mut typewriter = Typewriter::new(config::default_roles()).unwrap();
    let first_role = config::DEFAULT_ROLES[0];
    for _ in 0..first_role.chars().count() {
        let tick = typewriter.tick();
        page.apply(&DomCommand::text(Target::RoleText, tick.text.clone()));
    }
    assert_eq!(page.text(Target::RoleText), first_role);

    // Reveals: two marked elements, two counters; the second reveal hosts a
    // counter and therefore starts every pending counter on the page.
    let specs = vec![
        config::counter_spec(Some("250"), None, Some("+"), None),
        config::counter_spec(Some("125"), Some("10"), Some("k"), None),
    ];
    let mut reveals = RevealTracker::new(2, &specs);

    let update = reveals.on_intersection(0, false);
    page.apply_all(&update.commands);
    assert!(page.has_class(Target::Reveal(0), REVEAL_CLASS));
    assert!(update.start_counters.is_empty());

    let update = reveals.on_intersection(1, true);
    page.apply_all(&update.commands);
    assert_eq!(update.start_counters, vec![0, 1]);
    assert_eq!(
        page.attr(Target::Counter(0), "data-animated"),
        Some("true")
    );

    // Animate both counters to completion; final text is the exactly
    // formatted target.
    for (index, spec) in specs.iter().enumerate() {
        let anim = CounterAnimation::new(spec.clone(), 0.0);
        let mut now = 0.0;
        loop {
            let frame = anim.frame(now);
            page.apply(&DomCommand::text(Target::Counter(index), frame.text.clone()));
            if frame.done {
                break;
            }
            now += 16.0;
            assert!(now <= COUNT_DURATION_MS + 32.0, "animation must terminate");
        }
    }
    assert_eq!(page.text(Target::Counter(0)), "250+");
    assert_eq!(page.text(Target::Counter(1)), "12.5k");

    // The load fallback has nothing left to start.
    assert!(reveals.on_fallback().start_counters.is_empty());

    // Scroll tracking: lookahead puts the middle section in charge.
    let scroll = ScrollTracker::new(vec![
        Some("home".to_string()),
        Some("work".to_string()),
        Some("contact".to_string()),
    ]);
    let sections = vec![
        Section::new("home", 0.0),
        Section::new("work", 500.0),
        Section::new("contact", 1000.0),
    ];
    let metrics = ScrollMetrics {
        scroll_y: 650.0,
        viewport_height: 800.0,
        content_height: 2400.0,
    };
    page.apply_all(&scroll.update(&metrics, &sections));
    assert!(page.has_class(Target::NavLink(1), ACTIVE_CLASS));
    assert!(!page.has_class(Target::NavLink(0), ACTIVE_CLASS));
    assert!(!page.has_class(Target::NavLink(2), ACTIVE_CLASS));
    assert_eq!(
        page.style(Target::ProgressBar, "width"),
        Some("40.625%"),
        "650 / 1600 of the scrollable range"
    );

    // Pointer effects.
    page.apply_all(&glow::follow(Point::new(64.0, 32.0)));
    assert_eq!(page.style(Target::CursorGlow, "left"), Some("64px"));
    assert_eq!(page.style(Target::CursorGlow, "top"), Some("32px"));

    let bounds = Rect::new(0.0, 0.0, 200.0, 100.0);
    page.apply_all(&tilt::tilt(0, bounds.center(), bounds));
    assert_eq!(
        page.style(Target::TiltCard(0), "transform"),
        Some("perspective(900px) rotateX(0deg) rotateY(0deg) translateY(-4px)")
    );
    page.apply_all(&tilt::reset(0));
    assert_eq!(
        page.style(Target::TiltCard(0), "transform"),
        Some("perspective(900px) rotateX(0deg) rotateY(0deg) translateY(0px)")
    );
}
