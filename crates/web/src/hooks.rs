use lume_core::components::counter::CounterSpec;
use lume_core::config;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

/// DOM hooks located once at startup.
///
/// Every hook is optional at the page level: whatever the HTML does not
/// supply stays `None`/empty and the component that would use it is never
/// wired. Elements are held as `Element`; call sites cast to `HtmlElement`
/// where styles or offsets are needed.
pub struct PageHooks {
    pub root: Option<Element>,
    pub theme_toggle: Option<Element>,
    pub nav_toggle: Option<Element>,
    pub nav_links: Option<Element>,
    /// Anchors inside the nav link container, in document order. Indices
    /// line up with `Target::NavLink`.
    pub nav_anchors: Vec<Element>,
    pub role_text: Option<Element>,
    pub reveals: Vec<Element>,
    pub counters: Vec<Element>,
    /// Parsed `data-*` configuration, index-aligned with `counters`.
    pub counter_specs: Vec<CounterSpec>,
    pub progress_bar: Option<Element>,
    /// Sections with ids under `main`, in document order. Offsets are read
    /// live on every scroll update, so only the elements are kept.
    pub sections: Vec<Element>,
    pub cursor_glow: Option<Element>,
    pub tilt_cards: Vec<Element>,
    pub year: Option<Element>,
}

impl PageHooks {
    pub fn locate(document: &Document) -> Self {
        let counters = collect(document, ".count");
        let counter_specs = counters
            .iter()
            .map(|el| {
                config::counter_spec(
                    el.get_attribute("data-target").as_deref(),
                    el.get_attribute("data-divisor").as_deref(),
                    el.get_attribute("data-suffix").as_deref(),
                    el.get_attribute("data-animated").as_deref(),
                )
            })
            .collect();

        Self {
            root: document.document_element(),
            theme_toggle: document.get_element_by_id("theme-toggle"),
            nav_toggle: document.get_element_by_id("nav-toggle"),
            nav_links: document.get_element_by_id("nav-links"),
            nav_anchors: collect(document, ".nav-links a"),
            role_text: document.get_element_by_id("role-text"),
            reveals: collect(document, ".reveal"),
            counters,
            counter_specs,
            progress_bar: document.get_element_by_id("scroll-progress"),
            sections: collect(document, "main section[id]"),
            cursor_glow: document.query_selector(".cursor-glow").ok().flatten(),
            tilt_cards: collect(document, ".tilt-card"),
            year: document.get_element_by_id("year"),
        }
    }
}

fn collect(document: &Document, selector: &str) -> Vec<Element> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
                out.push(el);
            }
        }
    }
    out
}
