mod apply;
mod hooks;
mod nav;
mod pointer;
mod reveal;
mod scroll;
mod theme;
mod typewriter;

use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::hooks::PageHooks;

/// Page entry point. Locates the DOM hooks once, wires each component that
/// found its elements, and returns. Everything after this runs from event
/// callbacks, timers, and animation frames.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let Some(window) = web_sys::window() else {
        return Ok(());
    };
    let Some(document) = window.document() else {
        return Ok(());
    };

    let hooks = Rc::new(PageHooks::locate(&document));

    stamp_year(&hooks);
    theme::wire(&window, hooks.clone());
    nav::wire(hooks.clone());
    typewriter::wire(&window, hooks.clone());
    reveal::wire(&window, hooks.clone());
    scroll::wire(&window, hooks.clone());
    pointer::wire(&window, hooks.clone());

    web_sys::console::log_1(
        &format!(
            "lume: wired ({} reveals, {} counters, {} cards, {} sections)",
            hooks.reveals.len(),
            hooks.counters.len(),
            hooks.tilt_cards.len(),
            hooks.sections.len(),
        )
        .into(),
    );

    Ok(())
}

fn stamp_year(hooks: &PageHooks) {
    if let Some(el) = &hooks.year {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}
