use std::rc::Rc;

use lume_core::components::scroll::{ScrollMetrics, ScrollTracker, Section};
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, HtmlElement, Window};

use crate::apply;
use crate::hooks::PageHooks;

pub fn wire(window: &Window, hooks: Rc<PageHooks>) {
    if hooks.progress_bar.is_none() && hooks.sections.is_empty() {
        return;
    }

    let link_ids = hooks
        .nav_anchors
        .iter()
        .map(|a| {
            a.get_attribute("href")
                .and_then(|href| href.strip_prefix('#').map(str::to_string))
        })
        .collect();
    let tracker = Rc::new(ScrollTracker::new(link_ids));

    // Once at startup, then on every scroll and resize.
    recompute(window, &hooks, &tracker);

    let window_cb = window.clone();
    let hooks_cb = hooks.clone();
    let tracker_cb = tracker.clone();
    let on_event = Closure::<dyn FnMut()>::new(move || {
        recompute(&window_cb, &hooks_cb, &tracker_cb);
    });

    let opts = AddEventListenerOptions::new();
    opts.set_passive(true);
    let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        on_event.as_ref().unchecked_ref(),
        &opts,
    );
    let _ =
        window.add_event_listener_with_callback("resize", on_event.as_ref().unchecked_ref());
    on_event.forget();
}

fn recompute(window: &Window, hooks: &PageHooks, tracker: &ScrollTracker) {
    let metrics = read_metrics(window);
    // Offsets move with layout, so they are re-read on every pass.
    let sections: Vec<Section> = hooks
        .sections
        .iter()
        .map(|el| {
            let top = el
                .dyn_ref::<HtmlElement>()
                .map_or(0.0, |h| f64::from(h.offset_top()));
            Section::new(el.id(), top)
        })
        .collect();
    apply::apply_all(hooks, &tracker.update(&metrics, &sections));
}

fn read_metrics(window: &Window) -> ScrollMetrics {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let content_height = window
        .document()
        .and_then(|d| d.document_element())
        .map_or(0.0, |el| f64::from(el.scroll_height()));
    ScrollMetrics {
        scroll_y,
        viewport_height,
        content_height,
    }
}
