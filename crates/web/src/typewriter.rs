use std::cell::RefCell;
use std::rc::Rc;

use lume_core::components::typewriter::Typewriter;
use lume_core::config;
use wasm_bindgen::prelude::*;
use web_sys::Window;

use crate::hooks::PageHooks;

/// Role list: an optional `data-roles` JSON array on the role element, the
/// built-in list otherwise. A malformed attribute is reported and ignored.
fn roles(hooks: &PageHooks) -> Vec<String> {
    let Some(raw) = hooks
        .role_text
        .as_ref()
        .and_then(|el| el.get_attribute("data-roles"))
    else {
        return config::default_roles();
    };
    match config::parse_roles(&raw) {
        Ok(roles) => roles,
        Err(err) => {
            web_sys::console::warn_1(&format!("lume: {err}; using built-in roles").into());
            config::default_roles()
        }
    }
}

pub fn wire(window: &Window, hooks: Rc<PageHooks>) {
    let Some(role_el) = hooks.role_text.clone() else {
        return;
    };
    let Some(typewriter) = Typewriter::new(roles(&hooks)) else {
        return;
    };
    let state = Rc::new(RefCell::new(typewriter));

    // Self-rescheduling timeout loop. The closure holds a handle to itself
    // so it stays alive for the page's lifetime; there is no teardown.
    let handle: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let inner = handle.clone();
    let window_cb = window.clone();
    *handle.borrow_mut() = Some(Closure::new(move || {
        let tick = state.borrow_mut().tick();
        role_el.set_text_content(Some(&tick.text));
        if let Some(cb) = inner.borrow().as_ref() {
            let _ = window_cb.set_timeout_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                tick.delay_ms as i32,
            );
        }
    }));

    if let Some(cb) = handle.borrow().as_ref() {
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 0);
    }
}
