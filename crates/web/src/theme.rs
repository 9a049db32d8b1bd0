use std::cell::RefCell;
use std::rc::Rc;

use lume_core::components::theme::ThemeManager;
use lume_protocol::{Theme, THEME_STORAGE_KEY};
use wasm_bindgen::prelude::*;
use web_sys::{MediaQueryList, MediaQueryListEvent, Window};

use crate::apply;
use crate::hooks::PageHooks;

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Read failures collapse to "no stored preference", as does any value that
/// is not one of the two canonical strings.
fn read_stored(window: &Window) -> Option<Theme> {
    let storage = window.local_storage().ok().flatten()?;
    let value = storage.get_item(THEME_STORAGE_KEY).ok().flatten()?;
    Theme::parse(&value)
}

pub fn wire(window: &Window, hooks: Rc<PageHooks>) {
    let query: Option<MediaQueryList> = window.match_media(DARK_QUERY).ok().flatten();
    let system_dark = query.as_ref().is_some_and(MediaQueryList::matches);

    let (manager, cmds) = ThemeManager::init(read_stored(window), system_dark);
    apply::apply_all(&hooks, &cmds);
    let manager = Rc::new(RefCell::new(manager));

    if let Some(toggle) = hooks.theme_toggle.clone() {
        let hooks = hooks.clone();
        let manager = manager.clone();
        let on_click = Closure::<dyn FnMut()>::new(move || {
            let cmds = manager.borrow_mut().toggle();
            apply::apply_all(&hooks, &cmds);
        });
        let _ =
            toggle.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    }

    // Follow the system while no explicit preference is stored; subscription
    // failure just freezes the theme at the startup snapshot.
    if let Some(query) = query {
        let on_change =
            Closure::<dyn FnMut(MediaQueryListEvent)>::new(move |event: MediaQueryListEvent| {
                let cmds = manager.borrow_mut().system_changed(event.matches());
                apply::apply_all(&hooks, &cmds);
            });
        let _ =
            query.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref());
        on_change.forget();
    }
}
