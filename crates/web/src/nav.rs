use std::cell::RefCell;
use std::rc::Rc;

use lume_core::components::nav::NavMenu;
use wasm_bindgen::prelude::*;

use crate::apply;
use crate::hooks::PageHooks;

pub fn wire(hooks: Rc<PageHooks>) {
    let (Some(toggle), Some(_)) = (hooks.nav_toggle.clone(), hooks.nav_links.as_ref()) else {
        return;
    };
    let menu = Rc::new(RefCell::new(NavMenu::new()));

    {
        let hooks = hooks.clone();
        let menu = menu.clone();
        let on_toggle = Closure::<dyn FnMut()>::new(move || {
            let cmds = menu.borrow_mut().toggle();
            apply::apply_all(&hooks, &cmds);
        });
        let _ =
            toggle.add_event_listener_with_callback("click", on_toggle.as_ref().unchecked_ref());
        on_toggle.forget();
    }

    // Any link click closes the menu.
    for anchor in &hooks.nav_anchors {
        let hooks = hooks.clone();
        let menu = menu.clone();
        let on_click = Closure::<dyn FnMut()>::new(move || {
            let cmds = menu.borrow_mut().link_clicked();
            apply::apply_all(&hooks, &cmds);
        });
        let _ =
            anchor.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    }
}
