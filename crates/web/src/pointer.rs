use std::rc::Rc;

use lume_core::components::{glow, tilt};
use lume_protocol::{Point, Rect};
use wasm_bindgen::prelude::*;
use web_sys::{MouseEvent, Window};

use crate::apply;
use crate::hooks::PageHooks;

pub fn wire(window: &Window, hooks: Rc<PageHooks>) {
    if hooks.cursor_glow.is_some() {
        let hooks_glow = hooks.clone();
        let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let pointer = Point::new(f64::from(event.client_x()), f64::from(event.client_y()));
            apply::apply_all(&hooks_glow, &glow::follow(pointer));
        });
        let _ = window
            .add_event_listener_with_callback("pointermove", on_move.as_ref().unchecked_ref());
        on_move.forget();
    }

    for (index, card) in hooks.tilt_cards.iter().enumerate() {
        {
            let hooks = hooks.clone();
            let card_el = card.clone();
            let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
                let r = card_el.get_bounding_client_rect();
                let bounds = Rect::new(r.left(), r.top(), r.width(), r.height());
                let pointer =
                    Point::new(f64::from(event.client_x()), f64::from(event.client_y()));
                apply::apply_all(&hooks, &tilt::tilt(index, pointer, bounds));
            });
            let _ = card
                .add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
            on_move.forget();
        }
        {
            let hooks = hooks.clone();
            let on_leave = Closure::<dyn FnMut()>::new(move || {
                apply::apply_all(&hooks, &tilt::reset(index));
            });
            let _ = card
                .add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref());
            on_leave.forget();
        }
    }
}
