use lume_protocol::{DomCommand, Target, THEME_STORAGE_KEY};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::hooks::PageHooks;

/// Apply a command stream to the live DOM. Commands addressed to hooks the
/// page does not supply are dropped; DOM errors are ignored, since nothing
/// here is recoverable.
pub fn apply_all(hooks: &PageHooks, cmds: &[DomCommand]) {
    for cmd in cmds {
        apply(hooks, cmd);
    }
}

fn apply(hooks: &PageHooks, cmd: &DomCommand) {
    match cmd {
        DomCommand::SetAttribute {
            target,
            name,
            value,
        } => {
            if let Some(el) = resolve(hooks, *target) {
                let _ = el.set_attribute(name, value);
            }
        }
        DomCommand::SetText { target, text } => {
            if let Some(el) = resolve(hooks, *target) {
                el.set_text_content(Some(text));
            }
        }
        DomCommand::SetStyle {
            target,
            property,
            value,
        } => {
            if let Some(el) = resolve(hooks, *target).and_then(|el| el.dyn_ref::<HtmlElement>()) {
                let _ = el.style().set_property(property, value);
            }
        }
        DomCommand::AddClass { target, class } => {
            if let Some(el) = resolve(hooks, *target) {
                let _ = el.class_list().add_1(class);
            }
        }
        DomCommand::RemoveClass { target, class } => {
            if let Some(el) = resolve(hooks, *target) {
                let _ = el.class_list().remove_1(class);
            }
        }
        // Storage failure is indistinguishable from "no preference" on the
        // next load; the write is best-effort.
        DomCommand::StoreTheme { theme } => {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            {
                let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
            }
        }
    }
}

fn resolve(hooks: &PageHooks, target: Target) -> Option<&Element> {
    match target {
        Target::Root => hooks.root.as_ref(),
        Target::ThemeToggle => hooks.theme_toggle.as_ref(),
        Target::NavToggle => hooks.nav_toggle.as_ref(),
        Target::NavLinks => hooks.nav_links.as_ref(),
        Target::NavLink(i) => hooks.nav_anchors.get(i),
        Target::RoleText => hooks.role_text.as_ref(),
        Target::Reveal(i) => hooks.reveals.get(i),
        Target::Counter(i) => hooks.counters.get(i),
        Target::ProgressBar => hooks.progress_bar.as_ref(),
        Target::CursorGlow => hooks.cursor_glow.as_ref(),
        Target::TiltCard(i) => hooks.tilt_cards.get(i),
        Target::Year => hooks.year.as_ref(),
    }
}
