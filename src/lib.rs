#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

mod app;
mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod overlay;
mod prompt;
mod timer;

thread_local! {
    static APP: RefCell<Option<app::AppHandle>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("dodge-prompt starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(run_init);
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    } else {
        run_init();
    }
    Ok(())
}

fn run_init() {
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let roots = app::AppRoots::from_document(&document, &app::ElementIds::default())?;
    let handle = app::mount(roots)?;
    let previous = APP.with(|slot| slot.borrow_mut().replace(handle));
    if let Some(old) = previous {
        old.dispose();
    }
    Ok(())
}

/// Detach every handler and cancel pending animations.
#[wasm_bindgen]
pub fn unmount() {
    if let Some(handle) = APP.with(|slot| slot.borrow_mut().take()) {
        handle.dispose();
    }
}

/// Current display state (`Intro`, `Prompt` or `Celebrating`), if mounted.
#[wasm_bindgen(js_name = displayState)]
pub fn display_state() -> Option<String> {
    APP.with(|slot| {
        slot.borrow()
            .as_ref()
            .map(|h| format!("{:?}", h.model().borrow().state()))
    })
}
