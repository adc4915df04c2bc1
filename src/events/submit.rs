use crate::app::Wiring;
use crate::dom;
use crate::prompt;

pub fn wire_name_form(w: &Wiring) -> anyhow::Result<()> {
    let wiring = w.clone();
    let listener = dom::listen(&w.roots.name_form, "submit", move |ev| {
        ev.prevent_default();
        handle_submit(&wiring);
    })?;
    w.keep(listener);
    Ok(())
}

fn handle_submit(w: &Wiring) {
    let raw = w.roots.name_input.value();
    let outcome = w.model.borrow_mut().submit(&raw);
    match outcome {
        Err(e) => {
            log::info!("[form] rejected: {:?}", e);
            w.roots.name_error.set_text_content(Some(&e.to_string()));
            _ = w.roots.name_input.focus();
        }
        Ok(None) => {
            log::info!("[form] prompt already showing; submission ignored");
        }
        Ok(Some(name)) => {
            w.roots.name_error.set_text_content(Some(""));
            if let Err(e) = prompt::show_prompt(w, name.as_str()) {
                log::error!("[form] could not build prompt: {:?}", e);
            }
        }
    }
}
