use crate::app::Wiring;
use crate::core::theme::DARK_MODE_CLASS;
use crate::core::Theme;
use crate::dom;

pub fn wire_theme_toggle(w: &Wiring) -> anyhow::Result<()> {
    let doc = w.document().clone();
    let toggle = w.roots.theme_toggle.clone();
    let listener = dom::listen(&w.roots.theme_toggle, "click", move |_ev| {
        let Some(root) = doc.document_element() else {
            return;
        };
        let classes = root.class_list();
        let next = Theme::from_dark_class(classes.contains(DARK_MODE_CLASS)).toggled();
        _ = classes.toggle_with_force(DARK_MODE_CLASS, next.is_dark());
        toggle.set_text_content(Some(next.icon()));
        log::info!("[theme] {:?}", next);
    })?;
    w.keep(listener);
    Ok(())
}
