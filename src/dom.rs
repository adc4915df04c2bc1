use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Look up `id` and cast it to the expected element type.
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{}", id))?
        .dyn_into::<T>()
        .map_err(|e| anyhow!("#{} has unexpected type: {:?}", id, e))
}

/// Create `<tag class=..>text</tag>`. Text always goes through `textContent`.
pub fn create<T: JsCast>(
    document: &web::Document,
    tag: &str,
    class: Option<&str>,
    text: Option<&str>,
) -> anyhow::Result<T> {
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow!("create <{}>: {:?}", tag, e))?;
    if let Some(class) = class {
        el.set_class_name(class);
    }
    if text.is_some() {
        el.set_text_content(text);
    }
    el.dyn_into::<T>()
        .map_err(|e| anyhow!("<{}> has unexpected type: {:?}", tag, e))
}

#[inline]
pub fn append(parent: &web::Node, child: &web::Node) {
    _ = parent.append_child(child);
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn viewport_size() -> glam::Vec2 {
    let Some(w) = web::window() else {
        return glam::Vec2::ZERO;
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    glam::Vec2::new(width as f32, height as f32)
}

#[inline]
pub fn rect_size(el: &web::Element) -> glam::Vec2 {
    let rect = el.get_bounding_client_rect();
    glam::Vec2::new(rect.width() as f32, rect.height() as f32)
}

/// An attached event listener. Dropping it detaches the handler and frees the
/// closure.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

pub fn listen(
    target: &web::EventTarget,
    event: &'static str,
    handler: impl FnMut(web::Event) + 'static,
) -> anyhow::Result<Listener> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow!("add {} listener: {:?}", event, e))?;
    Ok(Listener {
        target: target.clone(),
        event,
        closure,
    })
}

/// Like [`listen`] but registered with `passive: false`, so the handler may
/// call `preventDefault` on touch events.
pub fn listen_active(
    target: &web::EventTarget,
    event: &'static str,
    handler: impl FnMut(web::Event) + 'static,
) -> anyhow::Result<Listener> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    let options = web::AddEventListenerOptions::new();
    options.set_passive(false);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(|e| anyhow!("add {} listener: {:?}", event, e))?;
    Ok(Listener {
        target: target.clone(),
        event,
        closure,
    })
}
