use crate::constants::CLASS_HIDDEN;
use web_sys as web;

#[inline]
pub fn show(el: &web::HtmlElement) {
    _ = el.class_list().remove_1(CLASS_HIDDEN);
    // fallback for pages without the .hidden rule
    _ = el.style().remove_property("display");
}

#[inline]
pub fn hide(el: &web::HtmlElement) {
    _ = el.class_list().add_1(CLASS_HIDDEN);
    // fallback
    _ = el.style().set_property("display", "none");
}
