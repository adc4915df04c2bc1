use crate::app::Wiring;
use crate::constants::*;
use crate::core::evade::{initial_positions, px};
use crate::core::view::{self, PromptTitle};
use crate::dom;
use crate::events;
use crate::overlay;
use web_sys as web;

/// The two choice buttons and the area they move around in.
pub struct PromptCard {
    pub confirm: web::HtmlButtonElement,
    pub evasive: web::HtmlButtonElement,
    pub area: web::HtmlElement,
}

fn button(
    doc: &web::Document,
    id: &str,
    class: &str,
    label: &str,
    aria: &str,
) -> anyhow::Result<web::HtmlButtonElement> {
    let b: web::HtmlButtonElement = dom::create(doc, "button", Some(class), Some(label))?;
    b.set_id(id);
    _ = b.set_attribute("aria-label", aria);
    Ok(b)
}

fn build(doc: &web::Document, card: &web::HtmlElement, name: &str) -> anyhow::Result<PromptCard> {
    // drop whatever the card held before
    card.set_text_content(None);

    let title = PromptTitle::new(name);
    log::debug!("[form] title: {}", title.plain_text());
    let h2: web::HtmlElement = dom::create(doc, "h2", Some(CLASS_QUESTION_TITLE), None)?;
    let name_span: web::HtmlElement = dom::create(doc, "span", None, Some(title.name))?;
    name_span.set_id(ID_NAME_SPAN);
    _ = h2.append_with_str_1(title.greeting);
    dom::append(&h2, &name_span);
    _ = h2.append_with_str_1(title.question);

    let area: web::HtmlElement = dom::create(doc, "div", Some(CLASS_BUTTON_AREA), None)?;
    area.set_id(ID_BUTTON_AREA);
    _ = area.set_attribute("aria-hidden", "false");
    let confirm = button(
        doc,
        ID_CONFIRM_BUTTON,
        CLASS_CONFIRM_BUTTON,
        view::CONFIRM_LABEL,
        view::CONFIRM_ARIA,
    )?;
    let evasive = button(
        doc,
        ID_EVASIVE_BUTTON,
        CLASS_EVASIVE_BUTTON,
        view::EVASIVE_LABEL,
        view::EVASIVE_ARIA,
    )?;
    dom::append(&area, &confirm);
    dom::append(&area, &evasive);

    let footer: web::HtmlElement = dom::create(doc, "p", Some(CLASS_MUTED), None)?;

    dom::append(card, &h2);
    dom::append(card, &area);
    dom::append(card, &footer);

    Ok(PromptCard {
        confirm,
        evasive,
        area,
    })
}

fn place_initial(card: &PromptCard) {
    let area_size = dom::rect_size(&card.area);
    let (confirm_at, evasive_at) =
        initial_positions(area_size, card.confirm.offset_height() as f32);
    for (b, at) in [(&card.confirm, confirm_at), (&card.evasive, evasive_at)] {
        dom::set_style(b, "left", &px(at.x));
        dom::set_style(b, "top", &px(at.y));
    }
}

/// Swap the intro card for the question card and wire its buttons.
pub fn show_prompt(w: &Wiring, name: &str) -> anyhow::Result<()> {
    overlay::hide(&w.roots.intro_card);
    overlay::show(&w.roots.play_card);

    let card = build(w.document(), &w.roots.play_card, name)?;
    events::pointer::wire_evasive(w, &card.evasive, &card.area)?;
    events::celebrate::wire_confirm(w, &card.confirm, &card.evasive)?;
    place_initial(&card);
    log::info!("[form] prompt shown");
    Ok(())
}
