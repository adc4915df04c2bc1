use crate::app::Wiring;
use crate::constants::*;
use crate::core::constants::{CONFIRM_PARTICLE_COUNT, REPLAY_PARTICLE_COUNT};
use crate::core::evade::px;
use crate::core::particles::plan_particles;
use crate::core::view;
use crate::dom;
use crate::timer;
use web_sys as web;

fn spawn_particles(w: &Wiring, count: usize) {
    let batch = plan_particles(count, dom::viewport_size(), &mut rand::thread_rng());
    let container = &w.roots.hearts_container;
    for spec in batch.iter() {
        let heart: web::HtmlElement =
            match dom::create(w.document(), "span", Some(CLASS_HEART), None) {
                Ok(h) => h,
                Err(e) => {
                    log::error!("[celebrate] {:?}", e);
                    return;
                }
            };
        dom::set_style(&heart, "left", &px(spec.start.x));
        dom::set_style(&heart, "top", &px(spec.start.y));
        dom::set_style(&heart, "transform", &spec.transform());
        dom::append(container, &heart);

        timer::tidy_after(&w.scheduler, spec.remove_after_ms, move || heart.remove());
    }
}

/// Hearts + chime. Audio failures are logged and otherwise ignored.
fn run_effects(w: &Wiring, particles: usize) {
    spawn_particles(w, particles);
    w.chime.play_or_warn();
}

fn build_panel(w: &Wiring) -> anyhow::Result<web::HtmlButtonElement> {
    let doc = w.document();
    let panel: web::HtmlElement = dom::create(doc, "div", Some(CLASS_CARD), None)?;
    dom::set_style(&panel, "text-align", "center");

    let heading: web::HtmlElement = dom::create(doc, "h2", None, Some(view::PANEL_HEADING))?;
    let message: web::HtmlElement =
        dom::create(doc, "p", Some(CLASS_MUTED), Some(view::PANEL_MESSAGE))?;
    let row: web::HtmlElement = dom::create(doc, "div", None, None)?;
    dom::set_style(&row, "margin-top", "12px");
    let again: web::HtmlButtonElement =
        dom::create(doc, "button", Some(CLASS_PRIMARY), Some(view::AGAIN_LABEL))?;
    again.set_id(ID_AGAIN_BUTTON);

    dom::append(&row, &again);
    dom::append(&panel, &heading);
    dom::append(&panel, &message);
    dom::append(&panel, &row);
    dom::append(&w.roots.play_card, &panel);
    Ok(again)
}

fn wire_again(w: &Wiring, again: &web::HtmlButtonElement) -> anyhow::Result<()> {
    let wiring = w.clone();
    let listener = dom::listen(again, "click", move |_ev| {
        if !wiring.model.borrow_mut().replay() {
            return;
        }
        log::info!(
            "[celebrate] replay #{}",
            wiring.model.borrow().celebrations()
        );
        run_effects(&wiring, REPLAY_PARTICLE_COUNT);
    })?;
    w.keep(listener);
    Ok(())
}

fn celebrate(w: &Wiring, confirm: &web::HtmlButtonElement, evasive: &web::HtmlButtonElement) {
    if !w.model.borrow_mut().confirm() {
        return;
    }
    confirm.set_disabled(true);
    evasive.set_disabled(true);
    log::info!(
        "[celebrate] confirmed after {} dodges",
        w.model.borrow().dodges()
    );

    match build_panel(w) {
        Ok(again) => {
            if let Err(e) = wire_again(w, &again) {
                log::error!("[celebrate] {:?}", e);
            }
        }
        Err(e) => log::error!("[celebrate] could not build panel: {:?}", e),
    }
    run_effects(w, CONFIRM_PARTICLE_COUNT);
}

pub fn wire_confirm(
    w: &Wiring,
    confirm: &web::HtmlButtonElement,
    evasive: &web::HtmlButtonElement,
) -> anyhow::Result<()> {
    let wiring = w.clone();
    let (yes, no) = (confirm.clone(), evasive.clone());
    let listener = dom::listen(confirm, "click", move |ev| {
        ev.prevent_default();
        celebrate(&wiring, &yes, &no);
    })?;
    w.keep(listener);
    Ok(())
}
