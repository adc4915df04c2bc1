use crate::app::Wiring;
use crate::constants::{PROXIMITY_EVENTS, TOUCH_START_EVENT};
use crate::core::constants::{EVADE_PULSE_RESET_MS, EVADE_PULSE_TRANSFORM};
use crate::core::evade::{evade_position, px};
use crate::dom;
use crate::timer::{self, TaskId};
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

/// The control that runs away, plus the container it must stay inside.
#[derive(Clone)]
struct Evasive {
    wiring: Wiring,
    control: web::HtmlButtonElement,
    area: web::HtmlElement,
    // commit scheduled by a previous signal that hasn't landed yet
    pending_commit: Rc<Cell<Option<TaskId>>>,
    // transform reset from the previous pulse
    pending_reset: Rc<Cell<Option<TaskId>>>,
}

impl Evasive {
    fn dodge(&self) {
        let dodges = {
            let mut model = self.wiring.model.borrow_mut();
            if !model.decline() {
                return;
            }
            model.dodges()
        };

        let target = evade_position(
            dom::rect_size(&self.area),
            dom::rect_size(&self.control),
            &mut rand::thread_rng(),
        );

        // cancelling the old reset clears its transform before the new pulse
        if let Some(stale) = self.pending_reset.take() {
            timer::cancel(&self.wiring.scheduler, stale);
        }
        dom::set_style(&self.control, "transform", EVADE_PULSE_TRANSFORM);

        // a newer signal supersedes an uncommitted move
        if let Some(stale) = self.pending_commit.take() {
            timer::cancel(&self.wiring.scheduler, stale);
        }
        let control = self.control.clone();
        let commit = timer::next_frame(&self.wiring.scheduler, move || {
            dom::set_style(&control, "left", &px(target.x));
            dom::set_style(&control, "top", &px(target.y));
        });
        self.pending_commit.set(commit);

        let control = self.control.clone();
        let reset = timer::tidy_after(&self.wiring.scheduler, EVADE_PULSE_RESET_MS, move || {
            _ = control.style().remove_property("transform");
        });
        self.pending_reset.set(reset);

        log::debug!("[dodge] #{} -> ({}, {})", dodges, target.x, target.y);
    }
}

/// Make `control` jump somewhere else inside `area` on every proximity signal.
pub fn wire_evasive(
    w: &Wiring,
    control: &web::HtmlButtonElement,
    area: &web::HtmlElement,
) -> anyhow::Result<()> {
    // focus via keyboard should dodge too
    _ = control.set_attribute("tabindex", "0");
    dom::set_style(area, "position", "relative");

    let evasive = Evasive {
        wiring: w.clone(),
        control: control.clone(),
        area: area.clone(),
        pending_commit: Rc::new(Cell::new(None)),
        pending_reset: Rc::new(Cell::new(None)),
    };

    for event in PROXIMITY_EVENTS {
        let e = evasive.clone();
        let listener = dom::listen(control, event, move |ev: web::Event| {
            if ev.type_() == "click" {
                ev.prevent_default();
            }
            e.dodge();
        })?;
        w.keep(listener);
    }

    // non-passive so the tap never turns into a click
    let e = evasive.clone();
    let listener = dom::listen_active(control, TOUCH_START_EVENT, move |ev: web::Event| {
        ev.prevent_default();
        e.dodge();
    })?;
    w.keep(listener);
    Ok(())
}
