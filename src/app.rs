use crate::audio::ChimePlayer;
use crate::constants::*;
use crate::core::FormModel;
use crate::dom::{self, Listener};
use crate::events;
use crate::timer::{self, Scheduler, SharedScheduler};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Ids of the page elements the app mounts onto.
#[derive(Clone, Debug)]
pub struct ElementIds {
    pub name_form: String,
    pub name_input: String,
    pub name_error: String,
    pub intro_card: String,
    pub play_card: String,
    pub hearts_container: String,
    pub theme_toggle: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            name_form: ID_NAME_FORM.into(),
            name_input: ID_NAME_INPUT.into(),
            name_error: ID_NAME_ERROR.into(),
            intro_card: ID_INTRO_CARD.into(),
            play_card: ID_PLAY_CARD.into(),
            hearts_container: ID_HEARTS_CONTAINER.into(),
            theme_toggle: ID_THEME_TOGGLE.into(),
        }
    }
}

/// Page elements the app needs. Everything else is created on demand.
#[derive(Clone)]
pub struct AppRoots {
    pub document: web::Document,
    pub name_form: web::HtmlFormElement,
    pub name_input: web::HtmlInputElement,
    pub name_error: web::HtmlElement,
    pub intro_card: web::HtmlElement,
    pub play_card: web::HtmlElement,
    pub hearts_container: web::HtmlElement,
    pub theme_toggle: web::HtmlElement,
}

impl AppRoots {
    pub fn from_document(document: &web::Document, ids: &ElementIds) -> anyhow::Result<Self> {
        Ok(Self {
            document: document.clone(),
            name_form: dom::element_by_id(document, &ids.name_form)?,
            name_input: dom::element_by_id(document, &ids.name_input)?,
            name_error: dom::element_by_id(document, &ids.name_error)?,
            intro_card: dom::element_by_id(document, &ids.intro_card)?,
            play_card: dom::element_by_id(document, &ids.play_card)?,
            hearts_container: dom::element_by_id(document, &ids.hearts_container)?,
            theme_toggle: dom::element_by_id(document, &ids.theme_toggle)?,
        })
    }
}

/// Everything a handler needs, cheap to clone into closures.
#[derive(Clone)]
pub struct Wiring {
    pub roots: Rc<AppRoots>,
    pub model: Rc<RefCell<FormModel>>,
    pub scheduler: SharedScheduler,
    pub chime: Rc<ChimePlayer>,
    listeners: Rc<RefCell<Vec<Listener>>>,
}

impl Wiring {
    fn new(roots: AppRoots) -> Self {
        Self {
            roots: Rc::new(roots),
            model: Rc::new(RefCell::new(FormModel::new())),
            scheduler: Scheduler::shared(),
            chime: Rc::new(ChimePlayer::default()),
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    #[inline]
    pub fn document(&self) -> &web::Document {
        &self.roots.document
    }

    /// Keep `listener` attached until the app is disposed.
    pub fn keep(&self, listener: Listener) {
        self.listeners.borrow_mut().push(listener);
    }
}

/// Returned by [`mount`]; owns every listener and pending task.
pub struct AppHandle {
    wiring: Wiring,
}

impl AppHandle {
    pub fn model(&self) -> Rc<RefCell<FormModel>> {
        self.wiring.model.clone()
    }

    /// Detach all listeners, cancel pending timers, close audio. Cancelled
    /// removals still run, so no hearts or pulse transforms are left behind.
    pub fn dispose(self) {
        let listeners = std::mem::take(&mut *self.wiring.listeners.borrow_mut());
        let detached = listeners.len();
        drop(listeners);
        let cancelled = timer::cancel_all(&self.wiring.scheduler);
        self.wiring.chime.close();
        log::info!(
            "[app] disposed: {} listeners detached, {} tasks cancelled",
            detached,
            cancelled
        );
    }
}

/// Attach the name form and theme toggle. The prompt and celebration cards
/// wire themselves as they are built.
pub fn mount(roots: AppRoots) -> anyhow::Result<AppHandle> {
    let wiring = Wiring::new(roots);
    events::theme::wire_theme_toggle(&wiring)?;
    events::submit::wire_name_form(&wiring)?;
    log::info!("[app] mounted");
    Ok(AppHandle { wiring })
}
