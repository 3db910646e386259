#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use tilt_core::{GateTransition, GyroController, OrientationSample, SensorGate};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod overrides;
mod readout;
mod sensor;
mod surface;

use constants::*;
use surface::ElementSurface;

struct TiltApp {
    document: web::Document,
    controller: GyroController,
    gate: SensorGate,
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("tilt-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = match document.get_element_by_id(BACKGROUND_ID) {
        Some(el) => overrides::controller_config(|name| el.get_attribute(name)),
        None => Default::default(),
    };
    log::info!(
        "tilt config: character {:?}, background {:?}, smoothing {}, {:?}",
        config.character,
        config.background,
        config.smooth_factor,
        config.policy
    );
    let controller = GyroController::new(config)?;

    let app = Rc::new(RefCell::new(TiltApp {
        document: document.clone(),
        controller,
        gate: SensorGate::default(),
    }));

    dom::add_click_listener(&document, ENABLE_BUTTON_ID, move || enable(app.clone()));
    Ok(())
}

fn enable(app: Rc<RefCell<TiltApp>>) {
    if app.borrow().gate.is_settled() {
        return;
    }
    if !sensor::needs_permission_prompt() {
        let transition = app.borrow_mut().gate.authorize_without_prompt();
        on_transition(&app, transition, "");
        return;
    }
    spawn_local(async move {
        let (transition, cause) = match sensor::request_permission().await {
            Ok(outcome) => (app.borrow_mut().gate.resolve(outcome), format!("{outcome:?}")),
            Err(e) => (app.borrow_mut().gate.fail(), format!("request failed: {e:?}")),
        };
        on_transition(&app, transition, &cause);
    });
}

// `cause` is only reported on refusal, which the gate yields at most once.
fn on_transition(app: &Rc<RefCell<TiltApp>>, transition: GateTransition, cause: &str) {
    match transition {
        GateTransition::Subscribe => {
            let Some(window) = web::window() else {
                log::error!("no window; cannot listen for orientation");
                return;
            };
            let app_for_events = app.clone();
            match sensor::subscribe(&window, move |sample| on_sample(&app_for_events, sample)) {
                Ok(()) => log::info!("listening for device orientation"),
                Err(e) => log::error!("orientation subscription failed: {e:?}"),
            }
        }
        GateTransition::Refused => {
            log::error!("device orientation not available ({cause}); tilt disabled for this session")
        }
        GateTransition::Unchanged => {}
    }
}

fn on_sample(app: &Rc<RefCell<TiltApp>>, sample: OrientationSample) {
    let mut app = app.borrow_mut();
    if !app.gate.admits_samples() {
        return;
    }
    readout::show(&app.document, &sample);
    let mut background = ElementSurface::find(&app.document, BACKGROUND_ID);
    let mut character = ElementSurface::find(&app.document, CHARACTER_ID);
    app.controller
        .update(background.as_mut(), &sample, character.as_mut());
}
