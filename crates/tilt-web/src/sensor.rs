//! deviceorientation access: the optional permission prompt and the event
//! subscription.

use crate::constants::ORIENTATION_EVENT;
use js_sys::{Function, Promise, Reflect};
use tilt_core::{OrientationSample, PermissionOutcome};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

fn orientation_event_class() -> Option<JsValue> {
    Reflect::get(&js_sys::global(), &JsValue::from_str("DeviceOrientationEvent"))
        .ok()
        .filter(|v| !v.is_undefined())
}

/// iOS 13+ gates orientation events behind
/// `DeviceOrientationEvent.requestPermission()`; other platforms deliver
/// them without asking.
pub fn needs_permission_prompt() -> bool {
    orientation_event_class()
        .and_then(|class| Reflect::get(&class, &JsValue::from_str("requestPermission")).ok())
        .map(|f| f.is_function())
        .unwrap_or(false)
}

/// Must be called from a user gesture or the browser rejects the request.
pub async fn request_permission() -> anyhow::Result<PermissionOutcome> {
    let class =
        orientation_event_class().ok_or_else(|| anyhow::anyhow!("DeviceOrientationEvent missing"))?;
    let request: Function = Reflect::get(&class, &JsValue::from_str("requestPermission"))
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    let promise: Promise = request.call0(&class).map_err(js_err)?.dyn_into().map_err(js_err)?;
    let state = JsFuture::from(promise).await.map_err(js_err)?;
    Ok(PermissionOutcome::from_state(
        state.as_string().as_deref().unwrap_or_default(),
    ))
}

/// Forward every usable orientation event to `on_sample`. Events without
/// beta/gamma (no sensor) are dropped.
pub fn subscribe(
    window: &web::Window,
    mut on_sample: impl FnMut(OrientationSample) + 'static,
) -> anyhow::Result<()> {
    let closure = Closure::wrap(Box::new(move |ev: web::DeviceOrientationEvent| {
        match OrientationSample::from_sensor(ev.alpha(), ev.beta(), ev.gamma()) {
            Some(sample) => on_sample(sample),
            None => log::debug!("orientation event without beta/gamma dropped"),
        }
    }) as Box<dyn FnMut(web::DeviceOrientationEvent)>);
    window
        .add_event_listener_with_callback(ORIENTATION_EVENT, closure.as_ref().unchecked_ref())
        .map_err(js_err)?;
    closure.forget();
    Ok(())
}
