use crate::constants::{READOUT_ALPHA_ID, READOUT_BETA_ID, READOUT_GAMMA_ID};
use crate::dom;
use tilt_core::OrientationSample;
use web_sys as web;

pub fn show(document: &web::Document, sample: &OrientationSample) {
    dom::set_text(document, READOUT_ALPHA_ID, &format!("{:.2}", sample.alpha));
    dom::set_text(document, READOUT_BETA_ID, &format!("{:.2}", sample.beta));
    dom::set_text(document, READOUT_GAMMA_ID, &format!("{:.2}", sample.gamma));
}
