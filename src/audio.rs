use crate::core::tone::{Chime, Ramp};
use crate::core::AudioUnavailable;
use std::cell::RefCell;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

// Older Safari only exposes the prefixed constructor.
fn new_audio_context() -> Result<web::AudioContext, AudioUnavailable> {
    match web::AudioContext::new() {
        Ok(ctx) => Ok(ctx),
        Err(e) => {
            let window = web::window().ok_or_else(|| AudioUnavailable("no window".into()))?;
            let ctor = js_sys::Reflect::get(&window, &JsValue::from_str("webkitAudioContext"))
                .ok()
                .and_then(|c| c.dyn_into::<js_sys::Function>().ok())
                .ok_or_else(|| AudioUnavailable(format!("{:?}", e)))?;
            js_sys::Reflect::construct(&ctor, &js_sys::Array::new())
                .map(|ctx| ctx.unchecked_into::<web::AudioContext>())
                .map_err(|e| AudioUnavailable(format!("{:?}", e)))
        }
    }
}

/// Plays the celebration chime on a lazily created, reused audio context.
#[derive(Default)]
pub struct ChimePlayer {
    ctx: RefCell<Option<web::AudioContext>>,
    chime: Chime,
}

impl ChimePlayer {
    fn context(&self) -> Result<web::AudioContext, AudioUnavailable> {
        if let Some(ctx) = self.ctx.borrow().as_ref() {
            return Ok(ctx.clone());
        }
        let ctx = new_audio_context()?;
        log::info!("[audio] context created, state={:?}", ctx.state());
        *self.ctx.borrow_mut() = Some(ctx.clone());
        Ok(ctx)
    }

    pub fn play(&self) -> Result<(), AudioUnavailable> {
        let ctx = self.context()?;
        if ctx.state() == web::AudioContextState::Suspended {
            _ = ctx.resume();
        }
        let osc = web::OscillatorNode::new(&ctx).map_err(|e| AudioUnavailable(format!("{:?}", e)))?;
        let gain = web::GainNode::new(&ctx).map_err(|e| AudioUnavailable(format!("{:?}", e)))?;
        osc.set_type(web::OscillatorType::Sine);
        osc.frequency().set_value(self.chime.frequency_hz);

        let t0 = ctx.current_time();
        let param = gain.gain();
        for point in self.chime.envelope.iter() {
            let at = t0 + point.at_sec;
            _ = match point.ramp {
                Ramp::Set => param.set_value_at_time(point.value, at),
                Ramp::Linear => param.linear_ramp_to_value_at_time(point.value, at),
                Ramp::Exponential => param.exponential_ramp_to_value_at_time(point.value, at),
            };
        }

        _ = osc.connect_with_audio_node(&gain);
        _ = gain.connect_with_audio_node(&ctx.destination());
        _ = osc.start_with_when(t0);
        let stop = self.chime.stop_sec.max(self.chime.envelope_end_sec());
        _ = osc.stop_with_when(t0 + stop);
        Ok(())
    }

    /// Play, logging instead of failing: the visuals never depend on audio.
    pub fn play_or_warn(&self) {
        if let Err(e) = self.play() {
            log::warn!("[audio] {}", e);
        }
    }

    pub fn close(&self) {
        if let Some(ctx) = self.ctx.borrow_mut().take() {
            _ = ctx.close();
        }
    }
}
