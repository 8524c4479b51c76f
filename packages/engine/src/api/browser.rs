use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DeviceMotionEvent, DeviceOrientationEvent, Event, HtmlCanvasElement, Window};

use crate::domain::orientation::{MotionSample, OrientationSample};
use crate::simulation::{EventChannel, SimEvent};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SensorKind {
    Orientation,
    Motion,
}

impl SensorKind {
    fn event_name(&self) -> &'static str {
        match self {
            SensorKind::Orientation => "deviceorientation",
            SensorKind::Motion => "devicemotion",
        }
    }
}

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

/// Window sensor listener; removed again when dropped.
pub struct SensorSubscription {
    window: Window,
    kind: SensorKind,
    callback: Closure<dyn FnMut(Event)>,
}

impl SensorSubscription {
    pub fn subscribe(kind: SensorKind, events: EventChannel) -> Result<Self, JsValue> {
        let window = window()?;
        let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if let Some(sample) = read_sample(kind, &event) {
                events.push(sample);
            }
        });
        window.add_event_listener_with_callback_and_bool(
            kind.event_name(),
            callback.as_ref().unchecked_ref(),
            true,
        )?;
        Ok(Self { window, kind, callback })
    }

    pub fn kind(&self) -> SensorKind {
        self.kind
    }
}

impl Drop for SensorSubscription {
    fn drop(&mut self) {
        let _ = self.window.remove_event_listener_with_callback_and_bool(
            self.kind.event_name(),
            self.callback.as_ref().unchecked_ref(),
            true,
        );
    }
}

/// Axes the device cannot measure arrive as `null`.
fn axis(value: Option<f64>) -> f32 {
    value.unwrap_or(0.0) as f32
}

fn read_sample(kind: SensorKind, event: &Event) -> Option<SimEvent> {
    match kind {
        SensorKind::Orientation => {
            let e = event.dyn_ref::<DeviceOrientationEvent>()?;
            Some(SimEvent::Orientation(OrientationSample::new(
                axis(e.alpha()),
                axis(e.beta()),
                axis(e.gamma()),
            )))
        }
        SensorKind::Motion => {
            let e = event.dyn_ref::<DeviceMotionEvent>()?;
            let a = e.acceleration_including_gravity()?;
            Some(SimEvent::Motion(MotionSample::new(axis(a.x()), axis(a.y()), axis(a.z()))))
        }
    }
}

/// `setInterval` that queues spawn ticks; cleared when dropped.
pub struct IntervalTimer {
    window: Window,
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl IntervalTimer {
    pub fn start(events: EventChannel, interval_ms: u32) -> Result<Self, JsValue> {
        let window = window()?;
        let callback = Closure::<dyn FnMut()>::new(move || events.push(SimEvent::SpawnTick));
        let timeout = i32::try_from(interval_ms.max(1)).unwrap_or(i32::MAX);
        let handle = window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            timeout,
        )?;
        Ok(Self { window, handle, _callback: callback })
    }
}

impl Drop for IntervalTimer {
    fn drop(&mut self) {
        self.window.clear_interval_with_handle(self.handle);
    }
}

/// Canvas size in CSS pixels; zero until the canvas is laid out.
pub fn canvas_client_size(canvas: &HtmlCanvasElement) -> (f32, f32) {
    let rect = canvas.get_bounding_client_rect();
    (rect.width() as f32, rect.height() as f32)
}
