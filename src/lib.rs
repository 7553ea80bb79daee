//! Frame-paced driver for a canvas client.
//!
//! The scheduling core is target independent; the browser glue that feeds it
//! animation frames lives in [`wasm`] and only exists on `wasm32`.

pub mod cadence;
pub mod client;
pub mod config;
pub mod error;
pub mod schedule;
pub mod scheduler;
pub mod surface;

pub use cadence::{Cadence, CadenceSource, LiveFps};
pub use client::Client;
pub use config::SchedulerConfig;
pub use error::{ConfigError, StartError};
pub use schedule::{ElapsedPolicy, ScheduleState, StartPolicy};
pub use scheduler::{Cycle, FrameScheduler, Options, Skip, StopHandle, Tick};
pub use surface::{Size, Surface};

// Only compile wasm-specific code when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, Window};

    use crate::cadence::CadenceSource;
    use crate::client::Client;
    use crate::config::{CadenceConfig, SchedulerConfig};
    use crate::error::{StartError, CONTEXT_UNAVAILABLE_NOTICE};
    use crate::schedule::ElapsedPolicy;
    use crate::scheduler::FrameScheduler;

    mod canvas;
    mod controls;
    mod js_client;
    mod pulse;
    mod render;

    pub use canvas::CanvasSurface;
    pub use controls::FpsInput;
    pub use js_client::{JsClient, ScriptClient};
    pub use pulse::Pulse;
    pub use render::{now, LoopHandle};

    /// Canvas the built-in demo runs on when the page has one.
    pub const DEMO_CANVAS_ID: &str = "c";

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        let window = web_sys::window().ok_or(StartError::NoWindow)?;
        let document = window.document().ok_or(StartError::NoDocument)?;
        if document.get_element_by_id(DEMO_CANVAS_ID).is_none() {
            log::debug!("no #{DEMO_CANVAS_ID} canvas, waiting for run()");
            return Ok(());
        }

        match launch(&window, &document, DEMO_CANVAS_ID, |surface, policy| {
            Pulse::new(surface.gl().clone(), policy)
        }) {
            Ok(_) | Err(StartError::ContextUnavailable) => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    /// Starts a frame loop on `canvas_id` driving a script-provided client.
    #[wasm_bindgen]
    pub fn run(canvas_id: &str, client: JsClient) -> Result<LoopHandle, JsValue> {
        let window = web_sys::window().ok_or(StartError::NoWindow)?;
        let document = window.document().ok_or(StartError::NoDocument)?;
        let handle = launch(&window, &document, canvas_id, |_, _| ScriptClient::new(client))?;
        Ok(handle)
    }

    /// Looks up the canvas, reads its configuration, acquires the GL context
    /// and enters the frame loop. A missing context is reported to the user
    /// with an `alert` once and the loop is never started.
    pub fn launch<C, F>(
        window: &Window,
        document: &Document,
        canvas_id: &str,
        make_client: F,
    ) -> Result<LoopHandle, StartError>
    where
        C: Client + 'static,
        F: FnOnce(&CanvasSurface, ElapsedPolicy) -> C,
    {
        let alert = |notice: &str| {
            window.alert_with_message(notice).ok();
        };
        launch_with_notice(window, document, canvas_id, alert, make_client)
    }

    /// [`launch`] with the user notification for a missing context routed
    /// through `notify`.
    pub fn launch_with_notice<C, N, F>(
        window: &Window,
        document: &Document,
        canvas_id: &str,
        notify: N,
        make_client: F,
    ) -> Result<LoopHandle, StartError>
    where
        C: Client + 'static,
        N: FnOnce(&str),
        F: FnOnce(&CanvasSurface, ElapsedPolicy) -> C,
    {
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| StartError::ElementNotFound(canvas_id.to_owned()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| StartError::NotACanvas(canvas_id.to_owned()))?;

        let config = SchedulerConfig::from_attributes(|name| canvas.get_attribute(name))
            .unwrap_or_else(|err| {
                log::warn!("#{canvas_id}: {err}; using default scheduling");
                SchedulerConfig::default()
            });

        let surface = match CanvasSurface::acquire(canvas) {
            Ok(surface) => surface,
            Err(err) => {
                if matches!(err, StartError::ContextUnavailable) {
                    log::error!("#{canvas_id}: {err}");
                    notify(CONTEXT_UNAVAILABLE_NOTICE);
                }
                return Err(err);
            }
        };

        let cadence: Box<dyn CadenceSource> = match config.cadence {
            CadenceConfig::Fixed(cadence) => Box::new(cadence),
            CadenceConfig::Input(id) => Box::new(FpsInput::new(document.clone(), id)),
        };
        let client = make_client(&surface, config.options.elapsed);
        let scheduler = FrameScheduler::new(cadence, now(window), config.options);

        log::info!("#{canvas_id}: frame loop starting ({:?})", config.options);
        render::start(window, scheduler, surface, client)
    }
}
