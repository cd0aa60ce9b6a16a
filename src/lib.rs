#![cfg(target_arch = "wasm32")]
use crate::constants::{dispose_on_pagehide, MOUNT_ELEMENT_ID};
use banner_core::Banner;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod config;
mod constants;
mod dom;
mod events;
mod frame;
mod render;

thread_local! {
    static APP: RefCell<Option<Rc<RefCell<App>>>> = const { RefCell::new(None) };
}

/// Live banner plus every listener it owns. Disposing drops the listeners,
/// which unregisters them, and stops the animation loop. The pagehide
/// listener stays registered for the life of the page.
struct App {
    banner: Rc<RefCell<Banner>>,
    listeners: Vec<dom::EventListener>,
    _pagehide: Option<dom::EventListener>,
    disposed: Rc<Cell<bool>>,
}

impl App {
    fn dispose(&mut self) {
        if self.disposed.replace(true) {
            return;
        }
        self.listeners.clear();
        self.banner.borrow_mut().dispose();
        log::info!("[app] disposed");
    }
}

fn wire_dispose_on_pagehide(
    window: &web::Window,
    app: Weak<RefCell<App>>,
) -> anyhow::Result<dom::EventListener> {
    dom::EventListener::new(window.as_ref(), "pagehide", move |ev: web::Event| {
        let persisted = ev
            .dyn_ref::<web::PageTransitionEvent>()
            .is_some_and(|ev| ev.persisted());
        if !dispose_on_pagehide(persisted) {
            log::info!("[app] page cached; keeping banner alive");
            return;
        }
        if let Some(app) = app.upgrade() {
            app.borrow_mut().dispose();
        }
    })
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("brake-banner starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let (mount, canvas) = dom::mount_canvas(&document, MOUNT_ELEMENT_ID)?;
    let config = config::read_config(&mount);
    let viewport = dom::viewport(&window)?;
    dom::sync_canvas_backing_size(&canvas, viewport);

    // Scene assembly only happens once every image is in; a failed load ends init here.
    let assets = assets::LoadedAssets::load_all().await?;
    let sizes = assets.sizes()?;
    let banner = Rc::new(RefCell::new(Banner::new(config, sizes, viewport)));
    let renderer = render::Renderer::new(&canvas, assets)?;

    let mut listeners = events::wire_pointer_handlers(&events::InputWiring {
        canvas: canvas.clone(),
        banner: banner.clone(),
    })?;
    listeners.push(events::wire_resize(&window, canvas.clone(), banner.clone())?);

    let disposed = Rc::new(Cell::new(false));
    let app = Rc::new(RefCell::new(App {
        banner: banner.clone(),
        listeners,
        _pagehide: None,
        disposed: disposed.clone(),
    }));
    let pagehide = wire_dispose_on_pagehide(&window, Rc::downgrade(&app))?;
    app.borrow_mut()._pagehide = Some(pagehide);
    APP.with(|slot| *slot.borrow_mut() = Some(app));

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        banner,
        renderer,
        disposed,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
