use anyhow::anyhow;
use banner_core::Viewport;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn viewport(window: &web::Window) -> anyhow::Result<Viewport> {
    let width = window
        .inner_width()
        .map_err(|e| anyhow!("innerWidth: {:?}", e))?
        .as_f64()
        .ok_or_else(|| anyhow!("innerWidth is not a number"))?;
    let height = window
        .inner_height()
        .map_err(|e| anyhow!("innerHeight: {:?}", e))?
        .as_f64()
        .ok_or_else(|| anyhow!("innerHeight is not a number"))?;
    Ok(Viewport::new(width as f32, height as f32)?)
}

/// Create the banner canvas inside `#mount_id`.
pub fn mount_canvas(
    document: &web::Document,
    mount_id: &str,
) -> anyhow::Result<(web::Element, web::HtmlCanvasElement)> {
    let mount = document
        .get_element_by_id(mount_id)
        .ok_or_else(|| anyhow!("missing #{}", mount_id))?;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow!("create canvas: {:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow!("{:?}", e))?;
    _ = canvas.style().set_property("display", "block");
    mount
        .append_child(&canvas)
        .map_err(|e| anyhow!("append canvas: {:?}", e))?;
    Ok((mount, canvas))
}

/// Size the canvas to the viewport in CSS px, backing store in device px.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, viewport: Viewport) {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", viewport.width));
    _ = style.set_property("height", &format!("{}px", viewport.height));
    canvas.set_width(((viewport.width as f64 * dpr) as u32).max(1));
    canvas.set_height(((viewport.height as f64 * dpr) as u32).max(1));
}

/// A registered DOM listener; removed from its target when dropped.
pub struct EventListener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow!("add {} listener: {:?}", kind, e))?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
        log::debug!("[dom] removed {} listener", self.kind);
    }
}
