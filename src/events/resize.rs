use crate::dom::{self, EventListener};
use banner_core::Banner;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Keep canvas size and scene layout in step with the window.
pub fn wire_resize(
    window: &web::Window,
    canvas: web::HtmlCanvasElement,
    banner: Rc<RefCell<Banner>>,
) -> anyhow::Result<EventListener> {
    EventListener::new(window.as_ref(), "resize", move |_ev: web::Event| {
        let Some(window) = web::window() else {
            return;
        };
        match dom::viewport(&window) {
            Ok(vp) => {
                dom::sync_canvas_backing_size(&canvas, vp);
                banner.borrow_mut().resize(vp);
            }
            Err(e) => log::warn!("[resize] {:?}", e),
        }
    })
}
