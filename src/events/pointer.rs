use crate::dom::EventListener;
use banner_core::Banner;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub banner: Rc<RefCell<Banner>>,
}

/// Listeners for move/down/up/cancel on the canvas; dropping them unwires.
pub fn wire_pointer_handlers(w: &InputWiring) -> anyhow::Result<Vec<EventListener>> {
    Ok(vec![
        wire_pointermove(w)?,
        wire_pointerdown(w)?,
        wire_pointerup(w)?,
        wire_pointercancel(w)?,
    ])
}

#[inline]
fn pointer_canvas_css(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}

fn wire_pointermove(w: &InputWiring) -> anyhow::Result<EventListener> {
    let w = w.clone();
    let target = w.canvas.clone();
    let mut over = false;
    EventListener::new(target.as_ref(), "pointermove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let pos = pointer_canvas_css(ev, &w.canvas);
        let hit = w.banner.borrow().scene().hits_button(pos);
        if hit != over {
            over = hit;
            _ = w
                .canvas
                .style()
                .set_property("cursor", if hit { "pointer" } else { "default" });
        }
    })
}

fn wire_pointerdown(w: &InputWiring) -> anyhow::Result<EventListener> {
    let w = w.clone();
    let target = w.canvas.clone();
    EventListener::new(target.as_ref(), "pointerdown", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let pos = pointer_canvas_css(ev, &w.canvas);
        if w.banner.borrow_mut().pointer_down(pos) {
            log::debug!("[pointer] down on control at ({:.0},{:.0})", pos.x, pos.y);
            ev.prevent_default();
        }
    })
}

fn wire_pointerup(w: &InputWiring) -> anyhow::Result<EventListener> {
    let w = w.clone();
    let target = w.canvas.clone();
    EventListener::new(target.as_ref(), "pointerup", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let pos = pointer_canvas_css(ev, &w.canvas);
        if w.banner.borrow_mut().pointer_up(pos) {
            log::debug!("[pointer] up on control at ({:.0},{:.0})", pos.x, pos.y);
            ev.prevent_default();
        }
    })
}

fn wire_pointercancel(w: &InputWiring) -> anyhow::Result<EventListener> {
    let w = w.clone();
    let target = w.canvas.clone();
    EventListener::new(target.as_ref(), "pointercancel", move |_ev: web::Event| {
        log::debug!("[pointer] cancel");
        w.banner.borrow_mut().pointer_cancel();
    })
}
