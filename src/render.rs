//! Canvas 2D drawing of the banner scene.
//!
//! Nodes are drawn depth-first in the order given by `scene::ROOTS` and
//! `scene::children`, each inside a save/restore pair carrying its transform
//! and alpha. Coordinates are CSS px; the device pixel ratio is applied once
//! at the root.

use crate::assets::LoadedAssets;
use crate::constants::{css_color, BACKGROUND_COLOR};
use anyhow::anyhow;
use banner_core::{children, Banner, Node, NodeKey, ParticleFlow, ROOTS};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Renderer {
    ctx: web::CanvasRenderingContext2d,
    canvas: web::HtmlCanvasElement,
    assets: LoadedAssets,
}

impl Renderer {
    pub fn new(canvas: &web::HtmlCanvasElement, assets: LoadedAssets) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("getContext: {:?}", e))?
            .ok_or_else(|| anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow!("{:?}", e))?;
        Ok(Self {
            ctx,
            canvas: canvas.clone(),
            assets,
        })
    }

    pub fn render(&self, banner: &Banner) {
        let ctx = &self.ctx;
        let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
        _ = ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        ctx.set_global_alpha(1.0);
        ctx.set_fill_style_str(BACKGROUND_COLOR);
        ctx.fill_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
        _ = ctx.scale(dpr, dpr);

        for key in ROOTS {
            self.draw_node(banner, key);
        }
    }

    fn draw_node(&self, banner: &Banner, key: NodeKey) {
        let node = banner.scene().node(key);
        self.push(node);
        if key == NodeKey::FlowLayer {
            self.draw_particles(banner.flow());
        }
        if let Some(img) = key.asset().and_then(|a| self.assets.image(a)) {
            _ = self.ctx.draw_image_with_html_image_element(img, 0.0, 0.0);
        }
        for child in children(key) {
            self.draw_node(banner, *child);
        }
        self.ctx.restore();
    }

    fn push(&self, node: &Node) {
        let ctx = &self.ctx;
        ctx.save();
        _ = ctx.translate(node.position.x as f64, node.position.y as f64);
        _ = ctx.rotate(node.rotation as f64);
        _ = ctx.scale(node.scale.x as f64, node.scale.y as f64);
        _ = ctx.translate(-node.pivot.x as f64, -node.pivot.y as f64);
        ctx.set_global_alpha(ctx.global_alpha() * node.alpha as f64);
    }

    fn draw_particles(&self, flow: &ParticleFlow) {
        let ctx = &self.ctx;
        let radius = flow.params().particle_radius as f64;
        for p in flow.particles() {
            ctx.save();
            _ = ctx.translate(p.position.x as f64, p.position.y as f64);
            _ = ctx.scale(p.scale.x as f64, p.scale.y as f64);
            ctx.begin_path();
            _ = ctx.arc(0.0, 0.0, radius, 0.0, TAU);
            ctx.set_fill_style_str(&css_color(p.color));
            ctx.fill();
            ctx.restore();
        }
    }
}
