//! Visual hierarchy of the banner: nodes, their fixed set of keys, layout on
//! resize and hit testing for the action control.
//!
//! Layering from back to front: flow layer (particles), bike assembly (body,
//! lever, handlebar overlay), action control (face, pulse ring, static ring).

use crate::config::BannerConfig;
use crate::error::{BannerError, Result};
use crate::tween::NodeProp;
use glam::Vec2;

/// Image resources the scene is built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Asset {
    Button,
    ButtonRing,
    Lever,
    Bike,
    Handlebar,
}

impl Asset {
    pub const ALL: [Asset; 5] = [
        Asset::Button,
        Asset::ButtonRing,
        Asset::Lever,
        Asset::Bike,
        Asset::Handlebar,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Asset::Button => "btn.png",
            Asset::ButtonRing => "btn_circle.png",
            Asset::Lever => "brake_lever.png",
            Asset::Bike => "brake_bike.png",
            Asset::Handlebar => "brake_handlerbar.png",
        }
    }
}

/// Natural pixel size of every loaded image.
#[derive(Clone, Debug, PartialEq)]
pub struct AssetSizes {
    sizes: [Vec2; 5],
}

impl AssetSizes {
    /// Fails on the first asset `lookup` cannot size; a scene is never built
    /// with a missing texture.
    pub fn from_lookup(mut lookup: impl FnMut(Asset) -> Option<Vec2>) -> Result<Self> {
        let mut sizes = [Vec2::ZERO; 5];
        for (i, asset) in Asset::ALL.iter().enumerate() {
            sizes[i] = lookup(*asset)
                .ok_or_else(|| BannerError::MissingAsset(asset.file_name().to_string()))?;
        }
        Ok(Self { sizes })
    }

    pub fn get(&self, asset: Asset) -> Vec2 {
        self.sizes[asset as usize]
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Result<Self> {
        if !(width.is_finite() && height.is_finite()) || width < 0.0 || height < 0.0 {
            return Err(BannerError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width, self.height) * 0.5
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            min: Vec2::ZERO,
            max: Vec2::new(self.width, self.height),
        }
    }
}

/// Axis-aligned rectangle used for particle placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn size(&self) -> Vec2 {
        (self.max - self.min).max(Vec2::ZERO)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKey {
    FlowLayer,
    Bike,
    BikeBody,
    Lever,
    Handlebar,
    Button,
    ButtonFace,
    PulseRing,
    StaticRing,
}

impl NodeKey {
    pub const COUNT: usize = 9;

    /// Sprite drawn by a leaf node, if any.
    pub fn asset(self) -> Option<Asset> {
        match self {
            NodeKey::BikeBody => Some(Asset::Bike),
            NodeKey::Lever => Some(Asset::Lever),
            NodeKey::Handlebar => Some(Asset::Handlebar),
            NodeKey::ButtonFace => Some(Asset::Button),
            NodeKey::PulseRing | NodeKey::StaticRing => Some(Asset::ButtonRing),
            NodeKey::FlowLayer | NodeKey::Bike | NodeKey::Button => None,
        }
    }
}

/// Top-level containers in draw order.
pub const ROOTS: [NodeKey; 3] = [NodeKey::FlowLayer, NodeKey::Bike, NodeKey::Button];

/// Children of a container in draw order. Particles are drawn by the flow layer itself.
pub fn children(key: NodeKey) -> &'static [NodeKey] {
    match key {
        NodeKey::Bike => &[NodeKey::BikeBody, NodeKey::Lever, NodeKey::Handlebar],
        NodeKey::Button => &[NodeKey::ButtonFace, NodeKey::PulseRing, NodeKey::StaticRing],
        _ => &[],
    }
}

/// 2D transform applied as: translate(position) · rotate · scale · translate(-pivot).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
    pub position: Vec2,
    pub scale: Vec2,
    pub rotation: f32,
    pub pivot: Vec2,
    pub alpha: f32,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            scale: Vec2::ONE,
            rotation: 0.0,
            pivot: Vec2::ZERO,
            alpha: 1.0,
        }
    }
}

impl Node {
    pub fn get(&self, prop: NodeProp) -> f32 {
        match prop {
            NodeProp::X => self.position.x,
            NodeProp::Y => self.position.y,
            NodeProp::Rotation => self.rotation,
            NodeProp::Scale => self.scale.x,
            NodeProp::Alpha => self.alpha,
        }
    }

    pub fn set(&mut self, prop: NodeProp, value: f32) {
        match prop {
            NodeProp::X => self.position.x = value,
            NodeProp::Y => self.position.y = value,
            NodeProp::Rotation => self.rotation = value,
            NodeProp::Scale => self.scale = Vec2::splat(value),
            NodeProp::Alpha => self.alpha = value,
        }
    }
}

pub struct Scene {
    nodes: [Node; NodeKey::COUNT],
    assets: AssetSizes,
    bike_scale: f32,
    bike_base: Vec2,
    bike_recoil: f32,
}

impl Scene {
    pub fn build(assets: AssetSizes, config: &BannerConfig, viewport: Viewport) -> Self {
        let mut nodes = [Node::default(); NodeKey::COUNT];

        nodes[NodeKey::FlowLayer as usize].rotation = config.flow_rotation_deg.to_radians();

        nodes[NodeKey::Bike as usize].scale = Vec2::splat(config.bike_scale);
        let lever = &mut nodes[NodeKey::Lever as usize];
        lever.pivot = config.lever.pivot;
        lever.position = config.lever.position;

        nodes[NodeKey::Button as usize].position = config.button_position;
        for key in children(NodeKey::Button) {
            if let Some(asset) = key.asset() {
                // pivot at the centre; source images are square
                nodes[*key as usize].pivot = Vec2::splat(assets.get(asset).x / 2.0);
            }
        }

        let mut scene = Self {
            nodes,
            assets,
            bike_scale: config.bike_scale,
            bike_base: Vec2::ZERO,
            bike_recoil: 0.0,
        };
        scene.layout(viewport);
        scene
    }

    /// Keep the flow layer centred and the bike flush to the bottom-right corner.
    pub fn layout(&mut self, viewport: Viewport) {
        let center = viewport.center();
        let flow = self.node_mut(NodeKey::FlowLayer);
        flow.pivot = center;
        flow.position = center;

        let bike_size = self.assets.get(Asset::Bike) * self.bike_scale;
        self.bike_base = Vec2::new(viewport.width, viewport.height) - bike_size;
        self.sync_bike();
    }

    fn sync_bike(&mut self) {
        let pos = self.bike_base + Vec2::new(0.0, self.bike_recoil);
        self.node_mut(NodeKey::Bike).position = pos;
    }

    pub fn bike_recoil(&self) -> f32 {
        self.bike_recoil
    }

    pub fn set_bike_recoil(&mut self, offset: f32) {
        self.bike_recoil = offset;
        self.sync_bike();
    }

    pub fn node(&self, key: NodeKey) -> &Node {
        &self.nodes[key as usize]
    }

    pub fn node_mut(&mut self, key: NodeKey) -> &mut Node {
        &mut self.nodes[key as usize]
    }

    /// True when `point` (canvas px) lies on the button face.
    pub fn hits_button(&self, point: Vec2) -> bool {
        let button = self.node(NodeKey::Button);
        let radius = self.assets.get(Asset::Button).x / 2.0 * button.scale.x;
        point.distance(button.position) <= radius
    }
}
