use crate::constants::asset_url;
use anyhow::{anyhow, Context};
use banner_core::{Asset, AssetSizes, BannerError};
use fnv::FnvHashMap;
use glam::Vec2;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Decoded images keyed by asset. Built only when every image loaded.
pub struct LoadedAssets {
    images: FnvHashMap<Asset, web::HtmlImageElement>,
}

impl LoadedAssets {
    pub async fn load_all() -> anyhow::Result<Self> {
        let mut images = FnvHashMap::default();
        for asset in Asset::ALL {
            let url = asset_url(asset.file_name());
            let img = load_image(&url)
                .await
                .with_context(|| format!("loading {}", asset.file_name()))?;
            log::debug!(
                "[assets] {} {}x{}",
                url,
                img.natural_width(),
                img.natural_height()
            );
            images.insert(asset, img);
        }
        log::info!("[assets] {} images loaded", images.len());
        Ok(Self { images })
    }

    pub fn image(&self, asset: Asset) -> Option<&web::HtmlImageElement> {
        self.images.get(&asset)
    }

    pub fn sizes(&self) -> Result<AssetSizes, BannerError> {
        AssetSizes::from_lookup(|asset| {
            self.images
                .get(&asset)
                .map(|img| Vec2::new(img.natural_width() as f32, img.natural_height() as f32))
        })
    }
}

async fn load_image(url: &str) -> anyhow::Result<web::HtmlImageElement> {
    let img = web::HtmlImageElement::new().map_err(|e| anyhow!("{:?}", e))?;
    let done = js_sys::Promise::new(&mut |resolve, reject| {
        img.set_onload(Some(&resolve));
        img.set_onerror(Some(&reject));
    });
    img.set_src(url);
    let loaded = JsFuture::from(done).await;
    img.set_onload(None);
    img.set_onerror(None);
    loaded.map_err(|_| anyhow!("failed to load {}", url))?;
    Ok(img)
}
