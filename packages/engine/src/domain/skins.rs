use serde::{Deserialize, Serialize};

use crate::error::BackdropError;

/// Index into the skin palette
pub type SkinId = u16;

/// Background/border colours drawn behind a logo
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorTheme {
    pub fill: String,
    pub border: String,
}

impl Default for ColorTheme {
    fn default() -> Self {
        // Solid white keeps the logos clean.
        Self {
            fill: "#ffffff".to_string(),
            border: "#ffffff".to_string(),
        }
    }
}

/// One visual for a body: logo image plus its colours
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Skin {
    pub id: SkinId,
    pub image: String,
    pub fill_color: String,
    pub border_color: String,
}

/// Immutable set of skins, addressed by `SkinId`
#[derive(Clone, Debug)]
pub struct SkinPalette {
    skins: Vec<Skin>,
}

impl SkinPalette {
    /// One skin per image; themes are cycled across images.
    pub fn build(images: &[String], themes: &[ColorTheme]) -> Result<Self, BackdropError> {
        if images.is_empty() {
            return Err(BackdropError::InvalidConfig("at least one skin image is required".into()));
        }
        if images.len() > SkinId::MAX as usize {
            return Err(BackdropError::InvalidConfig(format!(
                "too many skins ({}, max {})",
                images.len(),
                SkinId::MAX
            )));
        }

        let fallback = [ColorTheme::default()];
        let themes = if themes.is_empty() { &fallback[..] } else { themes };

        let skins = images
            .iter()
            .enumerate()
            .map(|(i, image)| {
                let theme = &themes[i % themes.len()];
                Skin {
                    id: i as SkinId,
                    image: image.clone(),
                    fill_color: theme.fill.clone(),
                    border_color: theme.border.clone(),
                }
            })
            .collect();

        Ok(Self { skins })
    }

    /// Round-robin skin for the `index`-th (0-based) spawned body
    #[inline]
    pub fn skin_for_spawn(&self, index: u32) -> SkinId {
        (index as usize % self.skins.len()) as SkinId
    }

    pub fn get(&self, id: SkinId) -> Option<&Skin> {
        self.skins.get(id as usize)
    }

    pub fn len(&self) -> usize {
        self.skins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skins.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Skin> {
        self.skins.iter()
    }

    /// JSON list the presentation layer uses to resolve `skin` ids
    pub fn manifest_json(&self) -> String {
        serde_json::to_string(&self.skins).unwrap_or_else(|_| "[]".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("/brand-img/img{i}.png")).collect()
    }

    #[test]
    fn empty_image_list_is_rejected() {
        assert!(matches!(
            SkinPalette::build(&[], &[]),
            Err(BackdropError::InvalidConfig(_))
        ));
    }

    #[test]
    fn spawn_index_cycles_round_robin() {
        let palette = SkinPalette::build(&images(5), &[]).unwrap();
        let ids: Vec<SkinId> = (0..12).map(|i| palette.skin_for_spawn(i)).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4, 0, 1, 2, 3, 4, 0, 1]);
    }

    #[test]
    fn themes_cycle_across_images() {
        let themes = vec![
            ColorTheme { fill: "#000".into(), border: "#111".into() },
            ColorTheme { fill: "#fff".into(), border: "#eee".into() },
        ];
        let palette = SkinPalette::build(&images(3), &themes).unwrap();
        assert_eq!(palette.get(0).unwrap().fill_color, "#000");
        assert_eq!(palette.get(1).unwrap().fill_color, "#fff");
        assert_eq!(palette.get(2).unwrap().border_color, "#111");
    }

    #[test]
    fn manifest_lists_every_skin() {
        let palette = SkinPalette::build(&images(2), &[]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&palette.manifest_json()).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 2);
        assert_eq!(parsed[1]["image"], "/brand-img/img2.png");
        assert_eq!(parsed[0]["fill_color"], "#ffffff");
    }
}
