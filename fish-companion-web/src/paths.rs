//! Static asset URLs that respect the deployment base path.
use fish_companion_core::{FishCategory, Lake};

/// Prefix for asset URLs. `PUBLIC_URL` is read at compile time so the site
/// can be served from a sub-path (e.g. a project page).
#[must_use]
pub fn base_path() -> &'static str {
    option_env!("PUBLIC_URL").unwrap_or("")
}

/// URL of a file under the static root.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    join(base_path(), relative)
}

/// Sprite for one category as it appears in `lake`.
#[must_use]
pub fn fish_image(lake: Lake, category: FishCategory) -> String {
    asset_path(&fish_image_name(lake, category))
}

fn fish_image_name(lake: Lake, category: FishCategory) -> String {
    format!("Fish_2_{}_{}.png", lake.as_str(), category.tag())
}

fn join(base: &str, relative: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');
    format!("{base}/{rel}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_with_and_without_base() {
        assert_eq!(join("", "Icon_TaskCenter.png"), "/Icon_TaskCenter.png");
        assert_eq!(
            join("/fish-companion/", "/Icon_TaskCenter.png"),
            "/fish-companion/Icon_TaskCenter.png"
        );
    }

    #[test]
    fn fish_sprites_follow_lake_and_tag() {
        assert_eq!(
            fish_image_name(Lake::Polar, FishCategory::Legendary),
            "Fish_2_Polar_LEG.png"
        );
    }
}
