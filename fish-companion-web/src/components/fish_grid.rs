use fish_companion_core::{FishCategory, FishCounts, Lake, Rarity};
use yew::prelude::*;

use crate::paths::{asset_path, fish_image};

const fn rarity_class(rarity: Rarity) -> &'static str {
    match rarity {
        Rarity::Rare => "fish-rare",
        Rarity::Epic => "fish-epic",
        Rarity::Legendary => "fish-legendary",
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub lake: Lake,
    pub counts: FishCounts,
    /// True while the lake's undo stack is empty.
    pub whole_pool_ready: bool,
    pub on_catch: Callback<FishCategory>,
    pub on_catch_whole_pool: Callback<()>,
}

#[function_component(FishGrid)]
pub fn fish_grid(p: &Props) -> Html {
    let whole_pool = {
        let cb = p.on_catch_whole_pool.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div class="fish-grid">
            { for FishCategory::ALL.into_iter().map(|category| {
                let count = p.counts.get(category);
                let onclick = {
                    let cb = p.on_catch.clone();
                    Callback::from(move |_| cb.emit(category))
                };
                html! {
                    <button
                        key={category.tag()}
                        class={classes!("fish-button", rarity_class(category.rarity()))}
                        disabled={count <= 0.0}
                        title={format!("Caught a {}", category.label())}
                        {onclick}
                    >
                        <img src={fish_image(p.lake, category)} alt={category.label()} />
                        <span class="fish-label">{ category.label() }</span>
                        <span class="fish-count">{ count.to_string() }</span>
                    </button>
                }
            }) }
            <button
                class="fish-button fish-whole-pool"
                disabled={!p.whole_pool_ready}
                title="Caught the whole pool"
                onclick={whole_pool}
            >
                <img src={asset_path("Icon_Fishing.png")} alt="Whole pool" />
                <span class="fish-label">{ "Whole Pool" }</span>
            </button>
        </div>
    }
}
