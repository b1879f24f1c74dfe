use fish_companion_core::{Lake, LegendaryOdds};
use yew::prelude::*;

use super::lake_selector::odds_class;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub lake: Lake,
    pub remaining: f64,
    pub odds: LegendaryOdds,
    pub can_undo: bool,
    pub can_refill: bool,
    pub on_undo: Callback<()>,
    pub on_refill: Callback<()>,
}

#[function_component(PoolStatus)]
pub fn pool_status(p: &Props) -> Html {
    let on_undo = {
        let cb = p.on_undo.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_refill = {
        let cb = p.on_refill.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <section class="pool-status" aria-label={format!("{} pool", p.lake)}>
            <div class="stat">
                <span class="stat-title">{ "Remaining" }</span>
                <span class="stat-value">{ p.remaining.to_string() }</span>
            </div>
            <div class="stat">
                <span class="stat-title">{ "Legendary Odds" }</span>
                <span class={classes!("stat-value", odds_class(p.odds.trend))}>
                    { p.odds.to_string() }
                </span>
            </div>
            <div class="pool-controls">
                <button class="btn" disabled={!p.can_undo} onclick={on_undo}>{ "Undo" }</button>
                <button class="btn" disabled={!p.can_refill} onclick={on_refill}>{ "Refill" }</button>
            </div>
        </section>
    }
}
