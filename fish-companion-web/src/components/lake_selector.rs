use fish_companion_core::{Lake, LegendaryOdds, OddsTrend, PoolTracker};
use yew::prelude::*;

/// What the selector shows for one lake.
#[derive(Clone, Copy, PartialEq)]
pub struct LakeBadge {
    pub lake: Lake,
    pub remaining: f64,
    pub odds: LegendaryOdds,
}

impl LakeBadge {
    #[must_use]
    pub fn for_lake(tracker: &PoolTracker, lake: Lake) -> Self {
        Self {
            lake,
            remaining: tracker.remaining(lake),
            odds: tracker.odds(lake),
        }
    }

    #[must_use]
    pub fn all(tracker: &PoolTracker) -> Vec<Self> {
        Lake::ALL
            .into_iter()
            .map(|lake| Self::for_lake(tracker, lake))
            .collect()
    }
}

/// Colour class for an odds readout.
#[must_use]
pub const fn odds_class(trend: OddsTrend) -> Option<&'static str> {
    match trend {
        OddsTrend::Favorable => Some("odds-up"),
        OddsTrend::Unfavorable => Some("odds-down"),
        OddsTrend::Neutral => None,
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub current: Lake,
    pub badges: Vec<LakeBadge>,
    pub on_select: Callback<Lake>,
}

#[function_component(LakeSelector)]
pub fn lake_selector(p: &Props) -> Html {
    html! {
        <div class="lake-selector" role="radiogroup" aria-label="Select a Lake">
            { for p.badges.iter().map(|badge| {
                let lake = badge.lake;
                let selected = lake == p.current;
                let onclick = {
                    let cb = p.on_select.clone();
                    Callback::from(move |_| cb.emit(lake))
                };
                html! {
                    <button
                        key={lake.as_str()}
                        class={classes!("lake-option", selected.then_some("selected"))}
                        role="radio"
                        aria-checked={selected.to_string()}
                        {onclick}
                    >
                        <span class="lake-name">{ lake.as_str() }</span>
                        <span class="lake-remaining">{ format!("{} fish", badge.remaining) }</span>
                        <span class={classes!("lake-odds", odds_class(badge.odds.trend))}>
                            { badge.odds.to_string() }
                        </span>
                    </button>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fish_companion_core::FishCategory;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn selector_lists_every_lake_with_odds() {
        let mut tracker = PoolTracker::new();
        tracker.catch(Lake::Sunset, FishCategory::Legendary);
        let props = Props {
            current: Lake::Sunset,
            badges: LakeBadge::all(&tracker),
            on_select: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<LakeSelector>::with_props(props).render());
        for lake in Lake::ALL {
            assert!(html.contains(lake.as_str()), "{lake} missing: {html}");
        }
        assert!(html.contains("39 fish"), "remaining count should render: {html}");
        assert!(html.contains("80 fish"), "polar holds 80: {html}");
        assert!(html.contains("0.0% ↓"), "empty legendary reads unfavorable: {html}");
        assert!(html.contains("odds-down"), "{html}");
    }
}
