use fish_companion_core::RewardSplit;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub totals: RewardSplit,
    /// Any quest has progress entered.
    pub has_progress: bool,
    pub on_clear: Callback<()>,
}

#[function_component(QuestTotals)]
pub fn quest_totals(p: &Props) -> Html {
    let on_clear = {
        let cb = p.on_clear.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <section class="quest-totals" aria-label="Quest Rewards">
            <div class="stat">
                <span class="stat-title">{ "Earned" }</span>
                <span class="stat-value earned">{ p.totals.earned.to_string() }</span>
            </div>
            <div class="stat">
                <span class="stat-title">{ "Remaining" }</span>
                <span class="stat-value remaining">{ p.totals.remaining.to_string() }</span>
            </div>
            <button class="btn btn-outline" disabled={!p.has_progress} onclick={on_clear}>
                { "Clear All" }
            </button>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fish_companion_core::{QuestName, QuestTracker};
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn totals_reflect_tracker_progress() {
        let mut tracker = QuestTracker::default();
        tracker.set_progress(QuestName::SilverTickets, 45.0);
        let props = Props {
            totals: tracker.totals(),
            has_progress: !tracker.progress().is_empty(),
            on_clear: Callback::noop(),
        };
        let html = block_on(
            LocalServerRenderer::<QuestTotals>::with_props(props)
                .hydratable(false)
                .render(),
        );
        assert!(html.contains(r#"<span class="stat-value earned">60</span>"#), "{html}");
        assert!(html.contains("Clear All"), "{html}");
        assert!(!html.contains(" disabled"), "{html}");
    }
}
