use fish_companion_core::CaughtSummary;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub summary: CaughtSummary,
}

/// Lifetime catches per lake, with a grand total row.
#[function_component(CaughtTotals)]
pub fn caught_totals(p: &Props) -> Html {
    html! {
        <table class="caught-totals">
            <thead>
                <tr>
                    <th>{ "Lake" }</th>
                    <th>{ "Caught" }</th>
                    <th>{ "Legendary" }</th>
                </tr>
            </thead>
            <tbody>
                { for p.summary.lakes.iter().map(|entry| html! {
                    <tr key={entry.lake.as_str()}>
                        <td>{ entry.lake.as_str() }</td>
                        <td>{ entry.caught.to_string() }</td>
                        <td>{ entry.legendary.to_string() }</td>
                    </tr>
                }) }
            </tbody>
            <tfoot>
                <tr>
                    <th>{ "Total" }</th>
                    <td class="total-caught">{ p.summary.total_caught().to_string() }</td>
                    <td class="total-legendary">{ p.summary.total_legendary().to_string() }</td>
                </tr>
            </tfoot>
        </table>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fish_companion_core::{FishCategory, Lake, PoolTracker};
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn totals_sum_across_lakes() {
        let mut tracker = PoolTracker::new();
        tracker.catch_whole_pool(Lake::Polar);
        tracker.catch(Lake::Sunset, FishCategory::Legendary);
        let props = Props {
            summary: tracker.caught_summary(),
        };
        let html = block_on(
            LocalServerRenderer::<CaughtTotals>::with_props(props)
                .hydratable(false)
                .render(),
        );
        assert!(
            html.contains(r#"<td class="total-caught">81</td>"#),
            "{html}"
        );
        assert!(
            html.contains(r#"<td class="total-legendary">3</td>"#),
            "{html}"
        );
    }
}
