use fish_companion_core::PoolTracker;
use std::rc::Rc;
use yew::prelude::*;

use crate::actions::PoolAction;
use crate::components::broken_lines::BrokenLinesCounter;
use crate::components::caught_totals::CaughtTotals;
use crate::components::fish_grid::FishGrid;
use crate::components::lake_selector::{LakeBadge, LakeSelector};
use crate::components::pool_status::PoolStatus;
use crate::components::reset_all::ResetAll;

#[derive(Properties, Clone)]
pub struct PoolPageProps {
    pub tracker: Rc<PoolTracker>,
    pub on_action: Callback<PoolAction>,
}

impl PartialEq for PoolPageProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.tracker, &other.tracker) && self.on_action == other.on_action
    }
}

fn emit(on_action: &Callback<PoolAction>, action: PoolAction) -> Callback<()> {
    let cb = on_action.clone();
    Callback::from(move |()| cb.emit(action))
}

#[function_component(PoolPage)]
pub fn pool_page(props: &PoolPageProps) -> Html {
    let tracker = &props.tracker;
    let lake = tracker.current_lake();
    let on_select = props.on_action.reform(PoolAction::SelectLake);
    let on_catch = props.on_action.reform(PoolAction::Catch);

    html! {
        <main class="pool-page">
            <LakeSelector
                current={lake}
                badges={LakeBadge::all(tracker)}
                {on_select}
            />
            <PoolStatus
                {lake}
                remaining={tracker.remaining(lake)}
                odds={tracker.odds(lake)}
                can_undo={tracker.can_undo(lake)}
                can_refill={tracker.can_refill(lake)}
                on_undo={emit(&props.on_action, PoolAction::Undo)}
                on_refill={emit(&props.on_action, PoolAction::Refill)}
            />
            <FishGrid
                {lake}
                counts={*tracker.pool(lake).counts()}
                whole_pool_ready={tracker.can_catch_whole_pool(lake)}
                {on_catch}
                on_catch_whole_pool={emit(&props.on_action, PoolAction::CatchWholePool)}
            />
            <BrokenLinesCounter
                lines={tracker.broken_lines()}
                on_add={emit(&props.on_action, PoolAction::AddBrokenLine)}
                on_reset={emit(&props.on_action, PoolAction::ResetBrokenLines)}
            />
            <CaughtTotals summary={tracker.caught_summary()} />
            <ResetAll
                on_confirm={emit(&props.on_action, PoolAction::ResetAll)}
                disabled={!tracker.can_reset_all()}
            />
        </main>
    }
}
