use fish_companion_core::QuestTracker;
use std::rc::Rc;
use yew::prelude::*;

use crate::actions::QuestAction;
use crate::components::quest_card::QuestCard;
use crate::components::quest_totals::QuestTotals;

#[derive(Properties, Clone)]
pub struct QuestsPageProps {
    pub tracker: Rc<QuestTracker>,
    pub on_action: Callback<QuestAction>,
}

impl PartialEq for QuestsPageProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.tracker, &other.tracker) && self.on_action == other.on_action
    }
}

#[function_component(QuestsPage)]
pub fn quests_page(props: &QuestsPageProps) -> Html {
    let tracker = &props.tracker;
    let on_clear = {
        let cb = props.on_action.clone();
        Callback::from(move |()| cb.emit(QuestAction::ClearAll))
    };

    html! {
        <section class="quests-page" aria-label="Quests">
            <QuestTotals
                totals={tracker.totals()}
                has_progress={!tracker.progress().is_empty()}
                {on_clear}
            />
            <div class="quest-list">
                { for tracker.catalog().quests().iter().map(|quest| {
                    let name = quest.name;
                    let on_input = props
                        .on_action
                        .reform(move |text: String| QuestAction::SetProgress(name, text));
                    html! {
                        <QuestCard
                            key={name.as_str()}
                            quest={quest.clone()}
                            progress={tracker.progress_of(name)}
                            {on_input}
                        />
                    }
                }) }
            </div>
        </section>
    }
}
