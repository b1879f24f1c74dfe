#[cfg(target_arch = "wasm32")]
use crate::actions::{PoolAction, QuestAction};
#[cfg(target_arch = "wasm32")]
use crate::pages::{pool::PoolPage, quests::QuestsPage};
#[cfg(target_arch = "wasm32")]
use crate::paths::asset_path;
#[cfg(target_arch = "wasm32")]
use crate::scheduler::TimeoutScheduler;
#[cfg(target_arch = "wasm32")]
use crate::storage::LocalStore;
#[cfg(target_arch = "wasm32")]
use fish_companion_core::{Companion, PersistenceConfig};
#[cfg(target_arch = "wasm32")]
use gloo::events::EventListener;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

#[cfg(target_arch = "wasm32")]
type WebCompanion = Companion<LocalStore, TimeoutScheduler>;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let companion = use_mut_ref(|| -> WebCompanion {
        Companion::open(
            LocalStore,
            TimeoutScheduler::new(),
            &PersistenceConfig::default_config(),
        )
    });
    let pool = use_state({
        let companion = companion.clone();
        move || Rc::new(companion.borrow().pool.state().clone())
    });
    let quests = use_state({
        let companion = companion.clone();
        move || Rc::new(companion.borrow().quests.state().clone())
    });
    let quests_open = use_state(|| false);

    {
        // Flush pending writes before the tab is discarded.
        let companion = companion.clone();
        use_effect_with((), move |()| {
            let listener = EventListener::new(&gloo::utils::window(), "pagehide", move |_| {
                companion.borrow_mut().flush();
            });
            move || drop(listener)
        });
    }

    let on_pool_action = {
        let companion = companion.clone();
        let pool = pool.clone();
        Callback::from(move |action: PoolAction| {
            let mut companion = companion.borrow_mut();
            if companion.pool.apply(|tracker| action.apply(tracker)) {
                pool.set(Rc::new(companion.pool.state().clone()));
            }
        })
    };
    let on_quest_action = {
        let companion = companion.clone();
        let quests = quests.clone();
        Callback::from(move |action: QuestAction| {
            let mut companion = companion.borrow_mut();
            if companion.quests.apply(|tracker| action.apply(tracker)) {
                quests.set(Rc::new(companion.quests.state().clone()));
            }
        })
    };
    let toggle_quests = {
        let quests_open = quests_open.clone();
        Callback::from(move |_| quests_open.set(!*quests_open))
    };

    html! {
        <div class="app">
            <header class="app-header">
                <h1>{ "Fishing Companion" }</h1>
                <button
                    class="btn quest-toggle"
                    aria-expanded={quests_open.to_string()}
                    aria-controls="quest-drawer"
                    onclick={toggle_quests}
                >
                    <img src={asset_path("Icon_TaskCenter.png")} alt="" />
                    { "Quests" }
                </button>
            </header>
            <PoolPage tracker={(*pool).clone()} on_action={on_pool_action} />
            if *quests_open {
                <aside id="quest-drawer" class="quest-drawer">
                    <QuestsPage tracker={(*quests).clone()} on_action={on_quest_action} />
                </aside>
            }
        </div>
    }
}
