use fish_companion_core::Quest;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub quest: Quest,
    pub progress: Option<f64>,
    /// Raw input text on every keystroke.
    pub on_input: Callback<String>,
}

#[function_component(QuestCard)]
pub fn quest_card(p: &Props) -> Html {
    let quest = &p.quest;
    let split = quest.reward_split(p.progress);
    let percent = quest.completion_percent(p.progress);
    // Zero shows as an empty box, like unset progress.
    let value = p
        .progress
        .filter(|v| *v != 0.0)
        .map(|v| v.to_string())
        .unwrap_or_default();
    let oninput = {
        let cb = p.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.value());
        })
    };
    let input_id = format!("quest-{}", quest.name.as_str().replace(' ', "-").to_lowercase());

    html! {
        <article class="quest-card">
            <header class="quest-header">
                <label for={input_id.clone()} class="quest-name">{ quest.name.as_str() }</label>
                <span class="quest-rewards">
                    { format!("{} / {}", split.earned, split.earned + split.remaining) }
                </span>
            </header>
            <input
                id={input_id}
                class="input quest-input"
                type="number"
                min="0"
                placeholder={quest.placeholder.clone()}
                {value}
                {oninput}
            />
            <progress class="quest-progress" max="100" value={format!("{percent:.0}")}></progress>
            <ul class="quest-milestones">
                { for quest.milestones(p.progress).map(|m| html! {
                    <li
                        key={m.threshold.to_string()}
                        class={classes!("milestone", m.reached.then_some("reached"))}
                        title={format!("{} reward at {}", m.reward, m.threshold)}
                    >
                        { m.threshold.to_string() }
                    </li>
                }) }
            </ul>
        </article>
    }
}
