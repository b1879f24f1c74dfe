use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_confirm: Callback<()>,
    #[prop_or_default]
    pub disabled: bool,
}

/// Two-step "reset everything" button.
#[function_component(ResetAll)]
pub fn reset_all(p: &Props) -> Html {
    let confirming = use_state(|| false);

    if *confirming {
        let on_yes = {
            let confirming = confirming.clone();
            let cb = p.on_confirm.clone();
            Callback::from(move |_| {
                confirming.set(false);
                cb.emit(());
            })
        };
        let on_no = {
            let confirming = confirming.clone();
            Callback::from(move |_| confirming.set(false))
        };
        return html! {
            <div class="reset-all confirming" role="alertdialog" aria-label="Reset all pools">
                <p>{ "Restock every lake and clear all catches and broken lines?" }</p>
                <button class="btn btn-error" onclick={on_yes}>{ "Reset" }</button>
                <button class="btn" onclick={on_no}>{ "Cancel" }</button>
            </div>
        };
    }

    let onclick = {
        let confirming = confirming.clone();
        Callback::from(move |_| confirming.set(true))
    };
    html! {
        <div class="reset-all">
            <button class="btn btn-outline" disabled={p.disabled} {onclick}>{ "Reset All" }</button>
        </div>
    }
}
