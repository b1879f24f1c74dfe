use fish_companion_core::{BrokenLines, MAX_BROKEN_LINES};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub lines: BrokenLines,
    pub on_add: Callback<()>,
    pub on_reset: Callback<()>,
}

#[function_component(BrokenLinesCounter)]
pub fn broken_lines_counter(p: &Props) -> Html {
    let on_add = {
        let cb = p.on_add.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_reset = {
        let cb = p.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <section class="broken-lines" aria-label="Broken Lines">
            <span class="stat-title">{ "Broken Lines" }</span>
            <span class="stat-value">{ format!("{} / {MAX_BROKEN_LINES}", p.lines.count()) }</span>
            <button class="btn" disabled={!p.lines.can_add()} onclick={on_add}>{ "+1" }</button>
            <button class="btn" disabled={!p.lines.can_reset()} onclick={on_reset}>{ "Reset" }</button>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn render(lines: BrokenLines) -> String {
        let props = Props {
            lines,
            on_add: Callback::noop(),
            on_reset: Callback::noop(),
        };
        block_on(LocalServerRenderer::<BrokenLinesCounter>::with_props(props).render())
    }

    #[test]
    fn zero_lines_cannot_reset() {
        let html = render(BrokenLines::default());
        assert!(html.contains("0 / 120"), "{html}");
        assert_eq!(html.matches(" disabled").count(), 1, "{html}");
    }

    #[test]
    fn full_counter_cannot_add() {
        let html = render(BrokenLines::from_stored(500.0));
        assert!(html.contains("120 / 120"), "{html}");
        assert_eq!(html.matches(" disabled").count(), 1, "{html}");
    }
}
