use web_sys::MouseEvent;
use yew::prelude::*;

use crate::prefs::Locale;

#[derive(Properties, PartialEq)]
pub struct LocaleSwitcherProps {
    pub current: Locale,
    pub on_change: Callback<Locale>,
}

#[function_component(LocaleSwitcher)]
pub fn locale_switcher(props: &LocaleSwitcherProps) -> Html {
    html! {
        <div class="locale-switcher" role="group">
            {
                for Locale::ALL.into_iter().map(|locale| {
                    let on_change = props.on_change.clone();
                    let onclick = Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        on_change.emit(locale);
                    });
                    html! {
                        <button
                            class={classes!("locale-option", (locale == props.current).then(|| "selected"))}
                            lang={locale.tag()}
                            aria-pressed={(locale == props.current).to_string()}
                            {onclick}
                        >
                            {locale.label()}
                        </button>
                    }
                })
            }
        </div>
    }
}
