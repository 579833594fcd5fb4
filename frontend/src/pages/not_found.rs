use yew::prelude::*;
use yew_router::prelude::*;

use crate::content;
use crate::prefs::Locale;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let locale = use_context::<Locale>().unwrap_or_default();
    let copy = content::page_copy(locale);

    html! {
        <div class="not-found-page">
            <h1>{copy.not_found_title}</h1>
            <p>{copy.not_found_body}</p>
            <Link<Route> to={Route::Home} classes="forward-link">
                {copy.back_home}
            </Link<Route>>
            <style>
                {r#"
                    .not-found-page {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                        background: #020617;
                        color: #e2e8f0;
                        text-align: center;
                        padding: 2rem;
                    }
                    .not-found-page .forward-link {
                        color: #38bdf8;
                    }
                "#}
            </style>
        </div>
    }
}
