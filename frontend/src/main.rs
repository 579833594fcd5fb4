use yew::prelude::*;
use yew_router::prelude::*;
use log::{error, info, warn};
use web_sys::MouseEvent;

mod config;
mod content;
mod error;
mod prefs;
mod viewport;
mod scroll {
    pub mod mapper;
    pub mod geometry;
    pub mod navigation;
    pub mod subscription;
}
mod components {
    pub mod locale_switcher;
    pub mod phone_showcase;
    pub mod starfield;
    pub mod step_sequence;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}

use components::locale_switcher::LocaleSwitcher;
use pages::{landing::Landing, not_found::NotFound};
use prefs::Locale;
use scroll::subscription::ScrollSubscription;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub locale: Locale,
    pub on_locale: Callback<Locale>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { locale, on_locale } = props;
    let copy = content::page_copy(*locale);
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let subscription = error::window().and_then(|window| {
                let window_clone = window.clone();
                ScrollSubscription::attach(&window, move || {
                    match window_clone.scroll_y() {
                        Ok(scroll_y) => is_scrolled.set(scroll_y > config::NAV_SCROLLED_THRESHOLD_PX),
                        Err(e) => warn!("Failed to read scroll position: {:?}", e),
                    }
                })
            });
            if let Err(e) = &subscription {
                error!("Navigation bar will not track scrolling: {}", e);
            }
            move || drop(subscription)
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"staffline"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <a href="#how-it-works" class="nav-link" onclick={close_menu.clone()}>
                        {copy.nav_how}
                    </a>
                    <LocaleSwitcher current={*locale} on_change={on_locale.clone()} />
                    <a
                        href={format!("{}/demo", config::get_app_url())}
                        class="nav-cta-button"
                        onclick={close_menu}
                    >
                        {copy.nav_cta}
                    </a>
                </div>
            </div>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 10;
                        transition: background 0.3s ease, backdrop-filter 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(2, 6, 23, 0.85);
                        backdrop-filter: blur(10px);
                    }
                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 1rem 2rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        color: #fff;
                        font-weight: 700;
                        text-decoration: none;
                    }
                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 1.5rem;
                    }
                    .nav-link {
                        color: #cbd5e1;
                        text-decoration: none;
                    }
                    .nav-cta-button {
                        color: #fff;
                        border: 1px solid #38bdf8;
                        border-radius: 999px;
                        padding: 0.4rem 1rem;
                        text-decoration: none;
                    }
                    .locale-option {
                        background: none;
                        border: none;
                        color: #64748b;
                        cursor: pointer;
                    }
                    .locale-option.selected {
                        color: #fff;
                    }
                    .burger-menu {
                        display: none;
                    }
                    @media (max-width: 768px) {
                        .burger-menu {
                            display: flex;
                            flex-direction: column;
                            gap: 4px;
                            background: none;
                            border: none;
                        }
                        .burger-menu span {
                            width: 22px;
                            height: 2px;
                            background: #fff;
                        }
                        .nav-right {
                            display: none;
                        }
                        .nav-right.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            padding: 1.5rem;
                            background: rgba(2, 6, 23, 0.95);
                        }
                    }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let locale = use_state_eq(prefs::current_locale);

    let handle_locale = {
        let locale = locale.clone();
        Callback::from(move |selected: Locale| {
            if let Err(e) = prefs::set_locale(selected) {
                warn!("Locale preference not saved: {}", e);
            }
            locale.set(selected);
        })
    };

    html! {
        <ContextProvider<Locale> context={*locale}>
            <BrowserRouter>
                <Nav locale={*locale} on_locale={handle_locale} />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<Locale>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    if let Err(e) = prefs::initialize(prefs::resolve_initial_locale()) {
        error!("Locale preference setup failed: {}", e);
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
