use chrono::Datelike;
use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::starfield::Starfield;
use crate::components::step_sequence::StepSequence;
use crate::config;
use crate::content::{self, FeatureCopy};
use crate::prefs::Locale;
use crate::scroll::mapper::configured_tuning;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    answer: &'static str,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", (*is_open).then(|| "open"))}>
            <button class="faq-question" onclick={toggle} aria-expanded={(*is_open).to_string()}>
                <span class="question-text">{props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{props.answer}</p>
            </div>
        </div>
    }
}

fn feature_block(feature: &FeatureCopy, class: &'static str) -> Html {
    html! {
        <div class={classes!("feature-block", class)}>
            <div class="feature-content">
                <h2>{feature.heading}</h2>
                <p>{feature.body}</p>
                <ul class="feature-list">
                    { for feature.points.iter().map(|point| html! { <li>{*point}</li> }) }
                </ul>
            </div>
            <div class="feature-image">
                <img src={feature.image} loading="lazy" alt={feature.image_alt} />
            </div>
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let locale = use_context::<Locale>().unwrap_or_default();
    let copy = content::page_copy(locale);
    let steps = use_memo(|locale| content::steps(*locale), locale);
    let tuning = use_memo(|_| configured_tuning(), ());

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            debug!("Landing page mounted");
            || ()
        },
        (),
    );

    let employer_signup = format!("{}/signup?role=employer", config::get_app_url());
    let worker_signup = format!("{}/signup?role=worker", config::get_app_url());
    let year = chrono::Local::now().year();

    html! {
        <div class="landing-page">
            <header class="hero">
                <Starfield />
                <div class="hero-content">
                    <p class="hero-eyebrow">{copy.hero_eyebrow}</p>
                    <h1>{copy.hero_title}</h1>
                    <p class="hero-subtitle">{copy.hero_subtitle}</p>
                    <div class="hero-cta-group">
                        <a href={employer_signup.clone()} class="hero-cta">{copy.hero_cta}</a>
                        <a href={worker_signup} class="hero-secondary">{copy.hero_secondary}</a>
                    </div>
                </div>
            </header>

            <StepSequence steps={(*steps).clone()} tuning={*tuning} />

            <section class="audiences">
                { feature_block(&copy.employers, "employers") }
                { feature_block(&copy.workers, "workers") }
            </section>

            <section class="faq-section">
                <h2>{copy.faq_heading}</h2>
                {
                    for copy.faq.iter().map(|(question, answer)| html! {
                        <FaqItem question={*question} answer={*answer} />
                    })
                }
            </section>

            <footer class="footer-cta">
                <div class="footer-content">
                    <h2>{copy.footer_heading}</h2>
                    <p class="subtitle">{copy.footer_text}</p>
                    <a href={employer_signup} class="hero-cta">{copy.footer_cta}</a>
                    <p class="legal">{format!("© {} Staffline. {}", year, copy.rights)}</p>
                </div>
            </footer>
            <style>
                {r#"
                    .landing-page {
                        background: #020617;
                        color: #e2e8f0;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        overflow: hidden;
                        padding: 6rem 1.5rem 4rem;
                    }
                    .hero-content {
                        position: relative;
                        z-index: 1;
                        max-width: 760px;
                    }
                    .hero-eyebrow {
                        color: #38bdf8;
                        text-transform: uppercase;
                        letter-spacing: 0.15em;
                        font-size: 0.8rem;
                    }
                    .hero h1 {
                        font-size: clamp(2.4rem, 6vw, 4.2rem);
                        color: #fff;
                        margin: 1rem 0;
                    }
                    .hero-subtitle {
                        font-size: 1.2rem;
                        color: #94a3b8;
                        line-height: 1.6;
                    }
                    .hero-cta-group {
                        display: flex;
                        gap: 1rem;
                        justify-content: center;
                        flex-wrap: wrap;
                        margin-top: 2rem;
                    }
                    .hero-cta {
                        background: linear-gradient(45deg, #0ea5e9, #6366f1);
                        color: #fff;
                        padding: 0.9rem 1.8rem;
                        border-radius: 999px;
                        text-decoration: none;
                        font-weight: 600;
                    }
                    .hero-secondary {
                        color: #e2e8f0;
                        padding: 0.9rem 1.8rem;
                        border-radius: 999px;
                        border: 1px solid rgba(226, 232, 240, 0.3);
                        text-decoration: none;
                    }
                    .audiences {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 6rem 2rem;
                        display: flex;
                        flex-direction: column;
                        gap: 6rem;
                    }
                    .feature-block {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    .feature-block.workers .feature-content {
                        order: 2;
                    }
                    .feature-block h2 {
                        font-size: 2.2rem;
                        color: #fff;
                    }
                    .feature-list {
                        list-style: none;
                        padding: 0;
                    }
                    .feature-list li {
                        padding: 0.5rem 0;
                        color: #cbd5e1;
                    }
                    .feature-list li::before {
                        content: "✓ ";
                        color: #38bdf8;
                    }
                    .feature-image img {
                        width: 100%;
                        border-radius: 24px;
                    }
                    .faq-section {
                        max-width: 800px;
                        margin: 0 auto;
                        padding: 4rem 1.5rem;
                    }
                    .faq-item {
                        border-bottom: 1px solid rgba(148, 163, 184, 0.2);
                    }
                    .faq-question {
                        width: 100%;
                        display: flex;
                        justify-content: space-between;
                        background: none;
                        border: none;
                        color: #fff;
                        font-size: 1.1rem;
                        padding: 1.25rem 0;
                        cursor: pointer;
                        text-align: left;
                    }
                    .faq-answer {
                        max-height: 0;
                        overflow: hidden;
                        transition: max-height 0.3s ease;
                        color: #94a3b8;
                    }
                    .faq-item.open .faq-answer {
                        max-height: 20rem;
                    }
                    .footer-cta {
                        text-align: center;
                        padding: 6rem 1.5rem 3rem;
                        background: linear-gradient(180deg, #020617, #0b1220);
                    }
                    .footer-content .subtitle {
                        color: #94a3b8;
                        margin-bottom: 2rem;
                    }
                    .legal {
                        margin-top: 3rem;
                        font-size: 0.8rem;
                        color: #64748b;
                    }
                    @media (max-width: 1023px) {
                        .feature-block {
                            grid-template-columns: 1fr;
                        }
                        .feature-block.workers .feature-content {
                            order: 0;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
