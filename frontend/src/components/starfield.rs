use log::{debug, error, warn};
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config;
use crate::error::{self as dom_error};
use crate::prefs;
use crate::scroll::subscription::FrameLoop;

pub fn rotation_at(timestamp_ms: f64, deg_per_sec: f64) -> f64 {
    (timestamp_ms / 1000.0 * deg_per_sec).rem_euclid(360.0)
}

#[function_component(Starfield)]
pub fn starfield() -> Html {
    let layer_ref = use_node_ref();

    {
        let layer_ref = layer_ref.clone();
        use_effect_with_deps(
            move |_| {
                let frame_loop = if prefs::prefers_reduced_motion() {
                    debug!("Reduced motion requested, starfield stays still");
                    None
                } else {
                    let started = dom_error::window().and_then(|window| {
                        FrameLoop::start(&window, move |timestamp| {
                            // Written straight to the node, no re-render per frame
                            if let Some(layer) = layer_ref.cast::<HtmlElement>() {
                                let angle = rotation_at(timestamp, config::STARFIELD_DEG_PER_SEC);
                                if let Err(e) = layer
                                    .set_attribute("style", &format!("transform: rotate({:.3}deg);", angle))
                                {
                                    warn!("Failed to rotate starfield: {:?}", e);
                                }
                            }
                        })
                    });
                    match started {
                        Ok(frame_loop) => Some(frame_loop),
                        Err(e) => {
                            error!("Starfield animation unavailable: {}", e);
                            None
                        }
                    }
                };
                move || drop(frame_loop)
            },
            (),
        );
    }

    html! {
        <div class="starfield" aria-hidden="true">
            <div class="starfield-layer" ref={layer_ref}></div>
            <style>
                {r#"
                    .starfield {
                        position: absolute;
                        inset: 0;
                        overflow: hidden;
                        pointer-events: none;
                        z-index: 0;
                    }
                    .starfield-layer {
                        position: absolute;
                        top: -50%;
                        left: -50%;
                        width: 200%;
                        height: 200%;
                        will-change: transform;
                        background-image:
                            radial-gradient(1px 1px at 12% 18%, rgba(255, 255, 255, 0.9), transparent),
                            radial-gradient(1px 1px at 27% 64%, rgba(255, 255, 255, 0.7), transparent),
                            radial-gradient(2px 2px at 41% 32%, rgba(147, 197, 253, 0.8), transparent),
                            radial-gradient(1px 1px at 58% 81%, rgba(255, 255, 255, 0.6), transparent),
                            radial-gradient(1px 1px at 66% 12%, rgba(255, 255, 255, 0.8), transparent),
                            radial-gradient(2px 2px at 79% 47%, rgba(196, 181, 253, 0.7), transparent),
                            radial-gradient(1px 1px at 88% 73%, rgba(255, 255, 255, 0.9), transparent),
                            radial-gradient(1px 1px at 94% 26%, rgba(255, 255, 255, 0.5), transparent);
                        background-size: 420px 420px;
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_wraps_around() {
        assert_eq!(rotation_at(0.0, 10.0), 0.0);
        assert_eq!(rotation_at(2_000.0, 10.0), 20.0);
        assert_eq!(rotation_at(37_000.0, 10.0), 10.0);
    }

    #[test]
    fn rotation_stays_in_range() {
        for timestamp in [0.0, 16.7, 1e6, 9.99e9] {
            let angle = rotation_at(timestamp, config::STARFIELD_DEG_PER_SEC);
            assert!((0.0..360.0).contains(&angle));
        }
    }
}
