use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Function;
use web_sys::Window;

use crate::error::DomError;

/// Shared "still mounted" flag. Callbacks wrapped with [`Liveness::guard`]
/// stop doing anything once the owner revokes it, even if the browser still
/// has them queued.
#[derive(Clone, Debug)]
pub struct Liveness(Rc<Cell<bool>>);

impl Liveness {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.get()
    }

    pub fn revoke(&self) {
        self.0.set(false);
    }

    pub fn guard<F>(&self, mut callback: F) -> impl FnMut()
    where
        F: FnMut(),
    {
        let alive = self.clone();
        move || {
            if alive.is_alive() {
                callback();
            }
        }
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

const SCROLL_EVENTS: [&str; 2] = ["scroll", "resize"];

/// Window scroll + resize listener. Registered on construction, removed on drop.
pub struct ScrollSubscription {
    window: Window,
    liveness: Liveness,
    callback: Closure<dyn FnMut()>,
}

impl ScrollSubscription {
    pub fn attach<F>(window: &Window, on_event: F) -> Result<Self, DomError>
    where
        F: FnMut() + 'static,
    {
        let liveness = Liveness::new();
        let guarded = liveness.guard(on_event);
        let subscription = Self {
            window: window.clone(),
            liveness,
            callback: Closure::wrap(Box::new(guarded) as Box<dyn FnMut()>),
        };

        // On failure the early return drops `subscription`, which unregisters
        // whatever was already added.
        for event in SCROLL_EVENTS {
            window
                .add_event_listener_with_callback(event, subscription.listener())
                .map_err(|e| DomError::js("addEventListener", e))?;
        }

        // Initial check
        subscription
            .listener()
            .call0(&JsValue::NULL)
            .map_err(|e| DomError::js("initial scroll sample", e))?;

        Ok(subscription)
    }

    fn listener(&self) -> &Function {
        self.callback.as_ref().unchecked_ref()
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        self.liveness.revoke();
        for event in SCROLL_EVENTS {
            if let Err(e) = self
                .window
                .remove_event_listener_with_callback(event, self.listener())
            {
                warn!("Failed to remove {} listener: {:?}", event, e);
            }
        }
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// `requestAnimationFrame` loop handing each frame's timestamp to the callback.
/// Dropping it cancels the pending frame and breaks the self-reference.
pub struct FrameLoop {
    window: Window,
    liveness: Liveness,
    pending: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

impl FrameLoop {
    pub fn start<F>(window: &Window, mut on_frame: F) -> Result<Self, DomError>
    where
        F: FnMut(f64) + 'static,
    {
        let liveness = Liveness::new();
        let pending = Rc::new(Cell::new(None));
        let callback: FrameCallback = Rc::new(RefCell::new(None));

        let frame = {
            let alive = liveness.clone();
            let pending = pending.clone();
            let callback = callback.clone();
            let window = window.clone();
            move |timestamp: f64| {
                pending.set(None);
                if !alive.is_alive() {
                    return;
                }
                on_frame(timestamp);
                if let Some(next) = callback.borrow().as_ref() {
                    match window.request_animation_frame(next.as_ref().unchecked_ref()) {
                        Ok(id) => pending.set(Some(id)),
                        Err(e) => warn!("Failed to schedule animation frame: {:?}", e),
                    }
                }
            }
        };
        let first = Closure::wrap(Box::new(frame) as Box<dyn FnMut(f64)>);
        let id = window
            .request_animation_frame(first.as_ref().unchecked_ref())
            .map_err(|e| DomError::js("requestAnimationFrame", e))?;
        *callback.borrow_mut() = Some(first);
        pending.set(Some(id));

        Ok(Self {
            window: window.clone(),
            liveness,
            pending,
            callback,
        })
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.liveness.revoke();
        if let Some(id) = self.pending.take() {
            if let Err(e) = self.window.cancel_animation_frame(id) {
                warn!("Failed to cancel animation frame {}: {:?}", id, e);
            }
        }
        self.callback.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guarded_callback_runs_while_alive() {
        let calls = Rc::new(Cell::new(0));
        let liveness = Liveness::new();
        let mut callback = {
            let calls = calls.clone();
            liveness.guard(move || calls.set(calls.get() + 1))
        };

        callback();
        callback();
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn guarded_callback_is_inert_after_revoke() {
        let calls = Rc::new(Cell::new(0));
        let liveness = Liveness::new();
        let mut callback = {
            let calls = calls.clone();
            liveness.guard(move || calls.set(calls.get() + 1))
        };

        callback();
        liveness.revoke();
        callback();
        callback();
        assert_eq!(calls.get(), 1);
        assert!(!liveness.is_alive());
    }

    #[test]
    fn clones_share_the_flag() {
        let liveness = Liveness::new();
        let other = liveness.clone();
        other.revoke();
        assert!(!liveness.is_alive());
    }
}
