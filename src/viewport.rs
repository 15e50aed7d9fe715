use log::{debug, error};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;
use yew::prelude::*;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewport {
    Narrow,
    Wide,
}

impl Viewport {
    pub fn classify(width: f64, breakpoint: f64) -> Self {
        if width < breakpoint {
            Viewport::Narrow
        } else {
            Viewport::Wide
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavStyle {
    Transparent,
    Translucent,
}

impl NavStyle {
    pub fn for_offset(offset: f64, threshold: f64) -> Self {
        if offset > threshold {
            NavStyle::Translucent
        } else {
            NavStyle::Transparent
        }
    }

    pub fn class(self) -> Option<&'static str> {
        match self {
            NavStyle::Transparent => None,
            NavStyle::Translucent => Some("scrolled"),
        }
    }
}

/// A window event listener that is removed when the guard is dropped.
pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn new(event: &'static str, handler: impl FnMut() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);

        if let Err(err) = window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            error!("Failed to register {} listener: {:?}", event, err);
            return None;
        }
        debug!("Registered {} listener", event);

        Some(Self { window, event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            error!("Failed to remove {} listener: {:?}", self.event, err);
        } else {
            debug!("Removed {} listener", self.event);
        }
    }
}

fn current_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .unwrap_or(f64::INFINITY)
}

fn current_offset() -> f64 {
    web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

fn current_viewport() -> Viewport {
    Viewport::classify(current_width(), config::get_narrow_breakpoint())
}

fn current_nav_style() -> NavStyle {
    NavStyle::for_offset(current_offset(), config::get_scroll_threshold())
}

/// Tracks the viewport class, re-evaluated on every resize.
#[hook]
pub fn use_viewport() -> Viewport {
    let viewport = use_state_eq(current_viewport);

    {
        let viewport = viewport.clone();
        use_effect_with_deps(
            move |_| {
                let listener = WindowListener::new("resize", move || viewport.set(current_viewport()));
                move || drop(listener)
            },
            (),
        );
    }

    *viewport
}

/// Tracks the navbar style from the window's vertical scroll offset.
#[hook]
pub fn use_nav_style() -> NavStyle {
    let style = use_state_eq(current_nav_style);

    {
        let style = style.clone();
        use_effect_with_deps(
            move |_| {
                let listener = WindowListener::new("scroll", move || style.set(current_nav_style()));
                move || drop(listener)
            },
            (),
        );
    }

    *style
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_style_follows_offset_both_ways() {
        let threshold = config::get_scroll_threshold();
        assert_eq!(NavStyle::for_offset(0.0, threshold), NavStyle::Transparent);
        assert_eq!(NavStyle::for_offset(21.0, threshold), NavStyle::Translucent);
        assert_eq!(NavStyle::for_offset(0.0, threshold), NavStyle::Transparent);
    }

    #[test]
    fn threshold_itself_is_not_scrolled() {
        assert_eq!(NavStyle::for_offset(20.0, 20.0), NavStyle::Transparent);
        assert_eq!(NavStyle::Transparent.class(), None);
        assert_eq!(NavStyle::Translucent.class(), Some("scrolled"));
    }

    #[test]
    fn viewport_splits_at_breakpoint() {
        let breakpoint = config::get_narrow_breakpoint();
        assert_eq!(Viewport::classify(375.0, breakpoint), Viewport::Narrow);
        assert_eq!(Viewport::classify(767.9, breakpoint), Viewport::Narrow);
        assert_eq!(Viewport::classify(768.0, breakpoint), Viewport::Wide);
        assert_eq!(Viewport::classify(1440.0, breakpoint), Viewport::Wide);
    }
}
