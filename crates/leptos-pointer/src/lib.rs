//! Leptos Pointer Utilities
//!
//! Window-level pointer tracking for Leptos using mouse events.
//! Feeds decorative effects that follow the cursor (e.g. a radial glow).

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Glow circle radius in pixels
const GLOW_RADIUS_PX: u32 = 600;

/// Pointer state signals
#[derive(Clone, Copy)]
pub struct PointerSignals {
    pub x_read: ReadSignal<i32>,
    pub x_write: WriteSignal<i32>,
    pub y_read: ReadSignal<i32>,
    pub y_write: WriteSignal<i32>,
}

pub fn create_pointer_signals() -> PointerSignals {
    let (x_read, x_write) = signal(0i32);
    let (y_read, y_write) = signal(0i32);
    PointerSignals {
        x_read,
        x_write,
        y_read,
        y_write,
    }
}

/// Bind a global mousemove handler that mirrors the cursor position
/// into the signals. The listener lives for the page lifetime.
pub fn track_window_pointer(pointer: PointerSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        pointer.x_write.set(ev.client_x());
        pointer.y_write.set(ev.client_y());
    });

    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
    }
    on_mousemove.forget();
}

/// Inline style for the cursor-following radial glow layer
pub fn glow_style(x: i32, y: i32) -> String {
    format!(
        "background: radial-gradient({GLOW_RADIUS_PX}px circle at {x}px {y}px, rgba(59, 130, 246, 0.1), transparent 40%);"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glow_style_centers_on_cursor() {
        let style = glow_style(120, 340);
        assert!(style.contains("at 120px 340px"));
        assert!(style.starts_with("background: radial-gradient(600px circle"));
    }

    #[test]
    fn test_glow_style_accepts_negative_coords() {
        // Cursor can report negative coords when leaving the viewport mid-move
        let style = glow_style(-4, -9);
        assert!(style.contains("at -4px -9px"));
    }
}
