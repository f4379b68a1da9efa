use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Event;
use yew::prelude::*;

pub fn is_mobile_width(width: f64, breakpoint: f64) -> bool {
    width <= breakpoint
}

fn current_is_mobile(breakpoint: f64) -> bool {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .map(|w| is_mobile_width(w, breakpoint))
        .unwrap_or(false)
}

/// `true` mientras el ancho de la ventana sea <= `breakpoint`
#[hook]
pub fn use_viewport(breakpoint: f64) -> bool {
    let is_mobile = use_state_eq(|| false);

    {
        let is_mobile = is_mobile.clone();
        use_effect_with(breakpoint.to_bits(), move |_| {
            is_mobile.set(current_is_mobile(breakpoint));

            let window = web_sys::window();
            let listener = Closure::wrap(Box::new(move |_e: Event| {
                is_mobile.set(current_is_mobile(breakpoint));
            }) as Box<dyn FnMut(Event)>);

            if let Some(win) = &window {
                let _ = win.add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref());
            }

            move || {
                if let Some(win) = &window {
                    let _ = win.remove_event_listener_with_callback("resize", listener.as_ref().unchecked_ref());
                }
            }
        });
    }

    *is_mobile
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_inclusive() {
        assert!(is_mobile_width(768.0, 768.0));
        assert!(is_mobile_width(375.0, 768.0));
        assert!(!is_mobile_width(769.0, 768.0));
    }
}
