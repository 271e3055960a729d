//! `matchMedia`-backed OS color-scheme source.

use platform_host::{ColorSchemeListener, ColorSchemeSource, ColorSchemeSubscription};

#[derive(Debug, Clone, Copy, Default)]
/// Browser color-scheme source backed by the `(prefers-color-scheme: dark)` media query.
pub struct WebColorSchemeSource;

#[cfg(target_arch = "wasm32")]
fn dark_scheme_query() -> Option<web_sys::MediaQueryList> {
    web_sys::window()?
        .match_media(platform_host::DARK_SCHEME_QUERY)
        .ok()
        .flatten()
}

impl ColorSchemeSource for WebColorSchemeSource {
    fn prefers_dark(&self) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            dark_scheme_query().is_some_and(|query| query.matches())
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            false
        }
    }

    fn subscribe(&self, listener: ColorSchemeListener) -> ColorSchemeSubscription {
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::{closure::Closure, JsCast};

            let Some(query) = dark_scheme_query() else {
                return ColorSchemeSubscription::detached();
            };
            let callback = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(
                move |event: web_sys::MediaQueryListEvent| listener(event.matches()),
            );
            if let Err(err) = query
                .add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
            {
                web_sys::console::warn_1(&err);
                return ColorSchemeSubscription::detached();
            }
            ColorSchemeSubscription::new(move || {
                let _ = query.remove_event_listener_with_callback(
                    "change",
                    callback.as_ref().unchecked_ref(),
                );
                drop(callback);
            })
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = listener;
            ColorSchemeSubscription::detached()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn web_color_scheme_source_non_wasm_parity() {
        let source = WebColorSchemeSource;
        assert!(!source.prefers_dark());
        source.subscribe(Rc::new(|_| {})).cancel();
    }
}
