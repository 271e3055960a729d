//! Document-backed theme surface.

use platform_host::ThemeSurface;

#[derive(Debug, Clone, Copy, Default)]
/// Browser theme surface writing to `document.documentElement` and `document.body`.
pub struct WebThemeSurface;

#[cfg(target_arch = "wasm32")]
fn document() -> Result<web_sys::Document, String> {
    crate::interop::window()?
        .document()
        .ok_or_else(|| "document unavailable".to_string())
}

impl ThemeSurface for WebThemeSurface {
    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            document()?
                .document_element()
                .ok_or_else(|| "document root element unavailable".to_string())?
                .set_attribute(name, value)
                .map_err(crate::interop::js_error_to_string)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (name, value);
            Ok(())
        }
    }

    fn replace_body_class(&self, remove: &str, add: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let classes = document()?
                .body()
                .ok_or_else(|| "document body unavailable".to_string())?
                .class_list();
            classes
                .remove_1(remove)
                .map_err(crate::interop::js_error_to_string)?;
            classes
                .add_1(add)
                .map_err(crate::interop::js_error_to_string)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (remove, add);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn web_theme_surface_non_wasm_parity() {
        let surface = WebThemeSurface;
        surface.set_root_attribute("data-theme", "dark").expect("attr");
        surface.replace_body_class("light", "dark").expect("class");
    }
}
