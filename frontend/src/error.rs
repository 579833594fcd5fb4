use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures talking to the browser. None of these are fatal for the page;
/// callers log them and keep whatever they rendered last.
#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window available")]
    NoWindow,
    #[error("localStorage is not available")]
    StorageUnavailable,
    #[error("element `{0}` is not mounted")]
    Unmounted(&'static str),
    #[error("browser call `{call}` failed: {detail}")]
    Js { call: &'static str, detail: String },
}

impl DomError {
    pub fn js(call: &'static str, err: JsValue) -> Self {
        let detail = err.as_string().unwrap_or_else(|| format!("{:?}", err));
        DomError::Js { call, detail }
    }
}

pub fn window() -> Result<web_sys::Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_what_is_missing() {
        assert_eq!(
            DomError::StorageUnavailable.to_string(),
            "localStorage is not available"
        );
        assert_eq!(
            DomError::Unmounted("pinned section").to_string(),
            "element `pinned section` is not mounted"
        );
    }
}
