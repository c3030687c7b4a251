use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum SetupError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("document has no body")]
    NoBody,

    #[error("canvas #{0} not found")]
    CanvasNotFound(String),

    #[error("2D context not available")]
    ContextUnavailable,

    #[error("drawing surface is empty: {width}x{height}")]
    EmptySurface { width: f64, height: f64 },

    #[error("DOM call failed: {0}")]
    Dom(String),
}

impl From<JsValue> for SetupError {
    fn from(value: JsValue) -> Self {
        SetupError::Dom(format!("{value:?}"))
    }
}

impl From<SetupError> for JsValue {
    fn from(err: SetupError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SetupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        let err = SetupError::EmptySurface {
            width: 0.,
            height: 480.,
        };
        assert_eq!(err.to_string(), "drawing surface is empty: 0x480");
        assert_eq!(
            SetupError::CanvasNotFound("ourCanvas".into()).to_string(),
            "canvas #ourCanvas not found"
        );
    }
}
