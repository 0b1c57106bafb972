//! Transport over the desktop command boundary
//!
//! All backend access goes through [`Invoke`]. The browser build talks to the
//! native host through [`TauriInvoke`]; tests script their own implementation.

use async_trait::async_trait;
use serde_json::{Map, Value};

use super::error::{CommandError, TransportError};
use contracts::{FieldPath, ValidationError};

/// One round trip to a named backend command
#[async_trait(?Send)]
pub trait Invoke {
    async fn invoke(&self, command: &str, args: Value) -> Result<Value, TransportError>;
}

/// Empty argument object for commands that take none
pub fn no_args() -> Value {
    Value::Object(Map::new())
}

/// Invoke `command`, logging the outcome but never the payload
pub async fn call<I: Invoke + ?Sized>(
    backend: &I,
    command: &str,
    args: Value,
) -> Result<Value, CommandError> {
    log::debug!("invoke `{}`", command);
    match backend.invoke(command, args).await {
        Ok(value) => Ok(value),
        Err(e) => {
            log::error!("{}", e);
            Err(e.into())
        }
    }
}

/// Commands without a result must answer with `null`
pub fn expect_null(value: &Value) -> Result<(), ValidationError> {
    if value.is_null() {
        Ok(())
    } else {
        Err(ValidationError::wrong_type(&FieldPath::root(), "null", value))
    }
}

/// Record a contract violation in a backend answer and pass it on
pub fn rejected(command: &str, error: ValidationError) -> CommandError {
    log::error!("`{}` answered outside the contract: {}", command, error);
    error.into()
}

#[cfg(target_arch = "wasm32")]
mod tauri {
    use async_trait::async_trait;
    use serde::Serialize;
    use serde_json::Value;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::JsFuture;

    use super::Invoke;
    use crate::shared::error::TransportError;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], js_name = invoke, catch)]
        fn tauri_invoke(cmd: &str, args: JsValue) -> Result<js_sys::Promise, JsValue>;
    }

    /// `window.__TAURI__.core.invoke` of the hosting webview
    #[derive(Debug, Clone, Copy, Default)]
    pub struct TauriInvoke;

    fn describe(value: &JsValue) -> String {
        if let Some(s) = value.as_string() {
            return s;
        }
        js_sys::JSON::stringify(value)
            .ok()
            .and_then(|s| s.as_string())
            .unwrap_or_else(|| "unknown error".to_string())
    }

    #[async_trait(?Send)]
    impl Invoke for TauriInvoke {
        async fn invoke(&self, command: &str, args: Value) -> Result<Value, TransportError> {
            let serializer = serde_wasm_bindgen::Serializer::json_compatible();
            let js_args = args
                .serialize(&serializer)
                .map_err(|e| TransportError::new(command, e.to_string()))?;

            let promise = tauri_invoke(command, js_args)
                .map_err(|e| TransportError::new(command, describe(&e)))?;
            let result = JsFuture::from(promise)
                .await
                .map_err(|e| TransportError::new(command, describe(&e)))?;

            serde_wasm_bindgen::from_value(result)
                .map_err(|e| TransportError::new(command, e.to_string()))
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use tauri::TauriInvoke;
