/// Host runtime bridge access and the environment health probe
use js_sys::Reflect;
use wasm_bindgen::JsValue;

/// Handle onto the host's extension-runtime surface.
///
/// The full runtime API (messaging, tabs, storage) is consumed elsewhere;
/// for health purposes only the extension identifier matters.
pub trait RuntimeBridge {
    /// The identifier the host assigned to this extension, if the runtime
    /// surface is reachable at all.
    fn runtime_id(&self) -> Option<String>;
}

/// Check whether the runtime bridge is usable.
///
/// True only when the bridge yields a non-empty identifier. A missing
/// bridge and a missing or empty identifier both read as unhealthy.
pub fn probe<B: RuntimeBridge>(bridge: &B) -> bool {
    bridge.runtime_id().is_some_and(|id| !id.is_empty())
}

/// Bridge backed by the `browser.*` global that the webextension-polyfill
/// installs in every extension context.
pub struct WebExtensionBridge;

impl RuntimeBridge for WebExtensionBridge {
    fn runtime_id(&self) -> Option<String> {
        // Reflect keeps absent intermediates as None instead of a thrown
        // JS error.
        let browser = Reflect::get(&js_sys::global(), &JsValue::from_str("browser")).ok()?;
        let runtime = Reflect::get(&browser, &JsValue::from_str("runtime")).ok()?;
        Reflect::get(&runtime, &JsValue::from_str("id")).ok()?.as_string()
    }
}
