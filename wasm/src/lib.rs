use schedwire::{Defaults, TimeOfDay};
use wasm_bindgen::prelude::*;

fn js_error(e: impl std::fmt::Display) -> JsError {
    JsError::new(&e.to_string())
}

fn time_of_day(input: &str) -> Result<TimeOfDay, JsError> {
    input.parse::<TimeOfDay>().map_err(js_error)
}

fn date_time(input: Option<String>) -> Result<Option<jiff::civil::DateTime>, JsError> {
    input
        .map(|s| s.parse::<jiff::civil::DateTime>().map_err(js_error))
        .transpose()
}

/// A decoded schedule configuration, usable from JavaScript.
#[wasm_bindgen]
pub struct ScheduleConfiguration {
    inner: schedwire::ScheduleConfiguration,
}

#[wasm_bindgen]
impl ScheduleConfiguration {
    /// Decode a wire array (`string[]`).
    #[wasm_bindgen]
    pub fn decode(tokens: JsValue) -> Result<ScheduleConfiguration, JsError> {
        let tokens: Vec<String> = serde_wasm_bindgen::from_value(tokens).map_err(js_error)?;
        let inner = schedwire::ScheduleConfiguration::decode_with(&tokens, &Defaults::from_system())
            .map_err(js_error)?;
        Ok(ScheduleConfiguration { inner })
    }

    /// The default daily schedule, in the browser's time zone.
    #[wasm_bindgen(js_name = "createDefault")]
    pub fn create_default() -> ScheduleConfiguration {
        ScheduleConfiguration {
            inner: schedwire::ScheduleConfiguration::new_default(&Defaults::from_system()),
        }
    }

    /// Rebuild from the structure returned by `toJSON`.
    #[wasm_bindgen(js_name = "fromJSON")]
    pub fn from_json(value: JsValue) -> Result<ScheduleConfiguration, JsError> {
        let inner = serde_wasm_bindgen::from_value(value).map_err(js_error)?;
        Ok(ScheduleConfiguration { inner })
    }

    /// Validate a wire array (returns true if it decodes).
    pub fn validate(tokens: JsValue) -> bool {
        serde_wasm_bindgen::from_value::<Vec<String>>(tokens)
            .map(|tokens| schedwire::ScheduleConfiguration::validate(&tokens))
            .unwrap_or(false)
    }

    /// Encode to a wire array (`string[]`).
    pub fn encode(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.inner.encode()).map_err(js_error)
    }

    /// Get the structured JSON representation.
    #[wasm_bindgen(js_name = "toJSON")]
    pub fn to_json(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(js_error)
    }

    /// Pretty-printed JSON, for debugging panels.
    #[wasm_bindgen(js_name = "toJSONString")]
    pub fn to_json_string(&self) -> Result<String, JsError> {
        serde_json::to_string_pretty(&self.inner).map_err(js_error)
    }

    /// One-line human summary.
    pub fn describe(&self) -> String {
        self.inner.to_string()
    }

    pub fn kind(&self) -> String {
        self.inner.kind().as_str().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn overnight(&self) -> bool {
        self.inner.base().overnight()
    }

    #[wasm_bindgen(js_name = "setStartTime")]
    pub fn set_start_time(&mut self, time: &str) -> Result<(), JsError> {
        self.inner.set_start_time(time_of_day(time)?);
        Ok(())
    }

    /// Pass `undefined` to drop the stop time.
    #[wasm_bindgen(js_name = "setStopTime")]
    pub fn set_stop_time(&mut self, time: Option<String>) -> Result<(), JsError> {
        match time {
            Some(time) => self.inner.set_stop_time(time_of_day(&time)?),
            None => self.inner.clear_stop_time(),
        }
        Ok(())
    }

    #[wasm_bindgen(js_name = "setStopTimeDisabled")]
    pub fn set_stop_time_disabled(&mut self, disabled: bool) {
        self.inner.set_stop_time_disabled(disabled);
    }

    /// May swap start and stop; see the library docs.
    #[wasm_bindgen(js_name = "setOvernight")]
    pub fn set_overnight(&mut self, overnight: bool) {
        self.inner.set_overnight(overnight);
    }

    /// Returns false on non-range schedules.
    #[wasm_bindgen(js_name = "setStartDateTime")]
    pub fn set_start_date_time(&mut self, value: Option<String>) -> Result<bool, JsError> {
        Ok(self.inner.set_start_date_time(date_time(value)?))
    }

    /// Returns false on non-range schedules.
    #[wasm_bindgen(js_name = "setStopDateTime")]
    pub fn set_stop_date_time(&mut self, value: Option<String>) -> Result<bool, JsError> {
        Ok(self.inner.set_stop_date_time(date_time(value)?))
    }

    /// Switch to another kind (`"daily"`, `"monthly"`, ...), resetting the
    /// kind-specific fields to their defaults.
    #[wasm_bindgen(js_name = "switchKind")]
    pub fn switch_kind(&mut self, kind: &str) -> Result<(), JsError> {
        let kind = schedwire::ScheduleKind::ALL
            .into_iter()
            .find(|k| k.as_str() == kind)
            .ok_or_else(|| JsError::new(&format!("unknown schedule kind {kind:?}")))?;
        self.inner.switch_kind(kind, &Defaults::from_system());
        Ok(())
    }
}
