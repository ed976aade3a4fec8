use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::JsonError;
use crate::text::StringWrap;
use crate::util::result::ResultExtension;
use crate::wrap::Wrap;

impl<T: Serialize> Wrap<T> {
    /// Serializes the held value to compact JSON. An absent value serializes as `null`.
    ///
    /// # Errors
    /// Returns a [`JsonError`] if the value refuses to serialize, for example a map with
    /// non-string keys.
    pub fn json(&self) -> Result<StringWrap, JsonError> {
        let json = serde_json::to_string(&self.value)
            .map_err(JsonError::from)
            .traced("json", std::any::type_name::<T>())?;
        Ok(Wrap::from_option(Some(json)))
    }

    /// Serializes the held value to indented JSON.
    ///
    /// # Errors
    /// See [`Wrap::json`].
    pub fn json_pretty(&self) -> Result<StringWrap, JsonError> {
        let json = serde_json::to_string_pretty(&self.value)
            .map_err(JsonError::from)
            .traced("json_pretty", std::any::type_name::<T>())?;
        Ok(Wrap::from_option(Some(json)))
    }

    /// Replaces the held value with one parsed from `json`. The literal `null` makes the wrapper
    /// absent.
    ///
    /// # Errors
    /// Returns a [`JsonError`] if `json` doesn't describe a `T`. The held value is left untouched
    /// in that case.
    pub fn from_json(&mut self, json: &str) -> Result<&mut Self, JsonError>
    where
        T: DeserializeOwned,
    {
        let parsed: Option<T> = serde_json::from_str(json)
            .map_err(JsonError::from)
            .traced("from_json", std::any::type_name::<T>())?;
        self.value = parsed;
        Ok(self)
    }

    /// Produces an independent copy of the wrapper by sending the value through JSON.
    ///
    /// # Errors
    /// Returns a [`JsonError`] if either direction of the round trip fails.
    pub fn deep_copy(&self) -> Result<Wrap<T>, JsonError>
    where
        T: DeserializeOwned,
    {
        if self.value.is_none() {
            return Ok(Wrap::none());
        }

        let json = self.json()?.value.unwrap_or_default();
        debug!(bytes = json.len(), ty = std::any::type_name::<T>(), "deep copy through json");
        let mut copy = Wrap::none();
        copy.from_json(&json)?;
        Ok(copy)
    }
}
