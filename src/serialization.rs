//! Compact, URL-safe encoding of themes and palettes.
//!
//! State travels as compact JSON wrapped in unpadded base64url, so it can be
//! dropped into a query string without further escaping.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::debug;
use url::form_urlencoded;

use crate::{Error, Result, palette::ColorPalette, theme::UiTheme};

pub fn encode<T: Serialize>(value: &T) -> Result<String> {
    let json = serde_json::to_vec(value)?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

/// Decodes base64url state. Raw JSON objects are accepted as well.
pub fn decode<T: DeserializeOwned>(payload: &str) -> Result<T> {
    let payload = payload.trim();

    if payload.starts_with('{') {
        return Ok(serde_json::from_str(payload)?);
    }

    let json = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
    Ok(serde_json::from_slice(&json)?)
}

/// Everything needed to pick a theme back up where it was left.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardState {
    pub theme: Option<UiTheme>,
    pub palette: Option<ColorPalette>,
}

impl WizardState {
    /// `theme=...&palette=...`, leaving out whatever is not set.
    pub fn to_query(&self) -> Result<String> {
        let mut query = form_urlencoded::Serializer::new(String::new());

        if let Some(theme) = &self.theme {
            query.append_pair("theme", &encode(theme)?);
        }
        if let Some(palette) = &self.palette {
            query.append_pair("palette", &encode(palette)?);
        }

        Ok(query.finish())
    }

    /// Parses a query string or a whole URL. `data` is read as `theme`.
    pub fn from_query(query: &str) -> Result<Self> {
        let query = query.trim();
        let query = query.split_once('?').map_or(query, |(_, query)| query);

        let mut state = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "theme" | "data" => state.theme = Some(decode(&value)?),
                "palette" => state.palette = Some(decode(&value)?),
                other => debug!(parameter = other, "ignoring unknown query parameter"),
            }
        }

        Ok(state)
    }

    pub fn into_theme(self) -> Result<UiTheme> {
        self.theme.ok_or(Error::MissingState("theme"))
    }
}
