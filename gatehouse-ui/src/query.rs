//! One-shot consumption of the page's incoming query parameters
//!
//! The authorization handoff arrives as `?client_id=...&redirect_uri=...` on
//! the login URL. The pair is read once per page load and the query string is
//! then stripped from the visible URL; it is never re-read afterwards.

use leptos::logging;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryContext {
    pub client_id: Option<u32>,
    pub redirect_uri: Option<String>,
}

impl QueryContext {
    /// Parse a raw query string, with or without the leading `?`.
    ///
    /// A `client_id` that is not a positive integer counts as absent, as does
    /// an empty `redirect_uri`.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut context = Self::default();

        for pair in query.split('&') {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = value.replace('+', " ");
            let value = match urlencoding::decode(&value) {
                Ok(decoded) => decoded.into_owned(),
                Err(_) => continue,
            };

            match key {
                "client_id" => {
                    context.client_id = value.parse::<u32>().ok().filter(|id| *id > 0);
                }
                "redirect_uri" => {
                    if !value.is_empty() {
                        context.redirect_uri = Some(value);
                    }
                }
                _ => {}
            }
        }

        context
    }

    pub fn is_complete(&self) -> bool {
        self.client_id.is_some() && self.redirect_uri.is_some()
    }

    /// Read the parameters from the current location, then clear the query
    /// string from the visible URL so the credentials handoff context cannot
    /// be consumed twice.
    pub fn consume() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let location = window.location();
        let search = location.search().unwrap_or_default();
        let context = Self::parse(&search);

        if !search.is_empty() {
            let path = location.pathname().unwrap_or_else(|_| "/".to_string());
            match window.history() {
                Ok(history) => {
                    if let Err(err) = history.replace_state_with_url(&JsValue::NULL, "", Some(&path))
                    {
                        logging::warn!("failed to clear the query string: {:?}", err);
                    }
                }
                Err(err) => logging::warn!("history unavailable: {:?}", err),
            }
        }

        context
    }
}
