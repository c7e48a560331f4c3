//! Resolves where the person/ETL backend lives.
//!
//! The host serves the console configuration next to the app. When the app is
//! served some other way (e.g. `trunk serve`) that request fails and the URL baked
//! in at build time through `PERSON_API_URL` is used, or the default.

use gloo_net::http::Request;

use common::config::CONFIG_PATH;
use common::ConsoleConfig;

const BUILD_API_URL: Option<&str> = option_env!("PERSON_API_URL");

pub fn fallback() -> ConsoleConfig {
    BUILD_API_URL
        .and_then(|url| ConsoleConfig::new(url).ok())
        .unwrap_or_default()
}

pub async fn load() -> ConsoleConfig {
    let response = match Request::get(CONFIG_PATH).send().await {
        Ok(response) if response.ok() => response,
        Ok(response) => {
            gloo_console::log!(format!(
                "No console config from host (status {}), using {}",
                response.status(),
                fallback().api_url
            ));
            return fallback();
        }
        Err(err) => {
            gloo_console::log!(format!("Console config unavailable: {}", err));
            return fallback();
        }
    };

    match response.json::<ConsoleConfig>().await {
        Ok(config) => config.validated().unwrap_or_else(|err| {
            gloo_console::error!(format!("Invalid console config: {}", err));
            fallback()
        }),
        Err(err) => {
            gloo_console::error!(format!("Unreadable console config: {}", err));
            fallback()
        }
    }
}
