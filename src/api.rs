//! Posts API
//!
//! Frontend binding to the paginated posts endpoint.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::error::FetchError;
use crate::models::Post;

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Where pages come from and how big they are
#[derive(Debug, Clone, PartialEq)]
pub struct FeedConfig {
    pub base_url: String,
    pub page_size: u32,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl FeedConfig {
    pub fn page_url(&self, page: u32) -> String {
        format!(
            "{}/posts?_page={}&_limit={}",
            self.base_url.trim_end_matches('/'),
            page,
            self.page_size
        )
    }
}

fn js_message(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// GET one page of posts
pub async fn fetch_page(config: &FeedConfig, page: u32) -> Result<Vec<Post>, FetchError> {
    let window = web_sys::window().ok_or_else(|| FetchError::Network("no window".to_string()))?;

    let init = RequestInit::new();
    init.set_method("GET");
    let request = Request::new_with_str_and_init(&config.page_url(page), &init)
        .map_err(|e| FetchError::Network(js_message(e)))?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| FetchError::Network(js_message(e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|e| FetchError::Network(js_message(e)))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let json = response.json().map_err(|e| FetchError::Decode(js_message(e)))?;
    let json = JsFuture::from(json)
        .await
        .map_err(|e| FetchError::Decode(js_message(e)))?;
    serde_wasm_bindgen::from_value(json).map_err(|e| FetchError::Decode(e.to_string()))
}
