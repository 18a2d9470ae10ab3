use crate::config::{get_required_env_var, API_KEY_VAR};
use crate::context::Context;
use crate::error::{GmpError, Result};
use crate::static_map::{render_url, StaticMap};
use crate::types::{PlaceResult, PlaceStatus};
use crate::url_builder::{build_url, redact_key};

use reqwest::StatusCode;
use tracing::{debug, warn};

const BASE_URL: &str = "https://maps.googleapis.com/maps/api";

const STATIC_MAP_PATH: &str = "/staticmap";
const FIND_PLACE_PATH: &str = "/place/findplacefromtext/json";

/// Fields requested by a place search when the caller passes none.
///
/// Other accepted values include `formatted_phone_number`,
/// `international_phone_number`, `opening_hours`, `website`,
/// `business_status`, `icon`, `icon_mask_base_uri`, `icon_background_color`,
/// `photo`, `place_id`, `plus_code`, `type`, `url`, `utc_offset`, `vicinity`,
/// `price_level`, `rating` and `user_ratings_total`.
pub const FIND_PLACE_DEFAULT_FIELDS: &[&str] = &["name", "formatted_address", "geometry"];

/// What kind of text a place search input holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputType {
    PhoneNumber,
    TextQuery,
}

impl InputType {
    fn as_api_str(self) -> &'static str {
        match self {
            InputType::PhoneNumber => "phonenumber",
            InputType::TextQuery => "textquery",
        }
    }
}

/// Client for the Google Maps Platform Static Maps and Places APIs.
///
/// Holds the API key and a pooled `reqwest::Client`; nothing in it changes
/// after construction, so one handler can serve concurrent calls.
#[derive(Debug, Clone)]
pub struct MapsHandler {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl MapsHandler {
    /// Creates a new `MapsHandler` instance.
    ///
    /// # Arguments
    /// * `api_key` - The Google Maps Platform API key.
    #[must_use]
    pub fn new(api_key: &str) -> Self {
        Self::with_base_url(api_key, BASE_URL)
    }

    /// Creates a `MapsHandler` reading the key from `GOOGLE_MAPS_API_KEY`.
    ///
    /// # Errors
    /// Returns `GmpError::MissingEnvVar` if the variable is not set.
    pub fn from_env() -> Result<Self> {
        let api_key = get_required_env_var(API_KEY_VAR)?;
        Ok(Self::new(&api_key))
    }

    /// Creates a `MapsHandler` talking to another API root, e.g. a local mock.
    #[must_use]
    pub fn with_base_url(api_key: &str, base_url: &str) -> Self {
        MapsHandler {
            client: reqwest::Client::new(),
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Build the Static Maps URL for `map`, without any network I/O.
    #[must_use]
    pub fn get_static_map_url(&self, map: &StaticMap) -> String {
        render_url(&self.endpoint(STATIC_MAP_PATH), map, &self.api_key)
    }

    /// Fetch a static map image.
    ///
    /// # Arguments
    /// * `ctx` - Cancellation and deadline for the call.
    /// * `map` - The map to render.
    ///
    /// # Errors
    /// * `GmpError::Http` - If the request could not be sent or read.
    /// * `GmpError::Cancelled` / `GmpError::Timeout` - If `ctx` ends first.
    /// * `GmpError::Status` - If the service answers with anything but 200.
    ///
    /// # Returns
    /// * `Result<Vec<u8>>` - The raw image bytes, unvalidated.
    pub async fn get_static_map_image(&self, ctx: &Context, map: &StaticMap) -> Result<Vec<u8>> {
        let url = self.get_static_map_url(map);

        ctx.run(async {
            let response = self.send(&url).await?;

            if response.status() != StatusCode::OK {
                let status = response.status().as_u16();
                warn!(status, url = %redact_key(&url), "static map request rejected");
                return Err(GmpError::Status { status, url: url.clone() });
            }

            let bytes = response.bytes().await?;
            debug!(len = bytes.len(), "static map image received");
            Ok(bytes.to_vec())
        })
        .await
    }

    /// Find a place from a phone number in international format.
    ///
    /// # Errors
    /// See [`MapsHandler::find_place_by_text`].
    pub async fn find_place_by_phone_number(
        &self,
        ctx: &Context,
        phone_number: &str,
        fields: &[&str],
    ) -> Result<PlaceResult> {
        self.find_place(ctx, InputType::PhoneNumber, phone_number, fields)
            .await
    }

    /// Find a place from free text (name, address, ...).
    ///
    /// # Arguments
    /// * `ctx` - Cancellation and deadline for the call.
    /// * `text` - The search text.
    /// * `fields` - Response fields to request. Empty means
    ///   [`FIND_PLACE_DEFAULT_FIELDS`].
    ///
    /// # Errors
    /// * `GmpError::Http` - If the request could not be sent or read.
    /// * `GmpError::Cancelled` / `GmpError::Timeout` - If `ctx` ends first.
    /// * `GmpError::Parse` - If the body is not a find-place response.
    /// * `GmpError::InvalidRequest` - If the service reports `INVALID_REQUEST`.
    ///
    /// Other service statuses, `ZERO_RESULTS` included, come back in
    /// `PlaceResult::status`.
    pub async fn find_place_by_text(
        &self,
        ctx: &Context,
        text: &str,
        fields: &[&str],
    ) -> Result<PlaceResult> {
        self.find_place(ctx, InputType::TextQuery, text, fields).await
    }

    async fn find_place(
        &self,
        ctx: &Context,
        input_type: InputType,
        input: &str,
        fields: &[&str],
    ) -> Result<PlaceResult> {
        let fields = if fields.is_empty() {
            FIND_PLACE_DEFAULT_FIELDS
        } else {
            fields
        };

        let params = vec![
            ("fields".to_string(), fields.join(",")),
            ("input".to_string(), input.to_string()),
            ("inputtype".to_string(), input_type.as_api_str().to_string()),
        ];
        let url = build_url(&self.endpoint(FIND_PLACE_PATH), params, &self.api_key);

        let body: Vec<u8> = ctx
            .run(async {
                let response = self.send(&url).await?;
                Ok(response.bytes().await?.to_vec())
            })
            .await?;

        decode_place_result(&body)
    }

    /// Issue a GET. Non-success statuses are returned, not turned into errors.
    async fn send(&self, url: &str) -> Result<reqwest::Response> {
        debug!(url = %redact_key(url), "sending request");
        let response = self.client.get(url).send().await?;
        debug!(status = response.status().as_u16(), "response received");
        Ok(response)
    }
}

/// Decode a find-place body, turning `INVALID_REQUEST` into an error.
fn decode_place_result(body: &[u8]) -> Result<PlaceResult> {
    let result: PlaceResult = serde_json::from_slice(body)?;

    if result.status == PlaceStatus::InvalidRequest {
        let message = result.error_message.unwrap_or_default();
        warn!(%message, "place search rejected as invalid");
        return Err(GmpError::InvalidRequest(message));
    }

    debug!(
        status = result.status.as_api_str(),
        candidates = result.candidates.len(),
        "place search decoded"
    );
    Ok(result)
}
