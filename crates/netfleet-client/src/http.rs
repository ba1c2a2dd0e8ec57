//! HTTP client for the device-management API

use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use netfleet_api::{
    requests::LoginRequest,
    responses::{DeviceAttributesResponse, DeviceListResponse, DeviceSummary, LoginResponse},
};

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};

/// Session-authenticated client for the device-management API
///
/// Owns one session: `login` stores the token issued by the service, every
/// read operation sends it, `logout` releases it. The token never leaves the
/// client. One instance is meant for one caller; it is not a shared handle.
#[derive(Debug)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl ApiClient {
    /// Create a new client from connection settings
    ///
    /// # Errors
    /// Returns an error if the endpoint URL is invalid or the underlying
    /// HTTP client cannot be built.
    ///
    /// # Example
    /// ```no_run
    /// use netfleet_client::{ApiClient, ClientConfig};
    ///
    /// let config = ClientConfig::new("https://appliance.example.net/ServicesAPI/API/V1");
    /// let client = ApiClient::new(&config)?;
    /// # Ok::<(), netfleet_client::ClientError>(())
    /// ```
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = parse_base_url(&config.endpoint)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if config.insecure {
            warn!(endpoint = %base_url, "TLS certificate verification disabled");
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .danger_accept_invalid_certs(config.insecure)
            .build()?;

        Ok(Self {
            client,
            base_url,
            token: None,
        })
    }

    /// Whether a login has succeeded and the session is still held
    #[must_use]
    pub fn has_session(&self) -> bool {
        self.token.is_some()
    }

    /// Build a full URL from a path relative to the API base
    fn url(&self, path: &str) -> Result<Url> {
        self.base_url.join(path).map_err(ClientError::Url)
    }

    /// Token for an authenticated call, or `NotAuthenticated`
    fn session_token(&self) -> Result<&str> {
        self.token.as_deref().ok_or(ClientError::NotAuthenticated)
    }

    /// Perform an authenticated GET and deserialize the response
    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let token = self.session_token()?;
        let url = self.url(path)?;
        let response = self
            .client
            .get(url)
            .header("Token", token)
            .query(query)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Api { status, message });
        }

        Ok(response.json().await?)
    }

    /// Open a session with the remote service
    ///
    /// Sends credentials to `POST /Session` and stores the issued token on
    /// success. On a non-200 response or transport failure no token is stored
    /// and the previous session state, if any, is left untouched.
    ///
    /// # Errors
    /// Returns `AuthenticationFailed` when the service rejects the
    /// credentials, `InvalidResponse` when the 200 body carries no token, or
    /// a transport error.
    ///
    /// # Example
    /// ```no_run
    /// # use netfleet_client::{ApiClient, ClientConfig};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut client = ApiClient::new(&ClientConfig::new("https://appliance.example.net"))?;
    /// client.login("svc-inventory", "secret").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn login(&mut self, username: &str, password: &str) -> Result<()> {
        let url = self.url("Session")?;
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response = self.client.post(url).json(&body).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::AuthenticationFailed { status, message });
        }

        let login: LoginResponse = response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(format!("login response: {e}")))?;

        debug!("session opened");
        self.token = Some(login.token);
        Ok(())
    }

    /// Release the current session
    ///
    /// Sends `DELETE /Session` with the held token. The token is cleared only
    /// on a 200 response; a failed logout keeps local session state so the
    /// caller can retry. Without an active session this returns
    /// `NotAuthenticated` and performs no network call.
    ///
    /// # Errors
    /// Returns `NotAuthenticated` without a session, `Api` on a non-200
    /// response, or a transport error.
    pub async fn logout(&mut self) -> Result<()> {
        let token = self.session_token()?.to_string();
        let url = self.url("Session")?;

        let response = self.client.delete(url).header("token", &token).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Api { status, message });
        }

        debug!("session closed");
        self.token = None;
        Ok(())
    }

    /// List all managed devices
    ///
    /// Returns the device list exactly as the service provides it: one call,
    /// service order, no sorting or dedup. Requires an active session.
    ///
    /// # Errors
    /// Returns `NotAuthenticated` without a session, `Api` on a non-200
    /// response, or a transport/parse error.
    ///
    /// # Example
    /// ```no_run
    /// # use netfleet_client::{ApiClient, ClientConfig};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let mut client = ApiClient::new(&ClientConfig::new("https://appliance.example.net"))?;
    /// client.login("svc-inventory", "secret").await?;
    /// for device in client.list_devices().await? {
    ///     println!("{} ({})", device.hostname, device.mgmt_ip);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_devices(&self) -> Result<Vec<DeviceSummary>> {
        let list: DeviceListResponse = self.get("CMDB/Devices", &[]).await?;
        debug!(count = list.devices.len(), "listed devices");
        Ok(list.devices)
    }

    /// Fetch the attribute set of one device by hostname
    ///
    /// Optionally narrowed to a single named attribute. The result is
    /// all-or-nothing: a failed call or unparseable body yields an error,
    /// never a partial attribute map. Requires an active session.
    ///
    /// # Errors
    /// Returns `NotAuthenticated` without a session, `Api` on a non-200
    /// response, or a transport/parse error.
    pub async fn get_device_attributes(
        &self,
        hostname: &str,
        attribute_name: Option<&str>,
    ) -> Result<DeviceAttributesResponse> {
        let mut query = vec![("hostname", hostname)];
        if let Some(name) = attribute_name {
            query.push(("attributeName", name));
        }
        self.get("CMDB/Devices/Attributes", &query).await
    }
}

/// Parse the configured endpoint, tolerating a missing trailing slash
///
/// `Url::join` would otherwise drop the last path segment of the base,
/// turning `.../API/V1` + `Session` into `.../API/Session`.
fn parse_base_url(endpoint: &str) -> Result<Url> {
    if endpoint.ends_with('/') {
        Ok(Url::parse(endpoint)?)
    } else {
        Ok(Url::parse(&format!("{endpoint}/"))?)
    }
}
