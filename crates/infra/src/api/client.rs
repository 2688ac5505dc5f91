//! HTTP client for the pet health backend
//!
//! Thin typed wrapper over reqwest for the backend's REST endpoints.
//! Requests are user-initiated; failures map to [`ApiError`] and are
//! surfaced, never retried automatically.

use std::sync::Arc;
use std::time::Duration;

use pawtrack_domain::constants::{
    DEFAULT_PAGE_SIZE, DEFAULT_REQUEST_TIMEOUT_SECS, VACCINATION_PAGE_SIZE,
};
use pawtrack_domain::{HealthRecord, Page, Pet, PetId, Vaccination};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, instrument};

use super::auth::AccessTokenProvider;
use super::dto::{
    GoogleAuthResponse, HealthRecordDto, HealthRecordPayload, PetDto, PetPayload, RefreshResponse,
    RegisterRequest, TokenPairResponse, VaccinationPayload, ValidationErrors,
};
use super::errors::ApiError;

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL for the backend (e.g., "http://localhost:8001")
    pub base_url: String,
    /// Timeout for API requests
    pub timeout: Duration,
    /// Default page size for list endpoints
    pub page_size: u32,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8001".to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Typed API client
pub struct ApiClient {
    http: reqwest::Client,
    auth: Arc<dyn AccessTokenProvider>,
    config: ApiClientConfig,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if the underlying HTTP client cannot be
    /// built.
    pub fn new(
        config: ApiClientConfig,
        auth: Arc<dyn AccessTokenProvider>,
    ) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { http, auth, config })
    }

    fn page_size(&self, page_size: Option<u32>) -> u32 {
        page_size.unwrap_or(self.config.page_size)
    }

    /// Execute a request and deserialize the response.
    ///
    /// 204/205 responses deserialize from JSON null, so `()` works for
    /// delete endpoints.
    async fn execute<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        authenticated: bool,
    ) -> Result<R, ApiError> {
        let url = format!("{}{}", self.config.base_url, path);
        debug!(method = %method, url = %url, "API request");

        let mut request = self.http.request(method.clone(), &url);
        if authenticated {
            let token = self.auth.access_token().await?;
            request = request.header("Authorization", format!("Bearer {token}"));
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::map_status_error(status, &url, body));
        }

        let result: R = if status == StatusCode::NO_CONTENT || status == StatusCode::RESET_CONTENT {
            serde_json::from_value(serde_json::Value::Null).map_err(|_| {
                ApiError::Client(format!(
                    "No content response ({}) for a type that expects a body",
                    status.as_u16()
                ))
            })?
        } else {
            response
                .json()
                .await
                .map_err(|e| ApiError::Client(format!("Failed to parse response: {e}")))?
        };

        info!(method = %method, path = %path, "API request successful");
        Ok(result)
    }

    async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.execute::<(), R>(Method::GET, path, None, true).await
    }

    async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        self.execute(Method::POST, path, Some(body), true).await
    }

    async fn patch<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        self.execute(Method::PATCH, path, Some(body), true).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute::<(), ()>(Method::DELETE, path, None, true).await
    }

    async fn post_public<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        self.execute(Method::POST, path, Some(body), false).await
    }

    // --- Pets ---

    /// Fetch one page of the caller's pets, nested health records included.
    #[instrument(skip(self))]
    pub async fn list_pets(&self, page: u32, page_size: Option<u32>) -> Result<Page<Pet>, ApiError> {
        let page_size = self.page_size(page_size);
        let page: Page<PetDto> =
            self.get(&format!("/api/pets/?page={page}&page_size={page_size}")).await?;
        Ok(Page {
            count: page.count,
            results: page.results.into_iter().map(PetDto::into_pet).collect(),
        })
    }

    #[instrument(skip(self))]
    pub async fn get_pet(&self, id: PetId) -> Result<Pet, ApiError> {
        let pet: PetDto = self.get(&format!("/api/pets/{id}/")).await?;
        Ok(pet.into_pet())
    }

    #[instrument(skip(self, payload))]
    pub async fn create_pet(&self, payload: &PetPayload) -> Result<Pet, ApiError> {
        let pet: PetDto = self.post("/api/pets/", payload).await?;
        Ok(pet.into_pet())
    }

    #[instrument(skip(self, payload))]
    pub async fn update_pet(&self, id: PetId, payload: &PetPayload) -> Result<Pet, ApiError> {
        let pet: PetDto = self.patch(&format!("/api/pets/{id}/"), payload).await?;
        Ok(pet.into_pet())
    }

    #[instrument(skip(self))]
    pub async fn delete_pet(&self, id: PetId) -> Result<(), ApiError> {
        self.delete(&format!("/api/pets/{id}/")).await
    }

    /// Download a pet's avatar image bytes.
    #[instrument(skip(self))]
    pub async fn get_avatar(&self, id: PetId) -> Result<Vec<u8>, ApiError> {
        let url = format!("{}/api/pets/{id}/avatar/", self.config.base_url);
        let token = self.auth.access_token().await?;

        let response = self
            .http
            .get(&url)
            .header("Authorization", format!("Bearer {token}"))
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::map_status_error(status, &url, body));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to read avatar body: {e}")))?;
        Ok(bytes.to_vec())
    }

    // --- Health records ---

    /// Fetch one page of a pet's health records. Malformed records are
    /// dropped, not errors, so a page may come back shorter than `count`
    /// implies.
    #[instrument(skip(self))]
    pub async fn list_health_records(
        &self,
        pet: PetId,
        page: u32,
        page_size: Option<u32>,
    ) -> Result<Page<HealthRecord>, ApiError> {
        let page_size = self.page_size(page_size);
        let records: Page<HealthRecordDto> = self
            .get(&format!("/api/health-status/?pet={pet}&page={page}&page_size={page_size}"))
            .await?;
        Ok(Page {
            count: records.count,
            results: records.results.into_iter().filter_map(HealthRecordDto::into_record).collect(),
        })
    }

    #[instrument(skip(self, payload))]
    pub async fn create_health_record(
        &self,
        payload: &HealthRecordPayload,
    ) -> Result<(), ApiError> {
        let _: serde_json::Value = self.post("/api/health-status/", payload).await?;
        Ok(())
    }

    #[instrument(skip(self, payload))]
    pub async fn update_health_record(
        &self,
        id: i64,
        payload: &HealthRecordPayload,
    ) -> Result<(), ApiError> {
        let _: serde_json::Value = self.patch(&format!("/api/health-status/{id}/"), payload).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete_health_record(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/api/health-status/{id}/")).await
    }

    // --- Vaccinations ---

    /// Fetch one page of a pet's vaccination schedule. Vaccination lists
    /// default to a smaller page than the other endpoints.
    #[instrument(skip(self))]
    pub async fn list_vaccinations(
        &self,
        pet: PetId,
        page: u32,
        page_size: Option<u32>,
    ) -> Result<Page<Vaccination>, ApiError> {
        let page_size = page_size.unwrap_or(VACCINATION_PAGE_SIZE);
        self.get(&format!("/api/vaccination/?pet={pet}&page={page}&page_size={page_size}")).await
    }

    #[instrument(skip(self, payload))]
    pub async fn create_vaccination(
        &self,
        payload: &VaccinationPayload,
    ) -> Result<Vaccination, ApiError> {
        self.post("/api/vaccination/", payload).await
    }

    #[instrument(skip(self, payload))]
    pub async fn update_vaccination(
        &self,
        id: i64,
        payload: &VaccinationPayload,
    ) -> Result<Vaccination, ApiError> {
        self.patch(&format!("/api/vaccination/{id}/"), payload).await
    }

    #[instrument(skip(self))]
    pub async fn delete_vaccination(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/api/vaccination/{id}/")).await
    }

    // --- Auth (unauthenticated endpoints) ---

    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        let _: serde_json::Value = self.post_public("/api/register/", request).await?;
        Ok(())
    }

    /// Exchange credentials for a token pair.
    #[instrument(skip(self, password))]
    pub async fn obtain_token(
        &self,
        username: &str,
        password: &str,
    ) -> Result<TokenPairResponse, ApiError> {
        self.post_public(
            "/api/token/",
            &serde_json::json!({"username": username, "password": password}),
        )
        .await
    }

    /// Exchange a refresh token for a fresh access token.
    #[instrument(skip(self, refresh))]
    pub async fn refresh_token(&self, refresh: &str) -> Result<RefreshResponse, ApiError> {
        self.post_public("/api/token/refresh/", &serde_json::json!({"refresh": refresh})).await
    }

    /// Exchange a Google ID token for backend credentials.
    #[instrument(skip(self, id_token))]
    pub async fn google_login(&self, id_token: &str) -> Result<GoogleAuthResponse, ApiError> {
        self.post_public("/api/auth/google/", &serde_json::json!({"token": id_token})).await
    }

    fn map_transport_error(&self, err: reqwest::Error) -> ApiError {
        if err.is_timeout() {
            ApiError::Timeout(self.config.timeout)
        } else {
            ApiError::Network(err.to_string())
        }
    }

    fn map_status_error(status: StatusCode, url: &str, body: String) -> ApiError {
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let message = if body.is_empty() {
                format!("{url} returned status {status}")
            } else {
                format!("{url} returned status {status}: {body}")
            };
            return ApiError::Auth(message);
        }

        // 400 with a DRF field map becomes a field-level validation error.
        if status == StatusCode::BAD_REQUEST {
            if let Ok(errors) = serde_json::from_str::<ValidationErrors>(&body) {
                if let Some((field, message)) = errors.first_field() {
                    return ApiError::Validation { field, message };
                }
            }
        }

        let message = if body.is_empty() {
            format!("{url} returned status {status}")
        } else {
            format!("{url} returned status {status}: {body}")
        };

        if status.is_server_error() {
            ApiError::Server(message)
        } else if status.is_client_error() {
            ApiError::Client(message)
        } else {
            ApiError::Network(message)
        }
    }
}
