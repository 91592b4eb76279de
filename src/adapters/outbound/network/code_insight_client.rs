use super::wire::{
    decode_unbounded, history_from_wire, project_tree_from_wire, Envelope, InventoryPage,
    WireLicense, WireProject, WireProjectTree,
};
use crate::audit_report::domain::{InventoryHistory, InventoryItem, LicenseDetails, ProjectTree};
use crate::ports::outbound::{InventoryRepository, ProjectInformation, ReportUploader};
use crate::shared::error::RemoteError;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

const API_PREFIX: &str = "/codeinsight/api";
const INVENTORY_PAGE_SIZE: u64 = 100;
/// Upper bound on inventory pages fetched for a single project.
const MAX_INVENTORY_PAGES: u64 = 10_000;
const MAX_ERROR_BODY_CHARS: usize = 300;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Connection settings for a Code Insight server
#[derive(Debug, Clone)]
pub struct CodeInsightSettings {
    pub base_url: String,
    pub auth_token: String,
    pub timeout: Duration,
    pub max_retries: u32,
    pub retry_delay: Duration,
    pub certificate: Option<PathBuf>,
}

impl CodeInsightSettings {
    pub fn new(base_url: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth_token: auth_token.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay: Duration::from_millis(500),
            certificate: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    pub fn with_certificate(mut self, certificate: Option<PathBuf>) -> Self {
        self.certificate = certificate;
        self
    }
}

/// CodeInsightClient adapter for the Code Insight REST API
///
/// Implements both the InventoryRepository and the ReportUploader ports.
/// Requests are awaited one at a time. Transient failures (connection errors,
/// timeouts, HTTP 429 and 5xx) are retried with a linearly growing delay;
/// everything else fails immediately.
pub struct CodeInsightClient {
    client: reqwest::Client,
    base_url: String,
    auth_token: String,
    max_retries: u32,
    retry_delay: Duration,
}

impl CodeInsightClient {
    /// Creates a client from the given settings
    ///
    /// # Errors
    /// Returns an error if the base URL is empty, the certificate cannot be
    /// read or parsed, or the HTTP client cannot be built.
    pub fn new(settings: CodeInsightSettings) -> Result<Self> {
        let base_url = settings.base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            anyhow::bail!("Code Insight base URL must not be empty");
        }

        let version = env!("CARGO_PKG_VERSION");
        let mut builder = reqwest::Client::builder()
            .timeout(settings.timeout)
            .user_agent(format!("inventory-license-audit/{}", version));

        if let Some(path) = &settings.certificate {
            validate_regular_file(path, "server certificate")?;
            let pem = std::fs::read(path)
                .with_context(|| format!("Failed to read certificate {}", path.display()))?;
            let certificate = reqwest::Certificate::from_pem(&pem)
                .with_context(|| format!("Invalid PEM certificate {}", path.display()))?;
            builder = builder.add_root_certificate(certificate);
            debug!(path = %path.display(), "Trusting additional root certificate");
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
            auth_token: settings.auth_token,
            max_retries: settings.max_retries,
            retry_delay: settings.retry_delay,
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, path)
    }

    /// Rejects IDs that could change the shape of the request URL
    fn validate_url_component(component: &str, component_type: &str) -> Result<()> {
        if component.contains('/') || component.contains('\\') {
            anyhow::bail!(
                "Security: {} contains path separators which are not allowed",
                component_type
            );
        }

        if component.contains("..") {
            anyhow::bail!(
                "Security: {} contains '..' which is not allowed",
                component_type
            );
        }

        if component.contains('#') || component.contains('?') || component.contains('@') {
            anyhow::bail!(
                "Security: {} contains URL-unsafe characters",
                component_type
            );
        }

        Ok(())
    }

    async fn send_once(
        &self,
        operation: &str,
        request: reqwest::RequestBuilder,
    ) -> std::result::Result<reqwest::Response, RemoteError> {
        let response = request
            .bearer_auth(&self.auth_token)
            .send()
            .await
            .map_err(|e| RemoteError::Transient {
                operation: operation.to_string(),
                details: e.to_string(),
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let details: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
        Err(RemoteError::from_status(operation, status.as_u16(), details))
    }

    /// Sends the request built by `build`, retrying transient failures
    async fn send_with_retry<F>(
        &self,
        operation: &str,
        build: F,
    ) -> std::result::Result<reqwest::Response, RemoteError>
    where
        F: Fn() -> reqwest::RequestBuilder,
    {
        let mut attempt: u32 = 0;
        loop {
            match self.send_once(operation, build()).await {
                Ok(response) => return Ok(response),
                Err(error) if error.is_transient() && attempt < self.max_retries => {
                    attempt += 1;
                    warn!(operation, attempt, error = %error, "Retrying Code Insight request");
                    tokio::time::sleep(self.retry_delay * attempt).await;
                }
                Err(error) => return Err(error),
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, operation: &str, url: &str) -> Result<T> {
        debug!(operation, url, "GET");
        let response = self
            .send_with_retry(operation, || self.client.get(url))
            .await?;
        let to_decode_error = |details: String| RemoteError::Decode {
            operation: operation.to_string(),
            details,
        };
        let body = response
            .bytes()
            .await
            .map_err(|e| to_decode_error(e.to_string()))?;
        let decoded = decode_unbounded::<T>(&body).map_err(|e| to_decode_error(e.to_string()))?;
        Ok(decoded)
    }
}

#[async_trait]
impl InventoryRepository for CodeInsightClient {
    async fn fetch_project_hierarchy(&self, project_id: u64) -> Result<ProjectTree> {
        let url = self.api_url(&format!("/projects/{}/allchildprojects", project_id));
        let envelope: Envelope<WireProjectTree> =
            self.get_json("project hierarchy", &url).await?;
        Ok(project_tree_from_wire(envelope.data))
    }

    async fn fetch_inventory_summary(&self, project_id: u64) -> Result<Vec<InventoryItem>> {
        let mut items = Vec::new();
        let mut previous_ids: Vec<u64> = Vec::new();
        let mut page: u64 = 1;
        loop {
            let url = self.api_url(&format!(
                "/projects/{}/inventorySummary?offset={}&limit={}",
                project_id, page, INVENTORY_PAGE_SIZE
            ));
            let response: InventoryPage = self.get_json("inventory summary", &url).await?;
            let total_pages = response.page_count();
            let page_items: Vec<InventoryItem> =
                response.data.into_iter().map(InventoryItem::from).collect();
            let page_ids: Vec<u64> = page_items.iter().map(|item| item.id).collect();

            // Without a page count, a server that ignores the offset keeps
            // returning the same full page.
            if total_pages.is_none() && !page_ids.is_empty() && page_ids == previous_ids {
                warn!(project_id, page, "Inventory page repeated; stopping pagination");
                break;
            }
            let received = page_items.len() as u64;
            items.extend(page_items);

            let more = match total_pages {
                Some(total) => page < total,
                None => received == INVENTORY_PAGE_SIZE,
            };
            if !more {
                break;
            }
            if page >= MAX_INVENTORY_PAGES {
                warn!(project_id, page, "Inventory page limit reached; stopping pagination");
                break;
            }
            previous_ids = page_ids;
            page += 1;
        }
        debug!(project_id, items = items.len(), "Inventory summary loaded");
        Ok(items)
    }

    async fn fetch_project_information(&self, project_id: u64) -> Result<ProjectInformation> {
        let url = self.api_url(&format!("/projects/{}", project_id));
        let envelope: Envelope<WireProject> =
            self.get_json("project information", &url).await?;
        Ok(ProjectInformation {
            custom_fields: envelope
                .data
                .custom_fields
                .into_iter()
                .map(Into::into)
                .collect(),
        })
    }

    async fn fetch_inventory_history(&self, inventory_id: u64) -> Result<InventoryHistory> {
        let url = self.api_url(&format!("/inventories/{}/history", inventory_id));
        let envelope: Envelope<Value> = self.get_json("inventory history", &url).await?;
        let history = history_from_wire(envelope.data).map_err(|e| {
            RemoteError::Decode {
                operation: "inventory history".to_string(),
                details: e.to_string(),
            }
        })?;
        Ok(history)
    }

    async fn fetch_license_details(&self, license_id: &str) -> Result<LicenseDetails> {
        Self::validate_url_component(license_id, "License ID")?;
        let url = self.api_url(&format!("/licenses/{}", urlencoding::encode(license_id)));
        let envelope: Envelope<WireLicense> = self.get_json("license lookup", &url).await?;
        Ok(envelope.data.into())
    }

    fn project_link(&self, project_id: u64) -> String {
        format!(
            "{}/codeinsight/FNCI#myprojectdetails/?id={}&tab=projectInventory",
            self.base_url, project_id
        )
    }

    fn inventory_link(&self, project_id: u64, inventory_id: u64) -> String {
        format!("{}&pinv={}", self.project_link(project_id), inventory_id)
    }
}

#[async_trait]
impl ReportUploader for CodeInsightClient {
    async fn upload_report_archive(
        &self,
        project_id: u64,
        report_id: u64,
        archive_path: &Path,
    ) -> Result<()> {
        let bytes = tokio::fs::read(archive_path)
            .await
            .with_context(|| format!("Failed to read archive {}", archive_path.display()))?;
        let file_name = archive_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "report.zip".to_string());

        let url = self.api_url(&format!(
            "/projects/{}/reports/{}/data",
            project_id, report_id
        ));
        debug!(url = %url, bytes = bytes.len(), "Uploading report archive");

        self.send_with_retry("report upload", || {
            let part = reqwest::multipart::Part::bytes(bytes.clone()).file_name(file_name.clone());
            let form = reqwest::multipart::Form::new().part("file", part);
            self.client.post(&url).multipart(form)
        })
        .await?;

        info!(project_id, report_id, "Report archive uploaded");
        Ok(())
    }
}
