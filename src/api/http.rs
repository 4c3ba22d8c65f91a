//! reqwest-backed [`TodoistApi`].
//!
//! Every call is a form-encoded POST carrying the API token as the `token`
//! parameter. No retries and no timeouts beyond reqwest's defaults.

use super::{ActivityEntry, ItemsResponse, NotesResponse, SyncCommand, TodoistApi, WriteResponse};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::{Note, Task};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;

/// Production API client.
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
    token: SecretString,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>, token: SecretString) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_url.clone(), config.api_token.clone())
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    async fn post<T: DeserializeOwned>(&self, path: &str, params: &[(&str, &str)]) -> Result<T> {
        let endpoint = self.url(path);
        let mut form = vec![("token", self.token.expose_secret())];
        form.extend_from_slice(params);

        let response = self.client.post(&endpoint).form(&form).send().await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%endpoint, status = status.as_u16(), %body, "unexpected response");
            return Err(Error::Transport {
                endpoint,
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<T>().await?)
    }
}

impl TodoistApi for HttpApi {
    async fn activity(&self) -> Result<Vec<ActivityEntry>> {
        let entries: Vec<serde_json::Value> = self.post("activity/get", &[]).await?;
        Ok(super::decode_activity(entries))
    }

    async fn items(&self) -> Result<Vec<Task>> {
        let response: ItemsResponse = self
            .post(
                "sync",
                &[("sync_token", "*"), ("resource_types", r#"["items"]"#)],
            )
            .await?;
        Ok(response.items)
    }

    async fn notes(&self) -> Result<Vec<Note>> {
        let response: NotesResponse = self
            .post(
                "sync",
                &[("sync_token", "*"), ("resource_types", r#"["notes"]"#)],
            )
            .await?;
        Ok(response.notes)
    }

    async fn write_commands(&self, commands: &[SyncCommand]) -> Result<WriteResponse> {
        let commands = serde_json::to_string(commands)?;
        self.post("sync", &[("sync_token", "*"), ("commands", commands.as_str())])
            .await
    }
}
