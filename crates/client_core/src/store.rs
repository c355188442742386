//! PostgREST-backed implementation of [`FactStore`].

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use shared::{
    domain::{Fact, FactId},
    error::StoreError,
    protocol::{FactQuery, NewFact, StoreErrorBody, VotePatch},
};
use tracing::{debug, warn};

use crate::{config::StoreSettings, FactStore};

const RETURN_REPRESENTATION: &str = "return=representation";

pub struct PostgrestFactStore {
    http: Client,
    table_url: String,
    anon_key: String,
}

impl PostgrestFactStore {
    pub fn new(settings: &StoreSettings) -> Result<Self, StoreError> {
        let http = Client::builder()
            .timeout(settings.request_timeout())
            .build()
            .map_err(|err| StoreError::Transport(err.to_string()))?;
        Ok(Self {
            http,
            table_url: format!("{}/rest/v1/{}", settings.store_url, settings.table),
            anon_key: settings.anon_key.clone(),
        })
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Vec<Fact>, StoreError> {
        let response = self
            .authorized(request)
            .send()
            .await
            .map_err(map_transport_error)?;
        read_rows(response).await
    }
}

#[async_trait]
impl FactStore for PostgrestFactStore {
    async fn select(&self, query: &FactQuery) -> Result<Vec<Fact>, StoreError> {
        let direction = if query.descending { "desc" } else { "asc" };
        let mut params = vec![
            ("select", "*".to_string()),
            (
                "order",
                format!("{}.{direction}", query.order_by.column_name()),
            ),
            ("limit", query.limit.to_string()),
        ];
        if let Some(category) = query.filter.category() {
            params.push(("category", format!("eq.{category}")));
        }
        debug!(filter = %query.filter, limit = query.limit, "store: select facts");
        self.send(self.http.get(&self.table_url).query(&params)).await
    }

    async fn insert(&self, fact: &NewFact) -> Result<Vec<Fact>, StoreError> {
        debug!(category = %fact.category, "store: insert fact");
        self.send(
            self.http
                .post(&self.table_url)
                .query(&[("select", "*")])
                .header("Prefer", RETURN_REPRESENTATION)
                .json(&[fact]),
        )
        .await
    }

    async fn update(&self, id: FactId, patch: VotePatch) -> Result<Vec<Fact>, StoreError> {
        debug!(
            fact_id = id.0,
            column = %patch.column,
            value = patch.value,
            "store: update fact"
        );
        self.send(
            self.http
                .patch(&self.table_url)
                .query(&[("id", format!("eq.{}", id.0)), ("select", "*".to_string())])
                .header("Prefer", RETURN_REPRESENTATION)
                .json(&patch),
        )
        .await
    }
}

async fn read_rows(response: Response) -> Result<Vec<Fact>, StoreError> {
    let status = response.status();
    if status.is_success() {
        return response.json::<Vec<Fact>>().await.map_err(|err| {
            if err.is_timeout() {
                StoreError::Timeout
            } else {
                StoreError::Decode(err.to_string())
            }
        });
    }

    let raw = response.text().await.unwrap_or_default();
    let body = serde_json::from_str::<StoreErrorBody>(&raw).unwrap_or_default();
    let message = body
        .message
        .filter(|m| !m.trim().is_empty())
        .or_else(|| Some(raw.trim().to_string()).filter(|m| !m.is_empty()))
        .unwrap_or_else(|| format!("fact store responded with HTTP {}", status.as_u16()));
    warn!(
        status = status.as_u16(),
        code = ?body.code,
        "store: request rejected: {message}"
    );

    Err(StoreError::Backend {
        status: status.as_u16(),
        code: body.code,
        message,
    })
}

fn map_transport_error(err: reqwest::Error) -> StoreError {
    if err.is_timeout() {
        StoreError::Timeout
    } else {
        StoreError::Transport(err.to_string())
    }
}
