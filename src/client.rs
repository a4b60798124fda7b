use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use crate::users::dto::{
    CreateRequest, CreateResponse, DeleteRequest, Empty, GetRequest, GetResponse, UpdateRequest,
    UserInfo,
};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{message} (status {status})")]
    Rpc { status: u16, message: String },
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Rpc { status, .. } if *status == StatusCode::NOT_FOUND.as_u16())
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Typed caller for the user RPCs.
#[derive(Debug, Clone)]
pub struct AuthClient {
    http: Client,
    base_url: String,
}

impl AuthClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Like [`AuthClient::new`], with a deadline applied to every call.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        Ok(Self {
            http: Client::builder().timeout(timeout).build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn call<Req, Resp>(&self, method: &str, req: &Req) -> Result<Resp>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let response = self
            .http
            .post(format!("{}/auth_v1/{}", self.base_url, method))
            .json(req)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read response body>".to_string());
            let message = serde_json::from_str::<ErrorBody>(&text)
                .map(|b| b.error)
                .unwrap_or(text);
            return Err(ClientError::Rpc {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }

    pub async fn create(&self, info: UserInfo) -> Result<i64> {
        let resp: CreateResponse = self.call("create", &CreateRequest { info }).await?;
        Ok(resp.id)
    }

    pub async fn get(&self, id: i64) -> Result<GetResponse> {
        self.call("get", &GetRequest { id }).await
    }

    pub async fn update(&self, req: &UpdateRequest) -> Result<()> {
        let _: Empty = self.call("update", req).await?;
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let _: Empty = self.call("delete", &DeleteRequest { id }).await?;
        Ok(())
    }
}
