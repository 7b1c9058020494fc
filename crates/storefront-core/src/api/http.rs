//! reqwest-backed client for the storefront cart endpoints

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, COOKIE};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::auth::RequestAuthorizer;
use super::{decode_envelope, CartApi};
use crate::config::StorefrontConfig;
use crate::error::StorefrontResult;
use crate::types::{CartCount, CartState, LineId, MutationOutcome, ProductId};

/// HTTP implementation of [`CartApi`]
#[derive(Clone)]
pub struct HttpCartApi {
    client: Client,
    config: StorefrontConfig,
    authorizer: Arc<dyn RequestAuthorizer>,
}

impl HttpCartApi {
    pub fn new(
        config: StorefrontConfig,
        authorizer: Arc<dyn RequestAuthorizer>,
    ) -> StorefrontResult<Self> {
        let config = config.validated()?;
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            config,
            authorizer,
        })
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        authorize: bool,
    ) -> StorefrontResult<(Option<String>, T)> {
        let mut request = request.header(ACCEPT, "application/json");
        if let Some(cookie) = &self.config.session_cookie {
            request = request.header(COOKIE, cookie.as_str());
        }
        if authorize {
            if let Some(auth) = self.authorizer.authorize() {
                request = request.header(auth.name, auth.value);
            }
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        debug!(status = status.as_u16(), bytes = body.len(), "Cart API response");
        decode_envelope(status.as_u16(), &body)
    }

    async fn mutate(&self, request: RequestBuilder) -> StorefrontResult<MutationOutcome> {
        let (message, cart) = self.send::<CartCount>(request, true).await?;
        Ok(MutationOutcome { message, cart })
    }
}

#[async_trait]
impl CartApi for HttpCartApi {
    async fn fetch_cart(&self) -> StorefrontResult<CartState> {
        let url = self.config.endpoint("");
        debug!(%url, "Fetching cart");
        let (_, cart) = self.send(self.client.get(url), false).await?;
        Ok(cart)
    }

    async fn add_item(&self, product: ProductId) -> StorefrontResult<MutationOutcome> {
        let url = self.config.endpoint(&format!("add/{}/", product));
        debug!(%url, "Adding product");
        self.mutate(self.client.post(url)).await
    }

    async fn remove_line(&self, line: LineId) -> StorefrontResult<MutationOutcome> {
        let url = self.config.endpoint(&format!("remove/{}/", line));
        debug!(%url, "Removing line");
        self.mutate(self.client.post(url)).await
    }

    async fn update_line(&self, line: LineId, quantity: u32) -> StorefrontResult<MutationOutcome> {
        let url = self.config.endpoint(&format!("update/{}/", line));
        debug!(%url, quantity, "Updating line");
        self.mutate(self.client.post(url).form(&[("quantity", quantity)]))
            .await
    }
}
