use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use pd_core::catalog::{CatalogFilter, CatalogPokemon, NewOwnedPokemon, OwnedPokemon};
use pd_core::config::ApiConfig;
use pd_core::ids::PokemonCode;
use pd_core::ports::{CatalogGatewayPort, GatewayError};

// The server signals a full team with a plain 400; this message text is the
// only way to tell the capacity rejection apart from other bad requests.
const TEAM_FULL_MSG: &str = "Equipe já possui 6 Pokémon!";

#[derive(Debug, Deserialize)]
struct ErrorBody {
    msg: Option<String>,
}

/// Catalog gateway speaking the backend's REST dialect over reqwest.
///
/// Membership collections live under `/user-pokemon/{equipe,favoritos}`,
/// the browsable catalog under `/pokemon`. Every request carries the bearer
/// token when one is configured.
pub struct HttpCatalogGateway {
    client: Client,
    base_url: String,
    bearer_token: Option<String>,
}

impl HttpCatalogGateway {
    pub fn new(config: &ApiConfig) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            bearer_token: config.bearer_token.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.bearer_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Response, GatewayError> {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        if response.status().is_success() {
            return Ok(response);
        }

        Err(Self::error_from_response(response).await)
    }

    /// Map a non-success response onto the port's error vocabulary.
    ///
    /// 400 needs the body: capacity rejections and ordinary validation
    /// failures share the status code and differ only in the message.
    async fn error_from_response(response: Response) -> GatewayError {
        let status = response.status();
        match status {
            StatusCode::UNAUTHORIZED => GatewayError::Unauthorized,
            StatusCode::NOT_FOUND => GatewayError::NotFound,
            StatusCode::BAD_REQUEST => {
                let message = response
                    .json::<ErrorBody>()
                    .await
                    .ok()
                    .and_then(|body| body.msg)
                    .unwrap_or_default();
                if message == TEAM_FULL_MSG {
                    GatewayError::TeamFull
                } else {
                    GatewayError::Rejected { message }
                }
            }
            _ => GatewayError::UnexpectedStatus(status.as_u16()),
        }
    }

    async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
        response
            .json::<T>()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))
    }
}

#[async_trait]
impl CatalogGatewayPort for HttpCatalogGateway {
    async fn fetch_team(&self) -> Result<Vec<OwnedPokemon>, GatewayError> {
        let response = self
            .execute(self.client.get(self.url("/user-pokemon/equipe")))
            .await?;
        Self::decode_json(response).await
    }

    async fn fetch_favorites(&self) -> Result<Vec<OwnedPokemon>, GatewayError> {
        let response = self
            .execute(self.client.get(self.url("/user-pokemon/favoritos")))
            .await?;
        Self::decode_json(response).await
    }

    async fn add_team_member(&self, member: &NewOwnedPokemon) -> Result<(), GatewayError> {
        debug!(code = %member.membership_code(), "posting team member");
        self.execute(
            self.client
                .post(self.url("/user-pokemon/equipe"))
                .json(member),
        )
        .await?;
        Ok(())
    }

    async fn remove_team_member(&self, code: &PokemonCode) -> Result<(), GatewayError> {
        self.execute(
            self.client
                .delete(self.url(&format!("/user-pokemon/equipe/{}", code))),
        )
        .await?;
        Ok(())
    }

    async fn add_favorite(&self, member: &NewOwnedPokemon) -> Result<(), GatewayError> {
        debug!(code = %member.membership_code(), "posting favorite");
        self.execute(
            self.client
                .post(self.url("/user-pokemon/favoritos"))
                .json(member),
        )
        .await?;
        Ok(())
    }

    async fn remove_favorite(&self, code: &PokemonCode) -> Result<(), GatewayError> {
        self.execute(
            self.client
                .delete(self.url(&format!("/user-pokemon/favoritos/{}", code))),
        )
        .await?;
        Ok(())
    }

    async fn browse_catalog(
        &self,
        filter: &CatalogFilter,
    ) -> Result<Vec<CatalogPokemon>, GatewayError> {
        let response = self
            .execute(
                self.client
                    .get(self.url("/pokemon"))
                    .query(&filter.query_pairs()),
            )
            .await?;
        Self::decode_json(response).await
    }
}
