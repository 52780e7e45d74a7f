use crate::errors::{DexError, DexResult, NetworkError, NotFoundError};
use schema::{EvolutionChain, NamedApiResourceList, Pokemon, PokemonSpecies};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// Public data source queried when `POKEDEX_API_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// How many entries the initial load covers (the original Kanto dex).
pub const KANTO_DEX_SIZE: u32 = 151;

const MAX_RETRIES: u32 = 2;
const RETRY_BASE_DELAY: Duration = Duration::from_millis(250);

/// Read-only client for the remote Pokemon data source.
///
/// Cheap to clone; the underlying `reqwest::Client` shares its connection
/// pool across clones, which the concurrent batch fetch relies on.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for PokeApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl PokeApiClient {
    /// Creates a client against `POKEDEX_API_URL`, falling back to the
    /// public instance. The base URL is the only configuration this
    /// application takes.
    pub fn new() -> Self {
        let base_url =
            std::env::var("POKEDEX_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::with_base_url(base_url)
    }

    /// Creates a client against an explicit base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// One page of the named-entity list. Summaries only; the names drive
    /// the follow-up detail fetches.
    pub async fn list_pokemon(&self, offset: u32, limit: u32) -> DexResult<NamedApiResourceList> {
        self.get_json(&format!("pokemon?offset={}&limit={}", offset, limit))
            .await
    }

    /// Full detail record by name.
    pub async fn get_pokemon(&self, name: &str) -> DexResult<Pokemon> {
        self.get_json(&format!("pokemon/{}", name))
            .await
            .map_err(|err| match err {
                DexError::NotFound(_) => NotFoundError::Pokemon(name.to_string()).into(),
                other => other,
            })
    }

    /// Species record by name; carries the evolution chain reference.
    pub async fn get_species(&self, name: &str) -> DexResult<PokemonSpecies> {
        self.get_json(&format!("pokemon-species/{}", name))
            .await
            .map_err(|err| match err {
                DexError::NotFound(_) => NotFoundError::Species(name.to_string()).into(),
                other => other,
            })
    }

    /// The full evolution tree for a chain id. Linearization is the
    /// resolver's concern; this hands back every branch as fetched.
    pub async fn get_evolution_chain(&self, id: u32) -> DexResult<EvolutionChain> {
        self.get_json(&format!("evolution-chain/{}", id))
            .await
            .map_err(|err| match err {
                DexError::NotFound(_) => NotFoundError::EvolutionChain(id).into(),
                other => other,
            })
    }

    /// Join-all combinator over the detail endpoint: every fetch is issued
    /// concurrently, results come back in input order, and the whole batch
    /// either succeeds or fails with the first error. Each task writes to
    /// its own slot; nothing is shared between in-flight fetches.
    pub async fn fetch_all_pokemon(&self, names: &[String]) -> DexResult<Vec<Pokemon>> {
        let mut handles = Vec::with_capacity(names.len());
        for name in names {
            let client = self.clone();
            let name = name.clone();
            handles.push(tokio::spawn(async move { client.get_pokemon(&name).await }));
        }

        let mut records = Vec::with_capacity(handles.len());
        for handle in handles {
            let record = handle
                .await
                .map_err(|err| NetworkError::RequestFailed(format!("fetch task failed: {}", err)))??;
            records.push(record);
        }
        Ok(records)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> DexResult<T> {
        let url = format!("{}/{}", self.base_url, path);
        let mut attempt = 0;
        loop {
            match self.try_get(&url).await {
                Ok(value) => return Ok(value),
                Err(err) if err.is_retryable() && attempt < MAX_RETRIES => {
                    attempt += 1;
                    let delay = RETRY_BASE_DELAY * (1u32 << (attempt - 1));
                    warn!(%url, %err, attempt, "retrying after transient failure");
                    tokio::time::sleep(delay).await;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn try_get<T: DeserializeOwned>(&self, url: &str) -> DexResult<T> {
        debug!(%url, "GET");
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.json::<T>().await?)
    }
}
