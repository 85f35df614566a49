use std::future::Future;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::Settings;
use crate::error::{GuessError, Result};
use crate::models::card::Card;
use crate::opt::*;

const USER_AGENT: &str = "monster-guess/0.1 (+reqwest)";

const RANDOM_CARD_PATH: &str = "randomcard.php";
const CARD_INFO_PATH: &str = "cardinfo.php";

const EXACT_NAME_KEY: &str = "name";
const FUZZY_NAME_KEY: &str = "fname";

/// Lookup service for the cards used in a round.
#[allow(async_fn_in_trait)]
pub trait CardSource {
    async fn fetch_random_monster_card(&self) -> Result<Card>;

    /// `Ok(None)` when no card matches `name`.
    async fn fetch_card_by_name(&self, name: &str) -> Result<Option<Card>>;
}

#[derive(Debug, Deserialize)]
struct CardInfoResponse {
    data: Vec<Card>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: String,
}

/// `randomcard.php` has served both shapes over time.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RandomCardResponse {
    Wrapped { data: Vec<Card> },
    Bare(Card),
}

pub struct YgoProDeckClient {
    client: Client,
    base_url: String,
    random_max_attempts: u32,
}

impl YgoProDeckClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.http_timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(YgoProDeckClient {
            client,
            base_url: settings.api_base.trim_end_matches('/').to_string(),
            random_max_attempts: settings.random_max_attempts,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Option<T>> {
        let url = format!("{}/{}", self.base_url, path);
        log_if(&format!("GET {} {:?}", url, query), DbgFlg::Api);

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();
        let body = response.text().await?;

        classify_response(status, &body)
    }

    async fn fetch_random_card(&self) -> Result<Card> {
        let response = self
            .get_json::<RandomCardResponse>(RANDOM_CARD_PATH, &[])
            .await?
            .ok_or_else(|| GuessError::Api {
                status: StatusCode::BAD_REQUEST.as_u16(),
                message: "random card request was rejected".to_string(),
            })?;

        match response {
            RandomCardResponse::Bare(card) => Ok(card),
            RandomCardResponse::Wrapped { data } => {
                data.into_iter().next().ok_or_else(|| GuessError::Api {
                    status: StatusCode::OK.as_u16(),
                    message: "random card response was empty".to_string(),
                })
            }
        }
    }

    async fn search_cards(&self, key: &str, name: &str) -> Result<Vec<Card>> {
        Ok(self
            .get_json::<CardInfoResponse>(CARD_INFO_PATH, &[(key, name)])
            .await?
            .map(|response| response.data)
            .unwrap_or_default())
    }
}

impl CardSource for YgoProDeckClient {
    async fn fetch_random_monster_card(&self) -> Result<Card> {
        retry_until_monster(self.random_max_attempts, || self.fetch_random_card()).await
    }

    async fn fetch_card_by_name(&self, name: &str) -> Result<Option<Card>> {
        lookup_exact_then_fuzzy(name, |key| self.search_cards(key, name)).await
    }
}

/// Decodes a card database response. A 400 carrying an `error` body is the
/// API's way of saying nothing matched and maps to `Ok(None)`.
fn classify_response<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<Option<T>> {
    if status == StatusCode::BAD_REQUEST {
        if let Ok(api_error) = serde_json::from_str::<ApiErrorBody>(body) {
            log_if(&format!("No match: {}", api_error.error), DbgFlg::Api);
            return Ok(None);
        }
    }

    if !status.is_success() {
        return Err(GuessError::Api {
            status: status.as_u16(),
            message: body.to_string(),
        });
    }

    Ok(Some(serde_json::from_str::<T>(body)?))
}

/// Runs `search` with the exact `name` key, and with the fuzzy `fname` key
/// only when the exact query found nothing.
pub async fn lookup_exact_then_fuzzy<F, Fut>(name: &str, mut search: F) -> Result<Option<Card>>
where
    F: FnMut(&'static str) -> Fut,
    Fut: Future<Output = Result<Vec<Card>>>,
{
    if let Some(card) = search(EXACT_NAME_KEY).await?.into_iter().next() {
        return Ok(Some(card));
    }

    let candidates = search(FUZZY_NAME_KEY).await?;
    log_if(
        &format!("{} fuzzy candidates for {}", candidates.len(), name),
        DbgFlg::Api,
    );
    Ok(closest_match(name, candidates))
}

pub async fn retry_until_monster<F, Fut>(max_attempts: u32, mut fetch: F) -> Result<Card>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Card>>,
{
    for attempt in 1..=max_attempts {
        let card = fetch().await?;
        if card.is_monster() {
            return Ok(card);
        }
        log_if(
            &format!(
                "Attempt {}: [{}] is a {}, fetching another",
                attempt, card.name, card.card_type
            ),
            DbgFlg::Api,
        );
    }

    Err(GuessError::NoMonsterFound {
        attempts: max_attempts,
    })
}

/// Candidate whose name is closest to `name`, ignoring case.
pub fn closest_match(name: &str, candidates: Vec<Card>) -> Option<Card> {
    let wanted = name.trim().to_lowercase();
    candidates
        .into_iter()
        .map(|card| {
            let score = strsim::normalized_levenshtein(&wanted, &card.name.to_lowercase());
            (score, card)
        })
        .max_by(|(a, _), (b, _)| a.total_cmp(b))
        .map(|(_, card)| card)
}
