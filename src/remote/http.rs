//! Blocking (synchronous) HTTP collaborators
//!
//! Implements [`Services`] against public endpoints: wttr.in, RSS feeds,
//! Wikipedia, Nominatim and ipapi.co. Desktop actions spawn processes.

use std::process::{Command, Stdio};
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use url::Url;

use super::types::{
    first_sentences, opensearch_titles, rss_titles, IpApiResponse, NominatimPlace, WikiSummary,
    WttrResponse,
};
use crate::config::ServicesConfig;
use crate::core::services::{Article, GeoLocation, NewsSource, Place, Services, WeatherReport};
use crate::error::ServiceError;

const WTTR_URL: &str = "https://wttr.in/";
const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/search";
const IPAPI_URL: &str = "https://ipapi.co/json/";

/// Sentences kept from an encyclopedia summary
const SUMMARY_SENTENCES: usize = 3;
const SUGGESTION_LIMIT: usize = 5;
const AMBIGUOUS_LIMIT: usize = 6;

fn feed_url(source: NewsSource) -> &'static str {
    match source {
        NewsSource::Google => "https://news.google.com/rss?hl=es&gl=ES&ceid=ES:es",
        NewsSource::Bbc => "https://feeds.bbci.co.uk/mundo/rss.xml",
        NewsSource::ElPais => "https://feeds.elpais.com/elpais/portada.xml",
        NewsSource::Cnn => "https://cnnespanol.cnn.com/feed/",
    }
}

fn transport(e: reqwest::Error) -> ServiceError {
    ServiceError::Transport(e.to_string())
}

fn invalid(e: impl std::fmt::Display) -> ServiceError {
    ServiceError::InvalidResponse(e.to_string())
}

/// Network-backed collaborators
#[derive(Debug, Clone)]
pub struct HttpServices {
    client: Client,
    wikipedia_lang: String,
    calculator_command: String,
}

impl HttpServices {
    /// Create client from the `[services]` config section
    pub fn from_config(config: &ServicesConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            wikipedia_lang: config.wikipedia_lang.clone(),
            calculator_command: config.calculator_command.clone(),
        })
    }

    fn get(&self, url: Url) -> Result<Response, ServiceError> {
        debug!(url = %url, "GET");
        self.client.get(url).send().map_err(transport)
    }

    /// Parse a successful JSON response; 404 is `NotFound`
    fn json<T: DeserializeOwned>(&self, url: Url, what: &str) -> Result<T, ServiceError> {
        let response = self.get(url)?;
        match response.status() {
            s if s.is_success() => response.json().map_err(invalid),
            StatusCode::NOT_FOUND => Err(ServiceError::NotFound(what.to_string())),
            s => Err(ServiceError::Unavailable(format!("{} ({})", what, s))),
        }
    }

    fn wikipedia(&self, path: &str) -> Result<Url, ServiceError> {
        Url::parse(&format!("https://{}.wikipedia.org{}", self.wikipedia_lang, path)).map_err(invalid)
    }

    fn summary_url(&self, topic: &str) -> Result<Url, ServiceError> {
        let mut url = self.wikipedia("/api/rest_v1/page/summary/")?;
        url.path_segments_mut()
            .map_err(|_| invalid("wikipedia url cannot be a base"))?
            .pop_if_empty()
            .push(&topic.trim().replace(' ', "_"));
        Ok(url)
    }

    fn opensearch(&self, topic: &str, limit: usize) -> Result<Vec<String>, ServiceError> {
        let mut url = self.wikipedia("/w/api.php")?;
        url.query_pairs_mut()
            .append_pair("action", "opensearch")
            .append_pair("search", topic)
            .append_pair("limit", &limit.to_string())
            .append_pair("format", "json");
        let value: serde_json::Value = self.json(url, topic)?;
        Ok(opensearch_titles(&value))
    }

    fn open_with_platform(url: &str) -> std::io::Result<()> {
        let mut command = if cfg!(target_os = "windows") {
            let mut c = Command::new("cmd");
            c.args(["/C", "start", "", url]);
            c
        } else if cfg!(target_os = "macos") {
            let mut c = Command::new("open");
            c.arg(url);
            c
        } else {
            let mut c = Command::new("xdg-open");
            c.arg(url);
            c
        };
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_| ())
    }
}

impl Services for HttpServices {
    fn weather(&self, location: &str) -> Result<WeatherReport, ServiceError> {
        let mut url = Url::parse(WTTR_URL).map_err(invalid)?;
        url.path_segments_mut()
            .map_err(|_| invalid("wttr url cannot be a base"))?
            .pop_if_empty()
            .push(location);
        url.query_pairs_mut().append_pair("format", "j1");

        let response = self.get(url)?;
        if !response.status().is_success() {
            return Err(ServiceError::NotFound(location.to_string()));
        }
        response.json::<WttrResponse>().map_err(invalid)?.into_report()
    }

    fn news(&self, source: NewsSource) -> Result<Vec<String>, ServiceError> {
        let url = Url::parse(feed_url(source)).map_err(invalid)?;
        let response = self.get(url)?;
        if !response.status().is_success() {
            return Err(ServiceError::Unavailable(format!(
                "{} feed ({})",
                source.id(),
                response.status()
            )));
        }
        let body = response.text().map_err(transport)?;
        Ok(rss_titles(&body).into_iter().take(5).collect())
    }

    fn encyclopedia(&self, topic: &str) -> Result<Article, ServiceError> {
        match self.json::<WikiSummary>(self.summary_url(topic)?, topic) {
            Ok(page) if page.is_disambiguation() => {
                let options = self.opensearch(topic, AMBIGUOUS_LIMIT)?;
                Ok(Article::Ambiguous(options))
            }
            Ok(page) if !page.extract.trim().is_empty() => {
                Ok(Article::Summary(first_sentences(&page.extract, SUMMARY_SENTENCES)))
            }
            Ok(_) | Err(ServiceError::NotFound(_)) => {
                let titles = self.opensearch(topic, SUGGESTION_LIMIT)?;
                if titles.is_empty() {
                    Ok(Article::NotFound)
                } else {
                    Ok(Article::Suggestions(titles))
                }
            }
            Err(e) => Err(e),
        }
    }

    fn place_lookup(&self, query: &str) -> Result<Option<Place>, ServiceError> {
        let mut url = Url::parse(NOMINATIM_URL).map_err(invalid)?;
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("format", "json")
            .append_pair("limit", "1");

        let places: Vec<NominatimPlace> = self.json(url, query)?;
        places.into_iter().next().map(|p| p.into_place()).transpose()
    }

    fn geolocate(&self) -> GeoLocation {
        let located = Url::parse(IPAPI_URL)
            .map_err(invalid)
            .and_then(|url| self.json::<IpApiResponse>(url, "ipapi"));
        match located {
            Ok(reply) => reply.into_location().unwrap_or_else(GeoLocation::fallback),
            Err(e) => {
                warn!(error = %e, "geolocation failed, using fallback");
                GeoLocation::fallback()
            }
        }
    }

    fn browse(&self, url: &str) {
        info!(url, "opening browser");
        if let Err(e) = Self::open_with_platform(url) {
            warn!(url, error = %e, "failed to open browser");
        }
    }

    fn launch_calculator(&self) -> Result<(), ServiceError> {
        info!(command = %self.calculator_command, "launching calculator");
        Command::new(&self.calculator_command)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_| ())
            .map_err(|e| ServiceError::Unavailable(format!("{}: {}", self.calculator_command, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn services() -> HttpServices {
        HttpServices::from_config(&ServicesConfig::default()).unwrap()
    }

    #[test]
    fn test_summary_url_encodes_title() {
        let url = services().summary_url("inteligencia artificial").unwrap();
        assert_eq!(
            url.as_str(),
            "https://es.wikipedia.org/api/rest_v1/page/summary/inteligencia_artificial"
        );

        let url = services().summary_url("c/c++").unwrap();
        assert!(url.as_str().ends_with("/summary/c%2Fc++"));
    }

    #[test]
    fn test_feed_urls() {
        assert!(feed_url(NewsSource::Google).starts_with("https://news.google.com/rss"));
        assert!(feed_url(NewsSource::Bbc).contains("bbci.co.uk/mundo"));
    }

    #[test]
    fn test_missing_calculator_is_unavailable() {
        let mut config = ServicesConfig::default();
        config.calculator_command = "baro-test-no-such-calculator".to_string();
        let services = HttpServices::from_config(&config).unwrap();
        assert!(matches!(
            services.launch_calculator(),
            Err(ServiceError::Unavailable(_))
        ));
    }
}
