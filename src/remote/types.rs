//! Remote API types
//!
//! DTOs for the public services behind [`super::HttpServices`], plus the pure
//! conversions from them into collaborator results.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::core::services::{GeoLocation, Place, WeatherReport};
use crate::error::ServiceError;

// ============== Weather (wttr.in, format=j1) ==============

#[derive(Debug, Clone, Deserialize)]
pub struct WttrResponse {
    #[serde(default)]
    pub current_condition: Vec<WttrCondition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WttrCondition {
    #[serde(rename = "temp_C")]
    pub temp_c: String,
    #[serde(rename = "FeelsLikeC")]
    pub feels_like_c: String,
    pub humidity: String,
    #[serde(rename = "weatherDesc", default)]
    pub weather_desc: Vec<WttrValue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WttrValue {
    pub value: String,
}

impl WttrResponse {
    pub fn into_report(self) -> Result<WeatherReport, ServiceError> {
        let current = self
            .current_condition
            .into_iter()
            .next()
            .ok_or_else(|| ServiceError::InvalidResponse("no current condition".to_string()))?;

        Ok(WeatherReport {
            temp_c: current.temp_c,
            feels_like_c: current.feels_like_c,
            humidity: current.humidity,
            condition: current
                .weather_desc
                .into_iter()
                .next()
                .map(|d| d.value)
                .unwrap_or_default(),
        })
    }
}

// ============== Encyclopedia (Wikipedia REST) ==============

/// `/api/rest_v1/page/summary/{title}`
#[derive(Debug, Clone, Deserialize)]
pub struct WikiSummary {
    /// `standard`, `disambiguation`, `no-extract`, ...
    #[serde(rename = "type", default)]
    pub page_type: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub extract: String,
}

impl WikiSummary {
    pub fn is_disambiguation(&self) -> bool {
        self.page_type == "disambiguation"
    }
}

/// Titles from an `opensearch` reply: `[query, [titles], [descriptions], [urls]]`
pub fn opensearch_titles(value: &serde_json::Value) -> Vec<String> {
    value
        .get(1)
        .and_then(|t| t.as_array())
        .map(|titles| {
            titles
                .iter()
                .filter_map(|t| t.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

/// First `count` sentences of a summary; the whole text if it has fewer
pub fn first_sentences(text: &str, count: usize) -> String {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut seen = 0;

    for (i, (pos, c)) in chars.iter().enumerate() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        // "1.5" is not a sentence end
        let at_boundary = chars
            .get(i + 1)
            .map_or(true, |(_, next)| next.is_whitespace());
        if at_boundary {
            seen += 1;
            if seen == count {
                return text[..pos + c.len_utf8()].trim().to_string();
            }
        }
    }

    text.trim().to_string()
}

// ============== Place lookup (Nominatim) ==============

#[derive(Debug, Clone, Deserialize)]
pub struct NominatimPlace {
    pub display_name: String,
    pub lat: String,
    pub lon: String,
}

impl NominatimPlace {
    pub fn into_place(self) -> Result<Place, ServiceError> {
        let parse = |v: &str| {
            v.parse::<f64>()
                .map_err(|_| ServiceError::InvalidResponse(format!("bad coordinate '{}'", v)))
        };
        Ok(Place {
            latitude: parse(&self.lat)?,
            longitude: parse(&self.lon)?,
            display_name: self.display_name,
        })
    }
}

// ============== Geolocation (ipapi.co) ==============

#[derive(Debug, Clone, Deserialize)]
pub struct IpApiResponse {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country_name: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub timezone: Option<String>,
    /// Set when the service refuses the request (rate limit, reserved IP)
    #[serde(default)]
    pub error: bool,
}

impl IpApiResponse {
    /// `None` when the reply carries no usable position
    pub fn into_location(self) -> Option<GeoLocation> {
        if self.error {
            return None;
        }
        Some(GeoLocation {
            city: self.city.unwrap_or_else(|| "Desconocida".to_string()),
            country: self.country_name.unwrap_or_default(),
            latitude: self.latitude.unwrap_or(0.0),
            longitude: self.longitude.unwrap_or(0.0),
            timezone: self.timezone.unwrap_or_default(),
        })
    }
}

// ============== News (RSS) ==============

static ITEM_TITLE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?s)<item\b[^>]*>.*?<title[^>]*>(.*?)</title>").ok());

static CDATA: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?s)<!\[CDATA\[(.*?)\]\]>").ok());

/// Item titles of an RSS document, in feed order
pub fn rss_titles(xml: &str) -> Vec<String> {
    let Some(item_title) = ITEM_TITLE.as_ref() else {
        return Vec::new();
    };

    item_title
        .captures_iter(xml)
        .filter_map(|caps| caps.get(1))
        .map(|m| clean_title(m.as_str()))
        .filter(|t| !t.is_empty())
        .collect()
}

fn clean_title(raw: &str) -> String {
    let text = match CDATA.as_ref() {
        Some(cdata) => cdata.replace_all(raw, "$1").into_owned(),
        None => raw.to_string(),
    };
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wttr_report() {
        let json = r#"{
            "current_condition": [{
                "temp_C": "28", "FeelsLikeC": "31", "humidity": "70",
                "weatherDesc": [{"value": "Partly cloudy"}]
            }],
            "weather": []
        }"#;
        let response: WttrResponse = serde_json::from_str(json).unwrap();
        let report = response.into_report().unwrap();
        assert_eq!(report.temp_c, "28");
        assert_eq!(report.feels_like_c, "31");
        assert_eq!(report.condition, "Partly cloudy");
    }

    #[test]
    fn test_wttr_without_condition() {
        let response: WttrResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(
            response.into_report(),
            Err(ServiceError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_first_sentences() {
        let text = "Uno es el primero. Dos va después. Tres cierra. Cuatro sobra.";
        assert_eq!(
            first_sentences(text, 3),
            "Uno es el primero. Dos va después. Tres cierra."
        );
        assert_eq!(first_sentences("Versión 1.5 estable. Otra.", 1), "Versión 1.5 estable.");
        assert_eq!(first_sentences("Sin punto final", 3), "Sin punto final");
    }

    #[test]
    fn test_opensearch_titles() {
        let value: serde_json::Value = serde_json::from_str(
            r#"["mercurio", ["Mercurio (planeta)", "Mercurio (elemento)"], ["", ""], ["u1", "u2"]]"#,
        )
        .unwrap();
        assert_eq!(
            opensearch_titles(&value),
            vec!["Mercurio (planeta)", "Mercurio (elemento)"]
        );
        assert!(opensearch_titles(&serde_json::json!({})).is_empty());
    }

    #[test]
    fn test_nominatim_place() {
        let places: Vec<NominatimPlace> = serde_json::from_str(
            r#"[{"display_name": "Madrid, España", "lat": "40.4167", "lon": "-3.7033", "importance": 0.9}]"#,
        )
        .unwrap();
        let place = places.into_iter().next().unwrap().into_place().unwrap();
        assert_eq!(place.latitude, 40.4167);
        assert_eq!(place.longitude, -3.7033);

        let bad = NominatimPlace {
            display_name: "x".to_string(),
            lat: "n/a".to_string(),
            lon: "0".to_string(),
        };
        assert!(bad.into_place().is_err());
    }

    #[test]
    fn test_ipapi_location() {
        let ok: IpApiResponse = serde_json::from_str(
            r#"{"city": "Lima", "country_name": "Peru", "latitude": -12.04, "longitude": -77.03, "timezone": "America/Lima"}"#,
        )
        .unwrap();
        let loc = ok.into_location().unwrap();
        assert_eq!(loc.full_location(), "Lima, Peru");

        let refused: IpApiResponse =
            serde_json::from_str(r#"{"error": true, "reason": "RateLimited"}"#).unwrap();
        assert!(refused.into_location().is_none());
    }

    #[test]
    fn test_rss_titles() {
        let xml = r#"<?xml version="1.0"?>
            <rss><channel>
              <title>Portada</title>
              <item><title><![CDATA[Primera & noticia]]></title><link>a</link></item>
              <item>
                <title>Segunda &amp; &quot;última&quot;</title>
              </item>
            </channel></rss>"#;
        assert_eq!(
            rss_titles(xml),
            vec!["Primera & noticia", "Segunda & \"última\""]
        );
        assert!(rss_titles("<rss></rss>").is_empty());
    }
}
