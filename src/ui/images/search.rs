use serde::{Deserialize, Serialize};

/// Placeholder the autocomplete widget replaces with the typed query.
pub const QUERY_PLACEHOLDER: &str = "%QUERY";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HitLinks {
    #[serde(rename = "self", default)]
    pub self_link: Option<Link>,
    #[serde(default)]
    pub thumbnail: Option<Link>,
}

/// One entry of a search response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(default, rename = "type")]
    pub hit_type: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "_links", default)]
    pub links: HitLinks,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Embedded {
    #[serde(default)]
    pub results: Vec<SearchHit>,
}

/// Hypermedia envelope returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchEnvelope {
    #[serde(rename = "_embedded", default)]
    pub embedded: Embedded,
}

/// Autocomplete entry for an artwork hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtworkSuggestion {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: Option<String>,
    pub thumbnail_image: Option<String>,
    #[serde(rename = "type")]
    pub hit_type: String,
}

impl SearchHit {
    pub fn is_artwork(&self) -> bool {
        self.hit_type
            .as_deref()
            .is_some_and(|t| t.eq_ignore_ascii_case("artwork"))
    }

    /// Trailing path segment of the self link, if the hit has one.
    pub fn id(&self) -> Option<&str> {
        let href = self.links.self_link.as_ref()?.href.as_str();
        let id = href.rsplit_once('/').map_or(href, |(_, id)| id);
        (!id.is_empty()).then_some(id)
    }

    fn to_suggestion(&self) -> Option<ArtworkSuggestion> {
        if !self.is_artwork() {
            return None;
        }
        Some(ArtworkSuggestion {
            id: self.id()?.to_string(),
            title: self.title.clone(),
            thumbnail_image: self.links.thumbnail.as_ref().map(|l| l.href.clone()),
            hit_type: self.hit_type.clone().unwrap_or_default(),
        })
    }
}

/// Map every hit to a suggestion, `None` for anything that is not an
/// artwork. Positions line up with `envelope.embedded.results`.
pub fn filter_autocomplete(envelope: &SearchEnvelope) -> Vec<Option<ArtworkSuggestion>> {
    envelope
        .embedded
        .results
        .iter()
        .map(SearchHit::to_suggestion)
        .collect()
}

/// Artwork suggestions only, in result order.
pub fn artwork_suggestions(envelope: &SearchEnvelope) -> Vec<ArtworkSuggestion> {
    filter_autocomplete(envelope).into_iter().flatten().collect()
}

/// Search URL handed to the autocomplete widget.
pub fn search_url_template(base_url: &str) -> String {
    format!(
        "{}/api/search?q={}",
        base_url.trim_end_matches('/'),
        QUERY_PLACEHOLDER
    )
}
