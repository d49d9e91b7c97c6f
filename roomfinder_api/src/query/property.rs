use url::Url;

use crate::types::PropertyKind;

use super::common::{Query, QueryCommon};

/// Query for the public property listing.
#[derive(Default)]
pub struct PropertyQuery {
    pub common: QueryCommon,
    pub search: Option<String>,
    pub city: Option<String>,
    pub kind: Option<PropertyKind>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl Query for PropertyQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        if let Some(search) = &self.search {
            url.query_pairs_mut().append_pair("search", search.as_str());
        }
        if let Some(city) = &self.city {
            url.query_pairs_mut().append_pair("city", city.as_str());
        }
        if let Some(kind) = self.kind {
            url.query_pairs_mut()
                .append_pair("type", kind.to_string().as_str());
        }
        if let Some(min_price) = self.min_price {
            url.query_pairs_mut()
                .append_pair("minPrice", &min_price.to_string());
        }
        if let Some(max_price) = self.max_price {
            url.query_pairs_mut()
                .append_pair("maxPrice", &max_price.to_string());
        }
        url
    }
}

impl PropertyQuery {
    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }
    pub fn with_city(mut self, city: &str) -> Self {
        self.city = Some(city.to_string());
        self
    }
    pub fn with_kind(mut self, kind: PropertyKind) -> Self {
        self.kind = Some(kind);
        self
    }
    pub fn with_price_range(mut self, min_price: Option<f64>, max_price: Option<f64>) -> Self {
        self.min_price = min_price;
        self.max_price = max_price;
        self
    }
}
