//! Report query builder.

use chrono::NaiveDate;
use url::Url;

/// An immutable query against one public-reports endpoint: the endpoint
/// path, its filter parameters, and the page to request.
///
/// Pagination never mutates a caller's query; the fetcher derives a copy per
/// page with [`ReportQuery::for_page`].
#[derive(Debug, Clone)]
pub struct ReportQuery {
    pub endpoint: String,
    pub params: Vec<(String, String)>,
    /// Page number (1-indexed). Defaults to 1.
    pub page: i64,
}

impl ReportQuery {
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            params: Vec::new(),
            page: 1,
        }
    }

    /// Appends an arbitrary filter parameter.
    pub fn with_param(mut self, key: &str, value: &str) -> Self {
        self.params.push((key.to_string(), value.to_string()));
        self
    }

    /// Filters by delivery date, inclusive lower bound.
    pub fn with_delivery_date_from(self, date: NaiveDate) -> Self {
        self.with_param("deliveryDateFrom", &date.to_string())
    }

    /// Filters by delivery date, inclusive upper bound.
    pub fn with_delivery_date_to(self, date: NaiveDate) -> Self {
        self.with_param("deliveryDateTo", &date.to_string())
    }

    /// Filters by settlement point (e.g. `HB_HOUSTON`).
    pub fn with_settlement_point(self, settlement_point: &str) -> Self {
        self.with_param("settlementPoint", settlement_point)
    }

    /// Sets the page number (1-indexed).
    pub fn with_page(mut self, page: i64) -> Self {
        self.page = page;
        self
    }

    /// Derives the same query pointed at a different page.
    pub fn for_page(&self, page: i64) -> Self {
        let mut query = self.clone();
        query.page = page;
        query
    }

    /// Appends this query's parameters to the given URL, returning the
    /// modified URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        for (key, value) in self.params.iter() {
            url.query_pairs_mut().append_pair(key, value);
        }
        url.query_pairs_mut()
            .append_pair("page", &self.page.to_string());
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_url() -> Url {
        Url::parse("https://example.com/np4-190-cd/dam_stlmnt_pnt_prices").unwrap()
    }

    #[test]
    fn defaults_to_page_one() {
        let url = ReportQuery::new("np4-190-cd/dam_stlmnt_pnt_prices").add_to_url(&base_url());
        assert_eq!(url.query().unwrap(), "page=1");
    }

    #[test]
    fn appends_filters_and_page() {
        let query = ReportQuery::new("np4-190-cd/dam_stlmnt_pnt_prices")
            .with_delivery_date_from(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap())
            .with_delivery_date_to(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())
            .with_settlement_point("HB_HOUSTON")
            .with_page(3);
        let url = query.add_to_url(&base_url());
        let q = url.query().unwrap();
        assert!(q.contains("deliveryDateFrom=2024-07-01"));
        assert!(q.contains("deliveryDateTo=2025-03-01"));
        assert!(q.contains("settlementPoint=HB_HOUSTON"));
        assert!(q.contains("page=3"));
    }

    #[test]
    fn for_page_leaves_the_original_untouched() {
        let query = ReportQuery::new("ep").with_param("a", "b");
        let derived = query.for_page(5);
        assert_eq!(derived.page, 5);
        assert_eq!(derived.params, query.params);
        assert_eq!(query.page, 1);
    }
}
