//! Response-envelope normalization.
//!
//! The backend emits list payloads in several competing shapes: the
//! canonical `{success, data: {items, pagination}}`, a flat legacy
//! `{message, items, pagination}`, and a nested legacy `{data: {items,
//! pagination}}`. Pagination metadata likewise arrives under two field-name
//! conventions (`page`/`currentPage`, `pages`/`totalPages`, and so on).
//! Every shape is reconciled here, behind one module boundary, so the rest
//! of the workspace only ever sees [`ListPage`] and [`PageMeta`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::Error;

/// Items per page when neither the caller nor the backend names a limit.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

const UNRECOGNIZED_SHAPE: &str = "Unexpected response from server";

/// Canonical pagination record.
///
/// Construction clamps every field to its valid range, so a `PageMeta`
/// always satisfies `current_page >= 1`, `total_pages >= 1`,
/// `items_per_page >= 1`, and `total_items >= 0` regardless of what the
/// backend sent.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub current_page: i64,
    pub total_pages: i64,
    pub total_items: i64,
    pub items_per_page: i64,
}

impl PageMeta {
    pub fn new(current_page: i64, total_pages: i64, total_items: i64, items_per_page: i64) -> Self {
        Self {
            current_page: current_page.max(1),
            total_pages: total_pages.max(1),
            total_items: total_items.max(0),
            items_per_page: items_per_page.max(1),
        }
    }

    /// The default record for an empty or unrecognized response:
    /// page 1 of 1, zero items, the requested limit (or 10) per page.
    pub fn empty(requested_limit: Option<i64>) -> Self {
        Self::new(1, 1, 0, requested_limit.unwrap_or(DEFAULT_PAGE_SIZE))
    }
}

impl Default for PageMeta {
    fn default() -> Self {
        Self::empty(None)
    }
}

/// One normalized page of a list endpoint: the uniform result every
/// consumer is written against.
#[derive(Debug, Clone)]
pub struct ListPage<T> {
    /// False only for soft failures (explicit `success: false` or an
    /// unrecognized shape); the page is still renderable as an empty state.
    pub success: bool,
    pub message: Option<String>,
    pub items: Vec<T>,
    pub pagination: PageMeta,
}

impl<T> ListPage<T> {
    /// A successful page with no items, used as the graceful fallback when
    /// a read-only listing cannot be fetched at all.
    pub fn empty(requested_limit: Option<i64>) -> Self {
        Self {
            success: true,
            message: None,
            items: Vec::new(),
            pagination: PageMeta::empty(requested_limit),
        }
    }

    fn failure(message: String, requested_limit: Option<i64>) -> Self {
        Self {
            success: false,
            message: Some(message),
            items: Vec::new(),
            pagination: PageMeta::empty(requested_limit),
        }
    }
}

/// Normalizes a list response into a [`ListPage`], whichever envelope
/// shape arrived.
///
/// `entity_key` is the plural field the backend keys the items under
/// (`"bookings"`, `"reviews"`, ...). An unrecognized shape degrades to a
/// soft failure with a best-effort message; it never panics or errors, so
/// callers can always render something.
pub fn normalize_list<T: DeserializeOwned>(
    body: &Value,
    entity_key: &str,
    requested_limit: Option<i64>,
) -> ListPage<T> {
    let message = body_message(body);
    if matches!(body.get("success"), Some(Value::Bool(false))) {
        return ListPage::failure(
            message.unwrap_or_else(|| UNRECOGNIZED_SHAPE.to_string()),
            requested_limit,
        );
    }

    // Canonical and nested-legacy shapes keep the payload under `data`;
    // the flat legacy shape keys the items on the body itself.
    let containers = [body.get("data"), Some(body)];
    for container in containers.into_iter().flatten() {
        let items = match items_in(container, entity_key) {
            Some(items) => items,
            None => continue,
        };
        let pagination = container.get("pagination").or_else(|| body.get("pagination"));
        return ListPage {
            success: true,
            message,
            items: decode_items(items, entity_key),
            pagination: reconcile_pagination(pagination, requested_limit),
        };
    }

    tracing::warn!(entity = entity_key, "response matched no known list envelope");
    ListPage::failure(
        message.unwrap_or_else(|| UNRECOGNIZED_SHAPE.to_string()),
        requested_limit,
    )
}

/// Normalizes a single-resource response.
///
/// Accepts `{success, data: {entity}}`, `{data: entity}`, `{entityKey:
/// entity}`, and a bare entity object, in that order of preference.
pub fn normalize_single<T: DeserializeOwned>(body: &Value, entity_key: &str) -> Result<T, Error> {
    if matches!(body.get("success"), Some(Value::Bool(false))) {
        return Err(Error::Api {
            status: 200,
            message: body_message(body).unwrap_or_else(|| UNRECOGNIZED_SHAPE.to_string()),
        });
    }

    let data = body.get("data");
    let candidates = [
        data.and_then(|d| d.get(entity_key)),
        data,
        body.get(entity_key),
        Some(body),
    ];
    for candidate in candidates.into_iter().flatten() {
        if !candidate.is_object() {
            continue;
        }
        if let Ok(entity) = serde_json::from_value::<T>(candidate.clone()) {
            return Ok(entity);
        }
    }

    tracing::warn!(entity = entity_key, "response matched no known resource envelope");
    Err(Error::UnexpectedShape)
}

/// Returns the backend's message for an explicit `success: false` body,
/// if that is what this is.
pub(crate) fn failure_message(body: &Value) -> Option<String> {
    match body.get("success") {
        Some(Value::Bool(false)) => {
            Some(body_message(body).unwrap_or_else(|| UNRECOGNIZED_SHAPE.to_string()))
        }
        _ => None,
    }
}

/// Reconciles a pagination object into the canonical [`PageMeta`].
///
/// Both field-name conventions are accepted; where both names are present
/// the short legacy name wins (`page` over `currentPage`, `pages` over
/// `totalPages`, `total` over `totalItems`, `limit` over `itemsPerPage`).
pub(crate) fn reconcile_pagination(
    pagination: Option<&Value>,
    requested_limit: Option<i64>,
) -> PageMeta {
    let obj = match pagination.and_then(Value::as_object) {
        Some(obj) => obj,
        None => return PageMeta::empty(requested_limit),
    };
    PageMeta::new(
        first_i64(obj, &["page", "currentPage"]).unwrap_or(1),
        first_i64(obj, &["pages", "totalPages"]).unwrap_or(1),
        first_i64(obj, &["total", "totalItems"]).unwrap_or(0),
        first_i64(obj, &["limit", "itemsPerPage"])
            .or(requested_limit)
            .unwrap_or(DEFAULT_PAGE_SIZE),
    )
}

fn items_in<'a>(container: &'a Value, entity_key: &str) -> Option<&'a Vec<Value>> {
    match container {
        Value::Array(items) => Some(items),
        Value::Object(obj) => obj.get(entity_key).and_then(Value::as_array),
        _ => None,
    }
}

fn decode_items<T: DeserializeOwned>(items: &[Value], entity_key: &str) -> Vec<T> {
    items
        .iter()
        .filter_map(|item| match serde_json::from_value(item.clone()) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!(entity = entity_key, "skipping undecodable item: {}", e);
                None
            }
        })
        .collect()
}

fn first_i64(obj: &Map<String, Value>, keys: &[&str]) -> Option<i64> {
    keys.iter().find_map(|key| {
        let value = obj.get(*key)?;
        value.as_i64().or_else(|| value.as_f64().map(|f| f as i64))
    })
}

fn body_message(body: &Value) -> Option<String> {
    body.get("message")
        .or_else(|| body.get("error"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Item {
        id: String,
    }

    fn ids(page: &ListPage<Item>) -> Vec<&str> {
        page.items.iter().map(|i| i.id.as_str()).collect()
    }

    // -- shape detection --

    #[test]
    fn canonical_shape() {
        let body = json!({
            "success": true,
            "data": {
                "bookings": [{"id": "b1"}],
                "pagination": {"currentPage": 2, "totalPages": 5, "totalItems": 42, "itemsPerPage": 10}
            }
        });
        let page = normalize_list::<Item>(&body, "bookings", None);
        assert!(page.success);
        assert_eq!(ids(&page), vec!["b1"]);
        assert_eq!(page.pagination, PageMeta::new(2, 5, 42, 10));
    }

    #[test]
    fn flat_legacy_shape() {
        // The scenario from the wire: flat body, short pagination names.
        let body = json!({
            "message": "ok",
            "bookings": [{"id": "b1"}],
            "pagination": {"page": 2, "pages": 5, "total": 42, "limit": 10}
        });
        let page = normalize_list::<Item>(&body, "bookings", None);
        assert!(page.success);
        assert_eq!(ids(&page), vec!["b1"]);
        assert_eq!(page.pagination, PageMeta::new(2, 5, 42, 10));
    }

    #[test]
    fn nested_legacy_shape() {
        let body = json!({
            "data": {
                "bookings": [{"id": "b1"}],
                "pagination": {"page": 2, "pages": 5, "total": 42, "limit": 10}
            }
        });
        let page = normalize_list::<Item>(&body, "bookings", None);
        assert!(page.success);
        assert_eq!(ids(&page), vec!["b1"]);
        assert_eq!(page.pagination, PageMeta::new(2, 5, 42, 10));
    }

    #[test]
    fn all_shapes_agree() {
        let canonical = json!({"success": true, "data": {"bookings": [{"id": "x"}],
            "pagination": {"currentPage": 1, "totalPages": 3, "totalItems": 25, "itemsPerPage": 10}}});
        let flat = json!({"bookings": [{"id": "x"}],
            "pagination": {"page": 1, "pages": 3, "total": 25, "limit": 10}});
        let nested = json!({"data": {"bookings": [{"id": "x"}],
            "pagination": {"page": 1, "pages": 3, "total": 25, "limit": 10}}});
        for body in [canonical, flat, nested] {
            let page = normalize_list::<Item>(&body, "bookings", None);
            assert!(page.success);
            assert_eq!(ids(&page), vec!["x"]);
            assert_eq!(page.pagination, PageMeta::new(1, 3, 25, 10));
        }
    }

    #[test]
    fn bare_array_body() {
        let body = json!([{"id": "a"}, {"id": "b"}]);
        let page = normalize_list::<Item>(&body, "items", Some(20));
        assert!(page.success);
        assert_eq!(ids(&page), vec!["a", "b"]);
        assert_eq!(page.pagination, PageMeta::empty(Some(20)));
    }

    #[test]
    fn unrecognized_shape_is_soft_failure() {
        let body = json!({"error": "teapot"});
        let page = normalize_list::<Item>(&body, "bookings", Some(25));
        assert!(!page.success);
        assert_eq!(page.message.as_deref(), Some("teapot"));
        assert!(page.items.is_empty());
        assert_eq!(page.pagination, PageMeta::new(1, 1, 0, 25));
    }

    #[test]
    fn explicit_failure_wins_over_payload() {
        let body = json!({
            "success": false,
            "message": "session expired",
            "bookings": [{"id": "b1"}]
        });
        let page = normalize_list::<Item>(&body, "bookings", None);
        assert!(!page.success);
        assert_eq!(page.message.as_deref(), Some("session expired"));
        assert!(page.items.is_empty());
    }

    #[test]
    fn undecodable_items_are_skipped() {
        let body = json!({"bookings": [{"id": "ok"}, {"id": 7}, 42]});
        let page = normalize_list::<Item>(&body, "bookings", None);
        assert!(page.success);
        assert_eq!(ids(&page), vec!["ok"]);
    }

    // -- pagination reconciliation --

    #[test]
    fn legacy_names_take_precedence() {
        let pagination = json!({
            "page": 3, "currentPage": 9,
            "pages": 7, "totalPages": 99,
            "total": 61, "totalItems": 999,
            "limit": 9, "itemsPerPage": 50
        });
        let meta = reconcile_pagination(Some(&pagination), None);
        assert_eq!(meta, PageMeta::new(3, 7, 61, 9));
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let pagination = json!({"page": 0, "pages": -2, "total": -5, "limit": 0});
        let meta = reconcile_pagination(Some(&pagination), None);
        assert_eq!(meta.current_page, 1);
        assert_eq!(meta.total_pages, 1);
        assert_eq!(meta.total_items, 0);
        assert_eq!(meta.items_per_page, 1);
    }

    #[test]
    fn missing_pagination_uses_requested_limit() {
        let meta = reconcile_pagination(None, Some(25));
        assert_eq!(meta, PageMeta::new(1, 1, 0, 25));
        let meta = reconcile_pagination(None, None);
        assert_eq!(meta.items_per_page, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn partial_pagination_fills_defaults() {
        let pagination = json!({"total": 12});
        let meta = reconcile_pagination(Some(&pagination), Some(4));
        assert_eq!(meta, PageMeta::new(1, 1, 12, 4));
    }

    #[test]
    fn float_counts_are_accepted() {
        let pagination = json!({"page": 2.0, "total": 42.0});
        let meta = reconcile_pagination(Some(&pagination), None);
        assert_eq!(meta.current_page, 2);
        assert_eq!(meta.total_items, 42);
    }

    // -- single resources --

    #[test]
    fn single_from_canonical() {
        let body = json!({"success": true, "data": {"booking": {"id": "b9"}}});
        let item: Item = normalize_single(&body, "booking").unwrap();
        assert_eq!(item.id, "b9");
    }

    #[test]
    fn single_from_data_object() {
        let body = json!({"data": {"id": "b9"}});
        let item: Item = normalize_single(&body, "booking").unwrap();
        assert_eq!(item.id, "b9");
    }

    #[test]
    fn single_from_bare_entity() {
        let body = json!({"id": "b9"});
        let item: Item = normalize_single(&body, "booking").unwrap();
        assert_eq!(item.id, "b9");
    }

    #[test]
    fn single_failure_carries_message() {
        let body = json!({"success": false, "message": "not yours"});
        let err = normalize_single::<Item>(&body, "booking").unwrap_err();
        match err {
            Error::Api { message, .. } => assert_eq!(message, "not yours"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn single_unrecognized_shape() {
        let body = json!({"note": []});
        assert!(matches!(
            normalize_single::<Item>(&body, "booking"),
            Err(Error::UnexpectedShape)
        ));
    }
}
