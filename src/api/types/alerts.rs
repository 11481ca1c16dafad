//! Alert headers attached to successful mutating responses
//!
//! Each mutation announces itself with a pair of headers: an alert naming the
//! application, entity type and action, and a params header carrying the
//! affected id. Clients use these to surface notifications.

use axum::http::{HeaderMap, HeaderName, HeaderValue};

/// Header carrying the `{app}.{entity}.{action}` alert key
pub const ALERT_HEADER: HeaderName = HeaderName::from_static("x-team-manager-alert");

/// Header carrying the affected entity id
pub const PARAMS_HEADER: HeaderName = HeaderName::from_static("x-team-manager-params");

/// Headers announcing that an entity was created
pub fn entity_creation_alert(application_name: &str, entity_name: &str, id: &str) -> HeaderMap {
    alert_headers(application_name, entity_name, "created", id)
}

/// Headers announcing that an entity was updated
pub fn entity_update_alert(application_name: &str, entity_name: &str, id: &str) -> HeaderMap {
    alert_headers(application_name, entity_name, "updated", id)
}

/// Headers announcing that an entity was deleted
pub fn entity_deletion_alert(application_name: &str, entity_name: &str, id: &str) -> HeaderMap {
    alert_headers(application_name, entity_name, "deleted", id)
}

fn alert_headers(application_name: &str, entity_name: &str, action: &str, id: &str) -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(2);

    let alert = format!("{}.{}.{}", application_name, entity_name, action);
    headers.insert(ALERT_HEADER, header_value(&alert));
    headers.insert(PARAMS_HEADER, header_value(id));

    headers
}

/// Build a header value, falling back to empty for non-ASCII input
pub fn header_value(value: &str) -> HeaderValue {
    HeaderValue::from_str(value).unwrap_or_else(|_| HeaderValue::from_static(""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation_alert() {
        let headers = entity_creation_alert("teamManager", "teamProfile", "5");

        assert_eq!(
            headers.get(&ALERT_HEADER).unwrap(),
            "teamManager.teamProfile.created"
        );
        assert_eq!(headers.get(&PARAMS_HEADER).unwrap(), "5");
    }

    #[test]
    fn test_update_alert() {
        let headers = entity_update_alert("teamManager", "teamProfile", "5");

        assert_eq!(
            headers.get(&ALERT_HEADER).unwrap(),
            "teamManager.teamProfile.updated"
        );
    }

    #[test]
    fn test_deletion_alert() {
        let headers = entity_deletion_alert("teamManager", "teamProfile", "5");

        assert_eq!(
            headers.get(&ALERT_HEADER).unwrap(),
            "teamManager.teamProfile.deleted"
        );
        assert_eq!(headers.get(&PARAMS_HEADER).unwrap(), "5");
    }

    #[test]
    fn test_invalid_header_value_falls_back_to_empty() {
        assert_eq!(header_value("bad\nvalue"), "");
    }
}
