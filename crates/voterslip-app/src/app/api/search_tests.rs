//! Unit tests for the search endpoints.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use salvo::http::StatusCode;
    use salvo::test::{ResponseExt, TestClient};
    use salvo::{Router, Service};

    use voterslip_core::config::{
        CampaignConfig, LoggingConfig, ServerConfig, Settings, StoreConfig,
    };
    use voterslip_store::memory::MemoryStore;
    use voterslip_store::record::RawVoter;

    use crate::app::api::routes;
    use crate::config::ConfigHandler;
    use crate::store_handler::StoreHandler;

    fn settings() -> Settings {
        Settings {
            store: StoreConfig {
                base_url: String::new(),
                auth_token: None,
                voters_node: "BCD".to_owned(),
                name_index_node: "BCD_INDEX".to_owned(),
                timeout_secs: 5,
            },
            server: ServerConfig {
                host: "127.0.0.1".to_owned(),
                port: 8136,
                serve_origin: None,
            },
            campaign: CampaignConfig {
                candidate_name: "Vaibhav Jain".to_owned(),
                ballot_number: "136".to_owned(),
                election_label: "BCD Election 2026".to_owned(),
                share_origin: None,
                photo_url: None,
            },
            logging: LoggingConfig {
                level: "info".to_owned(),
            },
        }
    }

    fn service(store: Arc<MemoryStore>) -> Service {
        let router = Router::new()
            .hoop(StoreHandler { store })
            .hoop(ConfigHandler {
                settings: settings(),
            })
            .push(routes());
        Service::new(router)
    }

    fn raw(name: &str, mobile: &str) -> RawVoter {
        RawVoter {
            sr_no: Some("1".to_owned()),
            name: Some(name.to_owned()),
            voter_id: Some("V1".to_owned()),
            mobile: Some(mobile.to_owned()),
            address: Some("12 Court Lane".to_owned()),
        }
    }

    #[tokio::test]
    async fn test_combined_search_returns_json_array() {
        let store = Arc::new(
            MemoryStore::new().with_voter("9876543210", raw("Asha Verma", "9876543210")),
        );
        let service = service(store);

        let mut resp = TestClient::get(
            "http://127.0.0.1:8136/api/voters/search?q=%2B91-9876543210",
        )
        .send(&service)
        .await;

        assert_eq!(resp.status_code, Some(StatusCode::OK));
        let body: serde_json::Value = resp.take_json().await.expect("json body");
        let results = body.as_array().expect("array body");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0]["id"], "9876543210");
        assert_eq!(results[0]["name"], "Asha Verma");
    }

    #[tokio::test]
    async fn test_blank_query_renders_empty_list_without_reads() {
        let store = Arc::new(
            MemoryStore::new().with_voter("9876543210", raw("Asha Verma", "9876543210")),
        );
        let service = service(store.clone());

        let mut resp = TestClient::get("http://127.0.0.1:8136/api/voters/search")
            .send(&service)
            .await;

        assert_eq!(resp.status_code, Some(StatusCode::OK));
        assert_eq!(resp.take_string().await.expect("body"), "[]");
        assert_eq!(store.total_reads(), 0);
    }

    #[tokio::test]
    async fn test_phone_endpoint_scans_partial_numbers() {
        let store = Arc::new(
            MemoryStore::new().with_voter("record", raw("Asha Verma", "919876543210")),
        );
        let service = service(store);

        let mut resp =
            TestClient::get("http://127.0.0.1:8136/api/voters/search/phone?q=9876543210")
                .send(&service)
                .await;

        assert_eq!(resp.status_code, Some(StatusCode::OK));
        let body: serde_json::Value = resp.take_json().await.expect("json body");
        assert_eq!(body.as_array().expect("array body").len(), 1);
    }

    #[tokio::test]
    async fn test_name_endpoint_uses_index() {
        let store = Arc::new(
            MemoryStore::new()
                .with_voter("9876543210", raw("Vaibhav Jain", "9876543210"))
                .with_index_entry("vaibhav jain", &["9876543210"]),
        );
        let service = service(store);

        let mut resp = TestClient::get("http://127.0.0.1:8136/api/voters/search/name?q=jain")
            .send(&service)
            .await;

        assert_eq!(resp.status_code, Some(StatusCode::OK));
        let body: serde_json::Value = resp.take_json().await.expect("json body");
        assert_eq!(body[0]["name"], "Vaibhav Jain");
    }

    #[test_log::test(tokio::test)]
    async fn test_store_failure_renders_bad_gateway() {
        let store = Arc::new(
            MemoryStore::new()
                .with_voter("9876543210", raw("Asha Verma", "9876543210"))
                .with_fail_key("9876543210"),
        );
        let service = service(store);

        let mut resp = TestClient::get("http://127.0.0.1:8136/api/voters/search?q=9876543210")
            .send(&service)
            .await;

        assert_eq!(resp.status_code, Some(StatusCode::BAD_GATEWAY));
        let body: serde_json::Value = resp.take_json().await.expect("json body");
        assert_eq!(body["error"], "Lookup store unavailable");
    }
}
