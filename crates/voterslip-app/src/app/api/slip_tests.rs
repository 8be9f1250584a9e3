//! Unit tests for the slip, vCard, and share endpoints.

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
                share_origin: Some("https://slip.example".to_owned()),
                photo_url: None,
            },
            logging: LoggingConfig {
                level: "info".to_owned(),
            },
        }
    }

    fn demo_service() -> Service {
        let router = Router::new()
            .hoop(StoreHandler {
                store: Arc::new(MemoryStore::demo()),
            })
            .hoop(ConfigHandler {
                settings: settings(),
            })
            .push(routes());
        Service::new(router)
    }

    #[tokio::test]
    async fn test_slip_download_is_html_attachment() {
        let service = demo_service();

        let mut resp = TestClient::get("http://127.0.0.1:8136/api/voters/9876543210/slip")
            .send(&service)
            .await;

        assert_eq!(resp.status_code, Some(StatusCode::OK));
        let disposition = resp
            .headers()
            .get("content-disposition")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_owned();
        assert_eq!(
            disposition,
            "attachment; filename=\"Asha_Verma_VotingSlip.html\""
        );

        let body = resp.take_string().await.expect("body");
        assert!(body.contains("<p>Name: Asha Verma</p>"));
        assert!(body.contains("Ballot No: 136"));
    }

    #[tokio::test]
    async fn test_slip_text_is_copy_blurb() {
        let service = demo_service();

        let mut resp = TestClient::get("http://127.0.0.1:8136/api/voters/9876543210/slip/text")
            .send(&service)
            .await;

        assert_eq!(resp.status_code, Some(StatusCode::OK));
        let body = resp.take_string().await.expect("body");
        assert!(body.starts_with("BCD Election 2026 Voting Slip\nName: Asha Verma\n"));
        assert!(body.ends_with("Ballot No: 136"));
    }

    #[tokio::test]
    async fn test_vcard_download() {
        let service = demo_service();

        let mut resp = TestClient::get("http://127.0.0.1:8136/api/voters/9876543210/vcard")
            .send(&service)
            .await;

        assert_eq!(resp.status_code, Some(StatusCode::OK));
        let content_type = resp
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_owned();
        assert!(content_type.starts_with("text/vcard"));

        let body = resp.take_string().await.expect("body");
        assert!(body.starts_with("BEGIN:VCARD\r\nVERSION:3.0\r\n"));
        assert!(body.contains("TEL:9876543210\r\n"));
    }

    #[tokio::test]
    async fn test_whatsapp_share_payload() {
        let service = demo_service();

        let mut resp =
            TestClient::get("http://127.0.0.1:8136/api/voters/9876543210/share/whatsapp")
                .send(&service)
                .await;

        assert_eq!(resp.status_code, Some(StatusCode::OK));
        let body: serde_json::Value = resp.take_json().await.expect("json body");
        let url = body["url"].as_str().expect("url field");
        assert!(url.starts_with("https://wa.me/?text="));
        let message = body["message"].as_str().expect("message field");
        assert!(message.contains("Name: Asha Verma"));
        assert!(message.ends_with("View Slip:\nhttps://slip.example"));
    }

    #[tokio::test]
    async fn test_unknown_key_renders_not_found() {
        let service = demo_service();

        for path in ["slip", "slip/text", "vcard", "share/whatsapp"] {
            let mut resp = TestClient::get(format!(
                "http://127.0.0.1:8136/api/voters/0000000000/{path}"
            ))
            .send(&service)
            .await;

            assert_eq!(resp.status_code, Some(StatusCode::NOT_FOUND), "{path}");
            let body: serde_json::Value = resp.take_json().await.expect("json body");
            assert_eq!(body["error"], "Voter not found");
        }
    }
}
