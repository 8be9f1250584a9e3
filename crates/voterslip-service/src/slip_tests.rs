//! Unit tests for the slip and share formatters.

#[cfg(test)]
mod tests {
    use voterslip_core::config::CampaignConfig;
    use voterslip_store::record::Voter;

    use crate::slip::{
        copy_text, slip_file_name, slip_html, vcard, vcard_file_name, whatsapp_message,
        whatsapp_share_url,
    };

    fn campaign() -> CampaignConfig {
        CampaignConfig {
            candidate_name: "Vaibhav Jain".to_owned(),
            ballot_number: "136".to_owned(),
            election_label: "BCD Election 2026".to_owned(),
            share_origin: Some("https://slip.example".to_owned()),
            photo_url: None,
        }
    }

    fn voter() -> Voter {
        Voter {
            id: "9876543210".to_owned(),
            sr_no: "1".to_owned(),
            name: "Asha Verma".to_owned(),
            voter_id: "BCD/1001".to_owned(),
            mobile: "9876543210".to_owned(),
            address: "12 Court Lane".to_owned(),
        }
    }

    #[test]
    fn test_slip_html_carries_campaign_and_voter_details() {
        let html = slip_html(&voter(), &campaign());

        assert!(html.contains("Vaibhav Jain"));
        assert!(html.contains("Ballot No: 136"));
        assert!(html.contains("<p>Name: Asha Verma</p>"));
        assert!(html.contains("<p>Voter ID: BCD/1001</p>"));
        assert!(html.contains("<p>Mobile: 9876543210</p>"));
        assert!(html.contains("<p>Address: 12 Court Lane</p>"));
        assert!(!html.contains("<img"), "no photo configured, no img tag");
    }

    #[test]
    fn test_slip_html_includes_photo_when_configured() {
        let mut campaign = campaign();
        campaign.photo_url = Some("https://slip.example/candidate.jpeg".to_owned());

        let html = slip_html(&voter(), &campaign);

        assert!(html.contains("<img src=\"https://slip.example/candidate.jpeg\" />"));
    }

    #[test]
    fn test_slip_html_escapes_voter_fields() {
        let mut voter = voter();
        voter.name = "A <b>&</b> B".to_owned();

        let html = slip_html(&voter, &campaign());

        assert!(html.contains("A &lt;b&gt;&amp;&lt;/b&gt; B"));
        assert!(!html.contains("<b>&</b>"));
    }

    #[test]
    fn test_slip_file_name_sanitizes() {
        let mut voter = voter();
        voter.name = "N. K. Rao".to_owned();
        assert_eq!(slip_file_name(&voter), "N_K_Rao_VotingSlip.html");

        voter.name = String::new();
        assert_eq!(slip_file_name(&voter), "voter_VotingSlip.html");
    }

    #[test]
    fn test_copy_text_layout() {
        let text = copy_text(&voter(), &campaign());

        assert_eq!(
            text,
            "BCD Election 2026 Voting Slip\nName: Asha Verma\nSerial No: 1\nVoter ID: BCD/1001\nCandidate: Vaibhav Jain\nBallot No: 136"
        );
    }

    #[test]
    fn test_whatsapp_message_prefers_configured_origin() {
        let message = whatsapp_message(&voter(), &campaign(), "http://localhost:8136");
        assert!(message.ends_with("View Slip:\nhttps://slip.example"));

        let mut campaign = campaign();
        campaign.share_origin = None;
        let message = whatsapp_message(&voter(), &campaign, "http://localhost:8136");
        assert!(message.ends_with("View Slip:\nhttp://localhost:8136"));
    }

    #[test]
    fn test_whatsapp_share_url_percent_encodes() {
        let url =
            whatsapp_share_url(&voter(), &campaign(), "http://localhost:8136").expect("share url");

        assert!(url.starts_with("https://wa.me/?text="));
        assert!(!url.contains(' '), "spaces must be encoded");
        assert!(url.contains("Asha"));
    }

    #[test]
    fn test_vcard_uses_crlf_and_escapes() {
        let mut voter = voter();
        voter.name = "Verma; Asha, Adv.".to_owned();

        let card = vcard(&voter);

        assert!(card.starts_with("BEGIN:VCARD\r\nVERSION:3.0\r\n"));
        assert!(card.ends_with("END:VCARD\r\n"));
        assert!(card.contains("FN:Verma\\; Asha\\, Adv.\r\n"));
        assert!(card.contains("TEL:9876543210\r\n"));
    }

    #[test]
    fn test_vcard_file_name() {
        assert_eq!(vcard_file_name(&voter()), "Asha_Verma.vcf");
    }
}
