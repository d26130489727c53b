use trace_core::models::{
    AccountMetadata, AccountNode, AnalysisReport, Edge, EndpointRef, FraudRing, ScanPayload,
    Summary, SuspiciousAccount, Topology,
};
use trace_session::{Dossier, SessionData};

fn sample_payload() -> ScanPayload {
    ScanPayload {
        analysis: AnalysisReport {
            summary: Summary {
                total_accounts_analyzed: 3,
                suspicious_accounts_flagged: 1,
                fraud_rings_detected: 1,
                processing_time_seconds: 0.1,
            },
            suspicious_accounts: vec![SuspiciousAccount {
                account_id: "ACC_001".to_string(),
                suspicion_score: 91.2,
                status: "FLAGGED".to_string(),
                detected_patterns: vec!["cycle_len_3".to_string()],
                ring_id: Some("RING_001".to_string()),
                metadata: AccountMetadata {
                    total_sent: 5000.0,
                    total_received: 4800.0,
                    tx_count: 7,
                },
            }],
            fraud_rings: vec![FraudRing {
                ring_id: "RING_001".to_string(),
                pattern_type: "cycle".to_string(),
                // GHOST is not in the node list; tolerated as an opaque id.
                member_accounts: vec!["ACC_001".to_string(), "GHOST".to_string()],
                risk_score: 91.2,
            }],
        },
        topology: Topology {
            nodes: vec![
                AccountNode { id: "ACC_001".to_string() },
                AccountNode { id: "ACC_002".to_string() },
                AccountNode { id: "ACC_003".to_string() },
            ],
            links: vec![Edge {
                source: EndpointRef::Id("ACC_001".to_string()),
                target: EndpointRef::Id("ACC_002".to_string()),
            }],
        },
    }
}

#[test]
fn flagged_account_gets_its_engine_entry() {
    let payload = sample_payload();
    let dossier = Dossier::for_account(&payload.analysis, "ACC_001");

    assert!(!dossier.is_clean());
    assert_eq!(dossier.account_id(), "ACC_001");
    assert_eq!(dossier.suspicion_score(), 91.2);
    assert_eq!(dossier.status(), "FLAGGED");
    assert_eq!(dossier.detected_patterns(), ["cycle_len_3"]);
    assert_eq!(dossier.metadata().tx_count, 7);
}

#[test]
fn clean_account_synthesizes_zeroed_dossier() {
    let payload = sample_payload();
    let dossier = Dossier::for_account(&payload.analysis, "ACC_003");

    assert!(dossier.is_clean());
    assert_eq!(dossier.account_id(), "ACC_003");
    assert_eq!(dossier.suspicion_score(), 0.0);
    assert_eq!(dossier.status(), "CLEAN");
    assert!(dossier.detected_patterns().is_empty());
    assert_eq!(dossier.metadata(), AccountMetadata::default());
}

#[test]
fn unknown_id_is_treated_as_clean_opaque_account() {
    let payload = sample_payload();
    let dossier = Dossier::for_account(&payload.analysis, "NEVER_SEEN");

    assert!(dossier.is_clean());
    assert_eq!(dossier.account_id(), "NEVER_SEEN");
}

#[test]
fn session_tracks_selection() {
    let mut session = SessionData::new(sample_payload());
    assert_eq!(session.selection(), None);
    assert!(session.selected_dossier().is_none());

    let dossier = session.select("ACC_002");
    assert!(dossier.is_clean());
    assert_eq!(session.selection(), Some("ACC_002"));
    assert_eq!(session.selected_dossier().unwrap(), dossier);

    session.clear_selection();
    assert_eq!(session.selection(), None);
}

#[test]
fn session_index_answers_adjacency() {
    let session = SessionData::new(sample_payload());

    assert!(session.index().are_adjacent("ACC_001", "ACC_002"));
    assert_eq!(session.index().links("ACC_003").len(), 0);
    assert_eq!(session.analysis().summary.total_accounts_analyzed, 3);
}
