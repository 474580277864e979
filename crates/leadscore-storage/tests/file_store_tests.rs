use leadscore_domain::{Intent, Lead, Offer, ScoredLead};
use leadscore_storage::{ArtifactStore, FileStore, Slot, StoreError};
use tempfile::tempdir;

fn lead(name: &str) -> Lead {
    Lead {
        name: name.to_string(),
        role: "Head of Growth".to_string(),
        company: "FlowMetrics".to_string(),
        industry: "SaaS".to_string(),
        location: "Berlin".to_string(),
        linkedin_bio: "Scaling B2B pipelines".to_string(),
    }
}

#[tokio::test]
async fn test_missing_files_are_not_found() {
    let dir = tempdir().unwrap();
    let store = FileStore::new(dir.path());

    for slot in Slot::ALL {
        let err = store.get_raw(slot).await.unwrap_err();
        assert!(err.is_not_found(), "slot {slot} should be missing");
    }
}

#[tokio::test]
async fn test_creates_data_dir_on_first_write() {
    let dir = tempdir().unwrap();
    let data_dir = dir.path().join("nested").join("data");
    let store = FileStore::new(&data_dir);

    store.put_offer(&Offer::new("AI Outreach Automation", vec![], vec![])).await.unwrap();

    assert!(data_dir.join("offer.json").exists());
    assert!(!data_dir.join("offer.tmp").exists());
}

#[tokio::test]
async fn test_leads_keep_their_order() {
    let dir = tempdir().unwrap();
    let store = FileStore::new(dir.path());
    let leads = vec![lead("Ava"), lead("Ben"), lead("Cara")];

    store.put_leads(&leads).await.unwrap();

    assert_eq!(store.get_leads().await.unwrap(), leads);
}

#[tokio::test]
async fn test_results_are_replaced_not_merged() {
    let dir = tempdir().unwrap();
    let store = FileStore::new(dir.path());

    let first = vec![
        ScoredLead {
            name: "Ava".into(),
            role: "CEO".into(),
            company: "A".into(),
            intent: Intent::High,
            score: 90,
            reasoning: "Decision maker.".into(),
        },
        ScoredLead {
            name: "Ben".into(),
            role: "Intern".into(),
            company: "B".into(),
            intent: Intent::Low,
            score: 10,
            reasoning: "No authority.".into(),
        },
    ];
    store.put_results(&first).await.unwrap();

    let second = vec![first[1].clone()];
    store.put_results(&second).await.unwrap();

    let stored = store.get_results().await.unwrap();
    assert_eq!(stored, second);
}

#[tokio::test]
async fn test_corrupt_file_is_serialization_error() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("results.json"), "not json").unwrap();
    let store = FileStore::new(dir.path());

    let err = store.get_results().await.unwrap_err();
    assert!(matches!(err, StoreError::Serialization(_)));
}
