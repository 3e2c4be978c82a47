use quiz_core::model::{CategoryId, PlayerProgress, StarRating};
use storage::repository::ProgressRepository;
use storage::sqlite::SqliteRepository;

async fn connect(name: &str) -> SqliteRepository {
    let url = format!("sqlite:file:{name}?mode=memory&cache=shared");
    let repo = SqliteRepository::connect(&url).await.expect("connect");
    repo.migrate().await.expect("migrate");
    repo
}

#[tokio::test]
async fn sqlite_fresh_database_has_no_record() {
    let repo = connect("memdb_fresh").await;
    assert!(repo.load().await.expect("load").is_none());
}

#[tokio::test]
async fn sqlite_roundtrip_persists_all_fields() {
    let repo = connect("memdb_roundtrip").await;

    let mut progress = PlayerProgress::default();
    progress.record_completion(CategoryId::new(1), 10);
    progress.record_completion(CategoryId::new(2), 7);
    progress.set_background_gradient(vec!["#4A148C".into(), "#00BCD4".into()]);

    repo.save(&progress).await.expect("save");
    let loaded = repo.load().await.expect("load").expect("record present");

    assert_eq!(loaded, progress);
    assert_eq!(loaded.unlocked_categories(), 2);
    assert_eq!(loaded.stars_for(CategoryId::new(1)), StarRating::Three);
    assert_eq!(loaded.stars_for(CategoryId::new(2)), StarRating::Two);
    assert_eq!(loaded.total_attempts(), 20);
    assert_eq!(loaded.correct_answers(), 17);
}

#[tokio::test]
async fn sqlite_save_overwrites_previous_record() {
    let repo = connect("memdb_overwrite").await;

    let mut first = PlayerProgress::default();
    first.record_completion(CategoryId::new(1), 10);
    repo.save(&first).await.expect("save first");

    // Reset back to defaults is just another write over the same key.
    let second = PlayerProgress::default();
    repo.save(&second).await.expect("save second");

    let loaded = repo.load().await.expect("load").expect("record present");
    assert_eq!(loaded, PlayerProgress::default());
}

#[tokio::test]
async fn sqlite_migrations_are_idempotent() {
    let repo = connect("memdb_idempotent").await;
    repo.migrate().await.expect("second migrate");

    let progress = PlayerProgress::default();
    repo.save(&progress).await.expect("save");
    assert!(repo.load().await.expect("load").is_some());
}
