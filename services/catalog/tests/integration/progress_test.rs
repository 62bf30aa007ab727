use chrono::{Duration, Utc};

use streamflix_catalog::domain::repository::ProgressRepository;
use streamflix_catalog::error::CatalogServiceError;
use streamflix_catalog::usecase::continue_watching::ListContinueWatchingUseCase;
use streamflix_catalog::usecase::progress::{
    GetProgressUseCase, UpsertProgressInput, UpsertProgressUseCase,
};
use streamflix_domain::id::{AccountId, ContentId};

use crate::helpers::{MockContentRepo, MockProgressRepo, test_content, test_progress};

fn input(watched_seconds: u32, total_seconds: u32) -> UpsertProgressInput {
    UpsertProgressInput {
        watched_seconds,
        total_seconds,
    }
}

#[tokio::test]
async fn should_keep_single_record_with_last_write() {
    let account = AccountId::generate();
    let movie = test_content("Heat", "crime");
    let progress = MockProgressRepo::default();
    let upsert = UpsertProgressUseCase {
        progress: progress.clone(),
        contents: MockContentRepo::new(vec![movie.clone()]),
    };

    upsert.execute(account, movie.id, input(300, 5400)).await.unwrap();
    upsert.execute(account, movie.id, input(600, 5400)).await.unwrap();

    let view = GetProgressUseCase {
        progress: progress.clone(),
    }
    .execute(account, movie.id)
    .await
    .unwrap();
    assert_eq!(view.watched_seconds, 600);
    assert_eq!(view.total_seconds, 5400);
    assert_eq!(progress.count().await.unwrap(), 1);
}

#[tokio::test]
async fn should_be_idempotent_for_identical_writes() {
    let account = AccountId::generate();
    let movie = test_content("Heat", "crime");
    let progress = MockProgressRepo::default();
    let upsert = UpsertProgressUseCase {
        progress: progress.clone(),
        contents: MockContentRepo::new(vec![movie.clone()]),
    };

    upsert.execute(account, movie.id, input(900, 5400)).await.unwrap();
    let first = progress.get(account, movie.id).await.unwrap().unwrap();
    upsert.execute(account, movie.id, input(900, 5400)).await.unwrap();
    let second = progress.get(account, movie.id).await.unwrap().unwrap();

    assert_eq!(first.watched_seconds, second.watched_seconds);
    assert_eq!(first.total_seconds, second.total_seconds);
    assert!(second.last_watched >= first.last_watched);
    assert_eq!(progress.count().await.unwrap(), 1);
}

#[tokio::test]
async fn should_keep_accounts_separate() {
    let (alice, bob) = (AccountId::generate(), AccountId::generate());
    let movie = test_content("Heat", "crime");
    let progress = MockProgressRepo::default();
    let upsert = UpsertProgressUseCase {
        progress: progress.clone(),
        contents: MockContentRepo::new(vec![movie.clone()]),
    };

    upsert.execute(alice, movie.id, input(100, 5400)).await.unwrap();

    let bob_view = GetProgressUseCase { progress }
        .execute(bob, movie.id)
        .await
        .unwrap();
    assert_eq!(bob_view.watched_seconds, 0);
    assert_eq!(bob_view.total_seconds, 0);
    assert!(bob_view.last_watched.is_none());
}

#[tokio::test]
async fn should_reject_progress_for_missing_content() {
    let upsert = UpsertProgressUseCase {
        progress: MockProgressRepo::default(),
        contents: MockContentRepo::default(),
    };
    let result = upsert
        .execute(AccountId::generate(), ContentId::generate(), input(1, 2))
        .await;
    assert!(matches!(result, Err(CatalogServiceError::ContentNotFound)));
}

#[tokio::test]
async fn should_list_continue_watching_from_tracked_progress() {
    let account = AccountId::generate();
    let now = Utc::now();
    let (oldest, newest, finished, barely) = (
        test_content("Oldest", "drama"),
        test_content("Newest", "drama"),
        test_content("Finished", "drama"),
        test_content("Barely", "drama"),
    );
    let progress = MockProgressRepo::new(vec![
        test_progress(account, oldest.id, 1000, 5400, now - Duration::days(2)),
        test_progress(account, finished.id, 5300, 5400, now - Duration::hours(1)),
        test_progress(account, newest.id, 2700, 5400, now),
        test_progress(account, barely.id, 60, 5400, now - Duration::minutes(1)),
    ]);
    let usecase = ListContinueWatchingUseCase {
        progress,
        contents: MockContentRepo::new(vec![oldest, newest, finished, barely]),
    };

    let entries = usecase.execute(account).await.unwrap();
    let titles: Vec<&str> = entries.iter().map(|e| e.content.title.as_str()).collect();
    assert_eq!(titles, vec!["Newest", "Oldest"]);
    assert_eq!(entries[0].progress.watched_seconds, 2700);
}

#[tokio::test]
async fn should_return_empty_continue_watching_without_progress() {
    let usecase = ListContinueWatchingUseCase {
        progress: MockProgressRepo::default(),
        contents: MockContentRepo::default(),
    };
    assert!(usecase.execute(AccountId::generate()).await.unwrap().is_empty());
}
