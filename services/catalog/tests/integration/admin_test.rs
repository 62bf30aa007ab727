use chrono::Utc;
use uuid::Uuid;

use streamflix_catalog::domain::repository::FavoriteRepository;
use streamflix_catalog::domain::types::{CatalogStats, ContentFilter, Favorite};
use streamflix_catalog::error::CatalogServiceError;
use streamflix_catalog::usecase::content::{ListCategoriesUseCase, ListContentsUseCase};
use streamflix_catalog::usecase::settings::{
    GetSettingsUseCase, UpdateSettingsInput, UpdateSettingsUseCase,
};
use streamflix_catalog::usecase::stats::GetStatsUseCase;
use streamflix_domain::account::AccountRole;

use crate::helpers::{
    MockAccountRepo, MockContentRepo, MockFavoriteRepo, MockProgressRepo, MockSettingsRepo,
    test_account, test_content, test_progress,
};

#[tokio::test]
async fn should_count_catalog_records() {
    let viewer = test_account("viewer@example.com", AccountRole::User);
    let admin = test_account("admin@example.com", AccountRole::Admin);
    let movie = test_content("Up", "family");
    let favorites = MockFavoriteRepo::default();
    favorites
        .insert_if_absent(&Favorite {
            id: Uuid::now_v7(),
            account_id: viewer.id,
            content_id: movie.id,
            created_at: Utc::now(),
        })
        .await
        .unwrap();
    let progress = MockProgressRepo::new(vec![test_progress(
        viewer.id,
        movie.id,
        10,
        100,
        Utc::now(),
    )]);

    let stats = GetStatsUseCase {
        accounts: MockAccountRepo::new(vec![viewer, admin]),
        contents: MockContentRepo::new(vec![movie]),
        favorites,
        progress,
    }
    .execute()
    .await
    .unwrap();

    assert_eq!(
        stats,
        CatalogStats {
            accounts: 2,
            admins: 1,
            contents: 1,
            favorites: 1,
            progress_records: 1,
        }
    );
}

#[tokio::test]
async fn should_default_registration_to_enabled() {
    let settings = GetSettingsUseCase {
        settings: MockSettingsRepo::default(),
    }
    .execute()
    .await
    .unwrap();
    assert!(settings.registration_enabled);
}

#[tokio::test]
async fn should_update_registration_policy() {
    let repo = MockSettingsRepo::default();
    let updated = UpdateSettingsUseCase {
        settings: repo.clone(),
    }
    .execute(UpdateSettingsInput {
        registration_enabled: Some(false),
    })
    .await
    .unwrap();
    assert!(!updated.registration_enabled);

    let read = GetSettingsUseCase { settings: repo }
        .execute()
        .await
        .unwrap();
    assert!(!read.registration_enabled);
}

#[tokio::test]
async fn should_reject_empty_settings_update() {
    let result = UpdateSettingsUseCase {
        settings: MockSettingsRepo::default(),
    }
    .execute(UpdateSettingsInput {
        registration_enabled: None,
    })
    .await;
    assert!(matches!(result, Err(CatalogServiceError::MissingData)));
}

#[tokio::test]
async fn should_filter_contents_by_category_and_search() {
    let contents = MockContentRepo::new(vec![
        test_content("The Dark Knight", "action"),
        test_content("Dark Waters", "drama"),
        test_content("Mad Max", "action"),
    ]);
    let usecase = ListContentsUseCase {
        contents: contents.clone(),
    };

    let found = usecase
        .execute(ContentFilter {
            category: Some("action".to_owned()),
            search: Some("DARK".to_owned()),
        })
        .await
        .unwrap();
    let titles: Vec<&str> = found.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["The Dark Knight"]);

    let categories = ListCategoriesUseCase { contents }.execute().await.unwrap();
    assert_eq!(categories, vec!["action", "drama"]);
}
