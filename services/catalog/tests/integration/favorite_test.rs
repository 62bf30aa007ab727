use chrono::{Duration, Utc};
use uuid::Uuid;

use streamflix_catalog::domain::repository::FavoriteRepository;
use streamflix_catalog::domain::types::Favorite;
use streamflix_catalog::error::CatalogServiceError;
use streamflix_catalog::usecase::favorite::{
    AddFavoriteUseCase, ListFavoritesUseCase, RemoveFavoriteUseCase,
};
use streamflix_domain::id::{AccountId, ContentId};

use crate::helpers::{MockContentRepo, MockFavoriteRepo, test_content};

#[tokio::test]
async fn should_add_favorite_once() {
    let account = AccountId::generate();
    let movie = test_content("Alien", "horror");
    let favorites = MockFavoriteRepo::default();
    let add = AddFavoriteUseCase {
        favorites: favorites.clone(),
        contents: MockContentRepo::new(vec![movie.clone()]),
    };

    add.execute(account, movie.id).await.unwrap();
    let again = add.execute(account, movie.id).await;

    assert!(matches!(
        again,
        Err(CatalogServiceError::FavoriteAlreadyExists)
    ));
    assert_eq!(favorites.count().await.unwrap(), 1);
}

#[tokio::test]
async fn should_reject_favorite_of_unknown_content() {
    let add = AddFavoriteUseCase {
        favorites: MockFavoriteRepo::default(),
        contents: MockContentRepo::default(),
    };
    let result = add
        .execute(AccountId::generate(), ContentId::generate())
        .await;
    assert!(matches!(result, Err(CatalogServiceError::ContentNotFound)));
}

#[tokio::test]
async fn should_list_newest_first_and_skip_deleted_content() {
    let account = AccountId::generate();
    let (older, newer, gone) = (
        test_content("Older", "drama"),
        test_content("Newer", "drama"),
        test_content("Gone", "drama"),
    );
    let favorites = MockFavoriteRepo::default();
    let now = Utc::now();
    for (content, at) in [
        (&older, now - Duration::days(1)),
        (&newer, now),
        (&gone, now - Duration::hours(1)),
    ] {
        favorites
            .insert_if_absent(&Favorite {
                id: Uuid::now_v7(),
                account_id: account,
                content_id: content.id,
                created_at: at,
            })
            .await
            .unwrap();
    }

    let entries = ListFavoritesUseCase {
        favorites,
        contents: MockContentRepo::new(vec![older, newer]),
    }
    .execute(account)
    .await
    .unwrap();

    let titles: Vec<&str> = entries.iter().map(|e| e.content.title.as_str()).collect();
    assert_eq!(titles, vec!["Newer", "Older"]);
}

#[tokio::test]
async fn should_remove_favorite_and_report_missing() {
    let account = AccountId::generate();
    let movie = test_content("Alien", "horror");
    let favorites = MockFavoriteRepo::default();
    AddFavoriteUseCase {
        favorites: favorites.clone(),
        contents: MockContentRepo::new(vec![movie.clone()]),
    }
    .execute(account, movie.id)
    .await
    .unwrap();

    let remove = RemoveFavoriteUseCase {
        favorites: favorites.clone(),
    };
    remove.execute(account, movie.id).await.unwrap();
    let result = remove.execute(account, movie.id).await;

    assert!(matches!(result, Err(CatalogServiceError::FavoriteNotFound)));
    assert_eq!(favorites.count().await.unwrap(), 0);
}
