use sea_orm::Database;
use tracing::info;

use streamflix_auth_types::token::TokenKeys;
use streamflix_catalog::config::CatalogConfig;
use streamflix_catalog::router::build_router;
use streamflix_catalog::state::AppState;
use streamflix_catalog::usecase::account::{BootstrapAdminUseCase, CredentialsInput};

#[tokio::main]
async fn main() {
    streamflix_core::tracing::init_tracing("streamflix_catalog");

    let config = CatalogConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        token_keys: TokenKeys::new(&config.jwt_secret),
        access_token_ttl: config.access_token_ttl,
    };

    if let Some(admin) = config.admin {
        let usecase = BootstrapAdminUseCase {
            accounts: state.account_repo(),
        };
        let result = usecase
            .execute(CredentialsInput {
                login: admin.email,
                password: admin.password,
            })
            .await;
        if let Err(e) = result {
            tracing::error!(error = ?e, "admin bootstrap failed");
        }
    }

    let router = build_router(state);
    let http_addr = format!("0.0.0.0:{}", config.catalog_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("catalog service listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}
