// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use edutube::config::settings::Settings;
use edutube::domain::repositories::storage_repository::StorageRepository;
use edutube::domain::services::auth_service::AuthService;
use edutube::infrastructure::repositories::catalog_repo_impl::CatalogRepositoryImpl;
use edutube::infrastructure::repositories::note_repo_impl::NoteRepositoryImpl;
use edutube::infrastructure::session::SessionStore;
use edutube::infrastructure::storage::LocalStorage;
use edutube::presentation::routes;
use edutube::utils::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting edutube...");

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    // 3. Initialize storage
    let storage: Arc<dyn StorageRepository> =
        Arc::new(LocalStorage::new(settings.storage.data_dir.clone()));
    info!("Local storage initialized at {}", settings.storage.data_dir);

    // 4. Initialize repositories
    let catalog_repo = Arc::new(
        CatalogRepositoryImpl::new(storage.clone(), settings.storage.catalog_file.clone()).await?,
    );
    let note_repo = Arc::new(
        NoteRepositoryImpl::new(storage.clone(), settings.storage.notes_file.clone()).await?,
    );
    info!("Catalog and note repositories loaded");

    // 5. Initialize auth and sessions
    let auth_service = Arc::new(AuthService::from_hex_digest(&settings.auth.password_sha256)?);
    let sessions = SessionStore::new(settings.auth.session_ttl_secs);
    info!("Auth service and session store initialized");

    // 6. Start HTTP server
    let app = routes::app(
        settings.clone(),
        catalog_repo,
        note_repo,
        auth_service,
        sessions,
    );

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
