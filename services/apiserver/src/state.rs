use std::sync::Arc;

use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use vsr_auth_types::filter::JwtSecret;
use vsr_domain::id::IdGenerator;

use crate::infra::db::{
    DbBattleRepository, DbDeckRepository, DbGameRepository, DbOfficialEventRepository,
    DbRecordRepository,
};
use crate::infra::identity::HttpUserPort;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: JwtSecret,
    pub user_port: HttpUserPort,
    pub ids: Arc<dyn IdGenerator>,
}

impl AppState {
    pub fn deck_repo(&self) -> DbDeckRepository {
        DbDeckRepository {
            db: self.db.clone(),
        }
    }

    pub fn record_repo(&self) -> DbRecordRepository {
        DbRecordRepository {
            db: self.db.clone(),
        }
    }

    pub fn game_repo(&self) -> DbGameRepository {
        DbGameRepository {
            db: self.db.clone(),
        }
    }

    pub fn battle_repo(&self) -> DbBattleRepository {
        DbBattleRepository {
            db: self.db.clone(),
        }
    }

    pub fn official_event_repo(&self) -> DbOfficialEventRepository {
        DbOfficialEventRepository {
            db: self.db.clone(),
        }
    }

    pub fn user_port(&self) -> HttpUserPort {
        self.user_port.clone()
    }

    pub fn ids(&self) -> Arc<dyn IdGenerator> {
        self.ids.clone()
    }
}

impl FromRef<AppState> for JwtSecret {
    fn from_ref(state: &AppState) -> Self {
        state.jwt_secret.clone()
    }
}

impl FromRef<AppState> for DatabaseConnection {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}
