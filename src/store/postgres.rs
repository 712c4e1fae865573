use axum::async_trait;
use bb8::{Pool, RunError};
use bb8_postgres::PostgresConnectionManager;
use chrono::Utc;
use tokio_postgres::{NoTls, Row};

use crate::modules::notes::types::{NewNote, Note};
use crate::store::{new_code, NoteRepository, RepoError, RepoResult};

pub type ConnectionPool = Pool<PostgresConnectionManager<NoTls>>;

const NOTES_TABLE_NAME: &str = "notes";

mod embedded {
    refinery::embed_migrations!("migrations");
}

pub struct PgNoteRepository {
    pool: ConnectionPool,
}

impl PgNoteRepository {
    /// Builds the pool and brings the schema up to date.
    pub async fn connect(config: tokio_postgres::Config) -> Result<Self, StartupError> {
        let manager = PostgresConnectionManager::new(config, NoTls);
        let pool = Pool::builder().build(manager).await?;

        let mut conn = pool.get().await.map_err(StartupError::Pool)?;
        let report = embedded::migrations::runner().run_async(&mut *conn).await?;
        for migration in report.applied_migrations() {
            tracing::info!(migration = %migration, "applied migration");
        }
        drop(conn);

        Ok(Self { pool })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("postgres: {0}")]
    Postgres(#[from] tokio_postgres::Error),
    #[error("connection pool: {0}")]
    Pool(RunError<tokio_postgres::Error>),
    #[error("migrations: {0}")]
    Migration(#[from] refinery::Error),
}

fn note_from_row(row: &Row) -> Note {
    Note {
        code: row.get(0),
        title: row.get(1),
        description: row.get(2),
        created_on: row.get(3),
    }
}

fn store_error(err: tokio_postgres::Error) -> RepoError {
    if err.is_closed() {
        RepoError::Transient(err.to_string())
    } else {
        RepoError::Fatal(err.to_string())
    }
}

fn pool_error(err: RunError<tokio_postgres::Error>) -> RepoError {
    match err {
        RunError::User(err) => store_error(err),
        RunError::TimedOut => RepoError::Transient("timed out waiting for a database connection".to_string()),
    }
}

#[async_trait]
impl NoteRepository for PgNoteRepository {
    async fn get_all(&self) -> RepoResult<Vec<Note>> {
        let conn = self.pool.get().await.map_err(pool_error)?;

        let rows = conn.query(
            &format!("SELECT code, title, description, created_on FROM {NOTES_TABLE_NAME} ORDER BY created_on, code"),
            &[]
        ).await.map_err(store_error)?;

        Ok(rows.iter().map(note_from_row).collect())
    }

    async fn get_by_code(&self, code: &str) -> RepoResult<Note> {
        let conn = self.pool.get().await.map_err(pool_error)?;

        let row = conn.query_opt(
            &format!("SELECT code, title, description, created_on FROM {NOTES_TABLE_NAME} WHERE code=$1"),
            &[&code]
        ).await.map_err(store_error)?;

        row.as_ref().map(note_from_row).ok_or(RepoError::NotFound)
    }

    async fn create(&self, note: NewNote) -> RepoResult<Note> {
        let conn = self.pool.get().await.map_err(pool_error)?;

        let row = conn.query_one(
            &format!("INSERT INTO {NOTES_TABLE_NAME} (code, title, description, created_on) VALUES ($1, $2, $3, $4) RETURNING code, title, description, created_on"),
            &[&new_code(), &note.title, &note.description, &Utc::now()]
        ).await.map_err(store_error)?;

        Ok(note_from_row(&row))
    }
}
