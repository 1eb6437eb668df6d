//! Dictionary database layout expected by the search SQL.

use sqlx::sqlite::SqlitePool;
use tracing::info;
use crate::core::error::Result;

pub const DICTIONARY_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS sources (
    source_id INTEGER PRIMARY KEY,
    sourcename TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS entries (
    entry_id INTEGER PRIMARY KEY,
    simplified TEXT NOT NULL,
    traditional TEXT NOT NULL,
    jyutping TEXT NOT NULL,
    pinyin TEXT NOT NULL,
    frequency REAL NOT NULL DEFAULT 0
);

CREATE VIRTUAL TABLE IF NOT EXISTS entries_fts USING fts5(
    jyutping, pinyin, content='entries', content_rowid='entry_id'
);

CREATE TABLE IF NOT EXISTS definitions (
    definition_id INTEGER PRIMARY KEY,
    fk_entry_id INTEGER NOT NULL REFERENCES entries(entry_id),
    fk_source_id INTEGER REFERENCES sources(source_id),
    definition TEXT NOT NULL,
    label TEXT
);

CREATE VIRTUAL TABLE IF NOT EXISTS definitions_fts USING fts5(
    definition, content='definitions', content_rowid='definition_id'
);

CREATE TABLE IF NOT EXISTS chinese_sentences (
    chinese_sentence_id INTEGER PRIMARY KEY,
    simplified TEXT NOT NULL,
    traditional TEXT NOT NULL,
    jyutping TEXT NOT NULL,
    pinyin TEXT NOT NULL,
    language TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS nonchinese_sentences (
    non_chinese_sentence_id INTEGER PRIMARY KEY,
    sentence TEXT NOT NULL,
    language TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS sentence_links (
    fk_chinese_sentence_id INTEGER NOT NULL REFERENCES chinese_sentences(chinese_sentence_id),
    fk_non_chinese_sentence_id INTEGER NOT NULL REFERENCES nonchinese_sentences(non_chinese_sentence_id),
    fk_source_id INTEGER REFERENCES sources(source_id),
    direct INTEGER NOT NULL DEFAULT 1
);

CREATE TABLE IF NOT EXISTS definitions_chinese_sentences_links (
    fk_definition_id INTEGER NOT NULL REFERENCES definitions(definition_id),
    fk_chinese_sentence_id INTEGER NOT NULL REFERENCES chinese_sentences(chinese_sentence_id)
);

CREATE INDEX IF NOT EXISTS definitions_fk_entry_id_index ON definitions(fk_entry_id);
CREATE INDEX IF NOT EXISTS sentence_links_fk_chinese_sentence_id_index
    ON sentence_links(fk_chinese_sentence_id);
"#;

/// Rebuilds both full-text indexes from their content tables
pub const REBUILD_FULL_TEXT: &str = r#"
INSERT INTO entries_fts(entries_fts) VALUES('rebuild');
INSERT INTO definitions_fts(definitions_fts) VALUES('rebuild');
"#;

/// Create the dictionary tables on a writable pool
pub async fn create_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::raw_sql(DICTIONARY_SCHEMA).execute(pool).await?;
    info!("Dictionary schema ready");
    Ok(())
}

/// Refresh the full-text indexes after bulk loading
pub async fn rebuild_full_text(pool: &SqlitePool) -> Result<()> {
    sqlx::raw_sql(REBUILD_FULL_TEXT).execute(pool).await?;
    Ok(())
}
