use std::sync::Arc;
use parking_lot::Mutex;
use tempfile::TempDir;
use tokio::runtime::Handle;
use jyutsearch::core::config::Config;
use jyutsearch::core::logging::init_test_logging;
use jyutsearch::core::types::{SearchQuery, UniqueKey};
use jyutsearch::entry::{Entry, SourceSentence};
use jyutsearch::query::QueryBuilder;
use jyutsearch::search::{QueryCoordinator, ResultMapper, SearchObserver};
use jyutsearch::store::schema::{create_schema, rebuild_full_text};
use jyutsearch::store::{DictionaryStore, SqliteStore};

const FIXTURES: &str = r#"
INSERT INTO sources (source_id, sourcename) VALUES
    (1, 'CC-CANTO'), (2, 'CEDICT'), (3, 'Tatoeba');

INSERT INTO entries (entry_id, simplified, traditional, jyutping, pinyin, frequency) VALUES
    (1, '你好', '你好', 'nei5 hou2', 'ni3 hao3', 100),
    (2, '美国', '美國', 'mei5 gwok3', 'mei3 guo2', 50),
    (3, '胡', '胡', 'wu4', 'hu2', 10),
    (4, '户', '戶', 'wu6', 'hu4', 20),
    (5, '户口', '戶口', 'wu6 hau2', 'hu4 kou3', 30),
    (6, '女儿', '女兒', 'neoi5 ji4', 'nu:3 er2', 40);

INSERT INTO definitions (definition_id, fk_entry_id, fk_source_id, definition, label) VALUES
    (1, 1, 1, 'hello', 'interj'),
    (2, 1, 2, 'hello; hi', NULL),
    (3, 2, 2, 'United States', 'noun'),
    (4, 3, 2, 'beard', NULL),
    (5, 4, 2, 'household; door', NULL),
    (6, 5, 2, 'registered residence', NULL),
    (7, 6, 2, 'daughter', NULL);

INSERT INTO chinese_sentences (chinese_sentence_id, simplified, traditional, jyutping, pinyin, language) VALUES
    (1, '你好吗？', '你好嗎？', 'nei5 hou2 maa3', 'ni3 hao3 ma5', 'yue'),
    (2, '美国很大。', '美國很大。', 'mei5 gwok3 han2 daai6', 'mei3 guo2 hen3 da4', 'cmn');

INSERT INTO nonchinese_sentences (non_chinese_sentence_id, sentence, language) VALUES
    (1, 'How are you?', 'eng'),
    (2, 'Comment ça va ?', 'fra');

INSERT INTO sentence_links (fk_chinese_sentence_id, fk_non_chinese_sentence_id, fk_source_id, direct) VALUES
    (1, 1, 3, 1),
    (1, 2, 3, 0);

INSERT INTO definitions_chinese_sentences_links (fk_definition_id, fk_chinese_sentence_id) VALUES
    (1, 1);
"#;

async fn dictionary() -> (TempDir, SqliteStore) {
    init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        database_path: dir.path().join("dict.db"),
        max_connections: 4,
        read_only: false,
        ..Config::default()
    };

    let store = SqliteStore::open(&config).await.unwrap();
    create_schema(store.pool()).await.unwrap();
    sqlx::raw_sql(FIXTURES).execute(store.pool()).await.unwrap();
    rebuild_full_text(store.pool()).await.unwrap();
    (dir, store)
}

async fn search(store: &SqliteStore, query: SearchQuery) -> Vec<Entry> {
    let built = QueryBuilder::new().build(&query);
    let rows = store.fetch_entries(&built).await.unwrap();
    ResultMapper::new().map_entries(rows)
}

fn simplified(entries: &[Entry]) -> Vec<&str> {
    entries.iter().map(Entry::simplified).collect()
}

#[tokio::test]
async fn quoted_jyutping_matches_whole_reading() {
    let (_dir, store) = dictionary().await;
    let entries = search(&store, SearchQuery::Jyutping("\"wu6\"".to_string())).await;
    assert_eq!(simplified(&entries), vec!["户"]);
}

#[tokio::test]
async fn open_jyutping_is_a_prefix_search_ordered_by_frequency() {
    let (_dir, store) = dictionary().await;
    let entries = search(&store, SearchQuery::Jyutping("wu".to_string())).await;
    assert_eq!(simplified(&entries), vec!["户口", "户", "胡"]);

    let entries = search(&store, SearchQuery::Jyutping("wu$".to_string())).await;
    assert_eq!(simplified(&entries), vec!["户", "胡"]);

    let entries = search(&store, SearchQuery::Jyutping("neihou".to_string())).await;
    assert_eq!(simplified(&entries), vec!["你好"]);
}

#[tokio::test]
async fn wildcards_inside_syllables_match() {
    let (_dir, store) = dictionary().await;
    for input in ["n?i hou", "n?i5 hou2", "nei5 h?u2", "*ei hou"] {
        let entries = search(&store, SearchQuery::Jyutping(input.to_string())).await;
        assert_eq!(simplified(&entries), vec!["你好"], "input {}", input);
    }
}

#[tokio::test]
async fn pinyin_umlaut_finds_stored_digraph() {
    let (_dir, store) = dictionary().await;
    let entries = search(&store, SearchQuery::Pinyin("nv3".to_string())).await;
    assert_eq!(simplified(&entries), vec!["女儿"]);
    assert_eq!(entries[0].pretty_pinyin(), "nǚ ér");
}

#[tokio::test]
async fn characters_bring_back_definitions() {
    let (_dir, store) = dictionary().await;
    let entries = search(&store, SearchQuery::Simplified("美".to_string())).await;
    assert_eq!(simplified(&entries), vec!["美国"]);

    let sets = entries[0].definitions_sets();
    assert_eq!(sets.len(), 1);
    assert_eq!(sets[0].source, "CEDICT");
    assert_eq!(sets[0].definitions[0].text, "United States");
    assert_eq!(sets[0].definitions[0].label, "noun");

    let entries = search(&store, SearchQuery::Traditional("\"美\"".to_string())).await;
    assert!(entries.is_empty());
}

#[tokio::test]
async fn example_sentences_are_nested_under_definitions() {
    let (_dir, store) = dictionary().await;
    let entries = search(&store, SearchQuery::Simplified("你好".to_string())).await;
    assert_eq!(entries.len(), 1);

    let sets = entries[0].definitions_sets();
    assert_eq!(sets.len(), 2);
    let canto = sets.iter().find(|s| s.source == "CC-CANTO").unwrap();
    let examples = &canto.definitions[0].examples;
    assert_eq!(examples.len(), 1);
    assert_eq!(examples[0].traditional(), "你好嗎？");

    let translations = &examples[0].sentence_sets()[0];
    assert_eq!(translations.source, "Tatoeba");
    assert_eq!(translations.sentences.len(), 2);
    let french = translations.sentences.iter().find(|t| t.language == "fra").unwrap();
    assert!(!french.direct);

    let cedict = sets.iter().find(|s| s.source == "CEDICT").unwrap();
    assert!(cedict.definitions[0].examples.is_empty());
}

#[tokio::test]
async fn english_needs_a_whole_word_match() {
    let (_dir, store) = dictionary().await;
    let entries = search(&store, SearchQuery::English("household".to_string())).await;
    assert_eq!(simplified(&entries), vec!["户"]);

    let entries = search(&store, SearchQuery::English("hello".to_string())).await;
    assert_eq!(simplified(&entries), vec!["你好"]);

    let entries = search(&store, SearchQuery::English("\"beard\"".to_string())).await;
    assert_eq!(simplified(&entries), vec!["胡"]);

    let entries = search(&store, SearchQuery::English("\"bear\"".to_string())).await;
    assert!(entries.is_empty());
}

#[tokio::test]
async fn unique_lookup_finds_one_entry() {
    let (_dir, store) = dictionary().await;
    let key = UniqueKey {
        simplified: "户".to_string(),
        traditional: "戶".to_string(),
        jyutping: "wu6".to_string(),
        pinyin: "hu4".to_string(),
    };
    let entries = search(&store, SearchQuery::Unique(key)).await;
    assert_eq!(simplified(&entries), vec!["户"]);
}

#[tokio::test]
async fn sentences_group_translations() {
    let (_dir, store) = dictionary().await;
    let built = QueryBuilder::new().build(&SearchQuery::Sentences("好".to_string()));
    let rows = store.fetch_sentences(&built).await.unwrap();
    let sentences = ResultMapper::new().map_sentences(rows);

    assert_eq!(sentences.len(), 1);
    assert_eq!(sentences[0].source_language(), "yue");
    assert_eq!(sentences[0].sentence_sets().len(), 1);
    assert_eq!(sentences[0].sentence_sets()[0].sentences.len(), 2);

    let built = QueryBuilder::new().build(&SearchQuery::Sentences("美國".to_string()));
    let rows = store.fetch_sentences(&built).await.unwrap();
    let sentences = ResultMapper::new().map_sentences(rows);
    assert_eq!(sentences.len(), 1);
    assert!(sentences[0].sentence_sets().is_empty());
}

#[derive(Default)]
struct Collected {
    entries: Mutex<Vec<Vec<String>>>,
    sentences: Mutex<Vec<usize>>,
}

impl SearchObserver for Collected {
    fn on_entries(&self, entries: &[Entry], _empty_query: bool) {
        self.entries
            .lock()
            .push(entries.iter().map(|e| e.traditional().to_string()).collect());
    }

    fn on_sentences(&self, sentences: &[SourceSentence], _empty_query: bool) {
        self.sentences.lock().push(sentences.len());
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn coordinator_searches_the_database() {
    let (_dir, store) = dictionary().await;
    let coordinator = QueryCoordinator::with_store(Handle::current(), store);
    let collected = Arc::new(Collected::default());
    coordinator.register_observer(collected.clone());

    coordinator.search_jyutping("mei5 gwok3");
    coordinator.wait_idle().await;
    coordinator.search_sentences_by_traditional("你好");
    coordinator.wait_idle().await;

    assert_eq!(*collected.entries.lock(), vec![vec!["美國".to_string()]]);
    assert_eq!(*collected.sentences.lock(), vec![1]);
}
