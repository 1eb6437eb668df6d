//! SQL sent to the dictionary store.
//!
//! Entry searches share one aggregation template; only the CTE selecting the
//! matching entry ids changes per script. Definitions, their example
//! sentences and the sentences' translations come back as nested JSON in the
//! `definitions` column.

pub const MATCHING_ENTRY_IDS: &str = "{matching_entry_ids}";

pub const ENTRY_SEARCH_TEMPLATE: &str = "\
WITH matching_entry_ids AS (
  SELECT DISTINCT entry_id FROM ( {matching_entry_ids} )
),
matching_definition_ids AS (
  SELECT definition_id FROM definitions
  WHERE fk_entry_id IN (SELECT entry_id FROM matching_entry_ids)
),
matching_chinese_sentence_ids AS (
  SELECT mdi.definition_id, dcsl.fk_chinese_sentence_id
  FROM matching_definition_ids AS mdi
  JOIN definitions_chinese_sentences_links AS dcsl
    ON mdi.definition_id = dcsl.fk_definition_id
),
matching_translations AS (
  SELECT sl.fk_chinese_sentence_id,
    json_group_array(json_object(
      'sentence', ncs.sentence,
      'language', ncs.language,
      'direct', sl.direct,
      'source', src.sourcename)) AS translations
  FROM sentence_links AS sl
  JOIN nonchinese_sentences AS ncs
    ON ncs.non_chinese_sentence_id = sl.fk_non_chinese_sentence_id
  LEFT JOIN sources AS src ON src.source_id = sl.fk_source_id
  WHERE sl.fk_chinese_sentence_id IN (
    SELECT fk_chinese_sentence_id FROM matching_chinese_sentence_ids)
  GROUP BY sl.fk_chinese_sentence_id
),
matching_sentences AS (
  SELECT cs.chinese_sentence_id,
    json_object(
      'traditional', cs.traditional,
      'simplified', cs.simplified,
      'pinyin', cs.pinyin,
      'jyutping', cs.jyutping,
      'language', cs.language,
      'translations', json(coalesce(mt.translations, '[]'))) AS sentence
  FROM chinese_sentences AS cs
  LEFT JOIN matching_translations AS mt
    ON cs.chinese_sentence_id = mt.fk_chinese_sentence_id
  WHERE cs.chinese_sentence_id IN (
    SELECT fk_chinese_sentence_id FROM matching_chinese_sentence_ids)
),
matching_definitions AS (
  SELECT d.definition_id, d.fk_entry_id, d.fk_source_id,
    json_object(
      'definition', d.definition,
      'label', d.label,
      'sentences', json_group_array(json(ms.sentence))
        FILTER (WHERE ms.sentence IS NOT NULL)) AS definition
  FROM definitions AS d
  LEFT JOIN matching_chinese_sentence_ids AS mcsi
    ON d.definition_id = mcsi.definition_id
  LEFT JOIN matching_sentences AS ms
    ON mcsi.fk_chinese_sentence_id = ms.chinese_sentence_id
  WHERE d.definition_id IN (SELECT definition_id FROM matching_definition_ids)
  GROUP BY d.definition_id
),
matching_definition_groups AS (
  SELECT md.fk_entry_id, md.fk_source_id,
    json_object(
      'source', src.sourcename,
      'definitions', json_group_array(json(md.definition))) AS definitions
  FROM matching_definitions AS md
  LEFT JOIN sources AS src ON src.source_id = md.fk_source_id
  GROUP BY md.fk_entry_id, md.fk_source_id
)
SELECT e.simplified, e.traditional, e.jyutping, e.pinyin,
  json_group_array(json(mdg.definitions))
    FILTER (WHERE mdg.definitions IS NOT NULL) AS definitions
FROM entries AS e
JOIN matching_entry_ids AS mei ON mei.entry_id = e.entry_id
LEFT JOIN matching_definition_groups AS mdg ON mdg.fk_entry_id = e.entry_id
GROUP BY e.entry_id
ORDER BY e.frequency DESC, e.entry_id";

pub const SIMPLIFIED_GLOB: &str = "SELECT entry_id FROM entries WHERE simplified GLOB ?";

pub const TRADITIONAL_GLOB: &str = "SELECT entry_id FROM entries WHERE traditional GLOB ?";

pub const JYUTPING_GLOB: &str = "SELECT entry_id FROM entries WHERE jyutping GLOB ?";

pub const JYUTPING_MATCH_GLOB: &str = "\
SELECT entry_id FROM entries
  WHERE entry_id IN (SELECT rowid FROM entries_fts WHERE entries_fts MATCH ?)
  AND jyutping GLOB ?";

pub const PINYIN_GLOB: &str = "SELECT entry_id FROM entries WHERE pinyin GLOB ?";

pub const PINYIN_MATCH_GLOB: &str = "\
SELECT entry_id FROM entries
  WHERE entry_id IN (SELECT rowid FROM entries_fts WHERE entries_fts MATCH ?)
  AND pinyin GLOB ?";

pub const ENGLISH_MATCH_LIKE: &str = "\
SELECT fk_entry_id AS entry_id FROM definitions
  WHERE definition_id IN (SELECT rowid FROM definitions_fts WHERE definitions_fts MATCH ?)
  AND definition LIKE ? ESCAPE '\\'";

pub const ENGLISH_LIKE: &str = "\
SELECT fk_entry_id AS entry_id FROM definitions WHERE definition LIKE ? ESCAPE '\\'";

pub const UNIQUE_EQUALS: &str = "\
SELECT entry_id FROM entries
  WHERE simplified = ? AND traditional = ? AND jyutping = ? AND pinyin = ?";

pub const SENTENCE_SEARCH: &str = "\
WITH matching_sentence_ids AS (
  SELECT chinese_sentence_id FROM chinese_sentences
  WHERE traditional LIKE ? ESCAPE '\\'
)
SELECT cs.chinese_sentence_id, cs.simplified, cs.traditional, cs.jyutping,
  cs.pinyin, cs.language,
  json_group_array(json_object(
    'sentence', ncs.sentence,
    'language', ncs.language,
    'direct', sl.direct,
    'source', src.sourcename))
    FILTER (WHERE ncs.non_chinese_sentence_id IS NOT NULL) AS translations
FROM chinese_sentences AS cs
JOIN matching_sentence_ids AS msi ON msi.chinese_sentence_id = cs.chinese_sentence_id
LEFT JOIN sentence_links AS sl ON sl.fk_chinese_sentence_id = cs.chinese_sentence_id
LEFT JOIN nonchinese_sentences AS ncs
  ON ncs.non_chinese_sentence_id = sl.fk_non_chinese_sentence_id
LEFT JOIN sources AS src ON src.source_id = sl.fk_source_id
GROUP BY cs.chinese_sentence_id
ORDER BY cs.chinese_sentence_id";

/// Full entry search for one matching-id subquery
pub fn entry_search(matching_entry_ids: &str) -> String {
    ENTRY_SEARCH_TEMPLATE.replace(MATCHING_ENTRY_IDS, matching_entry_ids)
}
