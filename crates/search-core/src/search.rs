// search-core/src/search.rs
//! Search over procedure metadata and procedure content
//!
//! Matching is case-insensitive substring containment, without tokenization or ranking.
//! Results come in two passes over the visible set: every metadata match first, then
//! every content match, each pass in visible-set order. A procedure matching both ways
//! appears twice.

use procedure::Document;

use crate::config::SearchConfig;
use crate::models::{Match, MatchKind, ProcedureMeta, SearchOutcome, SectionHit};
use crate::store::ContentStore;

/// Search with the default configuration
pub fn search<S>(query: &str, visible: &[ProcedureMeta], store: &S) -> SearchOutcome
where
    S: ContentStore + ?Sized,
{
    search_with_config(query, visible, store, &SearchConfig::default())
}

/// Search `visible`, which must already be filtered down to what the caller may see
pub fn search_with_config<S>(
    query: &str,
    visible: &[ProcedureMeta],
    store: &S,
    config: &SearchConfig,
) -> SearchOutcome
where
    S: ContentStore + ?Sized,
{
    let query = query.trim();
    if query.chars().count() < config.min_query_len {
        tracing::debug!("query '{}' is shorter than {} characters", query, config.min_query_len);
        return SearchOutcome::QueryTooShort {
            min_len: config.min_query_len,
        };
    }

    let needle = query.to_lowercase();
    let mut results: Vec<Match> = visible
        .iter()
        .filter(|p| metadata_matches(p, &needle))
        .map(|p| Match {
            kind: MatchKind::Metadata,
            procedure: p.clone(),
            sections: Vec::new(),
        })
        .collect();
    let metadata_count = results.len();

    for procedure in visible {
        let text = match store.read(procedure) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("skipping '{}' in content search: {}", procedure.filename, e);
                continue;
            }
        };

        if !contains(&text, &needle) {
            continue;
        }

        let sections = match_sections(&procedure::parse(&text), &needle);
        if !sections.is_empty() {
            results.push(Match {
                kind: MatchKind::Content,
                procedure: procedure.clone(),
                sections,
            });
        }
    }

    tracing::info!(
        "search '{}': {} metadata matches, {} content matches",
        query,
        metadata_count,
        results.len() - metadata_count
    );

    SearchOutcome::Matches { results }
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn metadata_matches(procedure: &ProcedureMeta, needle: &str) -> bool {
    contains(&procedure.name, needle) || contains(&procedure.description, needle)
}

/// Sections of `doc` that mention `needle` (already lowercased) in their title,
/// description or any command.
pub fn match_sections(doc: &Document, needle: &str) -> Vec<SectionHit> {
    doc.sections
        .iter()
        .enumerate()
        .filter_map(|(index, section)| {
            let section_match =
                contains(&section.title, needle) || contains(&section.description, needle);
            let matching_commands = section
                .commands
                .iter()
                .filter(|c| contains(&c.label, needle) || contains(&c.body, needle))
                .count();

            (section_match || matching_commands > 0).then(|| SectionHit {
                index,
                title: section.title.clone(),
                description: section.description.clone(),
                section_match,
                matching_commands,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use rstest::rstest;
    use std::collections::HashMap;

    /// Content keyed by file name, missing entries fail to read
    struct MemoryStore(HashMap<&'static str, &'static str>);

    impl ContentStore for MemoryStore {
        fn read(&self, procedure: &ProcedureMeta) -> Result<String, StoreError> {
            self.0
                .get(procedure.filename.as_str())
                .map(|s| s.to_string())
                .ok_or_else(|| StoreError::NotFound(procedure.filename.clone()))
        }
    }

    fn meta(id: u64, name: &str, description: &str, filename: &str) -> ProcedureMeta {
        ProcedureMeta {
            id,
            name: name.into(),
            icon: "📄".into(),
            description: description.into(),
            filename: filename.into(),
            order: id as i64,
            owner: None,
            is_public: true,
        }
    }

    const GIT: &str = "[Operazioni Base]\nComandi fondamentali Git\n\nCOMANDO: Inizializza\ngit init\n\n\
                       [Remote]\nPush e pull\n\nCOMANDO: Push\ngit push origin main\n";
    const DOCKER: &str = "[Base]\nContainer\n\nCOMANDO: Lista\ndocker ps\n\nCOMANDO: Log\ndocker logs -f id\n";
    const LINUX: &str = "[File]\nOperazioni su file\n\nCOMANDO: Trova\nfind . -name \"*.txt\"\n";

    fn fixture() -> (Vec<ProcedureMeta>, MemoryStore) {
        let visible = vec![
            meta(1, "Comandi Git", "Controllo versione", "git.txt"),
            meta(2, "Comandi Docker", "Container e immagini", "docker.txt"),
            meta(3, "Comandi Linux", "Amministrazione", "linux.txt"),
            meta(4, "Broken", "file is gone", "missing.txt"),
        ];
        let store = MemoryStore(HashMap::from([
            ("git.txt", GIT),
            ("docker.txt", DOCKER),
            ("linux.txt", LINUX),
        ]));
        (visible, store)
    }

    fn summary(outcome: &SearchOutcome) -> Vec<(MatchKind, u64)> {
        outcome
            .results()
            .iter()
            .map(|m| (m.kind, m.procedure.id))
            .collect()
    }

    #[rstest]
    #[case("")]
    #[case("a")]
    #[case("  g  ")]
    #[case("è")]
    fn test_query_too_short(#[case] query: &str) {
        let (visible, store) = fixture();
        let outcome = search(query, &visible, &store);
        assert_eq!(outcome, SearchOutcome::QueryTooShort { min_len: 2 });
        assert!(outcome.is_declined());
        assert!(outcome.results().is_empty());
    }

    #[test]
    fn test_two_characters_proceed() {
        let (visible, store) = fixture();
        let outcome = search("ps", &visible, &store);
        assert!(!outcome.is_declined());
        assert_eq!(summary(&outcome), vec![(MatchKind::Content, 2)]);
    }

    #[test]
    fn test_metadata_and_content_are_not_deduplicated() {
        let (visible, store) = fixture();
        let outcome = search("git", &visible, &store);
        assert_eq!(
            summary(&outcome),
            vec![(MatchKind::Metadata, 1), (MatchKind::Content, 1)]
        );
        let content = &outcome.results()[1];
        assert_eq!(content.sections.len(), 2);
        assert!(content.sections[0].section_match);
        assert_eq!(content.sections[0].matching_commands, 1);
        assert!(!content.sections[1].section_match);
        assert_eq!(content.sections[1].matching_commands, 1);
    }

    #[test]
    fn test_metadata_matches_come_first() {
        let (visible, store) = fixture();
        // "comandi" is in every name and in the git section description
        let outcome = search("COMANDI", &visible, &store);
        assert_eq!(
            summary(&outcome),
            vec![
                (MatchKind::Metadata, 1),
                (MatchKind::Metadata, 2),
                (MatchKind::Metadata, 3),
                (MatchKind::Content, 1),
            ]
        );
    }

    #[test]
    fn test_section_match_without_commands() {
        let (visible, store) = fixture();
        let outcome = search("operazioni", &visible, &store);
        let hits: Vec<_> = outcome
            .results()
            .iter()
            .flat_map(|m| m.sections.iter().map(move |s| (m.procedure.id, s.index, s.matching_commands)))
            .collect();
        assert_eq!(hits, vec![(1, 0, 0), (3, 0, 0)]);
    }

    #[test]
    fn test_raw_text_hit_without_qualifying_section() {
        // "comando" only appears as the command keyword, which is not searchable content
        let (visible, store) = fixture();
        assert!(search("comando:", &visible, &store).results().is_empty());
    }

    #[test]
    fn test_read_failure_skips_only_that_document() {
        let (visible, store) = fixture();
        let outcome = search("file", &visible, &store);
        assert_eq!(
            summary(&outcome),
            vec![(MatchKind::Metadata, 4), (MatchKind::Content, 3)]
        );
    }

    #[test]
    fn test_custom_min_query_len() {
        let (visible, store) = fixture();
        let config = SearchConfig { min_query_len: 4 };
        assert!(search_with_config("git", &visible, &store, &config).is_declined());
        assert!(!search_with_config("push", &visible, &store, &config).is_declined());
    }

    #[test]
    fn test_match_sections_multiline_body() {
        let doc = procedure::parse("[S]\nd\nCOMANDO: deploy\nkubectl apply -f a.yaml\nkubectl rollout status\n");
        let hits = match_sections(&doc, "rollout");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].matching_commands, 1);
        assert!(!hits[0].section_match);
    }
}
