use crate::core::{ReplacementMap, Substitution};
use regex::Regex;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Any 8-4-4-4-12 hex run, without word boundaries, so that raw-text
/// occurrences glued to other characters are still candidates.
fn candidate_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}")
            .expect("candidate pattern is a valid regex")
    })
}

/// Replaces every occurrence of every original UUID in `content`, ignoring case.
///
/// A single left-to-right pass, so text produced by one replacement is never
/// matched again by another. The pattern is fixed; the number of originals
/// only affects the map lookups.
pub fn replace_uuids(content: &str, map: &ReplacementMap) -> Substitution {
    if map.is_empty() {
        return Substitution {
            content: content.to_string(),
            occurrences: 0,
        };
    }

    let pattern = candidate_pattern();
    let mut replaced = String::with_capacity(content.len());
    let mut occurrences = 0;
    let mut copied = 0;
    let mut search = 0;

    while let Some(found) = pattern.find_at(content, search) {
        match map.get(found.as_str()) {
            Some(replacement) => {
                replaced.push_str(&content[copied..found.start()]);
                replaced.push_str(&replacement.to_string());
                occurrences += 1;
                copied = found.end();
                search = found.end();
            }
            // 未對應的候選可能與後面的原始 UUID 重疊，往後移一個（ASCII）字元再找
            None => search = found.start() + 1,
        }
    }
    replaced.push_str(&content[copied..]);

    Substitution {
        content: replaced,
        occurrences,
    }
}

/// `dir/name.ext` becomes `dir/name-replaced.ext`; `dir/name` becomes `dir/name-replaced`.
pub fn output_path_for(input: &Path) -> PathBuf {
    let mut file_name = input
        .file_stem()
        .map(OsString::from)
        .unwrap_or_default();
    file_name.push("-replaced");
    if let Some(extension) = input.extension() {
        file_name.push(".");
        file_name.push(extension);
    }
    input.with_file_name(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    const UPPER: &str = "550E8400-E29B-41D4-A716-446655440000";
    const LOWER: &str = "550e8400-e29b-41d4-a716-446655440000";

    #[test]
    fn test_empty_map_leaves_text_untouched() {
        let content = "{ \"a\": 1,\n  \"b\": [true, null] }\n";
        let result = replace_uuids(content, &ReplacementMap::new());
        assert_eq!(result.content, content);
        assert_eq!(result.occurrences, 0);
    }

    #[test]
    fn test_replaces_every_spelling() {
        let generated = Uuid::from_u128(0xabc);
        let mut map = ReplacementMap::new();
        map.insert(UPPER, generated);

        let content = format!("{{\"id\": \"{UPPER}\", \"nested\": [\"{LOWER}\"]}}");
        let result = replace_uuids(&content, &map);

        assert_eq!(result.occurrences, 2);
        assert!(!result.content.to_lowercase().contains(LOWER));
        assert_eq!(result.content.matches(&generated.to_string()).count(), 2);
        // 格式與空白保持不變
        assert_eq!(
            result.content,
            format!("{{\"id\": \"{generated}\", \"nested\": [\"{generated}\"]}}")
        );
    }

    #[test]
    fn test_replaces_occurrences_in_keys_too() {
        let generated = Uuid::from_u128(7);
        let mut map = ReplacementMap::new();
        map.insert(LOWER, generated);

        let content = format!("{{\"{LOWER}\": \"{LOWER}\"}}");
        let result = replace_uuids(&content, &map);

        assert_eq!(result.content, format!("{{\"{generated}\": \"{generated}\"}}"));
    }

    #[test]
    fn test_no_chained_replacement() {
        // 第一個替換值正好是第二個原始值，單次掃描下不可再被替換
        let first = "00000000-0000-4000-8000-000000000001";
        let second = "00000000-0000-4000-8000-000000000002";
        let third = Uuid::from_u128(3);

        let mut map = ReplacementMap::new();
        map.insert(first, second.parse().unwrap());
        map.insert(second, third);

        let content = format!("[\"{first}\", \"{second}\"]");
        let result = replace_uuids(&content, &map);

        assert_eq!(result.content, format!("[\"{second}\", \"{third}\"]"));
        assert_eq!(result.occurrences, 2);
    }

    #[test]
    fn test_many_distinct_uuids() {
        let mut map = ReplacementMap::new();
        let mut originals = Vec::new();
        for i in 0..25_000u128 {
            let original = Uuid::from_u128(i).to_string();
            map.insert(&original, Uuid::from_u128(i + (1 << 100)));
            originals.push(format!("\"{original}\""));
        }
        let content = format!("[{}]", originals.join(","));

        let result = replace_uuids(&content, &map);

        assert_eq!(result.occurrences, 25_000);
        assert!(!result.content.contains(&Uuid::from_u128(0).to_string()));
        assert!(!result.content.contains(&Uuid::from_u128(24_999).to_string()));
        assert!(result
            .content
            .contains(&Uuid::from_u128(24_999 + (1 << 100)).to_string()));
        let parsed: serde_json::Value = serde_json::from_str(&result.content).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 25_000);
    }

    #[test]
    fn test_unmapped_candidate_overlapping_original() {
        // 前面的候選字串未被發現，其尾端 8 碼正好是原始 UUID 的開頭
        let original = "22222222-2222-4222-8222-222222222222";
        let content = format!("\"11111111-1111-4111-8111-1111{original}\"");
        let generated = Uuid::from_u128(5);
        let mut map = ReplacementMap::new();
        map.insert(original, generated);

        let result = replace_uuids(&content, &map);

        assert_eq!(result.occurrences, 1);
        assert_eq!(
            result.content,
            format!("\"11111111-1111-4111-8111-1111{generated}\"")
        );
    }

    #[test]
    fn test_original_glued_to_other_text() {
        let generated = Uuid::from_u128(6);
        let mut map = ReplacementMap::new();
        map.insert(LOWER, generated);

        let content = format!("\"x{UPPER}y\"");
        let result = replace_uuids(&content, &map);

        assert_eq!(result.content, format!("\"x{generated}y\""));
    }

    #[test]
    fn test_output_path_for() {
        assert_eq!(
            output_path_for(Path::new("data/input.json")),
            PathBuf::from("data/input-replaced.json")
        );
        assert_eq!(
            output_path_for(Path::new("input.json")),
            PathBuf::from("input-replaced.json")
        );
        assert_eq!(
            output_path_for(Path::new("/tmp/archive.tar.json")),
            PathBuf::from("/tmp/archive.tar-replaced.json")
        );
        assert_eq!(
            output_path_for(Path::new("dir/noext")),
            PathBuf::from("dir/noext-replaced")
        );
    }
}
