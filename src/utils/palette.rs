//! Fixed language color palette.
//!
//! The key set doubles as the canonical spelling for language names: chart
//! callers match raw names against it case-insensitively so "typescript"
//! and "TypeScript" land on the same color.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

/// Canonical language names and their chart colors, keyed case-sensitively.
static PALETTE: Lazy<BTreeMap<String, String>> = Lazy::new(|| {
    serde_json::from_str(PALETTE_JSON).expect("language palette JSON is embedded and well-formed")
});

const PALETTE_JSON: &str = r##"{
  "C": "#555555",
  "C#": "#178600",
  "C++": "#f34b7d",
  "CSS": "#563d7c",
  "Clojure": "#db5855",
  "CoffeeScript": "#244776",
  "Dart": "#00B4AB",
  "Dockerfile": "#384d54",
  "Elixir": "#6e4a7e",
  "Elm": "#60B5CC",
  "Erlang": "#B83998",
  "Go": "#00ADD8",
  "HTML": "#e34c26",
  "Haskell": "#5e5086",
  "Java": "#b07219",
  "JavaScript": "#f1e05a",
  "Julia": "#a270ba",
  "Jupyter Notebook": "#DA5B0B",
  "Kotlin": "#A97BFF",
  "Lua": "#000080",
  "Makefile": "#427819",
  "Nix": "#7e7eff",
  "OCaml": "#3be133",
  "PHP": "#4F5D95",
  "Perl": "#0298c3",
  "Python": "#3572A5",
  "R": "#198CE7",
  "Ruby": "#701516",
  "Rust": "#dea584",
  "SCSS": "#c6538c",
  "Scala": "#c22d40",
  "Shell": "#89e051",
  "Svelte": "#ff3e00",
  "Swift": "#F05138",
  "TypeScript": "#3178c6",
  "Vim Script": "#199f4b",
  "Vue": "#41b883",
  "Zig": "#ec915c"
}"##;

/// Look up the canonical palette key for a raw language name,
/// case-insensitively. Returns `None` when the palette has no entry, in
/// which case callers keep the raw name so no data is dropped.
pub fn canonical_language_key(raw: &str) -> Option<&'static str> {
    PALETTE
        .keys()
        .find(|key| key.eq_ignore_ascii_case(raw))
        .map(|key| key.as_str())
}

/// Hex color for a canonical palette key, or a neutral gray for languages
/// outside the palette.
pub fn language_color(key: &str) -> &'static str {
    PALETTE
        .get(key)
        .map(|color| color.as_str())
        .unwrap_or("#8b949e")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(canonical_language_key("javascript"), Some("JavaScript"));
        assert_eq!(canonical_language_key("RUST"), Some("Rust"));
        assert_eq!(canonical_language_key("TypeScript"), Some("TypeScript"));
    }

    #[test]
    fn unknown_names_have_no_key() {
        assert_eq!(canonical_language_key("Brainfuck"), None);
        assert_eq!(canonical_language_key(""), None);
    }

    #[test]
    fn known_keys_have_colors() {
        assert_eq!(language_color("JavaScript"), "#f1e05a");
        assert_eq!(language_color("Rust"), "#dea584");
    }

    #[test]
    fn unknown_keys_fall_back_to_gray() {
        assert_eq!(language_color("Brainfuck"), "#8b949e");
    }
}
