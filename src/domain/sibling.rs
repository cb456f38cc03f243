//! Sibling path resolution.
//!
//! Paths are treated as opaque strings: only the `.`-delimited suffix of the
//! final component is inspected, and the comparison ignores ASCII case.

use super::category::{Category, CategorySet};

const TEST_MARKER: &str = "spec";

/// Classify a path by its suffix.
///
/// A `.ts`/`.js` path carrying the `spec` marker before its extension is a
/// test file and not a plain script.
pub fn classify(path: &str) -> CategorySet {
    let mut set = CategorySet::EMPTY;
    for category in Category::ALL {
        if !file_is(path, category.suffixes()) {
            continue;
        }
        if category == Category::Script && has_test_marker(path) {
            continue;
        }
        set = set.with(category);
    }
    set
}

/// Strip the extension and any `spec` marker segment from a path.
///
/// Returns `None` when the final path component has no extension.
pub fn base_name(path: &str) -> Option<&str> {
    let stem = strip_extension(path)?;
    match stem.rsplit_once('.') {
        Some((rest, last)) if last.eq_ignore_ascii_case(TEST_MARKER) => Some(rest),
        _ => Some(stem),
    }
}

/// Derive the sibling of `path` with `target_suffix`, if `path` belongs to an
/// accepted category.
pub fn resolve_sibling(path: &str, accepted: CategorySet, target_suffix: &str) -> Option<String> {
    if !classify(path).intersects(accepted) {
        return None;
    }
    base_name(path).map(|base| format!("{base}{target_suffix}"))
}

fn file_is(path: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|suffix| ends_with_ignore_case(path, suffix))
}

fn ends_with_ignore_case(path: &str, suffix: &str) -> bool {
    path.len()
        .checked_sub(suffix.len())
        .and_then(|start| path.get(start..))
        .is_some_and(|tail| tail.eq_ignore_ascii_case(suffix))
}

fn strip_extension(path: &str) -> Option<&str> {
    let file_start = path.rfind(['/', '\\']).map_or(0, |idx| idx + 1);
    let dot = path[file_start..].rfind('.')?;
    Some(&path[..file_start + dot])
}

fn has_test_marker(path: &str) -> bool {
    strip_extension(path)
        .and_then(|stem| stem.rsplit_once('.'))
        .is_some_and(|(_, last)| last.eq_ignore_ascii_case(TEST_MARKER))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn set(categories: &[Category]) -> CategorySet {
        CategorySet::of(categories)
    }

    #[test]
    fn classifies_each_suffix_group() {
        assert_eq!(classify("src/app.ts"), set(&[Category::Script]));
        assert_eq!(classify("src/app.js"), set(&[Category::Script]));
        assert_eq!(classify("src/app.scss"), set(&[Category::Style]));
        assert_eq!(classify("src/app.sass"), set(&[Category::Style]));
        assert_eq!(classify("src/app.less"), set(&[Category::Style]));
        assert_eq!(classify("src/app.css"), set(&[Category::Style]));
        assert_eq!(classify("src/app.html"), set(&[Category::Markup]));
        assert_eq!(classify("src/app.wxml"), set(&[Category::Markup]));
        assert_eq!(classify("src/app.spec.ts"), set(&[Category::Test]));
        assert_eq!(classify("src/app.spec.js"), set(&[Category::Test]));
    }

    #[test]
    fn unknown_and_dotless_paths_are_unrecognized() {
        assert!(classify("README.md").is_unrecognized());
        assert!(classify("Makefile").is_unrecognized());
        assert!(classify("src.ts/Makefile").is_unrecognized());
        assert_eq!(base_name("Makefile"), None);
        assert_eq!(base_name("pages.d/index"), None);
    }

    #[test]
    fn suffix_match_ignores_case() {
        assert_eq!(classify("APP.TS"), set(&[Category::Script]));
        assert_eq!(classify("App.Spec.Ts"), set(&[Category::Test]));
        assert_eq!(classify("index.WXML"), set(&[Category::Markup]));
        assert_eq!(base_name("App.SPEC.ts"), Some("App"));
    }

    #[test]
    fn base_name_strips_extension_and_marker() {
        assert_eq!(base_name("foo.component.spec.ts"), Some("foo.component"));
        assert_eq!(base_name("foo.ts"), Some("foo"));
        assert_eq!(base_name("pages/index/index.wxml"), Some("pages/index/index"));
        assert_eq!(base_name(r"C:\proj\app.spec.js"), Some(r"C:\proj\app"));
    }

    #[test]
    fn lone_marker_is_the_file_name() {
        assert_eq!(base_name("spec.ts"), Some("spec"));
        assert_eq!(classify("spec.ts"), set(&[Category::Script]));
    }

    #[test]
    fn resolves_siblings_for_accepted_categories() {
        let to_markup = set(&[Category::Script, Category::Style, Category::Test]);
        let to_script = set(&[Category::Markup, Category::Test, Category::Style]);

        assert_eq!(resolve_sibling("app.ts", to_markup, ".wxml"), Some("app.wxml".into()));
        assert_eq!(resolve_sibling("app.wxml", to_markup, ".wxml"), None);
        assert_eq!(resolve_sibling("app.spec.ts", to_script, ".js"), Some("app.js".into()));
        assert_eq!(resolve_sibling("app.ts", to_script, ".js"), None);
        assert_eq!(resolve_sibling("notes.txt", to_script, ".js"), None);
    }

    proptest! {
        #[test]
        fn plain_ts_files_are_scripts(stem in "[a-z][a-z0-9_]{0,12}(\\.[a-z0-9]{1,6}){0,2}") {
            prop_assume!(!stem.ends_with(".spec"));
            let path = format!("src/{stem}.ts");
            prop_assert!(classify(&path).contains(Category::Script));
        }

        #[test]
        fn spec_files_are_tests(stem in "[a-zA-Z][a-zA-Z0-9_.]{0,12}", ext in "(ts|js)") {
            let path = format!("{stem}.spec.{ext}");
            let categories = classify(&path);
            prop_assert!(categories.contains(Category::Test));
            prop_assert!(!categories.contains(Category::Script));
        }

        #[test]
        fn classification_is_repeatable(path in "[a-zA-Z0-9_./\\\\]{0,24}") {
            prop_assert_eq!(classify(&path), classify(&path));
            prop_assert_eq!(base_name(&path), base_name(&path));
        }

        #[test]
        fn sibling_keeps_the_base_name(
            stem in "[a-z][a-z0-9_-]{0,10}",
            ext in "(ts|js|scss|sass|less|css|html|wxml)",
            target in "\\.[a-z]{1,5}",
        ) {
            let path = format!("pages/{stem}.{ext}");
            let accepted = CategorySet::of(&Category::ALL);
            let sibling = resolve_sibling(&path, accepted, &target);
            prop_assert_eq!(sibling, Some(format!("pages/{stem}{target}")));
        }
    }
}
