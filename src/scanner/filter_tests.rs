use std::path::Path;

use super::*;

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn default_extensions_cover_js_and_ts_sources() {
    let filter = GlobFilter::new(default_extensions(), &[]).unwrap();

    for path in [
        "backend/routes/hr.js",
        "react/src/App.tsx",
        "react/src/main.jsx",
        "react/src/types/index.ts",
        "backend/server.mjs",
        "backend/config.cjs",
    ] {
        assert!(filter.should_include(Path::new(path)), "{path}");
    }
    assert!(!filter.should_include(Path::new("react/src/styles.css")));
    assert!(!filter.should_include(Path::new("README")));
}

#[test]
fn extensions_compare_case_insensitively() {
    let filter = GlobFilter::new(vec![".JSX".to_string()], &[]).unwrap();

    assert!(filter.should_include(Path::new("Sidebar.jsx")));
    assert!(filter.should_include(Path::new("Legacy.JSX")));
}

#[test]
fn empty_extensions_accept_all() {
    let filter = GlobFilter::new(vec![], &[]).unwrap();

    assert!(filter.should_include(Path::new("package.json")));
    assert!(filter.should_include(Path::new("Makefile")));
}

#[test]
fn exclude_patterns_drop_matches() {
    let filter = GlobFilter::new(
        default_extensions(),
        &["**/node_modules/**".to_string(), "**/*.min.js".to_string()],
    )
    .unwrap();

    assert!(filter.should_include(Path::new("backend/routes/hr.js")));
    assert!(!filter.should_include(Path::new("backend/node_modules/express/index.js")));
    assert!(!filter.should_include(Path::new("react/public/vendor.min.js")));
}

#[test]
fn invalid_pattern_returns_error() {
    let result = GlobFilter::new(vec![], &["[invalid".to_string()]);
    assert!(matches!(
        result,
        Err(RbacAuditError::InvalidPattern { ref pattern, .. }) if pattern == "[invalid"
    ));
}
