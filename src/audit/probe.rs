use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static LEGACY_ROLE_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"requireRole\s*\(").expect("Invalid regex"));

static UNPROTECTED_ACTION_BUTTON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<Button[^>]*>(Edit|Delete|Add|Create|Save|Update|Remove)")
        .expect("Invalid regex")
});

static UNPROTECTED_SUBMIT_BUTTON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<Button[^>]*>Submit").expect("Invalid regex"));

/// Lexical markers found in a file's content.
///
/// Every field is computed independently; rules combine them freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct ContentFeatures {
    /// `requirePageAccess` is referenced.
    pub uses_page_access_middleware: bool,
    /// `requireRole(` is called.
    pub uses_legacy_role_middleware: bool,
    /// `user.role` / `user?.role` is read.
    pub has_role_check: bool,
    /// `hasPermission` / `checkPermission` is referenced.
    pub has_permission_check: bool,
    /// A permission-aware control or hook is used.
    pub has_permission_guarded_control: bool,
    pub has_page_access_guard: bool,
    /// The `withRoleCheck` higher-order component is referenced.
    pub uses_legacy_role_hoc: bool,
    pub has_role_string_comparison: bool,
    pub has_hardcoded_role_list: bool,
    /// A `<Button>` labelled with an edit/delete/create style verb.
    pub has_unprotected_action_button: bool,
    pub has_unprotected_submit_button: bool,
    /// An `onClick` handler next to edit/delete wording.
    pub has_inline_action_handler: bool,
}

impl ContentFeatures {
    /// Names and values of every feature, in declaration order.
    #[must_use]
    pub const fn entries(&self) -> [(&'static str, bool); 12] {
        [
            (
                "uses_page_access_middleware",
                self.uses_page_access_middleware,
            ),
            (
                "uses_legacy_role_middleware",
                self.uses_legacy_role_middleware,
            ),
            ("has_role_check", self.has_role_check),
            ("has_permission_check", self.has_permission_check),
            (
                "has_permission_guarded_control",
                self.has_permission_guarded_control,
            ),
            ("has_page_access_guard", self.has_page_access_guard),
            ("uses_legacy_role_hoc", self.uses_legacy_role_hoc),
            ("has_role_string_comparison", self.has_role_string_comparison),
            ("has_hardcoded_role_list", self.has_hardcoded_role_list),
            (
                "has_unprotected_action_button",
                self.has_unprotected_action_button,
            ),
            (
                "has_unprotected_submit_button",
                self.has_unprotected_submit_button,
            ),
            ("has_inline_action_handler", self.has_inline_action_handler),
        ]
    }
}

fn contains_any(content: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| content.contains(needle))
}

/// Evaluate every content predicate against raw file text.
#[must_use]
pub fn probe(content: &str) -> ContentFeatures {
    let lower = content.to_lowercase();

    ContentFeatures {
        uses_page_access_middleware: content.contains("requirePageAccess"),
        uses_legacy_role_middleware: LEGACY_ROLE_CALL.is_match(content),
        has_role_check: contains_any(content, &["user.role", "req.user.role", "user?.role"]),
        has_permission_check: contains_any(content, &["hasPermission", "checkPermission"]),
        has_permission_guarded_control: contains_any(
            content,
            &["PermissionButton", "usePageAccess", "can(", "hasPermission("],
        ),
        has_page_access_guard: content.contains("PageAccessGuard"),
        uses_legacy_role_hoc: content.contains("withRoleCheck"),
        has_role_string_comparison: contains_any(
            content,
            &["user?.role ===", "user.role ===", "publicMetadata?.role ==="],
        ),
        has_hardcoded_role_list: contains_any(content, &["allowedRoles:", "['admin',", "['hr',"]),
        has_unprotected_action_button: UNPROTECTED_ACTION_BUTTON.is_match(content),
        has_unprotected_submit_button: UNPROTECTED_SUBMIT_BUTTON.is_match(content),
        has_inline_action_handler: content.contains("onClick")
            && contains_any(&lower, &["delete", "edit"]),
    }
}

#[cfg(test)]
#[path = "probe_tests.rs"]
mod tests;
