//! Ordered verdict rules for backend and frontend files.
//!
//! Each domain has a table of rules evaluated first-match-wins. A rule pairs a
//! category/content predicate with a fixed verdict. Earlier rules shadow later ones,
//! so more specific rules must come first.

use serde::Serialize;

use super::path::{
    BackendCategory, Classification, ComponentKind, ContextKind, DataFileKind, FrontendCategory,
    HookKind, MiddlewareKind, RouterKind,
};
use super::probe::ContentFeatures;
use super::verdict::{ComplianceStatus, Verdict};

use ComplianceStatus::{Compliant, NeedsMigration, NotNeeded, PartialReview};

/// Static verdict text attached to a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub status: ComplianceStatus,
    pub note: &'static str,
    pub issue: &'static str,
    pub plan: &'static str,
}

impl Outcome {
    const fn settled(status: ComplianceStatus, note: &'static str) -> Self {
        Self {
            status,
            note,
            issue: "",
            plan: "",
        }
    }

    const fn action(
        status: ComplianceStatus,
        note: &'static str,
        issue: &'static str,
        plan: &'static str,
    ) -> Self {
        Self {
            status,
            note,
            issue,
            plan,
        }
    }

    #[must_use]
    pub fn to_verdict(&self) -> Verdict {
        Verdict::new(self.status, self.note)
            .with_issue(self.issue)
            .with_plan(self.plan)
    }
}

pub struct Rule<C> {
    pub name: &'static str,
    pub applies: fn(C, &ContentFeatures) -> bool,
    pub outcome: Outcome,
}

pub struct RuleTable<C: 'static> {
    pub rules: &'static [Rule<C>],
    /// Used when no rule applies.
    pub fallback: Rule<C>,
}

/// Result of running a rule table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub rule: &'static str,
    pub verdict: Verdict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    /// First applicable rule; its outcome is the verdict.
    Matched,
    /// Applicable, but an earlier rule already matched.
    Superseded,
    NoMatch,
}

/// One rule in an evaluation trace.
#[derive(Debug, Clone, Serialize)]
pub struct RuleTrace {
    pub rule: &'static str,
    pub status: MatchStatus,
    pub outcome: ComplianceStatus,
}

impl<C: Copy> RuleTable<C> {
    #[must_use]
    pub fn evaluate(&self, category: C, features: &ContentFeatures) -> Decision {
        let rule = self
            .rules
            .iter()
            .find(|rule| (rule.applies)(category, features))
            .unwrap_or(&self.fallback);

        Decision {
            rule: rule.name,
            verdict: rule.outcome.to_verdict(),
        }
    }

    /// Evaluate every rule, marking which one decided the verdict.
    #[must_use]
    pub fn trace(&self, category: C, features: &ContentFeatures) -> Vec<RuleTrace> {
        let mut matched = false;
        let mut chain: Vec<RuleTrace> = self
            .rules
            .iter()
            .map(|rule| {
                let status = if !(rule.applies)(category, features) {
                    MatchStatus::NoMatch
                } else if matched {
                    MatchStatus::Superseded
                } else {
                    matched = true;
                    MatchStatus::Matched
                };
                RuleTrace {
                    rule: rule.name,
                    status,
                    outcome: rule.outcome.status,
                }
            })
            .collect();

        chain.push(RuleTrace {
            rule: self.fallback.name,
            status: if matched {
                MatchStatus::Superseded
            } else {
                MatchStatus::Matched
            },
            outcome: self.fallback.outcome.status,
        });
        chain
    }
}

pub const UNKNOWN_DOMAIN_RULE: &str = "unknown-file-type";

/// Select the verdict for a classified file.
#[must_use]
pub fn decide(classification: Classification, features: &ContentFeatures) -> Decision {
    match classification {
        Classification::Backend(category) => BACKEND_RULES.evaluate(category, features),
        Classification::Frontend(category) => FRONTEND_RULES.evaluate(category, features),
        Classification::Unknown => Decision {
            rule: UNKNOWN_DOMAIN_RULE,
            verdict: Verdict::unknown_file_type(),
        },
    }
}

/// Full rule chain for a classified file; empty for unknown domains.
#[must_use]
pub fn trace(classification: Classification, features: &ContentFeatures) -> Vec<RuleTrace> {
    match classification {
        Classification::Backend(category) => BACKEND_RULES.trace(category, features),
        Classification::Frontend(category) => FRONTEND_RULES.trace(category, features),
        Classification::Unknown => Vec::new(),
    }
}

// ============================================================================
// Backend
// ============================================================================

const REPLACE_REQUIRE_ROLE_ISSUE: &str = "requireRole() should be replaced with requirePageAccess()";
const REPLACE_REQUIRE_ROLE_PLAN: &str = "Replace requireRole with requirePageAccess";
const MISSING_MIDDLEWARE_ISSUE: &str = "Missing requirePageAccess or requireRole middleware";

const fn is_controller(category: BackendCategory) -> bool {
    matches!(
        category,
        BackendCategory::Controller | BackendCategory::SocketController
    )
}

pub static BACKEND_RULES: RuleTable<BackendCategory> = RuleTable {
    rules: &[
        Rule {
            name: "test-file",
            applies: |c, _| matches!(c, BackendCategory::Test),
            outcome: Outcome::settled(NotNeeded, "Test file - no RBAC needed"),
        },
        Rule {
            name: "seed-or-script",
            applies: |c, _| matches!(c, BackendCategory::SeedOrScript),
            outcome: Outcome::settled(NotNeeded, "Seed/migration script - no RBAC needed"),
        },
        Rule {
            name: "schema-model",
            applies: |c, _| matches!(c, BackendCategory::SchemaModel),
            outcome: Outcome::settled(NotNeeded, "Schema definition - no RBAC needed"),
        },
        Rule {
            name: "backend-config",
            applies: |c, _| matches!(c, BackendCategory::Config),
            outcome: Outcome::settled(NotNeeded, "Configuration file - no RBAC needed"),
        },
        Rule {
            name: "controller-page-access",
            applies: |c, f| is_controller(c) && f.uses_page_access_middleware,
            outcome: Outcome::settled(Compliant, "Using requirePageAccess middleware"),
        },
        Rule {
            name: "controller-legacy-role",
            applies: |c, f| is_controller(c) && f.uses_legacy_role_middleware,
            outcome: Outcome::action(
                NeedsMigration,
                "Using legacy requireRole middleware",
                REPLACE_REQUIRE_ROLE_ISSUE,
                REPLACE_REQUIRE_ROLE_PLAN,
            ),
        },
        Rule {
            name: "socket-permission-check",
            applies: |c, f| {
                matches!(c, BackendCategory::SocketController) && f.has_permission_check
            },
            outcome: Outcome::settled(Compliant, "Socket controller with permission checks"),
        },
        Rule {
            name: "socket-unchecked",
            applies: |c, _| matches!(c, BackendCategory::SocketController),
            outcome: Outcome::action(
                NeedsMigration,
                "Socket controller without explicit permission checks",
                "Socket operations need permission validation",
                "Add permission checks to socket handlers",
            ),
        },
        Rule {
            name: "controller-unprotected",
            applies: |c, _| matches!(c, BackendCategory::Controller),
            outcome: Outcome::action(
                NeedsMigration,
                "Controller without RBAC middleware",
                MISSING_MIDDLEWARE_ISSUE,
                "Add requirePageAccess middleware to controller routes",
            ),
        },
        Rule {
            name: "routes-page-access",
            applies: |c, f| matches!(c, BackendCategory::Routes) && f.uses_page_access_middleware,
            outcome: Outcome::settled(Compliant, "Routes use requirePageAccess middleware"),
        },
        Rule {
            name: "routes-legacy-role",
            applies: |c, f| matches!(c, BackendCategory::Routes) && f.uses_legacy_role_middleware,
            outcome: Outcome::action(
                NeedsMigration,
                "Routes use legacy requireRole middleware",
                REPLACE_REQUIRE_ROLE_ISSUE,
                REPLACE_REQUIRE_ROLE_PLAN,
            ),
        },
        Rule {
            name: "routes-unprotected",
            applies: |c, _| matches!(c, BackendCategory::Routes),
            outcome: Outcome::action(
                NeedsMigration,
                "Routes without RBAC middleware",
                MISSING_MIDDLEWARE_ISSUE,
                "Add requirePageAccess middleware to routes",
            ),
        },
        Rule {
            name: "service-role-logic",
            applies: |c, f| matches!(c, BackendCategory::Service) && f.has_role_check,
            outcome: Outcome::action(
                NeedsMigration,
                "Service contains role-based logic",
                "Role checks should be in controller/middleware, not service",
                "Move permission checks to controller/middleware layer",
            ),
        },
        Rule {
            name: "service",
            applies: |c, _| matches!(c, BackendCategory::Service),
            outcome: Outcome::settled(NotNeeded, "Service file - business logic only"),
        },
        Rule {
            name: "auth-middleware",
            applies: |c, _| matches!(c, BackendCategory::Middleware(MiddlewareKind::Auth)),
            outcome: Outcome::action(
                PartialReview,
                "Auth middleware exports requireRole for backward compatibility",
                "Still exports requireRole function",
                "Keep for backward compatibility, use requirePageAccess in new code",
            ),
        },
        Rule {
            name: "page-access-middleware",
            applies: |c, _| matches!(c, BackendCategory::Middleware(MiddlewareKind::PageAccess)),
            outcome: Outcome::settled(Compliant, "Page access middleware - core RBAC component"),
        },
        Rule {
            name: "middleware",
            applies: |c, _| matches!(c, BackendCategory::Middleware(_)),
            outcome: Outcome::settled(NotNeeded, "Middleware file (not auth-related)"),
        },
    ],
    fallback: Rule {
        name: "backend-default",
        applies: |_, _| true,
        outcome: Outcome::settled(NotNeeded, "Backend utility/file"),
    },
};

// ============================================================================
// Frontend
// ============================================================================

const ROLE_CHECK_REPLACEMENT_PLAN: &str = "Replace with permission checks using usePageAccess hook";

const fn has_role_based_logic(f: &ContentFeatures) -> bool {
    f.uses_legacy_role_hoc || f.has_role_string_comparison || f.has_hardcoded_role_list
}

pub static FRONTEND_RULES: RuleTable<FrontendCategory> = RuleTable {
    rules: &[
        Rule {
            name: "auth-page",
            applies: |c, _| matches!(c, FrontendCategory::AuthPage),
            outcome: Outcome::settled(NotNeeded, "Auth/public page - no RBAC needed"),
        },
        Rule {
            name: "ui-demo",
            applies: |c, _| matches!(c, FrontendCategory::UiDemo),
            outcome: Outcome::settled(NotNeeded, "UI Interface demo page - no RBAC needed"),
        },
        Rule {
            name: "sidebar-menu",
            applies: |c, _| matches!(c, FrontendCategory::DataJson(DataFileKind::SidebarMenu)),
            outcome: Outcome::action(
                NeedsMigration,
                "Hardcoded role-based sidebar menu filtering",
                "Uses switch statement with hardcoded roles (superadmin, hr, admin, etc.)",
                "Replace with permission-based filtering using PermissionContext",
            ),
        },
        Rule {
            name: "horizontal-sidebar",
            applies: |c, _| {
                matches!(
                    c,
                    FrontendCategory::DataJson(DataFileKind::HorizontalSidebar)
                )
            },
            outcome: Outcome::action(
                NeedsMigration,
                "Hardcoded role-based horizontal menu filtering",
                "Uses roles: [] arrays with hardcoded role values",
                "Replace with permission-based filtering",
            ),
        },
        Rule {
            name: "route-definitions",
            applies: |c, _| {
                matches!(
                    c,
                    FrontendCategory::DataJson(DataFileKind::RouteDefinitions)
                )
            },
            outcome: Outcome::settled(NotNeeded, "Route definitions file - no RBAC needed"),
        },
        Rule {
            name: "static-data",
            applies: |c, _| matches!(c, FrontendCategory::DataJson(DataFileKind::Static)),
            outcome: Outcome::settled(NotNeeded, "Static data file"),
        },
        Rule {
            name: "legacy-role-hoc",
            applies: |c, _| matches!(c, FrontendCategory::Router(RouterKind::LegacyRoleHoc)),
            outcome: Outcome::action(
                NeedsMigration,
                "Legacy role-based route protection HOC",
                "withRoleCheck uses hardcoded roles instead of permissions",
                "Replace with PageAccessGuard or usePageAccess hook",
            ),
        },
        Rule {
            name: "router-configuration",
            applies: |c, _| matches!(c, FrontendCategory::Router(RouterKind::Configuration)),
            outcome: Outcome::settled(NotNeeded, "Router configuration file"),
        },
        Rule {
            name: "router-utility",
            applies: |c, _| matches!(c, FrontendCategory::Router(RouterKind::Utility)),
            outcome: Outcome::settled(NotNeeded, "Router utility file"),
        },
        Rule {
            name: "modal-guarded",
            applies: |c, f| matches!(c, FrontendCategory::Modal) && f.has_permission_guarded_control,
            outcome: Outcome::settled(Compliant, "Modal uses permission-based controls"),
        },
        Rule {
            name: "modal-unprotected-actions",
            applies: |c, f| {
                matches!(c, FrontendCategory::Modal)
                    && (f.has_unprotected_action_button
                        || f.has_unprotected_submit_button
                        || f.has_inline_action_handler)
            },
            outcome: Outcome::action(
                NeedsMigration,
                "Modal has action buttons without permission checks",
                "Edit/Delete/Create buttons need PermissionButton wrapper",
                "Wrap action buttons with PermissionButton component",
            ),
        },
        Rule {
            name: "modal-review",
            applies: |c, _| matches!(c, FrontendCategory::Modal),
            outcome: Outcome::action(
                PartialReview,
                "Modal file - needs manual review for action buttons",
                "",
                "Review for action button permissions",
            ),
        },
        Rule {
            name: "permission-hook",
            applies: |c, _| matches!(c, FrontendCategory::Hook(HookKind::PermissionHook)),
            outcome: Outcome::settled(Compliant, "Core permission/authorization hook"),
        },
        Rule {
            name: "role-filter-hook",
            applies: |c, _| matches!(c, FrontendCategory::Hook(HookKind::RoleFilter)),
            outcome: Outcome::action(
                NeedsMigration,
                "Hook contains role-based filtering logic",
                "Hardcoded role filtering",
                "Replace with permission-based filtering",
            ),
        },
        Rule {
            name: "utility-hook",
            applies: |c, _| matches!(c, FrontendCategory::Hook(HookKind::Utility)),
            outcome: Outcome::settled(NotNeeded, "Utility hook - no RBAC needed"),
        },
        Rule {
            name: "api-service",
            applies: |c, _| matches!(c, FrontendCategory::ApiService),
            outcome: Outcome::settled(NotNeeded, "API service layer - no RBAC needed"),
        },
        Rule {
            name: "feature-permission-based",
            applies: |c, f| {
                matches!(c, FrontendCategory::FeatureModule)
                    && (f.has_permission_guarded_control || f.has_page_access_guard)
                    && !has_role_based_logic(f)
            },
            outcome: Outcome::settled(Compliant, "Uses permission-based access control"),
        },
        Rule {
            name: "feature-legacy-hoc",
            applies: |c, f| matches!(c, FrontendCategory::FeatureModule) && f.uses_legacy_role_hoc,
            outcome: Outcome::action(
                NeedsMigration,
                "Uses legacy withRoleCheck HOC",
                "withRoleCheck should be replaced with PageAccessGuard",
                "Replace withRoleCheck HOC with PageAccessGuard or usePageAccess hook",
            ),
        },
        Rule {
            name: "feature-role-comparison",
            applies: |c, f| {
                matches!(c, FrontendCategory::FeatureModule) && f.has_role_string_comparison
            },
            outcome: Outcome::action(
                NeedsMigration,
                "Contains hardcoded role comparisons",
                "user?.role === comparison found",
                ROLE_CHECK_REPLACEMENT_PLAN,
            ),
        },
        Rule {
            name: "feature-role-list",
            applies: |c, f| {
                matches!(c, FrontendCategory::FeatureModule) && f.has_hardcoded_role_list
            },
            outcome: Outcome::action(
                NeedsMigration,
                "Contains hardcoded role lists",
                "allowedRoles or role array literal found",
                ROLE_CHECK_REPLACEMENT_PLAN,
            ),
        },
        Rule {
            name: "feature-unprotected-buttons",
            applies: |c, f| {
                matches!(c, FrontendCategory::FeatureModule) && f.has_unprotected_action_button
            },
            outcome: Outcome::action(
                PartialReview,
                "May have unprotected action buttons",
                "Potential unprotected buttons",
                "Review and wrap with PermissionButton",
            ),
        },
        Rule {
            name: "feature-review",
            applies: |c, _| matches!(c, FrontendCategory::FeatureModule),
            outcome: Outcome::action(
                PartialReview,
                "Feature module - needs manual review for RBAC",
                "",
                "Review for permission-based access controls",
            ),
        },
        Rule {
            name: "permission-component",
            applies: |c, _| {
                matches!(
                    c,
                    FrontendCategory::CoreComponent(ComponentKind::PermissionRelated)
                )
            },
            outcome: Outcome::settled(Compliant, "Permission-related component"),
        },
        Rule {
            name: "ui-component",
            applies: |c, _| matches!(c, FrontendCategory::CoreComponent(ComponentKind::Ui)),
            outcome: Outcome::settled(NotNeeded, "UI component - no RBAC needed"),
        },
        Rule {
            name: "common-component",
            applies: |c, _| matches!(c, FrontendCategory::CommonComponent),
            outcome: Outcome::settled(NotNeeded, "Common UI component - no RBAC needed"),
        },
        Rule {
            name: "utils",
            applies: |c, _| matches!(c, FrontendCategory::Utils),
            outcome: Outcome::settled(NotNeeded, "Utility function - no RBAC needed"),
        },
        Rule {
            name: "types",
            applies: |c, _| matches!(c, FrontendCategory::Types),
            outcome: Outcome::settled(NotNeeded, "Type definition file - no RBAC needed"),
        },
        Rule {
            name: "permission-context",
            applies: |c, _| matches!(c, FrontendCategory::Context(ContextKind::Permission)),
            outcome: Outcome::settled(Compliant, "Permission context provider"),
        },
        Rule {
            name: "context",
            applies: |c, _| matches!(c, FrontendCategory::Context(ContextKind::General)),
            outcome: Outcome::settled(NotNeeded, "Context provider - no RBAC needed"),
        },
        Rule {
            name: "frontend-config",
            applies: |c, _| matches!(c, FrontendCategory::Config),
            outcome: Outcome::settled(NotNeeded, "Configuration file - no RBAC needed"),
        },
    ],
    fallback: Rule {
        name: "frontend-default",
        applies: |_, _| true,
        outcome: Outcome::action(
            PartialReview,
            "React file - needs manual review",
            "",
            "Review for RBAC compliance",
        ),
    },
};

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
