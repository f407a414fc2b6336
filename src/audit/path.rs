use std::fmt;

use serde::Serialize;

/// Which half of the codebase a file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileDomain {
    Backend,
    Frontend,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MiddlewareKind {
    /// `auth.js`, which still exports the legacy `requireRole`.
    Auth,
    /// `pageAccess.js`, the page-access middleware itself.
    PageAccess,
    General,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendCategory {
    Test,
    SeedOrScript,
    SchemaModel,
    Config,
    Controller,
    SocketController,
    Routes,
    Service,
    Middleware(MiddlewareKind),
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataFileKind {
    SidebarMenu,
    HorizontalSidebar,
    RouteDefinitions,
    Static,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouterKind {
    LegacyRoleHoc,
    Configuration,
    Utility,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HookKind {
    PermissionHook,
    RoleFilter,
    Utility,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    PermissionRelated,
    Ui,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextKind {
    Permission,
    General,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FrontendCategory {
    AuthPage,
    UiDemo,
    DataJson(DataFileKind),
    Router(RouterKind),
    Modal,
    Hook(HookKind),
    ApiService,
    FeatureModule,
    CoreComponent(ComponentKind),
    CommonComponent,
    Utils,
    Types,
    Context(ContextKind),
    Config,
    Other,
}

/// Domain plus category bucket for a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "domain", content = "category", rename_all = "snake_case")]
pub enum Classification {
    Backend(BackendCategory),
    Frontend(FrontendCategory),
    Unknown,
}

impl Classification {
    #[must_use]
    pub const fn domain(&self) -> FileDomain {
        match self {
            Self::Backend(_) => FileDomain::Backend,
            Self::Frontend(_) => FileDomain::Frontend,
            Self::Unknown => FileDomain::Unknown,
        }
    }

    /// Whether any rule for this category looks at file content.
    ///
    /// Categories that answer from the path alone skip the content probe.
    #[must_use]
    pub const fn consults_content(&self) -> bool {
        matches!(
            self,
            Self::Backend(
                BackendCategory::Controller
                    | BackendCategory::SocketController
                    | BackendCategory::Routes
                    | BackendCategory::Service
            ) | Self::Frontend(FrontendCategory::Modal | FrontendCategory::FeatureModule)
        )
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Backend(category) => write!(f, "backend / {category:?}"),
            Self::Frontend(category) => write!(f, "frontend / {category:?}"),
            Self::Unknown => f.write_str("unknown"),
        }
    }
}

/// Normalize a manifest path: trim whitespace and use forward slashes.
#[must_use]
pub fn normalize_path(raw: &str) -> String {
    raw.trim().replace('\\', "/")
}

/// Classify a normalized relative path into a domain and category.
#[must_use]
pub fn classify(path: &str) -> Classification {
    let lower = path.to_lowercase();
    let file_name = lower.rsplit('/').next().unwrap_or(&lower);

    if path.starts_with("backend") {
        Classification::Backend(classify_backend(&lower, file_name))
    } else if path.starts_with("react") {
        Classification::Frontend(classify_frontend(&lower, file_name))
    } else {
        Classification::Unknown
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

fn classify_backend(lower: &str, file_name: &str) -> BackendCategory {
    if contains_any(lower, &["test", "__tests__", "spec"]) {
        BackendCategory::Test
    } else if contains_any(lower, &["seed", "script", "migration"]) {
        BackendCategory::SeedOrScript
    } else if lower.contains("models") && contains_any(lower, &[".schema.js", ".model.js"]) {
        BackendCategory::SchemaModel
    } else if lower.contains("config") {
        BackendCategory::Config
    } else if lower.contains("controller") {
        if lower.contains("socket") {
            BackendCategory::SocketController
        } else {
            BackendCategory::Controller
        }
    } else if lower.contains("routes") {
        BackendCategory::Routes
    } else if lower.contains("service") {
        BackendCategory::Service
    } else if lower.contains("middleware") {
        BackendCategory::Middleware(match file_name {
            "auth.js" => MiddlewareKind::Auth,
            "pageaccess.js" => MiddlewareKind::PageAccess,
            _ => MiddlewareKind::General,
        })
    } else {
        BackendCategory::Other
    }
}

const AUTH_PAGE_MARKERS: &[&str] = &[
    "feature-module/auth",
    "login",
    "register",
    "forgotpassword",
    "resetpassword",
    "emailverification",
    "twostep",
    "lockscreen",
];

fn classify_frontend(lower: &str, file_name: &str) -> FrontendCategory {
    if contains_any(lower, AUTH_PAGE_MARKERS) {
        FrontendCategory::AuthPage
    } else if contains_any(lower, &["uiinterface", "ui-interface"]) {
        FrontendCategory::UiDemo
    } else if lower.contains("data/json") {
        FrontendCategory::DataJson(data_file_kind(lower, file_name))
    } else if lower.contains("router") {
        FrontendCategory::Router(router_kind(file_name))
    } else if lower.contains("modal") {
        FrontendCategory::Modal
    } else if lower.contains("hooks") {
        FrontendCategory::Hook(hook_kind(file_name))
    } else if lower.contains("services") {
        FrontendCategory::ApiService
    } else if lower.contains("feature-module") {
        FrontendCategory::FeatureModule
    } else if lower.contains("core/components") {
        let kind = if contains_any(
            file_name,
            &["rolebasedrenderer", "permissionfield", "roledebugger"],
        ) {
            ComponentKind::PermissionRelated
        } else {
            ComponentKind::Ui
        };
        FrontendCategory::CoreComponent(kind)
    } else if lower.contains("core/common") {
        FrontendCategory::CommonComponent
    } else if lower.contains("utils") {
        FrontendCategory::Utils
    } else if lower.contains("types") {
        FrontendCategory::Types
    } else if lower.contains("contexts") {
        let kind = if file_name.contains("permission") {
            ContextKind::Permission
        } else {
            ContextKind::General
        };
        FrontendCategory::Context(kind)
    } else if lower.contains("config") {
        FrontendCategory::Config
    } else {
        FrontendCategory::Other
    }
}

fn data_file_kind(lower: &str, file_name: &str) -> DataFileKind {
    match file_name {
        "sidebarmenu.jsx" => DataFileKind::SidebarMenu,
        "horizontalsidebar.tsx" => DataFileKind::HorizontalSidebar,
        "all_routes.tsx" => DataFileKind::RouteDefinitions,
        _ if lower.contains("router") => DataFileKind::RouteDefinitions,
        _ => DataFileKind::Static,
    }
}

fn router_kind(file_name: &str) -> RouterKind {
    if file_name == "withrolecheck.jsx" {
        RouterKind::LegacyRoleHoc
    } else if file_name == "router.jsx" || file_name.starts_with("router.link") {
        RouterKind::Configuration
    } else {
        RouterKind::Utility
    }
}

fn hook_kind(file_name: &str) -> HookKind {
    if contains_any(file_name, &["usepageaccess", "useauth"]) {
        HookKind::PermissionHook
    } else if file_name.contains("dashboardrolefilter") {
        HookKind::RoleFilter
    } else {
        HookKind::Utility
    }
}

#[cfg(test)]
#[path = "path_tests.rs"]
mod tests;
