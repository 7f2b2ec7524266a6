//! Framework vocabulary.
//!
//! A protocol specification is generated *for* a framework. The framework decides which domains get Objective-C
//! bindings: the `Test` framework exposes everything so fixtures can exercise every code path, the others expose a
//! fixed allowlist.
//!
//! ## Examples
//! ```rust
//! use inspector_core::frameworks::{self, Framework};
//!
//! assert_eq!(frameworks::from_str("JavaScriptCore"), Some(Framework::JavaScriptCore));
//! assert!(frameworks::exposes_objc_event_dispatcher(Framework::Test, "Debugger"));
//! assert!(!frameworks::exposes_objc_event_dispatcher(Framework::Global, "Debugger"));
//! ```

/// Stable identifier for a target framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Framework {
    #[default]
    Global,
    JavaScriptCore,
    WebInspector,
    Test,
}

/// Metadata for a framework.
#[derive(Debug, Clone, Copy)]
pub struct FrameworkInfo {
    pub id: Framework,
    pub canonical: &'static str,
    pub description: &'static str,
}

/// Registry of frameworks.
pub const FRAMEWORKS: &[FrameworkInfo] = &[
    FrameworkInfo {
        id: Framework::Global,
        canonical: "Global",
        description: "Framework-independent domains.",
    },
    FrameworkInfo {
        id: Framework::JavaScriptCore,
        canonical: "JavaScriptCore",
        description: "Domains implemented by the JavaScript engine.",
    },
    FrameworkInfo {
        id: Framework::WebInspector,
        canonical: "WebInspector",
        description: "Domains implemented by the inspector frontend.",
    },
    FrameworkInfo {
        id: Framework::Test,
        canonical: "Test",
        description: "Fixture framework; exposes every domain.",
    },
];

/// Domains whose events are dispatched through Objective-C outside the `Test` framework.
pub const OBJC_EVENT_DISPATCHER_DOMAINS: &[&str] = &["CSS", "DOM", "DOMStorage", "Network", "Page", "Timeline"];

/// Resolve a framework name (exact spelling).
pub fn from_str(name: &str) -> Option<Framework> {
    FRAMEWORKS.iter().find(|f| f.canonical == name).map(|f| f.id)
}

/// Return the canonical spelling for a framework.
pub fn as_str(id: Framework) -> &'static str {
    info_for(id).canonical
}

/// Return the full metadata entry for a framework.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: Framework) -> &'static FrameworkInfo {
    FRAMEWORKS
        .iter()
        .find(|f| f.id == id)
        .expect("framework info missing")
}

/// Whether `domain_name` gets an Objective-C event dispatcher when generating for `framework`.
pub fn exposes_objc_event_dispatcher(framework: Framework, domain_name: &str) -> bool {
    match framework {
        Framework::Test => true,
        _ => OBJC_EVENT_DISPATCHER_DOMAINS.contains(&domain_name),
    }
}

impl std::fmt::Display for Framework {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(as_str(*self))
    }
}
