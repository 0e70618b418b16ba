//! Method groups and wire method-name construction.
//!
//! Remote methods are namespaced: the wire name is the group prefix joined
//! to the snake_cased action with a dot, e.g. `core.module_stats`. Call
//! sites may spell actions in camelCase; [`decamelize`] converts at word
//! boundaries only, so already-snake_case spellings pass through unchanged.
//!
//! # Example
//!
//! ```
//! use msfrpc_client::method::{wire_method, MethodGroup};
//!
//! assert_eq!(wire_method(MethodGroup::Core, "moduleStats"), "core.module_stats");
//! assert_eq!(wire_method(MethodGroup::Session, "meterpreter_read"), "session.meterpreter_read");
//! ```

use std::fmt;

/// The closed set of method namespaces exposed by the RPC daemon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodGroup {
    /// Authentication (login/logout/token management).
    Auth,
    /// Base methods without a namespace of their own.
    Base,
    /// Framework consoles.
    Console,
    /// Core framework state (version, threads, module stats).
    Core,
    /// Database-backed hosts, services and loot.
    Db,
    /// Background jobs.
    Job,
    /// Module search, info and execution.
    Module,
    /// Plugin loading.
    Plugin,
    /// Open sessions (shell, meterpreter).
    Session,
}

/// All method groups, in wire-name order.
pub const METHOD_GROUPS: [MethodGroup; 9] = [
    MethodGroup::Auth,
    MethodGroup::Base,
    MethodGroup::Console,
    MethodGroup::Core,
    MethodGroup::Db,
    MethodGroup::Job,
    MethodGroup::Module,
    MethodGroup::Plugin,
    MethodGroup::Session,
];

impl MethodGroup {
    /// Wire namespace prefix for this group.
    pub fn as_str(self) -> &'static str {
        match self {
            MethodGroup::Auth => "auth",
            MethodGroup::Base => "base",
            MethodGroup::Console => "console",
            MethodGroup::Core => "core",
            MethodGroup::Db => "db",
            MethodGroup::Job => "job",
            MethodGroup::Module => "module",
            MethodGroup::Plugin => "plugin",
            MethodGroup::Session => "session",
        }
    }
}

impl fmt::Display for MethodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convert a camelCase action to snake_case.
///
/// An underscore is inserted before an uppercase letter that follows a
/// lowercase letter or digit; no other rewriting happens, so snake_case
/// input comes back unchanged.
pub fn decamelize(action: &str) -> String {
    let mut out = String::with_capacity(action.len() + 4);
    let mut prev_word_char = false;
    for ch in action.chars() {
        if ch.is_ascii_uppercase() {
            if prev_word_char {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
            prev_word_char = false;
        } else {
            out.push(ch);
            prev_word_char = ch.is_ascii_lowercase() || ch.is_ascii_digit();
        }
    }
    out
}

/// Build the dot-joined wire method name for a group and action.
pub fn wire_method(group: MethodGroup, action: &str) -> String {
    format!("{}.{}", group.as_str(), decamelize(action))
}
