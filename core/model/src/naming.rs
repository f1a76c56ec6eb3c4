//! Deterministic Artifact Naming
//!
//! All generated names derive from the declaring scope's identity or its
//! generated container name. Re-running generation over an identical node set
//! must produce identical names, so every function here is pure.

use crate::types::TypeRef;

/// Default simple name of the generated container for a scope identity.
#[must_use]
pub fn default_generated_name(identity: &TypeRef) -> String {
    format!("{}Container", identity.name)
}

/// Simple name of the generated injector for a scope identity.
#[must_use]
pub fn injector_name(identity: &TypeRef) -> String {
    format!("{}Injector", identity.name)
}

/// Accessor method name on a parent container, derived from the child's
/// generated container name by lowering the first letter.
#[must_use]
pub fn accessor_name(generated_name: &str) -> String {
    lower_first(generated_name)
}

/// Builder setter and accessor parameter name for a module type.
#[must_use]
pub fn module_param_name(module: &TypeRef) -> String {
    lower_first(&module.name)
}

fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
