//! Scope Declarations
//!
//! A [`ScopeNode`] is one declared injection scope: its identity, the type
//! references of the scopes it wants as parents, the capability interfaces
//! its generated container must extend, and the modules that supply its
//! dependencies. Nodes arrive in discovery order and are immutable once a
//! round starts; the root node is the single scope with `is_root` set.

use core::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::naming::default_generated_name;
use crate::types::TypeRef;

/// Fixed classification of a scope's runtime lifecycle kind.
///
/// The category drives parent-accessor synthesis in the code generator.
/// `LongLived` is reserved for the root scope; the remaining categories are
/// inferred for non-root scopes by priority-ordered subtype tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    LongLived,
    ActivityLike,
    ServiceLike,
    FragmentLike,
    ViewLike,
}

impl Category {
    /// Inference priority for non-root scopes: the first base type a scope
    /// satisfies, tested in this order, determines its category.
    pub const PRIORITY: &'static [Category] = &[
        Category::ActivityLike,
        Category::ServiceLike,
        Category::FragmentLike,
        Category::ViewLike,
    ];

    /// Canonical lowercase name, used in diagnostics.
    #[must_use = "returns the string representation without modifying self"]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::LongLived => "long-lived",
            Category::ActivityLike => "activity",
            Category::ServiceLike => "service",
            Category::FragmentLike => "fragment",
            Category::ViewLike => "view",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "long-lived" => Ok(Category::LongLived),
            "activity" => Ok(Category::ActivityLike),
            "service" => Ok(Category::ServiceLike),
            "fragment" => Ok(Category::FragmentLike),
            "view" => Ok(Category::ViewLike),
            _ => Err(()),
        }
    }
}

/// One constructor of a module type, as an ordered parameter list.
///
/// Only nullary and unary constructors can ever be selected for generation;
/// higher arities are representable but never qualify.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Constructor {
    #[serde(default)]
    pub params: Vec<TypeRef>,
}

impl Constructor {
    #[must_use]
    pub fn nullary() -> Self {
        Self { params: vec![] }
    }

    #[must_use]
    pub fn unary(param: TypeRef) -> Self {
        Self {
            params: vec![param],
        }
    }

    #[must_use]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// A module declared on a scope, supplying constructed dependencies to the
/// scope's container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDecl {
    pub identity: TypeRef,
    /// Constructors in declaration order; selection always picks the first
    /// qualifying one.
    pub constructors: Vec<Constructor>,
}

impl ModuleDecl {
    #[must_use]
    pub fn new(identity: TypeRef, constructors: Vec<Constructor>) -> Self {
        Self {
            identity,
            constructors,
        }
    }
}

/// A declared injection scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeNode {
    /// Identity of the annotated scope type.
    pub identity: TypeRef,
    /// Ordered parent type references; empty means "child of the root".
    /// More than one reference is permitted in DAG mode.
    #[serde(default)]
    pub declared_parents: Vec<TypeRef>,
    /// Interfaces the generated container must extend, beyond the marker.
    #[serde(default)]
    pub capabilities: Vec<TypeRef>,
    /// Modules in declaration order; the generated chain never resorts them.
    #[serde(default)]
    pub modules: Vec<ModuleDecl>,
    /// Explicit category override bypassing the predicate scan.
    #[serde(default)]
    pub explicit_category: Option<Category>,
    /// Simple name of the generated container type.
    #[serde(default)]
    pub generated_name: String,
    /// Namespace the generated artifacts are placed in.
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub is_root: bool,
}

impl ScopeNode {
    /// A non-root scope with defaulted generated name and namespace.
    #[must_use]
    pub fn new(identity: TypeRef) -> Self {
        let generated_name = default_generated_name(&identity);
        let namespace = identity.namespace.clone();
        Self {
            identity,
            declared_parents: vec![],
            capabilities: vec![],
            modules: vec![],
            explicit_category: None,
            generated_name,
            namespace,
            is_root: false,
        }
    }

    /// The distinguished root scope.
    #[must_use]
    pub fn root(identity: TypeRef) -> Self {
        Self {
            is_root: true,
            ..Self::new(identity)
        }
    }

    #[must_use]
    pub fn with_parent(mut self, parent: TypeRef) -> Self {
        self.declared_parents.push(parent);
        self
    }

    #[must_use]
    pub fn with_capability(mut self, capability: TypeRef) -> Self {
        self.capabilities.push(capability);
        self
    }

    #[must_use]
    pub fn with_module(mut self, module: ModuleDecl) -> Self {
        self.modules.push(module);
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.explicit_category = Some(category);
        self
    }

    /// Fills generated name and namespace from the identity when a
    /// deserialized record left them empty.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.generated_name.is_empty() {
            self.generated_name = default_generated_name(&self.identity);
        }
        if self.namespace.is_empty() {
            self.namespace = self.identity.namespace.clone();
        }
        self
    }

    /// Identity of the generated container type for this scope.
    #[must_use]
    pub fn container_ref(&self) -> TypeRef {
        TypeRef::new(self.namespace.clone(), self.generated_name.clone())
    }
}
