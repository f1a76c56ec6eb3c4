//! Code Model Descriptors
//!
//! Per scope, generation produces two units: a container descriptor (an
//! interface with capability supertypes, child accessors, a nested builder,
//! and one injection entry point) and an injector descriptor (the entry
//! point that reaches the governing parent container at the call site). A
//! round additionally carries at most one support unit with the shared
//! runtime ascent helper.

use serde::Serialize;
use weld_model::TypeRef;

use crate::expr::Expr;

/// Namespace of the emitted runtime support types.
pub const RUNTIME_NAMESPACE: &str = "weld.runtime";

/// Marker interface every generated container extends.
pub const CONTAINER_MARKER: &str = "Container";

/// Verbatim failure raised by the generated ascent loop when the structure
/// is exhausted.
pub const ASCENT_FAILURE_MESSAGE: &str = "parent not found";

/// The container marker type reference.
#[must_use]
pub fn container_marker() -> TypeRef {
    TypeRef::new(RUNTIME_NAMESPACE, CONTAINER_MARKER)
}

/// One parameter of a child accessor: an arity-one module instance the
/// caller supplies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessorParam {
    pub ty: TypeRef,
    pub name: String,
}

/// Factory-accessor method declared on a parent container, producing the
/// child's container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessorMethod {
    pub name: String,
    pub child_container: TypeRef,
    pub params: Vec<AccessorParam>,
}

/// One setter of the nested builder, for an arity-one module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetterMethod {
    pub name: String,
    pub module: TypeRef,
}

/// Nested builder sub-interface descriptor. Arity-zero modules never appear
/// here; the container constructs them itself.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct BuilderUnit {
    pub setters: Vec<SetterMethod>,
}

/// Generated container interface descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContainerUnit {
    pub namespace: String,
    pub name: String,
    /// Capability set: the container marker plus declared capabilities.
    pub extends: Vec<TypeRef>,
    /// Accessors for resolved children, in binding order.
    pub accessors: Vec<AccessorMethod>,
    pub builder: BuilderUnit,
    /// Target type of the injection entry point.
    pub inject_target: TypeRef,
}

impl ContainerUnit {
    #[must_use]
    pub fn identity(&self) -> TypeRef {
        TypeRef::new(self.namespace.clone(), self.name.clone())
    }

    /// Identities referenced by this unit, in declaration order.
    #[must_use]
    pub fn referenced(&self) -> Vec<TypeRef> {
        let mut out = self.extends.clone();
        for accessor in &self.accessors {
            out.push(accessor.child_container.clone());
            out.extend(accessor.params.iter().map(|p| p.ty.clone()));
        }
        out.extend(self.builder.setters.iter().map(|s| s.module.clone()));
        out.push(self.inject_target.clone());
        out
    }
}

/// Generated injector descriptor: a namespace-scoped entry point wiring the
/// scope to its governing parent container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InjectorUnit {
    pub namespace: String,
    pub name: String,
    /// The scope type being injected.
    pub target: TypeRef,
    /// The scope's own container type.
    pub container: TypeRef,
    /// The governing parent's container type.
    pub parent_container: TypeRef,
    /// Accessor invoked on the parent container.
    pub accessor: String,
    /// Expression obtaining the governing parent instance from the host.
    pub parent_access: Expr,
    /// Module instances passed to the accessor, in declaration order.
    pub module_args: Vec<Expr>,
    /// Whether `parent_access` relies on the runtime ascent helper.
    pub uses_ascent: bool,
}

impl InjectorUnit {
    #[must_use]
    pub fn identity(&self) -> TypeRef {
        TypeRef::new(self.namespace.clone(), self.name.clone())
    }

    #[must_use]
    pub fn referenced(&self) -> Vec<TypeRef> {
        let mut out = vec![
            self.target.clone(),
            self.container.clone(),
            self.parent_container.clone(),
        ];
        self.parent_access.collect_types(&mut out);
        for arg in &self.module_args {
            arg.collect_types(&mut out);
        }
        out
    }
}

/// The shared runtime ascent helper, emitted at most once per round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupportUnit {
    pub namespace: String,
    pub name: String,
}

impl SupportUnit {
    #[must_use]
    pub fn ascent() -> Self {
        Self {
            namespace: RUNTIME_NAMESPACE.to_string(),
            name: "Ascent".to_string(),
        }
    }
}

/// One emitted unit with its namespace and referenced identities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Artifact {
    Container(ContainerUnit),
    Injector(InjectorUnit),
    Support(SupportUnit),
}

impl Artifact {
    #[must_use]
    pub fn namespace(&self) -> &str {
        match self {
            Artifact::Container(c) => &c.namespace,
            Artifact::Injector(i) => &i.namespace,
            Artifact::Support(s) => &s.namespace,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Artifact::Container(c) => &c.name,
            Artifact::Injector(i) => &i.name,
            Artifact::Support(s) => &s.name,
        }
    }

    #[must_use]
    pub fn referenced(&self) -> Vec<TypeRef> {
        match self {
            Artifact::Container(c) => c.referenced(),
            Artifact::Injector(i) => i.referenced(),
            Artifact::Support(_) => vec![],
        }
    }
}
