//! Code-Model Generation
//!
//! Builds container and injector descriptors for every scope that survived
//! resolution. Accessor sets are computed from the graph multimaps as pure
//! data first; the emission strategy only decides artifact order:
//!
//! - [`EmissionStrategy::Flat`] - one pass over all scopes in encounter
//!   order. Required for DAG graphs, where a scope may have several parents
//!   but is emitted exactly once.
//! - [`EmissionStrategy::Recursive`] - depth-first from the root, children
//!   before parents, matching the legacy tree emitter.
//!
//! Per-scope generation failures abort only that scope's emission and are
//! reported through the diagnostics sink.

use rustc_hash::{FxHashMap, FxHashSet};
use weld_model::naming::{accessor_name, injector_name};
use weld_model::{ScopeNode, TypeRef};
use weld_relations::TypeRelations;
use weld_resolver::{Diagnostics, Resolution};

use crate::access::{ParentAccess, parent_access};
use crate::errors::GenerateError;
use crate::expr::Expr;
use crate::model::{
    AccessorMethod, AccessorParam, Artifact, BuilderUnit, ContainerUnit, InjectorUnit,
    SetterMethod, SupportUnit, container_marker,
};
use crate::modules::{ModulePlan, plan_module};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmissionStrategy {
    #[default]
    Flat,
    Recursive,
}

/// Output of one generation pass: the root container descriptor (owned by
/// the application, not emitted as an artifact), the emitted units, and the
/// diagnostics collected along the way.
#[derive(Debug)]
pub struct GenerationOutput {
    pub root_container: ContainerUnit,
    pub artifacts: Vec<Artifact>,
    pub diagnostics: Diagnostics,
}

struct SuppliedModule {
    module: TypeRef,
    param_name: String,
    expr: Expr,
}

struct NodePlan {
    supplied: Vec<SuppliedModule>,
    parent_container: TypeRef,
    access: ParentAccess,
}

pub struct Generator<'a> {
    relations: &'a dyn TypeRelations,
    strategy: EmissionStrategy,
}

impl<'a> Generator<'a> {
    #[must_use]
    pub fn new(relations: &'a dyn TypeRelations) -> Self {
        Self {
            relations,
            strategy: EmissionStrategy::default(),
        }
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: EmissionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Generates all artifacts for a resolved round.
    #[must_use]
    pub fn generate(&self, resolution: &Resolution) -> GenerationOutput {
        let mut diagnostics = Diagnostics::new();
        let graph = resolution.graph();

        let mut plans: FxHashMap<TypeRef, NodePlan> = FxHashMap::default();
        let mut order: Vec<TypeRef> = vec![];
        for node in resolution.included_nodes() {
            match self.plan_node(node, resolution) {
                Ok(plan) => {
                    order.push(node.identity.clone());
                    plans.insert(node.identity.clone(), plan);
                }
                Err(err) => {
                    diagnostics.error(err.to_string(), Some(err.scope().clone()));
                }
            }
        }

        let mut artifacts = vec![];
        for identity in self.emission_order(resolution, &order, &plans) {
            let node = graph
                .node(&identity)
                .filter(|n| !n.is_root)
                .and_then(|n| plans.contains_key(&identity).then_some(n));
            let Some(node) = node else { continue };
            let plan = &plans[&identity];
            artifacts.push(Artifact::Container(
                self.container_for(node, resolution, &plans),
            ));
            artifacts.push(Artifact::Injector(injector_for(node, plan)));
        }

        if plans.values().any(|p| p.access.uses_ascent) {
            artifacts.push(Artifact::Support(SupportUnit::ascent()));
        }

        let root = graph.root().clone();
        let root_container = self.root_container(&root, resolution, &plans, &mut diagnostics);

        GenerationOutput {
            root_container,
            artifacts,
            diagnostics,
        }
    }

    fn plan_node(
        &self,
        node: &ScopeNode,
        resolution: &Resolution,
    ) -> Result<NodePlan, GenerateError> {
        let graph = resolution.graph();
        // The classifier guarantees a category for every included scope.
        let Some(category) = resolution.category_of(&node.identity) else {
            return Err(GenerateError::MissingGoverningParent {
                scope: node.identity.clone(),
            });
        };
        let parent_id = graph
            .governing_parent(&node.identity)
            .ok_or_else(|| GenerateError::MissingGoverningParent {
                scope: node.identity.clone(),
            })?
            .clone();
        let parent_category = resolution.category_of(&parent_id).ok_or_else(|| {
            GenerateError::UnclassifiedParent {
                scope: node.identity.clone(),
                parent: parent_id.clone(),
            }
        })?;
        let access = parent_access(&node.identity, category, &parent_id, parent_category)?;

        let mut supplied = vec![];
        for module in &node.modules {
            match plan_module(&node.identity, module, self.relations)? {
                ModulePlan::Omitted => {}
                ModulePlan::Supplied {
                    module,
                    param_name,
                    expr,
                } => supplied.push(SuppliedModule {
                    module,
                    param_name,
                    expr,
                }),
            }
        }

        let parent_container = graph
            .node(&parent_id)
            .map(ScopeNode::container_ref)
            .ok_or_else(|| GenerateError::MissingGoverningParent {
                scope: node.identity.clone(),
            })?;

        Ok(NodePlan {
            supplied,
            parent_container,
            access,
        })
    }

    /// Accessors a parent exposes: one per successfully planned child, in
    /// binding order.
    fn accessors_for(
        &self,
        parent: &TypeRef,
        resolution: &Resolution,
        plans: &FxHashMap<TypeRef, NodePlan>,
    ) -> Vec<AccessorMethod> {
        let graph = resolution.graph();
        graph
            .children_of(parent)
            .iter()
            .filter_map(|child_id| {
                let plan = plans.get(child_id)?;
                let child = graph.node(child_id)?;
                Some(AccessorMethod {
                    name: accessor_name(&child.generated_name),
                    child_container: child.container_ref(),
                    params: plan
                        .supplied
                        .iter()
                        .map(|s| AccessorParam {
                            ty: s.module.clone(),
                            name: s.param_name.clone(),
                        })
                        .collect(),
                })
            })
            .collect()
    }

    fn container_for(
        &self,
        node: &ScopeNode,
        resolution: &Resolution,
        plans: &FxHashMap<TypeRef, NodePlan>,
    ) -> ContainerUnit {
        let mut extends = vec![container_marker()];
        extends.extend(node.capabilities.iter().cloned());
        let setters = plans[&node.identity]
            .supplied
            .iter()
            .map(|s| SetterMethod {
                name: s.param_name.clone(),
                module: s.module.clone(),
            })
            .collect();
        ContainerUnit {
            namespace: node.namespace.clone(),
            name: node.generated_name.clone(),
            extends,
            accessors: self.accessors_for(&node.identity, resolution, plans),
            builder: BuilderUnit { setters },
            inject_target: node.identity.clone(),
        }
    }

    /// The root container is built as a descriptor only: the application
    /// owns its long-lived container, so no artifact is emitted for it.
    fn root_container(
        &self,
        root: &ScopeNode,
        resolution: &Resolution,
        plans: &FxHashMap<TypeRef, NodePlan>,
        diagnostics: &mut Diagnostics,
    ) -> ContainerUnit {
        let mut extends = vec![container_marker()];
        extends.extend(root.capabilities.iter().cloned());
        let mut setters = vec![];
        for module in &root.modules {
            match plan_module(&root.identity, module, self.relations) {
                Ok(ModulePlan::Omitted) => {}
                Ok(ModulePlan::Supplied {
                    module, param_name, ..
                }) => setters.push(SetterMethod {
                    name: param_name,
                    module,
                }),
                Err(err) => diagnostics.error(err.to_string(), Some(root.identity.clone())),
            }
        }
        ContainerUnit {
            namespace: root.namespace.clone(),
            name: root.generated_name.clone(),
            extends,
            accessors: self.accessors_for(&root.identity, resolution, plans),
            builder: BuilderUnit { setters },
            inject_target: root.identity.clone(),
        }
    }

    fn emission_order(
        &self,
        resolution: &Resolution,
        plan_order: &[TypeRef],
        plans: &FxHashMap<TypeRef, NodePlan>,
    ) -> Vec<TypeRef> {
        match self.strategy {
            EmissionStrategy::Flat => plan_order.to_vec(),
            EmissionStrategy::Recursive => {
                let graph = resolution.graph();
                let mut order = vec![];
                let mut visited = FxHashSet::default();
                visit_post_order(
                    graph,
                    &graph.root().identity.clone(),
                    &mut visited,
                    &mut order,
                );
                // Scopes detached from the root (their parents failed to
                // resolve) still emit, after the reachable ones.
                for identity in plan_order {
                    if !visited.contains(identity) {
                        order.push(identity.clone());
                    }
                }
                order.retain(|id| plans.contains_key(id));
                order
            }
        }
    }
}

fn visit_post_order(
    graph: &weld_resolver::ScopeGraph,
    identity: &TypeRef,
    visited: &mut FxHashSet<TypeRef>,
    order: &mut Vec<TypeRef>,
) {
    if !visited.insert(identity.clone()) {
        return;
    }
    for child in graph.children_of(identity) {
        visit_post_order(graph, child, visited, order);
    }
    if !graph.is_root(identity) {
        order.push(identity.clone());
    }
}

fn injector_for(node: &ScopeNode, plan: &NodePlan) -> InjectorUnit {
    InjectorUnit {
        namespace: node.namespace.clone(),
        name: injector_name(&node.identity),
        target: node.identity.clone(),
        container: node.container_ref(),
        parent_container: plan.parent_container.clone(),
        accessor: accessor_name(&node.generated_name),
        parent_access: plan.access.expr.clone(),
        module_args: plan.supplied.iter().map(|s| s.expr.clone()).collect(),
        uses_ascent: plan.access.uses_ascent,
    }
}
