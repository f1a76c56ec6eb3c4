//! Module-Constructor Selection
//!
//! Picks, per declared module, the first constructor in declaration order
//! that either takes no arguments or takes exactly one argument whose type
//! the host instance satisfies. A nullary selection omits the module from
//! the chain entirely; the container constructs it itself. A unary selection
//! supplies the module by constructing it with the host instance.

use weld_model::naming::module_param_name;
use weld_model::{ModuleDecl, TypeRef};
use weld_relations::TypeRelations;

use crate::errors::GenerateError;
use crate::expr::Expr;

/// Outcome of constructor selection for one module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ModulePlan {
    /// Nullary constructor selected; nothing is emitted for the module.
    Omitted,
    /// Unary constructor selected; the module is built with the host.
    Supplied {
        module: TypeRef,
        param_name: String,
        expr: Expr,
    },
}

pub(crate) fn plan_module(
    host: &TypeRef,
    module: &ModuleDecl,
    relations: &dyn TypeRelations,
) -> Result<ModulePlan, GenerateError> {
    for constructor in &module.constructors {
        match constructor.params.as_slice() {
            [] => return Ok(ModulePlan::Omitted),
            [param] if relations.satisfies(host, param) => {
                return Ok(ModulePlan::Supplied {
                    module: module.identity.clone(),
                    param_name: module_param_name(&module.identity),
                    expr: Expr::new_instance(module.identity.clone(), vec![Expr::Host]),
                });
            }
            _ => {}
        }
    }
    Err(GenerateError::NoValidConstructor {
        scope: host.clone(),
        module: module.identity.clone(),
    })
}
