//! Parent-Access Synthesis
//!
//! Fixed dispatch table, keyed by the scope's effective category, producing
//! the expression that obtains the governing parent instance at the call
//! site. Activity-like and service-like scopes are only reachable from the
//! root container. Fragment-like and view-like scopes dispatch a second
//! time on the parent's category; a view-like parent of a view-like scope
//! is the one case resolved at run time, through the shared ascent helper.

use weld_model::{Category, TypeRef};

use crate::errors::GenerateError;
use crate::expr::Expr;
use crate::model::RUNTIME_NAMESPACE;

/// Accessor off the host reaching the root container's context.
const APPLICATION_CONTEXT: &str = "applicationContext";
/// Accessor off a fragment host reaching its activity.
const ACTIVITY: &str = "activity";
/// Accessor off a fragment host reaching its parent fragment.
const PARENT_FRAGMENT: &str = "parentFragment";
/// Accessor off a view host reaching its context.
const CONTEXT: &str = "context";
/// Caller-supplied primitive reaching the enclosing structural container.
const STRUCTURAL_PARENT: &str = "structuralParent";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParentAccess {
    pub(crate) expr: Expr,
    pub(crate) uses_ascent: bool,
}

impl ParentAccess {
    fn direct(expr: Expr) -> Self {
        Self {
            expr,
            uses_ascent: false,
        }
    }
}

/// Synthesizes the governing-parent access for a non-root scope.
///
/// # Errors
///
/// Returns [`GenerateError::UnknownParentType`] when the dispatch table has
/// no entry for the parent's category.
pub(crate) fn parent_access(
    scope: &TypeRef,
    category: Category,
    parent: &TypeRef,
    parent_category: Category,
) -> Result<ParentAccess, GenerateError> {
    let host = Expr::Host;
    match category {
        // The root needs no governing parent; the generator never asks.
        Category::LongLived => Err(GenerateError::MissingGoverningParent {
            scope: scope.clone(),
        }),
        // These categories can only be injected from the root container;
        // a non-root governing parent would make the emitted cast fail at
        // run time, so it is rejected here instead.
        Category::ActivityLike | Category::ServiceLike => match parent_category {
            Category::LongLived => {
                Ok(ParentAccess::direct(Expr::call(host, APPLICATION_CONTEXT)))
            }
            _ => Err(GenerateError::UnknownParentType {
                scope: scope.clone(),
                parent: parent.clone(),
                parent_category,
            }),
        },
        Category::FragmentLike => match parent_category {
            Category::LongLived => Ok(ParentAccess::direct(Expr::call(
                Expr::call(host, ACTIVITY),
                APPLICATION_CONTEXT,
            ))),
            Category::ActivityLike => Ok(ParentAccess::direct(Expr::call(host, ACTIVITY))),
            Category::FragmentLike => {
                Ok(ParentAccess::direct(Expr::call(host, PARENT_FRAGMENT)))
            }
            _ => Err(GenerateError::UnknownParentType {
                scope: scope.clone(),
                parent: parent.clone(),
                parent_category,
            }),
        },
        Category::ViewLike => match parent_category {
            Category::LongLived => Ok(ParentAccess::direct(Expr::call(
                Expr::call(host, CONTEXT),
                APPLICATION_CONTEXT,
            ))),
            Category::ActivityLike => Ok(ParentAccess::direct(Expr::call(host, CONTEXT))),
            Category::ViewLike => Ok(ParentAccess {
                expr: ascent_expr(parent),
                uses_ascent: true,
            }),
            _ => Err(GenerateError::UnknownParentType {
                scope: scope.clone(),
                parent: parent.clone(),
                parent_category,
            }),
        },
    }
}

/// Bounded upward search through structural containers, delegated to the
/// shared emitted helper.
fn ascent_expr(parent: &TypeRef) -> Expr {
    Expr::cast(
        parent.clone(),
        Expr::call_with(
            Expr::ident(format!("{RUNTIME_NAMESPACE}.Ascent")),
            "ascend",
            vec![
                Expr::call(Expr::Host, STRUCTURAL_PARENT),
                Expr::ident(format!("{}.class", parent.qualified())),
            ],
        ),
    )
}
