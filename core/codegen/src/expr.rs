//! Structured Call Descriptors
//!
//! Generated expressions are built as data and rendered to target syntax only
//! at emission time. An [`Expr`] tree carries operation names and argument
//! expressions; nothing here is stringly-typed target code.

use serde::Serialize;
use weld_model::TypeRef;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Expr {
    /// The instance being injected at the call site.
    Host,
    /// A raw identifier or literal token, e.g. a `.class` reference.
    Ident(String),
    Call {
        receiver: Box<Expr>,
        method: String,
        args: Vec<Expr>,
    },
    New {
        class: TypeRef,
        args: Vec<Expr>,
    },
    Cast {
        to: TypeRef,
        expr: Box<Expr>,
    },
}

impl Expr {
    #[must_use]
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Ident(name.into())
    }

    /// A no-argument method call.
    #[must_use]
    pub fn call(receiver: Expr, method: impl Into<String>) -> Self {
        Expr::call_with(receiver, method, vec![])
    }

    #[must_use]
    pub fn call_with(receiver: Expr, method: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::Call {
            receiver: Box::new(receiver),
            method: method.into(),
            args,
        }
    }

    #[must_use]
    pub fn new_instance(class: TypeRef, args: Vec<Expr>) -> Self {
        Expr::New { class, args }
    }

    #[must_use]
    pub fn cast(to: TypeRef, expr: Expr) -> Self {
        Expr::Cast {
            to,
            expr: Box::new(expr),
        }
    }

    /// Number of chained accessor calls along the receiver spine.
    ///
    /// Arguments are not counted; a cast is transparent.
    #[must_use]
    pub fn call_depth(&self) -> usize {
        match self {
            Expr::Call { receiver, .. } => 1 + receiver.call_depth(),
            Expr::Cast { expr, .. } => expr.call_depth(),
            Expr::Host | Expr::Ident(_) | Expr::New { .. } => 0,
        }
    }

    /// Collects every type reference mentioned in the expression tree.
    pub fn collect_types(&self, out: &mut Vec<TypeRef>) {
        match self {
            Expr::Host | Expr::Ident(_) => {}
            Expr::Call { receiver, args, .. } => {
                receiver.collect_types(out);
                for arg in args {
                    arg.collect_types(out);
                }
            }
            Expr::New { class, args } => {
                out.push(class.clone());
                for arg in args {
                    arg.collect_types(out);
                }
            }
            Expr::Cast { to, expr } => {
                out.push(to.clone());
                expr.collect_types(out);
            }
        }
    }
}
