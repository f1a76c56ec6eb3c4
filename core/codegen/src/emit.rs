//! Java Rendering
//!
//! Renders code-model descriptors to Java source text. All names are emitted
//! fully qualified, so no import lists are computed. Rendering is a pure
//! function of the descriptor; re-emitting an identical descriptor yields
//! byte-identical text.

use crate::expr::Expr;
use crate::model::{
    ASCENT_FAILURE_MESSAGE, Artifact, ContainerUnit, InjectorUnit, SupportUnit,
};

const INDENT: &str = "    ";

#[derive(Debug, Clone, Copy, Default)]
pub struct JavaEmitter;

impl JavaEmitter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Renders one artifact to a complete compilation unit.
    #[must_use]
    pub fn emit(&self, artifact: &Artifact) -> String {
        let lines = match artifact {
            Artifact::Container(container) => self.emit_container(container),
            Artifact::Injector(injector) => self.emit_injector(injector),
            Artifact::Support(support) => self.emit_support(support),
        };
        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    pub(crate) fn emit_container(&self, container: &ContainerUnit) -> Vec<String> {
        let mut result = Vec::new();
        result.push(format!("package {};", container.namespace));
        result.push(String::new());
        let extends = container
            .extends
            .iter()
            .map(weld_model::TypeRef::qualified)
            .collect::<Vec<_>>()
            .join(", ");
        result.push(format!(
            "public interface {} extends {} {{",
            container.name, extends
        ));
        result.push(String::new());
        for accessor in &container.accessors {
            let params = accessor
                .params
                .iter()
                .map(|p| format!("{} {}", p.ty.qualified(), p.name))
                .collect::<Vec<_>>()
                .join(", ");
            result.push(format!(
                "{INDENT}{} {}({});",
                accessor.child_container.qualified(),
                accessor.name,
                params
            ));
        }
        if !container.accessors.is_empty() {
            result.push(String::new());
        }
        result.push(format!(
            "{INDENT}void inject({} target);",
            container.inject_target.qualified()
        ));
        result.push(String::new());
        result.push(format!("{INDENT}interface Builder {{"));
        for setter in &container.builder.setters {
            result.push(format!(
                "{INDENT}{INDENT}Builder {}({} {});",
                setter.name,
                setter.module.qualified(),
                setter.name
            ));
        }
        result.push(format!("{INDENT}{INDENT}{} build();", container.name));
        result.push(format!("{INDENT}}}"));
        result.push("}".to_string());
        result
    }

    pub(crate) fn emit_injector(&self, injector: &InjectorUnit) -> Vec<String> {
        let mut result = Vec::new();
        result.push(format!("package {};", injector.namespace));
        result.push(String::new());
        result.push(format!("public final class {} {{", injector.name));
        result.push(String::new());
        result.push(format!("{INDENT}private {}() {{}}", injector.name));
        result.push(String::new());
        result.push(format!(
            "{INDENT}public static void inject({} host) {{",
            injector.target.qualified()
        ));
        result.push(format!(
            "{INDENT}{INDENT}{parent} parent = ({parent}) {access}.container();",
            parent = injector.parent_container.qualified(),
            access = render_expr(&injector.parent_access),
        ));
        let args = injector
            .module_args
            .iter()
            .map(render_expr)
            .collect::<Vec<_>>()
            .join(", ");
        result.push(format!(
            "{INDENT}{INDENT}parent.{}({}).inject(host);",
            injector.accessor, args
        ));
        result.push(format!("{INDENT}}}"));
        result.push("}".to_string());
        result
    }

    /// The shared runtime ascent helper: a bounded upward walk over the
    /// structural parent chain.
    pub(crate) fn emit_support(&self, support: &SupportUnit) -> Vec<String> {
        let mut result = Vec::new();
        result.push(format!("package {};", support.namespace));
        result.push(String::new());
        result.push(format!("public final class {} {{", support.name));
        result.push(String::new());
        result.push(format!("{INDENT}public interface Structural {{"));
        result.push(format!("{INDENT}{INDENT}Object structuralParent();"));
        result.push(format!("{INDENT}}}"));
        result.push(String::new());
        result.push(format!("{INDENT}private {}() {{}}", support.name));
        result.push(String::new());
        result.push(format!(
            "{INDENT}public static <T> T ascend(Object start, Class<T> target) {{"
        ));
        result.push(format!("{INDENT}{INDENT}Object current = start;"));
        result.push(format!("{INDENT}{INDENT}while (current != null) {{"));
        result.push(format!(
            "{INDENT}{INDENT}{INDENT}if (target.isInstance(current)) {{"
        ));
        result.push(format!(
            "{INDENT}{INDENT}{INDENT}{INDENT}return target.cast(current);"
        ));
        result.push(format!("{INDENT}{INDENT}{INDENT}}}"));
        result.push(format!(
            "{INDENT}{INDENT}{INDENT}current = (current instanceof Structural)"
        ));
        result.push(format!(
            "{INDENT}{INDENT}{INDENT}{INDENT}{INDENT}? ((Structural) current).structuralParent()"
        ));
        result.push(format!("{INDENT}{INDENT}{INDENT}{INDENT}{INDENT}: null;"));
        result.push(format!("{INDENT}{INDENT}}}"));
        result.push(format!(
            "{INDENT}{INDENT}throw new IllegalStateException(\"{ASCENT_FAILURE_MESSAGE}\");"
        ));
        result.push(format!("{INDENT}}}"));
        result.push("}".to_string());
        result
    }
}

/// Renders a call descriptor to a Java expression.
#[must_use]
pub fn render_expr(expr: &Expr) -> String {
    match expr {
        Expr::Host => "host".to_string(),
        Expr::Ident(name) => name.clone(),
        Expr::Call {
            receiver,
            method,
            args,
        } => {
            let args = args.iter().map(render_expr).collect::<Vec<_>>().join(", ");
            format!("{}.{method}({args})", render_expr(receiver))
        }
        Expr::New { class, args } => {
            let args = args.iter().map(render_expr).collect::<Vec<_>>().join(", ");
            format!("new {}({args})", class.qualified())
        }
        Expr::Cast { to, expr } => {
            format!("(({}) {})", to.qualified(), render_expr(expr))
        }
    }
}
