//! Ancestor tracking for AST traversal.
//!
//! swc nodes have no parent links, so visitors push a [`Frame`] when they
//! enter a call, a function or an element and pop it on the way out. The
//! resulting [`AncestorStack`] answers "is any enclosing node X" questions:
//! whether a literal sits inside a translation call (at any depth), whether a
//! `return` belongs to a render function, and which element is nearest.

use std::collections::HashSet;

use swc_ecma_ast::{Callee, Expr, Lit, MemberExpr, MemberProp, OptChainBase};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// A call expression. `translation` is true when the callee matched a
    /// configured translation function.
    Call {
        callee: Option<String>,
        translation: bool,
    },
    /// A function body, named when the name is known from its declaration,
    /// binding, property key or JSX attribute.
    Function { name: Option<String> },
    /// A JSX element or fragment, by tag name.
    Element { tag: String },
}

#[derive(Debug, Default)]
pub struct AncestorStack {
    frames: Vec<Frame>,
}

impl AncestorStack {
    pub fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    pub fn pop(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    /// True if any ancestor, from innermost to outermost, matches.
    pub fn any(&self, pred: impl Fn(&Frame) -> bool) -> bool {
        self.frames.iter().rev().any(pred)
    }

    pub fn in_translation_call(&self) -> bool {
        self.any(|f| matches!(f, Frame::Call { translation: true, .. }))
    }

    pub fn in_render_function(&self) -> bool {
        self.any(|f| match f {
            Frame::Function { name: Some(name) } => is_render_function_name(name),
            _ => false,
        })
    }

    pub fn nearest_element(&self) -> Option<&str> {
        self.frames.iter().rev().find_map(|f| match f {
            Frame::Element { tag } => Some(tag.as_str()),
            _ => None,
        })
    }
}

/// Components are PascalCase, render helpers are `render` or `renderXxx`.
pub fn is_render_function_name(name: &str) -> bool {
    if name == "render" {
        return true;
    }
    if let Some(rest) = name.strip_prefix("render") {
        return rest.chars().next().is_some_and(|c| c.is_uppercase());
    }
    name.chars().next().is_some_and(|c| c.is_ascii_uppercase())
        && name.chars().any(|c| c.is_lowercase())
}

/// Name a callee is called by: the identifier itself, or the accessed
/// property of a member access (`i18n.t` → `t`, `i18n["t"]` → `t`).
pub fn callee_name(callee: &Callee) -> Option<String> {
    match callee {
        Callee::Expr(expr) => expr_callee_name(expr),
        _ => None,
    }
}

pub fn expr_callee_name(expr: &Expr) -> Option<String> {
    match expr {
        Expr::Ident(ident) => Some(ident.sym.to_string()),
        Expr::Member(member) => member_prop_name(member),
        Expr::Paren(paren) => expr_callee_name(&paren.expr),
        Expr::OptChain(opt) => match &*opt.base {
            OptChainBase::Member(member) => member_prop_name(member),
            OptChainBase::Call(call) => expr_callee_name(&call.callee),
        },
        _ => None,
    }
}

fn member_prop_name(member: &MemberExpr) -> Option<String> {
    match &member.prop {
        MemberProp::Ident(prop) => Some(prop.sym.to_string()),
        MemberProp::Computed(computed) => match &*computed.expr {
            Expr::Lit(Lit::Str(s)) => s.value.as_str().map(str::to_string),
            _ => None,
        },
        _ => None,
    }
}

/// Frame for a call, flagged when the callee is a translation function.
pub fn call_frame(callee: Option<String>, translation_functions: &HashSet<String>) -> Frame {
    let translation = callee
        .as_ref()
        .is_some_and(|name| translation_functions.contains(name));
    Frame::Call {
        callee,
        translation,
    }
}

/// Strip parentheses and TypeScript-only wrappers around an expression.
pub fn unwrap_expr(expr: &Expr) -> &Expr {
    match expr {
        Expr::Paren(paren) => unwrap_expr(&paren.expr),
        Expr::TsAs(ts) => unwrap_expr(&ts.expr),
        Expr::TsNonNull(ts) => unwrap_expr(&ts.expr),
        Expr::TsConstAssertion(ts) => unwrap_expr(&ts.expr),
        Expr::TsSatisfies(ts) => unwrap_expr(&ts.expr),
        _ => expr,
    }
}
