//! String classification engine.
//!
//! Walks one parsed module and collects every string literal that looks like
//! user-facing text, in seven syntactic shapes (see [`StringKind`]). Each
//! candidate goes through, in order: the ancestor translation-call check,
//! then the [`ExclusionRules`] (minimum length, patterns, already translated).
//! Attribute-shaped candidates are dropped up front when the attribute name is
//! in the skip list.

use std::collections::HashSet;

use swc_common::{BytePos, SourceMap};
use swc_ecma_ast::{
    ArrowExpr, BinaryOp, BlockStmtOrExpr, CallExpr, ClassMethod, ClassProp, Expr, FnDecl, FnExpr,
    Function, JSXAttr, JSXAttrName, JSXAttrValue, JSXElement, JSXElementName, JSXExpr,
    JSXExprContainer, JSXFragment, JSXMemberExpr, JSXObject, JSXText, KeyValueProp, Lit,
    MethodProp, Module, OptCall, Pat, PropName, ReturnStmt, Tpl, VarDeclarator,
};
use swc_ecma_visit::{Visit, VisitWith};

use super::ancestry::{
    AncestorStack, Frame, call_frame, callee_name, expr_callee_name, unwrap_expr,
};
use super::data::{StringKind, StringOccurrence};
use super::rules::{Exclusion, ExclusionRules};

/// Elements whose children are code or styles, never UI text.
const OPAQUE_ELEMENTS: &[&str] = &["style", "script"];

/// Where an expression sits, which decides the kind of its literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExprPosition {
    Child,
    Attribute,
    Return,
}

/// Outcome of classifying one file.
#[derive(Debug, Default)]
pub struct FileStrings {
    pub occurrences: Vec<StringOccurrence>,
    /// Candidates dropped by the ancestor check or the rule set.
    pub excluded: usize,
}

pub struct StringCollector<'a> {
    file_path: &'a str,
    source_map: &'a SourceMap,
    rules: &'a ExclusionRules,
    translation_functions: &'a HashSet<String>,
    ancestors: AncestorStack,
    /// Name for the next function entered, set by whatever binds it.
    pending_fn_name: Option<String>,
    result: FileStrings,
}

impl<'a> StringCollector<'a> {
    pub fn new(
        file_path: &'a str,
        source_map: &'a SourceMap,
        rules: &'a ExclusionRules,
        translation_functions: &'a HashSet<String>,
    ) -> Self {
        Self {
            file_path,
            source_map,
            rules,
            translation_functions,
            ancestors: AncestorStack::default(),
            pending_fn_name: None,
            result: FileStrings::default(),
        }
    }

    pub fn collect(mut self, module: &Module) -> FileStrings {
        self.visit_module(module);
        self.result
    }

    fn emit(&mut self, text: &str, pos: BytePos, kind: StringKind, context: String) {
        let loc = self.source_map.lookup_char_pos(pos);

        if self.ancestors.in_translation_call() {
            self.exclude(text, loc.line, "inside a translation call");
            return;
        }
        if let Some(reason) = self.rules.check(text) {
            self.exclude(text, loc.line, &reason.to_string());
            return;
        }

        let source_line = loc
            .file
            .get_line(loc.line - 1)
            .map(|cow| cow.to_string())
            .unwrap_or_default();

        self.result.occurrences.push(StringOccurrence {
            file: self.file_path.to_string(),
            line: loc.line,
            column: loc.col_display + 1,
            raw_value: text.to_string(),
            kind,
            context,
            source_line,
        });
    }

    fn exclude(&mut self, text: &str, line: usize, reason: &str) {
        tracing::trace!(file = self.file_path, line, text, reason, "excluded");
        self.result.excluded += 1;
    }

    fn element_context(&self, fallback: &str) -> String {
        self.ancestors
            .nearest_element()
            .unwrap_or(fallback)
            .to_string()
    }

    /// Emit the literals reachable from `expr` through parentheses,
    /// conditional branches and logical fallbacks.
    fn collect_expr(&mut self, expr: &Expr, position: ExprPosition, context: &str) {
        match unwrap_expr(expr) {
            Expr::Lit(Lit::Str(s)) => {
                if let Some(value) = s.value.as_str() {
                    let kind = match position {
                        ExprPosition::Child => StringKind::ExpressionLiteral,
                        ExprPosition::Attribute => StringKind::AttributeExpression,
                        ExprPosition::Return => StringKind::ConditionalReturnLiteral,
                    };
                    self.emit(value.trim(), s.span.lo, kind, context.to_string());
                }
            }
            Expr::Tpl(tpl) => self.collect_template(tpl, context),
            Expr::Cond(cond) => {
                self.collect_expr(&cond.cons, position, context);
                self.collect_expr(&cond.alt, position, context);
            }
            Expr::Bin(bin)
                if matches!(
                    bin.op,
                    BinaryOp::LogicalAnd | BinaryOp::LogicalOr | BinaryOp::NullishCoalescing
                ) =>
            {
                self.collect_expr(&bin.right, position, context);
            }
            _ => {}
        }
    }

    /// One occurrence per non-blank literal segment.
    fn collect_template(&mut self, tpl: &Tpl, context: &str) {
        for quasi in &tpl.quasis {
            if let Some(cooked) = &quasi.cooked
                && let Some(value) = cooked.as_str()
            {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let offset = value.len() - value.trim_start().len();
                let pos = quasi.span.lo + BytePos(offset as u32);
                self.emit(
                    trimmed,
                    pos,
                    StringKind::TemplateSegment,
                    context.to_string(),
                );
            }
        }
    }

    /// Classify the value a render function returns.
    fn collect_return(&mut self, arg: &Expr) {
        match unwrap_expr(arg) {
            Expr::Lit(Lit::Str(s)) => {
                if let Some(value) = s.value.as_str() {
                    self.emit(
                        value.trim(),
                        s.span.lo,
                        StringKind::ReturnLiteral,
                        "return".to_string(),
                    );
                }
            }
            Expr::Tpl(tpl) => self.collect_template(tpl, "return"),
            expr @ (Expr::Cond(_) | Expr::Bin(_)) => {
                self.collect_expr(expr, ExprPosition::Return, "conditional return");
            }
            _ => {}
        }
    }

    fn with_frame(&mut self, frame: Frame, f: impl FnOnce(&mut Self)) {
        self.ancestors.push(frame);
        f(self);
        self.ancestors.pop();
    }

    fn enter_function(&mut self, name: Option<String>, f: impl FnOnce(&mut Self)) {
        self.with_frame(Frame::Function { name }, f);
    }

    /// Visit `value`, naming it `name` if it is a function expression.
    fn visit_named_value(&mut self, name: Option<String>, value: &Expr) {
        if matches!(unwrap_expr(value), Expr::Arrow(_) | Expr::Fn(_)) {
            self.pending_fn_name = name;
        }
        value.visit_with(self);
        self.pending_fn_name = None;
    }
}

pub fn element_name(name: &JSXElementName) -> String {
    match name {
        JSXElementName::Ident(ident) => ident.sym.to_string(),
        JSXElementName::JSXMemberExpr(member) => member_expr_name(member),
        JSXElementName::JSXNamespacedName(ns) => format!("{}:{}", ns.ns.sym, ns.name.sym),
    }
}

fn member_expr_name(member: &JSXMemberExpr) -> String {
    let obj = match &member.obj {
        JSXObject::Ident(ident) => ident.sym.to_string(),
        JSXObject::JSXMemberExpr(inner) => member_expr_name(inner),
    };
    format!("{}.{}", obj, member.prop.sym)
}

pub fn attr_name(name: &JSXAttrName) -> String {
    match name {
        JSXAttrName::Ident(ident) => ident.sym.to_string(),
        JSXAttrName::JSXNamespacedName(ns) => format!("{}-{}", ns.ns.sym, ns.name.sym),
    }
}

fn prop_name(key: &PropName) -> Option<String> {
    match key {
        PropName::Ident(ident) => Some(ident.sym.to_string()),
        PropName::Str(s) => s.value.as_str().map(str::to_string),
        _ => None,
    }
}

impl<'a> Visit for StringCollector<'a> {
    fn visit_call_expr(&mut self, node: &CallExpr) {
        let frame = call_frame(callee_name(&node.callee), self.translation_functions);
        self.with_frame(frame, |this| node.visit_children_with(this));
    }

    fn visit_opt_call(&mut self, node: &OptCall) {
        let frame = call_frame(expr_callee_name(&node.callee), self.translation_functions);
        self.with_frame(frame, |this| node.visit_children_with(this));
    }

    fn visit_jsx_element(&mut self, node: &JSXElement) {
        let tag = element_name(&node.opening.name);
        let opaque = OPAQUE_ELEMENTS.contains(&tag.as_str());

        self.with_frame(Frame::Element { tag }, |this| {
            node.opening.visit_with(this);
            if !opaque {
                for child in &node.children {
                    child.visit_with(this);
                }
            }
        });
    }

    fn visit_jsx_fragment(&mut self, node: &JSXFragment) {
        let frame = Frame::Element {
            tag: "Fragment".to_string(),
        };
        self.with_frame(frame, |this| {
            for child in &node.children {
                child.visit_with(this);
            }
        });
    }

    fn visit_jsx_text(&mut self, node: &JSXText) {
        let raw_value = &node.value;
        let trimmed = raw_value.trim();

        if trimmed.is_empty() {
            return;
        }

        // Position of the first non-whitespace character.
        let trim_start_offset = raw_value.len() - raw_value.trim_start().len();
        let actual_pos = node.span.lo + BytePos(trim_start_offset as u32);

        let text = normalize_jsx_text(trimmed);
        let context = self.element_context("Fragment");
        self.emit(&text, actual_pos, StringKind::TextNode, context);
    }

    fn visit_jsx_expr_container(&mut self, node: &JSXExprContainer) {
        if let JSXExpr::Expr(expr) = &node.expr {
            let context = self.element_context("expression");
            self.collect_expr(expr, ExprPosition::Child, &context);
        }
        node.visit_children_with(self);
    }

    fn visit_jsx_attr(&mut self, node: &JSXAttr) {
        let name = attr_name(&node.name);
        if self.rules.skips_attribute(&name) {
            let line = self.source_map.lookup_char_pos(node.span.lo).line;
            self.exclude(&name, line, &Exclusion::SkippedAttribute(name.clone()).to_string());
            // The value's own literals are skipped; markup nested in it is not.
            match &node.value {
                Some(JSXAttrValue::JSXExprContainer(container)) => {
                    if let JSXExpr::Expr(expr) = &container.expr {
                        self.visit_named_value(Some(name), expr);
                    }
                }
                Some(JSXAttrValue::Str(_)) | None => {}
                Some(other) => other.visit_with(self),
            }
            return;
        }

        let context = format!("{}.{}", self.element_context("element"), name);

        match &node.value {
            Some(JSXAttrValue::Str(s)) => {
                if let Some(value) = s.value.as_str() {
                    self.emit(
                        value.trim(),
                        s.span.lo,
                        StringKind::AttributeLiteral,
                        context,
                    );
                }
            }
            Some(JSXAttrValue::JSXExprContainer(container)) => {
                if let JSXExpr::Expr(expr) = &container.expr {
                    self.collect_expr(expr, ExprPosition::Attribute, &context);
                    // `renderItem={() => ...}` names the callback after the attribute
                    self.visit_named_value(Some(name), expr);
                }
            }
            Some(other) => other.visit_with(self),
            None => {}
        }
    }

    fn visit_return_stmt(&mut self, node: &ReturnStmt) {
        if let Some(arg) = &node.arg
            && self.ancestors.in_render_function()
        {
            self.collect_return(arg);
        }
        node.visit_children_with(self);
    }

    fn visit_fn_decl(&mut self, node: &FnDecl) {
        self.pending_fn_name = Some(node.ident.sym.to_string());
        node.function.visit_with(self);
        self.pending_fn_name = None;
    }

    fn visit_fn_expr(&mut self, node: &FnExpr) {
        if let Some(ident) = &node.ident {
            self.pending_fn_name = Some(ident.sym.to_string());
        }
        node.function.visit_with(self);
        self.pending_fn_name = None;
    }

    fn visit_function(&mut self, node: &Function) {
        let name = self.pending_fn_name.take();
        self.enter_function(name, |this| node.visit_children_with(this));
    }

    fn visit_arrow_expr(&mut self, node: &ArrowExpr) {
        let name = self.pending_fn_name.take();
        self.enter_function(name, |this| {
            // Expression bodies are implicit returns.
            if let BlockStmtOrExpr::Expr(body) = &*node.body
                && this.ancestors.in_render_function()
            {
                this.collect_return(body);
            }
            node.visit_children_with(this);
        });
    }

    fn visit_var_declarator(&mut self, node: &VarDeclarator) {
        node.name.visit_with(self);
        if let Some(init) = &node.init {
            let name = match &node.name {
                Pat::Ident(binding) => Some(binding.id.sym.to_string()),
                _ => None,
            };
            self.visit_named_value(name, init);
        }
    }

    fn visit_key_value_prop(&mut self, node: &KeyValueProp) {
        node.key.visit_with(self);
        self.visit_named_value(prop_name(&node.key), &node.value);
    }

    fn visit_class_prop(&mut self, node: &ClassProp) {
        node.key.visit_with(self);
        if let Some(value) = &node.value {
            self.visit_named_value(prop_name(&node.key), value);
        }
    }

    fn visit_class_method(&mut self, node: &ClassMethod) {
        node.key.visit_with(self);
        self.pending_fn_name = prop_name(&node.key);
        node.function.visit_with(self);
        self.pending_fn_name = None;
    }

    fn visit_method_prop(&mut self, node: &MethodProp) {
        node.key.visit_with(self);
        self.pending_fn_name = prop_name(&node.key);
        node.function.visit_with(self);
        self.pending_fn_name = None;
    }
}

/// Collapse JSX text the way it renders: lines trimmed, blank lines
/// dropped, the rest joined by single spaces.
fn normalize_jsx_text(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
