//! Key-usage extraction.
//!
//! Finds calls to a configured translation function whose first argument is
//! known statically: a string literal or a template literal without
//! interpolations. `t(key)` and `` t(`a.${b}`) `` cannot be resolved and are
//! only counted.

use std::collections::HashSet;

use swc_common::{BytePos, SourceMap};
use swc_ecma_ast::{CallExpr, Expr, ExprOrSpread, Lit, Module, OptCall};
use swc_ecma_visit::{Visit, VisitWith};

use super::ancestry::{callee_name, expr_callee_name, unwrap_expr};
use super::data::KeyUsage;

#[derive(Debug, Default)]
pub struct FileUsages {
    pub usages: Vec<KeyUsage>,
    /// Translation calls whose key is computed at runtime.
    pub dynamic_calls: usize,
}

pub struct KeyUsageCollector<'a> {
    file_path: &'a str,
    source_map: &'a SourceMap,
    translation_functions: &'a HashSet<String>,
    result: FileUsages,
}

impl<'a> KeyUsageCollector<'a> {
    pub fn new(
        file_path: &'a str,
        source_map: &'a SourceMap,
        translation_functions: &'a HashSet<String>,
    ) -> Self {
        Self {
            file_path,
            source_map,
            translation_functions,
            result: FileUsages::default(),
        }
    }

    pub fn collect(mut self, module: &Module) -> FileUsages {
        self.visit_module(module);
        self.result
    }

    fn record(&mut self, name: Option<String>, args: &[ExprOrSpread], call_pos: BytePos) {
        let Some(name) = name.filter(|n| self.translation_functions.contains(n)) else {
            return;
        };

        match args.first().and_then(|arg| static_key(&arg.expr)) {
            Some(key) if !key.is_empty() => {
                let loc = self.source_map.lookup_char_pos(call_pos);
                self.result.usages.push(KeyUsage {
                    key,
                    file: self.file_path.to_string(),
                    line: loc.line,
                    column: loc.col_display + 1,
                    invoked_function: name,
                });
            }
            Some(_) => {}
            None => self.result.dynamic_calls += 1,
        }
    }
}

/// The key a first argument names, if it is known without running the code.
pub fn static_key(expr: &Expr) -> Option<String> {
    match unwrap_expr(expr) {
        Expr::Lit(Lit::Str(s)) => s.value.as_str().map(str::to_string),
        Expr::Tpl(tpl) if tpl.exprs.is_empty() => tpl
            .quasis
            .first()
            .and_then(|q| q.cooked.as_ref())
            .and_then(|cooked| cooked.as_str())
            .map(str::to_string),
        _ => None,
    }
}

impl<'a> Visit for KeyUsageCollector<'a> {
    fn visit_call_expr(&mut self, node: &CallExpr) {
        self.record(callee_name(&node.callee), &node.args, node.span.lo);
        node.visit_children_with(self);
    }

    fn visit_opt_call(&mut self, node: &OptCall) {
        self.record(expr_callee_name(&node.callee), &node.args, node.span.lo);
        node.visit_children_with(self);
    }
}
