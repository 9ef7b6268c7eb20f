//! Per-statement processing for the semantic phases.

use snex_ir::{NamespacedIdentifier, PrimitiveType, Span, SymbolType, TypeInfo};
use snex_namespace::NamespaceHandler;
use tracing::trace;

use crate::{CompileError, Pass, Statement, StatementKind};

/// Run the semantic phase `pass` on one statement and its children.
///
/// The namespace cursor must already be in the statement's scope.
pub(crate) fn process_statement(
    handler: &mut NamespaceHandler,
    pass: Pass,
    statement: &mut Statement,
) -> Result<(), CompileError> {
    match pass {
        Pass::ResolvingSymbols => resolve_symbols(handler, statement),
        Pass::TypeCheck => type_check(handler, statement).map(|_| ()),
        _ => Ok(()),
    }
}

fn resolve_symbols(handler: &mut NamespaceHandler, statement: &mut Statement) -> Result<(), CompileError> {
    let span = statement.span;
    let at = |err| CompileError::namespace(err, span);

    match &mut statement.kind {
        StatementKind::VariableDefinition {
            id,
            declared,
            is_const,
            init,
        } => {
            if let Some(init) = init {
                resolve_symbols(handler, init)?;
            }

            let full = handler.current_namespace_id().child(id.identifier());
            let value = init
                .as_deref()
                .and_then(Statement::constant_value)
                .filter(|_| *is_const);
            let symbol_type = if value.is_some() {
                SymbolType::Constant
            } else {
                SymbolType::Variable
            };

            handler
                .add_symbol(&full, declared.clone(), symbol_type)
                .map_err(at)?;
            if let Some(value) = value {
                handler.add_constant(&full, value).map_err(at)?;
            }
            trace!(symbol = %handler.render(&full), "defined");
            *id = full;
            Ok(())
        }
        StatementKind::SymbolRef(id) => handler.resolve(id, false).map_err(at),
        StatementKind::Assignment { target, value } => {
            resolve_symbols(handler, value)?;
            handler.resolve(target, false).map_err(at)?;
            if handler.symbol_type(target).is_constant() {
                return Err(CompileError::InvalidStatement {
                    message: format!("Can't assign to constant {}", handler.render(target)),
                    span,
                });
            }
            Ok(())
        }
        StatementKind::NamespaceBlock { name, body } => {
            let inner = handler.current_namespace_id().child(*name);
            handler.with_namespace(&inner, |h| {
                body.iter_mut().try_for_each(|s| resolve_symbols(h, s))
            })
        }
        StatementKind::BinaryOp { lhs, rhs, .. } => {
            resolve_symbols(handler, lhs)?;
            resolve_symbols(handler, rhs)
        }
        StatementKind::IfStatement {
            condition,
            then_branch,
            else_branch,
        } => {
            resolve_symbols(handler, condition)?;
            resolve_symbols(handler, then_branch)?;
            match else_branch {
                Some(else_branch) => resolve_symbols(handler, else_branch),
                None => Ok(()),
            }
        }
        StatementKind::Block(statements) => statements
            .iter_mut()
            .try_for_each(|s| resolve_symbols(handler, s)),
        StatementKind::Return(Some(value)) => resolve_symbols(handler, value),
        StatementKind::Return(None) | StatementKind::Immediate(_) | StatementKind::Noop => Ok(()),
    }
}

/// Primitive types that differ; dynamic and complex types are not checked.
fn check_same_primitive(
    handler: &NamespaceHandler,
    expected: &TypeInfo,
    found: &TypeInfo,
    span: Span,
) -> Result<(), CompileError> {
    match (expected.primitive_type(), found.primitive_type()) {
        (Some(e), Some(f)) if e != f => Err(CompileError::TypeMismatch {
            expected: handler.type_name(expected),
            found: handler.type_name(found),
            span,
        }),
        _ => Ok(()),
    }
}

fn type_check(handler: &mut NamespaceHandler, statement: &mut Statement) -> Result<TypeInfo, CompileError> {
    let span = statement.span;
    let void = || TypeInfo::primitive(PrimitiveType::Void);

    let inferred = match &mut statement.kind {
        StatementKind::Immediate(value) => TypeInfo::primitive(value.primitive_type()),
        StatementKind::SymbolRef(id) => handler.variable_type(id),
        StatementKind::VariableDefinition { id, declared, init, .. } => {
            let init_type = match init {
                Some(init) => Some(type_check(handler, init)?),
                None => None,
            };
            if let Some(init_type) = init_type.filter(|_| declared.is_dynamic()) {
                infer_declared_type(handler, id, &init_type, span)?;
                *declared = init_type;
            }
            declared.clone()
        }
        StatementKind::Assignment { target, value } => {
            let value_type = type_check(handler, value)?;
            let target_type = handler.variable_type(target);
            check_same_primitive(handler, &target_type, &value_type, span)?;
            target_type
        }
        StatementKind::BinaryOp { op, lhs, rhs } => {
            let l = type_check(handler, lhs)?;
            let r = type_check(handler, rhs)?;
            check_same_primitive(handler, &l, &r, span)?;
            if op.is_comparison() {
                TypeInfo::primitive(PrimitiveType::Integer)
            } else {
                l
            }
        }
        StatementKind::IfStatement {
            condition,
            then_branch,
            else_branch,
        } => {
            type_check(handler, condition)?;
            type_check(handler, then_branch)?;
            if let Some(else_branch) = else_branch {
                type_check(handler, else_branch)?;
            }
            void()
        }
        StatementKind::Block(statements) | StatementKind::NamespaceBlock { body: statements, .. } => {
            for s in statements.iter_mut() {
                type_check(handler, s)?;
            }
            void()
        }
        StatementKind::Return(value) => match value {
            Some(value) => type_check(handler, value)?,
            None => void(),
        },
        StatementKind::Noop => void(),
    };

    statement.type_info = inferred.clone();
    Ok(inferred)
}

/// Store the inferred type of an `auto` definition in the namespace table.
fn infer_declared_type(
    handler: &mut NamespaceHandler,
    id: &NamespacedIdentifier,
    inferred: &TypeInfo,
    span: Span,
) -> Result<(), CompileError> {
    let symbol_type = handler.symbol_type(id);
    if symbol_type == SymbolType::Unknown {
        return Ok(());
    }
    handler
        .set_type_info(id, symbol_type, inferred.clone())
        .map_err(|err| CompileError::namespace(err, span))?;
    trace!(symbol = %handler.render(id), ty = %handler.type_name(inferred), "inferred type");
    Ok(())
}
