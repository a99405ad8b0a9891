//! Detection of references to undeclared entities.

use indexmap::IndexSet;
use synops_ir::{
    Entity, EntityId, EntityKind, EntityRef, TemplateArgument, TemplateHead, TemplateParameter,
    Type,
};

use super::Warning;

/// Report every reference whose targets are all undeclared.
pub(crate) fn unresolved(root: &Entity, declared: &IndexSet<EntityId>) -> Vec<Warning> {
    let mut warnings = Vec::new();
    for entity in root.walk() {
        let mut refs = Vec::new();
        entity_refs(entity, &mut refs);
        for reference in refs {
            if reference.targets().iter().any(|t| declared.contains(t)) {
                continue;
            }
            for target in reference.targets() {
                warnings.push(Warning::UnresolvedReference {
                    from: entity.id.clone(),
                    target: target.clone(),
                });
            }
        }
    }
    warnings
}

fn entity_refs<'e>(entity: &'e Entity, refs: &mut Vec<&'e EntityRef>) {
    match &entity.template {
        Some(TemplateHead::Primary(params)) => params.iter().for_each(|p| param_refs(p, refs)),
        Some(TemplateHead::Specialization(specialization)) => {
            refs.push(&specialization.template);
            specialization.args.iter().for_each(|a| arg_refs(a, refs));
        }
        None => {}
    }

    match &entity.kind {
        EntityKind::NamespaceAlias { target }
        | EntityKind::UsingDirective { target }
        | EntityKind::UsingDeclaration { target } => refs.push(target),
        EntityKind::TypeAlias { underlying } => type_refs(underlying, refs),
        EntityKind::Enum {
            underlying: Some(underlying),
            ..
        } => type_refs(underlying, refs),
        EntityKind::Class { bases, .. } => bases.iter().for_each(|b| type_refs(&b.ty, refs)),
        EntityKind::Variable { ty, .. } | EntityKind::MemberVariable { ty, .. } => {
            type_refs(ty, refs)
        }
        EntityKind::Function(function) => {
            if let Some(return_type) = &function.return_type {
                type_refs(return_type, refs);
            }
            function.params.iter().for_each(|p| type_refs(&p.ty, refs));
        }
        _ => {}
    }
}

fn type_refs<'e>(ty: &'e Type, refs: &mut Vec<&'e EntityRef>) {
    match ty {
        Type::Builtin(_) | Type::Unexposed(_) => {}
        Type::User(reference) => refs.push(reference),
        Type::Const(inner)
        | Type::Volatile(inner)
        | Type::Pointer(inner)
        | Type::LvalueRef(inner)
        | Type::RvalueRef(inner) => type_refs(inner, refs),
        Type::Array { element, .. } => type_refs(element, refs),
        Type::Instantiation { template, args } => {
            refs.push(template);
            args.iter().for_each(|a| arg_refs(a, refs));
        }
    }
}

fn arg_refs<'e>(arg: &'e TemplateArgument, refs: &mut Vec<&'e EntityRef>) {
    match arg {
        TemplateArgument::Type(ty) => type_refs(ty, refs),
        TemplateArgument::Expression(_) => {}
        TemplateArgument::Template(reference) => refs.push(reference),
    }
}

fn param_refs<'e>(param: &'e TemplateParameter, refs: &mut Vec<&'e EntityRef>) {
    match param {
        TemplateParameter::Type { default, .. } => {
            if let Some(default) = default {
                type_refs(default, refs);
            }
        }
        TemplateParameter::NonType { ty, .. } => type_refs(ty, refs),
        TemplateParameter::Template {
            params, default, ..
        } => {
            params.iter().for_each(|p| param_refs(p, refs));
            if let Some(default) = default {
                refs.push(default);
            }
        }
    }
}
