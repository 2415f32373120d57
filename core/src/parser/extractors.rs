//! # Extraction Logic
//!
//! Walks the top-level items of one Rust source file and builds the `SourceModel`.

use crate::directive::parse_api_directive;
use crate::error::{AppError, AppResult};
use crate::parser::attributes::{find_api_directive, find_validator_annotation};
use crate::parser::models::{
    path_to_string, Diagnostic, FieldSpec, MethodSpec, SkipReason, SourceModel, TypeSpec,
};
use crate::rules::parse_field_rules;
use crate::type_mapping::classify;
use quote::ToTokens;
use syn::ext::IdentExt;
use syn::{Field, Fields, FnArg, ImplItem, Item, ItemFn, ItemImpl, ItemStruct, Signature, Type};

/// Parses a Rust source file and extracts every annotated struct and method.
///
/// Coverage gaps are recorded in `SourceModel::diagnostics`. Invalid Rust, a
/// malformed `apigen:api` payload, or an annotated method that cannot be wired
/// into a wrapper abort with an error.
///
/// # Examples
/// ```
/// use apigen_core::parser::extract_model;
///
/// let code = r#"
///     pub struct ProfileParams {
///         /// apivalidator: required
///         login: String,
///     }
///
///     impl MyApi {
///         /// apigen:api {"url": "/user/profile"}
///         pub fn profile(&self, params: ProfileParams) -> Result<User, ApiError> { todo!() }
///     }
/// "#;
/// let model = extract_model(code).unwrap();
/// assert_eq!(model.types[0].name(), "ProfileParams");
/// assert_eq!(model.methods[0].url, "/user/profile");
/// ```
pub fn extract_model(code: &str) -> AppResult<SourceModel> {
    let file = syn::parse_file(code)?;
    let mut model = SourceModel::default();

    for item in &file.items {
        match item {
            Item::Struct(s) => extract_struct(s, &mut model),
            Item::Impl(imp) => extract_impl(imp, &mut model)?,
            Item::Fn(f) => extract_free_fn(f, &mut model)?,
            Item::Enum(e) => skip(&mut model, e.ident.to_string(), SkipReason::NotAStruct),
            Item::Union(u) => skip(&mut model, u.ident.to_string(), SkipReason::NotAStruct),
            Item::Type(t) => skip(&mut model, t.ident.to_string(), SkipReason::NotAStruct),
            _ => {}
        }
    }

    tracing::debug!(
        types = model.types.len(),
        methods = model.methods.len(),
        skipped = model.diagnostics.len(),
        "extracted source model"
    );

    Ok(model)
}

fn skip(model: &mut SourceModel, item: String, reason: SkipReason) {
    let diagnostic = Diagnostic { item, reason };
    tracing::info!("{}", diagnostic);
    model.diagnostics.push(diagnostic);
}

fn extract_struct(item: &ItemStruct, model: &mut SourceModel) {
    let name = item.ident.to_string();

    if !item.generics.params.is_empty() {
        return skip(model, name, SkipReason::Generic);
    }

    let named = match &item.fields {
        Fields::Named(named) => named,
        Fields::Unnamed(_) | Fields::Unit => return skip(model, name, SkipReason::NoNamedFields),
    };

    let annotated: Vec<(&Field, String)> = named
        .named
        .iter()
        .filter_map(|f| find_validator_annotation(&f.attrs).map(|a| (f, a)))
        .collect();
    let total = named.named.len();

    if annotated.is_empty() || annotated.len() != total {
        return skip(
            model,
            name,
            SkipReason::MissingAnnotations {
                annotated: annotated.len(),
                total,
            },
        );
    }

    let fields = annotated
        .into_iter()
        .filter_map(|(field, annotation)| {
            let ident = field.ident.clone()?;
            Some(build_field_spec(ident, field.ty.clone(), &annotation))
        })
        .collect();

    model.types.push(TypeSpec {
        ident: item.ident.clone(),
        fields,
    });
}

fn build_field_spec(ident: syn::Ident, ty: Type, annotation: &str) -> FieldSpec {
    let field_name = ident.unraw().to_string();
    let rules = parse_field_rules(annotation);

    FieldSpec {
        kind: classify(&ty),
        param_name: rules.param_name_for(&field_name),
        required: rules.required,
        default_value: rules.default_value,
        enum_values: rules.enum_values,
        min_bound: rules.min_bound,
        max_bound: rules.max_bound,
        field_name,
        ident,
        ty,
    }
}

fn extract_impl(imp: &ItemImpl, model: &mut SourceModel) -> AppResult<()> {
    let receiver = receiver_path(imp);
    let receiver_label = match &receiver {
        Ok(path) => path_to_string(path),
        Err(_) => imp.self_ty.to_token_stream().to_string(),
    };

    for impl_item in &imp.items {
        let ImplItem::Fn(method) = impl_item else {
            continue;
        };
        let label = format!("{}::{}", receiver_label, method.sig.ident);

        let Some(payload) = find_api_directive(&method.attrs) else {
            skip(model, label, SkipReason::MissingDirective);
            continue;
        };

        let receiver = receiver.clone().map_err(|message| AppError::Signature {
            item: label.clone(),
            message,
        })?;
        let directive = parse_api_directive(&label, &payload)?;
        let params_type = params_type(&method.sig).map_err(|message| AppError::Signature {
            item: label.clone(),
            message,
        })?;

        model.methods.push(MethodSpec {
            receiver,
            handler: method.sig.ident.clone(),
            url: directive.url,
            http_method: directive.method,
            requires_auth: directive.auth,
            params_type,
            is_async: method.sig.asyncness.is_some(),
        });
    }

    Ok(())
}

fn extract_free_fn(item: &ItemFn, model: &mut SourceModel) -> AppResult<()> {
    let label = item.sig.ident.to_string();
    match find_api_directive(&item.attrs) {
        Some(_) => Err(AppError::Signature {
            item: label,
            message: "free functions have no receiver type to route on".into(),
        }),
        None => {
            skip(model, label, SkipReason::MissingDirective);
            Ok(())
        }
    }
}

/// The self type of an inherent, non-generic `impl` block.
fn receiver_path(imp: &ItemImpl) -> Result<syn::Path, String> {
    if imp.trait_.is_some() {
        return Err("directives are only supported in inherent impl blocks".into());
    }
    if !imp.generics.params.is_empty() {
        return Err("generic receiver types are not supported".into());
    }
    plain_path(&imp.self_ty).ok_or_else(|| "the receiver must be a plain named type".into())
}

/// Checks for `(&self, params: Params)` and returns the `Params` path.
fn params_type(sig: &Signature) -> Result<syn::Path, String> {
    if !sig.generics.params.is_empty() {
        return Err("generic handler methods are not supported".into());
    }

    let mut inputs = sig.inputs.iter();
    match inputs.next() {
        Some(FnArg::Receiver(r)) if r.reference.is_some() && r.mutability.is_none() => {}
        _ => return Err("handler methods must take `&self`".into()),
    }

    let params = match (inputs.next(), inputs.next()) {
        (Some(FnArg::Typed(arg)), None) => arg,
        _ => return Err("handler methods must take exactly one parameter besides `&self`".into()),
    };

    plain_path(&params.ty).ok_or_else(|| "the parameter must be a plain named type".into())
}

fn plain_path(ty: &Type) -> Option<syn::Path> {
    match ty {
        Type::Path(p) if p.qself.is_none() => {
            let generic = p
                .path
                .segments
                .iter()
                .any(|s| !s.arguments.is_empty());
            (!generic).then(|| p.path.clone())
        }
        Type::Group(g) => plain_path(&g.elem),
        Type::Paren(p) => plain_path(&p.elem),
        _ => None,
    }
}
