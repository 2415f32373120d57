#![deny(missing_docs)]

//! # Validator Generator
//!
//! Emits one `fill_and_validate` constructor per fully annotated struct.
//!
//! Each field is bound from its request parameter and checked in a fixed order
//! (fetch, required, default/parse, enum, min, max) regardless of how the
//! clauses were written. The first failing check of the first failing field is
//! returned.

use crate::error::{AppError, AppResult};
use crate::parser::models::{FieldKind, FieldSpec, TypeSpec};
use crate::strategies::BackendStrategy;
use crate::type_mapping::{int_tokens, len_tokens, numeric_tokens, type_label, LiteralError};
use proc_macro2::TokenStream;
use quote::quote;

/// Generates `impl T { pub fn fill_and_validate(..) }` for an annotated struct.
///
/// # Errors
///
/// Returns `AppError::Rule` when a `default`, `min` or `max` value does not fit
/// the field's type, including integers outside the declared primitive's range.
pub fn generate_validator(
    spec: &TypeSpec,
    strategy: &impl BackendStrategy,
) -> AppResult<TokenStream> {
    let ident = &spec.ident;
    let params = strategy.params_trait();
    let error = strategy.validation_error();

    let fields = spec
        .fields
        .iter()
        .map(|field| -> AppResult<TokenStream> {
            let name = &field.ident;
            let block = field_block(spec, field, &error)?;
            Ok(quote!(#name: #block))
        })
        .collect::<AppResult<Vec<_>>>()?;

    tracing::debug!(type_name = %spec.name(), fields = fields.len(), "generated validator");

    Ok(quote! {
        impl #ident {
            /// Binds request parameters into a new value, rejecting the first rule violation.
            pub fn fill_and_validate<V: #params + ?Sized>(values: &V) -> Result<Self, #error> {
                Ok(Self {
                    #(#fields,)*
                })
            }
        }
    })
}

fn field_block(spec: &TypeSpec, field: &FieldSpec, error: &TokenStream) -> AppResult<TokenStream> {
    let item = format!("{}::{}", spec.name(), field.field_name);
    let param = field.param_name.as_str();
    let ty = &field.ty;

    let required = field.required.then(|| {
        quote! {
            if value.is_empty() {
                return Err(#error::Missing { param: #param });
            }
        }
    });

    let bind = bind_value(&item, field, error)?;

    let enum_check = field.enum_values.as_ref().map(|variants| {
        let as_str = match field.kind {
            FieldKind::String => quote!(value.as_str()),
            _ => quote!(value.to_string().as_str()),
        };
        quote! {
            const VARIANTS: &[&str] = &[#(#variants),*];
            if !VARIANTS.contains(&#as_str) {
                return Err(#error::NotOneOf { param: #param, variants: VARIANTS });
            }
        }
    });

    let min_check = field
        .min_bound
        .as_deref()
        .map(|raw| -> AppResult<TokenStream> {
            let text = raw.trim();
            match field.kind {
                FieldKind::String => {
                    let bound = len_tokens(text).ok_or_else(|| rule(&item, "min", raw, "length"))?;
                    Ok(quote! {
                        if value.len() < #bound {
                            return Err(#error::TooShort { param: #param, bound: #text });
                        }
                    })
                }
                kind => {
                    let bound = numeric_tokens(kind, ty, text)
                        .map_err(|e| literal_error(&item, "min", raw, ty, e))?;
                    Ok(quote! {
                        if value < #bound {
                            return Err(#error::BelowMin { param: #param, bound: #text });
                        }
                    })
                }
            }
        })
        .transpose()?;

    let max_check = field
        .max_bound
        .as_deref()
        .map(|raw| -> AppResult<TokenStream> {
            let text = raw.trim();
            match field.kind {
                // Compared as text, not by length.
                FieldKind::String => {
                    numeric_tokens(FieldKind::Other, ty, text)
                        .map_err(|e| literal_error(&item, "max", raw, ty, e))?;
                    Ok(quote! {
                        if value.as_str() > #text {
                            return Err(#error::AboveMax { param: #param, bound: #text });
                        }
                    })
                }
                kind => {
                    let bound = numeric_tokens(kind, ty, text)
                        .map_err(|e| literal_error(&item, "max", raw, ty, e))?;
                    Ok(quote! {
                        if value > #bound {
                            return Err(#error::AboveMax { param: #param, bound: #text });
                        }
                    })
                }
            }
        })
        .transpose()?;

    Ok(quote! {
        {
            let value = values.value(#param);
            #required
            #bind
            #enum_check
            #min_check
            #max_check
            value
        }
    })
}

/// Turns the fetched `&str` into a value of the field's declared type.
fn bind_value(item: &str, field: &FieldSpec, error: &TokenStream) -> AppResult<TokenStream> {
    let param = field.param_name.as_str();
    let ty = &field.ty;
    let expected = type_label(field.kind, ty);
    let malformed = quote! {
        |_| #error::Malformed { param: #param, expected: #expected }
    };

    let tokens = match (field.kind, field.default_value.as_deref()) {
        (FieldKind::String, None) => quote! {
            let value: #ty = value.to_owned();
        },
        (FieldKind::String, Some(default)) => quote! {
            let value: #ty = if value.is_empty() {
                #default.to_owned()
            } else {
                value.to_owned()
            };
        },
        (FieldKind::Int, None) => quote! {
            let value: #ty = value.parse().map_err(#malformed)?;
        },
        (FieldKind::Int, Some(default)) => {
            let literal = int_tokens(ty, default).map_err(|e| match e {
                LiteralError::Malformed => AppError::Rule {
                    item: item.to_string(),
                    message: format!("default `{}` is not an integer", default),
                },
                LiteralError::OutOfRange => literal_error(item, "default", default, ty, e),
            })?;
            quote! {
                let value: #ty = if value.is_empty() {
                    #literal
                } else {
                    value.parse().map_err(#malformed)?
                };
            }
        }
        (FieldKind::Other, None) => quote! {
            let value: #ty = value.parse().map_err(#malformed)?;
        },
        (FieldKind::Other, Some(default)) => quote! {
            let value = if value.is_empty() { #default } else { value };
            let value: #ty = value.parse().map_err(#malformed)?;
        },
    };
    Ok(tokens)
}

fn rule(item: &str, key: &str, raw: &str, expected: &str) -> AppError {
    AppError::Rule {
        item: item.to_string(),
        message: format!("{}=`{}` is not a valid {}", key, raw, expected),
    }
}

fn literal_error(
    item: &str,
    key: &str,
    raw: &str,
    ty: &syn::Type,
    err: LiteralError,
) -> AppError {
    match err {
        LiteralError::Malformed => rule(item, key, raw, "number"),
        LiteralError::OutOfRange => AppError::Rule {
            item: item.to_string(),
            message: format!(
                "{}=`{}` is out of range for {}",
                key,
                raw,
                type_label(FieldKind::Other, ty)
            ),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::extract_model;
    use crate::strategies::ActixStrategy;

    fn strategy() -> ActixStrategy {
        ActixStrategy::new(syn::parse_str("::apigen_runtime").unwrap())
    }

    fn generate(code: &str) -> AppResult<String> {
        let model = extract_model(code).unwrap();
        let spec = &model.types[0];
        generate_validator(spec, &strategy()).map(|t| t.to_string().replace(' ', ""))
    }

    #[test]
    fn test_required_string_with_min() {
        let code = generate(
            r#"
            struct ProfileParams {
                /// apivalidator: required,min=10
                login: String,
            }
            "#,
        )
        .unwrap();
        assert!(code.contains("implProfileParams"));
        assert!(code.contains("values.value(\"login\")"));
        assert!(code.contains("Missing{param:\"login\"}"));
        assert!(code.contains("ifvalue.len()<10"));
        assert!(code.contains("TooShort{param:\"login\",bound:\"10\"}"));
    }

    #[test]
    fn test_checks_follow_fixed_order() {
        let code = generate(
            r#"
            struct P {
                /// apivalidator: max=50,min=1,enum=1|2,required,paramname=n
                n: i32,
            }
            "#,
        )
        .unwrap();
        let missing = code.find("Missing").unwrap();
        let parse = code.find("Malformed").unwrap();
        let variants = code.find("NotOneOf").unwrap();
        let min = code.find("BelowMin").unwrap();
        let max = code.find("AboveMax").unwrap();
        assert!(missing < parse && parse < variants && variants < min && min < max);
    }

    #[test]
    fn test_int_field_parses_and_compares_value() {
        let code = generate(
            r#"
            struct P {
                /// apivalidator: min=0,max=128
                age: u8,
            }
            "#,
        )
        .unwrap();
        assert!(code.contains("letvalue:u8=value.parse().map_err"));
        assert!(code.contains("expected:\"int\""));
        assert!(code.contains("ifvalue<0"));
        assert!(code.contains("ifvalue>128"));
    }

    #[test]
    fn test_string_max_is_compared_as_text() {
        let code = generate(
            r#"
            struct P {
                /// apivalidator: max=50
                name: String,
            }
            "#,
        )
        .unwrap();
        assert!(code.contains("ifvalue.as_str()>\"50\""));
    }

    #[test]
    fn test_typed_defaults() {
        let code = generate(
            r#"
            struct P {
                /// apivalidator: default=user,enum=user|admin
                role: String,
                /// apivalidator: default=18
                age: i64,
                /// apivalidator: default=0.5
                ratio: f64,
            }
            "#,
        )
        .unwrap();
        assert!(code.contains("\"user\".to_owned()"));
        assert!(code.contains("ifvalue.is_empty(){18}"));
        assert!(code.contains("ifvalue.is_empty(){\"0.5\"}else{value}"));
        assert!(code.contains("expected:\"f64\""));
        assert!(code.contains("&[\"user\",\"admin\"]"));
    }

    #[test]
    fn test_non_integer_default_on_int_is_fatal() {
        let err = generate(
            r#"
            struct P {
                /// apivalidator: default=many
                count: i32,
            }
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Rule { ref item, .. } if item == "P::count"));
    }

    #[test]
    fn test_invalid_bounds_are_fatal() {
        let err = generate(
            r#"
            struct P {
                /// apivalidator: min=ten
                login: String,
            }
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("min=`ten`"));

        let err = generate(
            r#"
            struct P {
                /// apivalidator: max=1.5
                age: i32,
            }
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("max=`1.5`"));
    }

    #[test]
    fn test_negative_bound_on_unsigned_field_is_fatal() {
        let err = generate(
            r#"
            struct P {
                /// apivalidator: min=-1
                count: u32,
            }
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Rule { ref item, .. } if item == "P::count"));
        assert!(err.to_string().contains("min=`-1` is out of range for u32"));
    }

    #[test]
    fn test_overflowing_default_is_fatal() {
        let err = generate(
            r#"
            struct P {
                /// apivalidator: default=300
                level: u8,
            }
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Rule { ref item, .. } if item == "P::level"));
        assert!(err.to_string().contains("default=`300` is out of range for u8"));
    }

    #[test]
    fn test_bounds_at_primitive_limits_are_accepted() {
        let code = generate(
            r#"
            struct P {
                /// apivalidator: min=-128,max=127,default=-128
                delta: i8,
            }
            "#,
        )
        .unwrap();
        assert!(code.contains("ifvalue.is_empty(){-128}"));
        assert!(code.contains("ifvalue<-128"));
        assert!(code.contains("ifvalue>127"));
    }

    #[test]
    fn test_enum_on_int_field_compares_text() {
        let code = generate(
            r#"
            struct P {
                /// apivalidator: enum=1|2|3
                level: i32,
            }
            "#,
        )
        .unwrap();
        assert!(code.contains("VARIANTS.contains(&value.to_string().as_str())"));
    }
}
