//! # Type Mapping
//!
//! Classifies declared Rust field types into the small fixed set of kinds the
//! validator knows about, and turns raw rule text into typed literals for them.

use crate::parser::models::FieldKind;
use proc_macro2::{Literal, TokenStream};
use quote::{quote, ToTokens};

/// Maps a declared field type to its `FieldKind`.
///
/// Only the last path segment is inspected, so `std::string::String` is still a string.
pub fn classify(ty: &syn::Type) -> FieldKind {
    match last_segment(ty).as_deref() {
        Some("String") => FieldKind::String,
        Some(
            "i8" | "i16" | "i32" | "i64" | "i128" | "isize" | "u8" | "u16" | "u32" | "u64"
            | "u128" | "usize",
        ) => FieldKind::Int,
        _ => FieldKind::Other,
    }
}

/// Whether the type is `f32` or `f64`.
pub fn is_float(ty: &syn::Type) -> bool {
    matches!(last_segment(ty).as_deref(), Some("f32" | "f64"))
}

/// Human label used in "must be <type>" messages.
pub fn type_label(kind: FieldKind, ty: &syn::Type) -> String {
    match kind {
        FieldKind::String => "string".to_string(),
        FieldKind::Int => "int".to_string(),
        FieldKind::Other => ty.to_token_stream().to_string(),
    }
}

/// Why rule text could not become a literal of a field's type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralError {
    /// Not a number of the expected shape.
    Malformed,
    /// A valid integer outside the range of the declared primitive.
    OutOfRange,
}

/// Inclusive `MIN..=MAX` of an integer primitive.
pub fn int_range(ty: &syn::Type) -> Option<(i128, u128)> {
    let range = match last_segment(ty)?.as_str() {
        "i8" => (i8::MIN as i128, i8::MAX as u128),
        "i16" => (i16::MIN as i128, i16::MAX as u128),
        "i32" => (i32::MIN as i128, i32::MAX as u128),
        "i64" => (i64::MIN as i128, i64::MAX as u128),
        "i128" => (i128::MIN, i128::MAX as u128),
        "isize" => (isize::MIN as i128, isize::MAX as u128),
        "u8" => (0, u8::MAX as u128),
        "u16" => (0, u16::MAX as u128),
        "u32" => (0, u32::MAX as u128),
        "u64" => (0, u64::MAX as u128),
        "u128" => (0, u128::MAX),
        "usize" => (0, usize::MAX as u128),
        _ => return None,
    };
    Some(range)
}

/// An integer literal that fits the declared primitive `ty`.
///
/// Types that are not integer primitives accept any `i128`.
pub fn int_tokens(ty: &syn::Type, raw: &str) -> Result<TokenStream, LiteralError> {
    let raw = raw.trim();
    let (min, max) = int_range(ty).unwrap_or((i128::MIN, i128::MAX as u128));
    if raw.starts_with('-') {
        let value: i128 = raw.parse().map_err(|_| LiteralError::Malformed)?;
        if value < min {
            return Err(LiteralError::OutOfRange);
        }
        Ok(signed_literal(value))
    } else {
        let value: u128 = raw.parse().map_err(|_| LiteralError::Malformed)?;
        if value > max {
            return Err(LiteralError::OutOfRange);
        }
        let lit = Literal::u128_unsuffixed(value);
        Ok(quote!(#lit))
    }
}

fn signed_literal(value: i128) -> TokenStream {
    let lit = Literal::u128_unsuffixed(value.unsigned_abs());
    if value < 0 {
        quote!(-#lit)
    } else {
        quote!(#lit)
    }
}

/// A float literal, with a leading `-` token when negative.
pub fn float_tokens(raw: &str) -> Option<TokenStream> {
    let value: f64 = raw.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    let lit = Literal::f64_unsuffixed(value.abs());
    Some(if value < 0.0 { quote!(-#lit) } else { quote!(#lit) })
}

/// A length literal for `min` on string fields.
pub fn len_tokens(raw: &str) -> Option<TokenStream> {
    let value: usize = raw.trim().parse().ok()?;
    let lit = Literal::usize_unsuffixed(value);
    Some(quote!(#lit))
}

/// A numeric literal comparable with a value of the given field.
///
/// Integers in range for `Int` fields, floats for `f32`/`f64`, and for any
/// other type whichever of the two the text parses as.
pub fn numeric_tokens(
    kind: FieldKind,
    ty: &syn::Type,
    raw: &str,
) -> Result<TokenStream, LiteralError> {
    match kind {
        FieldKind::Int => int_tokens(ty, raw),
        _ if is_float(ty) => float_tokens(raw).ok_or(LiteralError::Malformed),
        _ => raw
            .trim()
            .parse::<i128>()
            .map(signed_literal)
            .ok()
            .or_else(|| float_tokens(raw))
            .ok_or(LiteralError::Malformed),
    }
}

fn last_segment(ty: &syn::Type) -> Option<String> {
    match ty {
        syn::Type::Path(p) if p.qself.is_none() => {
            p.path.segments.last().map(|s| s.ident.to_string())
        }
        syn::Type::Group(g) => last_segment(&g.elem),
        syn::Type::Paren(p) => last_segment(&p.elem),
        _ => None,
    }
}
