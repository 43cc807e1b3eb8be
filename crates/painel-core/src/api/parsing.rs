//! Schema-validated decoders for API response bodies
//!
//! Every decoder returns `Error::InvalidData` (or `Error::Auth` for login)
//! instead of trusting the response shape.

use serde::Deserialize;
use serde_json::Value;

use crate::color::HexColor;
use crate::error::{Error, Result};
use crate::models::{EntryKind, FinancialEntry};

/// Longest raw body excerpt included in error messages
const RAW_EXCERPT: usize = 200;

fn excerpt(body: &str) -> String {
    let body = body.trim();
    if body.len() > RAW_EXCERPT {
        let mut end = RAW_EXCERPT;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}

fn invalid(what: &str, e: impl std::fmt::Display, body: &str) -> Error {
    Error::InvalidData(format!("Invalid {}: {} | Raw: {}", what, e, excerpt(body)))
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    id: Option<Value>,
}

/// Decode a login response into the user identifier
///
/// `id` may be a number or a string; a missing, null or empty id means the
/// credentials were rejected.
pub fn parse_login(body: &str) -> Result<String> {
    let response: LoginResponse =
        serde_json::from_str(body).map_err(|e| invalid("login response", e, body))?;

    match response.id {
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s),
        Some(Value::Null) | None => Err(Error::Auth("invalid email or password".into())),
        Some(other) => Err(invalid("login id", format!("unexpected {}", other), body)),
    }
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    mes: u8,
    tipo: String,
    valor: f64,
}

/// Decode the entry list
///
/// Month range is not checked here; `aggregate` rejects out-of-range months.
pub fn parse_entries(body: &str) -> Result<Vec<FinancialEntry>> {
    let raw: Vec<RawEntry> =
        serde_json::from_str(body).map_err(|e| invalid("entries", e, body))?;

    raw.into_iter()
        .enumerate()
        .map(|(i, r)| {
            if !r.valor.is_finite() || r.valor < 0.0 {
                return Err(invalid(
                    "entries",
                    format!("entry {} has amount {}", i, r.valor),
                    body,
                ));
            }
            Ok(FinancialEntry::new(r.mes, EntryKind::from_tipo(&r.tipo), r.valor))
        })
        .collect()
}

#[derive(Debug, Deserialize)]
struct RawHex {
    value: String,
}

#[derive(Debug, Deserialize)]
struct RawColor {
    hex: RawHex,
}

#[derive(Debug, Deserialize)]
struct RawScheme {
    colors: Vec<RawColor>,
}

fn to_hex(raw: RawColor, body: &str) -> Result<HexColor> {
    HexColor::parse(&raw.hex.value).map_err(|e| invalid("color", e, body))
}

/// Decode `{hex: {value}}` from the random-color endpoint
pub fn parse_random_color(body: &str) -> Result<HexColor> {
    let raw: RawColor =
        serde_json::from_str(body).map_err(|e| invalid("color response", e, body))?;
    to_hex(raw, body)
}

/// Decode `{colors: [{hex: {value}}]}` from the scheme endpoint, keeping order
///
/// The response must hold exactly `expected` colors.
pub fn parse_scheme(body: &str, expected: usize) -> Result<Vec<HexColor>> {
    let raw: RawScheme =
        serde_json::from_str(body).map_err(|e| invalid("scheme response", e, body))?;
    if raw.colors.len() != expected {
        return Err(invalid(
            "scheme response",
            format!("expected {} colors, got {}", expected, raw.colors.len()),
            body,
        ));
    }
    raw.colors.into_iter().map(|c| to_hex(c, body)).collect()
}
