//! JSON payload codec for DTOs at the service boundary.
//!
//! # Responsibility
//! - Encode/decode DTOs using their declared wire field names.
//! - Emit metadata-only diagnostics (kind and size, never field values).
//!
//! # Invariants
//! - Cast members never appear in a payload; they are not serde fields.
//! - Decoding never runs validation rules.

use crate::entity::Dto;
use log::{debug, warn};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CodecResult<T> = Result<T, CodecError>;

/// Payload encode/decode failure.
#[derive(Debug)]
pub enum CodecError {
    Encode {
        kind: &'static str,
        source: serde_json::Error,
    },
    Decode {
        kind: &'static str,
        source: serde_json::Error,
    },
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encode { kind, source } => write!(f, "failed to encode {kind}: {source}"),
            Self::Decode { kind, source } => write!(f, "failed to decode {kind}: {source}"),
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Encode { source, .. } => Some(source),
            Self::Decode { source, .. } => Some(source),
        }
    }
}

/// Encodes one DTO as a JSON string.
pub fn encode<D: Dto>(dto: &D) -> CodecResult<String> {
    match serde_json::to_string(dto) {
        Ok(payload) => {
            debug!(
                "event=dto_encode module=codec status=ok kind={} bytes={}",
                D::KIND,
                payload.len()
            );
            Ok(payload)
        }
        Err(source) => {
            warn!(
                "event=dto_encode module=codec status=error kind={} error={}",
                D::KIND,
                source
            );
            Err(CodecError::Encode {
                kind: D::KIND,
                source,
            })
        }
    }
}

/// Decodes one DTO from a JSON string.
///
/// Missing fields take the DTO defaults; unknown fields are ignored.
pub fn decode<D: Dto>(payload: &str) -> CodecResult<D> {
    match serde_json::from_str(payload) {
        Ok(dto) => {
            debug!(
                "event=dto_decode module=codec status=ok kind={} bytes={}",
                D::KIND,
                payload.len()
            );
            Ok(dto)
        }
        Err(source) => {
            warn!(
                "event=dto_decode module=codec status=error kind={} error={}",
                D::KIND,
                source
            );
            Err(CodecError::Decode {
                kind: D::KIND,
                source,
            })
        }
    }
}

/// Encodes one DTO as a JSON value tree.
pub fn encode_value<D: Dto>(dto: &D) -> CodecResult<Value> {
    serde_json::to_value(dto).map_err(|source| CodecError::Encode {
        kind: D::KIND,
        source,
    })
}

/// Decodes one DTO from a JSON value tree.
pub fn decode_value<D: Dto>(value: Value) -> CodecResult<D> {
    serde_json::from_value(value).map_err(|source| CodecError::Decode {
        kind: D::KIND,
        source,
    })
}
