//! # Operations and Canonical Messages

use std::fmt;

use super::errors::AuthError;

/// Longest key or value a put can carry (u16 length prefix).
pub const MAX_FIELD_LEN: usize = u16::MAX as usize;

const GET_ALL_MESSAGE: &[u8] = b"getAll";
const CLEAR_MESSAGE: &[u8] = b"clear";

/// Which endpoint a request arrived on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Put,
    GetAll,
    Clear,
}

impl OperationKind {
    /// Endpoint name, also used as a metrics label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Put => "put",
            Self::GetAll => "getAll",
            Self::Clear => "clear",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A key/value pair whose lengths fit the u16 wire prefixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutRecord {
    key: Vec<u8>,
    value: Vec<u8>,
}

impl PutRecord {
    pub fn new(key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Result<Self, AuthError> {
        let key = key.into();
        let value = value.into();
        if key.len() > MAX_FIELD_LEN {
            return Err(AuthError::FieldTooLong {
                field: "key",
                len: key.len(),
            });
        }
        if value.len() > MAX_FIELD_LEN {
            return Err(AuthError::FieldTooLong {
                field: "value",
                len: value.len(),
            });
        }
        Ok(Self { key, value })
    }

    pub fn key(&self) -> &[u8] {
        &self.key
    }

    pub fn value(&self) -> &[u8] {
        &self.value
    }
}

/// A decoded storage operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Put(PutRecord),
    GetAll,
    Clear,
}

impl Operation {
    /// Checked put constructor.
    pub fn put(key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Result<Self, AuthError> {
        PutRecord::new(key, value).map(Self::Put)
    }

    pub fn kind(&self) -> OperationKind {
        match self {
            Self::Put(_) => OperationKind::Put,
            Self::GetAll => OperationKind::GetAll,
            Self::Clear => OperationKind::Clear,
        }
    }

    /// Decode the bytes after the header for the given endpoint.
    ///
    /// Bytes beyond what the operation declares are ignored.
    pub fn decode(kind: OperationKind, body: &[u8]) -> Result<Self, AuthError> {
        match kind {
            OperationKind::GetAll => Ok(Self::GetAll),
            OperationKind::Clear => Ok(Self::Clear),
            OperationKind::Put => {
                let (key, rest) = read_field(body)?;
                let (value, _trailing) = read_field(rest)?;
                Ok(Self::Put(PutRecord {
                    key: key.to_vec(),
                    value: value.to_vec(),
                }))
            }
        }
    }

    /// The bytes a signature must cover.
    pub fn canonical_message(&self) -> Vec<u8> {
        match self {
            Self::Put(record) => {
                let mut message = Vec::with_capacity(4 + record.key.len() + record.value.len());
                write_field(&mut message, &record.key);
                write_field(&mut message, &record.value);
                message
            }
            Self::GetAll => GET_ALL_MESSAGE.to_vec(),
            Self::Clear => CLEAR_MESSAGE.to_vec(),
        }
    }

    /// Wire body following the header. For put this equals the canonical
    /// message; getAll and clear carry nothing.
    pub fn encode_body(&self) -> Vec<u8> {
        match self {
            Self::Put(_) => self.canonical_message(),
            Self::GetAll | Self::Clear => Vec::new(),
        }
    }
}

fn read_field(input: &[u8]) -> Result<(&[u8], &[u8]), AuthError> {
    if input.len() < 2 {
        return Err(AuthError::MalformedHeader("missing u16 length prefix"));
    }
    let len = u16::from_le_bytes([input[0], input[1]]) as usize;
    let rest = &input[2..];
    if rest.len() < len {
        return Err(AuthError::MalformedHeader("declared length exceeds body"));
    }
    Ok(rest.split_at(len))
}

// Length fits: PutRecord enforces MAX_FIELD_LEN.
fn write_field(out: &mut Vec<u8>, field: &[u8]) {
    out.extend_from_slice(&(field.len() as u16).to_le_bytes());
    out.extend_from_slice(field);
}
