//! `tokio-postgres` parameter support.
//!
//! Enable via the crate feature: `sqlfrag = { features = ["postgres"] }`.
//!
//! ```ignore
//! let q = sqlfrag::sql!("SELECT * FROM users WHERE id = {}", 42);
//! let rows = client.query(&q.text(), &q.params_ref()).await?;
//! ```

use crate::sql::Sql;
use crate::value::Value;
use bytes::BytesMut;
use std::error::Error;
use tokio_postgres::types::{IsNull, Kind, ToSql, Type, to_sql_checked};

/// Largest magnitude an `i64` can have and still convert to `f64` exactly.
const MAX_EXACT_F64_INT: i64 = 1 << 53;

impl ToSql for Value {
    fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        match self {
            Value::Null => Ok(IsNull::Yes),
            Value::Bool(b) => b.to_sql_checked(ty, out),
            Value::Int(n) => {
                if *ty == Type::INT2 {
                    i16::try_from(*n)?.to_sql_checked(ty, out)
                } else if *ty == Type::INT4 {
                    i32::try_from(*n)?.to_sql_checked(ty, out)
                } else if *ty == Type::FLOAT8 {
                    if !(-MAX_EXACT_F64_INT..=MAX_EXACT_F64_INT).contains(n) {
                        return Err(format!("{n} is not exactly representable as {ty}").into());
                    }
                    (*n as f64).to_sql_checked(ty, out)
                } else {
                    n.to_sql_checked(ty, out)
                }
            }
            // FLOAT4 rounds to the nearest f32; only overflow is rejected.
            Value::Float(x) => {
                if *ty == Type::FLOAT4 {
                    if x.is_finite() && x.abs() > f64::from(f32::MAX) {
                        return Err(format!("{x} is out of range for {ty}").into());
                    }
                    (*x as f32).to_sql_checked(ty, out)
                } else {
                    x.to_sql_checked(ty, out)
                }
            }
            Value::Text(s) => s.as_str().to_sql_checked(ty, out),
            Value::Timestamp(ts) => {
                if *ty == Type::TIMESTAMP {
                    ts.naive_utc().to_sql_checked(ty, out)
                } else {
                    ts.to_sql_checked(ty, out)
                }
            }
            Value::Array(items) => {
                if !matches!(ty.kind(), Kind::Array(_)) {
                    return Err(format!("cannot bind an array to non-array type {ty}").into());
                }
                items.to_sql_checked(ty, out)
            }
        }
    }

    // The concrete check happens per variant in `to_sql`.
    fn accepts(_ty: &Type) -> bool {
        true
    }

    to_sql_checked!();
}

impl Sql {
    /// Parameter refs compatible with `tokio-postgres`.
    pub fn params_ref(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.values()
            .iter()
            .map(|v| v as &(dyn ToSql + Sync))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(value: &Value, ty: &Type) -> Result<(IsNull, Vec<u8>), Box<dyn Error + Sync + Send>> {
        let mut buf = BytesMut::new();
        let is_null = value.to_sql_checked(ty, &mut buf)?;
        Ok((is_null, buf.to_vec()))
    }

    #[test]
    fn null_is_null_for_any_type() {
        let (is_null, bytes) = encode(&Value::Null, &Type::INT4).unwrap();
        assert!(matches!(is_null, IsNull::Yes));
        assert!(bytes.is_empty());
    }

    #[test]
    fn ints_narrow_to_column_width() {
        let (_, bytes) = encode(&Value::Int(7), &Type::INT4).unwrap();
        assert_eq!(bytes, 7_i32.to_be_bytes());

        let (_, bytes) = encode(&Value::Int(7), &Type::INT8).unwrap();
        assert_eq!(bytes, 7_i64.to_be_bytes());

        assert!(encode(&Value::Int(70_000), &Type::INT2).is_err());
    }

    #[test]
    fn int_to_float8_must_be_exact() {
        let (_, bytes) = encode(&Value::Int(3), &Type::FLOAT8).unwrap();
        assert_eq!(bytes, 3_f64.to_be_bytes());

        assert!(encode(&Value::Int(1 << 53), &Type::FLOAT8).is_ok());
        assert!(encode(&Value::Int((1 << 53) + 1), &Type::FLOAT8).is_err());
        assert!(encode(&Value::Int(i64::MIN), &Type::FLOAT8).is_err());
    }

    #[test]
    fn float4_rejects_overflow() {
        let (_, bytes) = encode(&Value::Float(1.5), &Type::FLOAT4).unwrap();
        assert_eq!(bytes, 1.5_f32.to_be_bytes());

        assert!(encode(&Value::Float(1e300), &Type::FLOAT4).is_err());
        assert!(encode(&Value::Float(f64::INFINITY), &Type::FLOAT4).is_ok());
    }

    #[test]
    fn text_binds_as_utf8() {
        let (_, bytes) = encode(&Value::from("hey"), &Type::TEXT).unwrap();
        assert_eq!(bytes, b"hey");
    }

    #[test]
    fn wrong_type_is_an_error_not_a_panic() {
        assert!(encode(&Value::from("hey"), &Type::BOOL).is_err());
        assert!(encode(&Value::from(vec![1, 2]), &Type::INT4).is_err());
    }

    #[test]
    fn arrays_bind_to_array_types() {
        assert!(encode(&Value::from(vec![1, 2]), &Type::INT4_ARRAY).is_ok());
        assert!(encode(&Value::from(vec![Some("a"), None]), &Type::TEXT_ARRAY).is_ok());
    }

    #[cfg(feature = "macros")]
    #[test]
    fn params_ref_matches_values() {
        let q = crate::sql!("SELECT {}, {}", 1, "x");
        assert_eq!(q.params_ref().len(), 2);
    }
}
