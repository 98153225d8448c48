//! Reading request payloads out of a parsed JSON body.
//!
//! A body is parsed as a [`Value`] first and then read field by field, so a missing or
//! mistyped field is reported at its own location (`["body", "price"]`) with pydantic's
//! kind (`missing`, `float_parsing`, `int_type`, ...). Numbers are read leniently: an
//! integer field accepts `10.0` and `"10"`, a float field accepts `"5.5"`.

use serde_json::{Map, Value};

use super::patch::Patch;
use super::validation::ValidationErrors;

/// Builds a payload from a parsed JSON body.
pub trait FromBody: Sized {
    fn from_body(body: &Value) -> Result<Self, ValidationErrors>;
}

/// A rejected field value: kind and message.
type Read<T> = Result<T, (&'static str, &'static str)>;

const INT_TYPE: (&str, &str) = ("int_type", "Input should be a valid integer");
const INT_SIZE: (&str, &str) = (
    "int_parsing_size",
    "Unable to parse input string as an integer, exceeded maximum size",
);

/// Reads typed fields from a JSON object, collecting every violation on the way.
pub struct BodyFields<'a> {
    object: &'a Map<String, Value>,
    errors: ValidationErrors,
}

impl<'a> BodyFields<'a> {
    pub fn new(body: &'a Value) -> Result<Self, ValidationErrors> {
        match body.as_object() {
            Some(object) => Ok(Self {
                object,
                errors: ValidationErrors::new(),
            }),
            None => Err(ValidationErrors::single(
                &["body"],
                "model_attributes_type",
                "Input should be a valid dictionary or object to extract fields from",
            )),
        }
    }

    pub fn string(&mut self, field: &str) -> Option<String> {
        self.required(field, read_string)
    }

    pub fn float(&mut self, field: &str) -> Option<f64> {
        self.required(field, read_float)
    }

    pub fn integer(&mut self, field: &str) -> Option<i64> {
        self.required(field, read_integer)
    }

    /// A nullable field: missing and `null` both read as `None`.
    pub fn optional_string(&mut self, field: &str) -> Option<String> {
        match self.patch(field, read_string) {
            Patch::Value(value) => Some(value),
            Patch::Absent | Patch::Null => None,
        }
    }

    pub fn patch_string(&mut self, field: &str) -> Patch<String> {
        self.patch(field, read_string)
    }

    pub fn patch_float(&mut self, field: &str) -> Patch<f64> {
        self.patch(field, read_float)
    }

    pub fn patch_integer(&mut self, field: &str) -> Patch<i64> {
        self.patch(field, read_integer)
    }

    /// `Ok(())` if every field read so far was acceptable.
    pub fn finish(self) -> Result<(), ValidationErrors> {
        self.errors.into_result()
    }

    pub fn into_errors(self) -> ValidationErrors {
        self.errors
    }

    fn required<T>(&mut self, field: &str, read: fn(&Value) -> Read<T>) -> Option<T> {
        match self.object.get(field) {
            None => {
                self.errors.push(&["body", field], "missing", "Field required");
                None
            }
            Some(value) => self.record(field, read(value)),
        }
    }

    fn patch<T>(&mut self, field: &str, read: fn(&Value) -> Read<T>) -> Patch<T> {
        match self.object.get(field) {
            None => Patch::Absent,
            Some(Value::Null) => Patch::Null,
            // A rejected value is recorded; `finish` then fails the whole body
            Some(value) => self
                .record(field, read(value))
                .map_or(Patch::Absent, Patch::Value),
        }
    }

    fn record<T>(&mut self, field: &str, read: Read<T>) -> Option<T> {
        match read {
            Ok(value) => Some(value),
            Err((kind, msg)) => {
                self.errors.push(&["body", field], kind, msg);
                None
            }
        }
    }
}

fn read_string(value: &Value) -> Read<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        _ => Err(("string_type", "Input should be a valid string")),
    }
}

fn read_float(value: &Value) -> Read<f64> {
    const FLOAT_TYPE: (&str, &str) = ("float_type", "Input should be a valid number");
    match value {
        Value::Number(n) => n.as_f64().ok_or(FLOAT_TYPE),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .ok_or((
                "float_parsing",
                "Input should be a valid number, unable to parse string as a number",
            )),
        _ => Err(FLOAT_TYPE),
    }
}

fn read_integer(value: &Value) -> Read<i64> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            if n.is_u64() {
                return Err(INT_SIZE);
            }
            let f = n.as_f64().ok_or(INT_TYPE)?;
            if f.fract() != 0.0 {
                return Err((
                    "int_from_float",
                    "Input should be a valid integer, got a number with a fractional part",
                ));
            }
            // i64::MAX is not representable as f64; 2^63 is the first value past the range
            if f < -(2f64.powi(63)) || f >= 2f64.powi(63) {
                return Err(INT_SIZE);
            }
            Ok(f as i64)
        }
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| {
            (
                "int_parsing",
                "Input should be a valid integer, unable to parse string as an integer",
            )
        }),
        _ => Err(INT_TYPE),
    }
}
