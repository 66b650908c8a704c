//! Serde support for [`CodedResult`].
//!
//! A result travels as `{"code": <integer>, "message": <string>}`. The code
//! is written with [`ErrorDomain::code_value`] and read back with
//! [`ErrorDomain::code_from_value`]; a missing message reads as empty.

use serde::de::Error as _;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::ErrorDomain;
use crate::result::CodedResult;

#[derive(Deserialize)]
#[serde(rename = "CodedResult")]
struct WireResult {
    code: i64,
    #[serde(default)]
    message: String,
}

impl<D: ErrorDomain> Serialize for CodedResult<D> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("CodedResult", 2)?;
        state.serialize_field("code", &D::code_value(self.code()))?;
        state.serialize_field("message", self.message())?;
        state.end()
    }
}

impl<'de, D: ErrorDomain> Deserialize<'de> for CodedResult<D> {
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        let wire = WireResult::deserialize(deserializer)?;
        let mut result = CodedResult::from_raw_code(wire.code).map_err(De::Error::custom)?;
        result.append_value(wire.message);
        Ok(result)
    }
}
