//! Invocation DTOs (Data Transfer Objects)

use kernel::error::app_error::AppError;
use serde::{Deserialize, Serialize};

use crate::error::ClinicError;

/// Wire shape accepted from the invoker.
///
/// Both peer CLI forms are understood:
/// `{"function": "GetPatient", "Args": ["P1"]}` and
/// `{"Args": ["GetPatient", "P1"]}`.
#[derive(Debug, Clone, Deserialize)]
struct RawInvocation {
    #[serde(default)]
    function: Option<String>,
    #[serde(rename = "Args", default)]
    args: Vec<String>,
}

/// One call to a named operation with positional string arguments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawInvocation")]
pub struct Invocation {
    pub function: String,
    #[serde(rename = "Args")]
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new<I, S>(function: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            function: function.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl TryFrom<RawInvocation> for Invocation {
    type Error = String;

    fn try_from(raw: RawInvocation) -> Result<Self, Self::Error> {
        match raw.function {
            Some(function) => Ok(Self {
                function,
                args: raw.args,
            }),
            None => {
                let mut args = raw.args.into_iter();
                let function = args
                    .next()
                    .ok_or_else(|| "invocation names no function".to_string())?;
                Ok(Self {
                    function,
                    args: args.collect(),
                })
            }
        }
    }
}

/// Result reported back to the invoker
///
/// `payload` holds the stored record for reads, and problem details for
/// failures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvokeResponse {
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl InvokeResponse {
    pub fn ok(payload: Option<serde_json::Value>) -> Self {
        Self {
            status: 200,
            payload,
            message: None,
        }
    }

    /// Failure response from any app-level error
    pub fn failure(err: &AppError) -> Self {
        Self {
            status: err.status_code(),
            payload: Some(err.to_problem()),
            message: Some(err.message().to_string()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

impl From<ClinicError> for InvokeResponse {
    fn from(err: ClinicError) -> Self {
        Self::failure(&AppError::from(err))
    }
}
