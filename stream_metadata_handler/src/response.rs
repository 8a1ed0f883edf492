use ivs_client::PutMetadataError;
use serde::Serialize;

/// The function's entire contract toward its invoker: a status code and a
/// human-readable body. Fault detail stays in the structured log.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResponse {
    pub status_code: u16,
    pub body: String,
}

impl InvocationResponse {
    pub fn ok(body: &str) -> Self {
        Self {
            status_code: 200,
            body: body.to_string(),
        }
    }

    pub fn bad_request(body: &str) -> Self {
        Self {
            status_code: 400,
            body: body.to_string(),
        }
    }

    pub fn internal_error(body: &str) -> Self {
        Self {
            status_code: 500,
            body: body.to_string(),
        }
    }

    /// Maps the publish outcome onto the invocation contract.
    pub fn from_publish(result: Result<(), PutMetadataError>) -> Self {
        match result {
            Ok(()) => Self::ok("Metadata inserted successfully"),
            Err(PutMetadataError::NotBroadcasting) => {
                Self::bad_request("Channel is not broadcasting")
            }
            Err(PutMetadataError::Other(_)) => {
                Self::internal_error("Error: metadata insert failed")
            }
        }
    }
}
