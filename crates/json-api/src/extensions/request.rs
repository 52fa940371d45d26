//! Path and body extraction for catalog handlers.

use catalog_app::ids::TypedId;
use salvo::prelude::Request;
use serde::de::DeserializeOwned;

use crate::envelope::ApiError;

const ID_PARAM: &str = "id";

pub(crate) trait RequestExt {
    /// The `{id}` route segment, rejecting anything that is not an integer.
    fn id_param<T>(&self) -> Result<TypedId<T>, ApiError>;
}

impl RequestExt for Request {
    fn id_param<T>(&self) -> Result<TypedId<T>, ApiError> {
        self.params()
            .get(ID_PARAM)
            .ok_or_else(|| ApiError::bad_request("id: missing"))?
            .parse()
            .map_err(|_ignored| ApiError::bad_request("id: must be an integer"))
    }
}

/// Deserialize the JSON body. An absent, non-JSON or malformed body is a 400.
pub(crate) async fn json_payload<T>(req: &mut Request) -> Result<T, ApiError>
where
    T: DeserializeOwned + Send,
{
    req.parse_json::<T>()
        .await
        .map_err(|error| ApiError::bad_request(format!("body: {error}")))
}
