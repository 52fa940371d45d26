//! Provider Errors

use catalog_app::domain::providers::ProvidersServiceError;

use crate::envelope::ApiError;

pub(crate) fn into_api_error(error: ProvidersServiceError) -> ApiError {
    match error {
        ProvidersServiceError::AlreadyExists => {
            ApiError::name_exists("a provider with this name already exists")
        }
        ProvidersServiceError::NotFound => ApiError::NotFound,
        ProvidersServiceError::InvalidReference
        | ProvidersServiceError::MissingRequiredData
        | ProvidersServiceError::InvalidData => ApiError::bad_request(error.to_string()),
        ProvidersServiceError::Sql(_) => ApiError::Internal(error.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_failures_carry_the_source_message() {
        let error = into_api_error(ProvidersServiceError::Sql(sqlx::Error::PoolTimedOut));

        assert!(
            matches!(&error, ApiError::Internal(message) if message.starts_with("storage error")),
            "unexpected error: {error:?}"
        );
    }

    #[test]
    fn duplicate_names_become_name_exists() {
        let error = into_api_error(ProvidersServiceError::AlreadyExists);

        assert!(
            matches!(
                &error,
                ApiError::BadRequest(messages)
                    if messages == &["NameExists: a provider with this name already exists"]
            ),
            "unexpected error: {error:?}"
        );
    }
}
