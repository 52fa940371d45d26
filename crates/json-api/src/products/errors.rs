//! Product Errors

use catalog_app::domain::products::ProductsServiceError;

use crate::envelope::ApiError;

pub(crate) fn into_api_error(error: ProductsServiceError) -> ApiError {
    match error {
        ProductsServiceError::AlreadyExists => {
            ApiError::name_exists("a product with this name already exists")
        }
        ProductsServiceError::NotFound => ApiError::NotFound,
        ProductsServiceError::InvalidReference
        | ProductsServiceError::MissingRequiredData
        | ProductsServiceError::InvalidData => ApiError::bad_request(error.to_string()),
        ProductsServiceError::Sql(_) => ApiError::Internal(error.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_failures_become_internal_errors_with_message() {
        let error = into_api_error(ProductsServiceError::Sql(sqlx::Error::PoolTimedOut));

        assert!(
            matches!(&error, ApiError::Internal(message) if message.starts_with("storage error")),
            "unexpected error: {error:?}"
        );
    }

    #[test]
    fn check_violations_become_bad_requests() {
        let error = into_api_error(ProductsServiceError::InvalidData);

        assert!(matches!(error, ApiError::BadRequest(_)), "unexpected error: {error:?}");
    }
}
