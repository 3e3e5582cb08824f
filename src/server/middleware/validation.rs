//! Request body validation.
//!
//! `ValidatedJson<T>` deserializes the body like `Json<T>` and then runs the DTO's
//! `validator` rules, short-circuiting with a 400 before the controller executes.

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::{model::api::ErrorMessageDto, server::error::AppError};

/// JSON extractor that also enforces the payload's `Validate` derive.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| AppError::Validation(error_messages(&errors)))?;

        Ok(Self(value))
    }
}

/// Flattens field errors into `errorMessages`, keyed by the camelCase wire name and
/// sorted by path.
pub fn error_messages(errors: &ValidationErrors) -> Vec<ErrorMessageDto> {
    let mut messages: Vec<ErrorMessageDto> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            let path = camel_case(&field);
            field_errors.iter().map(move |error| {
                let detail = error
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                ErrorMessageDto {
                    path: path.clone(),
                    message: format!("{} {}", path, detail),
                }
            })
        })
        .collect();
    messages.sort_by(|a, b| a.path.cmp(&b.path));
    messages
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for ch in field.chars() {
        if ch == '_' {
            upper = true;
        } else if upper {
            out.extend(ch.to_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Integer `{id}` path segment. Non-numeric ids are rejected with a 400 envelope.
pub struct IdPath(pub i32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        Ok(Self(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        product::{CreateProductDto, UpdateProductDto},
        user::{CreateUserDto, GenderDto},
    };

    fn signup() -> CreateUserDto {
        CreateUserDto {
            full_name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            password: "secret123".to_string(),
            role: None,
            contact_number: "01700000000".to_string(),
            address: "Dhaka".to_string(),
            image_url: None,
            gender: GenderDto::Female,
        }
    }

    #[test]
    fn accepts_valid_signup() {
        assert!(signup().validate().is_ok());
    }

    /// Tests that every failing field is reported under its wire name.
    ///
    /// Expected: one entry each for `email`, `fullName` and `password`, sorted by path
    #[test]
    fn reports_every_failing_field() {
        let dto = CreateUserDto {
            full_name: "   ".to_string(),
            email: "not-an-email".to_string(),
            password: "123".to_string(),
            ..signup()
        };

        let messages = error_messages(&dto.validate().unwrap_err());
        let paths: Vec<_> = messages.iter().map(|e| e.path.as_str()).collect();

        assert_eq!(paths, vec!["email", "fullName", "password"]);
        assert_eq!(messages[2].message, "password must be at least 6 characters");
    }

    #[test]
    fn rejects_zero_increment() {
        let dto = CreateProductDto {
            product_name: "Watch".to_string(),
            description: "Vintage".to_string(),
            image_url: "https://example.com/w.png".to_string(),
            auction_date: chrono::NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
            auction_time: chrono::NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            auction_status: None,
            initial_bidding_price: 100,
            current_bidding_price: None,
            increment_amount: 0,
            category_id: 1,
            product_owner_id: 1,
        };

        let messages = error_messages(&dto.validate().unwrap_err());

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].path, "incrementAmount");
    }

    /// Tests that absent optional fields skip their rules on partial updates.
    ///
    /// Expected: an empty update passes, a blank name fails
    #[test]
    fn partial_update_checks_only_present_fields() {
        assert!(UpdateProductDto::default().validate().is_ok());

        let dto = UpdateProductDto {
            product_name: Some(String::new()),
            ..Default::default()
        };
        let messages = error_messages(&dto.validate().unwrap_err());

        assert_eq!(messages[0].path, "productName");
    }
}
