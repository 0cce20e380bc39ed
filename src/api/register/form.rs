//! Form extractors for the registration routes

use std::convert::Infallible;

use axum::{
    extract::{rejection::FormRejection, FromRequest, Request},
    Form,
};
use serde::{
    de::{self, DeserializeOwned},
    Deserialize, Deserializer,
};
use tracing::warn;

use crate::domain::registration::ValidationResult;

/// Consent form posted from step 1
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct AgreeForm {
    #[serde(deserialize_with = "deserialize_checkbox")]
    pub agree: bool,
}

/// Checkbox value as browsers and hand-written forms send it.
///
/// An empty value means unchecked.
fn deserialize_checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;

    match value.trim().to_ascii_lowercase().as_str() {
        "" | "false" | "off" | "no" | "0" => Ok(false),
        "true" | "on" | "yes" | "1" => Ok(true),
        other => Err(de::Error::invalid_value(
            de::Unexpected::Str(other),
            &"a checkbox value such as true, false, on or off",
        )),
    }
}

/// Lenient form binding.
///
/// A body that cannot be read as form data does not reject the request;
/// the target is left at its default and a global `bind` error is recorded
/// for the validators to build on.
#[derive(Debug)]
pub struct BoundForm<T> {
    pub value: T,
    pub binding: ValidationResult,
}

impl<S, T> FromRequest<S> for BoundForm<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Form::<T>::from_request(req, state).await {
            Ok(Form(value)) => Ok(Self {
                value,
                binding: ValidationResult::new(),
            }),
            Err(rejection) => {
                warn!(reason = %describe_rejection(&rejection), "Form binding failed");

                let mut binding = ValidationResult::new();
                binding.reject("bind");

                Ok(Self {
                    value: T::default(),
                    binding,
                })
            }
        }
    }
}

fn describe_rejection(rejection: &FormRejection) -> String {
    match rejection {
        FormRejection::InvalidFormContentType(_) => {
            "Expected 'application/x-www-form-urlencoded' content type".to_string()
        }
        FormRejection::FailedToDeserializeFormBody(err) => err.body_text(),
        other => other.body_text(),
    }
}
