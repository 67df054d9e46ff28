use axum::{
    Form, Json, async_trait,
    extract::{FromRequest, Multipart, Request},
    http::{StatusCode, header},
};

use crate::cafes::interfaces::rest::resources::{
    add_cafe_form_resource::AddCafeFormResource, error_response_resource::ErrorResponseResource,
};

/// Reads the add-cafe form from either a urlencoded or a multipart body.
pub struct AddCafeFormPayload(pub AddCafeFormResource);

#[async_trait]
impl<S> FromRequest<S> for AddCafeFormPayload
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorResponseResource>);

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = request
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.to_ascii_lowercase().starts_with("multipart/form-data"));

        if !is_multipart {
            let Form(form) = Form::<AddCafeFormResource>::from_request(request, state)
                .await
                .map_err(|rejection| reject(rejection.status(), rejection.body_text()))?;
            return Ok(Self(form));
        }

        let mut multipart = Multipart::from_request(request, state)
            .await
            .map_err(|rejection| reject(rejection.status(), rejection.body_text()))?;

        let mut form = AddCafeFormResource::default();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| reject(StatusCode::BAD_REQUEST, format!("Multipart error: {e}")))?
        {
            // file parts are not form values
            if field.file_name().is_some() {
                continue;
            }
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };
            let value = field
                .text()
                .await
                .map_err(|e| reject(StatusCode::BAD_REQUEST, format!("Read error: {e}")))?;
            form.insert_field(&name, value);
        }

        Ok(Self(form))
    }
}

fn reject(status: StatusCode, message: String) -> (StatusCode, Json<ErrorResponseResource>) {
    (status, Json(ErrorResponseResource::rejected(message)))
}
