use axum::extract::Multipart;
use mime::Mime;

use crate::app::models::api_error::ApiError;

use super::models::{file_properties::FileProperties, form_data::FormData};

/// Reads every part of the body. Parts carrying a file name are files, the rest are text fields.
pub async fn get_form_data(mut multipart: Multipart) -> Result<FormData, ApiError> {
    let mut form_data = FormData::default();

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().unwrap_or("file").to_string();

        let Some(file_name) = field.file_name().map(str::to_string) else {
            let value = field.text().await?;
            form_data.fields.insert(field_name, value);
            continue;
        };

        let mime_type = field
            .content_type()
            .and_then(|content_type| content_type.parse::<Mime>().ok())
            .unwrap_or(mime::APPLICATION_OCTET_STREAM);
        let data = field.bytes().await?;

        form_data.files.push(FileProperties {
            field_name,
            file_name,
            mime_type,
            data,
        });
    }

    Ok(form_data)
}
