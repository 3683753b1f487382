//! Contact route handlers.
//!
//! Submissions are appended to the contact spreadsheet via Apps Script;
//! the contact info endpoint exposes the display data from configuration.

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;

use crate::error::Result;
use crate::models::contact::ContactMessage;
use crate::state::AppState;

/// Response for form submission.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Contact display data for the contact page.
#[derive(Debug, Serialize)]
pub struct ContactInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub whatsapp_number: String,
}

/// Submit a contact message.
///
/// POST /contact
#[instrument(skip(state, form), fields(email = %form.email))]
pub async fn submit(
    State(state): State<AppState>,
    Json(form): Json<ContactMessage>,
) -> Result<Json<ContactResponse>> {
    form.validate()?;
    state.sheets().send_contact(&form).await?;

    tracing::info!("Contact message sent");
    Ok(Json(ContactResponse {
        success: true,
        message: Some("¡Mensaje enviado correctamente!".to_string()),
    }))
}

/// Contact display data.
///
/// GET /contact/info
#[instrument(skip(state))]
pub async fn info(State(state): State<AppState>) -> Json<ContactInfo> {
    let contact = &state.config().contact;
    Json(ContactInfo {
        phone: contact.phone.clone(),
        email: contact.email.clone(),
        address: contact.address.clone(),
        whatsapp_number: contact.whatsapp_number.clone(),
    })
}
