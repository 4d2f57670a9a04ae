use reddit_core::{Document, DomainError, UserId, UserRecord};

use super::corrupt;
use crate::models::UserDoc;

pub fn user_from_document(doc: &Document) -> Result<UserRecord, DomainError> {
    let model: UserDoc = doc.decode()?;

    Ok(UserRecord {
        uid: UserId::parse(model.uid).map_err(|e| corrupt(&doc.path, &e))?,
        email: model.email,
        display_name: model.display_name,
        provider_data: model.provider_data,
        created_at: model.created_at,
    })
}

pub fn user_to_doc(user: &UserRecord) -> UserDoc {
    UserDoc {
        uid: user.uid.to_string(),
        email: user.email.clone(),
        display_name: user.display_name.clone(),
        provider_data: user.provider_data.clone(),
        created_at: user.created_at,
    }
}
