use reddit_core::{Community, CommunityName, Document, DomainError, UserId};

use super::corrupt;
use crate::models::CommunityDoc;

/// Decode a `communities/{name}` document; the name comes from the document id
pub fn community_from_document(doc: &Document) -> Result<Community, DomainError> {
    let model: CommunityDoc = doc.decode()?;

    Ok(Community {
        id: CommunityName::parse(doc.id()).map_err(|e| corrupt(&doc.path, &e))?,
        creator_id: UserId::parse(model.creator_id).map_err(|e| corrupt(&doc.path, &e))?,
        number_of_members: model.number_of_members,
        privacy_type: model.privacy_type,
        image_url: model.image_url,
        created_at: model.created_at,
    })
}

pub fn community_to_doc(community: &Community) -> CommunityDoc {
    CommunityDoc {
        creator_id: community.creator_id.to_string(),
        created_at: community.created_at,
        number_of_members: community.number_of_members,
        privacy_type: community.privacy_type,
        image_url: community.image_url.clone(),
    }
}
