use reddit_core::{CommunityName, CommunitySnippet, Document, DomainError};

use super::corrupt;
use crate::models::SnippetDoc;

pub fn snippet_from_document(doc: &Document) -> Result<CommunitySnippet, DomainError> {
    let model: SnippetDoc = doc.decode()?;

    Ok(CommunitySnippet {
        community_id: CommunityName::parse(model.community_id)
            .map_err(|e| corrupt(&doc.path, &e))?,
        is_moderator: model.is_moderator,
        image_url: model.image_url,
    })
}

pub fn snippet_to_doc(snippet: &CommunitySnippet) -> SnippetDoc {
    SnippetDoc {
        community_id: snippet.community_id.to_string(),
        is_moderator: snippet.is_moderator,
        image_url: snippet.image_url.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reddit_core::traits::encode;

    #[test]
    fn test_stored_field_names() {
        let snippet = CommunitySnippet::moderator(CommunityName::parse("rust").unwrap());
        let data = encode(&snippet_to_doc(&snippet)).unwrap();

        assert_eq!(data["communityId"], "rust");
        assert_eq!(data["isModerator"], true);
    }
}
