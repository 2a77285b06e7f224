//! Account document as stored in the `accounts` collection.

use mongodb::bson::{oid::ObjectId, Bson};
use serde::{Deserialize, Serialize};

use crate::domain::{Account, HashedAccountToCreate};
use crate::errors::{AppError, AppResult};

/// Storage shape of an account. `_id` is left out on insert so the store
/// generates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", default)]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl From<HashedAccountToCreate> for AccountDocument {
    fn from(account: HashedAccountToCreate) -> Self {
        Self {
            id: None,
            name: account.name,
            email: account.email,
            password: account.password,
        }
    }
}

/// Translate an inserted document into the domain [`Account`].
///
/// The store-generated `inserted_id` becomes `Account::id`; the document's
/// own `_id` key is dropped.
pub fn map_inserted_account(inserted_id: Bson, document: AccountDocument) -> AppResult<Account> {
    let AccountDocument {
        id: _,
        name,
        email,
        password,
    } = document;

    Ok(Account {
        id: identifier_to_string(inserted_id)?,
        name,
        email,
        password,
    })
}

fn identifier_to_string(inserted_id: Bson) -> AppResult<String> {
    match inserted_id {
        Bson::ObjectId(oid) => Ok(oid.to_hex()),
        Bson::String(id) if !id.is_empty() => Ok(id),
        other => Err(AppError::serialization(format!(
            "Unsupported generated identifier: {:?}",
            other.element_type()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::to_document;

    fn document() -> AccountDocument {
        AccountDocument::from(HashedAccountToCreate {
            name: "any_name".to_string(),
            email: "any_email@mail.com".to_string(),
            password: "hashed_password".to_string(),
        })
    }

    #[test]
    fn test_insert_document_has_no_id_key() {
        let bson = to_document(&document()).unwrap();

        assert!(!bson.contains_key("_id"));
        assert_eq!(bson.get_str("name").unwrap(), "any_name");
        assert_eq!(bson.get_str("password").unwrap(), "hashed_password");
    }

    #[test]
    fn test_map_object_id_to_hex() {
        let oid = ObjectId::new();

        let account = map_inserted_account(Bson::ObjectId(oid), document()).unwrap();

        assert_eq!(account.id, oid.to_hex());
        assert_eq!(account.name, "any_name");
        assert_eq!(account.email, "any_email@mail.com");
        assert_eq!(account.password, "hashed_password");
    }

    #[test]
    fn test_map_strips_document_id() {
        let stale = ObjectId::new();
        let generated = ObjectId::new();
        let doc = AccountDocument {
            id: Some(stale),
            ..document()
        };

        let account = map_inserted_account(Bson::ObjectId(generated), doc).unwrap();
        let json = serde_json::to_value(&account).unwrap();

        assert_eq!(account.id, generated.to_hex());
        assert!(json.get("_id").is_none());
        assert_eq!(json.as_object().unwrap().len(), 4);
    }

    #[test]
    fn test_map_string_id_passes_through() {
        let account =
            map_inserted_account(Bson::String("valid_id".to_string()), document()).unwrap();
        assert_eq!(account.id, "valid_id");
    }

    #[test]
    fn test_map_rejects_unsupported_id() {
        let result = map_inserted_account(Bson::Int32(7), document());
        assert!(matches!(result, Err(AppError::Serialization(_))));

        let result = map_inserted_account(Bson::String(String::new()), document());
        assert!(result.is_err());
    }
}
