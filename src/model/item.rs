use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Vault item discriminant, as the numeric `type` codes emitted by the
/// Bitwarden CLI. Codes this build does not know about are preserved as
/// `Unknown` rather than failing deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum ItemType {
    Login,
    SecureNote,
    Card,
    Identity,
    SshKey,
    Unknown(u8),
}

impl From<u8> for ItemType {
    fn from(code: u8) -> Self {
        match code {
            1 => ItemType::Login,
            2 => ItemType::SecureNote,
            3 => ItemType::Card,
            4 => ItemType::Identity,
            5 => ItemType::SshKey,
            other => ItemType::Unknown(other),
        }
    }
}

impl From<ItemType> for u8 {
    fn from(t: ItemType) -> u8 {
        match t {
            ItemType::Login => 1,
            ItemType::SecureNote => 2,
            ItemType::Card => 3,
            ItemType::Identity => 4,
            ItemType::SshKey => 5,
            ItemType::Unknown(other) => other,
        }
    }
}

impl ItemType {
    /// Short lowercase name for headers and diagnostics
    pub fn label(self) -> &'static str {
        match self {
            ItemType::Login => "login",
            ItemType::SecureNote => "note",
            ItemType::Card => "card",
            ItemType::Identity => "identity",
            ItemType::SshKey => "ssh-key",
            ItemType::Unknown(_) => "unknown",
        }
    }
}

/// Custom field type tag (`fields[].type` in CLI JSON)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum FieldType {
    Text,
    Hidden,
    Boolean,
    /// Mirrors another item field (username/password); has no standalone
    /// displayable value.
    Linked,
    Unknown(u8),
}

impl From<u8> for FieldType {
    fn from(code: u8) -> Self {
        match code {
            0 => FieldType::Text,
            1 => FieldType::Hidden,
            2 => FieldType::Boolean,
            3 => FieldType::Linked,
            other => FieldType::Unknown(other),
        }
    }
}

impl From<FieldType> for u8 {
    fn from(t: FieldType) -> u8 {
        match t {
            FieldType::Text => 0,
            FieldType::Hidden => 1,
            FieldType::Boolean => 2,
            FieldType::Linked => 3,
            FieldType::Unknown(other) => other,
        }
    }
}

impl Default for FieldType {
    fn default() -> Self {
        FieldType::Text
    }
}

/// URI match strategy attached to a login URI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum UriMatch {
    Domain,
    Host,
    StartsWith,
    Exact,
    RegularExpression,
    Never,
    Unknown(u8),
}

impl From<u8> for UriMatch {
    fn from(code: u8) -> Self {
        match code {
            0 => UriMatch::Domain,
            1 => UriMatch::Host,
            2 => UriMatch::StartsWith,
            3 => UriMatch::Exact,
            4 => UriMatch::RegularExpression,
            5 => UriMatch::Never,
            other => UriMatch::Unknown(other),
        }
    }
}

impl From<UriMatch> for u8 {
    fn from(m: UriMatch) -> u8 {
        match m {
            UriMatch::Domain => 0,
            UriMatch::Host => 1,
            UriMatch::StartsWith => 2,
            UriMatch::Exact => 3,
            UriMatch::RegularExpression => 4,
            UriMatch::Never => 5,
            UriMatch::Unknown(other) => other,
        }
    }
}

/// One URI attached to a login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LoginUri {
    #[serde(rename = "match", default)]
    pub match_type: Option<UriMatch>,
    #[serde(default)]
    pub uri: Option<String>,
}

/// Login sub-structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Login {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub totp: Option<String>,
    #[serde(default)]
    pub password_revision_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub uris: Option<Vec<LoginUri>>,
}

/// Payment card sub-structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(default)]
    pub cardholder_name: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub exp_month: Option<String>,
    #[serde(default)]
    pub exp_year: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

/// Identity sub-structure. Every field is optional; display grouping and
/// name/address composition happen in the section builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub middle_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub ssn: Option<String>,
    #[serde(default)]
    pub passport_number: Option<String>,
    #[serde(default)]
    pub license_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address1: Option<String>,
    #[serde(default)]
    pub address2: Option<String>,
    #[serde(default)]
    pub address3: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

/// SSH key sub-structure. Unlike the other sub-structures the CLI always
/// emits all three values as strings, so they default to empty rather than
/// being optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SshKey {
    #[serde(default)]
    pub public_key: String,
    #[serde(default)]
    pub key_fingerprint: String,
    #[serde(default)]
    pub private_key: String,
}

/// A user-defined name/value pair attached to an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CustomField {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(rename = "type", default)]
    pub field_type: FieldType,
    #[serde(default)]
    pub linked_id: Option<u32>,
}

/// One decrypted vault item as emitted by the CLI.
///
/// The builder treats this as immutable input. Exactly one sub-structure is
/// expected to match `item_type`; a missing or mismatched sub-structure is
/// tolerated and simply contributes no sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultItem {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub reprompt: u8,
    #[serde(default)]
    pub folder_id: Option<String>,
    #[serde(default)]
    pub organization_id: Option<String>,
    #[serde(default)]
    pub collection_ids: Vec<String>,
    #[serde(default)]
    pub fields: Option<Vec<CustomField>>,
    #[serde(default)]
    pub login: Option<Login>,
    #[serde(default)]
    pub card: Option<Card>,
    #[serde(default)]
    pub identity: Option<Identity>,
    #[serde(default)]
    pub ssh_key: Option<SshKey>,
    #[serde(default)]
    pub revision_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub deleted_date: Option<DateTime<Utc>>,
}

impl VaultItem {
    /// Create a bare item of the given type with everything else empty
    pub fn new(id: impl Into<String>, name: impl Into<String>, item_type: ItemType) -> Self {
        VaultItem {
            id: id.into(),
            name: name.into(),
            item_type,
            notes: None,
            favorite: false,
            reprompt: 0,
            folder_id: None,
            organization_id: None,
            collection_ids: Vec::new(),
            fields: None,
            login: None,
            card: None,
            identity: None,
            ssh_key: None,
            revision_date: None,
            creation_date: None,
            deleted_date: None,
        }
    }
}
