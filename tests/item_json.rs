//! Round-trip coverage for the CLI JSON boundary: a realistic decrypted item
//! deserializes into the model, and built sections serialize with the tagged
//! field taxonomy a rendering frontend consumes.

use pretty_assertions::assert_eq;
use vaultview::model::{FieldType, ItemType, UriMatch, VaultItem};
use vaultview::ops::sections::build_field_sections;

const IDENTITY_ITEM: &str = r#"{
  "object": "item",
  "id": "0b8f4a21-9d1c-4c6a-8a11-abcdefabcdef",
  "organizationId": null,
  "folderId": null,
  "type": 4,
  "reprompt": 0,
  "name": "Passport",
  "notes": null,
  "favorite": true,
  "identity": {
    "title": "Dr",
    "firstName": "Ada",
    "middleName": null,
    "lastName": "Lovelace",
    "address1": "12 Analytical Way",
    "address2": null,
    "address3": null,
    "city": "London",
    "state": null,
    "postalCode": "N1 9GU",
    "country": "UK",
    "company": null,
    "email": "ada@example.org",
    "phone": null,
    "ssn": null,
    "username": null,
    "passportNumber": "X1234567",
    "licenseNumber": null
  },
  "fields": [
    { "name": "Renewal", "value": "true", "type": 2, "linkedId": null },
    { "name": "Mirror", "value": null, "type": 3, "linkedId": 100 }
  ],
  "collectionIds": [],
  "revisionDate": "2024-06-15T08:30:00.000Z",
  "creationDate": "2023-01-02T10:00:00.000Z",
  "deletedDate": null
}"#;

#[test]
fn identity_item_deserializes_from_cli_json() {
    let item: VaultItem = serde_json::from_str(IDENTITY_ITEM).unwrap();

    assert_eq!(item.item_type, ItemType::Identity);
    assert!(item.favorite);
    assert!(item.login.is_none());

    let identity = item.identity.as_ref().unwrap();
    assert_eq!(identity.first_name.as_deref(), Some("Ada"));
    assert_eq!(identity.middle_name, None);

    let fields = item.fields.as_ref().unwrap();
    assert_eq!(fields[0].field_type, FieldType::Boolean);
    assert_eq!(fields[1].field_type, FieldType::Linked);
    assert_eq!(fields[1].linked_id, Some(100));
}

#[test]
fn unknown_item_and_field_type_codes_are_tolerated() {
    let raw = r#"{
      "id": "x",
      "name": "Future",
      "type": 42,
      "fields": [ { "name": "F", "value": "v", "type": 9 } ]
    }"#;
    let item: VaultItem = serde_json::from_str(raw).unwrap();

    assert_eq!(item.item_type, ItemType::Unknown(42));
    let sections = build_field_sections(&item);
    // unknown item types still surface their custom fields as text
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].title, "Custom Fields");
}

#[test]
fn uri_match_codes_round_trip() {
    let raw = r#"{
      "id": "x",
      "name": "Login",
      "type": 1,
      "login": { "uris": [ { "match": 3, "uri": "https://exact.example" } ] }
    }"#;
    let item: VaultItem = serde_json::from_str(raw).unwrap();
    let uris = item.login.as_ref().unwrap().uris.as_ref().unwrap();
    assert_eq!(uris[0].match_type, Some(UriMatch::Exact));

    let back = serde_json::to_value(&item).unwrap();
    assert_eq!(back["login"]["uris"][0]["match"], 3);
}

#[test]
fn built_sections_serialize_with_tagged_taxonomy() {
    let item: VaultItem = serde_json::from_str(IDENTITY_ITEM).unwrap();
    let sections = build_field_sections(&item);

    let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Personal Details", "Identification", "Contact Information", "Custom Fields"]
    );

    let json = serde_json::to_value(&sections).unwrap();

    // flattened body with camelCase keys and a lowercase type tag
    let name = &json[0]["fields"][0];
    assert_eq!(name["type"], "text");
    assert_eq!(name["id"], "identity.name");
    assert_eq!(name["value"], "Dr Ada Lovelace");
    assert_eq!(name["icon"], "person");

    let passport = &json[1]["fields"][0];
    assert_eq!(passport["type"], "hidden");
    assert_eq!(passport["hiddenIcon"], "eye-disabled");

    let address = &json[2]["fields"][1];
    assert_eq!(address["id"], "identity.address");
    assert_eq!(address["value"], "12 Analytical Way\nLondon, N1 9GU\nUK");
    assert_eq!(address["displayValue"], "12 Analytical Way, London, N1 9GU, UK");

    // boolean custom field renders Yes with the checked icon
    let renewal = &json[3]["fields"][0];
    assert_eq!(renewal["value"], "Yes");
    assert_eq!(renewal["icon"], "check-circle");
}
