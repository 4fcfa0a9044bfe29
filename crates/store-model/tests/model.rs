//! Tests for store-model types.

use store_model::{ImportEnvelope, StoreRecord};

fn acme() -> StoreRecord {
    StoreRecord {
        code: Some("1".to_string()),
        owner_name: Some("Kim".to_string()),
        phone: Some("010-1234-5678".to_string()),
        address: Some("Seoul Gangnam".to_string()),
        billing_day: Some(15),
        outstanding_amount: 12000,
        store_type: Some("A".to_string()),
        ..StoreRecord::new("Acme Mart")
    }
}

#[test]
fn record_serializes_with_full_key_set() {
    insta::assert_json_snapshot!(acme(), @r#"
    {
      "code": "1",
      "name": "Acme Mart",
      "ownerName": "Kim",
      "businessRegNo": null,
      "phone": "010-1234-5678",
      "address": "Seoul Gangnam",
      "businessType": null,
      "businessCategory": null,
      "billingDay": 15,
      "outstandingAmount": 12000,
      "storeType": "A",
      "email": null,
      "areaCode": null,
      "status": "active",
      "isActive": true
    }
    "#);
}

#[test]
fn envelope_roundtrips_non_ascii() {
    let mut record = acme();
    record.name = Some("서울안경".to_string());
    let envelope = ImportEnvelope::replace_all(vec![record]);
    let json = serde_json::to_string(&envelope).expect("serialize envelope");
    assert!(json.contains("서울안경"));
    let round: ImportEnvelope = serde_json::from_str(&json).expect("deserialize envelope");
    assert_eq!(round, envelope);
}
