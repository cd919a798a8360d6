//! JSON encoding of whole collections.
//!
//! A collection is persisted as a plain JSON array of records with no schema
//! version tag. Decoding rejects arrays that repeat an id, since the store
//! could not honour id uniqueness for them.

use std::collections::HashSet;

use crate::entity::Entity;
use crate::error::StorageError;

/// Serializes a collection in insertion order.
pub fn encode_collection<E: Entity>(items: &[E]) -> Result<String, StorageError> {
    serde_json::to_string(items)
        .map_err(|e| StorageError::serialization(E::COLLECTION, e.to_string()))
}

/// Deserializes a collection, preserving the stored order.
pub fn decode_collection<E: Entity>(raw: &str) -> Result<Vec<E>, StorageError> {
    let items: Vec<E> = serde_json::from_str(raw)
        .map_err(|e| StorageError::serialization(E::COLLECTION, e.to_string()))?;

    let mut seen = HashSet::with_capacity(items.len());
    for item in &items {
        if !seen.insert(item.id()) {
            return Err(StorageError::serialization(
                E::COLLECTION,
                format!("duplicate {} id {}", E::ENTITY_NAME, item.id()),
            ));
        }
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maleza::Maleza;
    use crate::seed::Seed;
    use crate::tank::Tank;

    #[test]
    fn test_round_trip_preserves_content_and_order() {
        let seed = Seed::default_dataset();
        let mut weeds = seed.malezas.clone();
        weeds.reverse();

        let raw = encode_collection(&weeds).unwrap();
        let decoded: Vec<Maleza> = decode_collection(&raw).unwrap();

        assert_eq!(decoded, weeds);
    }

    #[test]
    fn test_malformed_json_is_a_serialization_error() {
        let err = decode_collection::<Tank>("[{\"id_tanque\": 1,").unwrap_err();
        assert!(matches!(
            err,
            StorageError::Serialization { ref key, .. } if key == "aspersax_tanques"
        ));
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let seed = Seed::default_dataset();
        let first = seed.tanks[0].clone();
        let raw = encode_collection(&[first.clone(), first]).unwrap();

        let err = decode_collection::<Tank>(&raw).unwrap_err();
        assert!(err.to_string().contains("duplicate tank id 1"));
    }
}
