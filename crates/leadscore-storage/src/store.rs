//! The `ArtifactStore` abstraction

use async_trait::async_trait;
use leadscore_domain::{Lead, Offer, ResultSet};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{error::StoreResult, slot::Slot};

/// Key-value store over the fixed artifact slots
///
/// Implementors only move JSON values in and out of slots. The typed
/// accessors are provided on top of that.
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Read the raw value of a slot, failing with `NotFound` if it was never written
    async fn get_raw(&self, slot: Slot) -> StoreResult<Value>;

    /// Replace the raw value of a slot
    async fn put_raw(&self, slot: Slot, value: Value) -> StoreResult<()>;

    async fn get_offer(&self) -> StoreResult<Offer> {
        decode(self.get_raw(Slot::Offer).await?)
    }

    async fn put_offer(&self, offer: &Offer) -> StoreResult<()> {
        self.put_raw(Slot::Offer, encode(offer)?).await
    }

    async fn get_leads(&self) -> StoreResult<Vec<Lead>> {
        decode(self.get_raw(Slot::Leads).await?)
    }

    async fn put_leads(&self, leads: &[Lead]) -> StoreResult<()> {
        self.put_raw(Slot::Leads, encode(&leads)?).await
    }

    async fn get_results(&self) -> StoreResult<ResultSet> {
        decode(self.get_raw(Slot::Results).await?)
    }

    async fn put_results(&self, results: &ResultSet) -> StoreResult<()> {
        self.put_raw(Slot::Results, encode(results)?).await
    }
}

fn encode<T: Serialize + ?Sized>(value: &T) -> StoreResult<Value> {
    Ok(serde_json::to_value(value)?)
}

fn decode<T: DeserializeOwned>(value: Value) -> StoreResult<T> {
    Ok(serde_json::from_value(value)?)
}
