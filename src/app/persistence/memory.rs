//! In-Memory-Backend für Tests und das Headless-Binary.

use super::{ApiKind, TopologyApi};
use crate::app::errors::PersistenceError;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap, VecDeque};

/// Protokollierter API-Aufruf
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    Create { kind: ApiKind },
    Update { kind: ApiKind, remote_id: u64 },
    Delete { kind: ApiKind, remote_id: u64 },
    List { kind: ApiKind, office_id: Option<u64> },
}

/// Backend im Speicher mit Fehlerinjektion.
#[derive(Debug, Clone, Default)]
pub struct MemoryApi {
    records: HashMap<ApiKind, BTreeMap<u64, Value>>,
    next_id: u64,
    failures: VecDeque<PersistenceError>,
    /// Maximale Trassenlänge (`total_km`), darüber lehnt das Backend ab
    pub fiber_length_limit_km: Option<f64>,
    /// Alle Aufrufe in Reihenfolge
    pub calls: Vec<ApiCall>,
}

impl MemoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Der nächste Aufruf (egal welcher) schlägt mit `error` fehl.
    pub fn fail_next(&mut self, error: PersistenceError) {
        self.failures.push_back(error);
    }

    /// Legt einen Datensatz direkt an (Testdaten) und gibt die ID zurück.
    pub fn seed(&mut self, kind: ApiKind, mut value: Value) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        if let Value::Object(map) = &mut value {
            map.insert("id".to_string(), Value::from(id));
        }
        self.records.entry(kind).or_default().insert(id, value);
        id
    }

    /// Gespeicherter Datensatz.
    pub fn get(&self, kind: ApiKind, remote_id: u64) -> Option<&Value> {
        self.records.get(&kind)?.get(&remote_id)
    }

    /// Anzahl Datensätze einer Ressource.
    pub fn count(&self, kind: ApiKind) -> usize {
        self.records.get(&kind).map_or(0, BTreeMap::len)
    }

    fn injected_failure(&mut self) -> Result<(), PersistenceError> {
        match self.failures.pop_front() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn check_length_limit(&self, kind: ApiKind, payload: &Value) -> Result<(), PersistenceError> {
        let (Some(limit), ApiKind::Route) = (self.fiber_length_limit_km, kind) else {
            return Ok(());
        };
        let total = payload.get("total_km").and_then(Value::as_f64).unwrap_or(0.0);
        if total > limit {
            return Err(PersistenceError::Rejected {
                status: 400,
                message: "Your fiber length limit has been exceeded".to_string(),
            });
        }
        Ok(())
    }
}

impl TopologyApi for MemoryApi {
    fn create(&mut self, kind: ApiKind, payload: Value) -> Result<Value, PersistenceError> {
        self.calls.push(ApiCall::Create { kind });
        self.injected_failure()?;
        if !payload.is_object() {
            return Err(PersistenceError::Rejected {
                status: 400,
                message: "Payload muss ein Objekt sein".to_string(),
            });
        }
        self.check_length_limit(kind, &payload)?;
        let id = self.seed(kind, payload);
        self.get(kind, id)
            .cloned()
            .ok_or(PersistenceError::NotFound { remote_id: id })
    }

    fn update(
        &mut self,
        kind: ApiKind,
        remote_id: u64,
        payload: Value,
    ) -> Result<Value, PersistenceError> {
        self.calls.push(ApiCall::Update { kind, remote_id });
        self.injected_failure()?;
        self.check_length_limit(kind, &payload)?;
        let record = self
            .records
            .get_mut(&kind)
            .and_then(|r| r.get_mut(&remote_id))
            .ok_or(PersistenceError::NotFound { remote_id })?;
        if let (Value::Object(target), Value::Object(fields)) = (&mut *record, payload) {
            for (key, value) in fields {
                if key != "id" {
                    target.insert(key, value);
                }
            }
        }
        Ok(record.clone())
    }

    fn delete(&mut self, kind: ApiKind, remote_id: u64) -> Result<(), PersistenceError> {
        self.calls.push(ApiCall::Delete { kind, remote_id });
        self.injected_failure()?;
        self.records
            .get_mut(&kind)
            .and_then(|r| r.remove(&remote_id))
            .map(|_| ())
            .ok_or(PersistenceError::NotFound { remote_id })
    }

    fn list(
        &mut self,
        kind: ApiKind,
        office_id: Option<u64>,
    ) -> Result<Vec<Value>, PersistenceError> {
        self.calls.push(ApiCall::List { kind, office_id });
        self.injected_failure()?;
        let Some(records) = self.records.get(&kind) else {
            return Ok(Vec::new());
        };
        Ok(records
            .values()
            .filter(|v| match office_id {
                Some(office) => v.get("office").and_then(Value::as_u64) == Some(office),
                None => true,
            })
            .cloned()
            .collect())
    }
}
