use crate::cache::CompoundCache;
use crate::config::Endpoints;
use crate::experimental::{ExperimentalProperties, EXPERIMENTAL_PROPERTIES};
use crate::transport::{FetchError, Transport};
use chemdata_model::numeric::extract_optional;
use chemdata_model::CompoundRecord;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("unexpected response shape from {endpoint}: {message}")]
    Shape {
        endpoint: &'static str,
        message: String,
    },
}

// ============================================================================
// Wire shapes
// ============================================================================

#[derive(Debug, Deserialize)]
struct CidResponse {
    #[serde(rename = "IdentifierList")]
    identifier_list: IdentifierList,
}

#[derive(Debug, Deserialize)]
struct IdentifierList {
    #[serde(rename = "CID")]
    cid: Vec<i64>,
}

#[derive(Debug, Deserialize)]
struct PropertyResponse {
    #[serde(rename = "PropertyTable")]
    property_table: PropertyTable,
}

#[derive(Debug, Deserialize)]
struct PropertyTable {
    #[serde(rename = "Properties")]
    properties: Vec<BasicProperties>,
}

/// First row of the property table.
#[derive(Debug, Clone, Deserialize)]
pub struct BasicProperties {
    #[serde(rename = "IUPACName")]
    pub iupac_name: Option<String>,
    #[serde(rename = "MolecularFormula")]
    pub molecular_formula: Option<String>,
    /// PubChem sends this as a string (`"18.015"`); older responses use a number.
    #[serde(rename = "MolecularWeight")]
    pub molecular_weight: Option<Value>,
    #[serde(rename = "Complexity")]
    pub complexity: Option<f64>,
}

impl BasicProperties {
    pub fn molecular_weight(&self) -> Option<f64> {
        match self.molecular_weight.as_ref()? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

// ============================================================================
// Resolver
// ============================================================================

/// Resolves compound names through the cache, then PubChem.
pub struct CompoundResolver<T> {
    transport: T,
    cache: CompoundCache,
    endpoints: Endpoints,
}

impl<T: Transport> CompoundResolver<T> {
    pub fn new(transport: T, cache: CompoundCache, endpoints: Endpoints) -> Self {
        Self {
            transport,
            cache,
            endpoints,
        }
    }

    pub fn cache(&self) -> &CompoundCache {
        &self.cache
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Resolve `name` into a compound record.
    ///
    /// A cache entry is returned as-is (no freshness check). On a miss the
    /// record is fetched, assembled, and cached. Every failure is logged and
    /// reported as `None`.
    pub fn resolve(&self, name: &str) -> Option<CompoundRecord> {
        if let Some(record) = self.cached(name) {
            return Some(record);
        }

        let record = match self.fetch(name) {
            Ok(Some(record)) => record,
            Ok(None) => return None,
            Err(err) => {
                tracing::error!(name = %name, error = %err, "error fetching compound data");
                return None;
            }
        };

        if let Err(err) = self.cache.put(name, &record) {
            tracing::error!(name = %name, error = %err, "failed to write compound cache entry");
        }
        Some(record)
    }

    fn cached(&self, name: &str) -> Option<CompoundRecord> {
        match self.cache.get(name) {
            Ok(Some(entry)) => {
                tracing::debug!(name = %name, cached_query = %entry.query, "compound cache hit");
                let mut record = entry.compound;
                record.name = name.to_string();
                Some(record)
            }
            Ok(None) => None,
            Err(err) => {
                tracing::warn!(name = %name, error = %err, "ignoring unreadable cache entry");
                None
            }
        }
    }

    /// Network path: CID → basic properties → experimental properties.
    fn fetch(&self, name: &str) -> Result<Option<CompoundRecord>, ResolveError> {
        let Some(cid) = self.lookup_cid(name)? else {
            return Ok(None);
        };
        let basic = self.basic_properties(cid)?;

        let Some(formula) = basic.molecular_formula.clone() else {
            return Err(ResolveError::Shape {
                endpoint: "property",
                message: format!("CID {cid} has no MolecularFormula"),
            });
        };

        let experimental = self.experimental_properties(cid);

        Ok(Some(CompoundRecord {
            name: name.to_string(),
            formula,
            molecular_weight: basic.molecular_weight(),
            density: extract_optional(experimental.density.as_deref()),
            melting_point: extract_optional(experimental.melting_point.as_deref()),
            boiling_point: extract_optional(experimental.boiling_point.as_deref()),
            solubility: experimental.solubility,
            appearance: experimental.appearance,
            iupac_name: basic.iupac_name,
            cas_number: None,
            pubchem_cid: Some(cid),
        }))
    }

    /// First CID for `name`; `None` when the response has no identifier list.
    pub fn lookup_cid(&self, name: &str) -> Result<Option<i64>, ResolveError> {
        let body = self.transport.get_json(&self.endpoints.cids_by_name(name))?;
        let cid = serde_json::from_value::<CidResponse>(body)
            .ok()
            .and_then(|r| r.identifier_list.cid.first().copied());
        if cid.is_none() {
            tracing::warn!(name = %name, "no PubChem identifier list for compound");
        }
        Ok(cid)
    }

    pub fn basic_properties(&self, cid: i64) -> Result<BasicProperties, ResolveError> {
        let body = self.transport.get_json(&self.endpoints.properties(cid))?;
        let response: PropertyResponse =
            serde_json::from_value(body).map_err(|e| ResolveError::Shape {
                endpoint: "property",
                message: e.to_string(),
            })?;
        response
            .property_table
            .properties
            .into_iter()
            .next()
            .ok_or_else(|| ResolveError::Shape {
                endpoint: "property",
                message: format!("empty property table for CID {cid}"),
            })
    }

    /// Best effort: any failure degrades to an empty property set.
    pub fn experimental_properties(&self, cid: i64) -> ExperimentalProperties {
        match self.transport.get_json(&self.endpoints.experimental(cid)) {
            Ok(body) => EXPERIMENTAL_PROPERTIES.extract(&body),
            Err(err) => {
                tracing::warn!(cid, error = %err, "experimental properties unavailable");
                ExperimentalProperties::default()
            }
        }
    }
}
