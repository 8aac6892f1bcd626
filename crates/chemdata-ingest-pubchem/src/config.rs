use serde::{Deserialize, Serialize};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://pubchem.ncbi.nlm.nih.gov";

/// Properties requested from the PUG REST property endpoint.
pub const BASIC_PROPERTIES: &str = "IUPACName,MolecularFormula,MolecularWeight,Complexity";

/// PUG View heading used to narrow the experimental-properties record.
pub const EXPERIMENTAL_HEADING: &str = "Experimental Properties";

/// Configuration for talking to PubChem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PubChemConfig {
    /// Scheme and host of the API (a mirror or a local stub also works).
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// HTTP User-Agent.
    pub user_agent: String,
}

impl Default for PubChemConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
            user_agent: format!(
                "chemdata/{} (+https://github.com/chemdata/chemdata)",
                env!("CARGO_PKG_VERSION")
            ),
        }
    }
}

/// URL builders for the three endpoints the resolver uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    pub fn new(base_url: &str) -> Result<Self, url::ParseError> {
        let base = Url::parse(base_url)?;
        if base.cannot_be_a_base() {
            return Err(url::ParseError::RelativeUrlWithCannotBeABaseBase);
        }
        Ok(Self { base })
    }

    pub fn from_config(config: &PubChemConfig) -> Result<Self, url::ParseError> {
        Self::new(&config.base_url)
    }

    /// `/rest/pug/compound/name/{name}/cids/JSON`
    pub fn cids_by_name(&self, name: &str) -> Url {
        self.with_segments(&["rest", "pug", "compound", "name", name, "cids", "JSON"])
    }

    /// `/rest/pug/compound/cid/{cid}/property/{BASIC_PROPERTIES}/JSON`
    pub fn properties(&self, cid: i64) -> Url {
        let cid = cid.to_string();
        self.with_segments(&[
            "rest",
            "pug",
            "compound",
            "cid",
            &cid,
            "property",
            BASIC_PROPERTIES,
            "JSON",
        ])
    }

    /// `/rest/pug_view/data/compound/{cid}/JSON?heading=Experimental+Properties`
    pub fn experimental(&self, cid: i64) -> Url {
        let cid = cid.to_string();
        let mut url = self.with_segments(&["rest", "pug_view", "data", "compound", &cid, "JSON"]);
        url.query_pairs_mut()
            .append_pair("heading", EXPERIMENTAL_HEADING);
        url
    }

    fn with_segments(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        url.set_query(None);
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}
