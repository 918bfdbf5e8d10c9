//! Record types returned by Kamailio management methods.
//!
//! These shapes are defined by the server and mirrored field-for-field,
//! including its member names. Every record decodes leniently: members the
//! server leaves out take their default value.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Remote registration entry reported by `uac.reg_info`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationInfo {
    #[serde(rename = "l_uuid")]
    pub local_uuid: String,
    #[serde(rename = "l_username")]
    pub local_username: String,
    #[serde(rename = "l_domain")]
    pub local_domain: String,
    #[serde(rename = "r_username")]
    pub remote_username: String,
    #[serde(rename = "r_domain")]
    pub remote_domain: String,
    pub realm: String,
    pub auth_username: String,
    pub auth_password: String,
    pub auth_proxy: String,
    /// Either a number of seconds or a string, depending on server version.
    pub expires: Value,
    pub flags: i64,
    pub diff_expires: i64,
    pub timer_expires: i64,
}

/// Wrapper object around a single contact, as `{"Contact": {...}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactEntry {
    #[serde(rename = "Contact")]
    pub contact: Contact,
}

/// A registered contact binding in the location service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    #[serde(rename = "Address")]
    pub address: String,
    /// `"permanent"`, `"deleted"` or seconds left.
    #[serde(rename = "Expires")]
    pub expires: Value,
    #[serde(rename = "Q")]
    pub q: i64,
    #[serde(rename = "Call-ID")]
    pub call_id: String,
    #[serde(rename = "CSeq")]
    pub cseq: i64,
    #[serde(rename = "User-Agent")]
    pub user_agent: String,
    #[serde(rename = "Received")]
    pub received: String,
    #[serde(rename = "Path")]
    pub path: String,
    #[serde(rename = "State")]
    pub state: String,
    // Older clients spelled this member "Falgs". A record carries one of the
    // two keys; both at once is a duplicate field error.
    #[serde(rename = "Flags", alias = "Falgs")]
    pub flags: i64,
    #[serde(rename = "CFlags")]
    pub cflags: i64,
    #[serde(rename = "Socket")]
    pub socket: String,
    #[serde(rename = "Methods")]
    pub methods: i64,
    #[serde(rename = "Ruid")]
    pub ruid: String,
    #[serde(rename = "Instance")]
    pub instance: String,
    #[serde(rename = "Reg-Id")]
    pub reg_id: i64,
    #[serde(rename = "Server-Id")]
    pub server_id: i64,
    #[serde(rename = "Tcpconn-Id")]
    pub tcpconn_id: i64,
    #[serde(rename = "Keepalive")]
    pub keepalive: i64,
    #[serde(rename = "Last-Keepalive")]
    pub last_keepalive: i64,
    #[serde(rename = "KA-Roundtrip")]
    pub ka_roundtrip: i64,
    #[serde(rename = "Last-Modified")]
    pub last_modified: i64,
}

/// Result of `ul.lookup`: one address-of-record and its contacts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AorLookup {
    #[serde(rename = "AoR")]
    pub aor: String,
    #[serde(rename = "Contacts")]
    pub contacts: Vec<ContactEntry>,
}

/// Wrapper object around an address-of-record, as `{"Info": {...}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AorEntry {
    #[serde(rename = "Info")]
    pub info: AorInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AorInfo {
    #[serde(rename = "AoR")]
    pub aor: String,
    #[serde(rename = "HashID")]
    pub hash_id: i64,
    #[serde(rename = "Contacts")]
    pub contacts: Vec<ContactEntry>,
}

/// Wrapper object around a location table, as `{"Domain": {...}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainEntry {
    #[serde(rename = "Domain")]
    pub domain: DomainInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainInfo {
    #[serde(rename = "Domain")]
    pub domain: String,
    #[serde(rename = "Size")]
    pub size: i64,
    #[serde(rename = "AoRs")]
    pub aors: Vec<AorEntry>,
    #[serde(rename = "Stats")]
    pub stats: DomainStats,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainStats {
    #[serde(rename = "Records")]
    pub records: i64,
    #[serde(rename = "Max-Slots")]
    pub max_slots: i64,
}

/// Result of `ul.dump`: every location table with its records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UlDump {
    #[serde(rename = "Domains")]
    pub domains: Vec<DomainEntry>,
}

impl UlDump {
    /// Finds an address-of-record by name across all tables.
    pub fn find_aor(&self, aor: &str) -> Option<&AorInfo> {
        self.domains
            .iter()
            .flat_map(|d| d.domain.aors.iter())
            .map(|a| &a.info)
            .find(|info| info.aor == aor)
    }

    /// Iterates over every contact in every table.
    pub fn contacts(&self) -> impl Iterator<Item = &Contact> {
        self.domains
            .iter()
            .flat_map(|d| d.domain.aors.iter())
            .flat_map(|a| a.info.contacts.iter())
            .map(|c| &c.contact)
    }

    /// Sum of the record counts reported by each table.
    pub fn total_records(&self) -> i64 {
        self.domains.iter().map(|d| d.domain.stats.records).sum()
    }
}
