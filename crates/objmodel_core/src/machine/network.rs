use std::net::Ipv4Addr;

use serde::Deserialize;

use crate::model::{Describe, EntryFlags, ObjectModelEntry, ObjectModelTable, SharedArray, Value};

/// One network interface.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Interface {
	/// Address currently in use.
	#[serde(rename = "actualIP")]
	pub actual_ip: Ipv4Addr,
	/// Hardware address.
	pub mac: String,
	/// Link speed in Mbit/s, 0 when down.
	pub speed: u32,
	/// Interface kind, e.g. `ethernet` or `wifi`.
	#[serde(rename = "type")]
	pub kind: String,
}

impl Default for Interface {
	fn default() -> Self {
		Self {
			actual_ip: Ipv4Addr::UNSPECIFIED,
			mac: "00:00:00:00:00:00".to_owned(),
			speed: 0,
			kind: "ethernet".to_owned(),
		}
	}
}

/// Pack an address with the first quad in the low byte.
pub fn pack_ipv4(addr: Ipv4Addr) -> u32 {
	u32::from_le_bytes(addr.octets())
}

const INTERFACE_ENTRIES: &[ObjectModelEntry<Interface>] = &[
	ObjectModelEntry::new("actualIP", EntryFlags::NONE, |interface, _| Value::Ipv4(pack_ipv4(interface.actual_ip))),
	ObjectModelEntry::new("mac", EntryFlags::NONE, |interface, _| Value::String(&interface.mac)),
	ObjectModelEntry::new("speed", EntryFlags::LIVE, |interface, _| Value::UInt32(interface.speed)),
	ObjectModelEntry::new("type", EntryFlags::NONE, |interface, _| Value::String(&interface.kind)),
];

static INTERFACE_TABLE: ObjectModelTable<Interface> = ObjectModelTable::new(INTERFACE_ENTRIES, &[1, 4]);

impl Describe for Interface {
	fn object_model_table() -> &'static ObjectModelTable<Self> {
		&INTERFACE_TABLE
	}
}

/// Network subsystem.
pub struct Network {
	/// Host name announced on the network.
	pub hostname: String,
	/// Configured interfaces.
	pub interfaces: SharedArray<Interface>,
}

impl Network {
	/// Network with `interfaces`.
	pub fn new(hostname: impl Into<String>, interfaces: Vec<Interface>) -> Self {
		Self {
			hostname: hostname.into(),
			interfaces: SharedArray::objects(interfaces),
		}
	}
}

const NETWORK_ENTRIES: &[ObjectModelEntry<Network>] = &[
	ObjectModelEntry::new("hostname", EntryFlags::NONE, |network, _| Value::String(&network.hostname)),
	ObjectModelEntry::new("interfaces", EntryFlags::LIVE, |network, _| Value::Array(&network.interfaces)),
];

static NETWORK_TABLE: ObjectModelTable<Network> = ObjectModelTable::new(NETWORK_ENTRIES, &[1, 2]);

impl Describe for Network {
	fn object_model_table() -> &'static ObjectModelTable<Self> {
		&NETWORK_TABLE
	}
}
