use std::cmp::Ordering;

use crate::model::test_support::{Probe, Rig, rig};
use crate::model::{Describe, EntryFlags, ModelError, ObjectModel, ObjectModelEntry, ObjectModelTable, Value, compare_name, next_element};

#[test]
fn compare_name_stops_at_terminators() {
	assert_eq!(compare_name("heaters", "heaters"), Ordering::Equal);
	assert_eq!(compare_name("heaters", "heaters.state"), Ordering::Equal);
	assert_eq!(compare_name("heaters", "heaters[0]"), Ordering::Equal);
	assert_eq!(compare_name("heaters", "heaters^.current"), Ordering::Equal);
	assert_eq!(compare_name("heaters", "heatersX"), Ordering::Less);
	assert_eq!(compare_name("heaters", "heat"), Ordering::Greater);
	assert_eq!(compare_name("axesHomed", "axes[0]"), Ordering::Greater);
}

#[test]
fn wildcards_match_every_name() {
	assert_eq!(compare_name("anything", ""), Ordering::Equal);
	assert_eq!(compare_name("anything", "*"), Ordering::Equal);
	assert_eq!(compare_name("anything", "*.current"), Ordering::Equal);
}

#[test]
fn next_element_finds_first_terminator() {
	assert_eq!(next_element("heaters"), 7);
	assert_eq!(next_element("heaters.state"), 7);
	assert_eq!(next_element("heaters[1].state"), 7);
	assert_eq!(next_element("heaters^"), 7);
	assert_eq!(next_element(""), 0);
}

#[test]
fn every_entry_is_found_and_suffixed_names_are_not() {
	let table = Rig::object_model_table();
	for level in 0..table.group_count() as u8 {
		let group = table.group(level).expect("group exists");
		for entry in group {
			let found = table.find(level, entry.name).expect("entry found by name");
			assert_eq!(found.name, entry.name);
			assert!(table.find(level, &format!("{}x", entry.name)).is_none(), "{}x must not match", entry.name);
			assert!(table.find(level, &format!("{}.deeper", entry.name)).is_some());
		}
	}
}

#[test]
fn groups_are_located_from_descriptor_sizes() {
	let table = Rig::object_model_table();
	assert_eq!(table.group_count(), 2);
	assert_eq!(table.group(0).map(<[_]>::len), Some(5));
	let sub = table.group(1).expect("level 1");
	assert_eq!(sub.len(), 1);
	assert_eq!(sub[0].name, "count");
	assert!(table.group(2).is_none());
	assert!(table.find(1, "flags").is_none(), "level 0 names are not visible at level 1");
}

#[test]
fn erased_owner_reads_entries() {
	let rig = rig();
	let owner: &dyn ObjectModel = &rig;
	assert_eq!(owner.type_label(), "Rig");
	assert_eq!(owner.group_count(), 2);
	assert_eq!(owner.group_len(0), Some(5));

	let slot = owner.find_entry(1, "count").expect("count slot");
	let info = owner.entry_info(1, slot).expect("count info");
	assert_eq!(info.name, "count");
	assert_eq!(info.flags, EntryFlags::LIVE);

	let context = crate::model::ExplorationContext::from_letters("", false);
	assert!(matches!(owner.entry_value(1, slot, &context), Value::Int32(7)));
	assert!(matches!(owner.entry_value(1, 99, &context), Value::Null));
	assert!(matches!(owner.entry_value(9, 0, &context), Value::Null));
}

#[test]
fn shipped_test_tables_verify() {
	Rig::object_model_table().verify("Rig").expect("rig table valid");
	Probe::object_model_table().verify("Probe").expect("probe table valid");
}

const UNSORTED_ENTRIES: &[ObjectModelEntry<Probe>] = &[
	ObjectModelEntry::new("state", EntryFlags::NONE, |probe, _| Value::Enum32(probe.state)),
	ObjectModelEntry::new("current", EntryFlags::NONE, |probe, _| Value::Float(probe.current, 1)),
];

static UNSORTED: ObjectModelTable<Probe> = ObjectModelTable::new(UNSORTED_ENTRIES, &[1, 2]);

const SHORT_DESCRIPTOR_ENTRIES: &[ObjectModelEntry<Probe>] = &[ObjectModelEntry::new("current", EntryFlags::NONE, |probe, _| Value::Float(probe.current, 1))];

static SHORT_DESCRIPTOR: ObjectModelTable<Probe> = ObjectModelTable::new(SHORT_DESCRIPTOR_ENTRIES, &[2, 1]);

#[test]
fn verify_rejects_unsorted_and_miscounted_tables() {
	assert!(matches!(UNSORTED.verify("Unsorted"), Err(ModelError::InvalidTable { type_name: "Unsorted", .. })));
	assert!(matches!(SHORT_DESCRIPTOR.verify("Short"), Err(ModelError::InvalidTable { .. })));
}
