use crate::model::test_support::{board, rig};
use crate::model::{ModelError, ReportOptions, ScalarValue, evaluate, report_to_string};

#[test]
fn provided_index_selects_element() {
	let rig = rig();
	assert_eq!(evaluate(&rig, "heaters^.current", &[1]).expect("value"), ScalarValue::Float(45.6, 1));
	assert_eq!(evaluate(&rig, "heaters^.state", &[0]).expect("value"), ScalarValue::Enum32(2));
}

#[test]
fn nested_provided_indices_are_consumed_in_order() {
	let rig = rig();
	assert_eq!(evaluate(&rig, "grid^^", &[1, 2]).expect("value"), ScalarValue::Int32(6));
	assert_eq!(evaluate(&rig, "grid^^", &[0, 1]).expect("value"), ScalarValue::Int32(2));
	assert_eq!(evaluate(&rig, "grid^[2]", &[0]).expect("value"), ScalarValue::Int32(3));
}

#[test]
fn caret_without_provided_index_is_missing() {
	let err = evaluate(&rig(), "heaters^.current", &[]).expect_err("no index");
	assert!(matches!(err, ModelError::MissingArrayIndex { .. }));
	assert!(!err.is_internal());

	let err = evaluate(&rig(), "grid^^", &[0]).expect_err("second index missing");
	assert!(matches!(err, ModelError::MissingArrayIndex { .. }));
}

#[test]
fn provided_index_out_of_bounds() {
	let err = evaluate(&rig(), "heaters^.current", &[2]).expect_err("index == count");
	assert!(matches!(err, ModelError::IndexOutOfBounds { index: 2, len: 2, .. }));

	let err = evaluate(&rig(), "heaters^.current", &[-1]).expect_err("negative index");
	assert!(matches!(err, ModelError::IndexOutOfBounds { index: -1, .. }));
}

#[test]
fn literal_indices() {
	let rig = rig();
	assert_eq!(evaluate(&rig, "heaters[1].current", &[]).expect("last element"), ScalarValue::Float(45.6, 1));
	assert_eq!(evaluate(&rig, "grid[1][0]", &[]).expect("nested"), ScalarValue::Int32(4));

	let err = evaluate(&rig, "heaters[2].current", &[]).expect_err("past the end");
	assert!(matches!(err, ModelError::IndexOutOfBounds { index: 2, len: 2, .. }));

	let err = evaluate(&rig, "heaters[x].current", &[]).expect_err("not a number");
	assert!(matches!(err, ModelError::SelectorSyntax { .. }));
}

#[test]
fn arrays_need_an_index() {
	for selector in ["heaters", "heaters[].current", "heaters.current"] {
		let err = evaluate(&rig(), selector, &[]).expect_err(selector);
		assert!(matches!(err, ModelError::MissingArrayIndex { .. }), "{selector}: {err}");
	}
}

#[test]
fn length_prefix_counts_elements() {
	let rig = rig();
	assert_eq!(evaluate(&rig, "#heaters", &[]).expect("length"), ScalarValue::Int32(2));
	assert_eq!(evaluate(&rig, "#grid[1]", &[]).expect("row length"), ScalarValue::Int32(3));
	assert_eq!(evaluate(&rig, "#grid^", &[0]).expect("row length"), ScalarValue::Int32(3));
}

#[test]
fn unknown_names_are_errors() {
	let err = evaluate(&rig(), "nope", &[]).expect_err("unknown");
	assert_eq!(err.to_string(), "unknown value nope");

	let err = evaluate(&rig(), "heaters[0].missing", &[]).expect_err("unknown field");
	assert!(matches!(err, ModelError::UnknownValue { selector } if selector == "missing"));

	for selector in ["", "*", "*.current"] {
		assert!(matches!(evaluate(&rig(), selector, &[]), Err(ModelError::UnknownValue { .. })), "{selector}");
	}
}

#[test]
fn objects_are_not_values() {
	let err = evaluate(&rig(), "sub", &[]).expect_err("object");
	assert!(matches!(err, ModelError::NonPrimitiveValue { selector } if selector == "sub"));

	let err = evaluate(&rig(), "heaters[0]", &[]).expect_err("element object");
	assert!(matches!(err, ModelError::NonPrimitiveValue { selector } if selector == "heaters[0]"));

	let err = evaluate(&rig(), "sub[0]", &[]).expect_err("object indexed");
	assert!(matches!(err, ModelError::SelectorSyntax { .. }));
}

#[test]
fn primitive_with_leftover_selector() {
	let err = evaluate(&rig(), "flags.extra", &[]).expect_err("leftover");
	assert!(matches!(err, ModelError::PrimitiveBeforeEnd { selector } if selector == ".extra"));
}

#[test]
fn strict_ignores_report_filters() {
	let rig = rig();
	assert_eq!(evaluate(&rig, "name", &[]).expect("verbose entry"), ScalarValue::String("bench \"rig\"".into()));
	assert_eq!(evaluate(&rig, "sub.count", &[]).expect("level 1"), ScalarValue::Int32(7));
	assert_eq!(evaluate(&rig, "flags", &[]).expect("bitmap"), ScalarValue::Bitmap32(5));
}

#[test]
fn strict_and_tolerant_agree_on_success() {
	let rig = rig();
	for selector in ["heaters[0].current", "heaters[1].state", "grid[0][2]", "sub.count", "flags"] {
		let strict = evaluate(&rig, selector, &[]).expect(selector);
		for letters in ["", "s"] {
			let options = ReportOptions::from_letters(letters, false);
			let tolerant = report_to_string(&rig, selector, &options).expect(selector);
			assert_eq!(strict.to_json(options.flags.short_form), tolerant, "{selector} with '{letters}'");
		}
	}
}

#[test]
fn too_many_provided_indices_is_internal() {
	let err = evaluate(&rig(), "grid^^", &[0, 0, 0, 0, 0]).expect_err("over capacity");
	assert!(err.is_internal());
}

#[test]
fn literal_index_is_visible_to_element_accessors() {
	let board = board();
	assert_eq!(evaluate(&board, "slots[2]", &[]).expect("slot"), ScalarValue::Int32(2));
	assert_eq!(evaluate(&board, "slots^", &[1]).expect("slot"), ScalarValue::Int32(1));
	assert_eq!(evaluate(&board, "cells[1][2].row", &[]).expect("row"), ScalarValue::Int32(1));
	assert_eq!(evaluate(&board, "cells[1][2].column", &[]).expect("column"), ScalarValue::Int32(2));
}

#[test]
fn mixed_literal_and_provided_indices() {
	let board = board();
	assert_eq!(evaluate(&board, "cells^^.row", &[1, 2]).expect("row"), ScalarValue::Int32(1));
	assert_eq!(evaluate(&board, "cells^^.column", &[1, 2]).expect("column"), ScalarValue::Int32(2));
	assert_eq!(evaluate(&board, "cells[1]^.column", &[2]).expect("column"), ScalarValue::Int32(2));
	assert_eq!(evaluate(&board, "cells[1]^.row", &[0]).expect("row"), ScalarValue::Int32(1));
	assert_eq!(evaluate(&board, "cells^[2].value", &[1]).expect("value"), ScalarValue::Int32(12));
}

#[test]
fn index_aware_values_agree_between_modes() {
	let board = board();
	for selector in ["slots[0]", "slots[2]", "cells[0][2].column", "cells[1][0].row", "cells[1][1].value"] {
		let strict = evaluate(&board, selector, &[]).expect(selector);
		let tolerant = report_to_string(&board, selector, &ReportOptions::default()).expect(selector);
		assert_eq!(strict.to_json(false), tolerant, "{selector}");
	}
}
