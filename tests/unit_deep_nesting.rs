#![allow(missing_docs)]

use bepdec::bencode::{Decoder, Outcome, Status, StepBudget, Value, decode, decode_bounded};

fn nested_lists(depth: usize, innermost: &[u8]) -> Vec<u8> {
	let mut data = Vec::with_capacity(depth * 2 + innermost.len());
	data.extend(std::iter::repeat_n(b'l', depth));
	data.extend_from_slice(innermost);
	data.extend(std::iter::repeat_n(b'e', depth));
	data
}

#[test]
fn lists_nested_one_thousand_deep_decode_without_native_recursion() {
	let data = nested_lists(1000, b"4:spam");

	let mut value = &decode(&data).expect("deep decode");
	for _ in 0..1000 {
		let items = value.as_list().expect("list level");
		assert_eq!(items.len(), 1);
		value = &items[0];
	}
	assert_eq!(*value, Value::string("spam"));
}

#[test]
fn dictionaries_nested_inside_lists_decode_at_depth() {
	// Alternating list/dict nesting, 600 dict levels under 600 list levels.
	let mut data = Vec::new();
	data.extend(std::iter::repeat_n(b'l', 600));
	for _ in 0..600 {
		data.extend_from_slice(b"d1:k");
	}
	data.extend_from_slice(b"i7e");
	data.extend(std::iter::repeat_n(b'e', 1200));

	let mut value = &decode(&data).expect("deep decode");
	for _ in 0..600 {
		value = &value.as_list().expect("list level")[0];
	}
	for _ in 0..600 {
		value = value.get(b"k").expect("dict level");
	}
	assert_eq!(*value, Value::Integer(7));
}

#[test]
fn open_frame_count_tracks_nesting_depth() {
	let data = nested_lists(64, b"le");
	let mut decoder = Decoder::new(&data);
	let mut max_open = 0;
	while decoder.step().expect("step") == Status::Running {
		max_open = max_open.max(decoder.open_frames());
	}
	assert_eq!(max_open, 65, "one frame per open list plus the innermost");
}

#[test]
fn cancelled_deep_decode_reports_steps_taken() {
	let data = nested_lists(1000, b"4:spam");
	let outcome = decode_bounded(&data, StepBudget::limited(500)).expect("drive");
	assert_eq!(outcome, Outcome::Cancelled { steps: 500 });
}

#[test]
fn suspended_and_resumed_drive_matches_uninterrupted_drive() {
	let data = nested_lists(50, b"d4:spaml4:eggsee");
	let uninterrupted = decode(&data).expect("decode");

	// Same engine instance, stepped with arbitrary pauses between batches of
	// uneven size; the decode result must not depend on the drive pattern.
	let mut decoder = Decoder::new(&data);
	let mut batch = 1;
	'drive: loop {
		for _ in 0..batch {
			if decoder.step().expect("step") == Status::Complete {
				break 'drive;
			}
		}
		batch = batch % 7 + 1;
	}
	assert_eq!(decoder.finish().expect("finish"), uninterrupted);
}
