#![no_main]

use libfuzzer_sys::fuzz_target;

#[path = "../src/util.rs"]
mod util;

fuzz_target!(|data: &[u8]| {
    let mut v = data.to_vec();
    let mut expected = v.clone();
    expected.sort();
    scratch_mergesort::sort(&mut v).unwrap();
    assert_eq!(v, expected);

    let Some((&key_range, rest)) = data.split_first() else {
        return;
    };

    let keys = util::u8_as_u16_keys(rest);
    let mut tagged = util::tag_positions(&keys, key_range as u16);
    let mut expected = tagged.clone();
    expected.sort_by_key(|(key, _)| *key);

    scratch_mergesort::sort_by_key(&mut tagged, |(key, _)| *key).unwrap();
    assert_eq!(tagged, expected);
});
