//! Structural hashing of tag trees.
//!
//! DJB2-style mixing with 32-bit wrapping arithmetic. Every node mixes its
//! wire kind id before its payload, containers mix their size, and compound
//! entries are folded in sorted-key order — so the hash agrees with tag
//! equality: equal trees hash equal regardless of compound insertion order,
//! and list element order matters.
//!
//! Negative zero is folded to positive zero before float bits are mixed,
//! keeping the hash consistent with IEEE equality where `-0.0 == 0.0`.

use crate::tag::Tag;

pub const START_STATE: i32 = 5381;

// ── Hash update functions ─────────────────────────────────────────────────

/// Mix a single integer into the hash state.
///
/// `state = (state << 5) + state + num` with 32-bit wrapping semantics.
pub fn update_num(state: i32, num: i32) -> i32 {
    state.wrapping_shl(5).wrapping_add(state).wrapping_add(num)
}

/// Mix a 64-bit integer into the hash state, high half first.
pub fn update_i64(state: i32, num: i64) -> i32 {
    let state = update_num(state, (num >> 32) as i32);
    update_num(state, num as i32)
}

/// Mix a float's bit pattern into the hash state. `-0.0` folds to `0.0`
/// first so equal values always mix the same bits.
pub fn update_f64(state: i32, num: f64) -> i32 {
    let num = if num == 0.0 { 0.0 } else { num };
    update_i64(state, num.to_bits() as i64)
}

/// Mix a string into the hash state: byte length first, then the bytes.
pub fn update_str(mut state: i32, s: &str) -> i32 {
    state = update_num(state, s.len() as i32);
    for b in s.bytes() {
        state = update_num(state, b as i32);
    }
    state
}

/// Mix a tag into the hash state: the wire kind id, then the payload.
pub fn update_tag(state: i32, tag: &Tag) -> i32 {
    let state = update_num(state, tag.kind().id() as i32);
    match tag {
        Tag::Byte(v) => update_num(state, *v as i32),
        Tag::Short(v) => update_num(state, *v as i32),
        Tag::Int(v) => update_num(state, *v),
        Tag::Long(v) => update_i64(state, *v),
        Tag::Float(v) => update_f64(state, *v as f64),
        Tag::Double(v) => update_f64(state, *v),
        Tag::ByteArray(v) => {
            let mut state = update_num(state, v.len() as i32);
            for b in v {
                state = update_num(state, *b as i32);
            }
            state
        }
        Tag::String(s) => update_str(state, s),
        Tag::List(list) => {
            let mut state = update_num(state, list.len() as i32);
            for item in list {
                state = update_tag(state, item);
            }
            state
        }
        Tag::Compound(compound) => {
            let mut state = update_num(state, compound.len() as i32);
            let mut entries: Vec<_> = compound.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            for (name, child) in entries {
                state = update_str(state, name);
                state = update_tag(state, child);
            }
            state
        }
        Tag::IntArray(v) => {
            let mut state = update_num(state, v.len() as i32);
            for n in v {
                state = update_num(state, *n);
            }
            state
        }
        Tag::LongArray(v) => {
            let mut state = update_num(state, v.len() as i32);
            for n in v {
                state = update_i64(state, *n);
            }
            state
        }
    }
}

/// Hash a tag tree, returning the state reinterpreted as `u32`.
pub fn hash(tag: &Tag) -> u32 {
    update_tag(START_STATE, tag) as u32
}

/// Hash a named document: the name is mixed ahead of the tree, so the same
/// tree under two different root names hashes differently.
pub fn hash_named(name: &str, tag: &Tag) -> u32 {
    let state = update_str(START_STATE, name);
    update_tag(state, tag) as u32
}
