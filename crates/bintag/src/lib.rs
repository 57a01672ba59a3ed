//! bintag — named binary tag trees.
//!
//! A tag document is one named tag, usually a compound, serialized in a
//! compact big-endian binary form. This crate provides:
//! - the document model ([`Tag`], [`List`], [`Compound`])
//! - the wire codec ([`TagEncoder`], [`TagDecoder`]) with decode-time
//!   resource limits ([`Limits`]) for untrusted input
//! - structural hashing ([`hash`]), a single-line text rendering, and
//!   JSON conversions ([`json`])
//! - the core logic of the `tag-pack` / `tag-unpack` command-line tools
//!   ([`tag_cli`])

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod hash;
pub mod json;
pub mod kind;
pub mod limit;
pub mod tag;
pub mod tag_cli;

mod fmt;

pub use decoder::TagDecoder;
pub use encoder::TagEncoder;
pub use error::TagError;
pub use kind::Kind;
pub use limit::{Limiter, Limits};
pub use tag::{Compound, List, Tag};

#[cfg(test)]
mod tests {
    use super::*;

    fn player_document() -> (String, Tag) {
        let mut weapon = Compound::new();
        weapon.put("id", Tag::String("sword".into()));
        weapon.put("damage", Tag::Int(7));
        let mut scores = List::new();
        scores.push(Tag::Long(10)).unwrap();
        scores.push(Tag::Long(-20)).unwrap();
        let mut root = Compound::new();
        root.put("name", Tag::String("Steve".into()));
        root.put("health", Tag::Short(20));
        root.put("weapon", Tag::Compound(weapon));
        root.put("scores", Tag::List(scores));
        root.put("seen", Tag::ByteArray(vec![0, 1, 1]));
        ("player".to_owned(), Tag::Compound(root))
    }

    #[test]
    fn document_byte_layout() {
        let mut root = Compound::new();
        root.put("health", Tag::Short(20));
        let tag = Tag::Compound(root);

        let expected = [
            0x0a, // compound id
            0x00, 0x04, b'r', b'o', b'o', b't', // root name
            0x02, // short id
            0x00, 0x06, b'h', b'e', b'a', b'l', b't', b'h', // entry name
            0x00, 0x14, // 20, big-endian
            0x00, // end sentinel
        ];

        let encoded = TagEncoder::default().encode("root", &tag).unwrap();
        assert_eq!(encoded, expected);

        let (name, decoded) = TagDecoder::new()
            .decode(&expected, Limits::unlimited())
            .unwrap();
        assert_eq!(name, "root");
        assert_eq!(decoded, tag);
    }

    #[test]
    fn roundtrip_every_kind() {
        let mut list = List::new();
        list.push(Tag::Double(0.5)).unwrap();
        let mut inner = Compound::new();
        inner.put("f", Tag::Float(-1.25));
        let mut root = Compound::new();
        root.put("byte", Tag::Byte(i8::MIN));
        root.put("short", Tag::Short(i16::MAX));
        root.put("int", Tag::Int(i32::MIN));
        root.put("long", Tag::Long(i64::MAX));
        root.put("float", Tag::Float(3.5));
        root.put("double", Tag::Double(-2.75));
        root.put("bytes", Tag::ByteArray(vec![i8::MIN, 0, i8::MAX]));
        root.put("string", Tag::String("héllo \"world\"".into()));
        root.put("list", Tag::List(list));
        root.put("compound", Tag::Compound(inner));
        root.put("ints", Tag::IntArray(vec![i32::MIN, -1, i32::MAX]));
        root.put("longs", Tag::LongArray(vec![i64::MIN, 0, i64::MAX]));
        let original = Tag::Compound(root);

        let bytes = TagEncoder::default().encode("all", &original).unwrap();
        let (name, decoded) = TagDecoder::new()
            .decode(&bytes, Limits::unlimited())
            .unwrap();
        assert_eq!(name, "all");
        assert_eq!(decoded, original);
    }

    #[test]
    fn depth_boundary_is_exact() {
        // compound > list > compound > list: four nested containers.
        let mut innermost = List::new();
        innermost.push(Tag::Byte(1)).unwrap();
        let mut mid = Compound::new();
        mid.put("l", Tag::List(innermost));
        let mut outer_list = List::new();
        outer_list.push(Tag::Compound(mid)).unwrap();
        let mut root = Compound::new();
        root.put("top", Tag::List(outer_list));
        let bytes = TagEncoder::default()
            .encode("", &Tag::Compound(root))
            .unwrap();

        let decoder = TagDecoder::new();
        assert!(decoder.decode(&bytes, Limits::new(64, 4)).is_ok());
        let err = decoder.decode(&bytes, Limits::new(64, 3)).unwrap_err();
        assert_eq!(err, TagError::DepthExceeded { depth: 4, max: 3 });
    }

    #[test]
    fn element_budget_boundary_is_exact() {
        // root(1) + name + health + weapon + scores + seen (5 entries)
        // + weapon.id + weapon.damage (2) + scores claim (2) + seen claim (3)
        let (name, tag) = player_document();
        let bytes = TagEncoder::default().encode(&name, &tag).unwrap();
        let decoder = TagDecoder::new();
        assert!(decoder.decode(&bytes, Limits::new(13, 16)).is_ok());
        let err = decoder.decode(&bytes, Limits::new(12, 16)).unwrap_err();
        assert!(matches!(err, TagError::ElementBudgetExceeded { max: 12, .. }));
    }

    #[test]
    fn decode_modify_encode_cycle() {
        let (name, tag) = player_document();
        let bytes = TagEncoder::default().encode(&name, &tag).unwrap();
        let (name, mut doc) = TagDecoder::new()
            .decode(&bytes, Limits::unlimited())
            .unwrap();

        let root = doc.as_compound_mut().unwrap();
        *root
            .get_mut("health")
            .unwrap()
            .as_short_mut()
            .unwrap() = 19;
        root.put("dirty", Tag::Byte(1));

        let bytes = TagEncoder::default().encode(&name, &doc).unwrap();
        let (_, reloaded) = TagDecoder::new()
            .decode(&bytes, Limits::unlimited())
            .unwrap();
        let root = reloaded.as_compound().unwrap();
        assert_eq!(root.get("health"), Some(&Tag::Short(19)));
        assert_eq!(root.get("dirty"), Some(&Tag::Byte(1)));
        // overwritten entry kept its position, new entry appended last
        let keys: Vec<&String> = root.keys().collect();
        assert_eq!(keys, ["name", "health", "weapon", "scores", "seen", "dirty"]);
    }

    #[test]
    fn equality_and_hash_agree_across_entry_order() {
        let mut a = Compound::new();
        a.put("x", Tag::Int(1));
        a.put("y", Tag::String("s".into()));
        let mut b = Compound::new();
        b.put("y", Tag::String("s".into()));
        b.put("x", Tag::Int(1));
        let a = Tag::Compound(a);
        let b = Tag::Compound(b);

        assert_eq!(a, b);
        assert_eq!(hash::hash(&a), hash::hash(&b));

        // The wire form still reflects each document's own entry order.
        let bytes_a = TagEncoder::default().encode("", &a).unwrap();
        let bytes_b = TagEncoder::default().encode("", &b).unwrap();
        assert_ne!(bytes_a, bytes_b);
    }

    #[test]
    fn display_of_a_decoded_document() {
        let (name, tag) = player_document();
        let bytes = TagEncoder::default().encode(&name, &tag).unwrap();
        let (_, decoded) = TagDecoder::new()
            .decode(&bytes, Limits::unlimited())
            .unwrap();
        assert_eq!(
            decoded.to_string(),
            "{name:\"Steve\",health:20s,weapon:{id:\"sword\",damage:7},\
             scores:[10l,-20l],seen:[B;0b,1b,1b]}"
        );
    }

    #[test]
    fn json_pipeline_end_to_end() {
        let value = serde_json::json!({
            "name": "Steve",
            "health": 20,
            "scores": [1, 2, 3],
            "pos": {"x": 1.5, "y": -2.0}
        });
        let tag = json::from_json(&value).unwrap();
        let bytes = TagEncoder::default().encode("player", &tag).unwrap();
        let (_, decoded) = TagDecoder::new()
            .decode(&bytes, Limits::new(16, 8))
            .unwrap();
        assert_eq!(json::to_json(&decoded), value);
    }
}
