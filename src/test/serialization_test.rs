// Checks the little- and big-endian encoding of a value against expected
// bytes, then decodes those bytes back and compares with the original.
macro_rules! serialization_test {
  (type = $type:ty, $({ $name:ident, $original:expr, le = $le:expr, be = $be:expr }),+ $(,)?) => {
    $(mod $name {
      #[allow(unused_imports)]
      use super::*;
      use speedy::{Endianness, Writable};
      use crate::serialization::{Decode, Deserializer};

      fn round_trip(endianness: Endianness, expected: &[u8]) {
        let original: $type = $original;
        let encoded = original.write_to_vec_with_ctx(endianness).unwrap();
        assert_eq!(
          expected,
          &encoded[..],
          "serialization error ({:?}),\n expected: {:02X?},\n found:    {:02X?}",
          endianness,
          expected,
          encoded
        );

        let mut deserializer = Deserializer::new(&encoded, endianness);
        let decoded = <$type as Decode>::decode(&mut deserializer).unwrap();
        assert_eq!(original, decoded);
        assert!(deserializer.at_end(), "decoding left bytes unread");
      }

      #[test]
      fn serialize_deserialize_little_endian() {
        round_trip(Endianness::LittleEndian, &$le);
      }

      #[test]
      fn serialize_deserialize_big_endian() {
        round_trip(Endianness::BigEndian, &$be);
      }
    })+
  };
}
