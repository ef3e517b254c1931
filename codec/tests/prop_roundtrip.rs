use codec::{decode_value, encode_value, ByteReader, ByteWriter, CodecLimits};
use proptest::prelude::*;
use schema::{Decimal, Scalar, ScalarKind, Value, WireCategory};

fn scalar_strategy() -> impl Strategy<Value = Scalar> {
    prop_oneof![
        any::<bool>().prop_map(Scalar::Bool),
        any::<i8>().prop_map(Scalar::I8),
        any::<u8>().prop_map(Scalar::U8),
        any::<i16>().prop_map(Scalar::I16),
        any::<u16>().prop_map(Scalar::U16),
        any::<i32>().prop_map(Scalar::I32),
        any::<u32>().prop_map(Scalar::U32),
        any::<i64>().prop_map(Scalar::I64),
        any::<u64>().prop_map(Scalar::U64),
        any::<f32>().prop_map(Scalar::F32),
        any::<f64>().prop_map(Scalar::F64),
        (any::<i64>(), 0u32..=28).prop_map(|(mantissa, scale)| {
            Scalar::Decimal(Decimal::new(mantissa, scale))
        }),
        any::<char>().prop_map(Scalar::Char),
    ]
}

/// Bitwise equality: NaN payloads must survive the trip.
fn scalars_equal(a: &Scalar, b: &Scalar) -> bool {
    match (a, b) {
        (Scalar::F32(x), Scalar::F32(y)) => x.to_bits() == y.to_bits(),
        (Scalar::F64(x), Scalar::F64(y)) => x.to_bits() == y.to_bits(),
        _ => a == b,
    }
}

proptest! {
    #[test]
    fn prop_scalar_roundtrip(scalar in scalar_strategy()) {
        let mut writer = ByteWriter::new();
        codec::write_scalar(&mut writer, &scalar);
        let bytes = writer.finish();

        let mut reader = ByteReader::new(&bytes);
        let decoded = codec::read_scalar(&mut reader, scalar.kind()).unwrap();
        prop_assert!(reader.is_empty());
        prop_assert!(scalars_equal(&scalar, &decoded));
    }

    #[test]
    fn prop_scalar_list_roundtrip(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let elements: Vec<Scalar> = values.iter().map(|v| Scalar::I32(*v)).collect();
        let value = Value::ScalarList(ScalarKind::I32, elements.clone());

        let mut writer = ByteWriter::new();
        encode_value(&mut writer, WireCategory::ScalarList(ScalarKind::I32), &value).unwrap();
        let bytes = writer.finish();

        let mut reader = ByteReader::new(&bytes);
        let decoded = decode_value(
            &mut reader,
            WireCategory::ScalarList(ScalarKind::I32),
            &CodecLimits::default(),
        )
        .unwrap();
        prop_assert_eq!(decoded, value);
        prop_assert!(reader.is_empty());
    }

    #[test]
    fn prop_text_list_roundtrip(items in prop::collection::vec(".{0,24}", 0..16)) {
        let value = Value::TextList(items);

        let mut writer = ByteWriter::new();
        encode_value(&mut writer, WireCategory::TextList, &value).unwrap();
        let bytes = writer.finish();

        let mut reader = ByteReader::new(&bytes);
        let decoded = decode_value(&mut reader, WireCategory::TextList, &CodecLimits::default())
            .unwrap();
        prop_assert_eq!(decoded, value);
    }

    #[test]
    fn prop_truncated_decode_never_panics(
        values in prop::collection::vec(any::<u16>(), 0..32),
        cut_fraction in 0.0f64..1.0,
    ) {
        let elements: Vec<Scalar> = values.iter().map(|v| Scalar::U16(*v)).collect();
        let value = Value::ScalarList(ScalarKind::U16, elements);

        let mut writer = ByteWriter::new();
        encode_value(&mut writer, WireCategory::ScalarList(ScalarKind::U16), &value).unwrap();
        let bytes = writer.finish();

        let cut = ((bytes.len() as f64) * cut_fraction) as usize;
        let mut reader = ByteReader::new(&bytes[..cut]);
        let result = decode_value(
            &mut reader,
            WireCategory::ScalarList(ScalarKind::U16),
            &CodecLimits::default(),
        );
        if cut == bytes.len() {
            prop_assert!(result.is_ok());
        } else {
            prop_assert!(result.is_err());
        }
    }

    #[test]
    fn prop_garbage_bytes_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        // Decoding arbitrary bytes under every category must fail cleanly
        // or produce a value, never panic.
        for category in [
            WireCategory::Scalar(ScalarKind::Decimal),
            WireCategory::Scalar(ScalarKind::Char),
            WireCategory::ScalarList(ScalarKind::I64),
            WireCategory::Text,
            WireCategory::TextList,
            WireCategory::Image,
            WireCategory::ImageList,
        ] {
            let mut reader = ByteReader::new(&bytes);
            let _ = decode_value(&mut reader, category, &CodecLimits::for_testing());
        }
    }
}
