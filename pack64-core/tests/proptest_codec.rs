use proptest::prelude::*;
use pack64_core::{
    decode, encode, encode_with, header_exponent, scale_unit, CodecConfig, Pack64Error,
    PackedVector, Rounding,
};

const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Vectors whose magnitudes span from deep underflow up to just below the
/// overflow boundary (2^39 keeps the widened peak under 2^40).
fn scaled_vector() -> impl Strategy<Value = Vec<f64>> {
    (prop::collection::vec(-1.0f64..1.0, 0..64), -70i32..40)
        .prop_map(|(values, power)| values.into_iter().map(|x| x * 2f64.powi(power)).collect())
}

// Property 1: every component comes back within half a quantization step
proptest! {
    #[test]
    fn prop_roundtrip_error_bound(vector in scaled_vector()) {
        let packed = encode(&vector).unwrap();
        let decoded = decode(&packed).unwrap();
        let half_step = scale_unit(header_exponent(&packed).unwrap()) / 2.0;

        prop_assert_eq!(decoded.len(), vector.len());
        for (i, (&original, &restored)) in vector.iter().zip(decoded.iter()).enumerate() {
            let diff = (original - restored).abs();
            prop_assert!(
                diff <= half_step,
                "Roundtrip error at index {}: {} vs {} (diff {}, bound {})",
                i, original, restored, diff, half_step
            );
        }
    }
}

// Property 2: truncation loses less than one full step
proptest! {
    #[test]
    fn prop_truncate_error_bound(vector in scaled_vector()) {
        let config = CodecConfig::new().with_rounding(Rounding::Truncate);
        let packed = encode_with(&vector, &config).unwrap();
        let decoded = decode(&packed).unwrap();
        let step = scale_unit(header_exponent(&packed).unwrap());

        for (&original, &restored) in vector.iter().zip(decoded.iter()) {
            prop_assert!((original - restored).abs() < step);
            // Truncation never moves a value away from zero
            prop_assert!(restored.abs() <= original.abs());
        }
    }
}

// Property 3: output shape and symbol set
proptest! {
    #[test]
    fn prop_output_shape(vector in scaled_vector()) {
        let packed = encode(&vector).unwrap();
        prop_assert_eq!(packed.len(), 1 + 3 * vector.len());
        prop_assert_eq!(packed.len() % 3, 1);
        prop_assert!(packed.chars().all(|c| ALPHABET.contains(c)), "Foreign symbol in {}", packed);

        let exponent = header_exponent(&packed).unwrap();
        prop_assert!((-40..=23).contains(&exponent));
    }
}

// Property 4: any well-formed string decodes, component count follows length
proptest! {
    #[test]
    fn prop_decode_total_on_well_formed(
        digits in prop::collection::vec(0usize..64, 0..30).prop_map(|v| {
            let mut v = v;
            v.truncate(1 + 3 * (v.len().saturating_sub(1) / 3));
            if v.is_empty() { v.push(0); }
            v
        })
    ) {
        let packed: String = digits.iter().map(|&d| ALPHABET.as_bytes()[d] as char).collect();
        let decoded = decode(&packed).unwrap();
        prop_assert_eq!(decoded.len(), (packed.len() - 1) / 3);
        prop_assert!(decoded.iter().all(|x| x.is_finite()));
        prop_assert!(packed.parse::<PackedVector>().is_ok());
    }
}

// Property 5: non-finite components are reported by position
proptest! {
    #[test]
    fn prop_non_finite_reported(
        mut vector in prop::collection::vec(-1e6f64..1e6, 1..32),
        slot in any::<prop::sample::Index>(),
        bad in prop_oneof![Just(f64::NAN), Just(f64::INFINITY), Just(f64::NEG_INFINITY)]
    ) {
        let index = slot.index(vector.len());
        vector[index] = bad;
        match encode(&vector) {
            Err(Pack64Error::InvalidValue { index: reported, .. }) => prop_assert_eq!(reported, index),
            other => prop_assert!(false, "expected InvalidValue, got {:?}", other),
        }
    }
}

// Property 6: determinism
proptest! {
    #[test]
    fn prop_determinism(vector in scaled_vector()) {
        prop_assert_eq!(encode(&vector).unwrap(), encode(&vector).unwrap());
    }
}

// Property 7: decoding then re-encoding reproduces the packed string
proptest! {
    #[test]
    fn prop_reencode_stable(vector in scaled_vector()) {
        let packed = encode(&vector).unwrap();
        let decoded = decode(&packed).unwrap();
        let repacked = encode(&decoded).unwrap();
        prop_assert_eq!(&repacked, &packed, "Re-encoding {:?} changed the string", decoded);
    }
}
