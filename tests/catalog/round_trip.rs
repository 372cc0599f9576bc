//! Round-trip properties between the resolver and the encoder

use proptest::prelude::*;
use pronouns_catalog::{CanonicalOptions, Catalog, Encoder, resolve};
use pronouns_foundation::{Number, PronounRecord};

#[test]
fn catalog_full_round_trip() {
    let catalog = Catalog::reference();
    let encoder = Encoder::new(catalog.clone());
    for entry in catalog.iter() {
        let full = encoder.to_canonical_string(entry.record(), CanonicalOptions::full());
        assert_eq!(&resolve(&catalog, &full, false).unwrap(), entry.record(), "{full}");
    }
}

#[test]
fn catalog_shortened_round_trip() {
    let catalog = Catalog::reference();
    let encoder = Encoder::new(catalog.clone());
    for entry in catalog.iter() {
        for number in [Number::Singular, Number::Plural] {
            let record = entry.record().with_number(number);
            let short = encoder.to_canonical_string(&record, CanonicalOptions::shortened());
            assert_eq!(resolve(&catalog, &short, true).unwrap(), record, "{short}");
        }
    }
}

#[test]
fn xe_variants_stay_distinct() {
    let catalog = Catalog::reference();
    let encoder = Encoder::new(catalog.clone());
    let xir: PronounRecord = "xe/xem/xir/xyrs/xemself".parse().unwrap();
    let xyr: PronounRecord = "xe/xem/xyr/xyrs/xemself".parse().unwrap();
    let short_xir = encoder.to_canonical_string(&xir, CanonicalOptions::shortened());
    let short_xyr = encoder.to_canonical_string(&xyr, CanonicalOptions::shortened());
    assert_ne!(short_xir, short_xyr);
    assert_eq!(resolve(&catalog, &short_xir, true).unwrap(), xir);
    assert_eq!(resolve(&catalog, &short_xyr, true).unwrap(), xyr);
}

proptest! {
    /// Custom sets survive both the full and the shortened encoding.
    #[test]
    fn custom_round_trip(values in prop::collection::vec("[a-z]{1,7}", 5), plural in any::<bool>()) {
        let catalog = Catalog::reference();
        let encoder = Encoder::new(catalog.clone());
        let segments: Vec<&str> = values.iter().map(String::as_str).collect();
        let number = if plural { Number::Plural } else { Number::Singular };
        let record = PronounRecord::from_segments(&segments).unwrap().with_number(number);

        for options in [CanonicalOptions::full(), CanonicalOptions::shortened()] {
            let path = encoder.to_canonical_string(&record, options);
            let back = resolve(&catalog, &path, true);
            prop_assert!(back.is_ok(), "{} did not resolve", path);
            if let Ok(back) = back {
                prop_assert_eq!(back, record.clone());
            }
        }
    }
}
