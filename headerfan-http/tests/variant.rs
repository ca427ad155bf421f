use headerfan_http::{case_variant, variant_capacity, CaseVariants};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

#[test]
fn set_cookie_spellings() {
    assert_eq!("set-cookie", case_variant("set-cookie", 0));
    assert_eq!("Set-cookie", case_variant("set-cookie", 1));
    assert_eq!("sEt-cookie", case_variant("set-cookie", 2));
    assert_eq!("SET-COOKIE", case_variant("set-cookie", 511));
    assert_eq!("set-cookie", case_variant("SET-COOKIE", 512));
}

#[test]
fn fifty_spellings_are_distinct() {
    let variations = (0..50)
        .map(|i| case_variant("set-cookie", i))
        .collect::<Vec<_>>();

    for variant in &variations {
        assert_eq!("set-cookie", variant.to_lowercase());
    }
    for (i, a) in variations.iter().enumerate() {
        for (j, b) in variations.iter().enumerate() {
            if i != j {
                assert_ne!(a, b);
            }
        }
    }
}

#[test]
fn iterates_every_spelling() {
    let all = CaseVariants::new("Set-Cookie").collect::<Vec<_>>();
    assert_eq!(512, all.len());
    assert_eq!("set-cookie", all[0]);
    assert_eq!("SET-COOKIE", all[511]);

    let mut sorted = all.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(512, sorted.len());

    assert_eq!(vec!["-"], CaseVariants::new("-").collect::<Vec<_>>());
}

#[quickcheck]
fn case_insensitively_equal(name: String, index: u64) -> bool {
    case_variant(&name, index).eq_ignore_ascii_case(&name)
}

#[quickcheck]
fn injective_within_capacity(name: String, i: u64, j: u64) -> TestResult {
    let capacity = variant_capacity(&name);
    if capacity == 1 || capacity == u64::MAX {
        return TestResult::discard();
    }
    let (i, j) = (i % capacity, j % capacity);
    if i == j {
        return TestResult::discard();
    }
    TestResult::from_bool(case_variant(&name, i) != case_variant(&name, j))
}

#[quickcheck]
fn index_zero_is_lowercase(name: String) -> bool {
    case_variant(&name, 0) == name.to_ascii_lowercase()
}
