use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BouquetError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(BouquetError::render("x").to_string().contains("render error:"));
    assert!(BouquetError::looping("x").to_string().contains("loop error:"));
    assert!(BouquetError::encode("x").to_string().contains("encode error:"));
    assert!(
        BouquetError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = BouquetError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
