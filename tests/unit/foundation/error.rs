use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PurikuraError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(PurikuraError::decode("x").to_string().contains("decode error:"));
    assert!(PurikuraError::render("x").to_string().contains("render error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PurikuraError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
