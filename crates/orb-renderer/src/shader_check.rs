//! WGSL validation for tests, using naga's frontend and validator.

pub(crate) fn validate_wgsl(code: &str) -> Result<(), String> {
    let module =
        naga::front::wgsl::parse_str(code).map_err(|e| format!("WGSL parse error: {e:?}"))?;

    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    );
    validator
        .validate(&module)
        .map_err(|e| format!("WGSL validation error: {e:?}"))?;

    Ok(())
}
