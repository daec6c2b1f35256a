use sparcli::utils::*;

fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_query_fingerprint_deterministic() {
    let endpoint = "https://api.spotify.com/v1/search";
    let parameters = params(&[("type", "artist"), ("q", "muse"), ("limit", "20")]);

    // Same inputs always produce the same key
    let a = query_fingerprint(endpoint, &parameters);
    let b = query_fingerprint(endpoint, &parameters);
    assert_eq!(a, b);

    // Keys carry the response-cache prefix
    assert!(a.starts_with(QUERY_KEY_PREFIX));
}

#[test]
fn test_query_fingerprint_ignores_parameter_order() {
    let endpoint = "https://api.spotify.com/v1/search";
    let ordered = params(&[("limit", "20"), ("q", "muse"), ("type", "artist")]);
    let shuffled = params(&[("type", "artist"), ("limit", "20"), ("q", "muse")]);

    assert_eq!(
        query_fingerprint(endpoint, &ordered),
        query_fingerprint(endpoint, &shuffled)
    );
}

#[test]
fn test_query_fingerprint_distinguishes_queries() {
    let endpoint = "https://api.spotify.com/v1/search";
    let base = params(&[("q", "muse"), ("type", "artist")]);

    // Different endpoint
    assert_ne!(
        query_fingerprint(endpoint, &base),
        query_fingerprint("https://api.spotify.com/v1/artists/x", &base)
    );

    // Different parameter value
    let other_value = params(&[("q", "muses"), ("type", "artist")]);
    assert_ne!(
        query_fingerprint(endpoint, &base),
        query_fingerprint(endpoint, &other_value)
    );

    // Extra parameter
    let extra = params(&[("q", "muse"), ("type", "artist"), ("limit", "1")]);
    assert_ne!(
        query_fingerprint(endpoint, &base),
        query_fingerprint(endpoint, &extra)
    );

    // No parameters at all
    assert_ne!(
        query_fingerprint(endpoint, &base),
        query_fingerprint(endpoint, &[])
    );
}

#[test]
fn test_query_fingerprint_field_boundaries() {
    // Key/value material must not run together across fields
    let endpoint = "https://api.spotify.com/v1/search";
    let joined = params(&[("ab", "cd")]);
    let split = params(&[("a", "bcd")]);

    assert_ne!(
        query_fingerprint(endpoint, &joined),
        query_fingerprint(endpoint, &split)
    );
}

#[test]
fn test_basic_auth_header() {
    // base64("id:secret") == "aWQ6c2VjcmV0"
    assert_eq!(basic_auth_header("id", "secret"), "Basic aWQ6c2VjcmV0");

    // The raw secret never appears in the header value
    let header = basic_auth_header("client", "topsecret");
    assert!(!header.contains("topsecret"));
}

#[test]
fn test_mask_token() {
    // Long tokens keep only head and tail
    let masked = mask_token("BQDWaPUuHYtNKAnMYLYGHfXKQycq1ALqSt7Y");
    assert_eq!(masked, "BQDW…St7Y");
    assert!(!masked.contains("aPUuHYtNK"));

    // Short values are fully redacted
    assert_eq!(mask_token("short"), "********");
    assert_eq!(mask_token(""), "********");
}
