use std::collections::HashMap;

use did_parser_nom::DidUrl;

macro_rules! test_cases_positive {
    ($($name:ident: $input:expr, $expected_did:expr, $expected_method:expr, $expected_id:expr, $expected_path:expr, $expected_fragment:expr, $expected_queries:expr, $expected_service:expr)*) => {
        $(
            #[test]
            fn $name() {
                let parsed_did = DidUrl::parse($input.to_string()).unwrap();

                assert_eq!(parsed_did.did(), $expected_did, "DID");
                assert_eq!(parsed_did.method(), $expected_method, "Method");
                assert_eq!(parsed_did.id(), $expected_id, "ID");
                assert_eq!(parsed_did.path(), $expected_path, "Path");
                assert_eq!(parsed_did.fragment(), $expected_fragment, "Fragment");
                assert_eq!(parsed_did.queries(), $expected_queries, "Queries");
                assert_eq!(parsed_did.service(), $expected_service, "Service");
            }
        )*
    };
}

test_cases_positive! {
    test_case1:
        "did:example:namespace:123456789abcdefghi",
        "did:example:namespace:123456789abcdefghi",
        "example",
        "namespace:123456789abcdefghi",
        None,
        None,
        HashMap::new(),
        None

    test_case2:
        "did:example:namespace:123456789abcdefghi/path",
        "did:example:namespace:123456789abcdefghi",
        "example",
        "namespace:123456789abcdefghi",
        Some("/path"),
        None,
        HashMap::new(),
        None

    test_case3:
        "did:example:123456789abcdefghi/path?query1=value1&query2=value2",
        "did:example:123456789abcdefghi",
        "example",
        "123456789abcdefghi",
        Some("/path"),
        None,
        {
            vec![
                ("query1".to_string(), "value1".to_string()),
                ("query2".to_string(), "value2".to_string()),
            ].into_iter().collect()
        },
        None

    test_case4:
        "did:example:123456789abcdefghi/path?query=value#fragment",
        "did:example:123456789abcdefghi",
        "example",
        "123456789abcdefghi",
        Some("/path"),
        Some("fragment"),
        {
            vec![
                ("query".to_string(), "value".to_string()),
            ].into_iter().collect()
        },
        None

    test_case5:
        "did:example:123456789abcdefghi?service=agent&relativeRef=/credentials#degree",
        "did:example:123456789abcdefghi",
        "example",
        "123456789abcdefghi",
        None,
        Some("degree"),
        {
            vec![
                ("service".to_string(), "agent".to_string()),
                ("relativeRef".to_string(), "/credentials".to_string()),
            ].into_iter().collect()
        },
        Some("agent")

    test_case6:
        "did:example:123456789abcdefghi;service=hub",
        "did:example:123456789abcdefghi",
        "example",
        "123456789abcdefghi",
        None,
        None,
        HashMap::new(),
        Some("hub")

    test_case7:
        "did:example:123456789abcdefghi;service=hub;version-id=2/some/path",
        "did:example:123456789abcdefghi",
        "example",
        "123456789abcdefghi",
        Some("/some/path"),
        None,
        HashMap::new(),
        Some("hub")

    test_case8:
        "did:example:123456789abcdefghi?query1=value1?query2=value2",
        "did:example:123456789abcdefghi",
        "example",
        "123456789abcdefghi",
        None,
        None,
        {
            vec![
                ("query1".to_string(), "value1".to_string()),
                ("query2".to_string(), "value2".to_string()),
            ].into_iter().collect()
        },
        None

    test_case9:
        "did:example:123456789abcdefghi?query=",
        "did:example:123456789abcdefghi",
        "example",
        "123456789abcdefghi",
        None,
        None,
        {
            vec![
                ("query".to_string(), "".to_string()),
            ].into_iter().collect()
        },
        None

    test_case10:
        "did:web:example.com%3A8443:user:alice?service=files#main",
        "did:web:example.com%3A8443:user:alice",
        "web",
        "example.com%3A8443:user:alice",
        None,
        Some("main"),
        {
            vec![
                ("service".to_string(), "files".to_string()),
            ].into_iter().collect()
        },
        Some("files")

    test_case11:
        "did:example:123456789abcdefghi/path?query1=value1&query2",
        "did:example:123456789abcdefghi",
        "example",
        "123456789abcdefghi",
        Some("/path"),
        None,
        {
            vec![
                ("query1".to_string(), "value1".to_string()),
                ("query2".to_string(), "".to_string()),
            ].into_iter().collect()
        },
        None

    test_case12:
        "did:example:123?service=agent&versionTime",
        "did:example:123",
        "example",
        "123",
        None,
        None,
        {
            vec![
                ("service".to_string(), "agent".to_string()),
                ("versionTime".to_string(), "".to_string()),
            ].into_iter().collect()
        },
        Some("agent")

    test_case13:
        "did:example:123/",
        "did:example:123",
        "example",
        "123",
        Some("/"),
        None,
        HashMap::new(),
        None

    test_case14:
        "did:example:123/a//b",
        "did:example:123",
        "example",
        "123",
        Some("/a//b"),
        None,
        HashMap::new(),
        None

    test_case15:
        "did:example:123?",
        "did:example:123",
        "example",
        "123",
        None,
        None,
        HashMap::new(),
        None

    test_case16:
        "did:example:123?versionId#key-1",
        "did:example:123",
        "example",
        "123",
        None,
        Some("key-1"),
        {
            vec![
                ("versionId".to_string(), "".to_string()),
            ].into_iter().collect()
        },
        None
}
