#![cfg(feature = "juniper")]

// Runs in its own process: the installed codec is process-global, so these
// assertions cannot share a binary with tests relying on the default codec.

use graphql_hashid::juniper::{install_codec, Hashid};
use graphql_hashid::{HashidCodec, HashidConfig};
use juniper::{
    execute_sync, graphql_object, graphql_value, DefaultScalarValue, EmptyMutation,
    EmptySubscription, RootNode, Value, Variables,
};
use std::sync::Arc;

struct Query;

#[graphql_object]
impl Query {
    fn id() -> Hashid {
        Hashid::new(42)
    }

    fn user(id: Hashid) -> i32 {
        id.id() as i32
    }
}

type Schema = RootNode<'static, Query, EmptyMutation<()>, EmptySubscription<()>>;

#[test]
fn installed_codec_drives_the_scalar() {
    let codec = Arc::new(HashidCodec::from_config(&HashidConfig::new("installed salt")).unwrap());
    install_codec(codec.clone()).unwrap();
    assert!(install_codec(codec.clone()).is_err());

    let schema = Schema::new(Query, EmptyMutation::new(), EmptySubscription::new());

    // output side uses the installed parameters
    let (data, errors) = execute_sync("{ id }", None, &schema, &Variables::new(), &()).unwrap();
    assert!(errors.is_empty());
    let token = match data.as_object_value().and_then(|obj| obj.get_field_value("id")) {
        Some(Value::Scalar(DefaultScalarValue::String(token))) => token.clone(),
        other => panic!("expected a string token, got {other:?}"),
    };
    assert_eq!(token, codec.encode(42));

    // input side accepts its own tokens
    let query = format!(r#"{{ user(id: "{}") }}"#, codec.encode(1));
    let (data, errors) = execute_sync(&query, None, &schema, &Variables::new(), &()).unwrap();
    assert!(errors.is_empty());
    assert_eq!(data, graphql_value!({"user": 1}));

    // tokens from the default parameters must not resolve to the original id
    match execute_sync(r#"{ user(id: "jR") }"#, None, &schema, &Variables::new(), &()) {
        Err(_) => (),
        Ok((data, errors)) => {
            assert!(!errors.is_empty() || data != graphql_value!({"user": 1}));
        }
    }
}
