use forumkit_core::{Comment, More, Replies};
use serde_json::{json, Value};

#[test]
fn empty_string_sentinel_decodes_to_empty_container() {
    let comment: Comment =
        serde_json::from_str(r#"{"name":"t1_a","parent_id":"t3_x","replies":""}"#).unwrap();
    assert!(comment.replies.is_empty());
    assert!(!comment.has_more());
}

#[test]
fn null_and_absent_replies_decode_to_empty_container() {
    let with_null: Comment = serde_json::from_str(r#"{"name":"t1_a","replies":null}"#).unwrap();
    let absent: Comment = serde_json::from_str(r#"{"name":"t1_a"}"#).unwrap();
    assert_eq!(with_null.replies, Replies::default());
    assert_eq!(absent.replies, Replies::default());
}

#[test]
fn empty_container_encodes_as_null_not_sentinel() {
    let comment = Comment {
        fullname: "t1_a".to_string(),
        ..Comment::default()
    };
    let json = serde_json::to_value(&comment).unwrap();
    assert_eq!(json["replies"], Value::Null);
    assert_ne!(json["replies"], json!(""));
}

#[test]
fn nested_listing_keeps_comments_and_first_marker() {
    let raw = json!({
        "name": "t1_a",
        "parent_id": "t3_x",
        "replies": {
            "kind": "Listing",
            "data": {
                "after": null,
                "before": null,
                "children": [
                    {"kind": "t1", "data": {"name": "t1_b", "parent_id": "t1_a", "replies": ""}},
                    {"kind": "more", "data": {"name": "t1_m1", "parent_id": "t1_a", "children": ["c"]}},
                    {"kind": "t1", "data": {"name": "t1_c", "parent_id": "t1_a", "replies": ""}},
                    {"kind": "more", "data": {"name": "t1_m2", "parent_id": "t1_a", "children": ["d"]}}
                ]
            }
        }
    });

    let comment: Comment = serde_json::from_str(&raw.to_string()).unwrap();
    let names: Vec<_> = comment
        .replies
        .comments
        .iter()
        .map(|c| c.fullname.as_str())
        .collect();
    assert_eq!(names, vec!["t1_b", "t1_c"]);
    assert_eq!(
        comment.replies.more.as_ref().map(|m| m.fullname.as_str()),
        Some("t1_m1")
    );
    assert!(comment.has_more());
}

#[test]
fn populated_container_encodes_comments_only() {
    let comment = Comment {
        fullname: "t1_a".to_string(),
        replies: Replies {
            comments: vec![Comment {
                fullname: "t1_b".to_string(),
                parent_id: "t1_a".to_string(),
                ..Comment::default()
            }],
            more: Some(More {
                fullname: "t1_m".to_string(),
                children: vec!["x".to_string()],
                ..More::default()
            }),
        },
        ..Comment::default()
    };

    let json = serde_json::to_value(&comment).unwrap();
    let replies = json["replies"].as_array().expect("replies should be an array");
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0]["name"], "t1_b");
    assert_eq!(replies[0]["replies"], Value::Null);
}

#[test]
fn malformed_nested_listing_fails_the_comment() {
    let raw = r#"{"name":"t1_a","replies":{"kind":"Listing","data":{"children":7}}}"#;
    assert!(serde_json::from_str::<Comment>(raw).is_err());
}
