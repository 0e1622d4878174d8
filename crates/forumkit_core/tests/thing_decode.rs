use forumkit_core::{
    decode_things, Comment, DecodeError, Entity, JsonFailureCategory, Post, SkipStats, ThingKind,
    User, MAX_REPLY_DEPTH,
};

const MIXED: &str = include_str!("fixtures/things_mixed.json");

#[test]
fn decodes_each_kind_into_its_own_bucket() {
    let things = decode_things(MIXED.as_bytes()).unwrap();

    assert_eq!(things.count(ThingKind::Comment), 2);
    assert_eq!(things.count(ThingKind::Post), 1);
    assert_eq!(things.count(ThingKind::Account), 1);
    assert_eq!(things.count(ThingKind::Subreddit), 1);
    assert_eq!(things.count(ThingKind::ModAction), 1);
    assert_eq!(things.count(ThingKind::More), 1);
    assert_eq!(things.len(), 7);
    assert_eq!(
        things.skipped,
        SkipStats {
            unknown_kind: 2,
            malformed: 1,
        }
    );

    let comment_names: Vec<_> = things.comments.iter().map(|c| c.fullname.as_str()).collect();
    assert_eq!(comment_names, vec!["t1_a1", "t1_a2"]);

    assert_eq!(things.posts[0].upvote_ratio, 0.97);
    assert_eq!(things.posts[0].number_of_comments, 3);
    assert_eq!(things.subreddits[0].name, "helloworldtestt");
    assert_eq!(things.subreddits[0].active_user_count, None);
    assert_eq!(things.mod_actions[0].moderator, "v_95");
    assert_eq!(things.mores[0].children, vec!["m1".to_string()]);
}

#[test]
fn user_fullname_is_derived_from_id() {
    let things = decode_things(MIXED.as_bytes()).unwrap();
    let user: &User = &things.bucket::<User>()[0];
    assert_eq!(user.name, "testuser");
    assert_eq!(user.fullname(), "t2_164ab8");
    assert_eq!(user.post_karma, 10);
    assert!(user.has_verified_email);
}

#[test]
fn comment_and_post_scenario_decodes_both() {
    let input = br#"[{"kind":"t1","data":{"name":"t1_b","parent_id":"t3_x","body":"hi"}},{"kind":"t3","data":{"name":"t3_x","title":"post"}}]"#;
    let things = decode_things(input).unwrap();

    assert_eq!(things.bucket::<Comment>().len(), 1);
    assert_eq!(things.bucket::<Comment>()[0].fullname(), "t1_b");
    assert_eq!(things.bucket::<Post>().len(), 1);
    assert_eq!(things.bucket::<Post>()[0].fullname(), "t3_x");
    assert_eq!(things.skipped.total(), 0);
}

#[test]
fn malformed_elements_do_not_disturb_other_buckets() {
    let clean = br#"[
        {"kind":"t3","data":{"name":"t3_a","title":"a"}},
        {"kind":"t3","data":{"name":"t3_b","title":"b"}}
    ]"#;
    let noisy = br#"[
        {"kind":"t1","data":{"name":"t1_x","score":{"nested":true}}},
        {"kind":"t3","data":{"name":"t3_a","title":"a"}},
        {"kind":"more","data":{"children":"not-a-list"}},
        "stray string",
        {"kind":"t3","data":{"name":"t3_b","title":"b"}},
        {"kind":"t2","data":"oops"},
        {"kind":"mystery","data":{}}
    ]"#;

    let clean = decode_things(clean).unwrap();
    let noisy = decode_things(noisy).unwrap();

    assert_eq!(noisy.posts, clean.posts);
    assert!(noisy.comments.is_empty());
    assert!(noisy.mores.is_empty());
    assert!(noisy.users.is_empty());
    assert_eq!(noisy.skipped.malformed, 4);
    assert_eq!(noisy.skipped.unknown_kind, 1);
}

#[test]
fn n_comments_keep_array_order() {
    let children: Vec<String> = (0..25)
        .map(|i| format!(r#"{{"kind":"t1","data":{{"name":"t1_c{i}","parent_id":"t3_p"}}}}"#))
        .collect();
    let listing = format!(
        r#"{{"kind":"Listing","data":{{"children":[{}],"after":"t1_c24","before":null}}}}"#,
        children.join(",")
    );

    let listing = forumkit_core::decode_listing(listing.as_bytes()).unwrap();
    let comments = listing.comments();
    assert_eq!(comments.len(), 25);
    for (index, comment) in comments.items.iter().enumerate() {
        assert_eq!(comment.fullname, format!("t1_c{index}"));
    }
}

#[test]
fn empty_array_decodes_to_empty_set() {
    let things = decode_things(b"[]").unwrap();
    assert!(things.is_empty());
    assert_eq!(things.skipped.total(), 0);
}

#[test]
fn invalid_outer_payload_is_fatal() {
    let err = decode_things(b"[{\"kind\":\"t1\",").unwrap_err();
    assert!(matches!(err, DecodeError::Json(_)));
    assert_eq!(err.category(), Some(JsonFailureCategory::Eof));

    let err = decode_things(br#"{"kind":"t1","data":{}}"#).unwrap_err();
    assert_eq!(err.category(), Some(JsonFailureCategory::Data));
    assert_eq!(err.position().map(|(line, _)| line), Some(1));

    let err = decode_things(b"null").unwrap_err();
    assert_eq!(err.category(), Some(JsonFailureCategory::Data));

    let err = decode_things(b"not json").unwrap_err();
    assert_eq!(err.category(), Some(JsonFailureCategory::Syntax));
}

fn nested_reply_chain(levels: usize) -> String {
    let mut payload = String::from("[");
    for level in 0..levels - 1 {
        payload.push_str(&format!(
            r#"{{"kind":"t1","data":{{"name":"t1_n{level}","replies":{{"kind":"Listing","data":{{"children":["#
        ));
    }
    payload.push_str(&format!(
        r#"{{"kind":"t1","data":{{"name":"t1_n{}"}}}}"#,
        levels - 1
    ));
    for _ in 0..levels - 1 {
        payload.push_str("]}}}}");
    }
    payload.push(']');
    payload
}

fn chain_length(root: &Comment) -> usize {
    let mut length = 1;
    let mut current = root;
    while let Some(child) = current.replies.comments.first() {
        length += 1;
        current = child;
    }
    length
}

#[test]
fn deep_reply_nesting_is_cut_off_without_failing() {
    let payload = nested_reply_chain(300);

    let things = decode_things(payload.as_bytes()).unwrap();
    assert_eq!(things.comments.len(), 1);
    assert_eq!(things.skipped.total(), 0);
    assert_eq!(chain_length(&things.comments[0]), MAX_REPLY_DEPTH);

    let again = decode_things(payload.as_bytes()).unwrap();
    assert_eq!(chain_length(&again.comments[0]), MAX_REPLY_DEPTH);
}

#[test]
fn nesting_within_limit_is_kept_whole() {
    let payload = nested_reply_chain(MAX_REPLY_DEPTH);
    let things = decode_things(payload.as_bytes()).unwrap();
    assert_eq!(chain_length(&things.comments[0]), MAX_REPLY_DEPTH);

    let payload = nested_reply_chain(5);
    let things = decode_things(payload.as_bytes()).unwrap();
    assert_eq!(chain_length(&things.comments[0]), 5);
}
