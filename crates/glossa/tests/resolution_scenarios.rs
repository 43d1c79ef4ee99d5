#![forbid(unsafe_code)]

//! End-to-end resolution scenarios against locale JSON.

use glossa::{
    Fragment, FragmentArgs, I18n, I18nError, ResourceNode, ResourceTree, Substitutions,
};

fn home_store() -> I18n {
    let resources = ResourceTree::from_json_str(
        r#"{
            "home": {
                "title": "Welcome",
                "status": "We are currently {{currentStatus}}",
                "key": "Plain",
                "a": { "b": { "c": "Deep" } }
            },
            "ns": { "k": "Hi {{x}}" }
        }"#,
    )
    .unwrap();
    I18n::new("en", "home", resources)
}

#[test]
fn welcome_scenario() {
    let i18n = home_store();
    assert_eq!(i18n.t("title", None).unwrap(), "Welcome");

    let err = i18n.t("missing", None).unwrap_err();
    assert!(err.to_string().contains("home.missing"), "{err}");

    assert_eq!(i18n.t("", None), Err(I18nError::EmptyKey));
}

#[test]
fn status_scenario() {
    let i18n = home_store();
    let subs = Substitutions::new().with("currentStatus", "open");
    assert_eq!(
        i18n.t("status", Some(&subs)).unwrap(),
        "We are currently open"
    );

    let err = i18n.t("status", None).unwrap_err();
    assert_eq!(
        err,
        I18nError::SubstitutionCountMismatch {
            namespace: "home".into(),
            key: "status".into(),
            expected: 1,
            passed: 0,
        }
    );
    let message = err.to_string();
    assert!(message.contains("(1)") && message.contains("(0)"), "{message}");
}

#[test]
fn namespace_forms_agree() {
    let i18n = home_store();
    let plain = i18n.t("key", None).unwrap();
    assert_eq!(plain, i18n.t("home:key", None).unwrap());
    assert_eq!(plain, i18n.t_ns("home", "key", None).unwrap());
    assert_eq!(plain, i18n.t(":key", None).unwrap());
}

#[test]
fn dotted_path_descends() {
    let i18n = home_store();
    assert_eq!(i18n.t("a.b.c", None).unwrap(), "Deep");
    assert!(matches!(
        i18n.t("a.b", None),
        Err(I18nError::StringNotFound { .. })
    ));
    assert!(matches!(
        i18n.t("a.b.c.d", None),
        Err(I18nError::StringNotFound { .. })
    ));
}

#[test]
fn round_trip_with_extra_substitution() {
    let i18n = home_store();
    let subs = Substitutions::from([("x", "Bob")]);
    assert_eq!(i18n.t("ns:k", Some(&subs)).unwrap(), "Hi Bob");

    let subs = Substitutions::from([("x", "Bob"), ("y", "extra")]);
    assert!(matches!(
        i18n.t("ns:k", Some(&subs)),
        Err(I18nError::SubstitutionCountMismatch {
            expected: 1,
            passed: 2,
            ..
        })
    ));
}

#[test]
fn override_reaches_namespace_with_colon() {
    let resources = ResourceTree::new().with_namespace(
        "app:v2",
        [("title", ResourceNode::from("Second edition"))],
    );
    let i18n = I18n::new("en", "app:v2", resources);
    assert_eq!(i18n.t_ns("app:v2", "title", None).unwrap(), "Second edition");
    assert_eq!(i18n.t("title", None).unwrap(), "Second edition");
    // As a prefix, only "app" is the namespace.
    assert_eq!(
        i18n.t("app:v2:title", None),
        Err(I18nError::NamespaceNotFound {
            namespace: "app".into()
        })
    );
}

#[test]
fn fragment_override_reaches_namespace_with_colon() {
    let resources =
        ResourceTree::new().with_namespace("app:v2", [("k", ResourceNode::from("Hi {{x}}"))]);
    let i18n = I18n::new("en", "home", resources);
    let subs = Substitutions::new().with("x", 1);
    assert_eq!(i18n.t_ns("app:v2", "k", Some(&subs)).unwrap(), "Hi 1");

    let args = FragmentArgs::new().with("x", 1_u32);
    let fragments = i18n.resolve_fragments_ns("app:v2", "k", &args).unwrap();
    assert_eq!(fragments, vec![Fragment::Text("Hi "), Fragment::Content(&1), Fragment::Text("")]);

    assert_eq!(
        i18n.resolve_fragments("app:v2:k", &args),
        Err(I18nError::NamespaceNotFound {
            namespace: "app".into()
        })
    );
    assert_eq!(
        i18n.resolve_fragments_ns("app:v2", "k", &FragmentArgs::<u32>::new()),
        Err(I18nError::SubstitutionCountMismatch {
            namespace: "app:v2".into(),
            key: "k".into(),
            expected: 1,
            passed: 0,
        })
    );
}

#[test]
fn fragments_carry_rich_content() {
    #[derive(Debug, PartialEq)]
    struct Bold(&'static str);

    let resources = ResourceTree::new().with_namespace(
        "shop",
        [("stock", ResourceNode::from("We have {{count}} items"))],
    );
    let i18n = I18n::new("en", "shop", resources);
    let args = FragmentArgs::new().with("count", Bold("5"));

    assert_eq!(
        i18n.resolve_fragments("stock", &args).unwrap(),
        vec![
            Fragment::Text("We have "),
            Fragment::Content(&Bold("5")),
            Fragment::Text(" items"),
        ]
    );
}

#[test]
fn reinitialization_is_observed() {
    let mut i18n = home_store();
    let next = ResourceTree::new().with_namespace("home", [("title", ResourceNode::from("Willkommen"))]);
    i18n.init("de", "home", next);
    assert_eq!(i18n.lang(), "de");
    assert_eq!(i18n.t("title", None).unwrap(), "Willkommen");
    assert!(matches!(
        i18n.t("status", None),
        Err(I18nError::StringNotFound { .. })
    ));
}

#[test]
fn readers_share_the_store_across_threads() {
    let i18n = home_store();
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                assert_eq!(i18n.t("title", None).unwrap(), "Welcome");
            });
        }
    });
}
