//! Integration test: settings text through resolution to rewritten markup and links.
//!
//! Mirrors how a render pipeline drives the crate: one session per unit,
//! environment supplied as a lookup, markup and link values passed through.

use std::borrow::Cow;
use std::collections::HashMap;

use linksync_core::rules::{parse_condition_patterns, parse_host_map, select_active_pattern};
use linksync_core::{
    rewrite_anchors, rewrite_url, Alterable, Link, LinkOptions, ResolvedConfig, RewriteSession,
    Settings,
};

fn settings() -> Settings {
    Settings {
        enabled: true,
        condition_pattern: "IS_DOCKSAL=1, http://{{hostname}}.docksal.site/\nIS_STAGE=1, https://stage.{{hostname}}".into(),
        search_replace: "stage-mysite.com, mysite.com\nold.partner.org, partner".into(),
    }
}

fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn docksal_markup_scenario() {
    let resolved = ResolvedConfig::resolve(&settings(), &env(&[("IS_DOCKSAL", "1")]));
    assert_eq!(resolved.active_pattern, "http://{{hostname}}.docksal.site");

    let out = rewrite_anchors(
        r#"<a href="https://stage-mysite.com/foo?x=1">x</a>"#,
        &resolved.active_pattern,
        &resolved.host_map,
    );
    assert!(out.changed);
    assert_eq!(
        out.html,
        r#"<a href="http://mysite.com.docksal.site/foo?x=1">x</a>"#
    );
}

#[test]
fn internal_only_markup_is_byte_identical() {
    let resolved = ResolvedConfig::resolve(&settings(), &env(&[("IS_DOCKSAL", "1")]));
    let input = "<nav><a href='/'>Home</a> | <a href=\"/blog?page=2\">Blog</a></nav>";
    let out = rewrite_anchors(input, &resolved.active_pattern, &resolved.host_map);
    assert!(!out.changed);
    assert!(matches!(out.html, Cow::Borrowed(s) if s == input));
}

#[test]
fn no_matching_environment_means_no_rewrite() {
    let resolved = ResolvedConfig::resolve(&settings(), &env(&[("IS_DOCKSAL", "0")]));
    assert_eq!(resolved.active_pattern, "");
    for url in [
        "https://stage-mysite.com/",
        "https://old.partner.org/a?b#c",
        "/local",
    ] {
        assert_eq!(resolved.rewrite_url(url), url);
    }
}

#[test]
fn first_condition_wins_when_several_match() {
    let resolved = ResolvedConfig::resolve(
        &settings(),
        &env(&[("IS_DOCKSAL", "1"), ("IS_STAGE", "1")]),
    );
    assert_eq!(resolved.active_pattern, "http://{{hostname}}.docksal.site");

    let resolved = ResolvedConfig::resolve(&settings(), &env(&[("IS_STAGE", "1")]));
    assert_eq!(
        resolved.rewrite_url("http://old.partner.org/x?y=1#z"),
        "https://stage.partner/x?y=1#z"
    );
}

#[test]
fn https_pattern_preserves_path_query_fragment() {
    let map = parse_host_map("a.example, b.example");
    for url in [
        "http://a.example/",
        "http://a.example/p/q.html?one=1&two=2#frag",
        "https://a.example?only=query",
    ] {
        let out = rewrite_url(url, "https://{{hostname}}", &map);
        let before = linksync_core::UrlComponents::parse(url).unwrap();
        let after = linksync_core::UrlComponents::parse(&out).unwrap();
        assert_eq!(after.scheme.as_deref(), Some("https"));
        assert_eq!(after.host.as_deref(), Some("b.example"));
        assert_eq!(after.path, before.path);
        assert_eq!(after.query, before.query);
        assert_eq!(after.fragment, before.fragment);
    }
}

#[test]
fn duplicate_hosts_use_last_declaration() {
    let map = parse_host_map("dup.com, first\ndup.com, last");
    assert_eq!(
        rewrite_url("https://dup.com/x", "https://{{hostname}}", &map),
        "https://last/x"
    );
}

#[test]
fn trailing_slash_pattern_only_when_env_matches() {
    let list = parse_condition_patterns("IS_DOCKSAL=1, http://{{hostname}}.docksal.site/");
    assert_eq!(
        select_active_pattern(&list, &env(&[("IS_DOCKSAL", "1")])),
        "http://{{hostname}}.docksal.site"
    );
    assert_eq!(select_active_pattern(&list, &env(&[])), "");
}

#[test]
fn malformed_href_never_panics() {
    let map = parse_host_map("stage-mysite.com, mysite.com");
    for url in ["http://", "https://stage-mysite.com:99999/", "http://[broken", "::::"] {
        assert_eq!(rewrite_url(url, "https://{{hostname}}", &map), url);
    }
}

#[test]
fn session_handles_both_hook_kinds() {
    let settings = settings();
    let session = RewriteSession::new(&settings, env(&[("IS_DOCKSAL", "1")]));

    let options = LinkOptions::default().attribute("rel", "noopener");
    let link = Link::from_uri("https://stage-mysite.com/about")
        .unwrap()
        .with_options(options.clone());
    let Alterable::Link(out) = session.alter(Alterable::Link(link)) else {
        panic!("expected a link back");
    };
    assert_eq!(out.uri(), "http://mysite.com.docksal.site/about");
    assert_eq!(out.options(), &options);

    let internal = Link::internal("/contact");
    assert_eq!(session.alter_link(internal.clone()), internal);

    let html = r#"<p><a href="https://old.partner.org/">partner</a></p>"#;
    assert_eq!(
        session.alter_markup(html),
        r#"<p><a href="http://partner.docksal.site/">partner</a></p>"#
    );
}

#[test]
fn separate_sessions_see_their_own_environment() {
    let settings = settings();
    let local = RewriteSession::new(&settings, env(&[("IS_DOCKSAL", "1")]));
    let stage = RewriteSession::new(&settings, env(&[("IS_STAGE", "1")]));
    let url = "https://stage-mysite.com/";
    assert_eq!(local.rewrite_url(url), "http://mysite.com.docksal.site/");
    assert_eq!(stage.rewrite_url(url), "https://stage.mysite.com/");
}
