use ghsearch::app::detail::DetailSession;
use ghsearch::app::search::SearchSession;
use ghsearch::app::state::FetchLifecycle;
use ghsearch::github::models::{SearchResultSet, UserDetail, UserSummary, max_page};

fn make_results(logins: &[&str], total_count: u64) -> SearchResultSet {
    SearchResultSet {
        items: logins
            .iter()
            .enumerate()
            .map(|(i, login)| UserSummary {
                id: i as u64 + 1,
                login: login.to_string(),
                avatar_url: format!("https://avatars.githubusercontent.com/u/{}", i + 1),
                html_url: format!("https://github.com/{}", login),
            })
            .collect(),
        total_count,
    }
}

fn make_detail(login: &str) -> UserDetail {
    UserDetail {
        login: login.into(),
        name: None,
        avatar_url: format!("https://avatars.githubusercontent.com/{}", login),
        bio: None,
        location: None,
        public_repos: 1,
        followers: 2,
        following: 3,
        html_url: format!("https://github.com/{}", login),
        created_at: None,
    }
}

/// Session that has a successful first page for `query` with `total` hits.
fn loaded_session(query: &str, total: u64) -> SearchSession {
    let mut session = SearchSession::new();
    let req = session.trigger_search(query).unwrap();
    session.apply_results(req.token, make_results(&["a", "b"], total));
    session
}

// --- max_page ---

#[test]
fn test_max_page_rounds_up() {
    assert_eq!(max_page(955), 96);
    assert_eq!(max_page(10), 1);
    assert_eq!(max_page(11), 2);
}

#[test]
fn test_max_page_is_capped() {
    assert_eq!(max_page(2000), 100);
    assert_eq!(max_page(1000), 100);
}

#[test]
fn test_max_page_of_empty_search() {
    assert_eq!(max_page(0), 0);
}

// --- trigger_search ---

#[test]
fn test_initial_search_state() {
    let session = SearchSession::new();
    assert_eq!(session.query(), "");
    assert_eq!(session.page(), 1);
    assert_eq!(session.lifecycle(), &FetchLifecycle::Idle);
    assert!(session.results().is_none());
}

#[test]
fn test_trigger_sets_trimmed_query_and_issues_fetch() {
    let mut session = SearchSession::new();
    let req = session.trigger_search("  octocat  ").unwrap();

    assert_eq!(session.query(), "octocat");
    assert_eq!(session.page(), 1);
    assert!(session.is_loading());
    assert_eq!(req.query, "octocat");
    assert_eq!(req.page, 1);
}

#[test]
fn test_trigger_new_query_resets_page() {
    let mut session = loaded_session("octocat", 955);
    let req = session.change_page(7).unwrap();
    session.apply_results(req.token, make_results(&["c"], 955));
    assert_eq!(session.page(), 7);

    let req = session.trigger_search("torvalds").unwrap();
    assert_eq!(session.query(), "torvalds");
    assert_eq!(session.page(), 1);
    assert_eq!(req.page, 1);
}

#[test]
fn test_trigger_blank_is_noop() {
    let mut session = loaded_session("octocat", 955);

    assert!(session.trigger_search("").is_none());
    assert!(session.trigger_search("   \t").is_none());
    assert_eq!(session.query(), "octocat");
    assert_eq!(session.total_count(), 955);
}

#[test]
fn test_trigger_same_query_is_noop() {
    let mut session = loaded_session("octocat", 955);

    assert!(session.trigger_search("octocat").is_none());
    assert!(session.trigger_search(" octocat ").is_none());
    assert!(matches!(session.lifecycle(), FetchLifecycle::Succeeded(_)));
}

// --- change_page ---

#[test]
fn test_change_page_issues_fetch() {
    let mut session = loaded_session("octocat", 955);
    let req = session.change_page(2).unwrap();

    assert_eq!(session.page(), 2);
    assert_eq!(req.page, 2);
    assert_eq!(req.query, "octocat");
    assert!(session.is_loading());
}

#[test]
fn test_change_page_without_query_is_noop() {
    let mut session = SearchSession::new();
    assert!(session.change_page(2).is_none());
    assert_eq!(session.page(), 1);
}

#[test]
fn test_change_page_to_current_or_zero_is_noop() {
    let mut session = loaded_session("octocat", 955);
    assert!(session.change_page(1).is_none());
    assert!(session.change_page(0).is_none());
    assert_eq!(session.page(), 1);
}

// --- completions ---

#[test]
fn test_success_returns_query_for_history() {
    let mut session = SearchSession::new();
    let req = session.trigger_search("octocat").unwrap();

    let recorded = session.apply_results(req.token, make_results(&["octocat"], 1));
    assert_eq!(recorded.as_deref(), Some("octocat"));
    assert_eq!(session.results().unwrap().items.len(), 1);
    assert_eq!(session.total_count(), 1);
}

#[test]
fn test_failure_yields_empty_results() {
    let mut session = SearchSession::new();
    let req = session.trigger_search("octocat").unwrap();

    assert!(session.apply_error(req.token, "HTTP error! Status: 500".into()));
    assert_eq!(session.error(), Some("HTTP error! Status: 500"));
    assert_eq!(session.results(), Some(&SearchResultSet::empty()));
    assert_eq!(session.max_page(), 0);
}

#[test]
fn test_stale_results_are_discarded() {
    let mut session = SearchSession::new();
    let first = session.trigger_search("octo").unwrap();
    let second = session.trigger_search("octocat").unwrap();

    // Newer response lands first, older one afterwards
    assert!(session.apply_results(second.token, make_results(&["octocat"], 1)).is_some());
    assert!(session.apply_results(first.token, make_results(&["octo", "octo2"], 2)).is_none());

    assert_eq!(session.results().unwrap().items[0].login, "octocat");
}

#[test]
fn test_stale_error_is_discarded() {
    let mut session = SearchSession::new();
    let first = session.trigger_search("octocat").unwrap();
    session.apply_results(first.token, make_results(&["a"], 30));
    let page2 = session.change_page(2).unwrap();

    assert!(!session.apply_error(first.token, "late failure".into()));
    assert!(session.is_loading());
    assert!(session.apply_results(page2.token, make_results(&["b"], 30)).is_some());
}

#[test]
fn test_duplicate_completion_is_ignored() {
    let mut session = SearchSession::new();
    let req = session.trigger_search("octocat").unwrap();

    assert!(session.apply_results(req.token, make_results(&["a"], 1)).is_some());
    assert!(!session.apply_error(req.token, "boom".into()));
    assert_eq!(session.total_count(), 1);
}

#[test]
fn test_clear_drops_query_and_pending_fetch() {
    let mut session = loaded_session("octocat", 955);
    let req = session.change_page(3).unwrap();

    session.clear();
    assert_eq!(session.query(), "");
    assert_eq!(session.page(), 1);
    assert!(session.results().is_none());
    assert_eq!(session.lifecycle(), &FetchLifecycle::Idle);

    assert!(session.apply_results(req.token, make_results(&["x"], 1)).is_none());
    assert!(session.results().is_none());
}

// --- DetailSession ---

#[test]
fn test_select_issues_fetch() {
    let mut detail = DetailSession::new();
    let req = detail.select(Some("octocat".into())).unwrap();

    assert_eq!(req.login, "octocat");
    assert_eq!(detail.selected(), Some("octocat"));
    assert!(detail.lifecycle().is_loading());
}

#[test]
fn test_select_same_login_is_noop() {
    let mut detail = DetailSession::new();
    let req = detail.select(Some("octocat".into())).unwrap();
    detail.apply_detail(req.token, "octocat", make_detail("octocat"));

    assert!(detail.select(Some("octocat".into())).is_none());
    assert_eq!(detail.detail().unwrap().login, "octocat");
}

#[test]
fn test_deselect_clears_detail() {
    let mut detail = DetailSession::new();
    let req = detail.select(Some("octocat".into())).unwrap();
    detail.apply_detail(req.token, "octocat", make_detail("octocat"));

    assert!(detail.select(None).is_none());
    assert_eq!(detail.selected(), None);
    assert!(detail.detail().is_none());
    assert_eq!(detail.lifecycle(), &FetchLifecycle::Idle);
}

#[test]
fn test_rapid_reselect_keeps_latest_detail() {
    let mut detail = DetailSession::new();
    let octocat = detail.select(Some("octocat".into())).unwrap();
    let torvalds = detail.select(Some("torvalds".into())).unwrap();

    assert!(detail.apply_detail(torvalds.token, "torvalds", make_detail("torvalds")));
    assert!(!detail.apply_detail(octocat.token, "octocat", make_detail("octocat")));

    assert_eq!(detail.detail().unwrap().login, "torvalds");
}

#[test]
fn test_rapid_reselect_out_of_order_arrival() {
    let mut detail = DetailSession::new();
    let octocat = detail.select(Some("octocat".into())).unwrap();
    let torvalds = detail.select(Some("torvalds".into())).unwrap();

    assert!(!detail.apply_detail(octocat.token, "octocat", make_detail("octocat")));
    assert!(detail.lifecycle().is_loading());
    assert!(detail.apply_detail(torvalds.token, "torvalds", make_detail("torvalds")));

    assert_eq!(detail.detail().unwrap().login, "torvalds");
}

#[test]
fn test_response_after_deselect_is_discarded() {
    let mut detail = DetailSession::new();
    let req = detail.select(Some("octocat".into())).unwrap();
    detail.select(None);

    assert!(!detail.apply_detail(req.token, "octocat", make_detail("octocat")));
    assert_eq!(detail.lifecycle(), &FetchLifecycle::Idle);
}

#[test]
fn test_detail_failure_clears_detail() {
    let mut detail = DetailSession::new();
    let req = detail.select(Some("ghost-user".into())).unwrap();

    assert!(detail.apply_error(req.token, "ghost-user", "Not Found".into()));
    assert!(detail.detail().is_none());
    assert_eq!(detail.lifecycle().error(), Some("Not Found"));
}

#[test]
fn test_detail_completion_for_other_login_is_discarded() {
    let mut detail = DetailSession::new();
    let req = detail.select(Some("octocat".into())).unwrap();

    assert!(!detail.apply_detail(req.token, "torvalds", make_detail("torvalds")));
    assert!(detail.lifecycle().is_loading());
}
