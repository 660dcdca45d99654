// SPDX-License-Identifier: MPL-2.0
use admin_shell::app::Shell;
use admin_shell::config::Preferences;
use admin_shell::i18n::registry::I18n;
use admin_shell::router::{title, RouteRecord, Router, NOT_FOUND_PATH};

fn shell_for(lang: &str) -> Shell {
    let prefs = Preferences {
        selected_lang: Some(lang.to_string()),
    };
    let i18n = I18n::new(None, &prefs);
    Shell::with_parts(prefs, i18n, Router::with_default_routes())
}

#[test]
fn test_dashboard_title_follows_the_active_language() {
    let mut shell = shell_for("en");
    shell.navigate("/");
    assert_eq!(shell.document_title(), "Dashboard");

    let mut shell = shell_for("zh-CN");
    shell.navigate("/");
    assert_eq!(shell.document_title(), "仪表盘");
}

#[test]
fn test_unmatched_paths_redirect_to_the_not_found_page() {
    let mut shell = shell_for("en");
    for path in ["/no/such/page", "/orders/42/edit", "/x"] {
        let resolution = shell.navigate(path);
        assert_eq!(resolution.path, NOT_FOUND_PATH, "path: {path}");
        assert!(resolution.redirected, "path: {path}");
        assert_eq!(shell.document_title(), "Page Not Found", "path: {path}");
    }
}

#[test]
fn test_non_string_title_metadata_uses_the_default_title() {
    let prefs = Preferences {
        selected_lang: Some("en".to_string()),
    };
    let i18n = I18n::new(None, &prefs);
    let router = Router::new(vec![RouteRecord::new("/odd").named("Odd").title(42)]);
    let mut shell = Shell::with_parts(prefs, i18n, router);

    shell.navigate("/odd");
    assert_eq!(shell.document_title(), title::DEFAULT_TITLE);
}

#[test]
fn test_language_switch_retitles_the_current_route_and_persists() {
    // Keep the persisted preference out of the real config directory.
    let dir = tempfile::tempdir().expect("Failed to create temporary directory");
    std::env::set_var("ADMIN_SHELL_CONFIG_DIR", dir.path());

    let mut shell = shell_for("en");
    shell.navigate("/404");
    assert_eq!(shell.document_title(), "Page Not Found");

    assert!(shell.change_language("zh-CN"));
    assert_eq!(shell.document_title(), "页面不存在");

    let stored = admin_shell::config::load_from_path(&dir.path().join("settings.toml"))
        .expect("Failed to read persisted settings");
    assert_eq!(stored.selected_lang.as_deref(), Some("zh-CN"));
}
