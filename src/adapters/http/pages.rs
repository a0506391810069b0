//! Server-rendered entry points. Protected pages redirect to their login
//! surface instead of returning an error.

use axum::{
    Router,
    extract::State,
    http::{HeaderMap, header::ACCEPT_LANGUAGE},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    adapters::http::{app_state::AppState, session::scope_token},
    application::language::UserLanguage,
    domain::entities::scope::Scope,
    use_cases::media::HealthReport,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(room_login_page))
        .route("/room", get(room_page))
        .route("/admin", get(admin_login_page))
        .route("/admin/health", get(admin_health_page))
}

fn is_authenticated(app_state: &AppState, jar: &CookieJar, scope: Scope) -> bool {
    app_state
        .gate_use_cases
        .is_authenticated(scope, scope_token(jar, scope))
}

fn language(headers: &HeaderMap) -> UserLanguage {
    UserLanguage::from_raw(headers.get(ACCEPT_LANGUAGE).and_then(|v| v.to_str().ok()))
}

async fn room_login_page(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
) -> Response {
    if is_authenticated(&app_state, &jar, Scope::Room) {
        return Redirect::to(Scope::Room.landing_path()).into_response();
    }
    Html(render_login(Scope::Room, language(&headers))).into_response()
}

async fn room_page(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
) -> Response {
    if !is_authenticated(&app_state, &jar, Scope::Room) {
        return Redirect::to(Scope::Room.login_path()).into_response();
    }
    Html(render_room(
        app_state.media_use_cases.room_name(),
        language(&headers),
    ))
    .into_response()
}

async fn admin_login_page(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
) -> Response {
    if is_authenticated(&app_state, &jar, Scope::Admin) {
        return Redirect::to(Scope::Admin.landing_path()).into_response();
    }
    Html(render_login(Scope::Admin, language(&headers))).into_response()
}

async fn admin_health_page(
    State(app_state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
) -> Response {
    if !is_authenticated(&app_state, &jar, Scope::Admin) {
        return Redirect::to(Scope::Admin.login_path()).into_response();
    }
    let report = app_state.media_use_cases.health_report().await;
    Html(render_health(&report, language(&headers))).into_response()
}

// ============================================================================
// Copy
// ============================================================================

struct LoginCopy {
    title: &'static str,
    subtitle: &'static str,
    label: &'static str,
    placeholder: &'static str,
    submit: &'static str,
    checking: &'static str,
    wrong_password: &'static str,
    server_error: &'static str,
    failed: &'static str,
    network_error: &'static str,
}

fn login_copy(scope: Scope, lang: UserLanguage) -> LoginCopy {
    match (scope, lang) {
        (Scope::Room, UserLanguage::Ru) => LoginCopy {
            title: "Leo Meet",
            subtitle: "Введи пароль и зайди в комнату звонка.",
            label: "Пароль комнаты",
            placeholder: "Введите пароль",
            submit: "Войти в комнату",
            checking: "Проверяем...",
            wrong_password: "Неверный пароль",
            server_error: "Ошибка конфигурации сервера: проверь env-переменные",
            failed: "Не удалось войти",
            network_error: "Ошибка сети, попробуй снова",
        },
        (Scope::Room, UserLanguage::En) => LoginCopy {
            title: "Leo Meet",
            subtitle: "Enter the password to join the call room.",
            label: "Room password",
            placeholder: "Enter password",
            submit: "Join room",
            checking: "Checking...",
            wrong_password: "Wrong password",
            server_error: "Server misconfigured: check environment variables",
            failed: "Could not sign in",
            network_error: "Network error, try again",
        },
        (Scope::Admin, UserLanguage::Ru) => LoginCopy {
            title: "Admin",
            subtitle: "Доступ только для владельца.",
            label: "Админ-пароль",
            placeholder: "Введите админ-пароль",
            submit: "Войти в админку",
            checking: "Проверяем...",
            wrong_password: "Неверный админ-пароль",
            server_error: "Ошибка авторизации администратора",
            failed: "Ошибка авторизации администратора",
            network_error: "Ошибка сети, попробуй снова",
        },
        (Scope::Admin, UserLanguage::En) => LoginCopy {
            title: "Admin",
            subtitle: "Owner access only.",
            label: "Admin password",
            placeholder: "Enter admin password",
            submit: "Sign in",
            checking: "Checking...",
            wrong_password: "Wrong admin password",
            server_error: "Admin sign-in failed",
            failed: "Admin sign-in failed",
            network_error: "Network error, try again",
        },
    }
}

fn endpoint(scope: Scope) -> &'static str {
    match scope {
        Scope::Room => "/api/auth",
        Scope::Admin => "/api/admin-auth",
    }
}

// ============================================================================
// Rendering
// ============================================================================

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn page(lang: UserLanguage, title: &str, body: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
</head>
<body>
<main>
{body}
</main>
</body>
</html>
"#,
        lang = lang.as_str(),
        title = escape_html(title),
        body = body,
    )
}

fn render_login(scope: Scope, lang: UserLanguage) -> String {
    let copy = login_copy(scope, lang);
    // 5xx responses show the server's own message when it has one.
    let body = format!(
        r#"<section class="card">
<h1>{title}</h1>
<p>{subtitle}</p>
<form id="login">
<label for="password">{label}</label>
<input id="password" type="password" autocomplete="current-password" placeholder="{placeholder}" required>
<button type="submit">{submit}</button>
<div class="error" id="error" role="alert"></div>
</form>
</section>
<script>
document.getElementById("login").addEventListener("submit", async (event) => {{
  event.preventDefault();
  const button = event.target.querySelector("button");
  const error = document.getElementById("error");
  error.textContent = "";
  button.disabled = true;
  button.textContent = {checking};
  try {{
    const response = await fetch("{endpoint}", {{
      method: "POST",
      headers: {{ "Content-Type": "application/json" }},
      body: JSON.stringify({{ password: document.getElementById("password").value }})
    }});
    if (response.ok) {{
      window.location.assign("{landing}");
      return;
    }}
    const payload = await response.json().catch(() => null);
    if (response.status === 401) {{
      error.textContent = {wrong_password};
    }} else if (response.status >= 500) {{
      error.textContent = (payload && payload.error) || {server_error};
    }} else {{
      error.textContent = {failed};
    }}
  }} catch (_) {{
    error.textContent = {network_error};
  }} finally {{
    button.disabled = false;
    button.textContent = {submit_js};
  }}
}});
</script>"#,
        title = escape_html(copy.title),
        subtitle = escape_html(copy.subtitle),
        label = escape_html(copy.label),
        placeholder = escape_html(copy.placeholder),
        submit = escape_html(copy.submit),
        submit_js = js_string(copy.submit),
        checking = js_string(copy.checking),
        endpoint = endpoint(scope),
        landing = scope.landing_path(),
        wrong_password = js_string(copy.wrong_password),
        server_error = js_string(copy.server_error),
        failed = js_string(copy.failed),
        network_error = js_string(copy.network_error),
    );
    page(lang, copy.title, &body)
}

fn render_room(room_name: &str, lang: UserLanguage) -> String {
    let (heading, join, leave, invalid_name, join_failed) = match lang {
        UserLanguage::Ru => (
            "Комната",
            "Подключиться",
            "Выйти из комнаты",
            "Имя должно быть минимум 2 символа",
            "Не удалось подключиться к звонку",
        ),
        UserLanguage::En => (
            "Room",
            "Join",
            "Leave room",
            "Name must be at least 2 characters",
            "Could not join the call",
        ),
    };

    // The media client bundle listens for `leo-meet:ticket` and owns the call UI.
    let body = format!(
        r#"<section class="card">
<h1>{heading}</h1>
<p>{room}</p>
<form id="join">
<input id="name" maxlength="30" required>
<button type="submit">{join}</button>
<button type="button" id="leave">{leave}</button>
<div class="error" id="error" role="alert"></div>
</form>
<div id="call"></div>
</section>
<script>
document.getElementById("join").addEventListener("submit", async (event) => {{
  event.preventDefault();
  const error = document.getElementById("error");
  const name = document.getElementById("name").value.trim().replace(/\s+/g, " ");
  if (name.length < 2) {{
    error.textContent = {invalid_name};
    return;
  }}
  const response = await fetch("/api/external-media-token", {{
    method: "POST",
    headers: {{ "Content-Type": "application/json" }},
    body: JSON.stringify({{ name }})
  }});
  const payload = await response.json().catch(() => null);
  if (!response.ok || !payload) {{
    error.textContent = (payload && payload.error) || {join_failed};
    return;
  }}
  window.dispatchEvent(new CustomEvent("leo-meet:ticket", {{ detail: payload }}));
}});
document.getElementById("leave").addEventListener("click", async () => {{
  await fetch("/api/auth", {{ method: "DELETE" }});
  window.location.assign("/");
}});
</script>"#,
        heading = escape_html(heading),
        room = escape_html(room_name),
        join = escape_html(join),
        leave = escape_html(leave),
        invalid_name = js_string(invalid_name),
        join_failed = js_string(join_failed),
    );
    page(lang, heading, &body)
}

fn render_health(report: &HealthReport, lang: UserLanguage) -> String {
    let (heading, room_label, participants_label, logout) = match lang {
        UserLanguage::Ru => ("Admin Health", "Комната", "Активных участников", "Выйти"),
        UserLanguage::En => ("Admin Health", "Room", "Active participants", "Log out"),
    };

    let checks: String = report
        .checks
        .iter()
        .map(|check| {
            format!(
                r#"<li data-ok="{ok}"><span>{label}</span> <strong>{status}</strong></li>"#,
                ok = check.ok,
                label = escape_html(&check.label),
                status = if check.ok { "OK" } else { "Missing" },
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let body = format!(
        r#"<section class="card">
<h1>{heading}</h1>
<button type="button" id="logout">{logout}</button>
<p>{room_label}: {room}</p>
<article>{participants_label}: {count}</article>
<ul>
{checks}
</ul>
</section>
<script>
document.getElementById("logout").addEventListener("click", async () => {{
  await fetch("/api/admin-auth", {{ method: "DELETE" }});
  window.location.assign("/admin");
}});
</script>"#,
        heading = escape_html(heading),
        logout = escape_html(logout),
        room_label = escape_html(room_label),
        room = escape_html(&report.room_name),
        participants_label = escape_html(participants_label),
        count = report.participant_count,
        checks = checks,
    );
    page(lang, heading, &body)
}

/// JSON string literal safe to embed inside a `<script>` block.
fn js_string(raw: &str) -> String {
    serde_json::to_string(raw)
        .unwrap_or_else(|_| "\"\"".to_string())
        .replace('<', "\\u003c")
}
