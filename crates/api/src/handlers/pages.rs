//! Static HTML forms for the attendant and admin pages.
//!
//! Submissions from these forms are answered with JSON; the pages carry no
//! templating or client-side logic.

use axum::response::Html;

const LANDING: &str = r#"<!doctype html>
<html><head><title>ParkTrack</title></head>
<body>
<h1>ParkTrack</h1>
<ul>
  <li><a href="/enter">Vehicle entry</a></li>
  <li><a href="/exit">Vehicle exit</a></li>
  <li><a href="/viewcurrent">Parked vehicles and free slots</a></li>
  <li><a href="/adminlogin">Admin reports</a></li>
</ul>
</body></html>"#;

const ENTER_FORM: &str = r#"<!doctype html>
<html><head><title>Vehicle entry</title></head>
<body>
<h1>Vehicle entry</h1>
<form method="post" action="/enter">
  <label>License plate <input name="licensePlate" placeholder="ABC1234" required></label>
  <label>Slot <input name="slotNumber" placeholder="P1" required></label>
  <button type="submit">Park</button>
</form>
</body></html>"#;

const EXIT_FORM: &str = r#"<!doctype html>
<html><head><title>Vehicle exit</title></head>
<body>
<h1>Vehicle exit</h1>
<form method="post" action="/exit">
  <label>License plate <input name="licensePlate" placeholder="ABC1234" required></label>
  <button type="submit">Exit</button>
</form>
</body></html>"#;

const LOGIN_FORM: &str = r#"<!doctype html>
<html><head><title>Admin login</title></head>
<body>
<h1>Admin login</h1>
<form method="post" action="/adminlogin">
  <label>Username <input name="username" required></label>
  <label>Password <input name="password" type="password" required></label>
  <button type="submit">Log in</button>
</form>
</body></html>"#;

/// GET /
pub async fn landing() -> Html<&'static str> {
    Html(LANDING)
}

/// GET /enter
pub async fn enter_form() -> Html<&'static str> {
    Html(ENTER_FORM)
}

/// GET /exit
pub async fn exit_form() -> Html<&'static str> {
    Html(EXIT_FORM)
}

/// GET /adminlogin
pub async fn login_form() -> Html<&'static str> {
    Html(LOGIN_FORM)
}
