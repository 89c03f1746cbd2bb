//! Server-rendered admin pages.
//!
//! The admin surface is two small HTML pages rendered from string templates:
//! a login form and the dashboard shell. The dashboard drives the JSON API
//! from inline script; everything dynamic stays in the API handlers.

use crate::domain::Category;

/// Render the login form, optionally with a failure reason.
pub fn login_page(error: Option<&str>) -> String {
    let error_block = error.map_or(String::new(), |reason| {
        format!(
            "<p class=\"error\">{}</p>",
            escape_html(reason)
        )
    });
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>InBrief Admin Login</title>
</head>
<body>
  <h1>InBrief Admin</h1>
  {error_block}
  <form method="post" action="/login">
    <label for="employee_id">Employee ID</label>
    <input id="employee_id" name="employee_id" type="text" required>
    <label for="password">Last 4 digits of phone number</label>
    <input id="password" name="password" type="password" required>
    <button type="submit">Log in</button>
  </form>
</body>
</html>
"#
    )
}

/// Render the dashboard shell for a logged-in admin.
pub fn dashboard_page(display_name: &str) -> String {
    let category_options: String = Category::ALL
        .into_iter()
        .map(|category| format!("      <option>{}</option>\n", category.as_str()))
        .collect();
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>InBrief Dashboard</title>
</head>
<body>
  <header>
    <h1>InBrief Dashboard</h1>
    <p>Signed in as {name}</p>
    <a href="/logout">Log out</a>
  </header>
  <form id="post-form" method="post" action="/api/news" enctype="multipart/form-data">
    <input name="headline" type="text" placeholder="Headline">
    <textarea name="description" placeholder="Description"></textarea>
    <select name="category">
      <option value=""></option>
{category_options}    </select>
    <input name="images" type="file" multiple>
    <button type="submit">Publish</button>
  </form>
  <main id="news-feed" data-source="/api/news/all"></main>
</body>
</html>
"#,
        name = escape_html(display_name)
    )
}

fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_page_omits_error_block_by_default() {
        let page = login_page(None);
        assert!(!page.contains("class=\"error\""));
        assert!(page.contains("name=\"employee_id\""));
        assert!(page.contains("name=\"password\""));
    }

    #[test]
    fn login_page_renders_escaped_error() {
        let page = login_page(Some("Unauthorized <access>"));
        assert!(page.contains("Unauthorized &lt;access&gt;"));
    }

    #[test]
    fn dashboard_lists_every_category() {
        let page = dashboard_page("Ada Lovelace");
        for category in Category::ALL {
            assert!(page.contains(category.as_str()));
        }
    }

    #[test]
    fn dashboard_escapes_the_display_name() {
        let page = dashboard_page("Ada <script>");
        assert!(page.contains("Ada &lt;script&gt;"));
        assert!(!page.contains("Ada <script>"));
    }
}
