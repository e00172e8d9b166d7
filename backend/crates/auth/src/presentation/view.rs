//! Account pages
//!
//! Re-rendered forms keep every value the user typed except passwords.

use axum::response::Html;
use platform::html::{escape, notice, page};

use crate::domain::validation::{Field, FieldErrors};

/// State of the login form
#[derive(Debug, Default)]
pub struct LoginView<'a> {
    pub username: &'a str,
    pub remember_me: bool,
    pub errors: Option<&'a FieldErrors>,
    /// Form-level error
    pub message: Option<&'a str>,
    /// One-shot notice carried over from the previous request
    pub notice: Option<&'a str>,
}

/// State of the registration form
#[derive(Debug, Default)]
pub struct RegisterView<'a> {
    pub full_name: &'a str,
    pub email: &'a str,
    pub username: &'a str,
    pub errors: Option<&'a FieldErrors>,
    pub message: Option<&'a str>,
}

pub fn login_page(view: &LoginView<'_>) -> Html<String> {
    let checked = if view.remember_me { " checked" } else { "" };
    let body = format!(
        "<h1>Log in</h1>\n{notice}{message}\
         <form method=\"post\" action=\"/account/login\">\n\
         {username}{password}\
         <p><label><input type=\"checkbox\" name=\"remember_me\" value=\"true\"{checked}> Remember me</label></p>\n\
         <p><button type=\"submit\">Log in</button></p>\n\
         </form>\n\
         <p><a href=\"/account/register\">Create an account</a></p>",
        notice = notice("notice", view.notice),
        message = notice("error", view.message),
        username = input(Field::Username, "text", view.username, view.errors),
        password = input(Field::Password, "password", "", view.errors),
    );
    page("Log in", &body)
}

pub fn register_page(view: &RegisterView<'_>) -> Html<String> {
    let body = format!(
        "<h1>Register</h1>\n{message}\
         <form method=\"post\" action=\"/account/register\">\n\
         {full_name}{email}{username}{password}{confirm}\
         <p><button type=\"submit\">Register</button></p>\n\
         </form>\n\
         <p><a href=\"/account/login\">Already have an account? Log in</a></p>",
        message = notice("error", view.message),
        full_name = input(Field::FullName, "text", view.full_name, view.errors),
        email = input(Field::Email, "email", view.email, view.errors),
        username = input(Field::Username, "text", view.username, view.errors),
        password = input(Field::Password, "password", "", view.errors),
        confirm = input(Field::ConfirmPassword, "password", "", view.errors),
    );
    page("Register", &body)
}

pub fn logout_page() -> Html<String> {
    page(
        "Log out",
        "<h1>Log out</h1>\n\
         <form method=\"post\" action=\"/account/logout\">\n\
         <p><button type=\"submit\">Log out</button></p>\n\
         </form>",
    )
}

fn input(field: Field, kind: &str, value: &str, errors: Option<&FieldErrors>) -> String {
    let error = errors
        .and_then(|e| e.get(field))
        .map(|msg| format!("<span class=\"field-error\">{}</span>", escape(msg)))
        .unwrap_or_default();

    format!(
        "<p><label for=\"{name}\">{label}</label>\n\
         <input id=\"{name}\" name=\"{name}\" type=\"{kind}\" value=\"{value}\">{error}</p>\n",
        name = field,
        label = field.label(),
        value = escape(value),
    )
}
