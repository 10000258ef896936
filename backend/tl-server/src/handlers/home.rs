use crate::CurrentUser;
use crate::html::pages;

use axum::response::Html;

/// GET /home
pub async fn home(CurrentUser(username): CurrentUser) -> Html<String> {
    Html(pages::home_page(&username))
}
