use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::State;
use serde_json::{json, Value};

use crate::blog::page::ListingPage;
use crate::errors::BlogError;
use crate::forms::{ContactForm, Inbox, NewsletterForm};
use crate::notice::Notice;
use crate::render::ListingFragments;
use crate::site::SiteState;

const MAX_PAGE: usize = 500;

// ── Listing fragments ──────────────────────────────────

#[get("/posts?<q>&<category>&<page>")]
pub fn listing(
    state: &State<SiteState>,
    q: Option<&str>,
    category: Option<&str>,
    page: Option<usize>,
) -> Result<Json<ListingFragments>, (Status, Json<Value>)> {
    let collection = state.catalog.as_ref().map_err(|e| {
        (
            Status::ServiceUnavailable,
            Json(json!({ "success": false, "error": e.user_message() })),
        )
    })?;

    let page = page.unwrap_or(1).clamp(1, MAX_PAGE);
    let listing = ListingPage::replay(collection.clone(), &state.config, q, category, page);
    Ok(Json(listing.fragments()))
}

// ── Form submissions ───────────────────────────────────

fn form_response(result: Result<Notice, BlogError>) -> (Status, Json<Value>) {
    match result {
        Ok(notice) => (
            Status::Ok,
            Json(json!({
                "success": true,
                "message": notice.message,
                "dismiss_after_ms": notice.dismiss_after.as_millis() as u64,
            })),
        ),
        Err(e) => {
            log::info!("[forms] rejected: {}", e);
            (
                Status::UnprocessableEntity,
                Json(json!({ "success": false, "error": e.user_message() })),
            )
        }
    }
}

#[post("/contact", format = "json", data = "<form>")]
pub fn contact_submit(inbox: &State<Inbox>, form: Json<ContactForm>) -> (Status, Json<Value>) {
    form_response(inbox.submit_contact(form.into_inner()))
}

#[post("/newsletter", format = "json", data = "<form>")]
pub fn newsletter_submit(inbox: &State<Inbox>, form: Json<NewsletterForm>) -> (Status, Json<Value>) {
    form_response(inbox.subscribe(form.into_inner()))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![listing, contact_submit, newsletter_submit]
}
