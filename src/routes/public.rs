use rocket::response::content::RawHtml;
use rocket::response::Redirect;
use rocket::State;

use crate::blog::detail::{self, DetailOutcome};
use crate::blog::engine::{BlogEngine, CategoryFilter};
use crate::blog::page::ListingPage;
use crate::errors::BlogError;
use crate::notice::Notice;
use crate::render::{self, ListingPageContext};
use crate::site::SiteState;

/// Upper bound on replayed "load more" clicks from the `page` parameter.
const MAX_PAGE: usize = 500;

#[derive(Responder)]
pub enum PageResponse {
    Html(RawHtml<String>),
    Redirect(Redirect),
    #[response(status = 404)]
    NotFound(RawHtml<String>),
    #[response(status = 503)]
    Unavailable(RawHtml<String>),
}

// ── Homepage ───────────────────────────────────────────

#[get("/")]
pub fn homepage() -> Redirect {
    Redirect::to(detail::LISTING_PATH)
}

// ── Blog listing ───────────────────────────────────────

#[get("/blog?<q>&<category>&<page>")]
pub fn blog_list(
    state: &State<SiteState>,
    q: Option<&str>,
    category: Option<&str>,
    page: Option<usize>,
) -> PageResponse {
    let config = &state.config;
    let page = page.unwrap_or(1).clamp(1, MAX_PAGE);

    let html = match &state.catalog {
        Ok(collection) => {
            let listing = ListingPage::replay(collection.clone(), config, q, category, page);
            let ctx = ListingPageContext {
                categories: collection.categories(),
                active_category: listing.active_category(),
                query: q.unwrap_or(""),
                page_number: listing.engine().page_number(),
                fragments: Ok(listing.fragments()),
            };
            render::listing_page(config, &ctx)
        }
        Err(e) => {
            let all = CategoryFilter::All;
            let ctx = ListingPageContext {
                categories: Vec::new(),
                active_category: &all,
                query: "",
                page_number: 1,
                fragments: Err(e.user_message()),
            };
            return PageResponse::Unavailable(RawHtml(render::listing_page(config, &ctx)));
        }
    };

    PageResponse::Html(RawHtml(html))
}

// ── Blog post ──────────────────────────────────────────

#[get("/blog-post?<id>")]
pub fn blog_post(state: &State<SiteState>, id: Option<&str>) -> PageResponse {
    let config = &state.config;

    let collection = match &state.catalog {
        Ok(c) => c.clone(),
        Err(e) => {
            let notice = Notice::error("Failed to load blog post. Please try again later.");
            log::warn!("[blog-post] collection unavailable: {}", e);
            return PageResponse::Unavailable(RawHtml(render::detail_error_page(config, &notice)));
        }
    };

    let engine = BlogEngine::new(collection, config.page_size);
    match detail::resolve(&engine, id, config.related_limit) {
        Ok(DetailOutcome::Redirect(to)) => PageResponse::Redirect(Redirect::to(to)),
        Ok(DetailOutcome::Show(found)) => {
            let page_url = config.post_page_url(&found.post.id);
            let fragments = render::detail_fragments(&found, config, &page_url);
            PageResponse::Html(RawHtml(render::detail_page(config, &fragments)))
        }
        Err(e @ BlogError::NotFound(_)) => {
            log::info!("[blog-post] {}", e);
            let notice = Notice::error(e.user_message());
            PageResponse::NotFound(RawHtml(render::detail_error_page(config, &notice)))
        }
        Err(e) => {
            let notice = Notice::error(e.user_message());
            PageResponse::Unavailable(RawHtml(render::detail_error_page(config, &notice)))
        }
    }
}

// ── Contact ────────────────────────────────────────────

#[get("/contact")]
pub fn contact(state: &State<SiteState>) -> RawHtml<String> {
    RawHtml(render::contact_page(&state.config))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![homepage, blog_list, blog_post, contact]
}
