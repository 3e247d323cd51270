use chrono::NaiveDate;
use serde::Serialize;

use crate::blog::detail::PostDetail;
use crate::blog::engine::{CategoryFilter, ListingView, ALL_CATEGORIES};
use crate::config::SiteConfig;
use crate::models::post::Post;
use crate::nav::{self, MobileMenu};
use crate::notice::{Notice, NoticeKind};
use crate::share::{encode_component, ShareLinks};

// ── Slot names the host page provides ──────────────────

pub const SLOT_FEATURED: &str = "featured-post";
pub const SLOT_GRID: &str = "blog-posts";
pub const SLOT_NO_RESULTS: &str = "no-results";
pub const SLOT_LOAD_MORE: &str = "load-more";
pub const SLOT_RELATED: &str = "related-posts";

/// Replacement content for every listing slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingFragments {
    #[serde(rename = "featured-post")]
    pub featured_post: String,
    #[serde(rename = "blog-posts")]
    pub blog_posts: String,
    pub no_results_hidden: bool,
    pub load_more_hidden: bool,
}

/// Field values for the post detail page, keyed after its element ids.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailFragments {
    pub document_title: String,
    pub post_title: String,
    pub post_description: String,
    pub breadcrumb_title: String,
    pub post_category: String,
    pub post_reading_time: String,
    pub article_title: String,
    pub post_author: String,
    pub post_date: String,
    pub featured_image_src: String,
    pub featured_image_alt: String,
    /// Trusted HTML from the data file, inserted as-is.
    pub post_content: String,
    /// `None` hides the whole related-posts section.
    pub related_posts: Option<String>,
    pub share: ShareLinks,
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Long US-style date by default, e.g. "January 5, 2024".
pub fn format_date(date: &NaiveDate, fmt: &str) -> String {
    date.format(fmt).to_string()
}

fn post_url(post: &Post) -> String {
    format!("/blog-post?id={}", encode_component(&post.id))
}

// ── Listing ────────────────────────────────────────────

pub fn listing_fragments(view: &ListingView<'_>, config: &SiteConfig) -> ListingFragments {
    let featured_post = view
        .featured
        .map(|p| featured_html(p, config))
        .unwrap_or_default();

    if view.no_results() {
        return ListingFragments {
            featured_post,
            blog_posts: String::new(),
            no_results_hidden: false,
            load_more_hidden: true,
        };
    }

    let blog_posts = view
        .grid
        .iter()
        .map(|p| post_card(p, config))
        .collect::<Vec<_>>()
        .join("\n");

    ListingFragments {
        featured_post,
        blog_posts,
        no_results_hidden: true,
        load_more_hidden: !view.has_more,
    }
}

pub fn featured_html(post: &Post, config: &SiteConfig) -> String {
    let title = html_escape(&post.title);
    let url = post_url(post);
    format!(
        "<div class=\"featured-card\">\
         <div class=\"featured-media\">\
         <img src=\"{image}\" alt=\"{title}\" loading=\"lazy\">\
         <span class=\"badge badge-primary\">{category}</span>\
         </div>\
         <div class=\"featured-body\">\
         <div class=\"featured-label\">Featured Post</div>\
         <h2><a href=\"{url}\">{title}</a></h2>\
         <p class=\"featured-excerpt\">{excerpt}</p>\
         <div class=\"blog-meta\">\
         <span class=\"blog-author\">{author}</span>\
         <time datetime=\"{iso}\">{date}</time>\
         <span class=\"reading-time\">{reading}</span>\
         </div>\
         <a href=\"{url}\" class=\"btn-primary\">Read Full Article</a>\
         </div>\
         </div>",
        image = html_escape(&post.image),
        title = title,
        category = html_escape(&post.category),
        url = url,
        excerpt = html_escape(&post.excerpt),
        author = html_escape(&post.author),
        iso = post.date.format("%Y-%m-%d"),
        date = format_date(&post.date, &config.date_format),
        reading = html_escape(&post.reading_time),
    )
}

pub fn post_card(post: &Post, config: &SiteConfig) -> String {
    let title = html_escape(&post.title);
    format!(
        "<article class=\"blog-card\">\
         <div class=\"blog-thumb\">\
         <img src=\"{image}\" alt=\"{title}\" loading=\"lazy\">\
         <span class=\"badge badge-primary\">{category}</span>\
         </div>\
         <div class=\"blog-body\">\
         <h3><a href=\"{url}\">{title}</a></h3>\
         <p class=\"blog-excerpt\">{excerpt}</p>\
         <div class=\"blog-meta\">\
         <span class=\"blog-author\">{author}</span>\
         <time datetime=\"{iso}\">{date}</time>\
         <span class=\"reading-time\">{reading}</span>\
         </div>\
         </div>\
         </article>",
        image = html_escape(&post.image),
        title = title,
        category = html_escape(&post.category),
        url = post_url(post),
        excerpt = html_escape(&post.excerpt),
        author = html_escape(&post.author),
        iso = post.date.format("%Y-%m-%d"),
        date = format_date(&post.date, &config.date_format),
        reading = html_escape(&post.reading_time),
    )
}

/// Full-width error block shown in the grid when the collection never loaded.
pub fn load_error_html(message: &str, config: &SiteConfig) -> String {
    format!(
        "<div class=\"blog-load-error\">\
         <h3>Blog Posts Unavailable</h3>\
         <p class=\"blog-load-error-message\">{message}</p>\
         <p>This usually happens when the site runs without a proper web server, \
         so the post collection cannot be fetched.</p>\
         <div class=\"blog-load-error-hints\">\
         <p><strong>Solutions:</strong></p>\
         <ul>\
         <li>Deploy the site to see full blog functionality</li>\
         <li>Use a local web server (not the file:// protocol)</li>\
         <li>Check your internet connection</li>\
         <li>Ensure {source} exists</li>\
         </ul>\
         </div>\
         </div>",
        message = html_escape(message),
        source = html_escape(&config.posts_source),
    )
}

// ── Detail ─────────────────────────────────────────────

pub fn detail_fragments(detail: &PostDetail<'_>, config: &SiteConfig, page_url: &str) -> DetailFragments {
    let post = detail.post;
    let related_posts = if detail.related.is_empty() {
        None
    } else {
        Some(
            detail
                .related
                .iter()
                .map(|p| post_card(p, config))
                .collect::<Vec<_>>()
                .join("\n"),
        )
    };

    DetailFragments {
        document_title: format!("{} - {}", post.title, config.site_name),
        post_title: post.title.clone(),
        post_description: post.excerpt.clone(),
        breadcrumb_title: post.title.clone(),
        post_category: post.category.clone(),
        post_reading_time: post.reading_time.clone(),
        article_title: post.title.clone(),
        post_author: post.author.clone(),
        post_date: format_date(&post.date, &config.date_format),
        featured_image_src: post.image.clone(),
        featured_image_alt: post.title.clone(),
        post_content: post.content.clone(),
        related_posts,
        share: ShareLinks::new(&post.title, page_url),
    }
}

pub fn notice_html(notice: &Notice) -> String {
    let class = match notice.kind {
        NoticeKind::Success => "notice notice-success",
        NoticeKind::Error => "notice notice-error",
    };
    format!(
        "<div class=\"{}\" role=\"alert\" data-dismiss-after=\"{}\">\
         <span>{}</span>\
         <button type=\"button\" class=\"notice-close\" aria-label=\"Dismiss\" \
         onclick=\"this.parentElement.remove()\">&times;</button>\
         </div>",
        class,
        notice.dismiss_after.as_millis(),
        html_escape(&notice.message)
    )
}

// ── Page shells ────────────────────────────────────────

fn site_header(config: &SiteConfig, current_path: &str) -> String {
    let menu = MobileMenu::default();
    let links: String = nav::mark_active(current_path, &config.nav_links)
        .into_iter()
        .map(|(link, active)| {
            format!(
                "<a href=\"{}\" class=\"nav-link{}\">{}</a>",
                html_escape(&link.href),
                if active { " active" } else { "" },
                html_escape(&link.label)
            )
        })
        .collect::<Vec<_>>()
        .join("");
    format!(
        "<header class=\"site-header\">\
         <a href=\"/\" class=\"site-title\">{}</a>\
         <button type=\"button\" class=\"mobile-menu-button\" aria-label=\"Menu\" aria-expanded=\"{}\">\
         <i class=\"fas {}\"></i></button>\
         <nav class=\"site-nav{}\">{}</nav>\
         </header>",
        html_escape(&config.site_name),
        menu.is_open(),
        menu.icon(),
        if menu.is_open() { " open" } else { "" },
        links
    )
}

fn page_shell(config: &SiteConfig, title: &str, current_path: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         <link rel=\"stylesheet\" href=\"/static/css/site.css\">\n\
         </head>\n<body>\n{header}\n<main>\n{body}\n</main>\n\
         <footer class=\"site-footer\"><p>&copy; {year} {site}</p></footer>\n\
         {nav_script}\n\
         </body>\n</html>",
        title = html_escape(title),
        header = site_header(config, current_path),
        body = body,
        year = chrono::Utc::now().format("%Y"),
        site = html_escape(&config.site_name),
        nav_script = NAV_SCRIPT,
    )
}

fn newsletter_form() -> &'static str {
    r#"<section class="newsletter">
<h3>Subscribe to our newsletter</h3>
<form id="newsletter-form">
<input type="email" name="email" placeholder="your@email.com" required>
<button type="submit">Subscribe</button>
</form>
<p id="newsletter-success" class="hidden">Thanks for subscribing to our newsletter!</p>
</section>"#
}

/// Inputs of the listing page besides the engine output.
pub struct ListingPageContext<'a> {
    pub categories: Vec<&'a str>,
    pub active_category: &'a CategoryFilter,
    pub query: &'a str,
    pub page_number: usize,
    /// `Err` holds a load-failure message shown instead of the posts.
    pub fragments: Result<ListingFragments, String>,
}

pub fn listing_page(config: &SiteConfig, ctx: &ListingPageContext<'_>) -> String {
    let mut buttons = vec![(ALL_CATEGORIES, "All")];
    buttons.extend(ctx.categories.iter().map(|c| (*c, *c)));
    let filter_html: String = buttons
        .iter()
        .map(|(value, label)| {
            let active = ctx.active_category.label() == *value;
            format!(
                "<a href=\"/blog?category={}\" class=\"filter-btn{}\" data-category=\"{}\">{}</a>",
                encode_component(value),
                if active { " active" } else { "" },
                html_escape(value),
                html_escape(label)
            )
        })
        .collect();

    let (featured, grid, no_results_hidden, load_more_hidden) = match &ctx.fragments {
        Ok(f) => (
            f.featured_post.clone(),
            f.blog_posts.clone(),
            f.no_results_hidden,
            f.load_more_hidden,
        ),
        Err(message) => (String::new(), load_error_html(message, config), true, true),
    };

    let hidden = |h: bool| if h { " hidden" } else { "" };

    // A search replaces the category, so only one of them is carried
    let (state_query, state_category) = match ctx.active_category {
        _ if !ctx.query.is_empty() => (ctx.query, ""),
        CategoryFilter::Only(c) => ("", c.as_str()),
        CategoryFilter::All => ("", ""),
    };
    let mut more_href = format!("/blog?page={}", ctx.page_number + 1);
    if !state_query.is_empty() {
        more_href.push_str(&format!("&q={}", encode_component(state_query)));
    } else if !state_category.is_empty() {
        more_href.push_str(&format!("&category={}", encode_component(state_category)));
    }

    let body = format!(
        "<section class=\"blog-controls\">\
         <input type=\"search\" id=\"search-input\" placeholder=\"Search articles...\" value=\"{query}\" \
         data-debounce-ms=\"{debounce}\">\
         <div class=\"blog-filters\">{filters}</div>\
         </section>\
         <section id=\"{slot_featured}\">{featured}</section>\
         <section id=\"{slot_grid}\" class=\"blog-grid\">{grid}</section>\
         <div id=\"{slot_none}\" class=\"blog-no-results{none_hidden}\">\
         <h3>No articles found</h3><p>Try a different search term or category.</p></div>\
         <a id=\"{slot_more}\" href=\"{more_href}\" class=\"btn-secondary{more_hidden}\" \
         data-query=\"{state_query}\" data-category=\"{state_category}\" data-page=\"{page}\">Load More Articles</a>\
         {newsletter}\n{script}",
        query = html_escape(ctx.query),
        debounce = config.search_debounce_ms,
        filters = filter_html,
        slot_featured = SLOT_FEATURED,
        featured = featured,
        slot_grid = SLOT_GRID,
        grid = grid,
        slot_none = SLOT_NO_RESULTS,
        none_hidden = hidden(no_results_hidden),
        slot_more = SLOT_LOAD_MORE,
        more_href = html_escape(&more_href),
        state_query = html_escape(state_query),
        state_category = html_escape(state_category),
        page = ctx.page_number,
        more_hidden = hidden(load_more_hidden),
        newsletter = newsletter_form(),
        script = LISTING_SCRIPT,
    );

    page_shell(config, &format!("Blog - {}", config.site_name), "/blog", &body)
}

pub fn detail_page(config: &SiteConfig, f: &DetailFragments) -> String {
    let related = match &f.related_posts {
        Some(cards) => format!(
            "<section class=\"related\"><h2>Related Articles</h2>\
             <div id=\"{}\" class=\"blog-grid\">{}</div></section>",
            SLOT_RELATED, cards
        ),
        None => String::new(),
    };

    let body = format!(
        "<meta id=\"post-title\" content=\"{title}\">\
         <meta id=\"post-description\" name=\"description\" content=\"{desc}\">\
         <nav class=\"breadcrumb\"><a href=\"/blog\">Blog</a> / <span id=\"breadcrumb-title\">{title}</span></nav>\
         <article class=\"post\">\
         <div class=\"post-header\">\
         <span id=\"post-category\" class=\"badge badge-primary\">{category}</span>\
         <span id=\"post-reading-time\">{reading}</span>\
         <h1 id=\"article-title\">{title}</h1>\
         <div class=\"blog-meta\"><span id=\"post-author\">{author}</span> · <time id=\"post-date\">{date}</time></div>\
         </div>\
         <img id=\"featured-image\" src=\"{image}\" alt=\"{alt}\">\
         <div id=\"post-content\" class=\"post-content\">{content}</div>\
         <div class=\"share-buttons\">\
         <a href=\"{twitter}\" target=\"_blank\" rel=\"noopener\" class=\"share-btn share-twitter\">Twitter</a>\
         <a href=\"{linkedin}\" target=\"_blank\" rel=\"noopener\" class=\"share-btn share-linkedin\">LinkedIn</a>\
         <a href=\"{facebook}\" target=\"_blank\" rel=\"noopener\" class=\"share-btn share-facebook\">Facebook</a>\
         <button type=\"button\" class=\"share-btn copy-link\">Copy Link</button>\
         </div>\
         </article>\
         {related}\n{script}",
        title = html_escape(&f.article_title),
        desc = html_escape(&f.post_description),
        category = html_escape(&f.post_category),
        reading = html_escape(&f.post_reading_time),
        author = html_escape(&f.post_author),
        date = html_escape(&f.post_date),
        image = html_escape(&f.featured_image_src),
        alt = html_escape(&f.featured_image_alt),
        content = f.post_content,
        twitter = html_escape(&f.share.twitter),
        linkedin = html_escape(&f.share.linkedin),
        facebook = html_escape(&f.share.facebook),
        related = related,
        script = COPY_LINK_SCRIPT,
    );

    page_shell(config, &f.document_title, "/blog-post", &body)
}

/// Inline error page used for unknown posts and failed loads on the detail view.
pub fn detail_error_page(config: &SiteConfig, notice: &Notice) -> String {
    let body = format!(
        "<section class=\"post-error\">{}<p><a href=\"/blog\">&larr; Back to the blog</a></p></section>",
        notice_html(notice)
    );
    page_shell(config, &format!("Blog - {}", config.site_name), "/blog-post", &body)
}

pub fn not_found_page(config: &SiteConfig) -> String {
    page_shell(
        config,
        "Page not found",
        "",
        "<section class=\"not-found\"><h1>404</h1><p>Page not found.</p><a href=\"/\">&larr; Home</a></section>",
    )
}

pub fn server_error_page(config: &SiteConfig) -> String {
    page_shell(
        config,
        "Server error",
        "",
        "<section class=\"not-found\"><h1>500</h1><p>Internal server error.</p><a href=\"/\">&larr; Home</a></section>",
    )
}

// ── Contact ────────────────────────────────────────────

pub fn contact_page(config: &SiteConfig) -> String {
    let body = format!(
        "<section class=\"contact\">\
         <h1>Contact Us</h1>\
         <div id=\"contact-notice\"></div>\
         <form id=\"contact-form\" novalidate>\
         <label>Name *<input type=\"text\" name=\"name\" required></label>\
         <label>Email *<input type=\"email\" name=\"email\" required></label>\
         <label>Phone<input type=\"tel\" name=\"phone\"></label>\
         <label>Course<input type=\"text\" name=\"course\"></label>\
         <label>Message *<textarea name=\"message\" rows=\"5\" required></textarea></label>\
         <button type=\"submit\" class=\"btn-primary\">Send Message</button>\
         </form>\
         </section>\
         {newsletter}\n{script}",
        newsletter = newsletter_form(),
        script = CONTACT_SCRIPT,
    );
    page_shell(config, &format!("Contact - {}", config.site_name), "/contact", &body)
}

// Thin adapter: forwards input/clicks to the JSON listing endpoint and swaps slots.
const LISTING_SCRIPT: &str = r#"<script>
(function(){
var input=document.getElementById('search-input');
var grid=document.getElementById('blog-posts'),featured=document.getElementById('featured-post');
var none=document.getElementById('no-results'),more=document.getElementById('load-more');
var state={q:more?more.dataset.query:'',category:more?more.dataset.category:'',
page:more?(parseInt(more.dataset.page)||1):1},timer=null;
function apply(f){
featured.innerHTML=f['featured-post'];grid.innerHTML=f['blog-posts'];
none.classList.toggle('hidden',f.no_results_hidden);more.classList.toggle('hidden',f.load_more_hidden);
}
function load(){
var p=new URLSearchParams();
if(state.category)p.set('category',state.category);
if(state.q)p.set('q',state.q);
p.set('page',state.page);
fetch('/api/posts?'+p.toString()).then(function(r){return r.json()}).then(apply).catch(function(){});
}
if(input)input.addEventListener('input',function(){
clearTimeout(timer);
var q=input.value;
timer=setTimeout(function(){state={q:q,category:'',page:1};load();},parseInt(input.dataset.debounceMs||'300'));
});
document.querySelectorAll('.filter-btn').forEach(function(b){
b.addEventListener('click',function(e){
e.preventDefault();
document.querySelectorAll('.filter-btn').forEach(function(x){x.classList.remove('active')});
b.classList.add('active');
state={q:'',category:b.dataset.category,page:1};load();
});
});
if(more)more.addEventListener('click',function(e){e.preventDefault();state.page+=1;load();});
var nf=document.getElementById('newsletter-form');
if(nf)nf.addEventListener('submit',function(e){
e.preventDefault();
fetch('/api/newsletter',{method:'POST',headers:{'Content-Type':'application/json'},
body:JSON.stringify({email:nf.querySelector('[name=email]').value})})
.then(function(r){return r.json()}).then(function(j){
if(j.success){nf.reset();var s=document.getElementById('newsletter-success');s.classList.remove('hidden');
setTimeout(function(){s.classList.add('hidden')},j.dismiss_after_ms||5000);}
else{alert(j.error);}
});
});
})();
</script>"#;

const COPY_LINK_SCRIPT: &str = r#"<script>
(function(){
var btn=document.querySelector('.copy-link');
if(!btn)return;
btn.addEventListener('click',function(){
var url=window.location.href;
var legacy=function(){var t=document.createElement('textarea');t.value=url;document.body.appendChild(t);
t.select();document.execCommand('copy');document.body.removeChild(t);};
if(navigator.clipboard){navigator.clipboard.writeText(url).catch(legacy);}else{legacy();}
});
})();
</script>"#;

// Posts the contact form as JSON and shows the returned notice for its dismiss time.
const CONTACT_SCRIPT: &str = r#"<script>
(function(){
var form=document.getElementById('contact-form'),box=document.getElementById('contact-notice');
if(!form)return;
function show(kind,msg,ms){
box.innerHTML='';
var n=document.createElement('div');n.className='notice notice-'+kind;n.setAttribute('role','alert');
var t=document.createElement('span');t.textContent=msg;n.appendChild(t);
var c=document.createElement('button');c.type='button';c.className='notice-close';c.innerHTML='&times;';
c.onclick=function(){n.remove()};n.appendChild(c);
box.appendChild(n);setTimeout(function(){n.remove()},ms);
}
form.addEventListener('submit',function(e){
e.preventDefault();
var v=function(k){var el=form.querySelector('[name='+k+']');return el?el.value:''};
var body={name:v('name'),email:v('email'),message:v('message')};
if(v('phone'))body.phone=v('phone');
if(v('course'))body.course=v('course');
fetch('/api/contact',{method:'POST',headers:{'Content-Type':'application/json'},body:JSON.stringify(body)})
.then(function(r){return r.json()}).then(function(j){
if(j.success){form.reset();show('success',j.message,j.dismiss_after_ms||5000);}
else{show('error',j.error,5000);}
}).catch(function(){show('error','Something went wrong. Please try again later.',5000)});
});
})();
</script>"#;

// Mobile menu: mirrors `nav::MobileMenu` (toggle, close on outside or link click).
const NAV_SCRIPT: &str = r#"<script>
(function(){
var btn=document.querySelector('.mobile-menu-button'),nav=document.querySelector('.site-nav');
if(!btn||!nav)return;
var icon=btn.querySelector('i');
function set(open){
nav.classList.toggle('open',open);btn.setAttribute('aria-expanded',open);
icon.classList.toggle('fa-bars',!open);icon.classList.toggle('fa-times',open);
}
btn.addEventListener('click',function(e){e.stopPropagation();set(!nav.classList.contains('open'));});
nav.querySelectorAll('a').forEach(function(a){a.addEventListener('click',function(){set(false)})});
document.addEventListener('click',function(e){if(!nav.contains(e.target)&&!btn.contains(e.target))set(false);});
})();
</script>"#;
